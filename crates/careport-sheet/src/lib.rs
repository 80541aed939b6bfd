// SPDX-License-Identifier: AGPL-3.0-or-later
//! Careport Sheet - locale column mapping for bulk content import/export
//!
//! The admin back office moves localized content (article and package
//! bodies, precautions, highlights) through spreadsheet files. This crate
//! flattens per-locale fields into `{prefix}_{locale}` columns on export and
//! reads them back on import, accumulating row-level validation issues
//! instead of failing fast. The spreadsheet binary reader/writer and the
//! persistence layer sit on the other side of [`SheetRow`].

pub mod columns;
pub mod row;

pub use columns::{column_name, export_field, field_has_value, import_field, FieldValue};
pub use row::{ImportIssue, ImportReport, SheetRow};
