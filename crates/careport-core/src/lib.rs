// SPDX-License-Identifier: AGPL-3.0-or-later
//! Careport Core - rich-text document model and flat-text codec
//!
//! This crate provides:
//! - The tree-shaped document model produced by the admin rich-text editor
//! - A deterministic indented-text serializer for spreadsheet export
//! - A two-stage cell parser for spreadsheet import: exact JSON re-hydration,
//!   with a lossy plain-text fallback for hand-typed cells
//! - A generic formatter for the structured metadata exported next to rich text
//! - The service locale set and per-locale value maps

pub mod ast;
pub mod error;
pub mod locale;
pub mod parse;
pub mod render;
pub mod value;

pub use ast::{Document, Mark, Node};
pub use error::{CodecError, Result};
pub use locale::{Locale, LocaleMap};
pub use parse::{parse_cell, parse_exact};
pub use render::serialize;
pub use value::format_value;
