// SPDX-License-Identifier: AGPL-3.0-or-later
//! Locale column mapping
//!
//! A localized field occupies one column per locale, named
//! `{prefix}_{locale}` in [`Locale::ALL`] order. Export renders every locale
//! (absent ones as empty cells); import omits blank cells and collapses a
//! field with no parsed locale at all to `None`, so callers can tell "field
//! entirely unset" from "field set with some locales blank".

use careport_core::{parse_cell, serialize, Document, Locale, LocaleMap};
use tracing::{debug, warn};

use crate::row::{ImportReport, SheetRow};

/// Column name for one locale of a localized field.
pub fn column_name(prefix: &str, locale: Locale) -> String {
    format!("{prefix}_{}", locale.code())
}

/// One locale variant of a localized field on its way out to a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Rich-text body; rendered through the flat-text serializer
    Rich(Document),
    /// Plain localized text, passed through unchanged
    Text(String),
    /// Localized string array, joined with newlines
    Lines(Vec<String>),
}

impl FieldValue {
    fn render(&self) -> String {
        match self {
            FieldValue::Rich(doc) => serialize(doc),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Lines(lines) => lines.join("\n"),
        }
    }
}

/// Flatten a localized field into one `(column, cell)` pair per locale.
pub fn export_field(field: &LocaleMap<FieldValue>, prefix: &str) -> Vec<(String, String)> {
    let columns: Vec<(String, String)> = Locale::ALL
        .into_iter()
        .map(|locale| {
            let cell = field.get(locale).map(FieldValue::render).unwrap_or_default();
            (column_name(prefix, locale), cell)
        })
        .collect();
    debug!(%prefix, locales = field.len(), "exported localized field");
    columns
}

/// Whether any locale of the field renders to a non-empty string. Fields
/// failing this check are treated as absent by downstream validation.
pub fn field_has_value(field: &LocaleMap<FieldValue>) -> bool {
    field.iter().any(|(_, value)| !value.render().is_empty())
}

/// Read a localized rich-text field back out of a row.
///
/// Parse failures are recorded on the report and do not abort the remaining
/// locales, so one row surfaces every broken column at once.
pub fn import_field(
    row: &SheetRow,
    prefix: &str,
    report: &mut ImportReport,
) -> Option<LocaleMap<Document>> {
    let mut field = LocaleMap::new();
    for locale in Locale::ALL {
        let column = column_name(prefix, locale);
        let Some(cell) = row.cell(&column) else {
            continue;
        };
        if cell.trim().is_empty() {
            continue;
        }
        match parse_cell(cell) {
            Ok(doc) => field.set(locale, doc),
            Err(err) => {
                warn!(
                    sheet = %row.sheet(),
                    row = row.number(),
                    %column,
                    %err,
                    "cell failed to parse"
                );
                report.push(row, format!("{column}: {err}"));
            }
        }
    }

    if field.is_empty() {
        None
    } else {
        debug!(
            sheet = %row.sheet(),
            row = row.number(),
            %prefix,
            locales = field.len(),
            "imported localized field"
        );
        Some(field)
    }
}
