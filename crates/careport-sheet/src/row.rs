// SPDX-License-Identifier: AGPL-3.0-or-later
//! Sheet rows and accumulated import validation issues

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One spreadsheet row addressed by named cells.
///
/// Doubles as the import reader's input and the export writer's output
/// builder; the binary sheet format on either side is somebody else's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetRow {
    sheet: String,
    number: u32,
    cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn new(sheet: impl Into<String>, number: u32) -> Self {
        Self {
            sheet: sheet.into(),
            number,
            cells: HashMap::new(),
        }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// 1-based spreadsheet row number, as shown to the operator.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn set_cell(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Columns with their cell values, for handing to the sheet writer.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A row-level validation failure reported back to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportIssue {
    pub sheet: String,
    pub row: u32,
    pub message: String,
}

/// Issues accumulated over an entire import.
///
/// Rows keep collecting issues instead of failing fast, so one upload
/// reports every broken cell at once; rows that picked up issues are
/// excluded from persistence by the caller while the rest proceed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    issues: Vec<ImportIssue>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: &SheetRow, message: impl Into<String>) {
        self.issues.push(ImportIssue {
            sheet: row.sheet().to_owned(),
            row: row.number(),
            message: message.into(),
        });
    }

    pub fn issues(&self) -> &[ImportIssue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn row_has_issues(&self, row: &SheetRow) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.sheet == row.sheet() && issue.row == row.number())
    }
}
