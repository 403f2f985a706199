#![deny(unsafe_code)]

//! The tabular-source boundary.
//!
//! The importer reads study rows from an external spreadsheet service; this
//! module only defines the capability the lookup layer needs from it, plus
//! an in-memory implementation callers can inject in tests.

use std::collections::BTreeMap;

use importer_model::WorksheetRow;

/// Row fetch capability of the external tabular source.
pub trait WorksheetSource {
    /// Fetch the row of `worksheet` whose `column` cell equals `value`.
    ///
    /// Returns `None` when no row matches. The source guarantees at most
    /// one row per unique key column; on duplicate data the behavior is
    /// source-defined (typically first match).
    fn row_by_column_value(
        &self,
        worksheet: &str,
        column: &str,
        value: &str,
    ) -> Option<WorksheetRow>;
}

/// In-memory worksheet collection with first-match row resolution.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorksheetSource {
    worksheets: BTreeMap<String, Vec<WorksheetRow>>,
}

impl InMemoryWorksheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the named worksheet. Column names are expected in
    /// their lowercase worksheet form.
    pub fn push_row(&mut self, worksheet: impl Into<String>, row: WorksheetRow) {
        self.worksheets.entry(worksheet.into()).or_default().push(row);
    }
}

impl WorksheetSource for InMemoryWorksheetSource {
    fn row_by_column_value(
        &self,
        worksheet: &str,
        column: &str,
        value: &str,
    ) -> Option<WorksheetRow> {
        self.worksheets
            .get(worksheet)?
            .iter()
            .find(|row| row.get(column).map(String::as_str) == Some(value))
            .cloned()
    }
}
