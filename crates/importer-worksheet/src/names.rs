//! Worksheet and column names shared with the spreadsheet conventions.
//!
//! These strings are a wire contract with the worksheets the importer
//! reads; changing them breaks existing spreadsheets.

/// Worksheet holding one row per cancer study.
pub const CANCER_STUDIES_WORKSHEET: &str = "cancer_studies";

/// Key column for stable-id lookups on the cancer studies worksheet.
pub const STABLE_ID_COLUMN: &str = "stableid";

/// Cell value marking a study as present in a portal matrix column.
pub const IN_PORTAL_INDICATOR: &str = "x";

// Each worksheet's id column, for lookups keyed by the worksheet's own
// identifying value rather than the stable id.
const ID_COLUMNS: &[(&str, &str)] = &[(CANCER_STUDIES_WORKSHEET, "cancerstudies")];

/// Resolve the id column configured for a worksheet.
pub fn id_column_for(worksheet: &str) -> Option<&'static str> {
    ID_COLUMNS
        .iter()
        .find(|(name, _)| *name == worksheet)
        .map(|(_, column)| *column)
}
