#![deny(unsafe_code)]

//! The cancer study metadata record.
//!
//! One canonical record shape produced from three differently shaped
//! sources: a worksheet row map, a fixed-position properties row, and an
//! existing portal [`CancerStudy`]. Downstream import tooling reads the
//! record through its fields and writes it back out through
//! [`CancerStudyMetadata::properties`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{CancerStudy, TumorTypeMetadata};
use crate::error::{ModelError, Result};

// Property keys used when a record is serialized to key-value form.
pub const CANCER_STUDY_COLUMN_KEY: &str = "CANCERSTUDY";
pub const CANCER_TYPE_COLUMN_KEY: &str = "CANCERTYPE";
pub const STABLE_ID_COLUMN_KEY: &str = "STABLEID";
pub const NAME_COLUMN_KEY: &str = "NAME";
pub const DESCRIPTION_COLUMN_KEY: &str = "DESCRIPTION";
pub const CITATION_COLUMN_KEY: &str = "CITATION";
pub const PMID_COLUMN_KEY: &str = "PMID";
pub const GROUPS_COLUMN_KEY: &str = "GROUPS";
pub const SHORT_NAME_COLUMN_KEY: &str = "SHORTNAME";
pub const CONVERT_COLUMN_KEY: &str = "CONVERT";
pub const REQUIRES_VALIDATION_COLUMN_KEY: &str = "REQUIRESVALIDATION";
pub const UPDATE_TRIAGE_COLUMN_KEY: &str = "UPDATETRIAGE";
pub const READY_FOR_RELEASE_COLUMN_KEY: &str = "READYFORRELEASE";

/// Delimiter between tumor type and center inside a study path.
pub const STUDY_PATH_DELIMITER: &str = "/";

/// Delimiter joining a study's groups into a single cell.
pub const GROUPS_DELIMITER: &str = ";";

/// Canonical filename of a study's on-disk metadata file.
pub const STUDY_METADATA_FILENAME: &str = "meta_study.txt";

// Tags replaced in the description by later pipeline stages.
pub const NUM_CASES_TAG: &str = "<NUM_CASES>";
pub const TUMOR_TYPE_TAG: &str = "<TUMOR_TYPE>";
pub const TUMOR_TYPE_NAME_TAG: &str = "<TUMOR_TYPE_NAME>";

/// Minimum field count of a fixed-position properties row. Columns past
/// this are per-portal matrix columns and are ignored.
pub const WORKSHEET_PROPERTY_COUNT: usize = 13;

/// One worksheet row: lowercase column name to raw cell text.
pub type WorksheetRow = BTreeMap<String, String>;

// The study path column is spelled `cancerstudies` on the worksheet and
// `CANCERSTUDY` in metadata files; row construction accepts either.
const STUDY_PATH_ROW_KEYS: &[&str] = &["cancerstudies", "cancerstudy"];

/// Metadata describing one cancer study.
///
/// Immutable once built; every constructor trims cell text before storing
/// it and parses control flags with [`parse_flag`] semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerStudyMetadata {
    /// Composite `tumorType/center/...` path, delimiter `/`.
    pub study_path: String,
    pub tumor_type: String,
    /// Globally unique study identifier; the record's canonical identity.
    pub stable_id: String,
    /// Second study-path segment. Derived only by [`Self::from_properties`].
    pub center: Option<String>,
    pub name: String,
    pub description: String,
    pub citation: String,
    pub pmid: String,
    /// `;`-joined access groups.
    pub groups: String,
    pub short_name: String,
    pub convert: bool,
    pub requires_validation: bool,
    pub update_triage: bool,
    pub ready_for_release: bool,
}

impl CancerStudyMetadata {
    /// Build a record from a worksheet row map.
    ///
    /// Column names are matched case-insensitively. The nine textual
    /// columns are required; the four flag columns default to `false` when
    /// absent. `center` is not derived on this path.
    pub fn from_worksheet_row(row: &WorksheetRow) -> Result<Self> {
        let cells = fold_columns(row);
        let study_path = STUDY_PATH_ROW_KEYS
            .iter()
            .find_map(|key| cells.get(*key))
            .map(|value| value.trim().to_string())
            .ok_or_else(|| ModelError::MissingColumn {
                column: STUDY_PATH_ROW_KEYS[0].to_string(),
            })?;
        Ok(Self {
            study_path,
            tumor_type: required_cell(&cells, "cancertype")?,
            stable_id: required_cell(&cells, "stableid")?,
            center: None,
            name: required_cell(&cells, "name")?,
            description: required_cell(&cells, "description")?,
            citation: required_cell(&cells, "citation")?,
            pmid: required_cell(&cells, "pmid")?,
            groups: required_cell(&cells, "groups")?,
            short_name: required_cell(&cells, "shortname")?,
            convert: flag_cell(&cells, "convert"),
            requires_validation: flag_cell(&cells, "requiresvalidation"),
            update_triage: flag_cell(&cells, "updatetriage"),
            ready_for_release: flag_cell(&cells, "readyforrelease"),
        })
    }

    /// Build a record from a fixed-position properties row, positions 0-12
    /// in worksheet column order. Anything past position 12 is ignored.
    ///
    /// The study path at position 0 must contain at least a tumor type and
    /// a center segment; the center is taken from segment 1.
    pub fn from_properties<S: AsRef<str>>(properties: &[S]) -> Result<Self> {
        if properties.len() < WORKSHEET_PROPERTY_COUNT {
            return Err(ModelError::PropertiesTooShort {
                expected: WORKSHEET_PROPERTY_COUNT,
                actual: properties.len(),
            });
        }
        let field = |idx: usize| properties[idx].as_ref().trim().to_string();
        let flag = |idx: usize| parse_flag(properties[idx].as_ref());

        let study_path = field(0);
        let segments: Vec<&str> = study_path.split(STUDY_PATH_DELIMITER).collect();
        if segments.len() < 2 {
            return Err(ModelError::MalformedStudyPath { path: study_path });
        }
        let center = segments[1].to_string();

        Ok(Self {
            study_path,
            tumor_type: field(1),
            stable_id: field(2),
            center: Some(center),
            name: field(3),
            description: field(4),
            citation: field(5),
            pmid: field(6),
            groups: field(7),
            short_name: field(8),
            convert: flag(9),
            requires_validation: flag(10),
            update_triage: flag(11),
            ready_for_release: flag(12),
        })
    }

    /// Build a record from a study already present in the portal.
    ///
    /// Freshly derived records are not yet scheduled for import, so all
    /// four control flags start out `false`.
    pub fn from_cancer_study(study_path: impl Into<String>, study: &CancerStudy) -> Self {
        Self {
            study_path: study_path.into(),
            tumor_type: study.type_of_cancer_id.clone(),
            stable_id: study.stable_id.clone(),
            center: None,
            name: study.name.clone(),
            description: study.description.clone(),
            citation: study.citation.clone(),
            pmid: study.pmid.clone(),
            groups: study.joined_groups(),
            short_name: study.short_name.clone(),
            convert: false,
            requires_validation: false,
            update_triage: false,
            ready_for_release: false,
        }
    }

    /// Serialize back to key-value form under the fixed property keys,
    /// flags rendered as literal `true`/`false`.
    ///
    /// Structural inverse of [`Self::from_worksheet_row`]: rebuilding a
    /// record from this map reproduces the record.
    pub fn properties(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (CANCER_STUDY_COLUMN_KEY, self.study_path.clone()),
            (CANCER_TYPE_COLUMN_KEY, self.tumor_type.clone()),
            (STABLE_ID_COLUMN_KEY, self.stable_id.clone()),
            (NAME_COLUMN_KEY, self.name.clone()),
            (DESCRIPTION_COLUMN_KEY, self.description.clone()),
            (CITATION_COLUMN_KEY, self.citation.clone()),
            (PMID_COLUMN_KEY, self.pmid.clone()),
            (GROUPS_COLUMN_KEY, self.groups.clone()),
            (SHORT_NAME_COLUMN_KEY, self.short_name.clone()),
            (CONVERT_COLUMN_KEY, self.convert.to_string()),
            (
                REQUIRES_VALIDATION_COLUMN_KEY,
                self.requires_validation.to_string(),
            ),
            (UPDATE_TRIAGE_COLUMN_KEY, self.update_triage.to_string()),
            (
                READY_FOR_RELEASE_COLUMN_KEY,
                self.ready_for_release.to_string(),
            ),
        ])
    }

    /// Filename of the study's on-disk metadata file.
    pub fn metadata_filename(&self) -> &'static str {
        STUDY_METADATA_FILENAME
    }

    /// Attach the tumor type record looked up for this study.
    pub fn annotate(self, tumor_type: TumorTypeMetadata) -> AnnotatedStudyMetadata {
        AnnotatedStudyMetadata {
            study: self,
            tumor_type,
        }
    }
}

impl fmt::Display for CancerStudyMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stable_id)
    }
}

/// A study record plus the tumor type it resolved to.
///
/// Produced by [`CancerStudyMetadata::annotate`]; the base record itself
/// never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedStudyMetadata {
    pub study: CancerStudyMetadata,
    pub tumor_type: TumorTypeMetadata,
}

/// Parse a worksheet flag cell. Only literal `true` (any case) is true;
/// anything else, including empty text, is `false`. Upstream worksheet
/// data is too uneven for a strict parse.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn fold_columns(row: &WorksheetRow) -> BTreeMap<String, &str> {
    row.iter()
        .map(|(column, value)| (column.trim().to_ascii_lowercase(), value.as_str()))
        .collect()
}

fn required_cell(cells: &BTreeMap<String, &str>, column: &str) -> Result<String> {
    cells
        .get(column)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| ModelError::MissingColumn {
            column: column.to_string(),
        })
}

fn flag_cell(cells: &BTreeMap<String, &str>, column: &str) -> bool {
    cells.get(column).copied().is_some_and(parse_flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parse_accepts_only_literal_true() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" True "));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("truthy"));
    }

    #[test]
    fn column_fold_is_case_insensitive() {
        let mut row = WorksheetRow::new();
        row.insert("StableId".to_string(), "brca_tcga".to_string());
        let cells = fold_columns(&row);
        assert_eq!(cells.get("stableid").copied(), Some("brca_tcga"));
    }
}
