//! Portal-side domain records that feed metadata construction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::metadata::GROUPS_DELIMITER;

/// A cancer study as the portal database holds it.
///
/// This is the shape metadata is derived *from* when a study already exists
/// in the portal, as opposed to the worksheet shapes used during triage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerStudy {
    pub type_of_cancer_id: String,
    pub stable_id: String,
    pub name: String,
    pub description: String,
    pub citation: String,
    pub pmid: String,
    pub groups: BTreeSet<String>,
    pub short_name: String,
}

impl CancerStudy {
    /// Access groups joined into the single `;`-delimited form used by
    /// metadata rows. Ordered set, so the joined string is deterministic.
    pub fn joined_groups(&self) -> String {
        self.groups
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(GROUPS_DELIMITER)
    }
}

/// Tumor type record from the tumor-types worksheet.
///
/// Attached to a study record by the enrichment step; not owned by the
/// record itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TumorTypeMetadata {
    pub tumor_type: String,
    pub name: String,
    pub color: String,
    pub parent: String,
}
