//! Keyed lookup of study metadata rows.

use importer_model::{CancerStudyMetadata, ModelError};

use crate::names::{CANCER_STUDIES_WORKSHEET, STABLE_ID_COLUMN, id_column_for};
use crate::source::WorksheetSource;

/// Resolve a study record by its stable id.
///
/// An empty key resolves to `Ok(None)` without querying the source; so
/// does a key no worksheet row matches. A matched row that fails record
/// construction propagates the construction error.
pub fn find_by_stable_id<S: WorksheetSource>(
    source: &S,
    stable_id: &str,
) -> Result<Option<CancerStudyMetadata>, ModelError> {
    fetch(source, STABLE_ID_COLUMN, stable_id)
}

/// Resolve a study record by the cancer studies worksheet's own id column
/// (the study path), with the same empty-key and no-match behavior as
/// [`find_by_stable_id`].
pub fn find_by_study_name<S: WorksheetSource>(
    source: &S,
    study_name: &str,
) -> Result<Option<CancerStudyMetadata>, ModelError> {
    let Some(column) = id_column_for(CANCER_STUDIES_WORKSHEET) else {
        tracing::warn!(
            worksheet = CANCER_STUDIES_WORKSHEET,
            "no id column configured for worksheet"
        );
        return Ok(None);
    };
    fetch(source, column, study_name)
}

fn fetch<S: WorksheetSource>(
    source: &S,
    column: &str,
    value: &str,
) -> Result<Option<CancerStudyMetadata>, ModelError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    match source.row_by_column_value(CANCER_STUDIES_WORKSHEET, column, value) {
        Some(row) => CancerStudyMetadata::from_worksheet_row(&row).map(Some),
        None => {
            tracing::debug!(column, value, "no cancer_studies row matched");
            Ok(None)
        }
    }
}
