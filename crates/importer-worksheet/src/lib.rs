pub mod find;
pub mod names;
pub mod source;

pub use find::{find_by_stable_id, find_by_study_name};
pub use names::{CANCER_STUDIES_WORKSHEET, IN_PORTAL_INDICATOR, STABLE_ID_COLUMN, id_column_for};
pub use source::{InMemoryWorksheetSource, WorksheetSource};
