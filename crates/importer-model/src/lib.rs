pub mod domain;
pub mod error;
pub mod metadata;

pub use domain::{CancerStudy, TumorTypeMetadata};
pub use error::{ModelError, Result};
pub use metadata::{
    AnnotatedStudyMetadata, CancerStudyMetadata, STUDY_METADATA_FILENAME, WORKSHEET_PROPERTY_COUNT,
    WorksheetRow, parse_flag,
};
