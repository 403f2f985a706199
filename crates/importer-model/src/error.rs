#![deny(unsafe_code)]

use thiserror::Error;

/// Construction failures for cancer study metadata.
///
/// All variants are raised fail-fast while building a record; a partially
/// built record is never returned.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("worksheet row is missing required column {column}")]
    MissingColumn { column: String },

    #[error("properties row has {actual} fields, expected at least {expected}")]
    PropertiesTooShort { expected: usize, actual: usize },

    #[error("study path {path:?} has no center segment")]
    MalformedStudyPath { path: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
