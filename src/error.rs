use std::path::PathBuf;
use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The Error type for pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration validation error: {0}")]
    ConfigValidationError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Parquet reading error: {source}")]
    ParquetError {
        #[from]
        source: parquet::errors::ParquetError,
    },

    #[error("Arrow conversion error: {source}")]
    ArrowError {
        #[from]
        source: arrow::error::ArrowError,
    },

    #[error("CSV error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("Serialization/Deserialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    /// The input source could not be opened or did not have the expected shape.
    #[error("Failed to read source '{path}': {reason}")]
    SourceReadError { path: PathBuf, reason: String },

    /// Raised by an annotator for text it cannot tokenize or classify.
    #[error("Annotation error: {0}")]
    AnnotationError(String),

    #[error("Record {index} could not be processed: {source}")]
    RecordFailed {
        index: usize,
        source: Box<PipelineError>,
    },

    #[error("Aborting run at record {index}: {failures} records failed (threshold {threshold})")]
    FailureThresholdExceeded {
        failures: usize,
        threshold: usize,
        index: usize,
    },

    #[error("Failed to write output '{path}': {source}")]
    OutputWriteError {
        path: PathBuf,
        source: Box<PipelineError>,
    },

    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PipelineError {
    /// Wraps any error as a source-read failure for `path`.
    pub fn source_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PipelineError::SourceReadError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
