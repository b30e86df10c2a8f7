//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant here is fatal for the scene being normalized: the caller never
//! receives a partially populated scene record. Tolerated conditions (unknown
//! keys, malformed lines) are skipped during parsing and never surface as errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported sensor or platform: {value}")]
    UnsupportedSensor { value: String },

    #[error("Band count {count} exceeds the maximum of {max} bands per scene")]
    TooManyBands { count: usize, max: usize },

    #[error("Required metadata field missing or unusable: {field}")]
    IncompleteMetadata { field: &'static str },

    #[error("Projection service unavailable: {reason}")]
    ProjectionUnavailable { reason: String },
}

impl Error {
    pub fn missing(field: &'static str) -> Self {
        Error::IncompleteMetadata { field }
    }
}
