//! Error types for the wknd planner.

use thiserror::Error;

/// Errors that can occur in wknd operations.
#[derive(Error, Debug)]
pub enum WkndError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported range (1-9999)")]
    InvalidYear(i32),

    #[error("Event parse error: {0}")]
    EventParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for wknd operations.
pub type WkndResult<T> = Result<T, WkndError>;
