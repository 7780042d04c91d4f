//! Error types for assumption resolution and projection

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    /// An assumption value is non-numeric or negative
    #[error("Invalid input for '{key}': {reason}")]
    InvalidInput { key: String, reason: String },

    /// Capacity, horizon or ramp settings make the projection undefined
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoiError {
    pub fn invalid_input(key: impl Into<String>, reason: impl Into<String>) -> Self {
        RoiError::InvalidInput {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoiError>;
