//! Error taxonomy for the BIN lookup pipeline.

use thiserror::Error;

/// Errors that can occur while validating or looking up a BIN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Lookup source unavailable: {0}")]
    LookupUnavailable(String),

    #[error("No record found")]
    NotFound,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if let Some(status) = err.status() {
            format!("HTTP status {status}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            err.to_string()
        };

        Self::LookupUnavailable(reason)
    }
}
