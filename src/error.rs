//! API Errors

use thiserror::Error;

/// Failure talking to the items backend.
///
/// Callers treat every variant the same way; the split only feeds the logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    /// Body could not be encoded or decoded
    #[error("invalid JSON body: {0}")]
    Decode(String),
}
