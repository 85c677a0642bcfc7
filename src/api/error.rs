//! Errors returned by the registration service client

use crate::state::ErrorMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),

    /// The service refused the submission with per-field messages
    #[error("rejected with {} field error(s)", .0.len())]
    Rejected(ErrorMap),

    /// Non-success status without a structured payload
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// A success response whose body could not be read
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
