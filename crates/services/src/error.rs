//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::ValidationError;

use crate::interview::Stage;

/// Errors emitted by `InterviewApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("service unreachable: {0}")]
    Unreachable(String),
    #[error("request failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Http(reqwest::Error),
}

impl ApiError {
    /// Server-provided detail when there is one, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Unreachable(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

/// Errors emitted by the interview state machine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InterviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("action not available in the {0} stage")]
    InvalidStage(Stage),
    #[error("another request is still in flight")]
    Busy,
    #[error("no interview session is active")]
    NoSession,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while building an `ApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL {raw:?}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
}
