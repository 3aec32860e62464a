use thiserror::Error;

use crate::model::MIN_ANSWER_CHARS;

/// Input rejected before any request leaves the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Please enter a job role")]
    EmptyRole,

    #[error("Please provide a more detailed answer (at least {min} characters)")]
    AnswerTooShort { len: usize, min: usize },
}

impl ValidationError {
    #[must_use]
    pub fn answer_too_short(len: usize) -> Self {
        Self::AnswerTooShort {
            len,
            min: MIN_ANSWER_CHARS,
        }
    }
}
