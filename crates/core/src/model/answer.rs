use crate::error::ValidationError;

/// Minimum trimmed length (in characters) of a submittable answer.
pub const MIN_ANSWER_CHARS: usize = 10;

/// A validated, trimmed answer to the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    /// # Errors
    ///
    /// Returns `ValidationError::AnswerTooShort` when the trimmed text has
    /// fewer than `MIN_ANSWER_CHARS` characters.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len < MIN_ANSWER_CHARS {
            return Err(ValidationError::answer_too_short(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}
