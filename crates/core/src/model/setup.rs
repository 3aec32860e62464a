use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {raw}")]
pub struct ParseOptionError {
    kind: &'static str,
    raw: String,
}

/// Flavour of interview the remote service should generate questions for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    #[default]
    Technical,
    Behavioral,
    Hr,
    SystemDesign,
}

impl InterviewType {
    pub const ALL: [Self; 4] = [
        Self::Technical,
        Self::Behavioral,
        Self::Hr,
        Self::SystemDesign,
    ];

    /// Wire value, also used as the `<option>` value in the setup form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::Hr => "hr",
            Self::SystemDesign => "system_design",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical Interview",
            Self::Behavioral => "Behavioral Interview",
            Self::Hr => "HR Interview",
            Self::SystemDesign => "System Design",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "interview type",
                raw: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Intermediate,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Entry, Self::Intermediate, Self::Senior];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Intermediate => "intermediate",
            Self::Senior => "senior",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry Level (0-2 years)",
            Self::Intermediate => "Intermediate (2-5 years)",
            Self::Senior => "Senior (5+ years)",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "experience level",
                raw: s.to_string(),
            })
    }
}

/// Raw setup form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupDraft {
    pub interview_type: InterviewType,
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub domain: String,
}

impl SetupDraft {
    /// Validate the form into an `InterviewSetup`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRole` when the role is blank.
    pub fn validate(&self) -> Result<InterviewSetup, ValidationError> {
        InterviewSetup::new(
            self.interview_type,
            &self.role,
            self.experience_level,
            Some(self.domain.as_str()),
        )
    }
}

/// Validated parameters for the first question of a run. Serializes to the
/// start-interview request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSetup {
    interview_type: InterviewType,
    role: String,
    experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
}

impl InterviewSetup {
    /// Trim and validate setup fields. A blank domain is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRole` when the role is blank.
    pub fn new(
        interview_type: InterviewType,
        role: &str,
        experience_level: ExperienceLevel,
        domain: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let role = role.trim();
        if role.is_empty() {
            return Err(ValidationError::EmptyRole);
        }
        let domain = domain
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(Self {
            interview_type,
            role: role.to_string(),
            experience_level,
            domain,
        })
    }

    #[must_use]
    pub fn interview_type(&self) -> InterviewType {
        self.interview_type
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}
