use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::SessionId;

/// Server-side view of a practice run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub session_id: SessionId,
    pub questions_asked: u32,
    pub average_score: f64,
    #[serde(default)]
    pub scores: Vec<u32>,
    pub created_at: String,
}

impl SessionStats {
    /// Parse `created_at`, which the service emits as a local ISO-8601
    /// timestamp without an offset. An RFC 3339 value is accepted too.
    #[must_use]
    pub fn created_at_local(&self) -> Option<NaiveDateTime> {
        let raw = self.created_at.trim();
        raw.parse::<NaiveDateTime>().ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|value| value.naive_local())
        })
    }
}

/// Response of the service health check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub agent_ready: bool,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.agent_ready
    }
}
