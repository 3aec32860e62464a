mod client;
mod config;
mod wire;

use async_trait::async_trait;
use interview_core::model::{
    Feedback, HealthStatus, InterviewSetup, IssuedQuestion, SessionId, SessionStats,
};

use crate::error::ApiError;

pub use client::HttpInterviewApi;
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_BASE_URL, LEGACY_API_URL_ENV, REQUEST_TIMEOUT};
pub use wire::{NextQuestionRequest, SubmitAnswerRequest, error_detail};

/// The remote interview service.
///
/// Every call is a single best-effort round trip: no retries, no caching.
#[async_trait]
pub trait InterviewApi: Send + Sync {
    async fn start_interview(&self, setup: &InterviewSetup) -> Result<IssuedQuestion, ApiError>;

    async fn submit_answer(&self, request: &SubmitAnswerRequest) -> Result<Feedback, ApiError>;

    async fn next_question(
        &self,
        request: &NextQuestionRequest,
    ) -> Result<IssuedQuestion, ApiError>;

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
