use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use interview_core::model::{
    Feedback, HealthStatus, InterviewSetup, IssuedQuestion, SessionId, SessionStats,
};

use super::config::ApiConfig;
use super::wire::{NextQuestionRequest, SubmitAnswerRequest, error_detail};
use super::InterviewApi;
use crate::error::ApiError;

/// `InterviewApi` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpInterviewApi {
    client: Client,
    config: ApiConfig,
}

impl HttpInterviewApi {
    /// # Errors
    ///
    /// Returns `ApiError::Http` when the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Http)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn stats_url(&self, session_id: &SessionId) -> Result<Url, ApiError> {
        let raw = self.config.endpoint("api/interview/stats");
        let mut url = Url::parse(&raw).map_err(|err| ApiError::Unreachable(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Unreachable(format!("{raw} cannot carry a path")))?
            .push(session_id.as_str());
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(&body);
            tracing::warn!(operation, %status, detail = detail.as_deref(), "request rejected");
            return Err(ApiError::Status { status, detail });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(operation, error = %err, "undecodable response body");
            ApiError::Decode(err.to_string())
        })
    }
}

#[async_trait]
impl InterviewApi for HttpInterviewApi {
    async fn start_interview(&self, setup: &InterviewSetup) -> Result<IssuedQuestion, ApiError> {
        tracing::debug!(
            interview_type = %setup.interview_type(),
            role = setup.role(),
            "starting interview"
        );
        let response = self
            .client
            .post(self.config.endpoint("api/interview/start"))
            .json(setup)
            .send()
            .await?;
        self.read_json("start_interview", response).await
    }

    async fn submit_answer(&self, request: &SubmitAnswerRequest) -> Result<Feedback, ApiError> {
        tracing::debug!(session_id = %request.session_id, "submitting answer");
        let response = self
            .client
            .post(self.config.endpoint("api/interview/answer"))
            .json(request)
            .send()
            .await?;
        self.read_json("submit_answer", response).await
    }

    async fn next_question(
        &self,
        request: &NextQuestionRequest,
    ) -> Result<IssuedQuestion, ApiError> {
        tracing::debug!(
            session_id = %request.session_id,
            previous_score = request.previous_score,
            "requesting next question"
        );
        let response = self
            .client
            .post(self.config.endpoint("api/interview/next"))
            .json(request)
            .send()
            .await?;
        self.read_json("next_question", response).await
    }

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, ApiError> {
        let url = self.stats_url(session_id)?;
        let response = self.client.get(url).send().await?;
        self.read_json("session_stats", response).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("health"))
            .send()
            .await?;
        self.read_json("health", response).await
    }
}
