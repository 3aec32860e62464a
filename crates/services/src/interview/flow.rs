use std::sync::Arc;

use interview_core::model::{SessionStats, SetupDraft};

use crate::api::InterviewApi;
use crate::error::InterviewError;

use super::session::{InterviewSession, Settled};

/// Drives an `InterviewSession` against an `InterviewApi`, one request at a time.
///
/// UIs that keep the session inside reactive state call the `begin_*` and
/// `finish_*` halves themselves so no borrow is held across the await.
#[derive(Clone)]
pub struct InterviewFlow {
    api: Arc<dyn InterviewApi>,
    session: InterviewSession,
}

impl InterviewFlow {
    #[must_use]
    pub fn new(api: Arc<dyn InterviewApi>) -> Self {
        Self {
            api,
            session: InterviewSession::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &InterviewSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut InterviewSession {
        &mut self.session
    }

    /// Start a run from the setup form.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError` for validation, stage or API failures.
    pub async fn start(&mut self, draft: &SetupDraft) -> Result<Settled, InterviewError> {
        let pending = self.session.begin_start(draft)?;
        let result = self.api.start_interview(&pending.request).await;
        self.session
            .finish_start(pending.ticket, result, pending.request)
    }

    /// Submit `answer` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError` for validation, stage or API failures.
    pub async fn submit(&mut self, answer: &str) -> Result<Settled, InterviewError> {
        let pending = self.session.begin_submit(answer)?;
        let result = self.api.submit_answer(&pending.request).await;
        self.session.finish_submit(pending.ticket, result)
    }

    /// Fetch the next question after reviewing feedback.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError` for stage or API failures.
    pub async fn advance(&mut self) -> Result<Settled, InterviewError> {
        let pending = self.session.begin_advance()?;
        let result = self.api.next_question(&pending.request).await;
        self.session.finish_advance(pending.ticket, result)
    }

    pub fn end(&mut self) {
        self.session.end();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Server-side statistics for the current run.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::NoSession` before a run has started.
    pub async fn stats(&self) -> Result<SessionStats, InterviewError> {
        let session_id = self
            .session
            .session_id()
            .ok_or(InterviewError::NoSession)?;
        Ok(self.api.session_stats(session_id).await?)
    }
}
