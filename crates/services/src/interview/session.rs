use std::fmt;

use interview_core::model::{
    Answer, Feedback, InterviewSetup, IssuedQuestion, Question, RunningTally, SessionId,
    SetupDraft,
};
use interview_core::{Countdown, ScoreBand, TickOutcome, TimerEpoch};

use crate::api::{NextQuestionRequest, SubmitAnswerRequest};
use crate::error::{ApiError, InterviewError};

use super::notice::Notice;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    #[default]
    Setup,
    Question,
    Feedback,
    Complete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Setup => "setup",
            Self::Question => "question",
            Self::Feedback => "feedback",
            Self::Complete => "complete",
        })
    }
}

/// Proof that a request was started against a particular run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    run: u64,
    stage: Stage,
}

/// A request ready to send, plus the ticket needed to apply its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCall<R> {
    pub ticket: Ticket,
    pub request: R,
}

/// What happened to a response handed back to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// The run restarted or left the stage while the request was in flight.
    Discarded,
}

/// Client-side state of one interview run.
///
/// Networked operations are split in two: `begin_*` validates and performs the
/// immediate side effects, `finish_*` applies the service result. Nothing in
/// here awaits, so the struct can live inside a UI signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterviewSession {
    stage: Stage,
    run: u64,
    busy: bool,
    setup: Option<InterviewSetup>,
    session_id: Option<SessionId>,
    question: Option<Question>,
    answer_draft: String,
    feedback: Option<Feedback>,
    countdown: Countdown,
    tally: RunningTally,
    notice: Option<Notice>,
}

impl InterviewSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─── start ─────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `InterviewError::Validation` for a blank role,
    /// `InvalidStage` outside setup and `Busy` while a request is in flight.
    pub fn begin_start(
        &mut self,
        draft: &SetupDraft,
    ) -> Result<PendingCall<InterviewSetup>, InterviewError> {
        self.ensure_ready(Stage::Setup)?;
        let setup = draft.validate().map_err(|err| self.reject(err))?;
        Ok(self.dispatch(setup))
    }

    /// # Errors
    ///
    /// Returns `InterviewError::Api` when the service call failed.
    pub fn finish_start(
        &mut self,
        ticket: Ticket,
        result: Result<IssuedQuestion, ApiError>,
        setup: InterviewSetup,
    ) -> Result<Settled, InterviewError> {
        if !self.accepts(ticket) {
            return Ok(Settled::Discarded);
        }
        self.busy = false;
        match result {
            Ok(issued) => {
                tracing::info!(session_id = %issued.session_id, "interview started");
                self.session_id = Some(issued.session_id);
                self.setup = Some(setup);
                self.load_question(issued.question);
                self.notice = Some(Notice::success("Interview started! Good luck! 🚀"));
                Ok(Settled::Applied)
            }
            Err(err) => Err(self.fail(err, "Failed to start interview")),
        }
    }

    // ─── submit ────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `InterviewError::Validation` for a short answer (no request is
    /// made and the timer keeps running), `InvalidStage` outside the question
    /// stage and `Busy` while a request is in flight.
    pub fn begin_submit(
        &mut self,
        answer: &str,
    ) -> Result<PendingCall<SubmitAnswerRequest>, InterviewError> {
        self.ensure_ready(Stage::Question)?;
        let (Some(session_id), Some(question)) = (&self.session_id, &self.question) else {
            return Err(InterviewError::NoSession);
        };
        let (session_id, question) = (session_id.clone(), question.text.clone());
        let answer = Answer::parse(answer).map_err(|err| self.reject(err))?;
        let request = SubmitAnswerRequest {
            session_id,
            question,
            answer: answer.into_inner(),
        };
        self.countdown.pause();
        Ok(self.dispatch(request))
    }

    /// # Errors
    ///
    /// Returns `InterviewError::Api` when the service call failed; the timer
    /// resumes so the user can retry.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<Feedback, ApiError>,
    ) -> Result<Settled, InterviewError> {
        if !self.accepts(ticket) {
            return Ok(Settled::Discarded);
        }
        self.busy = false;
        match result {
            Ok(feedback) => {
                let band = ScoreBand::from_score(feedback.overall_score);
                tracing::info!(score = feedback.overall_score, "answer evaluated");
                self.tally.record(feedback.overall_score);
                self.feedback = Some(feedback);
                self.stage = Stage::Feedback;
                self.notice = Some(match band {
                    ScoreBand::NeedsPractice => Notice::info(band.message()),
                    _ => Notice::success(band.message()),
                });
                Ok(Settled::Applied)
            }
            Err(err) => {
                self.countdown.resume();
                Err(self.fail(err, "Failed to evaluate answer"))
            }
        }
    }

    // ─── advance ───────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `InvalidStage` outside the feedback stage and `Busy` while a
    /// request is in flight.
    pub fn begin_advance(&mut self) -> Result<PendingCall<NextQuestionRequest>, InterviewError> {
        self.ensure_ready(Stage::Feedback)?;
        let session_id = self.session_id.clone().ok_or(InterviewError::NoSession)?;
        let request = NextQuestionRequest {
            session_id,
            previous_score: self.feedback.as_ref().map(|fb| fb.overall_score),
        };
        Ok(self.dispatch(request))
    }

    /// # Errors
    ///
    /// Returns `InterviewError::Api` when the service call failed.
    pub fn finish_advance(
        &mut self,
        ticket: Ticket,
        result: Result<IssuedQuestion, ApiError>,
    ) -> Result<Settled, InterviewError> {
        if !self.accepts(ticket) {
            return Ok(Settled::Discarded);
        }
        self.busy = false;
        match result {
            Ok(issued) => {
                self.load_question(issued.question);
                self.notice = None;
                Ok(Settled::Applied)
            }
            Err(err) => Err(self.fail(err, "Failed to get next question")),
        }
    }

    // ─── local transitions ─────────────────────────────────────────────────

    /// Stop the clock and show the summary. Always succeeds.
    pub fn end(&mut self) {
        self.countdown.pause();
        self.busy = false;
        self.stage = Stage::Complete;
        self.notice = None;
        tracing::info!(
            questions = self.tally.questions_asked(),
            average = self.tally.average(),
            "interview ended"
        );
    }

    /// Drop everything scoped to the run and return to setup.
    pub fn restart(&mut self) {
        self.run = self.run.wrapping_add(1);
        self.stage = Stage::Setup;
        self.busy = false;
        self.setup = None;
        self.session_id = None;
        self.question = None;
        self.answer_draft.clear();
        self.feedback = None;
        self.countdown.reset();
        self.tally = RunningTally::new();
        self.notice = None;
    }

    /// Deliver one timer tick scheduled for `epoch`.
    pub fn tick(&mut self, epoch: TimerEpoch) -> TickOutcome {
        if self.stage != Stage::Question {
            return TickOutcome::Ignored;
        }
        self.countdown.tick(epoch)
    }

    pub fn set_answer_draft(&mut self, text: impl Into<String>) {
        self.answer_draft = text.into();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ─── accessors ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn setup(&self) -> Option<&InterviewSetup> {
        self.setup.as_ref()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn answer_draft(&self) -> &str {
        &self.answer_draft
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn tally(&self) -> &RunningTally {
        &self.tally
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.stage == Stage::Question && self.countdown.is_running()
    }

    /// Epoch to tick with while the timer runs, `None` when it should be stopped.
    #[must_use]
    pub fn running_timer(&self) -> Option<TimerEpoch> {
        self.is_timer_running().then(|| self.countdown.epoch())
    }

    /// One-based number of the question on screen.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        let answered = self.tally.questions_asked();
        if self.stage == Stage::Feedback {
            answered
        } else {
            answered.saturating_add(1)
        }
    }

    // ─── internals ─────────────────────────────────────────────────────────

    fn ensure_ready(&self, expected: Stage) -> Result<(), InterviewError> {
        if self.stage != expected {
            return Err(InterviewError::InvalidStage(self.stage));
        }
        if self.busy {
            return Err(InterviewError::Busy);
        }
        Ok(())
    }

    fn dispatch<R>(&mut self, request: R) -> PendingCall<R> {
        self.busy = true;
        PendingCall {
            ticket: Ticket {
                run: self.run,
                stage: self.stage,
            },
            request,
        }
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        let current = ticket.run == self.run && ticket.stage == self.stage;
        if !current {
            tracing::debug!(stage = %self.stage, "discarding stale response");
        }
        current
    }

    fn load_question(&mut self, question: Question) {
        self.countdown.arm(question.time_limit_seconds);
        self.question = Some(question);
        self.answer_draft.clear();
        self.feedback = None;
        self.stage = Stage::Question;
    }

    fn reject(&mut self, err: interview_core::ValidationError) -> InterviewError {
        self.notice = Some(Notice::error(err.to_string()));
        InterviewError::Validation(err)
    }

    fn fail(&mut self, err: ApiError, fallback: &str) -> InterviewError {
        tracing::warn!(stage = %self.stage, error = %err, "{fallback}");
        self.notice = Some(Notice::error(err.user_message(fallback)));
        InterviewError::Api(err)
    }
}
