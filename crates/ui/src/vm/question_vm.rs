use services::InterviewSession;

use crate::vm::time_fmt::{format_clock, is_urgent};

/// Everything the question stage renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number_label: String,
    pub meta_label: String,
    pub text: String,
    pub context: Option<String>,
    pub topics: Vec<String>,
    pub clock_label: String,
    pub urgent: bool,
    pub answer: String,
    pub can_submit: bool,
}

impl QuestionVm {
    #[must_use]
    pub fn from_session(session: &InterviewSession) -> Option<Self> {
        let question = session.question()?;
        let type_label = session
            .setup()
            .map_or("interview", |setup| setup.interview_type().label());
        let remaining = session.time_remaining();
        let context = question.context.trim();

        Some(Self {
            number_label: format!("Question {}", session.question_number()),
            meta_label: format!("{} • {type_label}", question.difficulty),
            text: question.text.clone(),
            context: (!context.is_empty()).then(|| context.to_string()),
            topics: question.expected_topics.clone(),
            clock_label: format_clock(remaining),
            urgent: is_urgent(remaining),
            answer: session.answer_draft().to_string(),
            can_submit: !session.is_busy() && !session.answer_draft().trim().is_empty(),
        })
    }
}

/// Width of the header progress bar, in percent.
#[must_use]
pub fn progress_percent(session: &InterviewSession) -> f64 {
    session.tally().progress_ratio() * 100.0
}
