use interview_core::ScoreBand;
use interview_core::model::Feedback;

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLineVm {
    pub label: &'static str,
    pub score: u32,
    /// Meter width in percent, clamped to 100.
    pub meter_percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub score: u32,
    pub band_class: &'static str,
    pub breakdown: Vec<ScoreLineVm>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_topics: Vec<String>,
    pub suggested_answer_html: Option<String>,
    pub follow_up: Option<String>,
}

impl From<&Feedback> for FeedbackVm {
    fn from(feedback: &Feedback) -> Self {
        let suggested = feedback.suggested_answer.trim();
        Self {
            score: feedback.overall_score,
            band_class: ScoreBand::from_score(feedback.overall_score).slug(),
            breakdown: feedback
                .feedback_detail
                .entries()
                .into_iter()
                .map(|(sub, score)| ScoreLineVm {
                    label: sub.label(),
                    score,
                    meter_percent: score.min(100),
                })
                .collect(),
            strengths: feedback.strengths.clone(),
            improvements: feedback.improvements.clone(),
            missing_topics: feedback.missing_topics.clone(),
            suggested_answer_html: (!suggested.is_empty()).then(|| markdown_to_html(suggested)),
            follow_up: feedback
                .follow_up_question
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }
}
