use serde::{Deserialize, Serialize};

/// Named sub-scores that accompany the overall score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDetail {
    pub clarity: u32,
    pub technical_accuracy: u32,
    pub completeness: u32,
    pub communication: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubScore {
    Clarity,
    TechnicalAccuracy,
    Completeness,
    Communication,
}

impl SubScore {
    /// Wire key, in the order the service emits them.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::TechnicalAccuracy => "technical_accuracy",
            Self::Completeness => "completeness",
            Self::Communication => "communication",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clarity => "Clarity",
            Self::TechnicalAccuracy => "Technical Accuracy",
            Self::Completeness => "Completeness",
            Self::Communication => "Communication",
        }
    }
}

impl FeedbackDetail {
    #[must_use]
    pub fn entries(&self) -> [(SubScore, u32); 4] {
        [
            (SubScore::Clarity, self.clarity),
            (SubScore::TechnicalAccuracy, self.technical_accuracy),
            (SubScore::Completeness, self.completeness),
            (SubScore::Communication, self.communication),
        ]
    }
}

/// Evaluation of one submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub overall_score: u32,
    pub feedback_detail: FeedbackDetail,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub missing_topics: Vec<String>,
    #[serde(default)]
    pub suggested_answer: String,
    #[serde(default)]
    pub follow_up_question: Option<String>,
}
