/// Coarse grading of a 0-100 score, used for styling and encouragement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsPractice,
}

impl ScoreBand {
    pub const EXCELLENT_FROM: u32 = 80;
    pub const GOOD_FROM: u32 = 60;

    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= Self::EXCELLENT_FROM {
            Self::Excellent
        } else if score >= Self::GOOD_FROM {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }

    /// Message shown right after an answer is evaluated.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent answer! 🌟",
            Self::Good => "Good effort! 👍",
            Self::NeedsPractice => "Keep practicing! 💪",
        }
    }

    /// Stable suffix for CSS modifiers (`score--excellent`, ...).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsPractice => "low",
        }
    }
}
