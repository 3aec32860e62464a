/// Running score for the current practice run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunningTally {
    questions_asked: u32,
    total_score: u32,
    scores: Vec<u32>,
}

impl RunningTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one answered question.
    pub fn record(&mut self, score: u32) {
        self.questions_asked = self.questions_asked.saturating_add(1);
        self.total_score = self.total_score.saturating_add(score);
        self.scores.push(score);
    }

    #[must_use]
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Per-question scores in answer order.
    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Average rounded half-up; `None` until a question has been answered.
    #[must_use]
    pub fn average(&self) -> Option<u32> {
        if self.questions_asked == 0 {
            return None;
        }
        let total = u64::from(self.total_score);
        let count = u64::from(self.questions_asked);
        let rounded = (2 * total + count) / (2 * count);
        u32::try_from(rounded).ok()
    }

    /// Fraction of the progress bar to fill: answered / (answered + 1).
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        let answered = f64::from(self.questions_asked);
        answered / (answered + 1.0)
    }
}
