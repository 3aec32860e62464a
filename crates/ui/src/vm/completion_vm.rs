use interview_core::ScoreBand;
use interview_core::model::RunningTally;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub label: String,
    pub score: u32,
    pub band_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub questions_answered: u32,
    pub average_label: String,
    pub rows: Vec<ScoreRowVm>,
}

impl From<&RunningTally> for CompletionVm {
    fn from(tally: &RunningTally) -> Self {
        Self {
            questions_answered: tally.questions_asked(),
            average_label: tally
                .average()
                .map_or_else(|| "—".to_string(), |avg| avg.to_string()),
            rows: tally
                .scores()
                .iter()
                .enumerate()
                .map(|(idx, &score)| ScoreRowVm {
                    label: format!("Question {}", idx + 1),
                    score,
                    band_class: ScoreBand::from_score(score).slug(),
                })
                .collect(),
        }
    }
}
