mod answer;
mod feedback;
mod ids;
mod question;
mod setup;
mod stats;
mod tally;

pub use answer::{Answer, MIN_ANSWER_CHARS};
pub use feedback::{Feedback, FeedbackDetail, SubScore};
pub use ids::SessionId;
pub use question::{IssuedQuestion, Question};
pub use setup::{ExperienceLevel, InterviewSetup, InterviewType, ParseOptionError, SetupDraft};
pub use stats::{HealthStatus, SessionStats};
pub use tally::RunningTally;
