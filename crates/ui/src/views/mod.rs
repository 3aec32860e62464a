mod complete;
mod feedback;
mod interview;
mod notice;
mod question;
mod setup;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use complete::CompleteView;
pub use feedback::FeedbackView;
pub use interview::InterviewView;
pub use notice::NoticeBanner;
pub use question::QuestionView;
pub use setup::SetupView;
pub use state::{ViewError, ViewState, view_state_from_resource};
