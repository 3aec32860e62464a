mod completion_vm;
mod feedback_vm;
mod interview_vm;
mod markdown_vm;
mod question_vm;
mod time_fmt;

pub use completion_vm::{CompletionVm, ScoreRowVm};
pub use feedback_vm::{FeedbackVm, ScoreLineVm};
pub use interview_vm::InterviewAction;
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use question_vm::{QuestionVm, progress_percent};
pub use time_fmt::{URGENT_BELOW_SECS, format_clock, format_created_at, format_datetime, is_urgent};
