mod flow;
mod notice;
mod session;

pub use flow::InterviewFlow;
pub use notice::{Notice, NoticeKind};
pub use session::{InterviewSession, PendingCall, Settled, Stage, Ticket};
