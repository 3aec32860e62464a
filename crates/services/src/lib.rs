#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod interview;
pub mod timer;

pub use api::{ApiConfig, HttpInterviewApi, InterviewApi};
pub use error::{ApiError, ConfigError, InterviewError};
pub use interview::{
    InterviewFlow, InterviewSession, Notice, NoticeKind, PendingCall, Settled, Stage, Ticket,
};
pub use timer::{TICK_PERIOD, run_countdown};

pub use reqwest::StatusCode;
