#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod model;
pub mod score;

pub use countdown::{Countdown, TickOutcome, TimerEpoch};
pub use error::ValidationError;
pub use score::ScoreBand;
