//! Wall-clock driver for the question countdown.

use std::time::Duration;

use interview_core::TickOutcome;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Call `on_tick` once per `period` until it reports that the countdown
/// stopped. The first tick fires one full period after the call.
///
/// Callers cancel the surrounding task to stop early; `on_tick` must ignore
/// ticks that arrive for a stale epoch.
pub async fn run_countdown<F>(period: Duration, mut on_tick: F)
where
    F: FnMut() -> TickOutcome,
{
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let outcome = on_tick();
        if !outcome.keep_going() {
            tracing::debug!(?outcome, "countdown driver stopped");
            break;
        }
    }
}
