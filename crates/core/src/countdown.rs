//! Per-question countdown state.
//!
//! The countdown itself never schedules anything; a driver calls
//! [`Countdown::tick`] once per second with the epoch it was started for.
//! Every change to the running state bumps the epoch, so a tick delivered by a
//! driver that should already have been cancelled is ignored.

/// Identifies one uninterrupted run of the countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerEpoch(u64);

impl TimerEpoch {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale epoch, paused, or already at zero. Nothing changed.
    Ignored,
    /// One second elapsed and time is left.
    Ticked { remaining: u32 },
    /// This tick brought the countdown to zero.
    Elapsed,
}

impl TickOutcome {
    /// Whether the driver should keep ticking.
    #[must_use]
    pub fn keep_going(self) -> bool {
        matches!(self, Self::Ticked { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    active: bool,
    epoch: TimerEpoch,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// Limit shown before the first question arrives.
    pub const DEFAULT_LIMIT_SECS: u32 = 180;

    #[must_use]
    pub fn new() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT_SECS,
            remaining: Self::DEFAULT_LIMIT_SECS,
            active: false,
            epoch: TimerEpoch::default(),
        }
    }

    /// Seed from a fresh question and start running.
    pub fn arm(&mut self, limit_secs: u32) -> TimerEpoch {
        self.limit = limit_secs;
        self.remaining = limit_secs;
        self.active = true;
        self.bump()
    }

    /// Freeze the clock, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.active {
            self.active = false;
            self.bump();
        }
    }

    /// Continue a paused countdown from where it stopped.
    pub fn resume(&mut self) -> TimerEpoch {
        if !self.active {
            self.active = true;
            self.bump();
        }
        self.epoch
    }

    /// Back to the idle default.
    pub fn reset(&mut self) {
        self.limit = Self::DEFAULT_LIMIT_SECS;
        self.remaining = Self::DEFAULT_LIMIT_SECS;
        self.active = false;
        self.bump();
    }

    pub fn tick(&mut self, epoch: TimerEpoch) -> TickOutcome {
        if epoch != self.epoch || !self.is_running() {
            return TickOutcome::Ignored;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            TickOutcome::Elapsed
        } else {
            TickOutcome::Ticked {
                remaining: self.remaining,
            }
        }
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active with time left; the only state in which ticks count.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active && self.remaining > 0
    }

    #[must_use]
    pub fn epoch(&self) -> TimerEpoch {
        self.epoch
    }

    fn bump(&mut self) -> TimerEpoch {
        self.epoch = self.epoch.next();
        self.epoch
    }
}
