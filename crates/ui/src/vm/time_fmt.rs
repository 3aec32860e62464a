use chrono::NaiveDateTime;
use interview_core::model::SessionStats;

/// Remaining seconds below which the countdown is shown as urgent.
pub const URGENT_BELOW_SECS: u32 = 30;

/// `m:ss`, e.g. `3:00` or `0:07`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[must_use]
pub fn is_urgent(seconds: u32) -> bool {
    seconds < URGENT_BELOW_SECS
}

#[must_use]
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

/// Server start time for display; the raw value when it cannot be parsed.
#[must_use]
pub fn format_created_at(stats: &SessionStats) -> String {
    stats
        .created_at_local()
        .map_or_else(|| stats.created_at.clone(), format_datetime)
}
