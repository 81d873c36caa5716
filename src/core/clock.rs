//! Monotonic tick source and time formatting helpers.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::OnceLock;
use std::time::Instant;

static ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Returns a strictly non-decreasing millisecond counter.
///
/// The counter is anchored at the first call in the process and is unrelated
/// to wall-clock time, so it is safe for interval measurement across clock
/// adjustments.
pub fn tick_count_millis() -> u64 {
    ANCHOR.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// Renders a millisecond duration as `HHh MMm SS.mmms`.
pub fn format_duration_millis(millis: u64) -> String {
    let hours = millis / 3_600_000;
    let minutes = (millis % 3_600_000) / 60_000;
    let seconds = (millis % 60_000) / 1000;
    let remainder = millis % 1000;
    format!("{:02}h {:02}m {:02}.{:03}s", hours, minutes, seconds, remainder)
}

/// Renders milliseconds since the Unix epoch as an ISO-8601 UTC timestamp.
///
/// Out-of-range values fall back to the epoch.
pub fn millis_to_iso8601(millis_from_epoch: u64) -> String {
    let timestamp = Utc
        .timestamp_millis_opt(millis_from_epoch as i64)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
