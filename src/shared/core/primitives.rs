// Time primitives shared by the write and read side.
//
// All instants are epoch milliseconds (UTC). Durations exposed to clients are whole seconds.

use chrono::{DateTime, Duration, Utc};

pub const MILLIS_PER_SECOND: i64 = 1_000;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Whole seconds between two instants, never negative.
pub fn seconds_between(start_ms: i64, end_ms: i64) -> i64 {
    (end_ms - start_ms).max(0) / MILLIS_PER_SECOND
}

/// Start (inclusive) and end (exclusive) of the UTC day containing `at_ms`.
pub fn utc_day_bounds(at_ms: i64) -> (i64, i64) {
    let at = DateTime::<Utc>::from_timestamp_millis(at_ms).unwrap_or_default();
    let start = at
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc();
    let end = start + Duration::days(1);
    (start.timestamp_millis(), end.timestamp_millis())
}
