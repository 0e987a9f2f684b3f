//! Calendar-day arithmetic
//!
//! All "today/yesterday" comparisons in FocusFlow work on the UTC calendar
//! day: timestamps are truncated to year/month/day and compared as dates,
//! ignoring time of day. Streak continuity and the per-day productivity log
//! both key on these helpers so they cannot drift apart.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Calendar day (UTC) that a unix-seconds timestamp falls on.
pub fn date_of_timestamp(ts: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default().date_naive()
}

/// Whether two unix-seconds timestamps fall on the same UTC calendar day.
pub fn same_calendar_day(a: i64, b: i64) -> bool {
    date_of_timestamp(a) == date_of_timestamp(b)
}

/// Half-open `[start, end)` unix-seconds window covering one calendar day.
pub fn day_window(date: NaiveDate) -> (i64, i64) {
    let start = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    let end = (date + TimeDelta::days(1)).and_time(NaiveTime::MIN).and_utc().timestamp();
    (start, end)
}
