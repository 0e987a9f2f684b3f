//! Shared fixtures for core service tests

pub mod repositories;

use chrono::{NaiveDate, NaiveTime, TimeDelta};

/// Unix timestamp for the given day at the given hour (UTC).
pub fn ts(date: NaiveDate, hour: u32) -> i64 {
    date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"))
        .and_utc()
        .timestamp()
}

/// Fixed base day used across tests.
pub fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

/// `days` calendar days before `date`.
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - TimeDelta::days(days)
}
