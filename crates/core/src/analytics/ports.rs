//! Port interfaces for productivity log persistence

use async_trait::async_trait;
use chrono::NaiveDate;
use focusflow_domain::{ProductivityLog, Result};

/// Computed per-day aggregate written on every upsert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySnapshot {
    pub tasks_completed: u32,
    pub focus_minutes: u32,
    pub habit_streak_bonus: f64,
    pub score: f64,
}

/// Trait for productivity log persistence
///
/// The store enforces one record per `(user, date)`; `upsert_for_user_and_day`
/// must be atomic create-or-replace on that key.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Get the log for one calendar day, if any
    async fn find_for_user_and_day(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ProductivityLog>>;

    /// Create or replace the day's log with the given snapshot
    async fn upsert_for_user_and_day(
        &self,
        user_id: &str,
        date: NaiveDate,
        snapshot: DailySnapshot,
    ) -> Result<ProductivityLog>;

    /// Logs with `from <= date <= to`, ascending by date
    async fn find_for_user_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProductivityLog>>;
}
