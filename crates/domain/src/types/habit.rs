//! Habit types

use serde::{Deserialize, Serialize};

use crate::utils::day::same_calendar_day;

/// Daily habit owned by a single user
///
/// `streak` counts consecutive calendar days ending with the most recent
/// check-in; `longest_streak` is monotonically non-decreasing and always at
/// least `streak`. `completed_dates` is the append-only check-in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub streak: u32,
    pub longest_streak: u32,
    /// Timestamp of the most recent check-in, if any
    pub last_completed_at: Option<i64>,
    /// Every check-in timestamp, oldest first
    pub completed_dates: Vec<i64>,
    /// False once soft-deleted
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Habit {
    /// Whether the habit has already been checked in on `now`'s calendar day.
    pub fn completed_today(&self, now: i64) -> bool {
        self.last_completed_at.is_some_and(|last| same_calendar_day(last, now))
    }
}

/// Fields for creating a habit
#[derive(Debug, Clone, Deserialize)]
pub struct NewHabit {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
