//! Productivity analytics types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One productivity snapshot per user per calendar day
///
/// The record is a live-recomputed cache of aggregate state, not a ledger:
/// `tasks_completed` and `habit_streak_bonus` are refreshed on every read,
/// while `focus_minutes` accumulates within the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivityLog {
    pub id: String,
    pub user_id: String,
    /// Calendar day the snapshot covers
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub focus_minutes: u32,
    pub habit_streak_bonus: f64,
    pub score: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Boundaries of a summary window; `None` when no logs exist in the window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryPeriod {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Fold of the daily logs in the trailing 7-day window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub period: SummaryPeriod,
    pub total_tasks_completed: u32,
    pub total_focus_minutes: u32,
    /// Mean of per-day scores rounded to one decimal; 0 for an empty window
    pub average_score: f64,
    /// Chronological; days without a log are absent
    pub daily_logs: Vec<ProductivityLog>,
}
