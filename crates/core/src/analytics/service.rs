//! Analytics service - daily log aggregation and weekly folding
//!
//! The per-day log is a live-recomputed snapshot: task counts and the habit
//! bonus always reflect the current task/habit state, while focus minutes
//! accumulate within the day. Reads therefore upsert before returning so the
//! weekly summary can rely on logs existing from prior reads.

use std::sync::Arc;

use chrono::TimeDelta;
use focusflow_domain::{
    date_of_timestamp, day_window, FocusFlowError, ProductivityLog, Result, SummaryPeriod,
    WeeklySummary,
};
use tracing::debug;

use super::ports::{DailySnapshot, LogRepository};
use super::score::{calculate_score, round_to_tenth};
use crate::habits::ports::HabitRepository;
use crate::tasks::ports::TaskRepository;

/// Productivity analytics service
pub struct AnalyticsService {
    logs: Arc<dyn LogRepository>,
    tasks: Arc<dyn TaskRepository>,
    habits: Arc<dyn HabitRepository>,
}

impl AnalyticsService {
    /// Create a new analytics service
    pub fn new(
        logs: Arc<dyn LogRepository>,
        tasks: Arc<dyn TaskRepository>,
        habits: Arc<dyn HabitRepository>,
    ) -> Self {
        Self { logs, tasks, habits }
    }

    /// Add focus minutes to today's log
    ///
    /// Minutes accumulate within the day: repeated calls sum, they do not
    /// overwrite. Zero minutes is rejected here as well as at the boundary.
    pub async fn log_focus_time(
        &self,
        user_id: &str,
        minutes: u32,
        now: i64,
    ) -> Result<ProductivityLog> {
        if minutes == 0 {
            return Err(FocusFlowError::InvalidInput(
                "focus_minutes must be a positive number".to_string(),
            ));
        }

        let today = date_of_timestamp(now);
        let (tasks_completed, habit_streak_bonus) = self.live_aggregates(user_id, now).await?;

        let existing = self.logs.find_for_user_and_day(user_id, today).await?;
        let focus_minutes = existing.map_or(0, |log| log.focus_minutes) + minutes;
        let score = calculate_score(tasks_completed, focus_minutes, habit_streak_bonus);

        debug!(user_id, minutes, focus_minutes, score, "focus time logged");
        self.logs
            .upsert_for_user_and_day(
                user_id,
                today,
                DailySnapshot { tasks_completed, focus_minutes, habit_streak_bonus, score },
            )
            .await
    }

    /// Refresh and return today's log
    ///
    /// This is a side-effecting read: task count and habit bonus are
    /// recomputed live, the accumulated focus minutes are preserved, and the
    /// result is upserted before being returned.
    pub async fn daily_log(&self, user_id: &str, now: i64) -> Result<ProductivityLog> {
        let today = date_of_timestamp(now);
        let (tasks_completed, habit_streak_bonus) = self.live_aggregates(user_id, now).await?;

        let existing = self.logs.find_for_user_and_day(user_id, today).await?;
        let focus_minutes = existing.map_or(0, |log| log.focus_minutes);
        let score = calculate_score(tasks_completed, focus_minutes, habit_streak_bonus);

        self.logs
            .upsert_for_user_and_day(
                user_id,
                today,
                DailySnapshot { tasks_completed, focus_minutes, habit_streak_bonus, score },
            )
            .await
    }

    /// Fold the daily logs of the inclusive 7-day window ending today
    ///
    /// Days without a log are simply absent; an empty window yields zero
    /// totals, an average score of 0 and `None` period boundaries.
    pub async fn weekly_summary(&self, user_id: &str, now: i64) -> Result<WeeklySummary> {
        let today = date_of_timestamp(now);
        let from = today - TimeDelta::days(6);
        let logs = self.logs.find_for_user_in_range(user_id, from, today).await?;

        let total_tasks_completed = logs.iter().map(|log| log.tasks_completed).sum();
        let total_focus_minutes = logs.iter().map(|log| log.focus_minutes).sum();
        let average_score = if logs.is_empty() {
            0.0
        } else {
            round_to_tenth(logs.iter().map(|log| log.score).sum::<f64>() / logs.len() as f64)
        };

        Ok(WeeklySummary {
            period: SummaryPeriod {
                from: logs.first().map(|log| log.date),
                to: logs.last().map(|log| log.date),
            },
            total_tasks_completed,
            total_focus_minutes,
            average_score,
            daily_logs: logs,
        })
    }

    /// Volatile aggregates: today's completed-task count and the current
    /// total habit streak bonus.
    async fn live_aggregates(&self, user_id: &str, now: i64) -> Result<(u32, f64)> {
        let (start, end) = day_window(date_of_timestamp(now));
        let tasks_completed = self.tasks.count_completed_in_window(user_id, start, end).await?;
        let habit_streak_bonus = self.habits.total_streak_bonus(user_id).await?;
        Ok((tasks_completed, habit_streak_bonus))
    }
}
