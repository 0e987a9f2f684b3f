//! Habit service - streak continuity logic
//!
//! Check-ins compare calendar days, not timestamps: a habit checked in at
//! 23:59 and again at 00:01 the next day continues its streak. A habit may
//! be checked in at most once per calendar day.

use std::sync::Arc;

use chrono::TimeDelta;
use focusflow_domain::{
    date_of_timestamp, FocusFlowError, Habit, NewHabit, Result,
};
use tracing::debug;
use uuid::Uuid;

use super::ports::HabitRepository;

/// Habit tracking service
pub struct HabitService {
    habits: Arc<dyn HabitRepository>,
}

impl HabitService {
    /// Create a new habit service
    pub fn new(habits: Arc<dyn HabitRepository>) -> Self {
        Self { habits }
    }

    /// Create a habit for the user
    pub async fn create_habit(&self, user_id: &str, new_habit: NewHabit, now: i64) -> Result<Habit> {
        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_habit.name,
            description: new_habit.description,
            streak: 0,
            longest_streak: 0,
            last_completed_at: None,
            completed_dates: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.habits.create(habit.clone()).await?;
        Ok(habit)
    }

    /// List the user's active habits
    pub async fn list_habits(&self, user_id: &str) -> Result<Vec<Habit>> {
        self.habits.list_active_for_user(user_id).await
    }

    /// Mark the habit done for `now`'s calendar day
    ///
    /// Continues the streak when the previous check-in fell on yesterday,
    /// otherwise resets to 1 (the current check-in itself counts). Fails with
    /// [`FocusFlowError::AlreadyCheckedIn`] on a second check-in the same
    /// day, leaving the habit unmutated.
    pub async fn check_in(&self, user_id: &str, habit_id: &str, now: i64) -> Result<Habit> {
        let habit = self
            .habits
            .find_by_id_for_user(habit_id, user_id)
            .await?
            .filter(|h| h.is_active)
            .ok_or_else(|| FocusFlowError::NotFound(format!("habit {habit_id} not found")))?;

        if habit.completed_today(now) {
            return Err(FocusFlowError::AlreadyCheckedIn(
                "already checked in today for this habit".to_string(),
            ));
        }

        let yesterday = date_of_timestamp(now) - TimeDelta::days(1);
        let new_streak = match habit.last_completed_at {
            Some(last) if date_of_timestamp(last) == yesterday => habit.streak + 1,
            _ => 1,
        };

        let mut updated = habit;
        updated.streak = new_streak;
        updated.longest_streak = updated.longest_streak.max(new_streak);
        updated.completed_dates.push(now);
        updated.last_completed_at = Some(now);
        updated.updated_at = now;

        self.habits.update(updated.clone()).await?;
        debug!(
            habit_id = %updated.id,
            streak = updated.streak,
            longest_streak = updated.longest_streak,
            "habit checked in"
        );
        Ok(updated)
    }

    /// Soft-delete a habit owned by the user
    pub async fn delete_habit(&self, user_id: &str, habit_id: &str) -> Result<()> {
        self.habits
            .find_by_id_for_user(habit_id, user_id)
            .await?
            .ok_or_else(|| FocusFlowError::NotFound(format!("habit {habit_id} not found")))?;
        self.habits.soft_delete(habit_id, user_id).await
    }
}
