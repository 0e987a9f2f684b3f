//! Port interfaces for habit persistence

use async_trait::async_trait;
use focusflow_domain::{Habit, Result};

/// Trait for habit persistence and retrieval
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Persist a new habit
    async fn create(&self, habit: Habit) -> Result<()>;

    /// List the user's active habits, newest first
    async fn list_active_for_user(&self, user_id: &str) -> Result<Vec<Habit>>;

    /// Get a habit by id, scoped to its owner (active or not)
    async fn find_by_id_for_user(&self, habit_id: &str, user_id: &str) -> Result<Option<Habit>>;

    /// Replace the stored habit, including its check-in history
    async fn update(&self, habit: Habit) -> Result<()>;

    /// Mark a habit inactive without removing its history
    async fn soft_delete(&self, habit_id: &str, user_id: &str) -> Result<()>;

    /// Sum of `streak * 0.5` over the user's active habits
    async fn total_streak_bonus(&self, user_id: &str) -> Result<f64>;
}
