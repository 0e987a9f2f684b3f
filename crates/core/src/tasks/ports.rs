//! Port interfaces for task persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use focusflow_domain::{Result, Task, TaskFilters};

/// Trait for task persistence and retrieval
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task
    async fn create(&self, task: Task) -> Result<()>;

    /// List a user's tasks, newest first, narrowed by the given filters
    async fn list_for_user(&self, user_id: &str, filters: TaskFilters) -> Result<Vec<Task>>;

    /// Get a task by id, scoped to its owner
    async fn find_by_id_for_user(&self, task_id: &str, user_id: &str) -> Result<Option<Task>>;

    /// Replace the stored task
    async fn update(&self, task: Task) -> Result<()>;

    /// Delete a task, scoped to its owner
    async fn delete(&self, task_id: &str, user_id: &str) -> Result<()>;

    /// Count tasks completed within `[start, end)` (unix seconds)
    async fn count_completed_in_window(&self, user_id: &str, start: i64, end: i64) -> Result<u32>;
}
