//! Task service - core business logic

use std::sync::Arc;

use focusflow_domain::{
    day_window, date_of_timestamp, FocusFlowError, NewTask, Result, Task, TaskFilters,
    TaskPriority, TaskStatus, TaskUpdate,
};
use tracing::debug;
use uuid::Uuid;

use super::ports::TaskRepository;

/// Task management service
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Create a new task service
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Create a task for the user
    pub async fn create_task(&self, user_id: &str, new_task: NewTask, now: i64) -> Result<Task> {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: new_task.title,
            description: new_task.description,
            priority: new_task.priority.unwrap_or(TaskPriority::Medium),
            due_date: new_task.due_date,
            status: TaskStatus::Pending,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.tasks.create(task.clone()).await?;
        debug!(task_id = %task.id, user_id, "task created");
        Ok(task)
    }

    /// List the user's tasks, narrowed by the given filters
    pub async fn list_tasks(&self, user_id: &str, filters: TaskFilters) -> Result<Vec<Task>> {
        self.tasks.list_for_user(user_id, filters).await
    }

    /// Apply a partial update to a task
    ///
    /// Transitioning pending→completed stamps `completed_at`; any update that
    /// sets the status to pending clears it, keeping the status/timestamp
    /// invariant intact.
    pub async fn update_task(
        &self,
        user_id: &str,
        task_id: &str,
        update: TaskUpdate,
        now: i64,
    ) -> Result<Task> {
        let mut task = self.require_task(task_id, user_id).await?;

        if let Some(status) = update.status {
            match status {
                TaskStatus::Completed if task.status != TaskStatus::Completed => {
                    task.completed_at = Some(now);
                }
                TaskStatus::Pending => task.completed_at = None,
                TaskStatus::Completed => {}
            }
            task.status = status;
        }
        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if update.due_date.is_some() {
            task.due_date = update.due_date;
        }
        task.updated_at = now;

        self.tasks.update(task.clone()).await?;
        Ok(task)
    }

    /// Delete a task owned by the user
    pub async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<()> {
        self.require_task(task_id, user_id).await?;
        self.tasks.delete(task_id, user_id).await
    }

    /// Count of the user's tasks completed on `now`'s calendar day
    pub async fn completed_today_count(&self, user_id: &str, now: i64) -> Result<u32> {
        let (start, end) = day_window(date_of_timestamp(now));
        self.tasks.count_completed_in_window(user_id, start, end).await
    }

    async fn require_task(&self, task_id: &str, user_id: &str) -> Result<Task> {
        self.tasks
            .find_by_id_for_user(task_id, user_id)
            .await?
            .ok_or_else(|| FocusFlowError::NotFound(format!("task {task_id} not found")))
    }
}
