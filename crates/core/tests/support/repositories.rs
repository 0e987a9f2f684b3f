//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core repository ports, enabling
//! deterministic unit tests without database dependencies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use focusflow_core::analytics::ports::{DailySnapshot, LogRepository};
use focusflow_core::auth::ports::{PasswordHasher, TokenService, UserRepository};
use focusflow_core::habits::ports::HabitRepository;
use focusflow_core::tasks::ports::TaskRepository;
use focusflow_domain::{
    FocusFlowError, Habit, ProductivityLog, Result as DomainResult, Task, TaskFilters, TaskStatus,
    User,
};

/// In-memory mock for `TaskRepository`.
#[derive(Default)]
pub struct MockTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

impl MockTaskRepository {
    /// Convenience helper for seeding a task.
    pub fn with_task(self, task: Task) -> Self {
        self.tasks.lock().expect("mock lock").push(task);
        self
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: Task) -> DomainResult<()> {
        self.tasks.lock().expect("mock lock").push(task);
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str, filters: TaskFilters) -> DomainResult<Vec<Task>> {
        let tasks = self.tasks.lock().expect("mock lock");
        let mut matched: Vec<Task> = tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .filter(|t| filters.status.map_or(true, |s| t.status == s))
            .filter(|t| filters.priority.map_or(true, |p| t.priority == p))
            .filter(|t| filters.due_before.map_or(true, |b| t.due_date.is_some_and(|d| d <= b)))
            .filter(|t| filters.due_after.map_or(true, |a| t.due_date.is_some_and(|d| d >= a)))
            .cloned()
            .collect();
        matched.sort_by_key(|t| std::cmp::Reverse(t.created_at));
        Ok(matched)
    }

    async fn find_by_id_for_user(
        &self,
        task_id: &str,
        user_id: &str,
    ) -> DomainResult<Option<Task>> {
        let tasks = self.tasks.lock().expect("mock lock");
        Ok(tasks.iter().find(|t| t.id == task_id && t.user_id == user_id).cloned())
    }

    async fn update(&self, task: Task) -> DomainResult<()> {
        let mut tasks = self.tasks.lock().expect("mock lock");
        if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        Ok(())
    }

    async fn delete(&self, task_id: &str, user_id: &str) -> DomainResult<()> {
        let mut tasks = self.tasks.lock().expect("mock lock");
        tasks.retain(|t| !(t.id == task_id && t.user_id == user_id));
        Ok(())
    }

    async fn count_completed_in_window(
        &self,
        user_id: &str,
        start: i64,
        end: i64,
    ) -> DomainResult<u32> {
        let tasks = self.tasks.lock().expect("mock lock");
        Ok(tasks
            .iter()
            .filter(|t| t.user_id == user_id && t.status == TaskStatus::Completed)
            .filter(|t| t.completed_at.is_some_and(|at| at >= start && at < end))
            .count() as u32)
    }
}

/// In-memory mock for `HabitRepository`.
#[derive(Default)]
pub struct MockHabitRepository {
    habits: Mutex<Vec<Habit>>,
}

impl MockHabitRepository {
    /// Convenience helper for seeding a habit.
    pub fn with_habit(self, habit: Habit) -> Self {
        self.habits.lock().expect("mock lock").push(habit);
        self
    }

    /// Snapshot of a stored habit, for asserting persisted state.
    pub fn stored(&self, habit_id: &str) -> Option<Habit> {
        self.habits.lock().expect("mock lock").iter().find(|h| h.id == habit_id).cloned()
    }
}

#[async_trait]
impl HabitRepository for MockHabitRepository {
    async fn create(&self, habit: Habit) -> DomainResult<()> {
        self.habits.lock().expect("mock lock").push(habit);
        Ok(())
    }

    async fn list_active_for_user(&self, user_id: &str) -> DomainResult<Vec<Habit>> {
        let habits = self.habits.lock().expect("mock lock");
        let mut matched: Vec<Habit> =
            habits.iter().filter(|h| h.user_id == user_id && h.is_active).cloned().collect();
        matched.sort_by_key(|h| std::cmp::Reverse(h.created_at));
        Ok(matched)
    }

    async fn find_by_id_for_user(
        &self,
        habit_id: &str,
        user_id: &str,
    ) -> DomainResult<Option<Habit>> {
        let habits = self.habits.lock().expect("mock lock");
        Ok(habits.iter().find(|h| h.id == habit_id && h.user_id == user_id).cloned())
    }

    async fn update(&self, habit: Habit) -> DomainResult<()> {
        let mut habits = self.habits.lock().expect("mock lock");
        if let Some(slot) = habits.iter_mut().find(|h| h.id == habit.id) {
            *slot = habit;
        }
        Ok(())
    }

    async fn soft_delete(&self, habit_id: &str, user_id: &str) -> DomainResult<()> {
        let mut habits = self.habits.lock().expect("mock lock");
        if let Some(slot) = habits.iter_mut().find(|h| h.id == habit_id && h.user_id == user_id) {
            slot.is_active = false;
        }
        Ok(())
    }

    async fn total_streak_bonus(&self, user_id: &str) -> DomainResult<f64> {
        let habits = self.habits.lock().expect("mock lock");
        Ok(habits
            .iter()
            .filter(|h| h.user_id == user_id && h.is_active)
            .map(|h| f64::from(h.streak) * 0.5)
            .sum())
    }
}

/// In-memory mock for `LogRepository`.
///
/// Enforces the one-record-per-user-per-day rule the way the SQLite unique
/// constraint does: upsert replaces in place.
#[derive(Default)]
pub struct MockLogRepository {
    logs: Mutex<Vec<ProductivityLog>>,
    next_id: AtomicU64,
}

#[async_trait]
impl LogRepository for MockLogRepository {
    async fn find_for_user_and_day(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Option<ProductivityLog>> {
        let logs = self.logs.lock().expect("mock lock");
        Ok(logs.iter().find(|l| l.user_id == user_id && l.date == date).cloned())
    }

    async fn upsert_for_user_and_day(
        &self,
        user_id: &str,
        date: NaiveDate,
        snapshot: DailySnapshot,
    ) -> DomainResult<ProductivityLog> {
        let mut logs = self.logs.lock().expect("mock lock");
        if let Some(slot) = logs.iter_mut().find(|l| l.user_id == user_id && l.date == date) {
            slot.tasks_completed = snapshot.tasks_completed;
            slot.focus_minutes = snapshot.focus_minutes;
            slot.habit_streak_bonus = snapshot.habit_streak_bonus;
            slot.score = snapshot.score;
            return Ok(slot.clone());
        }
        let log = ProductivityLog {
            id: format!("log-{}", self.next_id.fetch_add(1, Ordering::Relaxed)),
            user_id: user_id.to_string(),
            date,
            tasks_completed: snapshot.tasks_completed,
            focus_minutes: snapshot.focus_minutes,
            habit_streak_bonus: snapshot.habit_streak_bonus,
            score: snapshot.score,
            created_at: 0,
            updated_at: 0,
        };
        logs.push(log.clone());
        Ok(log)
    }

    async fn find_for_user_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<ProductivityLog>> {
        let logs = self.logs.lock().expect("mock lock");
        let mut matched: Vec<ProductivityLog> = logs
            .iter()
            .filter(|l| l.user_id == user_id && l.date >= from && l.date <= to)
            .cloned()
            .collect();
        matched.sort_by_key(|l| l.date);
        Ok(matched)
    }
}

/// In-memory mock for `UserRepository`.
#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> DomainResult<()> {
        let mut users = self.users.lock().expect("mock lock");
        if users.iter().any(|u| u.email == user.email) {
            return Err(FocusFlowError::Conflict("email already registered".to_string()));
        }
        users.push(user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.lock().expect("mock lock");
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let users = self.users.lock().expect("mock lock");
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn set_fcm_token(&self, user_id: &str, fcm_token: &str) -> DomainResult<()> {
        let mut users = self.users.lock().expect("mock lock");
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.fcm_token = Some(fcm_token.to_string());
        }
        Ok(())
    }
}

/// Reversible stand-in for the password hasher.
pub struct FakePasswordHasher;

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Transparent stand-in for the token service.
pub struct FakeTokenService;

impl TokenService for FakeTokenService {
    fn issue(&self, user_id: &str) -> DomainResult<String> {
        Ok(format!("token:{user_id}"))
    }

    fn verify(&self, token: &str) -> DomainResult<String> {
        token
            .strip_prefix("token:")
            .map(str::to_string)
            .ok_or_else(|| FocusFlowError::Auth("invalid token".to_string()))
    }
}
