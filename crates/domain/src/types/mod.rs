//! Domain data types

pub mod analytics;
pub mod habit;
pub mod task;
pub mod user;

pub use analytics::{ProductivityLog, SummaryPeriod, WeeklySummary};
pub use habit::{Habit, NewHabit};
pub use task::{NewTask, Task, TaskFilters, TaskPriority, TaskStatus, TaskUpdate};
pub use user::User;
