//! # FocusFlow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - Use cases and services: auth, tasks, habits, productivity analytics
//!
//! ## Architecture Principles
//! - Only depends on `focusflow-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Services are stateless; collaborators are injected as `Arc<dyn Port>`

pub mod analytics;
pub mod auth;
pub mod habits;
pub mod tasks;

// Re-export specific items to avoid ambiguity
pub use analytics::ports::{DailySnapshot, LogRepository};
pub use analytics::score::calculate_score;
pub use analytics::AnalyticsService;
pub use auth::ports::{PasswordHasher, TokenService, UserRepository};
pub use auth::AuthService;
pub use habits::ports::HabitRepository;
pub use habits::HabitService;
pub use tasks::ports::TaskRepository;
pub use tasks::TaskService;
