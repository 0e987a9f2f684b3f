//! # FocusFlow Domain
//!
//! Business domain types and models for FocusFlow.
//!
//! This crate contains:
//! - Domain data types (User, Task, Habit, ProductivityLog)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Calendar-day utilities shared across layers
//!
//! ## Architecture
//! - No dependencies on other FocusFlow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::day::{date_of_timestamp, day_window, same_calendar_day};
