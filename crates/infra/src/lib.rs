//! # FocusFlow Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite repository implementations behind an r2d2 pool
//! - Password hashing and token signing adapters
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `focusflow-core`
//! - Depends on `focusflow-domain` and `focusflow-core`
//! - Contains all "impure" code (I/O, crypto)

pub mod auth;
pub mod config;
pub mod database;

// Re-export commonly used items
pub use auth::{Argon2PasswordHasher, JwtTokenService};
pub use database::{
    DbManager, SqliteHabitRepository, SqliteLogRepository, SqliteTaskRepository,
    SqliteUserRepository,
};
