//! Habit tracking and streak continuity

pub mod ports;
pub mod service;

pub use service::HabitService;
