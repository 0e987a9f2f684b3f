//! Productivity analytics: scoring and daily/weekly aggregation

pub mod ports;
pub mod score;
pub mod service;

pub use service::AnalyticsService;
