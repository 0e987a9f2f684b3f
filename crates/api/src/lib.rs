//! # FocusFlow API
//!
//! HTTP boundary for the FocusFlow backend.
//!
//! This crate contains:
//! - The application context (dependency wiring)
//! - Axum routes, request validation and the response envelope
//! - Error translation from domain errors to HTTP statuses

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;

pub use context::AppContext;
pub use routes::router;
