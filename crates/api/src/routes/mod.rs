//! HTTP routes
//!
//! All responses share the `{ success, data }` envelope; errors are
//! translated by [`crate::error::ApiError`].

pub mod analytics;
pub mod auth;
pub mod habits;
pub mod health;
pub mod tasks;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::context::AppContext;

/// Success envelope wrapping every response body
#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

pub(crate) fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { success: true, data })
}

/// Build the full application router
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .nest("/api/auth", auth::routes())
        .nest("/api/tasks", tasks::routes())
        .nest("/api/habits", habits::routes())
        .nest("/api/analytics", analytics::routes())
        .with_state(ctx)
}
