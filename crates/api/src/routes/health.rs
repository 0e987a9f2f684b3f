//! Health check route

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::{ok, Envelope};
use crate::context::AppContext;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Verify database connectivity and report liveness
pub async fn check(State(ctx): State<AppContext>) -> Result<Json<Envelope<HealthStatus>>, ApiError> {
    ctx.db.health_check()?;
    Ok(ok(HealthStatus { status: "ok" }))
}
