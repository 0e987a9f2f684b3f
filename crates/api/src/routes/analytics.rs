//! Productivity analytics routes

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use focusflow_domain::{ProductivityLog, WeeklySummary};
use serde::Deserialize;

use super::{ok, Envelope};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::AuthUser;

pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/focus", post(log_focus))
        .route("/daily", get(daily))
        .route("/weekly", get(weekly))
}

#[derive(Deserialize)]
struct FocusRequest {
    focus_minutes: u32,
}

async fn log_focus(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Json(body): Json<FocusRequest>,
) -> Result<Json<Envelope<ProductivityLog>>, ApiError> {
    if body.focus_minutes < 1 || body.focus_minutes > 480 {
        return Err(ApiError::validation("focus_minutes must be between 1 and 480"));
    }

    let log =
        ctx.analytics.log_focus_time(&user.id, body.focus_minutes, Utc::now().timestamp()).await?;
    Ok(ok(log))
}

async fn daily(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
) -> Result<Json<Envelope<ProductivityLog>>, ApiError> {
    let log = ctx.analytics.daily_log(&user.id, Utc::now().timestamp()).await?;
    Ok(ok(log))
}

async fn weekly(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
) -> Result<Json<Envelope<WeeklySummary>>, ApiError> {
    let summary = ctx.analytics.weekly_summary(&user.id, Utc::now().timestamp()).await?;
    Ok(ok(summary))
}
