//! Habit routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete as delete_route, get, put};
use axum::{Json, Router};
use chrono::Utc;
use focusflow_domain::{Habit, NewHabit};
use serde::Serialize;

use super::{ok, Envelope};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::AuthUser;

pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}/checkin", put(check_in))
        .route("/{id}", delete_route(delete))
}

async fn create(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Json(body): Json<NewHabit>,
) -> Result<(StatusCode, Json<Envelope<Habit>>), ApiError> {
    if body.name.trim().is_empty() || body.name.chars().count() > 100 {
        return Err(ApiError::validation("name must be 1-100 characters"));
    }
    if body.description.chars().count() > 500 {
        return Err(ApiError::validation("description must be at most 500 characters"));
    }

    let habit = ctx.habits.create_habit(&user.id, body, Utc::now().timestamp()).await?;
    Ok((StatusCode::CREATED, ok(habit)))
}

async fn list(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
) -> Result<Json<Envelope<Vec<Habit>>>, ApiError> {
    let habits = ctx.habits.list_habits(&user.id).await?;
    Ok(ok(habits))
}

async fn check_in(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(habit_id): Path<String>,
) -> Result<Json<Envelope<Habit>>, ApiError> {
    let habit = ctx.habits.check_in(&user.id, &habit_id, Utc::now().timestamp()).await?;
    Ok(ok(habit))
}

#[derive(Serialize)]
struct Deleted {
    deleted: bool,
}

async fn delete(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(habit_id): Path<String>,
) -> Result<Json<Envelope<Deleted>>, ApiError> {
    ctx.habits.delete_habit(&user.id, &habit_id).await?;
    Ok(ok(Deleted { deleted: true }))
}
