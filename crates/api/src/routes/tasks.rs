//! Task routes

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use focusflow_domain::{NewTask, Task, TaskFilters, TaskUpdate};
use serde::Serialize;

use super::{ok, Envelope};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::AuthUser;

pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(delete))
}

fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() || title.chars().count() > 200 {
        return Err(ApiError::validation("title must be 1-200 characters"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ApiError> {
    if description.chars().count() > 1000 {
        return Err(ApiError::validation("description must be at most 1000 characters"));
    }
    Ok(())
}

async fn create(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Json(body): Json<NewTask>,
) -> Result<(StatusCode, Json<Envelope<Task>>), ApiError> {
    validate_title(&body.title)?;
    validate_description(&body.description)?;

    let task = ctx.tasks.create_task(&user.id, body, Utc::now().timestamp()).await?;
    Ok((StatusCode::CREATED, ok(task)))
}

async fn list(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Query(filters): Query<TaskFilters>,
) -> Result<Json<Envelope<Vec<Task>>>, ApiError> {
    let tasks = ctx.tasks.list_tasks(&user.id, filters).await?;
    Ok(ok(tasks))
}

async fn update(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
    Json(body): Json<TaskUpdate>,
) -> Result<Json<Envelope<Task>>, ApiError> {
    if let Some(title) = &body.title {
        validate_title(title)?;
    }
    if let Some(description) = &body.description {
        validate_description(description)?;
    }

    let task = ctx.tasks.update_task(&user.id, &task_id, body, Utc::now().timestamp()).await?;
    Ok(ok(task))
}

#[derive(Serialize)]
struct Deleted {
    deleted: bool,
}

async fn delete(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
) -> Result<Json<Envelope<Deleted>>, ApiError> {
    ctx.tasks.delete_task(&user.id, &task_id).await?;
    Ok(ok(Deleted { deleted: true }))
}
