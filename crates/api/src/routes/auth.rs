//! Account routes: registration, login, profile, push token

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use focusflow_domain::User;
use serde::{Deserialize, Serialize};

use super::{ok, Envelope};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::AuthUser;

pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/fcm-token", put(update_fcm_token))
}

#[derive(Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct FcmTokenRequest {
    fcm_token: String,
}

/// User plus the token issued for it
#[derive(Serialize)]
struct AuthData {
    user: User,
    token: String,
}

async fn register(
    State(ctx): State<AppContext>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Envelope<AuthData>>), ApiError> {
    let name = body.name.trim();
    let name_chars = name.chars().count();
    if name_chars < 2 || name_chars > 50 {
        return Err(ApiError::validation("name must be 2-50 characters"));
    }
    if !body.email.contains('@') {
        return Err(ApiError::validation("email is not valid"));
    }
    let password_chars = body.password.chars().count();
    if password_chars < 6 || password_chars > 100 {
        return Err(ApiError::validation("password must be 6-100 characters"));
    }

    let now = Utc::now().timestamp();
    let (user, token) = ctx.auth.register(name, &body.email, &body.password, now).await?;
    Ok((StatusCode::CREATED, ok(AuthData { user, token })))
}

async fn login(
    State(ctx): State<AppContext>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Envelope<AuthData>>, ApiError> {
    let (user, token) = ctx.auth.login(&body.email, &body.password).await?;
    Ok(ok(AuthData { user, token }))
}

async fn me(AuthUser(user): AuthUser) -> Json<Envelope<User>> {
    ok(user)
}

async fn update_fcm_token(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Json(body): Json<FcmTokenRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    if body.fcm_token.trim().is_empty() {
        return Err(ApiError::validation("fcm_token must not be empty"));
    }
    ctx.auth.update_fcm_token(&user.id, &body.fcm_token).await?;
    Ok(ok(()))
}
