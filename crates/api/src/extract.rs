//! Request extractors

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use focusflow_domain::User;

use crate::context::AppContext;
use crate::error::ApiError;

/// The authenticated user, resolved from the `Authorization: Bearer` header
///
/// Verifies the token and loads the account, so handlers receive a user that
/// existed at the start of the request.
pub struct AuthUser(pub User);

impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("missing authorization header"))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("expected a bearer token"))?;

        let user = ctx.auth.authenticate(token).await?;
        Ok(Self(user))
    }
}
