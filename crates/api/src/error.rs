//! Error translation from domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use focusflow_domain::FocusFlowError;
use serde::Serialize;
use tracing::error;

/// Error returned from any route handler or extractor
#[derive(Debug)]
pub struct ApiError(FocusFlowError);

impl ApiError {
    /// Reject a request at the boundary before it reaches a service
    pub fn validation(message: impl Into<String>) -> Self {
        Self(FocusFlowError::InvalidInput(message.into()))
    }

    /// Reject a request that carries no usable credentials
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(FocusFlowError::Auth(message.into()))
    }
}

impl From<FocusFlowError> for ApiError {
    fn from(err: FocusFlowError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FocusFlowError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            FocusFlowError::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            FocusFlowError::InvalidInput(message) | FocusFlowError::AlreadyCheckedIn(message) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            FocusFlowError::Auth(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            FocusFlowError::Database(_) | FocusFlowError::Config(_) | FocusFlowError::Internal(_) => {
                // Internal detail stays in the logs
                error!(error = %self.0, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { success: false, message })).into_response()
    }
}
