//! JSON bodies of the HTTP surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::YieldError;

/// Body of a successful yield move.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    /// Always `true`.
    pub success: bool,
    /// Route transaction hash; same-chain moves only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Body of an informational endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// An error rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 500 with a fixed message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// 400 carrying the error's display text.
    pub fn bad_request(err: &YieldError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

/// Provider failures carry the aggregator's raw body, which stays in logs.
impl From<YieldError> for ApiError {
    fn from(err: YieldError) -> Self {
        match err {
            YieldError::RouteProvider(_) => Self::internal("Enso request failed"),
            other => Self::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
