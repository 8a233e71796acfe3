//! Handler error type and its HTTP rendering.
//!
//! Every error leaves the server as `{"message": "..."}` with the status
//! code of its variant. The `NotFound` text is matched verbatim by clients.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo with the id {0} not found.")]
    NotFound(i64),

    #[error("Todo id {body} does not match path id {path}.")]
    IdMismatch { path: i64, body: i64 },

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("No route for {method} {path}.")]
    RouteNotFound { method: Method, path: String },

    #[error("Method {method} is not allowed on {path}.")]
    MethodNotAllowed { method: Method, path: String },

    /// Every `i64` id has been handed out.
    #[error("No todo ids left.")]
    IdsExhausted,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::InvalidPath(rejection) => rejection.status(),
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::IdsExhausted => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warn!(%status, %message, "request failed");
        (status, Json(ErrorBody { message })).into_response()
    }
}
