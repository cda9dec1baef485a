use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::jobs::{StoreError, SubmitError};

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Task not found: {0}")]
    JobNotFound(String),

    #[error("Task not completed: {0}")]
    JobNotCompleted(String),

    #[error("No download available for task {0}")]
    ArtifactMissing(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::UnknownTool(name) => ApiError::UnknownTool(name),
            SubmitError::EmptyInput => ApiError::BadRequest(err.to_string()),
            SubmitError::Store(StoreError::DuplicateJob(id)) => {
                ApiError::Conflict(format!("job id {id} already exists"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::UnknownTool(name) => {
                tracing::warn!(tool = %name, "Unknown tool");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Tool not found", format!("Tool: {}", name)),
                )
            }
            ApiError::JobNotFound(id) => {
                tracing::warn!(job_id = %id, "Task not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Task not found", format!("Task ID: {}", id)),
                )
            }
            ApiError::JobNotCompleted(id) => {
                tracing::warn!(job_id = %id, "Task not completed");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Task not completed", format!("Task ID: {}", id)),
                )
            }
            ApiError::ArtifactMissing(id) => {
                tracing::warn!(job_id = %id, "No download available");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("No download available", format!("Task ID: {}", id)),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(message = %msg, "Conflict");
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::with_details("Conflict", msg.clone()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    // Internal errors do not expose details to clients.
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
