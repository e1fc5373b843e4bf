use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::roles::UnknownRole;
use crate::catalog::UnknownCompetency;
use crate::scoring::ScoringError;
use crate::stories::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Incomplete story: missing {}", .0.join(", "))]
    IncompleteStory(Vec<&'static str>),

    #[error(transparent)]
    UnknownCompetency(#[from] UnknownCompetency),

    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::IncompleteStory { missing } => AppError::IncompleteStory(missing),
            ScoringError::UnknownCompetency(e) => AppError::UnknownCompetency(e),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => AppError::NotFound(format!("No saved stories under '{key}'")),
            StoreError::InvalidKey(key) => {
                AppError::Validation(format!("'{key}' is not a valid story key"))
            }
            StoreError::Incomplete(missing) => AppError::IncompleteStory(missing),
            StoreError::Unscored => {
                AppError::Validation("Story must be scored before it is saved".to_string())
            }
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::IncompleteStory(missing) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INCOMPLETE_STORY",
                format!(
                    "Please complete every part of the story before scoring. Missing: {}",
                    missing.join(", ")
                ),
            ),
            AppError::UnknownCompetency(e) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_COMPETENCY", e.to_string())
            }
            AppError::UnknownRole(e) => (StatusCode::NOT_FOUND, "UNKNOWN_ROLE", e.to_string()),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
