//! Axum route handlers for the Story API.
//!
//! Store I/O is blocking file access and runs on the blocking pool.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::story::Story;
use crate::scoring::ScoreReport;
use crate::state::AppState;
use crate::stories::store::SavedStory;

#[derive(Debug, Serialize)]
pub struct SaveStoryResponse {
    #[serde(flatten)]
    pub saved: SavedStory,
    pub report: ScoreReport,
}

#[derive(Debug, Serialize)]
pub struct StoryListResponse {
    pub keys: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StoryHistoryResponse {
    pub key: String,
    pub stories: Vec<Story>,
}

/// POST /api/v1/stories
///
/// Re-scores the story server-side (any client-supplied label is replaced),
/// then appends it to its question + competency history.
pub async fn handle_save_story(
    State(state): State<AppState>,
    Json(story): Json<Story>,
) -> Result<(StatusCode, Json<SaveStoryResponse>), AppError> {
    if story.question.trim().is_empty() {
        return Err(AppError::Validation(
            "question is required to save a story".to_string(),
        ));
    }

    let report = state.engine.score(&story)?;
    let scored = story.with_score(report.label);

    let store = state.store.clone();
    let saved = tokio::task::spawn_blocking(move || store.append(&scored))
        .await
        .map_err(anyhow::Error::from)??;

    tracing::info!(key = %saved.key, attempts = saved.attempts, "Story saved");

    Ok((StatusCode::CREATED, Json(SaveStoryResponse { saved, report })))
}

/// GET /api/v1/stories
pub async fn handle_list_stories(
    State(state): State<AppState>,
) -> Result<Json<StoryListResponse>, AppError> {
    let store = state.store.clone();
    let keys = tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(anyhow::Error::from)??;

    Ok(Json(StoryListResponse {
        total: keys.len(),
        keys,
    }))
}

/// GET /api/v1/stories/:key
///
/// Every saved attempt under `key`, oldest first.
pub async fn handle_get_story_history(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StoryHistoryResponse>, AppError> {
    let store = state.store.clone();
    let lookup = key.clone();
    let stories = tokio::task::spawn_blocking(move || store.load(&lookup))
        .await
        .map_err(anyhow::Error::from)??;

    Ok(Json(StoryHistoryResponse { key, stories }))
}

/// GET /api/v1/stories/:key/latest
pub async fn handle_get_latest_story(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Story>, AppError> {
    let store = state.store.clone();
    let story = tokio::task::spawn_blocking(move || store.latest(&key))
        .await
        .map_err(anyhow::Error::from)??;

    Ok(Json(story))
}
