//! Axum route handlers for the Assist API.
//!
//! Collaborator failures come back as `200` with `is_error: true`; only
//! malformed requests are rejected.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assist::AssistReply;
use crate::errors::AppError;
use crate::llm_client::ChatTurn;
use crate::models::story::{StarSection, Story};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestSectionRequest {
    pub section: StarSection,
    pub story: Story,
}

#[derive(Debug, Deserialize)]
pub struct SectionTextRequest {
    pub section: StarSection,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

/// POST /api/v1/assist/section
pub async fn handle_suggest_section(
    State(state): State<AppState>,
    Json(request): Json<SuggestSectionRequest>,
) -> Result<Json<AssistReply>, AppError> {
    let story = &request.story;
    state.catalog.lookup(&story.competency)?;

    let reply = state
        .assistant
        .suggest_section(request.section, &story.competency, &story.question, story)
        .await;
    Ok(Json(reply))
}

/// POST /api/v1/assist/grammar
pub async fn handle_check_grammar(
    State(state): State<AppState>,
    Json(request): Json<SectionTextRequest>,
) -> Result<Json<AssistReply>, AppError> {
    require_text(&request)?;
    Ok(Json(
        state
            .assistant
            .check_grammar(request.section, &request.text)
            .await,
    ))
}

/// POST /api/v1/assist/tone
pub async fn handle_check_tone(
    State(state): State<AppState>,
    Json(request): Json<SectionTextRequest>,
) -> Result<Json<AssistReply>, AppError> {
    require_text(&request)?;
    Ok(Json(
        state.assistant.check_tone(request.section, &request.text).await,
    ))
}

/// POST /api/v1/assist/review
pub async fn handle_review_story(
    State(state): State<AppState>,
    Json(story): Json<Story>,
) -> Result<Json<AssistReply>, AppError> {
    let progress = story.progress();
    if progress.filled_sections < progress.total_sections {
        return Err(AppError::Validation(
            "Fill all STAR sections to request a writing review".to_string(),
        ));
    }
    Ok(Json(state.assistant.review_story(&story).await))
}

/// POST /api/v1/assist/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<AssistReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    Ok(Json(
        state
            .assistant
            .chat(&request.history, &request.message)
            .await,
    ))
}

fn require_text(request: &SectionTextRequest) -> Result<(), AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "{} text cannot be empty",
            request.section.as_str()
        )));
    }
    Ok(())
}
