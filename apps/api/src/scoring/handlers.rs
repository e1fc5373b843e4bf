//! Axum route handlers for scoring and drafting progress.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::story::{ScoreLabel, Story, StoryProgress};
use crate::scoring::rubric::{self, LabelRubric};
use crate::scoring::ScoreReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub report: ScoreReport,
    /// The submitted story with its label set, ready to be saved.
    pub story: Story,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub story: Story,
    pub label: ScoreLabel,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub label: ScoreLabel,
    pub feedback: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LabelsResponse {
    pub labels: Vec<LabelRubric>,
}

/// POST /api/v1/stories/score
///
/// Scores a completed story. Nothing is persisted.
pub async fn handle_score_story(
    State(state): State<AppState>,
    Json(story): Json<Story>,
) -> Result<Json<ScoreResponse>, AppError> {
    let report = state.engine.score(&story)?;
    tracing::debug!(
        competency = %story.competency,
        label = %report.label,
        "Scored story"
    );
    Ok(Json(ScoreResponse {
        story: story.with_score(report.label),
        report,
    }))
}

/// POST /api/v1/stories/feedback
///
/// Feedback for a label the caller already holds, e.g. the score of a saved
/// attempt. The rubric is not re-run.
pub async fn handle_feedback_for_label(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let feedback = state.engine.feedback(&request.story, request.label)?;
    Ok(Json(FeedbackResponse {
        label: request.label,
        feedback,
    }))
}

/// POST /api/v1/stories/progress
pub async fn handle_story_progress(Json(story): Json<Story>) -> Json<StoryProgress> {
    Json(story.progress())
}

/// GET /api/v1/labels
pub async fn handle_list_labels() -> Json<LabelsResponse> {
    Json(LabelsResponse {
        labels: rubric::full_rubric(),
    })
}
