//! Axum route handlers for the Competency API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::guidance::{self, ExampleStory, SectionTips};
use crate::catalog::roles::{self, RoleProfile};
use crate::errors::AppError;
use crate::models::competency::{CompetencyEntry, CompetencySummary};
use crate::models::story::StarSection;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CompetencyListResponse {
    pub competencies: Vec<CompetencySummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CompetencyDetailResponse {
    pub name: String,
    #[serde(flatten)]
    pub entry: CompetencyEntry,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub competency: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: &'static [RoleProfile],
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RoleQuestionsResponse {
    pub role: &'static str,
    pub questions: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct RoleCompetencyView {
    pub name: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RoleDetailResponse {
    pub name: &'static str,
    pub competencies: Vec<RoleCompetencyView>,
    pub questions: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct RelevantQuery {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct RelevantCompetenciesResponse {
    pub role: &'static str,
    pub question: String,
    pub competencies: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RoleGuidanceResponse {
    pub role: &'static str,
    pub competency: &'static str,
    pub section: StarSection,
    pub prompt: String,
    pub clarifying_questions: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/competencies
pub async fn handle_list_competencies(
    State(state): State<AppState>,
) -> Json<CompetencyListResponse> {
    let competencies = state.catalog.summaries();
    Json(CompetencyListResponse {
        total: competencies.len(),
        competencies,
    })
}

/// GET /api/v1/competencies/:name
pub async fn handle_get_competency(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CompetencyDetailResponse>, AppError> {
    let entry = state.catalog.lookup(&name)?.clone();
    Ok(Json(CompetencyDetailResponse { name, entry }))
}

/// GET /api/v1/competencies/:name/questions
///
/// Behavioral prompts for the competency, with generic prompts as fallback
/// for entries that carry no questions.
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<QuestionsResponse>, AppError> {
    state.catalog.lookup(&name)?;
    let questions = guidance::behavioral_prompts(&state.catalog, &name);
    Ok(Json(QuestionsResponse {
        competency: name,
        questions,
    }))
}

/// GET /api/v1/competencies/:name/tips/:section
pub async fn handle_get_section_tips(
    State(state): State<AppState>,
    Path((name, section)): Path<(String, String)>,
) -> Result<Json<SectionTips>, AppError> {
    state.catalog.lookup(&name)?;
    let section: StarSection = section.parse().map_err(AppError::Validation)?;
    Ok(Json(guidance::section_tips(&name, section)))
}

/// GET /api/v1/competencies/:name/example
pub async fn handle_get_example(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ExampleStory>, AppError> {
    state.catalog.lookup(&name)?;
    guidance::example_story(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No example story for '{name}'")))
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RoleListResponse> {
    let roles = roles::roles();
    Json(RoleListResponse {
        roles,
        total: roles.len(),
    })
}

/// GET /api/v1/roles/:role
pub async fn handle_get_role(Path(name): Path<String>) -> Result<Json<RoleDetailResponse>, AppError> {
    let role = roles::role(&name)?;
    let competencies = role
        .competencies
        .iter()
        .map(|&comp| RoleCompetencyView {
            name: comp,
            description: roles::competency_detail(comp).map(|d| d.description),
        })
        .collect();
    Ok(Json(RoleDetailResponse {
        name: role.name,
        competencies,
        questions: roles::role_questions(role.name),
    }))
}

/// GET /api/v1/roles/:role/questions
pub async fn handle_get_role_questions(
    Path(name): Path<String>,
) -> Result<Json<RoleQuestionsResponse>, AppError> {
    let role = roles::role(&name)?;
    Ok(Json(RoleQuestionsResponse {
        role: role.name,
        questions: roles::role_questions(role.name),
    }))
}

/// GET /api/v1/roles/:role/relevant?question=...
///
/// Which of the role's competencies an interview question most likely targets.
pub async fn handle_relevant_competencies(
    Path(name): Path<String>,
    Query(query): Query<RelevantQuery>,
) -> Result<Json<RelevantCompetenciesResponse>, AppError> {
    let role = roles::role(&name)?;
    if query.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    Ok(Json(RelevantCompetenciesResponse {
        role: role.name,
        competencies: roles::relevant_competencies(&query.question, role.competencies),
        question: query.question,
    }))
}

/// GET /api/v1/roles/:role/guidance/:competency/:section
pub async fn handle_get_role_guidance(
    Path((name, competency, section)): Path<(String, String, String)>,
) -> Result<Json<RoleGuidanceResponse>, AppError> {
    let role = roles::role(&name)?;
    let section: StarSection = section.parse().map_err(AppError::Validation)?;
    let competency = role
        .competencies
        .iter()
        .copied()
        .find(|c| *c == competency)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "'{competency}' is not a competency for role '{}'",
                role.name
            ))
        })?;

    Ok(Json(RoleGuidanceResponse {
        role: role.name,
        competency,
        section,
        prompt: roles::section_prompt(competency, section),
        clarifying_questions: roles::clarifying_questions(competency, section),
    }))
}
