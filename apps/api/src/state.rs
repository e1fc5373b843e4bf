use std::sync::Arc;

use crate::assist::WritingAssistant;
use crate::catalog::CompetencyCatalog;
use crate::config::Config;
use crate::scoring::ScoringEngine;
use crate::stories::store::StoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only competency catalog, built once at startup.
    pub catalog: Arc<CompetencyCatalog>,
    /// Scoring engine sharing the same catalog.
    pub engine: ScoringEngine,
    pub store: StoryStore,
    /// Writing assists. Backed by `DisabledGenerator` when no API key is configured.
    pub assistant: WritingAssistant,
    pub config: Config,
}
