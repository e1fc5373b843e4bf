//! Story Scoring & Feedback Engine.
//!
//! Pure and synchronous: measures a completed story against its competency,
//! runs the ordered rubric, and builds feedback. The only shared state is the
//! injected read-only catalog, so concurrent calls need no locking.
//! AI assists live in `crate::assist` and never feed into this module.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{CompetencyCatalog, UnknownCompetency};
use crate::models::story::{ScoreLabel, Story};

pub mod classifier;
pub mod feedback;
pub mod handlers;
pub mod measures;
pub mod rubric;

use measures::StoryMeasures;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringError {
    #[error("Story is incomplete; missing: {}", missing.join(", "))]
    IncompleteStory { missing: Vec<&'static str> },

    #[error(transparent)]
    UnknownCompetency(#[from] UnknownCompetency),
}

/// Result of scoring one story.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreReport {
    pub label: ScoreLabel,
    pub description: &'static str,
    pub summary: &'static str,
    pub feedback: Vec<String>,
    pub measures: StoryMeasures,
}

#[derive(Clone)]
pub struct ScoringEngine {
    catalog: Arc<CompetencyCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<CompetencyCatalog>) -> Self {
        Self { catalog }
    }

    /// Scores a story. Fails without a label when a required field is empty
    /// or the competency is not in the catalog. The story is never modified.
    pub fn score(&self, story: &Story) -> Result<ScoreReport, ScoringError> {
        let missing = story.missing_for_scoring();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteStory { missing });
        }

        let competency = self.catalog.lookup(&story.competency)?;
        let measures = StoryMeasures::measure(story, competency);
        let label = classifier::classify(&measures);
        let feedback = feedback::build_feedback(&story.competency, competency, &measures, label);

        Ok(ScoreReport {
            label,
            description: rubric::description(label),
            summary: rubric::summary(label),
            feedback,
            measures,
        })
    }

    /// Feedback for an already-chosen label, without re-running the rubric.
    pub fn feedback(&self, story: &Story, label: ScoreLabel) -> Result<Vec<String>, ScoringError> {
        let missing = story.missing_for_scoring();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteStory { missing });
        }
        let competency = self.catalog.lookup(&story.competency)?;
        let measures = StoryMeasures::measure(story, competency);
        Ok(feedback::build_feedback(
            &story.competency,
            competency,
            &measures,
            label,
        ))
    }
}
