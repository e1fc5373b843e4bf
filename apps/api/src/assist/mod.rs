//! Writing assists backed by the text-generation collaborator.
//!
//! Every operation returns an `AssistReply`; collaborator failures are rendered
//! into the reply text and never reach the caller as errors. Nothing here
//! feeds back into scoring.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::llm_client::prompts::{CHAT_SYSTEM, COACH_SYSTEM};
use crate::llm_client::{ChatTurn, CollaboratorError, TextGenerator};
use crate::models::story::{StarSection, Story};

pub mod handlers;
pub mod prompts;

pub const CHAT_TIMEOUT_MESSAGE: &str = "[AI Chat Error: The request timed out. Please try again.]";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssistReply {
    pub text: String,
    pub is_error: bool,
}

impl AssistReply {
    fn ok(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

#[derive(Clone)]
pub struct WritingAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl WritingAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Drafts one section given the story so far.
    pub async fn suggest_section(
        &self,
        section: StarSection,
        competency: &str,
        question: &str,
        story: &Story,
    ) -> AssistReply {
        let prompt = prompts::suggest_section(section, competency, question, story);
        self.generate("suggest", &prompt).await
    }

    pub async fn check_grammar(&self, section: StarSection, text: &str) -> AssistReply {
        if text.trim().is_empty() {
            return empty_section(section);
        }
        self.generate("grammar", &prompts::grammar(section, text)).await
    }

    pub async fn check_tone(&self, section: StarSection, text: &str) -> AssistReply {
        if text.trim().is_empty() {
            return empty_section(section);
        }
        self.generate("tone", &prompts::tone(section, text)).await
    }

    /// Full-story writing review; all four sections must be filled in.
    pub async fn review_story(&self, story: &Story) -> AssistReply {
        if let Some(section) = StarSection::ALL
            .into_iter()
            .find(|s| story.section(*s).trim().is_empty())
        {
            return empty_section(section);
        }
        self.generate("review", &prompts::review(story)).await
    }

    /// Continues a coaching conversation with `message` as the newest user turn.
    pub async fn chat(&self, history: &[ChatTurn], message: &str) -> AssistReply {
        let mut turns = history.to_vec();
        turns.push(ChatTurn::user(message));

        match self.generator.chat(CHAT_SYSTEM, &turns).await {
            Ok(text) => AssistReply::ok(text),
            Err(CollaboratorError::Timeout) => {
                warn!("Coach chat timed out");
                AssistReply::error(CHAT_TIMEOUT_MESSAGE.to_string())
            }
            Err(e) => {
                warn!("Coach chat failed: {e}");
                AssistReply::error(format!("[AI Chat Error: {e}]"))
            }
        }
    }

    async fn generate(&self, kind: &str, prompt: &str) -> AssistReply {
        match self.generator.generate_text(COACH_SYSTEM, prompt).await {
            Ok(text) => AssistReply::ok(text),
            Err(e) => {
                warn!("{kind} assist failed: {e}");
                AssistReply::error(format!("[AI Error: {e}]"))
            }
        }
    }
}

fn empty_section(section: StarSection) -> AssistReply {
    AssistReply::error(format!(
        "Fill in the {} section before asking for feedback.",
        section.title()
    ))
}
