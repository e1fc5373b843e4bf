//! LLM client: the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! Callers depend on the `TextGenerator` trait, never on `LlmClient` itself,
//! and the scoring engine depends on neither.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all assist calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("AI assistant is not configured (set ANTHROPIC_API_KEY)")]
    NotConfigured,
}

impl From<reqwest::Error> for CollaboratorError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CollaboratorError::Timeout
        } else {
            CollaboratorError::Http(e)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message of a conversation with the coach.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Capability seam for remote text generation.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Single-prompt completion.
    async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, CollaboratorError> {
        self.chat(system, &[ChatTurn::user(prompt)]).await
    }

    /// Multi-turn completion; the last turn should be from the user.
    async fn chat(&self, system: &str, turns: &[ChatTurn]) -> Result<String, CollaboratorError>;
}

/// Stand-in used when no API key is configured.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn chat(&self, _system: &str, _turns: &[ChatTurn]) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::NotConfigured)
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: ChatRole,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the trimmed text of the first non-blank text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API with a bounded timeout and retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {e}");
            Client::new()
        });
        Self { client, api_key }
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    /// Retries on 429 (rate limit), 5xx and transport errors with exponential backoff.
    pub async fn call(
        &self,
        system: &str,
        turns: &[ChatTurn],
    ) -> Result<LlmResponse, CollaboratorError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: turns
                .iter()
                .map(|t| AnthropicMessage {
                    role: t.role,
                    content: &t.content,
                })
                .collect(),
        };

        let mut last_error: Option<CollaboratorError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(CollaboratorError::from(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(CollaboratorError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CollaboratorError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&body),
                });
            }

            let body = response.text().await?;
            let llm_response = parse_response(&body)?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(CollaboratorError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn chat(&self, system: &str, turns: &[ChatTurn]) -> Result<String, CollaboratorError> {
        let response = self.call(system, turns).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(CollaboratorError::EmptyContent)
    }
}

/// Decodes a success body; a malformed body is a `Parse` error, not a transport one.
fn parse_response(body: &str) -> Result<LlmResponse, CollaboratorError> {
    Ok(serde_json::from_str(body)?)
}

/// Prefers the structured error message; falls back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<AnthropicError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}
