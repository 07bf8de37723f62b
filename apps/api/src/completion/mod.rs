//! Completion client — the single point of entry for all text-generation
//! calls in this service.
//!
//! ARCHITECTURAL RULE: no other module talks to the completion provider
//! directly; all generation goes through `CompletionClient`.
//!
//! The client is deliberately retry-free: a transport or provider failure
//! surfaces immediately as a typed error and the request that triggered it
//! fails. Nothing here ever substitutes fabricated text for a failed call.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const TOGETHER_API_URL: &str = "https://api.together.xyz/v1/chat/completions";

/// The model used for all completion calls.
pub const MODEL: &str = "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo";

// Tunable sampling defaults, not correctness constraints.
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport, auth, or rate-limit failure from the underlying call.
    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service answered, but the payload lacked the expected structure.
    #[error("Completion response malformed: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for the Together API (OpenAI-compatible wire).
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends one single-turn conversation (system persona + user prompt) and
    /// returns the full reply text atomically — no streaming, no retries.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        };

        let response = self
            .client
            .post(TOGETHER_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CompletionError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ServiceUnavailable(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let text = first_choice_text(parsed)?;
        debug!("Completion call succeeded ({} chars)", text.len());
        Ok(text)
    }
}

/// Extracts the trimmed text of the first choice, rejecting structurally
/// empty payloads as `MalformedResponse`.
fn first_choice_text(response: ChatResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("response contained no choices".to_string()))?;

    let content = choice.message.content.ok_or_else(|| {
        CompletionError::MalformedResponse("first choice had no message content".to_string())
    })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CompletionError::MalformedResponse(
            "first choice content was empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
