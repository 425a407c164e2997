/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through the `CompletionModel` trait.
///
/// Model: llama-3.1-8b-instant (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod mock;

/// Default OpenAI-compatible endpoint. Overridable via `LLM_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// A backend that turns a system prompt plus user content into one text completion.
///
/// Carried in `AppState` as `Arc<dyn CompletionModel>` so tests can swap in
/// a scripted backend without touching handler code.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends a system + user exchange and returns the first choice, trimmed.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

/// Wraps an OpenAI-compatible `/chat/completions` endpoint.
///
/// One outbound call per `complete`; no retry and no client-side timeout.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    completions_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("brand-api/", env!("CARGO_PKG_VERSION")))
                .build()?,
            api_key,
            completions_url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    /// Makes a raw call to the completion endpoint, returning the full response object.
    pub async fn call(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionModel for LlmClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let response = self.call(system, user, temperature).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.trim().to_string())
    }
}
