//! Chat-completion providers.
//!
//! [`ChatProvider`] is the seam between the analysis workflow and whatever
//! hosted model answers it. [`GroqProvider`] speaks the OpenAI-compatible
//! `/chat/completions` protocol that Groq serves; tests and embedders can
//! inject their own implementation through
//! [`crate::config::AnalysisConfigBuilder::provider`].

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Who a [`ChatMessage`] is from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling options for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: usize,
}

/// The provider's answer, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatResponse {
    pub content: String,
    pub model: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
}

/// A hosted chat-completion backend.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Send one chat exchange and return the first completion.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<ChatResponse, ProviderError>;
}

// ── Groq (OpenAI-compatible) ─────────────────────────────────────────────

/// Client for Groq's OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct GroqProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GroqProvider {
    /// Build a provider with its own HTTP client.
    pub fn new(
        api_base: &str,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let client = build_client(timeout_secs)?;
        Ok(Self::with_client(client, api_base, api_key))
    }

    /// Build a provider on a shared HTTP client.
    pub fn with_client(client: reqwest::Client, api_base: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// HTTP client with a per-call timeout, shareable across providers.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .build()?)
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: usize,
}

#[derive(Deserialize)]
struct CompletionBody {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl ChatProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<ChatResponse, ProviderError> {
        let request = CompletionRequest {
            model: &options.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        debug!(
            "POST {} model={} messages={}",
            self.endpoint,
            options.model,
            messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(self.name(), status.as_u16(), retry_after, &body));
        }

        parse_completion(&body, &options.model)
    }
}

/// Map a non-success response to a [`ProviderError`].
///
/// The message comes from the OpenAI-style `{"error":{"message":…}}` body
/// when present, otherwise from the raw body.
fn status_error(provider: &str, status: u16, retry_after: Option<u64>, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| {
            let raw = body.trim();
            if raw.is_empty() {
                "no error details".to_string()
            } else {
                raw.to_string()
            }
        });
    let provider = provider.to_string();

    match status {
        401 | 403 => ProviderError::Auth {
            provider,
            status,
            message,
        },
        429 => ProviderError::RateLimited {
            provider,
            message,
            retry_after_secs: retry_after,
        },
        _ => ProviderError::Api {
            provider,
            status,
            message,
        },
    }
}

/// Pull the first choice out of a success body.
fn parse_completion(body: &str, requested_model: &str) -> Result<ChatResponse, ProviderError> {
    let parsed: CompletionBody =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ProviderError::EmptyResponse)?;

    let (prompt_tokens, completion_tokens) = parsed
        .usage
        .map(|u| (u.prompt_tokens, u.completion_tokens))
        .unwrap_or((0, 0));

    Ok(ChatResponse {
        content,
        model: parsed.model.unwrap_or_else(|| requested_model.to_string()),
        prompt_tokens,
        completion_tokens,
    })
}
