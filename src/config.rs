//! Configuration types for a single document analysis.
//!
//! Everything one analysis needs lives in [`AnalysisConfig`], built via its
//! [`AnalysisConfigBuilder`]. The web UI builds a fresh config for every
//! form submission from the user's selections plus the server settings, so
//! nothing here outlives a request.

use crate::error::{AnalyzerError, API_KEY_ENV};
use crate::models;
use crate::prompts;
use crate::provider::ChatProvider;
use std::fmt;
use std::sync::Arc;

/// Default OpenAI-compatible endpoint of the Groq API.
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "GROQ_BASE_URL";

/// Temperature preselected in the UI.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens for one analysis.
pub const DEFAULT_MAX_TOKENS: usize = 1500;

/// Per-call timeout applied by the HTTP client.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Clamp a requested temperature into `[0.0, 1.0]`.
///
/// NaN has no meaningful position in the range and falls back to
/// [`DEFAULT_TEMPERATURE`].
pub fn clamp_temperature(t: f32) -> f32 {
    if t.is_nan() {
        DEFAULT_TEMPERATURE
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Configuration for one analysis request.
///
/// # Example
/// ```rust
/// use pdf_analyzer::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .model("mixtral-8x7b-32768")
///     .temperature(0.2)
///     .prompt("Summarise the document.")
///     .api_key("gsk_test")
///     .build()
///     .unwrap();
/// assert_eq!(config.max_tokens, 1500);
/// ```
#[derive(Clone)]
pub struct AnalysisConfig {
    /// Model identifier sent to the completion API.
    pub model: String,

    /// Sampling temperature. Always within `[0.0, 1.0]`. Default: 0.7.
    pub temperature: f32,

    /// System prompt. Sent verbatim, placeholders included.
    pub prompt: String,

    /// Maximum tokens the model may generate. Default: 1500.
    pub max_tokens: usize,

    /// API key. `None` (or empty) makes the analysis stop with
    /// [`AnalyzerError::MissingApiKey`] before any request is made.
    pub api_key: Option<String>,

    /// Name of the variable the key is read from; used in the error message.
    pub api_key_var: String,

    /// Base URL of the OpenAI-compatible API, without `/chat/completions`.
    pub api_base: String,

    /// Per-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Shared HTTP client for the Groq provider. `None` builds one per
    /// analysis with `api_timeout_secs`.
    pub http_client: Option<reqwest::Client>,

    /// Pre-constructed provider. Takes precedence over building a
    /// [`crate::provider::GroqProvider`] from `api_key` and `api_base`.
    pub provider: Option<Arc<dyn ChatProvider>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: models::default_model().id.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            prompt: prompts::default_prompt().text.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key: None,
            api_key_var: API_KEY_ENV.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            http_client: None,
            provider: None,
        }
    }
}

impl fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("prompt_len", &self.prompt.len())
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_var", &self.api_key_var)
            .field("api_base", &self.api_base)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("shared_client", &self.http_client.is_some())
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

impl AnalysisConfig {
    /// Create a new builder for `AnalysisConfig`.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            config: Self::default(),
        }
    }

    /// The API key, if one is set and non-empty.
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = clamp_temperature(t);
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the key from an optional value, e.g. a lookup that may miss.
    pub fn maybe_api_key(mut self, key: Option<String>) -> Self {
        self.config.api_key = key;
        self
    }

    /// Name of the variable the key comes from, for the missing-key message.
    pub fn api_key_var(mut self, var: impl Into<String>) -> Self {
        self.config.api_key_var = var.into();
        self
    }

    /// Read the key from `var` now. The variable name is remembered for
    /// the missing-key message.
    pub fn api_key_from_env(self, var: impl Into<String>) -> Self {
        let var = var.into();
        let key = std::env::var(&var).ok();
        self.maybe_api_key(key).api_key_var(var)
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_base = base.into();
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    /// Reuse an existing HTTP client (and its connection pool).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.config.http_client = Some(client);
        self
    }

    pub fn provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AnalysisConfig, AnalyzerError> {
        let c = &self.config;
        if c.model.trim().is_empty() {
            return Err(AnalyzerError::InvalidConfig(
                "model identifier must not be empty".into(),
            ));
        }
        if c.max_tokens == 0 {
            return Err(AnalyzerError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }
        if c.provider.is_none() {
            reqwest::Url::parse(&c.api_base).map_err(|e| {
                AnalyzerError::InvalidConfig(format!("invalid API base URL '{}': {e}", c.api_base))
            })?;
        }
        Ok(self.config)
    }
}
