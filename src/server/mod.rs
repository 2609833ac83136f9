//! Web UI for analysing PDF documents.
//!
//! One page, one form. Every submission re-runs the whole workflow from the
//! submitted values: nothing is kept between requests, so the page always
//! reflects exactly what the user sent.
//!
//! - `GET /`: configuration form with defaults
//! - `POST /analyze`: multipart form: preview extracted text, or analyse
//! - `GET /health`: liveness probe

mod form;
mod handlers;
mod routes;
mod templates;

pub use form::{AnalysisForm, FormAction, Selection};
pub use routes::create_router;
pub use templates::IndexTemplate;

use crate::config::{AnalysisConfig, DEFAULT_API_BASE, DEFAULT_API_TIMEOUT_SECS};
use crate::error::{AnalyzerError, ProviderError, API_KEY_ENV};
use crate::provider::{build_client, ChatProvider};
use std::fmt;
use std::sync::Arc;

/// Where the API key comes from.
#[derive(Clone)]
pub enum ApiKeySource {
    /// Read the named environment variable on every analysis, so a key
    /// exported after startup is picked up without a restart.
    Env(String),
    /// A fixed value; `None` behaves like an unset variable.
    Fixed(Option<String>),
}

impl ApiKeySource {
    /// Name shown in the missing-key message.
    pub fn var_name(&self) -> &str {
        match self {
            ApiKeySource::Env(var) => var,
            ApiKeySource::Fixed(_) => API_KEY_ENV,
        }
    }

    /// Current key, if any.
    pub fn resolve(&self) -> Option<String> {
        match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Fixed(key) => key.clone(),
        }
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        ApiKeySource::Env(API_KEY_ENV.to_string())
    }
}

impl fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            ApiKeySource::Fixed(key) => f
                .debug_tuple("Fixed")
                .field(&key.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// Serving options.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Base URL of the completion API.
    pub api_base: String,
    /// Per-call timeout in seconds.
    pub api_timeout_secs: u64,
    pub api_key: ApiKeySource,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            api_base: DEFAULT_API_BASE.to_string(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            api_key: ApiKeySource::default(),
        }
    }
}

/// Shared state for the web server. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<ServerSettings>,
    /// One HTTP client for every analysis; carries the per-call timeout.
    pub client: reqwest::Client,
    /// Provider override; `None` builds a Groq provider per analysis on
    /// the shared client.
    pub provider: Option<Arc<dyn ChatProvider>>,
}

impl AppState {
    pub fn new(settings: ServerSettings) -> Result<Self, ProviderError> {
        let client = build_client(settings.api_timeout_secs)?;
        Ok(Self {
            settings: Arc::new(settings),
            client,
            provider: None,
        })
    }

    pub fn with_provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the config for one analysis from the user's selection.
    pub fn analysis_config(&self, selection: &Selection) -> Result<AnalysisConfig, AnalyzerError> {
        let settings = &self.settings;
        let mut builder = AnalysisConfig::builder()
            .model(selection.model.id)
            .temperature(selection.temperature)
            .prompt(selection.prompt_text.clone())
            .maybe_api_key(settings.api_key.resolve())
            .api_key_var(settings.api_key.var_name())
            .api_base(settings.api_base.clone())
            .api_timeout_secs(settings.api_timeout_secs)
            .http_client(self.client.clone());

        if let Some(ref provider) = self.provider {
            builder = builder.provider(Arc::clone(provider));
        }

        builder.build()
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let addr = (state.settings.host.clone(), state.settings.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Serving PDF analyzer at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
