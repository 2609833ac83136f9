//! Server binary for pdf-analyzer.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ServerSettings` and serves the web UI until interrupted.

use anyhow::{Context, Result};
use clap::Parser;
use pdf_analyzer::server::{self, ApiKeySource, AppState, ServerSettings};
use pdf_analyzer::{API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE};
use std::io;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"ENVIRONMENT:
  GROQ_API_KEY     API key for the Groq completion API. Read on every
                   analysis, so it can be exported without a restart.
  GROQ_BASE_URL    Override the API base URL (any OpenAI-compatible server).
  RUST_LOG         Log filter; takes precedence over --verbose/--quiet.

EXAMPLES:
  pdf-analyzer
  pdf-analyzer --host 0.0.0.0 --port 8080
  GROQ_BASE_URL=http://localhost:11434/v1 pdf-analyzer --api-timeout 300
"#;

/// Analyse PDF documents with Groq-hosted language models.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-analyzer",
    version,
    about = "Serve a web UI that analyses uploaded PDFs with Groq-hosted LLMs",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "PDF_ANALYZER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PDF_ANALYZER_PORT", default_value_t = 8501)]
    port: u16,

    /// Base URL of the OpenAI-compatible completion API.
    #[arg(long, env = API_BASE_ENV, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Per-call completion timeout in seconds.
    #[arg(long, env = "PDF_ANALYZER_API_TIMEOUT", default_value_t = 60,
          value_parser = clap::value_parser!(u64).range(1..))]
    api_timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF_ANALYZER_VERBOSE")]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long, env = "PDF_ANALYZER_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Settings ─────────────────────────────────────────────────────────
    reqwest::Url::parse(&cli.api_base)
        .with_context(|| format!("Invalid --api-base URL '{}'", cli.api_base))?;

    if std::env::var(API_KEY_ENV).map_or(true, |k| k.trim().is_empty()) {
        tracing::warn!(
            "{} is not set; analyses will fail until it is exported",
            API_KEY_ENV
        );
    }

    let settings = ServerSettings {
        host: cli.host,
        port: cli.port,
        api_base: cli.api_base,
        api_timeout_secs: cli.api_timeout,
        api_key: ApiKeySource::Env(API_KEY_ENV.to_string()),
    };
    let addr = format!("{}:{}", settings.host, settings.port);

    // ── Serve ────────────────────────────────────────────────────────────
    let state = AppState::new(settings).context("Failed to build HTTP client")?;
    server::serve(state)
        .await
        .with_context(|| format!("Failed to serve on {addr}"))?;

    Ok(())
}
