//! # pdf-analyzer
//!
//! Analyse the text of a PDF document with a Groq-hosted language model.
//!
//! A user uploads a PDF, picks a model, a temperature and one of a fixed set
//! of analysis prompts (which they may edit), and gets back the model's
//! answer. The library exposes the workflow directly ([`analyze_document`],
//! [`analyze_text`]) and as a small web UI ([`server`]).
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF upload
//!  │
//!  ├─ 1. Input    check the file is a PDF
//!  ├─ 2. Extract  concatenate page text via lopdf (spawn_blocking)
//!  ├─ 3. Checks   blank text → warning, missing key → error
//!  └─ 4. LLM      one chat completion: system = prompt, user = text
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_analyzer::{analyze_document, AnalysisConfig, UploadedFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AnalysisConfig::builder()
//!         .model("llama-3.1-70b-versatile")
//!         .temperature(0.3)
//!         .api_key_from_env("GROQ_API_KEY")
//!         .build()?;
//!     let bytes = std::fs::read("report.pdf")?;
//!     let result = analyze_document(UploadedFile::new("report.pdf", bytes), &config).await?;
//!     println!("{}", result.output.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf-analyzer` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf-analyzer = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod analyze;
pub mod config;
pub mod error;
pub mod models;
pub mod notice;
pub mod pipeline;
pub mod prompts;
pub mod provider;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use analyze::{analyze_document, analyze_text, AnalysisOutput, DocumentAnalysis};
pub use config::{
    clamp_temperature, AnalysisConfig, AnalysisConfigBuilder, API_BASE_ENV, DEFAULT_API_BASE,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use error::{AnalyzerError, ProviderError, API_KEY_ENV};
pub use models::Model;
pub use notice::{Notice, Severity};
pub use pipeline::extract::{extract_document, ExtractedDocument};
pub use pipeline::input::UploadedFile;
pub use prompts::PromptTemplate;
pub use provider::{ChatMessage, ChatProvider, ChatResponse, CompletionOptions, GroqProvider, Role};
