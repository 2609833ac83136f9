//! Analysis entry points.
//!
//! [`analyze_text`] runs the precondition checks and the completion call on
//! text that is already extracted; [`analyze_document`] does extraction
//! first. Both are single-shot: one request at most, no retries, every
//! failure returned as an [`AnalyzerError`] for the caller to display.

use crate::config::AnalysisConfig;
use crate::error::AnalyzerError;
use crate::pipeline::extract::{extract_document, ExtractedDocument};
use crate::pipeline::input::UploadedFile;
use crate::pipeline::llm;
use crate::provider::{ChatProvider, GroqProvider};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// A successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisOutput {
    /// Model answer, trimmed of surrounding whitespace.
    pub content: String,
    /// Model that answered, as reported by the API.
    pub model: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub duration_ms: u64,
}

/// Extraction and analysis of one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentAnalysis {
    pub document: ExtractedDocument,
    pub output: AnalysisOutput,
}

/// Analyse already-extracted text.
///
/// # Errors
/// Checked in this order, each stopping before any request is sent:
/// - [`AnalyzerError::NoTextExtracted`]: text is empty or whitespace-only
/// - [`AnalyzerError::MissingApiKey`]: no usable API key in `config`
///
/// Then, after the single request:
/// - [`AnalyzerError::Completion`]: the provider failed for any reason
pub async fn analyze_text(
    document_text: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AnalyzerError> {
    if document_text.trim().is_empty() {
        warn!("Refusing to analyse: no text extracted");
        return Err(AnalyzerError::NoTextExtracted);
    }

    let api_key = config
        .effective_api_key()
        .ok_or_else(|| AnalyzerError::MissingApiKey {
            var: config.api_key_var.clone(),
        })?;

    let provider = resolve_provider(config, api_key)?;

    info!(
        "Analysing {} chars with {} via {}",
        document_text.len(),
        config.model,
        provider.name()
    );
    let start = Instant::now();
    let response = llm::request_analysis(provider.as_ref(), document_text, config).await?;
    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Analysis complete: {} chars in {}ms",
        response.content.len(),
        duration_ms
    );

    Ok(AnalysisOutput {
        content: response.content,
        model: response.model,
        prompt_tokens: response.prompt_tokens,
        completion_tokens: response.completion_tokens,
        duration_ms,
    })
}

/// Extract an uploaded PDF and analyse its text.
pub async fn analyze_document(
    upload: UploadedFile,
    config: &AnalysisConfig,
) -> Result<DocumentAnalysis, AnalyzerError> {
    let document = extract_document(upload).await?;
    let output = analyze_text(&document.text, config).await?;
    Ok(DocumentAnalysis { document, output })
}

/// Resolve the provider for one analysis.
///
/// A pre-built provider in the config wins; otherwise a [`GroqProvider`] is
/// built from the key and base URL, on the shared client when there is one.
/// The key check in [`analyze_text`] runs first either way, so an injected
/// provider never sees a keyless request.
fn resolve_provider(
    config: &AnalysisConfig,
    api_key: &str,
) -> Result<Arc<dyn ChatProvider>, AnalyzerError> {
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }

    let provider = match config.http_client {
        Some(ref client) => GroqProvider::with_client(client.clone(), &config.api_base, api_key),
        None => GroqProvider::new(&config.api_base, api_key, config.api_timeout_secs)?,
    };
    Ok(Arc::new(provider))
}
