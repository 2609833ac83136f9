//! Error types for the pdf-analyzer library.
//!
//! Two error types reflect the two places a request can go wrong:
//!
//! * [`AnalyzerError`]: everything that ends one interaction: a rejected
//!   upload, an unreadable PDF, a document with no text, a missing API key,
//!   or a failed completion call. Returned as `Err(AnalyzerError)` from the
//!   top-level `analyze*` functions and rendered to the user as a
//!   [`crate::notice::Notice`].
//!
//! * [`ProviderError`]: a failure inside the completion backend (network,
//!   auth, quota, malformed response). Wrapped by
//!   [`AnalyzerError::Completion`] so the user sees the backend's own text.
//!
//! None of these are retried. The user re-triggers the action.

use crate::notice::Severity;
use thiserror::Error;

/// Name of the environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// All errors returned by the pdf-analyzer library.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    // ── Upload errors ─────────────────────────────────────────────────────
    /// The upload form was submitted with a zero-byte file.
    #[error("The uploaded file '{file_name}' is empty.")]
    EmptyUpload { file_name: String },

    /// The uploaded file's extension is not `.pdf`.
    #[error("'{file_name}' is not a PDF. Only PDF documents can be analysed.")]
    UnsupportedFileType { file_name: String },

    /// The bytes do not start with the `%PDF` magic.
    #[error("File is not a valid PDF: '{file_name}'\nFirst bytes: {magic:?}")]
    NotAPdf { file_name: String, magic: Vec<u8> },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The PDF could not be parsed at all.
    #[error("Failed to read PDF '{file_name}': {detail}")]
    CorruptPdf { file_name: String, detail: String },

    // ── Analysis preconditions ────────────────────────────────────────────
    /// Extraction produced nothing but whitespace.
    #[error("No text extracted from the PDF. Please check the document.")]
    NoTextExtracted,

    /// The API key environment variable is unset or empty.
    #[error("{var} is not set. Please configure your environment variables.")]
    MissingApiKey { var: String },

    // ── LLM errors ────────────────────────────────────────────────────────
    /// The completion call failed.
    #[error("Error during analysis: {0}")]
    Completion(#[from] ProviderError),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalyzerError {
    /// Severity the UI renders this error with.
    ///
    /// An empty document is a warning: the user can fix the file and try
    /// again. Everything else blocks the request.
    pub fn severity(&self) -> Severity {
        match self {
            AnalyzerError::NoTextExtracted => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Build a missing-key error for the default [`API_KEY_ENV`] variable.
    pub fn missing_api_key() -> Self {
        AnalyzerError::MissingApiKey {
            var: API_KEY_ENV.to_string(),
        }
    }
}

/// Failures raised by a [`crate::provider::ChatProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure: DNS, connect, TLS, timeout, body decode.
    #[error("request to completion API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401/403.
    #[error("authentication rejected by '{provider}' (HTTP {status}): {message}")]
    Auth {
        provider: String,
        status: u16,
        message: String,
    },

    /// HTTP 429.
    #[error("rate limit exceeded for '{provider}': {message}")]
    RateLimited {
        provider: String,
        message: String,
        retry_after_secs: Option<u64>,
    },

    /// Any other non-success status, e.g. an unknown model (404/400).
    #[error("API error from '{provider}' (HTTP {status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    /// The response had no choices or the first choice had no content.
    #[error("completion API returned no content")]
    EmptyResponse,

    /// The response body could not be understood.
    #[error("invalid response from completion API: {0}")]
    InvalidResponse(String),
}
