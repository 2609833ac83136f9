//! Text extraction: PDF bytes → one concatenated string.
//!
//! Pages are read in document order and their text appended with no
//! separator and no whitespace normalisation. A page that fails to extract,
//! or has no text layer (a scanned image), contributes nothing; only a
//! document that cannot be opened at all is an error.
//!
//! ## Why spawn_blocking?
//!
//! `lopdf` parses synchronously and decompresses every content stream it
//! touches. On large documents that is long enough to stall a Tokio worker,
//! so [`extract_document`] moves the work to the blocking pool. A parser
//! panic on a hostile file surfaces as a join error instead of taking the
//! server down.

use crate::error::AnalyzerError;
use crate::pipeline::input::{validate_upload, UploadedFile};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Result of extracting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    /// In-order concatenation of every page's text.
    pub text: String,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Pages that contributed no text (failed, empty, or image-only).
    pub empty_pages: usize,
}

impl ExtractedDocument {
    /// True when there is nothing worth sending for analysis.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Anything that can hand out the text of numbered pages.
pub trait PageTextSource {
    type Error: fmt::Display;

    fn page_count(&self) -> usize;

    /// Text of the page at 0-based `index`.
    fn page_text(&self, index: usize) -> Result<String, Self::Error>;
}

/// Concatenate every page of `source` in order.
pub fn concatenate_pages<S: PageTextSource>(source: &S) -> ExtractedDocument {
    let page_count = source.page_count();
    let mut text = String::new();
    let mut empty_pages = 0;

    for index in 0..page_count {
        match source.page_text(index) {
            Ok(page) => {
                if page.trim().is_empty() {
                    debug!("Page {}: no text layer", index + 1);
                    empty_pages += 1;
                }
                text.push_str(&page);
            }
            Err(e) => {
                warn!("Page {}: text extraction failed: {}", index + 1, e);
                empty_pages += 1;
            }
        }
    }

    ExtractedDocument {
        text,
        page_count,
        empty_pages,
    }
}

/// [`PageTextSource`] over a parsed `lopdf` document.
pub struct LopdfPages {
    document: lopdf::Document,
    /// 1-based page numbers in document order.
    page_numbers: Vec<u32>,
}

impl LopdfPages {
    pub fn load(bytes: &[u8]) -> Result<Self, lopdf::Error> {
        let document = lopdf::Document::load_mem(bytes)?;
        let page_numbers = document.get_pages().keys().copied().collect();
        Ok(Self {
            document,
            page_numbers,
        })
    }
}

/// Why one page of a [`LopdfPages`] produced no text.
#[derive(Debug, thiserror::Error)]
pub enum PageTextError {
    #[error("page index {0} is out of range")]
    OutOfRange(usize),
    #[error(transparent)]
    Pdf(#[from] lopdf::Error),
}

impl PageTextSource for LopdfPages {
    type Error = PageTextError;

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, PageTextError> {
        let number = self
            .page_numbers
            .get(index)
            .ok_or(PageTextError::OutOfRange(index))?;
        Ok(self.document.extract_text(&[*number])?)
    }
}

/// Extract the text of an uploaded PDF.
///
/// Validates the upload, then parses on the blocking pool.
pub async fn extract_document(upload: UploadedFile) -> Result<ExtractedDocument, AnalyzerError> {
    validate_upload(&upload)?;

    let UploadedFile { file_name, bytes } = upload;
    tokio::task::spawn_blocking(move || extract_blocking(&file_name, &bytes))
        .await
        .map_err(|e| AnalyzerError::Internal(format!("Extraction task panicked: {}", e)))?
}

/// Blocking implementation of extraction.
pub fn extract_blocking(file_name: &str, bytes: &[u8]) -> Result<ExtractedDocument, AnalyzerError> {
    let pages = LopdfPages::load(bytes).map_err(|e| AnalyzerError::CorruptPdf {
        file_name: file_name.to_string(),
        detail: e.to_string(),
    })?;

    let extracted = concatenate_pages(&pages);
    info!(
        "Extracted {} chars from {} pages of '{}' ({} without text)",
        extracted.text.len(),
        extracted.page_count,
        file_name,
        extracted.empty_pages
    );
    Ok(extracted)
}
