//! Upload validation: accept one PDF file from the form.
//!
//! The picker only offers `.pdf` files, but a form can be posted by anything,
//! so the server checks again. We verify the PDF magic bytes (`%PDF`) before
//! handing the buffer to the parser so callers get a meaningful error rather
//! than a parser message about xref tables.

use crate::error::AnalyzerError;
use std::path::Path;
use tracing::debug;

/// PDF files start with this header.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// A file received from the upload widget.
#[derive(Clone)]
pub struct UploadedFile {
    /// Client-supplied file name, used only for messages and the type check.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Check if the file name is acceptable for a PDF upload.
///
/// Names with a `.pdf` extension (any case) pass. Names without an
/// extension pass too; the magic-byte check decides for those.
pub fn has_pdf_extension(file_name: &str) -> bool {
    match Path::new(file_name).extension() {
        Some(ext) => ext.eq_ignore_ascii_case("pdf"),
        None => true,
    }
}

/// Validate an upload before extraction.
pub fn validate_upload(upload: &UploadedFile) -> Result<(), AnalyzerError> {
    if !has_pdf_extension(&upload.file_name) {
        return Err(AnalyzerError::UnsupportedFileType {
            file_name: upload.file_name.clone(),
        });
    }

    if upload.bytes.is_empty() {
        return Err(AnalyzerError::EmptyUpload {
            file_name: upload.file_name.clone(),
        });
    }

    if !upload.bytes.starts_with(PDF_MAGIC) {
        let magic = upload.bytes.iter().take(PDF_MAGIC.len()).copied().collect();
        return Err(AnalyzerError::NotAPdf {
            file_name: upload.file_name.clone(),
            magic,
        });
    }

    debug!(
        "Accepted upload '{}' ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );
    Ok(())
}
