//! Form decoding: multipart fields → the user's selection.

use crate::config::{clamp_temperature, DEFAULT_TEMPERATURE};
use crate::models::{self, Model};
use crate::pipeline::extract::ExtractedDocument;
use crate::pipeline::input::UploadedFile;
use crate::prompts::{self, PromptTemplate};
use axum::extract::multipart::{Multipart, MultipartError};
use tracing::debug;

/// Which button submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormAction {
    /// Only extract and show the text.
    #[default]
    Preview,
    /// Extract and send for analysis.
    Analyze,
}

impl FormAction {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "analyze" => FormAction::Analyze,
            _ => FormAction::Preview,
        }
    }
}

/// Text extracted by an earlier submission and echoed back by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarriedDocument {
    pub file_name: String,
    pub text: String,
    pub page_count: usize,
    pub empty_pages: usize,
}

impl CarriedDocument {
    /// Browsers submit textarea contents with CRLF line breaks.
    fn new(file_name: String, text: &str, page_count: Option<&str>, empty_pages: Option<&str>) -> Self {
        let count = |v: Option<&str>| v.and_then(|v| v.trim().parse().ok()).unwrap_or(0);
        Self {
            file_name,
            text: text.replace("\r\n", "\n"),
            page_count: count(page_count),
            empty_pages: count(empty_pages),
        }
    }

    pub fn into_document(self) -> ExtractedDocument {
        ExtractedDocument {
            text: self.text,
            page_count: self.page_count,
            empty_pages: self.empty_pages,
        }
    }
}

/// Raw values of one form submission.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    pub model: Option<String>,
    pub temperature: Option<String>,
    pub prompt_type: Option<String>,
    pub prompt_text: Option<String>,
    pub action: FormAction,
    pub upload: Option<UploadedFile>,
    /// Present when the page already showed a preview; a new upload wins.
    pub carried: Option<CarriedDocument>,
}

impl AnalysisForm {
    /// Read every field of a multipart body.
    ///
    /// A file part with no name and no bytes is what browsers send when
    /// nothing was picked; it counts as no upload. The preview's
    /// `document_*` fields are gathered into [`CarriedDocument`] so the
    /// next submission can analyse without re-uploading.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = AnalysisForm::default();
        let mut document_name = None;
        let mut document_text = None;
        let mut page_count = None;
        let mut empty_pages = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.upload = Some(UploadedFile::new(file_name, bytes.to_vec()));
                }
                "model" => form.model = Some(field.text().await?),
                "temperature" => form.temperature = Some(field.text().await?),
                "prompt_type" => form.prompt_type = Some(field.text().await?),
                "prompt_text" => form.prompt_text = Some(field.text().await?),
                "action" => form.action = FormAction::parse(&field.text().await?),
                "document_name" => document_name = Some(field.text().await?),
                "document_text" => document_text = Some(field.text().await?),
                "page_count" => page_count = Some(field.text().await?),
                "empty_pages" => empty_pages = Some(field.text().await?),
                other => debug!("Ignoring unknown form field '{}'", other),
            }
        }

        if let (Some(name), Some(text)) = (document_name, document_text) {
            form.carried = Some(CarriedDocument::new(
                name,
                &text,
                page_count.as_deref(),
                empty_pages.as_deref(),
            ));
        }

        Ok(form)
    }
}

/// Resolved widget values.
#[derive(Debug, Clone)]
pub struct Selection {
    pub model: &'static Model,
    /// Always within `[0.0, 1.0]`.
    pub temperature: f32,
    pub prompt_type: &'static PromptTemplate,
    /// Editor contents; seeded from `prompt_type` when the form omits it.
    pub prompt_text: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self::with_prompt_type(None)
    }
}

impl Selection {
    /// Defaults, with the prompt editor seeded from `prompt_type` if known.
    pub fn with_prompt_type(prompt_type: Option<&str>) -> Self {
        let prompt_type = prompt_type
            .and_then(prompts::resolve)
            .unwrap_or_else(prompts::default_prompt);
        Self {
            model: models::default_model(),
            temperature: DEFAULT_TEMPERATURE,
            prompt_type,
            prompt_text: prompt_type.text.to_string(),
        }
    }

    /// Coerce submitted values; anything unknown falls back to its default.
    pub fn from_form(form: &AnalysisForm) -> Self {
        let model = form
            .model
            .as_deref()
            .and_then(models::resolve)
            .unwrap_or_else(models::default_model);
        let temperature = form
            .temperature
            .as_deref()
            .and_then(|t| t.trim().parse::<f32>().ok())
            .map(clamp_temperature)
            .unwrap_or(DEFAULT_TEMPERATURE);
        let prompt_type = form
            .prompt_type
            .as_deref()
            .and_then(prompts::resolve)
            .unwrap_or_else(prompts::default_prompt);
        let prompt_text = form
            .prompt_text
            .clone()
            .unwrap_or_else(|| prompt_type.text.to_string());

        Self {
            model,
            temperature,
            prompt_type,
            prompt_text,
        }
    }
}
