//! Askama view models for the analysis page.
//!
//! `templates/index.html` only reads these structs. Everything it needs is
//! precomputed here so the template stays free of logic.

use super::form::Selection;
use crate::analyze::AnalysisOutput;
use crate::models;
use crate::notice::Notice;
use crate::pipeline::extract::ExtractedDocument;
use crate::prompts;
use askama::Template;

/// Helper struct for the model dropdown.
pub struct ModelOption {
    pub label: &'static str,
    pub id: &'static str,
    pub selected: bool,
}

/// Helper struct for the prompt radio group.
pub struct PromptOption {
    pub label: &'static str,
    pub text: &'static str,
    pub checked: bool,
}

/// Helper struct for a rendered notice.
pub struct NoticeView {
    pub class: &'static str,
    pub message: String,
}

/// Extracted text shown under the form, echoed back on the next submit.
pub struct PreviewView {
    pub file_name: String,
    pub text: String,
    pub page_count: usize,
    pub empty_pages: usize,
}

/// Model answer shown under the preview.
pub struct ResultView {
    pub content: String,
    pub model: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub duration_ms: u64,
}

/// The one page of the UI.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub models: Vec<ModelOption>,
    pub prompts: Vec<PromptOption>,
    /// Slider value, formatted for the `value` attribute.
    pub temperature: String,
    pub prompt_text: String,
    pub notices: Vec<NoticeView>,
    pub preview: Option<PreviewView>,
    pub result: Option<ResultView>,
}

impl IndexTemplate {
    /// Page with the widgets set to `selection` and nothing below the form.
    pub fn new(selection: &Selection) -> Self {
        let models = models::all()
            .iter()
            .map(|m| ModelOption {
                label: m.label,
                id: m.id,
                selected: m.label == selection.model.label,
            })
            .collect();
        let prompts = prompts::all()
            .iter()
            .map(|p| PromptOption {
                label: p.label,
                text: p.text,
                checked: p.label == selection.prompt_type.label,
            })
            .collect();

        Self {
            title: "AI Sentiment Analyzer",
            models,
            prompts,
            temperature: format!("{:.2}", selection.temperature),
            prompt_text: selection.prompt_text.clone(),
            notices: Vec::new(),
            preview: None,
            result: None,
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(NoticeView {
            class: notice.severity.css_class(),
            message: notice.message,
        });
    }

    pub fn set_preview(&mut self, file_name: &str, document: &ExtractedDocument) {
        self.preview = Some(PreviewView {
            file_name: file_name.to_string(),
            text: document.text.clone(),
            page_count: document.page_count,
            empty_pages: document.empty_pages,
        });
    }

    pub fn set_result(&mut self, output: AnalysisOutput) {
        self.result = Some(ResultView {
            content: output.content,
            model: output.model,
            prompt_tokens: output.prompt_tokens,
            completion_tokens: output.completion_tokens,
            duration_ms: output.duration_ms,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preselect_first_entries() {
        let page = IndexTemplate::new(&Selection::default());
        assert_eq!(page.models.len(), 12);
        assert_eq!(page.prompts.len(), 10);
        assert!(page.models[0].selected);
        assert_eq!(page.models.iter().filter(|m| m.selected).count(), 1);
        assert!(page.prompts[0].checked);
        assert_eq!(page.temperature, "0.70");
    }

    #[test]
    fn renders_escaped_content() {
        let mut page = IndexTemplate::new(&Selection::default());
        page.push_notice(Notice::error("<b>boom"));
        let html = page.render().unwrap();
        assert!(html.contains("AI Sentiment Analyzer"));
        assert!(html.contains("&lt;b&gt;boom"));
        assert!(!html.contains("<b>boom"));
    }

    #[test]
    fn preview_and_result_are_rendered() {
        let mut page = IndexTemplate::new(&Selection::default());
        page.set_preview("notes.pdf", &ExtractedDocument {
            text: "page one text".into(),
            page_count: 2,
            empty_pages: 1,
        });
        page.set_result(AnalysisOutput {
            content: "It is a summary.".into(),
            model: "llama3-8b-8192".into(),
            prompt_tokens: 10,
            completion_tokens: 5,
            duration_ms: 42,
        });
        let html = page.render().unwrap();
        assert!(html.contains("page one text"));
        assert!(html.contains(r#"name="document_name" value="notes.pdf""#));
        assert!(html.contains(r#"name="page_count" value="2""#));
        assert!(html.contains("It is a summary."));
    }

    #[test]
    fn textareas_keep_leading_newlines() {
        // HTML parsers drop one newline right after `<textarea>`.
        let mut selection = Selection::default();
        selection.prompt_text = "\nIndented prompt".into();
        let mut page = IndexTemplate::new(&selection);
        page.set_preview("a.pdf", &ExtractedDocument {
            text: "\nfirst line".into(),
            page_count: 1,
            empty_pages: 0,
        });
        let html = page.render().unwrap();
        assert!(html.contains("rows=\"10\">\n\nIndented prompt</textarea>"));
        assert!(html.contains("rows=\"12\">\n\nfirst line</textarea>"));
    }
}
