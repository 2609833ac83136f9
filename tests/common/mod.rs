//! Shared helpers for integration tests: in-memory PDFs and a recording
//! chat provider.

#![allow(dead_code)]

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdf_analyzer::{ChatMessage, ChatProvider, ChatResponse, CompletionOptions, ProviderError};
use std::sync::Mutex;

/// Route library logs to the test harness. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── PDF fixtures ─────────────────────────────────────────────────────────────

/// Build a PDF with one page per entry. `Some(text)` draws the text in
/// Helvetica; `None` leaves the page without a text layer, like a scan.
pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => Vec::new(),
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save pdf");
    bytes
}

// ── Recording provider ───────────────────────────────────────────────────────

/// One captured `chat` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<ChatMessage>,
    pub options: CompletionOptions,
}

/// Provider that records every call and answers with a canned reply.
pub struct RecordingProvider {
    reply: Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingProvider {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an HTTP 503 carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<ChatResponse, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            messages: messages.to_vec(),
            options: options.clone(),
        });
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: options.model.clone(),
                prompt_tokens: 100,
                completion_tokens: 20,
            }),
            Err(message) => Err(ProviderError::Api {
                provider: "recording".to_string(),
                status: 503,
                message: message.clone(),
            }),
        }
    }
}
