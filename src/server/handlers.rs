//! HTTP handlers.

use super::form::{AnalysisForm, FormAction, Selection};
use super::templates::IndexTemplate;
use super::AppState;
use crate::analyze::analyze_text;
use crate::notice::Notice;
use crate::pipeline::extract::extract_document;
use askama::Template;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{info, warn};

/// Shown when the form is submitted without a file.
pub const NO_UPLOAD_MESSAGE: &str = "Please upload a PDF document to start the analysis.";

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub prompt_type: Option<String>,
}

/// `GET /`
pub async fn index(Query(params): Query<IndexParams>) -> Response {
    let selection = Selection::with_prompt_type(params.prompt_type.as_deref());
    render(StatusCode::OK, &IndexTemplate::new(&selection))
}

/// `POST /analyze`
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match AnalysisForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "Failed to read multipart form");
            let mut page = IndexTemplate::new(&Selection::default());
            page.push_notice(Notice::error(format!("Failed to read the form: {}", e)));
            return render(StatusCode::BAD_REQUEST, &page);
        }
    };

    let selection = Selection::from_form(&form);
    let mut page = IndexTemplate::new(&selection);

    let (file_name, document) = match (form.upload, form.carried) {
        (Some(upload), _) => {
            info!(
                file = %upload.file_name,
                bytes = upload.bytes.len(),
                action = ?form.action,
                "Received upload"
            );
            let file_name = upload.file_name.clone();
            match extract_document(upload).await {
                Ok(document) => (file_name, document),
                Err(e) => {
                    warn!(error = %e, "Extraction failed");
                    page.push_notice(Notice::from(&e));
                    return render(StatusCode::OK, &page);
                }
            }
        }
        (None, Some(carried)) => {
            info!(
                file = %carried.file_name,
                chars = carried.text.len(),
                action = ?form.action,
                "Reusing previously extracted text"
            );
            (carried.file_name.clone(), carried.into_document())
        }
        (None, None) => {
            page.push_notice(Notice::info(NO_UPLOAD_MESSAGE));
            return render(StatusCode::OK, &page);
        }
    };
    page.set_preview(&file_name, &document);

    if form.action == FormAction::Analyze {
        let outcome = match state.analysis_config(&selection) {
            Ok(config) => analyze_text(&document.text, &config).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(output) => page.set_result(output),
            Err(e) => page.push_notice(Notice::from(&e)),
        }
    }

    render(StatusCode::OK, &page)
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

fn render(status: StatusCode, page: &IndexTemplate) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {}", e),
        )
            .into_response(),
    }
}
