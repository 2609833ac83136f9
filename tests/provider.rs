//! `GroqProvider` against a local fake of the OpenAI-compatible endpoint.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use pdf_analyzer::{
    analyze_text, AnalysisConfig, AnalyzerError, ChatMessage, ChatProvider, CompletionOptions,
    GroqProvider, ProviderError,
};
use pdf_analyzer::provider::build_client;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

// ── Fake endpoint ────────────────────────────────────────────────────────────

#[derive(Clone)]
struct Fake {
    status: StatusCode,
    body: Value,
    retry_after: Option<&'static str>,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl Fake {
    fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            retry_after: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<(Option<String>, Value)> {
        self.seen.lock().unwrap().clone()
    }
}

async fn completions(State(fake): State<Fake>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.seen.lock().unwrap().push((auth, body));

    let mut response = (fake.status, Json(fake.body.clone())).into_response();
    if let Some(secs) = fake.retry_after {
        response
            .headers_mut()
            .insert("retry-after", secs.parse().unwrap());
    }
    response
}

/// Serve `fake` on an ephemeral port and return the API base URL.
async fn spawn(fake: Fake) -> String {
    let app = Router::new()
        .route("/openai/v1/chat/completions", post(completions))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/openai/v1")
}

fn options() -> CompletionOptions {
    CompletionOptions {
        model: "llama3-70b-8192".to_string(),
        temperature: 0.5,
        max_tokens: 1500,
    }
}

fn success_body() -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "llama3-70b-8192",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "  A balanced report.\n"},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 321, "completion_tokens": 12, "total_tokens": 333}
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_request_payload_and_auth() {
    let fake = Fake::new(StatusCode::OK, success_body());
    let base = spawn(fake.clone()).await;
    let provider = GroqProvider::new(&base, "gsk_live", 10).unwrap();

    let messages = [
        ChatMessage::system("Summarise."),
        ChatMessage::user("Page one.Page two."),
    ];
    let response = provider.chat(&messages, &options()).await.unwrap();

    assert_eq!(response.content, "  A balanced report.\n");
    assert_eq!(response.model, "llama3-70b-8192");
    assert_eq!(response.prompt_tokens, 321);
    assert_eq!(response.completion_tokens, 12);

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer gsk_live"));
    assert_eq!(body["model"], "llama3-70b-8192");
    assert_eq!(body["max_tokens"], 1500);
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(
        body["messages"],
        json!([
            {"role": "system", "content": "Summarise."},
            {"role": "user", "content": "Page one.Page two."}
        ])
    );
}

#[tokio::test]
async fn test_invalid_key_maps_to_auth_error() {
    let fake = Fake::new(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}),
    );
    let base = spawn(fake).await;
    let provider = GroqProvider::new(&base, "gsk_bad", 10).unwrap();

    let err = provider
        .chat(&[ChatMessage::user("x")], &options())
        .await
        .unwrap_err();
    match err {
        ProviderError::Auth { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API Key");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_carries_retry_after() {
    let mut fake = Fake::new(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Rate limit reached"}}),
    );
    fake.retry_after = Some("12");
    let base = spawn(fake).await;
    let provider = GroqProvider::new(&base, "gsk", 10).unwrap();

    let err = provider
        .chat(&[ChatMessage::user("x")], &options())
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ProviderError::RateLimited {
                retry_after_secs: Some(12),
                ..
            }
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_unknown_model_surfaces_api_message() {
    let fake = Fake::new(
        StatusCode::NOT_FOUND,
        json!({"error": {"message": "The model `gemma-7b-it` does not exist"}}),
    );
    let base = spawn(fake).await;

    let config = AnalysisConfig::builder()
        .model("gemma-7b-it")
        .api_key("gsk")
        .api_base(base)
        .build()
        .unwrap();
    let err = analyze_text("document", &config).await.unwrap_err();

    assert!(matches!(err, AnalyzerError::Completion(ProviderError::Api { status: 404, .. })));
    assert!(err
        .to_string()
        .contains("The model `gemma-7b-it` does not exist"));
}

#[tokio::test]
async fn test_analyze_text_trims_real_response() {
    let fake = Fake::new(StatusCode::OK, success_body());
    let base = spawn(fake.clone()).await;

    let config = AnalysisConfig::builder()
        .model("llama3-70b-8192")
        .temperature(0.5)
        .prompt("Summarise.")
        .api_key("gsk_live")
        .api_base(base)
        .build()
        .unwrap();
    let output = analyze_text("Page one.", &config).await.unwrap();

    assert_eq!(output.content, "A balanced report.");
    assert_eq!(output.prompt_tokens, 321);
    assert_eq!(fake.requests().len(), 1);
}

#[tokio::test]
async fn test_shared_client_serves_repeated_analyses() {
    let fake = Fake::new(StatusCode::OK, success_body());
    let base = spawn(fake.clone()).await;
    let client = build_client(10).unwrap();

    for key in ["gsk_one", "gsk_two"] {
        let config = AnalysisConfig::builder()
            .api_key(key)
            .api_base(base.clone())
            .http_client(client.clone())
            .build()
            .unwrap();
        let output = analyze_text("Page one.", &config).await.unwrap();
        assert_eq!(output.content, "A balanced report.");
    }

    let auth: Vec<Option<String>> = fake.requests().into_iter().map(|(a, _)| a).collect();
    assert_eq!(
        auth,
        vec![
            Some("Bearer gsk_one".to_string()),
            Some("Bearer gsk_two".to_string())
        ]
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GroqProvider::new(&format!("http://{addr}/v1"), "gsk", 5).unwrap();
    let err = provider
        .chat(&[ChatMessage::user("x")], &options())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Http(_)), "got: {err:?}");
}
