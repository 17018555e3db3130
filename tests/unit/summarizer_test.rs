//! Unit tests for the Summarizer.
//!
//! Provider calls go to a one-shot HTTP stub on 127.0.0.1, so nothing here
//! needs network access. Only the page URL is guarded; the provider endpoint
//! is whatever the settings say.

use markshelf::services::summarizer::Summarizer;
use markshelf::types::ai::{AIProviderName, SummaryOutcome};
use markshelf::types::errors::SummaryError;
use markshelf::types::settings::SummarizerSettings;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

const PAGE: &str = "https://www.rust-lang.org/learn";

/// Helper: read one HTTP/1.1 request, headers plus `Content-Length` body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Helper: serve a single canned response and hand back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(request);
    });
    (format!("http://{}/v1/chat/completions", addr), rx)
}

fn settings_for(endpoint: &str) -> SummarizerSettings {
    SummarizerSettings {
        api_endpoint: endpoint.to_string(),
        timeout_secs: 5,
        ..SummarizerSettings::default()
    }
}

fn summarizer_for(endpoint: &str) -> Summarizer {
    Summarizer::with_api_key(settings_for(endpoint), Some("test-key".to_string()))
}

// ─── Success paths ───

#[tokio::test]
async fn test_openai_style_summary() {
    let (endpoint, request) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"  The Rust learning hub.  "}}]}"#,
    )
    .await;

    let summary = summarizer_for(&endpoint).summarize(PAGE).await.unwrap();
    assert_eq!(summary, "The Rust learning hub.");

    let request = request.await.unwrap();
    let lower = request.to_lowercase();
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(lower.contains("authorization: bearer test-key"));
    assert!(request.contains("\"model\":\"openai/gpt-4o-mini\""));
    assert!(request.contains(PAGE));
}

#[tokio::test]
async fn test_anthropic_style_summary() {
    let (endpoint, request) =
        serve_once("200 OK", r#"{"content":[{"type":"text","text":"Rust docs."}]}"#).await;
    let settings = SummarizerSettings {
        provider: AIProviderName::Anthropic,
        model: "claude-3-5-haiku-latest".to_string(),
        ..settings_for(&endpoint)
    };

    let summarizer = Summarizer::with_api_key(settings, Some("test-key".to_string()));
    assert_eq!(summarizer.summarize(PAGE).await.unwrap(), "Rust docs.");

    let lower = request.await.unwrap().to_lowercase();
    assert!(lower.contains("x-api-key: test-key"));
    assert!(lower.contains("anthropic-version:"));
    assert!(!lower.contains("authorization:"));
}

#[tokio::test]
async fn test_summarize_action_success_shape() {
    let (endpoint, _request) =
        serve_once("200 OK", r#"{"choices":[{"message":{"content":"Short."}}]}"#).await;
    let outcome = summarizer_for(&endpoint).summarize_action(PAGE).await;
    assert_eq!(outcome, SummaryOutcome::Summary { summary: "Short.".to_string() });
    assert_eq!(serde_json::to_value(&outcome).unwrap(), serde_json::json!({"summary": "Short."}));
}

// ─── Provider failures ───

#[tokio::test]
async fn test_bad_request_is_special_cased() {
    let (endpoint, _request) =
        serve_once("400 Bad Request", r#"{"error":{"message":"url unreachable"}}"#).await;
    let err = summarizer_for(&endpoint).summarize(PAGE).await.unwrap_err();
    assert!(matches!(err, SummaryError::BadRequest(ref msg) if msg.contains("url unreachable")));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let (endpoint, _request) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let outcome = summarizer_for(&endpoint).summarize_action(PAGE).await;
    assert_eq!(
        outcome.error(),
        Some("Failed to summarize the bookmark. The service may be temporarily unavailable.")
    );
    assert!(!outcome.error().unwrap().contains("boom"));
}

#[tokio::test]
async fn test_blank_summary_is_empty_error() {
    let (endpoint, _request) =
        serve_once("200 OK", r#"{"choices":[{"message":{"content":"   "}}]}"#).await;
    let err = summarizer_for(&endpoint).summarize(PAGE).await.unwrap_err();
    assert_eq!(err, SummaryError::EmptySummary);
}

#[tokio::test]
async fn test_non_json_body_is_unavailable() {
    let (endpoint, _request) = serve_once("200 OK", "<html>oops</html>").await;
    let err = summarizer_for(&endpoint).summarize(PAGE).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}/v1/chat/completions", addr);
    let err = summarizer_for(&endpoint).summarize(PAGE).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
}

// ─── Rejected before any request ───

#[tokio::test]
async fn test_private_target_rejected_without_request() {
    // Endpoint points nowhere; reaching it would fail with Unavailable.
    let summarizer = summarizer_for("http://127.0.0.1:9/unused");
    let err = summarizer.summarize("http://192.168.1.5/router").await.unwrap_err();
    assert!(matches!(err, SummaryError::NotPubliclyRoutable(_)));

    let outcome = summarizer.summarize_action("http://localhost:8080").await;
    assert_eq!(
        outcome.error(),
        Some("This URL is not publicly accessible and cannot be summarized.")
    );
}

#[tokio::test]
async fn test_invalid_target_rejected() {
    let summarizer = summarizer_for("http://127.0.0.1:9/unused");
    let outcome = summarizer.summarize_action("not a url").await;
    assert_eq!(
        outcome,
        SummaryOutcome::Error {
            error: "Invalid URL provided. Please ensure it is a valid, full URL.".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_key_means_no_provider() {
    let summarizer = Summarizer::with_api_key(settings_for("http://127.0.0.1:9/unused"), None);
    assert!(!summarizer.is_configured());
    assert_eq!(summarizer.summarize(PAGE).await.unwrap_err(), SummaryError::NoProvider);
}

#[tokio::test]
async fn test_disabled_summarizer_means_no_provider() {
    let settings = SummarizerSettings {
        enabled: false,
        ..settings_for("http://127.0.0.1:9/unused")
    };
    let summarizer = Summarizer::with_api_key(settings, Some("test-key".to_string()));
    assert!(!summarizer.is_configured());
    assert_eq!(summarizer.summarize(PAGE).await.unwrap_err(), SummaryError::NoProvider);
}

#[test]
fn test_available_providers() {
    let providers = Summarizer::available_providers();
    assert_eq!(providers.len(), 4);
    assert!(providers.iter().all(|p| !p.models.is_empty()));
    assert!(providers.iter().any(|p| p.name == AIProviderName::Anthropic));
}
