//! Tests for the Groq backend against a mock completions endpoint.

use jot_core::{Error, SummaryGenerator};
use jot_inference::{GroqBackend, GroqConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> GroqBackend {
    GroqBackend::new(GroqConfig::new("test-groq-key").with_base_url(server.uri()))
        .expect("client should build")
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_summarize_sends_expected_request_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-groq-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama-3.3-70b-versatile",
            "max_tokens": 250
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("A tidy summary.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summary = backend_for(&mock_server)
        .summarize("buy milk, call the dentist")
        .await
        .expect("summarize should succeed");
    assert_eq!(summary, "A tidy summary.");
}

#[tokio::test]
async fn test_note_content_lands_in_the_prompt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .mount(&mock_server)
        .await;

    backend_for(&mock_server)
        .summarize("remember the marker string xyzzy")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("remember the marker string xyzzy"));
    assert!(prompt.ends_with("remember the marker string xyzzy"));
    assert_eq!(body["messages"][0]["role"], "user");
}

#[tokio::test]
async fn test_leading_summary_label_is_stripped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("Summary: groceries and errands.")),
        )
        .mount(&mock_server)
        .await;

    let summary = backend_for(&mock_server).summarize("note").await.unwrap();
    assert_eq!(summary, "groceries and errands.");
}

#[tokio::test]
async fn test_legacy_text_field_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"text": "legacy style completion."}]
        })))
        .mount(&mock_server)
        .await;

    let summary = backend_for(&mock_server).summarize("note").await.unwrap();
    assert_eq!(summary, "legacy style completion.");
}

#[tokio::test]
async fn test_empty_completion_yields_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": []
        })))
        .mount(&mock_server)
        .await;

    let summary = backend_for(&mock_server).summarize("note").await.unwrap();
    assert_eq!(summary, "No summary");
}

#[tokio::test]
async fn test_whitespace_only_completion_yields_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   \n  ")))
        .mount(&mock_server)
        .await;

    let summary = backend_for(&mock_server).summarize("note").await.unwrap();
    assert_eq!(summary, "No summary");
}

#[tokio::test]
async fn test_provider_error_payload_is_preserved() {
    let mock_server = MockServer::start().await;

    let error_payload = serde_json::json!({
        "error": {"message": "rate limit exceeded", "code": "rate_limit_exceeded"}
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(error_payload.clone()))
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server)
        .summarize("note")
        .await
        .expect_err("non-success status must error");
    match err {
        Error::Provider(details) => assert_eq!(details, error_payload),
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_wrapped_as_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server).summarize("note").await.expect_err("502 must error");
    match err {
        Error::Provider(details) => {
            assert_eq!(details, serde_json::Value::String("Bad Gateway".to_string()))
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}
