//! Session controller tests against a mock server.
//!
//! The interesting property is the reload discipline: after every successful
//! mutation the session refetches the whole list, and after any failure the
//! cached list stays exactly as it was.

use jot_client::{ApiClient, NoteSession, Severity};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(server: &MockServer) -> NoteSession {
    NoteSession::new(ApiClient::new(server.uri(), "session-token"))
}

fn note_json(id: Uuid, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "owner_id": "alice",
        "title": null,
        "content": content,
        "summary": null,
        "created_at_utc": "2026-08-30T10:00:00Z",
        "updated_at_utc": "2026-08-30T10:00:00Z"
    })
}

#[tokio::test]
async fn test_load_notes_populates_cache() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .and(header("Authorization", "Bearer session-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": [note_json(id, "milk")]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    assert!(session.load_notes().await);
    assert_eq!(session.notes().len(), 1);
    assert_eq!(session.notes()[0].content, "milk");
}

#[tokio::test]
async fn test_add_note_reloads_the_full_list() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .and(body_partial_json(serde_json::json!({"content": "milk"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": id})))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The mutation must be followed by exactly one list fetch.
    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": [note_json(id, "milk")]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    session.add_note(None, "milk").await;

    assert_eq!(session.notes().len(), 1);
    let last = session.notices().last().unwrap();
    assert_eq!(last.severity, Severity::Success);
    assert_eq!(last.text, "Note added!");
}

#[tokio::test]
async fn test_empty_content_rejected_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    session.add_note(None, "   ").await;

    let last = session.notices().last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.text, "Note content cannot be empty");
}

#[tokio::test]
async fn test_failed_delete_leaves_cache_untouched() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": [note_json(id, "keep me")]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/notes/{id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Note not found"})),
        )
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    session.load_notes().await;
    session.delete_note(id).await;

    // No reload happened: the single expected GET was the initial load.
    assert_eq!(session.notes().len(), 1);
    let last = session.notices().last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.text, "Failed to delete");
}

#[tokio::test]
async fn test_delete_reloads_and_empties_the_list() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/notes/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    session.delete_note(id).await;

    assert!(session.notes().is_empty());
    assert_eq!(session.notices().last().unwrap().text, "Note deleted");
}

#[tokio::test]
async fn test_update_failure_records_notice() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("PUT"))
        .and(path(format!("/api/notes/{id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Note not found"})),
        )
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    session.update_note(id, None, "new content").await;

    let last = session.notices().last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.text, "Update failed");
}

#[tokio::test]
async fn test_summarize_success_returns_text_and_reloads() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("POST"))
        .and(path("/api/summarize-note"))
        .and(body_partial_json(serde_json::json!({"noteId": id.to_string()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "summary": "A tidy summary.",
            "persisted": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    let summary = session.summarize_note(id).await;

    assert_eq!(summary.as_deref(), Some("A tidy summary."));
    assert_eq!(session.notices().last().unwrap().text, "Summary generated!");
}

#[tokio::test]
async fn test_summarize_failure_skips_reload() {
    let mock_server = MockServer::start().await;
    let id = Uuid::now_v7();

    Mock::given(method("POST"))
        .and(path("/api/summarize-note"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Groq API error",
            "details": {"error": {"message": "overloaded"}}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    let summary = session.summarize_note(id).await;

    assert!(summary.is_none());
    assert_eq!(session.notices().last().unwrap().text, "Failed to summarize");
}
