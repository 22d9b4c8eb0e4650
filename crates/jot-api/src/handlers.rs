//! HTTP request handlers.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use jot_core::{CreateNoteRequest, Identity, UpdateNoteRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Pull the bearer credential out of the `Authorization` header.
///
/// `None` means the header is absent entirely. A present but malformed
/// header yields an empty credential, which the verifier rejects, so the
/// caller sees the invalid-token error rather than the missing-header one.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?;
    let value = value.to_str().unwrap_or("");
    Some(value.split_whitespace().nth(1).unwrap_or(""))
}

/// Resolve the caller's identity or reject the request.
///
/// Every handler calls this per request; identities are never cached, so a
/// revoked credential fails on its next use.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Identity, ApiError> {
    let credential = bearer_token(headers).ok_or(ApiError::MissingAuth)?;
    state
        .verifier
        .verify(credential)
        .await
        .ok_or(ApiError::InvalidToken)
}

// =============================================================================
// HEALTH
// =============================================================================

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// =============================================================================
// NOTES CRUD
// =============================================================================

pub async fn list_notes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let identity = authenticate(&state, &headers).await?;
    let notes = state.notes.list(&identity.id).await?;
    Ok(Json(serde_json::json!({ "notes": notes })))
}

pub async fn create_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = authenticate(&state, &headers).await?;

    if body.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Note content cannot be empty".into()));
    }

    let id = state.notes.insert(&identity.id, body).await?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

pub async fn update_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = authenticate(&state, &headers).await?;

    if body.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Note content cannot be empty".into()));
    }

    state.notes.update(id, &identity.id, body).await?;
    let note = state.notes.fetch(id, &identity.id).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = authenticate(&state, &headers).await?;
    state.notes.delete(id, &identity.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// SUMMARIZATION
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    #[serde(rename = "noteId")]
    note_id: Option<String>,
}

pub async fn summarize_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<SummarizeBody>>,
) -> Result<impl IntoResponse, ApiError> {
    let bearer = bearer_token(&headers);
    let note_id = body.as_ref().and_then(|Json(b)| b.note_id.as_deref());

    let outcome = state.summarize_service().summarize(bearer, note_id).await?;
    Ok(Json(outcome))
}
