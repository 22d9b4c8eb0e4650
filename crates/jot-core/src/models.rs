//! Core data models for jotter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's note.
///
/// Every note has exactly one owner and is only reachable through
/// owner-scoped repository operations; the summary field is derived and
/// written only by the summarize path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: Uuid,
    /// Opaque principal id of the owner, as resolved by the identity provider.
    pub owner_id: String,
    pub title: Option<String>,
    pub content: String,
    /// AI-generated summary; absent until the note has been summarized.
    pub summary: Option<String>,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// A verified caller identity.
///
/// Established once per request from a bearer credential; never cached
/// across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Opaque principal id.
    pub id: String,
    /// Email-like label, when the provider reports one.
    pub email: Option<String>,
}

/// Request for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: String,
}

/// Request for updating a note's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: String,
}
