//! Core traits for jotter abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability. Every repository
//! operation is owner-scoped: the caller supplies both the record id and the
//! verified owner, and a mismatched pair behaves identically to nonexistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{CreateNoteRequest, Identity, Note, UpdateNoteRequest};

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Repository for owner-scoped note storage.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note for the given owner.
    async fn insert(&self, owner: &str, req: CreateNoteRequest) -> Result<Uuid>;

    /// Fetch a note by id, scoped to its owner.
    ///
    /// Returns `Error::NoteNotFound` both when the id does not exist and
    /// when it exists under a different owner.
    async fn fetch(&self, id: Uuid, owner: &str) -> Result<Note>;

    /// List all notes for an owner, newest created first.
    async fn list(&self, owner: &str) -> Result<Vec<Note>>;

    /// Update a note's title and content, refreshing its updated timestamp.
    async fn update(&self, id: Uuid, owner: &str, req: UpdateNoteRequest) -> Result<()>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid, owner: &str) -> Result<()>;

    /// Store a generated summary on a note. Leaves content and ownership
    /// untouched.
    async fn set_summary(&self, id: Uuid, owner: &str, summary: &str) -> Result<()>;
}

// =============================================================================
// IDENTITY VERIFIER
// =============================================================================

/// Resolves a bearer credential to a verified identity.
///
/// This is a read-only check against an external identity provider. Every
/// failure path (provider rejection, malformed credential, transport
/// failure) collapses to `None`; nothing propagates past this boundary.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Option<Identity>;
}

// =============================================================================
// SUMMARY GENERATOR
// =============================================================================

/// Stateless adapter to an external text-generation service.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Summarize note content into a short natural-language paragraph.
    ///
    /// Returns `Error::Provider` with the raw provider payload on a
    /// non-success response; a response lacking usable text yields the
    /// `"No summary"` placeholder rather than an error.
    async fn summarize(&self, note_content: &str) -> Result<String>;
}
