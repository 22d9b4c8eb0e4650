//! Note summarization orchestrator.
//!
//! Drives one summarization request through its fixed sequence: authenticate,
//! validate input, fetch the owner-scoped note, generate, persist. Each step
//! either advances or terminates the request with a specific error; no step
//! is reordered or skipped. Persistence is the one non-fatal step: a summary
//! that was generated but could not be stored is still returned to the
//! caller, flagged as unpersisted.

use std::sync::Arc;
use std::time::Instant;

use jot_core::{IdentityVerifier, NoteRepository, SummaryGenerator};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;

/// Result of a completed summarization.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummarizeOutcome {
    pub summary: String,
    /// False when the summary was generated but the store rejected the
    /// write. The caller still gets the text; it is just not saved.
    pub persisted: bool,
}

/// Orchestrates the summarize flow across the identity, storage, and
/// generation boundaries.
pub struct SummarizeService {
    verifier: Arc<dyn IdentityVerifier>,
    notes: Arc<dyn NoteRepository>,
    generator: Arc<dyn SummaryGenerator>,
}

impl SummarizeService {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        notes: Arc<dyn NoteRepository>,
        generator: Arc<dyn SummaryGenerator>,
    ) -> Self {
        Self {
            verifier,
            notes,
            generator,
        }
    }

    /// Run one summarization request end to end.
    ///
    /// `bearer` is the credential extracted from the `Authorization` header,
    /// `None` when the header was absent; `note_id` is the raw id from the
    /// request body. Authentication happens before any input validation or
    /// store access, so an unauthenticated request touches nothing.
    pub async fn summarize(
        &self,
        bearer: Option<&str>,
        note_id: Option<&str>,
    ) -> Result<SummarizeOutcome, ApiError> {
        let credential = bearer.ok_or(ApiError::MissingAuth)?;

        let identity = self
            .verifier
            .verify(credential)
            .await
            .ok_or(ApiError::InvalidToken)?;

        let note_id = note_id.ok_or_else(|| ApiError::BadRequest("noteId required".into()))?;

        // An id that is not a UUID cannot name a stored note, so it takes
        // the same path as an unknown one.
        let note_id: Uuid = note_id
            .parse()
            .map_err(|_| ApiError::NotFound("Note not found".into()))?;

        // Any store failure on this path reads as an unknown note; the
        // caller cannot distinguish a missing row from an unreachable store.
        let note = self
            .notes
            .fetch(note_id, &identity.id)
            .await
            .map_err(|_| ApiError::NotFound("Note not found".into()))?;

        let start = Instant::now();
        let summary = self.generator.summarize(&note.content).await?;

        info!(
            subsystem = "api",
            component = "summarize",
            op = "generate",
            note_id = %note_id,
            owner_id = %identity.id,
            duration_ms = start.elapsed().as_millis() as u64,
            response_len = summary.len(),
            "Summary generated"
        );

        // Persistence failure is downgraded: the caller already has the
        // summary, losing the write only costs a regeneration later.
        let persisted = match self.notes.set_summary(note_id, &identity.id, &summary).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    subsystem = "api",
                    component = "summarize",
                    op = "set_summary",
                    note_id = %note_id,
                    owner_id = %identity.id,
                    error = %e,
                    "Generated summary could not be persisted"
                );
                false
            }
        };

        Ok(SummarizeOutcome { summary, persisted })
    }
}
