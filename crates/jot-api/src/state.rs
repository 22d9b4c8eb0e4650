//! Shared application state.

use std::sync::Arc;

use jot_core::{IdentityVerifier, NoteRepository, SummaryGenerator};

use crate::services::SummarizeService;

/// Application state shared across all request handlers.
///
/// All collaborators sit behind trait objects so endpoint tests can swap in
/// in-memory fakes without a database or external services.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub generator: Arc<dyn SummaryGenerator>,
}

impl AppState {
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        verifier: Arc<dyn IdentityVerifier>,
        generator: Arc<dyn SummaryGenerator>,
    ) -> Self {
        Self {
            notes,
            verifier,
            generator,
        }
    }

    /// The summarization orchestrator bound to this state's collaborators.
    pub fn summarize_service(&self) -> SummarizeService {
        SummarizeService::new(
            self.verifier.clone(),
            self.notes.clone(),
            self.generator.clone(),
        )
    }
}
