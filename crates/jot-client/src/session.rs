//! Stateful session controller mirroring the notes dashboard.
//!
//! The session owns a cached note list and a notice feed. Mutations go to
//! the server first; on success the session reloads the entire list rather
//! than patching the cache, so the local view always reflects what the
//! store accepted. On failure the cache is left untouched and only a
//! notice is recorded.

use jot_core::Note;
use tracing::warn;
use uuid::Uuid;

use crate::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A user-facing notice, the API equivalent of a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    fn success(text: &str) -> Self {
        Self {
            severity: Severity::Success,
            text: text.to_string(),
        }
    }

    fn error(text: &str) -> Self {
        Self {
            severity: Severity::Error,
            text: text.to_string(),
        }
    }
}

pub struct NoteSession {
    api: ApiClient,
    notes: Vec<Note>,
    notices: Vec<Notice>,
}

impl NoteSession {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            notes: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// The cached note list, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notices recorded so far, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Replace the cached list with the server's current state.
    pub async fn load_notes(&mut self) -> bool {
        match self.api.list_notes().await {
            Ok(notes) => {
                self.notes = notes;
                true
            }
            Err(e) => {
                warn!(subsystem = "client", error = %e, "Failed to load notes");
                self.notify(Notice::error("Error loading notes"));
                false
            }
        }
    }

    /// Create a note. Empty content is rejected locally, without a network
    /// call.
    pub async fn add_note(&mut self, title: Option<&str>, content: &str) {
        if content.trim().is_empty() {
            self.notify(Notice::error("Note content cannot be empty"));
            return;
        }
        match self.api.create_note(title, content).await {
            Ok(_) => {
                self.notify(Notice::success("Note added!"));
                self.load_notes().await;
            }
            Err(e) => {
                warn!(subsystem = "client", error = %e, "Failed to add note");
                self.notify(Notice::error("Failed to add note"));
            }
        }
    }

    pub async fn update_note(&mut self, id: Uuid, title: Option<&str>, content: &str) {
        if content.trim().is_empty() {
            self.notify(Notice::error("Note content cannot be empty"));
            return;
        }
        match self.api.update_note(id, title, content).await {
            Ok(_) => {
                self.notify(Notice::success("Note updated"));
                self.load_notes().await;
            }
            Err(e) => {
                warn!(subsystem = "client", note_id = %id, error = %e, "Failed to update note");
                self.notify(Notice::error("Update failed"));
            }
        }
    }

    pub async fn delete_note(&mut self, id: Uuid) {
        match self.api.delete_note(id).await {
            Ok(()) => {
                self.notify(Notice::success("Note deleted"));
                self.load_notes().await;
            }
            Err(e) => {
                warn!(subsystem = "client", note_id = %id, error = %e, "Failed to delete note");
                self.notify(Notice::error("Failed to delete"));
            }
        }
    }

    /// Request a summary for a note and refresh the list so the stored
    /// summary becomes visible.
    pub async fn summarize_note(&mut self, id: Uuid) -> Option<String> {
        match self.api.summarize_note(id).await {
            Ok(outcome) => {
                self.notify(Notice::success("Summary generated!"));
                self.load_notes().await;
                Some(outcome.summary)
            }
            Err(e) => {
                warn!(subsystem = "client", note_id = %id, error = %e, "Failed to summarize note");
                self.notify(Notice::error("Failed to summarize"));
                None
            }
        }
    }
}
