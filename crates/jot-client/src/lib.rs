//! Client for the jotter HTTP API.
//!
//! Two layers: [`ApiClient`] is a thin typed wrapper over the HTTP surface,
//! and [`NoteSession`] is the stateful controller a UI drives. The session
//! keeps a local list of notes and a feed of user-facing notices, and
//! reloads the full list from the server after every successful mutation so
//! local state never drifts from the store.

pub mod api;
pub mod session;

pub use api::{ApiClient, SummarizeResponse};
pub use session::{Notice, NoteSession, Severity};
