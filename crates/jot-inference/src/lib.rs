//! Text generation backend for note summarization.
//!
//! Wraps the Groq OpenAI-compatible chat completions API behind the
//! [`SummaryGenerator`] trait. The backend is stateless: each call builds a
//! prompt, issues one HTTP request, and post-processes the completion.
//!
//! [`SummaryGenerator`]: jot_core::SummaryGenerator

pub mod groq;
pub mod prompt;
pub mod types;

pub use groq::{GroqBackend, GroqConfig};
