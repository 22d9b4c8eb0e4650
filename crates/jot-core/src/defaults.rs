//! Centralized default constants for the jotter system.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// GENERATION
// =============================================================================

/// Default Groq (OpenAI-compatible) API endpoint.
pub const GROQ_URL: &str = "https://api.groq.com/openai/v1";

/// Default generation model for note summarization.
pub const GEN_MODEL: &str = "llama-3.3-70b-versatile";

/// Token ceiling for a single summary completion, bounding response length
/// and cost.
pub const MAX_SUMMARY_TOKENS: u32 = 250;

/// Generation request timeout in seconds.
pub const GEN_TIMEOUT_SECS: u64 = 120;

/// Placeholder returned when the provider response carries no usable text.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No summary";

// =============================================================================
// IDENTITY
// =============================================================================

/// Identity provider token-lookup timeout in seconds.
pub const AUTH_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Default maximum request body size in bytes.
pub const MAX_BODY_BYTES: usize = 256 * 1024;
