//! Request-scoped services composed from the core trait objects.

pub mod summarize;

pub use summarize::{SummarizeOutcome, SummarizeService};
