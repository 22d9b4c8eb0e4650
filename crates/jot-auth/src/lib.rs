//! Identity verification against the external identity provider.
//!
//! Every authenticated request carries a bearer credential issued by the
//! identity provider. This crate resolves that credential to an [`Identity`]
//! by calling the provider's user endpoint. Verification results are never
//! cached; a revoked credential stops working on the next request.
//!
//! [`Identity`]: jot_core::Identity

pub mod verifier;

pub use verifier::{HttpIdentityVerifier, VerifierConfig};
