//! HTTP identity verifier backed by the provider's `/auth/v1/user` endpoint.

use async_trait::async_trait;
use jot_core::defaults;
use jot_core::{Error, Identity, IdentityVerifier, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP identity verifier.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Base URL of the identity provider, without a trailing slash.
    pub base_url: String,
    /// Project API key, sent in the `apikey` header alongside the
    /// caller's bearer credential.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl VerifierConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_seconds: defaults::AUTH_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// Wire shape of the provider's user payload. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    email: Option<String>,
}

/// Verifies bearer credentials by asking the identity provider who they
/// belong to. Stateless; any failure (network, timeout, non-2xx status,
/// malformed body) is reported as an unverified credential rather than
/// an error, so callers uniformly reject with 401.
pub struct HttpIdentityVerifier {
    client: reqwest::Client,
    config: VerifierConfig,
}

impl HttpIdentityVerifier {
    /// Fails when the underlying HTTP client cannot be constructed with
    /// the configured timeout.
    pub fn new(config: VerifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("identity verifier client: {e}")))?;
        Ok(Self { client, config })
    }

    fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, credential: &str) -> Option<Identity> {
        if credential.is_empty() {
            return None;
        }

        let response = match self
            .client
            .get(self.user_endpoint())
            .header("Authorization", format!("Bearer {}", credential))
            .header("apikey", &self.config.api_key)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    subsystem = "auth",
                    component = "verifier",
                    op = "verify",
                    error = %e,
                    "Identity provider unreachable"
                );
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(
                subsystem = "auth",
                component = "verifier",
                op = "verify",
                status = response.status().as_u16(),
                "Credential rejected by identity provider"
            );
            return None;
        }

        match response.json::<UserPayload>().await {
            Ok(user) => {
                debug!(
                    subsystem = "auth",
                    component = "verifier",
                    op = "verify",
                    owner_id = %user.id,
                    "Credential verified"
                );
                Some(Identity {
                    id: user.id,
                    email: user.email,
                })
            }
            Err(e) => {
                warn!(
                    subsystem = "auth",
                    component = "verifier",
                    op = "verify",
                    error = %e,
                    "Identity provider returned an unreadable user payload"
                );
                None
            }
        }
    }
}
