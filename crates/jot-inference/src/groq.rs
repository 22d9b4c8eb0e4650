//! Groq chat-completions backend.

use async_trait::async_trait;
use jot_core::{defaults, Error, Result, SummaryGenerator};
use std::time::Duration;
use tracing::{debug, warn};

use crate::prompt::{build_summary_prompt, sanitize_summary};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Configuration for the Groq generation backend.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Base URL of the OpenAI-compatible API, without a trailing slash.
    pub base_url: String,
    /// Bearer key for the generation service.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Token ceiling per completion.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: defaults::GROQ_URL.to_string(),
            api_key: api_key.into(),
            model: defaults::GEN_MODEL.to_string(),
            max_tokens: defaults::MAX_SUMMARY_TOKENS,
            timeout_seconds: defaults::GEN_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Stateless Groq client implementing [`SummaryGenerator`].
pub struct GroqBackend {
    client: reqwest::Client,
    config: GroqConfig,
}

impl GroqBackend {
    /// Fails when the underlying HTTP client cannot be constructed with
    /// the configured timeout.
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("generation client: {e}")))?;
        Ok(Self { client, config })
    }

    fn completions_endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SummaryGenerator for GroqBackend {
    async fn summarize(&self, note_content: &str) -> Result<String> {
        let prompt = build_summary_prompt(note_content);

        debug!(
            subsystem = "inference",
            component = "groq",
            op = "generate",
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Requesting summary completion"
        );

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.completions_endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !status.is_success() {
            // Preserve the provider's payload verbatim for the caller. A
            // non-JSON body is wrapped as a JSON string.
            let details: serde_json::Value = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone()));
            warn!(
                subsystem = "inference",
                component = "groq",
                op = "generate",
                status = status.as_u16(),
                "Generation provider returned an error"
            );
            return Err(Error::Provider(details));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Serialization(format!("completion response: {e}")))?;

        let summary = parsed
            .completion_text()
            .map(sanitize_summary)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                warn!(
                    subsystem = "inference",
                    component = "groq",
                    op = "generate",
                    "Completion carried no usable text, using placeholder"
                );
                defaults::EMPTY_SUMMARY_PLACEHOLDER.to_string()
            });

        debug!(
            subsystem = "inference",
            component = "groq",
            op = "generate",
            response_len = summary.len(),
            "Summary completion received"
        );

        Ok(summary)
    }
}
