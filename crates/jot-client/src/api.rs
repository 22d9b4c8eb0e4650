//! Typed HTTP wrapper over the jotter API.

use jot_core::{Error, Note, Result};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

/// Outcome of a summarize call.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub persisted: bool,
}

/// Error body rendered by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct ListNotesBody {
    notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
struct CreatedBody {
    id: Uuid,
}

/// One client per authenticated session; the bearer credential is fixed at
/// construction.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Turn a non-success response into the server's error message.
    async fn fail(response: reqwest::Response) -> Error {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => Error::Request(body.error),
            Err(_) => Error::Request(format!("request failed with status {status}")),
        }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let response = self
            .client
            .get(self.url("/api/notes"))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        let body: ListNotesBody = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(body.notes)
    }

    /// Create a note and return its id.
    pub async fn create_note(&self, title: Option<&str>, content: &str) -> Result<Uuid> {
        let response = self
            .client
            .post(self.url("/api/notes"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "title": title, "content": content }))
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        let body: CreatedBody = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(body.id)
    }

    pub async fn update_note(
        &self,
        id: Uuid,
        title: Option<&str>,
        content: &str,
    ) -> Result<Note> {
        let response = self
            .client
            .put(self.url(&format!("/api/notes/{id}")))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "title": title, "content": content }))
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/notes/{id}")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        Ok(())
    }

    pub async fn summarize_note(&self, id: Uuid) -> Result<SummarizeResponse> {
        debug!(subsystem = "client", note_id = %id, "Requesting summary");
        let response = self
            .client
            .post(self.url("/api/summarize-note"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "noteId": id.to_string() }))
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }
}
