//! Typed HTTP endpoints of the Ollama API.
//!
//! `OllamaTransport` wraps a `reqwest` client pointed at one server endpoint
//! and exposes the three operations this crate consumes: `/api/tags`,
//! `/api/pull`, and `/api/chat`. All calls are non-streaming.

use std::time::Duration;

use reqwest::Client as HttpClient;

use super::errors::OllamaError;
use super::types::{
    ChatRequest, ChatResponse, PullRequest, PullResponse, TagModel, TagsResponse,
};

/// TCP connection timeout.
///
/// Connect failures should surface quickly; everything past the connect is
/// left to run without a deadline. Pulls in particular can take many
/// minutes, and completion latency is the model's to decide.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP transport for one Ollama server endpoint.
#[derive(Debug, Clone)]
pub struct OllamaTransport {
    http: HttpClient,
    base_url: String,
}

impl OllamaTransport {
    /// Create a transport for the given endpoint, e.g. `http://localhost:11434`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, OllamaError> {
        let base_url = endpoint.into();
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| OllamaError::Connection {
                endpoint: base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, base_url })
    }

    /// The server endpoint this transport talks to.
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// List the models installed on the server (`GET /api/tags`).
    pub async fn list_models(&self) -> Result<Vec<TagModel>, OllamaError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))?;

        let response = Self::check_status(response).await?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::MalformedResponse {
                reason: format!("bad /api/tags body: {e}"),
            })?;

        Ok(tags.models)
    }

    /// Pull a model and block until the pull reaches a terminal status
    /// (`POST /api/pull` with `stream: false`).
    pub async fn pull_model(&self, name: &str) -> Result<PullResponse, OllamaError> {
        let url = format!("{}/api/pull", self.base_url);
        let body = PullRequest {
            name: name.to_string(),
            stream: false,
        };

        tracing::info!(model = %name, "pulling model, this may take a while");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| OllamaError::MalformedResponse {
                reason: format!("bad /api/pull body: {e}"),
            })
    }

    /// Send a non-streaming chat completion request (`POST /api/chat`).
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, OllamaError> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.base_url, e))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| OllamaError::MalformedResponse {
                reason: format!("bad /api/chat body: {e}"),
            })
    }

    /// Turn a non-2xx response into [`OllamaError::Http`] with the body text.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OllamaError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(OllamaError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
