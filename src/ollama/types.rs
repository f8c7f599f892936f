//! Wire types for the native Ollama HTTP API.
//!
//! These mirror the request/response shapes of `/api/tags`, `/api/pull`,
//! and `/api/chat`, used for both request building and response parsing.

use serde::{Deserialize, Serialize};

// ─── Chat Types ──────────────────────────────────────────────────────────────

/// A single turn in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    /// A turn authored by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// A turn authored by the model.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Generation parameters for a single completion call.
///
/// Ranges are a caller contract: `max_tokens` in `[10, 500]`, `top_p` in
/// `[0.0, 1.0]`, `temperature` in `[-1.0, 1.0]`. Input widgets are expected
/// to clamp; [`GenerationParameters::clamped`] is provided for shells that
/// accept free-form input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub max_tokens: u32,
    pub top_p: f32,
    pub temperature: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_tokens: 100,
            top_p: 0.5,
            temperature: 0.8,
        }
    }
}

impl GenerationParameters {
    /// Clamp all fields into their documented ranges.
    pub fn clamped(self) -> Self {
        Self {
            max_tokens: self.max_tokens.clamp(10, 500),
            top_p: self.top_p.clamp(0.0, 1.0),
            temperature: self.temperature.clamp(-1.0, 1.0),
        }
    }
}

/// The `options` object sent with a chat request.
///
/// Field names follow Ollama's modelfile parameters: `max_tokens` is
/// serialized as `num_predict`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub num_predict: u32,
}

impl From<GenerationParameters> for ChatOptions {
    fn from(params: GenerationParameters) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            num_predict: params.max_tokens,
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub options: ChatOptions,
    pub stream: bool,
}

/// Response body from `POST /api/chat` (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: ChatTurn,
}

// ─── Model Listing Types ─────────────────────────────────────────────────────

/// Raw `/api/tags` response shape.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagModel>,
}

/// A single installed model entry from `/api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagModel {
    pub name: String,
}

// ─── Pull Types ──────────────────────────────────────────────────────────────

/// Request body for `POST /api/pull`.
///
/// `stream` is always `false` here: the caller blocks until the pull
/// reaches a terminal status.
#[derive(Debug, Clone, Serialize)]
pub struct PullRequest {
    pub name: String,
    pub stream: bool,
}

/// Terminal response from a non-streaming `POST /api/pull`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullResponse {
    #[serde(default)]
    pub status: String,
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// The portion of a model identifier preceding an optional `:` tag.
///
/// `"llama3:70b"` → `"llama3"`, `"mistral"` → `"mistral"`.
pub fn base_name(identifier: &str) -> &str {
    identifier.split(':').next().unwrap_or(identifier)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_tag() {
        assert_eq!(base_name("llama3:70b"), "llama3");
        assert_eq!(base_name("llama3:latest"), "llama3");
    }

    #[test]
    fn test_base_name_without_tag() {
        assert_eq!(base_name("mistral"), "mistral");
    }

    #[test]
    fn test_chat_request_serializes_ollama_option_names() {
        let req = ChatRequest {
            model: "llama3".to_string(),
            messages: vec![ChatTurn::user("hello")],
            options: GenerationParameters {
                max_tokens: 100,
                top_p: 0.5,
                temperature: 0.8,
            }
            .into(),
            stream: false,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"num_predict\":100"));
        assert!(json.contains("\"top_p\":0.5"));
        assert!(json.contains("\"stream\":false"));
        assert!(!json.contains("max_tokens"), "wire name is num_predict");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let turn = ChatTurn::user("hi");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_chat_response_parses_message_content() {
        let json = r#"{"model":"llama3","message":{"role":"assistant","content":"Hi there"},"done":true}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.content, "Hi there");
        assert_eq!(resp.message.role, Role::Assistant);
    }

    #[test]
    fn test_tags_response_tolerates_missing_models() {
        let resp: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.models.is_empty());
    }

    #[test]
    fn test_parameters_clamped_into_range() {
        let params = GenerationParameters {
            max_tokens: 5_000,
            top_p: 1.5,
            temperature: -3.0,
        }
        .clamped();
        assert_eq!(params.max_tokens, 500);
        assert_eq!(params.top_p, 1.0);
        assert_eq!(params.temperature, -1.0);
    }

    #[test]
    fn test_parameters_defaults() {
        let params = GenerationParameters::default();
        assert_eq!(params.max_tokens, 100);
        assert_eq!(params.top_p, 0.5);
        assert_eq!(params.temperature, 0.8);
    }
}
