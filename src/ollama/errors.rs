//! Error types for the Ollama client.
//!
//! All errors implement `std::error::Error` via `thiserror`. The `Display`
//! output is what UI shells render to the user, so every variant carries a
//! human-readable message.

use thiserror::Error;

/// Errors that can occur talking to the Ollama server.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// TCP/HTTP connection to the server failed.
    #[error("connection failed to {endpoint}: {reason}")]
    Connection { endpoint: String, reason: String },

    /// Non-2xx HTTP response from the server.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// A model pull completed but reported a non-success terminal status.
    #[error("pull of '{model}' failed with status '{status}'")]
    PullFailed { model: String, status: String },

    /// Configuration loading or validation error.
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl OllamaError {
    /// Map a reqwest error into the matching variant.
    ///
    /// Connect-level failures become [`OllamaError::Connection`]; everything
    /// else (body read, decode) becomes [`OllamaError::MalformedResponse`].
    pub(crate) fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            OllamaError::Connection {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        } else if err.is_decode() {
            OllamaError::MalformedResponse {
                reason: err.to_string(),
            }
        } else {
            OllamaError::Connection {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_pull_status() {
        let err = OllamaError::PullFailed {
            model: "mistral".to_string(),
            status: "pull model manifest: file does not exist".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("mistral"));
        assert!(msg.contains("file does not exist"));
    }

    #[test]
    fn test_display_http_error() {
        let err = OllamaError::Http {
            status: 500,
            body: "internal server error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal server error");
    }
}
