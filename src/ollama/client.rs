//! Chat request client.
//!
//! Sends single-turn chat completion requests to the Ollama server and maps
//! responses into either generated text or an [`OllamaError`]. On the first
//! call, and whenever the model selection changes between calls, the client
//! runs the availability resolver before completing.

use super::errors::OllamaError;
use super::resolver::ModelResolver;
use super::transport::OllamaTransport;
use super::types::{ChatRequest, ChatTurn, GenerationParameters};

/// Client for single-turn chat completions.
///
/// Holds the transport and remembers the last model it resolved so that
/// repeated calls with the same model skip the availability check.
pub struct ChatClient {
    transport: OllamaTransport,
    resolver: ModelResolver,
    /// The model the last call ran against, resolved or not.
    current_model: Option<String>,
}

impl ChatClient {
    /// Create a client over the given transport.
    pub fn new(transport: OllamaTransport) -> Self {
        Self {
            transport,
            resolver: ModelResolver,
            current_model: None,
        }
    }

    /// The transport this client sends through.
    pub fn transport(&self) -> &OllamaTransport {
        &self.transport
    }

    /// Complete a single user message against `model`.
    ///
    /// Each call is stateless from the model's perspective: only the latest
    /// user message is sent, never prior transcript. Exactly one of
    /// `Ok(text)` / `Err(_)` is returned; no retries are attempted.
    ///
    /// When `model` differs from the previous call the resolver runs first.
    /// A resolution failure is logged and the completion is still attempted:
    /// the chat endpoint gives the definitive answer on whether the model is
    /// usable, and a flaky listing should not block a loaded model.
    pub async fn complete(
        &mut self,
        model: &str,
        user_message: &str,
        params: GenerationParameters,
    ) -> Result<String, OllamaError> {
        if self.current_model.as_deref() != Some(model) {
            if let Err(e) = self.resolver.ensure_available(&self.transport, model).await {
                tracing::warn!(model = %model, error = %e, "model resolution failed, attempting completion anyway");
            }
            self.current_model = Some(model.to_string());
        }

        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatTurn::user(user_message)],
            options: params.into(),
            stream: false,
        };

        let response = self.transport.chat(&request).await?;
        Ok(response.message.content)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
