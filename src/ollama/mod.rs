//! Ollama client — availability resolution and single-turn chat completions.
//!
//! This module handles all communication with the local Ollama server:
//! - Model listing and blocking pulls (`/api/tags`, `/api/pull`)
//! - Non-streaming chat completions (`/api/chat`)
//! - Base-name model availability checks
//!
//! The client speaks the native Ollama API. The server endpoint comes from
//! `parameters.yml` and is fixed for the process lifetime.

pub mod client;
pub mod errors;
pub mod resolver;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::ChatClient;
pub use errors::OllamaError;
pub use resolver::ModelResolver;
pub use transport::OllamaTransport;
pub use types::{base_name, ChatTurn, GenerationParameters, Role};
