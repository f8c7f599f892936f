//! localchat — chat backend for a locally hosted Ollama server.
//!
//! The crate is split into three layers:
//! - [`config`] loads `parameters.yml` and builds the server endpoint.
//! - [`ollama`] talks to the server: availability resolution (list + pull)
//!   and single-turn, non-streaming chat completions.
//! - [`chat`] holds the per-session state: transcript, model selection, and
//!   generation parameters.
//!
//! The terminal front-end in `main.rs` is a thin shell over these layers;
//! any other UI can drive them the same way.

pub mod chat;
pub mod config;
pub mod ollama;

pub use chat::{ChatSession, SEED_GREETING};
pub use config::Parameters;
pub use ollama::{ChatClient, ChatTurn, GenerationParameters, OllamaError, OllamaTransport};
