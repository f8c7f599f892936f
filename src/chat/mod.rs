//! Chat session layer: transcript lifecycle and model selection.

pub mod catalog;
pub mod session;

pub use catalog::{default_model, KnownModel, KNOWN_MODELS};
pub use session::{ChatSession, SEED_GREETING};
