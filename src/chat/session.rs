//! Session-scoped chat state.
//!
//! A `ChatSession` owns the transcript, the selected model, and the current
//! generation parameters for one user session. It is created at session
//! start, mutated on each exchange, and reset wholesale on clear. There is
//! no ambient store and no persistence: the transcript lives and dies with
//! the session value.

use uuid::Uuid;

use crate::ollama::{ChatClient, ChatTurn, GenerationParameters, OllamaError};

/// Greeting seeded as the transcript's first turn.
pub const SEED_GREETING: &str = "How may I assist you today?";

/// State for one chat session.
#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    model: String,
    params: GenerationParameters,
    transcript: Vec<ChatTurn>,
}

impl ChatSession {
    /// Start a session with the given model selection.
    ///
    /// The transcript starts seeded with a single assistant greeting.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            model: model.into(),
            params: GenerationParameters::default(),
            transcript: vec![ChatTurn::assistant(SEED_GREETING)],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn params(&self) -> GenerationParameters {
        self.params
    }

    /// The displayed conversation turns, oldest first.
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Select a different model for subsequent exchanges.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// Replace the generation parameters for subsequent exchanges.
    pub fn set_params(&mut self, params: GenerationParameters) {
        self.params = params;
    }

    /// Exchange one message with the model.
    ///
    /// The user turn is appended first. On success the assistant turn is
    /// appended as well (net +2 turns) and its text returned; on failure the
    /// transcript keeps only the user turn (net +1) and the error is
    /// returned for display. The session stays usable after a failure.
    pub async fn send(
        &mut self,
        client: &mut ChatClient,
        text: impl Into<String>,
    ) -> Result<String, OllamaError> {
        let text = text.into();
        self.transcript.push(ChatTurn::user(text.clone()));

        let reply = client.complete(&self.model, &text, self.params).await?;

        self.transcript.push(ChatTurn::assistant(reply.clone()));
        Ok(reply)
    }

    /// Reset the transcript to the single seeded greeting.
    pub fn clear(&mut self) {
        self.transcript = vec![ChatTurn::assistant(SEED_GREETING)];
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
