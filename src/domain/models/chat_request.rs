use serde::{Deserialize, Serialize};

use super::ChatMessage;

/// An inbound chat turn: the new user message plus any prior turns the
/// caller wants replayed as context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    message: String,
    #[serde(default)]
    history: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}
