use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{ChatMessage, DomainError, Role};

/// A single recorded invocation of [`MockCompletionClient::complete`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

enum Behavior {
    Echo,
    Reply(String),
    Fail(String),
}

/// Offline [`CompletionClient`] for `--mock` runs and tests. Never touches
/// the network and records every call it receives.
pub struct MockCompletionClient {
    behavior: Behavior,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionClient {
    /// Echoes the last user message back, prefixed with `[mock]`.
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(reply.into()))
    }

    /// Fails every call with an upstream error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fail(message.into()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn echo(messages: &[ChatMessage]) -> String {
        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(|m| m.content())
            .unwrap_or_default();
        format!("[mock] {last_user}")
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, DomainError> {
        debug!("MockCompletionClient: {} messages for {}", messages.len(), model);

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                model: model.to_string(),
                messages: messages.to_vec(),
            });
        }

        match &self.behavior {
            Behavior::Echo => Ok(Self::echo(messages)),
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Fail(message) => Err(DomainError::upstream(message.clone())),
        }
    }
}
