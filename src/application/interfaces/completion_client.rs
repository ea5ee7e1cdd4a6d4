use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError};

/// An interface for sending an ordered, role-tagged conversation to an LLM
/// and receiving the generated reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. [`crate::application::ChatUseCase`] stays decoupled from any
/// particular provider or HTTP client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion for `messages` against `model` and return the text
    /// of the first choice.
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, DomainError>;
}
