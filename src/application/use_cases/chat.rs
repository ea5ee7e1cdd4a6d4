use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::CompletionClient;
use crate::domain::{assemble_messages, ChatReply, ChatRequest, QuestionKind};

pub struct ChatUseCase {
    completion_client: Arc<dyn CompletionClient>,
    model: String,
}

impl ChatUseCase {
    pub fn new(completion_client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            completion_client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Handle one chat turn. Provider failures are folded into
    /// [`ChatReply::Failure`]; this never returns an error.
    pub async fn execute(&self, request: ChatRequest) -> ChatReply {
        let kind = QuestionKind::classify(request.message());
        let messages = assemble_messages(kind, request.history(), request.message());

        info!(
            "Chat turn: prompt={} history={} model={}",
            kind.as_str(),
            request.history().len(),
            self.model
        );
        debug!("Sending {} messages to completion provider", messages.len());

        let start_time = Instant::now();

        match self.completion_client.complete(&self.model, &messages).await {
            Ok(reply) => {
                info!(
                    "Completion returned {} chars in {:.2}s",
                    reply.len(),
                    start_time.elapsed().as_secs_f64()
                );
                ChatReply::success(reply)
            }
            Err(e) => {
                warn!("Completion failed: {}", e);
                ChatReply::failure(e.to_string())
            }
        }
    }

    pub async fn ask(&self, message: &str) -> ChatReply {
        self.execute(ChatRequest::new(message)).await
    }
}
