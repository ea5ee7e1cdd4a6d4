use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatUseCase, CompletionClient};
use crate::connector::adapter::{GroqClient, MockCompletionClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct ContainerConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Base URL of the OpenAI-compatible provider.
    pub base_url: String,
    /// Provider credential. Required unless `mock` is set.
    pub api_key: Option<String>,
    /// Use the offline [`MockCompletionClient`] instead of the provider.
    pub mock: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            mock: false,
        }
    }
}

/// Process-lifetime wiring: the completion client is built once here and
/// shared by every request.
pub struct Container {
    completion_client: Arc<dyn CompletionClient>,
    model: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let completion_client: Arc<dyn CompletionClient> = if config.mock {
            debug!("Using mock completion client");
            Arc::new(MockCompletionClient::new())
        } else {
            debug!("Using Groq completion client at {}", config.base_url);
            let client = match config.api_key {
                Some(key) => GroqClient::with_key(key, &config.base_url)?,
                None => GroqClient::from_env(&config.base_url)?,
            };
            Arc::new(client)
        };

        Ok(Self {
            completion_client,
            model: config.model,
        })
    }

    /// Wire an already-constructed client, e.g. a mock in tests.
    pub fn with_client(completion_client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            completion_client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(Arc::clone(&self.completion_client), self.model.clone())
    }
}
