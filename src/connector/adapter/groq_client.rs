use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::{ChatMessage, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope used by OpenAI-compatible providers.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for Groq's OpenAI-compatible chat completions endpoint (and any
/// other server speaking the same protocol).
///
/// One attempt per call: no retries, no client-side timeout beyond reqwest's
/// defaults. Every failure, whether transport, HTTP status, or an unexpected
/// body, comes back as [`DomainError::Upstream`].
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Build a client from `GROQ_API_KEY`, failing when the key is absent or
    /// blank so the process never runs with an unauthenticated client.
    pub fn from_env(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::with_key(key, base_url)
    }

    pub fn with_key(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, DomainError> {
        let key: String = api_key.into();
        if key.trim().is_empty() {
            return Err(DomainError::config(format!("{API_KEY_ENV} is not set")));
        }
        Ok(Self::new(key, base_url))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn describe_status(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => format!("GroqClient: API returned {status}: {}", parsed.error.message),
            Err(_) => format!("GroqClient: API returned {status}"),
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let request = ApiRequest {
            model,
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("GroqClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(DomainError::upstream(Self::describe_status(status, &body)));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("GroqClient: failed to parse response: {e}"))
        })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::upstream("GroqClient: response contained no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!("GroqClient: received {} chars", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = GroqClient::new("k", "https://api.groq.com/openai/");
        assert_eq!(client.url(), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[test]
    fn blank_key_is_a_config_error() {
        let err = GroqClient::with_key("   ", DEFAULT_BASE_URL).err().unwrap();
        assert!(err.is_config());
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn status_description_uses_provider_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        let text = GroqClient::describe_status(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(text, "GroqClient: API returned 401 Unauthorized: Invalid API Key");
    }

    #[test]
    fn status_description_without_json_body() {
        let text = GroqClient::describe_status(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(text, "GroqClient: API returned 502 Bad Gateway");
    }
}
