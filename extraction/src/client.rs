//! Completion provider contract and the OpenAI-compatible implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::prompt::{CompletionRequest, Message};

/// Failure classes for a completion call.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The provider rejected the credential (401/403) or none was configured.
    #[error("provider authentication failed")]
    Auth,

    /// The provider reported a rate limit (429).
    #[error("provider rate limit hit")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other provider or transport failure.
    #[error("provider request failed: {reason}")]
    Provider { reason: String },

    /// The call succeeded but carried no assistant text.
    #[error("completion contained no text content")]
    EmptyResponse,
}

/// A text-completion provider.
///
/// Treated as an opaque function from prompt to assistant text. Exactly one
/// call is issued per incoming request; no retry policy lives here.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Configuration for [`OpenAiClient`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API credential, validated for presence at startup.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Provider base URL; overridable so tests can point at a local server.
    pub base_url: String,
    /// Outbound request timeout.
    pub timeout: Duration,
}

/// Chat-completions client for OpenAI-compatible providers.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Provider {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

/// Fixed directive asking the provider for a parseable JSON object.
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let resp = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Provider {
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(CompletionError::Auth);
        }

        if status.as_u16() == 429 {
            let retry_after_secs = resp
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(CompletionError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Completion request failed");
            return Err(CompletionError::Provider {
                reason: format!("HTTP {}: {detail}", status.as_u16()),
            });
        }

        let parsed: ChatResponse = resp.json().await.map_err(|e| CompletionError::Provider {
            reason: format!("undecodable provider response: {e}"),
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let client = OpenAiClient::new(OpenAiConfig {
            api_key: "test-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            base_url: "http://localhost:9999/".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        assert_eq!(
            client.completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_request_serializes_response_format() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: &[],
            temperature: 0.2,
            max_tokens: 1024,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["model"], "gpt-4o-mini");
    }

    #[test]
    fn test_chat_response_tolerates_missing_choices() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
