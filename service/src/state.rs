//! Application state and configuration for the extraction service.

use std::sync::Arc;
use std::time::Duration;

use extraction::{ActionItemExtractor, OpenAiClient, OpenAiConfig};

use crate::error::{Result, ServiceError};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Configuration for the extraction service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Provider API credential. Required; validated once at startup.
    pub api_key: String,
    /// Model identifier for completion calls.
    pub model: String,
    /// Provider base URL; overridable for test servers.
    pub base_url: String,
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// Outbound completion request timeout, in seconds.
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    /// Creates a configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; the process refuses to start without
    /// it. Everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ServiceError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
        })
    }

    /// Creates a builder for configuration.
    #[must_use]
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Default)]
pub struct ServiceConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    request_timeout_secs: Option<u64>,
}

impl ServiceConfigBuilder {
    /// Sets the provider API credential.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the provider base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the host to bind to.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port to bind to.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the outbound request timeout in seconds.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<ServiceConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| ServiceError::Configuration("api_key is required".to_string()))?;

        Ok(ServiceConfig {
            api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.unwrap_or(3000),
            request_timeout_secs: self.request_timeout_secs.unwrap_or(60),
        })
    }
}

/// Shared application state for Axum handlers.
pub struct AppState {
    /// The extraction pipeline, holding the provider client.
    pub extractor: ActionItemExtractor<OpenAiClient>,
    /// Service configuration.
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates application state, building the provider client from config.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = OpenAiClient::new(OpenAiConfig {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
        .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        Ok(Self {
            extractor: ActionItemExtractor::new(client),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ServiceConfig::builder().api_key("test-key").build().unwrap();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_config_builder_success() {
        let config = ServiceConfig::builder()
            .api_key("test-key")
            .model("gpt-4o")
            .base_url("http://localhost:9999")
            .host("127.0.0.1")
            .port(8081)
            .request_timeout_secs(5)
            .build()
            .unwrap();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_config_builder_missing_api_key() {
        let result = ServiceConfig::builder().model("gpt-4o").build();

        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_app_state_construction() {
        let config = ServiceConfig::builder().api_key("test-key").build().unwrap();
        let state = AppState::new(config).unwrap();

        assert_eq!(state.config.model, DEFAULT_MODEL);
    }
}
