//! OpenAI chat completions client

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

use super::{CompletionError, CompletionProvider, CompletionRequest};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for [`OpenAiClient`]
///
/// Not `Debug`, to keep the API key out of logs.
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key; requests fail with an authentication error when unset
    pub api_key: Option<String>,
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Total request timeout
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Client for the OpenAI chat completions API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, CompletionError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Http {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key: config.api_key,
            base_url: config.base_url,
            timeout: config.timeout,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the chat completions endpoint URL
    fn build_endpoint_url(&self) -> String {
        endpoint_url(&self.base_url)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else {
            err.into()
        }
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Bytes, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CompletionError::Authentication("OPENAI_API_KEY is not set".to_string())
        })?;

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))
    }
}
