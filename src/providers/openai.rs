//! OpenAI Provider implementation
//!
//! Standard OpenAI-compatible chat completion endpoint

use super::ChatProvider;
use crate::config::Settings;
use crate::models::openai::*;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error};

/// OpenAI Provider
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl OpenAIProvider {
    /// Create a provider from plugin settings
    pub fn new(settings: &Settings) -> AppResult<Self> {
        Self::with_options(&settings.base_url, &settings.api_key, settings.timeout_secs())
    }

    /// Create a provider with explicit endpoint, key and timeout
    pub fn with_options(base_url: &str, api_key: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(concat!("drone-openai-plugin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            timeout_secs,
        })
    }

    /// Build the request URL
    pub fn build_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            error!("Request timed out after {}s", self.timeout_secs);
            AppError::Timeout(self.timeout_secs)
        } else {
            error!("HTTP error: {}", e);
            AppError::HttpClient(e)
        }
    }

    /// Handle HTTP response
    async fn handle_response(&self, response: Response) -> AppResult<OpenAIResponse> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            if let Ok(error_response) = serde_json::from_str::<OpenAIErrorResponse>(&body) {
                error!("OpenAI API error: {}", error_response.error.message);
            } else {
                error!("OpenAI API request failed: {} - {}", status, body);
            }
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let openai_response: OpenAIResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse OpenAI response: {}", e);
            AppError::Serialization(e)
        })?;

        debug!("OpenAI request completed successfully");
        Ok(openai_response)
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn chat_complete(&self, request: &OpenAIRequest) -> AppResult<OpenAIResponse> {
        debug!("Sending OpenAI chat completion request");

        let body = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(self.build_url())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        self.handle_response(response).await
    }
}
