//! Chat completion client service
//!
//! Converts plugin messages to the wire format, sends them through a
//! [`ChatProvider`] and validates what comes back.

use crate::models::{ChatCompletion, ChatCompletionRequest};
use crate::providers::ChatProvider;
use crate::services::converter::ApiConverter;
use crate::utils::error::AppResult;
use crate::utils::logging::create_request_log_summary;
use tracing::{debug, error, info, Instrument, Span};

/// Chat completion client
#[derive(Debug, Clone)]
pub struct ChatClient<P> {
    provider: P,
    converter: ApiConverter,
    span: Span,
}

impl<P: ChatProvider> ChatClient<P> {
    /// Create a client logging under `span`
    pub fn new(provider: P, span: Span) -> Self {
        Self {
            provider,
            converter: ApiConverter::new(),
            span,
        }
    }

    /// Get inner provider reference
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Send one chat completion request
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> AppResult<ChatCompletion> {
        self.send(request).instrument(self.span.clone()).await
    }

    async fn send(&self, request: &ChatCompletionRequest) -> AppResult<ChatCompletion> {
        info!(
            provider = self.provider.name(),
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            num_messages = request.messages.len(),
            "creating chat completion"
        );

        let openai_request = self.converter.convert_request(request)?;
        debug!("Request summary: {}", create_request_log_summary(&openai_request));

        let response = self.provider.chat_complete(&openai_request).await.map_err(|e| {
            error!(error_kind = e.error_type(), "OpenAI API call failed: {}", e);
            e
        })?;

        let completion = self.converter.convert_response(response)?;

        info!(
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            total_tokens = completion.usage.total_tokens,
            "chat completion successful"
        );

        Ok(completion)
    }
}
