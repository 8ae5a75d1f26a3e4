//! Provider module
//!
//! Defines the ChatProvider trait and the OpenAI implementation

pub mod openai;

use crate::models::openai::{OpenAIRequest, OpenAIResponse};
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// Upstream chat completion API
///
/// One call is one request/response exchange. Implementations fail with
/// network, timeout, API or serialization errors; content checks happen in
/// the client above this trait.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Send a chat completion request
    async fn chat_complete(&self, request: &OpenAIRequest) -> AppResult<OpenAIResponse>;
}

pub use openai::OpenAIProvider;
