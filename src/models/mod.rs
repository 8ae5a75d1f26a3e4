//! Data models module
//!
//! Defines the plugin's chat messages and the OpenAI wire structures

use serde::{Deserialize, Serialize};

pub mod message;
pub mod openai;

pub use message::{ChatCompletionRequest, ContentPart, Message, MessageContent, Role};

/// Usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt token count
    pub prompt_tokens: u64,
    /// Completion token count
    pub completion_tokens: u64,
    /// Total token count
    pub total_tokens: u64,
}

impl From<openai::OpenAIUsage> for Usage {
    fn from(usage: openai::OpenAIUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Completed chat response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    /// Content of the first choice
    pub content: String,
    /// Token usage reported by the API
    pub usage: Usage,
}
