//! API converter service
//!
//! Responsible for converting between the plugin's chat model and OpenAI wire format

use crate::models::openai::*;
use crate::models::{ChatCompletion, ChatCompletionRequest, ContentPart, Message, MessageContent, Role};
use crate::utils::error::{helpers::conversion_error, AppError, AppResult};
use tracing::{debug, error, warn};

/// API converter
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiConverter;

impl ApiConverter {
    /// Create a new converter instance
    pub fn new() -> Self {
        Self
    }

    /// Convert a chat completion request to an OpenAI request
    ///
    /// Non-positive or non-finite temperature and non-positive max token values
    /// are left off the wire.
    pub fn convert_request(&self, request: &ChatCompletionRequest) -> AppResult<OpenAIRequest> {
        debug!("Converting chat completion request with {} messages", request.messages.len());

        let messages = request
            .messages
            .iter()
            .map(|msg| self.convert_message(msg))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(OpenAIRequest {
            model: request.model.clone(),
            messages,
            temperature: (request.temperature.is_finite() && request.temperature > 0.0)
                .then_some(request.temperature),
            max_tokens: (request.max_tokens > 0).then_some(request.max_tokens),
        })
    }

    /// Convert a single message
    ///
    /// System and assistant messages must carry plain text; user messages may also
    /// carry multimodal parts.
    pub fn convert_message(&self, msg: &Message) -> AppResult<OpenAIMessage> {
        let content = match (msg.role, &msg.content) {
            (_, MessageContent::Text(text)) => OpenAIContent::Text(text.clone()),
            (Role::User, MessageContent::Multimodal(parts)) => {
                OpenAIContent::Array(parts.iter().map(convert_part).collect())
            }
            (role, MessageContent::Multimodal(_)) => {
                return Err(conversion_error(format!(
                    "{} message content must be text",
                    role
                )));
            }
        };

        Ok(OpenAIMessage {
            role: msg.role.as_str().to_string(),
            content: Some(content),
        })
    }

    /// Convert an OpenAI response into the first choice's content and usage
    pub fn convert_response(&self, response: OpenAIResponse) -> AppResult<ChatCompletion> {
        let content = match response.first_content() {
            Some(content) => content,
            None => {
                error!("No choices in response");
                return Err(AppError::NoResponse);
            }
        };

        if content.is_empty() {
            warn!("Empty content in response");
            return Err(AppError::EmptyResponse);
        }

        Ok(ChatCompletion {
            content,
            usage: response.usage.into(),
        })
    }
}

fn convert_part(part: &ContentPart) -> OpenAIContentPart {
    match part {
        ContentPart::Text(text) => OpenAIContentPart::Text { text: text.clone() },
        ContentPart::ImageUrl(url) => OpenAIContentPart::ImageUrl {
            image_url: OpenAIImageUrl { url: url.clone() },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Usage;

    fn response_with(choices: Vec<OpenAIChoice>) -> OpenAIResponse {
        OpenAIResponse {
            id: "chatcmpl-test".to_string(),
            object: "chat.completion".to_string(),
            created: 1_700_000_000,
            model: "gpt-4o-mini".to_string(),
            choices,
            usage: OpenAIUsage {
                prompt_tokens: 12,
                completion_tokens: 5,
                total_tokens: 17,
            },
        }
    }

    fn choice(content: Option<&str>) -> OpenAIChoice {
        OpenAIChoice {
            index: 0,
            message: OpenAIMessage {
                role: "assistant".to_string(),
                content: content.map(|c| OpenAIContent::Text(c.to_string())),
            },
            finish_reason: Some("stop".to_string()),
        }
    }

    #[test]
    fn test_convert_simple_request() {
        let converter = ApiConverter::new();
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message::system("You are a helpful assistant."),
                Message::user("hello"),
            ],
            temperature: 0.7,
            max_tokens: 1000,
        };

        let converted = converter.convert_request(&request).unwrap();
        assert_eq!(converted.model, "gpt-4o-mini");
        assert_eq!(converted.messages.len(), 2);
        assert_eq!(converted.messages[0].role, "system");
        assert_eq!(converted.messages[1].role, "user");
        assert_eq!(converted.temperature, Some(0.7));
        assert_eq!(converted.max_tokens, Some(1000));
    }

    #[test]
    fn test_convert_response() {
        let converter = ApiConverter::new();
        let completion = converter
            .convert_response(response_with(vec![choice(Some("Hi there"))]))
            .unwrap();

        assert_eq!(completion.content, "Hi there");
        assert_eq!(
            completion.usage,
            Usage {
                prompt_tokens: 12,
                completion_tokens: 5,
                total_tokens: 17,
            }
        );
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let converter = ApiConverter::new();
        let completion = converter
            .convert_response(response_with(vec![choice(Some("first")), choice(Some("second"))]))
            .unwrap();
        assert_eq!(completion.content, "first");
    }

    #[test]
    fn test_missing_or_empty_content() {
        let converter = ApiConverter::new();

        let err = converter.convert_response(response_with(vec![])).unwrap_err();
        assert!(matches!(err, AppError::NoResponse));

        let err = converter
            .convert_response(response_with(vec![choice(Some(""))]))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyResponse));

        let err = converter
            .convert_response(response_with(vec![choice(None)]))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyResponse));
    }
}
