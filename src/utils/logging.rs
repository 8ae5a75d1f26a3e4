//! Logging utilities
//!
//! Subscriber setup and helpers that keep request logs readable

use crate::models::openai::{OpenAIContent, OpenAIContentPart, OpenAIMessage, OpenAIRequest};
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize logging system
///
/// `RUST_LOG` selects the filter (default `info`), `LOG_FORMAT=json` switches to
/// JSON lines. Logs go to stderr so stdout only carries the plugin output.
pub fn init_logging() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = EnvFilter::try_new(&log_level)
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", log_level, e))?;

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (CI log collectors)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .finish())
    } else {
        // Human readable format
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish())
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}

/// Keep the first `max_chars` characters, noting how many were cut
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => {
            let cut = s[end..].chars().count();
            format!("{}... ({} chars truncated)", &s[..end], cut)
        }
        None => s.to_string(),
    }
}

/// Describe an image URL without dumping embedded data
fn summarize_image_url(url: &str) -> String {
    match url.strip_prefix("data:").and_then(|rest| rest.split_once(";base64,")) {
        Some((mime, payload)) => format!("[data url: {}, {} base64 chars]", mime, payload.len()),
        None => truncate_content(url, 100),
    }
}

/// Create a filtered version of OpenAI message for logging
fn filter_openai_message(msg: &OpenAIMessage) -> serde_json::Value {
    let content = match &msg.content {
        Some(OpenAIContent::Text(t)) => {
            // For system messages, truncate more aggressively
            let max_len = if msg.role == "system" { 100 } else { 200 };
            serde_json::Value::String(truncate_content(t, max_len))
        },
        Some(OpenAIContent::Array(parts)) => {
            let previews: Vec<serde_json::Value> = parts.iter()
                .map(|part| match part {
                    OpenAIContentPart::Text { text } => {
                        serde_json::json!({"type": "text", "text": truncate_content(text, 100)})
                    },
                    OpenAIContentPart::ImageUrl { image_url } => {
                        serde_json::json!({"type": "image_url", "url": summarize_image_url(&image_url.url)})
                    },
                })
                .collect();
            serde_json::Value::Array(previews)
        },
        None => serde_json::Value::Null,
    };

    serde_json::json!({
        "role": msg.role,
        "content": content,
    })
}

/// Create a filtered summary of OpenAI request for logging
/// Keeps original structure but truncates verbose content
pub fn create_request_log_summary(request: &OpenAIRequest) -> serde_json::Value {
    let filtered_messages: Vec<serde_json::Value> = request.messages.iter()
        .map(filter_openai_message)
        .collect();

    serde_json::json!({
        "model": request.model,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "messages": filtered_messages,
    })
}
