//! File processing service
//!
//! Turns an attached file into the user message: images become a text + data URL
//! pair, anything else is appended to the prompt as text.

use crate::models::{ContentPart, Message, MessageContent};
use crate::utils::error::{helpers::file_error, AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{info, Span};

/// Extensions recognised as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Kind of an attached file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Text,
}

/// File processor
#[derive(Debug, Clone)]
pub struct FileProcessor {
    span: Span,
}

impl FileProcessor {
    /// Create a processor logging under `span`
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    /// Read `file_path` and build the user message around `prompt`
    pub fn process_file_content(&self, prompt: &str, file_path: &str) -> AppResult<Message> {
        let _enter = self.span.enter();
        info!(path = %file_path, "processing file");

        let file_data = std::fs::read(file_path).map_err(|e| file_error(file_path, e))?;

        match classify(file_path) {
            FileKind::Image => {
                let mime = mime_type(file_path);
                info!(mime_type = mime, "detected image file");
                Ok(image_message(prompt, mime, &file_data))
            }
            FileKind::Text => {
                info!(size_bytes = file_data.len(), "detected text file");
                let file_content = String::from_utf8_lossy(&file_data);
                Ok(Message::user(format!(
                    "{}\n\nFile content:\n{}",
                    prompt, file_content
                )))
            }
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(Span::none())
    }
}

/// Classify a path by its extension
pub fn classify(file_path: &str) -> FileKind {
    if is_image_file(file_path) {
        FileKind::Image
    } else {
        FileKind::Text
    }
}

/// Check if the file is an image based on extension
pub fn is_image_file(file_path: &str) -> bool {
    let lower = file_path.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// MIME type for the file's extension
pub fn mime_type(file_path: &str) -> &'static str {
    let lower = file_path.to_lowercase();
    match lower.as_str() {
        p if p.ends_with(".jpg") || p.ends_with(".jpeg") => "image/jpeg",
        p if p.ends_with(".png") => "image/png",
        p if p.ends_with(".gif") => "image/gif",
        p if p.ends_with(".webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Build a `data:` URL embedding `data`
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

fn image_message(prompt: &str, mime: &str, data: &[u8]) -> Message {
    Message::user(MessageContent::Multimodal(vec![
        ContentPart::Text(prompt.to_string()),
        ContentPart::ImageUrl(data_url(mime, data)),
    ]))
}
