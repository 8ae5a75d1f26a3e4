//! Error handling module
//!
//! Defines error types raised by the plugin pipeline

use std::io;
use thiserror::Error;

/// Application error types
///
/// Every variant is fatal for the invocation: the orchestrator logs it once and
/// the binary exits non-zero.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error (missing required field)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read
    #[error("error reading file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Message cannot be expressed on the wire
    #[error("Message conversion failed: {0}")]
    Conversion(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Request deadline elapsed
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Upstream API returned a non-success status
    #[error("OpenAI API error (status {status}): {body}")]
    Api {
        status: u16,
        body: String,
    },

    /// Response contained no choices
    #[error("no response from OpenAI")]
    NoResponse,

    /// First choice carried no content
    #[error("empty response from OpenAI")]
    EmptyResponse,

    /// Writing the result failed
    #[error("error writing output to {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::FileRead { .. } => "file_error",
            AppError::Serialization(_) | AppError::Conversion(_) => "serialization_error",
            AppError::HttpClient(_) => "network_error",
            AppError::Timeout(_) => "timeout_error",
            AppError::Api { .. } => "api_error",
            AppError::NoResponse | AppError::EmptyResponse => "content_error",
            AppError::Output { .. } => "output_error",
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error happened before any request left the process
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::FileRead { .. } | AppError::Conversion(_)
        )
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error helper functions
pub mod helpers {
    use super::*;

    /// Create configuration error
    pub fn config_error(message: impl Into<String>) -> AppError {
        AppError::Config(message.into())
    }

    /// Create conversion error
    pub fn conversion_error(message: impl Into<String>) -> AppError {
        AppError::Conversion(message.into())
    }

    /// Create file read error
    pub fn file_error(path: impl Into<String>, source: io::Error) -> AppError {
        AppError::FileRead { path: path.into(), source }
    }

    /// Create output error
    pub fn output_error(target: impl Into<String>, source: io::Error) -> AppError {
        AppError::Output { target: target.into(), source }
    }
}
