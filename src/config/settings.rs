//! Plugin configuration settings
//!
//! Every setting comes from a `PLUGIN_*` environment variable. Unset or empty
//! variables fall back to a default, and so do numeric values that fail to parse.

use crate::utils::error::{helpers::config_error, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_API_KEY: &str = "PLUGIN_API_KEY";
pub const ENV_MODEL: &str = "PLUGIN_MODEL";
pub const ENV_PROMPT: &str = "PLUGIN_PROMPT";
pub const ENV_FILE: &str = "PLUGIN_FILE";
pub const ENV_TEMPERATURE: &str = "PLUGIN_TEMPERATURE";
pub const ENV_MAX_TOKENS: &str = "PLUGIN_MAX_TOKENS";
pub const ENV_SYSTEM_PROMPT: &str = "PLUGIN_SYSTEM_PROMPT";
pub const ENV_OUTPUT_FILE: &str = "PLUGIN_OUTPUT_FILE";
pub const ENV_TIMEOUT: &str = "PLUGIN_TIMEOUT";
pub const ENV_BASE_URL: &str = "PLUGIN_BASE_URL";

/// All variables read by [`Settings::from_env`]
pub const PLUGIN_ENV_VARS: [&str; 10] = [
    ENV_API_KEY,
    ENV_MODEL,
    ENV_PROMPT,
    ENV_FILE,
    ENV_TEMPERATURE,
    ENV_MAX_TOKENS,
    ENV_SYSTEM_PROMPT,
    ENV_OUTPUT_FILE,
    ENV_TIMEOUT,
    ENV_BASE_URL,
];

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: i64 = 1000;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_TIMEOUT_SECS: i64 = 60;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API key sent as bearer token
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// User prompt
    pub prompt: String,
    /// File to attach, empty when unused
    pub file_path: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Completion token limit
    pub max_tokens: i64,
    /// System prompt
    pub system_prompt: String,
    /// File receiving the response content, empty when unused
    pub output_file: String,
    /// Request timeout in seconds
    pub timeout: i64,
    /// API base URL
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            prompt: String::new(),
            file_path: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            output_file: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, reading a `.env` file first if one exists
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: get_or_default(&lookup, ENV_API_KEY, ""),
            model: get_or_default(&lookup, ENV_MODEL, DEFAULT_MODEL),
            prompt: get_or_default(&lookup, ENV_PROMPT, ""),
            file_path: get_or_default(&lookup, ENV_FILE, ""),
            temperature: parse_or_default(&lookup, ENV_TEMPERATURE, DEFAULT_TEMPERATURE),
            max_tokens: parse_or_default(&lookup, ENV_MAX_TOKENS, DEFAULT_MAX_TOKENS),
            system_prompt: get_or_default(&lookup, ENV_SYSTEM_PROMPT, DEFAULT_SYSTEM_PROMPT),
            output_file: get_or_default(&lookup, ENV_OUTPUT_FILE, ""),
            timeout: parse_or_default(&lookup, ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS),
            base_url: get_or_default(&lookup, ENV_BASE_URL, DEFAULT_BASE_URL),
        }
    }

    /// Validate required fields
    ///
    /// The API key is checked before the prompt.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(config_error("API_KEY is required"));
        }
        if self.prompt.is_empty() {
            return Err(config_error("PROMPT is required"));
        }
        Ok(())
    }

    /// Attached file path, if configured
    pub fn file(&self) -> Option<&str> {
        non_empty(&self.file_path)
    }

    /// Output file path, if configured
    pub fn output(&self) -> Option<&str> {
        non_empty(&self.output_file)
    }

    /// Timeout in whole seconds, negative values clamp to zero
    pub fn timeout_secs(&self) -> u64 {
        u64::try_from(self.timeout).unwrap_or(0)
    }

    /// Request deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Get variable or default value, treating empty as unset
fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parse variable or fall back to default on absence or parse failure
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
