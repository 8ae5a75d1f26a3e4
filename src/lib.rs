//! Drone OpenAI Plugin Library
//! 
//! Sends a prompt, optionally with an attached text or image file, to an
//! OpenAI-compatible chat completion API as one step of a CI pipeline

pub mod config;
pub mod models;
pub mod plugin;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{
    openai, ChatCompletion, ChatCompletionRequest, ContentPart, Message, MessageContent, Role, Usage,
};
pub use plugin::{run, Plugin};
pub use providers::{ChatProvider, OpenAIProvider};
pub use services::{ApiConverter, ChatClient, FileProcessor, OutputWriter};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin display name
pub const NAME: &str = "Drone OpenAI Plugin";

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}

/// Platform the published plugin image is built for
pub const TARGET_PLATFORM: &str = "linux/amd64";

/// Platform this process runs on, as `os/arch` with container-style arch names
pub fn platform() -> String {
    let arch = match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    };
    format!("{}/{}", std::env::consts::OS, arch)
}

/// Warning to print when `running` differs from [`TARGET_PLATFORM`]
pub fn platform_warning(running: &str) -> Option<String> {
    (running != TARGET_PLATFORM).then(|| {
        format!(
            "⚠️  WARNING: This binary was built for {} but is running on {}\n\
             This may cause compatibility issues.\n",
            TARGET_PLATFORM, running
        )
    })
}

/// Startup banner naming the plugin version, its target and the running platform
pub fn banner() -> String {
    let rule = "=".repeat(43);
    format!(
        "{rule}\n{}\nBuilt for: {}\nRunning on: {}\n{rule}\n",
        version_info(),
        TARGET_PLATFORM,
        platform(),
    )
}
