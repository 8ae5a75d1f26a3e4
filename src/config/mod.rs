//! Configuration management module
//!
//! Responsible for loading plugin settings from environment variables

pub mod settings;

pub use settings::Settings;
