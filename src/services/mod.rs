//! Service layer module
//!
//! Contains the file processor, API converter, chat client and output writer

pub mod client;
pub mod converter;
pub mod file;
pub mod output;

pub use client::ChatClient;
pub use converter::ApiConverter;
pub use file::FileProcessor;
pub use output::OutputWriter;
