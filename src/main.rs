//! Drone OpenAI Plugin
//! 
//! CI pipeline step that sends one chat completion request to an
//! OpenAI-compatible API and prints the result

use anyhow::{Context, Result};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    drone_openai_plugin::utils::logging::init_logging()
        .context("Failed to initialize logging")?;

    println!("{}", drone_openai_plugin::banner());
    if let Some(warning) = drone_openai_plugin::platform_warning(&drone_openai_plugin::platform()) {
        println!("{}", warning);
    }

    match drone_openai_plugin::run().await {
        Ok(_) => {
            println!("\n✓ OpenAI plugin execution completed successfully");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("❌ Plugin execution failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
