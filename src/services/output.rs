//! Output service
//!
//! Prints the response and its usage statistics, and optionally saves the
//! content to a file.

use crate::models::Usage;
use crate::utils::error::{helpers::output_error, AppResult};
use std::io::Write;
use tracing::{info, Span};

const STDOUT_TARGET: &str = "stdout";

/// Output writer
#[derive(Debug, Clone)]
pub struct OutputWriter {
    span: Span,
}

impl OutputWriter {
    /// Create a writer logging under `span`
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    /// Print `content` and `usage` to `out`, then write `content` to `output_file`
    ///
    /// The file receives only the content and is overwritten if it exists.
    pub fn write_response<W: Write>(
        &self,
        out: &mut W,
        content: &str,
        usage: &Usage,
        output_file: Option<&str>,
    ) -> AppResult<()> {
        let _enter = self.span.enter();

        print_response(out, content, usage).map_err(|e| output_error(STDOUT_TARGET, e))?;

        if let Some(path) = output_file {
            std::fs::write(path, content).map_err(|e| output_error(path, e))?;
            info!(path = %path, bytes = content.len(), "response saved to file");

            writeln!(out, "\nResponse saved to: {}", path)
                .map_err(|e| output_error(STDOUT_TARGET, e))?;
        }

        out.flush().map_err(|e| output_error(STDOUT_TARGET, e))
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(Span::none())
    }
}

fn print_response<W: Write>(out: &mut W, content: &str, usage: &Usage) -> std::io::Result<()> {
    writeln!(out, "=== OpenAI Response ===")?;
    writeln!(out, "{}", content)?;
    writeln!(out, "\n=== Usage Statistics ===")?;
    writeln!(out, "Prompt Tokens: {}", usage.prompt_tokens)?;
    writeln!(out, "Completion Tokens: {}", usage.completion_tokens)?;
    writeln!(out, "Total Tokens: {}", usage.total_tokens)
}
