//! Plugin workflow
//!
//! Runs one invocation: settings -> optional file -> chat completion -> output.

use crate::config::Settings;
use crate::models::{ChatCompletion, ChatCompletionRequest, Message};
use crate::providers::{ChatProvider, OpenAIProvider};
use crate::services::{ChatClient, FileProcessor, OutputWriter};
use crate::utils::error::{AppError, AppResult};
use std::io::Write;
use tracing::{error, info, info_span, Span};

/// A single plugin invocation
pub struct Plugin<P> {
    settings: Settings,
    file_processor: FileProcessor,
    client: ChatClient<P>,
    output_writer: OutputWriter,
    span: Span,
}

impl<P: ChatProvider> Plugin<P> {
    /// Wire the pipeline components under a fresh `plugin` span
    pub fn new(settings: Settings, provider: P) -> Self {
        Self::with_span(settings, provider, info_span!("plugin"))
    }

    /// Wire the pipeline components under `span`
    pub fn with_span(settings: Settings, provider: P, span: Span) -> Self {
        Self {
            file_processor: FileProcessor::new(info_span!(parent: &span, "file")),
            client: ChatClient::new(provider, info_span!(parent: &span, "openai")),
            output_writer: OutputWriter::new(info_span!(parent: &span, "output")),
            settings,
            span,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the system and user messages
    ///
    /// Any attached file is read in full here, before the network stage.
    pub fn build_messages(&self) -> AppResult<Vec<Message>> {
        let user_message = match self.settings.file() {
            Some(path) => self
                .file_processor
                .process_file_content(&self.settings.prompt, path)?,
            None => Message::user(self.settings.prompt.as_str()),
        };

        Ok(vec![
            Message::system(self.settings.system_prompt.as_str()),
            user_message,
        ])
    }

    /// Build the chat completion request
    pub fn build_request(&self) -> AppResult<ChatCompletionRequest> {
        Ok(ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: self.build_messages()?,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        })
    }

    /// Run the whole pipeline, printing results to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> AppResult<ChatCompletion> {
        let result = self.execute(out).await;
        if let Err(e) = &result {
            let _enter = self.span.enter();
            error!(error_kind = e.error_type(), "plugin execution failed: {}", e);
        }
        result
    }

    async fn execute<W: Write>(&self, out: &mut W) -> AppResult<ChatCompletion> {
        {
            let _enter = self.span.enter();
            info!(
                model = %self.settings.model,
                temperature = self.settings.temperature,
                max_tokens = self.settings.max_tokens,
                timeout = self.settings.timeout,
                has_file = self.settings.file().is_some(),
                has_output_file = self.settings.output().is_some(),
                "configuration loaded"
            );
        }

        self.settings.validate()?;

        let request = self.build_request()?;

        let deadline = self.settings.timeout();
        let completion = tokio::time::timeout(deadline, self.client.create_chat_completion(&request))
            .await
            .map_err(|_| AppError::Timeout(self.settings.timeout_secs()))??;

        self.output_writer.write_response(
            out,
            &completion.content,
            &completion.usage,
            self.settings.output(),
        )?;

        let _enter = self.span.enter();
        info!("plugin execution completed successfully");
        Ok(completion)
    }
}

/// Run the plugin from the process environment against stdout
pub async fn run() -> AppResult<ChatCompletion> {
    let settings = Settings::load();
    let provider = OpenAIProvider::new(&settings)?;
    let plugin = Plugin::new(settings, provider);

    let mut out = std::io::stdout();
    plugin.run(&mut out).await
}
