//! Model runners
//!
//! Defines the runner trait and the implementation that shells out to a
//! local inference executable.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::config::ModelConfig;

/// Errors raised while running the model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to run {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },
}

/// Generates an answer for a fully built prompt
#[async_trait]
pub trait ModelRunner: Send + Sync {
    /// Name of the model answering prompts
    fn model_name(&self) -> &str;

    /// Run the model on `prompt` and return its trimmed output
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Runs `<executable> run <model> <prompt>` and captures stdout.
///
/// The call waits for the process to exit; there is no timeout, so a hung
/// model process hangs the request that started it.
pub struct OllamaRunner {
    /// Executable to invoke (e.g., "ollama")
    executable: String,
    /// Model name (e.g., "llama3.2:latest")
    model: String,
}

impl OllamaRunner {
    pub fn new(executable: &str, model: &str) -> Self {
        Self {
            executable: executable.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(&config.executable, &config.name)
    }

    /// Arguments passed to the executable
    fn args<'a>(&'a self, prompt: &'a str) -> [&'a str; 3] {
        ["run", self.model.as_str(), prompt]
    }
}

#[async_trait]
impl ModelRunner for OllamaRunner {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        tracing::debug!(
            executable = %self.executable,
            model = %self.model,
            prompt_chars = prompt.len(),
            "Running model"
        );

        let output = Command::new(&self.executable)
            .args(self.args(prompt))
            .output()
            .await
            .map_err(|source| ModelError::Spawn {
                executable: self.executable.clone(),
                source,
            })?;

        // Exit status is reported but not enforced: whatever reached stdout
        // is the answer, even if that is nothing.
        if !output.status.success() {
            tracing::warn!(
                model = %self.model,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Model process exited unsuccessfully"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
