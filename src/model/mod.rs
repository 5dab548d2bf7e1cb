//! Local language model access
//!
//! Builds prompts from stored document text and hands them to a model
//! runner. The default runner shells out to `ollama`.

mod prompt;
mod runner;

pub use prompt::build_prompt;
pub use runner::{ModelError, ModelRunner, OllamaRunner};
