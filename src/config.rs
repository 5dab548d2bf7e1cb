//! Configuration management for the PDF Q&A server

use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Inference executable, invoked as `<executable> run <name> <prompt>`
    pub executable: String,
    /// Model name passed to the executable
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API (with credentials)
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL_EXECUTABLE: &str = "ollama";
pub const DEFAULT_MODEL_NAME: &str = "llama3.2:latest";
/// Vite's default dev server origin
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            model: ModelConfig {
                executable: DEFAULT_MODEL_EXECUTABLE.to_string(),
                name: DEFAULT_MODEL_NAME.to_string(),
            },
            cors: CorsConfig {
                allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            },
            upload: UploadConfig {
                max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
        }
    }
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// the built-in defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: parse_var("SERVER_PORT", DEFAULT_PORT)?,
            },
            model: ModelConfig {
                executable: env::var("OLLAMA_BIN")
                    .unwrap_or_else(|_| DEFAULT_MODEL_EXECUTABLE.to_string()),
                name: env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            },
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ORIGIN")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            },
            upload: UploadConfig {
                max_bytes: parse_var("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}
