//! PDF Q&A Server Library
//!
//! Upload a PDF, keep its text in memory, and ask a local language model
//! questions about it. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: PDF text extraction, identifiers and the in-memory store
//! - `model`: Prompt construction and the model runner
//! - `routes`: HTTP endpoints (`/api/upload`, `/api/ask`, `/health`)

pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
