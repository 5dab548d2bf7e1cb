//! Extraction error types

use thiserror::Error;

/// Errors raised while turning an uploaded PDF into text
#[derive(Debug, Error)]
pub enum ExtractError {
    /// MuPDF could not open or read the document
    #[error("PDF parse error: {0}")]
    Pdf(String),

    /// IO error (temporary file handling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Blocking extraction task failed to complete
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

impl From<mupdf::Error> for ExtractError {
    fn from(err: mupdf::Error) -> Self {
        ExtractError::Pdf(err.to_string())
    }
}
