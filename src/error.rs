//! Error types for the PDF Q&A server

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::document::ExtractError;
use crate::model::ModelError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File must be a PDF")]
    InvalidFileType(String),

    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid multipart upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("{}", .0.body_text())]
    MultipartRequest(#[from] MultipartRejection),

    #[error("{}", .0.body_text())]
    JsonBody(#[from] JsonRejection),

    #[error("PDF not found")]
    DocumentNotFound(String),

    #[error("Error processing PDF: {0}")]
    Processing(#[from] ExtractError),

    #[error("Error running model: {0}")]
    Model(#[from] ModelError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFileType(_) | AppError::MissingFile => StatusCode::BAD_REQUEST,
            // 400 for malformed bodies, 413 when the upload exceeds the body limit
            AppError::Multipart(e) => e.status(),
            AppError::MultipartRequest(e) => e.status(),
            // 415 without a JSON content type, 422 for missing or mistyped fields
            AppError::JsonBody(e) => e.status(),
            AppError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Processing(_) | AppError::Model(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InvalidFileType(file_name) => {
                tracing::debug!(file_name = %file_name, "Rejected non-PDF upload");
            }
            AppError::DocumentNotFound(pdf_id) => {
                tracing::debug!(pdf_id = %pdf_id, "Unknown document requested");
            }
            _ if status.is_server_error() => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }

        // The underlying cause is passed through to the caller as-is.
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidFileType("notes.txt".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::DocumentNotFound("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Processing(ExtractError::Pdf("bad".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_carry_cause() {
        let err = AppError::Processing(ExtractError::Pdf("cannot find startxref".into()));
        assert_eq!(
            err.to_string(),
            "Error processing PDF: PDF parse error: cannot find startxref"
        );

        let err = AppError::Model(ModelError::Spawn {
            executable: "ollama".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        });
        assert_eq!(
            err.to_string(),
            "Error running model: failed to run ollama: No such file"
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            AppError::InvalidFileType("notes.txt".into()).to_string(),
            "File must be a PDF"
        );
        assert_eq!(AppError::DocumentNotFound("x".into()).to_string(), "PDF not found");
    }
}
