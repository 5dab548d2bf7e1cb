//! Upload Routes
//!
//! Endpoints:
//! - POST /api/upload - Multipart PDF upload (field `file`), returns the document id

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Multipart field carrying the PDF
pub const FILE_FIELD: &str = "file";

pub const UPLOAD_SUCCESS_MESSAGE: &str = "PDF uploaded successfully";

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub pdf_id: String,
    pub message: String,
}

/// Create the upload router
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_pdf))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /api/upload
///
/// Extract the text of the uploaded PDF and store it under its identifier.
async fn upload_pdf(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if !is_pdf_file_name(&file_name) {
            return Err(AppError::InvalidFileType(file_name));
        }

        let data = field.bytes().await?;
        tracing::debug!(file_name = %file_name, bytes = data.len(), "Received upload");

        let doc = state.library().ingest_bytes(&data).await?;

        tracing::info!(
            pdf_id = %doc.id,
            file_name = %file_name,
            chars = doc.chars,
            replaced = doc.replaced,
            "PDF stored"
        );

        return Ok(Json(UploadResponse {
            pdf_id: doc.id,
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        }));
    }

    Err(AppError::MissingFile)
}

/// Only the extension is checked; content is left to the extractor.
fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_file_name() {
        assert!(is_pdf_file_name("paper.pdf"));
        assert!(is_pdf_file_name("archive.tar.pdf"));
        assert!(!is_pdf_file_name("notes.txt"));
        assert!(!is_pdf_file_name("paper.pdf.txt"));
        assert!(!is_pdf_file_name("SCAN.PDF"));
        assert!(!is_pdf_file_name(""));
    }
}
