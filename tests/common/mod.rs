//! Shared test fixtures
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use pdfqa_server::document::{ExtractResult, TextExtractor};
use pdfqa_server::model::{ModelError, ModelRunner};
use pdfqa_server::{routes, AppState, Config};

/// Build a minimal PDF with one page per entry; `None` produces a page with
/// an empty content stream (no extractable text).
pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            (0..pages.len())
                .map(|i| format!("{} 0 R", 4 + 2 * i))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    for (i, text) in pages.iter().enumerate() {
        let content = match text {
            Some(text) => format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", text),
            None => String::new(),
        };
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

/// Treats the uploaded file as UTF-8 text, so tests control the extracted text
/// directly through the upload body.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Records every prompt and answers with a fixed string
pub struct RecordingRunner {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingRunner {
    pub fn new(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelRunner for RecordingRunner {
    fn model_name(&self) -> &str {
        "recording-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

pub fn test_server(extractor: Arc<dyn TextExtractor>, model: Arc<dyn ModelRunner>) -> TestServer {
    let state = AppState::with_components(Config::default(), extractor, model);
    let app = routes::app(state).unwrap();
    TestServer::new(app).unwrap()
}
