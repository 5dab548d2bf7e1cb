//! PDF text extraction
//!
//! Opens a PDF with MuPDF, extracts the plain text of every page in order,
//! drops pages that yield nothing and joins the rest with newlines.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mupdf::Document;

use super::error::{ExtractError, ExtractResult};

/// Turns a document on disk into plain text
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the document at `path`
    async fn extract(&self, path: &Path) -> ExtractResult<String>;
}

/// MuPDF-backed extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous extraction; MuPDF work is CPU-bound and must not run on
    /// the async executor.
    pub fn extract_blocking(path: &Path) -> ExtractResult<String> {
        let path_str = path.to_string_lossy();
        let doc = Document::open(&*path_str)?;
        let page_count = doc.page_count()?;

        let mut pages = Vec::with_capacity(page_count.max(0) as usize);
        for index in 0..page_count {
            let page = doc.load_page(index)?;
            pages.push(page.to_text()?);
        }

        let text = join_page_texts(pages);

        tracing::debug!(
            path = %path.display(),
            pages = page_count,
            chars = text.len(),
            "Extracted PDF text"
        );

        Ok(text)
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        let path: PathBuf = path.to_path_buf();

        tokio::task::spawn_blocking(move || Self::extract_blocking(&path))
            .await
            .map_err(|e| ExtractError::Task(format!("Task join error: {}", e)))?
    }
}

/// Join per-page text in page order, one newline between pages.
///
/// MuPDF terminates every line and block with a newline; those trailing
/// terminators are stripped so a page contributes exactly its text, and a
/// page left empty afterwards contributes nothing at all.
pub fn join_page_texts<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();

    for page in pages {
        let text = page.as_ref().trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(text);
    }

    out
}
