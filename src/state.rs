//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::document::{DocumentLibrary, DocumentStore, PdfTextExtractor, TextExtractor};
use crate::model::{ModelRunner, OllamaRunner};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    library: DocumentLibrary,
    model: Arc<dyn ModelRunner>,
}

impl AppState {
    /// Create application state with the MuPDF extractor and the configured
    /// model executable
    pub fn new(config: Config) -> Self {
        let model = Arc::new(OllamaRunner::from_config(&config.model));
        Self::with_components(config, Arc::new(PdfTextExtractor::new()), model)
    }

    /// Create application state from explicit components
    pub fn with_components(
        config: Config,
        extractor: Arc<dyn TextExtractor>,
        model: Arc<dyn ModelRunner>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                library: DocumentLibrary::new(extractor, DocumentStore::new()),
                model,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the document library
    pub fn library(&self) -> &DocumentLibrary {
        &self.inner.library
    }

    /// Get the model runner
    pub fn model(&self) -> &Arc<dyn ModelRunner> {
        &self.inner.model
    }
}
