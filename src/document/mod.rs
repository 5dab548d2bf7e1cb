//! Document handling
//!
//! Everything between an uploaded PDF and the text questions are asked
//! against.
//!
//! ```text
//!   upload bytes ──► temp file ──► TextExtractor ──► document_id(text)
//!                                                        │
//!                                                        ▼
//!                                                  DocumentStore
//! ```

mod error;
mod extractor;
mod fingerprint;
mod library;
mod store;

pub use error::{ExtractError, ExtractResult};
pub use extractor::{join_page_texts, PdfTextExtractor, TextExtractor};
pub use fingerprint::{document_id, ID_LENGTH};
pub use library::{DocumentLibrary, IngestedDocument};
pub use store::DocumentStore;
