//! PDF processing module.

mod extractor;

pub use extractor::PdfTextExtractor;

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Capability to turn a document on disk into plain text.
///
/// The batch pipeline only ever sees text through this trait, so tests can
/// substitute synthetic receipt text for real documents.
pub trait TextExtractable {
    /// Extract the full text of the document, all pages newline-joined.
    fn extract_text(&self, path: &Path) -> Result<String>;
}
