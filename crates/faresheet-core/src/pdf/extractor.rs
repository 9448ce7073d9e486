//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{Result, TextExtractable};
use crate::error::PdfError;

/// PDF text extractor backed by lopdf and pdf-extract.
///
/// lopdf loads the document to catch structural problems up front
/// (encryption, empty documents); pdf-extract then produces the page text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF text extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from in-memory PDF bytes.
    pub fn extract_from_bytes(&self, data: &[u8]) -> Result<String> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document so pdf-extract sees plain content
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        debug!("Loaded PDF with {} pages", page_count);

        let text = pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        Ok(text)
    }
}

impl TextExtractable for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data =
            fs::read(path).map_err(|e| PdfError::Parse(format!("{}: {}", path.display(), e)))?;
        self.extract_from_bytes(&data)
    }
}
