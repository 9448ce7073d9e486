//! Error types for the faresheet-core library.

use thiserror::Error;

/// Main error type for the faresheet library.
#[derive(Error, Debug)]
pub enum FaresheetError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Report writing error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to summary report writing.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Workbook construction or save failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the faresheet library.
pub type Result<T> = std::result::Result<T, FaresheetError>;
