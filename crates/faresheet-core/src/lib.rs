//! Core library for ride receipt processing.
//!
//! This crate provides:
//! - PDF text extraction for paginated receipt documents
//! - Ride receipt field extraction (date, fare, locations, license plate)
//! - Batch copy/rename with collision-safe destination names
//! - Tabular summary workbook writing

pub mod batch;
pub mod error;
pub mod models;
pub mod pdf;
pub mod receipt;
pub mod report;

pub use batch::{BatchFailure, BatchRunner, BatchSummary, ProcessedReceipt};
pub use error::{FaresheetError, Result};
pub use models::config::BatchConfig;
pub use models::ride::RideRecord;
pub use pdf::{PdfTextExtractor, TextExtractable};
pub use receipt::{ExtractionResult, ReceiptParser, RideReceiptParser};
pub use report::{ReportRow, TabularReportWriter, XlsxReportWriter};
