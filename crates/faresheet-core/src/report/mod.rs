//! Tabular summary report of a batch run.

mod xlsx;

pub use xlsx::XlsxReportWriter;

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::batch::ProcessedReceipt;
use crate::error::ReportError;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Column headers, in report order.
pub const COLUMNS: [&str; 6] = [
    "File Name",
    "Date",
    "Start Location",
    "Drop Location",
    "CAB License Plate",
    "Fare Amount",
];

/// One report row per processed document.
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// Name of the renamed copy; rendered as a hyperlink.
    pub file_name: String,
    /// Ride date; a missing date leaves the cell empty.
    pub date: Option<NaiveDate>,
    /// Start location.
    pub pickup: String,
    /// Drop location.
    pub dropoff: String,
    /// Vehicle license plate.
    pub plate: String,
    /// Fare amount.
    pub fare: Decimal,
    /// Absolute path of the copy. Not a visible column; it only drives the
    /// File Name hyperlink.
    pub link_target: PathBuf,
}

impl From<&ProcessedReceipt> for ReportRow {
    fn from(receipt: &ProcessedReceipt) -> Self {
        let link_target = fs::canonicalize(&receipt.destination)
            .unwrap_or_else(|_| receipt.destination.clone());

        Self {
            file_name: receipt.file_name(),
            date: receipt.record.date,
            pickup: receipt.record.pickup.clone(),
            dropoff: receipt.record.dropoff.clone(),
            plate: receipt.record.plate.clone(),
            fare: receipt.record.fare,
            link_target,
        }
    }
}

/// Trait for summary report writers.
pub trait TabularReportWriter {
    /// Write one row per processed document, in order.
    fn write(&mut self, rows: &[ReportRow]) -> Result<()>;
}
