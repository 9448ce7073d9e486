//! Summary workbook writer using rust_xlsxwriter.

use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Url, Workbook};
use tracing::debug;

use super::{ReportRow, Result, TabularReportWriter, COLUMNS};

// Column widths are sized to the longest cell content plus padding,
// capped at a maximum.
const COLUMN_WIDTH_PADDING: usize = 3;
const MAX_COLUMN_WIDTH: usize = 60;

/// Rendered width of a date cell under the dd-mm-yyyy format.
const DATE_CELL_WIDTH: usize = 10;

/// Writes the summary workbook: one row per processed document, File Name
/// cells hyperlinked to the renamed copies.
pub struct XlsxReportWriter {
    path: PathBuf,
}

impl XlsxReportWriter {
    /// Create a writer targeting the given workbook path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TabularReportWriter for XlsxReportWriter {
    fn write(&mut self, rows: &[ReportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format("dd-mm-yyyy");
        let fare_format = Format::new().set_num_format("0.00");

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *header, &header_format)?;
        }

        let mut widths: Vec<usize> = COLUMNS.iter().map(|h| h.len()).collect();

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;

            let url = Url::new(file_url(&row.link_target)).set_text(&row.file_name);
            worksheet.write_url(r, 0, url)?;

            if let Some(date) = row.date {
                worksheet.write_datetime_with_format(r, 1, date, &date_format)?;
            }

            worksheet.write_string(r, 2, &row.pickup)?;
            worksheet.write_string(r, 3, &row.dropoff)?;
            worksheet.write_string(r, 4, &row.plate)?;
            worksheet.write_number_with_format(
                r,
                5,
                row.fare.to_f64().unwrap_or(0.0),
                &fare_format,
            )?;

            let cells = [
                row.file_name.chars().count(),
                if row.date.is_some() { DATE_CELL_WIDTH } else { 0 },
                row.pickup.chars().count(),
                row.dropoff.chars().count(),
                row.plate.chars().count(),
                format!("{:.2}", row.fare).len(),
            ];
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell);
            }
        }

        for (col, width) in widths.iter().enumerate() {
            let width = (width + COLUMN_WIDTH_PADDING).min(MAX_COLUMN_WIDTH);
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        workbook.save(&self.path)?;
        debug!("Wrote {} report rows to {}", rows.len(), self.path.display());

        Ok(())
    }
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
