//! Configuration for the batch pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the output directory created under the input directory when no
/// explicit output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "Refined";

/// File name of the summary workbook written into the output directory.
pub const REPORT_FILE_NAME: &str = "ride_summary.xlsx";

/// Explicit configuration for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory containing the receipt documents.
    pub input_dir: PathBuf,

    /// Directory receiving the renamed copies and the summary workbook.
    pub output_dir: PathBuf,
}

impl BatchConfig {
    /// Configuration for an input directory, with the output directory
    /// defaulting to `<input_dir>/Refined`.
    pub fn for_input_dir(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        let output_dir = input_dir.join(DEFAULT_OUTPUT_DIR);
        Self {
            input_dir,
            output_dir,
        }
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Path of the summary workbook for this run.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}
