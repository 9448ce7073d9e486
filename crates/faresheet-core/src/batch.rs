//! Batch pipeline: enumerate receipt documents, extract, copy under
//! derived names, and collect records for the summary report.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FaresheetError, Result};
use crate::models::config::BatchConfig;
use crate::models::ride::RideRecord;
use crate::pdf::TextExtractable;
use crate::receipt::{ReceiptParser, RideReceiptParser};

/// One successfully processed receipt document.
#[derive(Debug, Clone)]
pub struct ProcessedReceipt {
    /// Original document path.
    pub source: PathBuf,
    /// Path of the renamed copy in the output directory.
    pub destination: PathBuf,
    /// Extracted ride data.
    pub record: RideRecord,
    /// Per-field extraction warnings.
    pub warnings: Vec<String>,
}

impl ProcessedReceipt {
    /// File name of the renamed copy.
    pub fn file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// One document that could not be processed.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    /// Document path.
    pub path: PathBuf,
    /// Failure cause.
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Receipts processed and copied, in input order.
    pub receipts: Vec<ProcessedReceipt>,
    /// Documents skipped because processing raised.
    pub failures: Vec<BatchFailure>,
}

/// Sequential batch runner over one input directory.
///
/// Documents are processed one at a time; the only state shared across
/// documents is the set of destination names written this run.
pub struct BatchRunner<'a> {
    config: BatchConfig,
    extractor: &'a dyn TextExtractable,
    parser: RideReceiptParser,
    written: HashSet<String>,
}

impl<'a> BatchRunner<'a> {
    /// Create a runner, validating the input directory and creating the
    /// output directory.
    ///
    /// An absent or non-directory input path is the only unrecoverable
    /// condition of a batch run.
    pub fn new(config: BatchConfig, extractor: &'a dyn TextExtractable) -> Result<Self> {
        if !config.input_dir.is_dir() {
            return Err(FaresheetError::Config(format!(
                "input directory not usable: {}",
                config.input_dir.display()
            )));
        }
        fs::create_dir_all(&config.output_dir)?;

        Ok(Self {
            config,
            extractor,
            parser: RideReceiptParser::new(),
            written: HashSet::new(),
        })
    }

    /// The runner's configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Enumerate the receipt documents of the input directory, in
    /// directory-listing order.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.config.input_dir)? {
            let path = entry?.path();
            if path.is_file() && has_pdf_extension(&path) {
                files.push(path);
            }
        }

        debug!("Found {} receipt documents", files.len());
        Ok(files)
    }

    /// Process one document: extract text, parse the record, and copy the
    /// source bytes to a collision-free destination name.
    pub fn process(&mut self, path: &Path) -> Result<ProcessedReceipt> {
        let text = self.extractor.extract_text(path)?;
        let extraction = self.parser.parse(&text);

        let destination = self.reserve_destination(&extraction.record, path);
        fs::copy(path, &destination)?;
        debug!("Copied {} -> {}", path.display(), destination.display());

        Ok(ProcessedReceipt {
            source: path.to_path_buf(),
            destination,
            record: extraction.record,
            warnings: extraction.warnings,
        })
    }

    /// Run the whole batch. A failing document is logged and recorded, and
    /// never aborts the run.
    pub fn run(&mut self) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for path in self.discover()? {
            match self.process(&path) {
                Ok(receipt) => summary.receipts.push(receipt),
                Err(e) => {
                    warn!("Failed to process {}: {}", path.display(), e);
                    summary.failures.push(BatchFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Derive a destination path from the record, appending `_1`, `_2`, …
    /// until the name collides with neither this run's copies nor files
    /// already on disk, so reruns never overwrite a prior run's output.
    fn reserve_destination(&mut self, record: &RideRecord, source: &Path) -> PathBuf {
        let stem = record.file_stem();
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("pdf")
            .to_lowercase();

        let mut name = format!("{}.{}", stem, ext);
        let mut counter = 1u32;
        while self.written.contains(&name) || self.config.output_dir.join(&name).exists() {
            name = format!("{}_{}.{}", stem, counter, ext);
            counter += 1;
        }

        self.written.insert(name.clone());
        self.config.output_dir.join(name)
    }
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
