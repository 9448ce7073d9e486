//! End-to-end batch pipeline tests on synthetic receipt text.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use faresheet_core::error::PdfError;
use faresheet_core::pdf;
use faresheet_core::report::{ReportRow, TabularReportWriter};
use faresheet_core::{BatchConfig, BatchRunner, TextExtractable, XlsxReportWriter};

/// Serves canned receipt text by file name, standing in for real PDF
/// extraction. Unknown files fail like an unreadable document would.
struct FixtureExtractor {
    texts: HashMap<String, String>,
}

impl FixtureExtractor {
    fn new(fixtures: &[(&str, &str)]) -> Self {
        let texts = fixtures
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect();
        Self { texts }
    }
}

impl TextExtractable for FixtureExtractor {
    fn extract_text(&self, path: &Path) -> pdf::Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.texts
            .get(&name)
            .cloned()
            .ok_or_else(|| PdfError::TextExtraction(format!("no text in {}", name)))
    }
}

const PIPE_RECEIPT: &str = "\
Ride Receipt
November 5, 2024
Total ₹1,245.50
6:26 pm | 12 MG Road, Bengaluru
6:58 pm | Tech Park Gate 3, Whitefield
CAB: KA 05 MM 1234
";

const ANCHORED_RECEIPT: &str = "\
Ride Receipt
Mar 7, 2023
Total ₹88.00
License Plate DL 01 AB 5678
10:00 am
123 Main St
10:30 pm
456 Oak Rd
You rode with Driver
";

const UNDATED_RECEIPT: &str = "\
Ride Receipt
Total ₹42.00
6:00 pm | A Street
6:20 pm | B Street
";

fn seed_input_dir(dir: &Path, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        fs::write(dir.join(name), format!("%PDF-fixture-{}", i)).unwrap();
    }
}

fn dest_names(receipts: &[faresheet_core::ProcessedReceipt]) -> Vec<String> {
    receipts.iter().map(|r| r.file_name()).collect()
}

#[test]
fn test_batch_processes_three_documents() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf", "b.pdf", "c.pdf"]);

    let extractor = FixtureExtractor::new(&[
        ("a.pdf", PIPE_RECEIPT),
        ("b.pdf", ANCHORED_RECEIPT),
        ("c.pdf", UNDATED_RECEIPT),
    ]);

    let config = BatchConfig::for_input_dir(dir.path());
    let mut runner = BatchRunner::new(config, &extractor).unwrap();
    let summary = runner.run().unwrap();

    assert_eq!(summary.receipts.len(), 3);
    assert!(summary.failures.is_empty());

    let names = dest_names(&summary.receipts);
    assert!(names.contains(&"20241105_1245.50.pdf".to_string()));
    assert!(names.contains(&"20230307_88.00.pdf".to_string()));
    assert!(names.contains(&"UnknownDate_42.00.pdf".to_string()));

    // Copies carry the source bytes unmodified
    for receipt in &summary.receipts {
        assert!(receipt.destination.exists());
        assert_eq!(
            fs::read(&receipt.source).unwrap(),
            fs::read(&receipt.destination).unwrap()
        );
    }

    let undated = summary
        .receipts
        .iter()
        .find(|r| r.file_name().starts_with("UnknownDate"))
        .unwrap();
    assert!(undated.record.date.is_none());
    assert_eq!(undated.record.pickup, "A Street");
}

#[test]
fn test_rerun_never_overwrites_prior_copies() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf"]);

    let extractor = FixtureExtractor::new(&[("a.pdf", PIPE_RECEIPT)]);

    let config = BatchConfig::for_input_dir(dir.path());
    let first = BatchRunner::new(config.clone(), &extractor)
        .unwrap()
        .run()
        .unwrap();
    let first_dest = first.receipts[0].destination.clone();
    let first_bytes = fs::read(&first_dest).unwrap();

    let second = BatchRunner::new(config, &extractor)
        .unwrap()
        .run()
        .unwrap();
    let second_dest = second.receipts[0].destination.clone();

    assert_ne!(first_dest, second_dest);
    assert_eq!(second_dest.file_name().unwrap(), "20241105_1245.50_1.pdf");
    // Prior run's copy is untouched
    assert_eq!(fs::read(&first_dest).unwrap(), first_bytes);
}

#[test]
fn test_same_run_collisions_are_suffixed() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf", "b.pdf"]);

    // Two documents deriving the identical destination name
    let extractor = FixtureExtractor::new(&[("a.pdf", PIPE_RECEIPT), ("b.pdf", PIPE_RECEIPT)]);

    let config = BatchConfig::for_input_dir(dir.path());
    let summary = BatchRunner::new(config, &extractor)
        .unwrap()
        .run()
        .unwrap();

    let mut names = dest_names(&summary.receipts);
    names.sort();
    assert_eq!(names, vec!["20241105_1245.50.pdf", "20241105_1245.50_1.pdf"]);
}

#[test]
fn test_failing_document_does_not_abort_batch() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf", "broken.pdf"]);

    // No fixture text for broken.pdf: extraction raises
    let extractor = FixtureExtractor::new(&[("a.pdf", PIPE_RECEIPT)]);

    let config = BatchConfig::for_input_dir(dir.path());
    let summary = BatchRunner::new(config, &extractor)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.receipts.len(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(
        summary.failures[0].path.file_name().unwrap(),
        "broken.pdf"
    );
    assert!(summary.failures[0].reason.contains("broken.pdf"));
}

#[test]
fn test_non_pdf_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf"]);
    fs::write(dir.path().join("notes.txt"), "not a receipt").unwrap();

    let extractor = FixtureExtractor::new(&[("a.pdf", PIPE_RECEIPT)]);

    let config = BatchConfig::for_input_dir(dir.path());
    let mut runner = BatchRunner::new(config, &extractor).unwrap();
    let files = runner.discover().unwrap();

    assert_eq!(files.len(), 1);

    let summary = runner.run().unwrap();
    assert_eq!(summary.receipts.len(), 1);
    assert!(summary.failures.is_empty());
}

#[test]
fn test_report_written_from_batch_summary() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf", "c.pdf"]);

    let extractor = FixtureExtractor::new(&[
        ("a.pdf", PIPE_RECEIPT),
        ("c.pdf", UNDATED_RECEIPT),
    ]);

    let config = BatchConfig::for_input_dir(dir.path());
    let report_path = config.report_path();
    let mut runner = BatchRunner::new(config, &extractor).unwrap();
    let summary = runner.run().unwrap();

    let rows: Vec<ReportRow> = summary.receipts.iter().map(ReportRow::from).collect();
    XlsxReportWriter::new(&report_path).write(&rows).unwrap();

    assert!(report_path.exists());
    assert!(fs::metadata(&report_path).unwrap().len() > 0);

    // The hidden link target is absolute and points at the copy
    for row in &rows {
        assert!(row.link_target.is_absolute());
        assert!(row.link_target.exists());
    }
}

#[test]
fn test_recording_writer_sees_rows_in_order() {
    #[derive(Default)]
    struct RecordingWriter {
        rows: Vec<ReportRow>,
    }
    impl TabularReportWriter for RecordingWriter {
        fn write(&mut self, rows: &[ReportRow]) -> faresheet_core::report::Result<()> {
            self.rows.extend(rows.iter().cloned());
            Ok(())
        }
    }

    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf"]);

    let extractor = FixtureExtractor::new(&[("a.pdf", ANCHORED_RECEIPT)]);
    let config = BatchConfig::for_input_dir(dir.path());
    let summary = BatchRunner::new(config, &extractor)
        .unwrap()
        .run()
        .unwrap();

    let rows: Vec<ReportRow> = summary.receipts.iter().map(ReportRow::from).collect();
    let mut writer = RecordingWriter::default();
    writer.write(&rows).unwrap();

    assert_eq!(writer.rows.len(), 1);
    assert_eq!(writer.rows[0].plate, "DL01AB5678");
    assert_eq!(writer.rows[0].pickup, "123 Main St");
}

#[test]
fn test_discover_ignores_output_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    seed_input_dir(dir.path(), &["a.pdf"]);

    let extractor = FixtureExtractor::new(&[("a.pdf", PIPE_RECEIPT)]);
    let config = BatchConfig::for_input_dir(dir.path());

    // First run creates Refined/ under the input directory
    BatchRunner::new(config.clone(), &extractor)
        .unwrap()
        .run()
        .unwrap();

    // A rerun still only discovers the original document
    let runner = BatchRunner::new(config, &extractor).unwrap();
    let files: Vec<PathBuf> = runner.discover().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "a.pdf");
}
