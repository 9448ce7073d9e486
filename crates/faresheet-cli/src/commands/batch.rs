//! Batch command - process a folder of receipt PDFs.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use faresheet_core::{
    BatchConfig, BatchFailure, BatchRunner, PdfTextExtractor, ProcessedReceipt, ReportRow,
    TabularReportWriter, XlsxReportWriter,
};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing the receipt PDFs
    #[arg(required = true)]
    input_dir: PathBuf,

    /// Output directory (default: <input_dir>/Refined)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = BatchConfig::for_input_dir(&args.input_dir);
    if let Some(output_dir) = args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    let report_path = config.report_path();
    let output_dir = config.output_dir.clone();

    let extractor = PdfTextExtractor::new();
    let mut runner = BatchRunner::new(config, &extractor)?;

    let files = runner.discover()?;
    println!(
        "{} Found {} receipt documents to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut receipts: Vec<ProcessedReceipt> = Vec::with_capacity(files.len());
    let mut failures: Vec<BatchFailure> = Vec::new();

    for path in files {
        match runner.process(&path) {
            Ok(receipt) => {
                for warning in &receipt.warnings {
                    warn!("{}: {}", path.display(), warning);
                }
                receipts.push(receipt);
            }
            Err(e) => {
                pb.suspend(|| {
                    eprintln!(
                        "{} {}: {}",
                        style("✗").red(),
                        path.display(),
                        e
                    );
                });
                failures.push(BatchFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let rows: Vec<ReportRow> = receipts.iter().map(ReportRow::from).collect();
    XlsxReportWriter::new(&report_path).write(&rows)?;

    println!();
    println!(
        "{} Processed {} documents in {:?}",
        style("✓").green(),
        receipts.len() + failures.len(),
        start.elapsed()
    );
    println!(
        "   {} copied, {} failed",
        style(receipts.len()).green(),
        style(failures.len()).red()
    );
    println!(
        "{} Summary written to {}",
        style("✓").green(),
        report_path.display()
    );
    println!(
        "{} Refined copies in {}",
        style("✓").green(),
        output_dir.display()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed documents:").red());
        for failure in &failures {
            println!("  - {}: {}", failure.path.display(), failure.reason);
        }
    }

    Ok(())
}
