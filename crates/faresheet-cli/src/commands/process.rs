//! Process command - extract fields from a single receipt file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use faresheet_core::{
    ExtractionResult, PdfTextExtractor, ReceiptParser, RideReceiptParser, TextExtractable,
};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input receipt file (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let extractor = PdfTextExtractor::new();
    let text = extractor.extract_text(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from the PDF");
    }

    let parser = RideReceiptParser::new();
    let result = parser.parse(&text);

    if !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.record)?),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_text(result: &ExtractionResult) -> String {
    let record = &result.record;
    let mut output = String::new();

    output.push_str(&format!(
        "Date:       {}\n",
        record
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    ));
    output.push_str(&format!("Fare:       {:.2}\n", record.fare));
    output.push_str(&format!("Pickup:     {}\n", record.pickup));
    output.push_str(&format!("Drop:       {}\n", record.dropoff));
    output.push_str(&format!("Plate:      {}\n", record.plate));
    output.push_str(&format!("Derived as: {}\n", record.file_stem()));

    output
}
