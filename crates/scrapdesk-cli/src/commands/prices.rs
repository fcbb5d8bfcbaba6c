//! Prices command - extract material prices from a price sheet.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use scrapdesk_core::{MaterialCatalog, PdfTextSource, PriceEntry, PriceSheetParser};

/// Arguments for the prices command.
#[derive(Args)]
pub struct PricesArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Minimum similarity for fuzzy material matching
    #[arg(long)]
    threshold: Option<f64>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Cell/price/material listing
    Text,
}

pub fn run(args: PricesArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Processing price sheet: {}", args.input.display());

    let text = if extension == "pdf" {
        let data = fs::read(&args.input)?;
        let source = PdfTextSource::load(&data)?;
        debug!("PDF has {} pages", source.page_count());
        source.extract_text()?
    } else {
        fs::read_to_string(&args.input)?
    };

    if text.trim().is_empty() {
        anyhow::bail!("No text could be read from the input");
    }

    let mut parser = PriceSheetParser::new();
    if let Some(threshold) = args.threshold {
        parser = parser.with_threshold(threshold);
    }

    let entries = parser.extract(&text, MaterialCatalog::builtin());

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries)?,
        OutputFormat::Text => format_text(&entries),
    };

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

    eprintln!(
        "{} {} material price(s) extracted",
        style("ℹ").blue(),
        entries.len()
    );

    Ok(())
}

fn format_text(entries: &[PriceEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:<4} {:>10}  {}\n",
            entry.cell, entry.price, entry.material
        ));
    }
    output
}
