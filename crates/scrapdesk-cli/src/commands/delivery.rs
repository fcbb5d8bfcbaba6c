//! Delivery command - normalize a delivery-contract CSV export.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::info;

use scrapdesk_core::parse_delivery_csv;

/// Arguments for the delivery command.
#[derive(Args)]
pub struct DeliveryArgs {
    /// Input CSV file
    #[arg(required = true)]
    input: PathBuf,

    /// Recipient email for the generated bundles
    #[arg(short, long)]
    email: String,

    /// Processing date (ISO-8601, default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: DeliveryArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let csv_text = fs::read_to_string(&args.input)?;
    if csv_text.trim().is_empty() {
        anyhow::bail!("CSV file is empty");
    }

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    info!(
        "Processing delivery CSV {} for {}",
        args.input.display(),
        date
    );

    let batch = parse_delivery_csv(&csv_text, date, &args.email)?;

    if batch.rows.is_empty() {
        anyhow::bail!("No valid rows found in CSV");
    }

    let output = serde_json::to_string_pretty(&batch)?;

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
        "{} {} row(s): {} FOB, {} non-FOB",
        style("ℹ").blue(),
        batch.rows.len(),
        batch.fob_sequence_ids.len(),
        batch.non_fob_sequence_ids.len()
    );

    Ok(())
}
