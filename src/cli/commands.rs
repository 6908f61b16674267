use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::Batch;
use crate::processors::{rank, summarize_batch, RecordValidator};
use crate::readers::{ForecastReader, ForecastTable};
use crate::utils::filename::generate_default_report_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{LaunchReport, ReportWriter};

pub async fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Process {
            input_file,
            output_file,
        } => {
            let output_file = output_file.unwrap_or_else(generate_default_report_filename);

            println!("Processing forecast: {}", input_file.display());
            println!("Output file: {}", output_file.display());

            let progress = ProgressReporter::new_spinner("Processing forecast...", false);

            let (table, batch) = load_batch(&input_file)?;
            let summary = summarize_batch(&batch)?;
            let ranking = rank(&batch);
            let report = LaunchReport::new(summary, ranking);

            progress.finish_with_message(&format!("Processed {} days", batch.len()));

            // Create output directory if it doesn't exist
            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            ReportWriter::new().write(&table, &report, &output_file)?;

            print_ranking(&report.ranking);
            println!("Report written to {}", output_file.display());
        }

        Commands::Validate { input_file } => {
            println!("Validating forecast: {}", input_file.display());

            let (_table, batch) = load_batch(&input_file)?;

            println!(
                "✅ All {} day columns passed validation checks",
                batch.len()
            );
        }

        Commands::Info { input_file, json } => {
            let (_table, batch) = load_batch(&input_file)?;
            let summary = summarize_batch(&batch)?;
            let ranking = rank(&batch);
            let report = LaunchReport::new(summary, ranking);

            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("Forecast: {} days\n", batch.len());
                println!("Metric         Average    Min    Max Median");
                for (name, s) in [
                    ("Temperature", report.summary.temperature),
                    ("Wind", report.summary.wind),
                    ("Humidity", report.summary.humidity),
                    ("Precipitation", report.summary.precipitation),
                ] {
                    println!(
                        "{:<14} {:>7} {:>6} {:>6} {:>6}",
                        name, s.mean, s.min, s.max, s.median
                    );
                }
                println!();
                print_ranking(&report.ranking);
            }
        }
    }

    Ok(())
}

/// Read and validate a forecast file. Any parse or range failure aborts
/// here, before any output is produced.
fn load_batch(input_file: &Path) -> Result<(ForecastTable, Batch)> {
    let table = ForecastReader::new().read(input_file)?;
    tracing::debug!(days = table.day_count(), "read forecast table");

    let batch = RecordValidator::new().validate_batch(&table)?;
    Ok((table, batch))
}

fn print_ranking(ranking: &[u32]) {
    if ranking.is_empty() {
        println!("No day meets the launch criteria");
    } else {
        let ids: Vec<String> = ranking.iter().map(|id| id.to_string()).collect();
        println!("Recommended launch days (best first): {}", ids.join(", "));
    }
}
