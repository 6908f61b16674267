use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchday-processor")]
#[command(about = "Weather-based launch day processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a forecast file and write the launch report
    Process {
        #[arg(short, long, help = "Input forecast CSV file")]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output report file path [default: launch-report-{YYMMDD}.csv]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Validate forecast data without writing a report
    Validate {
        #[arg(short, long, help = "Input forecast CSV file")]
        input_file: PathBuf,
    },

    /// Print summary statistics and the launch ranking for a forecast
    Info {
        #[arg(short, long, help = "Input forecast CSV file")]
        input_file: PathBuf,

        #[arg(long, default_value = "false", help = "Emit the report as JSON")]
        json: bool,
    },
}
