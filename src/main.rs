use clap::Parser;
use launchday_processor::cli::{run, Cli};
use launchday_processor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
