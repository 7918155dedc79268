mod error;
mod io;
mod splits;
mod types;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Creates a readable version of swimming training partials in Garmin's CSV",
    long_about = None
)]
struct Args {
    /// The input file in CSV format
    input_file: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let reader = io::CsvFileReader::new(&args.input_file)
        .with_context(|| format!("Could not open {}", args.input_file.display()))?;

    let mut splits = splits::SplitCollection::default();

    // Whatever was read before a bad row is still worth printing
    if let Err(err) = splits.read(reader) {
        eprintln!("{}", err);
    }

    splits
        .write(std::io::stdout().lock())
        .context("Could not write the report")?;

    Ok(())
}
