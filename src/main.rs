//! docgrade: score a markdown project knowledge file and print the analysis as JSON.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use docgrade::{config, input, DocumentAnalyzer, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "docgrade")]
#[command(about = "Quality scoring and recommendations for markdown project knowledge files", long_about = None)]
struct Args {
    /// Markdown document to analyse
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Load settings from this TOML file instead of ./docgrade.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print scores and recommendations only
    #[arg(long)]
    summary: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Also write the JSON next to the document as <stem>.analysis.json
    #[arg(long)]
    save: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let cfg = config::Config::load(args.config.as_deref())?;
    let analyzer = DocumentAnalyzer::new()?.with_thresholds(cfg.thresholds(), cfg.weights());
    let result = analyzer.analyze_file(&args.path)?;

    let json = match (args.summary, args.compact) {
        (true, true) => serde_json::to_string(&result.summary())?,
        (true, false) => serde_json::to_string_pretty(&result.summary())?,
        (false, true) => serde_json::to_string(&result)?,
        (false, false) => serde_json::to_string_pretty(&result)?,
    };
    println!("{json}");

    if args.save {
        let destination = input::result_path(&args.path);
        input::write_result(&destination, &json)?;
        info!(path = %destination.display(), "saved analysis");
    }

    Ok(())
}
