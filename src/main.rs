//! asort: alphabetise a README's table of contents and examples.
#![allow(clippy::multiple_crate_versions)]

use asort::config::Config;
use asort::document::Document;
use asort::error::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "asort")]
#[command(about = "Alphabetise the table of contents and examples of a README", long_about = None)]
struct Args {
    /// README to sort (defaults to the configured path, then readme.md)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Compute the result without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Print the sorted document to stdout instead of rewriting the file
    #[arg(long)]
    stdout: bool,

    /// Print a JSON summary of what was reordered and dropped
    #[arg(long)]
    report: bool,

    /// Log each stage to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(io::stderr)
            .with_target(true)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("warning: could not install log subscriber");
        }
    }

    // Command line path wins over config
    let path = match args.path {
        Some(path) => path,
        None => Config::load()?.target(),
    };

    let report = if args.stdout {
        let doc = Document::load(&path)?;
        let (sorted, mut report) = asort::sort_document(&doc)?;
        report.path = Some(path.display().to_string());
        sorted.write_to(io::stdout().lock())?;
        report
    } else {
        asort::sort_file(&path, args.dry_run)?
    };

    if args.report {
        let json = report.to_json().map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}
