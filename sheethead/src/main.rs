use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use sheethead_core::{CalamineSource, HeaderReporter, ReportLine, ReporterConfig};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Reads `template.xlsx` and `tinting_template.xlsx` from the working directory
/// (or the paths set in `sheethead.toml`) and prints their header rows.
#[derive(Parser)]
#[command(name = "sheethead")]
#[command(about = "Print the header rows of the extraction and tinting templates", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    init_logging();

    // The report takes no input: stray arguments are noted on stderr and ignored
    if let Err(err) = Cli::try_parse() {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return;
            }
            _ => tracing::warn!("Ignoring command-line arguments: {:?}", err.kind()),
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Failures are reported on stdout; the exit code stays 0
    if let Err(err) = run(&mut out) {
        tracing::warn!("Report aborted: {:#}", err);
        let _ = writeln!(out, "{}", ReportLine::error(&err));
    }
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    let config = ReporterConfig::load_from_dir(".")?;
    let mut reporter = HeaderReporter::new(CalamineSource, &config);
    reporter.run(out)?;
    Ok(())
}

/// Diagnostics go to stderr so stdout only carries report lines
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
