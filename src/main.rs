//! Docprobe main entry point
//!
//! This is the command-line interface for the docprobe documentation
//! scraper.

use clap::Parser;
use docprobe::config::load_config;
use docprobe::fetch::{build_http_client, Fetcher, ResponseCache};
use docprobe::modes::{run_mode, Mode};
use docprobe::output::{emit, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Docprobe: batch scraper for the Python documentation site
///
/// Extracts release-note summaries, the version/status listing and PEP
/// status counts, and downloads the PDF documentation archive. One mode
/// runs per invocation.
#[derive(Parser, Debug)]
#[command(name = "docprobe")]
#[command(version)]
#[command(about = "Scrape the Python documentation site", long_about = None)]
struct Cli {
    /// Extraction task to run
    #[arg(value_enum, value_name = "MODE")]
    mode: Mode,

    /// Clear the HTTP response cache before running
    #[arg(short, long)]
    clear_cache: bool,

    /// Additional output rendering (plain stdout dump when absent)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Path to TOML configuration file (compiled-in defaults when absent)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("docprobe started");
    tracing::info!("command line arguments: {:?}", cli);

    tokio::select! {
        result = run(&cli) => match result {
            Ok(()) => {
                tracing::info!("docprobe finished");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("mode '{}' failed: {:#}", cli.mode, e);
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("stopped by user");
            ExitCode::SUCCESS
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let client = build_http_client(&config.network)?;
    let cache = ResponseCache::open(&config.dirs.cache)?;
    let fetcher = Fetcher::new(client, cache);

    if cli.clear_cache {
        fetcher.clear_cache()?;
        tracing::info!("response cache cleared");
    }

    let results = run_mode(cli.mode, &fetcher, &config).await?;
    if let Some(results) = results {
        emit(&results, cli.mode, cli.output, &config.dirs.results)?;
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
///
/// Logs go to stderr so result rows on stdout stay machine-readable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docprobe=info,warn"),
            1 => EnvFilter::new("docprobe=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
