//! Mode handlers: one extraction routine per CLI mode
//!
//! Each handler is async orchestration over synchronous parse functions,
//! so parsing is unit-testable without a server. Handlers produce a table
//! of rows (header first), except `download`, whose result is a file on
//! disk.

mod download;
mod latest_versions;
mod pep;
mod whats_new;

pub use pep::StatusMismatch;

use crate::{Config, Fetcher, Result};
use clap::ValueEnum;

/// One row of a mode's tabular result; the first row is always the header
pub type ResultRow = Vec<String>;

/// The four top-level extraction tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Release-note summaries from the whatsnew index
    WhatsNew,
    /// Version and status of every documented release
    LatestVersions,
    /// Download the PDF documentation archive
    Download,
    /// PEP status tally and table/page status cross-check
    Pep,
}

impl Mode {
    /// Kebab-case name, as used on the command line and in result file names
    pub fn name(self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one mode to completion, returning its result table
///
/// `download` produces no rows; its result is the saved archive. A failure
/// of the mode's top-level page aborts the mode with no partial output;
/// per-item failures inside a mode are logged and skipped by the handlers
/// themselves.
pub async fn run_mode(mode: Mode, fetcher: &Fetcher, config: &Config) -> Result<Option<Vec<ResultRow>>> {
    match mode {
        Mode::WhatsNew => whats_new::run(fetcher, config).await.map(Some),
        Mode::LatestVersions => latest_versions::run(fetcher, config).await.map(Some),
        Mode::Download => download::run(fetcher, config).await.map(|_| None),
        Mode::Pep => pep::run(fetcher, config).await.map(Some),
    }
}
