//! Result rendering
//!
//! Three renderings of a mode's result table:
//! - default: rows dumped to stdout, fields space-joined
//! - `pretty`: fixed-width aligned table on stdout
//! - `file`: CSV written to the results directory, name derived from the
//!   mode and a run timestamp

mod file;
mod table;

pub use file::write_results_file;
pub use table::render_table;

use crate::modes::{Mode, ResultRow};
use clap::ValueEnum;
use std::path::Path;

/// Additional rendering selected with `-o`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table on stdout
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Renders a mode's result table according to the selected format
pub fn emit(
    results: &[ResultRow],
    mode: Mode,
    format: Option<OutputFormat>,
    results_dir: &Path,
) -> crate::Result<()> {
    match format {
        None => {
            for row in results {
                println!("{}", row.join(" "));
            }
        }
        Some(OutputFormat::Pretty) => print!("{}", render_table(results)),
        Some(OutputFormat::File) => {
            let path = write_results_file(results, mode, results_dir)?;
            tracing::info!("results saved: {}", path.display());
        }
    }
    Ok(())
}
