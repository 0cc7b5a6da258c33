//! CSV results file for `--output file`

use crate::modes::{Mode, ResultRow};
use chrono::Local;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes the result table to `{results_dir}/{mode}_{timestamp}.csv`
///
/// Returns the path of the written file.
pub fn write_results_file(
    rows: &[ResultRow],
    mode: Mode,
    results_dir: &Path,
) -> crate::Result<PathBuf> {
    std::fs::create_dir_all(results_dir)?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    let path = results_dir.join(format!("{}_{}.csv", mode, timestamp));

    let mut content = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|cell| escape_csv(cell))
            .collect::<Vec<_>>()
            .join(",");
        content.push_str(&line);
        content.push('\n');
    }

    std::fs::write(&path, content)?;
    Ok(path)
}

/// Quotes a field when it contains the delimiter, quotes or line breaks
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
