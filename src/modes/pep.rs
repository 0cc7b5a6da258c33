//! `pep`: status tally and table/page status cross-check
//!
//! Walks the numerical index, reads each PEP's authoritative status from
//! its own page and checks it against the abbreviation shown in the index
//! table. Statuses are tallied per distinct page status; disagreements are
//! collected as [`StatusMismatch`] records and logged after the traversal,
//! never raised.

use crate::select::{all, element_text, optional, MissingElementError};
use crate::{Config, Fetcher, Result, ResultRow};
use scraper::{ElementRef, Html};
use std::collections::BTreeMap;
use url::Url;

const INDEX_ROWS: &str = "section#numerical-index tbody tr";

/// Accepted full status names per abbreviation code
///
/// The code is the first character of the status shown in the index table.
/// A code absent from this table accepts nothing, so every page status
/// under it is reported as a mismatch.
const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];

/// A PEP whose page status is not accepted for its table code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMismatch {
    pub url: String,
    pub page_status: String,
    pub table_status: String,
}

/// One usable row of the numerical index
struct IndexEntry {
    table_status: String,
    url: Url,
}

pub async fn run(fetcher: &Fetcher, config: &Config) -> Result<Vec<ResultRow>> {
    let index_url = Url::parse(&config.network.pep_index_url)?;
    let body = fetcher.fetch_text(&index_url).await?;
    let entries = index_entries(&body, &index_url)?;

    tracing::info!("processing {} PEP entries", entries.len());

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut mismatches = Vec::new();
    let mut errors = Vec::new();

    for entry in entries {
        let page_status = match fetch_page_status(fetcher, &entry.url).await {
            Ok(status) => status,
            Err(e) => {
                errors.push(format!("{}: {}", entry.url, e));
                continue;
            }
        };

        reconcile(&page_status, &entry.table_status, &entry.url, &mut mismatches);

        if !page_status.is_empty() {
            *counts.entry(page_status).or_insert(0) += 1;
        }
    }

    for error in &errors {
        tracing::debug!("skipped PEP: {}", error);
    }
    report_mismatches(&mismatches);

    Ok(tabulate(&counts))
}

/// Extracts (table status, detail URL) from every usable index row
///
/// Rows without the status cell and the link cell are skipped silently; a
/// missing abbreviation yields an empty table status. An index with no
/// rows at all aborts the mode.
fn index_entries(body: &str, index_url: &Url) -> Result<Vec<IndexEntry>> {
    let doc = Html::parse_document(body);
    let rows = all(doc.root_element(), INDEX_ROWS);
    if rows.is_empty() {
        return Err(MissingElementError::new("PEP index table", INDEX_ROWS).into());
    }

    let mut entries = Vec::new();
    for row in rows {
        let cells = all(row, "td");
        if cells.len() < 2 {
            continue;
        }

        let table_status = optional(cells[0], "abbr")
            .and_then(|abbr| abbr.value().attr("title"))
            .unwrap_or("")
            .to_string();

        let href = match optional(cells[1], "a").and_then(|a| a.value().attr("href")) {
            Some(href) => href,
            None => continue,
        };
        let url = match index_url.join(href) {
            Ok(url) => url,
            Err(_) => continue,
        };

        entries.push(IndexEntry { table_status, url });
    }

    Ok(entries)
}

async fn fetch_page_status(fetcher: &Fetcher, url: &Url) -> Result<String> {
    let body = fetcher.fetch_text(url).await?;
    Ok(parse_page_status(&body))
}

/// Reads the authoritative status from a PEP page
///
/// The status is the `dd` element following the first `dt` whose text
/// starts with `Status`. Absence is not an error: the empty string skips
/// both the tally and the reconciliation.
fn parse_page_status(body: &str) -> String {
    let doc = Html::parse_document(body);
    for dt in all(doc.root_element(), "dt") {
        if !element_text(dt).starts_with("Status") {
            continue;
        }
        return dt
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "dd")
            .map(element_text)
            .unwrap_or_default();
    }
    String::new()
}

/// Records a mismatch when `page_status` is not accepted for the code in
/// `table_status`
///
/// The comparison is strict membership in the accepted set. An empty
/// status on either side skips the comparison entirely.
fn reconcile(
    page_status: &str,
    table_status: &str,
    url: &Url,
    mismatches: &mut Vec<StatusMismatch>,
) {
    if page_status.is_empty() || table_status.is_empty() {
        return;
    }

    let code = table_status.get(..1).unwrap_or("");
    if !expected_for(code).contains(&page_status) {
        mismatches.push(StatusMismatch {
            url: url.to_string(),
            page_status: page_status.to_string(),
            table_status: table_status.to_string(),
        });
    }
}

fn expected_for(code: &str) -> &'static [&'static str] {
    EXPECTED_STATUS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, names)| *names)
        .unwrap_or(&[])
}

/// Renders the tally: sorted `(status, count)` rows and a Total footer
fn tabulate(counts: &BTreeMap<String, u64>) -> Vec<ResultRow> {
    let mut results = vec![vec!["Status".to_string(), "Count".to_string()]];
    let total: u64 = counts.values().sum();
    for (status, count) in counts {
        results.push(vec![status.clone(), count.to_string()]);
    }
    results.push(vec!["Total".to_string(), total.to_string()]);
    results
}

fn report_mismatches(mismatches: &[StatusMismatch]) {
    if mismatches.is_empty() {
        return;
    }
    tracing::info!("mismatched statuses:");
    for mismatch in mismatches {
        tracing::info!(
            "url: {} page status: {} table status: {}",
            mismatch.url,
            mismatch.page_status,
            mismatch.table_status
        );
    }
}
