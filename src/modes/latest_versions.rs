//! `latest-versions`: the sidebar list of documented releases
//!
//! Every anchor in the "All versions" sidebar list is split into a version
//! number and a status with a regex; anchor texts that do not match fall
//! back to the full text with an empty status. Row ordering is
//! `(link, version, status)`, matching the header.

use crate::select::{all, element_text, MissingElementError};
use crate::{Config, Fetcher, Result, ResultRow};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use url::Url;

const SIDEBAR_LISTS: &str = "div.sphinxsidebarwrapper ul";
const VERSION_LIST_MARKER: &str = "All versions";

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Python (?P<version>\d+\.\d+) \((?P<status>.*)\)").expect("version pattern")
});

pub async fn run(fetcher: &Fetcher, config: &Config) -> Result<Vec<ResultRow>> {
    let root_url = Url::parse(&config.network.docs_url)?;
    let body = fetcher.fetch_text(&root_url).await?;
    let (rows, skipped) = parse_versions(&body, &root_url)?;

    for entry in &skipped {
        tracing::debug!("skipped version link: {}", entry);
    }

    let mut results = vec![header()];
    results.extend(rows);
    Ok(results)
}

fn header() -> ResultRow {
    vec![
        "Documentation link".to_string(),
        "Version".to_string(),
        "Status".to_string(),
    ]
}

/// Finds the version list in the sidebar and splits every anchor
///
/// The list is identified by its text containing the marker; its absence
/// aborts the mode.
fn parse_versions(body: &str, base: &Url) -> Result<(Vec<ResultRow>, Vec<String>)> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();

    let list = all(root, SIDEBAR_LISTS)
        .into_iter()
        .find(|ul| element_text(*ul).contains(VERSION_LIST_MARKER))
        .ok_or_else(|| MissingElementError::new("version list", SIDEBAR_LISTS))?;

    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for anchor in all(list, "a") {
        let text = element_text(anchor);
        let (version, status) = split_version(&text);
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => {
                skipped.push(format!("anchor '{}' has no href", text));
                continue;
            }
        };
        match base.join(href) {
            Ok(link) => rows.push(vec![link.to_string(), version, status]),
            Err(e) => skipped.push(format!("href '{}' did not resolve: {}", href, e)),
        }
    }

    Ok((rows, skipped))
}

/// Splits an anchor text like `Python 3.12 (stable)` into version and status
///
/// Texts that do not match the pattern become the version as-is, with an
/// empty status.
fn split_version(text: &str) -> (String, String) {
    match VERSION_RE.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://docs.example.org/3/").unwrap()
    }

    #[test]
    fn test_split_version_matching_text() {
        assert_eq!(
            split_version("Python 3.12 (stable)"),
            ("3.12".to_string(), "stable".to_string())
        );
    }

    #[test]
    fn test_split_version_in_development() {
        assert_eq!(
            split_version("Python 3.14 (in development)"),
            ("3.14".to_string(), "in development".to_string())
        );
    }

    #[test]
    fn test_split_version_fallback() {
        assert_eq!(split_version("Old Docs"), ("Old Docs".to_string(), String::new()));
    }

    const SIDEBAR: &str = r#"<html><body><div class="sphinxsidebarwrapper">
        <ul><li><a href="/unrelated">Unrelated list</a></li></ul>
        <ul>
            <li>All versions</li>
            <li><a href="https://docs.example.org/3.12/">Python 3.12 (stable)</a></li>
            <li><a href="/old/">Old Docs</a></li>
        </ul>
    </div></body></html>"#;

    #[test]
    fn test_parse_versions_picks_marked_list() {
        let (rows, skipped) = parse_versions(SIDEBAR, &base()).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![
                    "https://docs.example.org/3.12/".to_string(),
                    "3.12".to_string(),
                    "stable".to_string()
                ],
                vec![
                    "https://docs.example.org/old/".to_string(),
                    "Old Docs".to_string(),
                    String::new()
                ],
            ]
        );
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_parse_versions_without_marker_is_error() {
        let body = r#"<html><body><div class="sphinxsidebarwrapper">
            <ul><li><a href="/x">Something else</a></li></ul>
        </div></body></html>"#;
        assert!(parse_versions(body, &base()).is_err());
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let body = r#"<html><body><div class="sphinxsidebarwrapper">
            <ul><li>All versions</li><li><a>Python 3.10 (security-fixes)</a></li></ul>
        </div></body></html>"#;
        let (rows, skipped) = parse_versions(body, &base()).unwrap();
        assert!(rows.is_empty());
        assert_eq!(skipped.len(), 1);
    }
}
