//! `whats-new`: release-note article summaries
//!
//! Walks the whatsnew index, fetches every linked article and extracts its
//! title and editor/author block. A broken article is skipped and logged;
//! the index page itself failing aborts the mode.

use crate::select::{all, element_text, optional, require};
use crate::{Config, Fetcher, Result, ResultRow};
use scraper::Html;
use url::Url;

const INDEX_PAGE: &str = "whatsnew/";
const INDEX_CONTAINER: &str = "#what-s-new-in-python div.toctree-wrapper";
const INDEX_ITEMS: &str = "li.toctree-l1";

pub async fn run(fetcher: &Fetcher, config: &Config) -> Result<Vec<ResultRow>> {
    let index_url = Url::parse(&config.network.docs_url)?.join(INDEX_PAGE)?;
    let body = fetcher.fetch_text(&index_url).await?;
    let (links, mut errors) = index_links(&body, &index_url)?;

    tracing::info!("processing {} release-note articles", links.len());

    let mut results = vec![header()];
    for link in links {
        match fetch_article(fetcher, &link).await {
            Ok(row) => results.push(row),
            Err(e) => errors.push(format!("{}: {}", link, e)),
        }
    }

    for error in &errors {
        tracing::debug!("skipped article: {}", error);
    }

    Ok(results)
}

fn header() -> ResultRow {
    vec![
        "Article link".to_string(),
        "Title".to_string(),
        "Editor, author".to_string(),
    ]
}

/// Resolves every article link in the whatsnew index
///
/// Returns the resolved links plus descriptions of items that had to be
/// skipped (no anchor, unresolvable href). The index container missing is
/// an error: without it the whole mode has nothing to work on.
fn index_links(body: &str, index_url: &Url) -> Result<(Vec<Url>, Vec<String>)> {
    let doc = Html::parse_document(body);
    let container = require(doc.root_element(), INDEX_CONTAINER, "release-note list")?;

    let mut links = Vec::new();
    let mut skipped = Vec::new();

    for item in all(container, INDEX_ITEMS) {
        let anchor = match optional(item, "a") {
            Some(anchor) => anchor,
            None => {
                skipped.push(format!("item '{}' has no link", element_text(item)));
                continue;
            }
        };
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => {
                skipped.push(format!("anchor '{}' has no href", element_text(anchor)));
                continue;
            }
        };
        match index_url.join(href) {
            Ok(link) => links.push(link),
            Err(e) => skipped.push(format!("href '{}' did not resolve: {}", href, e)),
        }
    }

    Ok((links, skipped))
}

async fn fetch_article(fetcher: &Fetcher, url: &Url) -> Result<ResultRow> {
    let body = fetcher.fetch_text(url).await?;
    parse_article(&body, url)
}

/// Extracts one result row from an article page
fn parse_article(body: &str, url: &Url) -> Result<ResultRow> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();
    let title = element_text(require(root, "h1", "article title")?);
    let editors = flatten(&element_text(require(root, "dl", "editor/author block")?));
    Ok(vec![url.to_string(), title, editors])
}

/// Collapses the line breaks inside a definition block to single spaces
fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
