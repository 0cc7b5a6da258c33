//! `download`: fetch the PDF documentation archive
//!
//! Locates the pdf-a4 archive link on the download page and streams it into
//! the downloads directory. Produces no result rows; the saved file is the
//! outcome.

use crate::select::{require, MissingElementError};
use crate::{Config, Fetcher, Result};
use scraper::Html;
use std::path::PathBuf;
use url::Url;

const DOWNLOAD_PAGE: &str = "download.html";
const ARCHIVE_LINK: &str = r#"table.docutils a[href$="pdf-a4.zip"]"#;
const FALLBACK_FILENAME: &str = "archive.zip";

pub async fn run(fetcher: &Fetcher, config: &Config) -> Result<PathBuf> {
    let page_url = Url::parse(&config.network.docs_url)?.join(DOWNLOAD_PAGE)?;
    let body = fetcher.fetch_text(&page_url).await?;
    let archive_url = archive_link(&body, &page_url)?;

    let filename = archive_url
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_FILENAME);

    std::fs::create_dir_all(&config.dirs.downloads)?;
    let dest = config.dirs.downloads.join(filename);

    tracing::info!("downloading {} to {}", archive_url, dest.display());
    let bytes = fetcher.download_to(&archive_url, &dest).await?;
    tracing::info!("archive saved: {} ({} bytes)", dest.display(), bytes);

    Ok(dest)
}

/// Locates the pdf-a4 archive link on the download page
fn archive_link(body: &str, page_url: &Url) -> Result<Url> {
    let doc = Html::parse_document(body);
    let anchor = require(doc.root_element(), ARCHIVE_LINK, "PDF archive link")?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| MissingElementError::new("PDF archive href", ARCHIVE_LINK))?;
    Ok(page_url.join(href)?)
}
