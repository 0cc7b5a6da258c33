//! HTTP client construction and cache-aware fetching
//!
//! All page retrieval goes through [`Fetcher`]: a cache lookup, then a GET
//! with the body lossily decoded as UTF-8. The archive download streams
//! straight to disk and bypasses the cache.

use crate::config::NetworkConfig;
use crate::fetch::ResponseCache;
use futures_util::StreamExt;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Log a progress line roughly once per megabyte of download
const PROGRESS_STEP: u64 = 1024 * 1024;

/// Transport or HTTP-status failure for a given URL
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Builds the HTTP client shared by every mode
///
/// # Arguments
///
/// * `config` - Network configuration supplying the timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &NetworkConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Cache-aware page fetcher shared by all modes
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    cache: ResponseCache,
}

impl Fetcher {
    pub fn new(client: Client, cache: ResponseCache) -> Self {
        Self { client, cache }
    }

    /// Fetches `url` as text, consulting the response cache first
    ///
    /// Bodies are lossily decoded as UTF-8 regardless of the declared
    /// charset. Non-2xx statuses are fetch failures. Cache read/write
    /// problems are logged and ignored; they never fail the fetch.
    pub async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        if let Some(body) = self.cache.load(url.as_str()) {
            tracing::debug!("cache hit: {}", url);
            return Ok(body);
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        if let Err(e) = self.cache.store(url.as_str(), &body) {
            tracing::debug!("cache store failed for {}: {}", url, e);
        }

        Ok(body)
    }

    /// Streams `url` to `dest` in chunks, bypassing the cache
    ///
    /// Returns the number of bytes written. Progress is reported through
    /// the log; a percentage is included when the server sends a
    /// Content-Length.
    pub async fn download_to(&self, url: &Url, dest: &Path) -> crate::Result<u64> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let total = response.content_length();
        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        let mut last_report: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;

            if written - last_report >= PROGRESS_STEP {
                last_report = written;
                match total {
                    Some(total) if total > 0 => tracing::info!(
                        "downloaded {} of {} bytes ({}%)",
                        written,
                        total,
                        written * 100 / total
                    ),
                    _ => tracing::info!("downloaded {} bytes", written),
                }
            }
        }

        file.flush().await?;
        Ok(written)
    }

    /// Removes every cached response
    pub fn clear_cache(&self) -> std::io::Result<()> {
        self.cache.clear()
    }
}
