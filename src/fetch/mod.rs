//! HTTP fetching, response caching and file download
//!
//! This module contains everything that talks to the network:
//! - Building the HTTP client with user agent and explicit timeouts
//! - Cache-aware text fetching used by every mode
//! - Streamed file download for the documentation archive

mod cache;
mod client;

pub use cache::ResponseCache;
pub use client::{build_http_client, FetchError, Fetcher};
