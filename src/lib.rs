//! Docprobe: a batch scraper for the Python documentation site
//!
//! This crate implements a command-line tool that extracts structured
//! information from docs.python.org and the PEP index: release-note
//! summaries, the version/status listing, the PDF documentation archive,
//! and a cross-check of PEP statuses against the numerical index table.

pub mod config;
pub mod fetch;
pub mod modes;
pub mod output;
pub mod select;

use thiserror::Error;

/// Main error type for docprobe operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),

    #[error(transparent)]
    MissingElement(#[from] select::MissingElementError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for docprobe operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetch::{build_http_client, FetchError, Fetcher, ResponseCache};
pub use modes::{run_mode, Mode, ResultRow};
pub use output::OutputFormat;
pub use select::MissingElementError;
