use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for docprobe
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dirs: DirsConfig,
}

/// Endpoints and HTTP behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base URL of the documentation site
    #[serde(rename = "docs-url")]
    pub docs_url: String,

    /// URL of the PEP numerical index
    #[serde(rename = "pep-index-url")]
    pub pep_index_url: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            docs_url: "https://docs.python.org/3/".to_string(),
            pep_index_url: "https://peps.python.org/numerical/".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Working directories
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirsConfig {
    /// Where cached HTTP responses are stored
    pub cache: PathBuf,

    /// Where the documentation archive is saved
    pub downloads: PathBuf,

    /// Where `--output file` result tables are written
    pub results: PathBuf,
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self {
            cache: PathBuf::from("./cache"),
            downloads: PathBuf::from("./downloads"),
            results: PathBuf::from("./results"),
        }
    }
}
