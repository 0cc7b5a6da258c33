use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and validates the configuration
///
/// # Arguments
///
/// * `path` - Optional path to a TOML configuration file; with `None` the
///   compiled-in defaults are used
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to read, parse, or validate the configuration
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => Config::default(),
    };

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults_when_no_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.network.docs_url, "https://docs.python.org/3/");
        assert_eq!(config.network.pep_index_url, "https://peps.python.org/numerical/");
        assert_eq!(config.network.timeout_secs, 30);
        assert_eq!(config.dirs.downloads, std::path::PathBuf::from("./downloads"));
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[network]
docs-url = "https://docs.example.org/"
pep-index-url = "https://peps.example.org/numerical/"
timeout-secs = 5
connect-timeout-secs = 2

[dirs]
cache = "/tmp/docprobe-cache"
downloads = "/tmp/docprobe-downloads"
results = "/tmp/docprobe-results"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.network.docs_url, "https://docs.example.org/");
        assert_eq!(config.network.timeout_secs, 5);
        assert_eq!(
            config.dirs.cache,
            std::path::PathBuf::from("/tmp/docprobe-cache")
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config_content = r#"
[network]
timeout-secs = 60
"#;

        let file = create_temp_config(config_content);
        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.network.timeout_secs, 60);
        assert_eq!(config.network.docs_url, "https://docs.python.org/3/");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(Some(file.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[network]
timeout-secs = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(Some(file.path()));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
