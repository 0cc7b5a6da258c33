use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a configuration, returning the first problem found
///
/// Checks that the endpoints are well-formed http(s) URLs and that the
/// timeouts are nonzero.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_endpoint("docs-url", &config.network.docs_url)?;
    validate_endpoint("pep-index-url", &config.network.pep_index_url)?;

    if config.network.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be greater than zero".to_string(),
        ));
    }

    if config.network.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_endpoint(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| {
        ConfigError::Validation(format!("{} is not a valid URL ({}): {}", key, value, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Validation(format!(
            "{} must use http or https, got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_malformed_url() {
        let mut config = Config::default();
        config.network.docs_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.network.pep_index_url = "ftp://peps.python.org/".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.network.timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_connect_timeout() {
        let mut config = Config::default();
        config.network.connect_timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
