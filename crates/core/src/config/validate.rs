use reqwest::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Backend base URL parses and uses http or https
/// - Timeout, when set, is not 0
/// - Admin PIN is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let url = Url::parse(&config.backend.base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "backend.base_url '{}' is not a valid URL: {}",
            config.backend.base_url, e
        ))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::ValidationError(format!(
            "backend.base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.backend.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "backend.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.admin.pin.is_empty() {
        return Err(ConfigError::ValidationError(
            "admin.pin cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminConfig, BackendConfig, SiteDefaultsConfig};

    fn config(base_url: &str) -> Config {
        Config {
            backend: BackendConfig {
                base_url: base_url.to_string(),
                timeout_secs: None,
            },
            admin: AdminConfig::default(),
            site: SiteDefaultsConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&config("http://127.0.0.1:8080/api")).is_ok());
        assert!(validate_config(&config("https://portal.example/api")).is_ok());
    }

    #[test]
    fn test_validate_bad_url_fails() {
        let result = validate_config(&config("/api"));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = validate_config(&config("ftp://portal.example/api"));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = config("http://localhost/api");
        config.backend.timeout_secs = Some(0);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_empty_pin_fails() {
        let mut config = config("http://localhost/api");
        config.admin.pin.clear();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
