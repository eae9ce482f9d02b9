use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load the portal configuration from a TOML file, then apply environment
/// overrides.
///
/// Only `[backend] base_url` is required:
///
/// ```toml
/// [backend]
/// base_url = "http://127.0.0.1:8080/api"
/// timeout_secs = 30
///
/// [admin]
/// pin = "2729"
/// ```
///
/// Environment keys use the `PORTAL_` prefix and `__` between section and
/// field, since field names contain `_`: `PORTAL_BACKEND__BASE_URL` or
/// `PORTAL_ADMIN__PIN`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("PORTAL_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Parse a configuration from a TOML string, without environment overrides.
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[backend]
base_url = "http://127.0.0.1:9000/api"

[admin]
pin = "4321"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.admin.pin, "4321");
    }

    #[test]
    fn test_load_config_from_str_missing_backend() {
        let toml = r#"
[admin]
pin = "4321"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/portal.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[backend]
base_url = "http://127.0.0.1:3000/api"
timeout_secs = 5
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:3000/api");
        assert_eq!(config.backend.timeout_secs, Some(5));
        assert_eq!(config.admin.pin, "2729");
    }
}
