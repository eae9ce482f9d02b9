use serde::{Deserialize, Serialize};

use crate::catalog::SiteConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub site: SiteDefaultsConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the portal API (e.g., "http://127.0.0.1:8080/api")
    pub base_url: String,
    /// Request timeout in seconds. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Admin surface configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// PIN that opens the admin surface. A UI gate only, not a credential.
    #[serde(default = "default_pin")]
    pub pin: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { pin: default_pin() }
    }
}

fn default_pin() -> String {
    "2729".to_string()
}

/// Site branding used when the backend record lacks a field or fails to load
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SiteDefaultsConfig {
    #[serde(default = "default_logo_url")]
    pub logo_url: String,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

impl Default for SiteDefaultsConfig {
    fn default() -> Self {
        Self {
            logo_url: default_logo_url(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            text_color: default_text_color(),
            site_title: default_site_title(),
        }
    }
}

fn default_logo_url() -> String {
    "attached_assets/image-removebg-preview_1752337327762.png".to_string()
}

fn default_primary_color() -> String {
    "#8B5CF6".to_string()
}

fn default_secondary_color() -> String {
    "#667eea".to_string()
}

fn default_text_color() -> String {
    "#333333".to_string()
}

fn default_site_title() -> String {
    "Cantry - Portal de Juegos".to_string()
}

impl From<&SiteDefaultsConfig> for SiteConfig {
    fn from(defaults: &SiteDefaultsConfig) -> Self {
        Self {
            logo_url: Some(defaults.logo_url.clone()),
            primary_color: Some(defaults.primary_color.clone()),
            secondary_color: Some(defaults.secondary_color.clone()),
            text_color: Some(defaults.text_color.clone()),
            site_title: Some(defaults.site_title.clone()),
        }
    }
}

/// Sanitized config for logging (PIN redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub backend: BackendConfig,
    pub admin: SanitizedAdminConfig,
    pub site: SiteDefaultsConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAdminConfig {
    pub pin_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            backend: config.backend.clone(),
            admin: SanitizedAdminConfig {
                pin_configured: !config.admin.pin.is_empty(),
            },
            site: config.site.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
[backend]
base_url = "http://127.0.0.1:8080/api"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8080/api");
        assert!(config.backend.timeout_secs.is_none());
        assert_eq!(config.admin.pin, "2729");
        assert_eq!(config.site, SiteDefaultsConfig::default());
    }

    #[test]
    fn test_deserialize_missing_backend_fails() {
        let toml = r#"
[admin]
pin = "1111"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_site_overrides() {
        let toml = r##"
[backend]
base_url = "http://localhost/api"
timeout_secs = 10

[site]
site_title = "Arcade"
primary_color = "#000000"
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.timeout_secs, Some(10));
        assert_eq!(config.site.site_title, "Arcade");
        assert_eq!(config.site.primary_color, "#000000");
        assert_eq!(config.site.text_color, "#333333"); // default
    }

    #[test]
    fn test_site_defaults_into_site_config() {
        let site = SiteConfig::from(&SiteDefaultsConfig::default());
        assert_eq!(site.primary_color.as_deref(), Some("#8B5CF6"));
        assert_eq!(site.site_title.as_deref(), Some("Cantry - Portal de Juegos"));
    }

    #[test]
    fn test_sanitized_config_hides_pin() {
        let config: Config = toml::from_str(
            r#"
[backend]
base_url = "http://localhost/api"

[admin]
pin = "9999"
"#,
        )
        .unwrap();
        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.admin.pin_configured);
        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("9999"));
    }
}
