//! Application configuration.
//!
//! Values come from an optional TOML file and are then overlaid with
//! `DAILYCONCEPT_*` environment variables.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const ENV_PREFIX: &str = "DAILYCONCEPT_";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Skip the provider entirely and always use the offline generator.
    pub use_mock_generation: bool,
    /// Production builds never fall back to offline content.
    pub production: bool,
    pub api_base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub mock_delay_min_ms: u64,
    pub mock_delay_max_ms: u64,
    pub locale: String,
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_mock_generation: false,
            production: false,
            api_base_url: None,
            request_timeout_secs: 30,
            mock_delay_min_ms: 1000,
            mock_delay_max_ms: 2000,
            locale: "en-US".to_string(),
            data_dir: PathBuf::from(".dailyconcept"),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if it exists, otherwise starts from defaults, then applies
    /// the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

        if let Some(value) = var("USE_MOCK_GENERATION") {
            self.use_mock_generation = parse_bool("use_mock_generation", &value)?;
        }
        if let Some(value) = var("PRODUCTION") {
            self.production = parse_bool("production", &value)?;
        }
        if let Some(value) = var("API_BASE_URL") {
            self.api_base_url = Some(value).filter(|v| !v.trim().is_empty());
        }
        if let Some(value) = var("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_u64("request_timeout_secs", &value)?;
        }
        if let Some(value) = var("MOCK_DELAY_MIN_MS") {
            self.mock_delay_min_ms = parse_u64("mock_delay_min_ms", &value)?;
        }
        if let Some(value) = var("MOCK_DELAY_MAX_MS") {
            self.mock_delay_max_ms = parse_u64("mock_delay_max_ms", &value)?;
        }
        if let Some(value) = var("LOCALE") {
            self.locale = value;
        }
        if let Some(value) = var("DATA_DIR") {
            self.data_dir = PathBuf::from(value);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        if self.mock_delay_min_ms > self.mock_delay_max_ms {
            return Err(ConfigError::ValidationFailed {
                reason: format!(
                    "mock_delay_min_ms ({}) is greater than mock_delay_max_ms ({})",
                    self.mock_delay_min_ms, self.mock_delay_max_ms
                ),
            });
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "locale".to_string(),
            });
        }
        if let Some(url) = &self.api_base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "api_base_url".to_string(),
                    value: url.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_u64(field: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.use_mock_generation);
        assert!(!config.production);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            production = true
            api_base_url = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert!(config.production);
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = AppConfig::from_toml_str("production = maybe");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DAILYCONCEPT_USE_MOCK_GENERATION", "yes"),
            ("DAILYCONCEPT_REQUEST_TIMEOUT_SECS", "5"),
            ("DAILYCONCEPT_LOCALE", "de-DE"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_env_overrides(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert!(config.use_mock_generation);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.locale, "de-DE");
    }

    #[test]
    fn test_bad_env_bool_is_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|name| {
            (name == "DAILYCONCEPT_PRODUCTION").then(|| "sometimes".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field, .. }) if field == "production"
        ));
    }

    #[test]
    fn test_validation_rules() {
        let config = AppConfig {
            mock_delay_min_ms: 10,
            mock_delay_max_ms: 5,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed { .. })
        ));

        let config = AppConfig {
            api_base_url: Some("ftp://nope".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dailyconcept.toml");
        std::fs::write(&path, "use_mock_generation = true\nlocale = \"fr-FR\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(config.use_mock_generation);
        assert_eq!(config.locale, "fr-FR");

        let missing = AppConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::FileNotFound { .. })));
    }
}
