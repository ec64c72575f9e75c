//! API endpoint configuration
//!
//! The remote widget API lives at a single configured base address.
//! Resolution order: the `WIDGET_API_URL` environment variable wins, then an
//! optional `widget-manager.toml` file in the working directory, then the
//! built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ============================================================================
// Constants
// ============================================================================

/// Default base URL of the widget API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "WIDGET_API_URL";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "widget-manager.toml";

// ============================================================================
// ApiConfig
// ============================================================================

/// Configuration for the remote widget API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the API, e.g. `http://localhost:9000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Load the configuration from the process environment and the optional
    /// config file in the working directory.
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var(ENV_BASE_URL).ok();
        let file = read_config_file(Path::new(CONFIG_FILE))?;
        Self::resolve(env, file.as_deref())
    }

    /// Resolve a configuration from the given sources.
    ///
    /// `env` is the raw environment override, `file` the raw TOML document.
    /// Separated from [`load`](ApiConfig::load) so the precedence rules are
    /// testable without touching the process environment.
    pub fn resolve(env: Option<String>, file: Option<&str>) -> CoreResult<Self> {
        if let Some(base_url) = env {
            let base_url = base_url.trim().to_string();
            if base_url.is_empty() {
                return Err(CoreError::invalid_config(format!(
                    "{ENV_BASE_URL} is set but empty"
                )));
            }
            return Ok(Self {
                base_url: normalize_base_url(base_url),
            });
        }

        if let Some(document) = file {
            let config = Self::from_toml(document)?;
            return Ok(config);
        }

        Ok(Self::default())
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml(document: &str) -> CoreResult<Self> {
        let config: ApiConfig = toml::from_str(document)
            .map_err(|e| CoreError::invalid_config(e.to_string()))?;
        if config.base_url.trim().is_empty() {
            return Err(CoreError::invalid_config("base_url must not be empty"));
        }
        Ok(Self {
            base_url: normalize_base_url(config.base_url),
        })
    }
}

/// Strip a trailing slash so path joining stays uniform.
fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

fn read_config_file(path: &Path) -> CoreResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| CoreError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:9000");
    }

    #[test]
    fn test_env_override_wins_over_file() {
        let config = ApiConfig::resolve(
            Some("http://widgets.internal:8080".to_string()),
            Some(r#"base_url = "http://ignored:1234""#),
        )
        .expect("env override should resolve");
        assert_eq!(config.base_url, "http://widgets.internal:8080");
    }

    #[test]
    fn test_empty_env_override_is_rejected() {
        let err = ApiConfig::resolve(Some("  ".to_string()), None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_file_config() {
        let config = ApiConfig::resolve(None, Some(r#"base_url = "http://localhost:7000/""#))
            .expect("file config should resolve");
        assert_eq!(config.base_url, "http://localhost:7000");
    }

    #[test]
    fn test_missing_sources_fall_back_to_default() {
        let config = ApiConfig::resolve(None, None).expect("default should resolve");
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = ApiConfig::from_toml("base_url = ").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_empty_base_url_in_file_is_rejected() {
        let err = ApiConfig::from_toml(r#"base_url = """#).unwrap_err();
        assert!(err.is_config());
    }
}
