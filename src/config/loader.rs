//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (TESTRAIL_URL, TESTRAIL_USERNAME, TESTRAIL_API_KEY,
//!    then TESTRAIL_CLIENT_*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "testrail.toml",
    ".testrail.toml",
    "~/.config/testrail/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    // Credentials may come from the environment later
    validate_config_relaxed(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // e.g., TESTRAIL_CLIENT_TESTRAIL__MAX_RETRIES, TESTRAIL_CLIENT_LOGGING__FORMAT
    // Double underscore (__) maps to nested keys (testrail.max_retries)
    builder = builder.add_source(
        Environment::with_prefix("TESTRAIL_CLIENT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // Conventional variables win over everything else; later entries take
    // precedence, so TESTRAIL_API_KEY beats TESTRAIL_PASSWORD
    for (env_var, key) in [
        ("TESTRAIL_URL", "testrail.url"),
        ("TESTRAIL_USERNAME", "testrail.username"),
        ("TESTRAIL_PASSWORD", "testrail.api_key"),
        ("TESTRAIL_API_KEY", "testrail.api_key"),
    ] {
        if let Ok(value) = std::env::var(env_var)
            && !value.is_empty()
        {
            builder = builder
                .set_override(key, value)
                .map_err(|e| ConfigError::Load(e.to_string()))?;
        }
    }

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values (relaxed - credentials not required)
fn validate_config_relaxed(config: &AppConfig) -> Result<(), ConfigError> {
    let testrail = &config.testrail;

    if testrail.url.is_empty() {
        return Err(ConfigError::Missing {
            field: "testrail.url (set TESTRAIL_URL environment variable)".to_string(),
        });
    }

    if !testrail.url.starts_with("http://") && !testrail.url.starts_with("https://") {
        return Err(ConfigError::Invalid {
            message: format!(
                "testrail.url must start with http:// or https://, got: {}",
                testrail.url
            ),
        });
    }

    if testrail.timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            message: "testrail.timeout_secs must be greater than 0".to_string(),
        });
    }

    if testrail.retry_max_delay_secs.saturating_mul(1000) < testrail.retry_base_delay_ms {
        return Err(ConfigError::Invalid {
            message: "testrail.retry_max_delay_secs must not be below retry_base_delay_ms"
                .to_string(),
        });
    }

    Ok(())
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    validate_config_relaxed(config)?;

    if config.testrail.username.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::Missing {
            field: "testrail.username (set TESTRAIL_USERNAME environment variable)".to_string(),
        });
    }

    if config.testrail.api_key.is_none() {
        return Err(ConfigError::Missing {
            field: "testrail.api_key (set TESTRAIL_API_KEY environment variable)".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TestRailConfig;
    use secrecy::SecretString;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[testrail]
url = "https://example.testrail.io"
username = "qa@example.com"
api_key = "key"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.testrail.url, "https://example.testrail.io");
        assert_eq!(config.testrail.username.as_deref(), Some("qa@example.com"));
        assert!(config.testrail.api_key.is_some());
    }

    #[test]
    fn test_invalid_url_error() {
        let toml = r#"
[testrail]
url = "example.testrail.io"
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_url_error() {
        let result = load_config_from_str("[logging]\nlevel = \"debug\"\n");
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_retry_bounds_validated() {
        let toml = r#"
[testrail]
url = "https://example.testrail.io"
retry_base_delay_ms = 5000
retry_max_delay_secs = 1
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_strict_validation_requires_credentials() {
        let mut config = AppConfig {
            testrail: TestRailConfig {
                url: "https://example.testrail.io".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Missing { .. })
        ));

        config.testrail.username = Some("qa@example.com".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Missing { .. })
        ));

        config.testrail.api_key = Some(SecretString::new("key".into()));
        assert!(validate_config(&config).is_ok());
    }
}
