//! Configuration types for testrail-client
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use crate::client::RetryPolicy;
use crate::codec::DateFormat;
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Default API prefix appended to the instance URL
pub const DEFAULT_API_PATH: &str = "index.php?/api/v2/";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// TestRail connection settings
    pub testrail: TestRailConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Deserialize an optional secret without ever holding it in a plain `String` field.
mod optional_secret {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .filter(|s| !s.is_empty())
            .map(|s| SecretString::new(s.into_boxed_str())))
    }
}

/// TestRail connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TestRailConfig {
    /// Instance URL (e.g., `https://example.testrail.io`)
    pub url: String,

    /// Login email of the API user (prefer env var TESTRAIL_USERNAME)
    pub username: Option<String>,

    /// API key or password (prefer env var TESTRAIL_API_KEY)
    #[serde(deserialize_with = "optional_secret::deserialize")]
    pub api_key: Option<SecretString>,

    /// API prefix appended to the URL (default: "index.php?/api/v2/")
    pub api_path: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum retries for rate-limited requests
    pub max_retries: u32,

    /// First backoff step when the server sends no Retry-After hint
    pub retry_base_delay_ms: u64,

    /// Upper bound for any single backoff wait
    pub retry_max_delay_secs: u64,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,

    /// Encoding for date query parameters
    pub date_format: DateFormat,
}

impl Default for TestRailConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: None,
            api_key: None,
            api_path: DEFAULT_API_PATH.to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_base_delay_ms: 1000,
            retry_max_delay_secs: 60,
            verify_ssl: true,
            date_format: DateFormat::UnixSeconds,
        }
    }
}

impl TestRailConfig {
    /// Get the full API base URL, always ending in `/`
    pub fn api_url(&self) -> String {
        let mut api_path = self.api_path.trim_start_matches('/').to_string();
        if !api_path.is_empty() && !api_path.ends_with('/') {
            api_path.push('/');
        }
        format!("{}/{}", self.url.trim_end_matches('/'), api_path)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries)
            .with_base_delay(Duration::from_millis(self.retry_base_delay_ms))
            .with_max_delay(Duration::from_secs(self.retry_max_delay_secs))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_api_url() {
        let config = TestRailConfig {
            url: "https://example.testrail.io".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.api_url(),
            "https://example.testrail.io/index.php?/api/v2/"
        );

        // Trailing slash on the URL, custom prefix without one
        let config = TestRailConfig {
            url: "https://example.testrail.io/".to_string(),
            api_path: "/api/v2".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_url(), "https://example.testrail.io/api/v2/");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.testrail.url.is_empty());
        assert_eq!(config.testrail.timeout_secs, 30);
        assert_eq!(config.testrail.max_retries, 3);
        assert!(matches!(config.testrail.date_format, DateFormat::UnixSeconds));
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = TestRailConfig {
            max_retries: 5,
            retry_base_delay_ms: 250,
            retry_max_delay_secs: 10,
            ..Default::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_retries(), 5);
        assert_eq!(policy.base_delay(), Duration::from_millis(250));
        assert_eq!(policy.max_delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_deserialize_api_key_is_redacted() {
        let json = r#"{"url": "https://x.testrail.io", "api_key": "s3cr3t"}"#;
        let config: TestRailConfig = serde_json::from_str(json).unwrap();
        let key = config.api_key.as_ref().unwrap();
        assert_eq!(key.expose_secret(), "s3cr3t");
        assert!(!format!("{:?}", config).contains("s3cr3t"));
    }

    #[test]
    fn test_deserialize_date_format() {
        let format: DateFormat = serde_json::from_str(r#""rfc3339""#).unwrap();
        assert!(matches!(format, DateFormat::Rfc3339));

        let format: DateFormat = serde_json::from_str(r#""unix_millis""#).unwrap();
        assert!(matches!(format, DateFormat::UnixMillis));

        assert!(serde_json::from_str::<DateFormat>(r#""custom""#).is_err());
    }
}
