//! Configuration loading tests

use serial_test::serial;
use std::io::Write;
use testrail_client::codec::DateFormat;
use testrail_client::config::{LogFormat, load_config, load_config_from_str};
use testrail_client::error::ConfigError;

const MINIMAL_CONFIG: &str = r#"
[testrail]
url = "https://example.testrail.io"
username = "qa@example.com"
api_key = "file-key"
"#;

const FULL_CONFIG: &str = r#"
[testrail]
url = "https://testrail.company.com/"
username = "qa@company.com"
api_key = "k3y"
api_path = "index.php?/api/v2"
timeout_secs = 60
max_retries = 5
retry_base_delay_ms = 250
retry_max_delay_secs = 10
verify_ssl = false
date_format = "rfc3339"

[logging]
level = "debug"
format = "json"
"#;

const ENV_VARS: &[&str] = &[
    "TESTRAIL_URL",
    "TESTRAIL_USERNAME",
    "TESTRAIL_API_KEY",
    "TESTRAIL_PASSWORD",
    "TESTRAIL_CLIENT_TESTRAIL__MAX_RETRIES",
    "TESTRAIL_CLIENT_LOGGING__FORMAT",
];

fn clear_env() {
    for var in ENV_VARS {
        // SAFETY: every test touching the environment is #[serial]
        unsafe { std::env::remove_var(var) };
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_minimal_config() {
    let config = load_config_from_str(MINIMAL_CONFIG).unwrap();

    assert_eq!(config.testrail.url, "https://example.testrail.io");
    assert_eq!(config.testrail.username.as_deref(), Some("qa@example.com"));
    assert_eq!(config.testrail.timeout_secs, 30);
    assert_eq!(config.testrail.max_retries, 3);
    assert!(config.testrail.verify_ssl);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    assert_eq!(
        config.testrail.api_url(),
        "https://testrail.company.com/index.php?/api/v2/"
    );
    assert_eq!(config.testrail.timeout_secs, 60);
    assert!(!config.testrail.verify_ssl);
    assert!(matches!(config.testrail.date_format, DateFormat::Rfc3339));

    let policy = config.testrail.retry_policy();
    assert_eq!(policy.max_retries(), 5);
    assert_eq!(policy.base_delay().as_millis(), 250);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_api_key_not_in_debug_output() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();
    assert!(!format!("{:?}", config).contains("k3y"));
}

#[test]
fn test_unknown_date_format_rejected() {
    let toml = r#"
[testrail]
url = "https://example.testrail.io"
date_format = "iso-week"
"#;
    assert!(matches!(
        load_config_from_str(toml),
        Err(ConfigError::Load(_))
    ));
}

#[test]
fn test_zero_timeout_rejected() {
    let toml = r#"
[testrail]
url = "https://example.testrail.io"
timeout_secs = 0
"#;
    assert!(matches!(
        load_config_from_str(toml),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
#[serial]
fn test_load_config_from_file() {
    clear_env();
    let file = write_config(MINIMAL_CONFIG);

    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.testrail.url, "https://example.testrail.io");
}

#[test]
#[serial]
fn test_missing_explicit_file() {
    clear_env();
    let result = load_config(Some("/nonexistent/testrail.toml"));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = write_config(MINIMAL_CONFIG);

    // SAFETY: serialised with the other environment tests
    unsafe {
        std::env::set_var("TESTRAIL_URL", "https://override.testrail.io");
        std::env::set_var("TESTRAIL_API_KEY", "env-key");
        std::env::set_var("TESTRAIL_CLIENT_TESTRAIL__MAX_RETRIES", "7");
        std::env::set_var("TESTRAIL_CLIENT_LOGGING__FORMAT", "json");
    }

    let config = load_config(file.path().to_str());
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.testrail.url, "https://override.testrail.io");
    assert_eq!(config.testrail.max_retries, 7);
    assert_eq!(config.logging.format, LogFormat::Json);
    // Username still comes from the file
    assert_eq!(config.testrail.username.as_deref(), Some("qa@example.com"));
}

#[test]
#[serial]
fn test_strict_loader_requires_credentials() {
    clear_env();
    let file = write_config(
        r#"
[testrail]
url = "https://example.testrail.io"
"#,
    );

    let result = load_config(file.path().to_str());
    assert!(matches!(result, Err(ConfigError::Missing { .. })));

    // SAFETY: serialised with the other environment tests
    unsafe {
        std::env::set_var("TESTRAIL_USERNAME", "qa@example.com");
        std::env::set_var("TESTRAIL_PASSWORD", "hunter2");
    }
    let result = load_config(file.path().to_str());
    clear_env();

    assert!(result.unwrap().testrail.api_key.is_some());
}
