//! Authentication module
//!
//! TestRail accepts HTTP Basic credentials made of the user's login email
//! and either an API key or the account password.

pub mod basic;
pub mod provider;

pub use basic::BasicAuthProvider;
pub use provider::{AuthHeader, AuthProvider, BoxedAuthProvider};

use crate::config::TestRailConfig;
use crate::error::AuthError;
use secrecy::ExposeSecret;

/// Create an auth provider from configuration
pub fn create_auth_provider(config: &TestRailConfig) -> Result<BoxedAuthProvider, AuthError> {
    match (&config.username, &config.api_key) {
        (Some(username), Some(api_key)) => Ok(Box::new(BasicAuthProvider::new(
            username.clone(),
            api_key.expose_secret(),
        )?)),
        // Fall back to environment variables
        _ => Ok(Box::new(BasicAuthProvider::from_env()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[tokio::test]
    async fn test_create_from_config() {
        let config = TestRailConfig {
            url: "https://example.testrail.io".to_string(),
            username: Some("qa@example.com".to_string()),
            api_key: Some(SecretString::new("key".into())),
            ..Default::default()
        };

        let provider = create_auth_provider(&config).unwrap();
        assert_eq!(provider.auth_type(), "HTTP Basic");
        let header = provider.auth_header().await.unwrap();
        assert_eq!(header.header_value(), "Basic cWFAZXhhbXBsZS5jb206a2V5");
    }
}
