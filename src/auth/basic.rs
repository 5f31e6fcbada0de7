//! HTTP Basic authentication with an API key or password

use crate::auth::provider::{AuthHeader, AuthProvider};
use crate::error::AuthError;
use async_trait::async_trait;
use secrecy::SecretString;

/// Basic authentication provider
#[derive(Debug, Clone)]
pub struct BasicAuthProvider {
    header: AuthHeader,
}

impl BasicAuthProvider {
    /// Create a new Basic provider
    pub fn new(username: impl Into<String>, api_key: &str) -> Result<Self, AuthError> {
        let username = username.into();
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::MissingUsername);
        }
        if api_key.is_empty() {
            return Err(AuthError::MissingApiKey);
        }

        let secret = SecretString::new(api_key.into());
        Ok(Self {
            header: AuthHeader::basic(username, &secret),
        })
    }

    /// Create from environment variables
    ///
    /// Reads TESTRAIL_USERNAME plus TESTRAIL_API_KEY, falling back to
    /// TESTRAIL_PASSWORD.
    pub fn from_env() -> Result<Self, AuthError> {
        let username = std::env::var("TESTRAIL_USERNAME")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::NotConfigured)?;

        for var in &["TESTRAIL_API_KEY", "TESTRAIL_PASSWORD"] {
            if let Ok(secret) = std::env::var(var)
                && !secret.is_empty()
            {
                return Self::new(username, &secret);
            }
        }

        Err(AuthError::NotConfigured)
    }
}

#[async_trait]
impl AuthProvider for BasicAuthProvider {
    async fn auth_header(&self) -> Result<AuthHeader, AuthError> {
        Ok(self.header.clone())
    }

    fn auth_type(&self) -> &'static str {
        "HTTP Basic"
    }
}
