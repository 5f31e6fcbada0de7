//! Authentication provider trait

use crate::error::AuthError;
// async_trait required for dyn-compatibility with Box<dyn AuthProvider>
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};

/// Authentication provider trait
///
/// Implementations supply the credentials attached to every TestRail call.
/// The client's [`ClientConfig`](crate::client::ClientConfig) is the only
/// caller.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Get the authentication header for the next request
    async fn auth_header(&self) -> Result<AuthHeader, AuthError>;

    /// Get a description of the auth method (for logging)
    fn auth_type(&self) -> &'static str;
}

/// Authentication header to use with requests
///
/// The value is kept behind [`SecretString`] so it never shows up in `Debug`
/// output or logs.
#[derive(Debug, Clone)]
pub struct AuthHeader {
    value: SecretString,
}

impl AuthHeader {
    /// `Authorization: Basic base64(user:secret)`
    pub fn basic(username: &str, secret: &SecretString) -> Self {
        let encoded = STANDARD.encode(format!("{}:{}", username, secret.expose_secret()));
        Self {
            value: SecretString::new(format!("Basic {}", encoded).into_boxed_str()),
        }
    }

    pub fn header_name(&self) -> &'static str {
        "Authorization"
    }

    pub fn header_value(&self) -> &str {
        self.value.expose_secret()
    }
}

/// Box type alias for auth providers
pub type BoxedAuthProvider = Box<dyn AuthProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header_encoding() {
        let header = AuthHeader::basic("user", &SecretString::new("pass".into()));
        assert_eq!(header.header_name(), "Authorization");
        assert_eq!(header.header_value(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_debug_redacts_value() {
        let header = AuthHeader::basic("user", &SecretString::new("pass".into()));
        let debug = format!("{:?}", header);
        assert!(!debug.contains("dXNlcjpwYXNz"));
    }
}
