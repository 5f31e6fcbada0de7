//! Runtime client configuration
//!
//! Built once per [`TestRail`](crate::TestRail) instance and shared by every
//! request through an `Arc`. Nothing here changes after construction.

use crate::auth::BoxedAuthProvider;
use crate::client::retry::RetryPolicy;
use crate::codec::ParamCodec;
use crate::config::TestRailConfig;
use crate::error::{TestRailError, TestRailResult};
use reqwest::header::HeaderValue;
use reqwest::{Client, RequestBuilder};
use std::fmt;
use std::time::Duration;

/// Content type sent with every call, GETs included
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Immutable state shared by all requests of one client
pub struct ClientConfig {
    http: Client,
    api_url: String,
    auth: BoxedAuthProvider,
    retry: RetryPolicy,
    codec: ParamCodec,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("auth", &self.auth.auth_type())
            .field("retry", &self.retry)
            .field("codec", &self.codec)
            .finish()
    }
}

impl ClientConfig {
    /// Create the runtime configuration from loaded settings
    pub fn new(config: &TestRailConfig, auth: BoxedAuthProvider) -> TestRailResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .user_agent(format!("testrail-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url(),
            auth,
            retry: config.retry_policy(),
            codec: ParamCodec::new(config.date_format),
        })
    }

    /// Replace the retry policy (e.g. to shorten waits in tests)
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// API base URL, always ending in `/`
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn codec(&self) -> &ParamCodec {
        &self.codec
    }

    pub fn auth_type(&self) -> &'static str {
        self.auth.auth_type()
    }

    /// Attach credentials to an outgoing request
    pub(crate) async fn authenticate(
        &self,
        request: RequestBuilder,
    ) -> TestRailResult<RequestBuilder> {
        let header = self
            .auth
            .auth_header()
            .await
            .map_err(|e| TestRailError::Unauthorized {
                message: e.to_string(),
            })?;

        let mut value =
            HeaderValue::from_str(header.header_value()).map_err(|e| TestRailError::Unauthorized {
                message: e.to_string(),
            })?;
        value.set_sensitive(true);

        Ok(request.header(header.header_name(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BasicAuthProvider;

    fn test_config() -> TestRailConfig {
        TestRailConfig {
            url: "https://example.testrail.io/".to_string(),
            max_retries: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_client_config_new() {
        let auth = Box::new(BasicAuthProvider::new("user", "pass").unwrap());
        let config = ClientConfig::new(&test_config(), auth).unwrap();

        assert_eq!(
            config.api_url(),
            "https://example.testrail.io/index.php?/api/v2/"
        );
        assert_eq!(config.retry_policy().max_retries(), 1);
        assert_eq!(config.auth_type(), "HTTP Basic");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let auth = Box::new(BasicAuthProvider::new("user", "pass").unwrap());
        let config = ClientConfig::new(&test_config(), auth).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("dXNlcjpwYXNz"));
        assert!(debug.contains("HTTP Basic"));
    }
}
