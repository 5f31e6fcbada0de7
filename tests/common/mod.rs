//! Shared helpers for integration tests

#![allow(dead_code)]

use testrail_client::TestRail;
use testrail_client::auth::BasicAuthProvider;
use testrail_client::config::TestRailConfig;
use wiremock::{Match, MockServer, Request};

/// `Authorization` header for user "user" with key "key"
pub const BASIC_AUTH: &str = "Basic dXNlcjprZXk=";

/// Create a client pointing at the mock server with short backoff steps
pub fn create_test_client(mock_server: &MockServer, max_retries: u32) -> TestRail {
    create_client_for_url(&mock_server.uri(), max_retries, 30)
}

pub fn create_client_for_url(url: &str, max_retries: u32, timeout_secs: u64) -> TestRail {
    let config = TestRailConfig {
        url: url.to_string(),
        max_retries,
        timeout_secs,
        retry_base_delay_ms: 10,
        retry_max_delay_secs: 5,
        ..Default::default()
    };
    let auth = BasicAuthProvider::new("user", "key").unwrap();
    TestRail::with_auth(&config, Box::new(auth)).unwrap()
}

/// URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Matches the TestRail endpoint carried in the query string,
/// e.g. `/index.php?/api/v2/get_project/1&foo=bar` matches `get_project/1`.
pub struct ApiPath(String);

pub fn api_path(endpoint: &str) -> ApiPath {
    ApiPath(format!("/api/v2/{}", endpoint))
}

impl Match for ApiPath {
    fn matches(&self, request: &Request) -> bool {
        request.url.path() == "/index.php"
            && request
                .url
                .query()
                .and_then(|query| query.split('&').next())
                .is_some_and(|endpoint| endpoint == self.0)
    }
}
