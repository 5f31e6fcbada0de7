//! The generic request executor
//!
//! A [`Request`] pairs an immutable [`RequestDescriptor`] with the shared
//! [`ClientConfig`] and a response shape `K`. Executing it consumes the
//! request: build, send, then either decode the body or fail with a typed
//! error. HTTP 429 is the only status that loops back to send again.

use crate::client::config::{CONTENT_TYPE_JSON, ClientConfig};
use crate::client::path::join_url;
use crate::client::response::{ResponseKind, ResponseShape};
use crate::client::retry::parse_retry_after;
use crate::codec::{IntoParam, QueryParams};
use crate::error::{TestRailError, TestRailResult};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP verbs used by TestRail; deletes and closes are POSTs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Everything needed to issue one call.
///
/// The body is a snapshot taken when the request was built; later changes
/// to the model it came from do not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    path: String,
    shape: ResponseShape,
    body: Option<Value>,
    query: QueryParams,
}

impl RequestDescriptor {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path relative to the API base, identifiers already substituted
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn shape(&self) -> ResponseShape {
        self.shape
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}

/// Outcome of a single send
enum Attempt {
    Succeeded(Vec<u8>),
    Throttled(Option<Duration>),
}

/// A ready-to-execute call returning `K::Output`
pub struct Request<K: ResponseKind> {
    config: Arc<ClientConfig>,
    descriptor: RequestDescriptor,
    _kind: PhantomData<K>,
}

impl<K: ResponseKind> Clone for Request<K> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            descriptor: self.descriptor.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: ResponseKind> fmt::Debug for Request<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

impl<K: ResponseKind> Request<K> {
    pub fn new(
        config: Arc<ClientConfig>,
        method: HttpMethod,
        path: impl Into<String>,
        body: Option<Value>,
    ) -> Self {
        Self {
            config,
            descriptor: RequestDescriptor {
                method,
                path: path.into(),
                shape: K::SHAPE,
                body,
                query: QueryParams::new(),
            },
            _kind: PhantomData,
        }
    }

    /// Set a query parameter, replacing any earlier value of the same name
    pub fn param(mut self, name: &str, value: impl IntoParam) -> Self {
        self.descriptor.query.set(name, value);
        self
    }

    /// Set a query parameter when `value` is present
    pub fn param_opt<T: IntoParam>(mut self, name: &str, value: Option<T>) -> Self {
        self.descriptor.query.set_optional(name, value);
        self
    }

    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    /// Absolute URL including the encoded query string
    pub fn url(&self) -> String {
        let query = self.descriptor.query.to_query_string(self.config.codec());
        join_url(self.config.api_url(), &self.descriptor.path, &query)
    }

    /// Send the request and decode the response.
    ///
    /// Throttled calls are retried up to the configured limit. Dropping the
    /// returned future during a backoff wait cancels the retry.
    #[instrument(
        skip(self),
        fields(method = %self.descriptor.method, path = %self.descriptor.path)
    )]
    pub async fn execute(self) -> TestRailResult<K::Output> {
        let url = self.url();
        let policy = *self.config.retry_policy();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!(attempt, "Sending request");

            match self.send(&url).await? {
                Attempt::Succeeded(body) => return K::decode(&body),
                Attempt::Throttled(hint) => {
                    if attempt > policy.max_retries() {
                        warn!(attempts = attempt, "Rate limit retries exhausted");
                        return Err(TestRailError::RateLimited {
                            attempts: attempt,
                            retry_after: hint.map(|d| d.as_secs()),
                        });
                    }

                    let delay = policy.delay(attempt, hint);
                    warn!(
                        attempt,
                        ?delay,
                        "Rate limited, waiting before retry"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn send(&self, url: &str) -> TestRailResult<Attempt> {
        let http = self.config.http();
        let request = match self.descriptor.method {
            HttpMethod::Get => http.get(url),
            HttpMethod::Post => http.post(url),
        }
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON);

        let request = match &self.descriptor.body {
            Some(body) => request.json(body),
            None => request,
        };
        let request = self.config.authenticate(request).await?;

        let response = request.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            TestRailError::Transport(e)
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let hint = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after);
            return Ok(Attempt::Throttled(hint));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read response body: {}", e);
            TestRailError::Transport(e)
        })?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Request rejected");
            return Err(TestRailError::from_response(
                status.as_u16(),
                &String::from_utf8_lossy(&body),
            ));
        }

        Ok(Attempt::Succeeded(body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BasicAuthProvider;
    use crate::client::response::{ListOf, NoContent, Single};
    use crate::config::TestRailConfig;
    use serde_json::json;

    fn config() -> Arc<ClientConfig> {
        let settings = TestRailConfig {
            url: "https://example.testrail.io".to_string(),
            ..Default::default()
        };
        let auth = Box::new(BasicAuthProvider::new("user", "pass").unwrap());
        Arc::new(ClientConfig::new(&settings, auth).unwrap())
    }

    #[test]
    fn test_descriptor_records_shape() {
        let request =
            Request::<ListOf<Value>>::new(config(), HttpMethod::Get, "get_projects", None);
        assert_eq!(request.descriptor().shape(), ResponseShape::List);
        assert_eq!(request.descriptor().method(), HttpMethod::Get);

        let request =
            Request::<NoContent>::new(config(), HttpMethod::Post, "delete_case/1", None);
        assert_eq!(request.descriptor().shape(), ResponseShape::Empty);
    }

    #[test]
    fn test_url_with_params() {
        let request = Request::<ListOf<Value>>::new(config(), HttpMethod::Get, "get_cases/1", None)
            .param("suite_id", 2u64)
            .param("created_by", vec![1u64, 2, 3])
            .param_opt("milestone_id", None::<u64>);

        assert_eq!(
            request.url(),
            "https://example.testrail.io/index.php?/api/v2/get_cases/1&suite_id=2&created_by=1,2,3"
        );
    }

    #[test]
    fn test_body_is_a_snapshot() {
        let mut body = json!({"title": "first"});
        let request = Request::<Single<Value>>::new(
            config(),
            HttpMethod::Post,
            "add_case/1",
            Some(body.clone()),
        );
        body["title"] = json!("second");

        assert_eq!(request.descriptor().body(), Some(&json!({"title": "first"})));
    }
}
