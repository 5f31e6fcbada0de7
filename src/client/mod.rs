//! TestRail API client
//!
//! [`TestRail`] owns one shared [`ClientConfig`] and hands out request
//! factories per resource. Each factory call yields a [`Request`] that is
//! executed once:
//!
//! ```no_run
//! # async fn demo(client: testrail_client::TestRail) -> testrail_client::TestRailResult<()> {
//! let cases = client
//!     .cases()
//!     .list(1)?
//!     .suite_id(2)
//!     .created_by(&[1, 2, 3])
//!     .execute()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod path;
mod request;
mod response;
mod retry;

pub use config::{CONTENT_TYPE_JSON, ClientConfig};
pub use path::{join_url, resolve_path};
pub use request::{HttpMethod, Request, RequestDescriptor};
pub use response::{ListOf, NoContent, ResponseKind, ResponseShape, Single};
pub use retry::{RetryPolicy, parse_retry_after};

use crate::auth::{BoxedAuthProvider, create_auth_provider};
use crate::config::TestRailConfig;
use crate::error::TestRailResult;
use crate::resources::{
    CaseFields, CaseTypes, Cases, Configurations, Milestones, Plans, Priorities, Projects,
    ResultFields, Results, Runs, Sections, Statuses, Suites, Tests, Users,
};
use std::sync::Arc;
use tracing::debug;

/// Entry point to the TestRail API.
///
/// Cheap to clone; clones share the HTTP connection pool and credentials.
#[derive(Debug, Clone)]
pub struct TestRail {
    config: Arc<ClientConfig>,
}

impl TestRail {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build a client from loaded settings and an explicit auth provider
    pub fn with_auth(config: &TestRailConfig, auth: BoxedAuthProvider) -> TestRailResult<Self> {
        debug!(auth = auth.auth_type(), url = %config.url, "Creating TestRail client");
        Ok(Self::new(ClientConfig::new(config, auth)?))
    }

    /// Build a client from loaded settings, taking credentials from the
    /// settings or the environment
    pub fn from_config(config: &TestRailConfig) -> crate::error::Result<Self> {
        let auth = create_auth_provider(config)?;
        Ok(Self::with_auth(config, auth)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(&self.config)
    }

    pub fn cases(&self) -> Cases<'_> {
        Cases::new(&self.config)
    }

    pub fn case_fields(&self) -> CaseFields<'_> {
        CaseFields::new(&self.config)
    }

    pub fn case_types(&self) -> CaseTypes<'_> {
        CaseTypes::new(&self.config)
    }

    pub fn configurations(&self) -> Configurations<'_> {
        Configurations::new(&self.config)
    }

    pub fn sections(&self) -> Sections<'_> {
        Sections::new(&self.config)
    }

    pub fn suites(&self) -> Suites<'_> {
        Suites::new(&self.config)
    }

    pub fn milestones(&self) -> Milestones<'_> {
        Milestones::new(&self.config)
    }

    pub fn priorities(&self) -> Priorities<'_> {
        Priorities::new(&self.config)
    }

    pub fn result_fields(&self) -> ResultFields<'_> {
        ResultFields::new(&self.config)
    }

    pub fn tests(&self) -> Tests<'_> {
        Tests::new(&self.config)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.config)
    }

    pub fn statuses(&self) -> Statuses<'_> {
        Statuses::new(&self.config)
    }

    pub fn runs(&self) -> Runs<'_> {
        Runs::new(&self.config)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(&self.config)
    }

    pub fn results(&self) -> Results<'_> {
        Results::new(&self.config)
    }
}
