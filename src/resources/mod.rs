//! Request factories, one per TestRail resource
//!
//! Factories only check their arguments (positive identifiers, identity
//! fields present) and hand a path, a response shape and an optional body
//! to [`Request`]. Encoding and transport live in [`crate::client`].

mod cases;
mod catalog;
mod milestones;
mod plans;
mod projects;
mod results;
mod run_tests;
mod runs;
mod sections;
mod suites;
mod users;

pub use cases::Cases;
pub use catalog::{CaseFields, CaseTypes, Configurations, Priorities, ResultFields, Statuses};
pub use milestones::Milestones;
pub use plans::Plans;
pub use projects::Projects;
pub use results::Results;
pub use run_tests::Tests;
pub use runs::Runs;
pub use sections::Sections;
pub use suites::Suites;
pub use users::Users;

use crate::client::{ClientConfig, HttpMethod, Request, ResponseKind, resolve_path};
use crate::error::{TestRailError, TestRailResult};
use crate::tracking::Resource;
use serde_json::Value;
use std::sync::Arc;

/// Reject a zero identifier before anything is sent.
pub(crate) fn require_positive(name: &str, id: u64) -> TestRailResult<u64> {
    if id == 0 {
        return Err(TestRailError::invalid_argument(format!(
            "{} should be positive",
            name
        )));
    }
    Ok(id)
}

/// An identity field of `R` that must be set and positive.
pub(crate) fn require_id<R: Resource>(field: &str, id: Option<u64>) -> TestRailResult<u64> {
    match id {
        Some(id) => require_positive(&format!("{}.{}", R::KIND, field), id),
        None => Err(TestRailError::invalid_argument(format!(
            "{}.{} is required",
            R::KIND,
            field
        ))),
    }
}

/// Snapshot the dirty fields of `resource` as a JSON body.
pub(crate) fn body_of<R: Resource>(resource: &R) -> TestRailResult<Value> {
    resource
        .write_payload()
        .map(Value::Object)
        .map_err(|e| TestRailError::invalid_argument(format!("cannot encode {}: {}", R::KIND, e)))
}

pub(crate) fn get<K: ResponseKind>(
    config: &Arc<ClientConfig>,
    template: &str,
    ids: &[u64],
) -> TestRailResult<Request<K>> {
    let path = resolve_path(template, ids)?;
    Ok(Request::new(Arc::clone(config), HttpMethod::Get, path, None))
}

pub(crate) fn post<K: ResponseKind>(
    config: &Arc<ClientConfig>,
    template: &str,
    ids: &[u64],
    body: Option<Value>,
) -> TestRailResult<Request<K>> {
    let path = resolve_path(template, ids)?;
    Ok(Request::new(Arc::clone(config), HttpMethod::Post, path, body))
}
