use crate::client::{ClientConfig, ListOf, NoContent, Request, Single};
use crate::error::TestRailResult;
use crate::models::Suite;
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `suites`
#[derive(Debug, Clone, Copy)]
pub struct Suites<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Suites<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, suite_id: u64) -> TestRailResult<Request<Single<Suite>>> {
        let suite_id = require_positive("suite_id", suite_id)?;
        get(self.config, "get_suite/{}", &[suite_id])
    }

    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<Suite>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_suites/{}", &[project_id])
    }

    pub fn add(&self, suite: &Suite) -> TestRailResult<Request<Single<Suite>>> {
        let project_id = require_id::<Suite>("project_id", suite.project_id())?;
        post(self.config, "add_suite/{}", &[project_id], Some(body_of(suite)?))
    }

    pub fn update(&self, suite: &Suite) -> TestRailResult<Request<Single<Suite>>> {
        let id = require_id::<Suite>("id", suite.id())?;
        post(self.config, "update_suite/{}", &[id], Some(body_of(suite)?))
    }

    pub fn delete(&self, suite: &Suite) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Suite>("id", suite.id())?;
        post(self.config, "delete_suite/{}", &[id], None)
    }
}
