use crate::client::{ClientConfig, ListOf, NoContent, Request, Single};
use crate::error::TestRailResult;
use crate::models::Run;
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `runs`
#[derive(Debug, Clone, Copy)]
pub struct Runs<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, run_id: u64) -> TestRailResult<Request<Single<Run>>> {
        let run_id = require_positive("run_id", run_id)?;
        get(self.config, "get_run/{}", &[run_id])
    }

    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<Run>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_runs/{}", &[project_id])
    }

    pub fn add(&self, run: &Run) -> TestRailResult<Request<Single<Run>>> {
        let project_id = require_id::<Run>("project_id", run.project_id())?;
        post(self.config, "add_run/{}", &[project_id], Some(body_of(run)?))
    }

    pub fn update(&self, run: &Run) -> TestRailResult<Request<Single<Run>>> {
        let id = require_id::<Run>("id", run.id())?;
        post(self.config, "update_run/{}", &[id], Some(body_of(run)?))
    }

    /// Close the run and archive its tests and results
    pub fn close(&self, run: &Run) -> TestRailResult<Request<Single<Run>>> {
        let id = require_id::<Run>("id", run.id())?;
        post(self.config, "close_run/{}", &[id], None)
    }

    pub fn delete(&self, run: &Run) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Run>("id", run.id())?;
        post(self.config, "delete_run/{}", &[id], None)
    }
}
