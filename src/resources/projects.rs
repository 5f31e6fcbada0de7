use crate::client::{ClientConfig, ListOf, NoContent, Request, Single};
use crate::error::TestRailResult;
use crate::models::Project;
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `projects`
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, project_id: u64) -> TestRailResult<Request<Single<Project>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_project/{}", &[project_id])
    }

    pub fn list(&self) -> TestRailResult<Request<ListOf<Project>>> {
        get(self.config, "get_projects", &[])
    }

    pub fn add(&self, project: &Project) -> TestRailResult<Request<Single<Project>>> {
        post(self.config, "add_project", &[], Some(body_of(project)?))
    }

    /// Partial update: only fields assigned on `project` are sent.
    pub fn update(&self, project: &Project) -> TestRailResult<Request<Single<Project>>> {
        let id = require_id::<Project>("id", project.id())?;
        post(self.config, "update_project/{}", &[id], Some(body_of(project)?))
    }

    pub fn delete(&self, project: &Project) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Project>("id", project.id())?;
        post(self.config, "delete_project/{}", &[id], None)
    }
}
