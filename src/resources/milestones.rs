use crate::client::{ClientConfig, ListOf, NoContent, Request, Single};
use crate::error::TestRailResult;
use crate::models::Milestone;
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `milestones`
#[derive(Debug, Clone, Copy)]
pub struct Milestones<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Milestones<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, milestone_id: u64) -> TestRailResult<Request<Single<Milestone>>> {
        let milestone_id = require_positive("milestone_id", milestone_id)?;
        get(self.config, "get_milestone/{}", &[milestone_id])
    }

    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<Milestone>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_milestones/{}", &[project_id])
    }

    pub fn add(&self, milestone: &Milestone) -> TestRailResult<Request<Single<Milestone>>> {
        let project_id = require_id::<Milestone>("project_id", milestone.project_id())?;
        post(
            self.config,
            "add_milestone/{}",
            &[project_id],
            Some(body_of(milestone)?),
        )
    }

    pub fn update(&self, milestone: &Milestone) -> TestRailResult<Request<Single<Milestone>>> {
        let id = require_id::<Milestone>("id", milestone.id())?;
        post(
            self.config,
            "update_milestone/{}",
            &[id],
            Some(body_of(milestone)?),
        )
    }

    pub fn delete(&self, milestone: &Milestone) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Milestone>("id", milestone.id())?;
        post(self.config, "delete_milestone/{}", &[id], None)
    }
}
