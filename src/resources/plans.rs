use crate::client::{ClientConfig, HttpMethod, ListOf, NoContent, Request, Single};
use crate::error::{TestRailError, TestRailResult};
use crate::models::{Plan, PlanEntry};
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `plans` and their entries
#[derive(Debug, Clone, Copy)]
pub struct Plans<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, plan_id: u64) -> TestRailResult<Request<Single<Plan>>> {
        let plan_id = require_positive("plan_id", plan_id)?;
        get(self.config, "get_plan/{}", &[plan_id])
    }

    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<Plan>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_plans/{}", &[project_id])
    }

    pub fn add(&self, plan: &Plan) -> TestRailResult<Request<Single<Plan>>> {
        let project_id = require_id::<Plan>("project_id", plan.project_id())?;
        post(self.config, "add_plan/{}", &[project_id], Some(body_of(plan)?))
    }

    pub fn update(&self, plan: &Plan) -> TestRailResult<Request<Single<Plan>>> {
        let id = require_id::<Plan>("id", plan.id())?;
        post(self.config, "update_plan/{}", &[id], Some(body_of(plan)?))
    }

    pub fn close(&self, plan: &Plan) -> TestRailResult<Request<Single<Plan>>> {
        let id = require_id::<Plan>("id", plan.id())?;
        post(self.config, "close_plan/{}", &[id], None)
    }

    pub fn delete(&self, plan: &Plan) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Plan>("id", plan.id())?;
        post(self.config, "delete_plan/{}", &[id], None)
    }

    pub fn add_entry(
        &self,
        plan: &Plan,
        entry: &PlanEntry,
    ) -> TestRailResult<Request<Single<PlanEntry>>> {
        let plan_id = require_id::<Plan>("id", plan.id())?;
        post(self.config, "add_plan_entry/{}", &[plan_id], Some(body_of(entry)?))
    }

    pub fn update_entry(
        &self,
        plan: &Plan,
        entry: &PlanEntry,
    ) -> TestRailResult<Request<Single<PlanEntry>>> {
        let path = entry_path("update_plan_entry", plan, entry)?;
        Ok(Request::new(
            Arc::clone(self.config),
            HttpMethod::Post,
            path,
            Some(body_of(entry)?),
        ))
    }

    pub fn delete_entry(
        &self,
        plan: &Plan,
        entry: &PlanEntry,
    ) -> TestRailResult<Request<NoContent>> {
        let path = entry_path("delete_plan_entry", plan, entry)?;
        Ok(Request::new(Arc::clone(self.config), HttpMethod::Post, path, None))
    }
}

/// Entry ids are opaque strings, so they cannot go through the numeric path
/// templates.
fn entry_path(action: &str, plan: &Plan, entry: &PlanEntry) -> TestRailResult<String> {
    let plan_id = require_id::<Plan>("id", plan.id())?;
    let entry_id = entry
        .id()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| TestRailError::invalid_argument("plan entry.id is required"))?;
    Ok(format!(
        "{}/{}/{}",
        action,
        plan_id,
        urlencoding::encode(entry_id)
    ))
}
