use crate::client::{ClientConfig, ListOf, NoContent, Request, Single};
use crate::codec::Timestamp;
use crate::error::TestRailResult;
use crate::models::Case;
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `cases`
#[derive(Debug, Clone, Copy)]
pub struct Cases<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Cases<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, case_id: u64) -> TestRailResult<Request<Single<Case>>> {
        let case_id = require_positive("case_id", case_id)?;
        get(self.config, "get_case/{}", &[case_id])
    }

    /// Cases of a project; narrow with the filter methods on the returned request.
    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<Case>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_cases/{}", &[project_id])
    }

    /// Add `case` to the section named by its `section_id`.
    pub fn add(&self, case: &Case) -> TestRailResult<Request<Single<Case>>> {
        let section_id = require_id::<Case>("section_id", case.section_id())?;
        post(self.config, "add_case/{}", &[section_id], Some(body_of(case)?))
    }

    pub fn update(&self, case: &Case) -> TestRailResult<Request<Single<Case>>> {
        let id = require_id::<Case>("id", case.id())?;
        post(self.config, "update_case/{}", &[id], Some(body_of(case)?))
    }

    pub fn delete(&self, case: &Case) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Case>("id", case.id())?;
        post(self.config, "delete_case/{}", &[id], None)
    }
}

/// Filters for `get_cases`
impl Request<ListOf<Case>> {
    /// Required for projects in multi-suite mode
    pub fn suite_id(self, suite_id: u64) -> Self {
        self.param("suite_id", suite_id)
    }

    pub fn section_id(self, section_id: u64) -> Self {
        self.param("section_id", section_id)
    }

    pub fn created_after(self, at: impl Into<Timestamp>) -> Self {
        self.param("created_after", at.into())
    }

    pub fn created_before(self, at: impl Into<Timestamp>) -> Self {
        self.param("created_before", at.into())
    }

    pub fn created_by(self, user_ids: &[u64]) -> Self {
        self.param("created_by", user_ids)
    }

    pub fn milestone_id(self, milestone_ids: &[u64]) -> Self {
        self.param("milestone_id", milestone_ids)
    }

    pub fn priority_id(self, priority_ids: &[u64]) -> Self {
        self.param("priority_id", priority_ids)
    }

    pub fn type_id(self, type_ids: &[u64]) -> Self {
        self.param("type_id", type_ids)
    }

    pub fn updated_after(self, at: impl Into<Timestamp>) -> Self {
        self.param("updated_after", at.into())
    }

    pub fn updated_before(self, at: impl Into<Timestamp>) -> Self {
        self.param("updated_before", at.into())
    }

    pub fn updated_by(self, user_ids: &[u64]) -> Self {
        self.param("updated_by", user_ids)
    }
}
