use crate::client::{ClientConfig, ListOf, NoContent, Request, Single};
use crate::error::TestRailResult;
use crate::models::Section;
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `sections`
#[derive(Debug, Clone, Copy)]
pub struct Sections<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Sections<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, section_id: u64) -> TestRailResult<Request<Single<Section>>> {
        let section_id = require_positive("section_id", section_id)?;
        get(self.config, "get_section/{}", &[section_id])
    }

    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<Section>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_sections/{}", &[project_id])
    }

    pub fn add(
        &self,
        project_id: u64,
        section: &Section,
    ) -> TestRailResult<Request<Single<Section>>> {
        let project_id = require_positive("project_id", project_id)?;
        post(self.config, "add_section/{}", &[project_id], Some(body_of(section)?))
    }

    pub fn update(&self, section: &Section) -> TestRailResult<Request<Single<Section>>> {
        let id = require_id::<Section>("id", section.id())?;
        post(self.config, "update_section/{}", &[id], Some(body_of(section)?))
    }

    pub fn delete(&self, section: &Section) -> TestRailResult<Request<NoContent>> {
        let id = require_id::<Section>("id", section.id())?;
        post(self.config, "delete_section/{}", &[id], None)
    }
}

impl Request<ListOf<Section>> {
    /// Required for projects in multi-suite mode
    pub fn suite_id(self, suite_id: u64) -> Self {
        self.param("suite_id", suite_id)
    }
}
