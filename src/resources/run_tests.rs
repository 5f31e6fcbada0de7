use crate::client::{ClientConfig, ListOf, Request, Single};
use crate::error::TestRailResult;
use crate::models::Test;
use crate::resources::{get, require_positive};
use std::sync::Arc;

/// Factories for `tests`, the cases instantiated in a run
#[derive(Debug, Clone, Copy)]
pub struct Tests<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Tests<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, test_id: u64) -> TestRailResult<Request<Single<Test>>> {
        let test_id = require_positive("test_id", test_id)?;
        get(self.config, "get_test/{}", &[test_id])
    }

    pub fn list(&self, run_id: u64) -> TestRailResult<Request<ListOf<Test>>> {
        let run_id = require_positive("run_id", run_id)?;
        get(self.config, "get_tests/{}", &[run_id])
    }
}
