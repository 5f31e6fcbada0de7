use crate::client::{ClientConfig, ListOf, Request, Single};
use crate::error::{TestRailError, TestRailResult};
use crate::models::{BulkTarget, ResultList, TestResult};
use crate::resources::{body_of, get, post, require_id, require_positive};
use std::sync::Arc;

/// Factories for `results`
#[derive(Debug, Clone, Copy)]
pub struct Results<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Results<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    /// Results recorded for one test
    pub fn list(&self, test_id: u64) -> TestRailResult<Request<ListOf<TestResult>>> {
        let test_id = require_positive("test_id", test_id)?;
        get(self.config, "get_results/{}", &[test_id])
    }

    pub fn list_for_case(
        &self,
        run_id: u64,
        case_id: u64,
    ) -> TestRailResult<Request<ListOf<TestResult>>> {
        let run_id = require_positive("run_id", run_id)?;
        let case_id = require_positive("case_id", case_id)?;
        get(self.config, "get_results_for_case/{}/{}", &[run_id, case_id])
    }

    pub fn list_for_run(&self, run_id: u64) -> TestRailResult<Request<ListOf<TestResult>>> {
        let run_id = require_positive("run_id", run_id)?;
        get(self.config, "get_results_for_run/{}", &[run_id])
    }

    /// Add a result to the test named by `result.test_id`
    pub fn add(&self, result: &TestResult) -> TestRailResult<Request<Single<TestResult>>> {
        let test_id = require_id::<TestResult>("test_id", result.test_id())?;
        post(self.config, "add_result/{}", &[test_id], Some(body_of(result)?))
    }

    pub fn add_for_case(
        &self,
        run_id: u64,
        case_id: u64,
        result: &TestResult,
    ) -> TestRailResult<Request<Single<TestResult>>> {
        let run_id = require_positive("run_id", run_id)?;
        let case_id = require_positive("case_id", case_id)?;
        post(
            self.config,
            "add_result_for_case/{}/{}",
            &[run_id, case_id],
            Some(body_of(result)?),
        )
    }

    /// Submit several results for tests of a run in one call
    pub fn add_list(
        &self,
        run_id: u64,
        results: Vec<TestResult>,
    ) -> TestRailResult<Request<ListOf<TestResult>>> {
        self.bulk("add_results/{}", run_id, results, BulkTarget::Tests)
    }

    /// Submit several results addressed by case instead of test
    pub fn add_for_cases(
        &self,
        run_id: u64,
        results: Vec<TestResult>,
    ) -> TestRailResult<Request<ListOf<TestResult>>> {
        self.bulk("add_results_for_cases/{}", run_id, results, BulkTarget::Cases)
    }

    fn bulk(
        &self,
        template: &str,
        run_id: u64,
        results: Vec<TestResult>,
        target: BulkTarget,
    ) -> TestRailResult<Request<ListOf<TestResult>>> {
        let run_id = require_positive("run_id", run_id)?;
        let list = ResultList::new(results)?;
        for result in list.results() {
            require_id::<TestResult>(target.key(), target.id_of(result))?;
        }
        let body = list.write_payload(target).map_err(|e| {
            TestRailError::invalid_argument(format!("cannot encode results: {}", e))
        })?;
        post(self.config, template, &[run_id], Some(body))
    }
}
