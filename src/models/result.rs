use crate::codec::Timestamp;
use crate::error::{TestRailError, TestRailResult};
use crate::tracking::Resource;
use serde_json::{Map, Value};
use testrail_macros::resource;

/// A test result.
///
/// `test_id` addresses single submissions; `case_id` identifies the entry in
/// bulk submissions for cases.
#[resource(kind = "result")]
pub struct TestResult {
    #[identity]
    id: Option<u64>,
    #[identity]
    test_id: Option<u64>,
    case_id: Option<u64>,
    status_id: Option<u64>,
    comment: Option<String>,
    version: Option<String>,
    elapsed: Option<String>,
    defects: Option<String>,
    assignedto_id: Option<u64>,
    #[read_only]
    created_by: Option<u64>,
    #[read_only]
    created_on: Option<Timestamp>,
}

/// Body of a bulk result submission: `{"results": [...]}`
#[derive(Debug, Clone, PartialEq)]
pub struct ResultList {
    results: Vec<TestResult>,
}

impl ResultList {
    /// Fails with `InvalidArgument` when `results` is empty.
    pub fn new(results: Vec<TestResult>) -> TestRailResult<Self> {
        if results.is_empty() {
            return Err(TestRailError::invalid_argument(
                "results should not be empty",
            ));
        }
        Ok(Self { results })
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Each entry carries its dirty fields plus the key that addresses it,
    /// even when that key was hydrated or the entry was cloned.
    pub fn write_payload(&self, target: BulkTarget) -> serde_json::Result<Value> {
        let key = target.key();
        let results = self
            .results
            .iter()
            .map(|result| {
                let mut entry = result.write_payload()?;
                if let Some(id) = target.id_of(result) {
                    entry.entry(key).or_insert_with(|| Value::from(id));
                }
                Ok(Value::Object(entry))
            })
            .collect::<serde_json::Result<Vec<_>>>()?;

        let mut body = Map::new();
        body.insert("results".to_owned(), Value::Array(results));
        Ok(Value::Object(body))
    }
}

/// Which identifier a bulk submission matches its entries by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkTarget {
    /// `add_results`: entries name tests of the run
    Tests,
    /// `add_results_for_cases`: entries name cases of the run
    Cases,
}

impl BulkTarget {
    pub fn key(self) -> &'static str {
        match self {
            BulkTarget::Tests => "test_id",
            BulkTarget::Cases => "case_id",
        }
    }

    pub fn id_of(self, result: &TestResult) -> Option<u64> {
        match self {
            BulkTarget::Tests => result.test_id(),
            BulkTarget::Cases => result.case_id(),
        }
    }
}
