use crate::codec::Timestamp;
use testrail_macros::resource;

/// A test run.
///
/// Runs inside a plan are managed through their [`PlanEntry`](super::PlanEntry).
#[resource(kind = "run")]
pub struct Run {
    #[identity]
    id: Option<u64>,
    #[identity]
    project_id: Option<u64>,
    suite_id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    milestone_id: Option<u64>,
    assignedto_id: Option<u64>,
    include_all: Option<bool>,
    case_ids: Option<Vec<u64>>,
    config_ids: Option<Vec<u64>>,
    #[read_only]
    plan_id: Option<u64>,
    #[read_only]
    is_completed: Option<bool>,
    #[read_only]
    completed_on: Option<Timestamp>,
    #[read_only]
    created_on: Option<Timestamp>,
    #[read_only]
    created_by: Option<u64>,
    #[read_only]
    passed_count: Option<u32>,
    #[read_only]
    failed_count: Option<u32>,
    #[read_only]
    untested_count: Option<u32>,
    #[read_only]
    url: Option<String>,
}
