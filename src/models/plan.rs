use crate::codec::Timestamp;
use crate::models::Run;
use testrail_macros::resource;

/// A test plan grouping several runs
#[resource(kind = "plan")]
pub struct Plan {
    #[identity]
    id: Option<u64>,
    #[identity]
    project_id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    milestone_id: Option<u64>,
    assignedto_id: Option<u64>,
    #[nested]
    entries: Option<Vec<PlanEntry>>,
    #[read_only]
    is_completed: Option<bool>,
    #[read_only]
    completed_on: Option<Timestamp>,
    #[read_only]
    created_on: Option<Timestamp>,
    #[read_only]
    created_by: Option<u64>,
    #[read_only]
    url: Option<String>,
}

/// One suite's runs inside a plan. Entry ids are server-assigned strings.
#[resource(kind = "plan entry")]
pub struct PlanEntry {
    #[identity]
    id: Option<String>,
    suite_id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    assignedto_id: Option<u64>,
    include_all: Option<bool>,
    case_ids: Option<Vec<u64>>,
    config_ids: Option<Vec<u64>>,
    #[nested]
    runs: Option<Vec<Run>>,
}
