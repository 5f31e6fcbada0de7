use crate::codec::Timestamp;
use testrail_macros::resource;

/// A milestone, optionally nested under a parent milestone
#[resource(kind = "milestone")]
pub struct Milestone {
    #[identity]
    id: Option<u64>,
    #[identity]
    project_id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    due_on: Option<Timestamp>,
    start_on: Option<Timestamp>,
    parent_id: Option<u64>,
    is_completed: Option<bool>,
    is_started: Option<bool>,
    #[read_only]
    started_on: Option<Timestamp>,
    #[read_only]
    completed_on: Option<Timestamp>,
    #[read_only]
    url: Option<String>,
}
