use crate::codec::Timestamp;
use testrail_macros::resource;

#[resource(kind = "suite")]
pub struct Suite {
    #[identity]
    id: Option<u64>,
    #[identity]
    project_id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    #[read_only]
    is_master: Option<bool>,
    #[read_only]
    is_baseline: Option<bool>,
    #[read_only]
    is_completed: Option<bool>,
    #[read_only]
    completed_on: Option<Timestamp>,
    #[read_only]
    url: Option<String>,
}
