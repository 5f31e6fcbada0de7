use crate::codec::Timestamp;
use testrail_macros::resource;

/// A test case. New cases are added to the section named by `section_id`.
#[resource(kind = "case")]
pub struct Case {
    #[identity]
    id: Option<u64>,
    #[identity]
    section_id: Option<u64>,
    title: Option<String>,
    type_id: Option<u64>,
    priority_id: Option<u64>,
    milestone_id: Option<u64>,
    refs: Option<String>,
    estimate: Option<String>,
    template_id: Option<u64>,
    #[read_only]
    suite_id: Option<u64>,
    #[read_only]
    created_by: Option<u64>,
    #[read_only]
    created_on: Option<Timestamp>,
    #[read_only]
    updated_by: Option<u64>,
    #[read_only]
    updated_on: Option<Timestamp>,
}
