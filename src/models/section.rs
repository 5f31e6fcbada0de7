use testrail_macros::resource;

#[resource(kind = "section")]
pub struct Section {
    #[identity]
    id: Option<u64>,
    suite_id: Option<u64>,
    parent_id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    #[read_only]
    depth: Option<u32>,
    #[read_only]
    display_order: Option<u32>,
}
