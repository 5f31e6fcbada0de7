//! TestRail resource models
//!
//! Writable resources use the `#[resource]` attribute and track which fields
//! the caller assigned; see [`crate::tracking`]. Reference data the API only
//! ever returns is modelled as plain structs in [`reference`].

mod case;
mod milestone;
mod plan;
mod project;
mod reference;
mod result;
mod run;
mod section;
mod suite;

pub use case::Case;
pub use milestone::Milestone;
pub use plan::{Plan, PlanEntry};
pub use project::{Project, SuiteMode};
pub use reference::{
    CaseField, CaseType, Configuration, ConfigurationGroup, Priority, ResultField, Status, Test,
    User,
};
pub use result::{BulkTarget, ResultList, TestResult};
pub use run::Run;
pub use section::Section;
pub use suite::Suite;
