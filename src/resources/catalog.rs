//! Read-only catalogs: field definitions, case types, configurations,
//! priorities and statuses.

use crate::client::{ClientConfig, ListOf, Request};
use crate::error::TestRailResult;
use crate::models::{CaseField, CaseType, ConfigurationGroup, Priority, ResultField, Status};
use crate::resources::{get, require_positive};
use std::sync::Arc;

macro_rules! catalog {
    ($(#[$meta:meta])* $name:ident, $model:ty, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            config: &'a Arc<ClientConfig>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
                Self { config }
            }

            pub fn list(&self) -> TestRailResult<Request<ListOf<$model>>> {
                get(self.config, $path, &[])
            }
        }
    };
}

catalog!(
    /// Factories for `case_fields`
    CaseFields, CaseField, "get_case_fields"
);
catalog!(
    /// Factories for `case_types`
    CaseTypes, CaseType, "get_case_types"
);
catalog!(
    /// Factories for `priorities`
    Priorities, Priority, "get_priorities"
);
catalog!(
    /// Factories for `result_fields`
    ResultFields, ResultField, "get_result_fields"
);
catalog!(
    /// Factories for `statuses`
    Statuses, Status, "get_statuses"
);

/// Factories for `configurations`
#[derive(Debug, Clone, Copy)]
pub struct Configurations<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Configurations<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    /// Configuration groups of a project, each with its options
    pub fn list(&self, project_id: u64) -> TestRailResult<Request<ListOf<ConfigurationGroup>>> {
        let project_id = require_positive("project_id", project_id)?;
        get(self.config, "get_configs/{}", &[project_id])
    }
}
