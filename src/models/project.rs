use crate::codec::Timestamp;
use testrail_macros::resource;

/// How a project organises its test suites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SuiteMode {
    SingleSuite = 1,
    SingleSuiteWithBaselines = 2,
    MultipleSuites = 3,
}

impl From<SuiteMode> for u8 {
    fn from(mode: SuiteMode) -> Self {
        mode as u8
    }
}

impl TryFrom<u8> for SuiteMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SuiteMode::SingleSuite),
            2 => Ok(SuiteMode::SingleSuiteWithBaselines),
            3 => Ok(SuiteMode::MultipleSuites),
            other => Err(other),
        }
    }
}

/// A TestRail project
#[resource(kind = "project")]
pub struct Project {
    #[identity]
    id: Option<u64>,
    name: Option<String>,
    announcement: Option<String>,
    show_announcement: Option<bool>,
    is_completed: Option<bool>,
    suite_mode: Option<u8>,
    #[read_only]
    completed_on: Option<Timestamp>,
    #[read_only]
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::Resource;
    use serde_json::json;

    #[test]
    fn test_suite_mode_conversion() {
        let project = Project::default().with_suite_mode(SuiteMode::MultipleSuites);
        assert_eq!(project.suite_mode(), Some(3));
        assert_eq!(SuiteMode::try_from(2), Ok(SuiteMode::SingleSuiteWithBaselines));
        assert_eq!(SuiteMode::try_from(9), Err(9));
    }

    #[test]
    fn test_cleared_field_is_sent_as_null() {
        let mut project: Project = serde_json::from_value(json!({
            "id": 1,
            "name": "Datahub",
            "announcement": "Welcome",
            "completed_on": null,
            "url": "https://example.testrail.io/index.php?/projects/overview/1"
        }))
        .unwrap();
        assert!(project.dirty_fields().is_empty());

        project.clear_announcement();
        assert_eq!(
            serde_json::Value::Object(project.write_payload().unwrap()),
            json!({"announcement": null})
        );
    }
}
