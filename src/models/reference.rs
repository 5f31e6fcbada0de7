//! Read-only reference data

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A custom case field definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseField {
    pub id: u64,
    pub name: String,
    pub system_name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub type_id: u64,
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Per-project field contexts and options, kept as raw JSON
    #[serde(default)]
    pub configs: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseType {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
}

/// A configuration option, e.g. "Firefox" in the "Browsers" group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: u64,
    pub name: String,
    pub group_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationGroup {
    pub id: u64,
    pub name: String,
    pub project_id: u64,
    #[serde(default)]
    pub configs: Vec<Configuration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub priority: u32,
}

/// A custom result field definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultField {
    pub id: u64,
    pub name: String,
    pub system_name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub type_id: u64,
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub configs: Vec<Value>,
}

/// A result status such as "Passed" or "Blocked"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: u64,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub color_dark: Option<u32>,
    #[serde(default)]
    pub color_medium: Option<u32>,
    #[serde(default)]
    pub color_bright: Option<u32>,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub is_untested: bool,
    #[serde(default)]
    pub is_final: bool,
}

/// A test: one case instantiated in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: u64,
    pub case_id: u64,
    pub run_id: u64,
    pub title: String,
    #[serde(default)]
    pub status_id: Option<u64>,
    #[serde(default)]
    pub assignedto_id: Option<u64>,
    #[serde(default)]
    pub template_id: Option<u64>,
    #[serde(default)]
    pub type_id: Option<u64>,
    #[serde(default)]
    pub priority_id: Option<u64>,
    #[serde(default)]
    pub milestone_id: Option<u64>,
    #[serde(default)]
    pub estimate: Option<String>,
    #[serde(default)]
    pub estimate_forecast: Option<String>,
    #[serde(default)]
    pub refs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_configuration_group_nesting() {
        let group: ConfigurationGroup = serde_json::from_value(json!({
            "id": 1,
            "name": "Browsers",
            "project_id": 1,
            "configs": [
                {"id": 1, "name": "Chrome", "group_id": 1},
                {"id": 2, "name": "Firefox", "group_id": 1}
            ]
        }))
        .unwrap();

        assert_eq!(group.configs.len(), 2);
        assert_eq!(group.configs[1].name, "Firefox");
    }

    #[test]
    fn test_status_defaults() {
        let status: Status =
            serde_json::from_value(json!({"id": 1, "name": "passed", "label": "Passed"})).unwrap();
        assert!(!status.is_final);
        assert_eq!(status.color_dark, None);
    }
}
