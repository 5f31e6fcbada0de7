//! Property tests for dirty tracking, id-list encoding and list decoding

use proptest::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::BTreeSet;
use testrail_client::Resource;
use testrail_client::client::{ListOf, ResponseKind};
use testrail_client::codec::{decode_ids, encode_ids};
use testrail_client::models::{Case, Run};

/// Assign one writable field of a case, returning its wire name
fn assign(case: &mut Case, field: usize, value: u64) -> &'static str {
    match field % 7 {
        0 => {
            case.set_title(format!("Case {}", value));
            "title"
        }
        1 => {
            case.set_type_id(value);
            "type_id"
        }
        2 => {
            case.set_priority_id(value);
            "priority_id"
        }
        3 => {
            case.set_milestone_id(value);
            "milestone_id"
        }
        4 => {
            case.set_refs(format!("RF-{}", value));
            "refs"
        }
        5 => {
            case.clear_estimate();
            "estimate"
        }
        _ => {
            case.set_template_id(value);
            "template_id"
        }
    }
}

fn case_json() -> impl Strategy<Value = Value> {
    (
        1..10_000u64,
        1..500u64,
        "[A-Za-z ]{1,40}",
        proptest::option::of(1..10u64),
        proptest::option::of(0..2_000_000_000i64),
    )
        .prop_map(|(id, section_id, title, priority_id, created_on)| {
            json!({
                "id": id,
                "section_id": section_id,
                "title": title,
                "priority_id": priority_id,
                "created_on": created_on,
                "custom_steps": "ignored"
            })
        })
}

#[derive(Debug, Deserialize)]
struct Item {
    id: u64,
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A hydrated model has nothing to send.
    #[test]
    fn prop_hydrated_models_are_clean(body in case_json()) {
        let case: Case = serde_json::from_value(body).unwrap();
        prop_assert!(case.dirty_fields().is_empty());
        prop_assert!(case.write_payload().unwrap().is_empty());
    }

    /// The payload holds exactly the assigned fields, whatever the order or
    /// number of reassignments.
    #[test]
    fn prop_payload_matches_assigned_fields(
        assignments in proptest::collection::vec((0..7usize, 1..1000u64), 0..30)
    ) {
        let mut case = Case::default().with_id(1u64).with_section_id(2u64);
        let mut expected = BTreeSet::new();
        for (field, value) in assignments {
            expected.insert(assign(&mut case, field, value));
        }

        let payload = case.write_payload().unwrap();
        let sent: BTreeSet<&str> = payload.keys().map(String::as_str).collect();
        prop_assert_eq!(sent, expected);
        prop_assert!(!payload.contains_key("id"));
        prop_assert!(!payload.contains_key("section_id"));
    }

    /// Reset and clone both start a fresh record.
    #[test]
    fn prop_reset_and_clone_clear_the_record(
        assignments in proptest::collection::vec((0..7usize, 1..1000u64), 1..10)
    ) {
        let mut case = Case::default();
        for (field, value) in assignments {
            assign(&mut case, field, value);
        }
        prop_assert!(!case.dirty_fields().is_empty());

        let copy = case.clone();
        prop_assert!(copy.dirty_fields().is_empty());
        prop_assert_eq!(copy.title(), case.title());

        case.reset();
        prop_assert!(case.write_payload().unwrap().is_empty());
    }

    #[test]
    fn prop_id_list_round_trip(ids in proptest::collection::vec(any::<u64>(), 0..50)) {
        let encoded = encode_ids(&ids);
        prop_assert_eq!(decode_ids(&encoded).unwrap(), ids);
    }

    #[test]
    fn prop_list_decode_preserves_order(ids in proptest::collection::vec(any::<u64>(), 0..50)) {
        let body = Value::Array(ids.iter().map(|id| json!({"id": id})).collect());
        let bytes = serde_json::to_vec(&body).unwrap();

        let decoded = ListOf::<Item>::decode(&bytes).unwrap();
        prop_assert_eq!(decoded.into_iter().map(|item| item.id).collect::<Vec<_>>(), ids);
    }

    /// Identifier lists in bodies keep order and duplicates.
    #[test]
    fn prop_run_case_ids_sent_verbatim(ids in proptest::collection::vec(1..100u64, 1..20)) {
        let run = Run::default().with_case_ids(ids.clone());
        let payload = run.write_payload().unwrap();
        prop_assert_eq!(payload.get("case_ids"), Some(&json!(ids)));
    }
}
