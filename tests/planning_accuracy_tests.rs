mod common;

use common::commitment;
use flowhealth::{planning_accuracy, PICommitmentRecord, RawFlag, ScopeSelector};
use pretty_assertions::assert_eq;

#[test]
fn test_five_committed_four_delivered_is_eighty_percent() {
    let records = vec![
        commitment("A-1", 1, RawFlag::Int(1)),
        commitment("A-2", 1, RawFlag::Text("1".to_string())),
        commitment("A-3", 1, RawFlag::Int(1)),
        commitment("A-4", 1, RawFlag::Text("1".to_string())),
        commitment("A-5", 1, RawFlag::Int(0)),
    ];

    let summary = planning_accuracy(&records, &ScopeSelector::default());
    assert_eq!(summary.committed_count, 5);
    assert_eq!(summary.delivered_count, 4);
    assert_eq!(summary.planning_accuracy, 80.0);
}

#[test]
fn test_delivery_flag_survives_type_drift() {
    // The same field arrives as int from one export and string from another;
    // both count as delivered
    let records = vec![
        commitment("A-1", 1, RawFlag::Int(1)),
        commitment("A-2", 1, RawFlag::Text(" 1 ".to_string())),
    ];
    let summary = planning_accuracy(&records, &ScopeSelector::default());
    assert_eq!(summary.planning_accuracy, 100.0);
}

#[test]
fn test_false_like_flags_never_count_as_delivered() {
    let records = vec![
        commitment("A-1", 1, RawFlag::Int(0)),
        commitment("A-2", 1, RawFlag::Text("0".to_string())),
        commitment("A-3", 1, RawFlag::Text("no".to_string())),
        commitment("A-4", 1, RawFlag::Absent),
    ];
    let summary = planning_accuracy(&records, &ScopeSelector::default());
    assert_eq!(summary.delivered_count, 0);
    assert_eq!(summary.planning_accuracy, 0.0);
}

#[test]
fn test_uncommitted_items_tracked_separately() {
    let records = vec![
        commitment("A-1", 1, RawFlag::Int(1)),
        commitment("A-2", 0, RawFlag::Int(1)),
        commitment("A-3", 0, RawFlag::Int(0)),
    ];
    let summary = planning_accuracy(&records, &ScopeSelector::default());
    assert_eq!(summary.committed_count, 1);
    assert_eq!(summary.uncommitted_count, 2);
    // Uncommitted deliveries never inflate accuracy
    assert_eq!(summary.planning_accuracy, 100.0);
}

#[test]
fn test_empty_scope_yields_zero_not_a_fault() {
    let records: Vec<PICommitmentRecord> = Vec::new();
    let summary = planning_accuracy(&records, &ScopeSelector::for_art("SAART"));
    assert_eq!(summary.planning_accuracy, 0.0);
}

#[test]
fn test_commitments_deserialize_with_mixed_flag_types() {
    let json = r#"[
        {"issue_key": "A-1", "art": "SAART", "team": "Falcons", "pi": "26Q1",
         "planned_committed": 1, "planned_uncommitted": 0, "plc_delivery": "1"},
        {"issue_key": "A-2", "art": "SAART", "team": "Falcons", "pi": "26Q1",
         "planned_committed": "1", "planned_uncommitted": null, "plc_delivery": 0}
    ]"#;
    let records: Vec<PICommitmentRecord> = serde_json::from_str(json).unwrap();

    let summary = planning_accuracy(&records, &ScopeSelector::default());
    assert_eq!(summary.committed_count, 2);
    assert_eq!(summary.delivered_count, 1);
    assert_eq!(summary.planning_accuracy, 50.0);
}
