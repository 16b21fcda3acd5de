mod common;

use common::{q1_window, RecordBuilder};
use flowhealth::{FilteredPopulation, ScopeSelector, Stage};

#[test]
fn test_art_selector_is_case_insensitive_both_ways() {
    let records = vec![
        RecordBuilder::new("A-1").art("saart").build(),
        RecordBuilder::new("A-2").art("SAART").build(),
        RecordBuilder::new("A-3").art("Midway").build(),
    ];
    let selector = ScopeSelector::for_art("SAART");
    let population = FilteredPopulation::build(records, &selector, &q1_window()).unwrap();

    assert_eq!(population.len(), 2);
}

#[test]
fn test_selector_values_are_trimmed() {
    let records = vec![RecordBuilder::new("A-1").team(" Falcons ").build()];
    let selector = ScopeSelector::for_team("falcons");
    let population = FilteredPopulation::build(records, &selector, &q1_window()).unwrap();

    assert_eq!(population.len(), 1);
}

#[test]
fn test_all_three_axes_must_match() {
    let records = vec![
        RecordBuilder::new("A-1").art("SAART").team("Falcons").pi("26Q1").build(),
        RecordBuilder::new("A-2").art("SAART").team("Eagles").pi("26Q1").build(),
    ];
    let mut selector = ScopeSelector::for_art("saart").with_pi("26q1");
    selector.teams = vec!["falcons".to_string()];

    let population = FilteredPopulation::build(records, &selector, &q1_window()).unwrap();
    assert_eq!(population.len(), 1);
    assert_eq!(population.records()[0].issue_key, "A-1");
}

#[test]
fn test_window_filtering_uses_resolved_date() {
    let records = vec![
        RecordBuilder::new("A-1").resolved(2026, 1, 7).build(),
        RecordBuilder::new("A-2").resolved(2025, 11, 1).build(),
        RecordBuilder::new("A-3").build(), // still in flight
    ];
    let population =
        FilteredPopulation::build(records, &ScopeSelector::default(), &q1_window()).unwrap();

    let keys: Vec<&str> = population
        .records()
        .iter()
        .map(|r| r.issue_key.as_str())
        .collect();
    assert_eq!(keys, ["A-1", "A-3"]);
}

#[test]
fn test_population_remembers_its_filter() {
    let selector = ScopeSelector::for_art("SAART");
    let window = q1_window();
    let population = FilteredPopulation::build(
        vec![RecordBuilder::new("A-1").build()],
        &selector,
        &window,
    )
    .unwrap();

    assert_eq!(population.selector(), &selector);
    assert_eq!(population.window(), &window);
}

#[test]
fn test_invalid_record_rejected_at_the_boundary() {
    let records = vec![RecordBuilder::new("A-1").stage(Stage::InSit, -4.0).build()];
    let result = FilteredPopulation::build(records, &ScopeSelector::default(), &q1_window());
    assert!(result.is_err());
}
