use super::*;

fn records(json: serde_json::Value) -> Vec<ResourceRecord> {
    serde_json::from_value(json).unwrap()
}

#[test]
fn starts_empty_and_idle() {
    let state = ListState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_load_sets_loading() {
    let mut state = ListState::default();
    state.begin_load();
    assert!(state.loading);
}

#[test]
fn finish_load_replaces_items_wholesale() {
    let mut state = ListState::default();
    state.finish_load(records(serde_json::json!([{ "id": 1 }, { "id": 2 }])));

    state.begin_load();
    state.finish_load(records(serde_json::json!([{ "id": 3 }])));

    assert!(!state.loading);
    let ids: Vec<_> = state.items.iter().map(|r| r.id()).collect();
    assert_eq!(ids, [Some(3)]);
}

#[test]
fn fail_load_keeps_stale_items() {
    let mut state = ListState::default();
    state.finish_load(records(serde_json::json!([{ "id": 1 }])));

    state.begin_load();
    state.fail_load();

    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id(), Some(1));
}
