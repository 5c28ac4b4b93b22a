use super::*;

#[test]
fn starts_empty() {
    let state = NoticeState::default();
    assert!(state.items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.success("Created");
    let second = state.error("Failed");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].level, NoticeLevel::Success);
    assert_eq!(state.items[1].level, NoticeLevel::Error);
    assert_eq!(state.items[1].text, "Failed");
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = NoticeState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.dismiss(first);
    let ids: Vec<_> = state.items.iter().map(|n| n.id).collect();
    assert_eq!(ids, [second]);
}

#[test]
fn dismiss_unknown_id_is_harmless() {
    let mut state = NoticeState::default();
    state.success("one");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let first = state.success("one");
    state.dismiss(first);
    let second = state.success("two");
    assert!(second > first);
}
