use super::*;
use crate::resource::descriptor::ANNOUNCEMENTS;
use crate::resource::list::ListState;
use crate::resource::record::ResourceRecord;

// =============================================================
// State machine transitions
// =============================================================

#[test]
fn starts_idle() {
    let flow = DeleteFlow::default();
    assert_eq!(flow, DeleteFlow::Idle);
    assert_eq!(flow.confirming_id(), None);
    assert!(!flow.is_deleting());
}

#[test]
fn request_enters_confirming() {
    let mut flow = DeleteFlow::default();
    flow.request(2);
    assert_eq!(flow.confirming_id(), Some(2));
}

#[test]
fn cancel_returns_to_idle_without_yielding_an_id() {
    let mut flow = DeleteFlow::default();
    flow.request(2);
    flow.cancel();
    assert_eq!(flow, DeleteFlow::Idle);
    // A cancelled dialog can never produce a request to send.
    assert_eq!(flow.confirm(), None);
}

#[test]
fn confirm_yields_the_id_exactly_once() {
    let mut flow = DeleteFlow::default();
    flow.request(5);
    assert_eq!(flow.confirm(), Some(5));
    assert!(flow.is_deleting());
    // A second confirm while in flight is a no-op.
    assert_eq!(flow.confirm(), None);
    assert!(flow.is_deleting());
}

#[test]
fn confirm_from_idle_is_a_no_op() {
    let mut flow = DeleteFlow::default();
    assert_eq!(flow.confirm(), None);
    assert_eq!(flow, DeleteFlow::Idle);
}

#[test]
fn settle_returns_to_idle_from_deleting() {
    let mut flow = DeleteFlow::default();
    flow.request(5);
    flow.confirm();
    flow.settle();
    assert_eq!(flow, DeleteFlow::Idle);
    assert!(!flow.is_deleting());
}

// =============================================================
// Request shape
// =============================================================

#[test]
fn delete_request_targets_the_record_path() {
    let spec = delete_request(&ANNOUNCEMENTS, 1);
    assert_eq!(spec.method, Method::Delete);
    assert_eq!(spec.path, "/announcements/1");
    assert!(spec.body.is_none());
}

// =============================================================
// Failure leaves the list untouched
// =============================================================

#[test]
fn failed_delete_keeps_record_in_list() {
    let items: Vec<ResourceRecord> = serde_json::from_value(serde_json::json!([
        { "id": 1, "headline": "A" },
        { "id": 2, "headline": "B" }
    ]))
    .unwrap();
    let mut list = ListState::default();
    list.finish_load(items);

    let mut flow = DeleteFlow::default();
    flow.request(1);
    assert_eq!(flow.confirm(), Some(1));
    // Server rejects the delete: the flow settles and no list refresh runs,
    // so the record stays visible.
    flow.settle();
    assert_eq!(flow, DeleteFlow::Idle);
    assert!(list.items.iter().any(|r| r.id() == Some(1)));
    assert_eq!(list.items.len(), 2);
}
