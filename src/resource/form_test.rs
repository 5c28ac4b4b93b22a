use super::*;
use crate::resource::descriptor::{ANNOUNCEMENTS, EVENTS, FORUMS};

fn record(value: serde_json::Value) -> ResourceRecord {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// open_for_create
// =============================================================

#[test]
fn create_session_starts_blank_and_visible() {
    let session = FormSession::open_for_create(&ANNOUNCEMENTS);
    assert_eq!(session.mode, FormMode::Create);
    assert!(session.target.is_none());
    assert!(session.visible);
    assert!(!session.submitting);
    assert_eq!(session.text("headline"), "");
    assert_eq!(session.text("body"), "");
    assert!(session.errors.is_empty());
}

#[test]
fn create_session_file_field_has_no_selection() {
    let session = FormSession::open_for_create(&FORUMS);
    assert_eq!(session.file("logo"), FileSelection::None);
}

// =============================================================
// open_for_edit
// =============================================================

#[test]
fn edit_session_seeds_every_descriptor_field() {
    let session = FormSession::open_for_edit(
        &EVENTS,
        record(serde_json::json!({
            "id": 9,
            "title": "Open day",
            "image": "open-day.png",
            "body": "All welcome",
            "eventAt": "2026-09-12",
            "createdAt": "2026-08-01T00:00:00Z"
        })),
    );
    assert_eq!(session.mode, FormMode::Edit);
    assert_eq!(session.target_id(), Some(9));
    assert!(session.visible);
    assert_eq!(session.text("title"), "Open day");
    assert_eq!(session.text("body"), "All welcome");
    assert_eq!(session.text("eventAt"), "2026-09-12");
    assert_eq!(
        session.file("image"),
        FileSelection::Remote { filename: "open-day.png".to_owned() }
    );
}

#[test]
fn edit_session_without_upload_has_no_file_selection() {
    let session = FormSession::open_for_edit(
        &FORUMS,
        record(serde_json::json!({ "id": 3, "name": "General", "logo": "" })),
    );
    assert_eq!(session.file("logo"), FileSelection::None);
}

#[test]
fn target_present_iff_edit_mode() {
    let create = FormSession::open_for_create(&ANNOUNCEMENTS);
    assert!(matches!(create.mode, FormMode::Create) && create.target.is_none());

    let edit = FormSession::open_for_edit(&ANNOUNCEMENTS, record(serde_json::json!({ "id": 1 })));
    assert!(matches!(edit.mode, FormMode::Edit) && edit.target.is_some());
}

// =============================================================
// close / set_field
// =============================================================

#[test]
fn close_hides_but_keeps_values() {
    let mut session = FormSession::open_for_create(&ANNOUNCEMENTS);
    session.set_field("headline", FieldValue::Text("Draft".to_owned()));
    session.close();
    assert!(!session.visible);
    assert_eq!(session.text("headline"), "Draft");
}

#[test]
fn set_field_clears_that_fields_error() {
    let mut session = FormSession::open_for_create(&ANNOUNCEMENTS);
    assert!(!session.validate(&ANNOUNCEMENTS));
    assert!(session.errors.contains_key("headline"));
    assert!(session.errors.contains_key("body"));

    session.set_field("headline", FieldValue::Text("News".to_owned()));
    assert!(!session.errors.contains_key("headline"));
    assert!(session.errors.contains_key("body"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_blocks_on_empty_required_field() {
    let mut session = FormSession::open_for_create(&ANNOUNCEMENTS);
    session.set_field("headline", FieldValue::Text("News".to_owned()));
    assert!(!session.validate(&ANNOUNCEMENTS));
    assert_eq!(
        session.errors.get("body").map(String::as_str),
        Some("Please enter the body")
    );
}

#[test]
fn validate_treats_whitespace_as_empty() {
    let mut session = FormSession::open_for_create(&ANNOUNCEMENTS);
    session.set_field("headline", FieldValue::Text("   ".to_owned()));
    session.set_field("body", FieldValue::Text("b".to_owned()));
    assert!(!session.validate(&ANNOUNCEMENTS));
    assert!(session.errors.contains_key("headline"));
}

#[test]
fn validate_passes_with_all_required_fields_set() {
    let mut session = FormSession::open_for_create(&EVENTS);
    session.set_field("title", FieldValue::Text("Open day".to_owned()));
    session.set_field("body", FieldValue::Text("All welcome".to_owned()));
    session.set_field("eventAt", FieldValue::Text("2026-09-12".to_owned()));
    // Image stays unattached; uploads are optional.
    assert!(session.validate(&EVENTS));
    assert!(session.errors.is_empty());
}

#[test]
fn validate_reports_date_fields_with_date_wording() {
    let mut session = FormSession::open_for_create(&EVENTS);
    session.set_field("title", FieldValue::Text("t".to_owned()));
    session.set_field("body", FieldValue::Text("b".to_owned()));
    assert!(!session.validate(&EVENTS));
    assert_eq!(
        session.errors.get("eventAt").map(String::as_str),
        Some("Please choose a date")
    );
}

#[test]
fn revalidation_drops_fixed_errors() {
    let mut session = FormSession::open_for_create(&ANNOUNCEMENTS);
    assert!(!session.validate(&ANNOUNCEMENTS));
    session.set_field("headline", FieldValue::Text("h".to_owned()));
    session.set_field("body", FieldValue::Text("b".to_owned()));
    assert!(session.validate(&ANNOUNCEMENTS));
    assert!(session.errors.is_empty());
}
