use super::*;

// =============================================================
// Encoding invariant
// =============================================================

#[test]
fn multipart_iff_file_field() {
    for descriptor in ALL {
        let multipart = descriptor.encoding == Encoding::Multipart;
        assert_eq!(
            multipart,
            descriptor.has_file_field(),
            "{} encoding disagrees with its field set",
            descriptor.endpoint
        );
    }
}

#[test]
fn upload_dir_present_iff_file_field() {
    for descriptor in ALL {
        assert_eq!(descriptor.upload_dir.is_some(), descriptor.has_file_field());
    }
}

// =============================================================
// Per-resource shapes
// =============================================================

#[test]
fn announcements_are_json_patched() {
    assert_eq!(ANNOUNCEMENTS.endpoint, "/announcements");
    assert_eq!(ANNOUNCEMENTS.encoding, Encoding::Json);
    assert_eq!(ANNOUNCEMENTS.update_method, UpdateMethod::Patch);
    let names: Vec<_> = ANNOUNCEMENTS.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["headline", "body"]);
    assert!(ANNOUNCEMENTS.fields.iter().all(|f| f.required));
}

#[test]
fn events_carry_file_and_date() {
    assert_eq!(EVENTS.endpoint, "/events");
    assert_eq!(EVENTS.update_method, UpdateMethod::Put);
    assert!(EVENTS.has_file_field());
    assert!(EVENTS.has_date_field());
    assert_eq!(EVENTS.file_field().map(|f| f.name), Some("image"));
    assert_eq!(EVENTS.upload_dir, Some("events"));
    // The upload itself is optional; everything else is required.
    for field in EVENTS.fields {
        assert_eq!(field.required, field.kind != FieldKind::File, "{}", field.name);
    }
}

#[test]
fn forums_carry_optional_logo() {
    assert_eq!(FORUMS.endpoint, "/forums");
    assert_eq!(FORUMS.update_method, UpdateMethod::Put);
    assert_eq!(FORUMS.file_field().map(|f| f.name), Some("logo"));
    assert_eq!(FORUMS.upload_dir, Some("forums"));
    assert!(!FORUMS.has_date_field());
}

#[test]
fn nouns_agree_across_forms() {
    for descriptor in ALL {
        assert_eq!(descriptor.noun_title.to_lowercase(), descriptor.noun);
        assert!(descriptor.noun_plural.starts_with(descriptor.noun));
        assert!(descriptor.title.to_lowercase().contains(descriptor.noun_plural));
    }
}

#[test]
fn field_names_are_unique_per_resource() {
    for descriptor in ALL {
        for (i, a) in descriptor.fields.iter().enumerate() {
            for b in &descriptor.fields[i + 1..] {
                assert_ne!(a.name, b.name, "{}", descriptor.endpoint);
            }
        }
    }
}

// =============================================================
// Validation messages
// =============================================================

#[test]
fn required_messages_follow_field_kind() {
    let headline = &ANNOUNCEMENTS.fields[0];
    assert_eq!(headline.required_message(), "Please enter the headline");

    let event_at = EVENTS
        .fields
        .iter()
        .find(|f| f.kind == FieldKind::Date)
        .unwrap();
    assert_eq!(event_at.required_message(), "Please choose a date");

    let logo = FORUMS.file_field().unwrap();
    assert_eq!(logo.required_message(), "Please attach a logo");
}
