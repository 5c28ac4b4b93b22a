use super::*;

// =============================================================
// URL composition
// =============================================================

#[test]
fn request_url_joins_base_and_path() {
    assert_eq!(request_url("/announcements"), "/api/announcements");
    assert_eq!(request_url("/events/4"), "/api/events/4");
}

#[test]
fn signin_path_sits_under_the_api_base() {
    assert_eq!(request_url(SIGNIN_PATH), "/api/auth/admin-signin");
}

#[test]
fn bearer_value_formats_the_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

// =============================================================
// Asset URLs
// =============================================================

#[test]
fn asset_path_composes_upload_location() {
    assert_eq!(
        asset_path("forums", "general.png"),
        "/public/uploads/forums/general.png"
    );
}

#[test]
fn public_asset_url_is_origin_relative_outside_the_browser() {
    assert_eq!(
        public_asset_url("events", "poster.png"),
        "/public/uploads/events/poster.png"
    );
}
