use super::*;

// =============================================================
// validate_signin_input
// =============================================================

#[test]
fn accepts_and_trims_a_valid_email() {
    assert_eq!(
        validate_signin_input("  admin@unipulse.edu  ", "secret"),
        Ok("admin@unipulse.edu".to_owned())
    );
}

#[test]
fn rejects_missing_email() {
    assert_eq!(
        validate_signin_input("   ", "secret"),
        Err("Please input your email!")
    );
}

#[test]
fn rejects_malformed_email() {
    for bad in ["admin", "admin@", "@unipulse.edu", "admin@edu", "a@.com", "a@com."] {
        assert_eq!(
            validate_signin_input(bad, "secret"),
            Err("Please enter a valid email!"),
            "{bad}"
        );
    }
}

#[test]
fn rejects_missing_password() {
    assert_eq!(
        validate_signin_input("admin@unipulse.edu", ""),
        Err("Please input your password!")
    );
}

// =============================================================
// looks_like_email
// =============================================================

#[test]
fn plausible_addresses_pass() {
    assert!(looks_like_email("a@b.com"));
    assert!(looks_like_email("first.last@sub.domain.org"));
}

#[test]
fn passwords_are_not_trimmed() {
    // Leading/trailing spaces are legal password characters.
    assert!(validate_signin_input("a@b.com", "  spaced  ").is_ok());
}
