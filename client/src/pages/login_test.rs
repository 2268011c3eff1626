use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  admin@expo.test ", " secret "),
        Ok(("admin@expo.test".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.c", "  secret "),
        Ok(("a@b.c".to_owned(), "  secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("admin@expo.test", "   "), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("admin", "secret"), Err("Enter a valid email address."));
}
