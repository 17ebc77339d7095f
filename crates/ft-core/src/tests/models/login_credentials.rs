use crate::LoginCredentials;

#[test]
fn test_validate_accepts_non_blank_input() {
    let credentials = LoginCredentials::new("a@b.com", "pw");

    assert!(credentials.validate().is_ok());
}

#[test]
fn test_validate_rejects_blank_email() {
    let credentials = LoginCredentials::new("", "pw");

    let err = credentials.validate().unwrap_err();
    assert!(err.to_string().contains("Email and password cannot be empty"));
}

#[test]
fn test_validate_rejects_blank_password() {
    let credentials = LoginCredentials::new("a@b.com", "");

    assert!(credentials.validate().is_err());
}

#[test]
fn test_validate_rejects_whitespace_only_input() {
    let credentials = LoginCredentials::new("   ", "pw");

    assert!(credentials.validate().is_err());
}

#[test]
fn test_debug_redacts_password() {
    let credentials = LoginCredentials::new("a@b.com", "hunter2");

    let rendered = format!("{credentials:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}
