use crate::User;

#[test]
fn test_user_new() {
    let user = User::new("1".to_string(), "a@b.com".to_string());

    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.username, None);
    assert_eq!(user.access_token, None);
    assert_eq!(user.created_at, user.updated_at);
    assert!(!user.is_authenticated());
}

#[test]
fn test_user_with_access_token() {
    let user = User::new("1".to_string(), "a@b.com".to_string())
        .with_access_token("t1".to_string());

    assert_eq!(user.access_token.as_deref(), Some("t1"));
    assert!(user.is_authenticated());
}

#[test]
fn test_display_name_prefers_username() {
    let mut user = User::new("1".to_string(), "a@b.com".to_string());
    assert_eq!(user.display_name(), "a@b.com");

    user.username = Some("dhimas".to_string());
    assert_eq!(user.display_name(), "dhimas");
}
