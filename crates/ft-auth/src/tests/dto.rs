use crate::LoginResponse;

#[test]
fn test_decode_full_response() {
    let json = r#"{
        "token": "t1",
        "user": {
            "id": "1",
            "username": "dhimas",
            "email": "a@b.com",
            "createdAt": 1704067200,
            "updatedAt": 1704067200
        }
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.token, "t1");
    assert_eq!(response.user.id, "1");
    assert_eq!(response.user.username.as_deref(), Some("dhimas"));
    assert_eq!(response.user.created_at, Some(1704067200));
}

#[test]
fn test_decode_minimal_response() {
    // Older server revisions send only id and email on the user object.
    let json = r#"{"token": "t1", "user": {"id": "1", "email": "a@b.com"}}"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.user.username, None);
    assert_eq!(response.user.created_at, None);
    assert_eq!(response.user.updated_at, None);
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let json = r#"{"token": "t1", "user": {"id": "1", "email": "a@b.com", "role": "admin"}}"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.user.email, "a@b.com");
}

#[test]
fn test_into_user_attaches_token() {
    let json = r#"{
        "token": "t1",
        "user": {
            "id": "1",
            "email": "a@b.com",
            "createdAt": 1704067200,
            "updatedAt": 1704067201
        }
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();
    let user = response.into_user();

    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.access_token.as_deref(), Some("t1"));
    assert_eq!(user.created_at.timestamp(), 1704067200);
    assert_eq!(user.updated_at.timestamp(), 1704067201);
}

#[test]
fn test_into_user_defaults_missing_timestamps_to_now() {
    let json = r#"{"token": "t1", "user": {"id": "1", "email": "a@b.com"}}"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();
    let before = chrono::Utc::now();
    let user = response.into_user();

    assert!(user.created_at >= before);
    assert_eq!(user.created_at, user.updated_at);
}
