//! Integration tests for the auth client using wiremock mock server

use ft_auth::AuthClient;
use ft_config::ApiConfig;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

fn api_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        api_key: None,
        timeout_secs: 30,
    }
}

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("a@b.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": {
                "id": "1",
                "username": "dhimas",
                "email": "a@b.com",
                "createdAt": 1704067200,
                "updatedAt": 1704067200
            }
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&api_config(mock_server.uri())).unwrap();
    let response = client.login("a@b.com", "pw").await.unwrap();

    assert_eq!(response.token, "t1");
    assert_eq!(response.user.id, "1");
    assert_eq!(response.user.email, "a@b.com");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": "UNAUTHORIZED",
                "message": "Invalid email or password"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&api_config(mock_server.uri())).unwrap();
    let result = client.login("a@b.com", "wrong").await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid email or password"));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_login_error_without_body_uses_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&api_config(mock_server.uri())).unwrap();
    let result = client.login("a@b.com", "pw").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("500"));
}

#[tokio::test]
async fn test_api_key_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("X-Api-Key", "debug_key_12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": {"id": "1", "email": "a@b.com"}
        })))
        .mount(&mock_server)
        .await;

    let config = ApiConfig {
        base_url: mock_server.uri(),
        api_key: Some("debug_key_12345".to_string()),
        timeout_secs: 30,
    };

    let client = AuthClient::new(&config).unwrap();
    let result = client.login("a@b.com", "pw").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_trimmed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": {"id": "1", "email": "a@b.com"}
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&api_config(format!("{}/", mock_server.uri()))).unwrap();
    let result = client.login("a@b.com", "pw").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_malformed_success_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&api_config(mock_server.uri())).unwrap();
    let result = client.login("a@b.com", "pw").await;

    assert!(result.is_err());
}
