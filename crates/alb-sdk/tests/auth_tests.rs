/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for the login flow
[POS]:    Integration tests - authentication
[UPDATE]: When login endpoints or session handling change
*/

mod common;

use alb_sdk::{AviClient, AviError, ClientConfig, Credentials};
use common::{TEST_CSRF, TEST_PASSWORD, TEST_USER, client_for, mount_login, setup_mock_server};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_login_posts_password_and_stores_csrf() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": TEST_USER,
            "password": TEST_PASSWORD,
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("csrftoken={TEST_CSRF}; Path=/").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.login().await);

    let token = client.session().token().expect("session should be set");
    assert_eq!(token.username, TEST_USER);
    assert_eq!(token.csrf_token.as_deref(), Some(TEST_CSRF));
}

#[tokio::test]
async fn test_login_with_auth_token() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": "automation",
            "token": "tok-123",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = assert_ok!(ClientConfig::from_base_url(&server.uri()));
    let client = assert_ok!(AviClient::new(config, Credentials::token("automation", "tok-123")));
    assert_ok!(client.login().await);
    assert!(client.session().is_active());
    assert!(client.session().csrf_token().is_none());
}

#[tokio::test]
async fn test_rejected_login_is_authentication_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Invalid credentials",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login().await.unwrap_err();
    match err {
        AviError::Authentication { message } => assert!(message.contains("Invalid credentials")),
        other => panic!("Expected Authentication error, got {other:?}"),
    }
    assert!(!client.session().is_active());
}

#[tokio::test]
async fn test_first_request_logs_in_once() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("csrftoken={TEST_CSRF}; Path=/").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tenant"))
        .and(header("X-CSRFToken", TEST_CSRF))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 0,
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let clone = client.clone();
    let options = alb_sdk::ApiOptions::new();
    let _: serde_json::Value = assert_ok!(client.get("api/tenant", &options).await);
    let _: serde_json::Value = assert_ok!(clone.get("api/tenant", &options).await);
}

#[tokio::test]
async fn test_logout_without_session_is_noop() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    let client = client_for(&server);
    assert_ok!(client.logout().await);
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(0));
}
