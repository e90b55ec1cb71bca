/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for alb-sdk tests

#![allow(dead_code)]

use alb_sdk::{AviClient, ClientConfig, Credentials};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_CSRF: &str = "csrf-test-token";
pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "avi123";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock controller
pub fn client_for(server: &MockServer) -> AviClient {
    let config = ClientConfig::from_base_url(&server.uri())
        .expect("mock server uri")
        .with_version("22.1.3");
    AviClient::new(config, Credentials::password(TEST_USER, TEST_PASSWORD))
        .expect("client init")
}

/// Accept logins and hand out the test CSRF token
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("csrftoken={TEST_CSRF}; Path=/").as_str())
                .set_body_json(serde_json::json!({"user": {"username": TEST_USER}})),
        )
        .mount(server)
        .await;
}

/// Minimal pool document as the controller returns it
pub fn pool_json(uuid: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "uuid": uuid,
        "name": name,
        "url": format!("https://ctrl/api/pool/{uuid}"),
        "tenant_ref": "https://ctrl/api/tenant/admin#admin",
        "cloud_ref": "https://ctrl/api/cloud/cloud-1#Default-Cloud",
        "lb_algorithm": "LB_ALGORITHM_LEAST_CONNECTIONS",
        "_last_modified": "1700000000000000",
    })
}
