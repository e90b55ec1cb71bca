/*
[INPUT]:  Mock controller responses
[OUTPUT]: Test results for CLI actions
[POS]:    Integration tests - command execution against a controller
[UPDATE]: When CLI actions change
*/

use alb_sdk::{ApiOptions, AviClient, ClientConfig, Credentials, PatchOp};
use albctl::commands::{self, Action};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn controller() -> (MockServer, AviClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "csrftoken=t; Path=/"))
        .mount(&server)
        .await;
    let config = ClientConfig::from_base_url(&server.uri()).expect("mock uri");
    let client = AviClient::new(config, Credentials::password("admin", "admin")).expect("client");
    (server, client)
}

#[tokio::test]
async fn list_with_cloud_filter() {
    let (server, client) = controller().await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("cloud_ref.name", "Default-Cloud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"name": "web-pool", "uuid": "pool-1"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let action = Action::List {
        options: ApiOptions::new().cloud("Default-Cloud"),
    };
    let value = assert_ok!(commands::execute(&client, "pool", action).await);
    assert_eq!(value, json!([{"name": "web-pool", "uuid": "pool-1"}]));
}

#[tokio::test]
async fn create_sends_normalized_document() {
    let (server, client) = controller().await;
    Mock::given(method("POST"))
        .and(path("/api/pool"))
        .and(body_json(json!({"name": "web-pool"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "web-pool",
            "uuid": "pool-1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let action = Action::Create {
        document: json!({"name": "web-pool", "servers": [], "bogus": true}),
        options: ApiOptions::new(),
    };
    let value = assert_ok!(commands::execute(&client, "pool", action).await);
    assert_eq!(value["uuid"], "pool-1");
}

#[tokio::test]
async fn create_rejects_invalid_document_before_sending() {
    let (server, client) = controller().await;
    let action = Action::Create {
        document: json!({"lb_algorithm": "LB_ALGORITHM_ROUND_ROBIN"}),
        options: ApiOptions::new(),
    };
    assert!(commands::execute(&client, "pool", action).await.is_err());
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.iter().all(|request| request.url.path() == "/login"));
}

#[tokio::test]
async fn patch_and_delete_by_name() {
    let (server, client) = controller().await;
    Mock::given(method("PATCH"))
        .and(path("/api/pool/pool-1"))
        .and(body_json(json!({"replace": {"enabled": false}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "web-pool",
            "uuid": "pool-1",
            "enabled": false,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("name", "web-pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"name": "web-pool", "uuid": "pool-1"}],
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/pool/pool-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let patch = Action::Patch {
        uuid: "pool-1".to_string(),
        op: PatchOp::Replace,
        document: json!({"enabled": false}),
        options: ApiOptions::new(),
    };
    let value = assert_ok!(commands::execute(&client, "pool", patch).await);
    assert_eq!(value["enabled"], false);

    let delete = Action::DeleteByName {
        name: "web-pool".to_string(),
        options: ApiOptions::new(),
    };
    let value = assert_ok!(commands::execute(&client, "pool", delete).await);
    assert!(value.is_null());
}

#[tokio::test]
async fn unknown_type_fails_without_requests() {
    let (server, client) = controller().await;
    let action = Action::List {
        options: ApiOptions::new(),
    };
    assert!(commands::execute(&client, "virtualservicex", action).await.is_err());
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(0));
}
