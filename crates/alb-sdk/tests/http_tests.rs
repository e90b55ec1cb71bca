/*
[INPUT]:  Mock controller responses
[OUTPUT]: Test results for the HTTP client
[POS]:    Integration tests - REST verbs, headers, paging and errors
[UPDATE]: When HTTP client behavior changes
*/

mod common;

use alb_sdk::{ApiOptions, AviError, Pool};
use common::{TEST_CSRF, client_for, mount_login, pool_json, setup_mock_server};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_requests_carry_controller_headers() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool/pool-1"))
        .and(header("X-Avi-Version", "22.1.3"))
        .and(header("X-Avi-Tenant", "admin"))
        .and(header("X-CSRFToken", TEST_CSRF))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pool: Pool = assert_ok!(client.get("api/pool/pool-1", &ApiOptions::new()).await);
    assert_eq!(pool.name, "web-pool");
    assert_eq!(pool.last_modified.as_deref(), Some("1700000000000000"));
    assert!(client.session().is_active());
}

#[tokio::test]
async fn test_tenant_override_header() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool/pool-1"))
        .and(header("X-Avi-Tenant", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ApiOptions::new().tenant("demo");
    let _pool: Pool = assert_ok!(client.get("api/pool/pool-1", &options).await);
}

#[tokio::test]
async fn test_unauthorized_triggers_single_relogin() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "csrftoken=fresh; Path=/"),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/pool/pool-1"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/pool/pool-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pool: Pool = assert_ok!(client.get("api/pool/pool-1", &ApiOptions::new()).await);
    assert_eq!(pool.uuid.as_deref(), Some("pool-1"));
}

#[tokio::test]
async fn test_persistent_unauthorized_is_reported() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get::<serde_json::Value>("api/pool", &ApiOptions::new())
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_error_body_is_mapped() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/pool"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Pool with this Name and Tenant already exists.",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = serde_json::json!({"name": "web-pool"});
    let err = client
        .post::<_, Pool>("api/pool", &body, &ApiOptions::new())
        .await
        .unwrap_err();
    match err {
        AviError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Pool with this Name and Tenant already exists.");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_collection_follows_next_links() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 3,
            "results": [pool_json("pool-3", "c")],
        })))
        .expect(1)
        .mount(&server)
        .await;
    // The next link names another host; the client must stay on the configured one.
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 3,
            "next": "https://10.0.0.99/api/pool?page=2&page_size=100",
            "results": [pool_json("pool-1", "a"), pool_json("pool-2", "b")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pools: Vec<Pool> = assert_ok!(client.get_collection("api/pool", &ApiOptions::new()).await);
    let names: Vec<_> = pools.iter().map(|pool| pool.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_collection_stops_on_repeated_next() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    let next = format!("{}/api/pool?page=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 10,
            "next": next,
            "results": [pool_json("pool-1", "a")],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pools: Vec<Pool> = assert_ok!(client.get_collection("api/pool", &ApiOptions::new()).await);
    assert_eq!(pools.len(), 2);
}

#[tokio::test]
async fn test_lookup_filters_reach_query() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("name", "web-pool"))
        .and(query_param("cloud_ref.name", "Default-Cloud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [pool_json("pool-1", "web-pool")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ApiOptions::new().cloud("Default-Cloud");
    let pool: Pool = assert_ok!(client.get_object_by_name("pool", "web-pool", &options).await);
    assert_eq!(pool.uuid.as_deref(), Some("pool-1"));
}

#[tokio::test]
async fn test_patch_wraps_body_in_operation() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/api/pool/pool-1"))
        .and(body_json(serde_json::json!({
            "add": {"servers": [{"ip": {"addr": "10.0.0.3", "type": "V4"}}]},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = serde_json::json!({"servers": [{"ip": {"addr": "10.0.0.3", "type": "V4"}}]});
    let _pool: Pool = assert_ok!(
        client
            .patch("api/pool/pool-1", alb_sdk::PatchOp::Add, &body, &ApiOptions::new())
            .await
    );
}

#[tokio::test]
async fn test_resolve_ref_by_uuid_and_name() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool/pool-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("name", "web-pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [pool_json("pool-1", "web-pool")],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let by_uuid: Pool = assert_ok!(
        client
            .resolve_ref("https://ctrl/api/pool/pool-1#web-pool")
            .await
    );
    let by_name: Pool = assert_ok!(client.resolve_ref("/api/pool?name=web-pool").await);
    assert_eq!(by_uuid, by_name);

    let err = client
        .resolve_ref::<Pool>("https://ctrl/api/cloud/cloud-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AviError::InvalidReference(_)));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.login().await);
    assert!(client.session().is_active());
    assert_ok!(client.logout().await);
    assert!(!client.session().is_active());
}
