/*
[INPUT]:  Mock controller collections and objects
[OUTPUT]: Test results for typed resource operations
[POS]:    Integration tests - per-type CRUD
[UPDATE]: When ResourceClient operations change
*/

mod common;

use alb_sdk::{ApiOptions, AviError, IpAddr, PatchOp, Pool, Server, TechSupportProfile};
use common::{client_for, mount_login, pool_json, setup_mock_server};
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_all_pools() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "results": [pool_json("pool-1", "a"), pool_json("pool-2", "b")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pools = assert_ok!(client.resource::<Pool>().get_all(&ApiOptions::new()).await);
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[1].uuid.as_deref(), Some("pool-2"));
}

#[tokio::test]
async fn test_get_unnamed_resource_by_uuid() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/techsupportprofile/tsp-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": "tsp-1",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profile = assert_ok!(
        client
            .resource::<TechSupportProfile>()
            .get("tsp-1", &ApiOptions::new())
            .await
    );
    assert_eq!(profile.uuid.as_deref(), Some("tsp-1"));
}

#[rstest]
#[case(serde_json::json!([]), "not found")]
#[case(serde_json::json!([pool_json("pool-1", "dup"), pool_json("pool-2", "dup")]), "multiple")]
#[tokio::test]
async fn test_get_by_name_requires_exactly_one(
    #[case] results: serde_json::Value,
    #[case] expected: &str,
) {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("name", "dup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": results.as_array().map_or(0, Vec::len),
            "results": results,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .resource::<Pool>()
        .get_by_name("dup", &ApiOptions::new())
        .await
        .unwrap_err();
    match (expected, err) {
        ("not found", AviError::NotFound { object_type, name }) => {
            assert_eq!(object_type, "pool");
            assert_eq!(name, "dup");
        }
        ("multiple", AviError::MultipleFound { count, .. }) => assert_eq!(count, 2),
        (_, other) => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_create_posts_only_set_fields() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/pool"))
        .and(body_json(serde_json::json!({
            "name": "web-pool",
            "servers": [{"ip": {"addr": "10.0.0.1", "type": "V4"}, "port": 80}],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(pool_json("pool-9", "web-pool")))
        .expect(1)
        .mount(&server)
        .await;

    let pool = Pool {
        name: "web-pool".to_string(),
        servers: vec![Server {
            ip: IpAddr::v4("10.0.0.1"),
            port: Some(80),
            ..Default::default()
        }],
        ..Default::default()
    };
    let client = client_for(&server);
    let created = assert_ok!(client.resource::<Pool>().create(&pool, &ApiOptions::new()).await);
    assert_eq!(created.uuid.as_deref(), Some("pool-9"));
}

#[tokio::test]
async fn test_update_puts_to_object_path() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/pool/pool-1"))
        .and(body_partial_json(serde_json::json!({
            "uuid": "pool-1",
            "lb_algorithm": "LB_ALGORITHM_ROUND_ROBIN",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pool = Pool {
        name: "web-pool".to_string(),
        uuid: Some("pool-1".to_string()),
        lb_algorithm: Some("LB_ALGORITHM_ROUND_ROBIN".to_string()),
        ..Default::default()
    };
    assert_ok!(client.resource::<Pool>().update(&pool, &ApiOptions::new()).await);
}

#[tokio::test]
async fn test_update_without_uuid_fails_locally() {
    let server = setup_mock_server().await;
    let client = client_for(&server);
    let pool = Pool {
        name: "web-pool".to_string(),
        ..Default::default()
    };
    let err = client
        .resource::<Pool>()
        .update(&pool, &ApiOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AviError::MissingUuid { object_type } if object_type == "pool"));
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(0));
}

#[tokio::test]
async fn test_patch_delete_operation() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/api/pool/pool-1"))
        .and(body_json(serde_json::json!({
            "delete": {"health_monitor_refs": ["/api/healthmonitor?name=System-HTTP"]},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("pool-1", "web-pool")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = serde_json::json!({
        "health_monitor_refs": ["/api/healthmonitor?name=System-HTTP"],
    });
    assert_ok!(
        client
            .resource::<Pool>()
            .patch("pool-1", PatchOp::Delete, &body, &ApiOptions::new())
            .await
    );
}

#[tokio::test]
async fn test_delete_by_name() {
    let server = setup_mock_server().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/pool"))
        .and(query_param("name", "web-pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [pool_json("pool-1", "web-pool")],
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/pool/pool-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(
        client
            .resource::<Pool>()
            .delete_by_name("web-pool", &ApiOptions::new())
            .await
    );
}
