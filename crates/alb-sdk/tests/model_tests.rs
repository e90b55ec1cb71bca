/*
[INPUT]:  Controller JSON documents and hand-built model values
[OUTPUT]: Test results for wire encoding of the models
[POS]:    Integration tests - serde behavior of the data layer
[UPDATE]: When model encoding rules change
*/

use alb_sdk::{
    ApiResponse, FailAction, Gslb, IpAddr, OBJECT_TYPES, ObjectRef, Pool, Resource,
    ResourceVisitor, Server, ViMgrSeVmRuntime, visit_resource,
};
use rstest::rstest;
use serde_json::{Value, json};
use tokio_test::assert_ok;

fn web_pool() -> Pool {
    Pool {
        name: "web-pool".to_string(),
        lb_algorithm: Some("LB_ALGORITHM_ROUND_ROBIN".to_string()),
        servers: vec![
            Server {
                ip: IpAddr::v4("10.0.0.1"),
                port: Some(80),
                ..Default::default()
            },
            Server {
                ip: IpAddr::v4("10.0.0.2"),
                port: Some(8080),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

#[test]
fn test_web_pool_scenario() {
    let pool = web_pool();
    let encoded = assert_ok!(serde_json::to_value(&pool));

    assert_eq!(encoded["name"], "web-pool");
    assert_eq!(encoded["lb_algorithm"], "LB_ALGORITHM_ROUND_ROBIN");
    let servers = encoded["servers"].as_array().expect("servers array");
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0]["ip"], json!({"addr": "10.0.0.1", "type": "V4"}));
    assert_eq!(servers[1]["port"], 8080);

    let decoded: Pool = assert_ok!(serde_json::from_value(encoded));
    assert_eq!(decoded, pool);
}

#[test]
fn test_unset_fields_are_omitted() {
    let encoded = assert_ok!(serde_json::to_value(web_pool()));
    let keys: Vec<&str> = encoded
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 3, "unexpected keys {keys:?}");
    for key in ["name", "lb_algorithm", "servers"] {
        assert!(keys.contains(&key));
    }
    assert!(encoded.get("health_monitor_refs").is_none());
    assert!(encoded.get("uuid").is_none());
}

#[test]
fn test_required_fields_always_emitted() {
    let encoded = assert_ok!(serde_json::to_value(Pool::default()));
    assert_eq!(encoded, json!({"name": ""}));

    let encoded = assert_ok!(serde_json::to_value(FailAction::default()));
    assert_eq!(encoded, json!({"type": ""}));
}

#[rstest]
#[case::pool_without_name(json!({"lb_algorithm": "LB_ALGORITHM_ROUND_ROBIN"}))]
#[case::server_without_ip(json!({"name": "p", "servers": [{"port": 80}]}))]
fn test_missing_required_field_fails(#[case] document: Value) {
    assert!(serde_json::from_value::<Pool>(document).is_err());
}

#[test]
fn test_set_but_zero_values_are_kept() {
    let pool = Pool {
        name: "p".to_string(),
        enabled: Some(false),
        connection_ramp_duration: Some(0),
        description: Some(String::new()),
        ..Default::default()
    };
    let encoded = assert_ok!(serde_json::to_value(&pool));
    assert_eq!(encoded["enabled"], false);
    assert_eq!(encoded["connection_ramp_duration"], 0);
    assert_eq!(encoded["description"], "");
}

#[test]
fn test_wire_keys_with_renames() {
    let document = json!({
        "name": "p",
        "_last_modified": "1700000000000000",
    });
    let pool: Pool = assert_ok!(serde_json::from_value(document.clone()));
    assert_eq!(pool.last_modified.as_deref(), Some("1700000000000000"));
    assert_eq!(assert_ok!(serde_json::to_value(&pool)), document);

    let runtime: ViMgrSeVmRuntime = assert_ok!(serde_json::from_value(json!({
        "managed_object_id": "vm-101",
        "name": "se-1",
        "type": "VIMGR_SE_VM",
        "uuid": "se-vm-1",
        "vcenter_vAppName": "avi-se",
    })));
    let encoded = assert_ok!(serde_json::to_value(&runtime));
    assert_eq!(encoded["vcenter_vAppName"], "avi-se");
}

#[test]
fn test_references_stay_strings() {
    let document = json!({
        "name": "p",
        "cloud_ref": "https://ctrl/api/cloud/cloud-1#Default-Cloud",
        "health_monitor_refs": [
            "https://ctrl/api/healthmonitor/hm-1#System-HTTP",
            "https://ctrl/api/healthmonitor/hm-2#System-TCP",
        ],
    });
    let pool: Pool = assert_ok!(serde_json::from_value(document));
    let cloud = pool.cloud_ref.as_deref().expect("cloud ref");
    let parsed = assert_ok!(ObjectRef::parse(cloud));
    assert_eq!(parsed.object_type(), "cloud");
    assert_eq!(parsed.name(), Some("Default-Cloud"));
    assert_eq!(pool.health_monitor_refs.len(), 2);
}

#[test]
fn test_unknown_and_opaque_fields() {
    let document = json!({
        "name": "p",
        "some_future_field": 42,
        "analytics_policy": {"enable_realtime_metrics": true},
    });
    let pool: Pool = assert_ok!(serde_json::from_value(document));
    let encoded = assert_ok!(serde_json::to_value(&pool));
    assert!(encoded.get("some_future_field").is_none());
    assert_eq!(encoded["analytics_policy"], json!({"enable_realtime_metrics": true}));
}

#[test]
fn test_collection_envelope() {
    let document = json!({
        "count": 250,
        "next": "https://ctrl/api/pool?page=2",
        "results": [{"name": "a"}, {"name": "b"}],
    });
    let page: ApiResponse<Pool> = assert_ok!(serde_json::from_value(document.clone()));
    assert_eq!(page.count, 250);
    assert!(!page.is_last_page());
    assert_eq!(page.results.len(), 2);
    assert_eq!(assert_ok!(serde_json::to_value(&page)), document);

    let last: ApiResponse<Pool> = assert_ok!(serde_json::from_value(json!({"count": 0})));
    assert!(last.is_last_page());
    assert!(last.results.is_empty());
    assert_eq!(assert_ok!(serde_json::to_value(&last)), json!({"count": 0}));
}

#[test]
fn test_gslb_required_fields() {
    let err = serde_json::from_value::<Gslb>(json!({"name": "gslb"})).unwrap_err();
    assert!(err.to_string().contains("leader_cluster_uuid"));
}

fn empty_arrays(value: &Value, path: &str, found: &mut Vec<String>) {
    match value {
        Value::Array(items) if items.is_empty() => found.push(path.to_string()),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                empty_arrays(item, &format!("{path}[{idx}]"), found);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                empty_arrays(item, &format!("{path}.{key}"), found);
            }
        }
        _ => {}
    }
}

/// Encodes the default value, adds a uuid, and checks the document survives
/// a decode/encode cycle with nothing but the set keys present.
struct RoundTrip;

impl ResourceVisitor for RoundTrip {
    type Output = Result<(), String>;

    fn visit<T: Resource>(self) -> Self::Output {
        let kind = T::OBJECT_TYPE;
        let encoded = serde_json::to_value(T::default()).map_err(|err| format!("{kind}: {err}"))?;
        let Value::Object(mut document) = encoded else {
            return Err(format!("{kind}: not encoded as an object"));
        };
        for unset in ["uuid", "url", "_last_modified"] {
            if document.contains_key(unset) {
                return Err(format!("{kind}: unset key {unset} emitted"));
            }
        }
        let mut empties = Vec::new();
        empty_arrays(&Value::Object(document.clone()), kind, &mut empties);
        if !empties.is_empty() {
            return Err(format!("empty lists emitted: {empties:?}"));
        }

        let uuid = format!("{kind}-1");
        document.insert("uuid".to_string(), Value::String(uuid.clone()));
        let document = Value::Object(document);
        let decoded: T =
            serde_json::from_value(document.clone()).map_err(|err| format!("{kind}: {err}"))?;
        if decoded.uuid() != Some(uuid.as_str()) {
            return Err(format!("{kind}: uuid lost on decode"));
        }
        let expected = T::default();
        if decoded.name() != expected.name() {
            return Err(format!("{kind}: name changed on decode"));
        }
        let reencoded = serde_json::to_value(&decoded).map_err(|err| format!("{kind}: {err}"))?;
        if reencoded != document {
            return Err(format!("{kind}: re-encoded {reencoded} differs from {document}"));
        }
        let again: T =
            serde_json::from_value(reencoded).map_err(|err| format!("{kind}: {err}"))?;
        if again != decoded {
            return Err(format!("{kind}: value changed across a second cycle"));
        }
        Ok(())
    }
}

#[test]
fn test_every_object_type_round_trips() {
    let failures: Vec<String> = OBJECT_TYPES
        .iter()
        .filter_map(|object_type| match visit_resource(object_type, RoundTrip) {
            Some(Ok(())) => None,
            Some(Err(err)) => Some(err),
            None => Some(format!("{object_type}: not dispatched")),
        })
        .collect();
    assert!(failures.is_empty(), "{failures:#?}");
}
