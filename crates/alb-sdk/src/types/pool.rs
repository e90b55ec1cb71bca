/*
[INPUT]:  Pool, server and health monitor schema
[OUTPUT]: Typed pool and server records
[POS]:    Data layer - pool models
[UPDATE]: When pool or server objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::cloud::PgDeploymentRuleResult;
use super::common::{ConfigPbAttributes, IpAddr, KeyValue, RoleFilterMatchLabel};
use super::gslb::GslbServiceSrvRdata;
use super::opaque::{
    DiscoveredNetwork, FailActionHttpLocalResponse, GeoLocation, HealthMonitorSslAttributes,
    HealthScoreEntity, HorizonProfile, Http2PoolProperties, HttpReselectRespCode, NetworkFilter,
    PlacementNetwork, PoolAnalyticsPolicy, ShmSummary, SpGslbServiceInfo,
};
use super::policy::StringMatch;
use super::security::RateProfile;
use super::service_engine::ScheduledScaling;
use super::system::OperationalStatus;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnPoolProperties {
    pub upstream_connpool_conn_idle_tmo: Option<u32>,
    pub upstream_connpool_conn_life_tmo: Option<u32>,
    pub upstream_connpool_conn_max_reuse: Option<u32>,
    pub upstream_connpool_server_max_cache: Option<u32>,
}

/// Action taken when every server in a pool is down.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailAction {
    pub local_rsp: Option<FailActionHttpLocalResponse>,
    pub redirect: Option<FailActionHttpRedirect>,
    pub r#type: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailActionHttpRedirect {
    pub host: String,
    pub path: Option<String>,
    pub protocol: Option<String>,
    pub query: Option<String>,
    pub status_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMonitorHttp {
    pub auth_type: Option<String>,
    pub exact_http_request: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_headers: Vec<String>,
    pub http_method: Option<String>,
    pub http_request: Option<String>,
    pub http_request_body: Option<String>,
    pub http_request_header_path: Option<String>,
    pub http_response: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_response_code: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_code: Vec<i64>,
    pub maintenance_response: Option<String>,
    pub response_size: Option<u32>,
    pub ssl_attributes: Option<HealthMonitorSslAttributes>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpClientAuthenticationParams {
    pub auth_profile_ref: Option<String>,
    pub realm: Option<String>,
    pub request_uri_path: Option<StringMatch>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpserverReselect {
    pub enabled: bool,
    pub num_retries: Option<u32>,
    pub retry_nonidempotent: Option<bool>,
    pub retry_timeout: Option<u32>,
    pub svr_resp_code: Option<HttpReselectRespCode>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAddrPort {
    pub hostname: Option<String>,
    pub ip: Option<IpAddr>,
    pub name: Option<String>,
    pub port: u32,
}

/// Named set of micro-service references.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroServiceGroup {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub created_by: Option<String>,
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_refs: Vec<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

/// Group of back-end servers that a virtual service load balances across.
///
/// `servers` is embedded; every `*_ref` field is a reference string to another
/// top-level object and must be resolved with a separate request.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub analytics_policy: Option<PoolAnalyticsPolicy>,
    pub analytics_profile_ref: Option<String>,
    pub append_port: Option<String>,
    pub application_persistence_profile_ref: Option<String>,
    pub autoscale_launch_config_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub autoscale_networks: Vec<String>,
    pub autoscale_policy_ref: Option<String>,
    pub capacity_estimation: Option<bool>,
    pub capacity_estimation_ttfb_thresh: Option<u32>,
    pub cloud_config_cksum: Option<String>,
    pub cloud_ref: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub conn_pool_properties: Option<ConnPoolProperties>,
    pub connection_ramp_duration: Option<i32>,
    pub created_by: Option<String>,
    pub default_server_port: Option<i32>,
    pub delete_server_on_dns_refresh: Option<bool>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_name: Vec<String>,
    pub east_west: Option<bool>,
    pub enable_http2: Option<bool>,
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_autoscale_groups: Vec<String>,
    pub fail_action: Option<FailAction>,
    pub fewest_tasks_feedback_delay: Option<u32>,
    pub graceful_disable_timeout: Option<i32>,
    pub graceful_disable_timeout_sec: Option<i32>,
    pub graceful_hm_down_disable_timeout: Option<i32>,
    pub gslb_pool_type: Option<String>,
    pub gslb_sp_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_monitor_refs: Vec<String>,
    pub horizon_profile: Option<HorizonProfile>,
    pub host_check_enabled: Option<bool>,
    pub http2_properties: Option<Http2PoolProperties>,
    pub ignore_server_port: Option<bool>,
    pub inline_health_monitor: Option<bool>,
    pub ipaddrgroup_ref: Option<String>,
    pub lb_algo_rr_per_se: Option<bool>,
    pub lb_algorithm: Option<String>,
    pub lb_algorithm_consistent_hash_hdr: Option<String>,
    pub lb_algorithm_core_nonaffinity: Option<u32>,
    pub lb_algorithm_hash: Option<String>,
    pub lookup_server_by_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub max_concurrent_connections_per_server: Option<i32>,
    pub max_conn_rate_per_server: Option<RateProfile>,
    pub min_health_monitors_up: Option<u32>,
    pub min_servers_up: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nsx_securitygroup: Vec<String>,
    pub pki_profile_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placement_networks: Vec<PlacementNetwork>,
    pub pool_type: Option<String>,
    pub request_queue_depth: Option<u32>,
    pub request_queue_enabled: Option<bool>,
    pub resolve_pool_by_dns: Option<bool>,
    pub rewrite_host_header_to_server_name: Option<bool>,
    pub rewrite_host_header_to_sni: Option<bool>,
    pub routing_pool: Option<bool>,
    pub server_disable_type: Option<String>,
    pub server_name: Option<String>,
    pub server_reselect: Option<HttpserverReselect>,
    pub server_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    pub service_metadata: Option<String>,
    pub sni_enabled: Option<bool>,
    pub sp_gs_info: Option<SpGslbServiceInfo>,
    pub ssl_key_and_certificate_ref: Option<String>,
    pub ssl_profile_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub tier1_lr: Option<String>,
    pub url: Option<String>,
    pub use_service_port: Option<bool>,
    pub use_service_ssl_mode: Option<bool>,
    pub uuid: Option<String>,
    pub vrf_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolDeploymentUpdateInfo {
    pub deployment_state: Option<String>,
    pub evaluation_duration: Option<u32>,
    pub ratio: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<PgDeploymentRuleResult>,
    pub uuid: Option<String>,
    pub webhook_reason: Option<String>,
    pub webhook_result: Option<bool>,
}

/// Weighted pool entry inside a pool group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolGroupMember {
    pub deployment_state: Option<String>,
    pub pool_ref: String,
    pub priority_label: Option<String>,
    pub ratio: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolPerformanceScore {
    pub hs_entity: HealthScoreEntity,
    pub reason: String,
    pub score_data: Option<PoolPerformanceScoreData>,
    pub value: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolPerformanceScoreData {
    pub apdexc: Option<f64>,
    pub apdexr: Option<f64>,
    pub oper_state: Option<String>,
    pub pool_ref: String,
    pub reason: String,
    pub reason_attr: Option<String>,
    pub r#ref: Option<String>,
    pub sum_finished_conns: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolRuntimeSummary {
    pub num_servers: i64,
    pub num_servers_enabled: i64,
    pub num_servers_up: i64,
    pub oper_status: OperationalStatus,
    pub percent_servers_up_enabled: Option<i32>,
    pub percent_servers_up_total: Option<i32>,
}

/// Member of a [`Pool`]. `ip` is the only required key on the wire.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub autoscaling_group_name: Option<String>,
    pub availability_zone: Option<String>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovered_networks: Vec<DiscoveredNetwork>,
    pub enabled: Option<bool>,
    pub external_orchestration_id: Option<String>,
    pub external_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_monitor_refs: Vec<String>,
    pub hostname: Option<String>,
    pub ip: IpAddr,
    pub location: Option<GeoLocation>,
    pub mac_address: Option<String>,
    pub nw_ref: Option<String>,
    pub port: Option<i32>,
    pub preference_order: Option<u32>,
    pub prst_hdr_val: Option<String>,
    pub ratio: Option<i32>,
    pub resolve_server_by_dns: Option<bool>,
    pub rewrite_host_header: Option<bool>,
    pub server_node: Option<String>,
    pub srv_rdata: Option<GslbServiceSrvRdata>,
    pub r#static: Option<bool>,
    pub verify_network: Option<bool>,
    pub vm_ref: Option<String>,
}

/// Scale-in/scale-out policy applied to a pool's servers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerAutoScalePolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub delay_for_server_garbage_collection: Option<i32>,
    pub description: Option<String>,
    pub intelligent_autoscale: Option<bool>,
    pub intelligent_scalein_margin: Option<i32>,
    pub intelligent_scaleout_margin: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub max_scalein_adjustment_step: Option<i32>,
    pub max_scaleout_adjustment_step: Option<i32>,
    pub max_size: Option<i32>,
    pub min_size: Option<i32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scalein_alertconfig_refs: Vec<String>,
    pub scalein_cooldown: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scaleout_alertconfig_refs: Vec<String>,
    pub scaleout_cooldown: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheduled_scalings: Vec<ScheduledScaling>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub use_predicted_load: Option<bool>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerHealthMonitor {
    pub avg_response_time: Option<u64>,
    pub failure_code: Option<String>,
    pub name: String,
    pub reason: Option<String>,
    pub recent_response_time: Option<u64>,
    pub state: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerRuntimeSummary {
    pub get_state: Option<bool>,
    pub health_monitor_list: Option<ShmSummary>,
    pub hostname: Option<String>,
    pub ip_addr: IpAddr,
    pub is_local: Option<bool>,
    pub is_standby: Option<bool>,
    pub location: Option<GeoLocation>,
    pub oper_status: OperationalStatus,
    pub port: i32,
    pub resolve_server_by_dns: Option<bool>,
    pub se_uuid: Option<String>,
    pub vs_uuid: Option<String>,
}
