/*
[INPUT]:  Debug filter schema for controller and service engine processes
[OUTPUT]: Typed debug filter and capture records
[POS]:    Data layer - debug models
[UPDATE]: When debug filters change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::IpAddr;
use super::opaque::{
    AlertMgrDebugFilter, CaptureIpc, CloudConnectorDebugFilter, DebugDnsOptions, DebugIpAddr,
    DebugVirtualServiceCapture, DebugVirtualServiceObjSync, DebugVirtualServiceSeParams,
    DebugVsDataplane, MetricsApiSrvDebugFilter, MetricsMgrDebugFilter, SeMgrDebugFilter,
    SeRpcProxyDebugFilter, StateCacheMgrDebugFilter, VsDebugFilter,
};
use super::policy::{IpAddrMatch, StringMatch};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoScaleMgrDebugFilter {
    pub enable_aws_autoscale_integration: Option<bool>,
    pub intelligent_autoscale_period: Option<u32>,
    pub pool_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureFilters {
    pub capture_ip: Option<DebugIpAddr>,
    pub capture_ipc: Option<CaptureIpc>,
    pub dst_port_end: Option<i32>,
    pub dst_port_start: Option<i32>,
    pub eth_proto: Option<String>,
    pub ip_proto: Option<String>,
    pub src_port: Option<i32>,
    pub src_port_range_end: Option<i32>,
    pub tcp_ack: Option<bool>,
    pub tcp_fin: Option<bool>,
    pub tcp_push: Option<bool>,
    pub tcp_syn: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientLogFilter {
    pub all_headers: Option<bool>,
    pub client_ip: Option<IpAddrMatch>,
    pub duration: Option<u32>,
    pub enabled: bool,
    pub index: u32,
    pub name: String,
    pub uri: Option<StringMatch>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnpoolFilter {
    pub ip_addr: Option<String>,
    pub ip_mask: Option<String>,
    pub port: Option<i32>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugController {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub filters: Option<DebugFilterUnion>,
    pub log_level: String,
    pub name: String,
    pub sub_module: String,
    pub tenant_ref: Option<String>,
    pub trace_level: String,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugFilterUnion {
    pub alert_debug_filter: Option<AlertMgrDebugFilter>,
    pub autoscale_mgr_debug_filter: Option<AutoScaleMgrDebugFilter>,
    pub cloud_connector_debug_filter: Option<CloudConnectorDebugFilter>,
    pub hs_debug_filter: Option<HsmgrDebugFilter>,
    pub logmanager_debug_filter: Option<LogManagerDebugFilter>,
    pub mesos_metrics_debug_filter: Option<MesosMetricsDebugFilter>,
    pub metrics_debug_filter: Option<MetricsMgrDebugFilter>,
    pub metricsapi_srv_debug_filter: Option<MetricsApiSrvDebugFilter>,
    pub se_mgr_debug_filter: Option<SeMgrDebugFilter>,
    pub se_rpc_proxy_filter: Option<SeRpcProxyDebugFilter>,
    pub securitymgr_debug_filter: Option<SecurityMgrDebugFilter>,
    pub state_cache_mgr_debug_filter: Option<StateCacheMgrDebugFilter>,
    pub r#type: String,
    pub vs_debug_filter: Option<VsDebugFilter>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugServiceEngineSustainedCpuSpike {
    pub cpu_filter: Option<String>,
    pub cpu_spike_percent: Option<u32>,
    pub dis_enable: Option<bool>,
    pub manual_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub process_names: Vec<String>,
    pub sample_cooldown: Option<u32>,
    pub sample_duration: Option<u32>,
    pub spike_duration: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugVirtualService {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub capture: Option<bool>,
    pub capture_filters: Option<CaptureFilters>,
    pub capture_params: Option<DebugVirtualServiceCapture>,
    pub cloud_ref: Option<String>,
    pub debug_hm: Option<String>,
    pub debug_ip: Option<DebugIpAddr>,
    pub dns_options: Option<DebugDnsOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<DebugVsDataplane>,
    pub latency_audit_filters: Option<CaptureFilters>,
    pub name: String,
    pub objsync: Option<DebugVirtualServiceObjSync>,
    pub resync_flows: Option<bool>,
    pub se_params: Option<DebugVirtualServiceSeParams>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HsmgrDebugFilter {
    pub entity: Option<String>,
    pub metric_entity: Option<String>,
    pub period: Option<i32>,
    pub pool: Option<String>,
    pub server: Option<String>,
    pub skip_hs_db_writes: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogManagerDebugFilter {
    pub adf_protection_time_minutes: Option<u32>,
    pub batch_queue_buffer_size: Option<u32>,
    pub batch_worker_count: Option<u32>,
    pub bulk_payload_string_size: Option<u32>,
    pub cache_cleanup_delay_ms: Option<u32>,
    pub client_index_op_timeout_seconds: Option<u32>,
    pub db_notifn_chan_capacity: Option<u32>,
    pub entity_ref: Option<String>,
    pub go_gc_percent: Option<u32>,
    pub incremental_timeout_buffer_ms: Option<u32>,
    pub index_cleaner_interval_minutes: Option<u32>,
    pub index_config_path: Option<String>,
    pub index_retention_period_minutes: Option<u32>,
    pub index_status_queue_buffer_size: Option<u32>,
    pub json_all_str_builder_size: Option<u32>,
    pub json_everything_str_builder_size: Option<u32>,
    pub json_str_builder_size: Option<u32>,
    pub log_indexer_task_timeout_ms: Option<u32>,
    pub log_records_incremental_timeout_ms: Option<u32>,
    pub log_records_task_timeout_ms: Option<u32>,
    pub max_batch_duration_ms: Option<u32>,
    pub max_batch_size: Option<u32>,
    pub max_files_per_index: Option<u32>,
    pub max_indices_events: Option<u32>,
    pub max_indices_per_vs: Option<u32>,
    pub max_indices_system: Option<u32>,
    pub max_logs_per_index: Option<u32>,
    pub max_num_workers: Option<u32>,
    pub max_queue_size: Option<u32>,
    pub max_size_per_index_mb: Option<u32>,
    pub nf_protection_time_minutes: Option<u32>,
    pub opensearch_host: Option<String>,
    pub opensearch_num_replicas: Option<u32>,
    pub opensearch_num_shards: Option<u32>,
    pub opensearch_port: Option<String>,
    pub query_queue_buffer_size: Option<u32>,
    pub query_worker_count: Option<u32>,
    pub records_status_queue_buffer_size: Option<u32>,
    pub records_status_worker_count: Option<u32>,
    pub reserved_1: Option<String>,
    pub reserved_2: Option<String>,
    pub reserved_3: Option<u32>,
    pub reserved_4: Option<u32>,
    pub search_query_timeout_ms: Option<u32>,
    pub task_re_enqueue_wait_time_seconds: Option<u32>,
    pub telemetry_trace_log_level: Option<String>,
    pub telemetry_trace_percentage: Option<u32>,
    pub udf_protection_time_minutes: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MesosMetricsDebugFilter {
    pub mesos_master: Option<String>,
    pub mesos_slave: Option<String>,
    pub metric_entity: Option<String>,
    pub metrics_collection_frq: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistenceFilter {
    pub persistence_cookie: Option<String>,
    pub persistence_end_ip: Option<IpAddr>,
    pub persistence_ip: Option<IpAddr>,
    pub persistence_mask: Option<i32>,
    pub server_end_ip: Option<IpAddr>,
    pub server_ip: Option<IpAddr>,
    pub server_mask: Option<i32>,
    pub server_port: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityMgrDebugFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accumulate_http_methods: Vec<String>,
    pub enable_adaptive_config: Option<bool>,
    pub entity_ref: Option<String>,
    pub psm_programming_interval: Option<u32>,
    pub psm_rule_id_multiplier: Option<u32>,
}
