/*
[INPUT]:  Analytics profile, metrics and application insights schema
[OUTPUT]: Typed analytics and metrics records
[POS]:    Data layer - analytics models
[UPDATE]: When analytics or metrics objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{ConfigPbAttributes, RoleFilterMatchLabel};
use super::opaque::{
    ApplicationSamplingConfig, BotDetectionMatch, ClientLogConfiguration, ClientLogStreamingConfig,
    HealthScoreEntity, HttpstatusRange, MetricsDataSeries, SensitiveLogProfile,
    TimeTrackerProperties, VirtualServicePerformanceScoreData,
};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub apdex_response_threshold: Option<u32>,
    pub apdex_response_tolerated_factor: Option<f64>,
    pub apdex_rtt_threshold: Option<u32>,
    pub apdex_rtt_tolerated_factor: Option<f64>,
    pub apdex_rum_threshold: Option<u32>,
    pub apdex_rum_tolerated_factor: Option<f64>,
    pub apdex_server_response_threshold: Option<u32>,
    pub apdex_server_response_tolerated_factor: Option<f64>,
    pub apdex_server_rtt_threshold: Option<u32>,
    pub apdex_server_rtt_tolerated_factor: Option<f64>,
    pub client_log_config: Option<ClientLogConfiguration>,
    pub client_log_streaming_config: Option<ClientLogStreamingConfig>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub conn_lossy_ooo_threshold: Option<u32>,
    pub conn_lossy_timeo_rexmt_threshold: Option<u32>,
    pub conn_lossy_total_rexmt_threshold: Option<u32>,
    pub conn_lossy_zero_win_size_event_threshold: Option<u32>,
    pub conn_server_lossy_ooo_threshold: Option<u32>,
    pub conn_server_lossy_timeo_rexmt_threshold: Option<u32>,
    pub conn_server_lossy_total_rexmt_threshold: Option<u32>,
    pub conn_server_lossy_zero_win_size_event_threshold: Option<u32>,
    pub description: Option<String>,
    pub enable_adaptive_config: Option<bool>,
    pub enable_advanced_analytics: Option<bool>,
    pub enable_ondemand_metrics: Option<bool>,
    pub enable_se_analytics: Option<bool>,
    pub enable_server_analytics: Option<bool>,
    pub enable_vs_analytics: Option<bool>,
    pub exclude_client_close_before_request_as_error: Option<bool>,
    pub exclude_conn_drop_client_small_window_as_error: Option<bool>,
    pub exclude_dns_policy_drop_as_significant: Option<bool>,
    pub exclude_gs_down_as_error: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_http_error_codes: Vec<i64>,
    pub exclude_invalid_dns_domain_as_error: Option<bool>,
    pub exclude_invalid_dns_query_as_error: Option<bool>,
    pub exclude_issuer_revoked_ocsp_responses_as_error: Option<bool>,
    pub exclude_no_dns_record_as_error: Option<bool>,
    pub exclude_no_valid_gs_member_as_error: Option<bool>,
    pub exclude_persistence_change_as_error: Option<bool>,
    pub exclude_revoked_ocsp_responses_as_error: Option<bool>,
    pub exclude_server_dns_error_as_error: Option<bool>,
    pub exclude_server_tcp_reset_as_error: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_sip_error_codes: Vec<i64>,
    pub exclude_stale_ocsp_responses_as_error: Option<bool>,
    pub exclude_syn_retransmit_as_error: Option<bool>,
    pub exclude_tcp_reset_as_error: Option<bool>,
    pub exclude_unavailable_ocsp_responses_as_error: Option<bool>,
    pub exclude_unsupported_dns_query_as_error: Option<bool>,
    pub healthscore_max_server_limit: Option<u32>,
    pub hs_event_throttle_window: Option<u32>,
    pub hs_max_anomaly_penalty: Option<u32>,
    pub hs_max_resources_penalty: Option<u32>,
    pub hs_max_security_penalty: Option<u32>,
    pub hs_min_dos_rate: Option<u32>,
    pub hs_performance_boost: Option<u32>,
    pub hs_pscore_traffic_threshold_l4_client: Option<f64>,
    pub hs_pscore_traffic_threshold_l4_server: Option<f64>,
    pub hs_security_certscore_expired: Option<f64>,
    pub hs_security_certscore_gt30d: Option<f64>,
    pub hs_security_certscore_le07d: Option<f64>,
    pub hs_security_certscore_le30d: Option<f64>,
    pub hs_security_chain_invalidity_penalty: Option<f64>,
    pub hs_security_cipherscore_eq000b: Option<f64>,
    pub hs_security_cipherscore_ge128b: Option<f64>,
    pub hs_security_cipherscore_lt128b: Option<f64>,
    pub hs_security_encalgo_score_none: Option<f64>,
    pub hs_security_encalgo_score_rc4: Option<f64>,
    pub hs_security_hsts_penalty: Option<f64>,
    pub hs_security_nonpfs_penalty: Option<f64>,
    pub hs_security_ocsp_revoked_score: Option<f64>,
    pub hs_security_selfsignedcert_penalty: Option<f64>,
    pub hs_security_ssl30_score: Option<f64>,
    pub hs_security_tls10_score: Option<f64>,
    pub hs_security_tls11_score: Option<f64>,
    pub hs_security_tls12_score: Option<f64>,
    pub hs_security_tls13_score: Option<f64>,
    pub hs_security_weak_signature_algo_penalty: Option<f64>,
    pub latency_audit_props: Option<LatencyAuditProperties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub ondemand_metrics_idle_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<HttpstatusRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resp_code_block: Vec<String>,
    pub sensitive_log_profile: Option<SensitiveLogProfile>,
    pub sip_log_depth: Option<u32>,
    pub tenant_ref: Option<String>,
    pub time_tracker_props: Option<TimeTrackerProperties>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInsightsParams {
    pub enable_learn_from_bots: Option<bool>,
    pub enable_per_uri_learning: Option<bool>,
    pub learn_from_authenticated_clients_only: Option<bool>,
    pub learn_from_bots: Option<BotDetectionMatch>,
    pub learn_from_urls_without_args: Option<bool>,
    pub max_params: Option<u32>,
    pub max_uris: Option<u32>,
    pub trusted_ipgroup_ref: Option<String>,
}

/// Application insights collection policy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInsightsPolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub application_insights_params: Option<ApplicationInsightsParams>,
    pub application_sampling_config: Option<ApplicationSamplingConfig>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub enable_application_insights: Option<bool>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryMetricStatistics {
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub num_samples: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyAuditProperties {
    pub conn_est_audit_mode: Option<String>,
    pub conn_est_threshold: Option<i32>,
    pub latency_audit_mode: Option<String>,
    pub latency_threshold: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricLog {
    pub end_timestamp: Option<f64>,
    pub metric_id: String,
    pub report_timestamp: Option<f64>,
    pub step: Option<u32>,
    pub time_series: Option<MetricsQueryResponse>,
    pub value: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsQueryResponse {
    pub entity_uuid: Option<String>,
    pub id: Option<String>,
    pub limit: Option<i32>,
    pub metric_entity: Option<String>,
    pub metric_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<MetricsDataSeries>,
    pub start: Option<String>,
    pub step: Option<i32>,
    pub stop: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualServicePerformanceScore {
    pub hs_entity: HealthScoreEntity,
    pub reason: String,
    pub score_data: Option<VirtualServicePerformanceScoreData>,
    pub value: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VserverL7MetricsObj {
    pub apdexr: Option<f64>,
    pub avg_application_response_time: Option<f64>,
    pub avg_blocking_time: Option<f64>,
    pub avg_browser_rendering_time: Option<f64>,
    pub avg_cache_bytes: Option<f64>,
    pub avg_cache_hits: Option<f64>,
    pub avg_cacheable_bytes: Option<f64>,
    pub avg_cacheable_hits: Option<f64>,
    pub avg_client_data_transfer_time: Option<f64>,
    pub avg_client_rtt: Option<f64>,
    pub avg_client_txn_latency: Option<f64>,
    pub avg_complete_responses: Option<f64>,
    pub avg_connection_time: Option<f64>,
    pub avg_dns_lookup_time: Option<f64>,
    pub avg_dom_content_load_time: Option<f64>,
    pub avg_error_responses: Option<f64>,
    pub avg_errors_excluded: Option<f64>,
    pub avg_frustrated_responses: Option<f64>,
    pub avg_http_headers_bytes: Option<f64>,
    pub avg_http_headers_count: Option<f64>,
    pub avg_http_params_count: Option<f64>,
    pub avg_page_download_time: Option<f64>,
    pub avg_page_load_time: Option<f64>,
    pub avg_params_per_req: Option<f64>,
    pub avg_post_bytes: Option<f64>,
    pub avg_post_compression_bytes: Option<f64>,
    pub avg_pre_compression_bytes: Option<f64>,
    pub avg_redirection_time: Option<f64>,
    pub avg_reqs_per_session: Option<f64>,
    pub avg_resp_1xx: Option<f64>,
    pub avg_resp_2xx: Option<f64>,
    pub avg_resp_3xx: Option<f64>,
    pub avg_resp_4xx: Option<f64>,
    pub avg_resp_4xx_avi_errors: Option<f64>,
    pub avg_resp_5xx: Option<f64>,
    pub avg_resp_5xx_avi_errors: Option<f64>,
    pub avg_rum_client_data_transfer_time: Option<f64>,
    pub avg_satisfactory_responses: Option<f64>,
    pub avg_server_rtt: Option<f64>,
    pub avg_service_time: Option<f64>,
    pub avg_ssl_auth_dsa: Option<f64>,
    pub avg_ssl_auth_ecdsa: Option<f64>,
    pub avg_ssl_auth_mldsa44: Option<f64>,
    pub avg_ssl_auth_mldsa65: Option<f64>,
    pub avg_ssl_auth_mldsa87: Option<f64>,
    pub avg_ssl_auth_rsa: Option<f64>,
    pub avg_ssl_connections: Option<f64>,
    pub avg_ssl_ecdsa_non_pfs: Option<f64>,
    pub avg_ssl_ecdsa_pfs: Option<f64>,
    pub avg_ssl_errors: Option<f64>,
    pub avg_ssl_failed_connections: Option<f64>,
    pub avg_ssl_handshake_network_errors: Option<f64>,
    pub avg_ssl_handshake_protocol_errors: Option<f64>,
    pub avg_ssl_handshakes_new: Option<f64>,
    pub avg_ssl_handshakes_non_pfs: Option<f64>,
    pub avg_ssl_handshakes_pfs: Option<f64>,
    pub avg_ssl_handshakes_reused: Option<f64>,
    pub avg_ssl_handshakes_timedout: Option<f64>,
    pub avg_ssl_kx_dh: Option<f64>,
    pub avg_ssl_kx_ecdh: Option<f64>,
    pub avg_ssl_kx_rsa: Option<f64>,
    pub avg_ssl_rsa_non_pfs: Option<f64>,
    pub avg_ssl_rsa_pfs: Option<f64>,
    pub avg_ssl_ver_ssl30: Option<f64>,
    pub avg_ssl_ver_tls10: Option<f64>,
    pub avg_ssl_ver_tls11: Option<f64>,
    pub avg_ssl_ver_tls12: Option<f64>,
    pub avg_ssl_ver_tls13: Option<f64>,
    pub avg_tolerated_responses: Option<f64>,
    pub avg_total_http2_requests: Option<f64>,
    pub avg_total_requests: Option<f64>,
    pub avg_uri_length: Option<f64>,
    pub avg_waf_attacks: Option<f64>,
    pub avg_waf_disabled: Option<f64>,
    pub avg_waf_evaluated: Option<f64>,
    pub avg_waf_evaluated_request_body_phase: Option<f64>,
    pub avg_waf_evaluated_request_header_phase: Option<f64>,
    pub avg_waf_evaluated_response_body_phase: Option<f64>,
    pub avg_waf_evaluated_response_header_phase: Option<f64>,
    pub avg_waf_flagged: Option<f64>,
    pub avg_waf_flagged_request_body_phase: Option<f64>,
    pub avg_waf_flagged_request_header_phase: Option<f64>,
    pub avg_waf_flagged_response_body_phase: Option<f64>,
    pub avg_waf_flagged_response_header_phase: Option<f64>,
    pub avg_waf_latency_request_body_phase: Option<f64>,
    pub avg_waf_latency_request_header_phase: Option<f64>,
    pub avg_waf_latency_response_body_phase: Option<f64>,
    pub avg_waf_latency_response_header_phase: Option<f64>,
    pub avg_waf_matched: Option<f64>,
    pub avg_waf_matched_request_body_phase: Option<f64>,
    pub avg_waf_matched_request_header_phase: Option<f64>,
    pub avg_waf_matched_response_body_phase: Option<f64>,
    pub avg_waf_matched_response_header_phase: Option<f64>,
    pub avg_waf_rejected: Option<f64>,
    pub avg_waf_rejected_request_body_phase: Option<f64>,
    pub avg_waf_rejected_request_header_phase: Option<f64>,
    pub avg_waf_rejected_response_body_phase: Option<f64>,
    pub avg_waf_rejected_response_header_phase: Option<f64>,
    pub avg_waiting_time: Option<f64>,
    pub effective_sampling_rate: Option<f64>,
    pub max_concurrent_sessions: Option<f64>,
    pub max_ssl_open_sessions: Option<f64>,
    pub max_total_requests: Option<f64>,
    pub node_obj_id: String,
    pub pct_cache_hits: Option<f64>,
    pub pct_cacheable_hits: Option<f64>,
    pub pct_get_reqs: Option<f64>,
    pub pct_post_reqs: Option<f64>,
    pub pct_response_errors: Option<f64>,
    pub pct_ssl_failed_connections: Option<f64>,
    pub pct_waf_attacks: Option<f64>,
    pub pct_waf_disabled: Option<f64>,
    pub pct_waf_evaluated: Option<f64>,
    pub pct_waf_flagged: Option<f64>,
    pub pct_waf_matched: Option<f64>,
    pub pct_waf_rejected: Option<f64>,
    pub rum_apdexr: Option<f64>,
    pub ssl_protocol_strength: Option<f64>,
    pub sum_application_response_time: Option<f64>,
    pub sum_blocking_time: Option<f64>,
    pub sum_browser_rendering_time: Option<f64>,
    pub sum_client_data_transfer_time: Option<f64>,
    pub sum_client_rtt: Option<f64>,
    pub sum_connection_time: Option<f64>,
    pub sum_dns_lookup_time: Option<f64>,
    pub sum_dom_content_load_time: Option<f64>,
    pub sum_errors: Option<f64>,
    pub sum_finished_sessions: Option<f64>,
    pub sum_get_client_txn_latency: Option<f64>,
    pub sum_get_client_txn_latency_bucket1: Option<f64>,
    pub sum_get_client_txn_latency_bucket2: Option<f64>,
    pub sum_get_reqs: Option<f64>,
    pub sum_http_headers_bytes: Option<f64>,
    pub sum_http_headers_count: Option<f64>,
    pub sum_http_params_count: Option<f64>,
    pub sum_num_optional_processing_admitted: Option<f64>,
    pub sum_num_optional_processing_refused: Option<f64>,
    pub sum_num_page_load_time_bucket1: Option<f64>,
    pub sum_num_page_load_time_bucket2: Option<f64>,
    pub sum_num_rum_samples: Option<f64>,
    pub sum_optional_cpu_usage: Option<f64>,
    pub sum_other_client_txn_latency: Option<f64>,
    pub sum_other_client_txn_latency_bucket1: Option<f64>,
    pub sum_other_client_txn_latency_bucket2: Option<f64>,
    pub sum_other_reqs: Option<f64>,
    pub sum_page_download_time: Option<f64>,
    pub sum_page_load_time: Option<f64>,
    pub sum_post_bytes: Option<f64>,
    pub sum_post_client_txn_latency: Option<f64>,
    pub sum_post_client_txn_latency_bucket1: Option<f64>,
    pub sum_post_client_txn_latency_bucket2: Option<f64>,
    pub sum_post_reqs: Option<f64>,
    pub sum_redirection_time: Option<f64>,
    pub sum_reqs_finished_sessions: Option<f64>,
    pub sum_reqs_with_params: Option<f64>,
    pub sum_resp_1xx: Option<f64>,
    pub sum_resp_2xx: Option<f64>,
    pub sum_resp_3xx: Option<f64>,
    pub sum_resp_4xx: Option<f64>,
    pub sum_resp_5xx: Option<f64>,
    pub sum_rum_client_data_transfer_time: Option<f64>,
    pub sum_server_rtt: Option<f64>,
    pub sum_service_time: Option<f64>,
    pub sum_total_responses: Option<f64>,
    pub sum_uri_length: Option<f64>,
    pub sum_waf_attacks: Option<f64>,
    pub sum_waf_disabled: Option<f64>,
    pub sum_waf_evaluated_request_body_phase: Option<f64>,
    pub sum_waf_evaluated_request_header_phase: Option<f64>,
    pub sum_waf_evaluated_response_body_phase: Option<f64>,
    pub sum_waf_evaluated_response_header_phase: Option<f64>,
    pub sum_waf_flagged: Option<f64>,
    pub sum_waf_flagged_request_body_phase: Option<f64>,
    pub sum_waf_flagged_request_header_phase: Option<f64>,
    pub sum_waf_flagged_response_body_phase: Option<f64>,
    pub sum_waf_flagged_response_header_phase: Option<f64>,
    pub sum_waf_latency_request_body_phase: Option<f64>,
    pub sum_waf_latency_request_header_phase: Option<f64>,
    pub sum_waf_latency_response_body_phase: Option<f64>,
    pub sum_waf_latency_response_header_phase: Option<f64>,
    pub sum_waf_matched_request_body_phase: Option<f64>,
    pub sum_waf_matched_request_header_phase: Option<f64>,
    pub sum_waf_matched_response_body_phase: Option<f64>,
    pub sum_waf_matched_response_header_phase: Option<f64>,
    pub sum_waf_rejected: Option<f64>,
    pub sum_waf_rejected_request_body_phase: Option<f64>,
    pub sum_waf_rejected_request_header_phase: Option<f64>,
    pub sum_waf_rejected_response_body_phase: Option<f64>,
    pub sum_waf_rejected_response_header_phase: Option<f64>,
    pub sum_waiting_time: Option<f64>,
}
