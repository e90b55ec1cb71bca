/*
[INPUT]:  Event detail payloads attached to controller events
[OUTPUT]: Typed event detail records
[POS]:    Data layer - event models
[UPDATE]: When new event details are added
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{IpAddr, TimeStamp};
use super::opaque::{RmModifyVnic, VirtualServiceResource};
use super::policy::VipAction;
use super::service_engine::VipSeAssigned;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApicAgentGenericEventDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract_graphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lif_cif_attachment: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,
    pub se_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_engine_vnics: Vec<String>,
    pub tenant_name: Option<String>,
    pub tenant_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vnic_network_attachment: Vec<String>,
    pub vs_name: Option<String>,
    pub vs_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvgUptimeChangeDetails {
    pub current_value: Option<f64>,
    pub metric_id: Option<String>,
    pub metric_name: Option<String>,
    pub resource_str: Option<String>,
    pub threshold: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterNodeDbFailedEvent {
    pub failure_count: Option<u32>,
    pub ip: Option<IpAddr>,
    pub ip6: Option<IpAddr>,
    pub node_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterNodeRemoveEvent {
    pub ip: Option<IpAddr>,
    pub ip6: Option<IpAddr>,
    pub node_name: Option<String>,
    pub role: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigActionDetails {
    pub action_name: Option<String>,
    pub client_ip: Option<String>,
    pub error_message: Option<String>,
    pub parameter_data: Option<String>,
    pub path: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub status: Option<String>,
    pub user: Option<String>,
    pub user_agent: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigCreateDetails {
    pub client_ip: Option<String>,
    pub error_message: Option<String>,
    pub path: Option<String>,
    pub request_data: Option<String>,
    pub resource_data: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub status: Option<String>,
    pub user: Option<String>,
    pub user_agent: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdateDetails {
    pub error_message: Option<String>,
    pub new_resource_data: Option<String>,
    pub old_resource_data: Option<String>,
    pub path: Option<String>,
    pub request_data: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub status: Option<String>,
    pub user: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub agent_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub msg: Vec<String>,
    pub name: Option<String>,
    pub timestamp: Option<TimeStamp>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileObjectEvent {
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    pub message: Option<String>,
    pub start_time: Option<String>,
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreDetails {
    pub anomaly_penalty: Option<u32>,
    pub anomaly_reason: Option<String>,
    pub performance_reason: Option<String>,
    pub performance_score: Option<u32>,
    pub previous_value: f64,
    pub reason: Option<String>,
    pub resources_penalty: Option<u32>,
    pub resources_reason: Option<String>,
    pub security_penalty: Option<u32>,
    pub security_reason: Option<String>,
    pub step: Option<u32>,
    pub sub_resource_prefix: Option<String>,
    pub timestamp: String,
    pub value: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricThresoldUpDetails {
    pub current_value: Option<f64>,
    pub entity_uuid: Option<String>,
    pub metric_id: Option<String>,
    pub metric_name: String,
    pub pool_uuid: Option<String>,
    pub server: Option<String>,
    pub threshold: Option<f64>,
    pub vm_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsxtSiRuleDetails {
    pub action: Option<String>,
    pub destexclude: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dests: Vec<String>,
    pub direction: Option<String>,
    pub error_string: Option<String>,
    pub pool: Option<String>,
    pub segroup: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestLimiterEventInfo {
    pub client_ip: Option<String>,
    pub error_status_code: Option<u32>,
    pub message: String,
    pub method: String,
    pub processed: Option<bool>,
    pub url: String,
    pub user_agent: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RmBindVsSeEventDetails {
    pub ip: Option<String>,
    pub ip6: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,
    pub primary: Option<bool>,
    pub se_name: Option<String>,
    pub standby: Option<bool>,
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vip_vnics: Vec<String>,
    pub vs_name: Option<String>,
    pub vs_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RmModifyNetworksEventDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<RmModifyVnic>,
    pub reason: Option<String>,
    pub se_name: Option<String>,
    pub se_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vs_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vs_uuid: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RmUnbindVsSeEventDetails {
    pub ip: Option<String>,
    pub ip6: Option<String>,
    pub reason: Option<String>,
    pub se_name: Option<String>,
    pub vs_name: Option<String>,
    pub vs_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulerActionDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backup_uri: Vec<String>,
    pub control_script_output: Option<String>,
    pub execution_datestamp: Option<String>,
    pub scheduler_uuid: Option<String>,
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeAutoScalerEventDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<VipAction>,
    pub request_source: String,
    pub se_group_uuid: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeDupipEventDetails {
    pub local_mac: Option<String>,
    pub remote_mac: Option<String>,
    pub vnic_ip: Option<String>,
    pub vnic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeHighIngressProcLatencyEventDetails {
    pub dispatcher_core: Option<i32>,
    pub dispatcher_latency_ingress: Option<i32>,
    pub event_count: Option<i64>,
    pub flow_core: Option<i32>,
    pub proxy_latency_ingress: Option<i32>,
    pub se_name: Option<String>,
    pub se_ref: Option<String>,
    pub vs_name: Option<String>,
    pub vs_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeHmEventVsDetails {
    pub ha_reason: Option<String>,
    pub reason: Option<String>,
    pub se_name: Option<String>,
    pub src_uuid: Option<String>,
    pub vip6_address: Option<IpAddr>,
    pub vip_address: Option<IpAddr>,
    pub vip_id: Option<String>,
    pub virtual_service: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeIpRemovedEventDetails {
    pub if_name: Option<String>,
    pub ip: Option<String>,
    pub linux_name: Option<String>,
    pub mac: Option<String>,
    pub mask: Option<i32>,
    pub mode: Option<String>,
    pub network_uuid: Option<String>,
    pub ns: Option<String>,
    pub se_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeIpfailureEventDetails {
    pub mac: Option<String>,
    pub network_uuid: Option<String>,
    pub se_ref: Option<String>,
    pub vnic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeMigrateEventDetails {
    pub num_vs: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason: Vec<String>,
    pub se_name: Option<String>,
    pub se_uuid: String,
    pub vs_name: Option<String>,
    pub vs_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeProcessCrashedDetails {
    pub crash_counter: Option<u32>,
    pub process_name: Option<String>,
    pub se_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeVsConfigSeDatastoreDownloadFailed {
    pub fail_obj_name: Option<String>,
    pub fail_obj_uuid: Option<String>,
    pub fail_reason: Option<String>,
    pub parent_obj_uuid: Option<String>,
    pub se_ref: Option<String>,
    pub vs_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeVsPktBufHighEventDetails {
    pub current_value: Option<u32>,
    pub threshold: Option<u32>,
    pub virtual_service: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VcenterNonDrsClusterDetails {
    pub cc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_drs_cluster_ids: Vec<String>,
    pub se_vm_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VinfraDiscSummaryDetails {
    pub num_clusters: Option<i64>,
    pub num_dcs: Option<i64>,
    pub num_hosts: Option<i64>,
    pub num_nws: Option<i64>,
    pub num_vms: Option<i64>,
    pub vcenter: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VipScaleDetails {
    pub availability_zone: Option<String>,
    pub error: Option<String>,
    pub subnet_uuid: Option<String>,
    pub vip_id: Option<String>,
    pub vsvip_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VipSymmetryDetails {
    pub max_num_se_assigned: Option<i32>,
    pub max_num_se_requested: Option<i32>,
    pub min_num_se_assigned: Option<i32>,
    pub min_num_se_requested: Option<i32>,
    pub num_vs: Option<i32>,
    pub reason: Option<String>,
    pub vip_id: Option<String>,
    pub vsvip_name: Option<String>,
    pub vsvip_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsAwaitingSeEventDetails {
    pub awaitingse_timeout: i32,
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_assigned: Vec<VipSeAssigned>,
    pub se_requested: Option<VirtualServiceResource>,
    pub vs_uuid: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsInitialPlacementEventDetails {
    pub error_message: Option<String>,
    pub ip: Option<String>,
    pub ip6: Option<String>,
    pub rpc_status: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_assigned: Vec<VipSeAssigned>,
    pub se_requested: Option<VirtualServiceResource>,
    pub vs_uuid: String,
}
