/*
[INPUT]:  Service engine, placement and scaling schema
[OUTPUT]: Typed service engine records
[POS]:    Data layer - service engine models
[UPDATE]: When service engine objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{ConfigPbAttributes, IpAddr};
use super::opaque::{
    ChildProcessInfo, ControllerInfo, EventMap, SeAgentProperties, SeBootupProperties,
    SeRuntimeProperties, UpgradeOpsState, Vnic, VnicNetwork,
};
use super::reports::RetentionAction;
use super::system::OperationalStatus;
use super::upgrade::UpgradeParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskThreshold {
    pub action: RetentionAction,
    pub filepath: Option<String>,
    pub max_disk_percent: Option<u64>,
    pub min_free_disk_percent: Option<u64>,
    pub retain: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsServiceDomain {
    pub domain_name: String,
    pub pass_through: Option<bool>,
    pub record_ttl: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DryRunParams {
    pub allow_single_node: Option<bool>,
    pub memory: Option<f32>,
    pub num_cpu: Option<u32>,
    pub preferred_worker: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DryrunInfo {
    pub duration: Option<i32>,
    pub end_time: Option<String>,
    pub operation: Option<String>,
    pub params: Option<UpgradeParams>,
    pub progress: Option<u32>,
    pub start_time: Option<String>,
    pub state: Option<UpgradeOpsState>,
    pub tasks_completed: Option<i32>,
    pub total_tasks: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upgrade_events: Vec<EventMap>,
    pub worker: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAddrLimits {
    pub ip_address_group_per_match_criteria: Option<i32>,
    pub ip_address_prefix_per_match_criteria: Option<i32>,
    pub ip_address_range_per_match_criteria: Option<i32>,
    pub ip_addresses_per_match_criteria: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryBalancerInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child: Vec<ChildProcessInfo>,
    pub controller_memory: Option<i32>,
    pub controller_memory_usage_percent: Option<f64>,
    pub debug_message: Option<String>,
    pub limit: Option<i32>,
    pub memory_used: Option<i32>,
    pub pid: Option<i32>,
    pub process: Option<String>,
    pub process_mode: Option<String>,
    pub process_trend: Option<String>,
    pub threshold_percent: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryBalancerRequest {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub controller_info: Option<ControllerInfo>,
    pub name: String,
    pub node_uuid: Option<String>,
    pub process_info: Option<ProcessInfo>,
    pub process_instance: Option<String>,
    pub tenant_ref: Option<String>,
    pub timestamp: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub current_process_id: Option<f64>,
    pub current_process_mem_usage: Option<f64>,
    pub intimation_count: Option<f64>,
    pub memory_limit: Option<f64>,
    pub memory_trend_usage: Option<String>,
    pub process_mode: Option<String>,
    pub threshold_percent: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduledScaling {
    pub autoscaling_duration: Option<i32>,
    pub cron_expression: Option<String>,
    pub desired_capacity: Option<i32>,
    pub enable: Option<bool>,
    pub end_date: Option<String>,
    pub recurrence: Option<String>,
    pub schedule_max_step: Option<i32>,
    pub start_date: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeProperties {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub se_agent_properties: Option<SeAgentProperties>,
    pub se_bootup_properties: Option<SeBootupProperties>,
    pub se_runtime_properties: Option<SeRuntimeProperties>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeResources {
    pub cores_per_socket: Option<i32>,
    pub disk: i32,
    pub hyper_threading: Option<bool>,
    pub hypervisor_mode: Option<bool>,
    pub memory: i32,
    pub num_datapath_processes: Option<u32>,
    pub num_vcpus: i32,
    pub qat_mode: Option<String>,
    pub sockets: Option<i32>,
}

/// A single service engine VM or container.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEngine {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub availability_zone: Option<String>,
    pub cloud_ref: Option<String>,
    pub container_mode: Option<bool>,
    pub container_type: Option<String>,
    pub controller_created: Option<bool>,
    pub controller_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_vnics: Vec<Vnic>,
    pub enable_state: Option<String>,
    pub flavor: Option<String>,
    pub host_ref: Option<String>,
    pub hypervisor: Option<String>,
    pub mgmt_vnic: Option<Vnic>,
    pub name: Option<String>,
    pub nsxt_no_hotplug: Option<bool>,
    pub resources: Option<SeResources>,
    pub se_group_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEngineConfig {
    pub cloud_ref: Option<String>,
    pub enable_state: Option<String>,
    pub host_ref: Option<String>,
    pub mgmt_ip6_address: Option<IpAddr>,
    pub mgmt_ip_address: Option<IpAddr>,
    pub name: Option<String>,
    pub se_group_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtualservice_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vs_per_se_refs: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEngineParams {
    pub concurrent_segroup_upgrades: Option<u32>,
    pub image_data_transfer_size: Option<u32>,
    pub large_se_connect_timeout: Option<u32>,
    pub se_connect_timeout: Option<u32>,
    pub simultaneous_image_downloads: Option<u32>,
    pub task_base_timeout: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VipSeAssigned {
    pub active_on_cloud: Option<bool>,
    pub active_on_se: Option<bool>,
    pub admin_down_requested: Option<bool>,
    pub attach_ip_in_progress: Option<bool>,
    pub connected: Option<bool>,
    pub detach_ip_in_progress: Option<bool>,
    pub mgmt_ip: Option<IpAddr>,
    pub mgmt_ip6: Option<IpAddr>,
    pub name: Option<String>,
    pub oper_status: Option<OperationalStatus>,
    pub primary: Option<bool>,
    pub r#ref: Option<String>,
    pub scalein_in_progress: Option<bool>,
    pub scaleout_in_progress: Option<bool>,
    pub se_ready_in_progress: Option<bool>,
    pub snat_ip: Option<IpAddr>,
    pub standby: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VlanInterface {
    pub dhcp_enabled: Option<bool>,
    pub enabled: Option<bool>,
    pub if_name: String,
    pub ip6_autocfg_enabled: Option<bool>,
    pub is_mgmt: Option<bool>,
    pub vlan_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vnic_networks: Vec<VnicNetwork>,
    pub vrf_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsMigrateParams {
    pub from_se_ref: Option<String>,
    pub new_vcpus: Option<u32>,
    pub source: Option<String>,
    pub to_host_ref: Option<String>,
    pub to_new_se: Option<bool>,
    pub to_se_ref: Option<String>,
    pub uuid: Option<String>,
    pub vip_id: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsScaleinParams {
    pub admin_down: Option<bool>,
    pub from_se_ref: Option<String>,
    pub scalein_primary: Option<bool>,
    pub source: Option<String>,
    pub uuid: Option<String>,
    pub vip_id: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsScaleoutParams {
    pub admin_up: Option<bool>,
    pub new_vcpus: Option<u32>,
    pub source: Option<String>,
    pub to_host_ref: Option<String>,
    pub to_new_se: Option<bool>,
    pub to_se_ref: Option<String>,
    pub uuid: Option<String>,
    pub vip_id: String,
}
