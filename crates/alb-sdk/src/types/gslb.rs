/*
[INPUT]:  GSLB configuration and runtime schema
[OUTPUT]: Typed GSLB site, runtime and service records
[POS]:    Data layer - global server load balancing models
[UPDATE]: When GSLB objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{ConfigPbAttributes, TimeStamp};
use super::events::EventInfo;
use super::opaque::{
    AutoTuneSendInterval, CfgState, ConfigVersionStatus, DnsConfig, EventCache, FdsInfo,
    GslbClientIpAddrGroup, GslbDnsGsStatus, GslbPerDnsState, GslbSite, GslbSiteRuntime,
    GslbThirdPartySite, GslbThirdPartySiteRuntime, LocalInfo, ReplicationPolicy,
    SeHmEventGslbPoolMemberDetails, ServerConfig, VsGs,
};
use super::pool::ServerRuntimeSummary;
use super::service_engine::SeResources;
use super::system::{LeaderChangeInfo, OperationalStatus, RemoteInfo, VersionInfo};

/// Remote controller site reachable for GSLB.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerSite {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub address: String,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub name: String,
    pub port: Option<i32>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

/// Global server load balancing configuration of a controller cluster.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gslb {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub async_interval: Option<u32>,
    pub auto_tune_send_interval: Option<AutoTuneSendInterval>,
    pub clear_on_max_retries: Option<u32>,
    pub client_ip_addr_group: Option<GslbClientIpAddrGroup>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_configs: Vec<DnsConfig>,
    pub enable_config_by_members: Option<bool>,
    pub error_resync_interval: Option<u32>,
    pub fileobject_max_file_versions: Option<u32>,
    pub gs_member_fqdn_resolution_on_se: Option<bool>,
    pub is_federated: Option<bool>,
    pub leader_change_info: Option<LeaderChangeInfo>,
    pub leader_cluster_uuid: String,
    pub maintenance_mode: Option<bool>,
    pub name: String,
    pub replication_policy: Option<ReplicationPolicy>,
    pub send_interval: Option<u32>,
    pub send_interval_prior_to_maintenance_mode: Option<u32>,
    pub short_probe_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<GslbSite>,
    pub tenant_ref: Option<String>,
    pub tenant_scoped: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_sites: Vec<GslbThirdPartySite>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub view_id: Option<u64>,
}

/// Cloud resource manager runtime for GSLB.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbCrmRuntime {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cluster_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventInfo>,
    pub fds_info: Option<FdsInfo>,
    pub local_info: Option<LocalInfo>,
    pub name: Option<String>,
    pub obj_uuid: Option<String>,
    pub remote_info: Option<RemoteInfo>,
    pub replication_policy: Option<ReplicationPolicy>,
    pub site_name: Option<String>,
    pub status_info: Option<OperationalStatus>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbDnsInfo {
    pub dns_active: Option<bool>,
    pub dns_se_resource: Option<SeResources>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_vs_states: Vec<GslbPerDnsState>,
    pub gs_status: Option<GslbDnsGsStatus>,
    pub retry_count: Option<u32>,
}

/// Health status monitor runtime for GSLB.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbHsmRuntime {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cluster_uuid: Option<String>,
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventInfo>,
    pub local_info: Option<LocalInfo>,
    pub name: Option<String>,
    pub obj_uuid: Option<String>,
    pub oper_status: Option<OperationalStatus>,
    pub remote_info: Option<RemoteInfo>,
    pub send_interval: Option<u32>,
    pub site_name: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

/// Runtime view of the GSLB configuration, as reported by a site.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbRuntime {
    pub checksum: Option<String>,
    pub delete_in_progress: Option<bool>,
    pub dns_enabled: Option<bool>,
    pub event_cache: Option<EventCache>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flr_state: Vec<CfgState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gslb_crm_runtime: Vec<GslbCrmRuntime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gslb_hsm_runtime: Vec<GslbHsmRuntime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gslb_sm_runtime: Vec<GslbSmRuntime>,
    pub ldr_state: Option<CfgState>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub site: Vec<GslbSiteRuntime>,
    pub tenant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_party_sites: Vec<GslbThirdPartySiteRuntime>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbServiceSitePersistencePool {
    pub enable_http2: Option<bool>,
    pub name: Option<String>,
    pub num_servers: Option<i64>,
    pub num_servers_up: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_info: Vec<ServerRuntimeSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ServerConfig>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbServiceSrvRdata {
    pub port: u32,
    pub priority: u32,
    pub weight: u32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbSiteCfgSyncInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errored_objects: Vec<VersionInfo>,
    pub last_changed_time: Option<TimeStamp>,
    pub last_fail_obj: Option<ConfigVersionStatus>,
    pub reason: Option<String>,
    pub recommendation: Option<String>,
    pub sync_state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbSiteRuntimeInfo {
    pub cluster_leader: Option<String>,
    pub cluster_uuid: Option<String>,
    pub dns_info: Option<GslbDnsInfo>,
    pub enabled: Option<bool>,
    pub event_cache: Option<EventCache>,
    pub hs_state: Option<bool>,
    pub last_changed_time: Option<TimeStamp>,
    pub name: Option<String>,
    pub num_of_retries: Option<i32>,
    pub oper_status: Option<OperationalStatus>,
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rrtoken: Vec<String>,
    pub site_type: Option<String>,
    pub state: Option<String>,
    pub state_reason: Option<String>,
    pub sw_version: Option<String>,
}

/// Service manager runtime for GSLB.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GslbSmRuntime {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cluster_leader: Option<String>,
    pub cluster_uuid: Option<String>,
    pub controller_flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_configs: Vec<DnsConfig>,
    pub dns_info: Option<GslbDnsInfo>,
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventInfo>,
    pub health_monitor_info: Option<String>,
    pub leader_cluster_uuid: String,
    pub member_type: Option<String>,
    pub name: Option<String>,
    pub node_uuid: Option<String>,
    pub num_of_retries: Option<i32>,
    pub obj_uuid: Option<String>,
    pub oper_status: Option<OperationalStatus>,
    pub remote_info: Option<RemoteInfo>,
    pub role: Option<String>,
    pub site_name: Option<String>,
    pub site_type: Option<String>,
    pub state: Option<String>,
    pub sw_version: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub view_id: Option<u64>,
}

/// Federated datastore version tracked by the local worker.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalWorkerFdsVersion {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub name: Option<String>,
    pub tenant_ref: Option<String>,
    pub timeline: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeHmEventGslbPoolDetails {
    pub gsgroup: Option<String>,
    pub gslb_service: Option<String>,
    pub gsmember: Option<SeHmEventGslbPoolMemberDetails>,
    pub ha_reason: Option<String>,
    pub se_name: Option<String>,
    pub src_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsGsStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    pub name: Option<String>,
    pub uuid: Option<String>,
    pub vsgs_obj: Option<VsGs>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsgsOpsInfo {
    pub dnsvs_uuid: Option<String>,
    pub ops: Option<String>,
    pub timestamp: Option<TimeStamp>,
}
