/*
[INPUT]:  Cloud connector schema (AWS, Azure, vCenter, NSX-T, OpenStack, ...)
[OUTPUT]: Typed cloud setup and infrastructure runtime records
[POS]:    Data layer - cloud connector models
[UPDATE]: When a cloud connector gains or drops settings
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{ConfigPbAttributes, IpAddr, IpAddrPrefix, PortRange, TimeStamp};
use super::opaque::{
    AlbServicesUser, AppSignatureConfig, AzureInfo, CdpLldpInfo, ContentLibConfig, CorfuTimestamp,
    CustomParams, DataNetworkConfig, HostAttributes, ManagementNetworkConfig,
    NsxtTier1SegmentAutomaticMode, NsxtTier1SegmentManualMode, PgDeploymentRule, SaasLicensingInfo,
    SeImageStatus, UserAgentDbConfig, ViMgrIpSubnetRuntime,
};
use super::security::IpReputationConfig;
use super::system::{PortalFeatureOptIn, ProxyConfiguration};
use super::waf::{CaseConfig, WafCrsConfig};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbServicesConfig {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub app_signature_config: AppSignatureConfig,
    pub asset_contact: Option<AlbServicesUser>,
    pub case_config: CaseConfig,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub feature_opt_in_status: PortalFeatureOptIn,
    pub ip_reputation_config: IpReputationConfig,
    pub mode: Option<String>,
    pub polling_interval: Option<i32>,
    pub portal_url: String,
    pub saas_licensing_config: SaasLicensingInfo,
    pub split_proxy_configuration: ProxyConfiguration,
    pub url: Option<String>,
    pub use_split_proxy: Option<bool>,
    pub use_tls: Option<bool>,
    pub user_agent_db_config: UserAgentDbConfig,
    pub uuid: Option<String>,
    pub waf_config: WafCrsConfig,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbServicesJob {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub command: String,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub end_time: Option<TimeStamp>,
    pub name: String,
    pub pulse_job_id: Option<String>,
    pub start_time: Option<TimeStamp>,
    pub status: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApicConfiguration {
    pub apic_admin_tenant: Option<String>,
    pub apic_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apic_name: Vec<String>,
    pub apic_password: Option<String>,
    pub apic_product: Option<String>,
    pub apic_username: Option<String>,
    pub apic_vendor: Option<String>,
    pub avi_controller_password: Option<String>,
    pub avi_controller_username: Option<String>,
    pub context_aware: Option<String>,
    pub deployment: Option<String>,
    pub managed_mode: Option<bool>,
    pub minor: Option<String>,
    pub se_tunnel_mode: Option<bool>,
    pub version: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsSetup {
    pub access_key_id: Option<String>,
    pub cc_id: Option<String>,
    pub error_string: Option<String>,
    pub privilege: Option<String>,
    pub region: String,
    pub vpc_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AzureSetup {
    pub alb_id: Option<String>,
    pub cc_id: Option<String>,
    pub nic_id: Option<String>,
    pub reason: Option<String>,
    pub resource_group: Option<String>,
    pub status: Option<String>,
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vips: Vec<IpAddr>,
    pub vnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vs_uuids: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudStackSetup {
    pub access_key_id: Option<String>,
    pub api_url: Option<String>,
    pub cc_id: Option<String>,
    pub error_string: Option<String>,
    pub privilege: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudStatus {
    pub cc_id: Option<String>,
    pub nsxt_streaming_server_status: Option<NsxtStreamingServerStatus>,
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_image_state: Vec<SeImageStatus>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudTenantCleanup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub num_ports: Option<u32>,
    pub num_se: Option<u32>,
    pub num_secgrp: Option<u32>,
    pub num_svrgrp: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudVipParkingIntf {
    pub cc_id: Option<String>,
    pub error_string: Option<String>,
    pub intf_id: Option<String>,
    pub subnet_id: String,
    pub vtype: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerCloudService {
    pub cc_id: Option<String>,
    pub object: Option<String>,
    pub reason: Option<String>,
    pub service: Option<String>,
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomIpamDnsProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub script_params: Vec<CustomParams>,
    pub script_uri: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GcpInfo {
    pub hostname: Option<String>,
    pub machine_type: Option<String>,
    pub network: String,
    pub project: String,
    pub subnet: Option<String>,
    pub zone: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpamDnsOpenstackProfile {
    pub keystone_host: Option<String>,
    pub password: Option<String>,
    pub region: Option<String>,
    pub tenant: Option<String>,
    pub username: Option<String>,
    pub vip_network_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinuxServerHost {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_attr: Vec<HostAttributes>,
    pub host_ip: IpAddr,
    pub node_availability_zone: Option<String>,
    pub se_group_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarathonConfiguration {
    pub framework_tag: Option<String>,
    pub marathon_password: Option<String>,
    pub marathon_url: Option<String>,
    pub marathon_username: Option<String>,
    pub private_port_range: Option<PortRange>,
    pub public_port_range: Option<PortRange>,
    pub tenant: Option<String>,
    pub use_token_auth: Option<bool>,
    pub vs_name_tag_framework: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarathonSeDeployment {
    pub docker_image: Option<String>,
    pub host_os: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MesosSeResources {
    pub attribute_key: String,
    pub attribute_value: String,
    pub cpu: Option<f32>,
    pub memory: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsxConfiguration {
    pub avi_nsx_prefix: String,
    pub nsx_manager_name: String,
    pub nsx_manager_password: String,
    pub nsx_manager_username: String,
    pub nsx_poll_time: i32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsxtConfiguration {
    pub automate_dfw_objects: Option<bool>,
    pub automate_dfw_rules: Option<bool>,
    pub data_network_config: Option<DataNetworkConfig>,
    pub domain_id: Option<String>,
    pub enforcementpoint_id: Option<String>,
    pub management_network_config: Option<ManagementNetworkConfig>,
    pub nsxt_credentials_ref: Option<String>,
    pub nsxt_url: Option<String>,
    pub site_id: Option<String>,
    pub streamline_dfw_objects: Option<bool>,
    pub verify_certificate: Option<bool>,
    pub vmc_mode: Option<bool>,
    pub vpc_mode: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsxtStreamingServerStatus {
    pub cursor: Option<CorfuTimestamp>,
    pub last_update_err: Option<String>,
    pub last_update_time: Option<String>,
    pub nsxt_manager_url: Option<String>,
    pub state: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsxtTier1SegmentConfig {
    pub automatic: Option<NsxtTier1SegmentAutomaticMode>,
    pub manual: Option<NsxtTier1SegmentManualMode>,
    pub segment_config_mode: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NuageSdnController {
    pub nuage_organization: Option<String>,
    pub nuage_password: Option<String>,
    pub nuage_port: Option<u32>,
    pub nuage_username: Option<String>,
    pub nuage_vsd_host: Option<String>,
    pub se_domain: Option<String>,
    pub se_enterprise: Option<String>,
    pub se_network: Option<String>,
    pub se_policy_group: Option<String>,
    pub se_user: Option<String>,
    pub se_zone: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OciSetup {
    pub cc_id: Option<String>,
    pub compartment_id: Option<String>,
    pub reason: Option<String>,
    pub status: Option<String>,
    pub tenancy: Option<String>,
    pub vcn_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenStackClusterSetup {
    pub admin_tenant: Option<String>,
    pub auth_url: Option<String>,
    pub cc_id: Option<String>,
    pub error_string: Option<String>,
    pub keystone_host: String,
    pub privilege: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenStackIpChange {
    pub error_string: Option<String>,
    pub ip: IpAddr,
    pub mac_addr: Option<String>,
    pub port_uuid: Option<String>,
    pub se_vm_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PgDeploymentRuleResult {
    pub metric_value: Option<f64>,
    pub result: Option<bool>,
    pub rule: PgDeploymentRule,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VCenterConfiguration {
    pub content_lib: Option<ContentLibConfig>,
    pub datacenter: Option<String>,
    pub datacenter_managed_object_id: Option<String>,
    pub is_nsx_environment: Option<bool>,
    pub management_ip_subnet: Option<IpAddrPrefix>,
    pub management_network: Option<String>,
    pub password: Option<String>,
    pub privilege: String,
    pub use_content_lib: Option<bool>,
    pub username: Option<String>,
    pub vcenter_template_se_location: Option<String>,
    pub vcenter_url: Option<String>,
    pub verify_certificate: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VcaSetup {
    pub cc_id: Option<String>,
    pub error_string: Option<String>,
    pub instance: String,
    pub privilege: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViMgrGuestNicRuntime {
    pub avi_internal_network: Option<bool>,
    pub connected: Option<bool>,
    pub del_pending: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guest_ip: Vec<ViMgrIpSubnetRuntime>,
    pub label: Option<String>,
    pub mac_addr: String,
    pub mgmt_vnic: Option<bool>,
    pub network_name: Option<String>,
    pub network_uuid: Option<String>,
    pub os_port_uuid: Option<String>,
    pub segment_port: Option<String>,
    pub r#type: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViMgrHostRuntime {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cloud_ref: Option<String>,
    pub cluster_name: Option<String>,
    pub cluster_uuid: Option<String>,
    pub cntlr_accessible: Option<bool>,
    pub connection_state: Option<String>,
    pub cpu_hz: Option<i64>,
    pub maintenance_mode: Option<bool>,
    pub managed_object_id: String,
    pub mem: Option<i64>,
    pub mgmt_portgroup: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_uuids: Vec<String>,
    pub num_cpu_cores: Option<i32>,
    pub num_cpu_packages: Option<i32>,
    pub num_cpu_threads: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pnics: Vec<CdpLldpInfo>,
    pub powerstate: Option<String>,
    pub quarantine_start_ts: Option<String>,
    pub quarantined: Option<bool>,
    pub quarantined_periods: Option<i32>,
    pub se_fail_cnt: Option<i32>,
    pub se_success_cnt: Option<i32>,
    pub tenant_ref: Option<String>,
    pub r#type: String,
    pub url: Option<String>,
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vm_refs: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViMgrSeVmRuntime {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub availability_zone: Option<String>,
    pub azure_info: Option<AzureInfo>,
    pub cloud_name: Option<String>,
    pub cloud_ref: Option<String>,
    pub cluster_id: Option<String>,
    pub cluster_vmgroup: Option<String>,
    pub connection_state: Option<String>,
    pub controller_cluster_uuid: Option<String>,
    pub controller_ip_addr: Option<String>,
    pub cookie: Option<String>,
    pub creation_in_progress: Option<bool>,
    pub deletion_in_progress: Option<bool>,
    pub discovery_response: Option<String>,
    pub discovery_status: Option<i32>,
    pub disk_gb: Option<i32>,
    pub flavor: Option<String>,
    pub gcp_se_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guest_nic: Vec<ViMgrGuestNicRuntime>,
    pub host: Option<String>,
    pub host_ref: Option<String>,
    pub hostid: Option<String>,
    pub hypervisor: Option<String>,
    pub init_vnics: Option<i32>,
    pub last_discovery: Option<i32>,
    pub managed_object_id: String,
    pub memory_mb: Option<i32>,
    pub name: String,
    pub powerstate: Option<String>,
    pub security_group_uuid: Option<String>,
    pub segroup_ref: Option<String>,
    pub server_group_uuid: Option<String>,
    pub tenant_ref: Option<String>,
    pub r#type: String,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub vcenter_datacenter_uuid: Option<String>,
    pub vcenter_host_connection_state: Option<String>,
    pub vcenter_host_ha_state: Option<String>,
    pub vcenter_instance_uuid: Option<String>,
    pub vcenter_ref: Option<String>,
    pub vcenter_rm_cookie: Option<String>,
    pub vcenter_se_type: Option<String>,
    pub vcenter_template_vm: Option<bool>,
    pub vcenter_url: Option<String>,
    #[serde(rename = "vcenter_vAppName")]
    pub vcenter_v_app_name: Option<String>,
    #[serde(rename = "vcenter_vAppVendor")]
    pub vcenter_v_app_vendor: Option<String>,
    pub vcenter_vm_type: Option<String>,
    pub vcpus: Option<i32>,
    pub vsphere_ha_enabled: Option<bool>,
    pub vsphere_ha_inprogress: Option<bool>,
}
