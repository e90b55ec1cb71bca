/*
[INPUT]:  Controller system, backup and support settings schema
[OUTPUT]: Typed controller system records
[POS]:    Data layer - system models
[UPDATE]: When system configuration objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{ConfigPbAttributes, IpAddr, IpAddrPrefix, TimeStamp};
use super::gslb::GslbSiteCfgSyncInfo;
use super::opaque::{
    AdminAuthConfiguration, ControllerAnalyticsPolicy, ControllerSizingCloudLimits, Crl,
    DnsConfiguration, EmailConfiguration, FileObjectEventMap, GslbObjInfo, GslbReplicationStats,
    LinuxConfiguration, MgmtIpAccessControl, NtpConfiguration, OpsInfo, ParamInfo,
    PortalConfiguration, QuotaConfig, SecureChannelConfiguration, SiteInfo, SnmpConfiguration,
    TelemetryConfiguration, TenantConfiguration,
};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupConfiguration {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub aws_access_key: Option<String>,
    pub aws_bucket_id: Option<String>,
    pub aws_secret_access: Option<String>,
    pub backup_file_prefix: Option<String>,
    pub backup_passphrase: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub maximum_backups_stored: Option<i32>,
    pub name: String,
    pub remote_directory: Option<String>,
    pub remote_file_transfer_protocol: Option<String>,
    pub remote_hostname: Option<String>,
    pub save_local: Option<bool>,
    pub ssh_user_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub upload_to_remote_host: Option<bool>,
    pub upload_to_s3: Option<bool>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerInterface {
    pub gateway: Option<IpAddr>,
    pub if_name: Option<String>,
    pub ip: Option<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub mac_address: Option<String>,
    pub mode: Option<String>,
    pub public_ip_or_name: Option<IpAddr>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerSizingLimits {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controller_sizing_cloud_limits: Vec<ControllerSizingCloudLimits>,
    pub flavor: Option<String>,
    pub num_clouds: Option<i32>,
    pub num_east_west_virtualservices: Option<i32>,
    pub num_pool_rt_metrics: Option<i32>,
    pub num_se_rt_metrics: Option<i32>,
    pub num_servers: Option<i32>,
    pub num_serviceengines: Option<i32>,
    pub num_tenants: Option<i32>,
    pub num_virtualservices: Option<i32>,
    pub num_virtualservices_application_insights: Option<i32>,
    pub num_virtualservices_positive_security: Option<i32>,
    pub num_virtualservices_rt_metrics: Option<i32>,
    pub num_virtualservices_rtmetrics_waf: Option<i32>,
    pub num_vrfs: Option<i32>,
    pub num_waf_virtualservices: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileObject {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_refs: Vec<String>,
    pub compressed: Option<bool>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub created: Option<String>,
    pub crl_info: Option<Crl>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<FileObjectEventMap>,
    pub expires_at: Option<String>,
    pub gslb_geodb_format: Option<String>,
    pub has_parent: Option<bool>,
    pub is_federated: Option<bool>,
    pub name: String,
    pub path: Option<String>,
    pub read_only: Option<bool>,
    pub restrict_download: Option<bool>,
    pub size: Option<u64>,
    pub tenant_ref: Option<String>,
    pub r#type: String,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub version: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderChangeInfo {
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leader_candidates: Vec<SiteInfo>,
    pub leader_change_mode: Option<String>,
    pub max_unsuccessful_probes: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NtpAuthenticationKey {
    pub algorithm: Option<String>,
    pub key: String,
    pub key_number: u32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationalStatus {
    pub last_changed_time: Option<TimeStamp>,
    pub num_vs_completed: Option<u32>,
    pub num_vs_failed: Option<u32>,
    pub num_vs_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason: Vec<String>,
    pub reason_code: Option<u64>,
    pub reason_code_string: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalFeatureOptIn {
    pub enable_appsignature_sync: Option<bool>,
    pub enable_ip_reputation: Option<bool>,
    pub enable_pulse_case_management: Option<bool>,
    pub enable_pulse_waf_management: Option<bool>,
    pub enable_user_agent_db_sync: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProactiveSupportDefaults {
    pub attach_core_dump: Option<bool>,
    pub attach_tech_support: Option<bool>,
    pub case_severity: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfiguration {
    pub host: String,
    pub password: Option<String>,
    pub port: u32,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteInfo {
    pub gslb_info: Option<GslbObjInfo>,
    pub ops_info: Option<OpsInfo>,
    pub sync_info: Option<GslbSiteCfgSyncInfo>,
    pub sync_stats: Option<GslbReplicationStats>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScFaultOptions {
    pub delay_create: Option<u32>,
    pub delay_delete: Option<u32>,
    pub delay_update: Option<u32>,
    pub fault_type: Option<String>,
    pub obj: Option<String>,
    pub object_type: Option<String>,
    pub se: Option<String>,
}

/// Cluster-wide system configuration singleton.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfiguration {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub admin_auth_configuration: Option<AdminAuthConfiguration>,
    pub avi_email_login_password: Option<String>,
    pub common_criteria_mode: Option<bool>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub controller_analytics_policy: Option<ControllerAnalyticsPolicy>,
    pub default_license_tier: Option<String>,
    pub dns_configuration: Option<DnsConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_virtualservice_refs: Vec<String>,
    pub docker_mode: Option<bool>,
    pub email_configuration: Option<EmailConfiguration>,
    pub enable_cors: Option<bool>,
    pub enable_host_header_check: Option<bool>,
    pub enable_license_quota: Option<bool>,
    pub fips_mode: Option<bool>,
    pub global_tenant_config: Option<TenantConfiguration>,
    pub host_key_algorithm_exclude: Option<String>,
    pub kex_algorithm_exclude: Option<String>,
    pub legacy_ssl_support: Option<bool>,
    pub license_quota: Option<QuotaConfig>,
    pub linux_configuration: Option<LinuxConfiguration>,
    pub mgmt_ip_access_control: Option<MgmtIpAccessControl>,
    pub ntp_configuration: Option<NtpConfiguration>,
    pub portal_configuration: Option<PortalConfiguration>,
    pub proxy_configuration: Option<ProxyConfiguration>,
    pub rekey_time_limit: Option<String>,
    pub rekey_volume_limit: Option<String>,
    pub sddcmanager_fqdn: Option<String>,
    pub secure_channel_configuration: Option<SecureChannelConfiguration>,
    pub snmp_configuration: Option<SnmpConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_ciphers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_hmacs: Vec<String>,
    pub sync_kex_host_to_se: Option<bool>,
    pub sync_syslog_to_se: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syslog_servers: Vec<IpAddr>,
    pub telemetry_configuration: Option<TelemetryConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trusted_host_profiles_refs: Vec<String>,
    pub truststore_pkiprofile_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub welcome_workflow_complete: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemLimitObjectCount {
    pub current_count: Option<i32>,
    pub limit: Option<String>,
    pub limit_description: Option<String>,
    pub limit_name: Option<String>,
    pub name: Option<String>,
    pub recommended_max_limit: Option<i32>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UriInfo {
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub param_info: Vec<ParamInfo>,
    pub parser: Option<String>,
    pub uri_hits: Option<u64>,
    pub uri_key: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub ds_name: Option<String>,
    pub name: Option<String>,
    pub ops: Option<String>,
    pub reason: Option<String>,
    pub status: Option<u32>,
    pub uuid: Option<String>,
}
