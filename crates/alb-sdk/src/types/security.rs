/*
[INPUT]:  Rate limiting, HSM, SSL, OAuth and network security schema
[OUTPUT]: Typed security records
[POS]:    Data layer - security models
[UPDATE]: When security objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{
    ConfigPbAttributes, IpAddr, IpAddrPrefix, KeyValue, PortMatch, PortRange, RoleFilterMatchLabel,
};
use super::opaque::{
    AuthorizationAction, AuthorizationMatch, CsrfRule, GeoMatch, HsmAwsCloudHsm, HsmSafenetLuna,
    HsmThalesNetHsm, HsmThalesRfs, HttpCookiePersistenceKey, HttpLocalFile, HttpRedirectAction,
    HttpsecurityAction, IpReputationServiceStatus, IpReputationTypeMatch, MicroServiceMatch,
    NetworkSecurityPolicyActionRlParam, OAuthSettings, PortMatchGeneric, SecureChannelMetadata,
    SslCertificate, SslKeyEcParams, SslKeyMldsaParams, SslKeyRsaParams, TokenRefillRate,
    TrustedHost,
};
use super::policy::{IpAddrMatch, MatchTarget};

/// Rate limits for the controller REST API.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiRateLimitProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_limit_configuration_refs: Vec<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationRule {
    pub action: AuthorizationAction,
    pub enable: bool,
    pub index: i32,
    pub r#match: AuthorizationMatch,
    pub name: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsrfPolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub cookie_name: Option<String>,
    pub csrf_file_ref: Option<String>,
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<CsrfRule>,
    pub tenant_ref: Option<String>,
    pub token_validity_time_min: Option<u32>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareSecurityModule {
    pub cloudhsm: Option<HsmAwsCloudHsm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nethsm: Vec<HsmThalesNetHsm>,
    pub rfs: Option<HsmThalesRfs>,
    pub sluna: Option<HsmSafenetLuna>,
    pub r#type: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareSecurityModuleGroup {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ca_certs: Vec<SslCertificate>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub hsm: HardwareSecurityModule,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HsmSafenetLunaServer {
    pub index: u32,
    pub partition_passwd: Option<String>,
    pub partition_serial_number: Option<String>,
    pub remote_ip: String,
    pub server_cert: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpsecurityRule {
    pub action: Option<HttpsecurityAction>,
    pub enable: bool,
    pub index: i32,
    pub log: Option<bool>,
    pub r#match: Option<MatchTarget>,
    pub name: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpReputationConfig {
    pub enable_ipv4_reputation: Option<bool>,
    pub enable_ipv6_reputation: Option<bool>,
    pub ip_reputation_file_object_expiry_duration: Option<u32>,
    pub ip_reputation_sync_interval: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpReputationDb {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_file_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_file_v6_refs: Vec<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incremental_file_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incremental_file_v6_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub service_status: Option<IpReputationServiceStatus>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub v6_version: Option<String>,
    pub vendor: String,
    pub version: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IptableRule {
    pub action: String,
    pub dnat_ip: Option<IpAddr>,
    pub dst_ip: Option<IpAddrPrefix>,
    pub dst_port: Option<PortRange>,
    pub input_interface: Option<String>,
    pub output_interface: Option<String>,
    pub proto: Option<String>,
    pub src_ip: Option<IpAddrPrefix>,
    pub src_port: Option<PortRange>,
    pub tag: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSecurityMatchTarget {
    pub client_ip: Option<IpAddrMatch>,
    pub client_port: Option<PortMatchGeneric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo_matches: Vec<GeoMatch>,
    pub ip_reputation_type: Option<IpReputationTypeMatch>,
    pub microservice: Option<MicroServiceMatch>,
    pub vs_port: Option<PortMatch>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSecurityPolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cloud_config_cksum: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub created_by: Option<String>,
    pub description: Option<String>,
    pub geo_db_ref: Option<String>,
    pub internal: Option<bool>,
    pub ip_reputation_db_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<NetworkSecurityRule>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSecurityRule {
    pub action: String,
    pub age: Option<u32>,
    pub created_by: Option<String>,
    pub enable: bool,
    pub index: u32,
    pub log: Option<bool>,
    pub r#match: NetworkSecurityMatchTarget,
    pub name: String,
    pub rl_param: Option<NetworkSecurityPolicyActionRlParam>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthProfile {
    pub authorization_endpoint: String,
    pub introspection_endpoint: Option<String>,
    pub issuer: Option<String>,
    pub jwks_timeout: Option<i32>,
    pub jwks_uri: Option<String>,
    pub oauth_resp_buffer_sz: Option<i32>,
    pub pool_ref: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthVsConfig {
    pub cookie_name: Option<String>,
    pub cookie_timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key: Vec<HttpCookiePersistenceKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oauth_settings: Vec<OAuthSettings>,
    pub redirect_uri: Option<String>,
}

/// Per-object rate limiting configuration.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfiguration {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub burst: Option<u32>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_methods: Vec<String>,
    pub name: String,
    pub resource: String,
    pub tenant_ref: Option<String>,
    pub token_refill_rate: TokenRefillRate,
    pub r#type: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimiter {
    pub burst_sz: Option<u32>,
    pub count: u32,
    pub name: Option<String>,
    pub period: u32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimiterAction {
    pub file: Option<HttpLocalFile>,
    pub redirect: Option<HttpRedirectAction>,
    pub status_code: Option<String>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateProfile {
    pub action: RateLimiterAction,
    pub burst_sz: Option<i32>,
    pub count: Option<i32>,
    pub explicit_tracking: Option<bool>,
    pub fine_grain: Option<bool>,
    pub http_cookie: Option<String>,
    pub http_header: Option<String>,
    pub period: Option<i32>,
    pub rate_limiter: Option<RateLimiter>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecureChannelAvailableLocalIps {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub end: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub free_controller_ips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub free_ips: Vec<i64>,
    pub name: String,
    pub start: Option<i32>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecureChannelMapping {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub auth_token: Option<String>,
    pub ip: Option<String>,
    pub is_controller: Option<bool>,
    pub local_ip: Option<String>,
    pub marked_for_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<SecureChannelMetadata>,
    pub name: String,
    pub pub_key: Option<String>,
    pub pub_key_pem: Option<String>,
    pub status: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecureChannelToken {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub expiry_time: Option<f64>,
    pub in_use: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<SecureChannelMetadata>,
    pub name: String,
    pub node_uuid: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslCertificateDescription {
    pub common_name: Option<String>,
    pub country: Option<String>,
    pub distinguished_name: Option<String>,
    pub email_address: Option<String>,
    pub locality: Option<String>,
    pub organization: Option<String>,
    pub organization_unit: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslKeyParams {
    pub algorithm: String,
    pub ec_params: Option<SslKeyEcParams>,
    pub mldsa_params: Option<SslKeyMldsaParams>,
    pub rsa_params: Option<SslKeyRsaParams>,
}

/// Hosts trusted by the controller.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustedHostProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<TrustedHost>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAgentCacheConfig {
    pub batch_size: Option<i32>,
    pub controller_cache_size: Option<i32>,
    pub max_upstream_queries: Option<i32>,
    pub max_wait_time: Option<i32>,
    pub num_entries_upstream_update: Option<i32>,
    pub percent_reserved_for_bad_bots: Option<i32>,
    pub percent_reserved_for_browsers: Option<i32>,
    pub percent_reserved_for_good_bots: Option<i32>,
    pub percent_reserved_for_outstanding: Option<i32>,
    pub se_cache_size: Option<i32>,
    pub upstream_update_interval: Option<i32>,
}
