/*
[INPUT]:  HTTP policy, match target and rewrite schema
[OUTPUT]: Typed policy, rule and match records
[POS]:    Data layer - policy models
[UPDATE]: When match targets or rule actions change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{
    ConfigPbAttributes, IpAddr, IpAddrPrefix, IpAddrRange, KeyValue, PortMatch,
    RoleFilterMatchLabel,
};
use super::opaque::{
    BotDetectionMatch, CookieMatch, DnsClientIpMatch, DnsClientPortMatch, DnsGeoLocationMatch,
    DnsQueryNameMatch, DnsQueryTypeMatch, DnsTransportProtocolMatch, GeoMatch, HostHdrMatch,
    HttpHdrAction, HttpRequestPolicy, HttpResponsePolicy, HttpsecurityPolicy, HttpstatusMatch,
    IpReputationTypeMatch, L4RuleProtocolMatch, LocationHdrMatch, MethodMatch, PathMatch,
    ProtocolMatch, QueryMatch, RspContentRewriteRule, SearchReplacePair, UriParam,
};
use super::reports::RetentionAction;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionGroupConfig {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub action_script_config_ref: Option<String>,
    pub autoscale_trigger_notification: Option<bool>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub email_config_ref: Option<String>,
    pub external_only: bool,
    pub level: String,
    pub name: String,
    pub snmp_trap_profile_ref: Option<String>,
    pub syslog_config_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionRules {
    pub enforced_report_period: Option<String>,
    pub enforced_report_samples: Option<u32>,
    pub max_concurrent_workers: Option<u32>,
    pub min_free_disk_required: Option<f32>,
    pub timeout: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRewriteProfile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub req_rewrite_rules: Vec<ReqContentRewriteRule>,
    pub rewritable_content_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rsp_rewrite_rules: Vec<RspContentRewriteRule>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsRuleMatchTarget {
    pub client_ip: Option<IpAddrMatch>,
    pub client_ip_address: Option<DnsClientIpMatch>,
    pub client_port_numbers: Option<DnsClientPortMatch>,
    pub geo_location: Option<DnsGeoLocationMatch>,
    pub protocol: Option<DnsTransportProtocolMatch>,
    pub query_name: Option<DnsQueryNameMatch>,
    pub query_type: Option<DnsQueryTypeMatch>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPageBody {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub error_page_body: String,
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HdrMatch {
    pub hdr: String,
    pub match_case: Option<String>,
    pub match_criteria: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub string_group_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpPolicySet {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cloud_config_cksum: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub created_by: Option<String>,
    pub description: Option<String>,
    pub geo_db_ref: Option<String>,
    pub http_request_policy: Option<HttpRequestPolicy>,
    pub http_response_policy: Option<HttpResponsePolicy>,
    pub http_security_policy: Option<HttpsecurityPolicy>,
    pub ip_reputation_db_ref: Option<String>,
    pub is_internal_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpResponseRule {
    pub all_headers: Option<bool>,
    pub enable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdr_action: Vec<HttpHdrAction>,
    pub index: i32,
    pub loc_hdr_action: Option<HttpRewriteLocHdrAction>,
    pub log: Option<bool>,
    pub r#match: Option<ResponseMatchTarget>,
    pub name: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRewriteLocHdrAction {
    pub host: Option<UriParam>,
    pub keep_query: Option<bool>,
    pub path: Option<UriParam>,
    pub port: Option<u32>,
    pub protocol: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpVersionMatch {
    pub match_criteria: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAddrMatch {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addrs: Vec<IpAddr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_refs: Vec<String>,
    pub match_criteria: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<IpAddrPrefix>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<IpAddrRange>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct L7limits {
    pub http_policies_per_vs: Option<i32>,
    pub num_compression_filters: Option<i32>,
    pub num_custom_str: Option<i32>,
    pub num_matches_per_rule: Option<i32>,
    pub num_rules_per_http_policy: Option<i32>,
    pub num_strgroups_per_match: Option<i32>,
    pub str_cache_mime: Option<i32>,
    pub str_groups_cache_mime: Option<i32>,
    pub str_groups_no_cache_mime: Option<i32>,
    pub str_groups_no_cache_uri: Option<i32>,
    pub str_no_cache_mime: Option<i32>,
    pub str_no_cache_uri: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchTarget {
    pub bot_detection_result: Option<BotDetectionMatch>,
    pub client_ip: Option<IpAddrMatch>,
    pub cookie: Option<CookieMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo_matches: Vec<GeoMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdrs: Vec<HdrMatch>,
    pub host_hdr: Option<HostHdrMatch>,
    pub ip_reputation_type: Option<IpReputationTypeMatch>,
    pub method: Option<MethodMatch>,
    pub path: Option<PathMatch>,
    pub protocol: Option<ProtocolMatch>,
    pub query: Option<QueryMatch>,
    pub source_ip: Option<IpAddrMatch>,
    pub version: Option<HttpVersionMatch>,
    pub vs_port: Option<PortMatch>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRule {
    pub action: RetentionAction,
    pub limit: Option<u64>,
    pub model_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReqContentRewriteRule {
    pub enable: Option<bool>,
    pub index: Option<i32>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<SearchReplacePair>,
    pub rewritable_content_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMatchTarget {
    pub client_ip: Option<IpAddrMatch>,
    pub cookie: Option<CookieMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdrs: Vec<HdrMatch>,
    pub host_hdr: Option<HostHdrMatch>,
    pub loc_hdr: Option<LocationHdrMatch>,
    pub method: Option<MethodMatch>,
    pub path: Option<PathMatch>,
    pub protocol: Option<ProtocolMatch>,
    pub query: Option<QueryMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rsp_hdrs: Vec<HdrMatch>,
    pub source_ip: Option<IpAddrMatch>,
    pub status: Option<HttpstatusMatch>,
    pub version: Option<HttpVersionMatch>,
    pub vs_port: Option<PortMatch>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceMatch {
    pub destination_port: Option<PortMatch>,
    pub protocol: Option<L4RuleProtocolMatch>,
    pub source_port: Option<PortMatch>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringMatch {
    pub match_criteria: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_str: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub string_group_refs: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VipAction {
    pub action: Option<String>,
    pub from_se: Option<String>,
    pub new_vcpus: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_list: Vec<String>,
    pub status: Option<String>,
    pub timestamp: Option<i64>,
    pub to_new_se: Option<bool>,
    pub to_se: Option<String>,
    pub vip_id: Option<String>,
    pub vip_uuid: Option<String>,
    pub vs_uuid: Option<String>,
    pub waiting_for_sibling: Option<bool>,
}
