/*
[INPUT]:  Web application firewall schema
[OUTPUT]: Typed WAF profile, policy and rule set records
[POS]:    Data layer - WAF models
[UPDATE]: When WAF objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{ConfigPbAttributes, KeyValue, RoleFilterMatchLabel};
use super::opaque::{
    AppLearningConfidenceOverride, HeaderInfoInUri, ParamsInUri, RuleInfo, WafConfig, WafDataFile,
    WafPsmLocation, WafRuleGroup,
};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppHdr {
    pub hdr_match_case: String,
    pub hdr_name: String,
    pub hdr_string_op: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_emails: Vec<String>,
    pub enable_auto_case_creation_on_controller_failure: Option<bool>,
    pub enable_auto_case_creation_on_se_failure: Option<bool>,
    pub enable_cleanup_of_attached_files: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FalsePositiveResult {
    pub always_fail: Option<bool>,
    pub attack: Option<bool>,
    pub confidence: Option<f32>,
    pub false_positive: Option<bool>,
    pub header_info: Option<HeaderInfoInUri>,
    pub http_method: Option<String>,
    pub not_sure: Option<bool>,
    pub params_info: Option<ParamsInUri>,
    pub rule_info: Option<RuleInfo>,
    pub sometimes_fail: Option<bool>,
    pub uri: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonParsingLimits {
    pub max_nesting_level: Option<u32>,
    pub max_subelements: Option<u32>,
    pub max_total_elements: Option<u32>,
    pub max_value_length: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositiveSecurityParams {
    pub confidence_override: Option<AppLearningConfidenceOverride>,
    pub max_params: Option<u32>,
    pub max_uris: Option<u32>,
    pub min_confidence: Option<String>,
    pub min_hits_to_program: Option<u64>,
}

/// Allow-list style policy for application traffic.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositiveSecurityPolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub enable_positive_security_rule_updates: Option<bool>,
    pub enable_regex_programming: Option<bool>,
    pub name: Option<String>,
    pub positive_security_params: Option<PositiveSecurityParams>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

/// Core rule set release used by WAF policies.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafCrs {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<WafRuleGroup>,
    pub integrity: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub release_date: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub version: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafCrsConfig {
    pub enable_auto_download_waf_signatures: Option<bool>,
    pub enable_waf_signatures_notifications: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafLimits {
    pub num_allowed_content_types: Option<i32>,
    pub num_allowed_request_content_type_charsets: Option<i32>,
    pub num_allowlist_policy_rules: Option<i32>,
    pub num_applications: Option<i32>,
    pub num_data_files: Option<i32>,
    pub num_pre_post_crs_groups: Option<i32>,
    pub num_psm_groups: Option<i32>,
    pub num_psm_match_elements: Option<i32>,
    pub num_psm_match_rules_per_loc: Option<i32>,
    pub num_psm_total_locations: Option<i32>,
    pub num_restricted_extensions: Option<i32>,
    pub num_restricted_headers: Option<i32>,
    pub num_rule_tags: Option<i32>,
    pub num_rules_per_rulegroup: Option<i32>,
    pub num_static_extensions: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafMatchElementSubParser {
    pub index: u32,
    pub match_case: Option<String>,
    pub match_element: String,
    pub match_op: Option<String>,
    pub sub_parser: Option<String>,
}

/// Positive security model group attached to a WAF policy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafPolicyPsmGroup {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub completely_described_match_elements: Vec<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub enable: Option<bool>,
    pub hit_action: Option<String>,
    pub is_learning_group: Option<bool>,
    pub location_match_miss_action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<WafPsmLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub miss_action: Option<String>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

/// Web application firewall profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WafProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub config: WafConfig,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<WafDataFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}
