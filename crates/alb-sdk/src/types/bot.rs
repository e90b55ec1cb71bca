/*
[INPUT]:  Bot management schema
[OUTPUT]: Typed bot detection and classification records
[POS]:    Data layer - bot management models
[UPDATE]: When bot detection objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::opaque::{
    BotAllowList, BotClassMatcher, BotClassification, BotConfigIpLocation, BotConfigIpReputation,
    BotConfigUserAgent, BotTypeMatcher, HostHdrMatch, IpReputationTypeMapping, MethodMatch,
    PathMatch,
};
use super::policy::{HdrMatch, IpAddrMatch, StringMatch};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotDetectionPolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub allow_list: Option<BotAllowList>,
    pub description: Option<String>,
    pub ip_location_detector: BotConfigIpLocation,
    pub ip_reputation_detector: BotConfigIpReputation,
    pub name: String,
    pub system_bot_mapping_ref: Option<String>,
    pub system_consolidator_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub user_agent_detector: BotConfigUserAgent,
    pub user_bot_mapping_ref: Option<String>,
    pub user_consolidator_ref: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotIdentification {
    pub class: Option<String>,
    pub identifier: Option<String>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotIpReputationTypeMapping {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_reputation_mappings: Vec<IpReputationTypeMapping>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotMappingRule {
    pub class_matcher: Option<BotClassMatcher>,
    pub classification: BotClassification,
    pub component_matcher: Option<String>,
    pub identifier_matcher: Option<StringMatch>,
    pub index: i32,
    pub r#match: BotMappingRuleMatchTarget,
    pub name: String,
    pub type_matcher: Option<BotTypeMatcher>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotMappingRuleMatchTarget {
    pub class_matcher: Option<BotClassMatcher>,
    pub client_ip: Option<IpAddrMatch>,
    pub component_matcher: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdrs: Vec<HdrMatch>,
    pub host_hdr: Option<HostHdrMatch>,
    pub identifier_matcher: Option<StringMatch>,
    pub method: Option<MethodMatch>,
    pub path: Option<PathMatch>,
    pub type_matcher: Option<BotTypeMatcher>,
}
