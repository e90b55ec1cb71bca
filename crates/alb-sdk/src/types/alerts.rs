/*
[INPUT]:  Alert delivery and SNMP trap schema
[OUTPUT]: Typed alert configuration records
[POS]:    Data layer - alerting models
[UPDATE]: When alert channels change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ConfigPbAttributes;
use super::opaque::{
    AlertFilter, AlertRuleEvent, AlertRuleMetric, AlertSyslogServer, SnmpTrapServer,
};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertEmailConfig {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cc_emails: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub to_emails: String,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertObjectList {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<String>,
    pub source: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub conn_app_log_rule: Option<AlertFilter>,
    pub event_match_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics_rule: Vec<AlertRuleMetric>,
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sys_event_rule: Vec<AlertRuleEvent>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertSyslogConfig {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syslog_servers: Vec<AlertSyslogServer>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnmpTrapProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub name: String,
    pub tenant_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trap_servers: Vec<SnmpTrapServer>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}
