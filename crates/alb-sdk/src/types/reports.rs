/*
[INPUT]:  Report and retention schema
[OUTPUT]: Typed report generation and retention records
[POS]:    Data layer - report models
[UPDATE]: When report or retention objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::TimeStamp;
use super::opaque::{ActionArgs, PolicySpec, ReportParameter, ReportSection, TaskEventMap};
use super::policy::CollectionRules;
use super::upgrade::ReadinessCheckObj;

/// Generated report instance.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    pub filename: Option<String>,
    pub name: Option<String>,
    pub node: Option<String>,
    pub pre_check: Option<ReadinessCheckObj>,
    pub progress: Option<u32>,
    pub request: Option<ReportGenerationRequest>,
    pub start_time: Option<String>,
    pub state: Option<ReportGenState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskEventMap>,
    pub tasks_completed: Option<u32>,
    pub tenant_ref: Option<String>,
    pub total_tasks: Option<u32>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDuration {
    pub end_time: Option<TimeStamp>,
    pub period: Option<String>,
    pub start_time: Option<TimeStamp>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportGenState {
    pub last_changed_time: Option<TimeStamp>,
    pub reason: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportGenerationRequest {
    pub duration: Option<ReportDuration>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ReportParameter>,
    pub report: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ReportSection>,
}

/// Settings shared by report generation requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub collection_rules: Option<CollectionRules>,
    pub max_concurrent_reports: Option<u32>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetentionAction {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ActionArgs>,
    pub path: String,
    pub r#type: String,
}

/// How long journal and report objects are kept.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<RetentionSummary>,
    pub name: Option<String>,
    pub policy: PolicySpec,
    pub summary: Option<RetentionSummary>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetentionSummary {
    pub duration: Option<u64>,
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    pub start_time: Option<String>,
    pub status: Option<String>,
}
