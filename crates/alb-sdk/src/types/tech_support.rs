/*
[INPUT]:  Tech support collection schema
[OUTPUT]: Typed tech support records
[POS]:    Data layer - tech support models
[UPDATE]: When tech support objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::TimeStamp;
use super::opaque::{ArchiveRules, UpgradeEvent};
use super::upgrade::ReadinessCheckObj;

/// Tech support bundle collected on the controller.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupport {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub case_number: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub level: Option<String>,
    pub name: Option<String>,
    pub node: Option<String>,
    pub obj_name: Option<String>,
    pub obj_uuid: Option<String>,
    pub output: Option<String>,
    pub params: Option<TechSupportParams>,
    pub progress: Option<u32>,
    pub size: Option<f64>,
    pub start_time: Option<String>,
    pub state: Option<TechSupportState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TechSupportEventMap>,
    pub tasks_completed: Option<i32>,
    pub techsupport_readiness: Option<ReadinessCheckObj>,
    pub tenant_ref: Option<String>,
    pub total_tasks: Option<i32>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupportEventMap {
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    pub start_time: Option<String>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_events: Vec<UpgradeEvent>,
    pub task_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupportEventParams {
    pub collect_all_events: Option<bool>,
    pub days: Option<u32>,
    pub files: Option<u32>,
}

/// Status message emitted while a tech support bundle is collected.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupportMessage {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub status: Option<String>,
    pub status_code: Option<String>,
    pub tech_support_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupportParams {
    pub case_number: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub event_params: Option<TechSupportEventParams>,
    pub level: Option<String>,
    pub name: Option<String>,
    pub pattern: Option<String>,
    pub skip_warnings: Option<bool>,
    pub slug: Option<String>,
    pub start_timestamp: Option<String>,
    pub tenant: Option<String>,
    pub uuid: Option<String>,
}

/// Controller-wide limits for tech support collection.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupportProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub archive_rules: Option<ArchiveRules>,
    pub event_params: Option<TechSupportEventParams>,
    pub file_size_threshold: Option<u32>,
    pub max_disk_size_percent: Option<u32>,
    pub min_free_disk_required: Option<u32>,
    pub no_of_techsupport_retentions: Option<u32>,
    pub simultaneous_invocations: Option<u32>,
    pub task_timeout: Option<u32>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSupportState {
    pub last_changed_time: Option<TimeStamp>,
    pub reason: Option<String>,
    pub state: Option<String>,
}
