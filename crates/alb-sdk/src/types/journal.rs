/*
[INPUT]:  Task journal, job and state-diff schema
[OUTPUT]: Typed journal and snapshot records
[POS]:    Data layer - journal models
[UPDATE]: When journal or state-diff objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::opaque::{
    EventMap, JournalError, JournalInfo, Postsnapshot, Presnapshot, SeGroupStatus, SeUpgradeEvents,
    SubJob, UpgradeOpsState,
};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub expires_at: String,
    pub name: String,
    pub obj_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjobs: Vec<SubJob>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalSummary {
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    pub error_count: Option<u32>,
    pub reason: Option<String>,
    pub start_time: Option<String>,
    pub state: Option<String>,
    pub status: Option<String>,
    pub r#type: String,
    pub warning_count: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalTask {
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    pub reason: Option<String>,
    pub start_time: Option<String>,
    pub state: Option<String>,
    pub status: Option<bool>,
    pub task_description: Option<String>,
    pub task_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpsHistory {
    pub duration: Option<i32>,
    pub end_time: Option<String>,
    pub ops: Option<String>,
    pub patch_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_upgrade_events: Vec<SeUpgradeEvents>,
    pub seg_status: Option<SeGroupStatus>,
    pub start_time: Option<String>,
    pub state: Option<UpgradeOpsState>,
    pub statediff_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upgrade_events: Vec<EventMap>,
    pub version: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatediffEvent {
    pub duration: Option<i32>,
    pub end_time: Option<String>,
    pub message: Option<String>,
    pub start_time: Option<String>,
    pub status: Option<String>,
    pub task_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatediffOperation {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<StatediffEvent>,
    pub name: Option<String>,
    pub node_uuid: Option<String>,
    pub operation: Option<String>,
    pub phase: Option<String>,
    pub status: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatediffSnapshot {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub gslb_name: Option<String>,
    pub gslb_uuid: Option<String>,
    pub name: Option<String>,
    pub pool_name: Option<String>,
    pub pool_uuid: Option<String>,
    pub post_snapshot: Option<Postsnapshot>,
    pub pre_snapshot: Option<Presnapshot>,
    pub se_group_name: Option<String>,
    pub se_group_uuid: Option<String>,
    pub se_name: Option<String>,
    pub se_uuid: Option<String>,
    pub snapshot_type: Option<String>,
    pub statediff_operation_ref: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub vs_name: Option<String>,
    pub vs_uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskJournal {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JournalError>,
    pub image_ref: Option<String>,
    pub info: Option<JournalInfo>,
    pub name: Option<String>,
    pub obj_cloud_ref: Option<String>,
    pub operation: Option<String>,
    pub patch_image_ref: Option<String>,
    pub summary: JournalSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<JournalTask>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<JournalError>,
}
