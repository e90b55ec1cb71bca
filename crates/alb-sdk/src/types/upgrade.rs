/*
[INPUT]:  Image, upgrade and pre-check schema
[OUTPUT]: Typed upgrade records
[POS]:    Data layer - upgrade models
[UPDATE]: When upgrade objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{IpAddr, TimeStamp};
use super::opaque::{
    ControllerParams, ImageCloudData, ImageEventMap, ImageParams, ImageUploadOpsStatus,
    PackageDetails, PreChecksParams, SeGroupOptions, SeGroupResumeOptions, SupportedMigrations,
};
use super::service_engine::{DryRunParams, ServiceEngineParams};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cloud_info_values: Vec<ImageCloudData>,
    pub controller_info: Option<PackageDetails>,
    pub controller_patch_name: Option<String>,
    pub controller_patch_ref: Option<String>,
    pub duration: Option<i32>,
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ImageEventMap>,
    pub img_state: Option<ImageUploadOpsStatus>,
    pub migrations: Option<SupportedMigrations>,
    pub name: String,
    pub progress: Option<i32>,
    pub se_info: Option<PackageDetails>,
    pub se_patch_name: Option<String>,
    pub se_patch_ref: Option<String>,
    pub start_time: Option<String>,
    pub status: Option<String>,
    pub tasks_completed: Option<i32>,
    pub tenant_ref: Option<String>,
    pub total_tasks: Option<i32>,
    pub r#type: Option<String>,
    pub uber_bundle: Option<bool>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageEvent {
    pub duration: Option<i32>,
    pub end_time: Option<String>,
    pub ip: Option<IpAddr>,
    pub message: Option<String>,
    pub start_time: Option<String>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_tasks: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NsxtImageDetails {
    pub cc_id: Option<String>,
    pub error_string: Option<String>,
    pub image_version: Option<String>,
    pub vc_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreCheckOpsState {
    pub last_changed_time: Option<TimeStamp>,
    pub reason: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreChecksInfo {
    pub check_code: Option<String>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_details: Vec<String>,
    pub start_time: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessCheckObj {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<PreChecksInfo>,
    pub checks_completed: Option<i32>,
    pub duration: Option<u32>,
    pub end_time: Option<String>,
    pub progress: Option<u32>,
    pub start_time: Option<String>,
    pub state: Option<PreCheckOpsState>,
    pub total_checks: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeUpgradeParams {
    pub disruptive: Option<bool>,
    pub patch: Option<bool>,
    pub patch_rollback: Option<bool>,
    pub resume_from_suspend: Option<bool>,
    pub rollback: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_group_refs: Vec<String>,
    pub skip_suspended: Option<bool>,
    pub suspend_on_failure: Option<bool>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOpsParam {
    pub controller: Option<ControllerParams>,
    pub image_ref: Option<String>,
    pub patch_ref: Option<String>,
    pub se_group_options: Option<SeGroupOptions>,
    pub se_group_resume_options: Option<SeGroupResumeOptions>,
    pub service_engine: Option<ServiceEngineParams>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeParams {
    pub controller_patch_ref: Option<String>,
    pub dryrun: Option<bool>,
    pub image_ref: Option<String>,
    pub prechecks_only: Option<bool>,
    pub se_group_options: Option<SeGroupOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub se_group_refs: Vec<String>,
    pub se_patch_ref: Option<String>,
    pub skip_warnings: Option<bool>,
    pub system: Option<bool>,
}

/// Upgrade and patch behaviour for controller and service engines.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub controller: Option<ControllerParams>,
    pub controller_params: Option<ControllerParams>,
    pub dry_run: Option<DryRunParams>,
    pub image: Option<ImageParams>,
    pub pre_checks: Option<PreChecksParams>,
    pub service_engine: Option<ServiceEngineParams>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}
