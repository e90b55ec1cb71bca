/*
[INPUT]:  License status and SaaS licensing schema
[OUTPUT]: Typed licensing records
[POS]:    Data layer - licensing models
[UPDATE]: When licensing objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ConfigPbAttributes;
use super::opaque::LicenseServiceUpdate;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurstLicenseDetails {
    pub cores: Option<u32>,
    pub end_time: Option<String>,
    pub se_name: Option<String>,
    pub se_uuid: Option<String>,
    pub start_time: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseDetails {
    pub backend_servers: Option<u32>,
    pub expiry_at: Option<String>,
    pub license_id: Option<String>,
    pub license_type: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseStatus {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub saas_status: Option<SaasLicensingStatus>,
    pub service_update: Option<LicenseServiceUpdate>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaasLicensingStatus {
    pub connected: Option<bool>,
    pub enabled: Option<bool>,
    pub expired: Option<bool>,
    pub message: Option<String>,
    pub name: Option<String>,
    pub public_key: Option<String>,
    pub reserve_service_units: Option<f64>,
}
