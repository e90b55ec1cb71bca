/*
[INPUT]:  Role, user account and login activity schema
[OUTPUT]: Typed admin records (roles, user profiles, password changes)
[POS]:    Data layer - administration models
[UPDATE]: When roles or user account objects gain fields
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ConfigPbAttributes;
use super::opaque::{Permission, RoleFilter};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUserAuthrzByRule {
    pub policies: Option<String>,
    pub roles: Option<String>,
    pub rule: Option<String>,
    pub tenants: Option<String>,
    pub user: Option<String>,
    pub userprofile: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUserLogout {
    pub client_ip: Option<String>,
    pub error_message: Option<String>,
    pub local: Option<bool>,
    pub status: Option<String>,
    pub user: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUserPasswordChangeRequest {
    pub client_ip: Option<String>,
    pub status: Option<String>,
    pub user: Option<String>,
    pub user_email: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LdapUserBindSettings {
    pub dn_template: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_attributes: Vec<String>,
    pub user_id_attribute: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub allow_unlabelled_access: Option<bool>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<RoleFilter>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub privileges: Vec<Permission>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAccountProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub account_lock_timeout: Option<i32>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub credentials_timeout_threshold: Option<i32>,
    pub login_failure_count_expiry_window: Option<i32>,
    pub max_concurrent_sessions: Option<i32>,
    pub max_login_failure_count: Option<i32>,
    pub max_password_history_count: Option<i32>,
    pub name: String,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub concurrent_sessions: Option<i32>,
    pub failed_login_attempts: Option<i32>,
    pub last_login_ip: Option<String>,
    pub last_login_timestamp: Option<String>,
    pub last_password_update: Option<String>,
    pub logged_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub login_failure_timestamps: Vec<String>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_password: Vec<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}
