/*
[INPUT]:  Application and L4 application profile schema
[OUTPUT]: Typed application records
[POS]:    Data layer - application profile models
[UPDATE]: When application profiles change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ConfigPbAttributes;
use super::opaque::{DsrProfile, FtpProfile, TcpOptions};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub description: Option<String>,
    pub name: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtualservice_refs: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiameterServiceApplicationProfile {
    pub client_origin_host: Option<String>,
    pub client_origin_realm: Option<String>,
    pub host_ip_addr_rewrite: Option<bool>,
    pub max_outstanding_req: Option<u32>,
    pub req_timeout: Option<u32>,
    pub server_origin_host: Option<String>,
    pub server_origin_realm: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TcpApplicationProfile {
    pub ftp_profile: Option<FtpProfile>,
    pub pki_profile_ref: Option<String>,
    pub proxy_protocol_enabled: Option<bool>,
    pub proxy_protocol_version: Option<String>,
    pub ssl_client_certificate_mode: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TcpFastPathProfile {
    pub dsr_profile: Option<DsrProfile>,
    pub enable_syn_protection: Option<bool>,
    pub session_idle_timeout: Option<i32>,
    pub tcp_fastpath_options: Option<TcpOptions>,
}
