/*
[INPUT]:  Per-request log fragments (diameter, OAuth, PAA, client logs)
[OUTPUT]: Typed log records
[POS]:    Data layer - log models
[UPDATE]: When log fragments change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::opaque::{AuthnRuleMatch, AuthzRuleMatch, OauthSubRequestLog, PaaRequestLog};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiameterLog {
    pub application_id: Option<u32>,
    pub avp_key_type: Option<String>,
    pub command_code: Option<u32>,
    pub destination_host: Option<String>,
    pub destination_realm: Option<String>,
    pub end_to_end_identifier: Option<u32>,
    pub hop_by_hop_identifier: Option<u32>,
    pub origin_host: Option<String>,
    pub origin_realm: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullClientLogs {
    pub duration: Option<u32>,
    pub enabled: bool,
    pub throttle: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OauthLog {
    pub authn_rule_match: Option<AuthnRuleMatch>,
    pub authz_rule_match: Option<AuthzRuleMatch>,
    pub is_session_cookie_expired: Option<bool>,
    pub jwks_subrequest: Option<OauthSubRequestLog>,
    pub oauth_state: Option<String>,
    pub state: Option<String>,
    pub token_exchange_subrequest: Option<OauthSubRequestLog>,
    pub token_introspection_subrequest: Option<OauthSubRequestLog>,
    pub token_refresh_subrequest: Option<OauthSubRequestLog>,
    pub userinfo_subrequest: Option<OauthSubRequestLog>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaaLog {
    pub cache_hit: Option<bool>,
    pub client_request_body_sent: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_logs: Vec<PaaRequestLog>,
}
