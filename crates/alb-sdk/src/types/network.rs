/*
[INPUT]:  Network, network profile and route schema
[OUTPUT]: Typed network records
[POS]:    Data layer - network models
[UPDATE]: When network objects change
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::application::TcpFastPathProfile;
use super::common::{
    ConfigPbAttributes, IpAddr, IpAddrPrefix, IpAddrRange, KeyValue, RoleFilterMatchLabel,
};
use super::opaque::{
    RoutingService, SctpFastPathProfile, SctpProxyProfile, Subnet, SubnetRuntime, TcpProxyProfile,
    UdpFastPathProfile, UdpProxyProfile,
};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpNetworkSubnet {
    pub ipv6_range: Option<IpAddrRange>,
    pub network_ref: Option<String>,
    pub range: Option<IpAddrRange>,
    pub subnet: Option<IpAddrPrefix>,
    pub subnet6: Option<IpAddrPrefix>,
    pub subnet6_uuid: Option<String>,
    pub subnet_uuid: Option<String>,
}

/// Network known to the controller, with its configured subnets.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<KeyValue>,
    pub cloud_ref: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configured_subnets: Vec<Subnet>,
    pub dhcp_enabled: Option<bool>,
    pub exclude_discovered_subnets: Option<bool>,
    pub ip6_autocfg_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub synced_from_se: Option<bool>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub vcenter_dvs: Option<bool>,
    pub vimgrnw_ref: Option<String>,
    pub vrf_context_ref: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    pub connection_mirror: Option<bool>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub profile: NetworkProfileUnion,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfileUnion {
    pub sctp_fast_path_profile: Option<SctpFastPathProfile>,
    pub sctp_proxy_profile: Option<SctpProxyProfile>,
    pub tcp_fast_path_profile: Option<TcpFastPathProfile>,
    pub tcp_proxy_profile: Option<TcpProxyProfile>,
    pub r#type: String,
    pub udp_fast_path_profile: Option<UdpFastPathProfile>,
    pub udp_proxy_profile: Option<UdpProxyProfile>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkRuntime {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obj_uuids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnet_runtime: Vec<SubnetRuntime>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkService {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,
    pub cloud_ref: Option<String>,
    pub configpb_attributes: Option<ConfigPbAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,
    pub name: String,
    pub routing_service: Option<RoutingService>,
    pub se_group_ref: String,
    pub service_type: String,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub vrf_ref: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub enable_http2: Option<bool>,
    pub enable_ssl: Option<bool>,
    pub horizon_internal_ports: Option<bool>,
    pub is_active_ftp_data_port: Option<bool>,
    pub is_passive_ftp_data_port: Option<bool>,
    pub override_application_profile_ref: Option<String>,
    pub override_network_profile_ref: Option<String>,
    pub port: u32,
    pub port_range_end: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    pub disable_gateway_monitor: Option<bool>,
    pub if_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    pub next_hop: IpAddr,
    pub prefix: IpAddrPrefix,
    pub route_id: String,
}
