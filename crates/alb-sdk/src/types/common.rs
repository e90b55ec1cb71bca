/*
[INPUT]:  Controller API schema for shapes shared by many objects
[OUTPUT]: Address, prefix, timestamp, label and port records
[POS]:    Data layer - common building blocks for every model module
[UPDATE]: When a shared shape gains fields or a new one is promoted from opaque
*/

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub const ADDR_TYPE_V4: &str = "V4";
pub const ADDR_TYPE_V6: &str = "V6";
pub const ADDR_TYPE_DNS: &str = "DNS";

/// IP address as the controller encodes it: the literal plus its family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpAddr {
    pub addr: String,
    pub r#type: String,
}

impl IpAddr {
    pub fn v4(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            r#type: ADDR_TYPE_V4.to_string(),
        }
    }

    pub fn v6(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            r#type: ADDR_TYPE_V6.to_string(),
        }
    }

    /// Picks `V4` or `V6` from the literal; anything unparsable is tagged `DNS`.
    pub fn parse(addr: &str) -> Self {
        let kind = match addr.parse::<std::net::IpAddr>() {
            Ok(std::net::IpAddr::V4(_)) => ADDR_TYPE_V4,
            Ok(std::net::IpAddr::V6(_)) => ADDR_TYPE_V6,
            Err(_) => ADDR_TYPE_DNS,
        };
        Self {
            addr: addr.to_string(),
            r#type: kind.to_string(),
        }
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.addr)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpAddrPrefix {
    pub ip_addr: IpAddr,
    pub mask: i32,
}

impl fmt::Display for IpAddrPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip_addr, self.mask)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpAddrRange {
    pub begin: IpAddr,
    pub end: IpAddr,
}

/// Seconds plus microseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeStamp {
    pub secs: i64,
    pub usecs: i64,
}

impl TimeStamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.usecs.checked_mul(1_000)?).ok()?;
        Utc.timestamp_opt(self.secs, nanos).single()
    }
}

impl From<DateTime<Utc>> for TimeStamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            secs: value.timestamp(),
            usecs: i64::from(value.timestamp_subsec_micros()),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigPbAttributes {
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleFilterMatchLabel {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRange {
    pub start: i32,
    pub end: i32,
}

impl PortRange {
    pub fn contains(&self, port: i32) -> bool {
        (self.start..=self.end).contains(&port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortMatch {
    pub match_criteria: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<PortRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_addr_parse_family() {
        assert_eq!(IpAddr::parse("10.0.0.1"), IpAddr::v4("10.0.0.1"));
        assert_eq!(IpAddr::parse("2001:db8::1"), IpAddr::v6("2001:db8::1"));
        assert_eq!(IpAddr::parse("app.example.com").r#type, ADDR_TYPE_DNS);
    }

    #[test]
    fn test_ip_addr_wire_keys() {
        let json = serde_json::to_value(IpAddr::v4("10.1.1.1")).unwrap();
        assert_eq!(json, serde_json::json!({"addr": "10.1.1.1", "type": "V4"}));
    }

    #[test]
    fn test_ip_addr_requires_type() {
        let err = serde_json::from_str::<IpAddr>(r#"{"addr": "10.1.1.1"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));
    }

    #[test]
    fn test_prefix_display() {
        let prefix = IpAddrPrefix {
            ip_addr: IpAddr::v4("10.10.0.0"),
            mask: 16,
        };
        assert_eq!(prefix.to_string(), "10.10.0.0/16");
    }

    #[test]
    fn test_timestamp_from_datetime() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let ts = TimeStamp::from(at);
        assert_eq!(ts.secs, at.timestamp());
        assert_eq!(ts.usecs, 0);
        assert_eq!(ts.to_datetime(), Some(at));
    }

    #[test]
    fn test_timestamp_rejects_out_of_range_usecs() {
        let ts = TimeStamp {
            secs: 0,
            usecs: -5,
        };
        assert!(ts.to_datetime().is_none());
    }

    #[test]
    fn test_key_value_omits_unset_value() {
        let kv = KeyValue {
            key: "env".to_string(),
            value: None,
        };
        assert_eq!(serde_json::to_string(&kv).unwrap(), r#"{"key":"env"}"#);
    }

    #[test]
    fn test_port_range_contains() {
        let range = PortRange { start: 80, end: 90 };
        assert!(range.contains(80));
        assert!(range.contains(90));
        assert!(!range.contains(91));
    }
}
