/*
[INPUT]:  Controller REST conventions
[OUTPUT]: Typed enums for patch operations and URL schemes
[POS]:    Data layer - small closed sets used by the client
[UPDATE]: When the controller accepts new patch operations or schemes
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patch operation; the controller expects the payload as `{"<op>": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Delete,
}

impl PatchOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Delete => "delete",
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(PatchOp::Add),
            "replace" => Ok(PatchOp::Replace),
            "delete" => Ok(PatchOp::Delete),
            other => Err(format!("unknown patch operation: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_op_wire_value() {
        assert_eq!(serde_json::to_string(&PatchOp::Replace).unwrap(), r#""replace""#);
        assert_eq!("DELETE".parse::<PatchOp>(), Ok(PatchOp::Delete));
        assert!("merge".parse::<PatchOp>().is_err());
    }

    #[test]
    fn test_scheme_default_is_https() {
        assert_eq!(Scheme::default(), Scheme::Https);
        let scheme: Scheme = serde_json::from_str(r#""http""#).unwrap();
        assert_eq!(scheme.to_string(), "http");
    }
}
