/*
[INPUT]:  Reference strings found in `*_ref` / `*_refs` fields
[OUTPUT]: Parsed object type, uuid and name of the referenced object
[POS]:    Data layer - reference field helpers
[UPDATE]: When the controller changes its reference URL format
*/

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefParseError {
    #[error("reference has no /api/ path: {0}")]
    MissingApiPath(String),

    #[error("reference has neither a uuid nor a name: {0}")]
    Unresolvable(String),

    #[error("expected a reference to {expected}, got {found}")]
    TypeMismatch { expected: String, found: String },
}

/// A reference to another top-level object.
///
/// Accepted forms:
/// - `https://<host>/api/<type>/<uuid>#<name>`
/// - `/api/<type>/<uuid>`
/// - `/api/<type>?name=<name>` (also `/api/<type>/?name=<name>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    object_type: String,
    uuid: Option<String>,
    name: Option<String>,
}

impl ObjectRef {
    pub fn by_uuid(object_type: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            uuid: Some(uuid.into()),
            name: None,
        }
    }

    pub fn by_name(object_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            uuid: None,
            name: Some(name.into()),
        }
    }

    pub fn parse(reference: &str) -> Result<Self, RefParseError> {
        let (rest, fragment) = match reference.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (reference, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let api_path = if let Some(idx) = path.find("/api/") {
            &path[idx + "/api/".len()..]
        } else if let Some(stripped) = path.strip_prefix("api/") {
            stripped
        } else {
            return Err(RefParseError::MissingApiPath(reference.to_string()));
        };

        let mut segments = api_path.split('/').filter(|segment| !segment.is_empty());
        let object_type = segments
            .next()
            .ok_or_else(|| RefParseError::MissingApiPath(reference.to_string()))?
            .to_string();
        let uuid = segments.next().map(str::to_string);

        let query_name = query.and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "name")
                .map(|(_, value)| value.into_owned())
        });
        let name = fragment
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .or(query_name);

        if uuid.is_none() && name.is_none() {
            return Err(RefParseError::Unresolvable(reference.to_string()));
        }

        Ok(Self {
            object_type,
            uuid,
            name,
        })
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Relative API path that fetches the referenced object.
    ///
    /// Uuid lookups return the object itself; name lookups return a collection.
    pub fn api_path(&self) -> String {
        match (&self.uuid, &self.name) {
            (Some(uuid), _) => format!("api/{}/{}", self.object_type, uuid),
            (None, Some(name)) => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("name", name)
                    .finish();
                format!("api/{}?{}", self.object_type, query)
            }
            (None, None) => format!("api/{}", self.object_type),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.api_path())?;
        if let (Some(_), Some(name)) = (&self.uuid, &self.name) {
            write!(f, "#{name}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectRef {
    type Err = RefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Tenant name carried by a `tenant_ref`.
///
/// Uses the `#name` suffix when present, otherwise the last path segment.
pub fn tenant_from_ref(tenant_ref: &str) -> String {
    match tenant_ref.split_once('#') {
        Some((_, name)) => name.to_string(),
        None => {
            let trimmed = tenant_ref.trim_end_matches('/');
            trimmed.rsplit('/').next().unwrap_or(trimmed).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "https://10.79.111.29/api/healthmonitor/healthmonitor-dfe63e98#System-HTTP",
        "healthmonitor",
        Some("healthmonitor-dfe63e98"),
        Some("System-HTTP")
    )]
    #[case("/api/cloud/cloud-1234", "cloud", Some("cloud-1234"), None)]
    #[case("api/pool/pool-42", "pool", Some("pool-42"), None)]
    #[case("/api/tenant?name=admin", "tenant", None, Some("admin"))]
    #[case("https://ctrl/api/tenant/?name=admin", "tenant", None, Some("admin"))]
    #[case("/api/vrfcontext?name=global%20vrf", "vrfcontext", None, Some("global vrf"))]
    fn test_parse_reference_forms(
        #[case] reference: &str,
        #[case] object_type: &str,
        #[case] uuid: Option<&str>,
        #[case] name: Option<&str>,
    ) {
        let parsed = ObjectRef::parse(reference).expect("valid reference");
        assert_eq!(parsed.object_type(), object_type);
        assert_eq!(parsed.uuid(), uuid);
        assert_eq!(parsed.name(), name);
    }

    #[rstest]
    #[case("pool-1234")]
    #[case("https://ctrl/api/")]
    #[case("/api/pool")]
    fn test_parse_rejects_unusable(#[case] reference: &str) {
        assert!(ObjectRef::parse(reference).is_err());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(
            ObjectRef::by_uuid("pool", "pool-1").to_string(),
            "/api/pool/pool-1"
        );
        assert_eq!(
            ObjectRef::by_name("cloud", "Default-Cloud").to_string(),
            "/api/cloud?name=Default-Cloud"
        );
        let parsed = ObjectRef::parse("https://h/api/pool/pool-1#web").unwrap();
        assert_eq!(parsed.to_string(), "/api/pool/pool-1#web");
    }

    #[test]
    fn test_api_path_encodes_names() {
        let reference = ObjectRef::by_name("pool", "web pool");
        assert_eq!(reference.api_path(), "api/pool?name=web+pool");
        let reparsed = ObjectRef::parse(&reference.to_string()).unwrap();
        assert_eq!(reparsed.name(), Some("web pool"));
    }

    #[test]
    fn test_tenant_from_ref() {
        assert_eq!(tenant_from_ref("https://ctrl/api/tenant/tenant-1#admin"), "admin");
        assert_eq!(tenant_from_ref("https://ctrl/api/tenant/tenant-1"), "tenant-1");
        assert_eq!(tenant_from_ref("admin"), "admin");
        assert_eq!(tenant_from_ref("https://ctrl/api/tenant/tenant-1/"), "tenant-1");
    }
}
