/*
[INPUT]:  Per-call lookup filters (name, cloud, tenant, extra params)
[OUTPUT]: Query parameters and header overrides for a controller request
[POS]:    HTTP layer - request option builder
[UPDATE]: When the controller gains new collection filters
*/

/// Page size requested for collection reads.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Options applied to a single API call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOptions {
    name: Option<String>,
    cloud: Option<String>,
    cloud_uuid: Option<String>,
    tenant: Option<String>,
    skip_default: bool,
    include_name: bool,
    params: Vec<(String, String)>,
}

impl ApiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by object name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by cloud name (`cloud_ref.name`).
    pub fn cloud(mut self, cloud: impl Into<String>) -> Self {
        self.cloud = Some(cloud.into());
        self
    }

    /// Filter by cloud uuid (`cloud_ref.uuid`).
    pub fn cloud_uuid(mut self, cloud_uuid: impl Into<String>) -> Self {
        self.cloud_uuid = Some(cloud_uuid.into());
        self
    }

    /// Send this call as another tenant.
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Ask the controller to leave default-valued fields out of responses.
    pub fn skip_default(mut self, skip: bool) -> Self {
        self.skip_default = skip;
        self
    }

    /// Ask the controller to append `#name` to reference fields.
    pub fn include_name(mut self, include: bool) -> Self {
        self.include_name = include;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn tenant_override(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name".to_string(), name.clone()));
        }
        if let Some(cloud) = &self.cloud {
            pairs.push(("cloud_ref.name".to_string(), cloud.clone()));
        }
        if let Some(cloud_uuid) = &self.cloud_uuid {
            pairs.push(("cloud_ref.uuid".to_string(), cloud_uuid.clone()));
        }
        if self.skip_default {
            pairs.push(("skip_default".to_string(), "true".to_string()));
        }
        if self.include_name {
            pairs.push(("include_name".to_string(), "true".to_string()));
        }
        pairs.extend(self.params.iter().cloned());
        pairs
    }

    /// Same options without any query parameters; used when following
    /// `next` links, which already carry the original query.
    pub(crate) fn headers_only(&self) -> Self {
        Self {
            tenant: self.tenant.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_have_no_query() {
        assert!(ApiOptions::new().query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_order_and_keys() {
        let options = ApiOptions::new()
            .name("web-pool")
            .cloud("Default-Cloud")
            .cloud_uuid("cloud-1")
            .include_name(true)
            .param("page_size", "100");
        let keys: Vec<_> = options
            .query_pairs()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(
            keys,
            vec!["name", "cloud_ref.name", "cloud_ref.uuid", "include_name", "page_size"]
        );
    }

    #[test]
    fn test_headers_only_keeps_tenant() {
        let options = ApiOptions::new().name("x").tenant("demo").headers_only();
        assert_eq!(options.tenant_override(), Some("demo"));
        assert!(options.query_pairs().is_empty());
    }
}
