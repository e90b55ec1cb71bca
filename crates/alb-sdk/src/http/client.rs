/*
[INPUT]:  HTTP configuration (controller address, API version, tenant, timeouts, credentials)
[OUTPUT]: Configured reqwest client that sends authenticated controller requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, REFERER};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{Credentials, SessionStore};
use crate::http::{ApiOptions, AviError, Result};
use crate::types::Scheme;

pub const HEADER_AVI_VERSION: &str = "X-Avi-Version";
pub const HEADER_AVI_TENANT: &str = "X-Avi-Tenant";
pub const HEADER_CSRF_TOKEN: &str = "X-CSRFToken";
pub const HEADER_AVI_USER_AGENT: &str = "X-Avi-UserAgent";

pub const DEFAULT_TENANT: &str = "admin";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Controller host, optionally with `:port`
    pub controller: String,
    pub scheme: Scheme,
    /// Sent as `X-Avi-Version` when set
    pub version: Option<String>,
    pub tenant: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Accept self-signed controller certificates
    pub insecure: bool,
    /// Sent as `X-Avi-UserAgent` when set
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            scheme: Scheme::Https,
            version: None,
            tenant: DEFAULT_TENANT.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            insecure: false,
            user_agent: None,
        }
    }

    /// Build a config from `http(s)://host[:port]`.
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)?;
        let scheme = match url.scheme() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => return Err(AviError::Config(format!("unsupported scheme: {other}"))),
        };
        let host = url
            .host_str()
            .ok_or_else(|| AviError::Config(format!("controller URL has no host: {base_url}")))?;
        let controller = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self {
            scheme,
            ..Self::new(controller)
        })
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&format!("{}://{}/", self.scheme, self.controller))?;
        Ok(url)
    }
}

/// HTTP client for one controller
///
/// Cloning is cheap; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct AviClient {
    http_client: Client,
    base_url: Url,
    config: ClientConfig,
    credentials: Credentials,
    session: SessionStore,
}

impl AviClient {
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .cookie_store(true)
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url()?,
            config,
            credentials,
            session: SessionStore::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Resolve a relative API path, or an absolute URL, against the controller.
    ///
    /// Absolute URLs (e.g. `next` links) are rebased onto the configured
    /// controller.
    pub fn url(&self, path: &str) -> Result<Url> {
        let relative = if path.starts_with("http://") || path.starts_with("https://") {
            match path.find("/api/") {
                Some(idx) => &path[idx..],
                None => return Err(AviError::Config(format!("not a controller API URL: {path}"))),
            }
        } else {
            path
        };
        Ok(self.base_url.join(relative.trim_start_matches('/'))?)
    }

    /// Build a request carrying the controller headers and query options.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        options: &ApiOptions,
    ) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let tenant = options.tenant_override().unwrap_or(&self.config.tenant);

        let mut builder = self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER, self.base_url.as_str())
            .header(HEADER_AVI_TENANT, tenant);
        if let Some(version) = &self.config.version {
            builder = builder.header(HEADER_AVI_VERSION, version);
        }
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.header(HEADER_AVI_USER_AGENT, user_agent);
        }
        if let Some(csrf_token) = self.session.csrf_token() {
            builder = builder.header(HEADER_CSRF_TOKEN, csrf_token);
        }
        let query = options.query_pairs();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        Ok(builder)
    }

    /// Send a request, logging in first if needed and once more on a 401.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        options: &ApiOptions,
    ) -> Result<Response> {
        if !self.session.is_active() {
            self.login().await?;
        }

        let response = self.dispatch(method.clone(), path, body, options).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        warn!(%method, path, "session rejected by controller, logging in again");
        self.session.clear();
        self.login().await?;
        let response = self.dispatch(method, path, body, options).await?;
        check_status(response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        options: &ApiOptions,
    ) -> Result<T> {
        let response = self.execute(method, path, body, options).await?;
        let text = response.text().await.map_err(|err| self.map_transport(err))?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        options: &ApiOptions,
    ) -> Result<Response> {
        let mut builder = self.request(method.clone(), path, options)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|err| self.map_transport(err))?;
        debug!(%method, path, status = response.status().as_u16(), "controller request");
        Ok(response)
    }

    pub(crate) fn map_transport(&self, err: reqwest::Error) -> AviError {
        if err.is_timeout() {
            AviError::Timeout {
                duration: self.config.timeout.as_secs(),
            }
        } else {
            AviError::Http(err)
        }
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AviError::api_error(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AviClient {
        AviClient::new(
            ClientConfig::new("10.10.10.10"),
            Credentials::password("admin", "admin"),
        )
        .expect("client init")
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("ctrl.example.com");
        assert_eq!(config.scheme, Scheme::Https);
        assert_eq!(config.tenant, DEFAULT_TENANT);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.base_url().unwrap().as_str(), "https://ctrl.example.com/");
    }

    #[test]
    fn test_config_from_base_url() {
        let config = ClientConfig::from_base_url("http://127.0.0.1:8443").unwrap();
        assert_eq!(config.scheme, Scheme::Http);
        assert_eq!(config.controller, "127.0.0.1:8443");

        assert!(ClientConfig::from_base_url("ftp://ctrl").is_err());
    }

    #[test]
    fn test_url_joins_relative_paths() {
        let client = client();
        assert_eq!(
            client.url("api/pool").unwrap().as_str(),
            "https://10.10.10.10/api/pool"
        );
        assert_eq!(
            client.url("/api/pool/pool-1").unwrap().as_str(),
            "https://10.10.10.10/api/pool/pool-1"
        );
    }

    #[test]
    fn test_url_rebases_absolute_links() {
        let client = client();
        let url = client
            .url("https://192.168.1.1/api/pool?page=2&page_size=100")
            .unwrap();
        assert_eq!(url.as_str(), "https://10.10.10.10/api/pool?page=2&page_size=100");
        assert!(client.url("https://elsewhere/login").is_err());
    }

    #[test]
    fn test_request_headers() {
        let client = AviClient::new(
            ClientConfig::new("10.10.10.10").with_version("22.1.3"),
            Credentials::password("admin", "admin"),
        )
        .unwrap();
        client.session().set(Some("csrf-1".to_string()), "admin");

        let request = client
            .request(Method::GET, "api/pool", &ApiOptions::new().tenant("demo"))
            .unwrap()
            .build()
            .unwrap();
        let headers = request.headers();
        assert_eq!(headers[HEADER_AVI_VERSION], "22.1.3");
        assert_eq!(headers[HEADER_AVI_TENANT], "demo");
        assert_eq!(headers[HEADER_CSRF_TOKEN], "csrf-1");
        assert_eq!(headers[REFERER], "https://10.10.10.10/");
    }
}
