/*
[INPUT]:  YAML configuration file and ALBCTL_* environment variables
[OUTPUT]: Validated controller connection settings
[POS]:    Configuration layer - controller setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use alb_sdk::{ClientConfig, Credentials, Scheme};
use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides, e.g. `ALBCTL_PASSWORD`.
pub const ENV_PREFIX: &str = "ALBCTL";

/// Controller connection configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Controller host, optionally with `:port`
    pub controller: String,
    pub username: String,
    /// Password login; exclusive with `auth_token`
    #[serde(default)]
    pub password: Option<String>,
    /// Token login; exclusive with `password`
    #[serde(default)]
    pub auth_token: Option<String>,
    /// API version sent with every request
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_tenant")]
    pub tenant: String,
    /// "https" or "http"
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip certificate verification
    #[serde(default)]
    pub insecure: bool,
}

fn default_tenant() -> String {
    "admin".to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl ControllerConfig {
    /// Load from an optional YAML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Environment values stay strings until deserialized, so secrets and
    /// versions that look numeric keep their exact text.
    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
        }
        let config = builder
            .add_source(environment)
            .build()
            .context("read configuration sources")?;
        let parsed: Self = config
            .try_deserialize()
            .context("parse controller configuration")?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Parse a YAML document without consulting the environment.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let parsed: Self = Config::builder()
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()?
            .try_deserialize()
            .context("parse controller configuration")?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        if self.controller.trim().is_empty() {
            bail!("controller must not be empty");
        }
        if self.username.trim().is_empty() {
            bail!("username must not be empty");
        }
        match (&self.password, &self.auth_token) {
            (Some(_), Some(_)) => bail!("set either password or auth_token, not both"),
            (None, None) => bail!("one of password or auth_token is required"),
            _ => {}
        }
        self.scheme()?;
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be positive");
        }
        Ok(())
    }

    pub fn scheme(&self) -> Result<Scheme> {
        match self.scheme.to_ascii_lowercase().as_str() {
            "https" => Ok(Scheme::Https),
            "http" => Ok(Scheme::Http),
            other => bail!("unsupported scheme: {other}"),
        }
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::new(self.controller.clone())
            .with_tenant(self.tenant.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        config.scheme = self.scheme()?;
        config.version = self.version.clone();
        config.insecure = self.insecure;
        config.user_agent = Some(format!("albctl/{}", env!("CARGO_PKG_VERSION")));
        Ok(config)
    }

    pub fn credentials(&self) -> Result<Credentials> {
        match (&self.password, &self.auth_token) {
            (Some(password), None) => Ok(Credentials::password(&self.username, password)),
            (None, Some(token)) => Ok(Credentials::token(&self.username, token)),
            _ => bail!("one of password or auth_token is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = ControllerConfig::from_yaml_str(
            "controller: 10.10.10.10\nusername: admin\npassword: secret\n",
        )
        .unwrap();
        assert_eq!(config.tenant, "admin");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.scheme().unwrap(), Scheme::Https);
        assert!(!config.insecure);
    }

    #[test]
    fn test_client_config_mapping() {
        let config = ControllerConfig::from_yaml_str(
            "controller: ctrl:8443\nusername: admin\nauth_token: tok\nversion: 22.1.3\n\
             tenant: demo\nscheme: http\ntimeout_secs: 5\ninsecure: true\n",
        )
        .unwrap();
        let client = config.client_config().unwrap();
        assert_eq!(client.controller, "ctrl:8443");
        assert_eq!(client.scheme, Scheme::Http);
        assert_eq!(client.tenant, "demo");
        assert_eq!(client.version.as_deref(), Some("22.1.3"));
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert!(client.insecure);
        assert!(matches!(config.credentials().unwrap(), Credentials::Token { .. }));
    }

    #[test]
    fn test_rejects_ambiguous_credentials() {
        let both = "controller: c\nusername: u\npassword: p\nauth_token: t\n";
        assert!(ControllerConfig::from_yaml_str(both).is_err());

        let neither = "controller: c\nusername: u\n";
        assert!(ControllerConfig::from_yaml_str(neither).is_err());
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<config::Map<String, String>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_env_values_keep_their_text() {
        let config = ControllerConfig::load_with_env(
            None,
            env(&[
                ("ALBCTL_CONTROLLER", "10.10.10.10"),
                ("ALBCTL_USERNAME", "admin"),
                ("ALBCTL_PASSWORD", "007"),
                ("ALBCTL_VERSION", "22.10"),
                ("ALBCTL_TIMEOUT_SECS", "15"),
                ("ALBCTL_INSECURE", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(config.password.as_deref(), Some("007"));
        assert_eq!(config.version.as_deref(), Some("22.10"));
        assert_eq!(config.timeout_secs, 15);
        assert!(config.insecure);
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        let yaml = "controller: c\nusername: u\npassword: p\nscheme: ftp\n";
        assert!(ControllerConfig::from_yaml_str(yaml).is_err());
    }
}
