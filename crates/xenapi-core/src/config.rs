//! Configuration for connecting to a pool.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use crate::client::{ClientConfig, RetryPolicy};
use crate::version::ApiVersion;
use crate::Error;

/// Path of the JSON-RPC endpoint below the server root.
pub const JSONRPC_PATH: &str = "jsonrpc";

/// How the server's TLS certificate is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsPolicy {
    /// Verify against the system roots plus an optional extra CA
    #[default]
    Strict,
    /// Accept the first certificate seen and require the same one afterwards
    TrustOnFirstUse,
    /// Accept any certificate
    Insecure,
}

/// Connection options for a session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionConfig {
    /// Address of the pool coordinator, e.g. `https://pool.example.com`
    #[validate(url)]
    pub endpoint_url: String,

    /// Certificate trust policy
    #[serde(default)]
    pub tls_policy: TlsPolicy,

    /// Optional PEM file with an extra CA to trust (strict policy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert: Option<PathBuf>,

    /// Per-call deadline in seconds; unbounded when absent
    #[validate(range(min = 1, max = 86400))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Free-form identity shown in the server's logs
    #[validate(length(min = 1, max = 256))]
    #[serde(default = "default_originator")]
    pub originator: String,

    /// API version requested at login; the server may clamp it
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Transport retries; zero disables them
    #[validate(range(min = 0, max = 10))]
    #[serde(default)]
    pub max_retries: u32,
}

fn default_originator() -> String {
    "xenapi-rs".to_string()
}

fn default_api_version() -> String {
    ApiVersion::NEWEST.to_wire_string()
}

impl SessionConfig {
    /// Create a configuration for the coordinator at `endpoint_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            endpoint_url: endpoint_url.into(),
            tls_policy: TlsPolicy::default(),
            tls_ca_cert: None,
            request_timeout_secs: None,
            originator: default_originator(),
            api_version: default_api_version(),
            max_retries: 0,
        };

        config.check()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first problem found.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        self.api_version.parse::<ApiVersion>()?;
        self.rpc_url()?;
        Ok(())
    }

    /// Set the TLS trust policy.
    #[must_use]
    pub const fn with_tls_policy(mut self, policy: TlsPolicy) -> Self {
        self.tls_policy = policy;
        self
    }

    /// Set a custom CA certificate path.
    #[must_use]
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_ca_cert = Some(path.into());
        self
    }

    /// Set the per-call deadline in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set the originator tag.
    #[must_use]
    pub fn with_originator(mut self, originator: impl Into<String>) -> Self {
        self.originator = originator.into();
        self
    }

    /// Set the API version requested at login.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set maximum transport retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// The per-call deadline, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// URL the JSON-RPC requests are posted to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the endpoint cannot be parsed or
    /// is not HTTP(S).
    pub fn rpc_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.endpoint_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint(format!(
                "unsupported scheme {}",
                url.scheme()
            )));
        }
        if !url.path().trim_end_matches('/').ends_with(JSONRPC_PATH) {
            url.path_segments_mut()
                .map_err(|()| Error::InvalidEndpoint(self.endpoint_url.clone()))?
                .pop_if_empty()
                .push(JSONRPC_PATH);
        }
        Ok(url)
    }

    /// HTTP client settings derived from this configuration.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let retry_policy = if self.max_retries == 0 {
            RetryPolicy::no_retry()
        } else {
            RetryPolicy::new().with_max_retries(self.max_retries)
        };
        let config = ClientConfig::new().with_retry_policy(retry_policy);
        match self.timeout() {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_new() {
        let config = SessionConfig::new("https://pool.example.com").unwrap();
        assert_eq!(config.tls_policy, TlsPolicy::Strict);
        assert_eq!(config.originator, "xenapi-rs");
        assert_eq!(config.api_version, "2.21");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_session_config_invalid_url() {
        assert!(matches!(
            SessionConfig::new("not a url"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_session_config_rejects_other_schemes() {
        let result = SessionConfig::new("ftp://pool.example.com");
        assert!(matches!(result, Err(Error::InvalidEndpoint(_))));
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new("https://pool.example.com")
            .unwrap()
            .with_tls_policy(TlsPolicy::TrustOnFirstUse)
            .with_ca_cert("/etc/xen/ca.pem")
            .with_timeout(30)
            .with_originator("backup-agent")
            .with_api_version("2.15")
            .with_max_retries(2);

        assert_eq!(config.tls_policy, TlsPolicy::TrustOnFirstUse);
        assert_eq!(config.tls_ca_cert, Some(PathBuf::from("/etc/xen/ca.pem")));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.originator, "backup-agent");
        assert_eq!(config.api_version, "2.15");
        assert!(config.check().is_ok());

        let client = config.client_config();
        assert_eq!(client.retry_policy.max_retries, 2);
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_session_config_validation_ranges() {
        let config = SessionConfig::new("https://pool.example.com")
            .unwrap()
            .with_max_retries(50);
        assert!(config.check().is_err());

        let config = SessionConfig::new("https://pool.example.com")
            .unwrap()
            .with_timeout(0);
        assert!(config.check().is_err());

        let config = SessionConfig::new("https://pool.example.com")
            .unwrap()
            .with_api_version("two");
        assert!(config.check().is_err());
    }

    #[test]
    fn test_rpc_url() {
        let config = SessionConfig::new("https://pool.example.com").unwrap();
        assert_eq!(
            config.rpc_url().unwrap().as_str(),
            "https://pool.example.com/jsonrpc"
        );

        let config = SessionConfig::new("https://pool.example.com:8443/").unwrap();
        assert_eq!(
            config.rpc_url().unwrap().as_str(),
            "https://pool.example.com:8443/jsonrpc"
        );

        let config = SessionConfig::new("http://10.0.0.7/jsonrpc").unwrap();
        assert_eq!(config.rpc_url().unwrap().as_str(), "http://10.0.0.7/jsonrpc");
    }

    #[test]
    fn test_session_config_deserialize_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"endpoint_url": "https://pool.example.com"}"#).unwrap();
        assert_eq!(config.tls_policy, TlsPolicy::Strict);
        assert_eq!(config.originator, "xenapi-rs");
        assert_eq!(config.api_version, "2.21");
        assert!(config.request_timeout_secs.is_none());

        let config: SessionConfig = serde_json::from_str(
            r#"{"endpoint_url": "https://pool.example.com", "tls_policy": "trust_on_first_use"}"#,
        )
        .unwrap();
        assert_eq!(config.tls_policy, TlsPolicy::TrustOnFirstUse);
    }
}
