//! Transports carry encoded JSON-RPC requests to the server and bring back the
//! raw response body.
//!
//! The engine only needs [`Transport::send`]; [`HttpTransport`] is the HTTPS
//! implementation used against a real pool.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use tokio::time::sleep;
use tracing::debug;
use url::Url;

use crate::client::{ClientConfig, RetryPolicy, RETRYABLE_STATUSES};
use crate::config::SessionConfig;
use crate::tls::{self, TrustOnFirstUse};
use crate::{Error, Result};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("xenapi-rs/", env!("CARGO_PKG_VERSION"));

/// A request/response pipe to the server.
///
/// Implementations must be safe to share between concurrent calls; the engine
/// matches responses to requests by correlation id, not by order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one encoded request and return the encoded response.
    async fn send(&self, request: Vec<u8>) -> Result<Vec<u8>>;
}

/// JSON-RPC over HTTP(S) POST.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    url: Url,
    retry_policy: RetryPolicy,
    certificate_pin: Option<TrustOnFirstUse>,
}

impl HttpTransport {
    /// Build a transport for the endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client cannot be
    /// built (for example an unreadable CA file).
    pub fn new(config: &SessionConfig) -> Result<Self> {
        Self::with_client_config(config, &config.client_config())
    }

    /// Build a transport with explicit HTTP client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client cannot be
    /// built.
    pub fn with_client_config(config: &SessionConfig, http_config: &ClientConfig) -> Result<Self> {
        let url = config.rpc_url()?;

        let mut builder = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .connect_timeout(http_config.connect_timeout)
            .gzip(http_config.enable_compression);

        if let Some(timeout) = http_config.timeout {
            builder = builder.timeout(timeout);
        }

        let (builder, certificate_pin) =
            tls::configure(builder, config.tls_policy, config.tls_ca_cert.as_deref())?;

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            http,
            url,
            retry_policy: http_config.retry_policy,
            certificate_pin,
        })
    }

    /// URL requests are posted to.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The certificate pinned under the trust-on-first-use policy, if any.
    #[must_use]
    pub fn pinned_certificate(&self) -> Option<Vec<u8>> {
        self.certificate_pin.as_ref().and_then(TrustOnFirstUse::pinned)
    }

    async fn post_once(&self, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(map_status_to_error(status, &message))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Vec<u8>) -> Result<Vec<u8>> {
        let mut attempt = 0;

        loop {
            debug!(url = %self.url, attempt, "Posting JSON-RPC request");

            let error = match self.post_once(request.clone()).await {
                Ok(body) => return Ok(body),
                Err(error) if error.is_retryable() => error,
                Err(error) => return Err(error),
            };

            attempt += 1;
            if attempt > self.retry_policy.max_retries {
                return Err(error);
            }

            let delay = self.retry_policy.delay_for_attempt(attempt);
            debug!(%error, ?delay, "Retrying JSON-RPC request");
            if delay > Duration::from_millis(0) {
                sleep(delay).await;
            }
        }
    }
}

/// Map a non-success HTTP status onto an error.
///
/// XAPI reports faults inside a `200 OK` JSON-RPC envelope, so any other status
/// is a transport-level problem. Statuses in [`RETRYABLE_STATUSES`] and server
/// errors are retryable; the rest are not.
#[must_use]
pub fn map_status_to_error(status: StatusCode, message: &str) -> Error {
    if RETRYABLE_STATUSES.contains(&status.as_u16()) || status.is_server_error() {
        Error::Transport(format!("HTTP {status}: {message}"))
    } else {
        Error::Protocol(format!("Unexpected HTTP status {status}: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(uri: &str) -> SessionConfig {
        SessionConfig::new(uri).unwrap()
    }

    #[test]
    fn test_map_status_to_error() {
        assert!(matches!(
            map_status_to_error(StatusCode::SERVICE_UNAVAILABLE, "busy"),
            Error::Transport(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            Error::Transport(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::NOT_FOUND, "nope"),
            Error::Protocol(_)
        ));
    }

    #[test]
    fn test_transport_url() {
        let transport = HttpTransport::new(&config("https://pool.example.com")).unwrap();
        assert_eq!(transport.url().as_str(), "https://pool.example.com/jsonrpc");
        assert!(transport.pinned_certificate().is_none());
    }

    #[tokio::test]
    async fn test_send_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/jsonrpc"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config(&server.uri())).unwrap();
        let body = transport.send(b"{}".to_vec()).await.unwrap();
        assert_eq!(body, br#"{"ok":true}"#.to_vec());
    }

    #[tokio::test]
    async fn test_send_does_not_retry_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config(&server.uri())).unwrap();
        let err = transport.send(b"{}".to_vec()).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_send_retries_when_enabled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let config = config(&server.uri());
        let http_config = ClientConfig::new().with_retry_policy(
            RetryPolicy::new()
                .with_max_retries(3)
                .with_initial_delay(Duration::from_millis(1))
                .with_max_delay(Duration::from_millis(5)),
        );
        let transport = HttpTransport::with_client_config(&config, &http_config).unwrap();
        assert_eq!(transport.send(b"{}".to_vec()).await.unwrap(), b"{}".to_vec());
    }

    #[tokio::test]
    async fn test_send_does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let config = config(&server.uri()).with_max_retries(3);
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport.send(b"{}".to_vec()).await.unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let transport = HttpTransport::new(&config("http://127.0.0.1:9")).unwrap();
        let err = transport.send(b"{}".to_vec()).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
