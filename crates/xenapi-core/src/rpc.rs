//! JSON-RPC 2.0 request/response engine.
//!
//! Each call gets a fresh UUID correlation id. A response is accepted only if it
//! echoes that id and carries exactly one of `result` and `error`; the `error`
//! member is decoded into a [`Fault`] and classified by [`Error::from_fault`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::fault::Fault;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};

/// JSON-RPC protocol tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    /// Protocol tag, always `"2.0"`
    pub jsonrpc: &'static str,
    /// Correlation id
    pub id: String,
    /// Dotted method name, e.g. `"VBD.eject"`
    pub method: &'a str,
    /// Positional parameters
    pub params: &'a [Value],
}

impl<'a> Request<'a> {
    /// Frame a call with a fresh correlation id.
    #[must_use]
    pub fn new(method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: Uuid::new_v4().to_string(),
            method,
            params,
        }
    }
}

/// Decode a response body for the request with correlation id `id`.
///
/// # Errors
///
/// Returns [`Error::Protocol`] for malformed envelopes or a mismatched id, and
/// the classified fault if the server returned one.
pub fn decode_response(id: &str, body: &[u8]) -> Result<Value> {
    let envelope: Value = serde_json::from_slice(body)?;
    let Value::Object(mut envelope) = envelope else {
        return Err(Error::Protocol("response is not a JSON object".to_string()));
    };

    match envelope.get("id") {
        Some(Value::String(echoed)) if echoed == id => {}
        Some(other) => {
            return Err(Error::Protocol(format!(
                "response id {other} does not match request id {id}"
            )))
        }
        None => return Err(Error::Protocol("response has no id".to_string())),
    }

    let error = envelope.remove("error").filter(|error| !error.is_null());
    let result = envelope.remove("result");

    match (result, error) {
        (Some(result), None) => Ok(result),
        (None, Some(error)) => Err(Fault::from_value(&error).map_or_else(
            || Error::Protocol(format!("unrecognised error payload {error}")),
            Error::from_fault,
        )),
        (Some(_), Some(_)) => Err(Error::Protocol(
            "response carries both result and error".to_string(),
        )),
        (None, None) => Err(Error::Protocol(
            "response carries neither result nor error".to_string(),
        )),
    }
}

/// Frames calls, sends them over a [`Transport`] and decodes the replies.
///
/// Cheap to share: concurrent calls are independent and matched by id.
#[derive(Clone)]
pub struct JsonRpcClient {
    transport: Arc<dyn Transport>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for JsonRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl JsonRpcClient {
    /// Create an engine over `transport` with no per-call deadline.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            timeout: None,
        }
    }

    /// Create an engine over HTTPS from a session configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)).with_timeout(config.timeout()))
    }

    /// Set the per-call deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The per-call deadline, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Invoke `method` with positional `params` and return the raw result.
    ///
    /// Dropping the returned future abandons the wait; the server may still
    /// complete the work.
    ///
    /// # Errors
    ///
    /// Returns a transport, protocol or fault error.
    pub async fn call(&self, method: &str, params: &[Value]) -> Result<Value> {
        let request = Request::new(method, params);
        let body = serde_json::to_vec(&request)?;

        debug!(method, id = %request.id, params = params.len(), "Sending JSON-RPC call");

        let send = self.transport.send(body);
        let response = match self.timeout {
            Some(deadline) => tokio::time::timeout(deadline, send)
                .await
                .map_err(|_| Error::Timeout(format!("{method} did not complete within {deadline:?}")))??,
            None => send.await?,
        };

        let outcome = decode_response(&request.id, &response);
        if let Err(error) = &outcome {
            debug!(method, id = %request.id, code = error.error_code(), "JSON-RPC call failed");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    fn echo(result: Value) -> impl Fn(Vec<u8>) -> Result<Vec<u8>> + Send + Sync + 'static {
        move |request| {
            let request: Value = serde_json::from_slice(&request).unwrap();
            Ok(serde_json::to_vec(&json!({
                "jsonrpc": "2.0",
                "id": request["id"],
                "result": result,
            }))
            .unwrap())
        }
    }

    #[test]
    fn test_request_shape() {
        let params = vec![json!("OpaqueRef:session"), json!("OpaqueRef:vbd")];
        let request = Request::new("VBD.eject", &params);
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["method"], "VBD.eject");
        assert_eq!(wire["params"], json!(["OpaqueRef:session", "OpaqueRef:vbd"]));
        assert!(Uuid::parse_str(wire["id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(Request::new("a", &[]).id, Request::new("a", &[]).id);
    }

    #[test]
    fn test_decode_result() {
        let body = br#"{"jsonrpc":"2.0","id":"1","result":"OpaqueRef:abc"}"#;
        assert_eq!(decode_response("1", body).unwrap(), json!("OpaqueRef:abc"));
    }

    #[test]
    fn test_decode_null_result() {
        let body = br#"{"jsonrpc":"2.0","id":"1","result":null}"#;
        assert_eq!(decode_response("1", body).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_result_with_null_error() {
        let body = br#"{"id":"1","result":"","error":null}"#;
        assert_eq!(decode_response("1", body).unwrap(), json!(""));
    }

    #[test]
    fn test_decode_fault() {
        let body = br#"{"jsonrpc":"2.0","id":"1","error":{"code":"VBD_IS_EMPTY","params":["OpaqueVBD/7"]}}"#;
        let err = decode_response("1", body).unwrap_err();
        assert_eq!(err.error_code(), "VBD_IS_EMPTY");
        assert_eq!(err.fault().unwrap().params(), ["OpaqueVBD/7"]);
    }

    #[test]
    fn test_decode_classified_fault() {
        let body = br#"{"jsonrpc":"2.0","id":"1","error":{"code":"HOST_IS_SLAVE","params":["10.0.0.7"]}}"#;
        let err = decode_response("1", body).unwrap_err();
        assert!(matches!(err, Error::HostIsSlave(_)));
        assert_eq!(err.coordinator_address(), Some("10.0.0.7"));
    }

    #[test]
    fn test_decode_rejects_mismatched_id() {
        let body = br#"{"jsonrpc":"2.0","id":"2","result":true}"#;
        assert!(matches!(decode_response("1", body), Err(Error::Protocol(_))));

        let body = br#"{"jsonrpc":"2.0","result":true}"#;
        assert!(matches!(decode_response("1", body), Err(Error::Protocol(_))));
    }

    #[test]
    fn test_decode_rejects_bad_envelopes() {
        assert!(matches!(
            decode_response("1", br#"{"id":"1","result":1,"error":{"code":"X"}}"#),
            Err(Error::Protocol(_))
        ));
        assert!(matches!(
            decode_response("1", br#"{"id":"1"}"#),
            Err(Error::Protocol(_))
        ));
        assert!(matches!(
            decode_response("1", br#"{"id":"1","error":42}"#),
            Err(Error::Protocol(_))
        ));
        assert!(matches!(
            decode_response("1", b"[1,2]"),
            Err(Error::Protocol(_))
        ));
        assert!(matches!(
            decode_response("1", b"<html>"),
            Err(Error::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn test_call_round_trip() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                let request: Value = serde_json::from_slice(request).unwrap();
                request["method"] == "VM.get_all" && request["params"] == json!(["OpaqueRef:s"])
            })
            .times(1)
            .returning(echo(json!(["OpaqueRef:vm1"])));

        let client = JsonRpcClient::new(Arc::new(transport));
        let result = client
            .call("VM.get_all", &[json!("OpaqueRef:s")])
            .await
            .unwrap();
        assert_eq!(result, json!(["OpaqueRef:vm1"]));
    }

    #[tokio::test]
    async fn test_call_propagates_transport_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(Error::Transport("connection reset".to_string())));

        let client = JsonRpcClient::new(Arc::new(transport));
        let err = client.call("VM.get_all", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_call_times_out() {
        struct Stalled;

        #[async_trait::async_trait]
        impl Transport for Stalled {
            async fn send(&self, _request: Vec<u8>) -> Result<Vec<u8>> {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
        }

        let client =
            JsonRpcClient::new(Arc::new(Stalled)).with_timeout(Some(Duration::from_millis(20)));
        let err = client.call("VM.clean_shutdown", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }
}
