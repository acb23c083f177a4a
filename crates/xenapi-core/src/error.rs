//! Error types for XenAPI operations.
//!
//! Every failure a call can produce is one variant of [`Error`]. Remote faults keep
//! the server's code and parameters verbatim so callers can match on them, and
//! [`Error::kind`] groups the variants into the handful of recovery strategies a
//! caller actually has.

use serde::Serialize;
use thiserror::Error;

use crate::fault::{codes, Fault};

/// Main error type for XenAPI operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Connection, read or write failure before a complete response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// The per-call deadline elapsed
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The response was not a well-formed JSON-RPC envelope for this request
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A value violated the codec's type contract
    #[error("Failed to decode {context}: {message}")]
    Decode {
        /// Path of the value that failed, e.g. `VM.get_record -> power_state`
        context: String,
        /// What was wrong with it
        message: String,
    },

    /// An argument could not be put on the wire
    #[error("Failed to encode {context}: {message}")]
    Encode {
        /// Path of the argument, e.g. `VBD.insert(vdi)`
        context: String,
        /// What was wrong with it
        message: String,
    },

    /// The server returned a fault
    #[error("Server fault: {0}")]
    Fault(Fault),

    /// A login-family call was refused
    #[error("Authentication failed: {0}")]
    Authentication(Fault),

    /// The contacted host is not the pool coordinator
    #[error("Host is not the pool coordinator: {0}")]
    HostIsSlave(Fault),

    /// The server no longer recognises the session reference
    #[error("Session is invalid: {0}")]
    SessionInvalid(Fault),

    /// The call needs a session and there is none
    #[error("Not logged in")]
    NotLoggedIn,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An asynchronous task finished with a failure
    #[error("Task failed: {0}")]
    TaskFailed(Fault),

    /// An asynchronous task was cancelled
    #[error("Task cancelled: {0}")]
    TaskCancelled(String),

    /// Gave up waiting for an asynchronous task
    #[error("Timed out waiting for task: {0}")]
    TaskTimeout(String),
}

/// Specialized result type for XenAPI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`] by how a caller recovers from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request may not have reached the server; retry if idempotent
    Transport,
    /// The server answered with something the client cannot decode
    Decoding,
    /// The server returned a fault; match on its code
    RemoteFault,
    /// Credentials were rejected
    Authentication,
    /// Reconnect to the coordinator named by the fault
    CoordinatorRedirection,
    /// Log in again
    SessionInvalid,
    /// Rejected on the client before anything was sent
    Client,
}

impl Error {
    /// Classify a server fault by its code.
    #[must_use]
    pub fn from_fault(fault: Fault) -> Self {
        match fault.code() {
            codes::SESSION_AUTHENTICATION_FAILED => Self::Authentication(fault),
            codes::HOST_IS_SLAVE => Self::HostIsSlave(fault),
            codes::SESSION_INVALID | codes::SESSION_NOT_REGISTERED => Self::SessionInvalid(fault),
            _ => Self::Fault(fault),
        }
    }

    /// Build a decoding error for the value at `context`.
    pub fn decode(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Build an encoding error for the argument at `context`.
    pub fn encode(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encode {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Returns the recovery class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Timeout(_) => ErrorKind::Transport,
            Self::Protocol(_) | Self::Decode { .. } => ErrorKind::Decoding,
            Self::Fault(_) | Self::TaskFailed(_) => ErrorKind::RemoteFault,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::HostIsSlave(_) => ErrorKind::CoordinatorRedirection,
            Self::SessionInvalid(_) => ErrorKind::SessionInvalid,
            Self::Encode { .. }
            | Self::NotLoggedIn
            | Self::ConfigError(_)
            | Self::InvalidEndpoint(_)
            | Self::ValidationError(_)
            | Self::TaskCancelled(_)
            | Self::TaskTimeout(_) => ErrorKind::Client,
        }
    }

    /// Returns the error code for this error.
    ///
    /// For remote faults this is the server's code, unchanged.
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Fault(fault)
            | Self::Authentication(fault)
            | Self::HostIsSlave(fault)
            | Self::SessionInvalid(fault)
            | Self::TaskFailed(fault) => fault.code(),
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Protocol(_) => "PROTOCOL_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Encode { .. } => "ENCODE_ERROR",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::TaskCancelled(_) => "TASK_CANCELLED",
            Self::TaskTimeout(_) => "TASK_TIMEOUT",
        }
    }

    /// Returns the server fault behind this error, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault)
            | Self::Authentication(fault)
            | Self::HostIsSlave(fault)
            | Self::SessionInvalid(fault)
            | Self::TaskFailed(fault) => Some(fault),
            _ => None,
        }
    }

    /// Returns true if the error carries the given server code.
    #[must_use]
    pub fn is_fault(&self, code: &str) -> bool {
        self.fault().is_some_and(|fault| fault.is(code))
    }

    /// Address of the pool coordinator carried by a `HOST_IS_SLAVE` fault.
    #[must_use]
    pub fn coordinator_address(&self) -> Option<&str> {
        match self {
            Self::HostIsSlave(fault) => fault.param(0),
            _ => None,
        }
    }

    /// Returns true if resending the request could succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        Self::from_fault(fault)
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_builder() {
            Self::ConfigError(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault(code: &str, params: &[&str]) -> Fault {
        Fault::new(code, params.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_from_fault_classification() {
        assert!(matches!(
            Error::from_fault(fault("SESSION_AUTHENTICATION_FAILED", &[])),
            Error::Authentication(_)
        ));
        assert!(matches!(
            Error::from_fault(fault("HOST_IS_SLAVE", &["10.0.0.7"])),
            Error::HostIsSlave(_)
        ));
        assert!(matches!(
            Error::from_fault(fault("SESSION_INVALID", &["OpaqueRef:x"])),
            Error::SessionInvalid(_)
        ));
        assert!(matches!(
            Error::from_fault(fault("VBD_IS_EMPTY", &["OpaqueVBD/7"])),
            Error::Fault(_)
        ));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::Transport("x".to_string()).kind(), ErrorKind::Transport);
        assert_eq!(Error::Timeout("x".to_string()).kind(), ErrorKind::Transport);
        assert_eq!(Error::decode("a -> ", "bad").kind(), ErrorKind::Decoding);
        assert_eq!(Error::Protocol("x".to_string()).kind(), ErrorKind::Decoding);
        assert_eq!(
            Error::from_fault(fault("VBD_IS_EMPTY", &[])).kind(),
            ErrorKind::RemoteFault
        );
        assert_eq!(
            Error::from_fault(fault("SESSION_AUTHENTICATION_FAILED", &[])).kind(),
            ErrorKind::Authentication
        );
        assert_eq!(
            Error::from_fault(fault("HOST_IS_SLAVE", &["h"])).kind(),
            ErrorKind::CoordinatorRedirection
        );
        assert_eq!(
            Error::from_fault(fault("SESSION_INVALID", &[])).kind(),
            ErrorKind::SessionInvalid
        );
        assert_eq!(Error::NotLoggedIn.kind(), ErrorKind::Client);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::from_fault(fault("VBD_IS_EMPTY", &["OpaqueVBD/7"])).error_code(),
            "VBD_IS_EMPTY"
        );
        assert_eq!(Error::Transport("x".to_string()).error_code(), "TRANSPORT_ERROR");
        assert_eq!(Error::Timeout("x".to_string()).error_code(), "TIMEOUT");
        assert_eq!(Error::Protocol("x".to_string()).error_code(), "PROTOCOL_ERROR");
        assert_eq!(Error::decode("c", "m").error_code(), "DECODE_ERROR");
        assert_eq!(Error::encode("c", "m").error_code(), "ENCODE_ERROR");
        assert_eq!(Error::NotLoggedIn.error_code(), "NOT_LOGGED_IN");
        assert_eq!(Error::ConfigError("x".to_string()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            Error::InvalidEndpoint("x".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
        assert_eq!(
            Error::ValidationError("x".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            Error::TaskFailed(fault("VDI_IN_USE", &[])).error_code(),
            "VDI_IN_USE"
        );
        assert_eq!(
            Error::TaskCancelled("OpaqueTask/9".to_string()).error_code(),
            "TASK_CANCELLED"
        );
        assert_eq!(
            Error::TaskTimeout("OpaqueTask/9".to_string()).error_code(),
            "TASK_TIMEOUT"
        );
    }

    #[test]
    fn test_coordinator_address() {
        let err = Error::from_fault(fault("HOST_IS_SLAVE", &["10.0.0.7"]));
        assert_eq!(err.coordinator_address(), Some("10.0.0.7"));
        assert!(err.is_fault("HOST_IS_SLAVE"));

        let err = Error::from_fault(fault("VBD_IS_EMPTY", &["OpaqueVBD/7"]));
        assert_eq!(err.coordinator_address(), None);
    }

    #[test]
    fn test_error_display() {
        let err = Error::decode("VM.get_record -> power_state", "unknown value \"Exploded\"");
        assert_eq!(
            err.to_string(),
            "Failed to decode VM.get_record -> power_state: unknown value \"Exploded\""
        );

        let err = Error::from_fault(fault("VBD_IS_EMPTY", &["OpaqueVBD/7"]));
        assert_eq!(err.to_string(), "Server fault: VBD_IS_EMPTY(OpaqueVBD/7)");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Transport("reset".to_string()).is_retryable());
        assert!(Error::Timeout("slow".to_string()).is_retryable());
        assert!(!Error::from_fault(fault("VBD_IS_EMPTY", &[])).is_retryable());
        assert!(!Error::NotLoggedIn.is_retryable());
    }

    #[test]
    fn test_fault_accessor() {
        let err = Error::TaskFailed(fault("VDI_IN_USE", &["OpaqueRef:1"]));
        assert_eq!(err.fault().map(Fault::code), Some("VDI_IN_USE"));
        assert!(Error::NotLoggedIn.fault().is_none());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let xen_err: Error = err.into();
        assert!(matches!(xen_err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let xen_err: Error = err.into();
        assert!(matches!(xen_err, Error::Protocol(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = Error::from_fault(fault("HOST_IS_SLAVE", &["10.0.0.7"]));
        assert_eq!(err.clone(), err);
    }
}
