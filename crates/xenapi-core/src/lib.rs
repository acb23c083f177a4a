//! # xenapi-core
//!
//! Protocol foundations for talking to the XenAPI management interface of a
//! XenServer / XCP-ng pool.
//!
//! This crate knows nothing about individual server classes. It provides the
//! pieces the typed bindings in the `xenapi` crate are built from.
//!
//! ## Modules
//!
//! - [`error`] - Error type and recovery classification
//! - [`fault`] - Server fault payloads and the known fault codes
//! - [`codec`] - Type-directed conversion to and from JSON-RPC values
//! - [`macros`] - Declaration macros for references, enumerations and records
//! - [`version`] - API versions and per-verb overload tables
//! - [`config`] - Connection configuration
//! - [`client`] - HTTP client settings and retry policy
//! - [`tls`] - Certificate trust policies
//! - [`transport`] - Transport abstraction and the HTTPS transport
//! - [`rpc`] - JSON-RPC request/response engine
//! - [`xmlrpc`] - Reader for the XML-RPC values stored in task results

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
pub mod macros;

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod fault;
pub mod rpc;
pub mod tls;
pub mod transport;
pub mod version;
pub mod xmlrpc;

// Re-export commonly used types
pub use config::{SessionConfig, TlsPolicy};
pub use error::{Error, ErrorKind, Result};
pub use fault::Fault;
pub use rpc::JsonRpcClient;
pub use transport::{HttpTransport, Transport};
pub use version::{get_api_version, ApiVersion, Overload, OverloadTable};

#[doc(hidden)]
pub use serde as __serde;
