//! # xenapi
//!
//! Typed async bindings for the XenAPI management interface of XenServer and
//! XCP-ng pools.
//!
//! ## Example
//!
//! ```no_run
//! use secrecy::SecretString;
//! use xenapi::{Session, SessionConfig, WaitOptions};
//!
//! # async fn example() -> xenapi::Result<()> {
//! let config = SessionConfig::new("https://pool.example.com")?;
//! let session = Session::new(&config)?;
//! session
//!     .login("root", &SecretString::from("password".to_string()))
//!     .await?;
//!
//! for (vm, record) in session.vm().get_all_records().await? {
//!     println!("{vm}: {}", record.name_label);
//! }
//!
//! let vbds = session.vbd().get_all().await?;
//! if let Some(vbd) = vbds.first() {
//!     let task = session.vbd().async_eject(vbd).await?;
//!     session.task().wait_for::<()>(&task, WaitOptions::default()).await?;
//! }
//!
//! session.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Login, logout and version discovery
//! - [`call`] - Call builder shared by every binding
//! - [`class`] - Generic per-class handle
//! - [`classes`] - Verbs and records of each server class
//! - [`refs`] - Reference types
//! - [`enums`] - Enumerations
//! - [`records`] - Records without a class of their own
//! - [`task`] - Waiting on asynchronous operations

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::too_many_lines)]

pub mod call;
#[macro_use]
pub mod class;
pub mod classes;
pub mod enums;
pub mod records;
pub mod refs;
pub mod session;
pub mod task;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use call::{Call, ASYNC_PREFIX};
pub use class::{ClassApi, XenClass};
pub use session::Session;
pub use task::{decode_task_result, TaskApi, WaitOptions};
pub use xenapi_core::{
    ApiVersion, Error, ErrorKind, Fault, JsonRpcClient, Result, SessionConfig, TlsPolicy,
    Transport,
};

pub use xenapi_core;
