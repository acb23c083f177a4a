//! Session lifecycle.
//!
//! A [`Session`] starts unauthenticated, acquires a reference from one of the
//! login calls and gives it up again on logout. Right after login it asks the
//! pool coordinator which API version and software version it runs; failures
//! there are logged and leave the session usable with [`ApiVersion::Unknown`].
//!
//! `HOST_IS_SLAVE` is never followed automatically: the caller gets
//! [`Error::HostIsSlave`] and reconnects to [`Error::coordinator_address`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};
use xenapi_core::codec::{decode_field, expect_object, Value};
use xenapi_core::transport::Transport;
use xenapi_core::{get_api_version, ApiVersion, Error, JsonRpcClient, Result, SessionConfig};

use crate::call::Call;
use crate::refs::{HostRef, PoolRef, SessionRef};

/// Methods that are sent without a session reference.
pub const LOGIN_METHODS: &[&str] = &[
    "session.login_with_password",
    "session.slave_local_login_with_password",
];

/// Originator used when none is configured.
pub const DEFAULT_ORIGINATOR: &str = "xenapi-rs";

#[derive(Debug)]
struct SessionState {
    reference: SessionRef,
    api_version: ApiVersion,
    xapi_version: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            reference: SessionRef::default(),
            api_version: ApiVersion::Unknown,
            xapi_version: String::new(),
        }
    }
}

/// An authenticated conversation with a pool coordinator.
///
/// Share it between tasks by reference or behind an [`Arc`]; calls are
/// independent and matched to their responses by correlation id.
pub struct Session {
    rpc: JsonRpcClient,
    originator: String,
    requested_version: String,
    state: RwLock<SessionState>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Session")
            .field("rpc", &self.rpc)
            .field("originator", &self.originator)
            .field("logged_in", &!state.reference.is_null())
            .field("api_version", &state.api_version)
            .field("xapi_version", &state.xapi_version)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create an unauthenticated session for the pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTPS transport
    /// cannot be built.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.check()?;
        let rpc = JsonRpcClient::from_config(config)?;
        Ok(Self::from_client(rpc)
            .with_originator(config.originator.clone())
            .with_requested_version(config.api_version.clone()))
    }

    /// Create an unauthenticated session over a custom transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::from_client(JsonRpcClient::new(transport))
    }

    /// Create an unauthenticated session over an existing engine.
    #[must_use]
    pub fn from_client(rpc: JsonRpcClient) -> Self {
        Self {
            rpc,
            originator: DEFAULT_ORIGINATOR.to_string(),
            requested_version: ApiVersion::NEWEST.to_wire_string(),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Set the originator sent by [`Session::login`].
    #[must_use]
    pub fn with_originator(mut self, originator: impl Into<String>) -> Self {
        self.originator = originator.into();
        self
    }

    /// Set the API version string sent by [`Session::login`].
    #[must_use]
    pub fn with_requested_version(mut self, version: impl Into<String>) -> Self {
        self.requested_version = version.into();
        self
    }

    /// The JSON-RPC engine calls go through.
    #[must_use]
    pub const fn client(&self) -> &JsonRpcClient {
        &self.rpc
    }

    /// Current session reference; null when logged out.
    #[must_use]
    pub fn reference(&self) -> SessionRef {
        self.read().reference.clone()
    }

    /// Returns true while the session holds a reference.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.read().reference.is_null()
    }

    /// API version of the pool coordinator, found at login.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.read().api_version
    }

    /// `xapi` software version of the pool coordinator, found at login.
    #[must_use]
    pub fn xapi_version(&self) -> String {
        self.read().xapi_version.clone()
    }

    /// Start a call to an arbitrary `<Class>.<verb>`.
    ///
    /// The typed bindings cover the schema; this is for anything they do not.
    pub fn call(&self, method: impl Into<String>) -> Call<'_> {
        Call::new(self, method)
    }

    /// Log in with the originator and API version this session was built with.
    ///
    /// # Errors
    ///
    /// As [`Session::login_with_password`].
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<SessionRef> {
        let version = self.requested_version.clone();
        let originator = self.originator.clone();
        self.login_with_password(username, password, &version, &originator)
            .await
    }

    /// Authenticate against the pool coordinator.
    ///
    /// On success the session holds the new reference and the discovered
    /// versions.
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] for `SESSION_AUTHENTICATION_FAILED`
    /// - [`Error::HostIsSlave`] when the endpoint is not the coordinator
    /// - transport and decoding errors
    pub async fn login_with_password(
        &self,
        username: &str,
        password: &SecretString,
        version: &str,
        originator: &str,
    ) -> Result<SessionRef> {
        let reference: SessionRef = self
            .call("session.login_with_password")
            .arg("uname", username)
            .arg("pwd", password.expose_secret())
            .arg("version", version)
            .arg("originator", originator)
            .invoke_unauthenticated()
            .await?;

        self.establish(reference.clone()).await;
        info!(
            username,
            api_version = %self.api_version(),
            xapi_version = %self.xapi_version(),
            "Logged in"
        );
        Ok(reference)
    }

    /// Authenticate against this host only, bypassing the coordinator.
    ///
    /// For emergencies when the coordinator is unreachable; the session is
    /// valid only on the host contacted.
    ///
    /// # Errors
    ///
    /// As [`Session::login_with_password`].
    pub async fn slave_local_login_with_password(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<SessionRef> {
        let reference: SessionRef = self
            .call("session.slave_local_login_with_password")
            .arg("uname", username)
            .arg("pwd", password.expose_secret())
            .invoke_unauthenticated()
            .await?;

        self.establish(reference.clone()).await;
        info!(username, "Logged in locally");
        Ok(reference)
    }

    /// Destroy the server-side session.
    ///
    /// The reference is cleared whatever the server says. A session the server
    /// already considers invalid is logged, not reported.
    ///
    /// # Errors
    ///
    /// [`Error::NotLoggedIn`] if there is no session, or any other failure of the
    /// call.
    pub async fn logout(&self) -> Result<()> {
        self.end("session.logout").await
    }

    /// Destroy a session obtained from
    /// [`Session::slave_local_login_with_password`].
    ///
    /// # Errors
    ///
    /// As [`Session::logout`].
    pub async fn local_logout(&self) -> Result<()> {
        self.end("session.local_logout").await
    }

    /// Change the password of the logged-in account.
    ///
    /// Sessions with root privileges skip the check of `old_password`.
    ///
    /// # Errors
    ///
    /// Returns the server's fault if the old password is wrong or the new one is
    /// refused.
    pub async fn change_password(
        &self,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<()> {
        self.call("session.change_password")
            .arg("old_pwd", old_password.expose_secret())
            .arg("new_pwd", new_password.expose_secret())
            .invoke()
            .await
    }

    async fn end(&self, method: &str) -> Result<()> {
        let outcome = self.call(method).invoke::<()>().await;
        if matches!(outcome, Err(Error::NotLoggedIn)) {
            return outcome;
        }

        let previous = std::mem::take(&mut *self.write());
        debug!(method, session = %previous.reference, "Cleared session reference");

        match outcome {
            Err(Error::SessionInvalid(fault)) => {
                warn!(method, %fault, "Session was already invalid");
                Ok(())
            }
            other => {
                if other.is_ok() {
                    info!("Logged out");
                }
                other
            }
        }
    }

    async fn establish(&self, reference: SessionRef) {
        {
            let mut state = self.write();
            state.reference = reference;
            state.api_version = ApiVersion::Unknown;
            state.xapi_version.clear();
        }

        match self.discover_versions().await {
            Ok((api_version, xapi_version)) => {
                let mut state = self.write();
                state.api_version = api_version;
                state.xapi_version = xapi_version;
            }
            Err(error) => {
                warn!(%error, "Could not discover the coordinator's versions");
            }
        }
    }

    /// Read the coordinator's API and `xapi` versions.
    ///
    /// Records are decoded field by field so that a pool newer or older than
    /// these bindings still yields its versions.
    async fn discover_versions(&self) -> Result<(ApiVersion, String)> {
        let pools: Vec<PoolRef> = self.call("pool.get_all").invoke().await?;
        let pool = pools
            .first()
            .ok_or_else(|| Error::decode("pool.get_all -> ", "no pool"))?;

        let context = "pool.get_record -> ";
        let record: Value = self
            .call("pool.get_record")
            .arg("self", pool)
            .invoke()
            .await?;
        let pool_record = expect_object(context, &record)?;
        let coordinator: HostRef = decode_field(context, pool_record, "master")?;

        let context = "host.get_record -> ";
        let record: Value = self
            .call("host.get_record")
            .arg("self", &coordinator)
            .invoke()
            .await?;
        let host = expect_object(context, &record)?;
        let major: i64 = decode_field(context, host, "API_version_major")?;
        let minor: i64 = decode_field(context, host, "API_version_minor")?;
        let software: HashMap<String, String> = decode_field(context, host, "software_version")?;

        let api_version = get_api_version(major, minor);
        if !api_version.is_known() {
            debug!(major, minor, "Coordinator API version is not a known release");
        }
        Ok((api_version, software.get("xapi").cloned().unwrap_or_default()))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn assume_reference(&self, reference: &str) {
        self.write().reference = SessionRef::new(reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fault, ok, MockWire, Scripted};
    use serde_json::json;

    fn secret(text: &str) -> SecretString {
        SecretString::from(text.to_string())
    }

    fn discovery(major: &str, minor: &str, xapi: &str) -> Vec<Value> {
        vec![
            ok(json!(["OpaqueRef:pool"])),
            ok(json!({"uuid": "p-1", "master": "OpaqueRef:host", "name_label": "lab"})),
            ok(json!({
                "uuid": "h-1",
                "API_version_major": major,
                "API_version_minor": minor,
                "software_version": {"xapi": xapi, "product_brand": "XCP-ng"},
            })),
        ]
    }

    #[tokio::test]
    async fn test_login_discovers_versions() {
        let mut replies = vec![ok(json!("OpaqueRef:session"))];
        replies.extend(discovery("2", "21", "24.39.0"));
        let wire = Arc::new(Scripted::new(replies));
        let session = Session::with_transport(wire.clone())
            .with_originator("tester")
            .with_requested_version("2.21");

        let reference = session.login("root", &secret("pw")).await.unwrap();

        assert_eq!(reference, SessionRef::new("OpaqueRef:session"));
        assert!(session.is_logged_in());
        assert_eq!(session.api_version(), ApiVersion::V2_21);
        assert_eq!(session.xapi_version(), "24.39.0");
        assert_eq!(
            wire.methods(),
            [
                "session.login_with_password",
                "pool.get_all",
                "pool.get_record",
                "host.get_record"
            ]
        );
        assert_eq!(
            wire.request(0)["params"],
            json!(["root", "pw", "2.21", "tester"])
        );
        assert_eq!(
            wire.request(2)["params"],
            json!(["OpaqueRef:session", "OpaqueRef:pool"])
        );
        assert_eq!(
            wire.request(3)["params"],
            json!(["OpaqueRef:session", "OpaqueRef:host"])
        );
    }

    #[tokio::test]
    async fn test_unknown_version_pair() {
        let mut replies = vec![ok(json!("OpaqueRef:session"))];
        replies.extend(discovery("9", "99", "99.0.0"));
        let wire = Arc::new(Scripted::new(replies));
        let session = Session::with_transport(wire);

        session.login("root", &secret("pw")).await.unwrap();
        assert_eq!(session.api_version(), ApiVersion::Unknown);
        assert_eq!(session.xapi_version(), "99.0.0");
    }

    #[tokio::test]
    async fn test_failed_discovery_keeps_session() {
        let wire = Arc::new(Scripted::new([
            ok(json!("OpaqueRef:session")),
            fault("PERMISSION_DENIED", &[]),
        ]));
        let session = Session::with_transport(wire);

        session.login("root", &secret("pw")).await.unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.api_version(), ApiVersion::Unknown);
        assert_eq!(session.xapi_version(), "");
    }

    #[tokio::test]
    async fn test_discovery_tolerates_missing_xapi_entry() {
        let wire = Arc::new(Scripted::new([
            ok(json!("OpaqueRef:session")),
            ok(json!(["OpaqueRef:pool"])),
            ok(json!({"master": "OpaqueRef:host"})),
            ok(json!({"API_version_major": 2, "API_version_minor": 15, "software_version": []})),
        ]));
        let session = Session::with_transport(wire);

        session.login("root", &secret("pw")).await.unwrap();
        assert_eq!(session.api_version(), ApiVersion::V2_15);
        assert_eq!(session.xapi_version(), "");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let wire = Arc::new(Scripted::new([fault(
            "SESSION_AUTHENTICATION_FAILED",
            &["root", "Authentication failure"],
        )]));
        let session = Session::with_transport(wire.clone());

        let err = session.login("root", &secret("bad")).await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
        assert!(!session.is_logged_in());
        assert_eq!(wire.methods().len(), 1);
    }

    #[tokio::test]
    async fn test_slave_local_login() {
        let mut replies = vec![ok(json!("OpaqueRef:local"))];
        replies.extend(discovery("2", "20", "23.31.0"));
        let wire = Arc::new(Scripted::new(replies));
        let session = Session::with_transport(wire.clone());

        session
            .slave_local_login_with_password("root", &secret("pw"))
            .await
            .unwrap();
        assert_eq!(wire.request(0)["params"], json!(["root", "pw"]));
        assert_eq!(session.api_version(), ApiVersion::V2_20);
    }

    #[tokio::test]
    async fn test_logout_clears_reference() {
        let wire = Arc::new(Scripted::new([ok(json!(""))]));
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");

        session.logout().await.unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(session.reference().as_str(), "");
        assert_eq!(wire.request(0)["params"], json!(["OpaqueRef:s"]));

        let err = session.vm().get_all().await.unwrap_err();
        assert_eq!(err, Error::NotLoggedIn);
        assert_eq!(wire.methods().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_of_invalid_session_succeeds() {
        let wire = Arc::new(Scripted::new([fault("SESSION_INVALID", &["OpaqueRef:s"])]));
        let session = Session::with_transport(wire);
        session.assume_reference("OpaqueRef:s");

        session.local_logout().await.unwrap();
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_logout_failure_still_clears() {
        let wire = Arc::new(Scripted::new([fault("INTERNAL_ERROR", &["boom"])]));
        let session = Session::with_transport(wire);
        session.assume_reference("OpaqueRef:s");

        let err = session.logout().await.unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let session = Session::with_transport(Arc::new(MockWire::new()));
        assert_eq!(session.logout().await.unwrap_err(), Error::NotLoggedIn);
    }

    #[tokio::test]
    async fn test_change_password() {
        let wire = Arc::new(Scripted::new([ok(json!(""))]));
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");

        session
            .change_password(&secret("old"), &secret("new"))
            .await
            .unwrap();
        assert_eq!(wire.methods(), ["session.change_password"]);
        assert_eq!(wire.request(0)["params"], json!(["OpaqueRef:s", "old", "new"]));
    }

    #[test]
    fn test_debug_hides_reference() {
        let session = Session::with_transport(Arc::new(MockWire::new()));
        session.assume_reference("OpaqueRef:secret-session");
        let rendered = format!("{session:?}");
        assert!(rendered.contains("logged_in: true"));
        assert!(!rendered.contains("secret-session"));
    }
}
