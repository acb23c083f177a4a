//! Call builder.
//!
//! A [`Call`] collects positional arguments for one method, encoding each as it
//! is added. Encoding failures are held until the call is invoked so that a
//! chain of `.arg(..)` calls reads straight through; nothing is sent if any
//! argument failed.

use xenapi_core::codec::{decode_result, encode_arg, FromWire, ToWire, Value};
use xenapi_core::{ApiVersion, Error, OverloadTable, Result};

use crate::refs::TaskRef;
use crate::session::{Session, LOGIN_METHODS};

/// Prefix turning `<Class>.<verb>` into its task-returning form.
pub const ASYNC_PREFIX: &str = "Async.";

/// A method call being assembled.
#[derive(Debug)]
#[must_use = "a call does nothing until it is invoked"]
pub struct Call<'s> {
    session: &'s Session,
    method: String,
    params: Vec<Value>,
    error: Option<Error>,
}

impl<'s> Call<'s> {
    pub(crate) fn new(session: &'s Session, method: impl Into<String>) -> Self {
        Self {
            session,
            method: method.into(),
            params: Vec::new(),
            error: None,
        }
    }

    /// Dotted method name, without the `Async.` prefix.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Arguments encoded so far, session reference excluded.
    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Append the argument `name`.
    ///
    /// `name` only appears in error contexts; the wire is positional.
    pub fn arg<T: ToWire + ?Sized>(mut self, name: &str, value: &T) -> Self {
        if self.error.is_none() {
            match encode_arg(&self.method, name, value) {
                Ok(value) => self.params.push(value),
                Err(error) => self.error = Some(error),
            }
        }
        self
    }

    /// Trim the arguments to the signature `table` prescribes for `version`.
    pub fn select(mut self, table: &OverloadTable, version: ApiVersion) -> Self {
        let arity = table.arity_for(version);
        // arity counts the session reference
        self.params.truncate(arity.saturating_sub(1));
        self
    }

    /// Send as `<Class>.<verb>` and decode the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoggedIn`] without a round trip if the session has no
    /// reference, otherwise any encoding, transport, fault or decoding error.
    pub async fn invoke<R: FromWire>(self) -> Result<R> {
        let (session, method, params) = self.authenticated(None)?;
        let result = session.client().call(&method, &params).await?;
        decode_result(&method, &result)
    }

    /// Send as `Async.<Class>.<verb>` and return the task tracking it.
    ///
    /// # Errors
    ///
    /// As [`Call::invoke`].
    pub async fn invoke_async(self) -> Result<TaskRef> {
        let (session, method, params) = self.authenticated(Some(ASYNC_PREFIX))?;
        let result = session.client().call(&method, &params).await?;
        decode_result(&method, &result)
    }

    /// Send without a session reference (login family).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] without a round trip if the method is
    /// not one of [`LOGIN_METHODS`], otherwise any encoding, transport, fault or
    /// decoding error.
    pub async fn invoke_unauthenticated<R: FromWire>(self) -> Result<R> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !LOGIN_METHODS.contains(&self.method.as_str()) {
            return Err(Error::ValidationError(format!(
                "{} cannot be sent without a session reference",
                self.method
            )));
        }
        let result = self.session.client().call(&self.method, &self.params).await?;
        decode_result(&self.method, &result)
    }

    fn authenticated(self, prefix: Option<&str>) -> Result<(&'s Session, String, Vec<Value>)> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let reference = self.session.reference();
        if reference.is_null() {
            return Err(Error::NotLoggedIn);
        }

        let mut params = Vec::with_capacity(self.params.len() + 1);
        params.push(Value::String(reference.into_inner()));
        params.extend(self.params);

        let method = match prefix {
            Some(prefix) => format!("{prefix}{}", self.method),
            None => self.method,
        };
        Ok((self.session, method, params))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use xenapi_core::version::Overload;

    use super::*;
    use crate::refs::VbdRef;
    use crate::test_support::MockWire;

    const TABLE: OverloadTable = OverloadTable::new(
        "thing.create",
        &[
            Overload::new(ApiVersion::V2_0, 4),
            Overload::new(ApiVersion::V1_1, 2),
        ],
    );

    fn offline() -> Session {
        Session::with_transport(Arc::new(MockWire::new()))
    }

    #[test]
    fn test_args_are_encoded_in_order() {
        let session = offline();
        let call = session
            .call("VBD.insert")
            .arg("vbd", &VbdRef::new("OpaqueRef:vbd"))
            .arg("count", &42_i64)
            .arg("label", "cd");
        assert_eq!(call.method(), "VBD.insert");
        assert_eq!(call.params(), [json!("OpaqueRef:vbd"), json!("42"), json!("cd")]);
    }

    #[test]
    fn test_select_truncates_to_signature() {
        let session = offline();
        let call = session
            .call("thing.create")
            .arg("a", "1")
            .arg("b", "2")
            .arg("c", "3")
            .select(&TABLE, ApiVersion::V1_5);
        assert_eq!(call.params(), [json!("1")]);

        let call = session
            .call("thing.create")
            .arg("a", "1")
            .arg("b", "2")
            .arg("c", "3")
            .select(&TABLE, ApiVersion::Unknown);
        assert_eq!(call.params().len(), 3);
    }

    #[tokio::test]
    async fn test_invoke_requires_login() {
        let session = offline();
        let err = session
            .call("VBD.eject")
            .arg("vbd", &VbdRef::new("OpaqueRef:vbd"))
            .invoke::<()>()
            .await
            .unwrap_err();
        assert_eq!(err, Error::NotLoggedIn);

        let err = session.call("VBD.destroy").invoke_async().await.unwrap_err();
        assert_eq!(err, Error::NotLoggedIn);
    }

    #[tokio::test]
    async fn test_encoding_error_is_reported_before_sending() {
        let session = offline();
        session.assume_reference("OpaqueRef:s");
        let err = session
            .call("VM.set_VCPUs_weight")
            .arg("value", &f64::NAN)
            .invoke::<()>()
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Encode { ref context, .. } if context == "VM.set_VCPUs_weight(value)")
        );
    }

    #[tokio::test]
    async fn test_only_login_methods_skip_the_session() {
        let session = offline();
        for method in ["VM.get_all", "session.logout", "Async.session.login_with_password"] {
            let err = session
                .call(method)
                .invoke_unauthenticated::<()>()
                .await
                .unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_ERROR", "{method}");
            assert!(err.to_string().contains(method));
        }
    }
}
