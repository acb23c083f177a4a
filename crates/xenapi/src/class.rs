//! Generic per-class handle.
//!
//! Every server class is a zero-sized marker implementing [`XenClass`]; the verbs
//! of that class are methods on [`ClassApi`] specialised to the marker. A handle
//! borrows the [`Session`] and is cheap to create, so callers normally write
//! `session.vbd().eject(&vbd)` rather than keeping one around.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use xenapi_core::codec::{FromWire, ToWire};
use xenapi_core::ApiVersion;

use crate::call::Call;
use crate::session::Session;

/// A server class: its wire name, reference type and record type.
pub trait XenClass {
    /// Wire name, e.g. `"VBD"` or `"GPU_group"`
    const NAME: &'static str;
    /// Reference to one instance
    type Ref: ToWire + FromWire + Clone + Eq + Hash + Send + Sync;
    /// Snapshot of one instance's fields
    type Record: FromWire + Send;
}

/// Verbs of class `C`, issued on a borrowed session.
pub struct ClassApi<'s, C> {
    session: &'s Session,
    target: Option<ApiVersion>,
    class: PhantomData<fn() -> C>,
}

impl<'s, C: XenClass> ClassApi<'s, C> {
    pub(crate) const fn new(session: &'s Session) -> Self {
        Self {
            session,
            target: None,
            class: PhantomData,
        }
    }

    /// Address a server at `version` instead of the version found at login.
    ///
    /// Only verbs whose signature changed over time look at this.
    #[must_use]
    pub const fn targeting(mut self, version: ApiVersion) -> Self {
        self.target = Some(version);
        self
    }

    /// Version used to pick between historical signatures.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.target.unwrap_or_else(|| self.session.api_version())
    }

    /// The session calls are issued on.
    #[must_use]
    pub const fn session(&self) -> &'s Session {
        self.session
    }

    /// Start a call to `<class>.<verb>`.
    #[must_use]
    pub fn call(&self, verb: &str) -> Call<'s> {
        self.session.call(format!("{}.{verb}", C::NAME))
    }
}

impl<C> Clone for ClassApi<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ClassApi<'_, C> {}

impl<C: XenClass> fmt::Debug for ClassApi<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassApi")
            .field("class", &C::NAME)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Field getters: `name => "wire_verb": ReturnType`.
macro_rules! getters {
    (
        $class:ty, $reference:ty {
            $($(#[$meta:meta])* $name:ident => $verb:literal : $ret:ty),* $(,)?
        }
    ) => {
        impl $crate::class::ClassApi<'_, $class> {
            $(
                $(#[$meta])*
                pub async fn $name(&self, reference: &$reference) -> $crate::Result<$ret> {
                    self.call($verb).arg("self", reference).invoke().await
                }
            )*
        }
    };
}

/// Whole-field setters: `name => "wire_verb": ValueType`.
macro_rules! setters {
    (
        $class:ty, $reference:ty {
            $($(#[$meta:meta])* $name:ident => $verb:literal : $value:ty),* $(,)?
        }
    ) => {
        impl $crate::class::ClassApi<'_, $class> {
            $(
                $(#[$meta])*
                pub async fn $name(&self, reference: &$reference, value: $value) -> $crate::Result<()> {
                    self.call($verb)
                        .arg("self", reference)
                        .arg("value", &value)
                        .invoke()
                        .await
                }
            )*
        }
    };
}

/// Per-key mutators of map fields: `add, remove => "field": KeyType => ValueType`.
macro_rules! map_mutators {
    (
        $class:ty, $reference:ty {
            $(
                $(#[$meta:meta])*
                $add:ident, $remove:ident => $field:literal : $key:ty => $value:ty
            ),* $(,)?
        }
    ) => {
        impl $crate::class::ClassApi<'_, $class> {
            $(
                $(#[$meta])*
                pub async fn $add(
                    &self,
                    reference: &$reference,
                    key: $key,
                    value: $value,
                ) -> $crate::Result<()> {
                    self.call(concat!("add_to_", $field))
                        .arg("self", reference)
                        .arg("key", &key)
                        .arg("value", &value)
                        .invoke()
                        .await
                }

                #[doc = concat!("Remove the given key and its value from the `", $field, "` field.")]
                pub async fn $remove(&self, reference: &$reference, key: $key) -> $crate::Result<()> {
                    self.call(concat!("remove_from_", $field))
                        .arg("self", reference)
                        .arg("key", &key)
                        .invoke()
                        .await
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use serde_json::json;
    use xenapi_core::ApiVersion;

    use crate::enums::{IpConfigurationMode, Ipv6ConfigurationMode, PrimaryAddressType};
    use crate::refs::{
        BondRef, HostRef, NetworkRef, SessionRef, SrRef, TaskRef, VbdRef, VdiRef, VlanRef,
    };
    use crate::session::Session;
    use crate::test_support::{ok, Scripted};

    fn logged_in(wire: &Arc<Scripted>) -> Session {
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");
        session
    }

    async fn copy(session: &Session, version: Option<ApiVersion>) {
        let api = session.vdi();
        let api = match version {
            Some(version) => api.targeting(version),
            None => api,
        };
        let copied = api
            .copy(
                &VdiRef::new("OpaqueRef:vdi"),
                &SrRef::new("OpaqueRef:sr"),
                &VdiRef::null(),
                &VdiRef::null(),
            )
            .await
            .unwrap();
        assert_eq!(copied, VdiRef::new("OpaqueRef:copy"));
    }

    #[tokio::test]
    async fn test_overload_uses_current_signature_by_default() {
        let wire = Arc::new(Scripted::new([ok(json!("OpaqueRef:copy"))]));
        let session = logged_in(&wire);

        copy(&session, None).await;

        let request = wire.request(0);
        assert_eq!(request["method"], "VDI.copy");
        assert_eq!(
            request["params"],
            json!([
                "OpaqueRef:s",
                "OpaqueRef:vdi",
                "OpaqueRef:sr",
                "OpaqueRef:NULL",
                "OpaqueRef:NULL"
            ])
        );
    }

    #[tokio::test]
    async fn test_overload_targets_older_pool() {
        let wire = Arc::new(Scripted::new([ok(json!("OpaqueRef:copy"))]));
        let session = logged_in(&wire);

        copy(&session, Some(ApiVersion::V1_6)).await;

        assert_eq!(
            wire.request(0)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vdi", "OpaqueRef:sr"])
        );
    }

    #[tokio::test]
    async fn test_clone_and_snapshot_drop_driver_params_on_rio() {
        let wire = Arc::new(Scripted::new([
            ok(json!("OpaqueRef:clone")),
            ok(json!("OpaqueRef:snap")),
            ok(json!("OpaqueRef:snap2")),
        ]));
        let session = logged_in(&wire);
        let vdi = VdiRef::new("OpaqueRef:vdi");
        let driver_params = HashMap::from([("mode".to_string(), "fast".to_string())]);

        let rio = session.vdi().targeting(ApiVersion::V1_1);
        rio.clone(&vdi, &HashMap::new()).await.unwrap();
        rio.snapshot(&vdi, &driver_params).await.unwrap();
        session
            .vdi()
            .targeting(ApiVersion::V1_2)
            .snapshot(&vdi, &driver_params)
            .await
            .unwrap();

        assert_eq!(wire.methods(), ["VDI.clone", "VDI.snapshot", "VDI.snapshot"]);
        assert_eq!(wire.request(0)["params"], json!(["OpaqueRef:s", "OpaqueRef:vdi"]));
        assert_eq!(wire.request(1)["params"], json!(["OpaqueRef:s", "OpaqueRef:vdi"]));
        assert_eq!(
            wire.request(2)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vdi", [["mode", "fast"]]])
        );
    }

    #[tokio::test]
    async fn test_db_introduce_follows_pool_version() {
        let replies = (0..3).map(|_| ok(json!("OpaqueRef:pif")));
        let wire = Arc::new(Scripted::new(replies));
        let session = logged_in(&wire);

        for version in [ApiVersion::V1_3, ApiVersion::V2_1, ApiVersion::V2_21] {
            session
                .pif()
                .targeting(version)
                .db_introduce(
                    "eth0",
                    &NetworkRef::new("OpaqueRef:net"),
                    &HostRef::new("OpaqueRef:host"),
                    "00:16:3e:00:00:01",
                    1500,
                    -1,
                    true,
                    IpConfigurationMode::Dhcp,
                    "",
                    "",
                    "",
                    "",
                    &BondRef::null(),
                    &VlanRef::null(),
                    true,
                    &HashMap::new(),
                    false,
                    Ipv6ConfigurationMode::None,
                    &[],
                    "",
                    PrimaryAddressType::IPv4,
                    true,
                    &HashMap::new(),
                )
                .await
                .unwrap();
        }

        let sent: Vec<usize> = (0..3)
            .map(|i| wire.request(i)["params"].as_array().unwrap().len())
            .collect();
        assert_eq!(sent, [18, 23, 24]);
        assert_eq!(wire.request(0)["params"][16], json!([]));
        assert_eq!(wire.request(0)["params"][17], json!(false));
    }

    #[tokio::test]
    async fn test_async_form_sends_same_arguments() {
        let wire = Arc::new(Scripted::new([ok(json!("")), ok(json!("OpaqueRef:task"))]));
        let session = logged_in(&wire);
        let vbd = VbdRef::new("OpaqueRef:vbd");
        let vdi = VdiRef::new("OpaqueRef:iso");

        session.vbd().insert(&vbd, &vdi).await.unwrap();
        let task = session.vbd().async_insert(&vbd, &vdi).await.unwrap();

        assert_eq!(task, TaskRef::new("OpaqueRef:task"));
        assert_eq!(wire.methods(), ["VBD.insert", "Async.VBD.insert"]);
        assert_eq!(wire.request(0)["params"], wire.request(1)["params"]);
        assert_eq!(
            wire.request(1)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vbd", "OpaqueRef:iso"])
        );
    }

    #[tokio::test]
    async fn test_async_overload_targets_older_pool() {
        let wire = Arc::new(Scripted::new([ok(json!("OpaqueRef:task"))]));
        let session = logged_in(&wire);

        session
            .vdi()
            .targeting(ApiVersion::V1_6)
            .async_copy(
                &VdiRef::new("OpaqueRef:vdi"),
                &SrRef::new("OpaqueRef:sr"),
                &VdiRef::null(),
                &VdiRef::null(),
            )
            .await
            .unwrap();

        assert_eq!(wire.methods(), ["Async.VDI.copy"]);
        assert_eq!(
            wire.request(0)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vdi", "OpaqueRef:sr"])
        );
    }

    #[test]
    fn test_class_handle_reports_target() {
        let wire = Arc::new(Scripted::new([]));
        let session = logged_in(&wire);
        let api = session.vdi();
        assert_eq!(api.api_version(), ApiVersion::Unknown);
        assert_eq!(api.session().reference(), SessionRef::new("OpaqueRef:s"));

        let api = api.targeting(ApiVersion::V2_2);
        assert_eq!(api.api_version(), ApiVersion::V2_2);
        assert!(format!("{api:?}").contains("VDI"));
    }

    #[tokio::test]
    async fn test_getter_and_setter_wire_shape() {
        let wire = Arc::new(Scripted::new([ok(json!("backup disk")), ok(json!(""))]));
        let session = logged_in(&wire);
        let vdi = VdiRef::new("OpaqueRef:vdi");

        let label = session.vdi().get_name_label(&vdi).await.unwrap();
        assert_eq!(label, "backup disk");
        session.vdi().set_name_label(&vdi, "archive").await.unwrap();

        assert_eq!(wire.methods(), ["VDI.get_name_label", "VDI.set_name_label"]);
        assert_eq!(
            wire.request(1)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vdi", "archive"])
        );
    }

    #[tokio::test]
    async fn test_map_mutator_wire_shape() {
        let wire = Arc::new(Scripted::new([ok(json!("")), ok(json!(""))]));
        let session = logged_in(&wire);
        let vdi = VdiRef::new("OpaqueRef:vdi");

        session
            .vdi()
            .add_to_other_config(&vdi, "owner", "backup")
            .await
            .unwrap();
        session
            .vdi()
            .remove_from_other_config(&vdi, "owner")
            .await
            .unwrap();

        assert_eq!(
            wire.methods(),
            ["VDI.add_to_other_config", "VDI.remove_from_other_config"]
        );
        assert_eq!(
            wire.request(0)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vdi", "owner", "backup"])
        );
        assert_eq!(
            wire.request(1)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vdi", "owner"])
        );
    }
}
