//! `secret`: A secret.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{SecretRef, TaskRef};
use crate::Result;

/// Marker for the `secret` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secret;

impl XenClass for Secret {
    const NAME: &'static str = "secret";
    type Ref = SecretRef;
    type Record = SecretRecord;
}

xen_record! {
    /// A secret.
    SecretRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// The secret.
        value: String => "value",
        /// Other_config.
        other_config: HashMap<String, String> => "other_config",
    }
}

xen_record! {
    /// Fields accepted by `secret.create`; `None` leaves the server default.
    SecretCreateArgs {
        /// The secret.
        value: String => "value",
        /// Other_config.
        other_config: Option<HashMap<String, String>> => "other_config",
    }
}

getters! {
    Secret, SecretRef {
        /// Get the uuid field of the given secret.
        ///
        /// Since `midnight-ride`.
        get_uuid => "get_uuid": String,
        /// Get the value field of the given secret.
        ///
        /// Since `midnight-ride`.
        get_value => "get_value": String,
        /// Get the other_config field of the given secret.
        ///
        /// Since `midnight-ride`.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    Secret, SecretRef {
        /// Set the value field of the given secret.
        ///
        /// Since `midnight-ride`.
        set_value => "set_value": &str,
        /// Set the other_config field of the given secret.
        ///
        /// Since `midnight-ride`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Secret, SecretRef {
        /// Add the given key-value pair to the other_config field of the given secret.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Secret> {
    /// Get a record containing the current state of the given secret.
    ///
    /// Since `midnight-ride`.
    pub async fn get_record(&self, secret: &SecretRef) -> Result<SecretRecord> {
        self.call("get_record").arg("self", secret).invoke().await
    }

    /// Get a reference to the secret instance with the specified UUID.
    ///
    /// Since `midnight-ride`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<SecretRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the secrets known to the system.
    ///
    /// Since `midnight-ride`.
    pub async fn get_all(&self) -> Result<Vec<SecretRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of secret references to secret records for all secrets known to the system.
    ///
    /// Since `midnight-ride`.
    pub async fn get_all_records(&self) -> Result<HashMap<SecretRef, SecretRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new secret instance, and return its handle.
    ///
    /// Since `midnight-ride`.
    pub async fn create(&self, args: &SecretCreateArgs) -> Result<SecretRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &SecretCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified secret instance.
    ///
    /// Since `midnight-ride`.
    pub async fn destroy(&self, secret: &SecretRef) -> Result<()> {
        self.call("destroy").arg("self", secret).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, secret: &SecretRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", secret).invoke_async().await
    }
}
