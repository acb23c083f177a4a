//! `network`: A virtual network.

use std::collections::HashMap;

use xenapi_core::version::{ApiVersion, Overload, OverloadTable};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{NetworkDefaultLockingMode, NetworkOperations, NetworkPurpose};
use crate::refs::{BlobRef, NetworkRef, PifRef, TaskRef, VifRef};
use crate::Result;

/// Marker for the `network` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network;

impl XenClass for Network {
    const NAME: &'static str = "network";
    type Ref = NetworkRef;
    type Record = NetworkRecord;
}

/// Signatures of `network.create_new_blob`, newest first.
pub const CREATE_NEW_BLOB_SIGNATURES: OverloadTable = OverloadTable::new(
    "network.create_new_blob",
    &[
        Overload::new(ApiVersion::V1_10, 5),
        Overload::new(ApiVersion::V1_3, 4),
    ],
);

xen_record! {
    /// A virtual network.
    NetworkRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<NetworkOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, NetworkOperations> => "current_operations",
        /// List of connected vifs.
        vifs: Vec<VifRef> => "VIFs",
        /// List of connected pifs.
        pifs: Vec<PifRef> => "PIFs",
        /// MTU in octets.
        mtu: i64 => "MTU",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Name of the bridge corresponding to this network on the local host.
        bridge: String => "bridge",
        /// True if the bridge is managed by xapi.
        managed: bool => "managed",
        /// Binary blobs associated with this network.
        blobs: HashMap<String, BlobRef> => "blobs",
        /// User-specified tags for categorization purposes.
        tags: Vec<String> => "tags",
        /// The network will use this value to determine the behaviour of all VIFs where locking_mode = default.
        default_locking_mode: NetworkDefaultLockingMode => "default_locking_mode",
        /// The IP addresses assigned to VIFs on networks that have active xapi-managed DHCP.
        assigned_ips: HashMap<VifRef, String> => "assigned_ips",
        /// Set of purposes for which the server will use this network.
        purpose: Vec<NetworkPurpose> => "purpose",
    }
}

xen_record! {
    /// Fields accepted by `network.create`; `None` leaves the server default.
    NetworkCreateArgs {
        /// A human-readable name.
        name_label: Option<String> => "name_label",
        /// A notes field containing human-readable description.
        name_description: Option<String> => "name_description",
        /// MTU in octets.
        mtu: Option<i64> => "MTU",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Name of the bridge corresponding to this network on the local host.
        bridge: Option<String> => "bridge",
        /// True if the bridge is managed by xapi.
        managed: Option<bool> => "managed",
        /// User-specified tags for categorization purposes.
        tags: Option<Vec<String>> => "tags",
    }
}

getters! {
    Network, NetworkRef {
        /// Get the uuid field of the given network.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given network.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given network.
        get_name_description => "get_name_description": String,
        /// Get the allowed_operations field of the given network.
        get_allowed_operations => "get_allowed_operations": Vec<NetworkOperations>,
        /// Get the current_operations field of the given network.
        get_current_operations => "get_current_operations": HashMap<String, NetworkOperations>,
        /// Get the VIFs field of the given network.
        get_vifs => "get_VIFs": Vec<VifRef>,
        /// Get the PIFs field of the given network.
        get_pifs => "get_PIFs": Vec<PifRef>,
        /// Get the MTU field of the given network.
        get_mtu => "get_MTU": i64,
        /// Get the other_config field of the given network.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the bridge field of the given network.
        get_bridge => "get_bridge": String,
        /// Get the managed field of the given network.
        get_managed => "get_managed": bool,
        /// Get the blobs field of the given network.
        get_blobs => "get_blobs": HashMap<String, BlobRef>,
        /// Get the tags field of the given network.
        get_tags => "get_tags": Vec<String>,
        /// Get the default_locking_mode field of the given network.
        get_default_locking_mode => "get_default_locking_mode": NetworkDefaultLockingMode,
        /// Get the assigned_ips field of the given network.
        get_assigned_ips => "get_assigned_ips": HashMap<VifRef, String>,
        /// Get the purpose field of the given network.
        get_purpose => "get_purpose": Vec<NetworkPurpose>,
    }
}

setters! {
    Network, NetworkRef {
        /// Set the name/label field of the given network.
        set_name_label => "set_name_label": &str,
        /// Set the name/description field of the given network.
        set_name_description => "set_name_description": &str,
        /// Set the MTU field of the given network.
        ///
        /// Since `midnight-ride`.
        set_mtu => "set_MTU": i64,
        /// Set the other_config field of the given network.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the tags field of the given network.
        ///
        /// Since `orlando`.
        set_tags => "set_tags": &[String],
    }
}

map_mutators! {
    Network, NetworkRef {
        /// Add the given key-value pair to the other_config field of the given network.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Network> {
    /// Get a record containing the current state of the given network.
    pub async fn get_record(&self, network: &NetworkRef) -> Result<NetworkRecord> {
        self.call("get_record").arg("self", network).invoke().await
    }

    /// Get a reference to the network instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<NetworkRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the network instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<NetworkRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the networks known to the system.
    pub async fn get_all(&self) -> Result<Vec<NetworkRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of network references to network records for all networks known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<NetworkRef, NetworkRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new network instance, and return its handle.
    pub async fn create(&self, args: &NetworkCreateArgs) -> Result<NetworkRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &NetworkCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified network instance.
    pub async fn destroy(&self, network: &NetworkRef) -> Result<()> {
        self.call("destroy").arg("self", network).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, network: &NetworkRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", network).invoke_async().await
    }

    /// Add the given value to the tags field of the given network.  If the value is already in that Set, then do nothing.
    ///
    /// Since `orlando`.
    pub async fn add_tags(&self, network: &NetworkRef, value: &str) -> Result<()> {
        self.call("add_tags").arg("self", network).arg("value", value).invoke().await
    }

    /// Remove the given value from the tags field of the given network.  If the value is not in that Set, then do nothing.
    ///
    /// Since `orlando`.
    pub async fn remove_tags(&self, network: &NetworkRef, value: &str) -> Result<()> {
        self.call("remove_tags").arg("self", network).arg("value", value).invoke().await
    }

    /// Create a placeholder for a named binary blob of data that is associated with this pool.
    ///
    /// Since `tampa`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn create_new_blob(
        &self,
        network: &NetworkRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<BlobRef> {
        self.call("create_new_blob")
            .arg("network", network)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .select(&CREATE_NEW_BLOB_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_new_blob`].
    pub async fn async_create_new_blob(
        &self,
        network: &NetworkRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<TaskRef> {
        self.call("create_new_blob")
            .arg("network", network)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .select(&CREATE_NEW_BLOB_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Set the default locking mode for VIFs attached to this network.
    ///
    /// Since `tampa`.
    pub async fn set_default_locking_mode(
        &self,
        network: &NetworkRef,
        value: NetworkDefaultLockingMode,
    ) -> Result<()> {
        self.call("set_default_locking_mode")
            .arg("network", network)
            .arg("value", &value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_default_locking_mode`].
    pub async fn async_set_default_locking_mode(
        &self,
        network: &NetworkRef,
        value: NetworkDefaultLockingMode,
    ) -> Result<TaskRef> {
        self.call("set_default_locking_mode")
            .arg("network", network)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Give a network a new purpose (if not present already)
    ///
    /// Since `inverness`.
    ///
    /// # Errors
    ///
    /// - `NETWORK_INCOMPATIBLE_PURPOSES`: You tried to add a purpose to a network but the new purpose is not compatible with an existing purpose of the network or other networks.
    pub async fn add_purpose(&self, network: &NetworkRef, value: NetworkPurpose) -> Result<()> {
        self.call("add_purpose").arg("self", network).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::add_purpose`].
    pub async fn async_add_purpose(
        &self,
        network: &NetworkRef,
        value: NetworkPurpose,
    ) -> Result<TaskRef> {
        self.call("add_purpose").arg("self", network).arg("value", &value).invoke_async().await
    }

    /// Remove a purpose from a network (if present)
    ///
    /// Since `inverness`.
    pub async fn remove_purpose(&self, network: &NetworkRef, value: NetworkPurpose) -> Result<()> {
        self.call("remove_purpose").arg("self", network).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::remove_purpose`].
    pub async fn async_remove_purpose(
        &self,
        network: &NetworkRef,
        value: NetworkPurpose,
    ) -> Result<TaskRef> {
        self.call("remove_purpose").arg("self", network).arg("value", &value).invoke_async().await
    }
}
