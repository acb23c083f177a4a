//! `VDI`: A virtual disk image.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::version::{ApiVersion, Overload, OverloadTable};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{OnBoot, VdiOperations, VdiType};
use crate::records::VdiNbdServerInfoRecord;
use crate::refs::{CrashdumpRef, PoolRef, SessionRef, SrRef, TaskRef, VbdRef, VdiRef};
use crate::Result;

/// Marker for the `VDI` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vdi;

impl XenClass for Vdi {
    const NAME: &'static str = "VDI";
    type Ref = VdiRef;
    type Record = VdiRecord;
}

/// Signatures of `VDI.snapshot`, newest first.
pub const SNAPSHOT_SIGNATURES: OverloadTable = OverloadTable::new(
    "VDI.snapshot",
    &[
        Overload::new(ApiVersion::V1_2, 3),
        Overload::new(ApiVersion::V1_1, 2),
    ],
);

/// Signatures of `VDI.clone`, newest first.
pub const CLONE_SIGNATURES: OverloadTable = OverloadTable::new(
    "VDI.clone",
    &[
        Overload::new(ApiVersion::V1_2, 3),
        Overload::new(ApiVersion::V1_1, 2),
    ],
);

/// Signatures of `VDI.introduce`, newest first.
pub const INTRODUCE_SIGNATURES: OverloadTable = OverloadTable::new(
    "VDI.introduce",
    &[
        Overload::new(ApiVersion::V1_10, 19),
        Overload::new(ApiVersion::V1_2, 12),
        Overload::new(ApiVersion::V1_1, 11),
    ],
);

/// Signatures of `VDI.copy`, newest first.
pub const COPY_SIGNATURES: OverloadTable = OverloadTable::new(
    "VDI.copy",
    &[
        Overload::new(ApiVersion::V2_2, 5),
        Overload::new(ApiVersion::V1_1, 3),
    ],
);

xen_record! {
    /// A virtual disk image.
    VdiRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<VdiOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, VdiOperations> => "current_operations",
        /// Storage repository in which the VDI resides.
        sr: SrRef => "SR",
        /// List of vbds that refer to this disk.
        vbds: Vec<VbdRef> => "VBDs",
        /// List of crash dumps that refer to this disk.
        crash_dumps: Vec<CrashdumpRef> => "crash_dumps",
        /// Size of disk as presented to the guest (in bytes). Note that, depending on storage backend type, requested size may not be respected exactly.
        virtual_size: i64 => "virtual_size",
        /// Amount of physical space that the disk image is currently taking up on the storage repository (in bytes)
        physical_utilisation: i64 => "physical_utilisation",
        /// Type of the VDI.
        type_: VdiType => "type",
        /// True if this disk may be shared.
        sharable: bool => "sharable",
        /// True if this disk may ONLY be mounted read-only.
        read_only: bool => "read_only",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// True if this disk is locked at the storage level.
        storage_lock: bool => "storage_lock",
        /// Location information.
        location: String => "location",
        /// `managed`
        managed: bool => "managed",
        /// True if SR scan operation reported this VDI as not present on disk.
        missing: bool => "missing",
        /// This field is always null. Deprecated.
        parent: VdiRef => "parent",
        /// Data to be inserted into the xenstore tree (/local/domain/0/backend/vbd/&lt;domid&gt;/&lt;device-id&gt;/sm-data) after the VDI is attached. This is generally set by the SM backends on vdi_attach.
        xenstore_data: HashMap<String, String> => "xenstore_data",
        /// SM dependent data.
        sm_config: HashMap<String, String> => "sm_config",
        /// True if this is a snapshot.
        is_a_snapshot: bool => "is_a_snapshot",
        /// Ref pointing to the VDI this snapshot is of.
        snapshot_of: VdiRef => "snapshot_of",
        /// List pointing to all the VDIs snapshots.
        snapshots: Vec<VdiRef> => "snapshots",
        /// Date/time when this snapshot was created.
        snapshot_time: DateTime<Utc> => "snapshot_time",
        /// User-specified tags for categorization purposes.
        tags: Vec<String> => "tags",
        /// True if this VDI is to be cached in the local cache SR.
        allow_caching: bool => "allow_caching",
        /// The behaviour of this VDI on a VM boot.
        on_boot: OnBoot => "on_boot",
        /// The pool whose metadata is contained in this VDI.
        metadata_of_pool: PoolRef => "metadata_of_pool",
        /// Whether this VDI contains the latest known accessible metadata for the pool.
        metadata_latest: bool => "metadata_latest",
        /// Whether this VDI is a Tools ISO.
        is_tools_iso: bool => "is_tools_iso",
        /// True if changed blocks are tracked for this VDI.
        cbt_enabled: bool => "cbt_enabled",
    }
}

xen_record! {
    /// Fields accepted by `VDI.create`; `None` leaves the server default.
    VdiCreateArgs {
        /// A human-readable name.
        name_label: Option<String> => "name_label",
        /// A notes field containing human-readable description.
        name_description: Option<String> => "name_description",
        /// Storage repository in which the VDI resides.
        sr: SrRef => "SR",
        /// Size of disk as presented to the guest (in bytes). Note that, depending on storage backend type, requested size may not be respected exactly.
        virtual_size: i64 => "virtual_size",
        /// Type of the VDI.
        type_: VdiType => "type",
        /// True if this disk may be shared.
        sharable: bool => "sharable",
        /// True if this disk may ONLY be mounted read-only.
        read_only: bool => "read_only",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Data to be inserted into the xenstore tree (/local/domain/0/backend/vbd/&lt;domid&gt;/&lt;device-id&gt;/sm-data) after the VDI is attached. This is generally set by the SM backends on vdi_attach.
        xenstore_data: Option<HashMap<String, String>> => "xenstore_data",
        /// SM dependent data.
        sm_config: Option<HashMap<String, String>> => "sm_config",
        /// User-specified tags for categorization purposes.
        tags: Option<Vec<String>> => "tags",
    }
}

getters! {
    Vdi, VdiRef {
        /// Get the uuid field of the given VDI.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given VDI.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given VDI.
        get_name_description => "get_name_description": String,
        /// Get the allowed_operations field of the given VDI.
        get_allowed_operations => "get_allowed_operations": Vec<VdiOperations>,
        /// Get the current_operations field of the given VDI.
        get_current_operations => "get_current_operations": HashMap<String, VdiOperations>,
        /// Get the SR field of the given VDI.
        get_sr => "get_SR": SrRef,
        /// Get the VBDs field of the given VDI.
        get_vbds => "get_VBDs": Vec<VbdRef>,
        /// Get the crash_dumps field of the given VDI.
        get_crash_dumps => "get_crash_dumps": Vec<CrashdumpRef>,
        /// Get the virtual_size field of the given VDI.
        get_virtual_size => "get_virtual_size": i64,
        /// Get the physical_utilisation field of the given VDI.
        get_physical_utilisation => "get_physical_utilisation": i64,
        /// Get the type field of the given VDI.
        get_type => "get_type": VdiType,
        /// Get the sharable field of the given VDI.
        get_sharable => "get_sharable": bool,
        /// Get the read_only field of the given VDI.
        get_read_only => "get_read_only": bool,
        /// Get the other_config field of the given VDI.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the storage_lock field of the given VDI.
        get_storage_lock => "get_storage_lock": bool,
        /// Get the location field of the given VDI.
        get_location => "get_location": String,
        /// Get the managed field of the given VDI.
        get_managed => "get_managed": bool,
        /// Get the missing field of the given VDI.
        get_missing => "get_missing": bool,
        /// Get the parent field of the given VDI.
        get_parent => "get_parent": VdiRef,
        /// Get the xenstore_data field of the given VDI.
        get_xenstore_data => "get_xenstore_data": HashMap<String, String>,
        /// Get the sm_config field of the given VDI.
        get_sm_config => "get_sm_config": HashMap<String, String>,
        /// Get the is_a_snapshot field of the given VDI.
        get_is_a_snapshot => "get_is_a_snapshot": bool,
        /// Get the snapshot_of field of the given VDI.
        get_snapshot_of => "get_snapshot_of": VdiRef,
        /// Get the snapshots field of the given VDI.
        get_snapshots => "get_snapshots": Vec<VdiRef>,
        /// Get the snapshot_time field of the given VDI.
        get_snapshot_time => "get_snapshot_time": DateTime<Utc>,
        /// Get the tags field of the given VDI.
        get_tags => "get_tags": Vec<String>,
        /// Get the allow_caching field of the given VDI.
        get_allow_caching => "get_allow_caching": bool,
        /// Get the on_boot field of the given VDI.
        get_on_boot => "get_on_boot": OnBoot,
        /// Get the metadata_of_pool field of the given VDI.
        get_metadata_of_pool => "get_metadata_of_pool": PoolRef,
        /// Get the metadata_latest field of the given VDI.
        get_metadata_latest => "get_metadata_latest": bool,
        /// Get the is_tools_iso field of the given VDI.
        get_is_tools_iso => "get_is_tools_iso": bool,
        /// Get the cbt_enabled field of the given VDI.
        get_cbt_enabled => "get_cbt_enabled": bool,
        /// Get details specifying how to access this VDI via a Network Block Device server. For each of a set of NBD server addresses on which the VDI is available, the return value set contains a vdi_nbd_server_info object that contains an exportname to request once the NBD connection is established, and connection details for the address. An empty list is returned if there is no network that has a PIF on a host with access to the relevant SR, or if no such network has been assigned an NBD-related purpose in its purpose field. To access the given VDI, any of the vdi_nbd_server_info objects can be used to make a connection to a server, and then the VDI will be available by requesting the exportname.
        ///
        /// Since `inverness`.
        ///
        /// # Errors
        ///
        /// - `VDI_INCOMPATIBLE_TYPE`: This operation cannot be performed because the specified VDI is of an incompatible type (eg: an HA statefile cannot be attached to a guest)
        get_nbd_info => "get_nbd_info": Vec<VdiNbdServerInfoRecord>,
    }
}

setters! {
    Vdi, VdiRef {
        /// Set the other_config field of the given VDI.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the xenstore_data field of the given VDI.
        ///
        /// Since `miami`.
        set_xenstore_data => "set_xenstore_data": &HashMap<String, String>,
        /// Set the sm_config field of the given VDI.
        ///
        /// Since `miami`.
        set_sm_config => "set_sm_config": &HashMap<String, String>,
        /// Set the tags field of the given VDI.
        ///
        /// Since `orlando`.
        set_tags => "set_tags": &[String],
        /// Sets the VDI's sharable field.
        ///
        /// Since `george`.
        set_sharable => "set_sharable": bool,
        /// Sets the VDI's read_only field.
        set_read_only => "set_read_only": bool,
    }
}

map_mutators! {
    Vdi, VdiRef {
        /// Add the given key-value pair to the other_config field of the given VDI.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
        /// Add the given key-value pair to the sm_config field of the given VDI.
        add_to_sm_config, remove_from_sm_config => "sm_config": &str => &str,
        /// Add the given key-value pair to the xenstore_data field of the given VDI.
        add_to_xenstore_data, remove_from_xenstore_data => "xenstore_data": &str => &str,
    }
}

impl ClassApi<'_, Vdi> {
    /// Get a record containing the current state of the given VDI.
    pub async fn get_record(&self, vdi: &VdiRef) -> Result<VdiRecord> {
        self.call("get_record").arg("self", vdi).invoke().await
    }

    /// Get a reference to the VDI instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VdiRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the VDI instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<VdiRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the VDIs known to the system.
    pub async fn get_all(&self) -> Result<Vec<VdiRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VDI references to VDI records for all VDIs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VdiRef, VdiRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new VDI instance, and return its handle.
    pub async fn create(&self, args: &VdiCreateArgs) -> Result<VdiRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &VdiCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified VDI instance.
    pub async fn destroy(&self, vdi: &VdiRef) -> Result<()> {
        self.call("destroy").arg("self", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", vdi).invoke_async().await
    }

    /// Add the given value to the tags field of the given VDI.  If the value is already in that Set, then do nothing.
    ///
    /// Since `orlando`.
    pub async fn add_tags(&self, vdi: &VdiRef, value: &str) -> Result<()> {
        self.call("add_tags").arg("self", vdi).arg("value", value).invoke().await
    }

    /// Remove the given value from the tags field of the given VDI.  If the value is not in that Set, then do nothing.
    ///
    /// Since `orlando`.
    pub async fn remove_tags(&self, vdi: &VdiRef, value: &str) -> Result<()> {
        self.call("remove_tags").arg("self", vdi).arg("value", value).invoke().await
    }

    /// Take a read-only snapshot of the VDI, returning a reference to the snapshot. If any driver_params are specified then these are passed through to the storage-specific substrate driver that takes the snapshot. NB the snapshot lives in the same Storage Repository as its parent.
    ///
    /// Since `miami`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn snapshot(
        &self,
        vdi: &VdiRef,
        driver_params: &HashMap<String, String>,
    ) -> Result<VdiRef> {
        self.call("snapshot")
            .arg("vdi", vdi)
            .arg("driver_params", driver_params)
            .select(&SNAPSHOT_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::snapshot`].
    pub async fn async_snapshot(
        &self,
        vdi: &VdiRef,
        driver_params: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("snapshot")
            .arg("vdi", vdi)
            .arg("driver_params", driver_params)
            .select(&SNAPSHOT_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Take an exact copy of the VDI and return a reference to the new disk. If any driver_params are specified then these are passed through to the storage-specific substrate driver that implements the clone operation. NB the clone lives in the same Storage Repository as its parent.
    ///
    /// Since `miami`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn clone(
        &self,
        vdi: &VdiRef,
        driver_params: &HashMap<String, String>,
    ) -> Result<VdiRef> {
        self.call("clone")
            .arg("vdi", vdi)
            .arg("driver_params", driver_params)
            .select(&CLONE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::clone`].
    pub async fn async_clone(
        &self,
        vdi: &VdiRef,
        driver_params: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("clone")
            .arg("vdi", vdi)
            .arg("driver_params", driver_params)
            .select(&CLONE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Resize the VDI.
    pub async fn resize(&self, vdi: &VdiRef, size: i64) -> Result<()> {
        self.call("resize").arg("vdi", vdi).arg("size", &size).invoke().await
    }

    /// Asynchronous form of [`Self::resize`].
    pub async fn async_resize(&self, vdi: &VdiRef, size: i64) -> Result<TaskRef> {
        self.call("resize").arg("vdi", vdi).arg("size", &size).invoke_async().await
    }

    /// Resize the VDI which may or may not be attached to running guests.
    pub async fn resize_online(&self, vdi: &VdiRef, size: i64) -> Result<()> {
        self.call("resize_online").arg("vdi", vdi).arg("size", &size).invoke().await
    }

    /// Asynchronous form of [`Self::resize_online`].
    pub async fn async_resize_online(&self, vdi: &VdiRef, size: i64) -> Result<TaskRef> {
        self.call("resize_online").arg("vdi", vdi).arg("size", &size).invoke_async().await
    }

    /// Create a new VDI record in the database only.
    ///
    /// Since `tampa`.
    ///
    /// # Errors
    ///
    /// - `SR_OPERATION_NOT_SUPPORTED`: The SR backend does not support the operation (check the SR's allowed operations)
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn introduce(
        &self,
        uuid: &str,
        name_label: &str,
        name_description: &str,
        sr: &SrRef,
        type_: VdiType,
        sharable: bool,
        read_only: bool,
        other_config: &HashMap<String, String>,
        location: &str,
        xenstore_data: &HashMap<String, String>,
        sm_config: &HashMap<String, String>,
        managed: bool,
        virtual_size: i64,
        physical_utilisation: i64,
        metadata_of_pool: &PoolRef,
        is_a_snapshot: bool,
        snapshot_time: DateTime<Utc>,
        snapshot_of: &VdiRef,
    ) -> Result<VdiRef> {
        self.call("introduce")
            .arg("uuid", uuid)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("SR", sr)
            .arg("type", &type_)
            .arg("sharable", &sharable)
            .arg("read_only", &read_only)
            .arg("other_config", other_config)
            .arg("location", location)
            .arg("xenstore_data", xenstore_data)
            .arg("sm_config", sm_config)
            .arg("managed", &managed)
            .arg("virtual_size", &virtual_size)
            .arg("physical_utilisation", &physical_utilisation)
            .arg("metadata_of_pool", metadata_of_pool)
            .arg("is_a_snapshot", &is_a_snapshot)
            .arg("snapshot_time", &snapshot_time)
            .arg("snapshot_of", snapshot_of)
            .select(&INTRODUCE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::introduce`].
    pub async fn async_introduce(
        &self,
        uuid: &str,
        name_label: &str,
        name_description: &str,
        sr: &SrRef,
        type_: VdiType,
        sharable: bool,
        read_only: bool,
        other_config: &HashMap<String, String>,
        location: &str,
        xenstore_data: &HashMap<String, String>,
        sm_config: &HashMap<String, String>,
        managed: bool,
        virtual_size: i64,
        physical_utilisation: i64,
        metadata_of_pool: &PoolRef,
        is_a_snapshot: bool,
        snapshot_time: DateTime<Utc>,
        snapshot_of: &VdiRef,
    ) -> Result<TaskRef> {
        self.call("introduce")
            .arg("uuid", uuid)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("SR", sr)
            .arg("type", &type_)
            .arg("sharable", &sharable)
            .arg("read_only", &read_only)
            .arg("other_config", other_config)
            .arg("location", location)
            .arg("xenstore_data", xenstore_data)
            .arg("sm_config", sm_config)
            .arg("managed", &managed)
            .arg("virtual_size", &virtual_size)
            .arg("physical_utilisation", &physical_utilisation)
            .arg("metadata_of_pool", metadata_of_pool)
            .arg("is_a_snapshot", &is_a_snapshot)
            .arg("snapshot_time", &snapshot_time)
            .arg("snapshot_of", snapshot_of)
            .select(&INTRODUCE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Ask the storage backend to refresh the fields in the VDI object.
    ///
    /// Since `symc`.
    ///
    /// # Errors
    ///
    /// - `SR_OPERATION_NOT_SUPPORTED`: The SR backend does not support the operation (check the SR's allowed operations)
    pub async fn update(&self, vdi: &VdiRef) -> Result<()> {
        self.call("update").arg("vdi", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::update`].
    pub async fn async_update(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("update").arg("vdi", vdi).invoke_async().await
    }

    /// Copy either a full VDI or the block differences between two VDIs into either a fresh VDI or an existing VDI.
    ///
    /// Since `clearwater-felton`.
    ///
    /// # Errors
    ///
    /// - `VDI_READONLY`: The operation required write access but this VDI is read-only.
    /// - `VDI_TOO_SMALL`: The VDI is too small. Please resize it to at least the minimum size.
    /// - `VDI_NOT_SPARSE`: The VDI is not stored using a sparse format. It is not possible to query and manipulate only the changed blocks (or 'block differences' or 'disk deltas') between two VDIs. Please select a VDI which uses a sparse-aware technology such as VHD.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn copy(
        &self,
        vdi: &VdiRef,
        sr: &SrRef,
        base_vdi: &VdiRef,
        into_vdi: &VdiRef,
    ) -> Result<VdiRef> {
        self.call("copy")
            .arg("vdi", vdi)
            .arg("sr", sr)
            .arg("base_vdi", base_vdi)
            .arg("into_vdi", into_vdi)
            .select(&COPY_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::copy`].
    pub async fn async_copy(
        &self,
        vdi: &VdiRef,
        sr: &SrRef,
        base_vdi: &VdiRef,
        into_vdi: &VdiRef,
    ) -> Result<TaskRef> {
        self.call("copy")
            .arg("vdi", vdi)
            .arg("sr", sr)
            .arg("base_vdi", base_vdi)
            .arg("into_vdi", into_vdi)
            .select(&COPY_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Removes a VDI record from the database.
    pub async fn forget(&self, vdi: &VdiRef) -> Result<()> {
        self.call("forget").arg("vdi", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::forget`].
    pub async fn async_forget(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("forget").arg("vdi", vdi).invoke_async().await
    }

    /// Set the name label of the VDI. This can only happen when then its SR is currently attached.
    pub async fn set_name_label(&self, vdi: &VdiRef, value: &str) -> Result<()> {
        self.call("set_name_label").arg("self", vdi).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_name_label`].
    pub async fn async_set_name_label(&self, vdi: &VdiRef, value: &str) -> Result<TaskRef> {
        self.call("set_name_label").arg("self", vdi).arg("value", value).invoke_async().await
    }

    /// Set the name description of the VDI. This can only happen when its SR is currently attached.
    pub async fn set_name_description(&self, vdi: &VdiRef, value: &str) -> Result<()> {
        self.call("set_name_description").arg("self", vdi).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_name_description`].
    pub async fn async_set_name_description(&self, vdi: &VdiRef, value: &str) -> Result<TaskRef> {
        self.call("set_name_description").arg("self", vdi).arg("value", value).invoke_async().await
    }

    /// Set the value of the on_boot parameter. This value can only be changed when the VDI is not attached to a running VM.
    ///
    /// Since `cowley`.
    pub async fn set_on_boot(&self, vdi: &VdiRef, value: OnBoot) -> Result<()> {
        self.call("set_on_boot").arg("self", vdi).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_on_boot`].
    pub async fn async_set_on_boot(&self, vdi: &VdiRef, value: OnBoot) -> Result<TaskRef> {
        self.call("set_on_boot").arg("self", vdi).arg("value", &value).invoke_async().await
    }

    /// Set the value of the allow_caching parameter. This value can only be changed when the VDI is not attached to a running VM. The caching behaviour is only affected by this flag for VHD-based VDIs that have one parent and no child VHDs. Moreover, caching only takes place when the host running the VM containing this VDI has a nominated SR for local caching.
    ///
    /// Since `cowley`.
    pub async fn set_allow_caching(&self, vdi: &VdiRef, value: bool) -> Result<()> {
        self.call("set_allow_caching").arg("self", vdi).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_allow_caching`].
    pub async fn async_set_allow_caching(&self, vdi: &VdiRef, value: bool) -> Result<TaskRef> {
        self.call("set_allow_caching").arg("self", vdi).arg("value", &value).invoke_async().await
    }

    /// Load the metadata found on the supplied VDI and return a session reference which can be used in API calls to query its contents.
    ///
    /// Since `boston`.
    pub async fn open_database(&self, vdi: &VdiRef) -> Result<SessionRef> {
        self.call("open_database").arg("self", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::open_database`].
    pub async fn async_open_database(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("open_database").arg("self", vdi).invoke_async().await
    }

    /// Check the VDI cache for the pool UUID of the database on this VDI.
    ///
    /// Since `boston`.
    pub async fn read_database_pool_uuid(&self, vdi: &VdiRef) -> Result<String> {
        self.call("read_database_pool_uuid").arg("self", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::read_database_pool_uuid`].
    pub async fn async_read_database_pool_uuid(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("read_database_pool_uuid").arg("self", vdi).invoke_async().await
    }

    /// Migrate a VDI, which may be attached to a running guest, to a different SR. The destination SR must be visible to the guest.
    ///
    /// Since `tampa`.
    pub async fn pool_migrate(
        &self,
        vdi: &VdiRef,
        sr: &SrRef,
        options: &HashMap<String, String>,
    ) -> Result<VdiRef> {
        self.call("pool_migrate")
            .arg("vdi", vdi)
            .arg("sr", sr)
            .arg("options", options)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::pool_migrate`].
    pub async fn async_pool_migrate(
        &self,
        vdi: &VdiRef,
        sr: &SrRef,
        options: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("pool_migrate")
            .arg("vdi", vdi)
            .arg("sr", sr)
            .arg("options", options)
            .invoke_async()
            .await
    }

    /// Enable changed block tracking for the VDI. This call is idempotent - enabling CBT for a VDI for which CBT is already enabled results in a no-op, and no error will be thrown.
    ///
    /// Since `inverness`.
    ///
    /// # Errors
    ///
    /// - `SR_OPERATION_NOT_SUPPORTED`: The SR backend does not support the operation (check the SR's allowed operations)
    /// - `VDI_MISSING`: This operation cannot be performed because the specified VDI could not be found on the storage substrate.
    /// - `SR_NOT_ATTACHED`: The SR is not attached.
    /// - `SR_HAS_NO_PBDS`: The SR has no attached PBDs.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VDI_INCOMPATIBLE_TYPE`: This operation cannot be performed because the specified VDI is of an incompatible type (eg: an HA statefile cannot be attached to a guest)
    /// - `VDI_ON_BOOT_MODE_INCOMPATIBLE_WITH_OPERATION`: This operation is not permitted on VDIs in the 'on-boot=reset' mode, or on VMs having such VDIs.
    pub async fn enable_cbt(&self, vdi: &VdiRef) -> Result<()> {
        self.call("enable_cbt").arg("self", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::enable_cbt`].
    pub async fn async_enable_cbt(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("enable_cbt").arg("self", vdi).invoke_async().await
    }

    /// Disable changed block tracking for the VDI. This call is only allowed on VDIs that support enabling CBT. It is an idempotent operation - disabling CBT for a VDI for which CBT is not enabled results in a no-op, and no error will be thrown.
    ///
    /// Since `inverness`.
    ///
    /// # Errors
    ///
    /// - `SR_OPERATION_NOT_SUPPORTED`: The SR backend does not support the operation (check the SR's allowed operations)
    /// - `VDI_MISSING`: This operation cannot be performed because the specified VDI could not be found on the storage substrate.
    /// - `SR_NOT_ATTACHED`: The SR is not attached.
    /// - `SR_HAS_NO_PBDS`: The SR has no attached PBDs.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VDI_INCOMPATIBLE_TYPE`: This operation cannot be performed because the specified VDI is of an incompatible type (eg: an HA statefile cannot be attached to a guest)
    /// - `VDI_ON_BOOT_MODE_INCOMPATIBLE_WITH_OPERATION`: This operation is not permitted on VDIs in the 'on-boot=reset' mode, or on VMs having such VDIs.
    pub async fn disable_cbt(&self, vdi: &VdiRef) -> Result<()> {
        self.call("disable_cbt").arg("self", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::disable_cbt`].
    pub async fn async_disable_cbt(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("disable_cbt").arg("self", vdi).invoke_async().await
    }

    /// Delete the data of the snapshot VDI, but keep its changed block tracking metadata. When successful, this call changes the type of the VDI to cbt_metadata. This operation is idempotent: calling it on a VDI of type cbt_metadata results in a no-op, and no error will be thrown.
    ///
    /// Since `inverness`.
    ///
    /// # Errors
    ///
    /// - `SR_OPERATION_NOT_SUPPORTED`: The SR backend does not support the operation (check the SR's allowed operations)
    /// - `VDI_MISSING`: This operation cannot be performed because the specified VDI could not be found on the storage substrate.
    /// - `SR_NOT_ATTACHED`: The SR is not attached.
    /// - `SR_HAS_NO_PBDS`: The SR has no attached PBDs.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VDI_INCOMPATIBLE_TYPE`: This operation cannot be performed because the specified VDI is of an incompatible type (eg: an HA statefile cannot be attached to a guest)
    /// - `VDI_NO_CBT_METADATA`: The requested operation is not allowed because the specified VDI does not have changed block tracking metadata.
    /// - `VDI_IN_USE`: This operation cannot be performed because this VDI is in use by some other operation.
    /// - `VDI_IS_A_PHYSICAL_DEVICE`: The operation cannot be performed on physical device.
    pub async fn data_destroy(&self, vdi: &VdiRef) -> Result<()> {
        self.call("data_destroy").arg("self", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::data_destroy`].
    pub async fn async_data_destroy(&self, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("data_destroy").arg("self", vdi).invoke_async().await
    }

    /// Compare two VDIs in 64k block increments and report which blocks differ. This operation is not allowed when vdi_to is attached to a VM.
    ///
    /// Since `inverness`.
    ///
    /// # Errors
    ///
    /// - `SR_OPERATION_NOT_SUPPORTED`: The SR backend does not support the operation (check the SR's allowed operations)
    /// - `VDI_MISSING`: This operation cannot be performed because the specified VDI could not be found on the storage substrate.
    /// - `SR_NOT_ATTACHED`: The SR is not attached.
    /// - `SR_HAS_NO_PBDS`: The SR has no attached PBDs.
    /// - `VDI_IN_USE`: This operation cannot be performed because this VDI is in use by some other operation.
    pub async fn list_changed_blocks(&self, vdi_from: &VdiRef, vdi_to: &VdiRef) -> Result<String> {
        self.call("list_changed_blocks")
            .arg("vdi_from", vdi_from)
            .arg("vdi_to", vdi_to)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::list_changed_blocks`].
    pub async fn async_list_changed_blocks(
        &self,
        vdi_from: &VdiRef,
        vdi_to: &VdiRef,
    ) -> Result<TaskRef> {
        self.call("list_changed_blocks")
            .arg("vdi_from", vdi_from)
            .arg("vdi_to", vdi_to)
            .invoke_async()
            .await
    }
}
