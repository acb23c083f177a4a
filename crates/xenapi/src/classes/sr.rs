//! `SR`: A storage repository.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::StorageOperations;
use crate::records::{DataSourceRecord, ProbeResultRecord};
use crate::refs::{BlobRef, DrTaskRef, HostRef, PbdRef, SrRef, TaskRef, VdiRef};
use crate::Result;

/// Marker for the `SR` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sr;

impl XenClass for Sr {
    const NAME: &'static str = "SR";
    type Ref = SrRef;
    type Record = SrRecord;
}

xen_record! {
    /// A storage repository.
    SrRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<StorageOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, StorageOperations> => "current_operations",
        /// All virtual disks known to this storage repository.
        vdis: Vec<VdiRef> => "VDIs",
        /// Describes how particular hosts can see this storage repository.
        pbds: Vec<PbdRef> => "PBDs",
        /// Sum of virtual_sizes of all VDIs in this storage repository (in bytes)
        virtual_allocation: i64 => "virtual_allocation",
        /// Physical space currently utilised on this storage repository (in bytes). Note that for sparse disk formats, physical_utilisation may be less than virtual_allocation.
        physical_utilisation: i64 => "physical_utilisation",
        /// Total physical size of the repository (in bytes)
        physical_size: i64 => "physical_size",
        /// Type of the storage repository.
        type_: String => "type",
        /// The type of the SR's content, if required (e.g. ISOs)
        content_type: String => "content_type",
        /// True if this SR is (capable of being) shared between multiple hosts.
        shared: bool => "shared",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// User-specified tags for categorization purposes.
        tags: Vec<String> => "tags",
        /// SM dependent data.
        sm_config: HashMap<String, String> => "sm_config",
        /// Binary blobs associated with this SR.
        blobs: HashMap<String, BlobRef> => "blobs",
        /// True if this SR is assigned to be the local cache for its host.
        local_cache_enabled: bool => "local_cache_enabled",
        /// The disaster recovery task which introduced this SR.
        introduced_by: DrTaskRef => "introduced_by",
        /// True if the SR is using aggregated local storage.
        clustered: bool => "clustered",
        /// True if this is the SR that contains the Tools ISO VDIs.
        is_tools_sr: bool => "is_tools_sr",
    }
}

getters! {
    Sr, SrRef {
        /// Get the uuid field of the given SR.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given SR.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given SR.
        get_name_description => "get_name_description": String,
        /// Get the allowed_operations field of the given SR.
        get_allowed_operations => "get_allowed_operations": Vec<StorageOperations>,
        /// Get the current_operations field of the given SR.
        get_current_operations => "get_current_operations": HashMap<String, StorageOperations>,
        /// Get the VDIs field of the given SR.
        get_vdis => "get_VDIs": Vec<VdiRef>,
        /// Get the PBDs field of the given SR.
        get_pbds => "get_PBDs": Vec<PbdRef>,
        /// Get the virtual_allocation field of the given SR.
        get_virtual_allocation => "get_virtual_allocation": i64,
        /// Get the physical_utilisation field of the given SR.
        get_physical_utilisation => "get_physical_utilisation": i64,
        /// Get the physical_size field of the given SR.
        get_physical_size => "get_physical_size": i64,
        /// Get the type field of the given SR.
        get_type => "get_type": String,
        /// Get the content_type field of the given SR.
        get_content_type => "get_content_type": String,
        /// Get the shared field of the given SR.
        get_shared => "get_shared": bool,
        /// Get the other_config field of the given SR.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the tags field of the given SR.
        get_tags => "get_tags": Vec<String>,
        /// Get the sm_config field of the given SR.
        get_sm_config => "get_sm_config": HashMap<String, String>,
        /// Get the blobs field of the given SR.
        get_blobs => "get_blobs": HashMap<String, BlobRef>,
        /// Get the local_cache_enabled field of the given SR.
        get_local_cache_enabled => "get_local_cache_enabled": bool,
        /// Get the introduced_by field of the given SR.
        get_introduced_by => "get_introduced_by": DrTaskRef,
        /// Get the clustered field of the given SR.
        get_clustered => "get_clustered": bool,
        /// Get the is_tools_sr field of the given SR.
        get_is_tools_sr => "get_is_tools_sr": bool,
    }
}

setters! {
    Sr, SrRef {
        /// Set the other_config field of the given SR.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the tags field of the given SR.
        set_tags => "set_tags": &[String],
        /// Set the sm_config field of the given SR.
        set_sm_config => "set_sm_config": &HashMap<String, String>,
        /// Sets the SR's physical_size field.
        set_physical_size => "set_physical_size": i64,
    }
}

map_mutators! {
    Sr, SrRef {
        /// Add the given key-value pair to the other_config field of the given SR.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
        /// Add the given key-value pair to the sm_config field of the given SR.
        add_to_sm_config, remove_from_sm_config => "sm_config": &str => &str,
    }
}

impl ClassApi<'_, Sr> {
    /// Get a record containing the current state of the given SR.
    pub async fn get_record(&self, sr: &SrRef) -> Result<SrRecord> {
        self.call("get_record").arg("self", sr).invoke().await
    }

    /// Get a reference to the SR instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<SrRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the SR instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<SrRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the SRs known to the system.
    pub async fn get_all(&self) -> Result<Vec<SrRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of SR references to SR records for all SRs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<SrRef, SrRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new Storage Repository and introduce it into the managed system, creating both SR record and PBD record to attach it to current host (with specified device_config parameters)
    ///
    /// # Errors
    ///
    /// - `SR_UNKNOWN_DRIVER`: The SR could not be connected because the driver was not recognised.
    pub async fn create(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        physical_size: i64,
        name_label: &str,
        name_description: &str,
        type_: &str,
        content_type: &str,
        shared: bool,
        sm_config: &HashMap<String, String>,
    ) -> Result<SrRef> {
        self.call("create")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("physical_size", &physical_size)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("type", type_)
            .arg("content_type", content_type)
            .arg("shared", &shared)
            .arg("sm_config", sm_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        physical_size: i64,
        name_label: &str,
        name_description: &str,
        type_: &str,
        content_type: &str,
        shared: bool,
        sm_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("physical_size", &physical_size)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("type", type_)
            .arg("content_type", content_type)
            .arg("shared", &shared)
            .arg("sm_config", sm_config)
            .invoke_async()
            .await
    }

    /// Destroy specified SR, removing SR-record from database and remove SR from disk. (In order to affect this operation the appropriate device_config is read from the specified SR's PBD on current host)
    ///
    /// # Errors
    ///
    /// - `SR_HAS_PBD`: The SR is still connected to a host via a PBD. It cannot be destroyed or forgotten.
    pub async fn destroy(&self, sr: &SrRef) -> Result<()> {
        self.call("destroy").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("destroy").arg("sr", sr).invoke_async().await
    }

    /// Add the given value to the tags field of the given SR.  If the value is already in that Set, then do nothing.
    pub async fn add_tags(&self, sr: &SrRef, value: &str) -> Result<()> {
        self.call("add_tags").arg("self", sr).arg("value", value).invoke().await
    }

    /// Remove the given value from the tags field of the given SR.  If the value is not in that Set, then do nothing.
    pub async fn remove_tags(&self, sr: &SrRef, value: &str) -> Result<()> {
        self.call("remove_tags").arg("self", sr).arg("value", value).invoke().await
    }

    /// Introduce a new Storage Repository into the managed system.
    pub async fn introduce(
        &self,
        uuid: &str,
        name_label: &str,
        name_description: &str,
        type_: &str,
        content_type: &str,
        shared: bool,
        sm_config: &HashMap<String, String>,
    ) -> Result<SrRef> {
        self.call("introduce")
            .arg("uuid", uuid)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("type", type_)
            .arg("content_type", content_type)
            .arg("shared", &shared)
            .arg("sm_config", sm_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::introduce`].
    pub async fn async_introduce(
        &self,
        uuid: &str,
        name_label: &str,
        name_description: &str,
        type_: &str,
        content_type: &str,
        shared: bool,
        sm_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("introduce")
            .arg("uuid", uuid)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("type", type_)
            .arg("content_type", content_type)
            .arg("shared", &shared)
            .arg("sm_config", sm_config)
            .invoke_async()
            .await
    }

    /// Create a new Storage Repository on disk. This call is deprecated: use SR.create instead.
    pub async fn make(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        physical_size: i64,
        name_label: &str,
        name_description: &str,
        type_: &str,
        content_type: &str,
        sm_config: &HashMap<String, String>,
    ) -> Result<String> {
        self.call("make")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("physical_size", &physical_size)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("type", type_)
            .arg("content_type", content_type)
            .arg("sm_config", sm_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::make`].
    pub async fn async_make(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        physical_size: i64,
        name_label: &str,
        name_description: &str,
        type_: &str,
        content_type: &str,
        sm_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("make")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("physical_size", &physical_size)
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("type", type_)
            .arg("content_type", content_type)
            .arg("sm_config", sm_config)
            .invoke_async()
            .await
    }

    /// Removing specified SR-record from database, without attempting to remove SR from disk.
    ///
    /// # Errors
    ///
    /// - `SR_HAS_PBD`: The SR is still connected to a host via a PBD. It cannot be destroyed or forgotten.
    pub async fn forget(&self, sr: &SrRef) -> Result<()> {
        self.call("forget").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::forget`].
    pub async fn async_forget(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("forget").arg("sr", sr).invoke_async().await
    }

    /// Refresh the fields on the SR object.
    pub async fn update(&self, sr: &SrRef) -> Result<()> {
        self.call("update").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::update`].
    pub async fn async_update(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("update").arg("sr", sr).invoke_async().await
    }

    /// Return a set of all the SR types supported by the system.
    pub async fn get_supported_types(&self) -> Result<Vec<String>> {
        self.call("get_supported_types").invoke().await
    }

    /// Refreshes the list of VDIs associated with an SR.
    pub async fn scan(&self, sr: &SrRef) -> Result<()> {
        self.call("scan").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::scan`].
    pub async fn async_scan(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("scan").arg("sr", sr).invoke_async().await
    }

    /// Perform a backend-specific scan, using the given device_config.  If the device_config is complete, then this will return a list of the SRs present of this type on the device, if any.  If the device_config is partial, then a backend-specific scan will be performed, returning results that will guide the user in improving the device_config.
    pub async fn probe(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        type_: &str,
        sm_config: &HashMap<String, String>,
    ) -> Result<String> {
        self.call("probe")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("type", type_)
            .arg("sm_config", sm_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::probe`].
    pub async fn async_probe(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        type_: &str,
        sm_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("probe")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("type", type_)
            .arg("sm_config", sm_config)
            .invoke_async()
            .await
    }

    /// Perform a backend-specific scan, using the given device_config.  If the device_config is complete, then this will return a list of the SRs present of this type on the device, if any.  If the device_config is partial, then a backend-specific scan will be performed, returning results that will guide the user in improving the device_config.
    pub async fn probe_ext(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        type_: &str,
        sm_config: &HashMap<String, String>,
    ) -> Result<Vec<ProbeResultRecord>> {
        self.call("probe_ext")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("type", type_)
            .arg("sm_config", sm_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::probe_ext`].
    pub async fn async_probe_ext(
        &self,
        host: &HostRef,
        device_config: &HashMap<String, String>,
        type_: &str,
        sm_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("probe_ext")
            .arg("host", host)
            .arg("device_config", device_config)
            .arg("type", type_)
            .arg("sm_config", sm_config)
            .invoke_async()
            .await
    }

    /// Sets the shared flag on the SR.
    pub async fn set_shared(&self, sr: &SrRef, value: bool) -> Result<()> {
        self.call("set_shared").arg("sr", sr).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_shared`].
    pub async fn async_set_shared(&self, sr: &SrRef, value: bool) -> Result<TaskRef> {
        self.call("set_shared").arg("sr", sr).arg("value", &value).invoke_async().await
    }

    /// Set the name label of the SR.
    pub async fn set_name_label(&self, sr: &SrRef, value: &str) -> Result<()> {
        self.call("set_name_label").arg("sr", sr).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_name_label`].
    pub async fn async_set_name_label(&self, sr: &SrRef, value: &str) -> Result<TaskRef> {
        self.call("set_name_label").arg("sr", sr).arg("value", value).invoke_async().await
    }

    /// Set the name description of the SR.
    pub async fn set_name_description(&self, sr: &SrRef, value: &str) -> Result<()> {
        self.call("set_name_description").arg("sr", sr).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_name_description`].
    pub async fn async_set_name_description(&self, sr: &SrRef, value: &str) -> Result<TaskRef> {
        self.call("set_name_description").arg("sr", sr).arg("value", value).invoke_async().await
    }

    /// Create a placeholder for a named binary blob of data that is associated with this SR.
    pub async fn create_new_blob(
        &self,
        sr: &SrRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<BlobRef> {
        self.call("create_new_blob")
            .arg("sr", sr)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_new_blob`].
    pub async fn async_create_new_blob(
        &self,
        sr: &SrRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<TaskRef> {
        self.call("create_new_blob")
            .arg("sr", sr)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke_async()
            .await
    }

    /// Returns successfully if the given SR can host an HA statefile. Otherwise returns an error to explain why not.
    pub async fn assert_can_host_ha_statefile(&self, sr: &SrRef) -> Result<()> {
        self.call("assert_can_host_ha_statefile").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::assert_can_host_ha_statefile`].
    pub async fn async_assert_can_host_ha_statefile(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("assert_can_host_ha_statefile").arg("sr", sr).invoke_async().await
    }

    /// Returns successfully if the given SR supports database replication. Otherwise returns an error to explain why not.
    pub async fn assert_supports_database_replication(&self, sr: &SrRef) -> Result<()> {
        self.call("assert_supports_database_replication").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::assert_supports_database_replication`].
    pub async fn async_assert_supports_database_replication(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("assert_supports_database_replication").arg("sr", sr).invoke_async().await
    }

    /// Call `SR.enable_database_replication`.
    pub async fn enable_database_replication(&self, sr: &SrRef) -> Result<()> {
        self.call("enable_database_replication").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::enable_database_replication`].
    pub async fn async_enable_database_replication(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("enable_database_replication").arg("sr", sr).invoke_async().await
    }

    /// Call `SR.disable_database_replication`.
    pub async fn disable_database_replication(&self, sr: &SrRef) -> Result<()> {
        self.call("disable_database_replication").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::disable_database_replication`].
    pub async fn async_disable_database_replication(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("disable_database_replication").arg("sr", sr).invoke_async().await
    }

    /// Call `SR.get_data_sources`.
    pub async fn get_data_sources(&self, sr: &SrRef) -> Result<Vec<DataSourceRecord>> {
        self.call("get_data_sources").arg("sr", sr).invoke().await
    }

    /// Start recording the specified data source.
    pub async fn record_data_source(&self, sr: &SrRef, data_source: &str) -> Result<()> {
        self.call("record_data_source").arg("sr", sr).arg("data_source", data_source).invoke().await
    }

    /// Query the latest value of the specified data source.
    pub async fn query_data_source(&self, sr: &SrRef, data_source: &str) -> Result<f64> {
        self.call("query_data_source").arg("sr", sr).arg("data_source", data_source).invoke().await
    }

    /// Forget the recorded statistics related to the specified data source.
    pub async fn forget_data_source_archives(&self, sr: &SrRef, data_source: &str) -> Result<()> {
        self.call("forget_data_source_archives")
            .arg("sr", sr)
            .arg("data_source", data_source)
            .invoke()
            .await
    }
}
