//! `SM`: A storage manager plugin.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::SmRef;
use crate::Result;

/// Marker for the `SM` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sm;

impl XenClass for Sm {
    const NAME: &'static str = "SM";
    type Ref = SmRef;
    type Record = SmRecord;
}

xen_record! {
    /// A storage manager plugin.
    SmRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// SR.type.
        type_: String => "type",
        /// Vendor who created this plugin.
        vendor: String => "vendor",
        /// Entity which owns the copyright of this plugin.
        copyright: String => "copyright",
        /// Version of the plugin.
        version: String => "version",
        /// Minimum SM API version required on the server.
        required_api_version: String => "required_api_version",
        /// Names and descriptions of device config keys.
        configuration: HashMap<String, String> => "configuration",
        /// Capabilities of the SM plugin.
        capabilities: Vec<String> => "capabilities",
        /// Capabilities of the SM plugin, with capability version numbers.
        features: HashMap<String, i64> => "features",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Filename of the storage driver.
        driver_filename: String => "driver_filename",
        /// The storage plugin requires that one of these cluster stacks is configured and running.
        required_cluster_stack: Vec<String> => "required_cluster_stack",
    }
}

getters! {
    Sm, SmRef {
        /// Get the uuid field of the given SM.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given SM.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given SM.
        get_name_description => "get_name_description": String,
        /// Get the type field of the given SM.
        get_type => "get_type": String,
        /// Get the vendor field of the given SM.
        get_vendor => "get_vendor": String,
        /// Get the copyright field of the given SM.
        get_copyright => "get_copyright": String,
        /// Get the version field of the given SM.
        get_version => "get_version": String,
        /// Get the required_api_version field of the given SM.
        get_required_api_version => "get_required_api_version": String,
        /// Get the configuration field of the given SM.
        get_configuration => "get_configuration": HashMap<String, String>,
        /// Get the capabilities field of the given SM.
        get_capabilities => "get_capabilities": Vec<String>,
        /// Get the features field of the given SM.
        get_features => "get_features": HashMap<String, i64>,
        /// Get the other_config field of the given SM.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the driver_filename field of the given SM.
        get_driver_filename => "get_driver_filename": String,
        /// Get the required_cluster_stack field of the given SM.
        get_required_cluster_stack => "get_required_cluster_stack": Vec<String>,
    }
}

setters! {
    Sm, SmRef {
        /// Set the other_config field of the given SM.
        ///
        /// Since `miami`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Sm, SmRef {
        /// Add the given key-value pair to the other_config field of the given SM.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Sm> {
    /// Get a record containing the current state of the given SM.
    pub async fn get_record(&self, sm: &SmRef) -> Result<SmRecord> {
        self.call("get_record").arg("self", sm).invoke().await
    }

    /// Get a reference to the SM instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<SmRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the SM instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<SmRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the SMs known to the system.
    pub async fn get_all(&self) -> Result<Vec<SmRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of SM references to SM records for all SMs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<SmRef, SmRecord>> {
        self.call("get_all_records").invoke().await
    }
}
