//! `USB_group`: A group of compatible USBs across the resource pool.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{PusbRef, TaskRef, UsbGroupRef, VusbRef};
use crate::Result;

/// Marker for the `USB_group` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbGroup;

impl XenClass for UsbGroup {
    const NAME: &'static str = "USB_group";
    type Ref = UsbGroupRef;
    type Record = UsbGroupRecord;
}

xen_record! {
    /// A group of compatible USBs across the resource pool.
    UsbGroupRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// List of PUSBs in the group.
        pusbs: Vec<PusbRef> => "PUSBs",
        /// List of VUSBs using the group.
        vusbs: Vec<VusbRef> => "VUSBs",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

getters! {
    UsbGroup, UsbGroupRef {
        /// Get the uuid field of the given USB_group.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given USB_group.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given USB_group.
        get_name_description => "get_name_description": String,
        /// Get the PUSBs field of the given USB_group.
        get_pusbs => "get_PUSBs": Vec<PusbRef>,
        /// Get the VUSBs field of the given USB_group.
        get_vusbs => "get_VUSBs": Vec<VusbRef>,
        /// Get the other_config field of the given USB_group.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    UsbGroup, UsbGroupRef {
        /// Set the name/label field of the given USB_group.
        set_name_label => "set_name_label": &str,
        /// Set the name/description field of the given USB_group.
        set_name_description => "set_name_description": &str,
        /// Set the other_config field of the given USB_group.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    UsbGroup, UsbGroupRef {
        /// Add the given key-value pair to the other_config field of the given USB_group.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, UsbGroup> {
    /// Get a record containing the current state of the given USB_group.
    pub async fn get_record(&self, usb_group: &UsbGroupRef) -> Result<UsbGroupRecord> {
        self.call("get_record").arg("self", usb_group).invoke().await
    }

    /// Get a reference to the USB_group instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<UsbGroupRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the USB_group instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<UsbGroupRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the USB_groups known to the system.
    pub async fn get_all(&self) -> Result<Vec<UsbGroupRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of USB_group references to USB_group records for all USB_groups known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<UsbGroupRef, UsbGroupRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Call `USB_group.create`.
    pub async fn create(
        &self,
        name_label: &str,
        name_description: &str,
        other_config: &HashMap<String, String>,
    ) -> Result<UsbGroupRef> {
        self.call("create")
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("other_config", other_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        name_label: &str,
        name_description: &str,
        other_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("other_config", other_config)
            .invoke_async()
            .await
    }

    /// Call `USB_group.destroy`.
    pub async fn destroy(&self, usb_group: &UsbGroupRef) -> Result<()> {
        self.call("destroy").arg("self", usb_group).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, usb_group: &UsbGroupRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", usb_group).invoke_async().await
    }
}
