//! `VUSB`: Describes the vusb device.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::VusbOperations;
use crate::refs::{TaskRef, UsbGroupRef, VmRef, VusbRef};
use crate::Result;

/// Marker for the `VUSB` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vusb;

impl XenClass for Vusb {
    const NAME: &'static str = "VUSB";
    type Ref = VusbRef;
    type Record = VusbRecord;
}

xen_record! {
    /// Describes the vusb device.
    VusbRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<VusbOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, VusbOperations> => "current_operations",
        /// VM that owns the VUSB.
        vm: VmRef => "VM",
        /// USB group used by the VUSB.
        usb_group: UsbGroupRef => "USB_group",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Is the device currently attached.
        currently_attached: bool => "currently_attached",
    }
}

getters! {
    Vusb, VusbRef {
        /// Get the uuid field of the given VUSB.
        ///
        /// Since `inverness`.
        get_uuid => "get_uuid": String,
        /// Get the allowed_operations field of the given VUSB.
        ///
        /// Since `inverness`.
        get_allowed_operations => "get_allowed_operations": Vec<VusbOperations>,
        /// Get the current_operations field of the given VUSB.
        ///
        /// Since `inverness`.
        get_current_operations => "get_current_operations": HashMap<String, VusbOperations>,
        /// Get the VM field of the given VUSB.
        ///
        /// Since `inverness`.
        get_vm => "get_VM": VmRef,
        /// Get the USB_group field of the given VUSB.
        ///
        /// Since `inverness`.
        get_usb_group => "get_USB_group": UsbGroupRef,
        /// Get the other_config field of the given VUSB.
        ///
        /// Since `inverness`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the currently_attached field of the given VUSB.
        ///
        /// Since `inverness`.
        get_currently_attached => "get_currently_attached": bool,
    }
}

setters! {
    Vusb, VusbRef {
        /// Set the other_config field of the given VUSB.
        ///
        /// Since `inverness`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Vusb, VusbRef {
        /// Add the given key-value pair to the other_config field of the given VUSB.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Vusb> {
    /// Get a record containing the current state of the given VUSB.
    ///
    /// Since `inverness`.
    pub async fn get_record(&self, vusb: &VusbRef) -> Result<VusbRecord> {
        self.call("get_record").arg("self", vusb).invoke().await
    }

    /// Get a reference to the VUSB instance with the specified UUID.
    ///
    /// Since `inverness`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VusbRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VUSBs known to the system.
    ///
    /// Since `inverness`.
    pub async fn get_all(&self) -> Result<Vec<VusbRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VUSB references to VUSB records for all VUSBs known to the system.
    ///
    /// Since `inverness`.
    pub async fn get_all_records(&self) -> Result<HashMap<VusbRef, VusbRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new VUSB record in the database only.
    ///
    /// Since `inverness`.
    pub async fn create(
        &self,
        vm: &VmRef,
        usb_group: &UsbGroupRef,
        other_config: &HashMap<String, String>,
    ) -> Result<VusbRef> {
        self.call("create")
            .arg("VM", vm)
            .arg("USB_group", usb_group)
            .arg("other_config", other_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        vm: &VmRef,
        usb_group: &UsbGroupRef,
        other_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("VM", vm)
            .arg("USB_group", usb_group)
            .arg("other_config", other_config)
            .invoke_async()
            .await
    }

    /// Removes a VUSB record from the database.
    ///
    /// Since `inverness`.
    pub async fn destroy(&self, vusb: &VusbRef) -> Result<()> {
        self.call("destroy").arg("self", vusb).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, vusb: &VusbRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", vusb).invoke_async().await
    }

    /// Unplug the vusb device from the vm.
    ///
    /// Since `inverness`.
    pub async fn unplug(&self, vusb: &VusbRef) -> Result<()> {
        self.call("unplug").arg("self", vusb).invoke().await
    }

    /// Asynchronous form of [`Self::unplug`].
    pub async fn async_unplug(&self, vusb: &VusbRef) -> Result<TaskRef> {
        self.call("unplug").arg("self", vusb).invoke_async().await
    }
}
