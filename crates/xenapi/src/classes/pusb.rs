//! `PUSB`: A physical USB device.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{HostRef, PusbRef, TaskRef, UsbGroupRef};
use crate::Result;

/// Marker for the `PUSB` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pusb;

impl XenClass for Pusb {
    const NAME: &'static str = "PUSB";
    type Ref = PusbRef;
    type Record = PusbRecord;
}

xen_record! {
    /// A physical USB device.
    PusbRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// USB group the PUSB is contained in.
        usb_group: UsbGroupRef => "USB_group",
        /// Physical machine that owns the USB device.
        host: HostRef => "host",
        /// Port path of USB device.
        path: String => "path",
        /// Vendor id of the USB device.
        vendor_id: String => "vendor_id",
        /// Vendor description of the USB device.
        vendor_desc: String => "vendor_desc",
        /// Product id of the USB device.
        product_id: String => "product_id",
        /// Product description of the USB device.
        product_desc: String => "product_desc",
        /// Serial of the USB device.
        serial: String => "serial",
        /// USB device version.
        version: String => "version",
        /// USB device description.
        description: String => "description",
        /// Enabled for passthrough.
        passthrough_enabled: bool => "passthrough_enabled",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// USB device speed.
        speed: f64 => "speed",
    }
}

getters! {
    Pusb, PusbRef {
        /// Get the uuid field of the given PUSB.
        ///
        /// Since `inverness`.
        get_uuid => "get_uuid": String,
        /// Get the USB_group field of the given PUSB.
        ///
        /// Since `inverness`.
        get_usb_group => "get_USB_group": UsbGroupRef,
        /// Get the host field of the given PUSB.
        ///
        /// Since `inverness`.
        get_host => "get_host": HostRef,
        /// Get the path field of the given PUSB.
        ///
        /// Since `inverness`.
        get_path => "get_path": String,
        /// Get the vendor_id field of the given PUSB.
        ///
        /// Since `inverness`.
        get_vendor_id => "get_vendor_id": String,
        /// Get the vendor_desc field of the given PUSB.
        ///
        /// Since `inverness`.
        get_vendor_desc => "get_vendor_desc": String,
        /// Get the product_id field of the given PUSB.
        ///
        /// Since `inverness`.
        get_product_id => "get_product_id": String,
        /// Get the product_desc field of the given PUSB.
        ///
        /// Since `inverness`.
        get_product_desc => "get_product_desc": String,
        /// Get the serial field of the given PUSB.
        ///
        /// Since `inverness`.
        get_serial => "get_serial": String,
        /// Get the version field of the given PUSB.
        ///
        /// Since `inverness`.
        get_version => "get_version": String,
        /// Get the description field of the given PUSB.
        ///
        /// Since `inverness`.
        get_description => "get_description": String,
        /// Get the passthrough_enabled field of the given PUSB.
        ///
        /// Since `inverness`.
        get_passthrough_enabled => "get_passthrough_enabled": bool,
        /// Get the other_config field of the given PUSB.
        ///
        /// Since `inverness`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the speed field of the given PUSB.
        ///
        /// Since `inverness`.
        get_speed => "get_speed": f64,
    }
}

setters! {
    Pusb, PusbRef {
        /// Set the other_config field of the given PUSB.
        ///
        /// Since `inverness`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Pusb, PusbRef {
        /// Add the given key-value pair to the other_config field of the given PUSB.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Pusb> {
    /// Get a record containing the current state of the given PUSB.
    ///
    /// Since `inverness`.
    pub async fn get_record(&self, pusb: &PusbRef) -> Result<PusbRecord> {
        self.call("get_record").arg("self", pusb).invoke().await
    }

    /// Get a reference to the PUSB instance with the specified UUID.
    ///
    /// Since `inverness`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PusbRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the PUSBs known to the system.
    ///
    /// Since `inverness`.
    pub async fn get_all(&self) -> Result<Vec<PusbRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of PUSB references to PUSB records for all PUSBs known to the system.
    ///
    /// Since `inverness`.
    pub async fn get_all_records(&self) -> Result<HashMap<PusbRef, PusbRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Call `PUSB.scan`.
    ///
    /// Since `inverness`.
    pub async fn scan(&self, host: &HostRef) -> Result<()> {
        self.call("scan").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::scan`].
    pub async fn async_scan(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("scan").arg("host", host).invoke_async().await
    }

    /// Call `PUSB.set_passthrough_enabled`.
    ///
    /// Since `inverness`.
    pub async fn set_passthrough_enabled(&self, pusb: &PusbRef, value: bool) -> Result<()> {
        self.call("set_passthrough_enabled").arg("self", pusb).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_passthrough_enabled`].
    pub async fn async_set_passthrough_enabled(
        &self,
        pusb: &PusbRef,
        value: bool,
    ) -> Result<TaskRef> {
        self.call("set_passthrough_enabled")
            .arg("self", pusb)
            .arg("value", &value)
            .invoke_async()
            .await
    }
}
