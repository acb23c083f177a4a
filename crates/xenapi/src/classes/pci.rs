//! `PCI`: A PCI device.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{HostRef, PciRef};
use crate::Result;

/// Marker for the `PCI` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pci;

impl XenClass for Pci {
    const NAME: &'static str = "PCI";
    type Ref = PciRef;
    type Record = PciRecord;
}

xen_record! {
    /// A PCI device.
    PciRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// PCI class name.
        class_name: String => "class_name",
        /// Vendor name.
        vendor_name: String => "vendor_name",
        /// Device name.
        device_name: String => "device_name",
        /// Physical machine that owns the PCI device.
        host: HostRef => "host",
        /// PCI ID of the physical device.
        pci_id: String => "pci_id",
        /// List of dependent PCI devices.
        dependencies: Vec<PciRef> => "dependencies",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Subsystem vendor name.
        subsystem_vendor_name: String => "subsystem_vendor_name",
        /// Subsystem device name.
        subsystem_device_name: String => "subsystem_device_name",
        /// Driver name.
        driver_name: String => "driver_name",
    }
}

getters! {
    Pci, PciRef {
        /// Get the uuid field of the given PCI.
        ///
        /// Since `boston`.
        get_uuid => "get_uuid": String,
        /// Get the class_name field of the given PCI.
        ///
        /// Since `boston`.
        get_class_name => "get_class_name": String,
        /// Get the vendor_name field of the given PCI.
        ///
        /// Since `boston`.
        get_vendor_name => "get_vendor_name": String,
        /// Get the device_name field of the given PCI.
        ///
        /// Since `boston`.
        get_device_name => "get_device_name": String,
        /// Get the host field of the given PCI.
        ///
        /// Since `boston`.
        get_host => "get_host": HostRef,
        /// Get the pci_id field of the given PCI.
        ///
        /// Since `boston`.
        get_pci_id => "get_pci_id": String,
        /// Get the dependencies field of the given PCI.
        ///
        /// Since `boston`.
        get_dependencies => "get_dependencies": Vec<PciRef>,
        /// Get the other_config field of the given PCI.
        ///
        /// Since `boston`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the subsystem_vendor_name field of the given PCI.
        ///
        /// Since `boston`.
        get_subsystem_vendor_name => "get_subsystem_vendor_name": String,
        /// Get the subsystem_device_name field of the given PCI.
        ///
        /// Since `boston`.
        get_subsystem_device_name => "get_subsystem_device_name": String,
        /// Get the driver_name field of the given PCI.
        ///
        /// Since `boston`.
        get_driver_name => "get_driver_name": String,
    }
}

setters! {
    Pci, PciRef {
        /// Set the other_config field of the given PCI.
        ///
        /// Since `boston`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Pci, PciRef {
        /// Add the given key-value pair to the other_config field of the given PCI.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Pci> {
    /// Get a record containing the current state of the given PCI.
    ///
    /// Since `boston`.
    pub async fn get_record(&self, pci: &PciRef) -> Result<PciRecord> {
        self.call("get_record").arg("self", pci).invoke().await
    }

    /// Get a reference to the PCI instance with the specified UUID.
    ///
    /// Since `boston`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PciRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the PCIs known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all(&self) -> Result<Vec<PciRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of PCI references to PCI records for all PCIs known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all_records(&self) -> Result<HashMap<PciRef, PciRecord>> {
        self.call("get_all_records").invoke().await
    }
}
