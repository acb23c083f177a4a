//! `PIF_metrics`: The metrics associated with a physical network interface.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::PifMetricsRef;
use crate::Result;

/// Marker for the `PIF_metrics` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PifMetrics;

impl XenClass for PifMetrics {
    const NAME: &'static str = "PIF_metrics";
    type Ref = PifMetricsRef;
    type Record = PifMetricsRecord;
}

xen_record! {
    /// The metrics associated with a physical network interface.
    PifMetricsRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Read bandwidth (KiB/s)
        io_read_kbs: f64 => "io_read_kbs",
        /// Write bandwidth (KiB/s)
        io_write_kbs: f64 => "io_write_kbs",
        /// Report if the PIF got a carrier or not.
        carrier: bool => "carrier",
        /// Report vendor ID.
        vendor_id: String => "vendor_id",
        /// Report vendor name.
        vendor_name: String => "vendor_name",
        /// Report device ID.
        device_id: String => "device_id",
        /// Report device name.
        device_name: String => "device_name",
        /// Speed of the link in Mbit/s (if available)
        speed: i64 => "speed",
        /// Full duplex capability of the link (if available)
        duplex: bool => "duplex",
        /// PCI bus path of the pif (if available)
        pci_bus_path: String => "pci_bus_path",
        /// Time at which this information was last updated.
        last_updated: DateTime<Utc> => "last_updated",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

getters! {
    PifMetrics, PifMetricsRef {
        /// Get the uuid field of the given PIF_metrics.
        get_uuid => "get_uuid": String,
        /// Get the io/read_kbs field of the given PIF_metrics.
        get_io_read_kbs => "get_io_read_kbs": f64,
        /// Get the io/write_kbs field of the given PIF_metrics.
        get_io_write_kbs => "get_io_write_kbs": f64,
        /// Get the carrier field of the given PIF_metrics.
        get_carrier => "get_carrier": bool,
        /// Get the vendor_id field of the given PIF_metrics.
        get_vendor_id => "get_vendor_id": String,
        /// Get the vendor_name field of the given PIF_metrics.
        get_vendor_name => "get_vendor_name": String,
        /// Get the device_id field of the given PIF_metrics.
        get_device_id => "get_device_id": String,
        /// Get the device_name field of the given PIF_metrics.
        get_device_name => "get_device_name": String,
        /// Get the speed field of the given PIF_metrics.
        get_speed => "get_speed": i64,
        /// Get the duplex field of the given PIF_metrics.
        get_duplex => "get_duplex": bool,
        /// Get the pci_bus_path field of the given PIF_metrics.
        get_pci_bus_path => "get_pci_bus_path": String,
        /// Get the last_updated field of the given PIF_metrics.
        get_last_updated => "get_last_updated": DateTime<Utc>,
        /// Get the other_config field of the given PIF_metrics.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    PifMetrics, PifMetricsRef {
        /// Set the other_config field of the given PIF_metrics.
        ///
        /// Since `orlando`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    PifMetrics, PifMetricsRef {
        /// Add the given key-value pair to the other_config field of the given PIF_metrics.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, PifMetrics> {
    /// Get a record containing the current state of the given PIF_metrics.
    pub async fn get_record(&self, pif_metrics: &PifMetricsRef) -> Result<PifMetricsRecord> {
        self.call("get_record").arg("self", pif_metrics).invoke().await
    }

    /// Get a reference to the PIF_metrics instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PifMetricsRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the PIF_metrics instances known to the system.
    pub async fn get_all(&self) -> Result<Vec<PifMetricsRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of PIF_metrics references to PIF_metrics records for all PIF_metrics instances known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<PifMetricsRef, PifMetricsRecord>> {
        self.call("get_all_records").invoke().await
    }
}
