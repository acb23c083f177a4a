//! `VBD_metrics`: The metrics associated with a virtual block device.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::VbdMetricsRef;
use crate::Result;

/// Marker for the `VBD_metrics` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VbdMetrics;

impl XenClass for VbdMetrics {
    const NAME: &'static str = "VBD_metrics";
    type Ref = VbdMetricsRef;
    type Record = VbdMetricsRecord;
}

xen_record! {
    /// The metrics associated with a virtual block device.
    VbdMetricsRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Read bandwidth (KiB/s)
        io_read_kbs: f64 => "io_read_kbs",
        /// Write bandwidth (KiB/s)
        io_write_kbs: f64 => "io_write_kbs",
        /// Time at which this information was last updated.
        last_updated: DateTime<Utc> => "last_updated",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

getters! {
    VbdMetrics, VbdMetricsRef {
        /// Get the uuid field of the given VBD_metrics.
        get_uuid => "get_uuid": String,
        /// Get the io/read_kbs field of the given VBD_metrics.
        get_io_read_kbs => "get_io_read_kbs": f64,
        /// Get the io/write_kbs field of the given VBD_metrics.
        get_io_write_kbs => "get_io_write_kbs": f64,
        /// Get the last_updated field of the given VBD_metrics.
        get_last_updated => "get_last_updated": DateTime<Utc>,
        /// Get the other_config field of the given VBD_metrics.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    VbdMetrics, VbdMetricsRef {
        /// Set the other_config field of the given VBD_metrics.
        ///
        /// Since `orlando`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    VbdMetrics, VbdMetricsRef {
        /// Add the given key-value pair to the other_config field of the given VBD_metrics.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, VbdMetrics> {
    /// Get a record containing the current state of the given VBD_metrics.
    pub async fn get_record(&self, vbd_metrics: &VbdMetricsRef) -> Result<VbdMetricsRecord> {
        self.call("get_record").arg("self", vbd_metrics).invoke().await
    }

    /// Get a reference to the VBD_metrics instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VbdMetricsRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VBD_metrics instances known to the system.
    pub async fn get_all(&self) -> Result<Vec<VbdMetricsRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VBD_metrics references to VBD_metrics records for all VBD_metrics instances known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VbdMetricsRef, VbdMetricsRecord>> {
        self.call("get_all_records").invoke().await
    }
}
