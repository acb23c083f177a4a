//! `VIF_metrics`: The metrics associated with a virtual network device.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::VifMetricsRef;
use crate::Result;

/// Marker for the `VIF_metrics` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VifMetrics;

impl XenClass for VifMetrics {
    const NAME: &'static str = "VIF_metrics";
    type Ref = VifMetricsRef;
    type Record = VifMetricsRecord;
}

xen_record! {
    /// The metrics associated with a virtual network device.
    VifMetricsRecord {
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
    VifMetrics, VifMetricsRef {
        /// Get the uuid field of the given VIF_metrics.
        get_uuid => "get_uuid": String,
        /// Get the io/read_kbs field of the given VIF_metrics.
        get_io_read_kbs => "get_io_read_kbs": f64,
        /// Get the io/write_kbs field of the given VIF_metrics.
        get_io_write_kbs => "get_io_write_kbs": f64,
        /// Get the last_updated field of the given VIF_metrics.
        get_last_updated => "get_last_updated": DateTime<Utc>,
        /// Get the other_config field of the given VIF_metrics.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    VifMetrics, VifMetricsRef {
        /// Set the other_config field of the given VIF_metrics.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    VifMetrics, VifMetricsRef {
        /// Add the given key-value pair to the other_config field of the given VIF_metrics.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, VifMetrics> {
    /// Get a record containing the current state of the given VIF_metrics.
    pub async fn get_record(&self, vif_metrics: &VifMetricsRef) -> Result<VifMetricsRecord> {
        self.call("get_record").arg("self", vif_metrics).invoke().await
    }

    /// Get a reference to the VIF_metrics instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VifMetricsRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VIF_metrics instances known to the system.
    pub async fn get_all(&self) -> Result<Vec<VifMetricsRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VIF_metrics references to VIF_metrics records for all VIF_metrics instances known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VifMetricsRef, VifMetricsRecord>> {
        self.call("get_all_records").invoke().await
    }
}
