//! `host_metrics`: The metrics associated with a host.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::HostMetricsRef;
use crate::Result;

/// Marker for the `host_metrics` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostMetrics;

impl XenClass for HostMetrics {
    const NAME: &'static str = "host_metrics";
    type Ref = HostMetricsRef;
    type Record = HostMetricsRecord;
}

xen_record! {
    /// The metrics associated with a host.
    HostMetricsRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Total host memory (bytes)
        memory_total: i64 => "memory_total",
        /// Free host memory (bytes)
        memory_free: i64 => "memory_free",
        /// Pool master thinks this host is live.
        live: bool => "live",
        /// Time at which this information was last updated.
        last_updated: DateTime<Utc> => "last_updated",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

getters! {
    HostMetrics, HostMetricsRef {
        /// Get the uuid field of the given host_metrics.
        get_uuid => "get_uuid": String,
        /// Get the memory/total field of the given host_metrics.
        get_memory_total => "get_memory_total": i64,
        /// Get the memory/free field of the given host_metrics.
        get_memory_free => "get_memory_free": i64,
        /// Get the live field of the given host_metrics.
        get_live => "get_live": bool,
        /// Get the last_updated field of the given host_metrics.
        get_last_updated => "get_last_updated": DateTime<Utc>,
        /// Get the other_config field of the given host_metrics.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    HostMetrics, HostMetricsRef {
        /// Set the other_config field of the given host_metrics.
        ///
        /// Since `orlando`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    HostMetrics, HostMetricsRef {
        /// Add the given key-value pair to the other_config field of the given host_metrics.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, HostMetrics> {
    /// Get a record containing the current state of the given host_metrics.
    pub async fn get_record(&self, host_metrics: &HostMetricsRef) -> Result<HostMetricsRecord> {
        self.call("get_record").arg("self", host_metrics).invoke().await
    }

    /// Get a reference to the host_metrics instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<HostMetricsRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the host_metrics instances known to the system.
    pub async fn get_all(&self) -> Result<Vec<HostMetricsRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of host_metrics references to host_metrics records for all host_metrics instances known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<HostMetricsRef, HostMetricsRecord>> {
        self.call("get_all_records").invoke().await
    }
}
