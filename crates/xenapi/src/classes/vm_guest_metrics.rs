//! `VM_guest_metrics`: The metrics reported by the guest (as opposed to inferred from outside)

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::TristateType;
use crate::refs::VmGuestMetricsRef;
use crate::Result;

/// Marker for the `VM_guest_metrics` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmGuestMetrics;

impl XenClass for VmGuestMetrics {
    const NAME: &'static str = "VM_guest_metrics";
    type Ref = VmGuestMetricsRef;
    type Record = VmGuestMetricsRecord;
}

xen_record! {
    /// The metrics reported by the guest (as opposed to inferred from outside)
    VmGuestMetricsRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Version of the OS.
        os_version: HashMap<String, String> => "os_version",
        /// Version of the PV drivers.
        pv_drivers_version: HashMap<String, String> => "PV_drivers_version",
        /// Logically equivalent to PV_drivers_detected.
        pv_drivers_up_to_date: bool => "PV_drivers_up_to_date",
        /// This field exists but has no data. Use the memory and memory_internal_free RRD data-sources instead.
        memory: HashMap<String, String> => "memory",
        /// This field exists but has no data.
        disks: HashMap<String, String> => "disks",
        /// Network configuration.
        networks: HashMap<String, String> => "networks",
        /// Anything else.
        other: HashMap<String, String> => "other",
        /// Time at which this information was last updated.
        last_updated: DateTime<Utc> => "last_updated",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// True if the guest is sending heartbeat messages via the guest agent.
        live: bool => "live",
        /// The guest's statement of whether it supports VBD hotplug, i.e. whether it is capable of responding immediately to instantiation of a new VBD by bringing online a new PV block device. If the guest states that it is not capable, then the VBD plug and unplug operations will not be allowed while the guest is running.
        can_use_hotplug_vbd: TristateType => "can_use_hotplug_vbd",
        /// The guest's statement of whether it supports VIF hotplug, i.e. whether it is capable of responding immediately to instantiation of a new VIF by bringing online a new PV network device. If the guest states that it is not capable, then the VIF plug and unplug operations will not be allowed while the guest is running.
        can_use_hotplug_vif: TristateType => "can_use_hotplug_vif",
        /// At least one of the guest's devices has successfully connected to the backend.
        pv_drivers_detected: bool => "PV_drivers_detected",
    }
}

getters! {
    VmGuestMetrics, VmGuestMetricsRef {
        /// Get the uuid field of the given VM_guest_metrics.
        get_uuid => "get_uuid": String,
        /// Get the os_version field of the given VM_guest_metrics.
        get_os_version => "get_os_version": HashMap<String, String>,
        /// Get the PV_drivers_version field of the given VM_guest_metrics.
        get_pv_drivers_version => "get_PV_drivers_version": HashMap<String, String>,
        /// Get the PV_drivers_up_to_date field of the given VM_guest_metrics.
        get_pv_drivers_up_to_date => "get_PV_drivers_up_to_date": bool,
        /// Get the memory field of the given VM_guest_metrics.
        get_memory => "get_memory": HashMap<String, String>,
        /// Get the disks field of the given VM_guest_metrics.
        get_disks => "get_disks": HashMap<String, String>,
        /// Get the networks field of the given VM_guest_metrics.
        get_networks => "get_networks": HashMap<String, String>,
        /// Get the other field of the given VM_guest_metrics.
        get_other => "get_other": HashMap<String, String>,
        /// Get the last_updated field of the given VM_guest_metrics.
        get_last_updated => "get_last_updated": DateTime<Utc>,
        /// Get the other_config field of the given VM_guest_metrics.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the live field of the given VM_guest_metrics.
        get_live => "get_live": bool,
        /// Get the can_use_hotplug_vbd field of the given VM_guest_metrics.
        get_can_use_hotplug_vbd => "get_can_use_hotplug_vbd": TristateType,
        /// Get the can_use_hotplug_vif field of the given VM_guest_metrics.
        get_can_use_hotplug_vif => "get_can_use_hotplug_vif": TristateType,
        /// Get the PV_drivers_detected field of the given VM_guest_metrics.
        get_pv_drivers_detected => "get_PV_drivers_detected": bool,
    }
}

setters! {
    VmGuestMetrics, VmGuestMetricsRef {
        /// Set the other_config field of the given VM_guest_metrics.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    VmGuestMetrics, VmGuestMetricsRef {
        /// Add the given key-value pair to the other_config field of the given VM_guest_metrics.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, VmGuestMetrics> {
    /// Get a record containing the current state of the given VM_guest_metrics.
    pub async fn get_record(
        &self,
        vm_guest_metrics: &VmGuestMetricsRef,
    ) -> Result<VmGuestMetricsRecord> {
        self.call("get_record").arg("self", vm_guest_metrics).invoke().await
    }

    /// Get a reference to the VM_guest_metrics instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VmGuestMetricsRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VM_guest_metrics instances known to the system.
    pub async fn get_all(&self) -> Result<Vec<VmGuestMetricsRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VM_guest_metrics references to VM_guest_metrics records for all VM_guest_metrics instances known to the system.
    pub async fn get_all_records(
        &self,
    ) -> Result<HashMap<VmGuestMetricsRef, VmGuestMetricsRecord>> {
        self.call("get_all_records").invoke().await
    }
}
