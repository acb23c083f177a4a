//! `VM_metrics`: The metrics associated with a VM.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::DomainType;
use crate::refs::VmMetricsRef;
use crate::Result;

/// Marker for the `VM_metrics` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmMetrics;

impl XenClass for VmMetrics {
    const NAME: &'static str = "VM_metrics";
    type Ref = VmMetricsRef;
    type Record = VmMetricsRecord;
}

xen_record! {
    /// The metrics associated with a VM.
    VmMetricsRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Guest's actual memory (bytes)
        memory_actual: i64 => "memory_actual",
        /// Current number of VCPUs.
        vcpus_number: i64 => "VCPUs_number",
        /// Utilisation for all of guest's current VCPUs.
        vcpus_utilisation: HashMap<i64, f64> => "VCPUs_utilisation",
        /// VCPU to PCPU map.
        vcpus_cpu: HashMap<i64, i64> => "VCPUs_CPU",
        /// The live equivalent to VM.VCPUs_params.
        vcpus_params: HashMap<String, String> => "VCPUs_params",
        /// CPU flags (blocked,online,running)
        vcpus_flags: HashMap<i64, Vec<String>> => "VCPUs_flags",
        /// The state of the guest, eg blocked, dying etc.
        state: Vec<String> => "state",
        /// Time at which this VM was last booted.
        start_time: DateTime<Utc> => "start_time",
        /// Time at which the VM was installed.
        install_time: DateTime<Utc> => "install_time",
        /// Time at which this information was last updated.
        last_updated: DateTime<Utc> => "last_updated",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Hardware virtual machine.
        hvm: bool => "hvm",
        /// VM supports nested virtualisation.
        nested_virt: bool => "nested_virt",
        /// VM is immobile and can't migrate between hosts.
        nomigrate: bool => "nomigrate",
        /// The current domain type of the VM (for running,suspended, or paused VMs). The last-known domain type for halted VMs.
        current_domain_type: DomainType => "current_domain_type",
    }
}

getters! {
    VmMetrics, VmMetricsRef {
        /// Get the uuid field of the given VM_metrics.
        get_uuid => "get_uuid": String,
        /// Get the memory/actual field of the given VM_metrics.
        get_memory_actual => "get_memory_actual": i64,
        /// Get the VCPUs/number field of the given VM_metrics.
        get_vcpus_number => "get_VCPUs_number": i64,
        /// Get the VCPUs/utilisation field of the given VM_metrics.
        get_vcpus_utilisation => "get_VCPUs_utilisation": HashMap<i64, f64>,
        /// Get the VCPUs/CPU field of the given VM_metrics.
        get_vcpus_cpu => "get_VCPUs_CPU": HashMap<i64, i64>,
        /// Get the VCPUs/params field of the given VM_metrics.
        get_vcpus_params => "get_VCPUs_params": HashMap<String, String>,
        /// Get the VCPUs/flags field of the given VM_metrics.
        get_vcpus_flags => "get_VCPUs_flags": HashMap<i64, Vec<String>>,
        /// Get the state field of the given VM_metrics.
        get_state => "get_state": Vec<String>,
        /// Get the start_time field of the given VM_metrics.
        get_start_time => "get_start_time": DateTime<Utc>,
        /// Get the install_time field of the given VM_metrics.
        get_install_time => "get_install_time": DateTime<Utc>,
        /// Get the last_updated field of the given VM_metrics.
        get_last_updated => "get_last_updated": DateTime<Utc>,
        /// Get the other_config field of the given VM_metrics.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the hvm field of the given VM_metrics.
        get_hvm => "get_hvm": bool,
        /// Get the nested_virt field of the given VM_metrics.
        get_nested_virt => "get_nested_virt": bool,
        /// Get the nomigrate field of the given VM_metrics.
        get_nomigrate => "get_nomigrate": bool,
        /// Get the current_domain_type field of the given VM_metrics.
        get_current_domain_type => "get_current_domain_type": DomainType,
    }
}

setters! {
    VmMetrics, VmMetricsRef {
        /// Set the other_config field of the given VM_metrics.
        ///
        /// Since `orlando`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    VmMetrics, VmMetricsRef {
        /// Add the given key-value pair to the other_config field of the given VM_metrics.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, VmMetrics> {
    /// Get a record containing the current state of the given VM_metrics.
    pub async fn get_record(&self, vm_metrics: &VmMetricsRef) -> Result<VmMetricsRecord> {
        self.call("get_record").arg("self", vm_metrics).invoke().await
    }

    /// Get a reference to the VM_metrics instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VmMetricsRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VM_metrics instances known to the system.
    pub async fn get_all(&self) -> Result<Vec<VmMetricsRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VM_metrics references to VM_metrics records for all VM_metrics instances known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VmMetricsRef, VmMetricsRecord>> {
        self.call("get_all_records").invoke().await
    }
}
