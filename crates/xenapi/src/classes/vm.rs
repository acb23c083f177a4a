//! `VM`: A virtual machine (or 'guest').

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{
    DomainType, OnCrashBehaviour, OnNormalExit, OnSoftrebootBehavior, UpdateGuidances, VmOperations,
    VmPowerState,
};
use crate::records::DataSourceRecord;
use crate::refs::{
    BlobRef, ConsoleRef, CrashdumpRef, GpuGroupRef, HostRef, NetworkRef, PciRef, SessionRef, SrRef,
    TaskRef, VbdRef, VdiRef, VgpuRef, VifRef, VmApplianceRef, VmGuestMetricsRef, VmMetricsRef,
    VmRef, VmppRef, VmssRef, VtpmRef, VusbRef,
};
use crate::Result;

/// Marker for the `VM` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vm;

impl XenClass for Vm {
    const NAME: &'static str = "VM";
    type Ref = VmRef;
    type Record = VmRecord;
}

xen_record! {
    /// A virtual machine (or 'guest').
    VmRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<VmOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, VmOperations> => "current_operations",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// Current power state of the machine.
        power_state: VmPowerState => "power_state",
        /// Creators of VMs and templates may store version information here.
        user_version: i64 => "user_version",
        /// True if this is a template. Template VMs can never be started, they are used only for cloning other VMs.
        is_a_template: bool => "is_a_template",
        /// True if this is a default template. Default template VMs can never be started or migrated, they are used only for cloning other VMs.
        is_default_template: bool => "is_default_template",
        /// The VDI that a suspend image is stored on. (Only has meaning if VM is currently suspended)
        suspend_vdi: VdiRef => "suspend_VDI",
        /// The host the VM is currently resident on.
        resident_on: HostRef => "resident_on",
        /// The host on which the VM is due to be started/resumed/migrated. This acts as a memory reservation indicator.
        scheduled_to_be_resident_on: HostRef => "scheduled_to_be_resident_on",
        /// A host which the VM has some affinity for (or NULL). This is used as a hint to the start call when it decides where to run the VM. Resource constraints may cause the VM to be started elsewhere.
        affinity: HostRef => "affinity",
        /// Virtualization memory overhead (bytes).
        memory_overhead: i64 => "memory_overhead",
        /// Dynamically-set memory target (bytes). The value of this field indicates the current target for memory available to this VM.
        memory_target: i64 => "memory_target",
        /// Statically-set (i.e. absolute) maximum (bytes). The value of this field at VM start time acts as a hard limit of the amount of memory a guest can use. New values only take effect on reboot.
        memory_static_max: i64 => "memory_static_max",
        /// Dynamic maximum (bytes)
        memory_dynamic_max: i64 => "memory_dynamic_max",
        /// Dynamic minimum (bytes)
        memory_dynamic_min: i64 => "memory_dynamic_min",
        /// Statically-set (i.e. absolute) mininum (bytes). The value of this field indicates the least amount of memory this VM can boot with without crashing.
        memory_static_min: i64 => "memory_static_min",
        /// Configuration parameters for the selected VCPU policy.
        vcpus_params: HashMap<String, String> => "VCPUs_params",
        /// Max number of VCPUs.
        vcpus_max: i64 => "VCPUs_max",
        /// Boot number of VCPUs.
        vcpus_at_startup: i64 => "VCPUs_at_startup",
        /// Action to take after soft reboot.
        actions_after_softreboot: OnSoftrebootBehavior => "actions_after_softreboot",
        /// Action to take after the guest has shutdown itself.
        actions_after_shutdown: OnNormalExit => "actions_after_shutdown",
        /// Action to take after the guest has rebooted itself.
        actions_after_reboot: OnNormalExit => "actions_after_reboot",
        /// Action to take if the guest crashes.
        actions_after_crash: OnCrashBehaviour => "actions_after_crash",
        /// Virtual console devices.
        consoles: Vec<ConsoleRef> => "consoles",
        /// Virtual network interfaces.
        vifs: Vec<VifRef> => "VIFs",
        /// Virtual block devices.
        vbds: Vec<VbdRef> => "VBDs",
        /// Vitual usb devices.
        vusbs: Vec<VusbRef> => "VUSBs",
        /// Crash dumps associated with this VM.
        crash_dumps: Vec<CrashdumpRef> => "crash_dumps",
        /// Virtual TPMs.
        vtpms: Vec<VtpmRef> => "VTPMs",
        /// Name of or path to bootloader.
        pv_bootloader: String => "PV_bootloader",
        /// Path to the kernel.
        pv_kernel: String => "PV_kernel",
        /// Path to the initrd.
        pv_ramdisk: String => "PV_ramdisk",
        /// Kernel command-line arguments.
        pv_args: String => "PV_args",
        /// Miscellaneous arguments for the bootloader.
        pv_bootloader_args: String => "PV_bootloader_args",
        /// To make Zurich guests boot.
        pv_legacy_args: String => "PV_legacy_args",
        /// HVM boot policy.
        hvm_boot_policy: String => "HVM_boot_policy",
        /// HVM boot params.
        hvm_boot_params: HashMap<String, String> => "HVM_boot_params",
        /// Multiplier applied to the amount of shadow that will be made available to the guest.
        hvm_shadow_multiplier: f64 => "HVM_shadow_multiplier",
        /// Platform-specific configuration.
        platform: HashMap<String, String> => "platform",
        /// PCI bus path for pass-through devices.
        pci_bus: String => "PCI_bus",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Domain ID (if available, -1 otherwise)
        domid: i64 => "domid",
        /// Domain architecture (if available, null string otherwise)
        domarch: String => "domarch",
        /// Describes the CPU flags on which the VM was last booted.
        last_boot_cpu_flags: HashMap<String, String> => "last_boot_CPU_flags",
        /// True if this is a control domain (domain 0 or a driver domain)
        is_control_domain: bool => "is_control_domain",
        /// Metrics associated with this VM.
        metrics: VmMetricsRef => "metrics",
        /// Metrics associated with the running guest.
        guest_metrics: VmGuestMetricsRef => "guest_metrics",
        /// Marshalled value containing VM record at time of last boot.
        last_booted_record: String => "last_booted_record",
        /// An XML specification of recommended values and ranges for properties of this VM.
        recommendations: String => "recommendations",
        /// Data to be inserted into the xenstore tree (/local/domain/&lt;domid&gt;/vm-data) after the VM is created.
        xenstore_data: HashMap<String, String> => "xenstore_data",
        /// If true then the system will attempt to keep the VM running as much as possible.
        ha_always_run: bool => "ha_always_run",
        /// Has possible values: "best-effort" meaning "try to restart this VM if possible but don't consider the Pool to be overcommitted if this is not possible"; "restart" meaning "this VM should be restarted"; "" meaning "do not try to restart this VM".
        ha_restart_priority: String => "ha_restart_priority",
        /// True if this is a snapshot. Snapshotted VMs can never be started, they are used only for cloning other VMs.
        is_a_snapshot: bool => "is_a_snapshot",
        /// Ref pointing to the VM this snapshot is of.
        snapshot_of: VmRef => "snapshot_of",
        /// List pointing to all the VM snapshots.
        snapshots: Vec<VmRef> => "snapshots",
        /// Date/time when this snapshot was created.
        snapshot_time: DateTime<Utc> => "snapshot_time",
        /// Transportable ID of the snapshot VM.
        transportable_snapshot_id: String => "transportable_snapshot_id",
        /// Binary blobs associated with this VM.
        blobs: HashMap<String, BlobRef> => "blobs",
        /// User-specified tags for categorization purposes.
        tags: Vec<String> => "tags",
        /// List of operations which have been explicitly blocked and an error code.
        blocked_operations: HashMap<VmOperations, String> => "blocked_operations",
        /// Human-readable information concerning this snapshot.
        snapshot_info: HashMap<String, String> => "snapshot_info",
        /// Encoded information about the VM's metadata this is a snapshot of.
        snapshot_metadata: String => "snapshot_metadata",
        /// Ref pointing to the parent of this VM.
        parent: VmRef => "parent",
        /// List pointing to all the children of this VM.
        children: Vec<VmRef> => "children",
        /// BIOS strings.
        bios_strings: HashMap<String, String> => "bios_strings",
        /// Ref pointing to a protection policy for this VM.
        protection_policy: VmppRef => "protection_policy",
        /// True if this snapshot was created by the protection policy.
        is_snapshot_from_vmpp: bool => "is_snapshot_from_vmpp",
        /// Ref pointing to a snapshot schedule for this VM.
        snapshot_schedule: VmssRef => "snapshot_schedule",
        /// True if this snapshot was created by the snapshot schedule.
        is_vmss_snapshot: bool => "is_vmss_snapshot",
        /// The appliance to which this VM belongs.
        appliance: VmApplianceRef => "appliance",
        /// The delay to wait before proceeding to the next order in the startup sequence (seconds)
        start_delay: i64 => "start_delay",
        /// The delay to wait before proceeding to the next order in the shutdown sequence (seconds)
        shutdown_delay: i64 => "shutdown_delay",
        /// The point in the startup or shutdown sequence at which this VM will be started.
        order: i64 => "order",
        /// Virtual GPUs.
        vgpus: Vec<VgpuRef> => "VGPUs",
        /// Currently passed-through PCI devices.
        attached_pcis: Vec<PciRef> => "attached_PCIs",
        /// The SR on which a suspend image is stored.
        suspend_sr: SrRef => "suspend_SR",
        /// The number of times this VM has been recovered.
        version: i64 => "version",
        /// Generation ID of the VM.
        generation_id: String => "generation_id",
        /// The host virtual hardware platform version the VM can run on.
        hardware_platform_version: i64 => "hardware_platform_version",
        /// When an HVM guest starts, this controls the presence of the emulated C000 PCI device which triggers Windows Update to fetch or update PV drivers.
        has_vendor_device: bool => "has_vendor_device",
        /// Indicates whether a VM requires a reboot in order to update its configuration, e.g. its memory allocation.
        requires_reboot: bool => "requires_reboot",
        /// Textual reference to the template used to create a VM. This can be used by clients in need of an immutable reference to the template since the latter's uuid and name_label may change, for example, after a package installation or upgrade.
        reference_label: String => "reference_label",
        /// The type of domain that will be created when the VM is started.
        domain_type: DomainType => "domain_type",
        /// Initial value for guest NVRAM (containing UEFI variables, etc). Cannot be changed while the VM is running.
        nvram: HashMap<String, String> => "NVRAM",
        /// The set of pending mandatory guidances after applying updates, which must be applied, as otherwise there may be e.g. VM failures.
        pending_guidances: Vec<UpdateGuidances> => "pending_guidances",
        /// The set of pending recommended guidances after applying updates, which most users should follow to make the updates effective, but if not followed, will not cause a failure.
        pending_guidances_recommended: Vec<UpdateGuidances> => "pending_guidances_recommended",
        /// The set of pending full guidances after applying updates, which a user should follow to make some updates, e.g. specific hardware drivers or CPU features, fully effective, but the 'average user' doesn't need to.
        pending_guidances_full: Vec<UpdateGuidances> => "pending_guidances_full",
    }
}

xen_record! {
    /// Fields accepted by `VM.create`; `None` leaves the server default.
    VmCreateArgs {
        /// A human-readable name.
        name_label: Option<String> => "name_label",
        /// A notes field containing human-readable description.
        name_description: Option<String> => "name_description",
        /// Current power state of the machine.
        power_state: Option<VmPowerState> => "power_state",
        /// Creators of VMs and templates may store version information here.
        user_version: i64 => "user_version",
        /// True if this is a template. Template VMs can never be started, they are used only for cloning other VMs.
        is_a_template: bool => "is_a_template",
        /// The VDI that a suspend image is stored on. (Only has meaning if VM is currently suspended)
        suspend_vdi: Option<VdiRef> => "suspend_VDI",
        /// A host which the VM has some affinity for (or NULL). This is used as a hint to the start call when it decides where to run the VM. Resource constraints may cause the VM to be started elsewhere.
        affinity: HostRef => "affinity",
        /// Dynamically-set memory target (bytes). The value of this field indicates the current target for memory available to this VM.
        memory_target: Option<i64> => "memory_target",
        /// Statically-set (i.e. absolute) maximum (bytes). The value of this field at VM start time acts as a hard limit of the amount of memory a guest can use. New values only take effect on reboot.
        memory_static_max: i64 => "memory_static_max",
        /// Dynamic maximum (bytes)
        memory_dynamic_max: i64 => "memory_dynamic_max",
        /// Dynamic minimum (bytes)
        memory_dynamic_min: i64 => "memory_dynamic_min",
        /// Statically-set (i.e. absolute) mininum (bytes). The value of this field indicates the least amount of memory this VM can boot with without crashing.
        memory_static_min: i64 => "memory_static_min",
        /// Configuration parameters for the selected VCPU policy.
        vcpus_params: HashMap<String, String> => "VCPUs_params",
        /// Max number of VCPUs.
        vcpus_max: i64 => "VCPUs_max",
        /// Boot number of VCPUs.
        vcpus_at_startup: i64 => "VCPUs_at_startup",
        /// Action to take after soft reboot.
        actions_after_softreboot: Option<OnSoftrebootBehavior> => "actions_after_softreboot",
        /// Action to take after the guest has shutdown itself.
        actions_after_shutdown: OnNormalExit => "actions_after_shutdown",
        /// Action to take after the guest has rebooted itself.
        actions_after_reboot: OnNormalExit => "actions_after_reboot",
        /// Action to take if the guest crashes.
        actions_after_crash: OnCrashBehaviour => "actions_after_crash",
        /// Name of or path to bootloader.
        pv_bootloader: String => "PV_bootloader",
        /// Path to the kernel.
        pv_kernel: String => "PV_kernel",
        /// Path to the initrd.
        pv_ramdisk: String => "PV_ramdisk",
        /// Kernel command-line arguments.
        pv_args: String => "PV_args",
        /// Miscellaneous arguments for the bootloader.
        pv_bootloader_args: String => "PV_bootloader_args",
        /// To make Zurich guests boot.
        pv_legacy_args: String => "PV_legacy_args",
        /// HVM boot policy.
        hvm_boot_policy: String => "HVM_boot_policy",
        /// HVM boot params.
        hvm_boot_params: HashMap<String, String> => "HVM_boot_params",
        /// Multiplier applied to the amount of shadow that will be made available to the guest.
        hvm_shadow_multiplier: Option<f64> => "HVM_shadow_multiplier",
        /// Platform-specific configuration.
        platform: HashMap<String, String> => "platform",
        /// PCI bus path for pass-through devices.
        pci_bus: String => "PCI_bus",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Describes the CPU flags on which the VM was last booted.
        last_boot_cpu_flags: Option<HashMap<String, String>> => "last_boot_CPU_flags",
        /// Marshalled value containing VM record at time of last boot.
        last_booted_record: Option<String> => "last_booted_record",
        /// An XML specification of recommended values and ranges for properties of this VM.
        recommendations: String => "recommendations",
        /// Data to be inserted into the xenstore tree (/local/domain/&lt;domid&gt;/vm-data) after the VM is created.
        xenstore_data: Option<HashMap<String, String>> => "xenstore_data",
        /// If true then the system will attempt to keep the VM running as much as possible.
        ha_always_run: Option<bool> => "ha_always_run",
        /// Has possible values: "best-effort" meaning "try to restart this VM if possible but don't consider the Pool to be overcommitted if this is not possible"; "restart" meaning "this VM should be restarted"; "" meaning "do not try to restart this VM".
        ha_restart_priority: Option<String> => "ha_restart_priority",
        /// User-specified tags for categorization purposes.
        tags: Option<Vec<String>> => "tags",
        /// List of operations which have been explicitly blocked and an error code.
        blocked_operations: Option<HashMap<VmOperations, String>> => "blocked_operations",
        /// Ref pointing to a protection policy for this VM.
        protection_policy: Option<VmppRef> => "protection_policy",
        /// True if this snapshot was created by the protection policy.
        is_snapshot_from_vmpp: Option<bool> => "is_snapshot_from_vmpp",
        /// Ref pointing to a snapshot schedule for this VM.
        snapshot_schedule: Option<VmssRef> => "snapshot_schedule",
        /// True if this snapshot was created by the snapshot schedule.
        is_vmss_snapshot: Option<bool> => "is_vmss_snapshot",
        /// The appliance to which this VM belongs.
        appliance: Option<VmApplianceRef> => "appliance",
        /// The delay to wait before proceeding to the next order in the startup sequence (seconds)
        start_delay: Option<i64> => "start_delay",
        /// The delay to wait before proceeding to the next order in the shutdown sequence (seconds)
        shutdown_delay: Option<i64> => "shutdown_delay",
        /// The point in the startup or shutdown sequence at which this VM will be started.
        order: Option<i64> => "order",
        /// The SR on which a suspend image is stored.
        suspend_sr: Option<SrRef> => "suspend_SR",
        /// The number of times this VM has been recovered.
        version: Option<i64> => "version",
        /// Generation ID of the VM.
        generation_id: Option<String> => "generation_id",
        /// The host virtual hardware platform version the VM can run on.
        hardware_platform_version: Option<i64> => "hardware_platform_version",
        /// When an HVM guest starts, this controls the presence of the emulated C000 PCI device which triggers Windows Update to fetch or update PV drivers.
        has_vendor_device: Option<bool> => "has_vendor_device",
        /// Textual reference to the template used to create a VM. This can be used by clients in need of an immutable reference to the template since the latter's uuid and name_label may change, for example, after a package installation or upgrade.
        reference_label: Option<String> => "reference_label",
        /// The type of domain that will be created when the VM is started.
        domain_type: Option<DomainType> => "domain_type",
        /// Initial value for guest NVRAM (containing UEFI variables, etc). Cannot be changed while the VM is running.
        nvram: Option<HashMap<String, String>> => "NVRAM",
    }
}

getters! {
    Vm, VmRef {
        /// Get the uuid field of the given VM.
        get_uuid => "get_uuid": String,
        /// Get the allowed_operations field of the given VM.
        get_allowed_operations => "get_allowed_operations": Vec<VmOperations>,
        /// Get the current_operations field of the given VM.
        get_current_operations => "get_current_operations": HashMap<String, VmOperations>,
        /// Get the name/label field of the given VM.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given VM.
        get_name_description => "get_name_description": String,
        /// Get the power_state field of the given VM.
        get_power_state => "get_power_state": VmPowerState,
        /// Get the user_version field of the given VM.
        get_user_version => "get_user_version": i64,
        /// Get the is_a_template field of the given VM.
        get_is_a_template => "get_is_a_template": bool,
        /// Get the is_default_template field of the given VM.
        get_is_default_template => "get_is_default_template": bool,
        /// Get the suspend_VDI field of the given VM.
        get_suspend_vdi => "get_suspend_VDI": VdiRef,
        /// Get the resident_on field of the given VM.
        get_resident_on => "get_resident_on": HostRef,
        /// Get the scheduled_to_be_resident_on field of the given VM.
        get_scheduled_to_be_resident_on => "get_scheduled_to_be_resident_on": HostRef,
        /// Get the affinity field of the given VM.
        get_affinity => "get_affinity": HostRef,
        /// Get the memory/overhead field of the given VM.
        get_memory_overhead => "get_memory_overhead": i64,
        /// Get the memory/target field of the given VM.
        get_memory_target => "get_memory_target": i64,
        /// Get the memory/static_max field of the given VM.
        get_memory_static_max => "get_memory_static_max": i64,
        /// Get the memory/dynamic_max field of the given VM.
        get_memory_dynamic_max => "get_memory_dynamic_max": i64,
        /// Get the memory/dynamic_min field of the given VM.
        get_memory_dynamic_min => "get_memory_dynamic_min": i64,
        /// Get the memory/static_min field of the given VM.
        get_memory_static_min => "get_memory_static_min": i64,
        /// Get the VCPUs/params field of the given VM.
        get_vcpus_params => "get_VCPUs_params": HashMap<String, String>,
        /// Get the VCPUs/max field of the given VM.
        get_vcpus_max => "get_VCPUs_max": i64,
        /// Get the VCPUs/at_startup field of the given VM.
        get_vcpus_at_startup => "get_VCPUs_at_startup": i64,
        /// Get the actions/after_softreboot field of the given VM.
        get_actions_after_softreboot => "get_actions_after_softreboot": OnSoftrebootBehavior,
        /// Get the actions/after_shutdown field of the given VM.
        get_actions_after_shutdown => "get_actions_after_shutdown": OnNormalExit,
        /// Get the actions/after_reboot field of the given VM.
        get_actions_after_reboot => "get_actions_after_reboot": OnNormalExit,
        /// Get the actions/after_crash field of the given VM.
        get_actions_after_crash => "get_actions_after_crash": OnCrashBehaviour,
        /// Get the consoles field of the given VM.
        get_consoles => "get_consoles": Vec<ConsoleRef>,
        /// Get the VIFs field of the given VM.
        get_vifs => "get_VIFs": Vec<VifRef>,
        /// Get the VBDs field of the given VM.
        get_vbds => "get_VBDs": Vec<VbdRef>,
        /// Get the VUSBs field of the given VM.
        get_vusbs => "get_VUSBs": Vec<VusbRef>,
        /// Get the crash_dumps field of the given VM.
        get_crash_dumps => "get_crash_dumps": Vec<CrashdumpRef>,
        /// Get the VTPMs field of the given VM.
        get_vtpms => "get_VTPMs": Vec<VtpmRef>,
        /// Get the PV/bootloader field of the given VM.
        get_pv_bootloader => "get_PV_bootloader": String,
        /// Get the PV/kernel field of the given VM.
        get_pv_kernel => "get_PV_kernel": String,
        /// Get the PV/ramdisk field of the given VM.
        get_pv_ramdisk => "get_PV_ramdisk": String,
        /// Get the PV/args field of the given VM.
        get_pv_args => "get_PV_args": String,
        /// Get the PV/bootloader_args field of the given VM.
        get_pv_bootloader_args => "get_PV_bootloader_args": String,
        /// Get the PV/legacy_args field of the given VM.
        get_pv_legacy_args => "get_PV_legacy_args": String,
        /// Get the HVM/boot_policy field of the given VM.
        get_hvm_boot_policy => "get_HVM_boot_policy": String,
        /// Get the HVM/boot_params field of the given VM.
        get_hvm_boot_params => "get_HVM_boot_params": HashMap<String, String>,
        /// Get the HVM/shadow_multiplier field of the given VM.
        get_hvm_shadow_multiplier => "get_HVM_shadow_multiplier": f64,
        /// Get the platform field of the given VM.
        get_platform => "get_platform": HashMap<String, String>,
        /// Get the PCI_bus field of the given VM.
        get_pci_bus => "get_PCI_bus": String,
        /// Get the other_config field of the given VM.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the domid field of the given VM.
        get_domid => "get_domid": i64,
        /// Get the domarch field of the given VM.
        get_domarch => "get_domarch": String,
        /// Get the last_boot_CPU_flags field of the given VM.
        get_last_boot_cpu_flags => "get_last_boot_CPU_flags": HashMap<String, String>,
        /// Get the is_control_domain field of the given VM.
        get_is_control_domain => "get_is_control_domain": bool,
        /// Get the metrics field of the given VM.
        get_metrics => "get_metrics": VmMetricsRef,
        /// Get the guest_metrics field of the given VM.
        get_guest_metrics => "get_guest_metrics": VmGuestMetricsRef,
        /// Get the last_booted_record field of the given VM.
        get_last_booted_record => "get_last_booted_record": String,
        /// Get the recommendations field of the given VM.
        get_recommendations => "get_recommendations": String,
        /// Get the xenstore_data field of the given VM.
        get_xenstore_data => "get_xenstore_data": HashMap<String, String>,
        /// Get the ha_always_run field of the given VM.
        get_ha_always_run => "get_ha_always_run": bool,
        /// Get the ha_restart_priority field of the given VM.
        get_ha_restart_priority => "get_ha_restart_priority": String,
        /// Get the is_a_snapshot field of the given VM.
        get_is_a_snapshot => "get_is_a_snapshot": bool,
        /// Get the snapshot_of field of the given VM.
        get_snapshot_of => "get_snapshot_of": VmRef,
        /// Get the snapshots field of the given VM.
        get_snapshots => "get_snapshots": Vec<VmRef>,
        /// Get the snapshot_time field of the given VM.
        get_snapshot_time => "get_snapshot_time": DateTime<Utc>,
        /// Get the transportable_snapshot_id field of the given VM.
        get_transportable_snapshot_id => "get_transportable_snapshot_id": String,
        /// Get the blobs field of the given VM.
        get_blobs => "get_blobs": HashMap<String, BlobRef>,
        /// Get the tags field of the given VM.
        get_tags => "get_tags": Vec<String>,
        /// Get the blocked_operations field of the given VM.
        get_blocked_operations => "get_blocked_operations": HashMap<VmOperations, String>,
        /// Get the snapshot_info field of the given VM.
        get_snapshot_info => "get_snapshot_info": HashMap<String, String>,
        /// Get the snapshot_metadata field of the given VM.
        get_snapshot_metadata => "get_snapshot_metadata": String,
        /// Get the parent field of the given VM.
        get_parent => "get_parent": VmRef,
        /// Get the children field of the given VM.
        get_children => "get_children": Vec<VmRef>,
        /// Get the bios_strings field of the given VM.
        get_bios_strings => "get_bios_strings": HashMap<String, String>,
        /// Get the protection_policy field of the given VM.
        get_protection_policy => "get_protection_policy": VmppRef,
        /// Get the is_snapshot_from_vmpp field of the given VM.
        get_is_snapshot_from_vmpp => "get_is_snapshot_from_vmpp": bool,
        /// Get the snapshot_schedule field of the given VM.
        get_snapshot_schedule => "get_snapshot_schedule": VmssRef,
        /// Get the is_vmss_snapshot field of the given VM.
        get_is_vmss_snapshot => "get_is_vmss_snapshot": bool,
        /// Get the appliance field of the given VM.
        get_appliance => "get_appliance": VmApplianceRef,
        /// Get the start_delay field of the given VM.
        get_start_delay => "get_start_delay": i64,
        /// Get the shutdown_delay field of the given VM.
        get_shutdown_delay => "get_shutdown_delay": i64,
        /// Get the order field of the given VM.
        get_order => "get_order": i64,
        /// Get the VGPUs field of the given VM.
        get_vgpus => "get_VGPUs": Vec<VgpuRef>,
        /// Get the attached_PCIs field of the given VM.
        get_attached_pcis => "get_attached_PCIs": Vec<PciRef>,
        /// Get the suspend_SR field of the given VM.
        get_suspend_sr => "get_suspend_SR": SrRef,
        /// Get the version field of the given VM.
        get_version => "get_version": i64,
        /// Get the generation_id field of the given VM.
        get_generation_id => "get_generation_id": String,
        /// Get the hardware_platform_version field of the given VM.
        get_hardware_platform_version => "get_hardware_platform_version": i64,
        /// Get the has_vendor_device field of the given VM.
        get_has_vendor_device => "get_has_vendor_device": bool,
        /// Get the requires_reboot field of the given VM.
        get_requires_reboot => "get_requires_reboot": bool,
        /// Get the reference_label field of the given VM.
        get_reference_label => "get_reference_label": String,
        /// Get the domain_type field of the given VM.
        get_domain_type => "get_domain_type": DomainType,
        /// Get the NVRAM field of the given VM.
        get_nvram => "get_NVRAM": HashMap<String, String>,
        /// Get the pending_guidances field of the given VM.
        get_pending_guidances => "get_pending_guidances": Vec<UpdateGuidances>,
        /// Get the pending_guidances_recommended field of the given VM.
        get_pending_guidances_recommended => "get_pending_guidances_recommended": Vec<UpdateGuidances>,
        /// Get the pending_guidances_full field of the given VM.
        get_pending_guidances_full => "get_pending_guidances_full": Vec<UpdateGuidances>,
        /// Returns a record describing the VM's dynamic state, initialised when the VM boots and updated to reflect runtime configuration changes e.g. CPU hotplug.
        get_boot_record => "get_boot_record": VmRecord,
        /// Call `VM.get_data_sources`.
        get_data_sources => "get_data_sources": Vec<DataSourceRecord>,
    }
}

setters! {
    Vm, VmRef {
        /// Set the name/label field of the given VM.
        set_name_label => "set_name_label": &str,
        /// Set the name/description field of the given VM.
        set_name_description => "set_name_description": &str,
        /// Set the user_version field of the given VM.
        set_user_version => "set_user_version": i64,
        /// Set the is_a_template field of the given VM.
        set_is_a_template => "set_is_a_template": bool,
        /// Set the affinity field of the given VM.
        set_affinity => "set_affinity": &HostRef,
        /// Set the VCPUs/params field of the given VM.
        set_vcpus_params => "set_VCPUs_params": &HashMap<String, String>,
        /// Set the actions/after_softreboot field of the given VM.
        set_actions_after_softreboot => "set_actions_after_softreboot": OnSoftrebootBehavior,
        /// Set the actions/after_shutdown field of the given VM.
        set_actions_after_shutdown => "set_actions_after_shutdown": OnNormalExit,
        /// Set the actions/after_reboot field of the given VM.
        set_actions_after_reboot => "set_actions_after_reboot": OnNormalExit,
        /// Set the PV/bootloader field of the given VM.
        set_pv_bootloader => "set_PV_bootloader": &str,
        /// Set the PV/kernel field of the given VM.
        set_pv_kernel => "set_PV_kernel": &str,
        /// Set the PV/ramdisk field of the given VM.
        set_pv_ramdisk => "set_PV_ramdisk": &str,
        /// Set the PV/args field of the given VM.
        set_pv_args => "set_PV_args": &str,
        /// Set the PV/bootloader_args field of the given VM.
        set_pv_bootloader_args => "set_PV_bootloader_args": &str,
        /// Set the PV/legacy_args field of the given VM.
        set_pv_legacy_args => "set_PV_legacy_args": &str,
        /// Set the HVM/boot_params field of the given VM.
        set_hvm_boot_params => "set_HVM_boot_params": &HashMap<String, String>,
        /// Set the platform field of the given VM.
        set_platform => "set_platform": &HashMap<String, String>,
        /// Set the PCI_bus field of the given VM.
        set_pci_bus => "set_PCI_bus": &str,
        /// Set the other_config field of the given VM.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the recommendations field of the given VM.
        set_recommendations => "set_recommendations": &str,
        /// Set the xenstore_data field of the given VM.
        set_xenstore_data => "set_xenstore_data": &HashMap<String, String>,
        /// Set the tags field of the given VM.
        set_tags => "set_tags": &[String],
        /// Set the blocked_operations field of the given VM.
        set_blocked_operations => "set_blocked_operations": &HashMap<VmOperations, String>,
        /// Set the suspend_SR field of the given VM.
        set_suspend_sr => "set_suspend_SR": &SrRef,
        /// Set the hardware_platform_version field of the given VM.
        set_hardware_platform_version => "set_hardware_platform_version": i64,
        /// Call `VM.set_NVRAM`.
        set_nvram => "set_NVRAM": &HashMap<String, String>,
        /// Set the value of the ha_restart_priority field.
        set_ha_restart_priority => "set_ha_restart_priority": &str,
        /// Set the value of the ha_always_run.
        set_ha_always_run => "set_ha_always_run": bool,
        /// Set the value of the memory_dynamic_max field.
        set_memory_dynamic_max => "set_memory_dynamic_max": i64,
        /// Set the value of the memory_dynamic_min field.
        set_memory_dynamic_min => "set_memory_dynamic_min": i64,
        /// Set the value of the memory_static_max field.
        ///
        /// # Errors
        ///
        /// - `HA_OPERATION_WOULD_BREAK_FAILOVER_PLAN`: This operation cannot be performed because it would invalidate VM failover planning such that the system would be unable to guarantee to restart protected VMs after a Host failure.
        set_memory_static_max => "set_memory_static_max": i64,
        /// Set the value of the memory_static_min field.
        set_memory_static_min => "set_memory_static_min": i64,
        /// Set the shadow memory multiplier on a halted VM.
        set_hvm_shadow_multiplier => "set_HVM_shadow_multiplier": f64,
        /// Set the maximum number of VCPUs for a halted VM.
        set_vcpus_max => "set_VCPUs_max": i64,
        /// Set the number of startup VCPUs for a halted VM.
        set_vcpus_at_startup => "set_VCPUs_at_startup": i64,
        /// Set the value of the protection_policy field.
        set_protection_policy => "set_protection_policy": &VmppRef,
        /// Set the value of the snapshot schedule field.
        set_snapshot_schedule => "set_snapshot_schedule": &VmssRef,
        /// Set the VM.domain_type field of the given VM, which will take effect when it is next started.
        set_domain_type => "set_domain_type": DomainType,
        /// Set the VM.HVM_boot_policy field of the given VM, which will take effect when it is next started.
        set_hvm_boot_policy => "set_HVM_boot_policy": &str,
    }
}

map_mutators! {
    Vm, VmRef {
        /// Add the given key-value pair to the HVM/boot_params field of the given VM.
        add_to_hvm_boot_params, remove_from_hvm_boot_params => "HVM_boot_params": &str => &str,
        /// 
        add_to_nvram, remove_from_nvram => "NVRAM": &str => &str,
        /// Add the given key-value pair to the VCPUs/params field of the given VM.
        add_to_vcpus_params, remove_from_vcpus_params => "VCPUs_params": &str => &str,
        /// Add the given key-value pair to the blocked_operations field of the given VM.
        add_to_blocked_operations, remove_from_blocked_operations => "blocked_operations": VmOperations => &str,
        /// Add the given key-value pair to the other_config field of the given VM.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
        /// Add the given key-value pair to the platform field of the given VM.
        add_to_platform, remove_from_platform => "platform": &str => &str,
        /// Add the given key-value pair to the xenstore_data field of the given VM.
        add_to_xenstore_data, remove_from_xenstore_data => "xenstore_data": &str => &str,
    }
}

impl ClassApi<'_, Vm> {
    /// Get a record containing the current state of the given VM.
    pub async fn get_record(&self, vm: &VmRef) -> Result<VmRecord> {
        self.call("get_record").arg("self", vm).invoke().await
    }

    /// Get a reference to the VM instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VmRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the VM instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<VmRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the VMs known to the system.
    pub async fn get_all(&self) -> Result<Vec<VmRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VM references to VM records for all VMs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VmRef, VmRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// NOT RECOMMENDED! VM.clone or VM.copy (or VM.import) is a better choice in almost all situations. The standard way to obtain a new VM is to call VM.clone on a template VM, then call VM.provision on the new clone. Caution: if VM.create is used and then the new VM is attached to a virtual disc that has an operating system already installed, then there is no guarantee that the operating system will boot and run. Any software that calls VM.create on a future version of this API may fail or give unexpected results. For example this could happen if an additional parameter were added to VM.create. VM.create is intended only for use in the automatic creation of the system VM templates. It creates a new VM instance, and returns its handle.
    pub async fn create(&self, args: &VmCreateArgs) -> Result<VmRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &VmCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified VM.  The VM is completely removed from the system.  This function can only be called when the VM is in the Halted State.
    pub async fn destroy(&self, vm: &VmRef) -> Result<()> {
        self.call("destroy").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", vm).invoke_async().await
    }

    /// Add the given value to the tags field of the given VM.  If the value is already in that Set, then do nothing.
    pub async fn add_tags(&self, vm: &VmRef, value: &str) -> Result<()> {
        self.call("add_tags").arg("self", vm).arg("value", value).invoke().await
    }

    /// Remove the given value from the tags field of the given VM.  If the value is not in that Set, then do nothing.
    pub async fn remove_tags(&self, vm: &VmRef, value: &str) -> Result<()> {
        self.call("remove_tags").arg("self", vm).arg("value", value).invoke().await
    }

    /// Snapshots the specified VM, making a new VM. Snapshot automatically exploits the capabilities of the underlying storage repository in which the VM's disk images are stored (e.g. Copy on Write).
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    pub async fn snapshot(
        &self,
        vm: &VmRef,
        new_name: &str,
        ignore_vdis: &[VdiRef],
    ) -> Result<VmRef> {
        self.call("snapshot")
            .arg("vm", vm)
            .arg("new_name", new_name)
            .arg("ignore_vdis", ignore_vdis)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::snapshot`].
    pub async fn async_snapshot(
        &self,
        vm: &VmRef,
        new_name: &str,
        ignore_vdis: &[VdiRef],
    ) -> Result<TaskRef> {
        self.call("snapshot")
            .arg("vm", vm)
            .arg("new_name", new_name)
            .arg("ignore_vdis", ignore_vdis)
            .invoke_async()
            .await
    }

    /// Snapshots the specified VM with quiesce, making a new VM. Snapshot automatically exploits the capabilities of the underlying storage repository in which the VM's disk images are stored (e.g. Copy on Write).
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_SNAPSHOT_WITH_QUIESCE_FAILED`: The quiesced-snapshot operation failed for an unexpected reason.
    /// - `VM_SNAPSHOT_WITH_QUIESCE_TIMEOUT`: The VSS plug-in has timed out.
    /// - `VM_SNAPSHOT_WITH_QUIESCE_PLUGIN_DEOS_NOT_RESPOND`: The VSS plug-in cannot be contacted.
    /// - `VM_SNAPSHOT_WITH_QUIESCE_NOT_SUPPORTED`: The VSS plug-in is not installed on this virtual machine.
    pub async fn snapshot_with_quiesce(&self, vm: &VmRef, new_name: &str) -> Result<VmRef> {
        self.call("snapshot_with_quiesce").arg("vm", vm).arg("new_name", new_name).invoke().await
    }

    /// Asynchronous form of [`Self::snapshot_with_quiesce`].
    pub async fn async_snapshot_with_quiesce(&self, vm: &VmRef, new_name: &str) -> Result<TaskRef> {
        self.call("snapshot_with_quiesce")
            .arg("vm", vm)
            .arg("new_name", new_name)
            .invoke_async()
            .await
    }

    /// Clones the specified VM, making a new VM. Clone automatically exploits the capabilities of the underlying storage repository in which the VM's disk images are stored (e.g. Copy on Write).   This function can only be called when the VM is in the Halted State.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn clone(&self, vm: &VmRef, new_name: &str) -> Result<VmRef> {
        self.call("clone").arg("vm", vm).arg("new_name", new_name).invoke().await
    }

    /// Asynchronous form of [`Self::clone`].
    pub async fn async_clone(&self, vm: &VmRef, new_name: &str) -> Result<TaskRef> {
        self.call("clone").arg("vm", vm).arg("new_name", new_name).invoke_async().await
    }

    /// Copied the specified VM, making a new VM. Unlike clone, copy does not exploits the capabilities of the underlying storage repository in which the VM's disk images are stored. Instead, copy guarantees that the disk images of the newly created VM will be 'full disks' - i.e. not part of a CoW chain.  This function can only be called when the VM is in the Halted State.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn copy(&self, vm: &VmRef, new_name: &str, sr: &SrRef) -> Result<VmRef> {
        self.call("copy").arg("vm", vm).arg("new_name", new_name).arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::copy`].
    pub async fn async_copy(&self, vm: &VmRef, new_name: &str, sr: &SrRef) -> Result<TaskRef> {
        self.call("copy").arg("vm", vm).arg("new_name", new_name).arg("sr", sr).invoke_async().await
    }

    /// Reverts the specified VM to a previous state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `VM_REVERT_FAILED`: An error occured while reverting the specified virtual machine to the specified snapshot.
    pub async fn revert(&self, snapshot: &VmRef) -> Result<()> {
        self.call("revert").arg("snapshot", snapshot).invoke().await
    }

    /// Asynchronous form of [`Self::revert`].
    pub async fn async_revert(&self, snapshot: &VmRef) -> Result<TaskRef> {
        self.call("revert").arg("snapshot", snapshot).invoke_async().await
    }

    /// Checkpoints the specified VM, making a new VM. Checkpoint automatically exploits the capabilities of the underlying storage repository in which the VM's disk images are stored (e.g. Copy on Write) and saves the memory image as well.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_CHECKPOINT_SUSPEND_FAILED`: An error occured while saving the memory image of the specified virtual machine.
    /// - `VM_CHECKPOINT_RESUME_FAILED`: An error occured while restoring the memory image of the specified virtual machine.
    pub async fn checkpoint(&self, vm: &VmRef, new_name: &str) -> Result<VmRef> {
        self.call("checkpoint").arg("vm", vm).arg("new_name", new_name).invoke().await
    }

    /// Asynchronous form of [`Self::checkpoint`].
    pub async fn async_checkpoint(&self, vm: &VmRef, new_name: &str) -> Result<TaskRef> {
        self.call("checkpoint").arg("vm", vm).arg("new_name", new_name).invoke_async().await
    }

    /// Inspects the disk configuration contained within the VM's other_config, creates VDIs and VBDs and then executes any applicable post-install script.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `SR_FULL`: The SR is full. Requested new size exceeds the maximum size.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn provision(&self, vm: &VmRef) -> Result<()> {
        self.call("provision").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::provision`].
    pub async fn async_provision(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("provision").arg("vm", vm).invoke_async().await
    }

    /// Start the specified VM.  This function can only be called with the VM is in the Halted State.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `VM_HVM_REQUIRED`: HVM is required for this operation.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `BOOTLOADER_FAILED`: The bootloader returned an error.
    /// - `UNKNOWN_BOOTLOADER`: The requested bootloader is unknown.
    /// - `NO_HOSTS_AVAILABLE`: There were no servers available to complete the specified operation.
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn start(&self, vm: &VmRef, start_paused: bool, force: bool) -> Result<()> {
        self.call("start")
            .arg("vm", vm)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::start`].
    pub async fn async_start(
        &self,
        vm: &VmRef,
        start_paused: bool,
        force: bool,
    ) -> Result<TaskRef> {
        self.call("start")
            .arg("vm", vm)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke_async()
            .await
    }

    /// Start the specified VM on a particular host.  This function can only be called with the VM is in the Halted State.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `BOOTLOADER_FAILED`: The bootloader returned an error.
    /// - `UNKNOWN_BOOTLOADER`: The requested bootloader is unknown.
    pub async fn start_on(
        &self,
        vm: &VmRef,
        host: &HostRef,
        start_paused: bool,
        force: bool,
    ) -> Result<()> {
        self.call("start_on")
            .arg("vm", vm)
            .arg("host", host)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::start_on`].
    pub async fn async_start_on(
        &self,
        vm: &VmRef,
        host: &HostRef,
        start_paused: bool,
        force: bool,
    ) -> Result<TaskRef> {
        self.call("start_on")
            .arg("vm", vm)
            .arg("host", host)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke_async()
            .await
    }

    /// Pause the specified VM. This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn pause(&self, vm: &VmRef) -> Result<()> {
        self.call("pause").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::pause`].
    pub async fn async_pause(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("pause").arg("vm", vm).invoke_async().await
    }

    /// Resume the specified VM. This can only be called when the specified VM is in the Paused state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn unpause(&self, vm: &VmRef) -> Result<()> {
        self.call("unpause").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::unpause`].
    pub async fn async_unpause(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("unpause").arg("vm", vm).invoke_async().await
    }

    /// Attempt to cleanly shutdown the specified VM. (Note: this may not be supported---e.g. if a guest agent is not installed). This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn clean_shutdown(&self, vm: &VmRef) -> Result<()> {
        self.call("clean_shutdown").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::clean_shutdown`].
    pub async fn async_clean_shutdown(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("clean_shutdown").arg("vm", vm).invoke_async().await
    }

    /// Attempts to first clean shutdown a VM and if it should fail then perform a hard shutdown on it.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn shutdown(&self, vm: &VmRef) -> Result<()> {
        self.call("shutdown").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::shutdown`].
    pub async fn async_shutdown(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("shutdown").arg("vm", vm).invoke_async().await
    }

    /// Attempt to cleanly shutdown the specified VM (Note: this may not be supported---e.g. if a guest agent is not installed). This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn clean_reboot(&self, vm: &VmRef) -> Result<()> {
        self.call("clean_reboot").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::clean_reboot`].
    pub async fn async_clean_reboot(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("clean_reboot").arg("vm", vm).invoke_async().await
    }

    /// Stop executing the specified VM without attempting a clean shutdown.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn hard_shutdown(&self, vm: &VmRef) -> Result<()> {
        self.call("hard_shutdown").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::hard_shutdown`].
    pub async fn async_hard_shutdown(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("hard_shutdown").arg("vm", vm).invoke_async().await
    }

    /// Reset the power-state of the VM to halted in the database only. (Used to recover from slave failures in pooling scenarios by resetting the power-states of VMs running on dead slaves to halted.) This is a potentially dangerous operation; use with care.
    pub async fn power_state_reset(&self, vm: &VmRef) -> Result<()> {
        self.call("power_state_reset").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::power_state_reset`].
    pub async fn async_power_state_reset(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("power_state_reset").arg("vm", vm).invoke_async().await
    }

    /// Stop executing the specified VM without attempting a clean shutdown and immediately restart the VM.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn hard_reboot(&self, vm: &VmRef) -> Result<()> {
        self.call("hard_reboot").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::hard_reboot`].
    pub async fn async_hard_reboot(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("hard_reboot").arg("vm", vm).invoke_async().await
    }

    /// Suspend the specified VM to disk.  This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn suspend(&self, vm: &VmRef) -> Result<()> {
        self.call("suspend").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::suspend`].
    pub async fn async_suspend(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("suspend").arg("vm", vm).invoke_async().await
    }

    /// Awaken the specified VM and resume it.  This can only be called when the specified VM is in the Suspended state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn resume(&self, vm: &VmRef, start_paused: bool, force: bool) -> Result<()> {
        self.call("resume")
            .arg("vm", vm)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::resume`].
    pub async fn async_resume(
        &self,
        vm: &VmRef,
        start_paused: bool,
        force: bool,
    ) -> Result<TaskRef> {
        self.call("resume")
            .arg("vm", vm)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke_async()
            .await
    }

    /// Awaken the specified VM and resume it on a particular Host.  This can only be called when the specified VM is in the Suspended state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    pub async fn resume_on(
        &self,
        vm: &VmRef,
        host: &HostRef,
        start_paused: bool,
        force: bool,
    ) -> Result<()> {
        self.call("resume_on")
            .arg("vm", vm)
            .arg("host", host)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::resume_on`].
    pub async fn async_resume_on(
        &self,
        vm: &VmRef,
        host: &HostRef,
        start_paused: bool,
        force: bool,
    ) -> Result<TaskRef> {
        self.call("resume_on")
            .arg("vm", vm)
            .arg("host", host)
            .arg("start_paused", &start_paused)
            .arg("force", &force)
            .invoke_async()
            .await
    }

    /// Migrate a VM to another Host.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    pub async fn pool_migrate(
        &self,
        vm: &VmRef,
        host: &HostRef,
        options: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("pool_migrate")
            .arg("vm", vm)
            .arg("host", host)
            .arg("options", options)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::pool_migrate`].
    pub async fn async_pool_migrate(
        &self,
        vm: &VmRef,
        host: &HostRef,
        options: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("pool_migrate")
            .arg("vm", vm)
            .arg("host", host)
            .arg("options", options)
            .invoke_async()
            .await
    }

    /// Set the number of VCPUs for a running VM.
    ///
    /// # Errors
    ///
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn set_vcpus_number_live(&self, vm: &VmRef, nvcpu: i64) -> Result<()> {
        self.call("set_VCPUs_number_live").arg("self", vm).arg("nvcpu", &nvcpu).invoke().await
    }

    /// Asynchronous form of [`Self::set_vcpus_number_live`].
    pub async fn async_set_vcpus_number_live(&self, vm: &VmRef, nvcpu: i64) -> Result<TaskRef> {
        self.call("set_VCPUs_number_live").arg("self", vm).arg("nvcpu", &nvcpu).invoke_async().await
    }

    /// Add the given key-value pair to VM.VCPUs_params, and apply that value on the running VM.
    pub async fn add_to_vcpus_params_live(&self, vm: &VmRef, key: &str, value: &str) -> Result<()> {
        self.call("add_to_VCPUs_params_live")
            .arg("self", vm)
            .arg("key", key)
            .arg("value", value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::add_to_vcpus_params_live`].
    pub async fn async_add_to_vcpus_params_live(
        &self,
        vm: &VmRef,
        key: &str,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("add_to_VCPUs_params_live")
            .arg("self", vm)
            .arg("key", key)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Computes the virtualization memory overhead of a VM.
    pub async fn compute_memory_overhead(&self, vm: &VmRef) -> Result<i64> {
        self.call("compute_memory_overhead").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::compute_memory_overhead`].
    pub async fn async_compute_memory_overhead(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("compute_memory_overhead").arg("vm", vm).invoke_async().await
    }

    /// Set the minimum and maximum amounts of physical memory the VM is allowed to use.
    pub async fn set_memory_dynamic_range(&self, vm: &VmRef, min: i64, max: i64) -> Result<()> {
        self.call("set_memory_dynamic_range")
            .arg("self", vm)
            .arg("min", &min)
            .arg("max", &max)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_memory_dynamic_range`].
    pub async fn async_set_memory_dynamic_range(
        &self,
        vm: &VmRef,
        min: i64,
        max: i64,
    ) -> Result<TaskRef> {
        self.call("set_memory_dynamic_range")
            .arg("self", vm)
            .arg("min", &min)
            .arg("max", &max)
            .invoke_async()
            .await
    }

    /// Set the static (ie boot-time) range of virtual memory that the VM is allowed to use.
    pub async fn set_memory_static_range(&self, vm: &VmRef, min: i64, max: i64) -> Result<()> {
        self.call("set_memory_static_range")
            .arg("self", vm)
            .arg("min", &min)
            .arg("max", &max)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_memory_static_range`].
    pub async fn async_set_memory_static_range(
        &self,
        vm: &VmRef,
        min: i64,
        max: i64,
    ) -> Result<TaskRef> {
        self.call("set_memory_static_range")
            .arg("self", vm)
            .arg("min", &min)
            .arg("max", &max)
            .invoke_async()
            .await
    }

    /// Set the memory limits of this VM.
    pub async fn set_memory_limits(
        &self,
        vm: &VmRef,
        static_min: i64,
        static_max: i64,
        dynamic_min: i64,
        dynamic_max: i64,
    ) -> Result<()> {
        self.call("set_memory_limits")
            .arg("self", vm)
            .arg("static_min", &static_min)
            .arg("static_max", &static_max)
            .arg("dynamic_min", &dynamic_min)
            .arg("dynamic_max", &dynamic_max)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_memory_limits`].
    pub async fn async_set_memory_limits(
        &self,
        vm: &VmRef,
        static_min: i64,
        static_max: i64,
        dynamic_min: i64,
        dynamic_max: i64,
    ) -> Result<TaskRef> {
        self.call("set_memory_limits")
            .arg("self", vm)
            .arg("static_min", &static_min)
            .arg("static_max", &static_max)
            .arg("dynamic_min", &dynamic_min)
            .arg("dynamic_max", &dynamic_max)
            .invoke_async()
            .await
    }

    /// Set the memory allocation of this VM. Sets all of memory_static_max, memory_dynamic_min, and memory_dynamic_max to the given value, and leaves memory_static_min untouched.
    pub async fn set_memory(&self, vm: &VmRef, value: i64) -> Result<()> {
        self.call("set_memory").arg("self", vm).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_memory`].
    pub async fn async_set_memory(&self, vm: &VmRef, value: i64) -> Result<TaskRef> {
        self.call("set_memory").arg("self", vm).arg("value", &value).invoke_async().await
    }

    /// Set the memory target for a running VM.
    pub async fn set_memory_target_live(&self, vm: &VmRef, target: i64) -> Result<()> {
        self.call("set_memory_target_live").arg("self", vm).arg("target", &target).invoke().await
    }

    /// Asynchronous form of [`Self::set_memory_target_live`].
    pub async fn async_set_memory_target_live(&self, vm: &VmRef, target: i64) -> Result<TaskRef> {
        self.call("set_memory_target_live")
            .arg("self", vm)
            .arg("target", &target)
            .invoke_async()
            .await
    }

    /// Wait for a running VM to reach its current memory target.
    pub async fn wait_memory_target_live(&self, vm: &VmRef) -> Result<()> {
        self.call("wait_memory_target_live").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::wait_memory_target_live`].
    pub async fn async_wait_memory_target_live(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("wait_memory_target_live").arg("self", vm).invoke_async().await
    }

    /// Return true if the VM is currently 'co-operative' i.e. is expected to reach a balloon target and actually has done.
    pub async fn get_cooperative(&self, vm: &VmRef) -> Result<bool> {
        self.call("get_cooperative").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::get_cooperative`].
    pub async fn async_get_cooperative(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("get_cooperative").arg("self", vm).invoke_async().await
    }

    /// Set the shadow memory multiplier on a running VM.
    pub async fn set_shadow_multiplier_live(&self, vm: &VmRef, multiplier: f64) -> Result<()> {
        self.call("set_shadow_multiplier_live")
            .arg("self", vm)
            .arg("multiplier", &multiplier)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_shadow_multiplier_live`].
    pub async fn async_set_shadow_multiplier_live(
        &self,
        vm: &VmRef,
        multiplier: f64,
    ) -> Result<TaskRef> {
        self.call("set_shadow_multiplier_live")
            .arg("self", vm)
            .arg("multiplier", &multiplier)
            .invoke_async()
            .await
    }

    /// Send the given key as a sysrq to this VM.  The key is specified as a single character (a String of length 1).  This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    pub async fn send_sysrq(&self, vm: &VmRef, key: &str) -> Result<()> {
        self.call("send_sysrq").arg("vm", vm).arg("key", key).invoke().await
    }

    /// Asynchronous form of [`Self::send_sysrq`].
    pub async fn async_send_sysrq(&self, vm: &VmRef, key: &str) -> Result<TaskRef> {
        self.call("send_sysrq").arg("vm", vm).arg("key", key).invoke_async().await
    }

    /// Send the named trigger to this VM.  This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    pub async fn send_trigger(&self, vm: &VmRef, trigger: &str) -> Result<()> {
        self.call("send_trigger").arg("vm", vm).arg("trigger", trigger).invoke().await
    }

    /// Asynchronous form of [`Self::send_trigger`].
    pub async fn async_send_trigger(&self, vm: &VmRef, trigger: &str) -> Result<TaskRef> {
        self.call("send_trigger").arg("vm", vm).arg("trigger", trigger).invoke_async().await
    }

    /// Returns the maximum amount of guest memory which will fit, together with overheads, in the supplied amount of physical memory. If 'exact' is true then an exact calculation is performed using the VM's current settings. If 'exact' is false then a more conservative approximation is used.
    pub async fn maximise_memory(&self, vm: &VmRef, total: i64, approximate: bool) -> Result<i64> {
        self.call("maximise_memory")
            .arg("self", vm)
            .arg("total", &total)
            .arg("approximate", &approximate)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::maximise_memory`].
    pub async fn async_maximise_memory(
        &self,
        vm: &VmRef,
        total: i64,
        approximate: bool,
    ) -> Result<TaskRef> {
        self.call("maximise_memory")
            .arg("self", vm)
            .arg("total", &total)
            .arg("approximate", &approximate)
            .invoke_async()
            .await
    }

    /// Migrate the VM to another host.  This can only be called when the specified VM is in the Running state.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn migrate_send(
        &self,
        vm: &VmRef,
        dest: &HashMap<String, String>,
        live: bool,
        vdi_map: &HashMap<VdiRef, SrRef>,
        vif_map: &HashMap<VifRef, NetworkRef>,
        options: &HashMap<String, String>,
        vgpu_map: &HashMap<VgpuRef, GpuGroupRef>,
    ) -> Result<VmRef> {
        self.call("migrate_send")
            .arg("vm", vm)
            .arg("dest", dest)
            .arg("live", &live)
            .arg("vdi_map", vdi_map)
            .arg("vif_map", vif_map)
            .arg("options", options)
            .arg("vgpu_map", vgpu_map)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::migrate_send`].
    pub async fn async_migrate_send(
        &self,
        vm: &VmRef,
        dest: &HashMap<String, String>,
        live: bool,
        vdi_map: &HashMap<VdiRef, SrRef>,
        vif_map: &HashMap<VifRef, NetworkRef>,
        options: &HashMap<String, String>,
        vgpu_map: &HashMap<VgpuRef, GpuGroupRef>,
    ) -> Result<TaskRef> {
        self.call("migrate_send")
            .arg("vm", vm)
            .arg("dest", dest)
            .arg("live", &live)
            .arg("vdi_map", vdi_map)
            .arg("vif_map", vif_map)
            .arg("options", options)
            .arg("vgpu_map", vgpu_map)
            .invoke_async()
            .await
    }

    /// Assert whether a VM can be migrated to the specified destination.
    ///
    /// # Errors
    ///
    /// - `LICENCE_RESTRICTION`: This operation is not allowed because your license lacks a needed feature. Please contact your support representative.
    pub async fn assert_can_migrate(
        &self,
        vm: &VmRef,
        dest: &HashMap<String, String>,
        live: bool,
        vdi_map: &HashMap<VdiRef, SrRef>,
        vif_map: &HashMap<VifRef, NetworkRef>,
        options: &HashMap<String, String>,
        vgpu_map: &HashMap<VgpuRef, GpuGroupRef>,
    ) -> Result<()> {
        self.call("assert_can_migrate")
            .arg("vm", vm)
            .arg("dest", dest)
            .arg("live", &live)
            .arg("vdi_map", vdi_map)
            .arg("vif_map", vif_map)
            .arg("options", options)
            .arg("vgpu_map", vgpu_map)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::assert_can_migrate`].
    pub async fn async_assert_can_migrate(
        &self,
        vm: &VmRef,
        dest: &HashMap<String, String>,
        live: bool,
        vdi_map: &HashMap<VdiRef, SrRef>,
        vif_map: &HashMap<VifRef, NetworkRef>,
        options: &HashMap<String, String>,
        vgpu_map: &HashMap<VgpuRef, GpuGroupRef>,
    ) -> Result<TaskRef> {
        self.call("assert_can_migrate")
            .arg("vm", vm)
            .arg("dest", dest)
            .arg("live", &live)
            .arg("vdi_map", vdi_map)
            .arg("vif_map", vif_map)
            .arg("options", options)
            .arg("vgpu_map", vgpu_map)
            .invoke_async()
            .await
    }

    /// Start recording the specified data source.
    pub async fn record_data_source(&self, vm: &VmRef, data_source: &str) -> Result<()> {
        self.call("record_data_source")
            .arg("self", vm)
            .arg("data_source", data_source)
            .invoke()
            .await
    }

    /// Query the latest value of the specified data source.
    pub async fn query_data_source(&self, vm: &VmRef, data_source: &str) -> Result<f64> {
        self.call("query_data_source")
            .arg("self", vm)
            .arg("data_source", data_source)
            .invoke()
            .await
    }

    /// Forget the recorded statistics related to the specified data source.
    pub async fn forget_data_source_archives(&self, vm: &VmRef, data_source: &str) -> Result<()> {
        self.call("forget_data_source_archives")
            .arg("self", vm)
            .arg("data_source", data_source)
            .invoke()
            .await
    }

    /// Check to see whether this operation is acceptable in the current state of the system, raising an error if the operation is invalid for some reason.
    pub async fn assert_operation_valid(&self, vm: &VmRef, op: VmOperations) -> Result<()> {
        self.call("assert_operation_valid").arg("self", vm).arg("op", &op).invoke().await
    }

    /// Asynchronous form of [`Self::assert_operation_valid`].
    pub async fn async_assert_operation_valid(
        &self,
        vm: &VmRef,
        op: VmOperations,
    ) -> Result<TaskRef> {
        self.call("assert_operation_valid").arg("self", vm).arg("op", &op).invoke_async().await
    }

    /// Recomputes the list of acceptable operations.
    pub async fn update_allowed_operations(&self, vm: &VmRef) -> Result<()> {
        self.call("update_allowed_operations").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::update_allowed_operations`].
    pub async fn async_update_allowed_operations(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("update_allowed_operations").arg("self", vm).invoke_async().await
    }

    /// Returns a list of the allowed values that a VBD device field can take.
    pub async fn get_allowed_vbd_devices(&self, vm: &VmRef) -> Result<Vec<String>> {
        self.call("get_allowed_VBD_devices").arg("vm", vm).invoke().await
    }

    /// Returns a list of the allowed values that a VIF device field can take.
    pub async fn get_allowed_vif_devices(&self, vm: &VmRef) -> Result<Vec<String>> {
        self.call("get_allowed_VIF_devices").arg("vm", vm).invoke().await
    }

    /// Return the list of hosts on which this VM may run.
    pub async fn get_possible_hosts(&self, vm: &VmRef) -> Result<Vec<HostRef>> {
        self.call("get_possible_hosts").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::get_possible_hosts`].
    pub async fn async_get_possible_hosts(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("get_possible_hosts").arg("vm", vm).invoke_async().await
    }

    /// Returns an error if the VM could not boot on this host for some reason.
    ///
    /// # Errors
    ///
    /// - `HOST_NOT_ENOUGH_FREE_MEMORY`: Not enough server memory is available to perform this operation.
    /// - `HOST_NOT_ENOUGH_PCPUS`: The host does not have enough pCPUs to run the VM. It needs at least as many as the VM has vCPUs.
    /// - `NETWORK_SRIOV_INSUFFICIENT_CAPACITY`: There is insufficient capacity for VF reservation.
    /// - `HOST_NOT_LIVE`: This operation cannot be completed as the server is not live.
    /// - `HOST_DISABLED`: The specified server is disabled.
    /// - `HOST_CANNOT_ATTACH_NETWORK`: Server cannot attach network (in the case of NIC bonding, this may be because attaching the network on this server would require other networks - that are currently active - to be taken down).
    /// - `VM_HVM_REQUIRED`: HVM is required for this operation.
    /// - `VM_REQUIRES_GPU`: You attempted to run a VM on a host which doesn't have a pGPU available in the GPU group needed by the VM. The VM has a vGPU attached to this GPU group.
    /// - `VM_REQUIRES_IOMMU`: You attempted to run a VM on a host which doesn't have I/O virtualization (IOMMU/VT-d) enabled, which is needed by the VM.
    /// - `VM_REQUIRES_NETWORK`: You attempted to run a VM on a host which doesn't have a PIF on a Network needed by the VM. The VM has at least one VIF attached to the Network.
    /// - `VM_REQUIRES_SR`: You attempted to run a VM on a host which doesn't have access to an SR needed by the VM. The VM has at least one VBD attached to a VDI in the SR.
    /// - `VM_REQUIRES_VGPU`: You attempted to run a VM on a host on which the vGPU required by the VM cannot be allocated on any pGPUs in the GPU_group needed by the VM.
    /// - `VM_HOST_INCOMPATIBLE_VERSION`: This VM operation cannot be performed on an older-versioned host during an upgrade.
    /// - `VM_HOST_INCOMPATIBLE_VIRTUAL_HARDWARE_PLATFORM_VERSION`: You attempted to run a VM on a host that cannot provide the VM's required Virtual Hardware Platform version.
    /// - `INVALID_VALUE`: The value given is invalid.
    /// - `MEMORY_CONSTRAINT_VIOLATION`: The dynamic memory range does not satisfy the following constraint.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VALUE_NOT_SUPPORTED`: You attempted to set a value that is not supported by this implementation. The fully-qualified field name and the value that you tried to set are returned. Also returned is a developer-only diagnostic reason.
    /// - `VM_INCOMPATIBLE_WITH_THIS_HOST`: The VM is incompatible with the CPU features of this host.
    pub async fn assert_can_boot_here(&self, vm: &VmRef, host: &HostRef) -> Result<()> {
        self.call("assert_can_boot_here").arg("self", vm).arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::assert_can_boot_here`].
    pub async fn async_assert_can_boot_here(&self, vm: &VmRef, host: &HostRef) -> Result<TaskRef> {
        self.call("assert_can_boot_here").arg("self", vm).arg("host", host).invoke_async().await
    }

    /// Create a placeholder for a named binary blob of data that is associated with this VM.
    pub async fn create_new_blob(
        &self,
        vm: &VmRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<BlobRef> {
        self.call("create_new_blob")
            .arg("vm", vm)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_new_blob`].
    pub async fn async_create_new_blob(
        &self,
        vm: &VmRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<TaskRef> {
        self.call("create_new_blob")
            .arg("vm", vm)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke_async()
            .await
    }

    /// Returns an error if the VM is not considered agile e.g. because it is tied to a resource local to a host.
    pub async fn assert_agile(&self, vm: &VmRef) -> Result<()> {
        self.call("assert_agile").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::assert_agile`].
    pub async fn async_assert_agile(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("assert_agile").arg("self", vm).invoke_async().await
    }

    /// Returns mapping of hosts to ratings, indicating the suitability of starting the VM at that location according to wlb. Rating is replaced with an error if the VM cannot boot there.
    pub async fn retrieve_wlb_recommendations(
        &self,
        vm: &VmRef,
    ) -> Result<HashMap<HostRef, Vec<String>>> {
        self.call("retrieve_wlb_recommendations").arg("vm", vm).invoke().await
    }

    /// Asynchronous form of [`Self::retrieve_wlb_recommendations`].
    pub async fn async_retrieve_wlb_recommendations(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("retrieve_wlb_recommendations").arg("vm", vm).invoke_async().await
    }

    /// Set custom BIOS strings to this VM. VM will be given a default set of BIOS strings, only some of which can be overridden by the supplied values. Allowed keys are: 'bios-vendor', 'bios-version', 'system-manufacturer', 'system-product-name', 'system-version', 'system-serial-number', 'enclosure-asset-tag', 'baseboard-manufacturer', 'baseboard-product-name', 'baseboard-version', 'baseboard-serial-number', 'baseboard-asset-tag', 'baseboard-location-in-chassis', 'enclosure-asset-tag'.
    ///
    /// # Errors
    ///
    /// - `VM_BIOS_STRINGS_ALREADY_SET`: The BIOS strings for this VM have already been set and cannot be changed.
    /// - `INVALID_VALUE`: The value given is invalid.
    pub async fn set_bios_strings(
        &self,
        vm: &VmRef,
        value: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("set_bios_strings").arg("self", vm).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_bios_strings`].
    pub async fn async_set_bios_strings(
        &self,
        vm: &VmRef,
        value: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("set_bios_strings").arg("self", vm).arg("value", value).invoke_async().await
    }

    /// Copy the BIOS strings from the given host to this VM.
    pub async fn copy_bios_strings(&self, vm: &VmRef, host: &HostRef) -> Result<()> {
        self.call("copy_bios_strings").arg("vm", vm).arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::copy_bios_strings`].
    pub async fn async_copy_bios_strings(&self, vm: &VmRef, host: &HostRef) -> Result<TaskRef> {
        self.call("copy_bios_strings").arg("vm", vm).arg("host", host).invoke_async().await
    }

    /// Set this VM's start delay in seconds.
    pub async fn set_start_delay(&self, vm: &VmRef, value: i64) -> Result<()> {
        self.call("set_start_delay").arg("self", vm).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_start_delay`].
    pub async fn async_set_start_delay(&self, vm: &VmRef, value: i64) -> Result<TaskRef> {
        self.call("set_start_delay").arg("self", vm).arg("value", &value).invoke_async().await
    }

    /// Set this VM's shutdown delay in seconds.
    pub async fn set_shutdown_delay(&self, vm: &VmRef, value: i64) -> Result<()> {
        self.call("set_shutdown_delay").arg("self", vm).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_shutdown_delay`].
    pub async fn async_set_shutdown_delay(&self, vm: &VmRef, value: i64) -> Result<TaskRef> {
        self.call("set_shutdown_delay").arg("self", vm).arg("value", &value).invoke_async().await
    }

    /// Set this VM's boot order.
    pub async fn set_order(&self, vm: &VmRef, value: i64) -> Result<()> {
        self.call("set_order").arg("self", vm).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_order`].
    pub async fn async_set_order(&self, vm: &VmRef, value: i64) -> Result<TaskRef> {
        self.call("set_order").arg("self", vm).arg("value", &value).invoke_async().await
    }

    /// Set this VM's suspend VDI, which must be indentical to its current one.
    pub async fn set_suspend_vdi(&self, vm: &VmRef, value: &VdiRef) -> Result<()> {
        self.call("set_suspend_VDI").arg("self", vm).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_suspend_vdi`].
    pub async fn async_set_suspend_vdi(&self, vm: &VmRef, value: &VdiRef) -> Result<TaskRef> {
        self.call("set_suspend_VDI").arg("self", vm).arg("value", value).invoke_async().await
    }

    /// Assert whether all SRs required to recover this VM are available.
    ///
    /// # Errors
    ///
    /// - `VM_IS_PART_OF_AN_APPLIANCE`: This operation is not allowed as the VM is part of an appliance.
    /// - `VM_REQUIRES_SR`: You attempted to run a VM on a host which doesn't have access to an SR needed by the VM. The VM has at least one VBD attached to a VDI in the SR.
    pub async fn assert_can_be_recovered(&self, vm: &VmRef, session_to: &SessionRef) -> Result<()> {
        self.call("assert_can_be_recovered")
            .arg("self", vm)
            .arg("session_to", session_to)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::assert_can_be_recovered`].
    pub async fn async_assert_can_be_recovered(
        &self,
        vm: &VmRef,
        session_to: &SessionRef,
    ) -> Result<TaskRef> {
        self.call("assert_can_be_recovered")
            .arg("self", vm)
            .arg("session_to", session_to)
            .invoke_async()
            .await
    }

    /// List all the SR's that are required for the VM to be recovered.
    pub async fn get_srs_required_for_recovery(
        &self,
        vm: &VmRef,
        session_to: &SessionRef,
    ) -> Result<Vec<SrRef>> {
        self.call("get_SRs_required_for_recovery")
            .arg("self", vm)
            .arg("session_to", session_to)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::get_srs_required_for_recovery`].
    pub async fn async_get_srs_required_for_recovery(
        &self,
        vm: &VmRef,
        session_to: &SessionRef,
    ) -> Result<TaskRef> {
        self.call("get_SRs_required_for_recovery")
            .arg("self", vm)
            .arg("session_to", session_to)
            .invoke_async()
            .await
    }

    /// Recover the VM.
    pub async fn recover(&self, vm: &VmRef, session_to: &SessionRef, force: bool) -> Result<()> {
        self.call("recover")
            .arg("self", vm)
            .arg("session_to", session_to)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::recover`].
    pub async fn async_recover(
        &self,
        vm: &VmRef,
        session_to: &SessionRef,
        force: bool,
    ) -> Result<TaskRef> {
        self.call("recover")
            .arg("self", vm)
            .arg("session_to", session_to)
            .arg("force", &force)
            .invoke_async()
            .await
    }

    /// Import using a conversion service.
    pub async fn import_convert(
        &self,
        type_: &str,
        username: &str,
        password: &str,
        sr: &SrRef,
        remote_config: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("import_convert")
            .arg("type", type_)
            .arg("username", username)
            .arg("password", password)
            .arg("sr", sr)
            .arg("remote_config", remote_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::import_convert`].
    pub async fn async_import_convert(
        &self,
        type_: &str,
        username: &str,
        password: &str,
        sr: &SrRef,
        remote_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("import_convert")
            .arg("type", type_)
            .arg("username", username)
            .arg("password", password)
            .arg("sr", sr)
            .arg("remote_config", remote_config)
            .invoke_async()
            .await
    }

    /// Assign this VM to an appliance.
    pub async fn set_appliance(&self, vm: &VmRef, value: &VmApplianceRef) -> Result<()> {
        self.call("set_appliance").arg("self", vm).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_appliance`].
    pub async fn async_set_appliance(&self, vm: &VmRef, value: &VmApplianceRef) -> Result<TaskRef> {
        self.call("set_appliance").arg("self", vm).arg("value", value).invoke_async().await
    }

    /// Query the system services advertised by this VM and register them. This can only be applied to a system domain.
    pub async fn query_services(&self, vm: &VmRef) -> Result<HashMap<String, String>> {
        self.call("query_services").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::query_services`].
    pub async fn async_query_services(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("query_services").arg("self", vm).invoke_async().await
    }

    /// Call an API plugin on this vm.
    pub async fn call_plugin(
        &self,
        vm: &VmRef,
        plugin: &str,
        fn_: &str,
        args: &HashMap<String, String>,
    ) -> Result<String> {
        self.call("call_plugin")
            .arg("vm", vm)
            .arg("plugin", plugin)
            .arg("fn", fn_)
            .arg("args", args)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::call_plugin`].
    pub async fn async_call_plugin(
        &self,
        vm: &VmRef,
        plugin: &str,
        fn_: &str,
        args: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("call_plugin")
            .arg("vm", vm)
            .arg("plugin", plugin)
            .arg("fn", fn_)
            .arg("args", args)
            .invoke_async()
            .await
    }

    /// Controls whether, when the VM starts in HVM mode, its virtual hardware will include the emulated PCI device for which drivers may be available through Windows Update. Usually this should never be changed on a VM on which Windows has been installed: changing it on such a VM is likely to lead to a crash on next start.
    pub async fn set_has_vendor_device(&self, vm: &VmRef, value: bool) -> Result<()> {
        self.call("set_has_vendor_device").arg("self", vm).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_has_vendor_device`].
    pub async fn async_set_has_vendor_device(&self, vm: &VmRef, value: bool) -> Result<TaskRef> {
        self.call("set_has_vendor_device").arg("self", vm).arg("value", &value).invoke_async().await
    }

    /// Import an XVA from a URI.
    pub async fn import(
        &self,
        url: &str,
        sr: &SrRef,
        full_restore: bool,
        force: bool,
    ) -> Result<Vec<VmRef>> {
        self.call("import")
            .arg("url", url)
            .arg("sr", sr)
            .arg("full_restore", &full_restore)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::import`].
    pub async fn async_import(
        &self,
        url: &str,
        sr: &SrRef,
        full_restore: bool,
        force: bool,
    ) -> Result<TaskRef> {
        self.call("import")
            .arg("url", url)
            .arg("sr", sr)
            .arg("full_restore", &full_restore)
            .arg("force", &force)
            .invoke_async()
            .await
    }

    /// Sets the actions_after_crash parameter.
    pub async fn set_actions_after_crash(&self, vm: &VmRef, value: OnCrashBehaviour) -> Result<()> {
        self.call("set_actions_after_crash").arg("self", vm).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_actions_after_crash`].
    pub async fn async_set_actions_after_crash(
        &self,
        vm: &VmRef,
        value: OnCrashBehaviour,
    ) -> Result<TaskRef> {
        self.call("set_actions_after_crash")
            .arg("self", vm)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Restart device models of the VM.
    ///
    /// # Errors
    ///
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `VM_IS_TEMPLATE`: The operation attempted is not valid for a template VM.
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    /// - `VM_BAD_POWER_STATE`: You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.
    pub async fn restart_device_models(&self, vm: &VmRef) -> Result<()> {
        self.call("restart_device_models").arg("self", vm).invoke().await
    }

    /// Asynchronous form of [`Self::restart_device_models`].
    pub async fn async_restart_device_models(&self, vm: &VmRef) -> Result<TaskRef> {
        self.call("restart_device_models").arg("self", vm).invoke_async().await
    }
}
