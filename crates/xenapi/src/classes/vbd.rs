//! `VBD`: A virtual block device.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{VbdMode, VbdOperations, VbdType};
use crate::refs::{TaskRef, VbdMetricsRef, VbdRef, VdiRef, VmRef};
use crate::Result;

/// Marker for the `VBD` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vbd;

impl XenClass for Vbd {
    const NAME: &'static str = "VBD";
    type Ref = VbdRef;
    type Record = VbdRecord;
}

xen_record! {
    /// A virtual block device.
    VbdRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<VbdOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, VbdOperations> => "current_operations",
        /// The virtual machine.
        vm: VmRef => "VM",
        /// The virtual disk.
        vdi: VdiRef => "VDI",
        /// Device seen by the guest e.g. hda1.
        device: String => "device",
        /// User-friendly device name e.g. 0,1,2,etc.
        userdevice: String => "userdevice",
        /// True if this VBD is bootable.
        bootable: bool => "bootable",
        /// The mode the VBD should be mounted with.
        mode: VbdMode => "mode",
        /// How the VBD will appear to the guest (e.g. disk or CD)
        type_: VbdType => "type",
        /// True if this VBD will support hot-unplug.
        unpluggable: bool => "unpluggable",
        /// True if a storage level lock was acquired.
        storage_lock: bool => "storage_lock",
        /// If true this represents an empty drive.
        empty: bool => "empty",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Is the device currently attached (erased on reboot)
        currently_attached: bool => "currently_attached",
        /// Error/success code associated with last attach-operation (erased on reboot)
        status_code: i64 => "status_code",
        /// Error/success information associated with last attach-operation status (erased on reboot)
        status_detail: String => "status_detail",
        /// Device runtime properties.
        runtime_properties: HashMap<String, String> => "runtime_properties",
        /// QoS algorithm to use.
        qos_algorithm_type: String => "qos_algorithm_type",
        /// Parameters for chosen QoS algorithm.
        qos_algorithm_params: HashMap<String, String> => "qos_algorithm_params",
        /// Supported QoS algorithms for this VBD.
        qos_supported_algorithms: Vec<String> => "qos_supported_algorithms",
        /// Metrics associated with this VBD.
        metrics: VbdMetricsRef => "metrics",
    }
}

xen_record! {
    /// Fields accepted by `VBD.create`; `None` leaves the server default.
    VbdCreateArgs {
        /// The virtual machine.
        vm: VmRef => "VM",
        /// The virtual disk.
        vdi: VdiRef => "VDI",
        /// Device seen by the guest e.g. hda1.
        device: Option<String> => "device",
        /// User-friendly device name e.g. 0,1,2,etc.
        userdevice: String => "userdevice",
        /// True if this VBD is bootable.
        bootable: bool => "bootable",
        /// The mode the VBD should be mounted with.
        mode: VbdMode => "mode",
        /// How the VBD will appear to the guest (e.g. disk or CD)
        type_: VbdType => "type",
        /// True if this VBD will support hot-unplug.
        unpluggable: Option<bool> => "unpluggable",
        /// If true this represents an empty drive.
        empty: bool => "empty",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Is the device currently attached (erased on reboot)
        currently_attached: Option<bool> => "currently_attached",
        /// QoS algorithm to use.
        qos_algorithm_type: String => "qos_algorithm_type",
        /// Parameters for chosen QoS algorithm.
        qos_algorithm_params: HashMap<String, String> => "qos_algorithm_params",
    }
}

getters! {
    Vbd, VbdRef {
        /// Get the uuid field of the given VBD.
        get_uuid => "get_uuid": String,
        /// Get the allowed_operations field of the given VBD.
        get_allowed_operations => "get_allowed_operations": Vec<VbdOperations>,
        /// Get the current_operations field of the given VBD.
        get_current_operations => "get_current_operations": HashMap<String, VbdOperations>,
        /// Get the VM field of the given VBD.
        get_vm => "get_VM": VmRef,
        /// Get the VDI field of the given VBD.
        get_vdi => "get_VDI": VdiRef,
        /// Get the device field of the given VBD.
        get_device => "get_device": String,
        /// Get the userdevice field of the given VBD.
        get_userdevice => "get_userdevice": String,
        /// Get the bootable field of the given VBD.
        get_bootable => "get_bootable": bool,
        /// Get the mode field of the given VBD.
        get_mode => "get_mode": VbdMode,
        /// Get the type field of the given VBD.
        get_type => "get_type": VbdType,
        /// Get the unpluggable field of the given VBD.
        get_unpluggable => "get_unpluggable": bool,
        /// Get the storage_lock field of the given VBD.
        get_storage_lock => "get_storage_lock": bool,
        /// Get the empty field of the given VBD.
        get_empty => "get_empty": bool,
        /// Get the other_config field of the given VBD.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the currently_attached field of the given VBD.
        get_currently_attached => "get_currently_attached": bool,
        /// Get the status_code field of the given VBD.
        get_status_code => "get_status_code": i64,
        /// Get the status_detail field of the given VBD.
        get_status_detail => "get_status_detail": String,
        /// Get the runtime_properties field of the given VBD.
        get_runtime_properties => "get_runtime_properties": HashMap<String, String>,
        /// Get the qos/algorithm_type field of the given VBD.
        get_qos_algorithm_type => "get_qos_algorithm_type": String,
        /// Get the qos/algorithm_params field of the given VBD.
        get_qos_algorithm_params => "get_qos_algorithm_params": HashMap<String, String>,
        /// Get the qos/supported_algorithms field of the given VBD.
        get_qos_supported_algorithms => "get_qos_supported_algorithms": Vec<String>,
        /// Get the metrics field of the given VBD.
        get_metrics => "get_metrics": VbdMetricsRef,
    }
}

setters! {
    Vbd, VbdRef {
        /// Set the userdevice field of the given VBD.
        set_userdevice => "set_userdevice": &str,
        /// Set the bootable field of the given VBD.
        set_bootable => "set_bootable": bool,
        /// Set the type field of the given VBD.
        set_type => "set_type": VbdType,
        /// Set the unpluggable field of the given VBD.
        ///
        /// Since `miami`.
        set_unpluggable => "set_unpluggable": bool,
        /// Set the other_config field of the given VBD.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the qos/algorithm_type field of the given VBD.
        set_qos_algorithm_type => "set_qos_algorithm_type": &str,
        /// Set the qos/algorithm_params field of the given VBD.
        set_qos_algorithm_params => "set_qos_algorithm_params": &HashMap<String, String>,
    }
}

map_mutators! {
    Vbd, VbdRef {
        /// Add the given key-value pair to the other_config field of the given VBD.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
        /// Add the given key-value pair to the qos/algorithm_params field of the given VBD.
        add_to_qos_algorithm_params, remove_from_qos_algorithm_params => "qos_algorithm_params": &str => &str,
    }
}

impl ClassApi<'_, Vbd> {
    /// Get a record containing the current state of the given VBD.
    pub async fn get_record(&self, vbd: &VbdRef) -> Result<VbdRecord> {
        self.call("get_record").arg("self", vbd).invoke().await
    }

    /// Get a reference to the VBD instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VbdRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VBDs known to the system.
    pub async fn get_all(&self) -> Result<Vec<VbdRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VBD references to VBD records for all VBDs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VbdRef, VbdRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new VBD instance, and return its handle.
    pub async fn create(&self, args: &VbdCreateArgs) -> Result<VbdRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &VbdCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified VBD instance.
    pub async fn destroy(&self, vbd: &VbdRef) -> Result<()> {
        self.call("destroy").arg("self", vbd).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, vbd: &VbdRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", vbd).invoke_async().await
    }

    /// Remove the media from the device and leave it empty.
    ///
    /// # Errors
    ///
    /// - `VBD_NOT_REMOVABLE_MEDIA`: Media could not be ejected because it is not removable.
    /// - `VBD_IS_EMPTY`: Operation could not be performed because the drive is empty.
    pub async fn eject(&self, vbd: &VbdRef) -> Result<()> {
        self.call("eject").arg("vbd", vbd).invoke().await
    }

    /// Asynchronous form of [`Self::eject`].
    pub async fn async_eject(&self, vbd: &VbdRef) -> Result<TaskRef> {
        self.call("eject").arg("vbd", vbd).invoke_async().await
    }

    /// Insert new media into the device.
    ///
    /// # Errors
    ///
    /// - `VBD_NOT_REMOVABLE_MEDIA`: Media could not be ejected because it is not removable.
    /// - `VBD_NOT_EMPTY`: Operation could not be performed because the drive is not empty.
    pub async fn insert(&self, vbd: &VbdRef, vdi: &VdiRef) -> Result<()> {
        self.call("insert").arg("vbd", vbd).arg("vdi", vdi).invoke().await
    }

    /// Asynchronous form of [`Self::insert`].
    pub async fn async_insert(&self, vbd: &VbdRef, vdi: &VdiRef) -> Result<TaskRef> {
        self.call("insert").arg("vbd", vbd).arg("vdi", vdi).invoke_async().await
    }

    /// Hotplug the specified VBD, dynamically attaching it to the running VM.
    pub async fn plug(&self, vbd: &VbdRef) -> Result<()> {
        self.call("plug").arg("self", vbd).invoke().await
    }

    /// Asynchronous form of [`Self::plug`].
    pub async fn async_plug(&self, vbd: &VbdRef) -> Result<TaskRef> {
        self.call("plug").arg("self", vbd).invoke_async().await
    }

    /// Hot-unplug the specified VBD, dynamically unattaching it from the running VM.
    ///
    /// # Errors
    ///
    /// - `DEVICE_DETACH_REJECTED`: The VM rejected the attempt to detach the device.
    /// - `DEVICE_ALREADY_DETACHED`: The device is not currently attached.
    pub async fn unplug(&self, vbd: &VbdRef) -> Result<()> {
        self.call("unplug").arg("self", vbd).invoke().await
    }

    /// Asynchronous form of [`Self::unplug`].
    pub async fn async_unplug(&self, vbd: &VbdRef) -> Result<TaskRef> {
        self.call("unplug").arg("self", vbd).invoke_async().await
    }

    /// Forcibly unplug the specified VBD.
    pub async fn unplug_force(&self, vbd: &VbdRef) -> Result<()> {
        self.call("unplug_force").arg("self", vbd).invoke().await
    }

    /// Asynchronous form of [`Self::unplug_force`].
    pub async fn async_unplug_force(&self, vbd: &VbdRef) -> Result<TaskRef> {
        self.call("unplug_force").arg("self", vbd).invoke_async().await
    }

    /// Throws an error if this VBD could not be attached to this VM if the VM were running. Intended for debugging.
    pub async fn assert_attachable(&self, vbd: &VbdRef) -> Result<()> {
        self.call("assert_attachable").arg("self", vbd).invoke().await
    }

    /// Asynchronous form of [`Self::assert_attachable`].
    pub async fn async_assert_attachable(&self, vbd: &VbdRef) -> Result<TaskRef> {
        self.call("assert_attachable").arg("self", vbd).invoke_async().await
    }

    /// Sets the mode of the VBD. The power_state of the VM must be halted.
    pub async fn set_mode(&self, vbd: &VbdRef, value: VbdMode) -> Result<()> {
        self.call("set_mode").arg("self", vbd).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_mode`].
    pub async fn async_set_mode(&self, vbd: &VbdRef, value: VbdMode) -> Result<TaskRef> {
        self.call("set_mode").arg("self", vbd).arg("value", &value).invoke_async().await
    }
}
