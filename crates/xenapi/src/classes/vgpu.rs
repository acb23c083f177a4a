//! `VGPU`: A virtual GPU (vGPU)

use std::collections::HashMap;

use xenapi_core::version::{ApiVersion, Overload, OverloadTable};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{GpuGroupRef, PciRef, PgpuRef, TaskRef, VgpuRef, VgpuTypeRef, VmRef};
use crate::Result;

/// Marker for the `VGPU` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vgpu;

impl XenClass for Vgpu {
    const NAME: &'static str = "VGPU";
    type Ref = VgpuRef;
    type Record = VgpuRecord;
}

/// Signatures of `VGPU.create`, newest first.
pub const CREATE_SIGNATURES: OverloadTable = OverloadTable::new(
    "VGPU.create",
    &[
        Overload::new(ApiVersion::V2_0, 6),
        Overload::new(ApiVersion::V1_9, 5),
    ],
);

xen_record! {
    /// A virtual GPU (vGPU)
    VgpuRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// VM that owns the vGPU.
        vm: VmRef => "VM",
        /// GPU group used by the vGPU.
        gpu_group: GpuGroupRef => "GPU_group",
        /// Order in which the devices are plugged into the VM.
        device: String => "device",
        /// Reflects whether the virtual device is currently connected to a physical device.
        currently_attached: bool => "currently_attached",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Preset type for this VGPU.
        type_: VgpuTypeRef => "type",
        /// The PGPU on which this VGPU is running.
        resident_on: PgpuRef => "resident_on",
        /// The PGPU on which this VGPU is scheduled to run.
        scheduled_to_be_resident_on: PgpuRef => "scheduled_to_be_resident_on",
        /// VGPU metadata to determine whether a VGPU can migrate between two PGPUs.
        compatibility_metadata: HashMap<String, String> => "compatibility_metadata",
        /// Extra arguments for vGPU and passed to demu.
        extra_args: String => "extra_args",
        /// Device passed trough to VM, either as full device or SR-IOV virtual function.
        pci: PciRef => "PCI",
    }
}

getters! {
    Vgpu, VgpuRef {
        /// Get the uuid field of the given VGPU.
        ///
        /// Since `boston`.
        get_uuid => "get_uuid": String,
        /// Get the VM field of the given VGPU.
        ///
        /// Since `boston`.
        get_vm => "get_VM": VmRef,
        /// Get the GPU_group field of the given VGPU.
        ///
        /// Since `boston`.
        get_gpu_group => "get_GPU_group": GpuGroupRef,
        /// Get the device field of the given VGPU.
        ///
        /// Since `boston`.
        get_device => "get_device": String,
        /// Get the currently_attached field of the given VGPU.
        ///
        /// Since `boston`.
        get_currently_attached => "get_currently_attached": bool,
        /// Get the other_config field of the given VGPU.
        ///
        /// Since `boston`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the type field of the given VGPU.
        ///
        /// Since `boston`.
        get_type => "get_type": VgpuTypeRef,
        /// Get the resident_on field of the given VGPU.
        ///
        /// Since `boston`.
        get_resident_on => "get_resident_on": PgpuRef,
        /// Get the scheduled_to_be_resident_on field of the given VGPU.
        ///
        /// Since `boston`.
        get_scheduled_to_be_resident_on => "get_scheduled_to_be_resident_on": PgpuRef,
        /// Get the compatibility_metadata field of the given VGPU.
        ///
        /// Since `boston`.
        get_compatibility_metadata => "get_compatibility_metadata": HashMap<String, String>,
        /// Get the extra_args field of the given VGPU.
        ///
        /// Since `boston`.
        get_extra_args => "get_extra_args": String,
        /// Get the PCI field of the given VGPU.
        ///
        /// Since `boston`.
        get_pci => "get_PCI": PciRef,
    }
}

setters! {
    Vgpu, VgpuRef {
        /// Set the other_config field of the given VGPU.
        ///
        /// Since `boston`.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the extra_args field of the given VGPU.
        ///
        /// Since `quebec`.
        set_extra_args => "set_extra_args": &str,
    }
}

map_mutators! {
    Vgpu, VgpuRef {
        /// Add the given key-value pair to the other_config field of the given VGPU.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Vgpu> {
    /// Get a record containing the current state of the given VGPU.
    ///
    /// Since `boston`.
    pub async fn get_record(&self, vgpu: &VgpuRef) -> Result<VgpuRecord> {
        self.call("get_record").arg("self", vgpu).invoke().await
    }

    /// Get a reference to the VGPU instance with the specified UUID.
    ///
    /// Since `boston`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VgpuRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VGPUs known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all(&self) -> Result<Vec<VgpuRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VGPU references to VGPU records for all VGPUs known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all_records(&self) -> Result<HashMap<VgpuRef, VgpuRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Call `VGPU.create`.
    ///
    /// Since `vgpu-tech-preview`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn create(
        &self,
        vm: &VmRef,
        gpu_group: &GpuGroupRef,
        device: &str,
        other_config: &HashMap<String, String>,
        type_: &VgpuTypeRef,
    ) -> Result<VgpuRef> {
        self.call("create")
            .arg("VM", vm)
            .arg("GPU_group", gpu_group)
            .arg("device", device)
            .arg("other_config", other_config)
            .arg("type", type_)
            .select(&CREATE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        vm: &VmRef,
        gpu_group: &GpuGroupRef,
        device: &str,
        other_config: &HashMap<String, String>,
        type_: &VgpuTypeRef,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("VM", vm)
            .arg("GPU_group", gpu_group)
            .arg("device", device)
            .arg("other_config", other_config)
            .arg("type", type_)
            .select(&CREATE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Call `VGPU.destroy`.
    ///
    /// Since `boston`.
    pub async fn destroy(&self, vgpu: &VgpuRef) -> Result<()> {
        self.call("destroy").arg("self", vgpu).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, vgpu: &VgpuRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", vgpu).invoke_async().await
    }
}
