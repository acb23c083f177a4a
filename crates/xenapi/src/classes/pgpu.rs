//! `PGPU`: A physical GPU (pGPU)

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::PgpuDom0Access;
use crate::refs::{GpuGroupRef, HostRef, PciRef, PgpuRef, TaskRef, VgpuRef, VgpuTypeRef};
use crate::Result;

/// Marker for the `PGPU` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pgpu;

impl XenClass for Pgpu {
    const NAME: &'static str = "PGPU";
    type Ref = PgpuRef;
    type Record = PgpuRecord;
}

xen_record! {
    /// A physical GPU (pGPU)
    PgpuRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Link to underlying PCI device.
        pci: PciRef => "PCI",
        /// GPU group the pGPU is contained in.
        gpu_group: GpuGroupRef => "GPU_group",
        /// Host that owns the GPU.
        host: HostRef => "host",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// List of VGPU types supported by the underlying hardware.
        supported_vgpu_types: Vec<VgpuTypeRef> => "supported_VGPU_types",
        /// List of VGPU types which have been enabled for this PGPU.
        enabled_vgpu_types: Vec<VgpuTypeRef> => "enabled_VGPU_types",
        /// List of VGPUs running on this PGPU.
        resident_vgpus: Vec<VgpuRef> => "resident_VGPUs",
        /// A map relating each VGPU type supported on this GPU to the maximum number of VGPUs of that type which can run simultaneously on this GPU.
        supported_vgpu_max_capacities: HashMap<VgpuTypeRef, i64> => "supported_VGPU_max_capacities",
        /// The accessibility of this device from dom0.
        dom0_access: PgpuDom0Access => "dom0_access",
        /// Is this device the system display device.
        is_system_display_device: bool => "is_system_display_device",
        /// PGPU metadata to determine whether a VGPU can migrate between two PGPUs.
        compatibility_metadata: HashMap<String, String> => "compatibility_metadata",
    }
}

getters! {
    Pgpu, PgpuRef {
        /// Get the uuid field of the given PGPU.
        ///
        /// Since `boston`.
        get_uuid => "get_uuid": String,
        /// Get the PCI field of the given PGPU.
        ///
        /// Since `boston`.
        get_pci => "get_PCI": PciRef,
        /// Get the GPU_group field of the given PGPU.
        ///
        /// Since `boston`.
        get_gpu_group => "get_GPU_group": GpuGroupRef,
        /// Get the host field of the given PGPU.
        ///
        /// Since `boston`.
        get_host => "get_host": HostRef,
        /// Get the other_config field of the given PGPU.
        ///
        /// Since `boston`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the supported_VGPU_types field of the given PGPU.
        ///
        /// Since `boston`.
        get_supported_vgpu_types => "get_supported_VGPU_types": Vec<VgpuTypeRef>,
        /// Get the enabled_VGPU_types field of the given PGPU.
        ///
        /// Since `boston`.
        get_enabled_vgpu_types => "get_enabled_VGPU_types": Vec<VgpuTypeRef>,
        /// Get the resident_VGPUs field of the given PGPU.
        ///
        /// Since `boston`.
        get_resident_vgpus => "get_resident_VGPUs": Vec<VgpuRef>,
        /// Get the supported_VGPU_max_capacities field of the given PGPU.
        ///
        /// Since `boston`.
        get_supported_vgpu_max_capacities => "get_supported_VGPU_max_capacities": HashMap<VgpuTypeRef, i64>,
        /// Get the dom0_access field of the given PGPU.
        ///
        /// Since `boston`.
        get_dom0_access => "get_dom0_access": PgpuDom0Access,
        /// Get the is_system_display_device field of the given PGPU.
        ///
        /// Since `boston`.
        get_is_system_display_device => "get_is_system_display_device": bool,
        /// Get the compatibility_metadata field of the given PGPU.
        ///
        /// Since `boston`.
        get_compatibility_metadata => "get_compatibility_metadata": HashMap<String, String>,
    }
}

setters! {
    Pgpu, PgpuRef {
        /// Set the other_config field of the given PGPU.
        ///
        /// Since `boston`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Pgpu, PgpuRef {
        /// Add the given key-value pair to the other_config field of the given PGPU.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Pgpu> {
    /// Get a record containing the current state of the given PGPU.
    ///
    /// Since `boston`.
    pub async fn get_record(&self, pgpu: &PgpuRef) -> Result<PgpuRecord> {
        self.call("get_record").arg("self", pgpu).invoke().await
    }

    /// Get a reference to the PGPU instance with the specified UUID.
    ///
    /// Since `boston`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PgpuRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the PGPUs known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all(&self) -> Result<Vec<PgpuRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of PGPU references to PGPU records for all PGPUs known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all_records(&self) -> Result<HashMap<PgpuRef, PgpuRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Call `PGPU.add_enabled_VGPU_types`.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn add_enabled_vgpu_types(&self, pgpu: &PgpuRef, value: &VgpuTypeRef) -> Result<()> {
        self.call("add_enabled_VGPU_types").arg("self", pgpu).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::add_enabled_vgpu_types`].
    pub async fn async_add_enabled_vgpu_types(
        &self,
        pgpu: &PgpuRef,
        value: &VgpuTypeRef,
    ) -> Result<TaskRef> {
        self.call("add_enabled_VGPU_types")
            .arg("self", pgpu)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Call `PGPU.remove_enabled_VGPU_types`.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn remove_enabled_vgpu_types(
        &self,
        pgpu: &PgpuRef,
        value: &VgpuTypeRef,
    ) -> Result<()> {
        self.call("remove_enabled_VGPU_types").arg("self", pgpu).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::remove_enabled_vgpu_types`].
    pub async fn async_remove_enabled_vgpu_types(
        &self,
        pgpu: &PgpuRef,
        value: &VgpuTypeRef,
    ) -> Result<TaskRef> {
        self.call("remove_enabled_VGPU_types")
            .arg("self", pgpu)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Call `PGPU.set_enabled_VGPU_types`.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn set_enabled_vgpu_types(
        &self,
        pgpu: &PgpuRef,
        value: &[VgpuTypeRef],
    ) -> Result<()> {
        self.call("set_enabled_VGPU_types").arg("self", pgpu).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_enabled_vgpu_types`].
    pub async fn async_set_enabled_vgpu_types(
        &self,
        pgpu: &PgpuRef,
        value: &[VgpuTypeRef],
    ) -> Result<TaskRef> {
        self.call("set_enabled_VGPU_types")
            .arg("self", pgpu)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Call `PGPU.set_GPU_group`.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn set_gpu_group(&self, pgpu: &PgpuRef, value: &GpuGroupRef) -> Result<()> {
        self.call("set_GPU_group").arg("self", pgpu).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_gpu_group`].
    pub async fn async_set_gpu_group(
        &self,
        pgpu: &PgpuRef,
        value: &GpuGroupRef,
    ) -> Result<TaskRef> {
        self.call("set_GPU_group").arg("self", pgpu).arg("value", value).invoke_async().await
    }

    /// Call `PGPU.get_remaining_capacity`.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn get_remaining_capacity(
        &self,
        pgpu: &PgpuRef,
        vgpu_type: &VgpuTypeRef,
    ) -> Result<i64> {
        self.call("get_remaining_capacity")
            .arg("self", pgpu)
            .arg("vgpu_type", vgpu_type)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::get_remaining_capacity`].
    pub async fn async_get_remaining_capacity(
        &self,
        pgpu: &PgpuRef,
        vgpu_type: &VgpuTypeRef,
    ) -> Result<TaskRef> {
        self.call("get_remaining_capacity")
            .arg("self", pgpu)
            .arg("vgpu_type", vgpu_type)
            .invoke_async()
            .await
    }

    /// Call `PGPU.enable_dom0_access`.
    ///
    /// Since `cream`.
    pub async fn enable_dom0_access(&self, pgpu: &PgpuRef) -> Result<PgpuDom0Access> {
        self.call("enable_dom0_access").arg("self", pgpu).invoke().await
    }

    /// Asynchronous form of [`Self::enable_dom0_access`].
    pub async fn async_enable_dom0_access(&self, pgpu: &PgpuRef) -> Result<TaskRef> {
        self.call("enable_dom0_access").arg("self", pgpu).invoke_async().await
    }

    /// Call `PGPU.disable_dom0_access`.
    ///
    /// Since `cream`.
    pub async fn disable_dom0_access(&self, pgpu: &PgpuRef) -> Result<PgpuDom0Access> {
        self.call("disable_dom0_access").arg("self", pgpu).invoke().await
    }

    /// Asynchronous form of [`Self::disable_dom0_access`].
    pub async fn async_disable_dom0_access(&self, pgpu: &PgpuRef) -> Result<TaskRef> {
        self.call("disable_dom0_access").arg("self", pgpu).invoke_async().await
    }
}
