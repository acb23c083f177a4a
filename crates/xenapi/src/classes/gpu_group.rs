//! `GPU_group`: A group of compatible GPUs across the resource pool.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::AllocationAlgorithm;
use crate::refs::{GpuGroupRef, PgpuRef, TaskRef, VgpuRef, VgpuTypeRef};
use crate::Result;

/// Marker for the `GPU_group` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuGroup;

impl XenClass for GpuGroup {
    const NAME: &'static str = "GPU_group";
    type Ref = GpuGroupRef;
    type Record = GpuGroupRecord;
}

xen_record! {
    /// A group of compatible GPUs across the resource pool.
    GpuGroupRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// List of pGPUs in the group.
        pgpus: Vec<PgpuRef> => "PGPUs",
        /// List of vGPUs using the group.
        vgpus: Vec<VgpuRef> => "VGPUs",
        /// List of GPU types (vendor+device ID) that can be in this group.
        gpu_types: Vec<String> => "GPU_types",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Current allocation of vGPUs to pGPUs for this group.
        allocation_algorithm: AllocationAlgorithm => "allocation_algorithm",
        /// VGPU types supported on at least one of the pGPUs in this group.
        supported_vgpu_types: Vec<VgpuTypeRef> => "supported_VGPU_types",
        /// VGPU types supported on at least one of the pGPUs in this group.
        enabled_vgpu_types: Vec<VgpuTypeRef> => "enabled_VGPU_types",
    }
}

getters! {
    GpuGroup, GpuGroupRef {
        /// Get the uuid field of the given GPU_group.
        ///
        /// Since `boston`.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given GPU_group.
        ///
        /// Since `boston`.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given GPU_group.
        ///
        /// Since `boston`.
        get_name_description => "get_name_description": String,
        /// Get the PGPUs field of the given GPU_group.
        ///
        /// Since `boston`.
        get_pgpus => "get_PGPUs": Vec<PgpuRef>,
        /// Get the VGPUs field of the given GPU_group.
        ///
        /// Since `boston`.
        get_vgpus => "get_VGPUs": Vec<VgpuRef>,
        /// Get the GPU_types field of the given GPU_group.
        ///
        /// Since `boston`.
        get_gpu_types => "get_GPU_types": Vec<String>,
        /// Get the other_config field of the given GPU_group.
        ///
        /// Since `boston`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the allocation_algorithm field of the given GPU_group.
        ///
        /// Since `boston`.
        get_allocation_algorithm => "get_allocation_algorithm": AllocationAlgorithm,
        /// Get the supported_VGPU_types field of the given GPU_group.
        ///
        /// Since `boston`.
        get_supported_vgpu_types => "get_supported_VGPU_types": Vec<VgpuTypeRef>,
        /// Get the enabled_VGPU_types field of the given GPU_group.
        ///
        /// Since `boston`.
        get_enabled_vgpu_types => "get_enabled_VGPU_types": Vec<VgpuTypeRef>,
    }
}

setters! {
    GpuGroup, GpuGroupRef {
        /// Set the name/label field of the given GPU_group.
        ///
        /// Since `boston`.
        set_name_label => "set_name_label": &str,
        /// Set the name/description field of the given GPU_group.
        ///
        /// Since `boston`.
        set_name_description => "set_name_description": &str,
        /// Set the other_config field of the given GPU_group.
        ///
        /// Since `boston`.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the allocation_algorithm field of the given GPU_group.
        ///
        /// Since `vgpu-tech-preview`.
        set_allocation_algorithm => "set_allocation_algorithm": AllocationAlgorithm,
    }
}

map_mutators! {
    GpuGroup, GpuGroupRef {
        /// Add the given key-value pair to the other_config field of the given GPU_group.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, GpuGroup> {
    /// Get a record containing the current state of the given GPU_group.
    ///
    /// Since `boston`.
    pub async fn get_record(&self, gpu_group: &GpuGroupRef) -> Result<GpuGroupRecord> {
        self.call("get_record").arg("self", gpu_group).invoke().await
    }

    /// Get a reference to the GPU_group instance with the specified UUID.
    ///
    /// Since `boston`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<GpuGroupRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the GPU_group instances with the given label.
    ///
    /// Since `boston`.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<GpuGroupRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the GPU_groups known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all(&self) -> Result<Vec<GpuGroupRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of GPU_group references to GPU_group records for all GPU_groups known to the system.
    ///
    /// Since `boston`.
    pub async fn get_all_records(&self) -> Result<HashMap<GpuGroupRef, GpuGroupRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Call `GPU_group.create`.
    ///
    /// Since `boston`.
    pub async fn create(
        &self,
        name_label: &str,
        name_description: &str,
        other_config: &HashMap<String, String>,
    ) -> Result<GpuGroupRef> {
        self.call("create")
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("other_config", other_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        name_label: &str,
        name_description: &str,
        other_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("name_label", name_label)
            .arg("name_description", name_description)
            .arg("other_config", other_config)
            .invoke_async()
            .await
    }

    /// Call `GPU_group.destroy`.
    ///
    /// Since `boston`.
    pub async fn destroy(&self, gpu_group: &GpuGroupRef) -> Result<()> {
        self.call("destroy").arg("self", gpu_group).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, gpu_group: &GpuGroupRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", gpu_group).invoke_async().await
    }

    /// Call `GPU_group.get_remaining_capacity`.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn get_remaining_capacity(
        &self,
        gpu_group: &GpuGroupRef,
        vgpu_type: &VgpuTypeRef,
    ) -> Result<i64> {
        self.call("get_remaining_capacity")
            .arg("self", gpu_group)
            .arg("vgpu_type", vgpu_type)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::get_remaining_capacity`].
    pub async fn async_get_remaining_capacity(
        &self,
        gpu_group: &GpuGroupRef,
        vgpu_type: &VgpuTypeRef,
    ) -> Result<TaskRef> {
        self.call("get_remaining_capacity")
            .arg("self", gpu_group)
            .arg("vgpu_type", vgpu_type)
            .invoke_async()
            .await
    }
}
