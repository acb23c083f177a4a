//! `VGPU_type`: A type of virtual GPU.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::VgpuTypeImplementation;
use crate::refs::{GpuGroupRef, PgpuRef, VgpuRef, VgpuTypeRef};
use crate::Result;

/// Marker for the `VGPU_type` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VgpuType;

impl XenClass for VgpuType {
    const NAME: &'static str = "VGPU_type";
    type Ref = VgpuTypeRef;
    type Record = VgpuTypeRecord;
}

xen_record! {
    /// A type of virtual GPU.
    VgpuTypeRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Name of VGPU vendor.
        vendor_name: String => "vendor_name",
        /// Model name associated with the VGPU type.
        model_name: String => "model_name",
        /// Framebuffer size of the VGPU type, in bytes.
        framebuffer_size: i64 => "framebuffer_size",
        /// Maximum number of displays supported by the VGPU type.
        max_heads: i64 => "max_heads",
        /// Maximum resolution (width) supported by the VGPU type.
        max_resolution_x: i64 => "max_resolution_x",
        /// Maximum resolution (height) supported by the VGPU type.
        max_resolution_y: i64 => "max_resolution_y",
        /// List of PGPUs that support this VGPU type.
        supported_on_pgpus: Vec<PgpuRef> => "supported_on_PGPUs",
        /// List of PGPUs that have this VGPU type enabled.
        enabled_on_pgpus: Vec<PgpuRef> => "enabled_on_PGPUs",
        /// List of VGPUs of this type.
        vgpus: Vec<VgpuRef> => "VGPUs",
        /// List of GPU groups in which at least one PGPU supports this VGPU type.
        supported_on_gpu_groups: Vec<GpuGroupRef> => "supported_on_GPU_groups",
        /// List of GPU groups in which at least one have this VGPU type enabled.
        enabled_on_gpu_groups: Vec<GpuGroupRef> => "enabled_on_GPU_groups",
        /// The internal implementation of this VGPU type.
        implementation: VgpuTypeImplementation => "implementation",
        /// Key used to identify VGPU types and avoid creating duplicates - this field is used internally and not intended for interpretation by API clients.
        identifier: String => "identifier",
        /// Indicates whether VGPUs of this type should be considered experimental.
        experimental: bool => "experimental",
        /// List of VGPU types which are compatible in one VM.
        compatible_types_in_vm: Vec<VgpuTypeRef> => "compatible_types_in_vm",
    }
}

getters! {
    VgpuType, VgpuTypeRef {
        /// Get the uuid field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_uuid => "get_uuid": String,
        /// Get the vendor_name field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_vendor_name => "get_vendor_name": String,
        /// Get the model_name field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_model_name => "get_model_name": String,
        /// Get the framebuffer_size field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_framebuffer_size => "get_framebuffer_size": i64,
        /// Get the max_heads field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_max_heads => "get_max_heads": i64,
        /// Get the max_resolution_x field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_max_resolution_x => "get_max_resolution_x": i64,
        /// Get the max_resolution_y field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_max_resolution_y => "get_max_resolution_y": i64,
        /// Get the supported_on_PGPUs field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_supported_on_pgpus => "get_supported_on_PGPUs": Vec<PgpuRef>,
        /// Get the enabled_on_PGPUs field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_enabled_on_pgpus => "get_enabled_on_PGPUs": Vec<PgpuRef>,
        /// Get the VGPUs field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_vgpus => "get_VGPUs": Vec<VgpuRef>,
        /// Get the supported_on_GPU_groups field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_supported_on_gpu_groups => "get_supported_on_GPU_groups": Vec<GpuGroupRef>,
        /// Get the enabled_on_GPU_groups field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_enabled_on_gpu_groups => "get_enabled_on_GPU_groups": Vec<GpuGroupRef>,
        /// Get the implementation field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_implementation => "get_implementation": VgpuTypeImplementation,
        /// Get the identifier field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_identifier => "get_identifier": String,
        /// Get the experimental field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_experimental => "get_experimental": bool,
        /// Get the compatible_types_in_vm field of the given VGPU_type.
        ///
        /// Since `vgpu-tech-preview`.
        get_compatible_types_in_vm => "get_compatible_types_in_vm": Vec<VgpuTypeRef>,
    }
}

impl ClassApi<'_, VgpuType> {
    /// Get a record containing the current state of the given VGPU_type.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn get_record(&self, vgpu_type: &VgpuTypeRef) -> Result<VgpuTypeRecord> {
        self.call("get_record").arg("self", vgpu_type).invoke().await
    }

    /// Get a reference to the VGPU_type instance with the specified UUID.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VgpuTypeRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VGPU_types known to the system.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn get_all(&self) -> Result<Vec<VgpuTypeRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VGPU_type references to VGPU_type records for all VGPU_types known to the system.
    ///
    /// Since `vgpu-tech-preview`.
    pub async fn get_all_records(&self) -> Result<HashMap<VgpuTypeRef, VgpuTypeRecord>> {
        self.call("get_all_records").invoke().await
    }
}
