//! Reference types, one per server class.
//!
//! A reference to one class cannot be passed where another is expected, although
//! all of them are strings on the wire.

use xenapi_core::xen_ref;

xen_ref! {
    /// Reference to `auth`: Management of remote authentication services.
    AuthRef => "auth"
}

xen_ref! {
    /// Reference to `blob`: A placeholder for a binary blob.
    BlobRef => "blob"
}

xen_ref! {
    /// Reference to `Bond`: A Network bond that combines physical network interfaces, also known as link aggregation.
    BondRef => "Bond"
}

xen_ref! {
    /// Reference to `Certificate`: An X509 certificate used for TLS connections.
    CertificateRef => "Certificate"
}

xen_ref! {
    /// Reference to `Cluster_host`: Cluster member metadata.
    ClusterHostRef => "Cluster_host"
}

xen_ref! {
    /// Reference to `Cluster`: Cluster-wide Cluster metadata.
    ClusterRef => "Cluster"
}

xen_ref! {
    /// Reference to `console`: A console.
    ConsoleRef => "console"
}

xen_ref! {
    /// Reference to `crashdump`: A VM crashdump.
    CrashdumpRef => "crashdump"
}

xen_ref! {
    /// Reference to `DR_task`: DR task.
    DrTaskRef => "DR_task"
}

xen_ref! {
    /// Reference to `event`: Asynchronous event registration and handling.
    EventRef => "event"
}

xen_ref! {
    /// Reference to `Feature`: A new piece of functionality.
    FeatureRef => "Feature"
}

xen_ref! {
    /// Reference to `GPU_group`: A group of compatible GPUs across the resource pool.
    GpuGroupRef => "GPU_group"
}

xen_ref! {
    /// Reference to `host_cpu`: A physical CPU.
    HostCpuRef => "host_cpu"
}

xen_ref! {
    /// Reference to `host_crashdump`: Represents a host crash dump.
    HostCrashdumpRef => "host_crashdump"
}

xen_ref! {
    /// Reference to `host_metrics`: The metrics associated with a host.
    HostMetricsRef => "host_metrics"
}

xen_ref! {
    /// Reference to `host_patch`: Represents a patch stored on a server.
    HostPatchRef => "host_patch"
}

xen_ref! {
    /// Reference to `host`: A physical host.
    HostRef => "host"
}

xen_ref! {
    /// Reference to `LVHD`: LVHD SR specific operations.
    LvhdRef => "LVHD"
}

xen_ref! {
    /// Reference to `message`: An message for the attention of the administrator.
    MessageRef => "message"
}

xen_ref! {
    /// Reference to `network`: A virtual network.
    NetworkRef => "network"
}

xen_ref! {
    /// Reference to `network_sriov`: Network-sriov which connects logical pif and physical pif.
    NetworkSriovRef => "network_sriov"
}

xen_ref! {
    /// Reference to `Observer`: Describes a observer which will control observability activity in the Toolstack.
    ObserverRef => "Observer"
}

xen_ref! {
    /// Reference to `PBD`: The physical block devices through which hosts access SRs.
    PbdRef => "PBD"
}

xen_ref! {
    /// Reference to `PCI`: A PCI device.
    PciRef => "PCI"
}

xen_ref! {
    /// Reference to `PGPU`: A physical GPU (pGPU)
    PgpuRef => "PGPU"
}

xen_ref! {
    /// Reference to `PIF_metrics`: The metrics associated with a physical network interface.
    PifMetricsRef => "PIF_metrics"
}

xen_ref! {
    /// Reference to `PIF`: A physical network interface (note separate VLANs are represented as several PIFs)
    PifRef => "PIF"
}

xen_ref! {
    /// Reference to `pool_patch`: Pool-wide patches.
    PoolPatchRef => "pool_patch"
}

xen_ref! {
    /// Reference to `pool`: Pool-wide information.
    PoolRef => "pool"
}

xen_ref! {
    /// Reference to `pool_update`: Pool-wide updates to the host software.
    PoolUpdateRef => "pool_update"
}

xen_ref! {
    /// Reference to `PUSB`: A physical USB device.
    PusbRef => "PUSB"
}

xen_ref! {
    /// Reference to `PVS_cache_storage`: Describes the storage that is available to a PVS site for caching purposes.
    PvsCacheStorageRef => "PVS_cache_storage"
}

xen_ref! {
    /// Reference to `PVS_proxy`: A proxy connects a VM/VIF with a PVS site.
    PvsProxyRef => "PVS_proxy"
}

xen_ref! {
    /// Reference to `PVS_server`: Individual machine serving provisioning (block) data.
    PvsServerRef => "PVS_server"
}

xen_ref! {
    /// Reference to `PVS_site`: Machines serving blocks of data for provisioning VMs.
    PvsSiteRef => "PVS_site"
}

xen_ref! {
    /// Reference to `Repository`: Repository for updates.
    RepositoryRef => "Repository"
}

xen_ref! {
    /// Reference to `role`: A set of permissions associated with a subject.
    RoleRef => "role"
}

xen_ref! {
    /// Reference to `SDN_controller`: Describes the SDN controller that is to connect with the pool.
    SdnControllerRef => "SDN_controller"
}

xen_ref! {
    /// Reference to `secret`: A secret.
    SecretRef => "secret"
}

xen_ref! {
    /// Reference to `session`: A session.
    SessionRef => "session"
}

xen_ref! {
    /// Reference to `SM`: A storage manager plugin.
    SmRef => "SM"
}

xen_ref! {
    /// Reference to `SR`: A storage repository.
    SrRef => "SR"
}

xen_ref! {
    /// Reference to `subject`: A user or group that can log in xapi.
    SubjectRef => "subject"
}

xen_ref! {
    /// Reference to `task`: A long-running asynchronous task.
    TaskRef => "task"
}

xen_ref! {
    /// Reference to `tunnel`: A tunnel for network traffic.
    TunnelRef => "tunnel"
}

xen_ref! {
    /// Reference to `USB_group`: A group of compatible USBs across the resource pool.
    UsbGroupRef => "USB_group"
}

xen_ref! {
    /// Reference to `user`: A user of the system.
    UserRef => "user"
}

xen_ref! {
    /// Reference to `VBD_metrics`: The metrics associated with a virtual block device.
    VbdMetricsRef => "VBD_metrics"
}

xen_ref! {
    /// Reference to `VBD`: A virtual block device.
    VbdRef => "VBD"
}

xen_ref! {
    /// Reference to `VDI`: A virtual disk image.
    VdiRef => "VDI"
}

xen_ref! {
    /// Reference to `VGPU`: A virtual GPU (vGPU)
    VgpuRef => "VGPU"
}

xen_ref! {
    /// Reference to `VGPU_type`: A type of virtual GPU.
    VgpuTypeRef => "VGPU_type"
}

xen_ref! {
    /// Reference to `VIF_metrics`: The metrics associated with a virtual network device.
    VifMetricsRef => "VIF_metrics"
}

xen_ref! {
    /// Reference to `VIF`: A virtual network interface.
    VifRef => "VIF"
}

xen_ref! {
    /// Reference to `VLAN`: A VLAN mux/demux.
    VlanRef => "VLAN"
}

xen_ref! {
    /// Reference to `VM_appliance`: VM appliance.
    VmApplianceRef => "VM_appliance"
}

xen_ref! {
    /// Reference to `VM_guest_metrics`: The metrics reported by the guest (as opposed to inferred from outside)
    VmGuestMetricsRef => "VM_guest_metrics"
}

xen_ref! {
    /// Reference to `VM_metrics`: The metrics associated with a VM.
    VmMetricsRef => "VM_metrics"
}

xen_ref! {
    /// Reference to `VM`: A virtual machine (or 'guest').
    VmRef => "VM"
}

xen_ref! {
    /// Reference to `VMPP`: VM Protection Policy.
    VmppRef => "VMPP"
}

xen_ref! {
    /// Reference to `VMSS`: VM Snapshot Schedule.
    VmssRef => "VMSS"
}

xen_ref! {
    /// Reference to `VTPM`: A virtual TPM device.
    VtpmRef => "VTPM"
}

xen_ref! {
    /// Reference to `VUSB`: Describes the vusb device.
    VusbRef => "VUSB"
}
