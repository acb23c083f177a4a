//! Every enumeration in the XenAPI schema.
//!
//! Each type is closed: decoding a string outside the declared members is an
//! error.

use xenapi_core::xen_enum;

xen_enum! {
    /// Values of `after_apply_guidance`.
    AfterApplyGuidance {
        /// This patch requires HVM guests to be restarted once applied.
        RestartHvm => "restartHVM",
        /// This patch requires PV guests to be restarted once applied.
        RestartPv => "restartPV",
        /// This patch requires the host to be restarted once applied.
        RestartHost => "restartHost",
        /// This patch requires XAPI to be restarted once applied.
        RestartXapi => "restartXAPI",
    }
}

xen_enum! {
    /// Values of `allocation_algorithm`.
    AllocationAlgorithm {
        /// VGPUs of a given type are allocated evenly across supporting pGPUs.
        BreadthFirst => "breadth_first",
        /// VGPUs of a given type are allocated on supporting pGPUs until they are full.
        DepthFirst => "depth_first",
    }
}

xen_enum! {
    /// Values of `bond_mode`.
    BondMode {
        /// Source-level balancing.
        BalanceSlb => "balance-slb",
        /// Active/passive bonding: only one NIC is carrying traffic.
        ActiveBackup => "active-backup",
        /// Link aggregation control protocol.
        Lacp => "lacp",
    }
}

xen_enum! {
    /// Values of `certificate_type`.
    CertificateType {
        /// Certificate that is trusted by the whole pool.
        Ca => "ca",
        /// Certificate that identifies a single host to entities outside the pool.
        Host => "host",
        /// Certificate that identifies a single host to other pool members.
        HostInternal => "host_internal",
    }
}

xen_enum! {
    /// Values of `cls`.
    Cls {
        /// VM.
        Vm => "VM",
        /// Host.
        Host => "Host",
        /// SR.
        Sr => "SR",
        /// Pool.
        Pool => "Pool",
        /// VMPP.
        Vmpp => "VMPP",
        /// VMSS.
        Vmss => "VMSS",
        /// PVS_proxy.
        PvsProxy => "PVS_proxy",
        /// VDI.
        Vdi => "VDI",
        /// Certificate.
        Certificate => "Certificate",
    }
}

xen_enum! {
    /// Values of `cluster_host_operation`.
    ClusterHostOperation {
        /// Enabling cluster membership on a particular host.
        Enable => "enable",
        /// Disabling cluster membership on a particular host.
        Disable => "disable",
        /// Completely destroying a cluster host.
        Destroy => "destroy",
    }
}

xen_enum! {
    /// Values of `cluster_operation`.
    ClusterOperation {
        /// Adding a new member to the cluster.
        Add => "add",
        /// Removing a member from the cluster.
        Remove => "remove",
        /// Enabling any cluster member.
        Enable => "enable",
        /// Disabling any cluster member.
        Disable => "disable",
        /// Completely destroying a cluster.
        Destroy => "destroy",
    }
}

xen_enum! {
    /// Values of `console_protocol`.
    ConsoleProtocol {
        /// VT100 terminal.
        Vt100 => "vt100",
        /// Remote FrameBuffer protocol (as used in VNC)
        Rfb => "rfb",
        /// Remote Desktop Protocol.
        Rdp => "rdp",
    }
}

xen_enum! {
    /// Values of `domain_type`.
    DomainType {
        /// HVM; Fully Virtualised.
        Hvm => "hvm",
        /// PV: Paravirtualised.
        Pv => "pv",
        /// PV inside a PVH container.
        PvInPvh => "pv_in_pvh",
        /// PVH.
        Pvh => "pvh",
        /// Not specified or unknown domain type.
        Unspecified => "unspecified",
    }
}

xen_enum! {
    /// Values of `event_operation`.
    EventOperation {
        /// An object has been created.
        Add => "add",
        /// An object has been deleted.
        Del => "del",
        /// An object has been modified.
        Mod => "mod",
    }
}

xen_enum! {
    /// Values of `host_allowed_operations`.
    HostAllowedOperations {
        /// Indicates this host is able to provision another VM.
        Provision => "provision",
        /// Indicates this host is evacuating.
        Evacuate => "evacuate",
        /// Indicates this host is in the process of shutting itself down.
        Shutdown => "shutdown",
        /// Indicates this host is in the process of rebooting.
        Reboot => "reboot",
        /// Indicates this host is in the process of being powered on.
        PowerOn => "power_on",
        /// This host is starting a VM.
        VmStart => "vm_start",
        /// This host is resuming a VM.
        VmResume => "vm_resume",
        /// This host is the migration target of a VM.
        VmMigrate => "vm_migrate",
        /// Indicates this host is being updated.
        ApplyUpdates => "apply_updates",
        /// Indicates this host is in the process of enabling.
        Enable => "enable",
    }
}

xen_enum! {
    /// Values of `host_display`.
    HostDisplay {
        /// This host is outputting its console to a physical display device.
        Enabled => "enabled",
        /// The host will stop outputting its console to a physical display device on next boot.
        DisableOnReboot => "disable_on_reboot",
        /// This host is not outputting its console to a physical display device.
        Disabled => "disabled",
        /// The host will start outputting its console to a physical display device on next boot.
        EnableOnReboot => "enable_on_reboot",
    }
}

xen_enum! {
    /// Values of `host_numa_affinity_policy`.
    HostNumaAffinityPolicy {
        /// VMs are spread across all available NUMA nodes.
        Any => "any",
        /// VMs are placed on the smallest number of NUMA nodes that they fit using soft-pinning, but the policy doesn't guarantee a balanced placement, falling back to the 'any' policy.
        BestEffort => "best_effort",
        /// Use the NUMA affinity policy that is the default for the current version.
        DefaultPolicy => "default_policy",
    }
}

xen_enum! {
    /// Values of `host_sched_gran`.
    HostSchedGran {
        /// Core scheduling.
        Core => "core",
        /// CPU scheduling.
        Cpu => "cpu",
        /// Socket scheduling.
        Socket => "socket",
    }
}

xen_enum! {
    /// Values of `ip_configuration_mode`.
    IpConfigurationMode {
        /// Do not acquire an IP address.
        None => "None",
        /// Acquire an IP address by DHCP.
        Dhcp => "DHCP",
        /// Static IP address configuration.
        Static => "Static",
    }
}

xen_enum! {
    /// Values of `ipv_6_configuration_mode`.
    Ipv6ConfigurationMode {
        /// Do not acquire an IPv6 address.
        None => "None",
        /// Acquire an IPv6 address by DHCP.
        Dhcp => "DHCP",
        /// Static IPv6 address configuration.
        Static => "Static",
        /// Router assigned prefix delegation IPv6 allocation.
        Autoconf => "Autoconf",
    }
}

xen_enum! {
    /// Values of `latest_synced_updates_applied_state`.
    LatestSyncedUpdatesAppliedState {
        /// The host is up to date with the latest updates synced from remote CDN.
        Yes => "yes",
        /// The host is outdated with the latest updates synced from remote CDN.
        No => "no",
        /// If the host is up to date with the latest updates synced from remote CDN is unknown.
        Unknown => "unknown",
    }
}

xen_enum! {
    /// Values of `livepatch_status`.
    LivepatchStatus {
        /// An applicable live patch exists for every required component.
        OkLivepatchComplete => "ok_livepatch_complete",
        /// An applicable live patch exists but it is not sufficient.
        OkLivepatchIncomplete => "ok_livepatch_incomplete",
        /// There is no applicable live patch.
        Ok => "ok",
    }
}

xen_enum! {
    /// Values of `network_default_locking_mode`.
    NetworkDefaultLockingMode {
        /// Treat all VIFs on this network with locking_mode = 'default' as if they have locking_mode = 'unlocked'.
        Unlocked => "unlocked",
        /// Treat all VIFs on this network with locking_mode = 'default' as if they have locking_mode = 'disabled'.
        Disabled => "disabled",
    }
}

xen_enum! {
    /// Values of `network_operations`.
    NetworkOperations {
        /// Indicates this network is attaching to a VIF or PIF.
        Attaching => "attaching",
    }
}

xen_enum! {
    /// Values of `network_purpose`.
    NetworkPurpose {
        /// Network Block Device service using TLS.
        Nbd => "nbd",
        /// Network Block Device service without integrity or confidentiality: NOT RECOMMENDED.
        InsecureNbd => "insecure_nbd",
    }
}

xen_enum! {
    /// Values of `on_boot`.
    OnBoot {
        /// When a VM containing this VDI is started, the contents of the VDI are reset to the state they were in when this flag was last set.
        Reset => "reset",
        /// Standard behaviour.
        Persist => "persist",
    }
}

xen_enum! {
    /// Values of `on_crash_behaviour`.
    OnCrashBehaviour {
        /// Destroy the VM state.
        Destroy => "destroy",
        /// Record a coredump and then destroy the VM state.
        CoredumpAndDestroy => "coredump_and_destroy",
        /// Restart the VM.
        Restart => "restart",
        /// Record a coredump and then restart the VM.
        CoredumpAndRestart => "coredump_and_restart",
        /// Leave the crashed VM paused.
        Preserve => "preserve",
        /// Rename the crashed VM and start a new copy.
        RenameRestart => "rename_restart",
    }
}

xen_enum! {
    /// Values of `on_normal_exit`.
    OnNormalExit {
        /// Destroy the VM state.
        Destroy => "destroy",
        /// Restart the VM.
        Restart => "restart",
    }
}

xen_enum! {
    /// Values of `on_softreboot_behavior`.
    OnSoftrebootBehavior {
        /// Perform soft-reboot.
        SoftReboot => "soft_reboot",
        /// Destroy the VM state.
        Destroy => "destroy",
        /// Restart the VM.
        Restart => "restart",
        /// Leave the VM paused.
        Preserve => "preserve",
    }
}

xen_enum! {
    /// Values of `persistence_backend`.
    PersistenceBackend {
        /// This VTPM is persisted in XAPI's DB.
        Xapi => "xapi",
    }
}

xen_enum! {
    /// Values of `pgpu_dom_0_access`.
    PgpuDom0Access {
        /// Dom0 can access this device as normal.
        Enabled => "enabled",
        /// On host reboot dom0 will be blocked from accessing this device.
        DisableOnReboot => "disable_on_reboot",
        /// Dom0 cannot access this device.
        Disabled => "disabled",
        /// On host reboot dom0 will be allowed to access this device.
        EnableOnReboot => "enable_on_reboot",
    }
}

xen_enum! {
    /// Values of `pif_igmp_status`.
    PifIgmpStatus {
        /// IGMP Snooping is enabled in the corresponding backend bridge.'.
        Enabled => "enabled",
        /// IGMP Snooping is disabled in the corresponding backend bridge.'.
        Disabled => "disabled",
        /// IGMP snooping status is unknown. If this is a VLAN master, then please consult the underlying VLAN slave PIF.
        Unknown => "unknown",
    }
}

xen_enum! {
    /// Values of `pool_allowed_operations`.
    PoolAllowedOperations {
        /// Indicates this pool is in the process of enabling HA.
        HaEnable => "ha_enable",
        /// Indicates this pool is in the process of disabling HA.
        HaDisable => "ha_disable",
        /// Indicates this pool is in the process of creating a cluster.
        ClusterCreate => "cluster_create",
        /// Indicates this pool is in the process of changing master.
        DesignateNewMaster => "designate_new_master",
        /// Indicates this pool is in the process of configuring repositories.
        ConfigureRepositories => "configure_repositories",
        /// Indicates this pool is in the process of syncing updates.
        SyncUpdates => "sync_updates",
        /// Indicates this pool is in the process of getting updates.
        GetUpdates => "get_updates",
        /// Indicates this pool is in the process of applying updates.
        ApplyUpdates => "apply_updates",
        /// Indicates this pool is in the process of enabling TLS verification.
        TlsVerificationEnable => "tls_verification_enable",
        /// A certificate refresh and distribution is in progress.
        CertRefresh => "cert_refresh",
        /// Indicates this pool is exchanging internal certificates with a new joiner.
        ExchangeCertificatesOnJoin => "exchange_certificates_on_join",
        /// Indicates this pool is exchanging ca certificates with a new joiner.
        ExchangeCaCertificatesOnJoin => "exchange_ca_certificates_on_join",
        /// Indicates the primary host is sending its certificates to another host.
        CopyPrimaryHostCerts => "copy_primary_host_certs",
        /// Ejection of a host from the pool is under way.
        Eject => "eject",
    }
}

xen_enum! {
    /// Values of `primary_address_type`.
    PrimaryAddressType {
        /// Primary address is the IPv4 address.
        IPv4 => "IPv4",
        /// Primary address is the IPv6 address.
        IPv6 => "IPv6",
    }
}

xen_enum! {
    /// Values of `pvs_proxy_status`.
    PvsProxyStatus {
        /// The proxy is not currently running.
        Stopped => "stopped",
        /// The proxy is setup but has not yet cached anything.
        Initialised => "initialised",
        /// The proxy is currently caching data.
        Caching => "caching",
        /// The PVS device is configured to use an incompatible write-cache mode.
        IncompatibleWriteCacheMode => "incompatible_write_cache_mode",
        /// The PVS protocol in use is not compatible with the PVS proxy.
        IncompatibleProtocolVersion => "incompatible_protocol_version",
    }
}

xen_enum! {
    /// Values of `sdn_controller_protocol`.
    SdnControllerProtocol {
        /// Active ssl connection.
        Ssl => "ssl",
        /// Passive ssl connection.
        Pssl => "pssl",
    }
}

xen_enum! {
    /// Values of `sr_health`.
    SrHealth {
        /// Storage is fully available.
        Healthy => "healthy",
        /// Storage is busy recovering, e.g. rebuilding mirrors.
        Recovering => "recovering",
    }
}

xen_enum! {
    /// Values of `sriov_configuration_mode`.
    SriovConfigurationMode {
        /// Configure network sriov by sysfs, do not need reboot.
        Sysfs => "sysfs",
        /// Configure network sriov by modprobe, need reboot.
        Modprobe => "modprobe",
        /// Configure network sriov manually.
        Manual => "manual",
        /// Unknown mode.
        Unknown => "unknown",
    }
}

xen_enum! {
    /// Values of `storage_operations`.
    StorageOperations {
        /// Scanning backends for new or deleted VDIs.
        Scan => "scan",
        /// Destroying the SR.
        Destroy => "destroy",
        /// Forgetting about SR.
        Forget => "forget",
        /// Plugging a PBD into this SR.
        Plug => "plug",
        /// Unplugging a PBD from this SR.
        Unplug => "unplug",
        /// Refresh the fields on the SR.
        Update => "update",
        /// Creating a new VDI.
        VdiCreate => "vdi_create",
        /// Introducing a new VDI.
        VdiIntroduce => "vdi_introduce",
        /// Destroying a VDI.
        VdiDestroy => "vdi_destroy",
        /// Resizing a VDI.
        VdiResize => "vdi_resize",
        /// Cloneing a VDI.
        VdiClone => "vdi_clone",
        /// Snapshotting a VDI.
        VdiSnapshot => "vdi_snapshot",
        /// Mirroring a VDI.
        VdiMirror => "vdi_mirror",
        /// Enabling changed block tracking for a VDI.
        VdiEnableCbt => "vdi_enable_cbt",
        /// Disabling changed block tracking for a VDI.
        VdiDisableCbt => "vdi_disable_cbt",
        /// Deleting the data of the VDI.
        VdiDataDestroy => "vdi_data_destroy",
        /// Exporting a bitmap that shows the changed blocks between two VDIs.
        VdiListChangedBlocks => "vdi_list_changed_blocks",
        /// Setting the on_boot field of the VDI.
        VdiSetOnBoot => "vdi_set_on_boot",
        /// Creating a PBD for this SR.
        PbdCreate => "pbd_create",
        /// Destroying one of this SR's PBDs.
        PbdDestroy => "pbd_destroy",
    }
}

xen_enum! {
    /// Values of `task_allowed_operations`.
    TaskAllowedOperations {
        /// Refers to the operation "cancel".
        Cancel => "cancel",
        /// Refers to the operation "destroy".
        Destroy => "destroy",
    }
}

xen_enum! {
    /// Values of `task_status_type`.
    TaskStatusType {
        /// Task is in progress.
        Pending => "pending",
        /// Task was completed successfully.
        Success => "success",
        /// Task has failed.
        Failure => "failure",
        /// Task is being cancelled.
        Cancelling => "cancelling",
        /// Task has been cancelled.
        Cancelled => "cancelled",
    }
}

xen_enum! {
    /// Values of `telemetry_frequency`.
    TelemetryFrequency {
        /// Run telemetry task daily.
        Daily => "daily",
        /// Run telemetry task weekly.
        Weekly => "weekly",
        /// Run telemetry task monthly.
        Monthly => "monthly",
    }
}

xen_enum! {
    /// Values of `tristate_type`.
    TristateType {
        /// Known to be true.
        Yes => "yes",
        /// Known to be false.
        No => "no",
        /// Unknown or unspecified.
        Unspecified => "unspecified",
    }
}

xen_enum! {
    /// Values of `tunnel_protocol`.
    TunnelProtocol {
        /// GRE protocol.
        Gre => "gre",
        /// VxLAN Protocol.
        Vxlan => "vxlan",
    }
}

xen_enum! {
    /// Values of `update_after_apply_guidance`.
    UpdateAfterApplyGuidance {
        /// This update requires HVM guests to be restarted once applied.
        RestartHvm => "restartHVM",
        /// This update requires PV guests to be restarted once applied.
        RestartPv => "restartPV",
        /// This update requires the host to be restarted once applied.
        RestartHost => "restartHost",
        /// This update requires XAPI to be restarted once applied.
        RestartXapi => "restartXAPI",
    }
}

xen_enum! {
    /// Values of `update_guidances`.
    UpdateGuidances {
        /// Indicates the updated host should reboot as soon as possible.
        RebootHost => "reboot_host",
        /// Indicates the updated host should reboot as soon as possible since one or more livepatch(es) failed to be applied.
        RebootHostOnLivepatchFailure => "reboot_host_on_livepatch_failure",
        /// Indicates the updated host should reboot as soon as possible since one or more kernel livepatch(es) failed to be applied.
        RebootHostOnKernelLivepatchFailure => "reboot_host_on_kernel_livepatch_failure",
        /// Indicates the updated host should reboot as soon as possible since one or more xen livepatch(es) failed to be applied.
        RebootHostOnXenLivepatchFailure => "reboot_host_on_xen_livepatch_failure",
        /// Indicates the Toolstack running on the updated host should restart as soon as possible.
        RestartToolstack => "restart_toolstack",
        /// Indicates the device model of a running VM should restart as soon as possible.
        RestartDeviceModel => "restart_device_model",
        /// Indicates the VM should restart as soon as possible.
        RestartVm => "restart_vm",
    }
}

xen_enum! {
    /// Values of `update_sync_frequency`.
    UpdateSyncFrequency {
        /// The update synchronizations happen every day.
        Daily => "daily",
        /// The update synchronizations happen every week on the chosen day.
        Weekly => "weekly",
    }
}

xen_enum! {
    /// Values of `vbd_mode`.
    VbdMode {
        /// Only read-only access will be allowed.
        Ro => "RO",
        /// Read-write access will be allowed.
        Rw => "RW",
    }
}

xen_enum! {
    /// Values of `vbd_operations`.
    VbdOperations {
        /// Attempting to attach this VBD to a VM.
        Attach => "attach",
        /// Attempting to eject the media from this VBD.
        Eject => "eject",
        /// Attempting to insert new media into this VBD.
        Insert => "insert",
        /// Attempting to hotplug this VBD.
        Plug => "plug",
        /// Attempting to hot unplug this VBD.
        Unplug => "unplug",
        /// Attempting to forcibly unplug this VBD.
        UnplugForce => "unplug_force",
        /// Attempting to pause a block device backend.
        Pause => "pause",
        /// Attempting to unpause a block device backend.
        Unpause => "unpause",
    }
}

xen_enum! {
    /// Values of `vbd_type`.
    VbdType {
        /// VBD will appear to guest as CD.
        Cd => "CD",
        /// VBD will appear to guest as disk.
        Disk => "Disk",
        /// VBD will appear as a floppy.
        Floppy => "Floppy",
    }
}

xen_enum! {
    /// Values of `vdi_operations`.
    VdiOperations {
        /// Cloning the VDI.
        Clone => "clone",
        /// Copying the VDI.
        Copy => "copy",
        /// Resizing the VDI.
        Resize => "resize",
        /// Resizing the VDI which may or may not be online.
        ResizeOnline => "resize_online",
        /// Snapshotting the VDI.
        Snapshot => "snapshot",
        /// Mirroring the VDI.
        Mirror => "mirror",
        /// Destroying the VDI.
        Destroy => "destroy",
        /// Forget about the VDI.
        Forget => "forget",
        /// Refreshing the fields of the VDI.
        Update => "update",
        /// Forcibly unlocking the VDI.
        ForceUnlock => "force_unlock",
        /// Generating static configuration.
        GenerateConfig => "generate_config",
        /// Enabling changed block tracking for a VDI.
        EnableCbt => "enable_cbt",
        /// Disabling changed block tracking for a VDI.
        DisableCbt => "disable_cbt",
        /// Deleting the data of the VDI.
        DataDestroy => "data_destroy",
        /// Exporting a bitmap that shows the changed blocks between two VDIs.
        ListChangedBlocks => "list_changed_blocks",
        /// Setting the on_boot field of the VDI.
        SetOnBoot => "set_on_boot",
        /// Operations on this VDI are temporarily blocked.
        Blocked => "blocked",
    }
}

xen_enum! {
    /// Values of `vdi_type`.
    VdiType {
        /// A disk that may be replaced on upgrade.
        System => "system",
        /// A disk that is always preserved on upgrade.
        User => "user",
        /// A disk that may be reformatted on upgrade.
        Ephemeral => "ephemeral",
        /// A disk that stores a suspend image.
        Suspend => "suspend",
        /// A disk that stores VM crashdump information.
        Crashdump => "crashdump",
        /// A disk used for HA storage heartbeating.
        HaStatefile => "ha_statefile",
        /// A disk used for HA Pool metadata.
        Metadata => "metadata",
        /// A disk used for a general metadata redo-log.
        RedoLog => "redo_log",
        /// A disk that stores SR-level RRDs.
        Rrd => "rrd",
        /// A disk that stores PVS cache data.
        PvsCache => "pvs_cache",
        /// Metadata about a snapshot VDI that has been deleted: the set of blocks that changed between some previous version of the disk and the version tracked by the snapshot.
        CbtMetadata => "cbt_metadata",
    }
}

xen_enum! {
    /// Values of `vgpu_type_implementation`.
    VgpuTypeImplementation {
        /// Pass through an entire physical GPU to a guest.
        Passthrough => "passthrough",
        /// VGPU using NVIDIA hardware.
        Nvidia => "nvidia",
        /// VGPU using NVIDIA hardware with SR-IOV.
        NvidiaSriov => "nvidia_sriov",
        /// VGPU using Intel GVT-g.
        GvtG => "gvt_g",
        /// VGPU using AMD MxGPU.
        Mxgpu => "mxgpu",
    }
}

xen_enum! {
    /// Values of `vif_ipv_4_configuration_mode`.
    VifIpv4ConfigurationMode {
        /// Follow the default IPv4 configuration of the guest (this is guest-dependent)
        None => "None",
        /// Static IPv4 address configuration.
        Static => "Static",
    }
}

xen_enum! {
    /// Values of `vif_ipv_6_configuration_mode`.
    VifIpv6ConfigurationMode {
        /// Follow the default IPv6 configuration of the guest (this is guest-dependent)
        None => "None",
        /// Static IPv6 address configuration.
        Static => "Static",
    }
}

xen_enum! {
    /// Values of `vif_locking_mode`.
    VifLockingMode {
        /// No specific configuration set - default network policy applies.
        NetworkDefault => "network_default",
        /// Only traffic to a specific MAC and a list of IPv4 or IPv6 addresses is permitted.
        Locked => "locked",
        /// All traffic is permitted.
        Unlocked => "unlocked",
        /// No traffic is permitted.
        Disabled => "disabled",
    }
}

xen_enum! {
    /// Values of `vif_operations`.
    VifOperations {
        /// Attempting to attach this VIF to a VM.
        Attach => "attach",
        /// Attempting to hotplug this VIF.
        Plug => "plug",
        /// Attempting to hot unplug this VIF.
        Unplug => "unplug",
    }
}

xen_enum! {
    /// Values of `vm_appliance_operation`.
    VmApplianceOperation {
        /// Start.
        Start => "start",
        /// Clean shutdown.
        CleanShutdown => "clean_shutdown",
        /// Hard shutdown.
        HardShutdown => "hard_shutdown",
        /// Shutdown.
        Shutdown => "shutdown",
    }
}

xen_enum! {
    /// Values of `vm_operations`.
    VmOperations {
        /// Refers to the operation "snapshot".
        Snapshot => "snapshot",
        /// Refers to the operation "clone".
        Clone => "clone",
        /// Refers to the operation "copy".
        Copy => "copy",
        /// Refers to the operation "create_template".
        CreateTemplate => "create_template",
        /// Refers to the operation "revert".
        Revert => "revert",
        /// Refers to the operation "checkpoint".
        Checkpoint => "checkpoint",
        /// Refers to the operation "snapshot_with_quiesce".
        SnapshotWithQuiesce => "snapshot_with_quiesce",
        /// Refers to the operation "provision".
        Provision => "provision",
        /// Refers to the operation "start".
        Start => "start",
        /// Refers to the operation "start_on".
        StartOn => "start_on",
        /// Refers to the operation "pause".
        Pause => "pause",
        /// Refers to the operation "unpause".
        Unpause => "unpause",
        /// Refers to the operation "clean_shutdown".
        CleanShutdown => "clean_shutdown",
        /// Refers to the operation "clean_reboot".
        CleanReboot => "clean_reboot",
        /// Refers to the operation "hard_shutdown".
        HardShutdown => "hard_shutdown",
        /// Refers to the operation "power_state_reset".
        PowerStateReset => "power_state_reset",
        /// Refers to the operation "hard_reboot".
        HardReboot => "hard_reboot",
        /// Refers to the operation "suspend".
        Suspend => "suspend",
        /// Refers to the operation "csvm".
        Csvm => "csvm",
        /// Refers to the operation "resume".
        Resume => "resume",
        /// Refers to the operation "resume_on".
        ResumeOn => "resume_on",
        /// Refers to the operation "pool_migrate".
        PoolMigrate => "pool_migrate",
        /// Refers to the operation "migrate_send".
        MigrateSend => "migrate_send",
        /// Refers to the operation "get_boot_record".
        GetBootRecord => "get_boot_record",
        /// Refers to the operation "send_sysrq".
        SendSysrq => "send_sysrq",
        /// Refers to the operation "send_trigger".
        SendTrigger => "send_trigger",
        /// Refers to the operation "query_services".
        QueryServices => "query_services",
        /// Refers to the operation "shutdown".
        Shutdown => "shutdown",
        /// Refers to the operation "call_plugin".
        CallPlugin => "call_plugin",
        /// Changing the memory settings.
        ChangingMemoryLive => "changing_memory_live",
        /// Waiting for the memory settings to change.
        AwaitingMemoryLive => "awaiting_memory_live",
        /// Changing the memory dynamic range.
        ChangingDynamicRange => "changing_dynamic_range",
        /// Changing the memory static range.
        ChangingStaticRange => "changing_static_range",
        /// Changing the memory limits.
        ChangingMemoryLimits => "changing_memory_limits",
        /// Changing the shadow memory for a halted VM.
        ChangingShadowMemory => "changing_shadow_memory",
        /// Changing the shadow memory for a running VM.
        ChangingShadowMemoryLive => "changing_shadow_memory_live",
        /// Changing VCPU settings for a halted VM.
        ChangingVcpUs => "changing_VCPUs",
        /// Changing VCPU settings for a running VM.
        ChangingVcpUsLive => "changing_VCPUs_live",
        /// Changing NVRAM for a halted VM.
        ChangingNvram => "changing_NVRAM",
        /// `assert_operation_valid`
        AssertOperationValid => "assert_operation_valid",
        /// Add, remove, query or list data sources.
        DataSourceOp => "data_source_op",
        /// `update_allowed_operations`
        UpdateAllowedOperations => "update_allowed_operations",
        /// Turning this VM into a template.
        MakeIntoTemplate => "make_into_template",
        /// Importing a VM from a network stream.
        Import => "import",
        /// Exporting a VM to a network stream.
        Export => "export",
        /// Exporting VM metadata to a network stream.
        MetadataExport => "metadata_export",
        /// Reverting the VM to a previous snapshotted state.
        Reverting => "reverting",
        /// Refers to the act of uninstalling the VM.
        Destroy => "destroy",
        /// Creating and adding a VTPM to this VM.
        CreateVtpm => "create_vtpm",
    }
}

xen_enum! {
    /// Values of `vm_power_state`.
    VmPowerState {
        /// VM is offline and not using any resources.
        Halted => "Halted",
        /// All resources have been allocated but the VM itself is paused and its vCPUs are not running.
        Paused => "Paused",
        /// Running.
        Running => "Running",
        /// VM state has been saved to disk and it is nolonger running. Note that disks remain in-use while the VM is suspended.
        Suspended => "Suspended",
    }
}

xen_enum! {
    /// Values of `vmpp_archive_frequency`.
    VmppArchiveFrequency {
        /// Never archive.
        Never => "never",
        /// Archive after backup.
        AlwaysAfterBackup => "always_after_backup",
        /// Daily archives.
        Daily => "daily",
        /// Weekly backups.
        Weekly => "weekly",
    }
}

xen_enum! {
    /// Values of `vmpp_archive_target_type`.
    VmppArchiveTargetType {
        /// No target config.
        None => "none",
        /// CIFS target config.
        Cifs => "cifs",
        /// NFS target config.
        Nfs => "nfs",
    }
}

xen_enum! {
    /// Values of `vmpp_backup_frequency`.
    VmppBackupFrequency {
        /// Hourly backups.
        Hourly => "hourly",
        /// Daily backups.
        Daily => "daily",
        /// Weekly backups.
        Weekly => "weekly",
    }
}

xen_enum! {
    /// Values of `vmpp_backup_type`.
    VmppBackupType {
        /// The backup is a snapshot.
        Snapshot => "snapshot",
        /// The backup is a checkpoint.
        Checkpoint => "checkpoint",
    }
}

xen_enum! {
    /// Values of `vmss_frequency`.
    VmssFrequency {
        /// Hourly snapshots.
        Hourly => "hourly",
        /// Daily snapshots.
        Daily => "daily",
        /// Weekly snapshots.
        Weekly => "weekly",
    }
}

xen_enum! {
    /// Values of `vmss_type`.
    VmssType {
        /// The snapshot is a disk snapshot.
        Snapshot => "snapshot",
        /// The snapshot is a checkpoint.
        Checkpoint => "checkpoint",
        /// Support for VSS has been removed.
        SnapshotWithQuiesce => "snapshot_with_quiesce",
    }
}

xen_enum! {
    /// Values of `vtpm_operations`.
    VtpmOperations {
        /// Destroy a VTPM.
        Destroy => "destroy",
    }
}

xen_enum! {
    /// Values of `vusb_operations`.
    VusbOperations {
        /// Attempting to attach this VUSB to a VM.
        Attach => "attach",
        /// Attempting to plug this VUSB into a VM.
        Plug => "plug",
        /// Attempting to hot unplug this VUSB.
        Unplug => "unplug",
    }
}
