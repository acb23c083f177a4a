//! `host`: A physical host.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{
    HostAllowedOperations, HostDisplay, HostNumaAffinityPolicy, HostSchedGran,
    LatestSyncedUpdatesAppliedState, UpdateGuidances,
};
use crate::records::DataSourceRecord;
use crate::refs::{
    BlobRef, CertificateRef, FeatureRef, HostCpuRef, HostCrashdumpRef, HostMetricsRef, HostPatchRef,
    HostRef, NetworkRef, PbdRef, PciRef, PgpuRef, PifRef, PoolUpdateRef, PusbRef, SrRef, TaskRef,
    VmRef,
};
use crate::Result;

/// Marker for the `host` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Host;

impl XenClass for Host {
    const NAME: &'static str = "host";
    type Ref = HostRef;
    type Record = HostRecord;
}

xen_record! {
    /// A physical host.
    HostRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// Virtualization memory overhead (bytes).
        memory_overhead: i64 => "memory_overhead",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<HostAllowedOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, HostAllowedOperations> => "current_operations",
        /// Major version number.
        api_version_major: i64 => "API_version_major",
        /// Minor version number.
        api_version_minor: i64 => "API_version_minor",
        /// Identification of vendor.
        api_version_vendor: String => "API_version_vendor",
        /// Details of vendor implementation.
        api_version_vendor_implementation: HashMap<String, String> => "API_version_vendor_implementation",
        /// True if the host is currently enabled.
        enabled: bool => "enabled",
        /// Version strings.
        software_version: HashMap<String, String> => "software_version",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Xen capabilities.
        capabilities: Vec<String> => "capabilities",
        /// The CPU configuration on this host.  May contain keys such as "nr_nodes", "sockets_per_node", "cores_per_socket", or "threads_per_core".
        cpu_configuration: HashMap<String, String> => "cpu_configuration",
        /// Scheduler policy currently in force on this host.
        sched_policy: String => "sched_policy",
        /// A list of the bootloaders installed on the machine.
        supported_bootloaders: Vec<String> => "supported_bootloaders",
        /// List of VMs currently resident on host.
        resident_vms: Vec<VmRef> => "resident_VMs",
        /// Logging configuration.
        logging: HashMap<String, String> => "logging",
        /// Physical network interfaces.
        pifs: Vec<PifRef> => "PIFs",
        /// The SR in which VDIs for suspend images are created.
        suspend_image_sr: SrRef => "suspend_image_sr",
        /// The SR in which VDIs for crash dumps are created.
        crash_dump_sr: SrRef => "crash_dump_sr",
        /// Set of host crash dumps.
        crashdumps: Vec<HostCrashdumpRef> => "crashdumps",
        /// Set of host patches.
        patches: Vec<HostPatchRef> => "patches",
        /// Set of updates.
        updates: Vec<PoolUpdateRef> => "updates",
        /// Physical blockdevices.
        pbds: Vec<PbdRef> => "PBDs",
        /// The physical CPUs on this host.
        host_cpus: Vec<HostCpuRef> => "host_CPUs",
        /// Details about the physical CPUs on this host.
        cpu_info: HashMap<String, String> => "cpu_info",
        /// The hostname of this host.
        hostname: String => "hostname",
        /// The address by which this host can be contacted from any other host in the pool.
        address: String => "address",
        /// Metrics associated with this host.
        metrics: HostMetricsRef => "metrics",
        /// State of the current license.
        license_params: HashMap<String, String> => "license_params",
        /// The set of statefiles accessible from this host.
        ha_statefiles: Vec<String> => "ha_statefiles",
        /// The set of hosts visible via the network from this host.
        ha_network_peers: Vec<String> => "ha_network_peers",
        /// Binary blobs associated with this host.
        blobs: HashMap<String, BlobRef> => "blobs",
        /// User-specified tags for categorization purposes.
        tags: Vec<String> => "tags",
        /// Type of external authentication service configured; empty if none configured.
        external_auth_type: String => "external_auth_type",
        /// Name of external authentication service configured; empty if none configured.
        external_auth_service_name: String => "external_auth_service_name",
        /// Configuration specific to external authentication service.
        external_auth_configuration: HashMap<String, String> => "external_auth_configuration",
        /// Product edition.
        edition: String => "edition",
        /// Contact information of the license server.
        license_server: HashMap<String, String> => "license_server",
        /// BIOS strings.
        bios_strings: HashMap<String, String> => "bios_strings",
        /// The power on mode.
        power_on_mode: String => "power_on_mode",
        /// The power on config.
        power_on_config: HashMap<String, String> => "power_on_config",
        /// The SR that is used as a local cache.
        local_cache_sr: SrRef => "local_cache_sr",
        /// Information about chipset features.
        chipset_info: HashMap<String, String> => "chipset_info",
        /// List of PCI devices in the host.
        pcis: Vec<PciRef> => "PCIs",
        /// List of physical GPUs in the host.
        pgpus: Vec<PgpuRef> => "PGPUs",
        /// List of physical USBs in the host.
        pusbs: Vec<PusbRef> => "PUSBs",
        /// Allow SSLv3 protocol and ciphersuites as used by older server versions. This controls both incoming and outgoing connections. When this is set to a different value, the host immediately restarts its SSL/TLS listening service; typically this takes less than a second but existing connections to it will be broken. API login sessions will remain valid.
        ssl_legacy: bool => "ssl_legacy",
        /// VCPUs params to apply to all resident guests.
        guest_vcpus_params: HashMap<String, String> => "guest_VCPUs_params",
        /// Indicates whether the host is configured to output its console to a physical display device.
        display: HostDisplay => "display",
        /// The set of versions of the virtual hardware platform that the host can offer to its guests.
        virtual_hardware_platform_versions: Vec<i64> => "virtual_hardware_platform_versions",
        /// The control domain (domain 0)
        control_domain: VmRef => "control_domain",
        /// List of updates which require reboot.
        updates_requiring_reboot: Vec<PoolUpdateRef> => "updates_requiring_reboot",
        /// List of features available on this host.
        features: Vec<FeatureRef> => "features",
        /// The initiator IQN for the host.
        iscsi_iqn: String => "iscsi_iqn",
        /// Specifies whether multipathing is enabled.
        multipathing: bool => "multipathing",
        /// The UEFI certificates allowing Secure Boot.
        uefi_certificates: String => "uefi_certificates",
        /// List of certificates installed in the host.
        certificates: Vec<CertificateRef> => "certificates",
        /// List of all available product editions.
        editions: Vec<String> => "editions",
        /// The set of pending mandatory guidances after applying updates, which must be applied, as otherwise there may be e.g. VM failures.
        pending_guidances: Vec<UpdateGuidances> => "pending_guidances",
        /// True if this host has TLS verifcation enabled.
        tls_verification_enabled: bool => "tls_verification_enabled",
        /// Date and time when the last software update was applied.
        last_software_update: DateTime<Utc> => "last_software_update",
        /// Reflects whether port 80 is open (false) or not (true)
        https_only: bool => "https_only",
        /// Default as 'unknown', 'yes' if the host is up to date with updates synced from remote CDN, otherwise 'no'.
        latest_synced_updates_applied: LatestSyncedUpdatesAppliedState => "latest_synced_updates_applied",
        /// NUMA-aware VM memory and vCPU placement policy.
        numa_affinity_policy: HostNumaAffinityPolicy => "numa_affinity_policy",
        /// The set of pending recommended guidances after applying updates, which most users should follow to make the updates effective, but if not followed, will not cause a failure.
        pending_guidances_recommended: Vec<UpdateGuidances> => "pending_guidances_recommended",
        /// The set of pending full guidances after applying updates, which a user should follow to make some updates, e.g. specific hardware drivers or CPU features, fully effective, but the 'average user' doesn't need to.
        pending_guidances_full: Vec<UpdateGuidances> => "pending_guidances_full",
        /// The SHA256 checksum of updateinfo of the most recently applied update on the host.
        last_update_hash: String => "last_update_hash",
    }
}

getters! {
    Host, HostRef {
        /// Get the uuid field of the given host.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given host.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given host.
        get_name_description => "get_name_description": String,
        /// Get the memory/overhead field of the given host.
        get_memory_overhead => "get_memory_overhead": i64,
        /// Get the allowed_operations field of the given host.
        get_allowed_operations => "get_allowed_operations": Vec<HostAllowedOperations>,
        /// Get the current_operations field of the given host.
        get_current_operations => "get_current_operations": HashMap<String, HostAllowedOperations>,
        /// Get the API_version/major field of the given host.
        get_api_version_major => "get_API_version_major": i64,
        /// Get the API_version/minor field of the given host.
        get_api_version_minor => "get_API_version_minor": i64,
        /// Get the API_version/vendor field of the given host.
        get_api_version_vendor => "get_API_version_vendor": String,
        /// Get the API_version/vendor_implementation field of the given host.
        get_api_version_vendor_implementation => "get_API_version_vendor_implementation": HashMap<String, String>,
        /// Get the enabled field of the given host.
        get_enabled => "get_enabled": bool,
        /// Get the software_version field of the given host.
        get_software_version => "get_software_version": HashMap<String, String>,
        /// Get the other_config field of the given host.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the capabilities field of the given host.
        get_capabilities => "get_capabilities": Vec<String>,
        /// Get the cpu_configuration field of the given host.
        get_cpu_configuration => "get_cpu_configuration": HashMap<String, String>,
        /// Get the sched_policy field of the given host.
        get_sched_policy => "get_sched_policy": String,
        /// Get the supported_bootloaders field of the given host.
        get_supported_bootloaders => "get_supported_bootloaders": Vec<String>,
        /// Get the resident_VMs field of the given host.
        get_resident_vms => "get_resident_VMs": Vec<VmRef>,
        /// Get the logging field of the given host.
        get_logging => "get_logging": HashMap<String, String>,
        /// Get the PIFs field of the given host.
        get_pifs => "get_PIFs": Vec<PifRef>,
        /// Get the suspend_image_sr field of the given host.
        get_suspend_image_sr => "get_suspend_image_sr": SrRef,
        /// Get the crash_dump_sr field of the given host.
        get_crash_dump_sr => "get_crash_dump_sr": SrRef,
        /// Get the crashdumps field of the given host.
        get_crashdumps => "get_crashdumps": Vec<HostCrashdumpRef>,
        /// Get the patches field of the given host.
        get_patches => "get_patches": Vec<HostPatchRef>,
        /// Get the updates field of the given host.
        get_updates => "get_updates": Vec<PoolUpdateRef>,
        /// Get the PBDs field of the given host.
        get_pbds => "get_PBDs": Vec<PbdRef>,
        /// Get the host_CPUs field of the given host.
        get_host_cpus => "get_host_CPUs": Vec<HostCpuRef>,
        /// Get the cpu_info field of the given host.
        get_cpu_info => "get_cpu_info": HashMap<String, String>,
        /// Get the hostname field of the given host.
        get_hostname => "get_hostname": String,
        /// Get the address field of the given host.
        get_address => "get_address": String,
        /// Get the metrics field of the given host.
        get_metrics => "get_metrics": HostMetricsRef,
        /// Get the license_params field of the given host.
        get_license_params => "get_license_params": HashMap<String, String>,
        /// Get the ha_statefiles field of the given host.
        get_ha_statefiles => "get_ha_statefiles": Vec<String>,
        /// Get the ha_network_peers field of the given host.
        get_ha_network_peers => "get_ha_network_peers": Vec<String>,
        /// Get the blobs field of the given host.
        get_blobs => "get_blobs": HashMap<String, BlobRef>,
        /// Get the tags field of the given host.
        get_tags => "get_tags": Vec<String>,
        /// Get the external_auth_type field of the given host.
        get_external_auth_type => "get_external_auth_type": String,
        /// Get the external_auth_service_name field of the given host.
        get_external_auth_service_name => "get_external_auth_service_name": String,
        /// Get the external_auth_configuration field of the given host.
        get_external_auth_configuration => "get_external_auth_configuration": HashMap<String, String>,
        /// Get the edition field of the given host.
        get_edition => "get_edition": String,
        /// Get the license_server field of the given host.
        get_license_server => "get_license_server": HashMap<String, String>,
        /// Get the bios_strings field of the given host.
        get_bios_strings => "get_bios_strings": HashMap<String, String>,
        /// Get the power_on_mode field of the given host.
        get_power_on_mode => "get_power_on_mode": String,
        /// Get the power_on_config field of the given host.
        get_power_on_config => "get_power_on_config": HashMap<String, String>,
        /// Get the local_cache_sr field of the given host.
        get_local_cache_sr => "get_local_cache_sr": SrRef,
        /// Get the chipset_info field of the given host.
        get_chipset_info => "get_chipset_info": HashMap<String, String>,
        /// Get the PCIs field of the given host.
        get_pcis => "get_PCIs": Vec<PciRef>,
        /// Get the PGPUs field of the given host.
        get_pgpus => "get_PGPUs": Vec<PgpuRef>,
        /// Get the PUSBs field of the given host.
        get_pusbs => "get_PUSBs": Vec<PusbRef>,
        /// Get the ssl_legacy field of the given host.
        get_ssl_legacy => "get_ssl_legacy": bool,
        /// Get the guest_VCPUs_params field of the given host.
        get_guest_vcpus_params => "get_guest_VCPUs_params": HashMap<String, String>,
        /// Get the display field of the given host.
        get_display => "get_display": HostDisplay,
        /// Get the virtual_hardware_platform_versions field of the given host.
        get_virtual_hardware_platform_versions => "get_virtual_hardware_platform_versions": Vec<i64>,
        /// Get the control_domain field of the given host.
        get_control_domain => "get_control_domain": VmRef,
        /// Get the updates_requiring_reboot field of the given host.
        get_updates_requiring_reboot => "get_updates_requiring_reboot": Vec<PoolUpdateRef>,
        /// Get the features field of the given host.
        get_features => "get_features": Vec<FeatureRef>,
        /// Get the iscsi_iqn field of the given host.
        get_iscsi_iqn => "get_iscsi_iqn": String,
        /// Get the multipathing field of the given host.
        get_multipathing => "get_multipathing": bool,
        /// Get the uefi_certificates field of the given host.
        get_uefi_certificates => "get_uefi_certificates": String,
        /// Get the certificates field of the given host.
        get_certificates => "get_certificates": Vec<CertificateRef>,
        /// Get the editions field of the given host.
        get_editions => "get_editions": Vec<String>,
        /// Get the pending_guidances field of the given host.
        get_pending_guidances => "get_pending_guidances": Vec<UpdateGuidances>,
        /// Get the tls_verification_enabled field of the given host.
        get_tls_verification_enabled => "get_tls_verification_enabled": bool,
        /// Get the last_software_update field of the given host.
        get_last_software_update => "get_last_software_update": DateTime<Utc>,
        /// Get the https_only field of the given host.
        get_https_only => "get_https_only": bool,
        /// Get the latest_synced_updates_applied field of the given host.
        get_latest_synced_updates_applied => "get_latest_synced_updates_applied": LatestSyncedUpdatesAppliedState,
        /// Get the numa_affinity_policy field of the given host.
        get_numa_affinity_policy => "get_numa_affinity_policy": HostNumaAffinityPolicy,
        /// Get the pending_guidances_recommended field of the given host.
        get_pending_guidances_recommended => "get_pending_guidances_recommended": Vec<UpdateGuidances>,
        /// Get the pending_guidances_full field of the given host.
        get_pending_guidances_full => "get_pending_guidances_full": Vec<UpdateGuidances>,
        /// Get the last_update_hash field of the given host.
        get_last_update_hash => "get_last_update_hash": String,
    }
}

setters! {
    Host, HostRef {
        /// Set the name/label field of the given host.
        set_name_label => "set_name_label": &str,
        /// Set the name/description field of the given host.
        set_name_description => "set_name_description": &str,
        /// Set the other_config field of the given host.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the logging field of the given host.
        set_logging => "set_logging": &HashMap<String, String>,
        /// Set the suspend_image_sr field of the given host.
        set_suspend_image_sr => "set_suspend_image_sr": &SrRef,
        /// Set the crash_dump_sr field of the given host.
        set_crash_dump_sr => "set_crash_dump_sr": &SrRef,
        /// Set the hostname field of the given host.
        set_hostname => "set_hostname": &str,
        /// Set the address field of the given host.
        set_address => "set_address": &str,
        /// Set the tags field of the given host.
        set_tags => "set_tags": &[String],
        /// Set the license_server field of the given host.
        set_license_server => "set_license_server": &HashMap<String, String>,
        /// Set the guest_VCPUs_params field of the given host.
        set_guest_vcpus_params => "set_guest_VCPUs_params": &HashMap<String, String>,
        /// Set the display field of the given host.
        set_display => "set_display": HostDisplay,
    }
}

map_mutators! {
    Host, HostRef {
        /// Add the given key-value pair to the guest_VCPUs_params field of the given host.
        add_to_guest_vcpus_params, remove_from_guest_vcpus_params => "guest_VCPUs_params": &str => &str,
        /// Add the given key-value pair to the license_server field of the given host.
        add_to_license_server, remove_from_license_server => "license_server": &str => &str,
        /// Add the given key-value pair to the logging field of the given host.
        add_to_logging, remove_from_logging => "logging": &str => &str,
        /// Add the given key-value pair to the other_config field of the given host.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Host> {
    /// Get a record containing the current state of the given host.
    pub async fn get_record(&self, host: &HostRef) -> Result<HostRecord> {
        self.call("get_record").arg("self", host).invoke().await
    }

    /// Get a reference to the host instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<HostRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the host instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<HostRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the hosts known to the system.
    pub async fn get_all(&self) -> Result<Vec<HostRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of host references to host records for all hosts known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<HostRef, HostRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Destroy specified host record in database.
    pub async fn destroy(&self, host: &HostRef) -> Result<()> {
        self.call("destroy").arg("self", host).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", host).invoke_async().await
    }

    /// Add the given value to the tags field of the given host.  If the value is already in that Set, then do nothing.
    pub async fn add_tags(&self, host: &HostRef, value: &str) -> Result<()> {
        self.call("add_tags").arg("self", host).arg("value", value).invoke().await
    }

    /// Remove the given value from the tags field of the given host.  If the value is not in that Set, then do nothing.
    pub async fn remove_tags(&self, host: &HostRef, value: &str) -> Result<()> {
        self.call("remove_tags").arg("self", host).arg("value", value).invoke().await
    }

    /// Puts the host into a state in which no new VMs can be started. Currently active VMs on the host continue to execute.
    pub async fn disable(&self, host: &HostRef) -> Result<()> {
        self.call("disable").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::disable`].
    pub async fn async_disable(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("disable").arg("host", host).invoke_async().await
    }

    /// Puts the host into a state in which new VMs can be started.
    pub async fn enable(&self, host: &HostRef) -> Result<()> {
        self.call("enable").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::enable`].
    pub async fn async_enable(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("enable").arg("host", host).invoke_async().await
    }

    /// Shutdown the host. (This function can only be called if there are no currently running VMs on the host and it is disabled.)
    pub async fn shutdown(&self, host: &HostRef) -> Result<()> {
        self.call("shutdown").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::shutdown`].
    pub async fn async_shutdown(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("shutdown").arg("host", host).invoke_async().await
    }

    /// Reboot the host. (This function can only be called if there are no currently running VMs on the host and it is disabled.)
    pub async fn reboot(&self, host: &HostRef) -> Result<()> {
        self.call("reboot").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::reboot`].
    pub async fn async_reboot(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("reboot").arg("host", host).invoke_async().await
    }

    /// Get the host xen dmesg.
    pub async fn dmesg(&self, host: &HostRef) -> Result<String> {
        self.call("dmesg").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::dmesg`].
    pub async fn async_dmesg(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("dmesg").arg("host", host).invoke_async().await
    }

    /// Get the host xen dmesg, and clear the buffer.
    pub async fn dmesg_clear(&self, host: &HostRef) -> Result<String> {
        self.call("dmesg_clear").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::dmesg_clear`].
    pub async fn async_dmesg_clear(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("dmesg_clear").arg("host", host).invoke_async().await
    }

    /// Get the host's log file.
    pub async fn get_log(&self, host: &HostRef) -> Result<String> {
        self.call("get_log").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::get_log`].
    pub async fn async_get_log(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("get_log").arg("host", host).invoke_async().await
    }

    /// Inject the given string as debugging keys into Xen.
    pub async fn send_debug_keys(&self, host: &HostRef, keys: &str) -> Result<()> {
        self.call("send_debug_keys").arg("host", host).arg("keys", keys).invoke().await
    }

    /// Asynchronous form of [`Self::send_debug_keys`].
    pub async fn async_send_debug_keys(&self, host: &HostRef, keys: &str) -> Result<TaskRef> {
        self.call("send_debug_keys").arg("host", host).arg("keys", keys).invoke_async().await
    }

    /// Run xen-bugtool --yestoall and upload the output to support.
    pub async fn bugreport_upload(
        &self,
        host: &HostRef,
        url: &str,
        options: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("bugreport_upload")
            .arg("host", host)
            .arg("url", url)
            .arg("options", options)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::bugreport_upload`].
    pub async fn async_bugreport_upload(
        &self,
        host: &HostRef,
        url: &str,
        options: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("bugreport_upload")
            .arg("host", host)
            .arg("url", url)
            .arg("options", options)
            .invoke_async()
            .await
    }

    /// List all supported methods.
    pub async fn list_methods(&self) -> Result<Vec<String>> {
        self.call("list_methods").invoke().await
    }

    /// Apply a new license to a host.
    ///
    /// # Errors
    ///
    /// - `LICENSE_PROCESSING_ERROR`: There was an error processing your license. Please contact your support representative.
    pub async fn license_apply(&self, host: &HostRef, contents: &str) -> Result<()> {
        self.call("license_apply").arg("host", host).arg("contents", contents).invoke().await
    }

    /// Asynchronous form of [`Self::license_apply`].
    pub async fn async_license_apply(&self, host: &HostRef, contents: &str) -> Result<TaskRef> {
        self.call("license_apply").arg("host", host).arg("contents", contents).invoke_async().await
    }

    /// Apply a new license to a host.
    ///
    /// # Errors
    ///
    /// - `LICENSE_PROCESSING_ERROR`: There was an error processing your license. Please contact your support representative.
    pub async fn license_add(&self, host: &HostRef, contents: &str) -> Result<()> {
        self.call("license_add").arg("host", host).arg("contents", contents).invoke().await
    }

    /// Asynchronous form of [`Self::license_add`].
    pub async fn async_license_add(&self, host: &HostRef, contents: &str) -> Result<TaskRef> {
        self.call("license_add").arg("host", host).arg("contents", contents).invoke_async().await
    }

    /// Remove any license file from the specified host, and switch that host to the unlicensed edition.
    pub async fn license_remove(&self, host: &HostRef) -> Result<()> {
        self.call("license_remove").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::license_remove`].
    pub async fn async_license_remove(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("license_remove").arg("host", host).invoke_async().await
    }

    /// Attempt to power-on the host (if the capability exists).
    pub async fn power_on(&self, host: &HostRef) -> Result<()> {
        self.call("power_on").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::power_on`].
    pub async fn async_power_on(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("power_on").arg("host", host).invoke_async().await
    }

    /// This call disables HA on the local host. This should only be used with extreme care.
    pub async fn emergency_ha_disable(&self, soft: bool) -> Result<()> {
        self.call("emergency_ha_disable").arg("soft", &soft).invoke().await
    }

    /// Call `host.get_data_sources`.
    pub async fn get_data_sources(&self, host: &HostRef) -> Result<Vec<DataSourceRecord>> {
        self.call("get_data_sources").arg("host", host).invoke().await
    }

    /// Start recording the specified data source.
    pub async fn record_data_source(&self, host: &HostRef, data_source: &str) -> Result<()> {
        self.call("record_data_source")
            .arg("host", host)
            .arg("data_source", data_source)
            .invoke()
            .await
    }

    /// Query the latest value of the specified data source.
    pub async fn query_data_source(&self, host: &HostRef, data_source: &str) -> Result<f64> {
        self.call("query_data_source")
            .arg("host", host)
            .arg("data_source", data_source)
            .invoke()
            .await
    }

    /// Forget the recorded statistics related to the specified data source.
    pub async fn forget_data_source_archives(
        &self,
        host: &HostRef,
        data_source: &str,
    ) -> Result<()> {
        self.call("forget_data_source_archives")
            .arg("host", host)
            .arg("data_source", data_source)
            .invoke()
            .await
    }

    /// Check this host can be evacuated.
    pub async fn assert_can_evacuate(&self, host: &HostRef) -> Result<()> {
        self.call("assert_can_evacuate").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::assert_can_evacuate`].
    pub async fn async_assert_can_evacuate(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("assert_can_evacuate").arg("host", host).invoke_async().await
    }

    /// Return a set of VMs which prevent the host being evacuated, with per-VM error codes.
    pub async fn get_vms_which_prevent_evacuation(
        &self,
        host: &HostRef,
    ) -> Result<HashMap<VmRef, Vec<String>>> {
        self.call("get_vms_which_prevent_evacuation").arg("self", host).invoke().await
    }

    /// Asynchronous form of [`Self::get_vms_which_prevent_evacuation`].
    pub async fn async_get_vms_which_prevent_evacuation(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("get_vms_which_prevent_evacuation").arg("self", host).invoke_async().await
    }

    /// Return a set of VMs which are not co-operating with the host's memory control system.
    pub async fn get_uncooperative_resident_vms(&self, host: &HostRef) -> Result<Vec<VmRef>> {
        self.call("get_uncooperative_resident_VMs").arg("self", host).invoke().await
    }

    /// Asynchronous form of [`Self::get_uncooperative_resident_vms`].
    pub async fn async_get_uncooperative_resident_vms(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("get_uncooperative_resident_VMs").arg("self", host).invoke_async().await
    }

    /// Migrate all VMs off of this host, where possible.
    pub async fn evacuate(
        &self,
        host: &HostRef,
        network: &NetworkRef,
        evacuate_batch_size: i64,
    ) -> Result<()> {
        self.call("evacuate")
            .arg("host", host)
            .arg("network", network)
            .arg("evacuate_batch_size", &evacuate_batch_size)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::evacuate`].
    pub async fn async_evacuate(
        &self,
        host: &HostRef,
        network: &NetworkRef,
        evacuate_batch_size: i64,
    ) -> Result<TaskRef> {
        self.call("evacuate")
            .arg("host", host)
            .arg("network", network)
            .arg("evacuate_batch_size", &evacuate_batch_size)
            .invoke_async()
            .await
    }

    /// Re-configure syslog logging.
    pub async fn syslog_reconfigure(&self, host: &HostRef) -> Result<()> {
        self.call("syslog_reconfigure").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::syslog_reconfigure`].
    pub async fn async_syslog_reconfigure(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("syslog_reconfigure").arg("host", host).invoke_async().await
    }

    /// Reconfigure the management network interface.
    pub async fn management_reconfigure(&self, pif: &PifRef) -> Result<()> {
        self.call("management_reconfigure").arg("pif", pif).invoke().await
    }

    /// Asynchronous form of [`Self::management_reconfigure`].
    pub async fn async_management_reconfigure(&self, pif: &PifRef) -> Result<TaskRef> {
        self.call("management_reconfigure").arg("pif", pif).invoke_async().await
    }

    /// Reconfigure the management network interface. Should only be used if Host.management_reconfigure is impossible because the network configuration is broken.
    pub async fn local_management_reconfigure(&self, interface: &str) -> Result<()> {
        self.call("local_management_reconfigure").arg("interface", interface).invoke().await
    }

    /// Disable the management network interface.
    pub async fn management_disable(&self) -> Result<()> {
        self.call("management_disable").invoke().await
    }

    /// Returns the management interface for the specified host.
    pub async fn get_management_interface(&self, host: &HostRef) -> Result<PifRef> {
        self.call("get_management_interface").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::get_management_interface`].
    pub async fn async_get_management_interface(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("get_management_interface").arg("host", host).invoke_async().await
    }

    /// Call `host.get_system_status_capabilities`.
    pub async fn get_system_status_capabilities(&self, host: &HostRef) -> Result<String> {
        self.call("get_system_status_capabilities").arg("host", host).invoke().await
    }

    /// Restarts the agent after a 10 second pause. WARNING: this is a dangerous operation. Any operations in progress will be aborted, and unrecoverable data loss may occur. The caller is responsible for ensuring that there are no operations in progress when this method is called.
    pub async fn restart_agent(&self, host: &HostRef) -> Result<()> {
        self.call("restart_agent").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::restart_agent`].
    pub async fn async_restart_agent(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("restart_agent").arg("host", host).invoke_async().await
    }

    /// Shuts the agent down after a 10 second pause. WARNING: this is a dangerous operation. Any operations in progress will be aborted, and unrecoverable data loss may occur. The caller is responsible for ensuring that there are no operations in progress when this method is called.
    pub async fn shutdown_agent(&self) -> Result<()> {
        self.call("shutdown_agent").invoke().await
    }

    /// Sets the host name to the specified string.  Both the API and lower-level system hostname are changed immediately.
    ///
    /// # Errors
    ///
    /// - `HOST_NAME_INVALID`: The server name is invalid.
    pub async fn set_hostname_live(&self, host: &HostRef, hostname: &str) -> Result<()> {
        self.call("set_hostname_live").arg("host", host).arg("hostname", hostname).invoke().await
    }

    /// Computes the amount of free memory on the host.
    pub async fn compute_free_memory(&self, host: &HostRef) -> Result<i64> {
        self.call("compute_free_memory").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::compute_free_memory`].
    pub async fn async_compute_free_memory(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("compute_free_memory").arg("host", host).invoke_async().await
    }

    /// Computes the virtualization memory overhead of a host.
    pub async fn compute_memory_overhead(&self, host: &HostRef) -> Result<i64> {
        self.call("compute_memory_overhead").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::compute_memory_overhead`].
    pub async fn async_compute_memory_overhead(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("compute_memory_overhead").arg("host", host).invoke_async().await
    }

    /// This causes the synchronisation of the non-database data (messages, RRDs and so on) stored on the master to be synchronised with the host.
    pub async fn sync_data(&self, host: &HostRef) -> Result<()> {
        self.call("sync_data").arg("host", host).invoke().await
    }

    /// This causes the RRDs to be backed up to the master.
    pub async fn backup_rrds(&self, host: &HostRef, delay: f64) -> Result<()> {
        self.call("backup_rrds").arg("host", host).arg("delay", &delay).invoke().await
    }

    /// Create a placeholder for a named binary blob of data that is associated with this host.
    pub async fn create_new_blob(
        &self,
        host: &HostRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<BlobRef> {
        self.call("create_new_blob")
            .arg("host", host)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_new_blob`].
    pub async fn async_create_new_blob(
        &self,
        host: &HostRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<TaskRef> {
        self.call("create_new_blob")
            .arg("host", host)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke_async()
            .await
    }

    /// Call an API plugin on this host.
    pub async fn call_plugin(
        &self,
        host: &HostRef,
        plugin: &str,
        fn_: &str,
        args: &HashMap<String, String>,
    ) -> Result<String> {
        self.call("call_plugin")
            .arg("host", host)
            .arg("plugin", plugin)
            .arg("fn", fn_)
            .arg("args", args)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::call_plugin`].
    pub async fn async_call_plugin(
        &self,
        host: &HostRef,
        plugin: &str,
        fn_: &str,
        args: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("call_plugin")
            .arg("host", host)
            .arg("plugin", plugin)
            .arg("fn", fn_)
            .arg("args", args)
            .invoke_async()
            .await
    }

    /// Return true if the extension is available on the host.
    pub async fn has_extension(&self, host: &HostRef, name: &str) -> Result<bool> {
        self.call("has_extension").arg("host", host).arg("name", name).invoke().await
    }

    /// Asynchronous form of [`Self::has_extension`].
    pub async fn async_has_extension(&self, host: &HostRef, name: &str) -> Result<TaskRef> {
        self.call("has_extension").arg("host", host).arg("name", name).invoke_async().await
    }

    /// Call an API extension on this host.
    pub async fn call_extension(&self, host: &HostRef, call: &str) -> Result<String> {
        self.call("call_extension").arg("host", host).arg("call", call).invoke().await
    }

    /// This call queries the host's clock for the current time.
    pub async fn get_servertime(&self, host: &HostRef) -> Result<DateTime<Utc>> {
        self.call("get_servertime").arg("host", host).invoke().await
    }

    /// This call queries the host's clock for the current time in the host's local timezone.
    pub async fn get_server_localtime(&self, host: &HostRef) -> Result<DateTime<Utc>> {
        self.call("get_server_localtime").arg("host", host).invoke().await
    }

    /// This call enables external authentication on a host.
    pub async fn enable_external_auth(
        &self,
        host: &HostRef,
        config: &HashMap<String, String>,
        service_name: &str,
        auth_type: &str,
    ) -> Result<()> {
        self.call("enable_external_auth")
            .arg("host", host)
            .arg("config", config)
            .arg("service_name", service_name)
            .arg("auth_type", auth_type)
            .invoke()
            .await
    }

    /// This call disables external authentication on the local host.
    pub async fn disable_external_auth(
        &self,
        host: &HostRef,
        config: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("disable_external_auth").arg("host", host).arg("config", config).invoke().await
    }

    /// Retrieves recommended host migrations to perform when evacuating the host from the wlb server. If a VM cannot be migrated from the host the reason is listed instead of a recommendation.
    pub async fn retrieve_wlb_evacuate_recommendations(
        &self,
        host: &HostRef,
    ) -> Result<HashMap<VmRef, Vec<String>>> {
        self.call("retrieve_wlb_evacuate_recommendations").arg("self", host).invoke().await
    }

    /// Asynchronous form of [`Self::retrieve_wlb_evacuate_recommendations`].
    pub async fn async_retrieve_wlb_evacuate_recommendations(
        &self,
        host: &HostRef,
    ) -> Result<TaskRef> {
        self.call("retrieve_wlb_evacuate_recommendations").arg("self", host).invoke_async().await
    }

    /// Get the installed server public TLS certificate.
    pub async fn get_server_certificate(&self, host: &HostRef) -> Result<String> {
        self.call("get_server_certificate").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::get_server_certificate`].
    pub async fn async_get_server_certificate(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("get_server_certificate").arg("host", host).invoke_async().await
    }

    /// Replace the internal self-signed host certficate with a new one.
    pub async fn refresh_server_certificate(&self, host: &HostRef) -> Result<()> {
        self.call("refresh_server_certificate").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::refresh_server_certificate`].
    pub async fn async_refresh_server_certificate(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("refresh_server_certificate").arg("host", host).invoke_async().await
    }

    /// Install the TLS server certificate.
    pub async fn install_server_certificate(
        &self,
        host: &HostRef,
        certificate: &str,
        private_key: &str,
        certificate_chain: &str,
    ) -> Result<()> {
        self.call("install_server_certificate")
            .arg("host", host)
            .arg("certificate", certificate)
            .arg("private_key", private_key)
            .arg("certificate_chain", certificate_chain)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::install_server_certificate`].
    pub async fn async_install_server_certificate(
        &self,
        host: &HostRef,
        certificate: &str,
        private_key: &str,
        certificate_chain: &str,
    ) -> Result<TaskRef> {
        self.call("install_server_certificate")
            .arg("host", host)
            .arg("certificate", certificate)
            .arg("private_key", private_key)
            .arg("certificate_chain", certificate_chain)
            .invoke_async()
            .await
    }

    /// Delete the current TLS server certificate and replace by a new, self-signed one. This should only be used with extreme care.
    pub async fn emergency_reset_server_certificate(&self) -> Result<()> {
        self.call("emergency_reset_server_certificate").invoke().await
    }

    /// Delete the current TLS server certificate and replace by a new, self-signed one. This should only be used with extreme care.
    pub async fn reset_server_certificate(&self, host: &HostRef) -> Result<()> {
        self.call("reset_server_certificate").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::reset_server_certificate`].
    pub async fn async_reset_server_certificate(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("reset_server_certificate").arg("host", host).invoke_async().await
    }

    /// Change to another edition, or reactivate the current edition after a license has expired. This may be subject to the successful checkout of an appropriate license.
    pub async fn apply_edition(&self, host: &HostRef, edition: &str, force: bool) -> Result<()> {
        self.call("apply_edition")
            .arg("host", host)
            .arg("edition", edition)
            .arg("force", &force)
            .invoke()
            .await
    }

    /// Refresh the list of installed Supplemental Packs.
    pub async fn refresh_pack_info(&self, host: &HostRef) -> Result<()> {
        self.call("refresh_pack_info").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::refresh_pack_info`].
    pub async fn async_refresh_pack_info(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("refresh_pack_info").arg("host", host).invoke_async().await
    }

    /// Set the power-on-mode, host, user and password.
    pub async fn set_power_on_mode(
        &self,
        host: &HostRef,
        power_on_mode: &str,
        power_on_config: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("set_power_on_mode")
            .arg("self", host)
            .arg("power_on_mode", power_on_mode)
            .arg("power_on_config", power_on_config)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_power_on_mode`].
    pub async fn async_set_power_on_mode(
        &self,
        host: &HostRef,
        power_on_mode: &str,
        power_on_config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("set_power_on_mode")
            .arg("self", host)
            .arg("power_on_mode", power_on_mode)
            .arg("power_on_config", power_on_config)
            .invoke_async()
            .await
    }

    /// Set the CPU features to be used after a reboot, if the given features string is valid.
    pub async fn set_cpu_features(&self, host: &HostRef, features: &str) -> Result<()> {
        self.call("set_cpu_features").arg("host", host).arg("features", features).invoke().await
    }

    /// Remove the feature mask, such that after a reboot all features of the CPU are enabled.
    pub async fn reset_cpu_features(&self, host: &HostRef) -> Result<()> {
        self.call("reset_cpu_features").arg("host", host).invoke().await
    }

    /// Enable the use of a local SR for caching purposes.
    pub async fn enable_local_storage_caching(&self, host: &HostRef, sr: &SrRef) -> Result<()> {
        self.call("enable_local_storage_caching").arg("host", host).arg("sr", sr).invoke().await
    }

    /// Disable the use of a local SR for caching purposes.
    pub async fn disable_local_storage_caching(&self, host: &HostRef) -> Result<()> {
        self.call("disable_local_storage_caching").arg("host", host).invoke().await
    }

    /// Prepare to receive a VM, returning a token which can be passed to VM.migrate.
    pub async fn migrate_receive(
        &self,
        host: &HostRef,
        network: &NetworkRef,
        options: &HashMap<String, String>,
    ) -> Result<HashMap<String, String>> {
        self.call("migrate_receive")
            .arg("host", host)
            .arg("network", network)
            .arg("options", options)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::migrate_receive`].
    pub async fn async_migrate_receive(
        &self,
        host: &HostRef,
        network: &NetworkRef,
        options: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("migrate_receive")
            .arg("host", host)
            .arg("network", network)
            .arg("options", options)
            .invoke_async()
            .await
    }

    /// Declare that a host is dead. This is a dangerous operation, and should only be called if the administrator is absolutely sure the host is definitely dead.
    pub async fn declare_dead(&self, host: &HostRef) -> Result<()> {
        self.call("declare_dead").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::declare_dead`].
    pub async fn async_declare_dead(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("declare_dead").arg("host", host).invoke_async().await
    }

    /// Enable console output to the physical display device next time this host boots.
    pub async fn enable_display(&self, host: &HostRef) -> Result<HostDisplay> {
        self.call("enable_display").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::enable_display`].
    pub async fn async_enable_display(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("enable_display").arg("host", host).invoke_async().await
    }

    /// Disable console output to the physical display device next time this host boots.
    pub async fn disable_display(&self, host: &HostRef) -> Result<HostDisplay> {
        self.call("disable_display").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::disable_display`].
    pub async fn async_disable_display(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("disable_display").arg("host", host).invoke_async().await
    }

    /// Enable/disable SSLv3 for interoperability with older server versions. When this is set to a different value, the host immediately restarts its SSL/TLS listening service; typically this takes less than a second but existing connections to it will be broken. API login sessions will remain valid.
    pub async fn set_ssl_legacy(&self, host: &HostRef, value: bool) -> Result<()> {
        self.call("set_ssl_legacy").arg("self", host).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_ssl_legacy`].
    pub async fn async_set_ssl_legacy(&self, host: &HostRef, value: bool) -> Result<TaskRef> {
        self.call("set_ssl_legacy").arg("self", host).arg("value", &value).invoke_async().await
    }

    /// Sets the initiator IQN for the host.
    pub async fn set_iscsi_iqn(&self, host: &HostRef, value: &str) -> Result<()> {
        self.call("set_iscsi_iqn").arg("host", host).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_iscsi_iqn`].
    pub async fn async_set_iscsi_iqn(&self, host: &HostRef, value: &str) -> Result<TaskRef> {
        self.call("set_iscsi_iqn").arg("host", host).arg("value", value).invoke_async().await
    }

    /// Specifies whether multipathing is enabled.
    pub async fn set_multipathing(&self, host: &HostRef, value: bool) -> Result<()> {
        self.call("set_multipathing").arg("host", host).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_multipathing`].
    pub async fn async_set_multipathing(&self, host: &HostRef, value: bool) -> Result<TaskRef> {
        self.call("set_multipathing").arg("host", host).arg("value", &value).invoke_async().await
    }

    /// Sets the UEFI certificates on a host.
    pub async fn set_uefi_certificates(&self, host: &HostRef, value: &str) -> Result<()> {
        self.call("set_uefi_certificates").arg("host", host).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_uefi_certificates`].
    pub async fn async_set_uefi_certificates(
        &self,
        host: &HostRef,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("set_uefi_certificates")
            .arg("host", host)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Sets xen's sched-gran on a host. See: https://xenbits.xen.org/docs/unstable/misc/xen-command-line.html#sched-gran-x86.
    pub async fn set_sched_gran(&self, host: &HostRef, value: HostSchedGran) -> Result<()> {
        self.call("set_sched_gran").arg("self", host).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_sched_gran`].
    pub async fn async_set_sched_gran(
        &self,
        host: &HostRef,
        value: HostSchedGran,
    ) -> Result<TaskRef> {
        self.call("set_sched_gran").arg("self", host).arg("value", &value).invoke_async().await
    }

    /// Gets xen's sched-gran on a host.
    pub async fn get_sched_gran(&self, host: &HostRef) -> Result<HostSchedGran> {
        self.call("get_sched_gran").arg("self", host).invoke().await
    }

    /// Asynchronous form of [`Self::get_sched_gran`].
    pub async fn async_get_sched_gran(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("get_sched_gran").arg("self", host).invoke_async().await
    }

    /// Set VM placement NUMA affinity policy.
    pub async fn set_numa_affinity_policy(
        &self,
        host: &HostRef,
        value: HostNumaAffinityPolicy,
    ) -> Result<()> {
        self.call("set_numa_affinity_policy").arg("self", host).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_numa_affinity_policy`].
    pub async fn async_set_numa_affinity_policy(
        &self,
        host: &HostRef,
        value: HostNumaAffinityPolicy,
    ) -> Result<TaskRef> {
        self.call("set_numa_affinity_policy")
            .arg("self", host)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Disable TLS verification for this host only.
    pub async fn emergency_disable_tls_verification(&self) -> Result<()> {
        self.call("emergency_disable_tls_verification").invoke().await
    }

    /// Reenable TLS verification for this host only.
    pub async fn emergency_reenable_tls_verification(&self) -> Result<()> {
        self.call("emergency_reenable_tls_verification").invoke().await
    }

    /// Apply updates from current enabled repository on a host.
    pub async fn apply_updates(&self, host: &HostRef, hash: &str) -> Result<Vec<Vec<String>>> {
        self.call("apply_updates").arg("self", host).arg("hash", hash).invoke().await
    }

    /// Asynchronous form of [`Self::apply_updates`].
    pub async fn async_apply_updates(&self, host: &HostRef, hash: &str) -> Result<TaskRef> {
        self.call("apply_updates").arg("self", host).arg("hash", hash).invoke_async().await
    }

    /// Updates the host firewall to open or close port 80 depending on the value.
    pub async fn set_https_only(&self, host: &HostRef, value: bool) -> Result<()> {
        self.call("set_https_only").arg("self", host).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_https_only`].
    pub async fn async_set_https_only(&self, host: &HostRef, value: bool) -> Result<TaskRef> {
        self.call("set_https_only").arg("self", host).arg("value", &value).invoke_async().await
    }

    /// Apply all recommended guidances both on the host and on all HVM VMs on the host after updates are applied on the host.
    pub async fn apply_recommended_guidances(&self, host: &HostRef) -> Result<()> {
        self.call("apply_recommended_guidances").arg("self", host).invoke().await
    }

    /// Asynchronous form of [`Self::apply_recommended_guidances`].
    pub async fn async_apply_recommended_guidances(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("apply_recommended_guidances").arg("self", host).invoke_async().await
    }

    /// Clear the pending mandatory guidance on this host.
    pub async fn emergency_clear_mandatory_guidance(&self) -> Result<()> {
        self.call("emergency_clear_mandatory_guidance").invoke().await
    }
}
