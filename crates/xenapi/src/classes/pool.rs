//! `pool`: Pool-wide information.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{PoolAllowedOperations, TelemetryFrequency, UpdateSyncFrequency};
use crate::refs::{
    BlobRef, HostRef, NetworkRef, PifRef, PoolRef, RepositoryRef, SecretRef, SrRef, TaskRef, VdiRef,
    VmRef,
};
use crate::Result;

/// Marker for the `pool` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool;

impl XenClass for Pool {
    const NAME: &'static str = "pool";
    type Ref = PoolRef;
    type Record = PoolRecord;
}

xen_record! {
    /// Pool-wide information.
    PoolRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Short name.
        name_label: String => "name_label",
        /// Description.
        name_description: String => "name_description",
        /// The host that is pool master.
        master: HostRef => "master",
        /// Default SR for VDIs.
        default_sr: SrRef => "default_SR",
        /// The SR in which VDIs for suspend images are created.
        suspend_image_sr: SrRef => "suspend_image_SR",
        /// The SR in which VDIs for crash dumps are created.
        crash_dump_sr: SrRef => "crash_dump_SR",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// True if HA is enabled on the pool, false otherwise.
        ha_enabled: bool => "ha_enabled",
        /// The current HA configuration.
        ha_configuration: HashMap<String, String> => "ha_configuration",
        /// HA statefile VDIs in use.
        ha_statefiles: Vec<String> => "ha_statefiles",
        /// Number of host failures to tolerate before the Pool is declared to be overcommitted.
        ha_host_failures_to_tolerate: i64 => "ha_host_failures_to_tolerate",
        /// Number of future host failures we have managed to find a plan for. Once this reaches zero any future host failures will cause the failure of protected VMs.
        ha_plan_exists_for: i64 => "ha_plan_exists_for",
        /// If set to false then operations which would cause the Pool to become overcommitted will be blocked.
        ha_allow_overcommit: bool => "ha_allow_overcommit",
        /// True if the Pool is considered to be overcommitted i.e. if there exist insufficient physical resources to tolerate the configured number of host failures.
        ha_overcommitted: bool => "ha_overcommitted",
        /// Binary blobs associated with this pool.
        blobs: HashMap<String, BlobRef> => "blobs",
        /// User-specified tags for categorization purposes.
        tags: Vec<String> => "tags",
        /// Gui-specific configuration for pool.
        gui_config: HashMap<String, String> => "gui_config",
        /// Configuration for the automatic health check feature.
        health_check_config: HashMap<String, String> => "health_check_config",
        /// Url for the configured workload balancing host.
        wlb_url: String => "wlb_url",
        /// Username for accessing the workload balancing host.
        wlb_username: String => "wlb_username",
        /// True if workload balancing is enabled on the pool, false otherwise.
        wlb_enabled: bool => "wlb_enabled",
        /// True if communication with the WLB server should enforce TLS certificate verification.
        wlb_verify_cert: bool => "wlb_verify_cert",
        /// True a redo-log is to be used other than when HA is enabled, false otherwise.
        redo_log_enabled: bool => "redo_log_enabled",
        /// Indicates the VDI to use for the redo-log other than when HA is enabled.
        redo_log_vdi: VdiRef => "redo_log_vdi",
        /// Address of the vswitch controller.
        vswitch_controller: String => "vswitch_controller",
        /// Pool-wide restrictions currently in effect.
        restrictions: HashMap<String, String> => "restrictions",
        /// The set of currently known metadata VDIs for this pool.
        metadata_vdis: Vec<VdiRef> => "metadata_VDIs",
        /// The HA cluster stack that is currently in use. Only valid when HA is enabled.
        ha_cluster_stack: String => "ha_cluster_stack",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<PoolAllowedOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, PoolAllowedOperations> => "current_operations",
        /// Pool-wide guest agent configuration information.
        guest_agent_config: HashMap<String, String> => "guest_agent_config",
        /// Details about the physical CPUs on the pool.
        cpu_info: HashMap<String, String> => "cpu_info",
        /// The pool-wide policy for clients on whether to use the vendor device or not on newly created VMs. This field will also be consulted if the 'has_vendor_device' field is not specified in the VM.create call.
        policy_no_vendor_device: bool => "policy_no_vendor_device",
        /// The pool-wide flag to show if the live patching feauture is disabled or not.
        live_patching_disabled: bool => "live_patching_disabled",
        /// True if IGMP snooping is enabled in the pool, false otherwise.
        igmp_snooping_enabled: bool => "igmp_snooping_enabled",
        /// The UEFI certificates allowing Secure Boot.
        uefi_certificates: String => "uefi_certificates",
        /// Custom UEFI certificates allowing Secure Boot.
        custom_uefi_certificates: String => "custom_uefi_certificates",
        /// True if either a PSR is running or we are waiting for a PSR to be re-run.
        is_psr_pending: bool => "is_psr_pending",
        /// True iff TLS certificate verification is enabled.
        tls_verification_enabled: bool => "tls_verification_enabled",
        /// The set of currently enabled repositories.
        repositories: Vec<RepositoryRef> => "repositories",
        /// True if authentication by TLS client certificates is enabled.
        client_certificate_auth_enabled: bool => "client_certificate_auth_enabled",
        /// The name (CN/SAN) that an incoming client certificate must have to allow authentication.
        client_certificate_auth_name: String => "client_certificate_auth_name",
        /// Url of the proxy used in syncing with the enabled repositories.
        repository_proxy_url: String => "repository_proxy_url",
        /// Username for the authentication of the proxy used in syncing with the enabled repositories.
        repository_proxy_username: String => "repository_proxy_username",
        /// Password for the authentication of the proxy used in syncing with the enabled repositories.
        repository_proxy_password: SecretRef => "repository_proxy_password",
        /// Default behaviour during migration, True if stream compression should be used.
        migration_compression: bool => "migration_compression",
        /// True if bias against pool master when scheduling vms is enabled, false otherwise.
        coordinator_bias: bool => "coordinator_bias",
        /// Maximum number of threads to use for PAM authentication.
        local_auth_max_threads: i64 => "local_auth_max_threads",
        /// Maximum number of threads to use for external (AD) authentication.
        ext_auth_max_threads: i64 => "ext_auth_max_threads",
        /// The UUID of the pool for identification of telemetry data.
        telemetry_uuid: SecretRef => "telemetry_uuid",
        /// How often the telemetry collection will be carried out.
        telemetry_frequency: TelemetryFrequency => "telemetry_frequency",
        /// The earliest timestamp (in UTC) when the next round of telemetry collection can be carried out.
        telemetry_next_collection: DateTime<Utc> => "telemetry_next_collection",
        /// Time of the last update sychronization.
        last_update_sync: DateTime<Utc> => "last_update_sync",
        /// The frequency at which updates are synchronized from a remote CDN: daily or weekly.
        update_sync_frequency: UpdateSyncFrequency => "update_sync_frequency",
        /// The day of the week the update synchronizations will be scheduled, based on pool's local timezone. Ignored when update_sync_frequency is daily.
        update_sync_day: i64 => "update_sync_day",
        /// Whether periodic update synchronization is enabled or not.
        update_sync_enabled: bool => "update_sync_enabled",
    }
}

getters! {
    Pool, PoolRef {
        /// Get the uuid field of the given pool.
        get_uuid => "get_uuid": String,
        /// Get the name_label field of the given pool.
        get_name_label => "get_name_label": String,
        /// Get the name_description field of the given pool.
        get_name_description => "get_name_description": String,
        /// Get the master field of the given pool.
        get_master => "get_master": HostRef,
        /// Get the default_SR field of the given pool.
        get_default_sr => "get_default_SR": SrRef,
        /// Get the suspend_image_SR field of the given pool.
        get_suspend_image_sr => "get_suspend_image_SR": SrRef,
        /// Get the crash_dump_SR field of the given pool.
        get_crash_dump_sr => "get_crash_dump_SR": SrRef,
        /// Get the other_config field of the given pool.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the ha_enabled field of the given pool.
        get_ha_enabled => "get_ha_enabled": bool,
        /// Get the ha_configuration field of the given pool.
        get_ha_configuration => "get_ha_configuration": HashMap<String, String>,
        /// Get the ha_statefiles field of the given pool.
        get_ha_statefiles => "get_ha_statefiles": Vec<String>,
        /// Get the ha_host_failures_to_tolerate field of the given pool.
        get_ha_host_failures_to_tolerate => "get_ha_host_failures_to_tolerate": i64,
        /// Get the ha_plan_exists_for field of the given pool.
        get_ha_plan_exists_for => "get_ha_plan_exists_for": i64,
        /// Get the ha_allow_overcommit field of the given pool.
        get_ha_allow_overcommit => "get_ha_allow_overcommit": bool,
        /// Get the ha_overcommitted field of the given pool.
        get_ha_overcommitted => "get_ha_overcommitted": bool,
        /// Get the blobs field of the given pool.
        get_blobs => "get_blobs": HashMap<String, BlobRef>,
        /// Get the tags field of the given pool.
        get_tags => "get_tags": Vec<String>,
        /// Get the gui_config field of the given pool.
        get_gui_config => "get_gui_config": HashMap<String, String>,
        /// Get the health_check_config field of the given pool.
        get_health_check_config => "get_health_check_config": HashMap<String, String>,
        /// Get the wlb_url field of the given pool.
        get_wlb_url => "get_wlb_url": String,
        /// Get the wlb_username field of the given pool.
        get_wlb_username => "get_wlb_username": String,
        /// Get the wlb_enabled field of the given pool.
        get_wlb_enabled => "get_wlb_enabled": bool,
        /// Get the wlb_verify_cert field of the given pool.
        get_wlb_verify_cert => "get_wlb_verify_cert": bool,
        /// Get the redo_log_enabled field of the given pool.
        get_redo_log_enabled => "get_redo_log_enabled": bool,
        /// Get the redo_log_vdi field of the given pool.
        get_redo_log_vdi => "get_redo_log_vdi": VdiRef,
        /// Get the vswitch_controller field of the given pool.
        get_vswitch_controller => "get_vswitch_controller": String,
        /// Get the restrictions field of the given pool.
        get_restrictions => "get_restrictions": HashMap<String, String>,
        /// Get the metadata_VDIs field of the given pool.
        get_metadata_vdis => "get_metadata_VDIs": Vec<VdiRef>,
        /// Get the ha_cluster_stack field of the given pool.
        get_ha_cluster_stack => "get_ha_cluster_stack": String,
        /// Get the allowed_operations field of the given pool.
        get_allowed_operations => "get_allowed_operations": Vec<PoolAllowedOperations>,
        /// Get the current_operations field of the given pool.
        get_current_operations => "get_current_operations": HashMap<String, PoolAllowedOperations>,
        /// Get the guest_agent_config field of the given pool.
        get_guest_agent_config => "get_guest_agent_config": HashMap<String, String>,
        /// Get the cpu_info field of the given pool.
        get_cpu_info => "get_cpu_info": HashMap<String, String>,
        /// Get the policy_no_vendor_device field of the given pool.
        get_policy_no_vendor_device => "get_policy_no_vendor_device": bool,
        /// Get the live_patching_disabled field of the given pool.
        get_live_patching_disabled => "get_live_patching_disabled": bool,
        /// Get the igmp_snooping_enabled field of the given pool.
        get_igmp_snooping_enabled => "get_igmp_snooping_enabled": bool,
        /// Get the uefi_certificates field of the given pool.
        get_uefi_certificates => "get_uefi_certificates": String,
        /// Get the custom_uefi_certificates field of the given pool.
        get_custom_uefi_certificates => "get_custom_uefi_certificates": String,
        /// Get the is_psr_pending field of the given pool.
        get_is_psr_pending => "get_is_psr_pending": bool,
        /// Get the tls_verification_enabled field of the given pool.
        get_tls_verification_enabled => "get_tls_verification_enabled": bool,
        /// Get the repositories field of the given pool.
        get_repositories => "get_repositories": Vec<RepositoryRef>,
        /// Get the client_certificate_auth_enabled field of the given pool.
        get_client_certificate_auth_enabled => "get_client_certificate_auth_enabled": bool,
        /// Get the client_certificate_auth_name field of the given pool.
        get_client_certificate_auth_name => "get_client_certificate_auth_name": String,
        /// Get the repository_proxy_url field of the given pool.
        get_repository_proxy_url => "get_repository_proxy_url": String,
        /// Get the repository_proxy_username field of the given pool.
        get_repository_proxy_username => "get_repository_proxy_username": String,
        /// Get the repository_proxy_password field of the given pool.
        get_repository_proxy_password => "get_repository_proxy_password": SecretRef,
        /// Get the migration_compression field of the given pool.
        get_migration_compression => "get_migration_compression": bool,
        /// Get the coordinator_bias field of the given pool.
        get_coordinator_bias => "get_coordinator_bias": bool,
        /// Get the local_auth_max_threads field of the given pool.
        get_local_auth_max_threads => "get_local_auth_max_threads": i64,
        /// Get the ext_auth_max_threads field of the given pool.
        get_ext_auth_max_threads => "get_ext_auth_max_threads": i64,
        /// Get the telemetry_uuid field of the given pool.
        get_telemetry_uuid => "get_telemetry_uuid": SecretRef,
        /// Get the telemetry_frequency field of the given pool.
        get_telemetry_frequency => "get_telemetry_frequency": TelemetryFrequency,
        /// Get the telemetry_next_collection field of the given pool.
        get_telemetry_next_collection => "get_telemetry_next_collection": DateTime<Utc>,
        /// Get the last_update_sync field of the given pool.
        get_last_update_sync => "get_last_update_sync": DateTime<Utc>,
        /// Get the update_sync_frequency field of the given pool.
        get_update_sync_frequency => "get_update_sync_frequency": UpdateSyncFrequency,
        /// Get the update_sync_day field of the given pool.
        get_update_sync_day => "get_update_sync_day": i64,
        /// Get the update_sync_enabled field of the given pool.
        get_update_sync_enabled => "get_update_sync_enabled": bool,
    }
}

setters! {
    Pool, PoolRef {
        /// Set the name_label field of the given pool.
        set_name_label => "set_name_label": &str,
        /// Set the name_description field of the given pool.
        set_name_description => "set_name_description": &str,
        /// Set the default_SR field of the given pool.
        set_default_sr => "set_default_SR": &SrRef,
        /// Set the suspend_image_SR field of the given pool.
        set_suspend_image_sr => "set_suspend_image_SR": &SrRef,
        /// Set the crash_dump_SR field of the given pool.
        set_crash_dump_sr => "set_crash_dump_SR": &SrRef,
        /// Set the other_config field of the given pool.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the ha_allow_overcommit field of the given pool.
        set_ha_allow_overcommit => "set_ha_allow_overcommit": bool,
        /// Set the tags field of the given pool.
        set_tags => "set_tags": &[String],
        /// Set the gui_config field of the given pool.
        set_gui_config => "set_gui_config": &HashMap<String, String>,
        /// Set the health_check_config field of the given pool.
        set_health_check_config => "set_health_check_config": &HashMap<String, String>,
        /// Set the wlb_enabled field of the given pool.
        set_wlb_enabled => "set_wlb_enabled": bool,
        /// Set the wlb_verify_cert field of the given pool.
        set_wlb_verify_cert => "set_wlb_verify_cert": bool,
        /// Set the policy_no_vendor_device field of the given pool.
        set_policy_no_vendor_device => "set_policy_no_vendor_device": bool,
        /// Set the live_patching_disabled field of the given pool.
        set_live_patching_disabled => "set_live_patching_disabled": bool,
        /// Set the is_psr_pending field of the given pool.
        set_is_psr_pending => "set_is_psr_pending": bool,
        /// Set the migration_compression field of the given pool.
        set_migration_compression => "set_migration_compression": bool,
        /// Set the coordinator_bias field of the given pool.
        set_coordinator_bias => "set_coordinator_bias": bool,
        /// Call `pool.set_local_auth_max_threads`.
        set_local_auth_max_threads => "set_local_auth_max_threads": i64,
        /// Call `pool.set_ext_auth_max_threads`.
        set_ext_auth_max_threads => "set_ext_auth_max_threads": i64,
    }
}

map_mutators! {
    Pool, PoolRef {
        /// Add the given key-value pair to the gui_config field of the given pool.
        add_to_gui_config, remove_from_gui_config => "gui_config": &str => &str,
        /// Add the given key-value pair to the health_check_config field of the given pool.
        add_to_health_check_config, remove_from_health_check_config => "health_check_config": &str => &str,
        /// Add the given key-value pair to the other_config field of the given pool.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Pool> {
    /// Get a record containing the current state of the given pool.
    pub async fn get_record(&self, pool: &PoolRef) -> Result<PoolRecord> {
        self.call("get_record").arg("self", pool).invoke().await
    }

    /// Get a reference to the pool instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PoolRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the pools known to the system.
    pub async fn get_all(&self) -> Result<Vec<PoolRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of pool references to pool records for all pools known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<PoolRef, PoolRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Add the given value to the tags field of the given pool.  If the value is already in that Set, then do nothing.
    pub async fn add_tags(&self, pool: &PoolRef, value: &str) -> Result<()> {
        self.call("add_tags").arg("self", pool).arg("value", value).invoke().await
    }

    /// Remove the given value from the tags field of the given pool.  If the value is not in that Set, then do nothing.
    pub async fn remove_tags(&self, pool: &PoolRef, value: &str) -> Result<()> {
        self.call("remove_tags").arg("self", pool).arg("value", value).invoke().await
    }

    /// Instruct host to join a new pool.
    ///
    /// # Errors
    ///
    /// - `JOINING_HOST_CANNOT_CONTAIN_SHARED_SRS`: The server joining the pool cannot contain any shared storage.
    pub async fn join(
        &self,
        master_address: &str,
        master_username: &str,
        master_password: &str,
    ) -> Result<()> {
        self.call("join")
            .arg("master_address", master_address)
            .arg("master_username", master_username)
            .arg("master_password", master_password)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::join`].
    pub async fn async_join(
        &self,
        master_address: &str,
        master_username: &str,
        master_password: &str,
    ) -> Result<TaskRef> {
        self.call("join")
            .arg("master_address", master_address)
            .arg("master_username", master_username)
            .arg("master_password", master_password)
            .invoke_async()
            .await
    }

    /// Instruct host to join a new pool.
    pub async fn join_force(
        &self,
        master_address: &str,
        master_username: &str,
        master_password: &str,
    ) -> Result<()> {
        self.call("join_force")
            .arg("master_address", master_address)
            .arg("master_username", master_username)
            .arg("master_password", master_password)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::join_force`].
    pub async fn async_join_force(
        &self,
        master_address: &str,
        master_username: &str,
        master_password: &str,
    ) -> Result<TaskRef> {
        self.call("join_force")
            .arg("master_address", master_address)
            .arg("master_username", master_username)
            .arg("master_password", master_password)
            .invoke_async()
            .await
    }

    /// Instruct a pool master to eject a host from the pool.
    pub async fn eject(&self, host: &HostRef) -> Result<()> {
        self.call("eject").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::eject`].
    pub async fn async_eject(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("eject").arg("host", host).invoke_async().await
    }

    /// Instruct host that's currently a slave to transition to being master.
    pub async fn emergency_transition_to_master(&self) -> Result<()> {
        self.call("emergency_transition_to_master").invoke().await
    }

    /// Instruct a slave already in a pool that the master has changed.
    pub async fn emergency_reset_master(&self, master_address: &str) -> Result<()> {
        self.call("emergency_reset_master").arg("master_address", master_address).invoke().await
    }

    /// Instruct a pool master, M, to try and contact its slaves and, if slaves are in emergency mode, reset their master address to M.
    pub async fn recover_slaves(&self) -> Result<Vec<HostRef>> {
        self.call("recover_slaves").invoke().await
    }

    /// Asynchronous form of [`Self::recover_slaves`].
    pub async fn async_recover_slaves(&self) -> Result<TaskRef> {
        self.call("recover_slaves").invoke_async().await
    }

    /// Create PIFs, mapping a network to the same physical interface/VLAN on each host. This call is deprecated: use Pool.create_VLAN_from_PIF instead.
    ///
    /// # Errors
    ///
    /// - `VLAN_TAG_INVALID`: You tried to create a VLAN, but the tag you gave was invalid -- it must be between 0 and 4094. The parameter echoes the VLAN tag you gave.
    pub async fn create_vlan(
        &self,
        device: &str,
        network: &NetworkRef,
        vlan: i64,
    ) -> Result<Vec<PifRef>> {
        self.call("create_VLAN")
            .arg("device", device)
            .arg("network", network)
            .arg("VLAN", &vlan)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_vlan`].
    pub async fn async_create_vlan(
        &self,
        device: &str,
        network: &NetworkRef,
        vlan: i64,
    ) -> Result<TaskRef> {
        self.call("create_VLAN")
            .arg("device", device)
            .arg("network", network)
            .arg("VLAN", &vlan)
            .invoke_async()
            .await
    }

    /// Reconfigure the management network interface for all Hosts in the Pool.
    ///
    /// # Errors
    ///
    /// - `HA_IS_ENABLED`: The operation could not be performed because HA is enabled on the Pool.
    /// - `PIF_NOT_PRESENT`: This host has no PIF on the given network.
    /// - `CANNOT_PLUG_BOND_SLAVE`: This PIF is a bond member and cannot be plugged.
    /// - `PIF_INCOMPATIBLE_PRIMARY_ADDRESS_TYPE`: The primary address types are not compatible.
    /// - `PIF_HAS_NO_NETWORK_CONFIGURATION`: PIF has no IP configuration (mode currently set to 'none')
    /// - `PIF_HAS_NO_V6_NETWORK_CONFIGURATION`: PIF has no IPv6 configuration (mode currently set to 'none')
    pub async fn management_reconfigure(&self, network: &NetworkRef) -> Result<()> {
        self.call("management_reconfigure").arg("network", network).invoke().await
    }

    /// Asynchronous form of [`Self::management_reconfigure`].
    pub async fn async_management_reconfigure(&self, network: &NetworkRef) -> Result<TaskRef> {
        self.call("management_reconfigure").arg("network", network).invoke_async().await
    }

    /// Create a pool-wide VLAN by taking the PIF.
    ///
    /// # Errors
    ///
    /// - `VLAN_TAG_INVALID`: You tried to create a VLAN, but the tag you gave was invalid -- it must be between 0 and 4094. The parameter echoes the VLAN tag you gave.
    pub async fn create_vlan_from_pif(
        &self,
        pif: &PifRef,
        network: &NetworkRef,
        vlan: i64,
    ) -> Result<Vec<PifRef>> {
        self.call("create_VLAN_from_PIF")
            .arg("pif", pif)
            .arg("network", network)
            .arg("VLAN", &vlan)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_vlan_from_pif`].
    pub async fn async_create_vlan_from_pif(
        &self,
        pif: &PifRef,
        network: &NetworkRef,
        vlan: i64,
    ) -> Result<TaskRef> {
        self.call("create_VLAN_from_PIF")
            .arg("pif", pif)
            .arg("network", network)
            .arg("VLAN", &vlan)
            .invoke_async()
            .await
    }

    /// Turn on High Availability mode.
    pub async fn enable_ha(
        &self,
        heartbeat_srs: &[SrRef],
        configuration: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("enable_ha")
            .arg("heartbeat_srs", heartbeat_srs)
            .arg("configuration", configuration)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::enable_ha`].
    pub async fn async_enable_ha(
        &self,
        heartbeat_srs: &[SrRef],
        configuration: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("enable_ha")
            .arg("heartbeat_srs", heartbeat_srs)
            .arg("configuration", configuration)
            .invoke_async()
            .await
    }

    /// Turn off High Availability mode.
    pub async fn disable_ha(&self) -> Result<()> {
        self.call("disable_ha").invoke().await
    }

    /// Asynchronous form of [`Self::disable_ha`].
    pub async fn async_disable_ha(&self) -> Result<TaskRef> {
        self.call("disable_ha").invoke_async().await
    }

    /// Forcibly synchronise the database now.
    pub async fn sync_database(&self) -> Result<()> {
        self.call("sync_database").invoke().await
    }

    /// Asynchronous form of [`Self::sync_database`].
    pub async fn async_sync_database(&self) -> Result<TaskRef> {
        self.call("sync_database").invoke_async().await
    }

    /// Perform an orderly handover of the role of master to the referenced host.
    pub async fn designate_new_master(&self, host: &HostRef) -> Result<()> {
        self.call("designate_new_master").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::designate_new_master`].
    pub async fn async_designate_new_master(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("designate_new_master").arg("host", host).invoke_async().await
    }

    /// When this call returns the VM restart logic will not run for the requested number of seconds. If the argument is zero then the restart thread is immediately unblocked.
    pub async fn ha_prevent_restarts_for(&self, seconds: i64) -> Result<()> {
        self.call("ha_prevent_restarts_for").arg("seconds", &seconds).invoke().await
    }

    /// Returns true if a VM failover plan exists for up to 'n' host failures.
    pub async fn ha_failover_plan_exists(&self, n: i64) -> Result<bool> {
        self.call("ha_failover_plan_exists").arg("n", &n).invoke().await
    }

    /// Returns the maximum number of host failures we could tolerate before we would be unable to restart configured VMs.
    pub async fn ha_compute_max_host_failures_to_tolerate(&self) -> Result<i64> {
        self.call("ha_compute_max_host_failures_to_tolerate").invoke().await
    }

    /// Returns the maximum number of host failures we could tolerate before we would be unable to restart the provided VMs.
    pub async fn ha_compute_hypothetical_max_host_failures_to_tolerate(
        &self,
        configuration: &HashMap<VmRef, String>,
    ) -> Result<i64> {
        self.call("ha_compute_hypothetical_max_host_failures_to_tolerate")
            .arg("configuration", configuration)
            .invoke()
            .await
    }

    /// Return a VM failover plan assuming a given subset of hosts fail.
    pub async fn ha_compute_vm_failover_plan(
        &self,
        failed_hosts: &[HostRef],
        failed_vms: &[VmRef],
    ) -> Result<HashMap<VmRef, HashMap<String, String>>> {
        self.call("ha_compute_vm_failover_plan")
            .arg("failed_hosts", failed_hosts)
            .arg("failed_vms", failed_vms)
            .invoke()
            .await
    }

    /// Set the maximum number of host failures to consider in the HA VM restart planner.
    pub async fn set_ha_host_failures_to_tolerate(&self, pool: &PoolRef, value: i64) -> Result<()> {
        self.call("set_ha_host_failures_to_tolerate")
            .arg("self", pool)
            .arg("value", &value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_ha_host_failures_to_tolerate`].
    pub async fn async_set_ha_host_failures_to_tolerate(
        &self,
        pool: &PoolRef,
        value: i64,
    ) -> Result<TaskRef> {
        self.call("set_ha_host_failures_to_tolerate")
            .arg("self", pool)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Create a placeholder for a named binary blob of data that is associated with this pool.
    pub async fn create_new_blob(
        &self,
        pool: &PoolRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<BlobRef> {
        self.call("create_new_blob")
            .arg("pool", pool)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_new_blob`].
    pub async fn async_create_new_blob(
        &self,
        pool: &PoolRef,
        name: &str,
        mime_type: &str,
        public: bool,
    ) -> Result<TaskRef> {
        self.call("create_new_blob")
            .arg("pool", pool)
            .arg("name", name)
            .arg("mime_type", mime_type)
            .arg("public", &public)
            .invoke_async()
            .await
    }

    /// This call enables external authentication on all the hosts of the pool.
    pub async fn enable_external_auth(
        &self,
        pool: &PoolRef,
        config: &HashMap<String, String>,
        service_name: &str,
        auth_type: &str,
    ) -> Result<()> {
        self.call("enable_external_auth")
            .arg("pool", pool)
            .arg("config", config)
            .arg("service_name", service_name)
            .arg("auth_type", auth_type)
            .invoke()
            .await
    }

    /// This call disables external authentication on all the hosts of the pool.
    pub async fn disable_external_auth(
        &self,
        pool: &PoolRef,
        config: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("disable_external_auth").arg("pool", pool).arg("config", config).invoke().await
    }

    /// This call asynchronously detects if the external authentication configuration in any slave is different from that in the master and raises appropriate alerts.
    pub async fn detect_nonhomogeneous_external_auth(&self, pool: &PoolRef) -> Result<()> {
        self.call("detect_nonhomogeneous_external_auth").arg("pool", pool).invoke().await
    }

    /// Initializes workload balancing monitoring on this pool with the specified wlb server.
    pub async fn initialize_wlb(
        &self,
        wlb_url: &str,
        wlb_username: &str,
        wlb_password: &str,
        xenserver_username: &str,
        xenserver_password: &str,
    ) -> Result<()> {
        self.call("initialize_wlb")
            .arg("wlb_url", wlb_url)
            .arg("wlb_username", wlb_username)
            .arg("wlb_password", wlb_password)
            .arg("xenserver_username", xenserver_username)
            .arg("xenserver_password", xenserver_password)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::initialize_wlb`].
    pub async fn async_initialize_wlb(
        &self,
        wlb_url: &str,
        wlb_username: &str,
        wlb_password: &str,
        xenserver_username: &str,
        xenserver_password: &str,
    ) -> Result<TaskRef> {
        self.call("initialize_wlb")
            .arg("wlb_url", wlb_url)
            .arg("wlb_username", wlb_username)
            .arg("wlb_password", wlb_password)
            .arg("xenserver_username", xenserver_username)
            .arg("xenserver_password", xenserver_password)
            .invoke_async()
            .await
    }

    /// Permanently deconfigures workload balancing monitoring on this pool.
    pub async fn deconfigure_wlb(&self) -> Result<()> {
        self.call("deconfigure_wlb").invoke().await
    }

    /// Asynchronous form of [`Self::deconfigure_wlb`].
    pub async fn async_deconfigure_wlb(&self) -> Result<TaskRef> {
        self.call("deconfigure_wlb").invoke_async().await
    }

    /// Sets the pool optimization criteria for the workload balancing server.
    pub async fn send_wlb_configuration(&self, config: &HashMap<String, String>) -> Result<()> {
        self.call("send_wlb_configuration").arg("config", config).invoke().await
    }

    /// Asynchronous form of [`Self::send_wlb_configuration`].
    pub async fn async_send_wlb_configuration(
        &self,
        config: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("send_wlb_configuration").arg("config", config).invoke_async().await
    }

    /// Retrieves the pool optimization criteria from the workload balancing server.
    pub async fn retrieve_wlb_configuration(&self) -> Result<HashMap<String, String>> {
        self.call("retrieve_wlb_configuration").invoke().await
    }

    /// Asynchronous form of [`Self::retrieve_wlb_configuration`].
    pub async fn async_retrieve_wlb_configuration(&self) -> Result<TaskRef> {
        self.call("retrieve_wlb_configuration").invoke_async().await
    }

    /// Retrieves vm migrate recommendations for the pool from the workload balancing server.
    pub async fn retrieve_wlb_recommendations(&self) -> Result<HashMap<VmRef, Vec<String>>> {
        self.call("retrieve_wlb_recommendations").invoke().await
    }

    /// Asynchronous form of [`Self::retrieve_wlb_recommendations`].
    pub async fn async_retrieve_wlb_recommendations(&self) -> Result<TaskRef> {
        self.call("retrieve_wlb_recommendations").invoke_async().await
    }

    /// Send the given body to the given host and port, using HTTPS, and print the response.  This is used for debugging the SSL layer.
    pub async fn send_test_post(&self, host: &str, port: i64, body: &str) -> Result<String> {
        self.call("send_test_post")
            .arg("host", host)
            .arg("port", &port)
            .arg("body", body)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::send_test_post`].
    pub async fn async_send_test_post(&self, host: &str, port: i64, body: &str) -> Result<TaskRef> {
        self.call("send_test_post")
            .arg("host", host)
            .arg("port", &port)
            .arg("body", body)
            .invoke_async()
            .await
    }

    /// Install a TLS CA certificate, pool-wide.
    pub async fn certificate_install(&self, name: &str, cert: &str) -> Result<()> {
        self.call("certificate_install").arg("name", name).arg("cert", cert).invoke().await
    }

    /// Asynchronous form of [`Self::certificate_install`].
    pub async fn async_certificate_install(&self, name: &str, cert: &str) -> Result<TaskRef> {
        self.call("certificate_install").arg("name", name).arg("cert", cert).invoke_async().await
    }

    /// Remove a pool-wide TLS CA certificate.
    pub async fn certificate_uninstall(&self, name: &str) -> Result<()> {
        self.call("certificate_uninstall").arg("name", name).invoke().await
    }

    /// Asynchronous form of [`Self::certificate_uninstall`].
    pub async fn async_certificate_uninstall(&self, name: &str) -> Result<TaskRef> {
        self.call("certificate_uninstall").arg("name", name).invoke_async().await
    }

    /// List the names of all installed TLS CA certificates.
    pub async fn certificate_list(&self) -> Result<Vec<String>> {
        self.call("certificate_list").invoke().await
    }

    /// Asynchronous form of [`Self::certificate_list`].
    pub async fn async_certificate_list(&self) -> Result<TaskRef> {
        self.call("certificate_list").invoke_async().await
    }

    /// Install a TLS CA certificate, pool-wide.
    pub async fn install_ca_certificate(&self, name: &str, cert: &str) -> Result<()> {
        self.call("install_ca_certificate").arg("name", name).arg("cert", cert).invoke().await
    }

    /// Asynchronous form of [`Self::install_ca_certificate`].
    pub async fn async_install_ca_certificate(&self, name: &str, cert: &str) -> Result<TaskRef> {
        self.call("install_ca_certificate").arg("name", name).arg("cert", cert).invoke_async().await
    }

    /// Remove a pool-wide TLS CA certificate.
    pub async fn uninstall_ca_certificate(&self, name: &str) -> Result<()> {
        self.call("uninstall_ca_certificate").arg("name", name).invoke().await
    }

    /// Asynchronous form of [`Self::uninstall_ca_certificate`].
    pub async fn async_uninstall_ca_certificate(&self, name: &str) -> Result<TaskRef> {
        self.call("uninstall_ca_certificate").arg("name", name).invoke_async().await
    }

    /// Install a TLS CA-issued Certificate Revocation List, pool-wide.
    pub async fn crl_install(&self, name: &str, cert: &str) -> Result<()> {
        self.call("crl_install").arg("name", name).arg("cert", cert).invoke().await
    }

    /// Asynchronous form of [`Self::crl_install`].
    pub async fn async_crl_install(&self, name: &str, cert: &str) -> Result<TaskRef> {
        self.call("crl_install").arg("name", name).arg("cert", cert).invoke_async().await
    }

    /// Remove a pool-wide TLS CA-issued Certificate Revocation List.
    pub async fn crl_uninstall(&self, name: &str) -> Result<()> {
        self.call("crl_uninstall").arg("name", name).invoke().await
    }

    /// Asynchronous form of [`Self::crl_uninstall`].
    pub async fn async_crl_uninstall(&self, name: &str) -> Result<TaskRef> {
        self.call("crl_uninstall").arg("name", name).invoke_async().await
    }

    /// List the names of all installed TLS CA-issued Certificate Revocation Lists.
    pub async fn crl_list(&self) -> Result<Vec<String>> {
        self.call("crl_list").invoke().await
    }

    /// Asynchronous form of [`Self::crl_list`].
    pub async fn async_crl_list(&self) -> Result<TaskRef> {
        self.call("crl_list").invoke_async().await
    }

    /// Copy the TLS CA certificates and CRLs of the master to all slaves.
    pub async fn certificate_sync(&self) -> Result<()> {
        self.call("certificate_sync").invoke().await
    }

    /// Asynchronous form of [`Self::certificate_sync`].
    pub async fn async_certificate_sync(&self) -> Result<TaskRef> {
        self.call("certificate_sync").invoke_async().await
    }

    /// Enable TLS server certificate verification.
    pub async fn enable_tls_verification(&self) -> Result<()> {
        self.call("enable_tls_verification").invoke().await
    }

    /// Enable the redo log on the given SR and start using it, unless HA is enabled.
    pub async fn enable_redo_log(&self, sr: &SrRef) -> Result<()> {
        self.call("enable_redo_log").arg("sr", sr).invoke().await
    }

    /// Asynchronous form of [`Self::enable_redo_log`].
    pub async fn async_enable_redo_log(&self, sr: &SrRef) -> Result<TaskRef> {
        self.call("enable_redo_log").arg("sr", sr).invoke_async().await
    }

    /// Disable the redo log if in use, unless HA is enabled.
    pub async fn disable_redo_log(&self) -> Result<()> {
        self.call("disable_redo_log").invoke().await
    }

    /// Asynchronous form of [`Self::disable_redo_log`].
    pub async fn async_disable_redo_log(&self) -> Result<TaskRef> {
        self.call("disable_redo_log").invoke_async().await
    }

    /// Set the IP address of the vswitch controller.
    pub async fn set_vswitch_controller(&self, address: &str) -> Result<()> {
        self.call("set_vswitch_controller").arg("address", address).invoke().await
    }

    /// Asynchronous form of [`Self::set_vswitch_controller`].
    pub async fn async_set_vswitch_controller(&self, address: &str) -> Result<TaskRef> {
        self.call("set_vswitch_controller").arg("address", address).invoke_async().await
    }

    /// This call tests if a location is valid.
    pub async fn test_archive_target(
        &self,
        pool: &PoolRef,
        config: &HashMap<String, String>,
    ) -> Result<String> {
        self.call("test_archive_target").arg("self", pool).arg("config", config).invoke().await
    }

    /// This call attempts to enable pool-wide local storage caching.
    pub async fn enable_local_storage_caching(&self, pool: &PoolRef) -> Result<()> {
        self.call("enable_local_storage_caching").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::enable_local_storage_caching`].
    pub async fn async_enable_local_storage_caching(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("enable_local_storage_caching").arg("self", pool).invoke_async().await
    }

    /// This call disables pool-wide local storage caching.
    pub async fn disable_local_storage_caching(&self, pool: &PoolRef) -> Result<()> {
        self.call("disable_local_storage_caching").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::disable_local_storage_caching`].
    pub async fn async_disable_local_storage_caching(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("disable_local_storage_caching").arg("self", pool).invoke_async().await
    }

    /// This call returns the license state for the pool.
    pub async fn get_license_state(&self, pool: &PoolRef) -> Result<HashMap<String, String>> {
        self.call("get_license_state").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::get_license_state`].
    pub async fn async_get_license_state(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("get_license_state").arg("self", pool).invoke_async().await
    }

    /// Apply an edition to all hosts in the pool.
    pub async fn apply_edition(&self, pool: &PoolRef, edition: &str) -> Result<()> {
        self.call("apply_edition").arg("self", pool).arg("edition", edition).invoke().await
    }

    /// Asynchronous form of [`Self::apply_edition`].
    pub async fn async_apply_edition(&self, pool: &PoolRef, edition: &str) -> Result<TaskRef> {
        self.call("apply_edition").arg("self", pool).arg("edition", edition).invoke_async().await
    }

    /// Sets ssl_legacy true on each host, pool-master last. See Host.ssl_legacy and Host.set_ssl_legacy.
    pub async fn enable_ssl_legacy(&self, pool: &PoolRef) -> Result<()> {
        self.call("enable_ssl_legacy").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::enable_ssl_legacy`].
    pub async fn async_enable_ssl_legacy(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("enable_ssl_legacy").arg("self", pool).invoke_async().await
    }

    /// Sets ssl_legacy false on each host, pool-master last. See Host.ssl_legacy and Host.set_ssl_legacy.
    pub async fn disable_ssl_legacy(&self, pool: &PoolRef) -> Result<()> {
        self.call("disable_ssl_legacy").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::disable_ssl_legacy`].
    pub async fn async_disable_ssl_legacy(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("disable_ssl_legacy").arg("self", pool).invoke_async().await
    }

    /// Enable or disable IGMP Snooping on the pool.
    pub async fn set_igmp_snooping_enabled(&self, pool: &PoolRef, value: bool) -> Result<()> {
        self.call("set_igmp_snooping_enabled").arg("self", pool).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_igmp_snooping_enabled`].
    pub async fn async_set_igmp_snooping_enabled(
        &self,
        pool: &PoolRef,
        value: bool,
    ) -> Result<TaskRef> {
        self.call("set_igmp_snooping_enabled")
            .arg("self", pool)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Return true if the extension is available on the pool.
    pub async fn has_extension(&self, pool: &PoolRef, name: &str) -> Result<bool> {
        self.call("has_extension").arg("self", pool).arg("name", name).invoke().await
    }

    /// Asynchronous form of [`Self::has_extension`].
    pub async fn async_has_extension(&self, pool: &PoolRef, name: &str) -> Result<TaskRef> {
        self.call("has_extension").arg("self", pool).arg("name", name).invoke_async().await
    }

    /// Add a key-value pair to the pool-wide guest agent configuration.
    pub async fn add_to_guest_agent_config(
        &self,
        pool: &PoolRef,
        key: &str,
        value: &str,
    ) -> Result<()> {
        self.call("add_to_guest_agent_config")
            .arg("self", pool)
            .arg("key", key)
            .arg("value", value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::add_to_guest_agent_config`].
    pub async fn async_add_to_guest_agent_config(
        &self,
        pool: &PoolRef,
        key: &str,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("add_to_guest_agent_config")
            .arg("self", pool)
            .arg("key", key)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Remove a key-value pair from the pool-wide guest agent configuration.
    pub async fn remove_from_guest_agent_config(&self, pool: &PoolRef, key: &str) -> Result<()> {
        self.call("remove_from_guest_agent_config").arg("self", pool).arg("key", key).invoke().await
    }

    /// Asynchronous form of [`Self::remove_from_guest_agent_config`].
    pub async fn async_remove_from_guest_agent_config(
        &self,
        pool: &PoolRef,
        key: &str,
    ) -> Result<TaskRef> {
        self.call("remove_from_guest_agent_config")
            .arg("self", pool)
            .arg("key", key)
            .invoke_async()
            .await
    }

    /// Call `pool.rotate_secret`.
    ///
    /// # Errors
    ///
    /// - `INTERNAL_ERROR`: The server failed to handle your request, due to an internal error. The given message may give details useful for debugging the problem.
    /// - `HOST_IS_SLAVE`: You cannot make regular API calls directly on a supporter. Please pass API calls via the coordinator host.
    /// - `CANNOT_CONTACT_HOST`: Cannot forward messages because the server cannot be contacted. The server may be switched off or there may be network connectivity problems.
    /// - `HA_IS_ENABLED`: The operation could not be performed because HA is enabled on the Pool.
    /// - `NOT_SUPPORTED_DURING_UPGRADE`: This operation is not supported during an upgrade.
    pub async fn rotate_secret(&self) -> Result<()> {
        self.call("rotate_secret").invoke().await
    }

    /// Asynchronous form of [`Self::rotate_secret`].
    pub async fn async_rotate_secret(&self) -> Result<TaskRef> {
        self.call("rotate_secret").invoke_async().await
    }

    /// Set enabled set of repositories.
    pub async fn set_repositories(&self, pool: &PoolRef, value: &[RepositoryRef]) -> Result<()> {
        self.call("set_repositories").arg("self", pool).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_repositories`].
    pub async fn async_set_repositories(
        &self,
        pool: &PoolRef,
        value: &[RepositoryRef],
    ) -> Result<TaskRef> {
        self.call("set_repositories").arg("self", pool).arg("value", value).invoke_async().await
    }

    /// Add a repository to the enabled set.
    pub async fn add_repository(&self, pool: &PoolRef, value: &RepositoryRef) -> Result<()> {
        self.call("add_repository").arg("self", pool).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::add_repository`].
    pub async fn async_add_repository(
        &self,
        pool: &PoolRef,
        value: &RepositoryRef,
    ) -> Result<TaskRef> {
        self.call("add_repository").arg("self", pool).arg("value", value).invoke_async().await
    }

    /// Remove a repository from the enabled set.
    pub async fn remove_repository(&self, pool: &PoolRef, value: &RepositoryRef) -> Result<()> {
        self.call("remove_repository").arg("self", pool).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::remove_repository`].
    pub async fn async_remove_repository(
        &self,
        pool: &PoolRef,
        value: &RepositoryRef,
    ) -> Result<TaskRef> {
        self.call("remove_repository").arg("self", pool).arg("value", value).invoke_async().await
    }

    /// Sync with the enabled repository.
    pub async fn sync_updates(
        &self,
        pool: &PoolRef,
        force: bool,
        token: &str,
        token_id: &str,
    ) -> Result<String> {
        self.call("sync_updates")
            .arg("self", pool)
            .arg("force", &force)
            .arg("token", token)
            .arg("token_id", token_id)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::sync_updates`].
    pub async fn async_sync_updates(
        &self,
        pool: &PoolRef,
        force: bool,
        token: &str,
        token_id: &str,
    ) -> Result<TaskRef> {
        self.call("sync_updates")
            .arg("self", pool)
            .arg("force", &force)
            .arg("token", token)
            .arg("token_id", token_id)
            .invoke_async()
            .await
    }

    /// Check if the pool is ready to be updated. If not, report the reasons.
    pub async fn check_update_readiness(
        &self,
        pool: &PoolRef,
        requires_reboot: bool,
    ) -> Result<Vec<Vec<String>>> {
        self.call("check_update_readiness")
            .arg("self", pool)
            .arg("requires_reboot", &requires_reboot)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::check_update_readiness`].
    pub async fn async_check_update_readiness(
        &self,
        pool: &PoolRef,
        requires_reboot: bool,
    ) -> Result<TaskRef> {
        self.call("check_update_readiness")
            .arg("self", pool)
            .arg("requires_reboot", &requires_reboot)
            .invoke_async()
            .await
    }

    /// Enable client certificate authentication on the pool.
    pub async fn enable_client_certificate_auth(&self, pool: &PoolRef, name: &str) -> Result<()> {
        self.call("enable_client_certificate_auth")
            .arg("self", pool)
            .arg("name", name)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::enable_client_certificate_auth`].
    pub async fn async_enable_client_certificate_auth(
        &self,
        pool: &PoolRef,
        name: &str,
    ) -> Result<TaskRef> {
        self.call("enable_client_certificate_auth")
            .arg("self", pool)
            .arg("name", name)
            .invoke_async()
            .await
    }

    /// Disable client certificate authentication on the pool.
    pub async fn disable_client_certificate_auth(&self, pool: &PoolRef) -> Result<()> {
        self.call("disable_client_certificate_auth").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::disable_client_certificate_auth`].
    pub async fn async_disable_client_certificate_auth(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("disable_client_certificate_auth").arg("self", pool).invoke_async().await
    }

    /// Configure proxy for RPM package repositories.
    pub async fn configure_repository_proxy(
        &self,
        pool: &PoolRef,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<()> {
        self.call("configure_repository_proxy")
            .arg("self", pool)
            .arg("url", url)
            .arg("username", username)
            .arg("password", password)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::configure_repository_proxy`].
    pub async fn async_configure_repository_proxy(
        &self,
        pool: &PoolRef,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<TaskRef> {
        self.call("configure_repository_proxy")
            .arg("self", pool)
            .arg("url", url)
            .arg("username", username)
            .arg("password", password)
            .invoke_async()
            .await
    }

    /// Disable the proxy for RPM package repositories.
    pub async fn disable_repository_proxy(&self, pool: &PoolRef) -> Result<()> {
        self.call("disable_repository_proxy").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::disable_repository_proxy`].
    pub async fn async_disable_repository_proxy(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("disable_repository_proxy").arg("self", pool).invoke_async().await
    }

    /// Set the UEFI certificates for a pool and all its hosts. Deprecated: use set_custom_uefi_certificates instead.
    pub async fn set_uefi_certificates(&self, pool: &PoolRef, value: &str) -> Result<()> {
        self.call("set_uefi_certificates").arg("self", pool).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_uefi_certificates`].
    pub async fn async_set_uefi_certificates(
        &self,
        pool: &PoolRef,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("set_uefi_certificates")
            .arg("self", pool)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Set custom UEFI certificates for a pool and all its hosts. Need `allow-custom-uefi-certs` set to true in conf. If empty: default back to Pool.uefi_certificates.
    pub async fn set_custom_uefi_certificates(&self, pool: &PoolRef, value: &str) -> Result<()> {
        self.call("set_custom_uefi_certificates")
            .arg("self", pool)
            .arg("value", value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_custom_uefi_certificates`].
    pub async fn async_set_custom_uefi_certificates(
        &self,
        pool: &PoolRef,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("set_custom_uefi_certificates")
            .arg("self", pool)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Updates all the host firewalls in the pool to open or close port 80 depending on the value.
    pub async fn set_https_only(&self, pool: &PoolRef, value: bool) -> Result<()> {
        self.call("set_https_only").arg("self", pool).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_https_only`].
    pub async fn async_set_https_only(&self, pool: &PoolRef, value: bool) -> Result<TaskRef> {
        self.call("set_https_only").arg("self", pool).arg("value", &value).invoke_async().await
    }

    /// Set the timestamp for the next telemetry data collection.
    pub async fn set_telemetry_next_collection(
        &self,
        pool: &PoolRef,
        value: DateTime<Utc>,
    ) -> Result<()> {
        self.call("set_telemetry_next_collection")
            .arg("self", pool)
            .arg("value", &value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_telemetry_next_collection`].
    pub async fn async_set_telemetry_next_collection(
        &self,
        pool: &PoolRef,
        value: DateTime<Utc>,
    ) -> Result<TaskRef> {
        self.call("set_telemetry_next_collection")
            .arg("self", pool)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Assign a new UUID to telemetry data.
    pub async fn reset_telemetry_uuid(&self, pool: &PoolRef) -> Result<()> {
        self.call("reset_telemetry_uuid").arg("self", pool).invoke().await
    }

    /// Asynchronous form of [`Self::reset_telemetry_uuid`].
    pub async fn async_reset_telemetry_uuid(&self, pool: &PoolRef) -> Result<TaskRef> {
        self.call("reset_telemetry_uuid").arg("self", pool).invoke_async().await
    }

    /// Configure periodic update synchronization to sync updates from a remote CDN.
    pub async fn configure_update_sync(
        &self,
        pool: &PoolRef,
        update_sync_frequency: UpdateSyncFrequency,
        update_sync_day: i64,
    ) -> Result<()> {
        self.call("configure_update_sync")
            .arg("self", pool)
            .arg("update_sync_frequency", &update_sync_frequency)
            .arg("update_sync_day", &update_sync_day)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::configure_update_sync`].
    pub async fn async_configure_update_sync(
        &self,
        pool: &PoolRef,
        update_sync_frequency: UpdateSyncFrequency,
        update_sync_day: i64,
    ) -> Result<TaskRef> {
        self.call("configure_update_sync")
            .arg("self", pool)
            .arg("update_sync_frequency", &update_sync_frequency)
            .arg("update_sync_day", &update_sync_day)
            .invoke_async()
            .await
    }

    /// Enable or disable periodic update synchronization depending on the value.
    pub async fn set_update_sync_enabled(&self, pool: &PoolRef, value: bool) -> Result<()> {
        self.call("set_update_sync_enabled").arg("self", pool).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_update_sync_enabled`].
    pub async fn async_set_update_sync_enabled(
        &self,
        pool: &PoolRef,
        value: bool,
    ) -> Result<TaskRef> {
        self.call("set_update_sync_enabled")
            .arg("self", pool)
            .arg("value", &value)
            .invoke_async()
            .await
    }
}
