//! `VIF`: A virtual network interface.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{
    VifIpv4ConfigurationMode, VifIpv6ConfigurationMode, VifLockingMode, VifOperations,
};
use crate::refs::{NetworkRef, PciRef, TaskRef, VifMetricsRef, VifRef, VmRef};
use crate::Result;

/// Marker for the `VIF` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vif;

impl XenClass for Vif {
    const NAME: &'static str = "VIF";
    type Ref = VifRef;
    type Record = VifRecord;
}

xen_record! {
    /// A virtual network interface.
    VifRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<VifOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, VifOperations> => "current_operations",
        /// Order in which VIF backends are created by xapi.
        device: String => "device",
        /// Virtual network to which this vif is connected.
        network: NetworkRef => "network",
        /// Virtual machine to which this vif is connected.
        vm: VmRef => "VM",
        /// Ethernet MAC address of virtual interface, as exposed to guest.
        mac: String => "MAC",
        /// MTU in octets.
        mtu: i64 => "MTU",
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
        /// Supported QoS algorithms for this VIF.
        qos_supported_algorithms: Vec<String> => "qos_supported_algorithms",
        /// Metrics associated with this VIF.
        metrics: VifMetricsRef => "metrics",
        /// True if the MAC was autogenerated; false indicates it was set manually.
        mac_autogenerated: bool => "MAC_autogenerated",
        /// Current locking mode of the VIF.
        locking_mode: VifLockingMode => "locking_mode",
        /// A list of IPv4 addresses which can be used to filter traffic passing through this VIF.
        ipv4_allowed: Vec<String> => "ipv4_allowed",
        /// A list of IPv6 addresses which can be used to filter traffic passing through this VIF.
        ipv6_allowed: Vec<String> => "ipv6_allowed",
        /// Determines whether IPv4 addresses are configured on the VIF.
        ipv4_configuration_mode: VifIpv4ConfigurationMode => "ipv4_configuration_mode",
        /// IPv4 addresses in CIDR format.
        ipv4_addresses: Vec<String> => "ipv4_addresses",
        /// IPv4 gateway (the empty string means that no gateway is set)
        ipv4_gateway: String => "ipv4_gateway",
        /// Determines whether IPv6 addresses are configured on the VIF.
        ipv6_configuration_mode: VifIpv6ConfigurationMode => "ipv6_configuration_mode",
        /// IPv6 addresses in CIDR format.
        ipv6_addresses: Vec<String> => "ipv6_addresses",
        /// IPv6 gateway (the empty string means that no gateway is set)
        ipv6_gateway: String => "ipv6_gateway",
        /// pci of network SR-IOV VF which is reserved for this vif.
        reserved_pci: Option<PciRef> => "reserved_pci",
    }
}

xen_record! {
    /// Fields accepted by `VIF.create`; `None` leaves the server default.
    VifCreateArgs {
        /// Order in which VIF backends are created by xapi.
        device: String => "device",
        /// Virtual network to which this vif is connected.
        network: NetworkRef => "network",
        /// Virtual machine to which this vif is connected.
        vm: VmRef => "VM",
        /// Ethernet MAC address of virtual interface, as exposed to guest.
        mac: String => "MAC",
        /// MTU in octets.
        mtu: i64 => "MTU",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Is the device currently attached (erased on reboot)
        currently_attached: Option<bool> => "currently_attached",
        /// QoS algorithm to use.
        qos_algorithm_type: String => "qos_algorithm_type",
        /// Parameters for chosen QoS algorithm.
        qos_algorithm_params: HashMap<String, String> => "qos_algorithm_params",
        /// Current locking mode of the VIF.
        locking_mode: Option<VifLockingMode> => "locking_mode",
        /// A list of IPv4 addresses which can be used to filter traffic passing through this VIF.
        ipv4_allowed: Option<Vec<String>> => "ipv4_allowed",
        /// A list of IPv6 addresses which can be used to filter traffic passing through this VIF.
        ipv6_allowed: Option<Vec<String>> => "ipv6_allowed",
    }
}

getters! {
    Vif, VifRef {
        /// Get the uuid field of the given VIF.
        get_uuid => "get_uuid": String,
        /// Get the allowed_operations field of the given VIF.
        get_allowed_operations => "get_allowed_operations": Vec<VifOperations>,
        /// Get the device field of the given VIF.
        get_device => "get_device": String,
        /// Get the network field of the given VIF.
        get_network => "get_network": NetworkRef,
        /// Get the VM field of the given VIF.
        get_vm => "get_VM": VmRef,
        /// Get the MAC field of the given VIF.
        get_mac => "get_MAC": String,
        /// Get the MTU field of the given VIF.
        get_mtu => "get_MTU": i64,
        /// Get the other_config field of the given VIF.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the currently_attached field of the given VIF.
        get_currently_attached => "get_currently_attached": bool,
        /// Get the metrics field of the given VIF.
        get_metrics => "get_metrics": VifMetricsRef,
        /// Get the MAC_autogenerated field of the given VIF.
        get_mac_autogenerated => "get_MAC_autogenerated": bool,
        /// Get the locking_mode field of the given VIF.
        get_locking_mode => "get_locking_mode": VifLockingMode,
        /// Get the ipv4_allowed field of the given VIF.
        get_ipv4_allowed => "get_ipv4_allowed": Vec<String>,
        /// Get the ipv6_allowed field of the given VIF.
        get_ipv6_allowed => "get_ipv6_allowed": Vec<String>,
        /// Get the ipv4_addresses field of the given VIF.
        get_ipv4_addresses => "get_ipv4_addresses": Vec<String>,
        /// Get the ipv6_addresses field of the given VIF.
        get_ipv6_addresses => "get_ipv6_addresses": Vec<String>,
    }
}

setters! {
    Vif, VifRef {
        /// Set the other_config field of the given VIF.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the qos/algorithm_type field of the given VIF.
        set_qos_algorithm_type => "set_qos_algorithm_type": &str,
        /// Set the qos/algorithm_params field of the given VIF.
        set_qos_algorithm_params => "set_qos_algorithm_params": &HashMap<String, String>,
    }
}

map_mutators! {
    Vif, VifRef {
        /// Add the given key-value pair to the other_config field of the given VIF.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
        /// Add the given key-value pair to the qos/algorithm_params field of the given VIF.
        add_to_qos_algorithm_params, remove_from_qos_algorithm_params => "qos_algorithm_params": &str => &str,
    }
}

impl ClassApi<'_, Vif> {
    /// Get a record containing the current state of the given VIF.
    pub async fn get_record(&self, vif: &VifRef) -> Result<VifRecord> {
        self.call("get_record").arg("self", vif).invoke().await
    }

    /// Get a reference to the VIF instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VifRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the VIFs known to the system.
    pub async fn get_all(&self) -> Result<Vec<VifRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of VIF references to VIF records for all VIFs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<VifRef, VifRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new VIF instance, and return its handle.
    pub async fn create(&self, args: &VifCreateArgs) -> Result<VifRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &VifCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified VIF instance.
    pub async fn destroy(&self, vif: &VifRef) -> Result<()> {
        self.call("destroy").arg("self", vif).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, vif: &VifRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", vif).invoke_async().await
    }

    /// Hotplug the specified VIF, dynamically attaching it to the running VM.
    pub async fn plug(&self, vif: &VifRef) -> Result<()> {
        self.call("plug").arg("self", vif).invoke().await
    }

    /// Asynchronous form of [`Self::plug`].
    pub async fn async_plug(&self, vif: &VifRef) -> Result<TaskRef> {
        self.call("plug").arg("self", vif).invoke_async().await
    }

    /// Hot-unplug the specified VIF, dynamically unattaching it from the running VM.
    pub async fn unplug(&self, vif: &VifRef) -> Result<()> {
        self.call("unplug").arg("self", vif).invoke().await
    }

    /// Asynchronous form of [`Self::unplug`].
    pub async fn async_unplug(&self, vif: &VifRef) -> Result<TaskRef> {
        self.call("unplug").arg("self", vif).invoke_async().await
    }

    /// Forcibly unplug the specified VIF.
    pub async fn unplug_force(&self, vif: &VifRef) -> Result<()> {
        self.call("unplug_force").arg("self", vif).invoke().await
    }

    /// Asynchronous form of [`Self::unplug_force`].
    pub async fn async_unplug_force(&self, vif: &VifRef) -> Result<TaskRef> {
        self.call("unplug_force").arg("self", vif).invoke_async().await
    }

    /// Move the specified VIF to the specified network, even while the VM is running.
    pub async fn move_(&self, vif: &VifRef, network: &NetworkRef) -> Result<()> {
        self.call("move").arg("self", vif).arg("network", network).invoke().await
    }

    /// Asynchronous form of [`Self::move_`].
    pub async fn async_move(&self, vif: &VifRef, network: &NetworkRef) -> Result<TaskRef> {
        self.call("move").arg("self", vif).arg("network", network).invoke_async().await
    }

    /// Set the locking mode for this VIF.
    pub async fn set_locking_mode(&self, vif: &VifRef, value: VifLockingMode) -> Result<()> {
        self.call("set_locking_mode").arg("self", vif).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_locking_mode`].
    pub async fn async_set_locking_mode(
        &self,
        vif: &VifRef,
        value: VifLockingMode,
    ) -> Result<TaskRef> {
        self.call("set_locking_mode")
            .arg("self", vif)
            .arg("value", &value)
            .invoke_async()
            .await
    }

    /// Set the IPv4 addresses to which traffic on this VIF can be restricted.
    pub async fn set_ipv4_allowed(&self, vif: &VifRef, value: &[String]) -> Result<()> {
        self.call("set_ipv4_allowed").arg("self", vif).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_ipv4_allowed`].
    pub async fn async_set_ipv4_allowed(&self, vif: &VifRef, value: &[String]) -> Result<TaskRef> {
        self.call("set_ipv4_allowed")
            .arg("self", vif)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Associates an IPv4 address with this VIF.
    pub async fn add_ipv4_allowed(&self, vif: &VifRef, value: &str) -> Result<()> {
        self.call("add_ipv4_allowed").arg("self", vif).arg("value", value).invoke().await
    }

    /// Removes an IPv4 address from this VIF.
    pub async fn remove_ipv4_allowed(&self, vif: &VifRef, value: &str) -> Result<()> {
        self.call("remove_ipv4_allowed").arg("self", vif).arg("value", value).invoke().await
    }

    /// Set the IPv6 addresses to which traffic on this VIF can be restricted.
    pub async fn set_ipv6_allowed(&self, vif: &VifRef, value: &[String]) -> Result<()> {
        self.call("set_ipv6_allowed").arg("self", vif).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_ipv6_allowed`].
    pub async fn async_set_ipv6_allowed(&self, vif: &VifRef, value: &[String]) -> Result<TaskRef> {
        self.call("set_ipv6_allowed")
            .arg("self", vif)
            .arg("value", value)
            .invoke_async()
            .await
    }

    /// Associates an IPv6 address with this VIF.
    pub async fn add_ipv6_allowed(&self, vif: &VifRef, value: &str) -> Result<()> {
        self.call("add_ipv6_allowed").arg("self", vif).arg("value", value).invoke().await
    }

    /// Removes an IPv6 address from this VIF.
    pub async fn remove_ipv6_allowed(&self, vif: &VifRef, value: &str) -> Result<()> {
        self.call("remove_ipv6_allowed").arg("self", vif).arg("value", value).invoke().await
    }

    /// Configure IPv4 settings for this virtual interface.
    pub async fn configure_ipv4(
        &self,
        vif: &VifRef,
        mode: VifIpv4ConfigurationMode,
        address: &str,
        gateway: &str,
    ) -> Result<()> {
        self.call("configure_ipv4")
            .arg("self", vif)
            .arg("mode", &mode)
            .arg("address", address)
            .arg("gateway", gateway)
            .invoke()
            .await
    }

    /// Configure IPv6 settings for this virtual interface.
    pub async fn configure_ipv6(
        &self,
        vif: &VifRef,
        mode: VifIpv6ConfigurationMode,
        address: &str,
        gateway: &str,
    ) -> Result<()> {
        self.call("configure_ipv6")
            .arg("self", vif)
            .arg("mode", &mode)
            .arg("address", address)
            .arg("gateway", gateway)
            .invoke()
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::session::Session;
    use crate::test_support::{ok, Scripted};

    #[tokio::test]
    async fn test_create_leaves_unset_fields_out() {
        let wire = Arc::new(Scripted::new([ok(json!("OpaqueRef:vif"))]));
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");

        let args = VifCreateArgs {
            device: "0".to_string(),
            network: NetworkRef::new("OpaqueRef:net"),
            vm: VmRef::new("OpaqueRef:vm"),
            mac: String::new(),
            mtu: 1500,
            other_config: HashMap::new(),
            currently_attached: None,
            qos_algorithm_type: String::new(),
            qos_algorithm_params: HashMap::new(),
            locking_mode: Some(VifLockingMode::NetworkDefault),
            ipv4_allowed: None,
            ipv6_allowed: None,
        };
        let vif = session.vif().create(&args).await.unwrap();

        assert_eq!(vif, VifRef::new("OpaqueRef:vif"));
        let sent = &wire.request(0)["params"][1];
        assert_eq!(sent["MTU"], "1500");
        assert_eq!(sent["locking_mode"], "network_default");
        assert!(sent.get("ipv4_allowed").is_none());
        assert!(sent.get("currently_attached").is_none());
    }

    #[tokio::test]
    async fn test_move_uses_wire_verb() {
        let wire = Arc::new(Scripted::new([ok(json!(""))]));
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");

        session
            .vif()
            .move_(&VifRef::new("OpaqueRef:vif"), &NetworkRef::new("OpaqueRef:net"))
            .await
            .unwrap();

        assert_eq!(wire.methods(), ["VIF.move"]);
        assert_eq!(
            wire.request(0)["params"],
            json!(["OpaqueRef:s", "OpaqueRef:vif", "OpaqueRef:net"])
        );
    }
}
