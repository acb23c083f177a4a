//! `PIF`: A physical network interface (note separate VLANs are represented as several PIFs)

use std::collections::HashMap;

use xenapi_core::version::{ApiVersion, Overload, OverloadTable};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{IpConfigurationMode, Ipv6ConfigurationMode, PifIgmpStatus, PrimaryAddressType};
use crate::refs::{
    BondRef, HostRef, NetworkRef, NetworkSriovRef, PciRef, PifMetricsRef, PifRef, TaskRef,
    TunnelRef, VlanRef,
};
use crate::Result;

/// Marker for the `PIF` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pif;

impl XenClass for Pif {
    const NAME: &'static str = "PIF";
    type Ref = PifRef;
    type Record = PifRecord;
}

/// Signatures of `PIF.introduce`, newest first.
pub const INTRODUCE_SIGNATURES: OverloadTable = OverloadTable::new(
    "PIF.introduce",
    &[
        Overload::new(ApiVersion::V2_1, 5),
        Overload::new(ApiVersion::V1_2, 4),
    ],
);

/// Signatures of `PIF.db_introduce`, newest first.
pub const DB_INTRODUCE_SIGNATURES: OverloadTable = OverloadTable::new(
    "PIF.db_introduce",
    &[
        Overload::new(ApiVersion::V2_3, 24),
        Overload::new(ApiVersion::V2_1, 23),
        Overload::new(ApiVersion::V1_9, 22),
        Overload::new(ApiVersion::V1_3, 18),
    ],
);

xen_record! {
    /// A physical network interface (note separate VLANs are represented as several PIFs)
    PifRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Machine-readable name of the interface (e.g. eth0)
        device: String => "device",
        /// Virtual network to which this pif is connected.
        network: NetworkRef => "network",
        /// Physical machine to which this pif is connected.
        host: HostRef => "host",
        /// Ethernet MAC address of physical interface.
        mac: String => "MAC",
        /// MTU in octets.
        mtu: i64 => "MTU",
        /// VLAN tag for all traffic passing through this interface.
        vlan: i64 => "VLAN",
        /// Metrics associated with this PIF.
        metrics: PifMetricsRef => "metrics",
        /// True if this represents a physical network interface.
        physical: bool => "physical",
        /// True if this interface is online.
        currently_attached: bool => "currently_attached",
        /// Sets if and how this interface gets an IP address.
        ip_configuration_mode: IpConfigurationMode => "ip_configuration_mode",
        /// IP address.
        ip: String => "IP",
        /// IP netmask.
        netmask: String => "netmask",
        /// IP gateway.
        gateway: String => "gateway",
        /// Comma separated list of the IP addresses of the DNS servers to use.
        dns: String => "DNS",
        /// Indicates which bond this interface is part of.
        bond_slave_of: BondRef => "bond_slave_of",
        /// Indicates this PIF represents the results of a bond.
        bond_master_of: Vec<BondRef> => "bond_master_of",
        /// Indicates which VLAN this interface receives untagged traffic from.
        vlan_master_of: VlanRef => "VLAN_master_of",
        /// Indicates which VLANs this interface transmits tagged traffic to.
        vlan_slave_of: Vec<VlanRef> => "VLAN_slave_of",
        /// Indicates whether the control software is listening for connections on this interface.
        management: bool => "management",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Prevent this PIF from being unplugged; set this to notify the management tool-stack that the PIF has a special use and should not be unplugged under any circumstances (e.g. because you're running storage traffic over it)
        disallow_unplug: bool => "disallow_unplug",
        /// Indicates to which tunnel this PIF gives access.
        tunnel_access_pif_of: Vec<TunnelRef> => "tunnel_access_PIF_of",
        /// Indicates to which tunnel this PIF provides transport.
        tunnel_transport_pif_of: Vec<TunnelRef> => "tunnel_transport_PIF_of",
        /// Sets if and how this interface gets an IPv6 address.
        ipv6_configuration_mode: Ipv6ConfigurationMode => "ipv6_configuration_mode",
        /// IPv6 address.
        ipv6: Vec<String> => "IPv6",
        /// IPv6 gateway.
        ipv6_gateway: String => "ipv6_gateway",
        /// Which protocol should define the primary address of this interface.
        primary_address_type: PrimaryAddressType => "primary_address_type",
        /// Indicates whether the interface is managed by xapi. If it is not, then xapi will not configure the interface, the commands PIF.plug/unplug/reconfigure_ip(v6) cannot be used, nor can the interface be bonded or have VLANs based on top through xapi.
        managed: bool => "managed",
        /// Additional configuration properties for the interface.
        properties: HashMap<String, String> => "properties",
        /// Additional capabilities on the interface.
        capabilities: Vec<String> => "capabilities",
        /// The IGMP snooping status of the corresponding network bridge.
        igmp_snooping_status: PifIgmpStatus => "igmp_snooping_status",
        /// Indicates which network_sriov this interface is physical of.
        sriov_physical_pif_of: Vec<NetworkSriovRef> => "sriov_physical_PIF_of",
        /// Indicates which network_sriov this interface is logical of.
        sriov_logical_pif_of: Vec<NetworkSriovRef> => "sriov_logical_PIF_of",
        /// Link to underlying PCI device.
        pci: PciRef => "PCI",
    }
}

getters! {
    Pif, PifRef {
        /// Get the uuid field of the given PIF.
        get_uuid => "get_uuid": String,
        /// Get the device field of the given PIF.
        get_device => "get_device": String,
        /// Get the network field of the given PIF.
        get_network => "get_network": NetworkRef,
        /// Get the host field of the given PIF.
        get_host => "get_host": HostRef,
        /// Get the MAC field of the given PIF.
        get_mac => "get_MAC": String,
        /// Get the MTU field of the given PIF.
        get_mtu => "get_MTU": i64,
        /// Get the VLAN field of the given PIF.
        get_vlan => "get_VLAN": i64,
        /// Get the metrics field of the given PIF.
        get_metrics => "get_metrics": PifMetricsRef,
        /// Get the physical field of the given PIF.
        get_physical => "get_physical": bool,
        /// Get the currently_attached field of the given PIF.
        get_currently_attached => "get_currently_attached": bool,
        /// Get the ip_configuration_mode field of the given PIF.
        get_ip_configuration_mode => "get_ip_configuration_mode": IpConfigurationMode,
        /// Get the IP field of the given PIF.
        get_ip => "get_IP": String,
        /// Get the netmask field of the given PIF.
        get_netmask => "get_netmask": String,
        /// Get the gateway field of the given PIF.
        get_gateway => "get_gateway": String,
        /// Get the DNS field of the given PIF.
        get_dns => "get_DNS": String,
        /// Get the bond_slave_of field of the given PIF.
        get_bond_slave_of => "get_bond_slave_of": BondRef,
        /// Get the bond_master_of field of the given PIF.
        get_bond_master_of => "get_bond_master_of": Vec<BondRef>,
        /// Get the VLAN_master_of field of the given PIF.
        get_vlan_master_of => "get_VLAN_master_of": VlanRef,
        /// Get the VLAN_slave_of field of the given PIF.
        get_vlan_slave_of => "get_VLAN_slave_of": Vec<VlanRef>,
        /// Get the management field of the given PIF.
        get_management => "get_management": bool,
        /// Get the other_config field of the given PIF.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the disallow_unplug field of the given PIF.
        get_disallow_unplug => "get_disallow_unplug": bool,
        /// Get the tunnel_access_PIF_of field of the given PIF.
        get_tunnel_access_pif_of => "get_tunnel_access_PIF_of": Vec<TunnelRef>,
        /// Get the tunnel_transport_PIF_of field of the given PIF.
        get_tunnel_transport_pif_of => "get_tunnel_transport_PIF_of": Vec<TunnelRef>,
        /// Get the ipv6_configuration_mode field of the given PIF.
        get_ipv6_configuration_mode => "get_ipv6_configuration_mode": Ipv6ConfigurationMode,
        /// Get the IPv6 field of the given PIF.
        get_ipv6 => "get_IPv6": Vec<String>,
        /// Get the ipv6_gateway field of the given PIF.
        get_ipv6_gateway => "get_ipv6_gateway": String,
        /// Get the primary_address_type field of the given PIF.
        get_primary_address_type => "get_primary_address_type": PrimaryAddressType,
        /// Get the managed field of the given PIF.
        get_managed => "get_managed": bool,
        /// Get the properties field of the given PIF.
        get_properties => "get_properties": HashMap<String, String>,
        /// Get the capabilities field of the given PIF.
        get_capabilities => "get_capabilities": Vec<String>,
        /// Get the igmp_snooping_status field of the given PIF.
        get_igmp_snooping_status => "get_igmp_snooping_status": PifIgmpStatus,
        /// Get the sriov_physical_PIF_of field of the given PIF.
        get_sriov_physical_pif_of => "get_sriov_physical_PIF_of": Vec<NetworkSriovRef>,
        /// Get the sriov_logical_PIF_of field of the given PIF.
        get_sriov_logical_pif_of => "get_sriov_logical_PIF_of": Vec<NetworkSriovRef>,
        /// Get the PCI field of the given PIF.
        get_pci => "get_PCI": PciRef,
    }
}

setters! {
    Pif, PifRef {
        /// Set the other_config field of the given PIF.
        ///
        /// Since `miami`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Pif, PifRef {
        /// Add the given key-value pair to the other_config field of the given PIF.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Pif> {
    /// Get a record containing the current state of the given PIF.
    pub async fn get_record(&self, pif: &PifRef) -> Result<PifRecord> {
        self.call("get_record").arg("self", pif).invoke().await
    }

    /// Get a reference to the PIF instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PifRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the PIFs known to the system.
    pub async fn get_all(&self) -> Result<Vec<PifRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of PIF references to PIF records for all PIFs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<PifRef, PifRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Destroy the PIF object (provided it is a VLAN interface). This call is deprecated: use VLAN.destroy or Bond.destroy instead.
    ///
    /// # Errors
    ///
    /// - `PIF_IS_PHYSICAL`: You tried to destroy a PIF, but it represents an aspect of the physical host configuration, and so cannot be destroyed. The parameter echoes the PIF handle you gave.
    pub async fn destroy(&self, pif: &PifRef) -> Result<()> {
        self.call("destroy").arg("self", pif).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, pif: &PifRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", pif).invoke_async().await
    }

    /// Create a VLAN interface from an existing physical interface. This call is deprecated: use VLAN.create instead.
    ///
    /// # Errors
    ///
    /// - `VLAN_TAG_INVALID`: You tried to create a VLAN, but the tag you gave was invalid -- it must be between 0 and 4094. The parameter echoes the VLAN tag you gave.
    pub async fn create_vlan(
        &self,
        device: &str,
        network: &NetworkRef,
        host: &HostRef,
        vlan: i64,
    ) -> Result<PifRef> {
        self.call("create_VLAN")
            .arg("device", device)
            .arg("network", network)
            .arg("host", host)
            .arg("VLAN", &vlan)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create_vlan`].
    pub async fn async_create_vlan(
        &self,
        device: &str,
        network: &NetworkRef,
        host: &HostRef,
        vlan: i64,
    ) -> Result<TaskRef> {
        self.call("create_VLAN")
            .arg("device", device)
            .arg("network", network)
            .arg("host", host)
            .arg("VLAN", &vlan)
            .invoke_async()
            .await
    }

    /// Reconfigure the IP address settings for this interface.
    ///
    /// Since `miami`.
    ///
    /// # Errors
    ///
    /// - `CLUSTERING_ENABLED`: An operation was attempted while clustering was enabled on the cluster_host.
    pub async fn reconfigure_ip(
        &self,
        pif: &PifRef,
        mode: IpConfigurationMode,
        ip: &str,
        netmask: &str,
        gateway: &str,
        dns: &str,
    ) -> Result<()> {
        self.call("reconfigure_ip")
            .arg("self", pif)
            .arg("mode", &mode)
            .arg("IP", ip)
            .arg("netmask", netmask)
            .arg("gateway", gateway)
            .arg("DNS", dns)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::reconfigure_ip`].
    pub async fn async_reconfigure_ip(
        &self,
        pif: &PifRef,
        mode: IpConfigurationMode,
        ip: &str,
        netmask: &str,
        gateway: &str,
        dns: &str,
    ) -> Result<TaskRef> {
        self.call("reconfigure_ip")
            .arg("self", pif)
            .arg("mode", &mode)
            .arg("IP", ip)
            .arg("netmask", netmask)
            .arg("gateway", gateway)
            .arg("DNS", dns)
            .invoke_async()
            .await
    }

    /// Reconfigure the IPv6 address settings for this interface.
    ///
    /// Since `tampa`.
    ///
    /// # Errors
    ///
    /// - `CLUSTERING_ENABLED`: An operation was attempted while clustering was enabled on the cluster_host.
    pub async fn reconfigure_ipv6(
        &self,
        pif: &PifRef,
        mode: Ipv6ConfigurationMode,
        ipv6: &str,
        gateway: &str,
        dns: &str,
    ) -> Result<()> {
        self.call("reconfigure_ipv6")
            .arg("self", pif)
            .arg("mode", &mode)
            .arg("IPv6", ipv6)
            .arg("gateway", gateway)
            .arg("DNS", dns)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::reconfigure_ipv6`].
    pub async fn async_reconfigure_ipv6(
        &self,
        pif: &PifRef,
        mode: Ipv6ConfigurationMode,
        ipv6: &str,
        gateway: &str,
        dns: &str,
    ) -> Result<TaskRef> {
        self.call("reconfigure_ipv6")
            .arg("self", pif)
            .arg("mode", &mode)
            .arg("IPv6", ipv6)
            .arg("gateway", gateway)
            .arg("DNS", dns)
            .invoke_async()
            .await
    }

    /// Change the primary address type used by this PIF.
    ///
    /// Since `tampa`.
    pub async fn set_primary_address_type(
        &self,
        pif: &PifRef,
        primary_address_type: PrimaryAddressType,
    ) -> Result<()> {
        self.call("set_primary_address_type")
            .arg("self", pif)
            .arg("primary_address_type", &primary_address_type)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_primary_address_type`].
    pub async fn async_set_primary_address_type(
        &self,
        pif: &PifRef,
        primary_address_type: PrimaryAddressType,
    ) -> Result<TaskRef> {
        self.call("set_primary_address_type")
            .arg("self", pif)
            .arg("primary_address_type", &primary_address_type)
            .invoke_async()
            .await
    }

    /// Scan for physical interfaces on a host and create PIF objects to represent them.
    ///
    /// Since `miami`.
    pub async fn scan(&self, host: &HostRef) -> Result<()> {
        self.call("scan").arg("host", host).invoke().await
    }

    /// Asynchronous form of [`Self::scan`].
    pub async fn async_scan(&self, host: &HostRef) -> Result<TaskRef> {
        self.call("scan").arg("host", host).invoke_async().await
    }

    /// Create a PIF object matching a particular network interface.
    ///
    /// Since `vgpu-productisation`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn introduce(
        &self,
        host: &HostRef,
        mac: &str,
        device: &str,
        managed: bool,
    ) -> Result<PifRef> {
        self.call("introduce")
            .arg("host", host)
            .arg("MAC", mac)
            .arg("device", device)
            .arg("managed", &managed)
            .select(&INTRODUCE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::introduce`].
    pub async fn async_introduce(
        &self,
        host: &HostRef,
        mac: &str,
        device: &str,
        managed: bool,
    ) -> Result<TaskRef> {
        self.call("introduce")
            .arg("host", host)
            .arg("MAC", mac)
            .arg("device", device)
            .arg("managed", &managed)
            .select(&INTRODUCE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Destroy the PIF object matching a particular network interface.
    ///
    /// Since `miami`.
    ///
    /// # Errors
    ///
    /// - `PIF_TUNNEL_STILL_EXISTS`: Operation cannot proceed while a tunnel exists on this interface.
    /// - `CLUSTERING_ENABLED`: An operation was attempted while clustering was enabled on the cluster_host.
    pub async fn forget(&self, pif: &PifRef) -> Result<()> {
        self.call("forget").arg("self", pif).invoke().await
    }

    /// Asynchronous form of [`Self::forget`].
    pub async fn async_forget(&self, pif: &PifRef) -> Result<TaskRef> {
        self.call("forget").arg("self", pif).invoke_async().await
    }

    /// Attempt to bring down a physical interface.
    ///
    /// Since `miami`.
    ///
    /// # Errors
    ///
    /// - `HA_OPERATION_WOULD_BREAK_FAILOVER_PLAN`: This operation cannot be performed because it would invalidate VM failover planning such that the system would be unable to guarantee to restart protected VMs after a Host failure.
    /// - `VIF_IN_USE`: Network has active VIFs.
    /// - `PIF_DOES_NOT_ALLOW_UNPLUG`: The operation you requested cannot be performed because the specified PIF does not allow unplug.
    /// - `PIF_HAS_FCOE_SR_IN_USE`: The operation you requested cannot be performed because the specified PIF has FCoE SR in use.
    pub async fn unplug(&self, pif: &PifRef) -> Result<()> {
        self.call("unplug").arg("self", pif).invoke().await
    }

    /// Asynchronous form of [`Self::unplug`].
    pub async fn async_unplug(&self, pif: &PifRef) -> Result<TaskRef> {
        self.call("unplug").arg("self", pif).invoke_async().await
    }

    /// Set whether unplugging the PIF is allowed.
    ///
    /// Since `orlando`.
    ///
    /// # Errors
    ///
    /// - `OTHER_OPERATION_IN_PROGRESS`: Another operation involving the object is currently in progress.
    /// - `CLUSTERING_ENABLED`: An operation was attempted while clustering was enabled on the cluster_host.
    pub async fn set_disallow_unplug(&self, pif: &PifRef, value: bool) -> Result<()> {
        self.call("set_disallow_unplug").arg("self", pif).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_disallow_unplug`].
    pub async fn async_set_disallow_unplug(&self, pif: &PifRef, value: bool) -> Result<TaskRef> {
        self.call("set_disallow_unplug").arg("self", pif).arg("value", &value).invoke_async().await
    }

    /// Attempt to bring up a physical interface.
    ///
    /// Since `miami`.
    ///
    /// # Errors
    ///
    /// - `TRANSPORT_PIF_NOT_CONFIGURED`: The tunnel transport PIF has no IP configuration set.
    pub async fn plug(&self, pif: &PifRef) -> Result<()> {
        self.call("plug").arg("self", pif).invoke().await
    }

    /// Asynchronous form of [`Self::plug`].
    pub async fn async_plug(&self, pif: &PifRef) -> Result<TaskRef> {
        self.call("plug").arg("self", pif).invoke_async().await
    }

    /// Create a new PIF record in the database only.
    ///
    /// Since `creedence`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn db_introduce(
        &self,
        device: &str,
        network: &NetworkRef,
        host: &HostRef,
        mac: &str,
        mtu: i64,
        vlan: i64,
        physical: bool,
        ip_configuration_mode: IpConfigurationMode,
        ip: &str,
        netmask: &str,
        gateway: &str,
        dns: &str,
        bond_slave_of: &BondRef,
        vlan_master_of: &VlanRef,
        management: bool,
        other_config: &HashMap<String, String>,
        disallow_unplug: bool,
        ipv6_configuration_mode: Ipv6ConfigurationMode,
        ipv6: &[String],
        ipv6_gateway: &str,
        primary_address_type: PrimaryAddressType,
        managed: bool,
        properties: &HashMap<String, String>,
    ) -> Result<PifRef> {
        self.call("db_introduce")
            .arg("device", device)
            .arg("network", network)
            .arg("host", host)
            .arg("MAC", mac)
            .arg("MTU", &mtu)
            .arg("VLAN", &vlan)
            .arg("physical", &physical)
            .arg("ip_configuration_mode", &ip_configuration_mode)
            .arg("IP", ip)
            .arg("netmask", netmask)
            .arg("gateway", gateway)
            .arg("DNS", dns)
            .arg("bond_slave_of", bond_slave_of)
            .arg("VLAN_master_of", vlan_master_of)
            .arg("management", &management)
            .arg("other_config", other_config)
            .arg("disallow_unplug", &disallow_unplug)
            .arg("ipv6_configuration_mode", &ipv6_configuration_mode)
            .arg("IPv6", ipv6)
            .arg("ipv6_gateway", ipv6_gateway)
            .arg("primary_address_type", &primary_address_type)
            .arg("managed", &managed)
            .arg("properties", properties)
            .select(&DB_INTRODUCE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::db_introduce`].
    pub async fn async_db_introduce(
        &self,
        device: &str,
        network: &NetworkRef,
        host: &HostRef,
        mac: &str,
        mtu: i64,
        vlan: i64,
        physical: bool,
        ip_configuration_mode: IpConfigurationMode,
        ip: &str,
        netmask: &str,
        gateway: &str,
        dns: &str,
        bond_slave_of: &BondRef,
        vlan_master_of: &VlanRef,
        management: bool,
        other_config: &HashMap<String, String>,
        disallow_unplug: bool,
        ipv6_configuration_mode: Ipv6ConfigurationMode,
        ipv6: &[String],
        ipv6_gateway: &str,
        primary_address_type: PrimaryAddressType,
        managed: bool,
        properties: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("db_introduce")
            .arg("device", device)
            .arg("network", network)
            .arg("host", host)
            .arg("MAC", mac)
            .arg("MTU", &mtu)
            .arg("VLAN", &vlan)
            .arg("physical", &physical)
            .arg("ip_configuration_mode", &ip_configuration_mode)
            .arg("IP", ip)
            .arg("netmask", netmask)
            .arg("gateway", gateway)
            .arg("DNS", dns)
            .arg("bond_slave_of", bond_slave_of)
            .arg("VLAN_master_of", vlan_master_of)
            .arg("management", &management)
            .arg("other_config", other_config)
            .arg("disallow_unplug", &disallow_unplug)
            .arg("ipv6_configuration_mode", &ipv6_configuration_mode)
            .arg("IPv6", ipv6)
            .arg("ipv6_gateway", ipv6_gateway)
            .arg("primary_address_type", &primary_address_type)
            .arg("managed", &managed)
            .arg("properties", properties)
            .select(&DB_INTRODUCE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Destroy a PIF database record.
    ///
    /// Since `orlando`.
    pub async fn db_forget(&self, pif: &PifRef) -> Result<()> {
        self.call("db_forget").arg("self", pif).invoke().await
    }

    /// Asynchronous form of [`Self::db_forget`].
    pub async fn async_db_forget(&self, pif: &PifRef) -> Result<TaskRef> {
        self.call("db_forget").arg("self", pif).invoke_async().await
    }

    /// Set the value of a property of the PIF.
    ///
    /// Since `creedence`.
    pub async fn set_property(&self, pif: &PifRef, name: &str, value: &str) -> Result<()> {
        self.call("set_property")
            .arg("self", pif)
            .arg("name", name)
            .arg("value", value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_property`].
    pub async fn async_set_property(
        &self,
        pif: &PifRef,
        name: &str,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("set_property")
            .arg("self", pif)
            .arg("name", name)
            .arg("value", value)
            .invoke_async()
            .await
    }
}
