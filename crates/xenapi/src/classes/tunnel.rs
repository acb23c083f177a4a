//! `tunnel`: A tunnel for network traffic.

use std::collections::HashMap;

use xenapi_core::version::{ApiVersion, Overload, OverloadTable};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::TunnelProtocol;
use crate::refs::{NetworkRef, PifRef, TaskRef, TunnelRef};
use crate::Result;

/// Marker for the `tunnel` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tunnel;

impl XenClass for Tunnel {
    const NAME: &'static str = "tunnel";
    type Ref = TunnelRef;
    type Record = TunnelRecord;
}

/// Signatures of `tunnel.create`, newest first.
pub const CREATE_SIGNATURES: OverloadTable = OverloadTable::new(
    "tunnel.create",
    &[
        Overload::new(ApiVersion::V2_15, 4),
        Overload::new(ApiVersion::V2_5, 3),
    ],
);

xen_record! {
    /// A tunnel for network traffic.
    TunnelRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// The interface through which the tunnel is accessed.
        access_pif: PifRef => "access_PIF",
        /// The interface used by the tunnel.
        transport_pif: PifRef => "transport_PIF",
        /// Status information about the tunnel.
        status: HashMap<String, String> => "status",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// The protocol used for tunneling (either GRE or VxLAN)
        protocol: TunnelProtocol => "protocol",
    }
}

getters! {
    Tunnel, TunnelRef {
        /// Get the uuid field of the given tunnel.
        ///
        /// Since `cowley`.
        get_uuid => "get_uuid": String,
        /// Get the access_PIF field of the given tunnel.
        ///
        /// Since `cowley`.
        get_access_pif => "get_access_PIF": PifRef,
        /// Get the transport_PIF field of the given tunnel.
        ///
        /// Since `cowley`.
        get_transport_pif => "get_transport_PIF": PifRef,
        /// Get the status field of the given tunnel.
        ///
        /// Since `cowley`.
        get_status => "get_status": HashMap<String, String>,
        /// Get the other_config field of the given tunnel.
        ///
        /// Since `cowley`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the protocol field of the given tunnel.
        ///
        /// Since `cowley`.
        get_protocol => "get_protocol": TunnelProtocol,
    }
}

setters! {
    Tunnel, TunnelRef {
        /// Set the status field of the given tunnel.
        ///
        /// Since `cowley`.
        set_status => "set_status": &HashMap<String, String>,
        /// Set the other_config field of the given tunnel.
        ///
        /// Since `cowley`.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the protocol field of the given tunnel.
        ///
        /// Since `1.250.0`.
        set_protocol => "set_protocol": TunnelProtocol,
    }
}

map_mutators! {
    Tunnel, TunnelRef {
        /// Add the given key-value pair to the other_config field of the given tunnel.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
        /// Add the given key-value pair to the status field of the given tunnel.
        add_to_status, remove_from_status => "status": &str => &str,
    }
}

impl ClassApi<'_, Tunnel> {
    /// Get a record containing the current state of the given tunnel.
    ///
    /// Since `cowley`.
    pub async fn get_record(&self, tunnel: &TunnelRef) -> Result<TunnelRecord> {
        self.call("get_record").arg("self", tunnel).invoke().await
    }

    /// Get a reference to the tunnel instance with the specified UUID.
    ///
    /// Since `cowley`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<TunnelRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the tunnels known to the system.
    ///
    /// Since `cowley`.
    pub async fn get_all(&self) -> Result<Vec<TunnelRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of tunnel references to tunnel records for all tunnels known to the system.
    ///
    /// Since `cowley`.
    pub async fn get_all_records(&self) -> Result<HashMap<TunnelRef, TunnelRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a tunnel.
    ///
    /// Since `1.250.0`.
    ///
    /// # Errors
    ///
    /// - `OPENVSWITCH_NOT_ACTIVE`: This operation needs the OpenVSwitch networking backend to be enabled on all hosts in the pool.
    /// - `TRANSPORT_PIF_NOT_CONFIGURED`: The tunnel transport PIF has no IP configuration set.
    /// - `IS_TUNNEL_ACCESS_PIF`: Cannot create a VLAN or tunnel on top of a tunnel access PIF - use the underlying transport PIF instead.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn create(
        &self,
        transport_pif: &PifRef,
        network: &NetworkRef,
        protocol: TunnelProtocol,
    ) -> Result<TunnelRef> {
        self.call("create")
            .arg("transport_PIF", transport_pif)
            .arg("network", network)
            .arg("protocol", &protocol)
            .select(&CREATE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        transport_pif: &PifRef,
        network: &NetworkRef,
        protocol: TunnelProtocol,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("transport_PIF", transport_pif)
            .arg("network", network)
            .arg("protocol", &protocol)
            .select(&CREATE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Destroy a tunnel.
    ///
    /// Since `cowley`.
    pub async fn destroy(&self, tunnel: &TunnelRef) -> Result<()> {
        self.call("destroy").arg("self", tunnel).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, tunnel: &TunnelRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", tunnel).invoke_async().await
    }
}
