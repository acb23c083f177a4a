//! `Bond`: A Network bond that combines physical network interfaces, also known as link aggregation.

use std::collections::HashMap;

use xenapi_core::version::{ApiVersion, Overload, OverloadTable};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::BondMode;
use crate::refs::{BondRef, NetworkRef, PifRef, TaskRef};
use crate::Result;

/// Marker for the `Bond` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond;

impl XenClass for Bond {
    const NAME: &'static str = "Bond";
    type Ref = BondRef;
    type Record = BondRecord;
}

/// Signatures of `Bond.create`, newest first.
pub const CREATE_SIGNATURES: OverloadTable = OverloadTable::new(
    "Bond.create",
    &[
        Overload::new(ApiVersion::V1_10, 6),
        Overload::new(ApiVersion::V1_9, 5),
        Overload::new(ApiVersion::V1_2, 4),
    ],
);

xen_record! {
    /// A Network bond that combines physical network interfaces, also known as link aggregation.
    BondRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// The bonded interface.
        master: PifRef => "master",
        /// The interfaces which are part of this bond.
        slaves: Vec<PifRef> => "slaves",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// The PIF of which the IP configuration and MAC were copied to the bond, and which will receive all configuration/VLANs/VIFs on the bond if the bond is destroyed.
        primary_slave: PifRef => "primary_slave",
        /// The algorithm used to distribute traffic among the bonded NICs.
        mode: BondMode => "mode",
        /// Additional configuration properties specific to the bond mode.
        properties: HashMap<String, String> => "properties",
        /// Number of links up in this bond.
        links_up: i64 => "links_up",
        /// True if the MAC was taken from the primary slave when the bond was created, and false if the client specified the MAC.
        auto_update_mac: bool => "auto_update_mac",
    }
}

getters! {
    Bond, BondRef {
        /// Get the uuid field of the given Bond.
        ///
        /// Since `miami`.
        get_uuid => "get_uuid": String,
        /// Get the master field of the given Bond.
        ///
        /// Since `miami`.
        get_master => "get_master": PifRef,
        /// Get the slaves field of the given Bond.
        ///
        /// Since `miami`.
        get_slaves => "get_slaves": Vec<PifRef>,
        /// Get the other_config field of the given Bond.
        ///
        /// Since `miami`.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the primary_slave field of the given Bond.
        ///
        /// Since `miami`.
        get_primary_slave => "get_primary_slave": PifRef,
        /// Get the mode field of the given Bond.
        ///
        /// Since `miami`.
        get_mode => "get_mode": BondMode,
        /// Get the properties field of the given Bond.
        ///
        /// Since `miami`.
        get_properties => "get_properties": HashMap<String, String>,
        /// Get the links_up field of the given Bond.
        ///
        /// Since `miami`.
        get_links_up => "get_links_up": i64,
        /// Get the auto_update_mac field of the given Bond.
        ///
        /// Since `miami`.
        get_auto_update_mac => "get_auto_update_mac": bool,
    }
}

setters! {
    Bond, BondRef {
        /// Set the other_config field of the given Bond.
        ///
        /// Since `miami`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Bond, BondRef {
        /// Add the given key-value pair to the other_config field of the given Bond.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Bond> {
    /// Get a record containing the current state of the given Bond.
    ///
    /// Since `miami`.
    pub async fn get_record(&self, bond: &BondRef) -> Result<BondRecord> {
        self.call("get_record").arg("self", bond).invoke().await
    }

    /// Get a reference to the Bond instance with the specified UUID.
    ///
    /// Since `miami`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<BondRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the Bonds known to the system.
    ///
    /// Since `miami`.
    pub async fn get_all(&self) -> Result<Vec<BondRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of Bond references to Bond records for all Bonds known to the system.
    ///
    /// Since `miami`.
    pub async fn get_all_records(&self) -> Result<HashMap<BondRef, BondRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create an interface bond.
    ///
    /// Since `tampa`.
    ///
    /// Older pools are sent the shorter signature their API version accepts.
    pub async fn create(
        &self,
        network: &NetworkRef,
        members: &[PifRef],
        mac: &str,
        mode: BondMode,
        properties: &HashMap<String, String>,
    ) -> Result<BondRef> {
        self.call("create")
            .arg("network", network)
            .arg("members", members)
            .arg("MAC", mac)
            .arg("mode", &mode)
            .arg("properties", properties)
            .select(&CREATE_SIGNATURES, self.api_version())
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(
        &self,
        network: &NetworkRef,
        members: &[PifRef],
        mac: &str,
        mode: BondMode,
        properties: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("create")
            .arg("network", network)
            .arg("members", members)
            .arg("MAC", mac)
            .arg("mode", &mode)
            .arg("properties", properties)
            .select(&CREATE_SIGNATURES, self.api_version())
            .invoke_async()
            .await
    }

    /// Destroy an interface bond.
    ///
    /// Since `miami`.
    pub async fn destroy(&self, bond: &BondRef) -> Result<()> {
        self.call("destroy").arg("self", bond).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, bond: &BondRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", bond).invoke_async().await
    }

    /// Change the bond mode.
    ///
    /// Since `boston`.
    pub async fn set_mode(&self, bond: &BondRef, value: BondMode) -> Result<()> {
        self.call("set_mode").arg("self", bond).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_mode`].
    pub async fn async_set_mode(&self, bond: &BondRef, value: BondMode) -> Result<TaskRef> {
        self.call("set_mode").arg("self", bond).arg("value", &value).invoke_async().await
    }

    /// Set the value of a property of the bond.
    ///
    /// Since `tampa`.
    pub async fn set_property(&self, bond: &BondRef, name: &str, value: &str) -> Result<()> {
        self.call("set_property")
            .arg("self", bond)
            .arg("name", name)
            .arg("value", value)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::set_property`].
    pub async fn async_set_property(
        &self,
        bond: &BondRef,
        name: &str,
        value: &str,
    ) -> Result<TaskRef> {
        self.call("set_property")
            .arg("self", bond)
            .arg("name", name)
            .arg("value", value)
            .invoke_async()
            .await
    }
}
