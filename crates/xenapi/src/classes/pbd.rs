//! `PBD`: The physical block devices through which hosts access SRs.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{HostRef, PbdRef, SrRef, TaskRef};
use crate::Result;

/// Marker for the `PBD` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbd;

impl XenClass for Pbd {
    const NAME: &'static str = "PBD";
    type Ref = PbdRef;
    type Record = PbdRecord;
}

xen_record! {
    /// The physical block devices through which hosts access SRs.
    PbdRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Physical machine on which the pbd is available.
        host: HostRef => "host",
        /// The storage repository that the pbd realises.
        sr: SrRef => "SR",
        /// A config string to string map that is provided to the host's SR-backend-driver.
        device_config: HashMap<String, String> => "device_config",
        /// Is the SR currently attached on this host?
        currently_attached: bool => "currently_attached",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

xen_record! {
    /// Fields accepted by `PBD.create`; `None` leaves the server default.
    PbdCreateArgs {
        /// Physical machine on which the pbd is available.
        host: HostRef => "host",
        /// The storage repository that the pbd realises.
        sr: SrRef => "SR",
        /// A config string to string map that is provided to the host's SR-backend-driver.
        device_config: HashMap<String, String> => "device_config",
        /// Additional configuration.
        other_config: Option<HashMap<String, String>> => "other_config",
    }
}

getters! {
    Pbd, PbdRef {
        /// Get the uuid field of the given PBD.
        get_uuid => "get_uuid": String,
        /// Get the host field of the given PBD.
        get_host => "get_host": HostRef,
        /// Get the SR field of the given PBD.
        get_sr => "get_SR": SrRef,
        /// Get the device_config field of the given PBD.
        get_device_config => "get_device_config": HashMap<String, String>,
        /// Get the currently_attached field of the given PBD.
        get_currently_attached => "get_currently_attached": bool,
        /// Get the other_config field of the given PBD.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    Pbd, PbdRef {
        /// Set the other_config field of the given PBD.
        ///
        /// Since `miami`.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Pbd, PbdRef {
        /// Add the given key-value pair to the other_config field of the given PBD.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Pbd> {
    /// Get a record containing the current state of the given PBD.
    pub async fn get_record(&self, pbd: &PbdRef) -> Result<PbdRecord> {
        self.call("get_record").arg("self", pbd).invoke().await
    }

    /// Get a reference to the PBD instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<PbdRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the PBDs known to the system.
    pub async fn get_all(&self) -> Result<Vec<PbdRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of PBD references to PBD records for all PBDs known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<PbdRef, PbdRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new PBD instance, and return its handle.
    pub async fn create(&self, args: &PbdCreateArgs) -> Result<PbdRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &PbdCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified PBD instance.
    pub async fn destroy(&self, pbd: &PbdRef) -> Result<()> {
        self.call("destroy").arg("self", pbd).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, pbd: &PbdRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", pbd).invoke_async().await
    }

    /// Activate the specified PBD, causing the referenced SR to be attached and scanned.
    ///
    /// # Errors
    ///
    /// - `SR_UNKNOWN_DRIVER`: The SR could not be connected because the driver was not recognised.
    pub async fn plug(&self, pbd: &PbdRef) -> Result<()> {
        self.call("plug").arg("self", pbd).invoke().await
    }

    /// Asynchronous form of [`Self::plug`].
    pub async fn async_plug(&self, pbd: &PbdRef) -> Result<TaskRef> {
        self.call("plug").arg("self", pbd).invoke_async().await
    }

    /// Deactivate the specified PBD, causing the referenced SR to be detached and nolonger scanned.
    pub async fn unplug(&self, pbd: &PbdRef) -> Result<()> {
        self.call("unplug").arg("self", pbd).invoke().await
    }

    /// Asynchronous form of [`Self::unplug`].
    pub async fn async_unplug(&self, pbd: &PbdRef) -> Result<TaskRef> {
        self.call("unplug").arg("self", pbd).invoke_async().await
    }

    /// Sets the PBD's device_config field.
    ///
    /// Since `miami`.
    pub async fn set_device_config(
        &self,
        pbd: &PbdRef,
        value: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("set_device_config").arg("self", pbd).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_device_config`].
    pub async fn async_set_device_config(
        &self,
        pbd: &PbdRef,
        value: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("set_device_config").arg("self", pbd).arg("value", value).invoke_async().await
    }
}
