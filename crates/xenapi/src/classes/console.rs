//! `console`: A console.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::ConsoleProtocol;
use crate::refs::{ConsoleRef, TaskRef, VmRef};
use crate::Result;

/// Marker for the `console` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console;

impl XenClass for Console {
    const NAME: &'static str = "console";
    type Ref = ConsoleRef;
    type Record = ConsoleRecord;
}

xen_record! {
    /// A console.
    ConsoleRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// The protocol used by this console.
        protocol: ConsoleProtocol => "protocol",
        /// URI for the console service.
        location: String => "location",
        /// VM to which this console is attached.
        vm: VmRef => "VM",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

xen_record! {
    /// Fields accepted by `console.create`; `None` leaves the server default.
    ConsoleCreateArgs {
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

getters! {
    Console, ConsoleRef {
        /// Get the uuid field of the given console.
        get_uuid => "get_uuid": String,
        /// Get the protocol field of the given console.
        get_protocol => "get_protocol": ConsoleProtocol,
        /// Get the location field of the given console.
        get_location => "get_location": String,
        /// Get the VM field of the given console.
        get_vm => "get_VM": VmRef,
        /// Get the other_config field of the given console.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    Console, ConsoleRef {
        /// Set the other_config field of the given console.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    Console, ConsoleRef {
        /// Add the given key-value pair to the other_config field of the given console.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Console> {
    /// Get a record containing the current state of the given console.
    pub async fn get_record(&self, console: &ConsoleRef) -> Result<ConsoleRecord> {
        self.call("get_record").arg("self", console).invoke().await
    }

    /// Get a reference to the console instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<ConsoleRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the consoles known to the system.
    pub async fn get_all(&self) -> Result<Vec<ConsoleRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of console references to console records for all consoles known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<ConsoleRef, ConsoleRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new console instance, and return its handle.
    pub async fn create(&self, args: &ConsoleCreateArgs) -> Result<ConsoleRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &ConsoleCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified console instance.
    pub async fn destroy(&self, console: &ConsoleRef) -> Result<()> {
        self.call("destroy").arg("self", console).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, console: &ConsoleRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", console).invoke_async().await
    }
}
