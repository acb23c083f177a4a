//! `host_crashdump`: Represents a host crash dump.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{HostCrashdumpRef, HostRef, TaskRef};
use crate::Result;

/// Marker for the `host_crashdump` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCrashdump;

impl XenClass for HostCrashdump {
    const NAME: &'static str = "host_crashdump";
    type Ref = HostCrashdumpRef;
    type Record = HostCrashdumpRecord;
}

xen_record! {
    /// Represents a host crash dump.
    HostCrashdumpRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Host the crashdump relates to.
        host: HostRef => "host",
        /// Time the crash happened.
        timestamp: DateTime<Utc> => "timestamp",
        /// Size of the crashdump.
        size: i64 => "size",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

getters! {
    HostCrashdump, HostCrashdumpRef {
        /// Get the uuid field of the given host_crashdump.
        get_uuid => "get_uuid": String,
        /// Get the host field of the given host_crashdump.
        get_host => "get_host": HostRef,
        /// Get the timestamp field of the given host_crashdump.
        get_timestamp => "get_timestamp": DateTime<Utc>,
        /// Get the size field of the given host_crashdump.
        get_size => "get_size": i64,
        /// Get the other_config field of the given host_crashdump.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    HostCrashdump, HostCrashdumpRef {
        /// Set the other_config field of the given host_crashdump.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    HostCrashdump, HostCrashdumpRef {
        /// Add the given key-value pair to the other_config field of the given host_crashdump.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, HostCrashdump> {
    /// Get a record containing the current state of the given host_crashdump.
    pub async fn get_record(
        &self,
        host_crashdump: &HostCrashdumpRef,
    ) -> Result<HostCrashdumpRecord> {
        self.call("get_record").arg("self", host_crashdump).invoke().await
    }

    /// Get a reference to the host_crashdump instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<HostCrashdumpRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the host_crashdumps known to the system.
    pub async fn get_all(&self) -> Result<Vec<HostCrashdumpRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of host_crashdump references to host_crashdump records for all host_crashdumps known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<HostCrashdumpRef, HostCrashdumpRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Destroy specified host crash dump, removing it from the disk.
    pub async fn destroy(&self, host_crashdump: &HostCrashdumpRef) -> Result<()> {
        self.call("destroy").arg("self", host_crashdump).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, host_crashdump: &HostCrashdumpRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", host_crashdump).invoke_async().await
    }

    /// Upload the specified host crash dump to a specified URL.
    pub async fn upload(
        &self,
        host_crashdump: &HostCrashdumpRef,
        url: &str,
        options: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("upload")
            .arg("self", host_crashdump)
            .arg("url", url)
            .arg("options", options)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::upload`].
    pub async fn async_upload(
        &self,
        host_crashdump: &HostCrashdumpRef,
        url: &str,
        options: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("upload")
            .arg("self", host_crashdump)
            .arg("url", url)
            .arg("options", options)
            .invoke_async()
            .await
    }
}
