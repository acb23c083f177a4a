//! `Observer`: Describes a observer which will control observability activity in the Toolstack.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{HostRef, ObserverRef, TaskRef};
use crate::Result;

/// Marker for the `Observer` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observer;

impl XenClass for Observer {
    const NAME: &'static str = "Observer";
    type Ref = ObserverRef;
    type Record = ObserverRecord;
}

xen_record! {
    /// Describes a observer which will control observability activity in the Toolstack.
    ObserverRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// The list of hosts the observer is active on. An empty list means all hosts.
        hosts: Vec<HostRef> => "hosts",
        /// Attributes that observer will add to the data they produce.
        attributes: HashMap<String, String> => "attributes",
        /// The list of endpoints where data is exported to. Each endpoint is a URL or the string 'bugtool' refering to the internal logs.
        endpoints: Vec<String> => "endpoints",
        /// The list of xenserver components the observer will broadcast. An empty list means all components.
        components: Vec<String> => "components",
        /// This denotes if the observer is enabled. true if it is enabled and false if it is disabled.
        enabled: bool => "enabled",
    }
}

xen_record! {
    /// Fields accepted by `Observer.create`; `None` leaves the server default.
    ObserverCreateArgs {
        /// A human-readable name.
        name_label: Option<String> => "name_label",
        /// A notes field containing human-readable description.
        name_description: Option<String> => "name_description",
        /// The list of hosts the observer is active on. An empty list means all hosts.
        hosts: Option<Vec<HostRef>> => "hosts",
        /// Attributes that observer will add to the data they produce.
        attributes: Option<HashMap<String, String>> => "attributes",
        /// The list of endpoints where data is exported to. Each endpoint is a URL or the string 'bugtool' refering to the internal logs.
        endpoints: Option<Vec<String>> => "endpoints",
        /// The list of xenserver components the observer will broadcast. An empty list means all components.
        components: Option<Vec<String>> => "components",
        /// This denotes if the observer is enabled. true if it is enabled and false if it is disabled.
        enabled: Option<bool> => "enabled",
    }
}

getters! {
    Observer, ObserverRef {
        /// Get the uuid field of the given Observer.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given Observer.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given Observer.
        get_name_description => "get_name_description": String,
        /// Get the hosts field of the given Observer.
        get_hosts => "get_hosts": Vec<HostRef>,
        /// Get the attributes field of the given Observer.
        get_attributes => "get_attributes": HashMap<String, String>,
        /// Get the endpoints field of the given Observer.
        get_endpoints => "get_endpoints": Vec<String>,
        /// Get the components field of the given Observer.
        get_components => "get_components": Vec<String>,
        /// Get the enabled field of the given Observer.
        get_enabled => "get_enabled": bool,
    }
}

setters! {
    Observer, ObserverRef {
        /// Set the name/label field of the given Observer.
        set_name_label => "set_name_label": &str,
        /// Set the name/description field of the given Observer.
        set_name_description => "set_name_description": &str,
    }
}

impl ClassApi<'_, Observer> {
    /// Get a record containing the current state of the given Observer.
    pub async fn get_record(&self, observer: &ObserverRef) -> Result<ObserverRecord> {
        self.call("get_record").arg("self", observer).invoke().await
    }

    /// Get a reference to the Observer instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<ObserverRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the Observer instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<ObserverRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the Observers known to the system.
    pub async fn get_all(&self) -> Result<Vec<ObserverRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of Observer references to Observer records for all Observers known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<ObserverRef, ObserverRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new Observer instance, and return its handle.
    pub async fn create(&self, args: &ObserverCreateArgs) -> Result<ObserverRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &ObserverCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified Observer instance.
    pub async fn destroy(&self, observer: &ObserverRef) -> Result<()> {
        self.call("destroy").arg("self", observer).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, observer: &ObserverRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", observer).invoke_async().await
    }

    /// Sets the hosts that the observer is to be registered on.
    pub async fn set_hosts(&self, observer: &ObserverRef, value: &[HostRef]) -> Result<()> {
        self.call("set_hosts").arg("self", observer).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_hosts`].
    pub async fn async_set_hosts(
        &self,
        observer: &ObserverRef,
        value: &[HostRef],
    ) -> Result<TaskRef> {
        self.call("set_hosts").arg("self", observer).arg("value", value).invoke_async().await
    }

    /// Enable / disable this observer which will stop the observer from producing observability information.
    pub async fn set_enabled(&self, observer: &ObserverRef, value: bool) -> Result<()> {
        self.call("set_enabled").arg("self", observer).arg("value", &value).invoke().await
    }

    /// Asynchronous form of [`Self::set_enabled`].
    pub async fn async_set_enabled(&self, observer: &ObserverRef, value: bool) -> Result<TaskRef> {
        self.call("set_enabled").arg("self", observer).arg("value", &value).invoke_async().await
    }

    /// Set the attributes of an observer. These are used to emit metadata by the observer.
    pub async fn set_attributes(
        &self,
        observer: &ObserverRef,
        value: &HashMap<String, String>,
    ) -> Result<()> {
        self.call("set_attributes").arg("self", observer).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_attributes`].
    pub async fn async_set_attributes(
        &self,
        observer: &ObserverRef,
        value: &HashMap<String, String>,
    ) -> Result<TaskRef> {
        self.call("set_attributes").arg("self", observer).arg("value", value).invoke_async().await
    }

    /// Set the file/HTTP endpoints the observer sends data to.
    pub async fn set_endpoints(&self, observer: &ObserverRef, value: &[String]) -> Result<()> {
        self.call("set_endpoints").arg("self", observer).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_endpoints`].
    pub async fn async_set_endpoints(
        &self,
        observer: &ObserverRef,
        value: &[String],
    ) -> Result<TaskRef> {
        self.call("set_endpoints").arg("self", observer).arg("value", value).invoke_async().await
    }

    /// Set the components on which the observer will broadcast to. i.e. xapi, xenopsd, networkd, etc.
    pub async fn set_components(&self, observer: &ObserverRef, value: &[String]) -> Result<()> {
        self.call("set_components").arg("self", observer).arg("value", value).invoke().await
    }

    /// Asynchronous form of [`Self::set_components`].
    pub async fn async_set_components(
        &self,
        observer: &ObserverRef,
        value: &[String],
    ) -> Result<TaskRef> {
        self.call("set_components").arg("self", observer).arg("value", value).invoke_async().await
    }
}
