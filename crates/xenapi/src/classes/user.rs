//! `user`: A user of the system.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{TaskRef, UserRef};
use crate::Result;

/// Marker for the `user` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User;

impl XenClass for User {
    const NAME: &'static str = "user";
    type Ref = UserRef;
    type Record = UserRecord;
}

xen_record! {
    /// A user of the system.
    UserRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Short name (e.g. userid)
        short_name: String => "short_name",
        /// Full name.
        fullname: String => "fullname",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
    }
}

xen_record! {
    /// Fields accepted by `user.create`; `None` leaves the server default.
    UserCreateArgs {
        /// Short name (e.g. userid)
        short_name: String => "short_name",
        /// Full name.
        fullname: String => "fullname",
        /// Additional configuration.
        other_config: Option<HashMap<String, String>> => "other_config",
    }
}

getters! {
    User, UserRef {
        /// Get the uuid field of the given user.
        get_uuid => "get_uuid": String,
        /// Get the short_name field of the given user.
        get_short_name => "get_short_name": String,
        /// Get the fullname field of the given user.
        get_fullname => "get_fullname": String,
        /// Get the other_config field of the given user.
        get_other_config => "get_other_config": HashMap<String, String>,
    }
}

setters! {
    User, UserRef {
        /// Set the fullname field of the given user.
        set_fullname => "set_fullname": &str,
        /// Set the other_config field of the given user.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    User, UserRef {
        /// Add the given key-value pair to the other_config field of the given user.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, User> {
    /// Get a record containing the current state of the given user.
    pub async fn get_record(&self, user: &UserRef) -> Result<UserRecord> {
        self.call("get_record").arg("self", user).invoke().await
    }

    /// Get a reference to the user instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<UserRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Create a new user instance, and return its handle.
    pub async fn create(&self, args: &UserCreateArgs) -> Result<UserRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &UserCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified user instance.
    pub async fn destroy(&self, user: &UserRef) -> Result<()> {
        self.call("destroy").arg("self", user).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, user: &UserRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", user).invoke_async().await
    }
}
