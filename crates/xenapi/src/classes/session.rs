//! `session`: A session.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{HostRef, SessionRef, SubjectRef, TaskRef, UserRef};
use crate::Result;

/// Marker for the `session` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClass;

impl XenClass for SessionClass {
    const NAME: &'static str = "session";
    type Ref = SessionRef;
    type Record = SessionRecord;
}

xen_record! {
    /// A session.
    SessionRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// Currently connected host.
        this_host: HostRef => "this_host",
        /// Currently connected user.
        this_user: UserRef => "this_user",
        /// Timestamp for last time session was active.
        last_active: DateTime<Utc> => "last_active",
        /// True if this session relates to a intra-pool login, false otherwise.
        pool: bool => "pool",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// True iff this session was created using local superuser credentials.
        is_local_superuser: bool => "is_local_superuser",
        /// References the subject instance that created the session. If a session instance has is_local_superuser set, then the value of this field is undefined.
        subject: SubjectRef => "subject",
        /// Time when session was last validated.
        validation_time: DateTime<Utc> => "validation_time",
        /// The subject identifier of the user that was externally authenticated. If a session instance has is_local_superuser set, then the value of this field is undefined.
        auth_user_sid: String => "auth_user_sid",
        /// The subject name of the user that was externally authenticated. If a session instance has is_local_superuser set, then the value of this field is undefined.
        auth_user_name: String => "auth_user_name",
        /// List with all RBAC permissions for this session.
        rbac_permissions: Vec<String> => "rbac_permissions",
        /// List of tasks created using the current session.
        tasks: Vec<TaskRef> => "tasks",
        /// References the parent session that created this session.
        parent: SessionRef => "parent",
        /// A key string provided by a API user to distinguish itself from other users sharing the same login name.
        originator: String => "originator",
        /// Indicates whether this session was authenticated using a client certificate.
        client_certificate: bool => "client_certificate",
    }
}

getters! {
    SessionClass, SessionRef {
        /// Get the uuid field of the given session.
        get_uuid => "get_uuid": String,
        /// Get the this_host field of the given session.
        get_this_host => "get_this_host": HostRef,
        /// Get the this_user field of the given session.
        get_this_user => "get_this_user": UserRef,
        /// Get the last_active field of the given session.
        get_last_active => "get_last_active": DateTime<Utc>,
        /// Get the pool field of the given session.
        get_pool => "get_pool": bool,
        /// Get the other_config field of the given session.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the is_local_superuser field of the given session.
        get_is_local_superuser => "get_is_local_superuser": bool,
        /// Get the subject field of the given session.
        get_subject => "get_subject": SubjectRef,
        /// Get the validation_time field of the given session.
        get_validation_time => "get_validation_time": DateTime<Utc>,
        /// Get the auth_user_sid field of the given session.
        get_auth_user_sid => "get_auth_user_sid": String,
        /// Get the auth_user_name field of the given session.
        get_auth_user_name => "get_auth_user_name": String,
        /// Get the rbac_permissions field of the given session.
        get_rbac_permissions => "get_rbac_permissions": Vec<String>,
        /// Get the tasks field of the given session.
        get_tasks => "get_tasks": Vec<TaskRef>,
        /// Get the parent field of the given session.
        get_parent => "get_parent": SessionRef,
        /// Get the originator field of the given session.
        get_originator => "get_originator": String,
        /// Get the client_certificate field of the given session.
        get_client_certificate => "get_client_certificate": bool,
    }
}

setters! {
    SessionClass, SessionRef {
        /// Set the other_config field of the given session.
        set_other_config => "set_other_config": &HashMap<String, String>,
    }
}

map_mutators! {
    SessionClass, SessionRef {
        /// Add the given key-value pair to the other_config field of the given session.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, SessionClass> {
    /// Get a record containing the current state of the given session.
    pub async fn get_record(&self, session: &SessionRef) -> Result<SessionRecord> {
        self.call("get_record").arg("self", session).invoke().await
    }

    /// Get a reference to the session instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<SessionRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Call `session.create_from_db_file`.
    pub async fn create_from_db_file(&self, filename: &str) -> Result<SessionRef> {
        self.call("create_from_db_file").arg("filename", filename).invoke().await
    }

    /// Asynchronous form of [`Self::create_from_db_file`].
    pub async fn async_create_from_db_file(&self, filename: &str) -> Result<TaskRef> {
        self.call("create_from_db_file").arg("filename", filename).invoke_async().await
    }

    /// Return a list of all the user subject-identifiers of all existing sessions.
    pub async fn get_all_subject_identifiers(&self) -> Result<Vec<String>> {
        self.call("get_all_subject_identifiers").invoke().await
    }

    /// Asynchronous form of [`Self::get_all_subject_identifiers`].
    pub async fn async_get_all_subject_identifiers(&self) -> Result<TaskRef> {
        self.call("get_all_subject_identifiers").invoke_async().await
    }

    /// Log out all sessions associated to a user subject-identifier, except the session associated with the context calling this function.
    pub async fn logout_subject_identifier(&self, subject_identifier: &str) -> Result<()> {
        self.call("logout_subject_identifier")
            .arg("subject_identifier", subject_identifier)
            .invoke()
            .await
    }

    /// Asynchronous form of [`Self::logout_subject_identifier`].
    pub async fn async_logout_subject_identifier(
        &self,
        subject_identifier: &str,
    ) -> Result<TaskRef> {
        self.call("logout_subject_identifier")
            .arg("subject_identifier", subject_identifier)
            .invoke_async()
            .await
    }
}
