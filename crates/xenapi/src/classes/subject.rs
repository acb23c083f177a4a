//! `subject`: A user or group that can log in xapi.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::refs::{RoleRef, SubjectRef, TaskRef};
use crate::Result;

/// Marker for the `subject` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject;

impl XenClass for Subject {
    const NAME: &'static str = "subject";
    type Ref = SubjectRef;
    type Record = SubjectRecord;
}

xen_record! {
    /// A user or group that can log in xapi.
    SubjectRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// The subject identifier, unique in the external directory service.
        subject_identifier: String => "subject_identifier",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// The roles associated with this subject.
        roles: Vec<RoleRef> => "roles",
    }
}

xen_record! {
    /// Fields accepted by `subject.create`; `None` leaves the server default.
    SubjectCreateArgs {
        /// The subject identifier, unique in the external directory service.
        subject_identifier: Option<String> => "subject_identifier",
        /// Additional configuration.
        other_config: Option<HashMap<String, String>> => "other_config",
    }
}

getters! {
    Subject, SubjectRef {
        /// Get the uuid field of the given subject.
        get_uuid => "get_uuid": String,
        /// Get the subject_identifier field of the given subject.
        get_subject_identifier => "get_subject_identifier": String,
        /// Get the other_config field of the given subject.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the roles field of the given subject.
        get_roles => "get_roles": Vec<RoleRef>,
        /// This call returns a list of permission names given a subject.
        get_permissions_name_label => "get_permissions_name_label": Vec<String>,
    }
}

impl ClassApi<'_, Subject> {
    /// Get a record containing the current state of the given subject.
    pub async fn get_record(&self, subject: &SubjectRef) -> Result<SubjectRecord> {
        self.call("get_record").arg("self", subject).invoke().await
    }

    /// Get a reference to the subject instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<SubjectRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Return a list of all the subjects known to the system.
    pub async fn get_all(&self) -> Result<Vec<SubjectRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of subject references to subject records for all subjects known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<SubjectRef, SubjectRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new subject instance, and return its handle.
    pub async fn create(&self, args: &SubjectCreateArgs) -> Result<SubjectRef> {
        self.call("create").arg("args", args).invoke().await
    }

    /// Asynchronous form of [`Self::create`].
    pub async fn async_create(&self, args: &SubjectCreateArgs) -> Result<TaskRef> {
        self.call("create").arg("args", args).invoke_async().await
    }

    /// Destroy the specified subject instance.
    pub async fn destroy(&self, subject: &SubjectRef) -> Result<()> {
        self.call("destroy").arg("self", subject).invoke().await
    }

    /// Asynchronous form of [`Self::destroy`].
    pub async fn async_destroy(&self, subject: &SubjectRef) -> Result<TaskRef> {
        self.call("destroy").arg("self", subject).invoke_async().await
    }

    /// This call adds a new role to a subject.
    pub async fn add_to_roles(&self, subject: &SubjectRef, role: &RoleRef) -> Result<()> {
        self.call("add_to_roles").arg("self", subject).arg("role", role).invoke().await
    }

    /// This call removes a role from a subject.
    pub async fn remove_from_roles(&self, subject: &SubjectRef, role: &RoleRef) -> Result<()> {
        self.call("remove_from_roles").arg("self", subject).arg("role", role).invoke().await
    }
}
