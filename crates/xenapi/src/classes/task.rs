//! `task`: A long-running asynchronous task.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::{TaskAllowedOperations, TaskStatusType};
use crate::refs::{HostRef, TaskRef};
use crate::Result;

/// Marker for the `task` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task;

impl XenClass for Task {
    const NAME: &'static str = "task";
    type Ref = TaskRef;
    type Record = TaskRecord;
}

xen_record! {
    /// A long-running asynchronous task.
    TaskRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// List of the operations allowed in this state. This list is advisory only and the server state may have changed by the time this field is read by a client.
        allowed_operations: Vec<TaskAllowedOperations> => "allowed_operations",
        /// Links each of the running tasks using this object (by reference) to a current_operation enum which describes the nature of the task.
        current_operations: HashMap<String, TaskAllowedOperations> => "current_operations",
        /// Time task was created.
        created: DateTime<Utc> => "created",
        /// Time task finished (i.e. succeeded or failed). If task-status is pending, then the value of this field has no meaning.
        finished: DateTime<Utc> => "finished",
        /// Current status of the task.
        status: TaskStatusType => "status",
        /// The host on which the task is running.
        resident_on: HostRef => "resident_on",
        /// This field contains the estimated fraction of the task which is complete. This field should not be used to determine whether the task is complete - for this the status field of the task should be used.
        progress: f64 => "progress",
        /// If the task has completed successfully, this field contains the type of the encoded result (i.e. name of the class whose reference is in the result field). Undefined otherwise.
        type_: String => "type",
        /// If the task has completed successfully, this field contains the result value (either Void or an object reference). Undefined otherwise.
        result: String => "result",
        /// If the task has failed, this field contains the set of associated error strings. Undefined otherwise.
        error_info: Vec<String> => "error_info",
        /// Additional configuration.
        other_config: HashMap<String, String> => "other_config",
        /// Ref pointing to the task this is a substask of.
        subtask_of: TaskRef => "subtask_of",
        /// List pointing to all the substasks.
        subtasks: Vec<TaskRef> => "subtasks",
        /// Function call trace for debugging.
        backtrace: String => "backtrace",
    }
}

getters! {
    Task, TaskRef {
        /// Get the uuid field of the given task.
        get_uuid => "get_uuid": String,
        /// Get the name/label field of the given task.
        get_name_label => "get_name_label": String,
        /// Get the name/description field of the given task.
        get_name_description => "get_name_description": String,
        /// Get the allowed_operations field of the given task.
        get_allowed_operations => "get_allowed_operations": Vec<TaskAllowedOperations>,
        /// Get the current_operations field of the given task.
        get_current_operations => "get_current_operations": HashMap<String, TaskAllowedOperations>,
        /// Get the created field of the given task.
        get_created => "get_created": DateTime<Utc>,
        /// Get the finished field of the given task.
        get_finished => "get_finished": DateTime<Utc>,
        /// Get the status field of the given task.
        get_status => "get_status": TaskStatusType,
        /// Get the resident_on field of the given task.
        get_resident_on => "get_resident_on": HostRef,
        /// Get the progress field of the given task.
        get_progress => "get_progress": f64,
        /// Get the type field of the given task.
        get_type => "get_type": String,
        /// Get the result field of the given task.
        get_result => "get_result": String,
        /// Get the error_info field of the given task.
        get_error_info => "get_error_info": Vec<String>,
        /// Get the other_config field of the given task.
        get_other_config => "get_other_config": HashMap<String, String>,
        /// Get the subtask_of field of the given task.
        get_subtask_of => "get_subtask_of": TaskRef,
        /// Get the subtasks field of the given task.
        get_subtasks => "get_subtasks": Vec<TaskRef>,
        /// Get the backtrace field of the given task.
        get_backtrace => "get_backtrace": String,
    }
}

setters! {
    Task, TaskRef {
        /// Set the other_config field of the given task.
        ///
        /// Since `miami`.
        set_other_config => "set_other_config": &HashMap<String, String>,
        /// Set the task status.
        ///
        /// Since `falcon`.
        set_status => "set_status": TaskStatusType,
        /// Set the task progress.
        ///
        /// Since `stockholm`.
        set_progress => "set_progress": f64,
        /// Set the task result.
        ///
        /// Since `21.3.0`.
        set_result => "set_result": &str,
        /// Set the task error info.
        ///
        /// Since `21.3.0`.
        set_error_info => "set_error_info": &[String],
    }
}

map_mutators! {
    Task, TaskRef {
        /// Add the given key-value pair to the other_config field of the given task.
        add_to_other_config, remove_from_other_config => "other_config": &str => &str,
    }
}

impl ClassApi<'_, Task> {
    /// Get a record containing the current state of the given task.
    pub async fn get_record(&self, task: &TaskRef) -> Result<TaskRecord> {
        self.call("get_record").arg("self", task).invoke().await
    }

    /// Get a reference to the task instance with the specified UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<TaskRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Get all the task instances with the given label.
    pub async fn get_by_name_label(&self, label: &str) -> Result<Vec<TaskRef>> {
        self.call("get_by_name_label").arg("label", label).invoke().await
    }

    /// Return a list of all the tasks known to the system.
    pub async fn get_all(&self) -> Result<Vec<TaskRef>> {
        self.call("get_all").invoke().await
    }

    /// Return a map of task references to task records for all tasks known to the system.
    pub async fn get_all_records(&self) -> Result<HashMap<TaskRef, TaskRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Create a new task object which must be manually destroyed.
    pub async fn create(&self, label: &str, description: &str) -> Result<TaskRef> {
        self.call("create").arg("label", label).arg("description", description).invoke().await
    }

    /// Destroy the task object.
    pub async fn destroy(&self, task: &TaskRef) -> Result<()> {
        self.call("destroy").arg("self", task).invoke().await
    }

    /// Request that a task be cancelled. Note that a task may fail to be cancelled and may complete or fail normally and note that, even when a task does cancel, it might take an arbitrary amount of time.
    ///
    /// # Errors
    ///
    /// - `OPERATION_NOT_ALLOWED`: You attempted an operation that was not allowed.
    pub async fn cancel(&self, task: &TaskRef) -> Result<()> {
        self.call("cancel").arg("task", task).invoke().await
    }

    /// Asynchronous form of [`Self::cancel`].
    pub async fn async_cancel(&self, task: &TaskRef) -> Result<TaskRef> {
        self.call("cancel").arg("task", task).invoke_async().await
    }
}
