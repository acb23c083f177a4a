//! `message`: An message for the attention of the administrator.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::Cls;
use crate::refs::{MessageRef, TaskRef};
use crate::Result;

/// Marker for the `message` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message;

impl XenClass for Message {
    const NAME: &'static str = "message";
    type Ref = MessageRef;
    type Record = MessageRecord;
}

xen_record! {
    /// An message for the attention of the administrator.
    MessageRecord {
        /// Unique identifier/object reference.
        uuid: String => "uuid",
        /// The name of the message.
        name: String => "name",
        /// The message priority, 0 being low priority.
        priority: i64 => "priority",
        /// The class of the object this message is associated with.
        cls: Cls => "cls",
        /// The uuid of the object this message is associated with.
        obj_uuid: String => "obj_uuid",
        /// The time at which the message was created.
        timestamp: DateTime<Utc> => "timestamp",
        /// The body of the message.
        body: String => "body",
    }
}

impl ClassApi<'_, Message> {
    /// Call `message.get_record`.
    pub async fn get_record(&self, message: &MessageRef) -> Result<MessageRecord> {
        self.call("get_record").arg("self", message).invoke().await
    }

    /// Call `message.get_by_uuid`.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<MessageRef> {
        self.call("get_by_uuid").arg("uuid", uuid).invoke().await
    }

    /// Call `message.get_all`.
    pub async fn get_all(&self) -> Result<Vec<MessageRef>> {
        self.call("get_all").invoke().await
    }

    /// Call `message.get_all_records`.
    pub async fn get_all_records(&self) -> Result<HashMap<MessageRef, MessageRecord>> {
        self.call("get_all_records").invoke().await
    }

    /// Call `message.create`.
    pub async fn create(
        &self,
        name: &str,
        priority: i64,
        cls: Cls,
        obj_uuid: &str,
        body: &str,
    ) -> Result<MessageRef> {
        self.call("create")
            .arg("name", name)
            .arg("priority", &priority)
            .arg("cls", &cls)
            .arg("obj_uuid", obj_uuid)
            .arg("body", body)
            .invoke()
            .await
    }

    /// Call `message.destroy`.
    pub async fn destroy(&self, message: &MessageRef) -> Result<()> {
        self.call("destroy").arg("self", message).invoke().await
    }

    /// Call `message.destroy_many`.
    pub async fn destroy_many(&self, messages: &[MessageRef]) -> Result<()> {
        self.call("destroy_many").arg("messages", messages).invoke().await
    }

    /// Asynchronous form of [`Self::destroy_many`].
    pub async fn async_destroy_many(&self, messages: &[MessageRef]) -> Result<TaskRef> {
        self.call("destroy_many").arg("messages", messages).invoke_async().await
    }

    /// Call `message.get`.
    pub async fn get(
        &self,
        cls: Cls,
        obj_uuid: &str,
        since: DateTime<Utc>,
    ) -> Result<HashMap<MessageRef, MessageRecord>> {
        self.call("get")
            .arg("cls", &cls)
            .arg("obj_uuid", obj_uuid)
            .arg("since", &since)
            .invoke()
            .await
    }

    /// Call `message.get_since`.
    pub async fn get_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<HashMap<MessageRef, MessageRecord>> {
        self.call("get_since").arg("since", &since).invoke().await
    }

    /// Call `message.get_all_records_where`.
    pub async fn get_all_records_where(
        &self,
        expr: &str,
    ) -> Result<HashMap<MessageRef, MessageRecord>> {
        self.call("get_all_records_where").arg("expr", expr).invoke().await
    }
}
