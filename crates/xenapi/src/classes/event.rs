//! `event`: Asynchronous event registration and handling.
//!
//! [`ClassApi::from`] is the current way to follow changes: each call returns the
//! events newer than `token` together with the token to pass next time. The
//! register/next pair is kept for servers that predate it.

use std::collections::HashMap;

use serde_json::Value;
use xenapi_core::codec::FromWire;
use xenapi_core::xen_record;

use crate::class::{ClassApi, XenClass};
use crate::enums::EventOperation;
use crate::refs::{EventRef, TaskRef};
use crate::Result;

/// Marker for the `event` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event;

impl XenClass for Event {
    const NAME: &'static str = "event";
    type Ref = EventRef;
    type Record = EventRecord;
}

xen_record! {
    /// One change to one object.
    EventRecord {
        /// An ID, monotonically increasing, and local to the current session.
        id: i64 => "id",
        /// The time at which the event occurred, as sent by the server.
        timestamp: String => "timestamp",
        /// The name of the class of the object that changed.
        class: String => "class",
        /// The operation that was performed.
        operation: EventOperation => "operation",
        /// A reference to the object that changed.
        reference: String => "ref",
        /// The uuid of the object that changed.
        obj_uuid: Option<String> => "obj_uuid",
        /// The record of the object that was added, changed or deleted.
        snapshot: Option<Value> => "snapshot",
    }
}

xen_record! {
    /// Result of `event.from`.
    EventBatch {
        /// Events newer than the token passed in.
        events: Vec<EventRecord> => "events",
        /// Number of live references per class.
        valid_ref_counts: HashMap<String, i64> => "valid_ref_counts",
        /// Token to pass to the next `event.from`.
        token: String => "token",
    }
}

impl EventRecord {
    /// Decode the snapshot as the record type of the changed class.
    ///
    /// Returns `None` when the event carries no snapshot, as for deletions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if the snapshot does not
    /// have the shape of `R`.
    pub fn snapshot_as<R: FromWire>(&self) -> Result<Option<R>> {
        let context = format!("event({}) -> snapshot", self.class);
        self.snapshot
            .as_ref()
            .map(|snapshot| R::from_wire(&context, snapshot))
            .transpose()
    }
}

impl ClassApi<'_, Event> {
    /// Registers this session with the event system for a set of given classes.
    pub async fn register(&self, classes: &[String]) -> Result<()> {
        self.call("register").arg("classes", classes).invoke().await
    }

    /// Asynchronous form of [`Self::register`].
    pub async fn async_register(&self, classes: &[String]) -> Result<TaskRef> {
        self.call("register").arg("classes", classes).invoke_async().await
    }

    /// Removes this session's registration with the event system for a set of given classes.
    pub async fn unregister(&self, classes: &[String]) -> Result<()> {
        self.call("unregister").arg("classes", classes).invoke().await
    }

    /// Asynchronous form of [`Self::unregister`].
    pub async fn async_unregister(&self, classes: &[String]) -> Result<TaskRef> {
        self.call("unregister").arg("classes", classes).invoke_async().await
    }

    /// Blocking call which returns a (possibly empty) batch of events.
    ///
    /// # Errors
    ///
    /// - `SESSION_NOT_REGISTERED`: This session is not registered to receive events.
    /// - `EVENTS_LOST`: Some events have been lost from the queue and cannot be retrieved.
    pub async fn next(&self) -> Result<Vec<EventRecord>> {
        self.call("next").invoke().await
    }

    /// Blocking call which returns a new token and a (possibly empty) batch of events.
    ///
    /// Pass an empty `token` to start from the current state; `timeout` is in
    /// seconds.
    ///
    /// # Errors
    ///
    /// - `SESSION_NOT_REGISTERED`: This session is not registered to receive events.
    /// - `EVENTS_LOST`: Some events have been lost from the queue and cannot be retrieved.
    pub async fn from(&self, classes: &[String], token: &str, timeout: f64) -> Result<EventBatch> {
        self.call("from")
            .arg("classes", classes)
            .arg("token", token)
            .arg("timeout", &timeout)
            .invoke()
            .await
    }

    /// Return the ID of the next event to be generated by the system.
    pub async fn get_current_id(&self) -> Result<i64> {
        self.call("get_current_id").invoke().await
    }

    /// Injects an artificial event on the given object and returns the corresponding ID in the form of a token.
    pub async fn inject(&self, class: &str, reference: &str) -> Result<String> {
        self.call("inject").arg("class", class).arg("ref", reference).invoke().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::classes::HostMetricsRecord;
    use crate::session::Session;
    use crate::test_support::{ok, Scripted};

    fn logged_in(wire: &Arc<Scripted>) -> Session {
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");
        session
    }

    #[tokio::test]
    async fn test_from_returns_batch() {
        let wire = Arc::new(Scripted::new([ok(json!({
            "events": [
                {
                    "id": "1024",
                    "timestamp": "1760601600.250",
                    "class": "host_metrics",
                    "operation": "mod",
                    "ref": "OpaqueRef:hm",
                    "snapshot": {
                        "uuid": "hm-1",
                        "memory_total": "68719476736",
                        "memory_free": "17179869184",
                        "live": true,
                        "last_updated": "20261016T08:00:00Z",
                        "other_config": {}
                    }
                },
                {
                    "id": "1025",
                    "timestamp": "1760601601.000",
                    "class": "VM",
                    "operation": "del",
                    "ref": "OpaqueRef:vm"
                }
            ],
            "valid_ref_counts": { "host_metrics": "1", "VM": "3" },
            "token": "0000000000001025,0000000000000000"
        }))]));
        let session = logged_in(&wire);

        let classes = ["host_metrics".to_string(), "VM".to_string()];
        let batch = session.event().from(&classes, "", 30.0).await.unwrap();

        assert_eq!(wire.methods(), ["event.from"]);
        assert_eq!(
            wire.request(0)["params"],
            json!(["OpaqueRef:s", ["host_metrics", "VM"], "", 30.0])
        );

        assert_eq!(batch.token, "0000000000001025,0000000000000000");
        assert_eq!(batch.valid_ref_counts["VM"], 3);
        assert_eq!(batch.events.len(), 2);

        let changed = &batch.events[0];
        assert_eq!(changed.id, 1024);
        assert_eq!(changed.operation, EventOperation::Mod);
        let metrics: HostMetricsRecord = changed.snapshot_as().unwrap().unwrap();
        assert_eq!(metrics.memory_free, 17_179_869_184);
        assert!(metrics.live);

        let deleted = &batch.events[1];
        assert_eq!(deleted.operation, EventOperation::Del);
        assert_eq!(deleted.reference, "OpaqueRef:vm");
        assert_eq!(deleted.snapshot_as::<HostMetricsRecord>().unwrap(), None);
    }

    #[tokio::test]
    async fn test_inject_and_current_id() {
        let wire = Arc::new(Scripted::new([
            ok(json!("0000000000001030,0000000000000000")),
            ok(json!("1031")),
        ]));
        let session = logged_in(&wire);

        let token = session.event().inject("VM", "OpaqueRef:vm").await.unwrap();
        assert_eq!(token, "0000000000001030,0000000000000000");
        assert_eq!(session.event().get_current_id().await.unwrap(), 1031);

        assert_eq!(
            wire.request(0)["params"],
            json!(["OpaqueRef:s", "VM", "OpaqueRef:vm"])
        );
        assert_eq!(wire.request(1)["params"], json!(["OpaqueRef:s"]));
    }

    #[test]
    fn test_snapshot_shape_mismatch() {
        let record = EventRecord {
            id: 1,
            timestamp: String::new(),
            class: "host_metrics".to_string(),
            operation: EventOperation::Add,
            reference: "OpaqueRef:hm".to_string(),
            obj_uuid: None,
            snapshot: Some(json!("not a record")),
        };
        let err = record.snapshot_as::<HostMetricsRecord>().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Decode { ref context, .. } if context.contains("host_metrics")
        ));
    }
}
