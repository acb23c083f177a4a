//! Waiting on asynchronous operations.
//!
//! Every `async_*` verb returns a [`TaskRef`]; the task binding is how the caller
//! follows it. [`ClassApi::wait_for`] is a convenience on top of that binding:
//! it polls `task.get_status` until the task is no longer pending and then
//! decodes `task.get_result` with the same codec a synchronous call would use.

use std::time::Duration;

use serde_json::Value;
use tokio::time::{sleep, Instant};
use tracing::debug;
use xenapi_core::codec::FromWire;
use xenapi_core::fault::codes;
use xenapi_core::xmlrpc;
use xenapi_core::{Error, Fault, Result};

use crate::class::ClassApi;
use crate::classes::Task;
use crate::enums::TaskStatusType;
use crate::refs::TaskRef;

/// Handle on the task class.
pub type TaskApi<'s> = ClassApi<'s, Task>;

/// Default interval between status polls, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// How [`TaskApi::wait_for`] polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Pause between status polls
    pub poll_interval: Duration,
    /// Give up after this long; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            timeout: None,
        }
    }
}

impl WaitOptions {
    /// Set the pause between status polls.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Give up after `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ClassApi<'_, Task> {
    /// Wait for `task` to finish and decode its result as `T`.
    ///
    /// Use `()` for operations without a result. The task itself is left for
    /// the caller to destroy.
    ///
    /// # Errors
    ///
    /// - [`Error::TaskFailed`] with the fault stored in the task's `error_info`
    /// - [`Error::TaskCancelled`] if the task was cancelled
    /// - [`Error::TaskTimeout`] if `options.timeout` elapses first
    /// - any error from the polling calls or from decoding the result
    pub async fn wait_for<T: FromWire>(&self, task: &TaskRef, options: WaitOptions) -> Result<T> {
        let deadline = options.timeout.map(|timeout| Instant::now() + timeout);
        let mut polls = 0_u32;

        loop {
            let status = self.get_status(task).await?;
            polls += 1;
            debug!(task = %task, %status, polls, "Polled task");

            match status {
                TaskStatusType::Success => {
                    let result = self.get_result(task).await?;
                    return decode_task_result(&result);
                }
                TaskStatusType::Failure => {
                    let info = self.get_error_info(task).await?;
                    return Err(Error::TaskFailed(task_fault(&info)));
                }
                TaskStatusType::Cancelled => {
                    return Err(Error::TaskCancelled(task.to_string()));
                }
                TaskStatusType::Pending | TaskStatusType::Cancelling => {}
            }

            if let Some(deadline) = deadline {
                if Instant::now() + options.poll_interval > deadline {
                    return Err(Error::TaskTimeout(task.to_string()));
                }
            }
            sleep(options.poll_interval).await;
        }
    }
}

/// Decode the text a successful task stores as its result.
///
/// The server keeps the result as an XML-RPC fragment such as
/// `<value>OpaqueRef:..</value>` or `<value><array><data>..</data></array></value>`,
/// which is read into the same shape a synchronous call returns. Text without
/// markup is tried as a string first and as JSON second.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the fragment is malformed or the value does not
/// have the shape of `T`.
pub fn decode_task_result<T: FromWire>(text: &str) -> Result<T> {
    const CONTEXT: &str = "task.get_result -> ";

    let text = text.trim();
    if text.starts_with('<') {
        return match xmlrpc::parse_value(CONTEXT, text)? {
            Some(value) => T::from_wire(CONTEXT, &value),
            None => T::from_missing(CONTEXT),
        };
    }
    if text.is_empty() {
        return T::from_missing(CONTEXT);
    }

    match T::from_wire(CONTEXT, &Value::String(text.to_string())) {
        Ok(value) => Ok(value),
        Err(error) => serde_json::from_str::<Value>(text)
            .map_or(Err(error), |value| T::from_wire(CONTEXT, &value)),
    }
}

fn task_fault(info: &[String]) -> Fault {
    let items: Vec<Value> = info.iter().cloned().map(Value::String).collect();
    Fault::from_strings(&items).unwrap_or_else(|| {
        Fault::new(
            codes::INTERNAL_ERROR,
            vec!["task failed without error information".to_string()],
        )
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::refs::VdiRef;
    use crate::session::Session;
    use crate::test_support::{ok, Scripted};

    fn logged_in(wire: &Arc<Scripted>) -> Session {
        let session = Session::with_transport(wire.clone());
        session.assume_reference("OpaqueRef:s");
        session
    }

    fn quick() -> WaitOptions {
        WaitOptions::default().with_poll_interval(Duration::from_millis(1))
    }

    #[test]
    fn test_decode_task_result() {
        let vdi: VdiRef = decode_task_result("<value>OpaqueRef:vdi</value>").unwrap();
        assert_eq!(vdi, VdiRef::new("OpaqueRef:vdi"));

        decode_task_result::<()>("").unwrap();
        decode_task_result::<()>("<value></value>").unwrap();

        let count: i64 = decode_task_result("<value>42</value>").unwrap();
        assert_eq!(count, 42);

        let refs: Vec<VdiRef> = decode_task_result(r#"["OpaqueRef:a","OpaqueRef:b"]"#).unwrap();
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_decode_task_result_reads_xmlrpc_array() {
        let refs: Vec<VdiRef> = decode_task_result(
            "<value><array><data><value>OpaqueRef:a</value></data></array></value>",
        )
        .unwrap();
        assert_eq!(refs, [VdiRef::new("OpaqueRef:a")]);

        let empty: Vec<VdiRef> =
            decode_task_result("<value><array><data></data></array></value>").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_task_result_reads_xmlrpc_struct() {
        let text = "<value><struct>\
            <member><name>sr</name><value><int>7</int></value></member>\
            <member><name>pool</name><value><i8>1024</i8></value></member>\
            </struct></value>";
        let counts: HashMap<String, i64> = decode_task_result(text).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["sr"], 7);
        assert_eq!(counts["pool"], 1024);
    }

    #[test]
    fn test_decode_task_result_prefers_strings() {
        let text: String = decode_task_result("<value>123</value>").unwrap();
        assert_eq!(text, "123");
        let text: String = decode_task_result("123").unwrap();
        assert_eq!(text, "123");
        let flag: bool = decode_task_result("<value><boolean>1</boolean></value>").unwrap();
        assert!(flag);
    }

    #[test]
    fn test_decode_task_result_rejects_malformed_fragment() {
        let err = decode_task_result::<String>("<value><string>open</value>").unwrap_err();
        assert_eq!(err.kind(), xenapi_core::ErrorKind::Decoding);
    }

    #[test]
    fn test_decode_task_result_requires_value() {
        let err = decode_task_result::<VdiRef>("<value></value>").unwrap_err();
        assert!(
            matches!(err, Error::Decode { ref context, .. } if context.starts_with("task.get_result"))
        );
    }

    #[test]
    fn test_wait_options_builders() {
        let options = WaitOptions::default();
        assert_eq!(options.poll_interval, Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));
        assert_eq!(options.timeout, None);

        let options = options
            .with_poll_interval(Duration::from_secs(2))
            .with_timeout(Duration::from_secs(60));
        assert_eq!(options.poll_interval, Duration::from_secs(2));
        assert_eq!(options.timeout, Some(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn test_wait_for_polls_until_success() {
        let wire = Arc::new(Scripted::new([
            ok(json!("pending")),
            ok(json!("pending")),
            ok(json!("success")),
            ok(json!("<value>OpaqueRef:vdi</value>")),
        ]));
        let session = logged_in(&wire);
        let task = TaskRef::new("OpaqueRef:task");

        let vdi: VdiRef = session.task().wait_for(&task, quick()).await.unwrap();

        assert_eq!(vdi, VdiRef::new("OpaqueRef:vdi"));
        assert_eq!(
            wire.methods(),
            [
                "task.get_status",
                "task.get_status",
                "task.get_status",
                "task.get_result"
            ]
        );
        assert_eq!(wire.request(0)["params"], json!(["OpaqueRef:s", "OpaqueRef:task"]));
    }

    #[tokio::test]
    async fn test_wait_for_reports_failure() {
        let wire = Arc::new(Scripted::new([
            ok(json!("failure")),
            ok(json!(["VDI_IN_USE", "OpaqueRef:vdi", "destroy"])),
        ]));
        let session = logged_in(&wire);

        let err = session
            .task()
            .wait_for::<()>(&TaskRef::new("OpaqueRef:task"), quick())
            .await
            .unwrap_err();

        match err {
            Error::TaskFailed(fault) => {
                assert_eq!(fault.code(), "VDI_IN_USE");
                assert_eq!(fault.params(), ["OpaqueRef:vdi", "destroy"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wait_for_failure_without_info() {
        let wire = Arc::new(Scripted::new([ok(json!("failure")), ok(json!([]))]));
        let session = logged_in(&wire);

        let err = session
            .task()
            .wait_for::<()>(&TaskRef::new("OpaqueRef:task"), quick())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), codes::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_wait_for_reports_cancellation() {
        let wire = Arc::new(Scripted::new([ok(json!("cancelling")), ok(json!("cancelled"))]));
        let session = logged_in(&wire);

        let err = session
            .task()
            .wait_for::<()>(&TaskRef::new("OpaqueRef:task"), quick())
            .await
            .unwrap_err();
        assert_eq!(err, Error::TaskCancelled("OpaqueRef:task".to_string()));
    }

    #[tokio::test]
    async fn test_wait_for_times_out() {
        let wire = Arc::new(Scripted::new([ok(json!("pending"))]));
        let session = logged_in(&wire);
        let options = WaitOptions::default()
            .with_poll_interval(Duration::from_secs(5))
            .with_timeout(Duration::from_secs(1));

        let err = session
            .task()
            .wait_for::<()>(&TaskRef::new("OpaqueRef:task"), options)
            .await
            .unwrap_err();
        assert_eq!(err, Error::TaskTimeout("OpaqueRef:task".to_string()));
        assert_eq!(wire.methods().len(), 1);
    }
}
