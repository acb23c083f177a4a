//! Fakes shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use xenapi_core::transport::Transport;
use xenapi_core::Result;

mockall::mock! {
    pub Wire {}

    #[async_trait]
    impl Transport for Wire {
        async fn send(&self, request: Vec<u8>) -> Result<Vec<u8>>;
    }
}

/// Answers calls from a script, in order, and keeps every request it saw.
///
/// A script entry is either `{"result": ..}` or `{"error": ..}`; the
/// correlation id is filled in from the request.
pub struct Scripted {
    replies: Mutex<VecDeque<Value>>,
    pub requests: Mutex<Vec<Value>>,
}

impl Scripted {
    pub fn new(replies: impl IntoIterator<Item = Value>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request["method"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn request(&self, index: usize) -> Value {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for Scripted {
    async fn send(&self, request: Vec<u8>) -> Result<Vec<u8>> {
        let request: Value = serde_json::from_slice(&request).unwrap();
        let mut reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call {}", request["method"]));
        reply["jsonrpc"] = json!("2.0");
        reply["id"] = request["id"].clone();
        self.requests.lock().unwrap().push(request);
        Ok(serde_json::to_vec(&reply).unwrap())
    }
}

pub fn ok(result: Value) -> Value {
    json!({ "result": result })
}

pub fn fault(code: &str, params: &[&str]) -> Value {
    json!({ "error": { "code": code, "params": params } })
}
