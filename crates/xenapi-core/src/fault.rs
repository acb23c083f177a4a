//! Structured server faults.
//!
//! A fault names a stable error code and carries an ordered parameter list whose
//! meaning depends on the code (for example `HOST_IS_SLAVE` carries the address of
//! the pool coordinator as its only parameter).

pub mod codes;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fault returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fault {
    /// Error code, e.g. `VBD_IS_EMPTY`
    pub code: String,
    /// Code-specific parameters, in server order
    pub params: Vec<String>,
}

impl Fault {
    /// Create a fault from a code and its parameters.
    #[must_use]
    pub fn new(code: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            code: code.into(),
            params,
        }
    }

    /// The error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The parameter list.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns the parameter at `index`, if present.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Returns true if this fault carries the given code.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    /// Human-readable rendering of code and parameters, suitable for logs.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Decode the `error` member of a JSON-RPC response.
    ///
    /// Three payload shapes are accepted:
    ///
    /// - `{"code": "VBD_IS_EMPTY", "params": ["OpaqueRef:..."]}`
    /// - `{"code": -32000, "message": "VBD_IS_EMPTY", "data": ["OpaqueRef:..."]}`
    /// - `["VBD_IS_EMPTY", "OpaqueRef:..."]`, which is also how `task.error_info`
    ///   stores a failure
    ///
    /// Returns `None` when the value has none of these shapes.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Self::from_strings(items),
            Value::Object(map) => {
                if let Some(Value::String(code)) = map.get("code") {
                    let params = map.get("params").map(params_of).unwrap_or_default();
                    return Some(Self::new(code.clone(), params));
                }

                let Some(Value::String(message)) = map.get("message") else {
                    return None;
                };
                match map.get("data") {
                    // Some servers put the whole legacy array under `data`
                    Some(Value::Array(data))
                        if data.first().and_then(Value::as_str) == Some(message.as_str()) =>
                    {
                        Self::from_strings(data)
                    }
                    Some(data) => Some(Self::new(message.clone(), params_of(data))),
                    None => Some(Self::new(message.clone(), Vec::new())),
                }
            }
            _ => None,
        }
    }

    /// Decode a legacy `[code, param, ...]` list.
    #[must_use]
    pub fn from_strings(items: &[Value]) -> Option<Self> {
        let (code, rest) = items.split_first()?;
        let code = code.as_str()?;
        Some(Self::new(code, rest.iter().map(param_string).collect()))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}({})", self.code, self.params.join(", "))
        }
    }
}

fn params_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(param_string).collect(),
        Value::Null => Vec::new(),
        other => vec![param_string(other)],
    }
}

fn param_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fault_from_code_params_shape() {
        let fault = Fault::from_value(&json!({
            "code": "HOST_IS_SLAVE",
            "params": ["10.0.0.7"]
        }))
        .unwrap();
        assert_eq!(fault.code(), codes::HOST_IS_SLAVE);
        assert_eq!(fault.params(), ["10.0.0.7"]);
        assert_eq!(fault.param(0), Some("10.0.0.7"));
        assert_eq!(fault.param(1), None);
    }

    #[test]
    fn test_fault_from_code_without_params() {
        let fault = Fault::from_value(&json!({"code": "SESSION_AUTHENTICATION_FAILED"})).unwrap();
        assert!(fault.is(codes::SESSION_AUTHENTICATION_FAILED));
        assert!(fault.params().is_empty());
    }

    #[test]
    fn test_fault_from_jsonrpc_shape() {
        let fault = Fault::from_value(&json!({
            "code": -32000,
            "message": "VBD_IS_EMPTY",
            "data": ["OpaqueVBD/7"]
        }))
        .unwrap();
        assert_eq!(fault, Fault::new("VBD_IS_EMPTY", vec!["OpaqueVBD/7".to_string()]));
    }

    #[test]
    fn test_fault_from_jsonrpc_shape_with_legacy_data() {
        let fault = Fault::from_value(&json!({
            "code": 1,
            "message": "HOST_IS_SLAVE",
            "data": ["HOST_IS_SLAVE", "10.0.0.7"]
        }))
        .unwrap();
        assert_eq!(fault.params(), ["10.0.0.7"]);
    }

    #[test]
    fn test_fault_from_legacy_array() {
        let fault = Fault::from_value(&json!(["VM_BAD_POWER_STATE", "OpaqueRef:1", "halted", 3]))
            .unwrap();
        assert_eq!(fault.code(), "VM_BAD_POWER_STATE");
        assert_eq!(fault.params(), ["OpaqueRef:1", "halted", "3"]);
    }

    #[test]
    fn test_fault_from_unrecognised_shape() {
        assert!(Fault::from_value(&json!("boom")).is_none());
        assert!(Fault::from_value(&json!([])).is_none());
        assert!(Fault::from_value(&json!({"unexpected": true})).is_none());
    }

    #[test]
    fn test_fault_display() {
        let fault = Fault::new("VBD_IS_EMPTY", vec!["OpaqueVBD/7".to_string()]);
        assert_eq!(fault.to_string(), "VBD_IS_EMPTY(OpaqueVBD/7)");
        assert_eq!(Fault::new("SESSION_INVALID", vec![]).message(), "SESSION_INVALID");
    }
}
