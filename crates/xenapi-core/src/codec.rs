//! Wire codec.
//!
//! Converts client values to and from the JSON values carried in JSON-RPC
//! `params` and `result`. Every conversion takes a context path (`"VBD.insert(vdi)"`
//! for arguments, `"VBD.get_record -> "` for results) that is reported verbatim in
//! [`Error::Decode`] and [`Error::Encode`].
//!
//! | Client type | Wire shape |
//! |-------------|------------|
//! | `String` | string |
//! | `i64` | quoted base-10 string on output; string or number on input |
//! | `f64` | number |
//! | `bool` | boolean |
//! | `DateTime<Utc>` | string, `20240131T08:15:00Z` |
//! | references, enumerations | string |
//! | `Vec<T>` (sets and sequences) | array |
//! | `HashMap<K, V>` | array of `[key, value]` pairs |
//! | records | object keyed by wire field name |

use std::collections::HashMap;
use std::hash::Hash;
use std::num::IntErrorKind;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, Result};

pub use serde_json::{Map, Value};

/// The reference the server uses for "no object".
pub const NULL_REF: &str = "OpaqueRef:NULL";

/// Lexical form of timestamps on the wire.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H:%M:%SZ";

/// A value that can be put on the wire.
pub trait ToWire {
    /// Encode `self`, reporting failures against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the value has no wire representation.
    fn to_wire(&self, context: &str) -> Result<Value>;

    /// Returns true if the value should be left out of an enclosing record.
    fn is_absent(&self) -> bool {
        false
    }
}

/// A value that can be read off the wire.
pub trait FromWire: Sized {
    /// Decode a value, reporting failures against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the value violates the type's wire contract.
    fn from_wire(context: &str, value: &Value) -> Result<Self>;

    /// Called when a record field is missing from the wire object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] unless the type has a natural "absent" value.
    fn from_missing(context: &str) -> Result<Self> {
        Err(Error::decode(context, "missing required field"))
    }
}

/// Path of a record field below `context`.
#[must_use]
pub fn field_context(context: &str, field: &str) -> String {
    if context.is_empty() || context.ends_with("-> ") {
        format!("{context}{field}")
    } else {
        format!("{context}.{field}")
    }
}

/// Short name of a JSON value's type, for error messages.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(context: &str, expected: &str, found: &Value) -> Error {
    Error::decode(
        context,
        format!("expected {expected}, found {}", type_name(found)),
    )
}

/// Borrow a string value.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `value` is not a string.
pub fn expect_str<'v>(context: &str, value: &'v Value) -> Result<&'v str> {
    value.as_str().ok_or_else(|| mismatch(context, "string", value))
}

/// Borrow an array value.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `value` is not an array.
pub fn expect_array<'v>(context: &str, value: &'v Value) -> Result<&'v [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(context, "array", value))
}

/// Borrow an object value.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `value` is not an object.
pub fn expect_object<'v>(context: &str, value: &'v Value) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(context, "object", value))
}

/// Decode the record field `wire_name` from `object`.
///
/// Extra fields in `object` are ignored; a missing field is handed to
/// [`FromWire::from_missing`].
///
/// # Errors
///
/// Returns [`Error::Decode`] if the field is missing and required, or malformed.
pub fn decode_field<T: FromWire>(
    context: &str,
    object: &Map<String, Value>,
    wire_name: &str,
) -> Result<T> {
    let context = field_context(context, wire_name);
    match object.get(wire_name) {
        Some(value) => T::from_wire(&context, value),
        None => T::from_missing(&context),
    }
}

/// Encode `value` for the argument `name` of `method`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the value has no wire representation.
pub fn encode_arg<T: ToWire + ?Sized>(method: &str, name: &str, value: &T) -> Result<Value> {
    value.to_wire(&format!("{method}({name})"))
}

/// Decode the result of `method`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the result violates the expected type.
pub fn decode_result<T: FromWire>(method: &str, value: &Value) -> Result<T> {
    T::from_wire(&format!("{method} -> "), value)
}

impl<T: ToWire + ?Sized> ToWire for &T {
    fn to_wire(&self, context: &str) -> Result<Value> {
        (**self).to_wire(context)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl ToWire for str {
    fn to_wire(&self, _context: &str) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToWire for String {
    fn to_wire(&self, context: &str) -> Result<Value> {
        self.as_str().to_wire(context)
    }
}

impl FromWire for String {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        expect_str(context, value).map(ToString::to_string)
    }
}

impl ToWire for i64 {
    fn to_wire(&self, _context: &str) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl FromWire for i64 {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => text.trim().parse::<Self>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Error::decode(context, format!("integer {text} is out of range"))
                }
                _ => Error::decode(context, format!("{text:?} is not a base-10 integer")),
            }),
            Value::Number(number) => {
                if let Some(n) = number.as_i64() {
                    Ok(n)
                } else if number.is_u64() {
                    Err(Error::decode(context, format!("integer {number} is out of range")))
                } else {
                    Err(Error::decode(context, format!("{number} is not an integer")))
                }
            }
            other => Err(mismatch(context, "integer", other)),
        }
    }
}

impl ToWire for f64 {
    fn to_wire(&self, context: &str) -> Result<Value> {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| Error::encode(context, format!("{self} is not a finite number")))
    }
}

impl FromWire for f64 {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch(context, "number", value))
    }
}

impl ToWire for bool {
    fn to_wire(&self, _context: &str) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl FromWire for bool {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch(context, "boolean", value))
    }
}

impl ToWire for DateTime<Utc> {
    fn to_wire(&self, _context: &str) -> Result<Value> {
        Ok(Value::String(self.format(TIMESTAMP_FORMAT).to_string()))
    }
}

impl FromWire for DateTime<Utc> {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        parse_timestamp(context, expect_str(context, value)?)
    }
}

/// Parse a wire timestamp.
///
/// Accepts the canonical `20240131T08:15:00Z` form, the same form with a numeric
/// offset (`20240131T09:15:00+01:00`) and RFC 3339. A timestamp without zone
/// information is rejected.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `text` is not a zoned timestamp.
pub fn parse_timestamp(context: &str, text: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y%m%dT%H:%M:%S%.fZ") {
        return Ok(naive.and_utc());
    }
    for format in ["%Y%m%dT%H:%M:%S%.f%:z", "%Y%m%dT%H:%M:%S%.f%z"] {
        if let Ok(zoned) = DateTime::parse_from_str(text, format) {
            return Ok(zoned.with_timezone(&Utc));
        }
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
        return Ok(zoned.with_timezone(&Utc));
    }

    let unzoned = ["%Y%m%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok());
    if unzoned {
        Err(Error::decode(
            context,
            format!("timestamp {text:?} has no timezone"),
        ))
    } else {
        Err(Error::decode(context, format!("malformed timestamp {text:?}")))
    }
}

impl<T: ToWire> ToWire for [T] {
    fn to_wire(&self, context: &str) -> Result<Value> {
        self.iter()
            .map(|item| item.to_wire(context))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self, context: &str) -> Result<Value> {
        self.as_slice().to_wire(context)
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        expect_array(context, value)?
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(&format!("{context}[{index}]"), item))
            .collect()
    }
}

impl<K, V, S> ToWire for HashMap<K, V, S>
where
    K: ToWire,
    V: ToWire,
{
    fn to_wire(&self, context: &str) -> Result<Value> {
        self.iter()
            .map(|(key, value)| {
                Ok(Value::Array(vec![
                    key.to_wire(context)?,
                    value.to_wire(context)?,
                ]))
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<K, V> FromWire for HashMap<K, V>
where
    K: FromWire + Eq + Hash,
    V: FromWire,
{
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        let mut map = Self::new();
        let mut insert = |raw_key: &Value, raw_value: &Value| -> Result<()> {
            let key = K::from_wire(context, raw_key)?;
            let entry_context = format!("{context}[{}]", raw_key.as_str().unwrap_or_default());
            let value = V::from_wire(&entry_context, raw_value)?;
            if map.insert(key, value).is_some() {
                return Err(Error::decode(context, format!("duplicate map key {raw_key}")));
            }
            Ok(())
        };

        match value {
            Value::Array(pairs) => {
                for pair in pairs {
                    match pair.as_array().map(Vec::as_slice) {
                        Some([key, value]) => insert(key, value)?,
                        _ => {
                            return Err(Error::decode(
                                context,
                                format!("map entry {pair} is not a [key, value] pair"),
                            ))
                        }
                    }
                }
            }
            // Object-shaped maps are what some servers emit
            Value::Object(object) => {
                for (key, value) in object {
                    insert(&Value::String(key.clone()), value)?;
                }
            }
            other => return Err(mismatch(context, "map", other)),
        }

        Ok(map)
    }
}

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self, context: &str) -> Result<Value> {
        match self {
            Some(value) => value.to_wire(context),
            None => Ok(Value::Null),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: FromWire> FromWire for Option<T> {
    fn from_wire(context: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_wire(context, value).map(Some),
        }
    }

    fn from_missing(_context: &str) -> Result<Self> {
        Ok(None)
    }
}

impl ToWire for Value {
    fn to_wire(&self, _context: &str) -> Result<Value> {
        Ok(self.clone())
    }
}

impl FromWire for Value {
    fn from_wire(_context: &str, value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

/// Operations without a result.
impl FromWire for () {
    fn from_wire(_context: &str, _value: &Value) -> Result<Self> {
        Ok(())
    }

    fn from_missing(_context: &str) -> Result<Self> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn decode<T: FromWire>(value: Value) -> Result<T> {
        T::from_wire("test -> ", &value)
    }

    #[test]
    fn test_string() {
        assert_eq!(decode::<String>(json!("abc")).unwrap(), "abc");
        assert!(matches!(
            decode::<String>(json!(1)),
            Err(Error::Decode { .. })
        ));
        assert_eq!("abc".to_wire("c").unwrap(), json!("abc"));
    }

    #[test]
    fn test_integer_quoted_and_bare() {
        assert_eq!(decode::<i64>(json!("9223372036854775807")).unwrap(), i64::MAX);
        assert_eq!(decode::<i64>(json!(9_223_372_036_854_775_807_i64)).unwrap(), i64::MAX);
        assert_eq!(decode::<i64>(json!("-42")).unwrap(), -42);
        assert_eq!(42_i64.to_wire("c").unwrap(), json!("42"));
    }

    #[test]
    fn test_integer_overflow() {
        let err = decode::<i64>(json!("9223372036854775808")).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let err = decode::<i64>(json!(9_223_372_036_854_775_808_u64)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_integer_rejects_garbage() {
        assert!(decode::<i64>(json!("12abc")).is_err());
        assert!(decode::<i64>(json!(1.5)).is_err());
        assert!(decode::<i64>(json!(true)).is_err());
    }

    #[test]
    fn test_double() {
        assert!((decode::<f64>(json!(0.25)).unwrap() - 0.25).abs() < f64::EPSILON);
        assert!((decode::<f64>(json!(3)).unwrap() - 3.0).abs() < f64::EPSILON);
        assert!(decode::<f64>(json!("0.25")).is_err());
        assert!(f64::NAN.to_wire("c").is_err());
    }

    #[test]
    fn test_boolean_is_strict() {
        assert!(decode::<bool>(json!(true)).unwrap());
        assert!(decode::<bool>(json!("true")).is_err());
        assert!(decode::<bool>(json!(1)).is_err());
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 8, 15, 0).unwrap();
        let wire = ts.to_wire("c").unwrap();
        assert_eq!(wire, json!("20240131T08:15:00Z"));
        assert_eq!(decode::<DateTime<Utc>>(wire).unwrap(), ts);
    }

    #[test]
    fn test_timestamp_with_offset() {
        let ts = decode::<DateTime<Utc>>(json!("20240131T09:15:00+01:00")).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 31, 8, 15, 0).unwrap());

        let ts = decode::<DateTime<Utc>>(json!("2024-01-31T08:15:00Z")).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 31, 8, 15, 0).unwrap());
    }

    #[test]
    fn test_timestamp_without_timezone_is_rejected() {
        let err = decode::<DateTime<Utc>>(json!("20240131T08:15:00")).unwrap_err();
        assert!(err.to_string().contains("no timezone"));

        let err = decode::<DateTime<Utc>>(json!("yesterday")).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_sequence_preserves_order() {
        let values = decode::<Vec<String>>(json!(["b", "a", "c"])).unwrap();
        assert_eq!(values, ["b", "a", "c"]);
        assert_eq!(values.to_wire("c").unwrap(), json!(["b", "a", "c"]));
    }

    #[test]
    fn test_sequence_error_context() {
        let err = decode::<Vec<i64>>(json!(["1", "x"])).unwrap_err();
        match err {
            Error::Decode { context, .. } => assert_eq!(context, "test -> [1]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_pairs() {
        let map = decode::<HashMap<String, i64>>(json!([["a", "1"], ["b", 2]])).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 1);
        assert_eq!(map["b"], 2);

        let single: HashMap<String, String> =
            HashMap::from([("xapi".to_string(), "25.14.0".to_string())]);
        assert_eq!(single.to_wire("c").unwrap(), json!([["xapi", "25.14.0"]]));
    }

    #[test]
    fn test_map_object_form() {
        let map = decode::<HashMap<String, String>>(json!({"xapi": "25.14.0"})).unwrap();
        assert_eq!(map["xapi"], "25.14.0");
    }

    #[test]
    fn test_map_rejects_duplicate_keys() {
        let err = decode::<HashMap<String, String>>(json!([["a", "1"], ["a", "2"]])).unwrap_err();
        assert!(err.to_string().contains("duplicate map key"));
    }

    #[test]
    fn test_map_rejects_bad_pairs() {
        assert!(decode::<HashMap<String, String>>(json!([["a"]])).is_err());
        assert!(decode::<HashMap<String, String>>(json!([["a", "1", "2"]])).is_err());
        assert!(decode::<HashMap<String, String>>(json!("a")).is_err());
    }

    #[test]
    fn test_option() {
        assert_eq!(decode::<Option<String>>(json!(null)).unwrap(), None);
        assert_eq!(
            decode::<Option<String>>(json!("x")).unwrap(),
            Some("x".to_string())
        );
        assert_eq!(Option::<String>::from_missing("c").unwrap(), None);
        assert!(None::<String>.is_absent());
    }

    #[test]
    fn test_unit_accepts_anything() {
        decode::<()>(json!("")).unwrap();
        decode::<()>(json!(null)).unwrap();
    }

    #[test]
    fn test_decode_field() {
        let object = json!({"uuid": "u-1", "extra": 5});
        let object = object.as_object().unwrap();
        let uuid: String = decode_field("VM.get_record -> ", object, "uuid").unwrap();
        assert_eq!(uuid, "u-1");

        let err = decode_field::<String>("VM.get_record -> ", object, "name_label").unwrap_err();
        assert_eq!(
            err,
            Error::decode("VM.get_record -> name_label", "missing required field")
        );
    }

    #[test]
    fn test_field_context() {
        assert_eq!(field_context("VM.get_record -> ", "uuid"), "VM.get_record -> uuid");
        assert_eq!(field_context("VBD.create(args)", "mode"), "VBD.create(args).mode");
        assert_eq!(field_context("", "mode"), "mode");
    }

    #[test]
    fn test_encode_arg_and_decode_result_contexts() {
        let err = encode_arg("VM.set_VCPUs_at_startup", "value", &f64::INFINITY).unwrap_err();
        assert!(matches!(err, Error::Encode { ref context, .. } if context == "VM.set_VCPUs_at_startup(value)"));

        let err = decode_result::<bool>("VBD.get_empty", &json!("yes")).unwrap_err();
        assert!(matches!(err, Error::Decode { ref context, .. } if context == "VBD.get_empty -> "));
    }
}
