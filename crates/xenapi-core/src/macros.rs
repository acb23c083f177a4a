//! Declaration macros for references, enumerations and records.
//!
//! Every server class gets a distinct reference newtype, every schema
//! enumeration a closed Rust enum, and every record a plain struct. The macros
//! emit the codec implementations so that all three travel through
//! [`ToWire`](crate::codec::ToWire) and [`FromWire`](crate::codec::FromWire)
//! with the same error contexts as built-in types.

/// Declare a strongly-typed reference to instances of one server class.
///
/// # Example
///
/// ```
/// use xenapi_core::xen_ref;
///
/// xen_ref! {
///     /// Reference to a virtual block device.
///     VbdRef => "VBD"
/// }
///
/// let vbd = VbdRef::new("OpaqueRef:1f0e");
/// assert_eq!(vbd.as_str(), "OpaqueRef:1f0e");
/// assert_eq!(VbdRef::CLASS, "VBD");
/// assert!(VbdRef::null().is_null());
/// ```
#[macro_export]
macro_rules! xen_ref {
    ($(#[$meta:meta])* $name:ident => $class:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(String);

        impl $name {
            /// Wire name of the class this reference points into.
            pub const CLASS: &'static str = $class;

            /// Wrap a reference string issued by the server.
            pub fn new(reference: impl Into<String>) -> Self {
                Self(reference.into())
            }

            /// The reference the server uses for "no object".
            #[must_use]
            pub fn null() -> Self {
                Self($crate::codec::NULL_REF.to_string())
            }

            /// Returns true for the null reference (or an empty one).
            #[must_use]
            pub fn is_null(&self) -> bool {
                self.0.is_empty() || self.0 == $crate::codec::NULL_REF
            }

            /// Get the reference as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap the reference string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $crate::codec::ToWire for $name {
            fn to_wire(&self, _context: &str) -> $crate::Result<$crate::codec::Value> {
                Ok($crate::codec::Value::String(self.0.clone()))
            }
        }

        impl $crate::codec::FromWire for $name {
            fn from_wire(context: &str, value: &$crate::codec::Value) -> $crate::Result<Self> {
                $crate::codec::expect_str(context, value).map(Self::new)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                <String as $crate::__serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}

/// Declare a closed enumeration with a canonical wire string per member.
///
/// Decoding a string outside the declared set is an error, never a fallback
/// member.
///
/// # Example
///
/// ```
/// use xenapi_core::xen_enum;
///
/// xen_enum! {
///     /// VBD access mode.
///     VbdMode {
///         /// Read-only
///         Ro => "RO",
///         /// Read-write
///         Rw => "RW",
///     }
/// }
///
/// assert_eq!(VbdMode::Ro.as_str(), "RO");
/// assert_eq!("RW".parse::<VbdMode>().unwrap(), VbdMode::Rw);
/// assert!("rw".parse::<VbdMode>().is_err());
/// ```
#[macro_export]
macro_rules! xen_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire string of this member.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Look up a member by its wire string.
            #[must_use]
            pub fn from_wire_str(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_wire_str(s).ok_or_else(|| {
                    $crate::Error::decode(
                        stringify!($name),
                        format!("unknown value {s:?}"),
                    )
                })
            }
        }

        impl $crate::codec::ToWire for $name {
            fn to_wire(&self, _context: &str) -> $crate::Result<$crate::codec::Value> {
                Ok($crate::codec::Value::String(self.as_str().to_string()))
            }
        }

        impl $crate::codec::FromWire for $name {
            fn from_wire(context: &str, value: &$crate::codec::Value) -> $crate::Result<Self> {
                let text = $crate::codec::expect_str(context, value)?;
                Self::from_wire_str(text).ok_or_else(|| {
                    $crate::Error::decode(
                        context,
                        format!("unknown {} value {text:?}", stringify!($name)),
                    )
                })
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let text = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::from_wire_str(&text).ok_or_else(|| {
                    <D::Error as $crate::__serde::de::Error>::custom(format!(
                        "unknown {} value {text:?}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

/// Declare a record: a plain struct whose fields map onto wire field names.
///
/// Decoding ignores fields the struct does not declare and fails on a missing
/// field unless its type is an `Option`.
///
/// # Example
///
/// ```
/// use xenapi_core::codec::{FromWire, Value};
/// use xenapi_core::xen_record;
///
/// xen_record! {
///     /// A console.
///     ConsoleRecord {
///         /// Unique identifier
///         uuid: String => "uuid",
///         /// URI for the console service
///         location: String => "location",
///     }
/// }
///
/// let wire = serde_json::json!({"uuid": "c-1", "location": "https://h/console", "other": 1});
/// let record = ConsoleRecord::from_wire("console.get_record -> ", &wire).unwrap();
/// assert_eq!(record.location, "https://h/console");
/// ```
#[macro_export]
macro_rules! xen_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$fmeta:meta])* $field:ident : $ty:ty => $wire:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }

        impl $name {
            /// Wire names of every field, in declaration order.
            pub const FIELDS: &'static [&'static str] = &[$($wire),*];
        }

        impl $crate::codec::ToWire for $name {
            #[allow(unused_mut)]
            fn to_wire(&self, context: &str) -> $crate::Result<$crate::codec::Value> {
                let mut object = $crate::codec::Map::new();
                $(
                    if !$crate::codec::ToWire::is_absent(&self.$field) {
                        let value = $crate::codec::ToWire::to_wire(
                            &self.$field,
                            &$crate::codec::field_context(context, $wire),
                        )?;
                        object.insert($wire.to_string(), value);
                    }
                )*
                Ok($crate::codec::Value::Object(object))
            }
        }

        impl $crate::codec::FromWire for $name {
            #[allow(unused_variables)]
            fn from_wire(context: &str, value: &$crate::codec::Value) -> $crate::Result<Self> {
                let object = $crate::codec::expect_object(context, value)?;
                Ok(Self {
                    $($field: $crate::codec::decode_field(context, object, $wire)?),*
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use crate::codec::{FromWire, ToWire};
    use crate::Error;

    crate::xen_ref! {
        /// Test reference.
        ThingRef => "thing"
    }

    crate::xen_enum! {
        /// Test enumeration.
        Colour {
            /// Red
            Red => "red",
            /// Dark green
            DarkGreen => "dark-green",
        }
    }

    crate::xen_record! {
        /// Test record.
        ThingRecord {
            /// Identifier
            uuid: String => "uuid",
            /// Colour
            colour: Colour => "colour",
            /// Links
            links: Vec<ThingRef> => "links",
            /// Labels
            labels: HashMap<String, String> => "labels",
            /// Optional note
            note: Option<String> => "note",
        }
    }

    #[test]
    fn test_ref_round_trip() {
        let thing = ThingRef::new("OpaqueRef:1");
        let wire = thing.to_wire("c").unwrap();
        assert_eq!(wire, json!("OpaqueRef:1"));
        assert_eq!(ThingRef::from_wire("c", &wire).unwrap(), thing);
        assert_eq!(thing.to_string(), "OpaqueRef:1");
        assert!(!thing.is_null());
        assert!(ThingRef::null().is_null());
        assert!(ThingRef::default().is_null());
    }

    #[test]
    fn test_ref_serde() {
        let thing = ThingRef::new("OpaqueRef:2");
        assert_eq!(serde_json::to_value(&thing).unwrap(), json!("OpaqueRef:2"));
        let back: ThingRef = serde_json::from_value(json!("OpaqueRef:2")).unwrap();
        assert_eq!(back, thing);
    }

    #[test]
    fn test_enum_totality() {
        for colour in Colour::ALL {
            let wire = colour.to_wire("c").unwrap();
            assert_eq!(Colour::from_wire("c", &wire).unwrap(), *colour);
        }
        let err = Colour::from_wire("VM.get_colour -> ", &json!("blue")).unwrap_err();
        assert!(matches!(err, Error::Decode { ref context, .. } if context == "VM.get_colour -> "));
        assert!("Red".parse::<Colour>().is_err());
        assert_eq!(Colour::DarkGreen.to_string(), "dark-green");
    }

    #[test]
    fn test_enum_serde_rejects_unknown() {
        assert!(serde_json::from_value::<Colour>(json!("blue")).is_err());
        assert_eq!(
            serde_json::from_value::<Colour>(json!("red")).unwrap(),
            Colour::Red
        );
    }

    #[test]
    fn test_record_decode_ignores_extra_fields() {
        let wire = json!({
            "uuid": "t-1",
            "colour": "dark-green",
            "links": ["OpaqueRef:a", "OpaqueRef:b"],
            "labels": [["k", "v"]],
            "unexpected": 12
        });
        let record = ThingRecord::from_wire("thing.get_record -> ", &wire).unwrap();
        assert_eq!(record.colour, Colour::DarkGreen);
        assert_eq!(record.links[1], ThingRef::new("OpaqueRef:b"));
        assert_eq!(record.labels["k"], "v");
        assert_eq!(record.note, None);
        assert_eq!(ThingRecord::FIELDS.len(), 5);
    }

    #[test]
    fn test_record_missing_field() {
        let wire = json!({"uuid": "t-1", "links": [], "labels": []});
        let err = ThingRecord::from_wire("thing.get_record -> ", &wire).unwrap_err();
        assert_eq!(
            err,
            Error::decode("thing.get_record -> colour", "missing required field")
        );
    }

    #[test]
    fn test_record_encode_skips_absent() {
        let record = ThingRecord {
            uuid: "t-1".to_string(),
            colour: Colour::Red,
            links: vec![],
            labels: HashMap::new(),
            note: None,
        };
        let wire = record.to_wire("thing.create(args)").unwrap();
        assert_eq!(
            wire,
            json!({"uuid": "t-1", "colour": "red", "links": [], "labels": []})
        );
        assert_eq!(ThingRecord::from_wire("c", &wire).unwrap(), record);
    }
}
