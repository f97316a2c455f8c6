//! The record contract shared by every wire shape.
//!
//! A record is a fixed, ordered set of optional fields plus an extension map
//! holding any keys the schema does not declare. Concrete records are produced
//! by the `record!` macro; this module defines what they expose.
//!
//! # Structure
//!
//! - [`Record`] - trait implemented by every generated record
//! - [`FieldDescriptor`] / [`FieldKind`] - structural metadata per fixed field
//! - [`Extension`] - storage for unrecognized keys

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Storage for keys not declared by a record's schema.
pub type Extension = BTreeMap<String, Value>;

/// Declared semantic type of a fixed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 64-bit signed integer (flags included).
    Integer,
    /// UTF-8 string.
    String,
    /// Arbitrary JSON value.
    Untyped,
    /// Nested record, by type name.
    Record(&'static str),
    /// Ordered sequence of the inner kind.
    List(&'static FieldKind),
    /// String-keyed mapping to the inner kind.
    Map(&'static FieldKind),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::String => f.write_str("string"),
            Self::Untyped => f.write_str("untyped"),
            Self::Record(name) => f.write_str(name),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Map(inner) => write!(f, "mapping<string, {inner}>"),
        }
    }
}

/// Metadata describing one fixed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// In-memory field name.
    pub name: &'static str,
    /// Key used in the encoded form. Renaming it breaks the wire contract.
    pub wire_key: &'static str,
    /// Declared type.
    pub kind: FieldKind,
}

/// A schema-derived record.
///
/// Implementations come from the `record!` macro, which also generates the
/// per-field getter, `set_*`, `with_*` and `take_*` methods.
pub trait Record: Serialize + DeserializeOwned + Default + fmt::Display {
    /// Name of the record type.
    const TYPE_NAME: &'static str;

    /// Fixed fields in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// The live extension map.
    fn extension(&self) -> &Extension;

    /// Mutable handle to the extension map. Changes are reflected in the record.
    fn extension_mut(&mut self) -> &mut Extension;

    /// Insert or overwrite an extension entry.
    ///
    /// The key is stored even if it matches a fixed wire key; the fixed field
    /// is left untouched.
    fn set_extension(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extension_mut().insert(key.into(), value.into());
    }

    /// Diagnostic rendering of every fixed field and the extension map.
    fn describe(&self) -> String {
        self.to_string()
    }

    /// Look up a fixed field by wire key.
    fn field(wire_key: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|field| field.wire_key == wire_key)
    }

    /// Whether `key` is the wire key of a fixed field.
    fn is_fixed_key(key: &str) -> bool {
        Self::field(key).is_some()
    }

    /// Extension keys that shadow a fixed wire key. These are never encoded.
    fn colliding_extension_keys(&self) -> Vec<&str> {
        self.extension()
            .keys()
            .map(String::as_str)
            .filter(|key| Self::is_fixed_key(key))
            .collect()
    }
}

/// Write a field value for `describe`: compact JSON, or `null` when unset.
pub(crate) fn write_value<T: Serialize>(
    f: &mut fmt::Formatter<'_>,
    value: Option<&T>,
) -> fmt::Result {
    match value {
        None => f.write_str("null"),
        Some(value) => {
            let rendered = serde_json::to_string(value).map_err(|_| fmt::Error)?;
            f.write_str(&rendered)
        }
    }
}
