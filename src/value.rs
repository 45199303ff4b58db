// JsonValue: dynamically-typed JSON value model
// One variant type that acts as an ordered map, an indexable sequence,
// or a scalar/string payload, selected by its runtime kind.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use thiserror::Error;

/// The shape discriminant of a [`JsonValue`].
///
/// `Null` doubles as the uninitialized state: a freshly constructed value has
/// no shape yet and takes one on its first structural mutation (promotion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Object,
    Array,
    String,
    Scalar,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonKind::Null => "null",
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Scalar => "scalar",
        })
    }
}

/// Errors produced by value-model accessors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The operation is incompatible with the value's current kind.
    #[error("value of kind {kind} cannot be used as {expected}")]
    InvalidState {
        expected: &'static str,
        kind: JsonKind,
    },

    /// A typed getter could not coerce the stored payload.
    #[error("cannot interpret {payload:?} as {target}")]
    Format {
        target: &'static str,
        payload: String,
    },

    #[error("key {0:?} not found in object")]
    KeyNotFound(String),

    #[error("index {index} out of bounds for collection of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Scalar payload of a [`JsonValue`], tagged with its numeric subtype so the
/// original width survives a read-back.
///
/// Cross-type reads go through the payload's textual form (see the typed
/// getters on [`JsonValue`]); the tag is not a strict gate.
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
}

impl Scalar {
    /// The textual form used for coercion. Booleans are backed by the
    /// integers 1/0, which is observable through every typed getter.
    pub(crate) fn payload_text(&self) -> String {
        match self {
            Scalar::Bool(true) => "1".to_string(),
            Scalar::Bool(false) => "0".to_string(),
            Scalar::Int(v) => v.to_string(),
            Scalar::Long(v) => v.to_string(),
            Scalar::Double(v) => v.to_string(),
        }
    }

    fn integer_repr(&self) -> Option<i64> {
        match self {
            Scalar::Bool(b) => Some(i64::from(*b)),
            Scalar::Int(v) => Some(i64::from(*v)),
            Scalar::Long(v) => Some(*v),
            Scalar::Double(_) => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Double(a), Scalar::Double(b)) => a == b,
            // Bool/Int/Long compare by integer value (true counts as 1);
            // doubles never equal the integer family.
            (a, b) => match (a.integer_repr(), b.integer_repr()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

/// A dynamically-typed JSON value.
///
/// A value starts out as [`JsonValue::Null`] and takes a concrete shape on
/// its first structural mutation: the first [`insert`](JsonValue::insert)
/// makes it an object, the first [`push`](JsonValue::push) an array. After
/// that, using it as a different shape fails with
/// [`ValueError::InvalidState`] — only the typed setters may override an
/// established kind.
///
/// Objects are ordered: iteration and positional access follow insertion
/// order, and overwriting a key keeps its original position. An object is
/// addressable both by key and by position ([`get_index`](JsonValue::get_index)
/// returns the i-th inserted entry's value).
#[derive(Debug, Clone, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Object(IndexMap<String, JsonValue>),
    Array(Vec<JsonValue>),
    String(String),
    Scalar(Scalar),
}

// ── Construction ─────────────────────────────────────────────────────────────

impl JsonValue {
    /// An uninitialized value (kind `Null`).
    #[inline]
    pub fn new() -> Self {
        JsonValue::Null
    }

    /// An empty value of kind `Object`.
    #[inline]
    pub fn object() -> Self {
        JsonValue::Object(IndexMap::new())
    }

    /// An empty value of kind `Array`.
    #[inline]
    pub fn array() -> Self {
        JsonValue::Array(Vec::new())
    }
}

// ── Kind queries ─────────────────────────────────────────────────────────────

impl JsonValue {
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Object(_) => JsonKind::Object,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Scalar(_) => JsonKind::Scalar,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, JsonValue::Scalar(_))
    }
}

// ── Lenient accessors ────────────────────────────────────────────────────────

impl JsonValue {
    #[inline]
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
}

// ── Promotion ────────────────────────────────────────────────────────────────

impl JsonValue {
    /// Promote `Null` to an empty object, or fail if the kind is already
    /// something other than `Object`.
    fn ensure_object(&mut self) -> Result<&mut IndexMap<String, JsonValue>, ValueError> {
        if matches!(self, JsonValue::Null) {
            *self = JsonValue::Object(IndexMap::new());
        }
        match self {
            JsonValue::Object(map) => Ok(map),
            other => Err(ValueError::InvalidState {
                expected: "object",
                kind: other.kind(),
            }),
        }
    }

    /// Promote `Null` to an empty array, or fail if the kind is already
    /// something other than `Array`.
    fn ensure_array(&mut self) -> Result<&mut Vec<JsonValue>, ValueError> {
        if matches!(self, JsonValue::Null) {
            *self = JsonValue::Array(Vec::new());
        }
        match self {
            JsonValue::Array(items) => Ok(items),
            other => Err(ValueError::InvalidState {
                expected: "array",
                kind: other.kind(),
            }),
        }
    }
}

// ── Keyed access ─────────────────────────────────────────────────────────────

impl JsonValue {
    /// Look up a key in an object.
    pub fn get(&self, key: &str) -> Result<&JsonValue, ValueError> {
        match self {
            JsonValue::Object(map) => map
                .get(key)
                .ok_or_else(|| ValueError::KeyNotFound(key.to_string())),
            other => Err(ValueError::InvalidState {
                expected: "object",
                kind: other.kind(),
            }),
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut JsonValue, ValueError> {
        match self {
            JsonValue::Object(map) => map
                .get_mut(key)
                .ok_or_else(|| ValueError::KeyNotFound(key.to_string())),
            other => Err(ValueError::InvalidState {
                expected: "object",
                kind: other.kind(),
            }),
        }
    }

    /// Bind a key in an object, promoting `Null` to an empty object first.
    ///
    /// Overwriting an existing key replaces its value in place: the key keeps
    /// the position it was first inserted at. Returns the replaced value, if
    /// any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Result<Option<JsonValue>, ValueError> {
        let map = self.ensure_object()?;
        Ok(map.insert(key.into(), value.into()))
    }

    /// Whether an object has the given key. A `Null` value has no keys.
    pub fn contains_key(&self, key: &str) -> Result<bool, ValueError> {
        match self {
            JsonValue::Object(map) => Ok(map.contains_key(key)),
            JsonValue::Null => Ok(false),
            other => Err(ValueError::InvalidState {
                expected: "object",
                kind: other.kind(),
            }),
        }
    }

    /// Remove a key from an object, preserving the order of the remaining
    /// entries. An absent key is `Ok(None)`; removing from `Null` is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<Option<JsonValue>, ValueError> {
        match self {
            JsonValue::Object(map) => Ok(map.shift_remove(key)),
            JsonValue::Null => Ok(None),
            other => Err(ValueError::InvalidState {
                expected: "object",
                kind: other.kind(),
            }),
        }
    }
}

// ── Indexed access ───────────────────────────────────────────────────────────

impl JsonValue {
    /// Positional access. Arrays are addressed directly; objects return the
    /// i-th inserted entry's value, so an object is simultaneously
    /// key-addressable and order-addressable.
    pub fn get_index(&self, index: usize) -> Result<&JsonValue, ValueError> {
        match self {
            JsonValue::Array(items) => items.get(index).ok_or(ValueError::OutOfBounds {
                index,
                len: items.len(),
            }),
            JsonValue::Object(map) => {
                map.get_index(index)
                    .map(|(_, v)| v)
                    .ok_or(ValueError::OutOfBounds {
                        index,
                        len: map.len(),
                    })
            }
            other => Err(ValueError::InvalidState {
                expected: "collection",
                kind: other.kind(),
            }),
        }
    }

    pub fn get_index_mut(&mut self, index: usize) -> Result<&mut JsonValue, ValueError> {
        match self {
            JsonValue::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(ValueError::OutOfBounds { index, len })
            }
            JsonValue::Object(map) => {
                let len = map.len();
                map.get_index_mut(index)
                    .map(|(_, v)| v)
                    .ok_or(ValueError::OutOfBounds { index, len })
            }
            other => Err(ValueError::InvalidState {
                expected: "collection",
                kind: other.kind(),
            }),
        }
    }

    /// Replace the element at a position. For objects, the i-th entry's key
    /// is unchanged; only its value is replaced.
    pub fn set_index(
        &mut self,
        index: usize,
        value: impl Into<JsonValue>,
    ) -> Result<(), ValueError> {
        *self.get_index_mut(index)? = value.into();
        Ok(())
    }

    /// Append to an array, promoting `Null` to an empty array first.
    /// Returns the new element's index.
    pub fn push(&mut self, value: impl Into<JsonValue>) -> Result<usize, ValueError> {
        let items = self.ensure_array()?;
        items.push(value.into());
        Ok(items.len() - 1)
    }

    /// Remove the element at a position: positional for arrays, the i-th
    /// inserted entry for objects (map and entry order stay in sync).
    pub fn remove_at(&mut self, index: usize) -> Result<JsonValue, ValueError> {
        match self {
            JsonValue::Array(items) => {
                if index < items.len() {
                    Ok(items.remove(index))
                } else {
                    Err(ValueError::OutOfBounds {
                        index,
                        len: items.len(),
                    })
                }
            }
            JsonValue::Object(map) => {
                let len = map.len();
                map.shift_remove_index(index)
                    .map(|(_, v)| v)
                    .ok_or(ValueError::OutOfBounds { index, len })
            }
            other => Err(ValueError::InvalidState {
                expected: "collection",
                kind: other.kind(),
            }),
        }
    }

    /// Number of direct children of an object or array.
    pub fn len(&self) -> Result<usize, ValueError> {
        match self {
            JsonValue::Object(map) => Ok(map.len()),
            JsonValue::Array(items) => Ok(items.len()),
            other => Err(ValueError::InvalidState {
                expected: "collection",
                kind: other.kind(),
            }),
        }
    }

    /// Empty an object or array. A no-op for every other kind.
    pub fn clear(&mut self) {
        match self {
            JsonValue::Object(map) => map.clear(),
            JsonValue::Array(items) => items.clear(),
            _ => {}
        }
    }
}

// ── Typed scalar getters ─────────────────────────────────────────────────────
//
// Getters are valid on scalar and string kinds and coerce through the
// payload's textual form, so e.g. reading a double out of an integer-backed
// scalar succeeds via its decimal representation.

impl JsonValue {
    fn coercion_text(&self, target: &'static str) -> Result<String, ValueError> {
        match self {
            JsonValue::String(s) => Ok(s.clone()),
            JsonValue::Scalar(s) => Ok(s.payload_text()),
            other => Err(ValueError::InvalidState {
                expected: target,
                kind: other.kind(),
            }),
        }
    }

    /// Read the value as a boolean: the payload text must parse as an
    /// integer, and anything non-zero is true.
    pub fn get_bool(&self) -> Result<bool, ValueError> {
        if let JsonValue::Scalar(Scalar::Bool(b)) = self {
            return Ok(*b);
        }
        let text = self.coercion_text("boolean")?;
        text.parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| ValueError::Format {
                target: "boolean",
                payload: text,
            })
    }

    pub fn get_int(&self) -> Result<i32, ValueError> {
        if let JsonValue::Scalar(Scalar::Int(v)) = self {
            return Ok(*v);
        }
        let text = self.coercion_text("integer")?;
        text.parse::<i32>().map_err(|_| ValueError::Format {
            target: "integer",
            payload: text,
        })
    }

    pub fn get_long(&self) -> Result<i64, ValueError> {
        match self {
            JsonValue::Scalar(Scalar::Long(v)) => return Ok(*v),
            JsonValue::Scalar(Scalar::Int(v)) => return Ok(i64::from(*v)),
            _ => {}
        }
        let text = self.coercion_text("long")?;
        text.parse::<i64>().map_err(|_| ValueError::Format {
            target: "long",
            payload: text,
        })
    }

    pub fn get_double(&self) -> Result<f64, ValueError> {
        if let JsonValue::Scalar(Scalar::Double(v)) = self {
            return Ok(*v);
        }
        let text = self.coercion_text("double")?;
        text.parse::<f64>().map_err(|_| ValueError::Format {
            target: "double",
            payload: text,
        })
    }

    /// Read the value as text: the string payload itself, or a scalar's
    /// textual form (booleans read as `"1"`/`"0"`).
    pub fn get_string(&self) -> Result<String, ValueError> {
        self.coercion_text("string")
    }
}

// ── Typed scalar setters ─────────────────────────────────────────────────────
//
// Setters are the explicit override path: they force the kind to Scalar (or
// String) regardless of what the value held before, dropping any previous
// payload.

impl JsonValue {
    pub fn set_bool(&mut self, value: bool) {
        *self = JsonValue::Scalar(Scalar::Bool(value));
    }

    pub fn set_int(&mut self, value: i32) {
        *self = JsonValue::Scalar(Scalar::Int(value));
    }

    pub fn set_long(&mut self, value: i64) {
        *self = JsonValue::Scalar(Scalar::Long(value));
    }

    pub fn set_double(&mut self, value: f64) {
        *self = JsonValue::Scalar(Scalar::Double(value));
    }

    pub fn set_string(&mut self, value: impl Into<String>) {
        *self = JsonValue::String(value.into());
    }
}

// ── From impls ───────────────────────────────────────────────────────────────

impl From<bool> for JsonValue {
    #[inline]
    fn from(v: bool) -> Self {
        JsonValue::Scalar(Scalar::Bool(v))
    }
}

impl From<i32> for JsonValue {
    #[inline]
    fn from(v: i32) -> Self {
        JsonValue::Scalar(Scalar::Int(v))
    }
}

impl From<i64> for JsonValue {
    #[inline]
    fn from(v: i64) -> Self {
        JsonValue::Scalar(Scalar::Long(v))
    }
}

impl From<f64> for JsonValue {
    #[inline]
    fn from(v: f64) -> Self {
        JsonValue::Scalar(Scalar::Double(v))
    }
}

impl From<&str> for JsonValue {
    #[inline]
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    #[inline]
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    #[inline]
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}

impl From<IndexMap<String, JsonValue>> for JsonValue {
    #[inline]
    fn from(map: IndexMap<String, JsonValue>) -> Self {
        JsonValue::Object(map)
    }
}

// ── PartialEq ────────────────────────────────────────────────────────────────

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Object(a), JsonValue::Object(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Scalar(a), JsonValue::Scalar(b)) => a == b,
            _ => false,
        }
    }
}

// ── Display ──────────────────────────────────────────────────────────────────

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::writer::stringify(self))
    }
}

// ── Serialization ────────────────────────────────────────────────────────────

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_none(),
            JsonValue::Object(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for v in items.iter() {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            JsonValue::Scalar(Scalar::Int(v)) => serializer.serialize_i32(*v),
            JsonValue::Scalar(Scalar::Long(v)) => serializer.serialize_i64(*v),
            JsonValue::Scalar(Scalar::Double(v)) => {
                if v.is_finite() {
                    serializer.serialize_f64(*v)
                } else {
                    serializer.serialize_none()
                }
            }
        }
    }
}

// ── Deserialization ──────────────────────────────────────────────────────────

impl<'de> serde::Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<JsonValue, E> {
        Ok(JsonValue::Scalar(Scalar::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<JsonValue, E> {
        Ok(JsonValue::Scalar(Scalar::Long(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<JsonValue, E> {
        match i64::try_from(v) {
            Ok(n) => Ok(JsonValue::Scalar(Scalar::Long(n))),
            Err(_) => Ok(JsonValue::Scalar(Scalar::Double(v as f64))),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<JsonValue, E> {
        Ok(JsonValue::Scalar(Scalar::Double(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<JsonValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(elem) = seq.next_element()? {
            items.push(elem);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JsonValue, A::Error> {
        let mut m = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((k, v)) = map.next_entry()? {
            m.insert(k, v);
        }
        Ok(JsonValue::Object(m))
    }
}

// ── Conversion from serde_json::Value ────────────────────────────────────────

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Scalar(Scalar::Long(i)),
                None => JsonValue::Scalar(Scalar::Double(n.as_f64().unwrap_or(0.0))),
            },
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                let m: IndexMap<String, JsonValue> = map
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect();
                JsonValue::Object(m)
            }
        }
    }
}

// ── Conversion to serde_json::Value ──────────────────────────────────────────

impl From<&JsonValue> for serde_json::Value {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Object(map) => {
                let m: serde_json::Map<String, serde_json::Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect();
                serde_json::Value::Object(m)
            }
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            JsonValue::String(s) => serde_json::Value::String(s.clone()),
            JsonValue::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            JsonValue::Scalar(Scalar::Int(v)) => serde_json::Value::from(*v),
            JsonValue::Scalar(Scalar::Long(v)) => serde_json::Value::from(*v),
            JsonValue::Scalar(Scalar::Double(v)) => {
                if v.is_finite() {
                    serde_json::Value::from(*v)
                } else {
                    serde_json::Value::Null
                }
            }
        }
    }
}

// ── jval! macro ──────────────────────────────────────────────────────────────

/// Macro for constructing JsonValue literals.
///
/// Usage:
///   jval!(null)           → JsonValue::Null
///   jval!(true)           → boolean scalar
///   jval!(42i64)          → long scalar (via From)
///   jval!(3.14)           → double scalar
///   jval!("hello")        → string
///   jval!([1i64, 2i64])   → array
///   jval!({"k": v, ...})  → object (insertion order preserved)
///   jval!(expr)           → JsonValue::from(expr)
#[macro_export]
macro_rules! jval {
    // null
    (null) => {
        $crate::value::JsonValue::Null
    };

    // true
    (true) => {
        $crate::value::JsonValue::from(true)
    };

    // false
    (false) => {
        $crate::value::JsonValue::from(false)
    };

    // Array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::value::JsonValue::Array(vec![ $( $crate::jval!($elem) ),* ])
    };

    // Object
    ({ $($key:tt : $val:tt),* $(,)? }) => {
        {
            let mut map = $crate::IndexMap::new();
            $(
                map.insert(($key).to_string(), $crate::jval!($val));
            )*
            $crate::value::JsonValue::Object(map)
        }
    };

    // Expression (fallback — numbers, strings, variables, etc.)
    ($other:expr) => {
        $crate::value::JsonValue::from($other)
    };
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_queries() {
        assert!(JsonValue::Null.is_null());
        assert!(JsonValue::object().is_object());
        assert!(JsonValue::array().is_array());
        assert!(JsonValue::from("hello").is_string());
        assert!(JsonValue::from(42i32).is_scalar());
        assert_eq!(JsonValue::from(true).kind(), JsonKind::Scalar);
        assert_eq!(JsonValue::new().kind(), JsonKind::Null);
    }

    #[test]
    fn test_promotion_on_insert() {
        let mut v = JsonValue::new();
        v.insert("a", 1i64).unwrap();
        assert!(v.is_object());
        assert_eq!(v.get("a").unwrap(), &JsonValue::from(1i64));
    }

    #[test]
    fn test_promotion_on_push() {
        let mut v = JsonValue::new();
        let idx = v.push("first").unwrap();
        assert_eq!(idx, 0);
        assert!(v.is_array());
        assert_eq!(v.push("second").unwrap(), 1);
        assert_eq!(v.len().unwrap(), 2);
    }

    #[test]
    fn test_kind_is_sticky() {
        let mut v = JsonValue::new();
        v.push(1i64).unwrap();

        // An array cannot be used as an object and vice versa.
        let err = v.insert("a", 2i64).unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidState {
                expected: "object",
                kind: JsonKind::Array,
            }
        );

        let mut s = JsonValue::from("text");
        assert!(s.push(1i64).is_err());
        assert!(s.get("a").is_err());
    }

    #[test]
    fn test_setters_override_kind() {
        let mut v = JsonValue::new();
        v.insert("a", 1i64).unwrap();
        assert!(v.is_object());

        v.set_int(7);
        assert!(v.is_scalar());
        assert_eq!(v.get_int().unwrap(), 7);

        v.set_string("done");
        assert!(v.is_string());
        assert_eq!(v.get_string().unwrap(), "done");
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut v = JsonValue::new();
        v.insert("k1", 1i64).unwrap();
        v.insert("k2", 2i64).unwrap();
        v.insert("k3", 3i64).unwrap();
        let old = v.insert("k2", 20i64).unwrap();

        assert_eq!(old, Some(JsonValue::from(2i64)));
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
        assert_eq!(v.get("k2").unwrap(), &JsonValue::from(20i64));
    }

    #[test]
    fn test_dual_addressing() {
        let mut v = JsonValue::new();
        v.insert("a", 1i64).unwrap();
        v.insert("b", 2i64).unwrap();

        // Position 0 is the value bound to "a"; keyed access still works.
        assert_eq!(v.get_index(0).unwrap(), &JsonValue::from(1i64));
        assert_eq!(v.get_index(1).unwrap(), &JsonValue::from(2i64));
        assert_eq!(v.get("b").unwrap(), &JsonValue::from(2i64));
    }

    #[test]
    fn test_set_index_keeps_object_key() {
        let mut v = JsonValue::new();
        v.insert("a", 1i64).unwrap();
        v.set_index(0, 10i64).unwrap();
        assert_eq!(v.get("a").unwrap(), &JsonValue::from(10i64));

        let mut arr = JsonValue::new();
        arr.push(1i64).unwrap();
        arr.set_index(0, 5i64).unwrap();
        assert_eq!(arr.get_index(0).unwrap(), &JsonValue::from(5i64));
        assert!(arr.set_index(3, 0i64).is_err());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut v = JsonValue::new();
        v.insert("a", 1i64).unwrap();
        v.insert("b", 2i64).unwrap();
        v.insert("c", 3i64).unwrap();

        let removed = v.remove("b").unwrap();
        assert_eq!(removed, Some(JsonValue::from(2i64)));
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);
        // Positional access reflects the removal.
        assert_eq!(v.get_index(1).unwrap(), &JsonValue::from(3i64));

        assert_eq!(v.remove("missing").unwrap(), None);
    }

    #[test]
    fn test_remove_at() {
        let mut arr = JsonValue::new();
        arr.push(1i64).unwrap();
        arr.push(2i64).unwrap();
        arr.push(3i64).unwrap();
        assert_eq!(arr.remove_at(1).unwrap(), JsonValue::from(2i64));
        assert_eq!(arr.len().unwrap(), 2);

        let mut obj = JsonValue::new();
        obj.insert("x", 1i64).unwrap();
        obj.insert("y", 2i64).unwrap();
        assert_eq!(obj.remove_at(0).unwrap(), JsonValue::from(1i64));
        assert!(!obj.contains_key("x").unwrap());
        assert_eq!(obj.get_index(0).unwrap(), &JsonValue::from(2i64));

        assert!(arr.remove_at(9).is_err());
    }

    #[test]
    fn test_len_requires_collection() {
        assert!(JsonValue::from(1i64).len().is_err());
        assert!(JsonValue::from("s").len().is_err());
        assert!(JsonValue::Null.len().is_err());
        assert_eq!(JsonValue::object().len().unwrap(), 0);
    }

    #[test]
    fn test_key_not_found() {
        let mut v = JsonValue::new();
        v.insert("a", 1i64).unwrap();
        assert_eq!(
            v.get("b").unwrap_err(),
            ValueError::KeyNotFound("b".to_string())
        );
    }

    #[test]
    fn test_getter_coercion() {
        // Integer-backed scalar reads as double via its text form.
        assert_eq!(JsonValue::from(42i64).get_double().unwrap(), 42.0);
        // Whole double reads back as integer.
        assert_eq!(JsonValue::from(3.0).get_int().unwrap(), 3);
        assert_eq!(JsonValue::from(3.0).get_long().unwrap(), 3);
        // Fractional double does not.
        assert!(JsonValue::from(3.5).get_int().is_err());
        // Numeric strings coerce too.
        assert_eq!(JsonValue::from("2.5").get_double().unwrap(), 2.5);
        assert_eq!(JsonValue::from("17").get_long().unwrap(), 17);
        assert!(JsonValue::from("abc").get_int().is_err());
        // Long narrows to int only when it fits.
        assert_eq!(JsonValue::from(7i64).get_int().unwrap(), 7);
        assert!(JsonValue::from(1i64 << 40).get_int().is_err());
    }

    #[test]
    fn test_bool_payload_is_integer() {
        // Booleans are backed by 1/0, observable through every getter.
        assert_eq!(JsonValue::from(true).get_int().unwrap(), 1);
        assert_eq!(JsonValue::from(false).get_long().unwrap(), 0);
        assert_eq!(JsonValue::from(true).get_string().unwrap(), "1");
        // And the integer family reads back as boolean via != 0.
        assert!(!JsonValue::from(0i32).get_bool().unwrap());
        assert!(JsonValue::from(-3i64).get_bool().unwrap());
        assert!(JsonValue::from(0.5).get_bool().is_err());
    }

    #[test]
    fn test_getters_reject_collections() {
        let obj = JsonValue::object();
        assert!(matches!(
            obj.get_string(),
            Err(ValueError::InvalidState { .. })
        ));
        assert!(JsonValue::Null.get_int().is_err());
        assert!(JsonValue::array().get_double().is_err());
    }

    #[test]
    fn test_equality() {
        assert_eq!(JsonValue::Null, JsonValue::Null);
        assert_ne!(JsonValue::Null, JsonValue::object());
        assert_eq!(JsonValue::from("a"), JsonValue::from("a"));
        // Int and Long compare by value; bool counts as 1/0.
        assert_eq!(JsonValue::from(1i32), JsonValue::from(1i64));
        assert_eq!(JsonValue::from(true), JsonValue::from(1i32));
        // Doubles never equal the integer family.
        assert_ne!(JsonValue::from(1.0), JsonValue::from(1i64));
        assert_ne!(JsonValue::from(f64::NAN), JsonValue::from(f64::NAN));
    }

    #[test]
    fn test_jval_macro() {
        let v = jval!({"name": "Alice", "tags": [1i64, 2i64], "active": true});
        assert_eq!(v.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(v.get("tags").unwrap().len().unwrap(), 2);
        assert!(v.get("active").unwrap().get_bool().unwrap());
        assert!(jval!(null).is_null());
        assert_eq!(jval!([1i64, 2i64, 3i64]).len().unwrap(), 3);
    }

    #[test]
    fn test_from_serde_json() {
        let sv = serde_json::json!({"name": "Alice", "age": 30, "score": 1.5});
        let v = JsonValue::from(sv);
        assert_eq!(v.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(v.get("age").unwrap().get_long().unwrap(), 30);
        assert_eq!(v.get("score").unwrap().get_double().unwrap(), 1.5);
    }

    #[test]
    fn test_to_serde_json() {
        let v = jval!({"ok": true, "n": 42i64});
        let sv = serde_json::Value::from(&v);
        assert_eq!(sv["ok"], serde_json::Value::Bool(true));
        assert_eq!(sv["n"], serde_json::json!(42));
    }

    #[test]
    fn test_serde_roundtrip() {
        let v = jval!({"name": "Alice", "scores": [1i64, 2i64, 3i64], "active": true});
        let text = serde_json::to_string(&v).unwrap();
        let back: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(v, back);
    }
}
