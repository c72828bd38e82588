//! Dynamic value payload for record-shaped items.
//!
//! Collections are generic over their value type; `Value` is the payload to
//! reach for when items are heterogeneous or record-like (name/department rows,
//! JSON documents). Records keep their field order.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::key::{AsKey, Key};
use crate::traits::{Fields, Numeric, Sequence};

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Build a record from `(field, value)` pairs, keeping their order.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|(k, _)| k == field).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

/// Assign a numeric order to value kinds for mixed-kind comparisons.
fn kind_order(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(_) => 3,
        Value::List(_) => 4,
        Value::Record(_) => 5,
    }
}

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact integer/float comparison; no rounding of `a` through `f64`.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if b < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    let whole = b.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(b - whole)),
        other => Some(other),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => {
                cmp_int_float(*a, *b) == Some(Ordering::Equal)
            }
            (Str(a), Str(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Record(a), Record(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Nulls sort first, numbers compare across int/float, mixed kinds order
    /// by kind. `NaN` is unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Null, Null) => Some(Ordering::Equal),
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => cmp_int_float(*a, *b),
            (Float(a), Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Str(a), Str(b)) => Some(a.cmp(b)),
            (List(a), List(b)) => a.partial_cmp(b),
            (Record(a), Record(b)) => a.partial_cmp(b),
            _ => Some(kind_order(self).cmp(&kind_order(other))),
        }
    }
}

/// Numeric sum; non-numeric values are skipped. Stays `Int` until a float
/// shows up or the integer total overflows.
impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::Int(0), |acc, v| match (acc, v) {
            (Value::Int(a), Value::Int(b)) => match a.checked_add(*b) {
                Some(total) => Value::Int(total),
                None => Value::Float(a as f64 + *b as f64),
            },
            (acc, v) => match (acc.as_f64(), v.as_f64()) {
                (Some(a), Some(b)) => Value::Float(a + b),
                (_, None) => acc,
                (None, Some(_)) => v.clone(),
            },
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::List(_) | Value::Record(_) => {
                let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => s.serialize_unit(),
            Value::Bool(b) => s.serialize_bool(*b),
            Value::Int(i) => s.serialize_i64(*i),
            Value::Float(f) => s.serialize_f64(*f),
            Value::Str(v) => s.serialize_str(v),
            Value::List(items) => items.serialize(s),
            Value::Record(fields) => {
                let mut map = s.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(d).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

macro_rules! value_from {
    ($($t:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )*
    };
}

value_from!(
    i32 => Int as i64,
    i64 => Int as i64,
    u32 => Int as i64,
    usize => Int as i64,
    f32 => Float as f64,
    f64 => Float as f64,
);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl AsKey for Value {
    /// Strings become names and integers indices; floats truncate and null
    /// maps to the empty name.
    fn as_key(&self) -> Option<Key> {
        match self {
            Value::Null => Some(Key::Name(String::new())),
            Value::Bool(b) => Some(Key::Index(*b as i64)),
            Value::Int(i) => Some(Key::Index(*i)),
            Value::Float(f) if f.is_finite() => Some(Key::Index(f.trunc() as i64)),
            Value::Str(s) => Some(Key::Name(s.clone())),
            _ => None,
        }
    }
}

impl Numeric for Value {
    fn to_f64(&self) -> Option<f64> {
        self.as_f64()
    }
}

impl Fields for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Sequence for Value {
    type Item = Value;

    fn to_items(&self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items.clone()),
            Value::Record(fields) => Some(fields.iter().map(|(_, v)| v.clone()).collect()),
            _ => None,
        }
    }
}

/// Build a [`Value::Record`] from `field => value` pairs.
///
/// ```
/// use collectrs_core::record;
///
/// let row = record! { "name" => "Fauzan", "department" => "IT" };
/// assert_eq!(row.get("department").and_then(|v| v.as_str()), Some("IT"));
/// ```
#[macro_export]
macro_rules! record {
    ($($field:expr => $value:expr),* $(,)?) => {
        $crate::value::Value::Record(vec![
            $((::std::string::ToString::to_string(&$field), $crate::value::Value::from($value))),*
        ])
    };
}
