// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A single feature value.
///
/// The wire format carries feature values as a union over a fixed set of
/// primitive kinds and lists of those kinds. A value with no kind set (an
/// empty message on the wire) is represented as [Value::Unset]; this is what
/// the service returns alongside a `NULL_VALUE` or `NOT_FOUND` status.
///
/// # Example
/// ```
/// # use feast_types::{Value, int64_val};
/// let v = int64_val(42);
/// assert_eq!(v.as_int64(), Some(42));
/// assert_eq!(Value::default(), Value::Unset);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Value {
    #[default]
    Unset,
    Bytes(Vec<u8>),
    String(String),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Float(f32),
    Bool(bool),
    BytesList(Vec<Vec<u8>>),
    StringList(Vec<String>),
    Int32List(Vec<i32>),
    Int64List(Vec<i64>),
    DoubleList(Vec<f64>),
    FloatList(Vec<f32>),
    BoolList(Vec<bool>),
}

/// The kind of a [Value], as named by the wire schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueType {
    Invalid,
    Bytes,
    String,
    Int32,
    Int64,
    Double,
    Float,
    Bool,
    BytesList,
    StringList,
    Int32List,
    Int64List,
    DoubleList,
    FloatList,
    BoolList,
}

impl ValueType {
    /// The name used by the wire schema, e.g. `INT64` or `STRING_LIST`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Invalid => "INVALID",
            ValueType::Bytes => "BYTES",
            ValueType::String => "STRING",
            ValueType::Int32 => "INT32",
            ValueType::Int64 => "INT64",
            ValueType::Double => "DOUBLE",
            ValueType::Float => "FLOAT",
            ValueType::Bool => "BOOL",
            ValueType::BytesList => "BYTES_LIST",
            ValueType::StringList => "STRING_LIST",
            ValueType::Int32List => "INT32_LIST",
            ValueType::Int64List => "INT64_LIST",
            ValueType::DoubleList => "DOUBLE_LIST",
            ValueType::FloatList => "FLOAT_LIST",
            ValueType::BoolList => "BOOL_LIST",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value. [Value::Unset] maps to
    /// [ValueType::Invalid].
    pub fn kind(&self) -> ValueType {
        match self {
            Value::Unset => ValueType::Invalid,
            Value::Bytes(_) => ValueType::Bytes,
            Value::String(_) => ValueType::String,
            Value::Int32(_) => ValueType::Int32,
            Value::Int64(_) => ValueType::Int64,
            Value::Double(_) => ValueType::Double,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::BytesList(_) => ValueType::BytesList,
            Value::StringList(_) => ValueType::StringList,
            Value::Int32List(_) => ValueType::Int32List,
            Value::Int64List(_) => ValueType::Int64List,
            Value::DoubleList(_) => ValueType::DoubleList,
            Value::FloatList(_) => ValueType::FloatList,
            Value::BoolList(_) => ValueType::BoolList,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

/// Creates a [Value] holding an `int32`.
pub fn int32_val(v: i32) -> Value {
    Value::Int32(v)
}

/// Creates a [Value] holding an `int64`.
pub fn int64_val(v: i64) -> Value {
    Value::Int64(v)
}

/// Creates a [Value] holding a `float`.
pub fn float_val(v: f32) -> Value {
    Value::Float(v)
}

/// Creates a [Value] holding a `double`.
pub fn double_val(v: f64) -> Value {
    Value::Double(v)
}

/// Creates a [Value] holding a `bool`.
pub fn bool_val(v: bool) -> Value {
    Value::Bool(v)
}

/// Creates a [Value] holding raw bytes.
pub fn bytes_val<T: Into<Vec<u8>>>(v: T) -> Value {
    Value::Bytes(v.into())
}

/// Creates a [Value] holding a string.
pub fn str_val<T: Into<String>>(v: T) -> Value {
    Value::String(v.into())
}

macro_rules! impl_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from!(
    i32 => Int32,
    i64 => Int64,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    String => String,
    Vec<u8> => Bytes,
    Vec<Vec<u8>> => BytesList,
    Vec<String> => StringList,
    Vec<i32> => Int32List,
    Vec<i64> => Int64List,
    Vec<f64> => DoubleList,
    Vec<f32> => FloatList,
    Vec<bool> => BoolList,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}
