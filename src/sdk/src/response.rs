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

use crate::error::{Error, Result};
use feast_types::{Field, GetOnlineFeaturesResponse, Record, Value, ValueType};
use std::collections::HashMap;

/// The fields of one response record, keyed by feature reference.
pub type Row = HashMap<String, Field>;

/// Wraps the response of an online feature retrieval.
///
/// The wrapper never modifies the raw response. Each accessor derives a new
/// view of the records, so calling an accessor twice returns equal results.
///
/// # Example
/// ```
/// # use feast::OnlineFeaturesResponse;
/// # use feast::types::{Field, GetOnlineFeaturesResponse, Record};
/// let raw = GetOnlineFeaturesResponse {
///     records: vec![
///         Record::new()
///             .set_field("project1/f1", Field::present(1_i64))
///             .set_field("project1/f2", Field::null()),
///         Record::new()
///             .set_field("project1/f1", Field::present(2_i64))
///             .set_field("project1/f2", Field::present(2_i64)),
///     ],
/// };
/// let response = OnlineFeaturesResponse::new(raw);
/// let arrays = response.int64_arrays(&["project1/f2", "project1/f1"], &[-1, -1])?;
/// assert_eq!(arrays, vec![vec![-1, 1], vec![2, 2]]);
/// # Ok::<(), feast::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OnlineFeaturesResponse {
    raw: GetOnlineFeaturesResponse,
}

impl OnlineFeaturesResponse {
    pub fn new(raw: GetOnlineFeaturesResponse) -> Self {
        Self { raw }
    }

    /// The wrapped response.
    pub fn raw(&self) -> &GetOnlineFeaturesResponse {
        &self.raw
    }

    pub fn into_raw(self) -> GetOnlineFeaturesResponse {
        self.raw
    }

    /// The number of records in the response.
    pub fn len(&self) -> usize {
        self.raw.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.records.is_empty()
    }

    /// Returns one [Row] per record, in response order.
    pub fn rows(&self) -> Vec<Row> {
        self.raw.records.iter().map(|r| r.fields.clone()).collect()
    }

    /// Returns the `int64` values of the features in `order`, one array per
    /// record.
    ///
    /// Columns follow `order`. Fields whose status is not `PRESENT` are
    /// replaced by the fill value at the same position in `fill_na`.
    ///
    /// # Errors
    ///
    /// * [Error::LengthMismatch] if `fill_na` and `order` have different
    ///   lengths.
    /// * [Error::FeatureNotFound] if a name in `order` is not a feature of the
    ///   response.
    /// * [Error::TypeMismatch] if a present value is not an `int64`.
    pub fn int64_arrays<S: AsRef<str>>(&self, order: &[S], fill_na: &[i64]) -> Result<Vec<Vec<i64>>> {
        self.typed_arrays(order, fill_na)
    }

    /// Like [int64_arrays](Self::int64_arrays), for `int32` features.
    pub fn int32_arrays<S: AsRef<str>>(&self, order: &[S], fill_na: &[i32]) -> Result<Vec<Vec<i32>>> {
        self.typed_arrays(order, fill_na)
    }

    /// Like [int64_arrays](Self::int64_arrays), for `double` features.
    pub fn float64_arrays<S: AsRef<str>>(&self, order: &[S], fill_na: &[f64]) -> Result<Vec<Vec<f64>>> {
        self.typed_arrays(order, fill_na)
    }

    /// Like [int64_arrays](Self::int64_arrays), for `float` features.
    pub fn float32_arrays<S: AsRef<str>>(&self, order: &[S], fill_na: &[f32]) -> Result<Vec<Vec<f32>>> {
        self.typed_arrays(order, fill_na)
    }

    /// Extracts fixed-width arrays of any [ColumnValue] type.
    ///
    /// All the validation happens before any array is built, so on error no
    /// partial result is produced.
    pub fn typed_arrays<T, S>(&self, order: &[S], fill_na: &[T]) -> Result<Vec<Vec<T>>>
    where
        T: ColumnValue,
        S: AsRef<str>,
    {
        if order.len() != fill_na.len() {
            return Err(Error::LengthMismatch {
                got: fill_na.len(),
                want: order.len(),
            });
        }
        let Some(first) = self.raw.records.first() else {
            return Ok(Vec::new());
        };
        if let Some(missing) = order
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !first.fields.contains_key(*name))
        {
            tracing::debug!(feature = missing, "requested feature is not in the response");
            return Err(Error::FeatureNotFound(missing.to_string()));
        }

        self.raw
            .records
            .iter()
            .map(|record| extract_row(record, order, fill_na))
            .collect()
    }
}

impl From<GetOnlineFeaturesResponse> for OnlineFeaturesResponse {
    fn from(raw: GetOnlineFeaturesResponse) -> Self {
        Self::new(raw)
    }
}

fn extract_row<T, S>(record: &Record, order: &[S], fill_na: &[T]) -> Result<Vec<T>>
where
    T: ColumnValue,
    S: AsRef<str>,
{
    order
        .iter()
        .zip(fill_na)
        .map(|(name, fill)| {
            let name = name.as_ref();
            // Records after the first may be missing features.
            let field = record
                .fields
                .get(name)
                .ok_or_else(|| Error::FeatureNotFound(name.to_string()))?;
            if !field.is_present() {
                return Ok(*fill);
            }
            T::from_value(&field.value).ok_or_else(|| Error::TypeMismatch {
                feature: name.to_string(),
                expected: T::VALUE_TYPE,
                actual: field.value.kind(),
            })
        })
        .collect()
}

/// A scalar type that can be extracted from a feature [Value].
///
/// Implemented for the fixed-width numeric types of the wire schema.
pub trait ColumnValue: Copy {
    /// The wire type holding values of this type.
    const VALUE_TYPE: ValueType;

    /// Returns the value, or `None` if `value` holds a different type.
    fn from_value(value: &Value) -> Option<Self>;
}

impl ColumnValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::Int64;
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int64()
    }
}

impl ColumnValue for i32 {
    const VALUE_TYPE: ValueType = ValueType::Int32;
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int32()
    }
}

impl ColumnValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Double;
    fn from_value(value: &Value) -> Option<Self> {
        value.as_double()
    }
}

impl ColumnValue for f32 {
    const VALUE_TYPE: ValueType = ValueType::Float;
    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}
