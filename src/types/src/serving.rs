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

use crate::value::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Why a [Field] value is, or is not, trustworthy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldStatus {
    /// The value is present and may be used.
    Present,
    /// The feature exists for the entity, but its value is null.
    NullValue,
    /// No value was found for the entity.
    NotFound,
    /// A value was found, but it is older than the feature's max age.
    OutsideMaxAge,
}

impl FieldStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Present => "PRESENT",
            FieldStatus::NullValue => "NULL_VALUE",
            FieldStatus::NotFound => "NOT_FOUND",
            FieldStatus::OutsideMaxAge => "OUTSIDE_MAX_AGE",
        }
    }
}

impl std::fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature value paired with its status.
///
/// The value is always structurally present, but it only carries meaning
/// when `status` is [FieldStatus::Present].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub value: Value,
    pub status: FieldStatus,
}

impl Field {
    /// Creates a field with [FieldStatus::Present].
    pub fn present<V: Into<Value>>(value: V) -> Self {
        Self {
            value: value.into(),
            status: FieldStatus::Present,
        }
    }

    pub fn with_status<V: Into<Value>>(value: V, status: FieldStatus) -> Self {
        Self {
            value: value.into(),
            status,
        }
    }

    /// A field with status [FieldStatus::NullValue] and no value set.
    pub fn null() -> Self {
        Self::with_status(Value::Unset, FieldStatus::NullValue)
    }

    /// A field with status [FieldStatus::NotFound] and no value set.
    pub fn not_found() -> Self {
        Self::with_status(Value::Unset, FieldStatus::NotFound)
    }

    pub fn is_present(&self) -> bool {
        self.status == FieldStatus::Present
    }
}

/// The feature values for one entity row, keyed by feature reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub fields: HashMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a field and returns the updated record.
    pub fn set_field<K: Into<String>>(mut self, name: K, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, Field)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Field)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The response to an online feature retrieval.
///
/// Records are position-correlated with the entity rows of the request: the
/// record at index `i` holds the features for entity row `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetOnlineFeaturesResponse {
    pub records: Vec<Record>,
}

/// The entity key values of one requested row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityRow {
    pub fields: HashMap<String, Value>,
}

impl<K: Into<String>> FromIterator<(K, Value)> for EntityRow {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A request to retrieve online features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetOnlineFeaturesRequest {
    pub features: Vec<FeatureReference>,
    pub entity_rows: Vec<EntityRow>,
    pub project: String,
    pub omit_entities_in_response: bool,
}

/// Identifies a feature, optionally qualified by project and feature set.
///
/// The string form is `[project/][feature_set:]name`, which is also the key
/// used for the feature in response records.
///
/// # Example
/// ```
/// # use feast_types::FeatureReference;
/// let r: FeatureReference = "project1/driver:trips_today".parse()?;
/// assert_eq!(r.project, "project1");
/// assert_eq!(r.feature_set, "driver");
/// assert_eq!(r.name, "trips_today");
/// assert_eq!(r.to_string(), "project1/driver:trips_today");
/// # Ok::<(), feast_types::ParseFeatureReferenceError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FeatureReference {
    pub project: String,
    pub feature_set: String,
    pub name: String,
}

/// The error returned when a string is not a valid [FeatureReference].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid feature reference {0:?}, feature references must be in the format [project/][featureset:]name"
)]
pub struct ParseFeatureReferenceError(pub String);

impl FromStr for FeatureReference {
    type Err = ParseFeatureReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseFeatureReferenceError(s.to_string());
        let (project, rest) = match s.split_once('/') {
            Some((project, rest)) if !project.is_empty() => (project, rest),
            Some(_) => return Err(invalid()),
            None => ("", s),
        };
        let (feature_set, name) = match rest.split_once(':') {
            Some((feature_set, name)) if !feature_set.is_empty() => (feature_set, name),
            Some(_) => return Err(invalid()),
            None => ("", rest),
        };
        if name.is_empty() || name.contains(['/', ':']) {
            return Err(invalid());
        }
        Ok(Self {
            project: project.to_string(),
            feature_set: feature_set.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for FeatureReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.project.is_empty() {
            write!(f, "{}/", self.project)?;
        }
        if !self.feature_set.is_empty() {
            write!(f, "{}:", self.feature_set)?;
        }
        f.write_str(&self.name)
    }
}
