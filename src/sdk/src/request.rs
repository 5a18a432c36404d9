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

use crate::error::Result;
use feast_types::{EntityRow, FeatureReference, GetOnlineFeaturesRequest};

/// The caller's view of an online feature retrieval.
///
/// Features are given as strings in the `[project/][feature_set:]name` form.
/// Features without a project belong to `project`.
///
/// # Example
/// ```
/// # use feast::OnlineFeaturesRequest;
/// # use feast::types::{EntityRow, int64_val};
/// let request = OnlineFeaturesRequest::new("project1")
///     .with_features(["driver:trips_today", "other/rating"])
///     .with_entity(EntityRow::from_iter([("driver_id", int64_val(1001))]));
/// let wire = request.build()?;
/// assert_eq!(wire.features[0].to_string(), "project1/driver:trips_today");
/// assert_eq!(wire.features[1].to_string(), "other/rating");
/// # Ok::<(), feast::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OnlineFeaturesRequest {
    pub features: Vec<String>,
    pub entities: Vec<EntityRow>,
    pub project: String,
}

impl OnlineFeaturesRequest {
    pub fn new<S: Into<String>>(project: S) -> Self {
        Self {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Appends feature references to the request.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Appends an entity row to the request.
    pub fn with_entity(mut self, entity: EntityRow) -> Self {
        self.entities.push(entity);
        self
    }

    /// Converts the request into its wire form.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidFeatureRef](crate::Error::InvalidFeatureRef) if
    /// any feature reference is empty or malformed.
    pub fn build(&self) -> Result<GetOnlineFeaturesRequest> {
        let features = self
            .features
            .iter()
            .map(|f| -> Result<FeatureReference> {
                let mut reference = f.parse::<FeatureReference>()?;
                if reference.project.is_empty() {
                    reference.project = self.project.clone();
                }
                Ok(reference)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(GetOnlineFeaturesRequest {
            features,
            entity_rows: self.entities.clone(),
            project: self.project.clone(),
            omit_entities_in_response: false,
        })
    }
}
