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

//! Feast online serving - wire types
//!
//! This crate contains the data types exchanged with the Feast online serving
//! service: feature values, per-feature statuses, the records of a batch
//! response, and the request message. The types are plain Rust data. Encoding
//! them for a particular transport is the job of the transport, not of this
//! crate.

/// The feature value union and its helper constructors.
pub mod value;

/// Request and response messages for online feature retrieval.
pub mod serving;

pub use serving::{
    EntityRow, FeatureReference, Field, FieldStatus, GetOnlineFeaturesRequest,
    GetOnlineFeaturesResponse, ParseFeatureReferenceError, Record,
};
pub use value::{
    Value, ValueType, bool_val, bytes_val, double_val, float_val, int32_val, int64_val, str_val,
};
