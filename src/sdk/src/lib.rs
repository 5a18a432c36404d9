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

//! Feast SDK for Rust - Online Serving
//!
//! This crate contains the client-side pieces used to retrieve features from
//! a Feast online serving service:
//! * [OnlineFeaturesRequest] builds the wire request from feature reference
//!   strings and entity rows.
//! * [OnlineFeaturesResponse] wraps the raw response and turns it into
//!   row-major maps or fixed-width numeric arrays.
//! * The [auth] module provides the bearer tokens and headers used to
//!   authenticate outbound calls.
//!
//! The transport is not part of this crate. Applications send the request
//! with their own client, attaching the headers returned by an
//! [AuthProvider](auth::AuthProvider).
//!
//! # Example
//! ```
//! # use feast::auth::provider::{AuthProvider, StaticProvider};
//! # use feast::{OnlineFeaturesRequest, OnlineFeaturesResponse};
//! # use feast::types::{EntityRow, Field, GetOnlineFeaturesResponse, Record, int64_val};
//! # tokio_test::block_on(async {
//! let provider = StaticProvider::new("my-token");
//! let request = OnlineFeaturesRequest::new("project1")
//!     .with_features(["trips_today"])
//!     .with_entity(EntityRow::from_iter([("driver_id", int64_val(1001))]))
//!     .build()?;
//! let headers = provider.headers().await?;
//! // Send `request` with `headers` using the transport of your choice.
//! # let raw = GetOnlineFeaturesResponse {
//! #     records: vec![Record::new().set_field("project1/trips_today", Field::present(7_i64))],
//! # };
//! let response = OnlineFeaturesResponse::new(raw);
//! let arrays = response.int64_arrays(&["project1/trips_today"], &[0])?;
//! assert_eq!(arrays, vec![vec![7]]);
//! # Ok::<(), feast::Error>(())
//! # });
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use request::OnlineFeaturesRequest;
pub use response::{ColumnValue, OnlineFeaturesResponse, Row};

/// Re-exports the authentication components.
pub use feast_auth as auth;

/// Re-exports the wire types.
pub use feast_types as types;
