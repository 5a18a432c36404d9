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

//! Feast SDK for Rust - Authentication Components
//!
//! This crate contains the providers used to authenticate calls to a Feast
//! serving service. Clients hold an [AuthProvider] and ask it for a bearer
//! token, or for the full set of request headers, before each outbound call.
//!
//! Three providers are included:
//! * [StaticProvider](provider::StaticProvider) returns a fixed token.
//! * [GoogleProvider](provider::GoogleProvider) derives a token from the
//!   ambient Google identity, such as [Application Default Credentials] or the
//!   metadata server.
//! * [OAuthProvider](provider::OAuthProvider) uses the OAuth 2.0 client
//!   credentials grant against a configurable token endpoint.
//!
//! Use [config::AuthConfig] to pick a provider from configuration files or
//! environment variables.
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials

pub mod errors;

pub mod config;

/// Types and functions to find the ambient Google identity.
pub mod credentials;

pub mod provider;

/// Types and traits to work with access tokens.
pub mod token;

pub use provider::AuthProvider;

/// A `Result` alias where the `Err` case is `feast_auth::errors::AuthError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::AuthError>;

pub(crate) mod headers_util;

pub(crate) mod http;
