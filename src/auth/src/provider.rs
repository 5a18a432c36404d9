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

//! The [AuthProvider] capability and its implementations.
//!
//! Each implementation uses a different acquisition protocol:
//! * [StaticProvider] returns a token supplied by the application.
//! * [GoogleProvider] derives a token from the ambient Google identity, as
//!   found by a [CredentialsFinder](crate::credentials::CredentialsFinder).
//! * [OAuthProvider] exchanges a client id and secret for a token using the
//!   OAuth 2.0 [client credentials grant].
//!
//! [client credentials grant]: https://datatracker.ietf.org/doc/html/rfc6749#section-4.4

use crate::Result;
use crate::headers_util::build_bearer_headers;
use http::HeaderMap;
use std::sync::Arc;

pub mod google;
pub mod oauth;
pub mod static_provider;

pub use google::GoogleProvider;
pub use oauth::OAuthProvider;
pub use static_provider::StaticProvider;

/// Produces bearer tokens to authenticate outbound calls.
///
/// Providers are constructed once and shared across calls, often behind an
/// `Arc<dyn AuthProvider>`. Implementations must be safe to call
/// concurrently. They do not retry: a failure is returned to the caller,
/// who owns the retry policy.
///
/// # Example
/// ```
/// # use feast_auth::provider::{AuthProvider, StaticProvider};
/// # tokio_test::block_on(async {
/// let provider = StaticProvider::new("my-token");
/// let headers = provider.headers().await?;
/// assert_eq!(headers["authorization"], "Bearer my-token");
/// # Ok::<(), feast_auth::errors::AuthError>(())
/// # });
/// ```
#[async_trait::async_trait]
pub trait AuthProvider: std::fmt::Debug + Send + Sync {
    /// Returns a bearer token.
    async fn token(&self) -> Result<String>;

    /// Returns the headers to attach to an outbound call.
    ///
    /// The map contains a single, sensitive, `authorization: Bearer ...`
    /// entry.
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token().await?;
        build_bearer_headers(&token)
    }
}

#[async_trait::async_trait]
impl<T> AuthProvider for Arc<T>
where
    T: AuthProvider + ?Sized,
{
    async fn token(&self) -> Result<String> {
        self.as_ref().token().await
    }

    async fn headers(&self) -> Result<HeaderMap> {
        self.as_ref().headers().await
    }
}
