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

//! A provider for the ambient Google identity.

use super::AuthProvider;
use crate::Result;
use crate::credentials::{ApplicationDefaultFinder, CredentialsFinder};
use crate::errors::AuthError;
use std::sync::Arc;

/// The scopes requested by [GoogleProvider] unless overridden.
pub const DEFAULT_SCOPES: [&str; 2] = ["openid", "email"];

/// Derives bearer tokens from the ambient Google identity.
///
/// On each call the provider asks its [CredentialsFinder] for the default
/// credentials, and then asks the credentials for an access token. By default
/// the finder is an [ApplicationDefaultFinder] and the scopes are
/// [DEFAULT_SCOPES].
///
/// # Example
/// ```no_run
/// # use feast_auth::provider::{AuthProvider, GoogleProvider};
/// # tokio_test::block_on(async {
/// let provider = GoogleProvider::new();
/// let token = provider.token().await?;
/// # Ok::<(), feast_auth::errors::AuthError>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct GoogleProvider {
    finder: Arc<dyn CredentialsFinder>,
    scopes: Vec<String>,
}

impl GoogleProvider {
    /// Creates a provider using Application Default Credentials.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl Default for GoogleProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures a [GoogleProvider].
#[derive(Debug, Default)]
pub struct Builder {
    finder: Option<Arc<dyn CredentialsFinder>>,
    scopes: Option<Vec<String>>,
}

impl Builder {
    /// Replaces the credentials lookup.
    pub fn with_finder<F: CredentialsFinder + 'static>(mut self, finder: F) -> Self {
        self.finder = Some(Arc::new(finder));
        self
    }

    /// Overrides [DEFAULT_SCOPES].
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> GoogleProvider {
        GoogleProvider {
            finder: self
                .finder
                .unwrap_or_else(|| Arc::new(ApplicationDefaultFinder::new())),
            scopes: self
                .scopes
                .unwrap_or_else(|| DEFAULT_SCOPES.map(String::from).to_vec()),
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for GoogleProvider {
    async fn token(&self) -> Result<String> {
        let credentials = self
            .finder
            .find_default_credentials(&self.scopes)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "cannot find default Google credentials");
                AuthError::new(e.is_transient(), "failed to find default credentials", e)
            })?;
        let token = credentials.token_source.token().await.map_err(|e| {
            AuthError::new(
                e.is_transient(),
                "failed to derive a token from the default credentials",
                e,
            )
        })?;
        Ok(token.token)
    }
}
