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

//! [Metadata Service] token source.
//!
//! Google Cloud compute environments, such as Compute Engine, GKE, or Cloud
//! Run, run a metadata service local to the VM or pod. The service issues
//! access tokens for the service account attached to the workload.
//!
//! [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview

use crate::Result;
use crate::http::{check_response_status, decode_error, send_error};
use crate::token::{Token, TokenSource};
use reqwest::Client;
use std::time::Duration;
use tokio::time::Instant;

pub(crate) const MDS_TOKEN_PATH: &str =
    "/computeMetadata/v1/instance/service-accounts/default/token";
pub(crate) const METADATA_FLAVOR_VALUE: &str = "Google";
pub(crate) const METADATA_FLAVOR: &str = "metadata-flavor";
pub(crate) const METADATA_ROOT: &str = "http://metadata.google.internal";
pub(crate) const GCE_METADATA_HOST_ENV_VAR: &str = "GCE_METADATA_HOST";

/// Fetches access tokens for the default service account from the metadata
/// service.
#[derive(Clone, Debug)]
pub struct MetadataTokenSource {
    endpoint: String,
    scopes: Vec<String>,
    client: Client,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct MDSTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
    token_type: String,
}

impl MetadataTokenSource {
    /// Creates a token source requesting `scopes`.
    ///
    /// The endpoint is `http://$GCE_METADATA_HOST` if the environment variable
    /// is set, otherwise `endpoint_override`, otherwise
    /// `http://metadata.google.internal`.
    pub fn new<I, S>(endpoint_override: Option<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endpoint = resolve_endpoint(endpoint_override);
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            scopes: scopes.into_iter().map(Into::into).collect(),
            client: Client::new(),
        }
    }
}

fn resolve_endpoint(endpoint_override: Option<String>) -> String {
    if let Ok(host) = std::env::var(GCE_METADATA_HOST_ENV_VAR) {
        return format!("http://{host}");
    }
    endpoint_override.unwrap_or_else(|| METADATA_ROOT.to_string())
}

#[async_trait::async_trait]
impl TokenSource for MetadataTokenSource {
    async fn token(&self) -> Result<Token> {
        const CONTEXT: &str = "failed to fetch access token from the metadata service";
        let mut request = self
            .client
            .get(format!("{}{MDS_TOKEN_PATH}", self.endpoint))
            .header(METADATA_FLAVOR, METADATA_FLAVOR_VALUE);
        // Without scopes the service uses those configured for the account.
        if !self.scopes.is_empty() {
            request = request.query(&[("scopes", self.scopes.join(","))]);
        }
        tracing::debug!(endpoint = %self.endpoint, "fetching token from the metadata service");

        let response = request.send().await.map_err(|e| send_error(CONTEXT, e))?;
        let response = check_response_status(response, CONTEXT).await?;
        let response = response
            .json::<MDSTokenResponse>()
            .await
            .map_err(|e| decode_error(CONTEXT, e))?;
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type,
            expires_at: response
                .expires_in
                // An expiration past the clock's range is treated as no expiration.
                .and_then(|d| Instant::now().checked_add(Duration::from_secs(d))),
        })
    }
}
