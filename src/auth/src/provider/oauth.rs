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

//! A provider using the OAuth 2.0 client credentials grant.
//!
//! The provider exchanges a client id and secret for an access token at a
//! token endpoint. The request body is JSON:
//!
//! ```json
//! {
//!   "grant_type": "client_credentials",
//!   "client_id": "...",
//!   "client_secret": "...",
//!   "audience": "..."
//! }
//! ```
//!
//! and the endpoint must answer with a JSON object containing an
//! `access_token` string. Every call performs a new exchange.

use super::AuthProvider;
use crate::Result;
use crate::errors::AuthError;
use crate::http::{check_response_status, decode_error, send_error};
use http::header::{CONTENT_TYPE, HeaderValue};
use reqwest::Client;
use url::Url;

/// Exchanges client credentials for bearer tokens.
///
/// # Example
/// ```no_run
/// # use feast_auth::provider::{AuthProvider, OAuthProvider};
/// # tokio_test::block_on(async {
/// let provider = OAuthProvider::builder("https://auth.example.com/oauth/token")
///     .with_client_id("my-client-id")
///     .with_client_secret("my-client-secret")
///     .with_audience("https://feast.example.com")
///     .build()?;
/// let token = provider.token().await?;
/// # Ok::<(), feast_auth::errors::AuthError>(())
/// # });
/// ```
#[derive(Clone)]
pub struct OAuthProvider {
    client_id: String,
    client_secret: String,
    audience: String,
    endpoint_url: Url,
    client: Client,
}

impl OAuthProvider {
    /// Returns a builder for a provider using `endpoint_url` as the token
    /// endpoint.
    pub fn builder<S: Into<String>>(endpoint_url: S) -> Builder {
        Builder::new(endpoint_url)
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }
}

impl std::fmt::Debug for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthProvider")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("audience", &self.audience)
            .field("endpoint_url", &self.endpoint_url.as_str())
            .finish()
    }
}

/// Configures an [OAuthProvider].
#[derive(Debug, Default)]
pub struct Builder {
    endpoint_url: String,
    client_id: String,
    client_secret: String,
    audience: String,
    client: Option<Client>,
}

impl Builder {
    pub fn new<S: Into<String>>(endpoint_url: S) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Default::default()
        }
    }

    pub fn with_client_id<S: Into<String>>(mut self, v: S) -> Self {
        self.client_id = v.into();
        self
    }

    pub fn with_client_secret<S: Into<String>>(mut self, v: S) -> Self {
        self.client_secret = v.into();
        self
    }

    /// Sets the audience, the API the token is intended for.
    pub fn with_audience<S: Into<String>>(mut self, v: S) -> Self {
        self.audience = v.into();
        self
    }

    /// Uses an existing HTTP client, e.g. one configured with a proxy or
    /// custom timeouts.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Returns the provider.
    ///
    /// # Errors
    ///
    /// Returns an [AuthError] if the endpoint is not a valid URL.
    pub fn build(self) -> Result<OAuthProvider> {
        let endpoint_url = Url::parse(&self.endpoint_url).map_err(|e| {
            AuthError::new(
                false,
                format!("invalid OAuth token endpoint {:?}", self.endpoint_url),
                e,
            )
        })?;
        Ok(OAuthProvider {
            client_id: self.client_id,
            client_secret: self.client_secret,
            audience: self.audience,
            endpoint_url,
            client: self.client.unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
enum GrantType {
    #[serde(rename = "client_credentials")]
    ClientCredentials,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: GrantType,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct ClientCredentialsResponse {
    access_token: String,
}

#[async_trait::async_trait]
impl AuthProvider for OAuthProvider {
    async fn token(&self) -> Result<String> {
        const CONTEXT: &str = "failed to exchange client credentials";
        let req = ClientCredentialsRequest {
            grant_type: GrantType::ClientCredentials,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            audience: &self.audience,
        };
        tracing::debug!(
            endpoint = %self.endpoint_url,
            client_id = %self.client_id,
            "requesting OAuth client credentials token"
        );
        let response = self
            .client
            .post(self.endpoint_url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&req)
            .send()
            .await
            .map_err(|e| send_error(CONTEXT, e))?;
        let response = check_response_status(response, CONTEXT).await?;
        let response = response
            .json::<ClientCredentialsResponse>()
            .await
            .map_err(|e| decode_error(CONTEXT, e))?;
        Ok(response.access_token)
    }
}
