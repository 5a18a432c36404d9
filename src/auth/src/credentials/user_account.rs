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

//! [User Account] credentials.
//!
//! These are the credentials created by `gcloud auth application-default login`.
//! They hold an OAuth 2.0 refresh token, which the token source exchanges for
//! an access token on each call.
//!
//! [User Account]: https://cloud.google.com/docs/authentication#user-accounts

use super::DefaultCredentials;
use crate::Result;
use crate::errors::AuthError;
use crate::http::{check_response_status, decode_error, send_error};
use crate::token::{Token, TokenSource};
use http::header::{CONTENT_TYPE, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const OAUTH2_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Builds [DefaultCredentials] from an `authorized_user` JSON object.
pub struct Builder {
    authorized_user: Value,
    scopes: Option<Vec<String>>,
    token_uri: Option<String>,
}

impl Builder {
    pub fn new(authorized_user: Value) -> Self {
        Self {
            authorized_user,
            scopes: None,
            token_uri: None,
        }
    }

    /// Overrides the token endpoint from the JSON object.
    pub fn with_token_uri<S: Into<String>>(mut self, token_uri: S) -> Self {
        self.token_uri = Some(token_uri.into());
        self
    }

    /// Sets the scopes requested for the access token.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the credentials.
    ///
    /// # Errors
    ///
    /// Returns an [AuthError] if the JSON object is missing any of the
    /// `client_id`, `client_secret` or `refresh_token` fields.
    pub fn build(self) -> Result<DefaultCredentials> {
        let authorized_user = serde_json::from_value::<AuthorizedUser>(self.authorized_user)
            .map_err(|e| {
                AuthError::new(false, "failed to parse authorized_user credentials", e)
            })?;
        let endpoint = self
            .token_uri
            .or(authorized_user.token_uri)
            .unwrap_or_else(|| OAUTH2_ENDPOINT.to_string());
        let token_source = UserTokenSource {
            client_id: authorized_user.client_id,
            client_secret: authorized_user.client_secret,
            refresh_token: authorized_user.refresh_token,
            endpoint,
            scopes: self.scopes.map(|scopes| scopes.join(" ")),
            client: Client::new(),
        };
        Ok(DefaultCredentials {
            project_id: authorized_user.quota_project_id,
            token_source: Arc::new(token_source),
        })
    }
}

struct UserTokenSource {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    endpoint: String,
    scopes: Option<String>,
    client: Client,
}

impl std::fmt::Debug for UserTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserTokenSource")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("refresh_token", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenSource for UserTokenSource {
    async fn token(&self) -> Result<Token> {
        const CONTEXT: &str = "failed to refresh user account token";
        let req = Oauth2RefreshRequest {
            grant_type: RefreshGrantType::RefreshToken,
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            refresh_token: self.refresh_token.clone(),
            scopes: self.scopes.clone(),
        };
        tracing::debug!(endpoint = %self.endpoint, "refreshing user account token");
        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&req)
            .send()
            .await
            .map_err(|e| send_error(CONTEXT, e))?;
        let response = check_response_status(response, CONTEXT).await?;
        let response = response
            .json::<Oauth2RefreshResponse>()
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

#[derive(Debug, PartialEq, serde::Deserialize)]
struct AuthorizedUser {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    #[serde(default)]
    token_uri: Option<String>,
    #[serde(default)]
    quota_project_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
enum RefreshGrantType {
    #[serde(rename = "refresh_token")]
    RefreshToken,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
struct Oauth2RefreshRequest {
    grant_type: RefreshGrantType,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Oauth2RefreshResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
    token_type: String,
}
