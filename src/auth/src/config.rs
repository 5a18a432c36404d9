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

//! Selects and configures an [AuthProvider] from configuration data.
//!
//! Applications can deserialize an [AuthConfig] from their own configuration
//! files, or read it from the environment with [AuthConfig::from_env]:
//!
//! | variable | meaning |
//! |----------|---------|
//! | `FEAST_AUTH_PROVIDER` | `static`, `google` or `oauth`; unset disables auth |
//! | `FEAST_AUTH_TOKEN` | the token for the `static` provider |
//! | `FEAST_OAUTH_CLIENT_ID` | client id for the `oauth` provider |
//! | `FEAST_OAUTH_CLIENT_SECRET` | client secret for the `oauth` provider |
//! | `FEAST_OAUTH_AUDIENCE` | audience for the `oauth` provider |
//! | `FEAST_OAUTH_TOKEN_REQUEST_URL` | token endpoint for the `oauth` provider |

use crate::Result;
use crate::errors;
use crate::provider::{AuthProvider, GoogleProvider, OAuthProvider, StaticProvider};
use std::sync::Arc;

pub const AUTH_PROVIDER_ENV_VAR: &str = "FEAST_AUTH_PROVIDER";
pub const AUTH_TOKEN_ENV_VAR: &str = "FEAST_AUTH_TOKEN";
pub const OAUTH_CLIENT_ID_ENV_VAR: &str = "FEAST_OAUTH_CLIENT_ID";
pub const OAUTH_CLIENT_SECRET_ENV_VAR: &str = "FEAST_OAUTH_CLIENT_SECRET";
pub const OAUTH_AUDIENCE_ENV_VAR: &str = "FEAST_OAUTH_AUDIENCE";
pub const OAUTH_TOKEN_REQUEST_URL_ENV_VAR: &str = "FEAST_OAUTH_TOKEN_REQUEST_URL";

/// The configuration of an [AuthProvider].
///
/// # Example
/// ```
/// # use feast_auth::config::AuthConfig;
/// let config: AuthConfig = serde_json::from_value(serde_json::json!({
///     "provider": "oauth",
///     "client_id": "my-client-id",
///     "client_secret": "my-client-secret",
///     "audience": "https://feast.example.com",
///     "token_request_url": "https://auth.example.com/oauth/token",
/// }))?;
/// let provider = config.build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum AuthConfig {
    /// Use a fixed token, see [StaticProvider].
    Static { token: String },

    /// Use the ambient Google identity, see [GoogleProvider].
    Google {
        #[serde(default)]
        scopes: Option<Vec<String>>,
    },

    /// Use the client credentials grant, see [OAuthProvider].
    #[serde(rename = "oauth")]
    OAuth {
        client_id: String,
        client_secret: String,
        audience: String,
        token_request_url: String,
    },
}

impl AuthConfig {
    /// Reads the configuration from the environment.
    ///
    /// Returns `Ok(None)` if `FEAST_AUTH_PROVIDER` is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider name is unknown, or if a variable
    /// required by the provider is missing.
    pub fn from_env() -> Result<Option<Self>> {
        let Some(provider) = env_var(AUTH_PROVIDER_ENV_VAR) else {
            return Ok(None);
        };
        let config = match provider.to_ascii_lowercase().as_str() {
            "static" => AuthConfig::Static {
                token: required_env_var(AUTH_TOKEN_ENV_VAR)?,
            },
            "google" => AuthConfig::Google { scopes: None },
            "oauth" => AuthConfig::OAuth {
                client_id: required_env_var(OAUTH_CLIENT_ID_ENV_VAR)?,
                client_secret: required_env_var(OAUTH_CLIENT_SECRET_ENV_VAR)?,
                audience: required_env_var(OAUTH_AUDIENCE_ENV_VAR)?,
                token_request_url: required_env_var(OAUTH_TOKEN_REQUEST_URL_ENV_VAR)?,
            },
            _ => {
                return Err(errors::permanent_from_msg(format!(
                    "unknown auth provider {provider:?} in {AUTH_PROVIDER_ENV_VAR}, \
                     expected one of \"static\", \"google\" or \"oauth\""
                )));
            }
        };
        tracing::debug!(provider = config.name(), "auth configured from the environment");
        Ok(Some(config))
    }

    /// The provider name, as used in `FEAST_AUTH_PROVIDER`.
    pub fn name(&self) -> &'static str {
        match self {
            AuthConfig::Static { .. } => "static",
            AuthConfig::Google { .. } => "google",
            AuthConfig::OAuth { .. } => "oauth",
        }
    }

    /// Creates the configured provider.
    pub fn build(self) -> Result<Arc<dyn AuthProvider>> {
        let provider: Arc<dyn AuthProvider> = match self {
            AuthConfig::Static { token } => Arc::new(StaticProvider::new(token)),
            AuthConfig::Google { scopes } => {
                let builder = GoogleProvider::builder();
                let builder = match scopes {
                    Some(scopes) => builder.with_scopes(scopes),
                    None => builder,
                };
                Arc::new(builder.build())
            }
            AuthConfig::OAuth {
                client_id,
                client_secret,
                audience,
                token_request_url,
            } => Arc::new(
                OAuthProvider::builder(token_request_url)
                    .with_client_id(client_id)
                    .with_client_secret(client_secret)
                    .with_audience(audience)
                    .build()?,
            ),
        };
        Ok(provider)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::Static { .. } => f
                .debug_struct("Static")
                .field("token", &"[censored]")
                .finish(),
            AuthConfig::Google { scopes } => {
                f.debug_struct("Google").field("scopes", scopes).finish()
            }
            AuthConfig::OAuth {
                client_id,
                audience,
                token_request_url,
                ..
            } => f
                .debug_struct("OAuth")
                .field("client_id", client_id)
                .field("client_secret", &"[censored]")
                .field("audience", audience)
                .field("token_request_url", token_request_url)
                .finish(),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn required_env_var(name: &str) -> Result<String> {
    env_var(name).ok_or_else(|| {
        errors::permanent_from_msg(format!("missing required environment variable {name}"))
    })
}
