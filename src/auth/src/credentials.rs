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

//! Discovery of the ambient Google identity.
//!
//! [GoogleProvider](crate::provider::GoogleProvider) does not know how to find
//! credentials. It delegates to a [CredentialsFinder], which returns
//! [DefaultCredentials] for a set of scopes. The default finder,
//! [ApplicationDefaultFinder], follows the [Application Default Credentials]
//! search order:
//!
//! 1. A credentials file named by the `GOOGLE_APPLICATION_CREDENTIALS`
//!    environment variable.
//! 2. The file created by `gcloud auth application-default login`.
//! 3. The metadata service available on Google Cloud compute platforms.
//!
//! Applications and tests can provide their own finder to control where the
//! credentials come from.
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials

use crate::Result;
use crate::errors::{self, AuthError};
use crate::token::TokenSource;
use serde_json::Value;
use std::sync::Arc;

pub mod mds;
pub mod user_account;

const GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Credentials found in the environment.
#[derive(Clone, Debug)]
pub struct DefaultCredentials {
    /// The project associated with the credentials, if known.
    pub project_id: Option<String>,

    /// Derives access tokens from the credentials.
    pub token_source: Arc<dyn TokenSource>,
}

/// Finds the default credentials for a set of OAuth scopes.
///
/// This is the seam used to replace the identity backend in tests.
#[async_trait::async_trait]
pub trait CredentialsFinder: std::fmt::Debug + Send + Sync {
    async fn find_default_credentials(&self, scopes: &[String]) -> Result<DefaultCredentials>;
}

/// Finds credentials using the Application Default Credentials search order.
///
/// # Example
/// ```
/// # use feast_auth::credentials::ApplicationDefaultFinder;
/// # use feast_auth::provider::GoogleProvider;
/// let finder = ApplicationDefaultFinder::new()
///     .with_metadata_endpoint("http://127.0.0.1:8080");
/// let provider = GoogleProvider::builder().with_finder(finder).build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct ApplicationDefaultFinder {
    metadata_endpoint: Option<String>,
}

impl ApplicationDefaultFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the metadata service endpoint.
    ///
    /// The `GCE_METADATA_HOST` environment variable, if set, takes precedence.
    pub fn with_metadata_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.metadata_endpoint = Some(endpoint.into());
        self
    }
}

#[async_trait::async_trait]
impl CredentialsFinder for ApplicationDefaultFinder {
    async fn find_default_credentials(&self, scopes: &[String]) -> Result<DefaultCredentials> {
        let contents = match adc_path() {
            None => None,
            Some(AdcPath::FromEnv(path)) => Some(load_adc_file(&path).await?),
            Some(AdcPath::WellKnown(path)) => match tokio::fs::read_to_string(&path).await {
                Ok(contents) => Some(parse_adc_contents(&path, &contents)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => return Err(adc_load_error(&path, e)),
            },
        };
        match contents {
            Some(json) => build_from_json(json, scopes),
            None => {
                tracing::debug!("no credentials file found, using the metadata service");
                let source = mds::MetadataTokenSource::new(self.metadata_endpoint.clone(), scopes);
                Ok(DefaultCredentials {
                    project_id: None,
                    token_source: Arc::new(source),
                })
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum AdcPath {
    FromEnv(String),
    WellKnown(String),
}

fn adc_path() -> Option<AdcPath> {
    if let Ok(path) = std::env::var(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR) {
        return Some(AdcPath::FromEnv(path));
    }
    adc_well_known_path().map(AdcPath::WellKnown)
}

#[cfg(target_os = "windows")]
fn adc_well_known_path() -> Option<String> {
    std::env::var("APPDATA")
        .ok()
        .map(|root| root + "/gcloud/application_default_credentials.json")
}

#[cfg(not(target_os = "windows"))]
fn adc_well_known_path() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|root| root + "/.config/gcloud/application_default_credentials.json")
}

async fn load_adc_file(path: &str) -> Result<Value> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| adc_load_error(path, e))?;
    parse_adc_contents(path, &contents)
}

fn adc_load_error(path: &str, e: std::io::Error) -> AuthError {
    AuthError::new(
        false,
        format!(
            "failed to load Application Default Credentials from {path:?}, check the \
             {GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR} environment variable"
        ),
        e,
    )
}

fn parse_adc_contents(path: &str, contents: &str) -> Result<Value> {
    serde_json::from_str(contents).map_err(|e| {
        AuthError::new(
            false,
            format!("failed to parse Application Default Credentials from {path:?}"),
            e,
        )
    })
}

fn build_from_json(json: Value, scopes: &[String]) -> Result<DefaultCredentials> {
    let cred_type = json
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            errors::permanent_from_msg(
                "failed to parse Application Default Credentials, expected a string `type` field",
            )
        })?
        .to_string();
    match cred_type.as_str() {
        "authorized_user" => user_account::Builder::new(json)
            .with_scopes(scopes.iter().cloned())
            .build(),
        _ => Err(errors::permanent_from_msg(format!(
            "unsupported Application Default Credentials type {cred_type:?}"
        ))),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::token::Token;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use scoped_env::ScopedEnv;
    use std::error::Error;

    // Used by tests in other modules.
    mockall::mock! {
        #[derive(Debug)]
        pub CredentialsFinder { }

        #[async_trait::async_trait]
        impl CredentialsFinder for CredentialsFinder {
            async fn find_default_credentials(&self, scopes: &[String]) -> Result<DefaultCredentials>;
        }
    }

    fn scopes() -> Vec<String> {
        vec!["openid".to_string(), "email".to_string()]
    }

    fn write_adc(contents: &str) -> tempfile::TempPath {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.into_temp_path();
        std::fs::write(&path, contents).expect("Unable to write to temporary file.");
        path
    }

    #[test]
    #[serial_test::serial]
    fn adc_path_from_env() {
        let _e = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR, "/a/b/c.json");
        assert_eq!(adc_path(), Some(AdcPath::FromEnv("/a/b/c.json".to_string())));
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    #[serial_test::serial]
    fn adc_path_well_known() {
        let _e1 = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR);
        let _e2 = ScopedEnv::set("HOME", "/home/test-only");
        assert_eq!(
            adc_path(),
            Some(AdcPath::WellKnown(
                "/home/test-only/.config/gcloud/application_default_credentials.json".to_string()
            ))
        );
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    #[serial_test::serial]
    fn adc_path_none() {
        let _e1 = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR);
        let _e2 = ScopedEnv::remove("HOME");
        assert_eq!(adc_path(), None);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn adc_env_is_not_a_file() {
        let _e = ScopedEnv::set(
            GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR,
            "file-does-not-exist.json",
        );
        let err = ApplicationDefaultFinder::new()
            .find_default_credentials(&scopes())
            .await
            .unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("failed to load Application Default Credentials"), "{msg}");
        assert!(msg.contains("file-does-not-exist.json"), "{msg}");
        assert!(msg.contains(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR), "{msg}");
        assert!(err.source().is_some());
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn adc_malformed_contents() {
        for contents in ["{", "{}", r#"{"type": 42}"#] {
            let path = write_adc(contents);
            let _e = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR, path.to_str().unwrap());
            let err = ApplicationDefaultFinder::new()
                .find_default_credentials(&scopes())
                .await
                .unwrap_err();
            assert!(!err.is_transient(), "{err:?}");
            let msg = err.to_string();
            assert!(msg.contains("failed to parse"), "{contents} => {msg}");
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn adc_unsupported_type() {
        let path = write_adc(r#"{"type": "some_unknown_credential_type"}"#);
        let _e = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR, path.to_str().unwrap());
        let err = ApplicationDefaultFinder::new()
            .find_default_credentials(&scopes())
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unsupported"), "{msg}");
        assert!(msg.contains("some_unknown_credential_type"), "{msg}");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn adc_authorized_user() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/token"),
                request::body(json_decoded(eq(serde_json::json!({
                    "grant_type": "refresh_token",
                    "client_id": "test-client-id",
                    "client_secret": "test-client-secret",
                    "refresh_token": "test-refresh-token",
                    "scopes": "openid email",
                })))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "access_token": "test-access-token",
                "token_type": "Bearer",
                "expires_in": 3600,
            }))),
        );
        let path = write_adc(
            &serde_json::json!({
                "type": "authorized_user",
                "client_id": "test-client-id",
                "client_secret": "test-client-secret",
                "refresh_token": "test-refresh-token",
                "quota_project_id": "test-project",
                "token_uri": server.url("/token").to_string(),
            })
            .to_string(),
        );
        let _e = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR, path.to_str().unwrap());

        let creds = ApplicationDefaultFinder::new()
            .find_default_credentials(&scopes())
            .await?;
        assert_eq!(creds.project_id.as_deref(), Some("test-project"));
        let token = creds.token_source.token().await?;
        assert_eq!(token.token, "test-access-token");
        assert_eq!(token.token_type, "Bearer");
        assert!(token.expires_at.is_some());
        Ok(())
    }

    #[tokio::test]
    #[cfg(not(target_os = "windows"))]
    #[serial_test::serial]
    async fn adc_falls_back_to_metadata_service() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", mds::MDS_TOKEN_PATH),
                request::query(url_decoded(contains(("scopes", "openid,email")))),
                request::headers(contains(("metadata-flavor", "Google"))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "access_token": "test-mds-token",
                "token_type": "Bearer",
            }))),
        );
        let _e1 = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS_ENV_VAR);
        let _e2 = ScopedEnv::set("HOME", "/test-only/does/not/exist");
        let _e3 = ScopedEnv::remove(mds::GCE_METADATA_HOST_ENV_VAR);

        let endpoint = format!("http://{}", server.addr());
        let creds = ApplicationDefaultFinder::new()
            .with_metadata_endpoint(endpoint)
            .find_default_credentials(&scopes())
            .await?;
        assert_eq!(creds.project_id, None);
        let token = creds.token_source.token().await?;
        assert_eq!(token, Token::bearer("test-mds-token"));
        Ok(())
    }
}
