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

#[cfg(test)]
mod tests {
    use feast_auth::AuthProvider;
    use feast_auth::config::AuthConfig;
    use feast_auth::credentials::{CredentialsFinder, DefaultCredentials};
    use feast_auth::errors::AuthError;
    use feast_auth::provider::{GoogleProvider, OAuthProvider, StaticProvider};
    use feast_auth::token::{StaticTokenSource, Token};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::sync::Arc;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug)]
    struct FixedFinder;

    #[async_trait::async_trait]
    impl CredentialsFinder for FixedFinder {
        async fn find_default_credentials(
            &self,
            scopes: &[String],
        ) -> Result<DefaultCredentials, AuthError> {
            if scopes != ["openid", "email"] {
                return Err(AuthError::from_msg(false, format!("bad scopes {scopes:?}")));
            }
            Ok(DefaultCredentials {
                project_id: Some("test-project".to_string()),
                token_source: Arc::new(StaticTokenSource::new(Token::bearer("google-token"))),
            })
        }
    }

    #[tokio::test]
    async fn providers_are_interchangeable() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/oauth/token"),
                request::body(json_decoded(eq(json!({
                    "grant_type": "client_credentials",
                    "client_id": "test-id",
                    "client_secret": "test-secret",
                    "audience": "test-audience",
                })))),
            ])
            // Once for `token()` and once for `headers()`.
            .times(2)
            .respond_with(json_encoded(json!({"access_token": "oauth-token"}))),
        );

        let providers: Vec<(Arc<dyn AuthProvider>, &str)> = vec![
            (Arc::new(StaticProvider::new("static-token")), "static-token"),
            (
                Arc::new(GoogleProvider::builder().with_finder(FixedFinder).build()),
                "google-token",
            ),
            (
                Arc::new(
                    OAuthProvider::builder(server.url("/oauth/token").to_string())
                        .with_client_id("test-id")
                        .with_client_secret("test-secret")
                        .with_audience("test-audience")
                        .build()?,
                ),
                "oauth-token",
            ),
        ];
        for (provider, want) in providers {
            assert_eq!(provider.token().await?, want, "{provider:?}");
            let headers = provider.headers().await?;
            let value = &headers[http::header::AUTHORIZATION];
            assert_eq!(value, format!("Bearer {want}").as_str());
            assert!(value.is_sensitive());
        }
        Ok(())
    }

    #[tokio::test]
    async fn google_provider_rejects_other_scopes() {
        let provider = GoogleProvider::builder()
            .with_finder(FixedFinder)
            .with_scopes(["https://www.googleapis.com/auth/cloud-platform"])
            .build();
        let err = provider.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("bad scopes"), "{err}");
    }

    #[tokio::test]
    async fn config_builds_oauth_provider() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(401).body("failed to authenticate request")),
        );
        let config: AuthConfig = serde_json::from_value(json!({
            "provider": "oauth",
            "client_id": "test-id",
            "client_secret": "wrong-secret",
            "audience": "test-audience",
            "token_request_url": server.url("/token").to_string(),
        }))?;
        let provider = config.build()?;
        let err = provider.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(err.to_string().contains("401"), "{err}");
        Ok(())
    }
}
