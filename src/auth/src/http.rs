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

//! Helpers shared by the providers that talk to identity backends over HTTP.

use crate::Result;
use crate::errors::{AuthError, is_transient_status};

/// Maps a failure to send a request into an [AuthError].
///
/// Connection failures are treated as transient: the backend may be
/// restarting or briefly unreachable.
pub(crate) fn send_error(context: &str, e: reqwest::Error) -> AuthError {
    AuthError::new(true, context, e)
}

/// Maps a failure to decode a response body into an [AuthError].
pub(crate) fn decode_error(context: &str, e: reqwest::Error) -> AuthError {
    // Decoding errors are not transient. Typically they indicate a
    // misconfigured endpoint, or a proxy answering on its behalf.
    AuthError::new(!e.is_decode(), context, e)
}

/// Returns the response if its status is a success, or an [AuthError] that
/// includes the status and the response body otherwise.
pub(crate) async fn check_response_status(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::new(is_transient_status(status), context, e))?;
    tracing::debug!(%status, "identity backend returned an error");
    Err(AuthError::from_msg(
        is_transient_status(status),
        format!("{context}, status: {status}, body: {body}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};

    #[tokio::test]
    async fn success_passes_through() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/ok"))
                .respond_with(status_code(200).body("hello")),
        );
        let response = reqwest::get(server.url("/ok").to_string()).await?;
        let response = check_response_status(response, "test-only").await?;
        assert_eq!(response.text().await?, "hello");
        Ok(())
    }

    #[tokio::test]
    async fn error_includes_status_and_body() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/unavailable"))
                .respond_with(status_code(503).body("try-again-later")),
        );
        let response = reqwest::get(server.url("/unavailable").to_string()).await?;
        let err = check_response_status(response, "test-only-context")
            .await
            .unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("test-only-context"), "{msg}");
        assert!(msg.contains("503"), "{msg}");
        assert!(msg.contains("try-again-later"), "{msg}");
        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_is_permanent() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/denied"))
                .respond_with(status_code(401).body("denied")),
        );
        let response = reqwest::get(server.url("/denied").to_string()).await?;
        let err = check_response_status(response, "test-only")
            .await
            .unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }
}
