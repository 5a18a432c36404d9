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

//! Types and traits to work with access tokens issued by identity backends.

use crate::Result;
use tokio::time::Instant;

/// Represents an access token derived from a credential.
#[derive(Clone, PartialEq)]
pub struct Token {
    /// The actual token string.
    ///
    /// This is the value sent in the `authorization:` header.
    pub token: String,

    /// The type of the token, most commonly `"Bearer"`.
    pub token_type: String,

    /// The instant at which the token expires.
    ///
    /// If `None`, the token does not expire or the backend did not say.
    pub expires_at: Option<Instant>,
}

impl Token {
    /// Creates a bearer token that does not expire.
    pub fn bearer<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
            token_type: "Bearer".to_string(),
            expires_at: None,
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// A source of access tokens, as exposed by a credential.
///
/// Each call may contact the identity backend. Implementations must be safe
/// to share across tasks.
#[async_trait::async_trait]
pub trait TokenSource: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

/// A [TokenSource] that always returns the same token.
///
/// # Example
/// ```
/// # use feast_auth::token::{StaticTokenSource, Token, TokenSource};
/// # tokio_test::block_on(async {
/// let source = StaticTokenSource::new(Token::bearer("my-token"));
/// let token = source.token().await?;
/// assert_eq!(token.token, "my-token");
/// # Ok::<(), feast_auth::errors::AuthError>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct StaticTokenSource {
    token: Token,
}

impl StaticTokenSource {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

#[async_trait::async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Token> {
        Ok(self.token.clone())
    }
}
