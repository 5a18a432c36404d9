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

//! A provider for tokens obtained out-of-band.

use super::AuthProvider;
use crate::Result;

/// Returns the same, application-supplied, token on every call.
///
/// This provider never contacts a backend and never fails. It is useful when
/// the token is minted by another process, and in tests.
#[derive(Clone)]
pub struct StaticProvider {
    token: String,
}

impl StaticProvider {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticProvider")
            .field("token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl AuthProvider for StaticProvider {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
