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

//! Errors created while obtaining bearer tokens.

use http::StatusCode;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error fetching a bearer token from an
/// [AuthProvider](crate::provider::AuthProvider).
///
/// The providers in this crate never retry. A failed exchange is returned to
/// the caller as-is, together with a hint of whether a later attempt may
/// succeed. Callers that retry should use [Exponential backoff].
///
/// [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff
#[derive(Clone, Debug)]
pub struct AuthError {
    /// If `true` the failure is likely transient, e.g. the identity backend was
    /// unreachable or overloaded.
    is_transient: bool,

    /// Describes what the provider was doing when it failed.
    message: Option<String>,

    /// The underlying error, if any.
    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl AuthError {
    /// Creates a new `AuthError` with context and an underlying source.
    ///
    /// # Arguments
    /// * `is_transient` - if `true` future attempts may succeed.
    /// * `message` - what the provider was doing when it failed.
    /// * `source` - the underlying error that caused the failure.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `AuthError` wrapping an underlying error.
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `AuthError` from a message.
    pub fn from_msg<M: Into<String>>(is_transient: bool, message: M) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Returns `true` if a later attempt may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|arc| arc.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        write!(f, "cannot fetch bearer token, {msg}")?;
        if let Some(message) = &self.message {
            write!(f, ", {message}")?;
        }
        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }
        Ok(())
    }
}

pub(crate) fn permanent<T: Error + Send + Sync + 'static>(source: T) -> AuthError {
    AuthError::from_source(false, source)
}

pub(crate) fn permanent_from_msg<M: Into<String>>(message: M) -> AuthError {
    AuthError::from_msg(false, message)
}

/// Returns `true` if a request failing with `c` may succeed if repeated.
pub(crate) fn is_transient_status(c: StatusCode) -> bool {
    // Server errors and throttling do not mean the request was wrong.
    matches!(
        c,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
    )
}
