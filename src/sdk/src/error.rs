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

use feast_auth::errors::AuthError;
use feast_types::{ParseFeatureReferenceError, ValueType};

/// A `Result` alias where the `Err` case is [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// The errors returned by the SDK.
///
/// Errors are returned when the caller's input does not match the shape of
/// a response or request, or when a bearer token cannot be obtained.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The number of fill values does not match the number of requested
    /// features.
    #[error(
        "length mismatch; number of na values ({got}) not equal to number of features requested ({want})"
    )]
    LengthMismatch { got: usize, want: usize },

    /// A requested feature is not a key of the response records.
    #[error("feature {0} not found in response")]
    FeatureNotFound(String),

    /// A present value does not have the requested type.
    #[error("feature {feature} has value of type {actual}, expected {expected}")]
    TypeMismatch {
        feature: String,
        expected: ValueType,
        actual: ValueType,
    },

    /// A feature reference in a request could not be parsed.
    #[error(transparent)]
    InvalidFeatureRef(#[from] ParseFeatureReferenceError),

    /// A bearer token could not be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages() {
        let e = Error::LengthMismatch { got: 1, want: 2 };
        assert_eq!(
            e.to_string(),
            "length mismatch; number of na values (1) not equal to number of features requested (2)"
        );

        let e = Error::FeatureNotFound("project1/feature3".to_string());
        assert_eq!(e.to_string(), "feature project1/feature3 not found in response");

        let e = Error::TypeMismatch {
            feature: "f".to_string(),
            expected: ValueType::Int64,
            actual: ValueType::Double,
        };
        assert_eq!(e.to_string(), "feature f has value of type DOUBLE, expected INT64");
    }

    #[test]
    fn from_auth() {
        let auth = AuthError::from_msg(true, "test-only");
        let e = Error::from(auth);
        assert!(matches!(&e, Error::Auth(a) if a.is_transient()), "{e:?}");
        assert!(e.to_string().contains("test-only"), "{e}");
        assert!(e.source().is_none());
    }

    #[test]
    fn from_parse() {
        let parse = "".parse::<feast_types::FeatureReference>().unwrap_err();
        let e = Error::from(parse.clone());
        assert_eq!(e.to_string(), parse.to_string());
    }
}
