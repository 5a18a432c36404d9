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

use crate::Result;
use crate::errors;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

/// Builds the headers that authenticate an outbound call with a bearer token.
///
/// The `authorization` value is marked as sensitive, so transports and
/// loggers that honor the flag do not print it.
pub(crate) fn build_bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(errors::permanent)?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
