// Copyright 2025 Google LLC
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

//! The seam between action descriptors and the network.
//!
//! These crates do not send requests. Applications provide an [Executor] that
//! adds authentication, applies rate limits and retries, and returns the raw
//! response payload. Applications can also mock this trait in their tests, to
//! verify the descriptors produced by their code without any network access.

use crate::Result;
use crate::descriptor::ActionDescriptor;
use crate::options::RequestOptions;

/// Sends action descriptors and returns the response payload.
///
/// Implementations must send the method, path, query, and body of the
/// descriptor verbatim. They may add headers, see
/// [RequestOptions::request_headers], and resolve the path against the API
/// root, see [ActionDescriptor::url].
///
/// Successful responses without content (`204 No Content`) should return an
/// empty payload. Error responses should be returned as
/// [Error::http][crate::error::Error::http].
pub trait Executor: std::fmt::Debug + Send + Sync {
    /// Sends one request.
    fn execute(
        &self,
        descriptor: ActionDescriptor,
        options: RequestOptions,
    ) -> impl Future<Output = Result<bytes::Bytes>> + Send;
}

impl<T: Executor> Executor for std::sync::Arc<T> {
    fn execute(
        &self,
        descriptor: ActionDescriptor,
        options: RequestOptions,
    ) -> impl Future<Output = Result<bytes::Bytes>> + Send {
        self.as_ref().execute(descriptor, options)
    }
}
