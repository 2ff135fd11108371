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

//! Helpers shared by every operation in the catalog.

use base::Result;
use base::action::Action;
use base::descriptor::{ActionDescriptor, Body, Method};
use base::query::{Query, ToQuery};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Builds an action whose response is decoded from JSON.
pub(crate) fn action<R, S>(
    method: Method,
    segments: &[S],
    query: Option<&Query>,
    body: Option<Body>,
) -> Result<Action<R>>
where
    R: DeserializeOwned,
    S: AsRef<str>,
{
    ActionDescriptor::build(method, segments, query, body).map(Action::json)
}

/// Serializes a required payload.
pub(crate) fn body<T: Serialize + ?Sized>(value: &T) -> Result<Option<Body>> {
    Body::json(value).map(Some)
}

/// Serializes an optional payload, no body is sent when it is absent.
pub(crate) fn optional_body<T: Serialize>(value: Option<&T>) -> Result<Option<Body>> {
    value.map(Body::json).transpose()
}

/// Converts an optional query model.
pub(crate) fn query<Q: ToQuery>(value: Option<&Q>) -> Result<Option<Query>> {
    value.map(ToQuery::to_query).transpose()
}
