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

//! Encode optional parameters as a URL query string.
//!
//! Many operations accept optional parameters sent in the query string, such
//! as the pagination cursors and limits of a listing. These are formatted as
//! follows:
//! - [Option] values that are `None` are not included in the query.
//! - Values that are present are included, even if they are "falsy", e.g.
//!   `Some(0)`, `Some(false)`, or `Some("")`.
//! - Repeated values are formatted as repeated query parameters.
//! - Parameters appear in the order they were added.

use crate::Result;
use crate::request_parameter::RequestParameter;

/// An ordered collection of query parameters.
///
/// # Example
/// ```
/// use discord_actions_base::query::Query;
/// let query = Query::new()
///     .add("limit", &Some(50))
///     .add("before", &None::<String>)
///     .add("with_member", &Some(false));
/// assert_eq!(query.encode(), "?limit=50&with_member=false");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Returns an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `parameter` as `name`, skipping absent values.
    pub fn add<T>(mut self, name: &str, parameter: &T) -> Self
    where
        T: QueryParameter + ?Sized,
    {
        parameter.add(&mut self, name);
        self
    }

    /// Appends a single, already formatted, pair.
    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns true if no parameters survived.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The number of `name=value` pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// The `application/x-www-form-urlencoded` form of the pairs, without
    /// any leading `?`.
    pub fn form_encoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// The query string: empty when there are no pairs, otherwise `?`
    /// followed by the encoded pairs.
    pub fn encode(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("?{}", self.form_encoded())
    }
}

/// Encodes an optional query.
///
/// Returns the empty string if `params` is `None` or if all its values were
/// absent. Never returns a dangling `?`.
///
/// # Example
/// ```
/// use discord_actions_base::query::{Query, encode_query};
/// assert_eq!(encode_query(None), "");
/// assert_eq!(encode_query(Some(&Query::new().add("limit", &None::<u32>))), "");
/// assert_eq!(encode_query(Some(&Query::new().add("limit", &50))), "?limit=50");
/// ```
pub fn encode_query(params: Option<&Query>) -> String {
    params.map(Query::encode).unwrap_or_default()
}

/// Types that can be added to a [Query].
///
/// Scalars implement this trait via [RequestParameter]. `Option<T>` skips
/// absent values, and `Vec<T>` repeats the parameter once per element.
pub trait QueryParameter {
    fn add(&self, query: &mut Query, name: &str);
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, query: &mut Query, name: &str) {
        if let Some(t) = self {
            t.add(query, name);
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(&self, query: &mut Query, name: &str) {
        for e in self.iter() {
            e.add(query, name);
        }
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn add(&self, query: &mut Query, name: &str) {
        query.push(name, self.format());
    }
}

/// Parameter models that are sent as a query string.
///
/// Implementations also validate the shape of the parameters, for example,
/// that at most one pagination cursor is set.
pub trait ToQuery {
    fn to_query(&self) -> Result<Query>;
}
