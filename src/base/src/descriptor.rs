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

//! Immutable descriptions of a single request.

use crate::Result;
use crate::error::Error;
use crate::path::build_path;
use crate::query::{Query, encode_query};
use serde::Serialize;

/// The HTTP verbs used by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// The method name, as it appears in the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// The payload of a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// A JSON document, sent as `application/json`.
    Json(serde_json::Value),
    /// Form fields, already encoded, sent as `application/x-www-form-urlencoded`.
    Form(String),
}

impl Body {
    /// Serializes `value` into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(Error::ser)
    }

    /// Encodes the query pairs as a form body.
    pub fn form(fields: &Query) -> Self {
        Self::Form(fields.form_encoded())
    }

    /// The value for the `content-type` header.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    /// The bytes to send on the wire.
    pub fn to_bytes(&self) -> Result<bytes::Bytes> {
        match self {
            Self::Json(v) => serde_json::to_vec(v)
                .map(bytes::Bytes::from)
                .map_err(Error::ser),
            Self::Form(s) => Ok(bytes::Bytes::from(s.clone())),
        }
    }
}

/// A complete, immutable, description of one request.
///
/// Descriptors are created with [build][ActionDescriptor::build] and never
/// change afterwards. The executor is expected to send them verbatim: it may
/// add headers and resolve the path against the API root, but it must not
/// alter the method, path, query, or body.
///
/// # Example
/// ```
/// use discord_actions_base::descriptor::{ActionDescriptor, Body, Method};
/// # fn main() -> discord_actions_base::Result<()> {
/// let body = Body::json(&serde_json::json!({"name": "Admin"}))?;
/// let d = ActionDescriptor::build(Method::Patch, &["guilds", "42", "roles", "7"], None, Some(body))?;
/// assert_eq!(d.method(), Method::Patch);
/// assert_eq!(d.path(), "guilds/42/roles/7");
/// assert_eq!(d.query(), "");
/// assert!(d.body().is_some());
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDescriptor {
    method: Method,
    path: String,
    query: String,
    body: Option<Body>,
}

impl ActionDescriptor {
    /// Builds a descriptor.
    ///
    /// The path is the `segments` joined with `/`, the query is the encoded
    /// `query`, or the empty string. This function has no side effects, other
    /// than a debug-level log event.
    pub fn build<S: AsRef<str>>(
        method: Method,
        segments: &[S],
        query: Option<&Query>,
        body: Option<Body>,
    ) -> Result<Self> {
        let path = build_path(segments)?;
        let query = encode_query(query);
        tracing::debug!(
            %method,
            path = %path,
            query = %query,
            has_body = body.is_some(),
            "built action descriptor"
        );
        Ok(Self {
            method,
            path,
            query,
            body,
        })
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The path, relative to the API root and without a leading `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The encoded query string, including the leading `?`, or the empty
    /// string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The request payload, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// The path followed by the query string.
    pub fn path_and_query(&self) -> String {
        format!("{}{}", self.path, self.query)
    }

    /// Resolves the descriptor against the API root, e.g.
    /// `https://discord.com/api/v9`.
    pub fn url(&self, endpoint: &str) -> Result<url::Url> {
        let full = format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            self.path_and_query()
        );
        url::Url::parse(&full).map_err(Error::binding)
    }
}

impl std::fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}{}", self.method, self.path, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    static_assertions::assert_impl_all!(ActionDescriptor: Clone, Send, Sync, std::fmt::Debug);
    static_assertions::assert_impl_all!(Body: Clone, Send, Sync);

    #[test_case(Method::Get, http::Method::GET)]
    #[test_case(Method::Post, http::Method::POST)]
    #[test_case(Method::Put, http::Method::PUT)]
    #[test_case(Method::Patch, http::Method::PATCH)]
    #[test_case(Method::Delete, http::Method::DELETE)]
    fn method(input: Method, want: http::Method) {
        assert_eq!(input.as_str(), want.as_str());
        assert_eq!(input.to_string(), want.to_string());
        assert_eq!(http::Method::from(input), want);
    }

    #[test]
    fn messages_with_limit() -> TestResult {
        let query = Query::new()
            .add("limit", &Some(50))
            .add("before", &None::<String>);
        let d = ActionDescriptor::build(
            Method::Get,
            &["channels", "123", "messages"],
            Some(&query),
            None,
        )?;
        assert_eq!(d.method(), Method::Get);
        assert_eq!(d.path(), "channels/123/messages");
        assert_eq!(d.query(), "?limit=50");
        assert_eq!(d.body(), None);
        assert_eq!(d.path_and_query(), "channels/123/messages?limit=50");
        assert_eq!(d.to_string(), "GET channels/123/messages?limit=50");
        Ok(())
    }

    #[test]
    fn no_dangling_question_mark() -> TestResult {
        let query = Query::new().add("limit", &None::<u32>);
        let d = ActionDescriptor::build(Method::Get, &["guilds", "1"], Some(&query), None)?;
        assert_eq!(d.query(), "");
        assert_eq!(d.path_and_query(), "guilds/1");
        Ok(())
    }

    #[test]
    fn json_body() -> TestResult {
        let body = Body::json(&json!({"name": "Admin"}))?;
        let d = ActionDescriptor::build(
            Method::Patch,
            &["guilds", "42", "roles", "7"],
            None,
            Some(body),
        )?;
        assert_eq!(d.body(), Some(&Body::Json(json!({"name": "Admin"}))));
        assert_eq!(d.body().map(Body::content_type), Some("application/json"));
        Ok(())
    }

    #[test]
    fn form_body() -> TestResult {
        let fields = Query::new()
            .add("grant_type", &"authorization_code")
            .add("redirect_uri", &"https://example.com/cb");
        let body = Body::form(&fields);
        assert_eq!(
            body,
            Body::Form(
                "grant_type=authorization_code&redirect_uri=https%3A%2F%2Fexample.com%2Fcb"
                    .to_string()
            )
        );
        assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
        assert_eq!(
            body.to_bytes()?,
            bytes::Bytes::from_static(
                b"grant_type=authorization_code&redirect_uri=https%3A%2F%2Fexample.com%2Fcb"
            )
        );
        Ok(())
    }

    #[test]
    fn body_bytes() -> TestResult {
        let body = Body::json(&json!({"content": "hi"}))?;
        assert_eq!(
            body.to_bytes()?,
            bytes::Bytes::from_static(br#"{"content":"hi"}"#)
        );
        Ok(())
    }

    #[test]
    fn idempotent() -> TestResult {
        let make = || {
            ActionDescriptor::build(
                Method::Post,
                &["channels", "1", "messages"],
                Some(&Query::new().add("wait", &true)),
                Some(Body::Json(json!({"content": "hi"}))),
            )
        };
        assert_eq!(make()?, make()?);
        Ok(())
    }

    #[test]
    fn empty_segment() {
        let err = ActionDescriptor::build(Method::Get, &["channels", ""], None, None).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test]
    fn url() -> TestResult {
        let query = Query::new().add("with_counts", &true);
        let d = ActionDescriptor::build(Method::Get, &["guilds", "42"], Some(&query), None)?;
        let url = d.url("https://discord.com/api/v9/")?;
        assert_eq!(
            url.as_str(),
            "https://discord.com/api/v9/guilds/42?with_counts=true"
        );
        let url = d.url("https://discord.com/api/v9")?;
        assert_eq!(url.path(), "/api/v9/guilds/42");
        assert_eq!(url.query(), Some("with_counts=true"));
        Ok(())
    }

    #[test]
    fn url_error() -> TestResult {
        let d = ActionDescriptor::build(Method::Get, &["guilds"], None, None)?;
        let err = d.url("not a url").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
