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

//! Per request options and process-wide defaults.
//!
//! The defaults are intended to work for most applications. Applications
//! typically configure the authorization header once, with
//! [set_default_request_options], and then override some options for specific
//! calls. Every [Action][crate::action::Action] implements the
//! [RequestOptionsBuilder] trait where applications can override the
//! defaults.

use crate::Result;
use crate::error::Error;
use crate::path::encode_segment;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::sync::RwLock;

/// The default API root.
pub const DEFAULT_ENDPOINT: &str = "https://discord.com/api/v9";

/// The header carrying the audit log reason.
pub const AUDIT_LOG_REASON: HeaderName = HeaderName::from_static("x-audit-log-reason");

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request options.
///
/// All other code uses this type indirectly, via the
/// [RequestOptionsBuilder] trait, or via [set_default_request_options].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    endpoint: Option<String>,
    authorization: Option<String>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    audit_log_reason: Option<String>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Overrides the API root.
    pub fn set_endpoint<T: Into<String>>(&mut self, v: T) {
        self.endpoint = Some(v.into());
    }

    /// Gets the API root override, if any.
    pub fn endpoint(&self) -> &Option<String> {
        &self.endpoint
    }

    /// The API root, falling back to [DEFAULT_ENDPOINT].
    pub fn resolved_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Sets the value of the `authorization` header, e.g. `Bot <token>`.
    pub fn set_authorization<T: Into<String>>(&mut self, v: T) {
        self.authorization = Some(v.into());
    }

    /// Gets the value of the `authorization` header, if any.
    pub fn authorization(&self) -> &Option<String> {
        &self.authorization
    }

    /// Sets the `user-agent` header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Sets the reason recorded in the guild audit log.
    ///
    /// The service only records the reason for operations that create audit
    /// log entries, such as banning a member or deleting a channel.
    pub fn set_audit_log_reason<T: Into<String>>(&mut self, v: T) {
        self.audit_log_reason = Some(v.into());
    }

    /// Gets the audit log reason, if any.
    pub fn audit_log_reason(&self) -> &Option<String> {
        &self.audit_log_reason
    }

    /// Inserts an additional header, replacing any previous value.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// The additional headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Combines these options with `defaults`.
    ///
    /// Each option set in `self` wins over the same option in `defaults`.
    /// Headers are merged, with the headers in `self` replacing any header
    /// of the same name in `defaults`.
    ///
    /// # Example
    /// ```
    /// use discord_actions_base::options::RequestOptions;
    /// let mut defaults = RequestOptions::default();
    /// defaults.set_authorization("Bot default-token");
    /// defaults.set_user_agent("my-bot/1.0");
    /// let mut call = RequestOptions::default();
    /// call.set_user_agent("my-bot/2.0");
    /// let merged = call.merge(&defaults);
    /// assert_eq!(merged.authorization().as_deref(), Some("Bot default-token"));
    /// assert_eq!(merged.user_agent().as_deref(), Some("my-bot/2.0"));
    /// ```
    pub fn merge(self, defaults: &RequestOptions) -> RequestOptions {
        let mut headers = defaults.headers.clone();
        for (name, value) in self.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        RequestOptions {
            endpoint: self.endpoint.or_else(|| defaults.endpoint.clone()),
            authorization: self
                .authorization
                .or_else(|| defaults.authorization.clone()),
            user_agent: self.user_agent.or_else(|| defaults.user_agent.clone()),
            attempt_timeout: self.attempt_timeout.or(defaults.attempt_timeout),
            audit_log_reason: self
                .audit_log_reason
                .or_else(|| defaults.audit_log_reason.clone()),
            headers,
        }
    }

    /// The headers an executor should send with the request.
    ///
    /// Includes the additional headers, plus the `authorization`,
    /// `user-agent`, and `x-audit-log-reason` headers when they are set. The
    /// audit log reason is percent-encoded, as required by the service.
    pub fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.headers.clone();
        if let Some(v) = &self.authorization {
            headers.insert(http::header::AUTHORIZATION, header_value(v)?);
        }
        if let Some(v) = &self.user_agent {
            headers.insert(http::header::USER_AGENT, header_value(v)?);
        }
        if let Some(v) = &self.audit_log_reason {
            headers.insert(AUDIT_LOG_REASON, header_value(&encode_segment(v))?);
        }
        Ok(headers)
    }
}

fn header_value(v: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(Error::ser)
}

/// Implementations of this trait provide setters to configure request options.
///
/// Each operation in the catalog returns an [Action][crate::action::Action],
/// which can be used to override any options affecting the request, such as
/// additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Overrides the API root.
    fn with_endpoint<V: Into<String>>(self, v: V) -> Self;

    /// Sets the `authorization` header.
    fn with_authorization<V: Into<String>>(self, v: V) -> Self;

    /// Sets the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the reason recorded in the guild audit log.
    fn with_audit_log_reason<V: Into<String>>(self, v: V) -> Self;

    /// Adds an additional header.
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_endpoint(v);
        self
    }

    fn with_authorization<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_authorization(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_audit_log_reason<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_audit_log_reason(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().insert_header(name, value);
        self
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_OPTIONS: RwLock<RequestOptions> = RwLock::new(RequestOptions::default());
}

/// Replaces the process-wide default options.
///
/// The defaults are merged into every action when it is sent. The last call
/// wins.
///
/// # Example
/// ```
/// use discord_actions_base::options::{RequestOptions, set_default_request_options};
/// let mut defaults = RequestOptions::default();
/// defaults.set_authorization("Bot my-token");
/// set_default_request_options(defaults);
/// ```
pub fn set_default_request_options(options: RequestOptions) {
    let mut guard = DEFAULT_OPTIONS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = options;
}

/// Returns a copy of the process-wide default options.
pub fn default_request_options() -> RequestOptions {
    DEFAULT_OPTIONS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::time::Duration;
    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default)]
    struct TestBuilder {
        options: RequestOptions,
    }
    impl internal::RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.endpoint(), &None);
        assert_eq!(opts.resolved_endpoint(), DEFAULT_ENDPOINT);

        opts.set_endpoint("http://localhost:8080/api/v9");
        assert_eq!(opts.resolved_endpoint(), "http://localhost:8080/api/v9");

        opts.set_authorization("Bot abc");
        assert_eq!(opts.authorization().as_deref(), Some("Bot abc"));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.set_audit_log_reason("spam");
        assert_eq!(opts.audit_log_reason().as_deref(), Some("spam"));

        opts.insert_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("1"),
        );
        assert_eq!(
            opts.headers().get("x-test"),
            Some(&HeaderValue::from_static("1"))
        );
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_endpoint("http://localhost")
            .with_authorization("Bearer xyz")
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(5))
            .with_audit_log_reason("cleanup")
            .with_header(
                HeaderName::from_static("x-test"),
                HeaderValue::from_static("1"),
            );
        let opts = builder.options;
        assert_eq!(opts.endpoint().as_deref(), Some("http://localhost"));
        assert_eq!(opts.authorization().as_deref(), Some("Bearer xyz"));
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(5)));
        assert_eq!(opts.audit_log_reason().as_deref(), Some("cleanup"));
        assert!(opts.headers().contains_key("x-test"), "{opts:?}");
    }

    #[test]
    fn merge() {
        let mut defaults = RequestOptions::default();
        defaults.set_authorization("Bot default");
        defaults.set_user_agent("default-agent");
        defaults.set_attempt_timeout(Duration::from_secs(10));
        defaults.insert_header(
            HeaderName::from_static("x-a"),
            HeaderValue::from_static("default"),
        );
        defaults.insert_header(
            HeaderName::from_static("x-b"),
            HeaderValue::from_static("default"),
        );

        let mut call = RequestOptions::default();
        call.set_user_agent("call-agent");
        call.set_audit_log_reason("because");
        call.insert_header(
            HeaderName::from_static("x-b"),
            HeaderValue::from_static("call"),
        );

        let merged = call.merge(&defaults);
        assert_eq!(merged.authorization().as_deref(), Some("Bot default"));
        assert_eq!(merged.user_agent().as_deref(), Some("call-agent"));
        assert_eq!(merged.attempt_timeout(), &Some(Duration::from_secs(10)));
        assert_eq!(merged.audit_log_reason().as_deref(), Some("because"));
        assert_eq!(merged.endpoint(), &None);
        assert_eq!(
            merged.headers().get("x-a"),
            Some(&HeaderValue::from_static("default"))
        );
        assert_eq!(
            merged.headers().get("x-b"),
            Some(&HeaderValue::from_static("call"))
        );
    }

    #[test]
    fn request_headers() -> TestResult {
        let mut opts = RequestOptions::default();
        opts.set_authorization("Bot abc");
        opts.set_user_agent("test-agent");
        opts.set_audit_log_reason("spam & abuse");
        let headers = opts.request_headers()?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&HeaderValue::from_static("Bot abc"))
        );
        assert_eq!(
            headers.get(http::header::USER_AGENT),
            Some(&HeaderValue::from_static("test-agent"))
        );
        assert_eq!(
            headers.get(AUDIT_LOG_REASON),
            Some(&HeaderValue::from_static("spam%20%26%20abuse"))
        );
        Ok(())
    }

    #[test]
    fn request_headers_empty() -> TestResult {
        let headers = RequestOptions::default().request_headers()?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[test]
    fn request_headers_invalid() {
        let mut opts = RequestOptions::default();
        opts.set_authorization("Bot abc\n");
        let err = opts.request_headers().unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test]
    #[serial]
    fn defaults_last_write_wins() {
        let mut first = RequestOptions::default();
        first.set_authorization("Bot first");
        set_default_request_options(first);
        let mut second = RequestOptions::default();
        second.set_authorization("Bot second");
        set_default_request_options(second.clone());
        assert_eq!(default_request_options(), second);

        set_default_request_options(RequestOptions::default());
        assert_eq!(default_request_options(), RequestOptions::default());
    }
}
