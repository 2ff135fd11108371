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

use crate::Result;
use crate::descriptor::ActionDescriptor;
use crate::error::Error;
use crate::options::RequestOptions;
use tracing::{Span, field};

const LOGGING_VAR: &str = "DISCORD_ACTIONS_LOGGING";

const HTTP_REQUEST_METHOD: &str = "http.request.method";
const URL_PATH: &str = "url.path";
const URL_QUERY: &str = "url.query";
const SERVER_ADDRESS: &str = "server.address";
const HTTP_RESPONSE_BODY_SIZE: &str = "http.response.body.size";
const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
const ERROR_TYPE: &str = "error.type";

/// Returns true if the application enabled action spans.
///
/// Spans are enabled by setting the `DISCORD_ACTIONS_LOGGING` environment
/// variable to `true`. The spans are only visible if the application also
/// installs a [tracing] subscriber.
pub fn tracing_enabled() -> bool {
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Creates the span wrapping a single action, or a disabled span.
pub(crate) fn action_span(descriptor: &ActionDescriptor, options: &RequestOptions) -> Span {
    if !tracing_enabled() {
        return Span::none();
    }
    tracing::info_span!(
        "discord_action",
        { HTTP_REQUEST_METHOD } = descriptor.method().as_str(),
        { URL_PATH } = descriptor.path(),
        { URL_QUERY } = descriptor.query(),
        { SERVER_ADDRESS } = options.resolved_endpoint(),
        { HTTP_RESPONSE_BODY_SIZE } = field::Empty,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

/// Records the payload size of a successful response.
pub(crate) fn record_payload(span: &Span, payload: &bytes::Bytes) {
    span.record(HTTP_RESPONSE_BODY_SIZE, payload.len() as i64);
}

/// Records the outcome of the action in its span.
pub(crate) fn record_result<T>(span: &Span, result: &Result<T>) {
    let Err(err) = result else {
        return;
    };
    if let Some(code) = err.http_status_code() {
        span.record(HTTP_RESPONSE_STATUS_CODE, code as i64);
    }
    span.record(ERROR_TYPE, error_type(err));
}

fn error_type(err: &Error) -> &'static str {
    if let Some(code) = err.http_status_code() {
        return match code {
            400..=499 => "CLIENT_ERROR",
            500..=599 => "SERVER_ERROR",
            _ => "HTTP_ERROR",
        };
    }
    match err {
        e if e.is_binding() => "CLIENT_BINDING",
        e if e.is_invalid_parameters() => "CLIENT_INVALID_PARAMETERS",
        e if e.is_serialization() => "CLIENT_SERIALIZATION",
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        e if e.is_timeout() => "CLIENT_TIMEOUT",
        e if e.is_io() => "CLIENT_CONNECTION_ERROR",
        _ => "ERROR_TYPE_UNSPECIFIED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use test_case::test_case;

    #[test]
    #[serial]
    fn enabled() {
        let _env = ScopedEnv::set(LOGGING_VAR, "true");
        assert!(tracing_enabled());
    }

    #[test_case("false"; "string false")]
    #[test_case("1"; "one")]
    #[test_case(""; "empty")]
    #[serial]
    fn disabled(value: &str) {
        let _env = ScopedEnv::set(LOGGING_VAR, value);
        assert!(!tracing_enabled());
    }

    #[test]
    #[serial]
    fn unset() {
        let _env = ScopedEnv::remove(LOGGING_VAR);
        assert!(!tracing_enabled());
    }

    #[test]
    #[serial]
    fn disabled_span() -> anyhow::Result<()> {
        let _env = ScopedEnv::remove(LOGGING_VAR);
        let d = ActionDescriptor::build(
            crate::descriptor::Method::Get,
            &["guilds", "1"],
            None,
            None,
        )?;
        let span = action_span(&d, &RequestOptions::default());
        assert!(span.is_disabled());
        Ok(())
    }

    #[test_case(Error::http(404, http::HeaderMap::new(), bytes::Bytes::new()), "CLIENT_ERROR")]
    #[test_case(Error::http(503, http::HeaderMap::new(), bytes::Bytes::new()), "SERVER_ERROR")]
    #[test_case(Error::http(302, http::HeaderMap::new(), bytes::Bytes::new()), "HTTP_ERROR")]
    #[test_case(Error::binding("test"), "CLIENT_BINDING")]
    #[test_case(Error::ser("test"), "CLIENT_SERIALIZATION")]
    #[test_case(Error::deser("test"), "CLIENT_RESPONSE_DECODE_ERROR")]
    #[test_case(Error::timeout("test"), "CLIENT_TIMEOUT")]
    #[test_case(Error::io("test"), "CLIENT_CONNECTION_ERROR")]
    #[test_case(Error::other("test"), "ERROR_TYPE_UNSPECIFIED")]
    fn error_types(err: Error, want: &str) {
        assert_eq!(error_type(&err), want);
    }
}
