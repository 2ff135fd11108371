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

//! Typed actions: a descriptor plus the decoder for its response.

use crate::Result;
use crate::descriptor::ActionDescriptor;
use crate::error::Error;
use crate::executor::Executor;
use crate::observability::{action_span, record_payload, record_result};
use crate::options::{RequestOptions, default_request_options, internal};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::Instrument;

type Decoder<R> = fn(Bytes) -> Result<R>;

/// A request descriptor, the options to send it, and the decoder for the
/// response.
///
/// Every operation in the catalog returns an `Action`. Applications can
/// inspect the [descriptor][Action::descriptor], override options via the
/// [RequestOptionsBuilder][crate::options::RequestOptionsBuilder] trait, and
/// finally [send][Action::send] the action with an [Executor].
///
/// # Example
/// ```
/// use discord_actions_base::action::Action;
/// use discord_actions_base::descriptor::{ActionDescriptor, Method};
/// use discord_actions_base::options::RequestOptionsBuilder;
/// # fn main() -> discord_actions_base::Result<()> {
/// let descriptor = ActionDescriptor::build(Method::Delete, &["guilds", "42", "bans", "7"], None, None)?;
/// let action = Action::<()>::json(descriptor).with_audit_log_reason("appeal accepted");
/// assert_eq!(action.descriptor().path(), "guilds/42/bans/7");
/// assert_eq!(action.options().audit_log_reason().as_deref(), Some("appeal accepted"));
/// # Ok(()) }
/// ```
pub struct Action<R> {
    descriptor: ActionDescriptor,
    options: RequestOptions,
    decoder: Decoder<R>,
}

impl<R> Action<R> {
    /// Creates an action with a custom decoder.
    pub fn new(descriptor: ActionDescriptor, decoder: fn(Bytes) -> Result<R>) -> Self {
        Self {
            descriptor,
            options: RequestOptions::default(),
            decoder,
        }
    }

    /// The request descriptor.
    pub fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    /// Consumes the action and returns its descriptor.
    pub fn into_descriptor(self) -> ActionDescriptor {
        self.descriptor
    }

    /// The per-call options.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Replaces the per-call options.
    pub fn set_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Sends the action and decodes the response.
    ///
    /// The per-call options are merged over the process-wide defaults. If an
    /// attempt timeout is configured the call fails with a timeout error when
    /// the executor does not complete in time. Errors from the executor are
    /// returned unchanged.
    pub async fn send<E: Executor>(self, executor: &E) -> Result<R> {
        let options = self.options.merge(&default_request_options());
        let span = action_span(&self.descriptor, &options);
        let decoder = self.decoder;
        let timeout = *options.attempt_timeout();
        let pending = executor.execute(self.descriptor, options);
        let payload = match timeout {
            None => pending.instrument(span.clone()).await,
            Some(t) => tokio::time::timeout(t, pending.instrument(span.clone()))
                .await
                .map_err(Error::timeout)
                .and_then(|r| r),
        };
        let result = payload.and_then(|p| {
            record_payload(&span, &p);
            decoder(p)
        });
        record_result(&span, &result);
        result
    }
}

impl<R: DeserializeOwned> Action<R> {
    /// Creates an action whose response is a JSON document.
    ///
    /// An empty payload, as returned by `204 No Content` responses, is decoded
    /// as JSON `null`. Use `()` or `Option<T>` for such responses.
    pub fn json(descriptor: ActionDescriptor) -> Self {
        Self::new(descriptor, decode_json::<R>)
    }
}

impl Action<Bytes> {
    /// Creates an action whose response is returned as raw bytes, e.g. an
    /// image.
    pub fn raw(descriptor: ActionDescriptor) -> Self {
        Self::new(descriptor, Ok)
    }
}

fn decode_json<R: DeserializeOwned>(payload: Bytes) -> Result<R> {
    if payload.is_empty() {
        return serde_json::from_value(serde_json::Value::Null).map_err(Error::deser);
    }
    serde_json::from_slice(&payload).map_err(Error::deser)
}

impl<R> internal::RequestBuilder for Action<R> {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            options: self.options.clone(),
            decoder: self.decoder,
        }
    }
}

impl<R> std::fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("descriptor", &self.descriptor)
            .field("options", &self.options)
            .field("response", &std::any::type_name::<R>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Body, Method};
    use crate::options::{RequestOptionsBuilder, set_default_request_options};
    use discord_actions_test_utils::test_layer::TestLayer;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use scoped_env::ScopedEnv;
    use serde_json::{Value, json};
    use serial_test::serial;
    use std::time::Duration;
    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        Executor {}
        impl Executor for Executor {
            fn execute(&self, descriptor: ActionDescriptor, options: RequestOptions) -> impl Future<Output = Result<Bytes>> + Send;
        }
    }

    static_assertions::assert_impl_all!(Action<Value>: Clone, Send, Sync, std::fmt::Debug);

    fn get_guild() -> ActionDescriptor {
        ActionDescriptor::build(Method::Get, &["guilds", "42"], None, None).unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn send_json() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .once()
            .with(eq(get_guild()), mockall::predicate::always())
            .returning(|_, _| Box::pin(async { Ok(Bytes::from_static(br#"{"id":"42"}"#)) }));

        let got: Value = Action::json(get_guild()).send(&mock).await?;
        assert_eq!(got, json!({"id": "42"}));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_no_content() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .returning(|_, _| Box::pin(async { Ok(Bytes::new()) }));
        let descriptor =
            ActionDescriptor::build(Method::Delete, &["guilds", "42"], None, None)?;
        Action::<()>::json(descriptor).send(&mock).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_raw() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .returning(|_, _| Box::pin(async { Ok(Bytes::from_static(b"\x89PNG")) }));
        let got = Action::raw(get_guild()).send(&mock).await?;
        assert_eq!(got, Bytes::from_static(b"\x89PNG"));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_deser_error() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .returning(|_, _| Box::pin(async { Ok(Bytes::from_static(b"not json")) }));
        let err = Action::<Value>::json(get_guild())
            .send(&mock)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_executor_error() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let mut mock = MockExecutor::new();
        mock.expect_execute().returning(|_, _| {
            Box::pin(async {
                Err(Error::http(
                    404,
                    http::HeaderMap::new(),
                    Bytes::from_static(b"Unknown Guild"),
                ))
            })
        });
        let err = Action::<Value>::json(get_guild())
            .send(&mock)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_merges_defaults() -> TestResult {
        let mut defaults = RequestOptions::default();
        defaults.set_authorization("Bot default");
        defaults.set_user_agent("default-agent");
        set_default_request_options(defaults);

        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .withf(|_, options| {
                options.authorization().as_deref() == Some("Bot default")
                    && options.user_agent().as_deref() == Some("call-agent")
                    && options.audit_log_reason().as_deref() == Some("cleanup")
            })
            .returning(|_, _| Box::pin(async { Ok(Bytes::new()) }));

        Action::<()>::json(get_guild())
            .with_user_agent("call-agent")
            .with_audit_log_reason("cleanup")
            .send(&mock)
            .await?;
        set_default_request_options(RequestOptions::default());
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_passes_descriptor_verbatim() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let body = Body::json(&json!({"name": "Admin"}))?;
        let descriptor = ActionDescriptor::build(
            Method::Patch,
            &["guilds", "42", "roles", "7"],
            None,
            Some(body),
        )?;
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .with(eq(descriptor.clone()), mockall::predicate::always())
            .returning(|_, _| Box::pin(async { Ok(Bytes::from_static(br#"{"id":"7"}"#)) }));
        let got: Value = Action::json(descriptor).send(&mock).await?;
        assert_eq!(got["id"], "7");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn send_timeout() -> TestResult {
        set_default_request_options(RequestOptions::default());
        let mut mock = MockExecutor::new();
        mock.expect_execute().returning(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(Bytes::new())
            })
        });
        let err = Action::<()>::json(get_guild())
            .with_attempt_timeout(Duration::from_millis(100))
            .send(&mock)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_span() -> TestResult {
        const TEST_ID: &str = "action::send_span";
        set_default_request_options(RequestOptions::default());
        let _env = ScopedEnv::set("DISCORD_ACTIONS_LOGGING", "true");
        let _guard = TestLayer::initialize(TEST_ID);

        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .returning(|_, _| Box::pin(async { Ok(Bytes::from_static(br#"{"id":"42"}"#)) }));
        let _: Value = Action::json(get_guild()).send(&mock).await?;

        let spans = TestLayer::capture(TEST_ID);
        let span = spans
            .iter()
            .find(|s| s.name == "discord_action")
            .expect("span should be captured");
        assert_eq!(
            span.attributes
                .get("http.request.method")
                .map(String::as_str),
            Some("GET")
        );
        assert_eq!(
            span.attributes.get("url.path").map(String::as_str),
            Some("guilds/42")
        );
        assert_eq!(
            span.attributes.get("server.address").map(String::as_str),
            Some("https://discord.com/api/v9")
        );
        assert_eq!(
            span.attributes
                .get("http.response.body.size")
                .map(String::as_str),
            Some("11")
        );
        assert!(span.attributes.get("error.type").is_none(), "{span:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn send_span_error() -> TestResult {
        const TEST_ID: &str = "action::send_span_error";
        set_default_request_options(RequestOptions::default());
        let _env = ScopedEnv::set("DISCORD_ACTIONS_LOGGING", "true");
        let _guard = TestLayer::initialize(TEST_ID);

        let mut mock = MockExecutor::new();
        mock.expect_execute().returning(|_, _| {
            Box::pin(async { Err(Error::http(403, http::HeaderMap::new(), Bytes::new())) })
        });
        let _ = Action::<Value>::json(get_guild()).send(&mock).await;

        let spans = TestLayer::capture(TEST_ID);
        let span = spans
            .iter()
            .find(|s| s.name == "discord_action")
            .expect("span should be captured");
        assert_eq!(
            span.attributes.get("error.type").map(String::as_str),
            Some("CLIENT_ERROR")
        );
        assert_eq!(
            span.attributes
                .get("http.response.status_code")
                .map(String::as_str),
            Some("403")
        );
        Ok(())
    }

    #[test]
    fn accessors() {
        let action = Action::<Value>::json(get_guild());
        assert_eq!(action.descriptor(), &get_guild());
        assert_eq!(action.options(), &RequestOptions::default());
        let mut options = RequestOptions::default();
        options.set_authorization("Bearer abc");
        let action = action.set_options(options.clone());
        assert_eq!(action.options(), &options);
        let debug = format!("{action:?}");
        assert!(debug.contains("serde_json::value::Value"), "{debug}");
        assert_eq!(action.clone().into_descriptor(), get_guild());
    }
}
