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

//! Send catalog actions through a mocked executor.

use bytes::Bytes;
use discord_actions::model::PruneCount;
use discord_actions::widget::{self, WidgetImageQuery, WidgetStyle};
use discord_actions::{
    ActionDescriptor, Error, Executor, RequestOptions, RequestOptionsBuilder, Result, ban,
    channel, guild, member, role, set_default_request_options,
};
use discord_actions_test_utils::test_layer::TestLayer;
use mockall::predicate::{always, eq};
use pretty_assertions::assert_eq;
use scoped_env::ScopedEnv;
use serde_json::{Value, json};
use serial_test::serial;

type TestResult = anyhow::Result<()>;

mockall::mock! {
    #[derive(Debug)]
    Executor {}
    impl Executor for Executor {
        fn execute(&self, descriptor: ActionDescriptor, options: RequestOptions) -> impl Future<Output = Result<Bytes>> + Send;
    }
}

type Reply = std::pin::Pin<Box<dyn Future<Output = Result<Bytes>> + Send>>;

fn reply(
    payload: &'static [u8],
) -> impl Fn(ActionDescriptor, RequestOptions) -> Reply + Send + 'static {
    move |_, _| -> Reply { Box::pin(async move { Ok(Bytes::from_static(payload)) }) }
}

#[tokio::test]
#[serial]
async fn messages() -> TestResult {
    set_default_request_options(RequestOptions::default());
    let action = channel::get_messages("123", None)?;
    let mut mock = MockExecutor::new();
    mock.expect_execute()
        .once()
        .with(eq(action.descriptor().clone()), always())
        .returning(reply(br#"[{"id": "1"}, {"id": "2"}]"#));

    let messages = action.send(&mock).await?;
    assert_eq!(messages, vec![json!({"id": "1"}), json!({"id": "2"})]);
    Ok(())
}

#[tokio::test]
#[serial]
async fn no_content() -> TestResult {
    set_default_request_options(RequestOptions::default());
    let mut mock = MockExecutor::new();
    mock.expect_execute()
        .withf(|descriptor, options| {
            descriptor.to_string() == "PUT guilds/1/bans/2"
                && options.audit_log_reason().as_deref() == Some("spam")
        })
        .returning(reply(b""));

    ban::add("1", "2", None)?
        .with_audit_log_reason("spam")
        .send(&mock)
        .await?;
    Ok(())
}

#[tokio::test]
#[serial]
async fn optional_response() -> TestResult {
    set_default_request_options(RequestOptions::default());
    let mut mock = MockExecutor::new();
    mock.expect_execute().returning(reply(b""));
    let params = member::AddMember::new("token");
    let got = member::add("1", "2", &params)?.send(&mock).await?;
    assert_eq!(got, None);
    Ok(())
}

#[tokio::test]
#[serial]
async fn typed_response() -> TestResult {
    set_default_request_options(RequestOptions::default());
    let mut mock = MockExecutor::new();
    mock.expect_execute().returning(reply(br#"{"pruned": 12}"#));
    let got = guild::get_prune_count("1", None)?.send(&mock).await?;
    assert_eq!(got, PruneCount { pruned: Some(12) });
    Ok(())
}

#[tokio::test]
#[serial]
async fn raw_image() -> TestResult {
    set_default_request_options(RequestOptions::default());
    let mut mock = MockExecutor::new();
    mock.expect_execute()
        .withf(|descriptor, _| descriptor.query() == "?style=banner1")
        .returning(reply(b"\x89PNG\r\n"));
    let query = WidgetImageQuery::default().set_style(WidgetStyle::Banner1);
    let got = widget::get_image("1", Some(&query))?.send(&mock).await?;
    assert_eq!(got, Bytes::from_static(b"\x89PNG\r\n"));
    Ok(())
}

#[tokio::test]
#[serial]
async fn default_options() -> TestResult {
    let mut defaults = RequestOptions::default();
    defaults.set_authorization("Bot secret");
    set_default_request_options(defaults);

    let mut mock = MockExecutor::new();
    mock.expect_execute()
        .withf(|_, options| options.authorization().as_deref() == Some("Bot secret"))
        .returning(reply(br#"{"id": "7", "name": "Admin"}"#));
    let params = role::ModifyRole::default().set_name("Admin");
    let got = role::modify("42", "7", Some(&params))?.send(&mock).await?;
    assert_eq!(got["name"], "Admin");

    set_default_request_options(RequestOptions::default());
    Ok(())
}

#[tokio::test]
#[serial]
async fn service_error() -> TestResult {
    set_default_request_options(RequestOptions::default());
    let mut mock = MockExecutor::new();
    mock.expect_execute().returning(|_, _| {
        Box::pin(async {
            Err(Error::http(
                403,
                http::HeaderMap::new(),
                Bytes::from_static(br#"{"code": 50013, "message": "Missing Permissions"}"#),
            ))
        })
    });
    let err = guild::delete("1")?.send(&mock).await.unwrap_err();
    assert_eq!(err.http_status_code(), Some(403), "{err:?}");
    Ok(())
}

#[tokio::test]
#[serial]
async fn span() -> TestResult {
    const TEST_ID: &str = "send::span";
    let _env = ScopedEnv::set("DISCORD_ACTIONS_LOGGING", "true");
    set_default_request_options(RequestOptions::default());
    let _guard = TestLayer::initialize(TEST_ID);

    let mut mock = MockExecutor::new();
    mock.expect_execute().returning(reply(br#"[]"#));
    let query = channel::GetMessagesQuery::default().set_limit(5);
    let got: Vec<Value> = channel::get_messages("9", Some(&query))?.send(&mock).await?;
    assert!(got.is_empty());

    let spans = TestLayer::capture(TEST_ID);
    let span = spans
        .iter()
        .find(|s| s.name == "discord_action")
        .expect("action span is captured");
    let attribute = |name: &str| span.attributes.get(name).map(String::as_str);
    assert_eq!(attribute("http.request.method"), Some("GET"));
    assert_eq!(attribute("url.path"), Some("channels/9/messages"));
    assert_eq!(attribute("url.query"), Some("?limit=5"));
    assert_eq!(attribute("http.response.body.size"), Some("2"));
    assert_eq!(attribute("error.type"), None);
    Ok(())
}

#[tokio::test]
#[serial]
async fn rejected_parameters_are_logged() -> TestResult {
    const TEST_ID: &str = "send::rejected_parameters_are_logged";
    let _guard = TestLayer::initialize(TEST_ID);

    let query = guild::GetBansQuery::default()
        .set_before("1")
        .set_after("2");
    let err = guild::get_bans("1", Some(&query)).unwrap_err();
    assert!(err.is_invalid_parameters(), "{err:?}");

    let events = TestLayer::events(TEST_ID);
    let event = events
        .iter()
        .find(|e| e.level == tracing::Level::WARN)
        .expect("warning is captured");
    assert_eq!(
        event.fields.get("first").map(String::as_str),
        Some("before")
    );
    assert_eq!(
        event.fields.get("second").map(String::as_str),
        Some("after")
    );
    Ok(())
}
