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

//! A [tracing] layer that records spans and events per test.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, Once};
use tracing::{Event, Level, Subscriber, field, span};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::{LookupSpan, SpanRef};

const SCOPE_SPAN: &str = "test_layer";

/// A span recorded while a test scope was active.
#[derive(Clone, Debug)]
pub struct CapturedSpan {
    pub id: span::Id,
    pub name: String,
    /// Field values, formatted as strings. Includes values recorded after the
    /// span was created.
    pub attributes: HashMap<String, String>,
    pub test_id: Option<String>,
}

/// An event (a log line) recorded while a test scope was active.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    /// The `message` field, or the empty string.
    pub message: String,
    pub fields: HashMap<String, String>,
    pub test_id: Option<String>,
}

struct Visitor<'a>(&'a mut HashMap<String, String>);

impl Visitor<'_> {
    fn insert<V: ToString>(&mut self, field: &field::Field, value: V) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.insert(field, value);
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.insert(field, value);
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }
}

struct Log {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

static LOG: Mutex<Log> = Mutex::new(Log {
    spans: Vec::new(),
    events: Vec::new(),
});
static INIT: Once = Once::new();

// Tests may panic while holding the lock, the data is still usable.
fn log() -> MutexGuard<'static, Log> {
    LOG.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Clone, Debug)]
struct TestId(String);

fn scope_of<S>(span: Option<SpanRef<'_, S>>) -> Option<String>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    span?
        .scope()
        .find(|s| s.name() == SCOPE_SPAN)
        .and_then(|s| s.extensions().get::<TestId>().map(|t| t.0.clone()))
}

/// Captures spans and events, grouped by the test that emitted them.
///
/// The layer is installed once, as the global subscriber. Each test opens a
/// scope with [initialize][TestLayer::initialize], and any span or event
/// emitted while the scope is entered is tagged with the test id. Tests
/// running in parallel do not see each other's data.
///
/// # Example
/// ```
/// use discord_actions_test_utils::test_layer::TestLayer;
///
/// const TEST_ID: &str = "doc_example";
/// let _guard = TestLayer::initialize(TEST_ID);
/// tracing::info_span!("discord_action", url.path = "guilds/42").in_scope(|| {
///     tracing::warn!(field = "topic", "ignored");
/// });
///
/// let spans = TestLayer::capture(TEST_ID);
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].attributes.get("url.path").map(String::as_str), Some("guilds/42"));
/// let events = TestLayer::events(TEST_ID);
/// assert_eq!(events[0].message, "ignored");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestLayer;

impl TestLayer {
    /// Installs the layer, if needed, and enters the scope for `test_id`.
    ///
    /// Any data previously captured for `test_id` is discarded. Capture stops
    /// when the returned guard is dropped.
    pub fn initialize(test_id: &'static str) -> tracing::span::EnteredSpan {
        INIT.call_once(|| {
            let subscriber = tracing_subscriber::registry().with(TestLayer);
            // Another test harness may own the global subscriber.
            let _ = tracing::subscriber::set_global_default(subscriber);
        });
        {
            let mut log = log();
            log.spans.retain(|s| s.test_id.as_deref() != Some(test_id));
            log.events.retain(|e| e.test_id.as_deref() != Some(test_id));
        }
        tracing::info_span!("test_layer", test_id = test_id).entered()
    }

    /// Removes and returns the spans captured for `test_id`.
    pub fn capture(test_id: &str) -> Vec<CapturedSpan> {
        let mut log = log();
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut log.spans)
            .into_iter()
            .partition(|s| s.test_id.as_deref() == Some(test_id));
        log.spans = kept;
        taken.into_iter().filter(|s| s.name != SCOPE_SPAN).collect()
    }

    /// Removes and returns the events captured for `test_id`.
    pub fn events(test_id: &str) -> Vec<CapturedEvent> {
        let mut log = log();
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut log.events)
            .into_iter()
            .partition(|e| e.test_id.as_deref() == Some(test_id));
        log.events = kept;
        taken
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut Visitor(&mut attributes));
        let Some(span_ref) = ctx.span(id) else {
            return;
        };
        let name = span_ref.name().to_string();
        let test_id = if name == SCOPE_SPAN {
            attributes.get("test_id").cloned().inspect(|t| {
                span_ref.extensions_mut().insert(TestId(t.clone()));
            })
        } else {
            scope_of(Some(span_ref))
        };
        log().spans.push(CapturedSpan {
            id: id.clone(),
            name,
            attributes,
            test_id,
        });
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let mut log = log();
        if let Some(span) = log.spans.iter_mut().rev().find(|s| s.id == *id) {
            values.record(&mut Visitor(&mut span.attributes));
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut Visitor(&mut fields));
        let test_id = scope_of(ctx.event_span(event));
        if test_id.is_none() {
            return;
        }
        let message = fields.remove("message").unwrap_or_default();
        let metadata = event.metadata();
        log().events.push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message,
            fields,
            test_id,
        });
    }
}
