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

//! Typed actions for the Discord REST API.
//!
//! Each module covers one resource of the API, with one function per
//! operation. The functions return an [Action]: the request method, path,
//! query string, and body, plus the decoder for the response. Building an
//! action never performs I/O, the action is sent by an application-provided
//! [Executor].
//!
//! Parameters are plain structs with `set_*` functions. Optional fields are
//! omitted from the request when unset, and fields that the service accepts
//! as `null` have `clear_*` functions to send an explicit `null`.
//!
//! # Example
//! ```
//! use discord_actions::channel::{self, GetMessagesQuery};
//! use discord_actions::{ActionDescriptor, Executor, RequestOptions, Result};
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct Canned;
//! impl Executor for Canned {
//!     fn execute(
//!         &self,
//!         descriptor: ActionDescriptor,
//!         _options: RequestOptions,
//!     ) -> impl Future<Output = Result<Bytes>> + Send {
//!         assert_eq!(descriptor.path_and_query(), "channels/123/messages?limit=50");
//!         std::future::ready(Ok(Bytes::from_static(br#"[{"id": "1"}]"#)))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let query = GetMessagesQuery::default().set_limit(50);
//! let messages = channel::get_messages("123", Some(&query))?.send(&Canned).await?;
//! assert_eq!(messages.len(), 1);
//! # Ok(()) }
//! ```

pub use base::Result;
pub use base::action::Action;
pub use base::descriptor::{ActionDescriptor, Body, Method};
pub use base::error::Error;
pub use base::executor::Executor;
pub use base::options::{RequestOptions, RequestOptionsBuilder, set_default_request_options};

pub mod application;
pub mod ban;
pub mod channel;
pub mod emoji;
pub mod group_dm;
pub mod guild;
pub mod invite;
pub mod member;
pub mod message;
pub mod model;
pub mod oauth2;
pub mod paths;
pub mod reaction;
pub(crate) mod request;
pub mod role;
pub mod scheduled_event;
pub mod stage_instance;
pub mod sticker;
pub mod sticker_packs;
pub mod template;
pub mod thread;
pub mod user;
pub mod voice;
pub mod webhook;
pub mod welcome_screen;
pub mod widget;
