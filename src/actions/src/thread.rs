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

//! Threads and thread members.
//!
//! Threads are channels: they are modified and deleted through their channel
//! path. Listings of archived threads are in [channel][crate::channel], and
//! the active threads of a guild are in [guild][crate::guild].

use crate::model::ThreadKind;
use crate::paths::{CHANNELS, ME, MESSAGES, THREAD_MEMBERS, THREADS};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to modify a thread.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyThread {
    pub name: Option<String>,
    pub archived: Option<bool>,
    /// In minutes: 60, 1440, 4320, or 10080.
    pub auto_archive_duration: Option<u32>,
    pub locked: Option<bool>,
    /// Whether non-moderators can add members to a private thread.
    pub invitable: Option<bool>,
    pub rate_limit_per_user: Option<Option<u32>>,
}

impl ModifyThread {
    /// Sets the [name][ModifyThread::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [archived][ModifyThread::archived] field.
    pub fn set_archived(mut self, v: bool) -> Self {
        self.archived = Some(v);
        self
    }

    /// Sets the [auto_archive_duration][ModifyThread::auto_archive_duration] field.
    pub fn set_auto_archive_duration(mut self, v: u32) -> Self {
        self.auto_archive_duration = Some(v);
        self
    }

    /// Sets the [locked][ModifyThread::locked] field.
    pub fn set_locked(mut self, v: bool) -> Self {
        self.locked = Some(v);
        self
    }

    /// Sets the [invitable][ModifyThread::invitable] field.
    pub fn set_invitable(mut self, v: bool) -> Self {
        self.invitable = Some(v);
        self
    }

    /// Sets the [rate_limit_per_user][ModifyThread::rate_limit_per_user] field.
    pub fn set_rate_limit_per_user(mut self, v: u32) -> Self {
        self.rate_limit_per_user = Some(Some(v));
        self
    }

    /// Sends `null` for the [rate_limit_per_user][ModifyThread::rate_limit_per_user] field, clearing its value.
    pub fn clear_rate_limit_per_user(mut self) -> Self {
        self.rate_limit_per_user = Some(None);
        self
    }
}

/// The parameters to start a thread from a message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StartThreadWithMessage {
    pub name: String,
    pub auto_archive_duration: Option<u32>,
    pub rate_limit_per_user: Option<Option<u32>>,
}

impl StartThreadWithMessage {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            auto_archive_duration: None,
            rate_limit_per_user: None,
        }
    }

    /// Sets the [auto_archive_duration][StartThreadWithMessage::auto_archive_duration] field.
    pub fn set_auto_archive_duration(mut self, v: u32) -> Self {
        self.auto_archive_duration = Some(v);
        self
    }

    /// Sets the [rate_limit_per_user][StartThreadWithMessage::rate_limit_per_user] field.
    pub fn set_rate_limit_per_user(mut self, v: u32) -> Self {
        self.rate_limit_per_user = Some(Some(v));
        self
    }

    /// Sends `null` for the [rate_limit_per_user][StartThreadWithMessage::rate_limit_per_user] field, clearing its value.
    pub fn clear_rate_limit_per_user(mut self) -> Self {
        self.rate_limit_per_user = Some(None);
        self
    }
}

/// The parameters to start a thread without a message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StartThread {
    pub name: String,
    pub auto_archive_duration: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<ThreadKind>,
    pub invitable: Option<bool>,
    pub rate_limit_per_user: Option<Option<u32>>,
}

impl StartThread {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            auto_archive_duration: None,
            kind: None,
            invitable: None,
            rate_limit_per_user: None,
        }
    }

    /// Sets the [auto_archive_duration][StartThread::auto_archive_duration] field.
    pub fn set_auto_archive_duration(mut self, v: u32) -> Self {
        self.auto_archive_duration = Some(v);
        self
    }

    /// Sets the [kind][StartThread::kind] field.
    pub fn set_kind(mut self, v: ThreadKind) -> Self {
        self.kind = Some(v);
        self
    }

    /// Sets the [invitable][StartThread::invitable] field.
    pub fn set_invitable(mut self, v: bool) -> Self {
        self.invitable = Some(v);
        self
    }

    /// Sets the [rate_limit_per_user][StartThread::rate_limit_per_user] field.
    pub fn set_rate_limit_per_user(mut self, v: u32) -> Self {
        self.rate_limit_per_user = Some(Some(v));
        self
    }

    /// Sends `null` for the [rate_limit_per_user][StartThread::rate_limit_per_user] field, clearing its value.
    pub fn clear_rate_limit_per_user(mut self) -> Self {
        self.rate_limit_per_user = Some(None);
        self
    }
}

pub fn modify(thread_id: &str, params: &ModifyThread) -> Result<Action<Value>> {
    action(Method::Patch, &[CHANNELS, thread_id], None, body(params)?)
}

/// Deletes a thread, the response is the deleted thread.
pub fn delete(thread_id: &str) -> Result<Action<Value>> {
    action(Method::Delete, &[CHANNELS, thread_id], None, None)
}

/// Starts a public thread from an existing message.
pub fn start_with_message(
    channel_id: &str,
    message_id: &str,
    params: &StartThreadWithMessage,
) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, MESSAGES, message_id, THREADS],
        None,
        body(params)?,
    )
}

/// Starts a thread that is not attached to a message.
///
/// The service creates a private thread when the kind is not set.
pub fn start(channel_id: &str, params: &StartThread) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, THREADS],
        None,
        body(params)?,
    )
}

pub fn join(thread_id: &str) -> Result<Action<()>> {
    action(
        Method::Put,
        &[CHANNELS, thread_id, THREAD_MEMBERS, ME],
        None,
        None,
    )
}

pub fn add_member(thread_id: &str, user_id: &str) -> Result<Action<()>> {
    action(
        Method::Put,
        &[CHANNELS, thread_id, THREAD_MEMBERS, user_id],
        None,
        None,
    )
}

pub fn leave(thread_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, thread_id, THREAD_MEMBERS, ME],
        None,
        None,
    )
}

pub fn remove_member(thread_id: &str, user_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, thread_id, THREAD_MEMBERS, user_id],
        None,
        None,
    )
}

pub fn get_member(thread_id: &str, user_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[CHANNELS, thread_id, THREAD_MEMBERS, user_id],
        None,
        None,
    )
}

pub fn list_members(thread_id: &str) -> Result<Action<Vec<Value>>> {
    action(
        Method::Get,
        &[CHANNELS, thread_id, THREAD_MEMBERS],
        None,
        None,
    )
}
