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

//! Group direct message channels.

use crate::paths::{CHANNELS, RECIPIENTS};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to add a user to a group DM.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddRecipient {
    /// An OAuth2 access token of the user, with the `gdm.join` scope.
    pub access_token: String,
    pub nick: String,
}

impl AddRecipient {
    pub fn new<T: Into<String>, U: Into<String>>(access_token: T, nick: U) -> Self {
        Self {
            access_token: access_token.into(),
            nick: nick.into(),
        }
    }
}

/// The parameters to modify a group DM.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyGroupDm {
    pub name: Option<String>,
    /// A base64 encoded image.
    pub icon: Option<Option<String>>,
}

impl ModifyGroupDm {
    /// Sets the [name][ModifyGroupDm::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [icon][ModifyGroupDm::icon] field.
    pub fn set_icon<T: Into<String>>(mut self, v: T) -> Self {
        self.icon = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [icon][ModifyGroupDm::icon] field, clearing its value.
    pub fn clear_icon(mut self) -> Self {
        self.icon = Some(None);
        self
    }
}

/// Adds a user to a group DM, using their OAuth2 access token.
pub fn add_recipient(channel_id: &str, user_id: &str, params: &AddRecipient) -> Result<Action<()>> {
    action(
        Method::Put,
        &[CHANNELS, channel_id, RECIPIENTS, user_id],
        None,
        body(params)?,
    )
}

pub fn remove_recipient(channel_id: &str, user_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, channel_id, RECIPIENTS, user_id],
        None,
        None,
    )
}

/// Changes the name or icon of a group DM.
///
/// Group DMs are channels, the response is the updated channel.
pub fn modify(channel_id: &str, params: &ModifyGroupDm) -> Result<Action<Value>> {
    action(Method::Patch, &[CHANNELS, channel_id], None, body(params)?)
}
