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

//! Guild bans.
//!
//! To list the bans of a guild see [guild::get_bans][crate::guild::get_bans].

use crate::paths::{BANS, GUILDS};
use crate::request::{action, optional_body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to ban a user.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateBan {
    /// Between 0 and 7.
    pub delete_message_days: Option<u8>,
}

impl CreateBan {
    /// Sets the [delete_message_days][CreateBan::delete_message_days] field.
    pub fn set_delete_message_days(mut self, v: u8) -> Self {
        self.delete_message_days = Some(v);
        self
    }
}

pub fn get(guild_id: &str, user_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[GUILDS, guild_id, BANS, user_id], None, None)
}

/// Bans a user, optionally deleting their recent messages.
pub fn add(guild_id: &str, user_id: &str, params: Option<&CreateBan>) -> Result<Action<()>> {
    action(
        Method::Put,
        &[GUILDS, guild_id, BANS, user_id],
        None,
        optional_body(params)?,
    )
}

pub fn remove(guild_id: &str, user_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, BANS, user_id],
        None,
        None,
    )
}
