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

//! Invites to a guild channel.
//!
//! To list the invites of a channel or guild see
//! [channel::get_invites][crate::channel::get_invites] and
//! [guild::get_invites][crate::guild::get_invites].

use crate::model::integer_enum;
use crate::paths::{CHANNELS, INVITES};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::query::{Query, ToQuery};
use serde::Serialize;
use serde_json::Value;

integer_enum! {
    /// What an invite to a voice channel points to.
    pub enum InviteTargetType {
        Stream = 1,
        EmbeddedApplication = 2,
    }
}

/// The parameters to create an invite.
///
/// All the fields are optional, the service uses its defaults for any field not set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateInvite {
    /// In seconds, `0` never expires.
    pub max_age: Option<u32>,
    /// `0` is unlimited.
    pub max_uses: Option<u32>,
    /// Grants temporary membership.
    pub temporary: Option<bool>,
    /// Do not reuse a similar invite.
    pub unique: Option<bool>,
    pub target_type: Option<InviteTargetType>,
    /// The user streaming, for [InviteTargetType::Stream].
    pub target_user_id: Option<String>,
    /// For [InviteTargetType::EmbeddedApplication].
    pub target_application_id: Option<String>,
}

impl CreateInvite {
    /// Sets the [max_age][CreateInvite::max_age] field.
    pub fn set_max_age(mut self, v: u32) -> Self {
        self.max_age = Some(v);
        self
    }

    /// Sets the [max_uses][CreateInvite::max_uses] field.
    pub fn set_max_uses(mut self, v: u32) -> Self {
        self.max_uses = Some(v);
        self
    }

    /// Sets the [temporary][CreateInvite::temporary] field.
    pub fn set_temporary(mut self, v: bool) -> Self {
        self.temporary = Some(v);
        self
    }

    /// Sets the [unique][CreateInvite::unique] field.
    pub fn set_unique(mut self, v: bool) -> Self {
        self.unique = Some(v);
        self
    }

    /// Sets the [target_type][CreateInvite::target_type] field.
    pub fn set_target_type(mut self, v: InviteTargetType) -> Self {
        self.target_type = Some(v);
        self
    }

    /// Sets the [target_user_id][CreateInvite::target_user_id] field.
    pub fn set_target_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.target_user_id = Some(v.into());
        self
    }

    /// Sets the [target_application_id][CreateInvite::target_application_id] field.
    pub fn set_target_application_id<T: Into<String>>(mut self, v: T) -> Self {
        self.target_application_id = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetInviteQuery {
    pub with_counts: Option<bool>,
    pub with_expiration: Option<bool>,
    pub guild_scheduled_event_id: Option<String>,
}

impl GetInviteQuery {
    /// Sets the [with_counts][GetInviteQuery::with_counts] field.
    pub fn set_with_counts(mut self, v: bool) -> Self {
        self.with_counts = Some(v);
        self
    }

    /// Sets the [with_expiration][GetInviteQuery::with_expiration] field.
    pub fn set_with_expiration(mut self, v: bool) -> Self {
        self.with_expiration = Some(v);
        self
    }

    /// Sets the [guild_scheduled_event_id][GetInviteQuery::guild_scheduled_event_id] field.
    pub fn set_guild_scheduled_event_id<T: Into<String>>(mut self, v: T) -> Self {
        self.guild_scheduled_event_id = Some(v.into());
        self
    }
}

impl ToQuery for GetInviteQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("with_counts", &self.with_counts)
            .add("with_expiration", &self.with_expiration)
            .add("guild_scheduled_event_id", &self.guild_scheduled_event_id))
    }
}

/// Creates an invite to a channel.
pub fn create(channel_id: &str, params: &CreateInvite) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, INVITES],
        None,
        body(params)?,
    )
}

pub fn get(invite_code: &str, params: Option<&GetInviteQuery>) -> Result<Action<Value>> {
    let query = query(params)?;
    action(Method::Get, &[INVITES, invite_code], query.as_ref(), None)
}

/// Revokes an invite, the response is the deleted invite.
pub fn delete(invite_code: &str) -> Result<Action<Value>> {
    action(Method::Delete, &[INVITES, invite_code], None, None)
}
