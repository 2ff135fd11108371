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

//! Scheduled events of a guild.
//!
//! To list the events of a guild see
//! [guild::list_scheduled_events][crate::guild::list_scheduled_events].

use crate::model::{PrivacyLevel, integer_enum};
use crate::paths::{GUILDS, SCHEDULED_EVENTS, USERS};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::query::{Query, ToQuery};
use base::variant::exclusive;
use serde::Serialize;
use serde_json::Value;

integer_enum! {
    /// Where a scheduled event takes place.
    pub enum EntityType {
        StageInstance = 1,
        Voice = 2,
        /// Outside of the guild, `entity_metadata.location` is required.
        External = 3,
    }
}

integer_enum! {
    /// The lifecycle of a scheduled event.
    pub enum EventStatus {
        Scheduled = 1,
        Active = 2,
        Completed = 3,
        Canceled = 4,
    }
}

/// The parameters to schedule an event.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateScheduledEvent {
    pub name: String,
    pub privacy_level: PrivacyLevel,
    /// An ISO8601 timestamp.
    pub scheduled_start_time: String,
    pub entity_type: EntityType,
    /// Required unless the entity type is [EntityType::External].
    pub channel_id: Option<String>,
    pub entity_metadata: Option<Value>,
    /// Required for [EntityType::External].
    pub scheduled_end_time: Option<String>,
    pub description: Option<String>,
    /// A base64 encoded cover image.
    pub image: Option<String>,
}

impl CreateScheduledEvent {
    pub fn new<T: Into<String>, U: Into<String>>(
        name: T,
        privacy_level: PrivacyLevel,
        scheduled_start_time: U,
        entity_type: EntityType,
    ) -> Self {
        Self {
            name: name.into(),
            privacy_level,
            scheduled_start_time: scheduled_start_time.into(),
            entity_type,
            channel_id: None,
            entity_metadata: None,
            scheduled_end_time: None,
            description: None,
            image: None,
        }
    }

    /// Sets the [channel_id][CreateScheduledEvent::channel_id] field.
    pub fn set_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.channel_id = Some(v.into());
        self
    }

    /// Sets the [entity_metadata][CreateScheduledEvent::entity_metadata] field.
    pub fn set_entity_metadata(mut self, v: Value) -> Self {
        self.entity_metadata = Some(v);
        self
    }

    /// Sets the [scheduled_end_time][CreateScheduledEvent::scheduled_end_time] field.
    pub fn set_scheduled_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.scheduled_end_time = Some(v.into());
        self
    }

    /// Sets the [description][CreateScheduledEvent::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the [image][CreateScheduledEvent::image] field.
    pub fn set_image<T: Into<String>>(mut self, v: T) -> Self {
        self.image = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetScheduledEventQuery {
    pub with_user_count: Option<bool>,
}

impl GetScheduledEventQuery {
    /// Sets the [with_user_count][GetScheduledEventQuery::with_user_count] field.
    pub fn set_with_user_count(mut self, v: bool) -> Self {
        self.with_user_count = Some(v);
        self
    }
}

impl ToQuery for GetScheduledEventQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new().add("with_user_count", &self.with_user_count))
    }
}

/// The parameters to modify a scheduled event.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyScheduledEvent {
    pub channel_id: Option<Option<String>>,
    pub entity_metadata: Option<Option<Value>>,
    pub name: Option<String>,
    pub privacy_level: Option<PrivacyLevel>,
    pub scheduled_start_time: Option<String>,
    pub scheduled_end_time: Option<String>,
    pub description: Option<Option<String>>,
    pub entity_type: Option<EntityType>,
    pub status: Option<EventStatus>,
    pub image: Option<Option<String>>,
}

impl ModifyScheduledEvent {
    /// Sets the [channel_id][ModifyScheduledEvent::channel_id] field.
    pub fn set_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [channel_id][ModifyScheduledEvent::channel_id] field, clearing its value.
    pub fn clear_channel_id(mut self) -> Self {
        self.channel_id = Some(None);
        self
    }

    /// Sets the [entity_metadata][ModifyScheduledEvent::entity_metadata] field.
    pub fn set_entity_metadata(mut self, v: Value) -> Self {
        self.entity_metadata = Some(Some(v));
        self
    }

    /// Sends `null` for the [entity_metadata][ModifyScheduledEvent::entity_metadata] field, clearing its value.
    pub fn clear_entity_metadata(mut self) -> Self {
        self.entity_metadata = Some(None);
        self
    }

    /// Sets the [name][ModifyScheduledEvent::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [privacy_level][ModifyScheduledEvent::privacy_level] field.
    pub fn set_privacy_level(mut self, v: PrivacyLevel) -> Self {
        self.privacy_level = Some(v);
        self
    }

    /// Sets the [scheduled_start_time][ModifyScheduledEvent::scheduled_start_time] field.
    pub fn set_scheduled_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.scheduled_start_time = Some(v.into());
        self
    }

    /// Sets the [scheduled_end_time][ModifyScheduledEvent::scheduled_end_time] field.
    pub fn set_scheduled_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.scheduled_end_time = Some(v.into());
        self
    }

    /// Sets the [description][ModifyScheduledEvent::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [description][ModifyScheduledEvent::description] field, clearing its value.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the [entity_type][ModifyScheduledEvent::entity_type] field.
    pub fn set_entity_type(mut self, v: EntityType) -> Self {
        self.entity_type = Some(v);
        self
    }

    /// Sets the [status][ModifyScheduledEvent::status] field.
    pub fn set_status(mut self, v: EventStatus) -> Self {
        self.status = Some(v);
        self
    }

    /// Sets the [image][ModifyScheduledEvent::image] field.
    pub fn set_image<T: Into<String>>(mut self, v: T) -> Self {
        self.image = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [image][ModifyScheduledEvent::image] field, clearing its value.
    pub fn clear_image(mut self) -> Self {
        self.image = Some(None);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetEventUsersQuery {
    /// Up to 100.
    pub limit: Option<u32>,
    /// Includes the guild member of each user.
    pub with_member: Option<bool>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl GetEventUsersQuery {
    /// Sets the [limit][GetEventUsersQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the [with_member][GetEventUsersQuery::with_member] field.
    pub fn set_with_member(mut self, v: bool) -> Self {
        self.with_member = Some(v);
        self
    }

    /// Sets the [before][GetEventUsersQuery::before] field.
    pub fn set_before<T: Into<String>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets the [after][GetEventUsersQuery::after] field.
    pub fn set_after<T: Into<String>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }
}

impl ToQuery for GetEventUsersQuery {
    fn to_query(&self) -> Result<Query> {
        exclusive(&[
            ("before", self.before.is_some()),
            ("after", self.after.is_some()),
        ])?;
        Ok(Query::new()
            .add("limit", &self.limit)
            .add("with_member", &self.with_member)
            .add("before", &self.before)
            .add("after", &self.after))
    }
}

pub fn create(guild_id: &str, params: &CreateScheduledEvent) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[GUILDS, guild_id, SCHEDULED_EVENTS],
        None,
        body(params)?,
    )
}

pub fn get(
    guild_id: &str,
    event_id: &str,
    params: Option<&GetScheduledEventQuery>,
) -> Result<Action<Value>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[GUILDS, guild_id, SCHEDULED_EVENTS, event_id],
        query.as_ref(),
        None,
    )
}

/// Modifies an event, or changes its status.
///
/// Moving an event to [EntityType::External] requires clearing its
/// `channel_id`.
pub fn modify(
    guild_id: &str,
    event_id: &str,
    params: &ModifyScheduledEvent,
) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, SCHEDULED_EVENTS, event_id],
        None,
        body(params)?,
    )
}

pub fn delete(guild_id: &str, event_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, SCHEDULED_EVENTS, event_id],
        None,
        None,
    )
}

/// Lists the users subscribed to an event.
///
/// At most one of `before` and `after` may be set.
pub fn get_users(
    guild_id: &str,
    event_id: &str,
    params: Option<&GetEventUsersQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[GUILDS, guild_id, SCHEDULED_EVENTS, event_id, USERS],
        query.as_ref(),
        None,
    )
}
