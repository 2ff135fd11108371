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

//! Guilds and the collections owned by a guild.
//!
//! Some collections of a guild have their own module, e.g. [member][crate::member],
//! [ban][crate::ban], and [role][crate::role]. This module contains the
//! operations on the guild itself, and the listings of its sub-resources.

use crate::model::{PruneCount, ThreadList, VanityUrl};
use crate::paths::{
    ACTIVE, AUDIT_LOGS, BANS, CHANNELS, EMOJIS, GUILDS, INTEGRATIONS, INVITES, MEMBERS, PREVIEW,
    PRUNE, REGIONS, ROLES, SCHEDULED_EVENTS, SEARCH, STICKERS, TEMPLATES, THREADS, VANITY_URL,
    WEBHOOKS,
};
use crate::request::{action, body, optional_body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::query::{Query, ToQuery};
use base::variant::exclusive;
use serde::Serialize;
use serde_json::Value;

/// Filters the entries of the audit log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetAuditLogQuery {
    /// Only entries made by this user.
    pub user_id: Option<String>,
    pub action_type: Option<u32>,
    /// Only entries before this entry id.
    pub before: Option<String>,
    pub limit: Option<u32>,
}

impl GetAuditLogQuery {
    /// Sets the [user_id][GetAuditLogQuery::user_id] field.
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets the [action_type][GetAuditLogQuery::action_type] field.
    pub fn set_action_type(mut self, v: u32) -> Self {
        self.action_type = Some(v);
        self
    }

    /// Sets the [before][GetAuditLogQuery::before] field.
    pub fn set_before<T: Into<String>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets the [limit][GetAuditLogQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }
}

impl ToQuery for GetAuditLogQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("user_id", &self.user_id)
            .add("action_type", &self.action_type)
            .add("before", &self.before)
            .add("limit", &self.limit))
    }
}

/// The parameters to create a guild.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateGuild {
    pub name: String,
    /// A base64 encoded 128x128 image.
    pub icon: Option<String>,
    pub verification_level: Option<u8>,
    pub default_message_notifications: Option<u8>,
    pub explicit_content_filter: Option<u8>,
    /// The first role becomes the `@everyone` role.
    pub roles: Option<Vec<Value>>,
    pub channels: Option<Vec<Value>>,
    pub afk_channel_id: Option<String>,
    /// In seconds.
    pub afk_timeout: Option<u32>,
    pub system_channel_id: Option<String>,
    pub system_channel_flags: Option<u64>,
}

impl CreateGuild {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            icon: None,
            verification_level: None,
            default_message_notifications: None,
            explicit_content_filter: None,
            roles: None,
            channels: None,
            afk_channel_id: None,
            afk_timeout: None,
            system_channel_id: None,
            system_channel_flags: None,
        }
    }

    /// Sets the [icon][CreateGuild::icon] field.
    pub fn set_icon<T: Into<String>>(mut self, v: T) -> Self {
        self.icon = Some(v.into());
        self
    }

    /// Sets the [verification_level][CreateGuild::verification_level] field.
    pub fn set_verification_level(mut self, v: u8) -> Self {
        self.verification_level = Some(v);
        self
    }

    /// Sets the [default_message_notifications][CreateGuild::default_message_notifications] field.
    pub fn set_default_message_notifications(mut self, v: u8) -> Self {
        self.default_message_notifications = Some(v);
        self
    }

    /// Sets the [explicit_content_filter][CreateGuild::explicit_content_filter] field.
    pub fn set_explicit_content_filter(mut self, v: u8) -> Self {
        self.explicit_content_filter = Some(v);
        self
    }

    /// Sets the [roles][CreateGuild::roles] field.
    pub fn set_roles<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.roles = Some(v.into_iter().collect());
        self
    }

    /// Sets the [channels][CreateGuild::channels] field.
    pub fn set_channels<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.channels = Some(v.into_iter().collect());
        self
    }

    /// Sets the [afk_channel_id][CreateGuild::afk_channel_id] field.
    pub fn set_afk_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.afk_channel_id = Some(v.into());
        self
    }

    /// Sets the [afk_timeout][CreateGuild::afk_timeout] field.
    pub fn set_afk_timeout(mut self, v: u32) -> Self {
        self.afk_timeout = Some(v);
        self
    }

    /// Sets the [system_channel_id][CreateGuild::system_channel_id] field.
    pub fn set_system_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.system_channel_id = Some(v.into());
        self
    }

    /// Sets the [system_channel_flags][CreateGuild::system_channel_flags] field.
    pub fn set_system_channel_flags(mut self, v: u64) -> Self {
        self.system_channel_flags = Some(v);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetGuildQuery {
    /// Includes the approximate member and presence counts.
    pub with_counts: Option<bool>,
}

impl GetGuildQuery {
    /// Sets the [with_counts][GetGuildQuery::with_counts] field.
    pub fn set_with_counts(mut self, v: bool) -> Self {
        self.with_counts = Some(v);
        self
    }
}

impl ToQuery for GetGuildQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new().add("with_counts", &self.with_counts))
    }
}

/// The parameters to modify a guild.
///
/// Fields set to `null`, with the `clear_*()` functions, reset the setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyGuild {
    pub name: Option<String>,
    pub verification_level: Option<Option<u8>>,
    pub default_message_notifications: Option<Option<u8>>,
    pub explicit_content_filter: Option<Option<u8>>,
    pub afk_channel_id: Option<Option<String>>,
    pub afk_timeout: Option<u32>,
    pub icon: Option<Option<String>>,
    /// Transfers the guild, the current user must be the owner.
    pub owner_id: Option<String>,
    pub splash: Option<Option<String>>,
    pub discovery_splash: Option<Option<String>>,
    pub banner: Option<Option<String>>,
    pub system_channel_id: Option<Option<String>>,
    pub system_channel_flags: Option<u64>,
    pub rules_channel_id: Option<Option<String>>,
    pub public_updates_channel_id: Option<Option<String>>,
    pub preferred_locale: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub description: Option<Option<String>>,
    pub premium_progress_bar_enabled: Option<bool>,
}

impl ModifyGuild {
    /// Sets the [name][ModifyGuild::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [verification_level][ModifyGuild::verification_level] field.
    pub fn set_verification_level(mut self, v: u8) -> Self {
        self.verification_level = Some(Some(v));
        self
    }

    /// Sends `null` for the [verification_level][ModifyGuild::verification_level] field, clearing its value.
    pub fn clear_verification_level(mut self) -> Self {
        self.verification_level = Some(None);
        self
    }

    /// Sets the [default_message_notifications][ModifyGuild::default_message_notifications] field.
    pub fn set_default_message_notifications(mut self, v: u8) -> Self {
        self.default_message_notifications = Some(Some(v));
        self
    }

    /// Sends `null` for the [default_message_notifications][ModifyGuild::default_message_notifications] field, clearing its value.
    pub fn clear_default_message_notifications(mut self) -> Self {
        self.default_message_notifications = Some(None);
        self
    }

    /// Sets the [explicit_content_filter][ModifyGuild::explicit_content_filter] field.
    pub fn set_explicit_content_filter(mut self, v: u8) -> Self {
        self.explicit_content_filter = Some(Some(v));
        self
    }

    /// Sends `null` for the [explicit_content_filter][ModifyGuild::explicit_content_filter] field, clearing its value.
    pub fn clear_explicit_content_filter(mut self) -> Self {
        self.explicit_content_filter = Some(None);
        self
    }

    /// Sets the [afk_channel_id][ModifyGuild::afk_channel_id] field.
    pub fn set_afk_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.afk_channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [afk_channel_id][ModifyGuild::afk_channel_id] field, clearing its value.
    pub fn clear_afk_channel_id(mut self) -> Self {
        self.afk_channel_id = Some(None);
        self
    }

    /// Sets the [afk_timeout][ModifyGuild::afk_timeout] field.
    pub fn set_afk_timeout(mut self, v: u32) -> Self {
        self.afk_timeout = Some(v);
        self
    }

    /// Sets the [icon][ModifyGuild::icon] field.
    pub fn set_icon<T: Into<String>>(mut self, v: T) -> Self {
        self.icon = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [icon][ModifyGuild::icon] field, clearing its value.
    pub fn clear_icon(mut self) -> Self {
        self.icon = Some(None);
        self
    }

    /// Sets the [owner_id][ModifyGuild::owner_id] field.
    pub fn set_owner_id<T: Into<String>>(mut self, v: T) -> Self {
        self.owner_id = Some(v.into());
        self
    }

    /// Sets the [splash][ModifyGuild::splash] field.
    pub fn set_splash<T: Into<String>>(mut self, v: T) -> Self {
        self.splash = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [splash][ModifyGuild::splash] field, clearing its value.
    pub fn clear_splash(mut self) -> Self {
        self.splash = Some(None);
        self
    }

    /// Sets the [discovery_splash][ModifyGuild::discovery_splash] field.
    pub fn set_discovery_splash<T: Into<String>>(mut self, v: T) -> Self {
        self.discovery_splash = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [discovery_splash][ModifyGuild::discovery_splash] field, clearing its value.
    pub fn clear_discovery_splash(mut self) -> Self {
        self.discovery_splash = Some(None);
        self
    }

    /// Sets the [banner][ModifyGuild::banner] field.
    pub fn set_banner<T: Into<String>>(mut self, v: T) -> Self {
        self.banner = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [banner][ModifyGuild::banner] field, clearing its value.
    pub fn clear_banner(mut self) -> Self {
        self.banner = Some(None);
        self
    }

    /// Sets the [system_channel_id][ModifyGuild::system_channel_id] field.
    pub fn set_system_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.system_channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [system_channel_id][ModifyGuild::system_channel_id] field, clearing its value.
    pub fn clear_system_channel_id(mut self) -> Self {
        self.system_channel_id = Some(None);
        self
    }

    /// Sets the [system_channel_flags][ModifyGuild::system_channel_flags] field.
    pub fn set_system_channel_flags(mut self, v: u64) -> Self {
        self.system_channel_flags = Some(v);
        self
    }

    /// Sets the [rules_channel_id][ModifyGuild::rules_channel_id] field.
    pub fn set_rules_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.rules_channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [rules_channel_id][ModifyGuild::rules_channel_id] field, clearing its value.
    pub fn clear_rules_channel_id(mut self) -> Self {
        self.rules_channel_id = Some(None);
        self
    }

    /// Sets the [public_updates_channel_id][ModifyGuild::public_updates_channel_id] field.
    pub fn set_public_updates_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.public_updates_channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [public_updates_channel_id][ModifyGuild::public_updates_channel_id] field, clearing its value.
    pub fn clear_public_updates_channel_id(mut self) -> Self {
        self.public_updates_channel_id = Some(None);
        self
    }

    /// Sets the [preferred_locale][ModifyGuild::preferred_locale] field.
    pub fn set_preferred_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.preferred_locale = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [preferred_locale][ModifyGuild::preferred_locale] field, clearing its value.
    pub fn clear_preferred_locale(mut self) -> Self {
        self.preferred_locale = Some(None);
        self
    }

    /// Sets the [features][ModifyGuild::features] field.
    pub fn set_features<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.features = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the [description][ModifyGuild::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [description][ModifyGuild::description] field, clearing its value.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the [premium_progress_bar_enabled][ModifyGuild::premium_progress_bar_enabled] field.
    pub fn set_premium_progress_bar_enabled(mut self, v: bool) -> Self {
        self.premium_progress_bar_enabled = Some(v);
        self
    }
}

/// The new position of a channel, see [modify_channel_positions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelPosition {
    pub id: String,
    pub position: Option<Option<i32>>,
    /// Syncs the permission overwrites with the new parent.
    pub lock_permissions: Option<bool>,
    pub parent_id: Option<Option<String>>,
}

impl ChannelPosition {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            position: None,
            lock_permissions: None,
            parent_id: None,
        }
    }

    /// Sets the [position][ChannelPosition::position] field.
    pub fn set_position(mut self, v: i32) -> Self {
        self.position = Some(Some(v));
        self
    }

    /// Sends `null` for the [position][ChannelPosition::position] field, clearing its value.
    pub fn clear_position(mut self) -> Self {
        self.position = Some(None);
        self
    }

    /// Sets the [lock_permissions][ChannelPosition::lock_permissions] field.
    pub fn set_lock_permissions(mut self, v: bool) -> Self {
        self.lock_permissions = Some(v);
        self
    }

    /// Sets the [parent_id][ChannelPosition::parent_id] field.
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [parent_id][ChannelPosition::parent_id] field, clearing its value.
    pub fn clear_parent_id(mut self) -> Self {
        self.parent_id = Some(None);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListMembersQuery {
    /// Between 1 and 1000.
    pub limit: Option<u32>,
    /// The highest user id in the previous page.
    pub after: Option<String>,
}

impl ListMembersQuery {
    /// Sets the [limit][ListMembersQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the [after][ListMembersQuery::after] field.
    pub fn set_after<T: Into<String>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }
}

impl ToQuery for ListMembersQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("limit", &self.limit)
            .add("after", &self.after))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchMembersQuery {
    /// Matched against the start of usernames and nicknames.
    pub query: String,
    pub limit: Option<u32>,
}

impl SearchMembersQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Sets the [limit][SearchMembersQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }
}

impl ToQuery for SearchMembersQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("query", &self.query)
            .add("limit", &self.limit))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetBansQuery {
    pub limit: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl GetBansQuery {
    /// Sets the [limit][GetBansQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the [before][GetBansQuery::before] field.
    pub fn set_before<T: Into<String>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets the [after][GetBansQuery::after] field.
    pub fn set_after<T: Into<String>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }
}

impl ToQuery for GetBansQuery {
    fn to_query(&self) -> Result<Query> {
        exclusive(&[
            ("before", self.before.is_some()),
            ("after", self.after.is_some()),
        ])?;
        Ok(Query::new()
            .add("limit", &self.limit)
            .add("before", &self.before)
            .add("after", &self.after))
    }
}

/// The new position of a role, see [modify_role_positions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RolePosition {
    pub id: String,
    pub position: Option<Option<i32>>,
}

impl RolePosition {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            position: None,
        }
    }

    /// Sets the [position][RolePosition::position] field.
    pub fn set_position(mut self, v: i32) -> Self {
        self.position = Some(Some(v));
        self
    }

    /// Sends `null` for the [position][RolePosition::position] field, clearing its value.
    pub fn clear_position(mut self) -> Self {
        self.position = Some(None);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetPruneCountQuery {
    /// Members inactive for this many days. The service default is 7.
    pub days: Option<u32>,
    /// By default members with roles are not counted.
    pub include_roles: Option<Vec<String>>,
}

impl GetPruneCountQuery {
    /// Sets the [days][GetPruneCountQuery::days] field.
    pub fn set_days(mut self, v: u32) -> Self {
        self.days = Some(v);
        self
    }

    /// Sets the [include_roles][GetPruneCountQuery::include_roles] field.
    pub fn set_include_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.include_roles = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl ToQuery for GetPruneCountQuery {
    fn to_query(&self) -> Result<Query> {
        let include_roles = self.include_roles.as_ref().map(|roles| roles.join(","));
        Ok(Query::new()
            .add("days", &self.days)
            .add("include_roles", &include_roles))
    }
}

/// The parameters to prune a guild.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BeginPrune {
    pub days: Option<u32>,
    /// Set to `false` for large guilds.
    pub compute_prune_count: Option<bool>,
    pub include_roles: Option<Vec<String>>,
}

impl BeginPrune {
    /// Sets the [days][BeginPrune::days] field.
    pub fn set_days(mut self, v: u32) -> Self {
        self.days = Some(v);
        self
    }

    /// Sets the [compute_prune_count][BeginPrune::compute_prune_count] field.
    pub fn set_compute_prune_count(mut self, v: bool) -> Self {
        self.compute_prune_count = Some(v);
        self
    }

    /// Sets the [include_roles][BeginPrune::include_roles] field.
    pub fn set_include_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.include_roles = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The parameters to create a guild from a template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateFromTemplate {
    pub name: String,
    pub icon: Option<String>,
}

impl CreateFromTemplate {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }

    /// Sets the [icon][CreateFromTemplate::icon] field.
    pub fn set_icon<T: Into<String>>(mut self, v: T) -> Self {
        self.icon = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListScheduledEventsQuery {
    pub with_user_count: Option<bool>,
}

impl ListScheduledEventsQuery {
    /// Sets the [with_user_count][ListScheduledEventsQuery::with_user_count] field.
    pub fn set_with_user_count(mut self, v: bool) -> Self {
        self.with_user_count = Some(v);
        self
    }
}

impl ToQuery for ListScheduledEventsQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new().add("with_user_count", &self.with_user_count))
    }
}

pub fn get_audit_log(
    guild_id: &str,
    params: Option<&GetAuditLogQuery>,
) -> Result<Action<Value>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[GUILDS, guild_id, AUDIT_LOGS],
        query.as_ref(),
        None,
    )
}

pub fn list_emojis(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, EMOJIS], None, None)
}

/// Creates a guild owned by the current user.
///
/// The service limits this operation to bots in fewer than 10 guilds.
pub fn create(params: &CreateGuild) -> Result<Action<Value>> {
    action(Method::Post, &[GUILDS], None, body(params)?)
}

pub fn get(guild_id: &str, params: Option<&GetGuildQuery>) -> Result<Action<Value>> {
    let query = query(params)?;
    action(Method::Get, &[GUILDS, guild_id], query.as_ref(), None)
}

/// Fetches the public preview of a guild, the current user need not be a
/// member if the guild is discoverable.
pub fn get_preview(guild_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[GUILDS, guild_id, PREVIEW], None, None)
}

pub fn modify(guild_id: &str, params: &ModifyGuild) -> Result<Action<Value>> {
    action(Method::Patch, &[GUILDS, guild_id], None, body(params)?)
}

pub fn delete(guild_id: &str) -> Result<Action<()>> {
    action(Method::Delete, &[GUILDS, guild_id], None, None)
}

pub fn get_channels(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, CHANNELS], None, None)
}

/// Moves several channels in a single request.
///
/// The payload is the array of positions, in the order given.
pub fn modify_channel_positions(
    guild_id: &str,
    positions: &[ChannelPosition],
) -> Result<Action<()>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, CHANNELS],
        None,
        body(positions)?,
    )
}

/// Lists the active threads of the guild, and the current user's membership
/// in each of them.
pub fn list_active_threads(guild_id: &str) -> Result<Action<ThreadList>> {
    action(
        Method::Get,
        &[GUILDS, guild_id, THREADS, ACTIVE],
        None,
        None,
    )
}

pub fn list_members(
    guild_id: &str,
    params: Option<&ListMembersQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[GUILDS, guild_id, MEMBERS],
        query.as_ref(),
        None,
    )
}

/// Finds members whose username or nickname starts with a prefix.
pub fn search_members(guild_id: &str, params: &SearchMembersQuery) -> Result<Action<Vec<Value>>> {
    let query = params.to_query()?;
    action(
        Method::Get,
        &[GUILDS, guild_id, MEMBERS, SEARCH],
        Some(&query),
        None,
    )
}

/// Lists the bans of a guild.
///
/// At most one of `before` and `after` may be set.
pub fn get_bans(guild_id: &str, params: Option<&GetBansQuery>) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(Method::Get, &[GUILDS, guild_id, BANS], query.as_ref(), None)
}

pub fn get_roles(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, ROLES], None, None)
}

/// Reorders the roles of a guild and returns all its roles.
pub fn modify_role_positions(
    guild_id: &str,
    positions: &[RolePosition],
) -> Result<Action<Vec<Value>>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, ROLES],
        None,
        body(positions)?,
    )
}

/// Returns the number of members that [prune] would remove.
pub fn get_prune_count(
    guild_id: &str,
    params: Option<&GetPruneCountQuery>,
) -> Result<Action<PruneCount>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[GUILDS, guild_id, PRUNE],
        query.as_ref(),
        None,
    )
}

/// Removes inactive members.
///
/// Without parameters the service uses its defaults and no body is sent. The
/// response count is `None` when `compute_prune_count` is `false`.
pub fn prune(guild_id: &str, params: Option<&BeginPrune>) -> Result<Action<PruneCount>> {
    action(
        Method::Post,
        &[GUILDS, guild_id, PRUNE],
        None,
        optional_body(params)?,
    )
}

pub fn get_voice_regions(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, REGIONS], None, None)
}

pub fn get_invites(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, INVITES], None, None)
}

pub fn get_integrations(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, INTEGRATIONS], None, None)
}

pub fn delete_integration(guild_id: &str, integration_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, INTEGRATIONS, integration_id],
        None,
        None,
    )
}

pub fn get_vanity_url(guild_id: &str) -> Result<Action<VanityUrl>> {
    action(Method::Get, &[GUILDS, guild_id, VANITY_URL], None, None)
}

/// Creates a new guild from a template.
pub fn create_from_template(
    template_code: &str,
    params: &CreateFromTemplate,
) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[GUILDS, TEMPLATES, template_code],
        None,
        body(params)?,
    )
}

pub fn get_templates(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, TEMPLATES], None, None)
}

pub fn get_webhooks(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, WEBHOOKS], None, None)
}

pub fn list_stickers(guild_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[GUILDS, guild_id, STICKERS], None, None)
}

pub fn list_scheduled_events(
    guild_id: &str,
    params: Option<&ListScheduledEventsQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[GUILDS, guild_id, SCHEDULED_EVENTS],
        query.as_ref(),
        None,
    )
}
