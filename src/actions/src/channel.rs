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

//! Guild channels: creation, modification, and the channel-scoped listings.
//!
//! The fields accepted to create or modify a channel depend on its
//! [kind][ChannelKind]. The typed models make illegal combinations
//! unrepresentable: a [VoiceChannel] has no `topic` field. Parameters that
//! arrive as loosely typed JSON are checked against the kind with
//! [CreateChannel::from_fields] and [ModifyChannel::from_fields].
//!
//! # Example
//! ```
//! use discord_actions::channel::{self, CreateChannel, VoiceChannel};
//! # fn main() -> discord_actions::Result<()> {
//! let params = CreateChannel::new("Lounge", VoiceChannel::voice().set_bitrate(64000));
//! let action = channel::create::<serde_json::Value>("42", &params)?;
//! assert_eq!(action.descriptor().path(), "guilds/42/channels");
//! # Ok(()) }
//! ```

use crate::model::{
    ArchivedThreads, ChannelKind, OverwriteKind, PermissionOverwrite, VideoQualityMode,
};
use crate::paths::{
    ARCHIVED, BULK_DELETE, CHANNELS, FOLLOWERS, GUILDS, INVITES, ME, MESSAGES, PERMISSIONS, PINS,
    PRIVATE, PUBLIC, THREADS, TYPING, USERS, WEBHOOKS,
};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::error::{Error, InvalidParameters};
use base::query::{Query, ToQuery};
use base::variant::{VariantTag, exclusive, from_object};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const CREATE_COMMON: &[&str] = &["name", "position", "permission_overwrites"];
const MODIFY_COMMON: &[&str] = CREATE_COMMON;

/// The fields accepted when creating a channel of each kind.
struct CreateShape(ChannelKind);

impl VariantTag for CreateShape {
    fn variant_name(&self) -> &'static str {
        self.0.name()
    }

    fn variant_fields(&self) -> &'static [&'static str] {
        match self.0 {
            ChannelKind::Text | ChannelKind::News => {
                &["topic", "rate_limit_per_user", "parent_id", "nsfw"]
            }
            ChannelKind::Category => &[],
            ChannelKind::Voice | ChannelKind::Stage => &["bitrate", "user_limit", "parent_id"],
        }
    }
}

/// The fields accepted when modifying a channel of each kind.
struct ModifyShape(ChannelKind);

impl VariantTag for ModifyShape {
    fn variant_name(&self) -> &'static str {
        self.0.name()
    }

    fn variant_fields(&self) -> &'static [&'static str] {
        match self.0 {
            ChannelKind::Text | ChannelKind::News => &[
                "type",
                "topic",
                "nsfw",
                "rate_limit_per_user",
                "parent_id",
                "default_auto_archive_duration",
            ],
            ChannelKind::Category => &[],
            ChannelKind::Voice | ChannelKind::Stage => &[
                "bitrate",
                "user_limit",
                "parent_id",
                "rtc_region",
                "video_quality_mode",
            ],
        }
    }
}

/// The parameters to create a guild channel.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateChannel {
    pub name: String,
    /// The sorting position.
    pub position: Option<i32>,
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
    /// The fields that depend on the channel kind.
    #[serde(flatten)]
    pub variant: ChannelVariant,
}

impl CreateChannel {
    pub fn new<T, V>(name: T, variant: V) -> Self
    where
        T: Into<String>,
        V: Into<ChannelVariant>,
    {
        Self {
            name: name.into(),
            position: None,
            permission_overwrites: None,
            variant: variant.into(),
        }
    }

    /// Creates the parameters from loosely typed fields.
    ///
    /// `fields` must be a JSON object. Its keys must be common to all kinds
    /// (`name`, `position`, `permission_overwrites`) or accepted by `kind`.
    /// The `type` key is never accepted, the kind is always given by `kind`.
    ///
    /// # Example
    /// ```
    /// use discord_actions::channel::CreateChannel;
    /// use discord_actions::model::ChannelKind;
    /// use serde_json::json;
    /// let err = CreateChannel::from_fields(ChannelKind::Voice, &json!({"name": "x", "topic": "y"}))
    ///     .unwrap_err();
    /// assert!(err.is_invalid_parameters());
    /// ```
    pub fn from_fields(kind: ChannelKind, fields: &Value) -> Result<Self> {
        let tag = CreateShape(kind);
        let common: CreateCommon = from_object(&tag, CREATE_COMMON, fields)?;
        let variant = match kind {
            ChannelKind::Text | ChannelKind::News => ChannelVariant::Text(TextChannel {
                kind: Some(kind),
                ..from_object(&tag, CREATE_COMMON, fields)?
            }),
            ChannelKind::Category => ChannelVariant::Category(CategoryChannel::new()),
            ChannelKind::Voice | ChannelKind::Stage => ChannelVariant::Voice(VoiceChannel {
                kind: Some(kind),
                ..from_object(&tag, CREATE_COMMON, fields)?
            }),
        };
        tracing::debug!(kind = kind.name(), "converted channel fields");
        Ok(Self {
            name: common.name,
            position: common.position,
            permission_overwrites: common.permission_overwrites,
            variant,
        })
    }

    /// Sets the [position][CreateChannel::position] field.
    pub fn set_position(mut self, v: i32) -> Self {
        self.position = Some(v);
        self
    }

    /// Sets the [permission_overwrites][CreateChannel::permission_overwrites] field.
    pub fn set_permission_overwrites<I>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = PermissionOverwrite>,
    {
        self.permission_overwrites = Some(v.into_iter().collect());
        self
    }

    /// The kind of channel created by these parameters.
    pub fn kind(&self) -> ChannelKind {
        match &self.variant {
            ChannelVariant::Text(t) => t.kind(),
            ChannelVariant::Category(_) => ChannelKind::Category,
            ChannelVariant::Voice(v) => v.kind(),
        }
    }
}

#[derive(Deserialize)]
struct CreateCommon {
    name: String,
    position: Option<i32>,
    permission_overwrites: Option<Vec<PermissionOverwrite>>,
}

/// The kind-dependent fields to create a channel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelVariant {
    /// A text or news channel.
    Text(TextChannel),
    Category(CategoryChannel),
    /// A voice or stage channel.
    Voice(VoiceChannel),
}

impl From<TextChannel> for ChannelVariant {
    fn from(value: TextChannel) -> Self {
        Self::Text(value)
    }
}

impl From<CategoryChannel> for ChannelVariant {
    fn from(value: CategoryChannel) -> Self {
        Self::Category(value)
    }
}

impl From<VoiceChannel> for ChannelVariant {
    fn from(value: VoiceChannel) -> Self {
        Self::Voice(value)
    }
}

/// The fields for text and news channels.
///
/// The service creates a text channel when the kind is not sent, which is
/// what [TextChannel::new] does.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextChannel {
    #[serde(rename = "type", skip_deserializing)]
    kind: Option<ChannelKind>,
    pub topic: Option<String>,
    /// The slow mode delay, in seconds.
    pub rate_limit_per_user: Option<u32>,
    /// The id of the parent category.
    pub parent_id: Option<String>,
    pub nsfw: Option<bool>,
}

impl TextChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A news (announcement) channel.
    pub fn news() -> Self {
        Self {
            kind: Some(ChannelKind::News),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind.unwrap_or(ChannelKind::Text)
    }

    /// Sets the [topic][TextChannel::topic] field.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = Some(v.into());
        self
    }

    /// Sets the [rate_limit_per_user][TextChannel::rate_limit_per_user] field.
    pub fn set_rate_limit_per_user(mut self, v: u32) -> Self {
        self.rate_limit_per_user = Some(v);
        self
    }

    /// Sets the [parent_id][TextChannel::parent_id] field.
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets the [nsfw][TextChannel::nsfw] field.
    pub fn set_nsfw(mut self, v: bool) -> Self {
        self.nsfw = Some(v);
        self
    }
}

/// A category has no fields beyond the common ones.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryChannel {
    #[serde(rename = "type")]
    kind: ChannelKind,
}

impl CategoryChannel {
    pub fn new() -> Self {
        Self {
            kind: ChannelKind::Category,
        }
    }
}

impl Default for CategoryChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// The fields for voice and stage channels.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceChannel {
    #[serde(rename = "type", skip_deserializing)]
    kind: Option<ChannelKind>,
    /// The bitrate, in bits per second.
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub parent_id: Option<String>,
}

impl VoiceChannel {
    pub fn voice() -> Self {
        Self::with_kind(ChannelKind::Voice)
    }

    pub fn stage() -> Self {
        Self::with_kind(ChannelKind::Stage)
    }

    fn with_kind(kind: ChannelKind) -> Self {
        Self {
            kind: Some(kind),
            bitrate: None,
            user_limit: None,
            parent_id: None,
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind.unwrap_or(ChannelKind::Voice)
    }

    /// Sets the [bitrate][VoiceChannel::bitrate] field.
    pub fn set_bitrate(mut self, v: u32) -> Self {
        self.bitrate = Some(v);
        self
    }

    /// Sets the [user_limit][VoiceChannel::user_limit] field.
    pub fn set_user_limit(mut self, v: u32) -> Self {
        self.user_limit = Some(v);
        self
    }

    /// Sets the [parent_id][VoiceChannel::parent_id] field.
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }
}

/// The parameters to modify a guild channel.
///
/// Fields of type `Option<Option<T>>` distinguish "leave unchanged" (`None`)
/// from "reset to the default" (`Some(None)`, sent as `null`).
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyChannel {
    pub name: Option<String>,
    pub position: Option<Option<i32>>,
    pub permission_overwrites: Option<Option<Vec<PermissionOverwrite>>>,
    /// The fields that depend on the channel kind, if any.
    #[serde(flatten)]
    pub variant: Option<ModifyChannelVariant>,
}

impl ModifyChannel {
    /// Creates the parameters from loosely typed fields.
    ///
    /// Works like [CreateChannel::from_fields]. Categories only accept the
    /// common fields.
    pub fn from_fields(kind: ChannelKind, fields: &Value) -> Result<Self> {
        let tag = ModifyShape(kind);
        let common: ModifyCommon = from_object(&tag, MODIFY_COMMON, fields)?;
        let variant = match kind {
            ChannelKind::Text | ChannelKind::News => {
                let mut text: ModifyTextChannel = from_object(&tag, MODIFY_COMMON, fields)?;
                text.kind = conversion(&tag, fields)?;
                Some(ModifyChannelVariant::Text(text))
            }
            ChannelKind::Category => None,
            ChannelKind::Voice | ChannelKind::Stage => Some(ModifyChannelVariant::Voice(
                from_object(&tag, MODIFY_COMMON, fields)?,
            )),
        };
        tracing::debug!(kind = kind.name(), "converted channel fields");
        Ok(Self {
            name: common.name,
            position: common.position,
            permission_overwrites: common.permission_overwrites,
            variant,
        })
    }

    /// Sets the [name][ModifyChannel::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [position][ModifyChannel::position] field.
    pub fn set_position(mut self, v: i32) -> Self {
        self.position = Some(Some(v));
        self
    }

    /// Sends `null` for the [position][ModifyChannel::position] field, clearing its value.
    pub fn clear_position(mut self) -> Self {
        self.position = Some(None);
        self
    }

    /// Sets the [permission_overwrites][ModifyChannel::permission_overwrites] field.
    pub fn set_permission_overwrites<I>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = PermissionOverwrite>,
    {
        self.permission_overwrites = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [permission_overwrites][ModifyChannel::permission_overwrites] field.
    pub fn clear_permission_overwrites(mut self) -> Self {
        self.permission_overwrites = Some(None);
        self
    }

    /// Sets the [variant][ModifyChannel::variant] field.
    pub fn set_variant<V: Into<ModifyChannelVariant>>(mut self, v: V) -> Self {
        self.variant = Some(v.into());
        self
    }
}

/// The kind a text or news channel converts to, if `type` is present.
///
/// Only conversions between text and news channels are accepted.
fn conversion(tag: &ModifyShape, fields: &Value) -> Result<Option<ChannelKind>> {
    let Some(value) = fields.get("type") else {
        return Ok(None);
    };
    let variant = tag.variant_name();
    let target = ChannelKind::deserialize(value).map_err(|source| {
        Error::invalid_parameters(InvalidParameters::Malformed { variant, source })
    })?;
    match target {
        ChannelKind::Text | ChannelKind::News => Ok(Some(target)),
        _ => {
            tracing::warn!(
                field = "type",
                value = target.name(),
                variant,
                "rejected channel conversion"
            );
            Err(Error::invalid_parameters(InvalidParameters::IllegalValue {
                field: "type",
                value: target.name().to_string(),
                variant,
            }))
        }
    }
}

#[derive(Deserialize)]
struct ModifyCommon {
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    position: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    permission_overwrites: Option<Option<Vec<PermissionOverwrite>>>,
}

/// The kind-dependent fields to modify a channel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModifyChannelVariant {
    /// A text or news channel.
    Text(ModifyTextChannel),
    /// A voice or stage channel.
    Voice(ModifyVoiceChannel),
}

impl From<ModifyTextChannel> for ModifyChannelVariant {
    fn from(value: ModifyTextChannel) -> Self {
        Self::Text(value)
    }
}

impl From<ModifyVoiceChannel> for ModifyChannelVariant {
    fn from(value: ModifyVoiceChannel) -> Self {
        Self::Voice(value)
    }
}

/// The fields to modify text and news channels.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifyTextChannel {
    /// Only conversions between text and news channels are supported.
    #[serde(rename = "type", skip_deserializing)]
    kind: Option<ChannelKind>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub topic: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub nsfw: Option<Option<bool>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub rate_limit_per_user: Option<Option<u32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub parent_id: Option<Option<String>>,
    /// In minutes: 60, 1440, 4320, or 10080.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub default_auto_archive_duration: Option<Option<u32>>,
}

impl ModifyTextChannel {
    /// Converts the channel to a news channel.
    pub fn convert_to_news(mut self) -> Self {
        self.kind = Some(ChannelKind::News);
        self
    }

    /// Converts the channel to a text channel.
    pub fn convert_to_text(mut self) -> Self {
        self.kind = Some(ChannelKind::Text);
        self
    }

    /// Sets the [topic][ModifyTextChannel::topic] field.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [topic][ModifyTextChannel::topic] field, clearing its value.
    pub fn clear_topic(mut self) -> Self {
        self.topic = Some(None);
        self
    }

    /// Sets the [nsfw][ModifyTextChannel::nsfw] field.
    pub fn set_nsfw(mut self, v: bool) -> Self {
        self.nsfw = Some(Some(v));
        self
    }

    /// Sets the [rate_limit_per_user][ModifyTextChannel::rate_limit_per_user] field.
    pub fn set_rate_limit_per_user(mut self, v: u32) -> Self {
        self.rate_limit_per_user = Some(Some(v));
        self
    }

    /// Sets the [parent_id][ModifyTextChannel::parent_id] field.
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [parent_id][ModifyTextChannel::parent_id] field, removing the channel from its category.
    pub fn clear_parent_id(mut self) -> Self {
        self.parent_id = Some(None);
        self
    }

    /// Sets the [default_auto_archive_duration][ModifyTextChannel::default_auto_archive_duration] field.
    pub fn set_default_auto_archive_duration(mut self, v: u32) -> Self {
        self.default_auto_archive_duration = Some(Some(v));
        self
    }
}

/// The fields to modify voice and stage channels.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifyVoiceChannel {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub bitrate: Option<Option<u32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub user_limit: Option<Option<u32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub parent_id: Option<Option<String>>,
    /// `null` selects the region automatically.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub rtc_region: Option<Option<String>>,
    pub video_quality_mode: Option<VideoQualityMode>,
}

impl ModifyVoiceChannel {
    /// Sets the [bitrate][ModifyVoiceChannel::bitrate] field.
    pub fn set_bitrate(mut self, v: u32) -> Self {
        self.bitrate = Some(Some(v));
        self
    }

    /// Sets the [user_limit][ModifyVoiceChannel::user_limit] field.
    pub fn set_user_limit(mut self, v: u32) -> Self {
        self.user_limit = Some(Some(v));
        self
    }

    /// Sets the [parent_id][ModifyVoiceChannel::parent_id] field.
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(Some(v.into()));
        self
    }

    /// Sets the [rtc_region][ModifyVoiceChannel::rtc_region] field.
    pub fn set_rtc_region<T: Into<String>>(mut self, v: T) -> Self {
        self.rtc_region = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [rtc_region][ModifyVoiceChannel::rtc_region] field.
    pub fn clear_rtc_region(mut self) -> Self {
        self.rtc_region = Some(None);
        self
    }

    /// Sets the [video_quality_mode][ModifyVoiceChannel::video_quality_mode] field.
    pub fn set_video_quality_mode(mut self, v: VideoQualityMode) -> Self {
        self.video_quality_mode = Some(v);
        self
    }
}

/// The query parameters for [get_messages].
///
/// At most one of `around`, `before`, and `after` may be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetMessagesQuery {
    /// The maximum number of messages, 1 to 100.
    pub limit: Option<u32>,
    pub around: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl GetMessagesQuery {
    /// Sets the [limit][GetMessagesQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the [around][GetMessagesQuery::around] field.
    pub fn set_around<T: Into<String>>(mut self, v: T) -> Self {
        self.around = Some(v.into());
        self
    }

    /// Sets the [before][GetMessagesQuery::before] field.
    pub fn set_before<T: Into<String>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets the [after][GetMessagesQuery::after] field.
    pub fn set_after<T: Into<String>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }
}

impl ToQuery for GetMessagesQuery {
    fn to_query(&self) -> Result<Query> {
        exclusive(&[
            ("around", self.around.is_some()),
            ("before", self.before.is_some()),
            ("after", self.after.is_some()),
        ])?;
        Ok(Query::new()
            .add("limit", &self.limit)
            .add("around", &self.around)
            .add("before", &self.before)
            .add("after", &self.after))
    }
}

/// The messages to delete, 2 to 100 ids.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BulkDeleteMessages {
    pub messages: Vec<String>,
}

impl BulkDeleteMessages {
    pub fn new<I, T>(messages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(|i| i.into()).collect(),
        }
    }
}

/// The parameters for [edit_permissions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditPermissions {
    /// The permission bit set, as a decimal string.
    pub allow: Option<Option<String>>,
    pub deny: Option<Option<String>>,
    #[serde(rename = "type")]
    pub kind: OverwriteKind,
}

impl EditPermissions {
    pub fn new(kind: OverwriteKind) -> Self {
        Self {
            kind,
            allow: None,
            deny: None,
        }
    }

    /// Sets the [allow][EditPermissions::allow] field.
    pub fn set_allow<T: Into<String>>(mut self, v: T) -> Self {
        self.allow = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [allow][EditPermissions::allow] field, clearing its value.
    pub fn clear_allow(mut self) -> Self {
        self.allow = Some(None);
        self
    }

    /// Sets the [deny][EditPermissions::deny] field.
    pub fn set_deny<T: Into<String>>(mut self, v: T) -> Self {
        self.deny = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [deny][EditPermissions::deny] field, clearing its value.
    pub fn clear_deny(mut self) -> Self {
        self.deny = Some(None);
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FollowNews {
    /// The channel that receives the crossposted messages.
    pub webhook_channel_id: String,
}

impl FollowNews {
    pub fn new<T: Into<String>>(webhook_channel_id: T) -> Self {
        Self {
            webhook_channel_id: webhook_channel_id.into(),
        }
    }
}

/// The query parameters for the archived thread listings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArchivedThreadsQuery {
    /// Only threads archived before this ISO 8601 timestamp.
    pub before: Option<String>,
    pub limit: Option<u32>,
}

impl ArchivedThreadsQuery {
    /// Sets the [before][ArchivedThreadsQuery::before] field.
    pub fn set_before<T: Into<String>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets the [limit][ArchivedThreadsQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }
}

impl ToQuery for ArchivedThreadsQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("before", &self.before)
            .add("limit", &self.limit))
    }
}

/// Creates a channel in a guild.
pub fn create<R: DeserializeOwned>(guild_id: &str, params: &CreateChannel) -> Result<Action<R>> {
    action(
        Method::Post,
        &[GUILDS, guild_id, CHANNELS],
        None,
        body(params)?,
    )
}

pub fn get<R: DeserializeOwned>(channel_id: &str) -> Result<Action<R>> {
    action(Method::Get, &[CHANNELS, channel_id], None, None)
}

pub fn modify<R: DeserializeOwned>(channel_id: &str, params: &ModifyChannel) -> Result<Action<R>> {
    action(Method::Patch, &[CHANNELS, channel_id], None, body(params)?)
}

/// Deletes a guild channel, or closes a private message.
pub fn delete<R: DeserializeOwned>(channel_id: &str) -> Result<Action<R>> {
    action(Method::Delete, &[CHANNELS, channel_id], None, None)
}

/// Lists the messages in a channel.
///
/// At most one of the `around`, `before`, and `after` cursors may be set.
pub fn get_messages(
    channel_id: &str,
    params: Option<&GetMessagesQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[CHANNELS, channel_id, MESSAGES],
        query.as_ref(),
        None,
    )
}

pub fn bulk_delete_messages(channel_id: &str, params: &BulkDeleteMessages) -> Result<Action<()>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, MESSAGES, BULK_DELETE],
        None,
        body(params)?,
    )
}

/// Creates or replaces the permission overwrite for a role or member.
pub fn edit_permissions(
    channel_id: &str,
    overwrite_id: &str,
    params: &EditPermissions,
) -> Result<Action<()>> {
    action(
        Method::Put,
        &[CHANNELS, channel_id, PERMISSIONS, overwrite_id],
        None,
        body(params)?,
    )
}

pub fn get_invites(channel_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[CHANNELS, channel_id, INVITES], None, None)
}

pub fn delete_permission(channel_id: &str, overwrite_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, channel_id, PERMISSIONS, overwrite_id],
        None,
        None,
    )
}

/// Follows a news channel, posting its messages to another channel.
pub fn follow_news(channel_id: &str, params: &FollowNews) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, FOLLOWERS],
        None,
        body(params)?,
    )
}

pub fn trigger_typing(channel_id: &str) -> Result<Action<()>> {
    action(Method::Post, &[CHANNELS, channel_id, TYPING], None, None)
}

pub fn get_pinned_messages(channel_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[CHANNELS, channel_id, PINS], None, None)
}

pub fn get_webhooks(channel_id: &str) -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[CHANNELS, channel_id, WEBHOOKS], None, None)
}

pub fn list_public_archived_threads(
    channel_id: &str,
    params: Option<&ArchivedThreadsQuery>,
) -> Result<Action<ArchivedThreads>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[CHANNELS, channel_id, THREADS, ARCHIVED, PUBLIC],
        query.as_ref(),
        None,
    )
}

pub fn list_private_archived_threads(
    channel_id: &str,
    params: Option<&ArchivedThreadsQuery>,
) -> Result<Action<ArchivedThreads>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[CHANNELS, channel_id, THREADS, ARCHIVED, PRIVATE],
        query.as_ref(),
        None,
    )
}

/// Lists the private archived threads the current user has joined.
pub fn list_joined_private_archived_threads(
    channel_id: &str,
    params: Option<&ArchivedThreadsQuery>,
) -> Result<Action<ArchivedThreads>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[CHANNELS, channel_id, USERS, ME, THREADS, ARCHIVED, PRIVATE],
        query.as_ref(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::descriptor::Body;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn json_body<R>(action: &Action<R>) -> Option<&Value> {
        match action.descriptor().body() {
            Some(Body::Json(v)) => Some(v),
            _ => None,
        }
    }

    #[test]
    fn create_text() -> TestResult {
        let text = TextChannel::new().set_topic("hi").set_nsfw(false);
        let params = CreateChannel::new("general", text).set_position(0);
        let action = create::<Value>("42", &params)?;
        assert_eq!(action.descriptor().method(), Method::Post);
        assert_eq!(action.descriptor().path(), "guilds/42/channels");
        assert_eq!(
            json_body(&action),
            Some(&json!({"name": "general", "position": 0, "topic": "hi", "nsfw": false}))
        );
        assert_eq!(params.kind(), ChannelKind::Text);
        Ok(())
    }

    #[test_case(TextChannel::news().into(), json!({"name": "c", "type": 5}), ChannelKind::News)]
    #[test_case(CategoryChannel::new().into(), json!({"name": "c", "type": 4}), ChannelKind::Category)]
    #[test_case(VoiceChannel::voice().set_user_limit(5).into(), json!({"name": "c", "type": 2, "user_limit": 5}), ChannelKind::Voice)]
    #[test_case(VoiceChannel::stage().into(), json!({"name": "c", "type": 13}), ChannelKind::Stage)]
    fn create_variants(variant: ChannelVariant, want: Value, kind: ChannelKind) -> TestResult {
        let params = CreateChannel::new("c", variant);
        assert_eq!(params.kind(), kind);
        assert_eq!(serde_json::to_value(&params)?, want);
        Ok(())
    }

    #[test]
    fn create_with_overwrites() -> TestResult {
        let params = CreateChannel::new("secret", TextChannel::new()).set_permission_overwrites([
            PermissionOverwrite::new("42", OverwriteKind::Role).set_deny("1024"),
        ]);
        assert_eq!(
            serde_json::to_value(&params)?,
            json!({"name": "secret", "permission_overwrites": [{"id": "42", "type": 0, "deny": "1024"}]})
        );
        Ok(())
    }

    #[test]
    fn from_fields_voice() -> TestResult {
        let params = CreateChannel::from_fields(
            ChannelKind::Voice,
            &json!({"name": "Lounge", "bitrate": 64000, "parent_id": "9"}),
        )?;
        assert_eq!(
            params,
            CreateChannel::new(
                "Lounge",
                VoiceChannel::voice().set_bitrate(64000).set_parent_id("9")
            )
        );
        Ok(())
    }

    #[test]
    fn from_fields_news() -> TestResult {
        let params = CreateChannel::from_fields(
            ChannelKind::News,
            &json!({"name": "news", "topic": "releases", "position": 3}),
        )?;
        assert_eq!(params.kind(), ChannelKind::News);
        assert_eq!(
            serde_json::to_value(&params)?,
            json!({"name": "news", "position": 3, "type": 5, "topic": "releases"})
        );
        Ok(())
    }

    #[test_case(ChannelKind::Voice, json!({"name": "x", "topic": "y"}), "topic", "voice")]
    #[test_case(ChannelKind::Stage, json!({"name": "x", "nsfw": true}), "nsfw", "stage")]
    #[test_case(ChannelKind::Text, json!({"name": "x", "bitrate": 8000}), "bitrate", "text")]
    #[test_case(ChannelKind::Category, json!({"name": "x", "parent_id": "1"}), "parent_id", "category")]
    #[test_case(ChannelKind::Text, json!({"name": "x", "type": 2}), "type", "text")]
    fn from_fields_rejected(
        kind: ChannelKind,
        fields: Value,
        want_field: &str,
        want_variant: &str,
    ) {
        let err = CreateChannel::from_fields(kind, &fields).unwrap_err();
        assert!(err.is_invalid_parameters(), "{err:?}");
        match err.as_inner::<InvalidParameters>() {
            Some(InvalidParameters::IllegalField { field, variant }) => {
                assert_eq!(field, want_field);
                assert_eq!(*variant, want_variant);
            }
            e => panic!("unexpected inner error {e:?}"),
        }
    }

    #[test]
    fn from_fields_malformed() {
        let fields = json!({"name": "x", "bitrate": "fast"});
        let err = CreateChannel::from_fields(ChannelKind::Voice, &fields).unwrap_err();
        assert!(
            matches!(
                err.as_inner::<InvalidParameters>(),
                Some(InvalidParameters::Malformed {
                    variant: "voice",
                    ..
                })
            ),
            "{err:?}"
        );
        let err = CreateChannel::from_fields(ChannelKind::Text, &json!({"topic": "no name"}))
            .unwrap_err();
        assert!(err.is_invalid_parameters(), "{err:?}");
        let err = CreateChannel::from_fields(ChannelKind::Text, &json!("general")).unwrap_err();
        assert!(
            matches!(
                err.as_inner::<InvalidParameters>(),
                Some(InvalidParameters::NotAnObject { variant: "text" })
            ),
            "{err:?}"
        );
    }

    #[test]
    fn modify_nullable() -> TestResult {
        let params = ModifyChannel::default()
            .set_name("renamed")
            .clear_position()
            .set_variant(ModifyTextChannel::default().clear_topic().convert_to_news());
        let action = modify::<Value>("7", &params)?;
        assert_eq!(action.descriptor().method(), Method::Patch);
        assert_eq!(action.descriptor().path(), "channels/7");
        assert_eq!(
            json_body(&action),
            Some(&json!({"name": "renamed", "position": null, "type": 5, "topic": null}))
        );
        Ok(())
    }

    #[test]
    fn modify_empty() -> TestResult {
        let action = modify::<Value>("7", &ModifyChannel::default())?;
        assert_eq!(json_body(&action), Some(&json!({})));
        Ok(())
    }

    #[test]
    fn modify_from_fields() -> TestResult {
        let params = ModifyChannel::from_fields(
            ChannelKind::Voice,
            &json!({"rtc_region": null, "video_quality_mode": 2, "position": null}),
        )?;
        assert_eq!(
            params,
            ModifyChannel::default().clear_position().set_variant(
                ModifyVoiceChannel::default()
                    .clear_rtc_region()
                    .set_video_quality_mode(VideoQualityMode::Full)
            )
        );
        assert_eq!(
            serde_json::to_value(&params)?,
            json!({"position": null, "rtc_region": null, "video_quality_mode": 2})
        );

        let params = ModifyChannel::from_fields(
            ChannelKind::Text,
            &json!({"default_auto_archive_duration": 1440}),
        )?;
        assert_eq!(
            params.variant,
            Some(ModifyChannelVariant::Text(
                ModifyTextChannel::default().set_default_auto_archive_duration(1440)
            ))
        );

        let params = ModifyChannel::from_fields(ChannelKind::Category, &json!({"name": "c"}))?;
        assert_eq!(params, ModifyChannel::default().set_name("c"));
        Ok(())
    }

    #[test_case(ChannelKind::Voice, json!({"topic": "y"}), "topic")]
    #[test_case(ChannelKind::Text, json!({"rtc_region": "us-west"}), "rtc_region")]
    #[test_case(ChannelKind::Category, json!({"nsfw": true}), "nsfw")]
    #[test_case(ChannelKind::Voice, json!({"type": 13}), "type")]
    fn modify_from_fields_rejected(kind: ChannelKind, fields: Value, want_field: &str) {
        let err = ModifyChannel::from_fields(kind, &fields).unwrap_err();
        match err.as_inner::<InvalidParameters>() {
            Some(InvalidParameters::IllegalField { field, .. }) => assert_eq!(field, want_field),
            e => panic!("unexpected inner error {e:?}"),
        }
    }

    #[test_case(ChannelKind::Text, 5, ModifyTextChannel::default().convert_to_news())]
    #[test_case(ChannelKind::News, 0, ModifyTextChannel::default().convert_to_text())]
    #[test_case(ChannelKind::Text, 0, ModifyTextChannel::default().convert_to_text())]
    fn modify_from_fields_conversion(
        kind: ChannelKind,
        target: u8,
        want: ModifyTextChannel,
    ) -> TestResult {
        let params = ModifyChannel::from_fields(kind, &json!({"type": target}))?;
        let typed = ModifyChannel::default().set_variant(want);
        assert_eq!(params, typed);
        assert_eq!(serde_json::to_value(&params)?, json!({"type": target}));
        assert_eq!(
            serde_json::to_value(&params)?,
            serde_json::to_value(&typed)?
        );
        Ok(())
    }

    #[test]
    fn modify_from_fields_conversion_rejected() {
        let err = ModifyChannel::from_fields(ChannelKind::Text, &json!({"type": 2})).unwrap_err();
        assert!(err.is_invalid_parameters(), "{err:?}");
        match err.as_inner::<InvalidParameters>() {
            Some(InvalidParameters::IllegalValue {
                field,
                value,
                variant,
            }) => {
                assert_eq!(*field, "type");
                assert_eq!(value, "voice");
                assert_eq!(*variant, "text");
            }
            e => panic!("unexpected inner error {e:?}"),
        }

        let err = ModifyChannel::from_fields(ChannelKind::News, &json!({"type": "text"}))
            .unwrap_err();
        assert!(
            matches!(
                err.as_inner::<InvalidParameters>(),
                Some(InvalidParameters::Malformed {
                    variant: "news",
                    ..
                })
            ),
            "{err:?}"
        );
    }

    #[test]
    fn messages() -> TestResult {
        let action = get_messages("123", Some(&GetMessagesQuery::default().set_limit(50)))?;
        assert_eq!(
            action.descriptor().path_and_query(),
            "channels/123/messages?limit=50"
        );
        let action = get_messages("123", None)?;
        assert_eq!(
            action.descriptor().path_and_query(),
            "channels/123/messages"
        );
        let action = get_messages(
            "123",
            Some(&GetMessagesQuery::default().set_limit(0).set_around("9")),
        )?;
        assert_eq!(action.descriptor().query(), "?limit=0&around=9");
        Ok(())
    }

    #[test_case(GetMessagesQuery::default().set_before("1").set_after("2"), "before", "after")]
    #[test_case(GetMessagesQuery::default().set_around("1").set_before("2"), "around", "before")]
    #[test_case(GetMessagesQuery::default().set_around("1").set_after("2"), "around", "after")]
    fn messages_cursors(params: GetMessagesQuery, want_first: &str, want_second: &str) {
        let err = get_messages("123", Some(&params)).unwrap_err();
        match err.as_inner::<InvalidParameters>() {
            Some(InvalidParameters::MutuallyExclusive { first, second }) => {
                assert_eq!(*first, want_first);
                assert_eq!(*second, want_second);
            }
            e => panic!("unexpected inner error {e:?}"),
        }
    }

    #[test]
    fn permissions() -> TestResult {
        let params = EditPermissions::new(OverwriteKind::Member)
            .set_allow("2048")
            .clear_deny();
        let action = edit_permissions("1", "2", &params)?;
        assert_eq!(action.descriptor().method(), Method::Put);
        assert_eq!(action.descriptor().path(), "channels/1/permissions/2");
        assert_eq!(
            json_body(&action),
            Some(&json!({"allow": "2048", "deny": null, "type": 1}))
        );
        let action = delete_permission("1", "2")?;
        assert_eq!(action.descriptor().method(), Method::Delete);
        assert_eq!(action.descriptor().body(), None);
        Ok(())
    }

    #[test]
    fn bulk_delete() -> TestResult {
        let action = bulk_delete_messages("1", &BulkDeleteMessages::new(["10", "11"]))?;
        assert_eq!(
            action.descriptor().path(),
            "channels/1/messages/bulk-delete"
        );
        assert_eq!(json_body(&action), Some(&json!({"messages": ["10", "11"]})));
        Ok(())
    }

    #[test]
    fn follow() -> TestResult {
        let action = follow_news("1", &FollowNews::new("2"))?;
        assert_eq!(action.descriptor().path(), "channels/1/followers");
        assert_eq!(
            json_body(&action),
            Some(&json!({"webhook_channel_id": "2"}))
        );
        Ok(())
    }

    #[test]
    fn archived_threads() -> TestResult {
        let params = ArchivedThreadsQuery::default()
            .set_before("2021-01-01T00:00:00")
            .set_limit(2);
        let action = list_public_archived_threads("1", Some(&params))?;
        assert_eq!(
            action.descriptor().path_and_query(),
            "channels/1/threads/archived/public?before=2021-01-01T00%3A00%3A00&limit=2"
        );
        let action = list_private_archived_threads("1", None)?;
        assert_eq!(
            action.descriptor().path(),
            "channels/1/threads/archived/private"
        );
        let action = list_joined_private_archived_threads("1", None)?;
        assert_eq!(
            action.descriptor().path(),
            "channels/1/users/@me/threads/archived/private"
        );
        Ok(())
    }

    #[test_case(get::<Value>("1"), Method::Get, "channels/1")]
    #[test_case(delete::<Value>("1"), Method::Delete, "channels/1")]
    #[test_case(get_invites("1"), Method::Get, "channels/1/invites")]
    #[test_case(get_pinned_messages("1"), Method::Get, "channels/1/pins")]
    #[test_case(get_webhooks("1"), Method::Get, "channels/1/webhooks")]
    fn simple<R>(action: Result<Action<R>>, method: Method, path: &str) -> TestResult {
        let action = action?;
        assert_eq!(action.descriptor().method(), method);
        assert_eq!(action.descriptor().path(), path);
        assert_eq!(action.descriptor().query(), "");
        assert_eq!(action.descriptor().body(), None);
        Ok(())
    }

    #[test]
    fn typing() -> TestResult {
        let action = trigger_typing("1")?;
        assert_eq!(action.descriptor().to_string(), "POST channels/1/typing");
        assert_eq!(action.descriptor().body(), None);
        Ok(())
    }

    #[test]
    fn empty_id() {
        let err = get::<Value>("").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }
}
