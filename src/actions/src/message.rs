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

//! Messages in a channel, and their reactions.
//!
//! Emoji are path segments: unicode emoji and custom emoji (`name:id`) are
//! percent-encoded before they are added to the path.

use crate::model::{AllowedMentions, MessageReference};
use crate::paths::{CHANNELS, CROSSPOST, MESSAGES, PINS, REACTIONS};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::path::encode_segment;
use base::query::{Query, ToQuery};
use serde::Serialize;
use serde_json::Value;

/// The parameters to post a message.
///
/// At least one of `content`, `embeds`, or `components` is required by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateMessage {
    /// Up to 2000 characters.
    pub content: Option<String>,
    /// Used to verify that the message was sent.
    pub nonce: Option<String>,
    pub tts: Option<bool>,
    pub embeds: Option<Vec<Value>>,
    pub allowed_mentions: Option<AllowedMentions>,
    /// Makes the message a reply.
    pub message_reference: Option<MessageReference>,
    pub components: Option<Vec<Value>>,
    pub flags: Option<u64>,
}

impl CreateMessage {
    /// Sets the [content][CreateMessage::content] field.
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }

    /// Sets the [nonce][CreateMessage::nonce] field.
    pub fn set_nonce<T: Into<String>>(mut self, v: T) -> Self {
        self.nonce = Some(v.into());
        self
    }

    /// Sets the [tts][CreateMessage::tts] field.
    pub fn set_tts(mut self, v: bool) -> Self {
        self.tts = Some(v);
        self
    }

    /// Sets the [embeds][CreateMessage::embeds] field.
    pub fn set_embeds<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.embeds = Some(v.into_iter().collect());
        self
    }

    /// Sets the [allowed_mentions][CreateMessage::allowed_mentions] field.
    pub fn set_allowed_mentions(mut self, v: AllowedMentions) -> Self {
        self.allowed_mentions = Some(v);
        self
    }

    /// Sets the [message_reference][CreateMessage::message_reference] field.
    pub fn set_message_reference(mut self, v: MessageReference) -> Self {
        self.message_reference = Some(v);
        self
    }

    /// Sets the [components][CreateMessage::components] field.
    pub fn set_components<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.components = Some(v.into_iter().collect());
        self
    }

    /// Sets the [flags][CreateMessage::flags] field.
    pub fn set_flags(mut self, v: u64) -> Self {
        self.flags = Some(v);
        self
    }
}

/// The parameters to edit a message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EditMessage {
    pub content: Option<String>,
    pub embeds: Option<Vec<Value>>,
    pub flags: Option<u64>,
    pub allowed_mentions: Option<AllowedMentions>,
    pub components: Option<Vec<Value>>,
    /// The attachments to keep.
    pub attachments: Option<Vec<Value>>,
}

impl EditMessage {
    /// Sets the [content][EditMessage::content] field.
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }

    /// Sets the [embeds][EditMessage::embeds] field.
    pub fn set_embeds<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.embeds = Some(v.into_iter().collect());
        self
    }

    /// Sets the [flags][EditMessage::flags] field.
    pub fn set_flags(mut self, v: u64) -> Self {
        self.flags = Some(v);
        self
    }

    /// Sets the [allowed_mentions][EditMessage::allowed_mentions] field.
    pub fn set_allowed_mentions(mut self, v: AllowedMentions) -> Self {
        self.allowed_mentions = Some(v);
        self
    }

    /// Sets the [components][EditMessage::components] field.
    pub fn set_components<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.components = Some(v.into_iter().collect());
        self
    }

    /// Sets the [attachments][EditMessage::attachments] field.
    pub fn set_attachments<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.attachments = Some(v.into_iter().collect());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetReactionsQuery {
    /// Only users after this user id.
    pub after: Option<String>,
    pub limit: Option<u32>,
}

impl GetReactionsQuery {
    /// Sets the [after][GetReactionsQuery::after] field.
    pub fn set_after<T: Into<String>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }

    /// Sets the [limit][GetReactionsQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }
}

impl ToQuery for GetReactionsQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("after", &self.after)
            .add("limit", &self.limit))
    }
}

pub fn get(channel_id: &str, message_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[CHANNELS, channel_id, MESSAGES, message_id],
        None,
        None,
    )
}

/// Posts a message to a channel.
///
/// # Example
/// ```
/// use discord_actions::message::{self, CreateMessage};
/// use discord_actions::model::AllowedMentions;
/// # fn main() -> discord_actions::Result<()> {
/// let params = CreateMessage::default()
///     .set_content("hello @everyone")
///     .set_allowed_mentions(AllowedMentions::none());
/// let action = message::create("123", &params)?;
/// assert_eq!(action.descriptor().to_string(), "POST channels/123/messages");
/// # Ok(()) }
/// ```
pub fn create(channel_id: &str, params: &CreateMessage) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, MESSAGES],
        None,
        body(params)?,
    )
}

/// Publishes a message in a news channel to the following channels.
pub fn crosspost(channel_id: &str, message_id: &str) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, MESSAGES, message_id, CROSSPOST],
        None,
        None,
    )
}

pub fn delete(channel_id: &str, message_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, channel_id, MESSAGES, message_id],
        None,
        None,
    )
}

pub fn edit(channel_id: &str, message_id: &str, params: &EditMessage) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[CHANNELS, channel_id, MESSAGES, message_id],
        None,
        body(params)?,
    )
}

pub fn pin(channel_id: &str, message_id: &str) -> Result<Action<()>> {
    action(
        Method::Put,
        &[CHANNELS, channel_id, PINS, message_id],
        None,
        None,
    )
}

pub fn unpin(channel_id: &str, message_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, channel_id, PINS, message_id],
        None,
        None,
    )
}

/// Lists the users that reacted with `emoji`.
pub fn get_reactions(
    channel_id: &str,
    message_id: &str,
    emoji: &str,
    params: Option<&GetReactionsQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    let emoji = encode_segment(emoji);
    action(
        Method::Get,
        &[
            CHANNELS,
            channel_id,
            MESSAGES,
            message_id,
            REACTIONS,
            emoji.as_str(),
        ],
        query.as_ref(),
        None,
    )
}

pub fn delete_all_reactions(channel_id: &str, message_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[CHANNELS, channel_id, MESSAGES, message_id, REACTIONS],
        None,
        None,
    )
}

pub fn delete_all_reactions_for_emoji(
    channel_id: &str,
    message_id: &str,
    emoji: &str,
) -> Result<Action<()>> {
    let emoji = encode_segment(emoji);
    action(
        Method::Delete,
        &[
            CHANNELS,
            channel_id,
            MESSAGES,
            message_id,
            REACTIONS,
            emoji.as_str(),
        ],
        None,
        None,
    )
}
