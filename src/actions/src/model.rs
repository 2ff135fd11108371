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

//! Types shared by several resources, and the inline response shapes.
//!
//! Resources returned by the service (guilds, channels, messages, ...) are
//! decoded as [serde_json::Value]. Only the small, operation-specific,
//! responses have dedicated types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Defines an enum that is sent, and received, as its integer value.
macro_rules! integer_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;
            fn try_from(value: u8) -> ::std::result::Result<Self, Self::Error> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(format!("unknown {} value {value}", stringify!($name))),
                }
            }
        }
    };
}
pub(crate) use integer_enum;

integer_enum! {
    /// The kind of a guild channel.
    pub enum ChannelKind {
        Text = 0,
        Voice = 2,
        Category = 4,
        News = 5,
        Stage = 13,
    }
}

impl ChannelKind {
    /// The name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Category => "category",
            Self::News => "news",
            Self::Stage => "stage",
        }
    }
}

integer_enum! {
    /// The kind of thread created by [thread::start][crate::thread::start].
    pub enum ThreadKind {
        NewsThread = 10,
        PublicThread = 11,
        PrivateThread = 12,
    }
}

integer_enum! {
    /// Whether a permission overwrite applies to a role or a member.
    pub enum OverwriteKind {
        Role = 0,
        Member = 1,
    }
}

integer_enum! {
    pub enum VideoQualityMode {
        Auto = 1,
        Full = 2,
    }
}

integer_enum! {
    /// Who can see a stage instance or a scheduled event.
    pub enum PrivacyLevel {
        Public = 1,
        GuildOnly = 2,
    }
}

/// An explicit permission overwrite for a role or a member.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    /// The role or user id.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OverwriteKind,
    /// The permission bit set, as a decimal string.
    pub allow: Option<String>,
    pub deny: Option<String>,
}

impl PermissionOverwrite {
    pub fn new<T: Into<String>>(id: T, kind: OverwriteKind) -> Self {
        Self {
            id: id.into(),
            kind,
            allow: None,
            deny: None,
        }
    }

    /// Sets the [allow][PermissionOverwrite::allow] field.
    pub fn set_allow<T: Into<String>>(mut self, v: T) -> Self {
        self.allow = Some(v.into());
        self
    }

    /// Sets the [deny][PermissionOverwrite::deny] field.
    pub fn set_deny<T: Into<String>>(mut self, v: T) -> Self {
        self.deny = Some(v.into());
        self
    }
}

/// The mention types parsed from the message content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    Roles,
    Users,
    Everyone,
}

/// Controls which mentions in a message trigger notifications.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowedMentions {
    pub parse: Option<Vec<MentionKind>>,
    pub roles: Option<Vec<String>>,
    pub users: Option<Vec<String>>,
    pub replied_user: Option<bool>,
}

impl AllowedMentions {
    /// Allows no mentions at all.
    pub fn none() -> Self {
        Self {
            parse: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Sets the [parse][AllowedMentions::parse] field.
    pub fn set_parse<I: IntoIterator<Item = MentionKind>>(mut self, v: I) -> Self {
        self.parse = Some(v.into_iter().collect());
        self
    }

    /// Sets the [roles][AllowedMentions::roles] field.
    pub fn set_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.roles = Some(v.into_iter().map(|r| r.into()).collect());
        self
    }

    /// Sets the [users][AllowedMentions::users] field.
    pub fn set_users<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.users = Some(v.into_iter().map(|u| u.into()).collect());
        self
    }

    /// Sets the [replied_user][AllowedMentions::replied_user] field.
    pub fn set_replied_user(mut self, v: bool) -> Self {
        self.replied_user = Some(v);
        self
    }
}

/// A reply to, or a crosspost of, an existing message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageReference {
    pub message_id: String,
    pub channel_id: Option<String>,
    pub guild_id: Option<String>,
    pub fail_if_not_exists: Option<bool>,
}

impl MessageReference {
    pub fn new<T: Into<String>>(message_id: T) -> Self {
        Self {
            message_id: message_id.into(),
            ..Default::default()
        }
    }

    /// Sets the [channel_id][MessageReference::channel_id] field.
    pub fn set_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.channel_id = Some(v.into());
        self
    }

    /// Sets the [guild_id][MessageReference::guild_id] field.
    pub fn set_guild_id<T: Into<String>>(mut self, v: T) -> Self {
        self.guild_id = Some(v.into());
        self
    }

    /// Sets the [fail_if_not_exists][MessageReference::fail_if_not_exists] field.
    pub fn set_fail_if_not_exists(mut self, v: bool) -> Self {
        self.fail_if_not_exists = Some(v);
        self
    }
}

/// The response of [guild::get_prune_count][crate::guild::get_prune_count]
/// and [guild::prune][crate::guild::prune].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PruneCount {
    /// `None` when the prune count was not requested.
    pub pruned: Option<u64>,
}

/// The response of [guild::get_vanity_url][crate::guild::get_vanity_url].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VanityUrl {
    pub code: Option<String>,
    pub uses: u64,
}

/// The active threads in a guild.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadList {
    pub threads: Vec<Value>,
    pub members: Vec<Value>,
}

/// A page of archived threads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchivedThreads {
    pub threads: Vec<Value>,
    pub members: Vec<Value>,
    pub has_more: bool,
}

/// The sticker packs available to Nitro subscribers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StickerPackList {
    pub sticker_packs: Vec<Value>,
}

/// The result of an OAuth2 token exchange.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// The lifetime of the access token, in seconds.
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    /// Space separated scopes.
    pub scope: String,
}

/// Information about the current OAuth2 authorization.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationInformation {
    pub application: Value,
    pub scopes: Vec<String>,
    /// When the access token expires, in ISO 8601 format.
    pub expires: String,
    /// Only present when the `identify` scope was granted.
    pub user: Option<Value>,
}
