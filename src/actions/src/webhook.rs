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

//! Webhooks, and the messages sent through them.
//!
//! Operations with a `webhook_token` do not require the bot to be
//! authenticated, the token in the path is the credential.

use crate::model::AllowedMentions;
use crate::paths::{CHANNELS, GITHUB, MESSAGES, SLACK, WEBHOOKS};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::query::{Query, ToQuery};
use serde::Serialize;
use serde_json::Value;

/// The parameters to create a webhook.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateWebhook {
    /// Up to 80 characters.
    pub name: String,
    /// A base64 encoded image.
    pub avatar: Option<Option<String>>,
}

impl CreateWebhook {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    /// Sets the [avatar][CreateWebhook::avatar] field.
    pub fn set_avatar<T: Into<String>>(mut self, v: T) -> Self {
        self.avatar = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [avatar][CreateWebhook::avatar] field, clearing its value.
    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Some(None);
        self
    }
}

/// The parameters to modify a webhook.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyWebhook {
    pub name: Option<String>,
    pub avatar: Option<Option<String>>,
    /// Moves the webhook to this channel.
    pub channel_id: Option<String>,
}

impl ModifyWebhook {
    /// Sets the [name][ModifyWebhook::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [avatar][ModifyWebhook::avatar] field.
    pub fn set_avatar<T: Into<String>>(mut self, v: T) -> Self {
        self.avatar = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [avatar][ModifyWebhook::avatar] field, clearing its value.
    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Some(None);
        self
    }

    /// Sets the [channel_id][ModifyWebhook::channel_id] field.
    pub fn set_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.channel_id = Some(v.into());
        self
    }
}

/// The parameters to modify a webhook using its token.
///
/// The channel of a webhook cannot be changed with a token.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyWebhookWithToken {
    pub name: Option<String>,
    pub avatar: Option<Option<String>>,
}

impl ModifyWebhookWithToken {
    /// Sets the [name][ModifyWebhookWithToken::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [avatar][ModifyWebhookWithToken::avatar] field.
    pub fn set_avatar<T: Into<String>>(mut self, v: T) -> Self {
        self.avatar = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [avatar][ModifyWebhookWithToken::avatar] field, clearing its value.
    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Some(None);
        self
    }
}

/// The message sent when a webhook is executed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecuteWebhook {
    pub content: Option<String>,
    /// Overrides the default username of the webhook.
    pub username: Option<String>,
    /// Overrides the default avatar of the webhook.
    pub avatar_url: Option<String>,
    pub tts: Option<bool>,
    pub embeds: Option<Vec<Value>>,
    pub allowed_mentions: Option<AllowedMentions>,
    pub components: Option<Vec<Value>>,
    pub flags: Option<u64>,
    /// Creates a thread, only for webhooks in forum channels.
    pub thread_name: Option<String>,
}

impl ExecuteWebhook {
    /// Sets the [content][ExecuteWebhook::content] field.
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }

    /// Sets the [username][ExecuteWebhook::username] field.
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets the [avatar_url][ExecuteWebhook::avatar_url] field.
    pub fn set_avatar_url<T: Into<String>>(mut self, v: T) -> Self {
        self.avatar_url = Some(v.into());
        self
    }

    /// Sets the [tts][ExecuteWebhook::tts] field.
    pub fn set_tts(mut self, v: bool) -> Self {
        self.tts = Some(v);
        self
    }

    /// Sets the [embeds][ExecuteWebhook::embeds] field.
    pub fn set_embeds<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.embeds = Some(v.into_iter().collect());
        self
    }

    /// Sets the [allowed_mentions][ExecuteWebhook::allowed_mentions] field.
    pub fn set_allowed_mentions(mut self, v: AllowedMentions) -> Self {
        self.allowed_mentions = Some(v);
        self
    }

    /// Sets the [components][ExecuteWebhook::components] field.
    pub fn set_components<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.components = Some(v.into_iter().collect());
        self
    }

    /// Sets the [flags][ExecuteWebhook::flags] field.
    pub fn set_flags(mut self, v: u64) -> Self {
        self.flags = Some(v);
        self
    }

    /// Sets the [thread_name][ExecuteWebhook::thread_name] field.
    pub fn set_thread_name<T: Into<String>>(mut self, v: T) -> Self {
        self.thread_name = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecuteWebhookQuery {
    /// Waits for the message to be saved, and returns it.
    pub wait: Option<bool>,
    /// Sends the message to this thread of the webhook's channel.
    pub thread_id: Option<String>,
}

impl ExecuteWebhookQuery {
    /// Sets the [wait][ExecuteWebhookQuery::wait] field.
    pub fn set_wait(mut self, v: bool) -> Self {
        self.wait = Some(v);
        self
    }

    /// Sets the [thread_id][ExecuteWebhookQuery::thread_id] field.
    pub fn set_thread_id<T: Into<String>>(mut self, v: T) -> Self {
        self.thread_id = Some(v.into());
        self
    }
}

impl ToQuery for ExecuteWebhookQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new()
            .add("wait", &self.wait)
            .add("thread_id", &self.thread_id))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebhookMessageQuery {
    /// The thread that contains the message.
    pub thread_id: Option<String>,
}

impl WebhookMessageQuery {
    /// Sets the [thread_id][WebhookMessageQuery::thread_id] field.
    pub fn set_thread_id<T: Into<String>>(mut self, v: T) -> Self {
        self.thread_id = Some(v.into());
        self
    }
}

impl ToQuery for WebhookMessageQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new().add("thread_id", &self.thread_id))
    }
}

/// The parameters to edit a message sent by a webhook.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EditWebhookMessage {
    pub content: Option<Option<String>>,
    pub embeds: Option<Option<Vec<Value>>>,
    pub allowed_mentions: Option<Option<AllowedMentions>>,
    pub components: Option<Option<Vec<Value>>>,
    pub attachments: Option<Option<Vec<Value>>>,
}

impl EditWebhookMessage {
    /// Sets the [content][EditWebhookMessage::content] field.
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [content][EditWebhookMessage::content] field, clearing its value.
    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    /// Sets the [embeds][EditWebhookMessage::embeds] field.
    pub fn set_embeds<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.embeds = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [embeds][EditWebhookMessage::embeds] field, clearing its value.
    pub fn clear_embeds(mut self) -> Self {
        self.embeds = Some(None);
        self
    }

    /// Sets the [allowed_mentions][EditWebhookMessage::allowed_mentions] field.
    pub fn set_allowed_mentions(mut self, v: AllowedMentions) -> Self {
        self.allowed_mentions = Some(Some(v));
        self
    }

    /// Sends `null` for the [allowed_mentions][EditWebhookMessage::allowed_mentions] field, clearing its value.
    pub fn clear_allowed_mentions(mut self) -> Self {
        self.allowed_mentions = Some(None);
        self
    }

    /// Sets the [components][EditWebhookMessage::components] field.
    pub fn set_components<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.components = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [components][EditWebhookMessage::components] field, clearing its value.
    pub fn clear_components(mut self) -> Self {
        self.components = Some(None);
        self
    }

    /// Sets the [attachments][EditWebhookMessage::attachments] field.
    pub fn set_attachments<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.attachments = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [attachments][EditWebhookMessage::attachments] field, clearing its value.
    pub fn clear_attachments(mut self) -> Self {
        self.attachments = Some(None);
        self
    }
}

pub fn create(channel_id: &str, params: &CreateWebhook) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[CHANNELS, channel_id, WEBHOOKS],
        None,
        body(params)?,
    )
}

pub fn get(webhook_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[WEBHOOKS, webhook_id], None, None)
}

/// Fetches a webhook, the response does not include the `user` field.
pub fn get_with_token(webhook_id: &str, webhook_token: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[WEBHOOKS, webhook_id, webhook_token],
        None,
        None,
    )
}

pub fn modify(webhook_id: &str, params: &ModifyWebhook) -> Result<Action<Value>> {
    action(Method::Patch, &[WEBHOOKS, webhook_id], None, body(params)?)
}

pub fn modify_with_token(
    webhook_id: &str,
    webhook_token: &str,
    params: &ModifyWebhookWithToken,
) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[WEBHOOKS, webhook_id, webhook_token],
        None,
        body(params)?,
    )
}

pub fn delete(webhook_id: &str) -> Result<Action<()>> {
    action(Method::Delete, &[WEBHOOKS, webhook_id], None, None)
}

pub fn delete_with_token(webhook_id: &str, webhook_token: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[WEBHOOKS, webhook_id, webhook_token],
        None,
        None,
    )
}

/// Posts a message through the webhook.
///
/// The response is the created message when `wait` is `true`, and `None`
/// otherwise.
pub fn execute(
    webhook_id: &str,
    webhook_token: &str,
    params: &ExecuteWebhook,
    query_params: Option<&ExecuteWebhookQuery>,
) -> Result<Action<Option<Value>>> {
    let query = query(query_params)?;
    action(
        Method::Post,
        &[WEBHOOKS, webhook_id, webhook_token],
        query.as_ref(),
        body(params)?,
    )
}

/// Executes a Slack-compatible webhook.
pub fn execute_slack(
    webhook_id: &str,
    webhook_token: &str,
    params: Option<&ExecuteWebhookQuery>,
) -> Result<Action<Option<Value>>> {
    let query = query(params)?;
    action(
        Method::Post,
        &[WEBHOOKS, webhook_id, webhook_token, SLACK],
        query.as_ref(),
        None,
    )
}

/// Executes a GitHub-compatible webhook.
pub fn execute_github(
    webhook_id: &str,
    webhook_token: &str,
    params: Option<&ExecuteWebhookQuery>,
) -> Result<Action<Option<Value>>> {
    let query = query(params)?;
    action(
        Method::Post,
        &[WEBHOOKS, webhook_id, webhook_token, GITHUB],
        query.as_ref(),
        None,
    )
}

/// Fetches a message previously sent by the webhook.
pub fn get_message(
    webhook_id: &str,
    webhook_token: &str,
    message_id: &str,
    params: Option<&WebhookMessageQuery>,
) -> Result<Action<Value>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[WEBHOOKS, webhook_id, webhook_token, MESSAGES, message_id],
        query.as_ref(),
        None,
    )
}

pub fn edit_message(
    webhook_id: &str,
    webhook_token: &str,
    message_id: &str,
    params: &EditWebhookMessage,
    query_params: Option<&WebhookMessageQuery>,
) -> Result<Action<Value>> {
    let query = query(query_params)?;
    action(
        Method::Patch,
        &[WEBHOOKS, webhook_id, webhook_token, MESSAGES, message_id],
        query.as_ref(),
        body(params)?,
    )
}

pub fn delete_message(
    webhook_id: &str,
    webhook_token: &str,
    message_id: &str,
    params: Option<&WebhookMessageQuery>,
) -> Result<Action<()>> {
    let query = query(params)?;
    action(
        Method::Delete,
        &[WEBHOOKS, webhook_id, webhook_token, MESSAGES, message_id],
        query.as_ref(),
        None,
    )
}
