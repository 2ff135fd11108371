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

//! Reactions added to, or removed from, a message by a single user.
//!
//! To list the users that reacted, or to remove every reaction, see
//! [message::get_reactions][crate::message::get_reactions] and its siblings.

use crate::paths::{CHANNELS, ME, MESSAGES, REACTIONS};
use crate::request::action;
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::path::encode_segment;

/// Reacts to a message as the current user.
///
/// `emoji` is either a unicode emoji or a custom emoji in `name:id` form.
///
/// # Example
/// ```
/// # fn main() -> discord_actions::Result<()> {
/// let action = discord_actions::reaction::add("123", "456", "🔥")?;
/// assert_eq!(
///     action.descriptor().path(),
///     "channels/123/messages/456/reactions/%F0%9F%94%A5/@me"
/// );
/// # Ok(()) }
/// ```
pub fn add(channel_id: &str, message_id: &str, emoji: &str) -> Result<Action<()>> {
    reaction(Method::Put, channel_id, message_id, emoji, ME)
}

pub fn delete_own(channel_id: &str, message_id: &str, emoji: &str) -> Result<Action<()>> {
    reaction(Method::Delete, channel_id, message_id, emoji, ME)
}

/// Removes the reaction of another user.
pub fn delete(
    channel_id: &str,
    message_id: &str,
    emoji: &str,
    user_id: &str,
) -> Result<Action<()>> {
    reaction(Method::Delete, channel_id, message_id, emoji, user_id)
}

fn reaction(
    method: Method,
    channel_id: &str,
    message_id: &str,
    emoji: &str,
    user: &str,
) -> Result<Action<()>> {
    let emoji = encode_segment(emoji);
    action(
        method,
        &[
            CHANNELS,
            channel_id,
            MESSAGES,
            message_id,
            REACTIONS,
            emoji.as_str(),
            user,
        ],
        None,
        None,
    )
}
