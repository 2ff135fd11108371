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

//! Guild members.
//!
//! To list or search the members of a guild see
//! [guild::list_members][crate::guild::list_members].

use crate::paths::{GUILDS, ME, MEMBERS, ROLES};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to add a user to a guild.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddMember {
    /// An OAuth2 access token of the user, with the `guilds.join` scope.
    pub access_token: String,
    pub nick: Option<String>,
    pub roles: Option<Vec<String>>,
    pub mute: Option<bool>,
    pub deaf: Option<bool>,
}

impl AddMember {
    pub fn new<T: Into<String>>(access_token: T) -> Self {
        Self {
            access_token: access_token.into(),
            nick: None,
            roles: None,
            mute: None,
            deaf: None,
        }
    }

    /// Sets the [nick][AddMember::nick] field.
    pub fn set_nick<T: Into<String>>(mut self, v: T) -> Self {
        self.nick = Some(v.into());
        self
    }

    /// Sets the [roles][AddMember::roles] field.
    pub fn set_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.roles = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the [mute][AddMember::mute] field.
    pub fn set_mute(mut self, v: bool) -> Self {
        self.mute = Some(v);
        self
    }

    /// Sets the [deaf][AddMember::deaf] field.
    pub fn set_deaf(mut self, v: bool) -> Self {
        self.deaf = Some(v);
        self
    }
}

/// The parameters to modify a guild member.
///
/// Fields set to `null`, with the `clear_*()` functions, reset the setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyMember {
    pub nick: Option<Option<String>>,
    pub roles: Option<Option<Vec<String>>>,
    pub mute: Option<Option<bool>>,
    pub deaf: Option<Option<bool>>,
    /// Moves the member to another voice channel, `null` disconnects them.
    pub channel_id: Option<Option<String>>,
    /// An ISO8601 timestamp, the member is timed out until then.
    pub communication_disabled_until: Option<Option<String>>,
}

impl ModifyMember {
    /// Sets the [nick][ModifyMember::nick] field.
    pub fn set_nick<T: Into<String>>(mut self, v: T) -> Self {
        self.nick = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [nick][ModifyMember::nick] field, clearing its value.
    pub fn clear_nick(mut self) -> Self {
        self.nick = Some(None);
        self
    }

    /// Sets the [roles][ModifyMember::roles] field.
    pub fn set_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.roles = Some(Some(v.into_iter().map(|i| i.into()).collect()));
        self
    }

    /// Sends `null` for the [roles][ModifyMember::roles] field, clearing its value.
    pub fn clear_roles(mut self) -> Self {
        self.roles = Some(None);
        self
    }

    /// Sets the [mute][ModifyMember::mute] field.
    pub fn set_mute(mut self, v: bool) -> Self {
        self.mute = Some(Some(v));
        self
    }

    /// Sends `null` for the [mute][ModifyMember::mute] field, clearing its value.
    pub fn clear_mute(mut self) -> Self {
        self.mute = Some(None);
        self
    }

    /// Sets the [deaf][ModifyMember::deaf] field.
    pub fn set_deaf(mut self, v: bool) -> Self {
        self.deaf = Some(Some(v));
        self
    }

    /// Sends `null` for the [deaf][ModifyMember::deaf] field, clearing its value.
    pub fn clear_deaf(mut self) -> Self {
        self.deaf = Some(None);
        self
    }

    /// Sets the [channel_id][ModifyMember::channel_id] field.
    pub fn set_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [channel_id][ModifyMember::channel_id] field, clearing its value.
    pub fn clear_channel_id(mut self) -> Self {
        self.channel_id = Some(None);
        self
    }

    /// Sets the [communication_disabled_until][ModifyMember::communication_disabled_until] field.
    pub fn set_communication_disabled_until<T: Into<String>>(mut self, v: T) -> Self {
        self.communication_disabled_until = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [communication_disabled_until][ModifyMember::communication_disabled_until] field, clearing its value.
    pub fn clear_communication_disabled_until(mut self) -> Self {
        self.communication_disabled_until = Some(None);
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyCurrentMember {
    pub nick: Option<Option<String>>,
}

impl ModifyCurrentMember {
    /// Sets the [nick][ModifyCurrentMember::nick] field.
    pub fn set_nick<T: Into<String>>(mut self, v: T) -> Self {
        self.nick = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [nick][ModifyCurrentMember::nick] field, clearing its value.
    pub fn clear_nick(mut self) -> Self {
        self.nick = Some(None);
        self
    }
}

pub fn get(guild_id: &str, user_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[GUILDS, guild_id, MEMBERS, user_id],
        None,
        None,
    )
}

/// Adds a user to the guild, using their OAuth2 access token.
///
/// The response is `None` if the user was already a member.
pub fn add(guild_id: &str, user_id: &str, params: &AddMember) -> Result<Action<Option<Value>>> {
    action(
        Method::Put,
        &[GUILDS, guild_id, MEMBERS, user_id],
        None,
        body(params)?,
    )
}

pub fn modify(guild_id: &str, user_id: &str, params: &ModifyMember) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, MEMBERS, user_id],
        None,
        body(params)?,
    )
}

/// Modifies the current user's membership, i.e. their nickname.
pub fn modify_current(guild_id: &str, params: &ModifyCurrentMember) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, MEMBERS, ME],
        None,
        body(params)?,
    )
}

pub fn add_role(guild_id: &str, user_id: &str, role_id: &str) -> Result<Action<()>> {
    action(
        Method::Put,
        &[GUILDS, guild_id, MEMBERS, user_id, ROLES, role_id],
        None,
        None,
    )
}

pub fn remove_role(guild_id: &str, user_id: &str, role_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, MEMBERS, user_id, ROLES, role_id],
        None,
        None,
    )
}

/// Kicks a member.
pub fn remove(guild_id: &str, user_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, MEMBERS, user_id],
        None,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::descriptor::Body;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn add_member() -> TestResult {
        let params = AddMember::new("token")
            .set_roles(["3", "4"])
            .set_mute(false);
        let action = add("1", "2", &params)?;
        assert_eq!(action.descriptor().to_string(), "PUT guilds/1/members/2");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({
                "access_token": "token",
                "roles": ["3", "4"],
                "mute": false,
            })))
        );
        Ok(())
    }

    #[test]
    fn modify_member() -> TestResult {
        let params = ModifyMember::default()
            .clear_nick()
            .clear_channel_id()
            .set_communication_disabled_until("2021-12-01T00:00:00Z");
        let action = modify("1", "2", &params)?;
        assert_eq!(action.descriptor().to_string(), "PATCH guilds/1/members/2");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({
                "nick": null,
                "channel_id": null,
                "communication_disabled_until": "2021-12-01T00:00:00Z",
            })))
        );
        Ok(())
    }

    #[test]
    fn modify_current_member() -> TestResult {
        let action = modify_current("1", &ModifyCurrentMember::default().set_nick("bot"))?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH guilds/1/members/@me"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"nick": "bot"})))
        );
        Ok(())
    }

    #[test]
    fn roles() -> TestResult {
        let action = add_role("1", "2", "3")?;
        assert_eq!(
            action.descriptor().to_string(),
            "PUT guilds/1/members/2/roles/3"
        );
        assert_eq!(action.descriptor().body(), None);
        let action = remove_role("1", "2", "3")?;
        assert_eq!(
            action.descriptor().to_string(),
            "DELETE guilds/1/members/2/roles/3"
        );
        Ok(())
    }

    #[test]
    fn get_and_remove() -> TestResult {
        assert_eq!(
            get("1", "2")?.descriptor().to_string(),
            "GET guilds/1/members/2"
        );
        assert_eq!(
            remove("1", "2")?.descriptor().to_string(),
            "DELETE guilds/1/members/2"
        );
        Ok(())
    }
}
