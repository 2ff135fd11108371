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

//! Users, and the current user's guilds, DMs, and connections.

use crate::paths::{CHANNELS, CONNECTIONS, GUILDS, ME, MEMBER, USERS};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::query::{Query, ToQuery};
use base::variant::exclusive;
use serde::Serialize;
use serde_json::Value;

/// The parameters to modify the current user.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyCurrentUser {
    pub username: Option<String>,
    /// A base64 encoded image, `null` removes the avatar.
    pub avatar: Option<Option<String>>,
}

impl ModifyCurrentUser {
    /// Sets the [username][ModifyCurrentUser::username] field.
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets the [avatar][ModifyCurrentUser::avatar] field.
    pub fn set_avatar<T: Into<String>>(mut self, v: T) -> Self {
        self.avatar = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [avatar][ModifyCurrentUser::avatar] field, clearing its value.
    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Some(None);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetCurrentGuildsQuery {
    pub limit: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl GetCurrentGuildsQuery {
    /// Sets the [limit][GetCurrentGuildsQuery::limit] field.
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the [before][GetCurrentGuildsQuery::before] field.
    pub fn set_before<T: Into<String>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Sets the [after][GetCurrentGuildsQuery::after] field.
    pub fn set_after<T: Into<String>>(mut self, v: T) -> Self {
        self.after = Some(v.into());
        self
    }
}

impl ToQuery for GetCurrentGuildsQuery {
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

/// The parameters to open a DM channel.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateDm {
    pub recipient_id: String,
}

impl CreateDm {
    pub fn new<T: Into<String>>(recipient_id: T) -> Self {
        Self {
            recipient_id: recipient_id.into(),
        }
    }
}

pub fn get_current() -> Result<Action<Value>> {
    action(Method::Get, &[USERS, ME], None, None)
}

pub fn get(user_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[USERS, user_id], None, None)
}

pub fn modify_current(params: &ModifyCurrentUser) -> Result<Action<Value>> {
    action(Method::Patch, &[USERS, ME], None, body(params)?)
}

/// Lists the guilds of the current user.
///
/// At most one of `before` and `after` may be set.
pub fn get_current_guilds(params: Option<&GetCurrentGuildsQuery>) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(Method::Get, &[USERS, ME, GUILDS], query.as_ref(), None)
}

/// Fetches the current user's membership in a guild.
///
/// Requires an OAuth2 token with the `guilds.members.read` scope.
pub fn get_current_member(guild_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[USERS, ME, GUILDS, guild_id, MEMBER],
        None,
        None,
    )
}

pub fn leave_guild(guild_id: &str) -> Result<Action<()>> {
    action(Method::Delete, &[USERS, ME, GUILDS, guild_id], None, None)
}

/// Opens a DM channel with a user, or returns the existing one.
pub fn create_dm(params: &CreateDm) -> Result<Action<Value>> {
    action(Method::Post, &[USERS, ME, CHANNELS], None, body(params)?)
}

pub fn get_connections() -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[USERS, ME, CONNECTIONS], None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::descriptor::Body;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn modify() -> TestResult {
        let params = ModifyCurrentUser::default()
            .set_username("bot")
            .clear_avatar();
        let action = modify_current(&params)?;
        assert_eq!(action.descriptor().to_string(), "PATCH users/@me");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"username": "bot", "avatar": null})))
        );
        Ok(())
    }

    #[test]
    fn guilds() -> TestResult {
        let params = GetCurrentGuildsQuery::default()
            .set_limit(200)
            .set_after("10");
        let action = get_current_guilds(Some(&params))?;
        assert_eq!(
            action.descriptor().path_and_query(),
            "users/@me/guilds?limit=200&after=10"
        );
        Ok(())
    }

    #[test]
    fn guilds_both_cursors() {
        let params = GetCurrentGuildsQuery::default()
            .set_before("1")
            .set_after("2");
        let err = get_current_guilds(Some(&params)).unwrap_err();
        assert!(err.is_invalid_parameters(), "{err:?}");
    }

    #[test]
    fn dm() -> TestResult {
        let action = create_dm(&CreateDm::new("5"))?;
        assert_eq!(action.descriptor().to_string(), "POST users/@me/channels");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"recipient_id": "5"})))
        );
        Ok(())
    }

    #[test_case(get_current(), "GET users/@me")]
    #[test_case(get("5"), "GET users/5")]
    #[test_case(get_current_member("1"), "GET users/@me/guilds/1/member")]
    #[test_case(leave_guild("1"), "DELETE users/@me/guilds/1")]
    #[test_case(get_connections(), "GET users/@me/connections")]
    fn simple<R>(action: Result<Action<R>>, want: &str) -> TestResult {
        assert_eq!(action?.descriptor().to_string(), want);
        Ok(())
    }
}
