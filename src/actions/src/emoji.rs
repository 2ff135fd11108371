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

//! Custom emoji of a guild.
//!
//! To list the emoji of a guild see [guild::list_emojis][crate::guild::list_emojis].

use crate::paths::{EMOJIS, GUILDS};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to upload an emoji.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateEmoji {
    pub name: String,
    /// A base64 encoded 128x128 image, as a data URI.
    pub image: String,
    /// Limits the emoji to members with these roles.
    pub roles: Option<Vec<String>>,
}

impl CreateEmoji {
    pub fn new<T: Into<String>, U: Into<String>>(name: T, image: U) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            roles: None,
        }
    }

    /// Sets the [roles][CreateEmoji::roles] field.
    pub fn set_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.roles = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The parameters to modify an emoji.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyEmoji {
    pub name: Option<String>,
    pub roles: Option<Option<Vec<String>>>,
}

impl ModifyEmoji {
    /// Sets the [name][ModifyEmoji::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [roles][ModifyEmoji::roles] field.
    pub fn set_roles<I, T>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.roles = Some(Some(v.into_iter().map(|i| i.into()).collect()));
        self
    }

    /// Sends `null` for the [roles][ModifyEmoji::roles] field, clearing its value.
    pub fn clear_roles(mut self) -> Self {
        self.roles = Some(None);
        self
    }
}

pub fn get(guild_id: &str, emoji_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[GUILDS, guild_id, EMOJIS, emoji_id],
        None,
        None,
    )
}

/// Uploads a new emoji.
pub fn add(guild_id: &str, params: &CreateEmoji) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[GUILDS, guild_id, EMOJIS],
        None,
        body(params)?,
    )
}

pub fn modify(guild_id: &str, emoji_id: &str, params: &ModifyEmoji) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, EMOJIS, emoji_id],
        None,
        body(params)?,
    )
}

pub fn delete(guild_id: &str, emoji_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, EMOJIS, emoji_id],
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
    fn add_emoji() -> TestResult {
        let params = CreateEmoji::new("blob", "data:image/png;base64,AAAA").set_roles(["3"]);
        let action = add("1", &params)?;
        assert_eq!(action.descriptor().to_string(), "POST guilds/1/emojis");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({
                "name": "blob",
                "image": "data:image/png;base64,AAAA",
                "roles": ["3"],
            })))
        );
        Ok(())
    }

    #[test]
    fn modify_emoji() -> TestResult {
        let action = modify("1", "2", &ModifyEmoji::default().clear_roles())?;
        assert_eq!(action.descriptor().to_string(), "PATCH guilds/1/emojis/2");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"roles": null})))
        );
        Ok(())
    }

    #[test]
    fn get_and_delete() -> TestResult {
        assert_eq!(
            get("1", "2")?.descriptor().to_string(),
            "GET guilds/1/emojis/2"
        );
        assert_eq!(
            delete("1", "2")?.descriptor().to_string(),
            "DELETE guilds/1/emojis/2"
        );
        Ok(())
    }
}
