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

//! Stickers, standard and guild-owned.
//!
//! To list the stickers of a guild see
//! [guild::list_stickers][crate::guild::list_stickers].

use crate::paths::{GUILDS, STICKERS};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to modify a guild sticker.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifySticker {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    /// Autocomplete keywords, comma separated.
    pub tags: Option<String>,
}

impl ModifySticker {
    /// Sets the [name][ModifySticker::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [description][ModifySticker::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [description][ModifySticker::description] field, clearing its value.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the [tags][ModifySticker::tags] field.
    pub fn set_tags<T: Into<String>>(mut self, v: T) -> Self {
        self.tags = Some(v.into());
        self
    }
}

pub fn get(sticker_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[STICKERS, sticker_id], None, None)
}

pub fn get_from_guild(guild_id: &str, sticker_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[GUILDS, guild_id, STICKERS, sticker_id],
        None,
        None,
    )
}

pub fn modify(guild_id: &str, sticker_id: &str, params: &ModifySticker) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, STICKERS, sticker_id],
        None,
        body(params)?,
    )
}

pub fn delete(guild_id: &str, sticker_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, STICKERS, sticker_id],
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
    fn stickers() -> TestResult {
        assert_eq!(get("4")?.descriptor().to_string(), "GET stickers/4");
        assert_eq!(
            get_from_guild("1", "4")?.descriptor().to_string(),
            "GET guilds/1/stickers/4"
        );
        assert_eq!(
            delete("1", "4")?.descriptor().to_string(),
            "DELETE guilds/1/stickers/4"
        );
        Ok(())
    }

    #[test]
    fn modify_sticker() -> TestResult {
        let params = ModifySticker::default()
            .clear_description()
            .set_tags("smile");
        let action = modify("1", "4", &params)?;
        assert_eq!(action.descriptor().to_string(), "PATCH guilds/1/stickers/4");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"description": null, "tags": "smile"})))
        );
        Ok(())
    }
}
