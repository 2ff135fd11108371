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

//! Guild roles.
//!
//! To list or reorder the roles of a guild see [guild::get_roles][crate::guild::get_roles]
//! and [guild::modify_role_positions][crate::guild::modify_role_positions].

use crate::paths::{GUILDS, ROLES};
use crate::request::{action, optional_body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to create a role.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateRole {
    pub name: Option<String>,
    /// The bitwise value of the permissions, as a string.
    pub permissions: Option<String>,
    /// An RGB color value.
    pub color: Option<u32>,
    /// Displays the role separately in the member list.
    pub hoist: Option<bool>,
    pub icon: Option<String>,
    pub unicode_emoji: Option<String>,
    pub mentionable: Option<bool>,
}

impl CreateRole {
    /// Sets the [name][CreateRole::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [permissions][CreateRole::permissions] field.
    pub fn set_permissions<T: Into<String>>(mut self, v: T) -> Self {
        self.permissions = Some(v.into());
        self
    }

    /// Sets the [color][CreateRole::color] field.
    pub fn set_color(mut self, v: u32) -> Self {
        self.color = Some(v);
        self
    }

    /// Sets the [hoist][CreateRole::hoist] field.
    pub fn set_hoist(mut self, v: bool) -> Self {
        self.hoist = Some(v);
        self
    }

    /// Sets the [icon][CreateRole::icon] field.
    pub fn set_icon<T: Into<String>>(mut self, v: T) -> Self {
        self.icon = Some(v.into());
        self
    }

    /// Sets the [unicode_emoji][CreateRole::unicode_emoji] field.
    pub fn set_unicode_emoji<T: Into<String>>(mut self, v: T) -> Self {
        self.unicode_emoji = Some(v.into());
        self
    }

    /// Sets the [mentionable][CreateRole::mentionable] field.
    pub fn set_mentionable(mut self, v: bool) -> Self {
        self.mentionable = Some(v);
        self
    }
}

/// The parameters to modify a role.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyRole {
    pub name: Option<Option<String>>,
    pub permissions: Option<Option<String>>,
    pub color: Option<Option<u32>>,
    pub hoist: Option<Option<bool>>,
    pub icon: Option<Option<String>>,
    pub unicode_emoji: Option<Option<String>>,
    pub mentionable: Option<Option<bool>>,
}

impl ModifyRole {
    /// Sets the [name][ModifyRole::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [name][ModifyRole::name] field, clearing its value.
    pub fn clear_name(mut self) -> Self {
        self.name = Some(None);
        self
    }

    /// Sets the [permissions][ModifyRole::permissions] field.
    pub fn set_permissions<T: Into<String>>(mut self, v: T) -> Self {
        self.permissions = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [permissions][ModifyRole::permissions] field, clearing its value.
    pub fn clear_permissions(mut self) -> Self {
        self.permissions = Some(None);
        self
    }

    /// Sets the [color][ModifyRole::color] field.
    pub fn set_color(mut self, v: u32) -> Self {
        self.color = Some(Some(v));
        self
    }

    /// Sends `null` for the [color][ModifyRole::color] field, clearing its value.
    pub fn clear_color(mut self) -> Self {
        self.color = Some(None);
        self
    }

    /// Sets the [hoist][ModifyRole::hoist] field.
    pub fn set_hoist(mut self, v: bool) -> Self {
        self.hoist = Some(Some(v));
        self
    }

    /// Sends `null` for the [hoist][ModifyRole::hoist] field, clearing its value.
    pub fn clear_hoist(mut self) -> Self {
        self.hoist = Some(None);
        self
    }

    /// Sets the [icon][ModifyRole::icon] field.
    pub fn set_icon<T: Into<String>>(mut self, v: T) -> Self {
        self.icon = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [icon][ModifyRole::icon] field, clearing its value.
    pub fn clear_icon(mut self) -> Self {
        self.icon = Some(None);
        self
    }

    /// Sets the [unicode_emoji][ModifyRole::unicode_emoji] field.
    pub fn set_unicode_emoji<T: Into<String>>(mut self, v: T) -> Self {
        self.unicode_emoji = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [unicode_emoji][ModifyRole::unicode_emoji] field, clearing its value.
    pub fn clear_unicode_emoji(mut self) -> Self {
        self.unicode_emoji = Some(None);
        self
    }

    /// Sets the [mentionable][ModifyRole::mentionable] field.
    pub fn set_mentionable(mut self, v: bool) -> Self {
        self.mentionable = Some(Some(v));
        self
    }

    /// Sends `null` for the [mentionable][ModifyRole::mentionable] field, clearing its value.
    pub fn clear_mentionable(mut self) -> Self {
        self.mentionable = Some(None);
        self
    }
}

/// Creates a role.
///
/// Without parameters the service creates a role called `new role` and no
/// body is sent.
pub fn create(guild_id: &str, params: Option<&CreateRole>) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[GUILDS, guild_id, ROLES],
        None,
        optional_body(params)?,
    )
}

/// Modifies a role.
///
/// # Example
/// ```
/// use discord_actions::role::{self, ModifyRole};
/// # fn main() -> discord_actions::Result<()> {
/// let params = ModifyRole::default().set_name("Admin");
/// let action = role::modify("42", "7", Some(&params))?;
/// assert_eq!(action.descriptor().to_string(), "PATCH guilds/42/roles/7");
/// # Ok(()) }
/// ```
pub fn modify(guild_id: &str, role_id: &str, params: Option<&ModifyRole>) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, ROLES, role_id],
        None,
        optional_body(params)?,
    )
}

pub fn delete(guild_id: &str, role_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, ROLES, role_id],
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
    fn create_role() -> TestResult {
        let action = create("42", None)?;
        assert_eq!(action.descriptor().to_string(), "POST guilds/42/roles");
        assert_eq!(action.descriptor().body(), None);

        let params = CreateRole::default()
            .set_name("Mods")
            .set_color(0)
            .set_hoist(false)
            .set_permissions("8");
        let action = create("42", Some(&params))?;
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({
                "name": "Mods",
                "permissions": "8",
                "color": 0,
                "hoist": false,
            })))
        );
        Ok(())
    }

    #[test]
    fn modify_role() -> TestResult {
        let params = ModifyRole::default().set_name("Admin");
        let action = modify("42", "7", Some(&params))?;
        assert_eq!(action.descriptor().method(), Method::Patch);
        assert_eq!(action.descriptor().path(), "guilds/42/roles/7");
        assert_eq!(action.descriptor().query(), "");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"name": "Admin"})))
        );

        let action = modify("42", "7", Some(&ModifyRole::default().clear_icon()))?;
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"icon": null})))
        );
        let action = modify("42", "7", None)?;
        assert_eq!(action.descriptor().body(), None);
        Ok(())
    }

    #[test]
    fn delete_role() -> TestResult {
        let action = delete("42", "7")?;
        assert_eq!(action.descriptor().to_string(), "DELETE guilds/42/roles/7");
        Ok(())
    }
}
