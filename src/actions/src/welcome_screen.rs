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

//! The welcome screen shown to new members of community guilds.

use crate::paths::{GUILDS, WELCOME_SCREEN};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to modify the welcome screen.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyWelcomeScreen {
    pub enabled: Option<Option<bool>>,
    pub welcome_channels: Option<Option<Vec<Value>>>,
    pub description: Option<Option<String>>,
}

impl ModifyWelcomeScreen {
    /// Sets the [enabled][ModifyWelcomeScreen::enabled] field.
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(Some(v));
        self
    }

    /// Sends `null` for the [enabled][ModifyWelcomeScreen::enabled] field, clearing its value.
    pub fn clear_enabled(mut self) -> Self {
        self.enabled = Some(None);
        self
    }

    /// Sets the [welcome_channels][ModifyWelcomeScreen::welcome_channels] field.
    pub fn set_welcome_channels<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.welcome_channels = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [welcome_channels][ModifyWelcomeScreen::welcome_channels] field, clearing its value.
    pub fn clear_welcome_channels(mut self) -> Self {
        self.welcome_channels = Some(None);
        self
    }

    /// Sets the [description][ModifyWelcomeScreen::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [description][ModifyWelcomeScreen::description] field, clearing its value.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }
}

pub fn get(guild_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[GUILDS, guild_id, WELCOME_SCREEN], None, None)
}

pub fn modify(guild_id: &str, params: &ModifyWelcomeScreen) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, WELCOME_SCREEN],
        None,
        body(params)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::descriptor::Body;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn welcome_screen() -> anyhow::Result<()> {
        let action = get("1")?;
        assert_eq!(
            action.descriptor().to_string(),
            "GET guilds/1/welcome-screen"
        );

        let params = ModifyWelcomeScreen::default()
            .set_enabled(false)
            .set_welcome_channels([json!({"channel_id": "2", "description": "rules"})])
            .clear_description();
        let action = modify("1", &params)?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH guilds/1/welcome-screen"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({
                "enabled": false,
                "welcome_channels": [{"channel_id": "2", "description": "rules"}],
                "description": null,
            })))
        );
        Ok(())
    }
}
