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

//! Voice regions and the voice state of guild members.

use crate::paths::{GUILDS, ME, REGIONS, VOICE, VOICE_STATES};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to update the current user's voice state.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateCurrentVoiceState {
    /// The stage channel the user is in.
    pub channel_id: String,
    pub suppress: Option<bool>,
    /// An ISO8601 timestamp, sets or clears the request to speak.
    pub request_to_speak_timestamp: Option<Option<String>>,
}

impl UpdateCurrentVoiceState {
    pub fn new<T: Into<String>>(channel_id: T) -> Self {
        Self {
            channel_id: channel_id.into(),
            suppress: None,
            request_to_speak_timestamp: None,
        }
    }

    /// Sets the [suppress][UpdateCurrentVoiceState::suppress] field.
    pub fn set_suppress(mut self, v: bool) -> Self {
        self.suppress = Some(v);
        self
    }

    /// Sets the [request_to_speak_timestamp][UpdateCurrentVoiceState::request_to_speak_timestamp] field.
    pub fn set_request_to_speak_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.request_to_speak_timestamp = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [request_to_speak_timestamp][UpdateCurrentVoiceState::request_to_speak_timestamp] field, clearing its value.
    pub fn clear_request_to_speak_timestamp(mut self) -> Self {
        self.request_to_speak_timestamp = Some(None);
        self
    }
}

/// The parameters to update the voice state of another user.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateVoiceState {
    pub channel_id: String,
    pub suppress: Option<bool>,
}

impl UpdateVoiceState {
    pub fn new<T: Into<String>>(channel_id: T) -> Self {
        Self {
            channel_id: channel_id.into(),
            suppress: None,
        }
    }

    /// Sets the [suppress][UpdateVoiceState::suppress] field.
    pub fn set_suppress(mut self, v: bool) -> Self {
        self.suppress = Some(v);
        self
    }
}

/// Lists the voice regions available for new calls.
pub fn list_regions() -> Result<Action<Vec<Value>>> {
    action(Method::Get, &[VOICE, REGIONS], None, None)
}

/// Updates the current user's voice state in a stage channel.
pub fn update_current_state(
    guild_id: &str,
    params: &UpdateCurrentVoiceState,
) -> Result<Action<()>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, VOICE_STATES, ME],
        None,
        body(params)?,
    )
}

/// Updates another user's voice state in a stage channel.
pub fn update_user_state(
    guild_id: &str,
    user_id: &str,
    params: &UpdateVoiceState,
) -> Result<Action<()>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, VOICE_STATES, user_id],
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
    type TestResult = anyhow::Result<()>;

    #[test]
    fn regions() -> TestResult {
        assert_eq!(
            list_regions()?.descriptor().to_string(),
            "GET voice/regions"
        );
        Ok(())
    }

    #[test]
    fn current_state() -> TestResult {
        let params = UpdateCurrentVoiceState::new("2")
            .set_suppress(false)
            .clear_request_to_speak_timestamp();
        let action = update_current_state("1", &params)?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH guilds/1/voice-states/@me"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({
                "channel_id": "2",
                "suppress": false,
                "request_to_speak_timestamp": null,
            })))
        );
        Ok(())
    }

    #[test]
    fn user_state() -> TestResult {
        let action = update_user_state("1", "3", &UpdateVoiceState::new("2").set_suppress(true))?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH guilds/1/voice-states/3"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"channel_id": "2", "suppress": true})))
        );
        Ok(())
    }
}
