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

//! Live stages in stage channels.
//!
//! A stage instance is identified by the id of its channel.

use crate::model::PrivacyLevel;
use crate::paths::STAGE_INSTANCES;
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to start a stage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateStageInstance {
    pub channel_id: String,
    pub topic: String,
    pub privacy_level: Option<PrivacyLevel>,
    /// Notifies the members of the guild that the stage started.
    pub send_start_notification: Option<bool>,
}

impl CreateStageInstance {
    pub fn new<T: Into<String>, U: Into<String>>(channel_id: T, topic: U) -> Self {
        Self {
            channel_id: channel_id.into(),
            topic: topic.into(),
            privacy_level: None,
            send_start_notification: None,
        }
    }

    /// Sets the [privacy_level][CreateStageInstance::privacy_level] field.
    pub fn set_privacy_level(mut self, v: PrivacyLevel) -> Self {
        self.privacy_level = Some(v);
        self
    }

    /// Sets the [send_start_notification][CreateStageInstance::send_start_notification] field.
    pub fn set_send_start_notification(mut self, v: bool) -> Self {
        self.send_start_notification = Some(v);
        self
    }
}

/// The parameters to modify a stage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyStageInstance {
    pub topic: Option<String>,
    pub privacy_level: Option<PrivacyLevel>,
}

impl ModifyStageInstance {
    /// Sets the [topic][ModifyStageInstance::topic] field.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = Some(v.into());
        self
    }

    /// Sets the [privacy_level][ModifyStageInstance::privacy_level] field.
    pub fn set_privacy_level(mut self, v: PrivacyLevel) -> Self {
        self.privacy_level = Some(v);
        self
    }
}

pub fn create(params: &CreateStageInstance) -> Result<Action<Value>> {
    action(Method::Post, &[STAGE_INSTANCES], None, body(params)?)
}

pub fn get(channel_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[STAGE_INSTANCES, channel_id], None, None)
}

pub fn modify(channel_id: &str, params: &ModifyStageInstance) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[STAGE_INSTANCES, channel_id],
        None,
        body(params)?,
    )
}

pub fn delete(channel_id: &str) -> Result<Action<()>> {
    action(Method::Delete, &[STAGE_INSTANCES, channel_id], None, None)
}
