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

//! The guild widget: its settings, its JSON form, and its PNG image.

use crate::paths::{GUILDS, WIDGET, WIDGET_JSON, WIDGET_PNG};
use crate::request::{action, body, query};
use base::Result;
use base::action::Action;
use base::descriptor::{ActionDescriptor, Method};
use base::query::{Query, ToQuery};
use base::request_parameter::RequestParameter;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

/// The parameters to modify the widget settings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyWidget {
    pub enabled: Option<bool>,
    /// The channel that the widget invites users to.
    pub channel_id: Option<Option<String>>,
}

impl ModifyWidget {
    /// Sets the [enabled][ModifyWidget::enabled] field.
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }

    /// Sets the [channel_id][ModifyWidget::channel_id] field.
    pub fn set_channel_id<T: Into<String>>(mut self, v: T) -> Self {
        self.channel_id = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [channel_id][ModifyWidget::channel_id] field, clearing its value.
    pub fn clear_channel_id(mut self) -> Self {
        self.channel_id = Some(None);
        self
    }
}

/// The style of the widget image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetStyle {
    /// A small shield with the online count.
    #[default]
    Shield,
    Banner1,
    Banner2,
    Banner3,
    Banner4,
}

impl WidgetStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shield => "shield",
            Self::Banner1 => "banner1",
            Self::Banner2 => "banner2",
            Self::Banner3 => "banner3",
            Self::Banner4 => "banner4",
        }
    }
}

impl RequestParameter for WidgetStyle {
    fn format(&self) -> String {
        self.as_str().to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetImageQuery {
    pub style: Option<WidgetStyle>,
}

impl WidgetImageQuery {
    /// Sets the [style][WidgetImageQuery::style] field.
    pub fn set_style(mut self, v: WidgetStyle) -> Self {
        self.style = Some(v);
        self
    }
}

impl ToQuery for WidgetImageQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new().add("style", &self.style))
    }
}

pub fn get_settings(guild_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[GUILDS, guild_id, WIDGET], None, None)
}

pub fn modify(guild_id: &str, params: &ModifyWidget) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, WIDGET],
        None,
        body(params)?,
    )
}

/// Fetches the public JSON form of the widget.
pub fn get(guild_id: &str) -> Result<Action<Value>> {
    action(Method::Get, &[GUILDS, guild_id, WIDGET_JSON], None, None)
}

/// Fetches the widget image.
///
/// The response is the PNG image, it is not decoded.
pub fn get_image(guild_id: &str, params: Option<&WidgetImageQuery>) -> Result<Action<Bytes>> {
    let query = query(params)?;
    let descriptor = ActionDescriptor::build(
        Method::Get,
        &[GUILDS, guild_id, WIDGET_PNG],
        query.as_ref(),
        None,
    )?;
    Ok(Action::raw(descriptor))
}
