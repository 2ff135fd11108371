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

//! Guild templates.
//!
//! To create a guild from a template see
//! [guild::create_from_template][crate::guild::create_from_template].

use crate::paths::{GUILDS, TEMPLATES};
use crate::request::{action, body};
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use serde::Serialize;
use serde_json::Value;

/// The parameters to create a guild template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateTemplate {
    pub name: String,
    pub description: Option<Option<String>>,
}

impl CreateTemplate {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the [description][CreateTemplate::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [description][CreateTemplate::description] field, clearing its value.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }
}

/// The parameters to modify a guild template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModifyTemplate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl ModifyTemplate {
    /// Sets the [name][ModifyTemplate::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [description][ModifyTemplate::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [description][ModifyTemplate::description] field, clearing its value.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }
}

pub fn get(template_code: &str) -> Result<Action<Value>> {
    action(Method::Get, &[GUILDS, TEMPLATES, template_code], None, None)
}

/// Creates a template from the current state of the guild.
pub fn create(guild_id: &str, params: &CreateTemplate) -> Result<Action<Value>> {
    action(
        Method::Post,
        &[GUILDS, guild_id, TEMPLATES],
        None,
        body(params)?,
    )
}

/// Updates the template to the current state of the guild.
pub fn sync(guild_id: &str, template_code: &str) -> Result<Action<Value>> {
    action(
        Method::Put,
        &[GUILDS, guild_id, TEMPLATES, template_code],
        None,
        None,
    )
}

pub fn modify(
    guild_id: &str,
    template_code: &str,
    params: &ModifyTemplate,
) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[GUILDS, guild_id, TEMPLATES, template_code],
        None,
        body(params)?,
    )
}

/// Deletes a template, the response is the deleted template.
pub fn delete(guild_id: &str, template_code: &str) -> Result<Action<Value>> {
    action(
        Method::Delete,
        &[GUILDS, guild_id, TEMPLATES, template_code],
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
    fn templates() -> TestResult {
        assert_eq!(
            get("abc")?.descriptor().to_string(),
            "GET guilds/templates/abc"
        );
        assert_eq!(
            sync("1", "abc")?.descriptor().to_string(),
            "PUT guilds/1/templates/abc"
        );
        assert_eq!(
            delete("1", "abc")?.descriptor().to_string(),
            "DELETE guilds/1/templates/abc"
        );
        Ok(())
    }

    #[test]
    fn create_template() -> TestResult {
        let action = create("1", &CreateTemplate::new("base").set_description(""))?;
        assert_eq!(action.descriptor().to_string(), "POST guilds/1/templates");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"name": "base", "description": ""})))
        );
        Ok(())
    }

    #[test]
    fn modify_template() -> TestResult {
        let action = modify("1", "abc", &ModifyTemplate::default().clear_description())?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH guilds/1/templates/abc"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"description": null})))
        );
        Ok(())
    }
}
