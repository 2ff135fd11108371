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

//! Application commands and interactions.
//!
//! Command definitions and interaction responses are rich documents, the
//! operations accept any serializable payload for them, e.g. a
//! [serde_json::Value] or an application-defined type.
//!
//! # Example
//! ```
//! use discord_actions::application;
//! use serde_json::json;
//! # fn main() -> discord_actions::Result<()> {
//! let command = json!({"name": "ping", "description": "Replies with pong", "type": 1});
//! let action = application::create_guild_command("10", "20", &command)?;
//! assert_eq!(
//!     action.descriptor().to_string(),
//!     "POST applications/10/guilds/20/commands"
//! );
//! # Ok(()) }
//! ```

use crate::model::AllowedMentions;
use crate::paths::{
    APPLICATIONS, CALLBACK, COMMANDS, GUILDS, INTERACTIONS, MESSAGES, ORIGINAL, PERMISSIONS,
    WEBHOOKS,
};
use crate::request::{action, body, query};
use crate::webhook::ExecuteWebhook;
use base::Result;
use base::action::Action;
use base::descriptor::Method;
use base::query::{Query, ToQuery};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetCommandsQuery {
    /// Includes the full localization dictionaries.
    pub with_localizations: Option<bool>,
}

impl GetCommandsQuery {
    /// Sets the [with_localizations][GetCommandsQuery::with_localizations] field.
    pub fn set_with_localizations(mut self, v: bool) -> Self {
        self.with_localizations = Some(v);
        self
    }
}

impl ToQuery for GetCommandsQuery {
    fn to_query(&self) -> Result<Query> {
        Ok(Query::new().add("with_localizations", &self.with_localizations))
    }
}

/// The new permissions of a command.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditCommandPermissions {
    pub permissions: Vec<Value>,
}

impl EditCommandPermissions {
    pub fn new<I: IntoIterator<Item = Value>>(permissions: I) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
        }
    }
}

/// The permissions of one command, see [batch_edit_command_permissions].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuildCommandPermissions {
    /// The command id.
    pub id: String,
    pub permissions: Vec<Value>,
}

impl GuildCommandPermissions {
    pub fn new<T: Into<String>, I: IntoIterator<Item = Value>>(id: T, permissions: I) -> Self {
        Self {
            id: id.into(),
            permissions: permissions.into_iter().collect(),
        }
    }
}

/// The parameters to edit an interaction response or a followup message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EditInteractionResponse {
    pub content: Option<Option<String>>,
    pub embeds: Option<Option<Vec<Value>>>,
    pub allowed_mentions: Option<Option<AllowedMentions>>,
    pub components: Option<Option<Vec<Value>>>,
}

impl EditInteractionResponse {
    /// Sets the [content][EditInteractionResponse::content] field.
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = Some(Some(v.into()));
        self
    }

    /// Sends `null` for the [content][EditInteractionResponse::content] field, clearing its value.
    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    /// Sets the [embeds][EditInteractionResponse::embeds] field.
    pub fn set_embeds<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.embeds = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [embeds][EditInteractionResponse::embeds] field, clearing its value.
    pub fn clear_embeds(mut self) -> Self {
        self.embeds = Some(None);
        self
    }

    /// Sets the [allowed_mentions][EditInteractionResponse::allowed_mentions] field.
    pub fn set_allowed_mentions(mut self, v: AllowedMentions) -> Self {
        self.allowed_mentions = Some(Some(v));
        self
    }

    /// Sends `null` for the [allowed_mentions][EditInteractionResponse::allowed_mentions] field, clearing its value.
    pub fn clear_allowed_mentions(mut self) -> Self {
        self.allowed_mentions = Some(None);
        self
    }

    /// Sets the [components][EditInteractionResponse::components] field.
    pub fn set_components<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.components = Some(Some(v.into_iter().collect()));
        self
    }

    /// Sends `null` for the [components][EditInteractionResponse::components] field, clearing its value.
    pub fn clear_components(mut self) -> Self {
        self.components = Some(None);
        self
    }
}

pub fn get_global_commands(
    application_id: &str,
    params: Option<&GetCommandsQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[APPLICATIONS, application_id, COMMANDS],
        query.as_ref(),
        None,
    )
}

/// Creates a global command, or replaces the command with the same name.
pub fn create_global_command<T>(application_id: &str, command: &T) -> Result<Action<Value>>
where
    T: Serialize + ?Sized,
{
    action(
        Method::Post,
        &[APPLICATIONS, application_id, COMMANDS],
        None,
        body(command)?,
    )
}

pub fn get_global_command(application_id: &str, command_id: &str) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[APPLICATIONS, application_id, COMMANDS, command_id],
        None,
        None,
    )
}

/// Edits a global command, `command` contains only the fields to change.
pub fn edit_global_command<T>(
    application_id: &str,
    command_id: &str,
    command: &T,
) -> Result<Action<Value>>
where
    T: Serialize + ?Sized,
{
    action(
        Method::Patch,
        &[APPLICATIONS, application_id, COMMANDS, command_id],
        None,
        body(command)?,
    )
}

pub fn delete_global_command(application_id: &str, command_id: &str) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[APPLICATIONS, application_id, COMMANDS, command_id],
        None,
        None,
    )
}

/// Replaces all the global commands.
pub fn bulk_overwrite_global_commands<T: Serialize>(
    application_id: &str,
    commands: &[T],
) -> Result<Action<Vec<Value>>> {
    action(
        Method::Put,
        &[APPLICATIONS, application_id, COMMANDS],
        None,
        body(commands)?,
    )
}

pub fn get_guild_commands(
    application_id: &str,
    guild_id: &str,
    params: Option<&GetCommandsQuery>,
) -> Result<Action<Vec<Value>>> {
    let query = query(params)?;
    action(
        Method::Get,
        &[APPLICATIONS, application_id, GUILDS, guild_id, COMMANDS],
        query.as_ref(),
        None,
    )
}

pub fn create_guild_command<T>(
    application_id: &str,
    guild_id: &str,
    command: &T,
) -> Result<Action<Value>>
where
    T: Serialize + ?Sized,
{
    action(
        Method::Post,
        &[APPLICATIONS, application_id, GUILDS, guild_id, COMMANDS],
        None,
        body(command)?,
    )
}

pub fn get_guild_command(
    application_id: &str,
    guild_id: &str,
    command_id: &str,
) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            command_id,
        ],
        None,
        None,
    )
}

pub fn edit_guild_command<T>(
    application_id: &str,
    guild_id: &str,
    command_id: &str,
    command: &T,
) -> Result<Action<Value>>
where
    T: Serialize + ?Sized,
{
    action(
        Method::Patch,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            command_id,
        ],
        None,
        body(command)?,
    )
}

pub fn delete_guild_command(
    application_id: &str,
    guild_id: &str,
    command_id: &str,
) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            command_id,
        ],
        None,
        None,
    )
}

/// Replaces all the commands of a guild.
pub fn bulk_overwrite_guild_commands<T: Serialize>(
    application_id: &str,
    guild_id: &str,
    commands: &[T],
) -> Result<Action<Vec<Value>>> {
    action(
        Method::Put,
        &[APPLICATIONS, application_id, GUILDS, guild_id, COMMANDS],
        None,
        body(commands)?,
    )
}

/// Lists the permissions of every command in a guild.
pub fn get_guild_command_permissions(
    application_id: &str,
    guild_id: &str,
) -> Result<Action<Vec<Value>>> {
    action(
        Method::Get,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            PERMISSIONS,
        ],
        None,
        None,
    )
}

pub fn get_command_permissions(
    application_id: &str,
    guild_id: &str,
    command_id: &str,
) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            command_id,
            PERMISSIONS,
        ],
        None,
        None,
    )
}

/// Replaces the permissions of one command.
pub fn edit_command_permissions(
    application_id: &str,
    guild_id: &str,
    command_id: &str,
    params: &EditCommandPermissions,
) -> Result<Action<()>> {
    action(
        Method::Put,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            command_id,
            PERMISSIONS,
        ],
        None,
        body(params)?,
    )
}

/// Replaces the permissions of several commands in a single request.
pub fn batch_edit_command_permissions(
    application_id: &str,
    guild_id: &str,
    params: &[GuildCommandPermissions],
) -> Result<Action<Vec<Value>>> {
    action(
        Method::Put,
        &[
            APPLICATIONS,
            application_id,
            GUILDS,
            guild_id,
            COMMANDS,
            PERMISSIONS,
        ],
        None,
        body(params)?,
    )
}

/// Responds to an interaction.
///
/// The `response` is the interaction callback document, with its `type` and
/// optional `data`.
pub fn create_interaction_response<T>(
    interaction_id: &str,
    interaction_token: &str,
    response: &T,
) -> Result<Action<()>>
where
    T: Serialize + ?Sized,
{
    action(
        Method::Post,
        &[INTERACTIONS, interaction_id, interaction_token, CALLBACK],
        None,
        body(response)?,
    )
}

pub fn get_original_interaction_response(
    application_id: &str,
    interaction_token: &str,
) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[
            WEBHOOKS,
            application_id,
            interaction_token,
            MESSAGES,
            ORIGINAL,
        ],
        None,
        None,
    )
}

pub fn edit_original_interaction_response(
    application_id: &str,
    interaction_token: &str,
    params: &EditInteractionResponse,
) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[
            WEBHOOKS,
            application_id,
            interaction_token,
            MESSAGES,
            ORIGINAL,
        ],
        None,
        body(params)?,
    )
}

pub fn delete_original_interaction_response(
    application_id: &str,
    interaction_token: &str,
) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[
            WEBHOOKS,
            application_id,
            interaction_token,
            MESSAGES,
            ORIGINAL,
        ],
        None,
        None,
    )
}

/// Sends a followup message for an interaction.
pub fn create_followup_message(
    application_id: &str,
    interaction_token: &str,
    params: &ExecuteWebhook,
) -> Result<Action<Option<Value>>> {
    action(
        Method::Post,
        &[WEBHOOKS, application_id, interaction_token],
        None,
        body(params)?,
    )
}

pub fn get_followup_message(
    application_id: &str,
    interaction_token: &str,
    message_id: &str,
) -> Result<Action<Value>> {
    action(
        Method::Get,
        &[
            WEBHOOKS,
            application_id,
            interaction_token,
            MESSAGES,
            message_id,
        ],
        None,
        None,
    )
}

pub fn edit_followup_message(
    application_id: &str,
    interaction_token: &str,
    message_id: &str,
    params: &EditInteractionResponse,
) -> Result<Action<Value>> {
    action(
        Method::Patch,
        &[
            WEBHOOKS,
            application_id,
            interaction_token,
            MESSAGES,
            message_id,
        ],
        None,
        body(params)?,
    )
}

pub fn delete_followup_message(
    application_id: &str,
    interaction_token: &str,
    message_id: &str,
) -> Result<Action<()>> {
    action(
        Method::Delete,
        &[
            WEBHOOKS,
            application_id,
            interaction_token,
            MESSAGES,
            message_id,
        ],
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
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[derive(Serialize)]
    struct Command {
        name: &'static str,
        description: &'static str,
    }

    #[test]
    fn global_commands() -> TestResult {
        let params = GetCommandsQuery::default().set_with_localizations(true);
        let action = get_global_commands("10", Some(&params))?;
        assert_eq!(
            action.descriptor().to_string(),
            "GET applications/10/commands?with_localizations=true"
        );

        let command = Command {
            name: "ping",
            description: "pong",
        };
        let action = create_global_command("10", &command)?;
        assert_eq!(
            action.descriptor().to_string(),
            "POST applications/10/commands"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"name": "ping", "description": "pong"})))
        );

        let action = edit_global_command("10", "30", &json!({"description": "new"}))?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH applications/10/commands/30"
        );
        Ok(())
    }

    #[test]
    fn bulk_overwrite() -> TestResult {
        let action = bulk_overwrite_global_commands::<Value>("10", &[])?;
        assert_eq!(
            action.descriptor().to_string(),
            "PUT applications/10/commands"
        );
        assert_eq!(action.descriptor().body(), Some(&Body::Json(json!([]))));

        let commands = [json!({"name": "a"}), json!({"name": "b"})];
        let action = bulk_overwrite_guild_commands("10", "20", &commands)?;
        assert_eq!(
            action.descriptor().to_string(),
            "PUT applications/10/guilds/20/commands"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!([{"name": "a"}, {"name": "b"}])))
        );
        Ok(())
    }

    #[test]
    fn permissions() -> TestResult {
        let perm = json!({"id": "5", "type": 1, "permission": true});
        let params = EditCommandPermissions::new([perm.clone()]);
        let action = edit_command_permissions("10", "20", "30", &params)?;
        assert_eq!(
            action.descriptor().to_string(),
            "PUT applications/10/guilds/20/commands/30/permissions"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"permissions": [perm]})))
        );

        let batch = [GuildCommandPermissions::new("30", [perm.clone()])];
        let action = batch_edit_command_permissions("10", "20", &batch)?;
        assert_eq!(
            action.descriptor().to_string(),
            "PUT applications/10/guilds/20/commands/permissions"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!([{"id": "30", "permissions": [perm]}])))
        );
        Ok(())
    }

    #[test]
    fn interaction_response() -> TestResult {
        let response = json!({"type": 4, "data": {"content": "pong"}});
        let action = create_interaction_response("99", "tok", &response)?;
        assert_eq!(
            action.descriptor().to_string(),
            "POST interactions/99/tok/callback"
        );
        assert_eq!(action.descriptor().body(), Some(&Body::Json(response)));
        Ok(())
    }

    #[test]
    fn original_response() -> TestResult {
        let params = EditInteractionResponse::default().set_content("edited");
        let action = edit_original_interaction_response("10", "tok", &params)?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH webhooks/10/tok/messages/@original"
        );
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"content": "edited"})))
        );
        Ok(())
    }

    #[test]
    fn followup() -> TestResult {
        let params = ExecuteWebhook::default().set_content("later").set_flags(64);
        let action = create_followup_message("10", "tok", &params)?;
        assert_eq!(action.descriptor().to_string(), "POST webhooks/10/tok");
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"content": "later", "flags": 64})))
        );
        Ok(())
    }

    #[test_case(get_global_command("10", "30"), "GET applications/10/commands/30")]
    #[test_case(delete_global_command("10", "30"), "DELETE applications/10/commands/30")]
    #[test_case(get_guild_commands("10", "20", None), "GET applications/10/guilds/20/commands")]
    #[test_case(get_guild_command("10", "20", "30"), "GET applications/10/guilds/20/commands/30")]
    #[test_case(delete_guild_command("10", "20", "30"), "DELETE applications/10/guilds/20/commands/30")]
    #[test_case(get_guild_command_permissions("10", "20"), "GET applications/10/guilds/20/commands/permissions")]
    #[test_case(get_command_permissions("10", "20", "30"), "GET applications/10/guilds/20/commands/30/permissions")]
    #[test_case(get_original_interaction_response("10", "tok"), "GET webhooks/10/tok/messages/@original")]
    #[test_case(delete_original_interaction_response("10", "tok"), "DELETE webhooks/10/tok/messages/@original")]
    #[test_case(get_followup_message("10", "tok", "7"), "GET webhooks/10/tok/messages/7")]
    #[test_case(delete_followup_message("10", "tok", "7"), "DELETE webhooks/10/tok/messages/7")]
    fn simple<R>(action: Result<Action<R>>, want: &str) -> TestResult {
        assert_eq!(action?.descriptor().to_string(), want);
        Ok(())
    }

    #[test]
    fn edit_guild() -> TestResult {
        let action = create_guild_command("10", "20", &json!({"name": "x"}))?;
        assert_eq!(
            action.descriptor().to_string(),
            "POST applications/10/guilds/20/commands"
        );
        let action = edit_guild_command("10", "20", "30", &json!({"name": "y"}))?;
        assert_eq!(
            action.descriptor().to_string(),
            "PATCH applications/10/guilds/20/commands/30"
        );
        let params = EditInteractionResponse::default().clear_components();
        let action = edit_followup_message("10", "tok", "7", &params)?;
        assert_eq!(
            action.descriptor().body(),
            Some(&Body::Json(json!({"components": null})))
        );
        Ok(())
    }
}
