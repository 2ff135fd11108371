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

//! The fixed path segments used by the catalog.
//!
//! These values are known to be safe, they are never percent-encoded.

pub const ACTIVE: &str = "active";
pub const APPLICATIONS: &str = "applications";
pub const ARCHIVED: &str = "archived";
pub const AUDIT_LOGS: &str = "audit-logs";
pub const BANS: &str = "bans";
pub const BULK_DELETE: &str = "bulk-delete";
pub const CALLBACK: &str = "callback";
pub const CHANNELS: &str = "channels";
pub const COMMANDS: &str = "commands";
pub const CONNECTIONS: &str = "connections";
pub const CROSSPOST: &str = "crosspost";
pub const EMOJIS: &str = "emojis";
pub const FOLLOWERS: &str = "followers";
pub const GITHUB: &str = "github";
pub const GUILDS: &str = "guilds";
pub const INTEGRATIONS: &str = "integrations";
pub const INTERACTIONS: &str = "interactions";
pub const INVITES: &str = "invites";
pub const ME: &str = "@me";
pub const MEMBER: &str = "member";
pub const MEMBERS: &str = "members";
pub const MESSAGES: &str = "messages";
pub const NICK: &str = "nick";
pub const OAUTH2: &str = "oauth2";
pub const ORIGINAL: &str = "@original";
pub const PERMISSIONS: &str = "permissions";
pub const PINS: &str = "pins";
pub const PREVIEW: &str = "preview";
pub const PRIVATE: &str = "private";
pub const PRUNE: &str = "prune";
pub const PUBLIC: &str = "public";
pub const REACTIONS: &str = "reactions";
pub const RECIPIENTS: &str = "recipients";
pub const REGIONS: &str = "regions";
pub const ROLES: &str = "roles";
pub const SCHEDULED_EVENTS: &str = "scheduled-events";
pub const SEARCH: &str = "search";
pub const SLACK: &str = "slack";
pub const STAGE_INSTANCES: &str = "stage-instances";
pub const STICKER_PACKS: &str = "sticker-packs";
pub const STICKERS: &str = "stickers";
pub const TEMPLATES: &str = "templates";
pub const THREAD_MEMBERS: &str = "thread-members";
pub const THREADS: &str = "threads";
pub const TOKEN: &str = "token";
pub const TYPING: &str = "typing";
pub const USERS: &str = "users";
pub const VANITY_URL: &str = "vanity-url";
pub const VOICE: &str = "voice";
pub const VOICE_STATES: &str = "voice-states";
pub const WEBHOOKS: &str = "webhooks";
pub const WELCOME_SCREEN: &str = "welcome-screen";
pub const WIDGET: &str = "widget";
pub const WIDGET_JSON: &str = "widget.json";
pub const WIDGET_PNG: &str = "widget.png";

/// Every fixed segment.
pub const ALL: &[&str] = &[
    ACTIVE,
    APPLICATIONS,
    ARCHIVED,
    AUDIT_LOGS,
    BANS,
    BULK_DELETE,
    CALLBACK,
    CHANNELS,
    COMMANDS,
    CONNECTIONS,
    CROSSPOST,
    EMOJIS,
    FOLLOWERS,
    GITHUB,
    GUILDS,
    INTEGRATIONS,
    INTERACTIONS,
    INVITES,
    ME,
    MEMBER,
    MEMBERS,
    MESSAGES,
    NICK,
    OAUTH2,
    ORIGINAL,
    PERMISSIONS,
    PINS,
    PREVIEW,
    PRIVATE,
    PRUNE,
    PUBLIC,
    REACTIONS,
    RECIPIENTS,
    REGIONS,
    ROLES,
    SCHEDULED_EVENTS,
    SEARCH,
    SLACK,
    STAGE_INSTANCES,
    STICKER_PACKS,
    STICKERS,
    TEMPLATES,
    THREAD_MEMBERS,
    THREADS,
    TOKEN,
    TYPING,
    USERS,
    VANITY_URL,
    VOICE,
    VOICE_STATES,
    WEBHOOKS,
    WELCOME_SCREEN,
    WIDGET,
    WIDGET_JSON,
    WIDGET_PNG,
];
