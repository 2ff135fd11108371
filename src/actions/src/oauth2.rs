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

//! OAuth2 token exchange and authorization information.
//!
//! The token exchange is the only operation in the catalog with a form
//! encoded payload.

use crate::model::{AuthorizationInformation, TokenResponse};
use crate::paths::{APPLICATIONS, ME, OAUTH2, TOKEN};
use crate::request::action;
use base::Result;
use base::action::Action;
use base::descriptor::{Body, Method};
use base::query::Query;
use serde_json::Value;

/// How the application proves it was granted access.
#[derive(Clone, Debug, PartialEq)]
pub enum Grant {
    /// Exchanges the code received in the redirect.
    AuthorizationCode { code: String },
    /// Exchanges a refresh token for a new access token.
    RefreshToken { refresh_token: String },
}

impl Grant {
    pub fn authorization_code<T: Into<String>>(code: T) -> Self {
        Self::AuthorizationCode { code: code.into() }
    }

    pub fn refresh_token<T: Into<String>>(refresh_token: T) -> Self {
        Self::RefreshToken {
            refresh_token: refresh_token.into(),
        }
    }

    /// The value of the `grant_type` field.
    pub fn grant_type(&self) -> &'static str {
        match self {
            Self::AuthorizationCode { .. } => "authorization_code",
            Self::RefreshToken { .. } => "refresh_token",
        }
    }
}

/// The parameters of a token exchange.
///
/// # Example
/// ```
/// use discord_actions::oauth2::{self, Grant, TokenExchange};
/// # fn main() -> discord_actions::Result<()> {
/// let params = TokenExchange::new(
///     "client",
///     "secret",
///     "https://example.com/callback",
///     "identify",
///     Grant::authorization_code("abc"),
/// );
/// let action = oauth2::token_exchange(&params)?;
/// assert_eq!(action.descriptor().to_string(), "POST oauth2/token");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TokenExchange {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Space separated scopes.
    pub scope: String,
    pub grant: Grant,
}

impl TokenExchange {
    pub fn new<T, U, V, W>(
        client_id: T,
        client_secret: U,
        redirect_uri: V,
        scope: W,
        grant: Grant,
    ) -> Self
    where
        T: Into<String>,
        U: Into<String>,
        V: Into<String>,
        W: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
            grant,
        }
    }

    /// The form fields, `grant_type` selects the field that carries the
    /// grant.
    pub fn to_form(&self) -> Query {
        let mut form = Query::new()
            .add("client_id", &self.client_id)
            .add("client_secret", &self.client_secret)
            .add("grant_type", &self.grant.grant_type());
        match &self.grant {
            Grant::AuthorizationCode { code } => form.push("code", code.as_str()),
            Grant::RefreshToken { refresh_token } => {
                form.push("refresh_token", refresh_token.as_str())
            }
        }
        form.add("redirect_uri", &self.redirect_uri)
            .add("scope", &self.scope)
    }
}

/// Exchanges an authorization code, or a refresh token, for an access token.
pub fn token_exchange(params: &TokenExchange) -> Result<Action<TokenResponse>> {
    action(
        Method::Post,
        &[OAUTH2, TOKEN],
        None,
        Some(Body::form(&params.to_form())),
    )
}

/// Fetches the application that owns the bot token.
pub fn get_current_application_information() -> Result<Action<Value>> {
    action(Method::Get, &[OAUTH2, APPLICATIONS, ME], None, None)
}

/// Fetches the authorization of the bearer token.
pub fn get_current_authorization_information() -> Result<Action<AuthorizationInformation>> {
    action(Method::Get, &[OAUTH2, ME], None, None)
}
