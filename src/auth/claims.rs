// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! Caller identity from the verified token payload.
//!
//! Handlers behind the gate use the [`CurrentUser`] extractor to learn who
//! is calling. It re-reads the same bearer token the middleware already
//! verified and decodes only the payload segment; no signature work happens
//! here.

use axum::{extract::FromRequestParts, http::request::Parts};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use super::error::AuthError;
use super::middleware::bearer_token;
use crate::state::AppState;

/// Claims read from a Keycloak access token payload.
#[derive(Debug, Deserialize)]
pub struct Claims {
    /// Subject, the canonical Keycloak user id.
    pub sub: String,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Identity of the caller making a request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Extractor for handlers behind the verification gate.
///
/// ```rust,ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
///     // user.user_id is the token subject
/// }
/// ```
pub struct CurrentUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        Ok(CurrentUser(user_from_token(token)?))
    }
}

fn user_from_token(token: &str) -> Result<AuthenticatedUser, AuthError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::TokenFormat);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::TokenFormat)?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|_| AuthError::TokenFormat)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.preferred_username,
        email: claims.email,
    })
}
