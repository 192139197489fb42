// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! Authentication middleware for Axum.
//!
//! [`require_auth`] wraps the `/v1` router subtree: it pulls the bearer
//! token out of the `Authorization` header, checks its signature through
//! [`AuthService::verify`], and either forwards the request untouched or
//! answers with the JSON error envelope. Exactly one of the two happens per
//! request, and a rejected request never reaches a handler.
//!
//! [`AuthService::verify`]: super::service::AuthService::verify

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::AuthError;
use crate::state::AppState;

/// Pull the bearer token out of the `Authorization` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidAuthHeader);
    }
    Ok(token)
}

/// Verify the caller's token before the request reaches a handler.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_owned(),
        Err(err) => return err.into_response(),
    };

    if let Err(err) = state.auth.verify(&token) {
        return err.into_response();
    }

    next.run(request).await
}
