// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! Authentication errors.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Authentication error type.
///
/// The first five variants are per-request outcomes and map to a 401
/// response; the remainder occur while resolving the realm signing key at
/// startup and are only ever seen by the bootstrap caller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No authorization header present
    #[error("Authorization header is required")]
    MissingAuthHeader,
    /// Invalid authorization header format
    #[error("Invalid authorization header format (expected 'Bearer <token>')")]
    InvalidAuthHeader,
    /// Token is not a three-segment compact serialization
    #[error("Token is not a three-segment compact serialization")]
    TokenFormat,
    /// Token signature segment is not valid base64url
    #[error("Token signature is not valid base64url")]
    SignatureDecode,
    /// Token signature does not match the realm signing key
    #[error("Token signature verification failed")]
    SignatureInvalid,
    /// Keycloak could not be reached
    #[error("Failed to reach authentication server: {0}")]
    Network(String),
    /// Key set response or key material could not be decoded
    #[error("Unable to read key set: {0}")]
    Decode(String),
    /// Published public exponent is wider than the supported 3 bytes
    #[error("Unsupported public exponent of {0} bytes")]
    UnsupportedExponent(usize),
    /// No key could be fetched before the startup deadline
    #[error("Authentication server connection failed after {0:?} timeout")]
    ConnectTimeout(Duration),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "missing_auth_header",
            AuthError::InvalidAuthHeader => "invalid_auth_header",
            AuthError::TokenFormat => "malformed_token",
            AuthError::SignatureDecode => "invalid_signature_encoding",
            AuthError::SignatureInvalid => "invalid_signature",
            AuthError::Network(_) => "network_error",
            AuthError::Decode(_) => "key_decode_error",
            AuthError::UnsupportedExponent(_) => "unsupported_exponent",
            AuthError::ConnectTimeout(_) => "connect_timeout",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::TokenFormat
            | AuthError::SignatureDecode
            | AuthError::SignatureInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Network(_)
            | AuthError::Decode(_)
            | AuthError::UnsupportedExponent(_)
            | AuthError::ConnectTimeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
