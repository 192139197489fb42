// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! JWKS (JSON Web Key Set) fetching and key conversion.
//!
//! Keycloak publishes the realm's signing keys at a well-known certificate
//! endpoint. This module performs the single fetch of that document and
//! converts one published key into an [`RsaPublicKey`]. Retrying on failure
//! is the bootstrap loop's job, not this module's.
//!
//! The key payload is treated as opaque: fields that verification does not
//! need (`alg`, `kty`, `x5c`, `kid`, `x5t`) are carried for completeness but
//! never validated.

use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rsa::{BigUint, RsaPublicKey};
use serde::Deserialize;

use super::error::AuthError;

/// Realm certificate endpoint, relative to the Keycloak base URL.
pub const CERTS_PATH: &str = "/auth/realms/cronpad/protocol/openid-connect/certs";

/// Per-request timeout for the certificate fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Widest public exponent encoding accepted; 65537 needs 3 bytes.
const MAX_EXPONENT_BYTES: usize = 3;

/// Key set as published by the realm certificate endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

/// One published key. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Jwk {
    pub alg: String,
    pub kty: String,
    pub x5c: Vec<String>,
    /// Modulus, base64url without padding, big-endian.
    pub n: String,
    /// Public exponent, base64url without padding, big-endian.
    pub e: String,
    pub kid: String,
    pub x5t: Option<String>,
}

/// HTTP client used for the certificate fetch.
pub(crate) fn http_client() -> Result<reqwest::Client, AuthError> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| AuthError::Network(err.to_string()))
}

/// Fetch the realm's key set from the certificate endpoint.
///
/// Transport failures, timeouts, and non-success statuses are `Network`
/// errors; a body that does not decode as a key set is a `Decode` error.
pub async fn fetch_key_set(client: &reqwest::Client, base_url: &str) -> Result<JwkSet, AuthError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), CERTS_PATH);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| AuthError::Network(err.to_string()))?;

    if !response.status().is_success() {
        return Err(AuthError::Network(format!(
            "HTTP {} from certificate endpoint",
            response.status()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| AuthError::Network(err.to_string()))?;

    serde_json::from_slice(&body).map_err(|err| AuthError::Decode(err.to_string()))
}

/// Convert a published key into an RSA public key.
pub fn to_rsa_public_key(jwk: &Jwk) -> Result<RsaPublicKey, AuthError> {
    let modulus = URL_SAFE_NO_PAD
        .decode(&jwk.n)
        .map_err(|err| AuthError::Decode(format!("modulus: {err}")))?;
    let exponent = URL_SAFE_NO_PAD
        .decode(&jwk.e)
        .map_err(|err| AuthError::Decode(format!("exponent: {err}")))?;

    if exponent.is_empty() {
        return Err(AuthError::Decode("exponent is empty".to_string()));
    }
    if exponent.len() > MAX_EXPONENT_BYTES {
        return Err(AuthError::UnsupportedExponent(exponent.len()));
    }

    // Keycloak publishes 65537 as the 3-byte "AQAB"; shorter encodings are
    // padded to a full big-endian u32.
    let mut padded = [0u8; 4];
    padded[4 - exponent.len()..].copy_from_slice(&exponent);
    let exponent = u32::from_be_bytes(padded);

    RsaPublicKey::new(BigUint::from_bytes_be(&modulus), BigUint::from(exponent))
        .map_err(|err| AuthError::Decode(err.to_string()))
}
