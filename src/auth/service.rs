// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! Token verification against the realm signing key.
//!
//! [`AuthService::connect`] resolves the key once at startup, retrying on a
//! fixed cadence until a deadline; after that the service is immutable and
//! [`AuthService::verify`] is a pure signature check, safe to call from any
//! number of request tasks without locking.

use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest, Sha256};
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use super::error::AuthError;
use super::jwks::{self, fetch_key_set, to_rsa_public_key};

/// Cadence of key-fetch attempts after the initial failure.
const RETRY_INTERVAL: Duration = Duration::from_secs(15);

/// Verifies bearer tokens against the Keycloak realm's signing key.
#[derive(Debug)]
pub struct AuthService {
    public_key: RsaPublicKey,
}

impl AuthService {
    /// Callers outside tests go through [`AuthService::connect`].
    pub(crate) fn new(public_key: RsaPublicKey) -> Self {
        Self { public_key }
    }

    /// Resolve the realm signing key, retrying until `timeout` elapses.
    ///
    /// The first key in the published set is used unconditionally; the realm
    /// is expected to expose a single active RS256 key, and no `kid`/`alg`
    /// selection is performed. After an initial failure, attempts repeat
    /// every 15 seconds on a timer that ticks independently of how long each
    /// attempt takes, and the overall deadline is measured from that first
    /// failure. When the deadline wins, the error names the configured
    /// timeout and the process must not serve traffic.
    pub async fn connect(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        Self::connect_with_retry_interval(base_url, timeout, RETRY_INTERVAL).await
    }

    async fn connect_with_retry_interval(
        base_url: &str,
        timeout: Duration,
        retry_interval: Duration,
    ) -> Result<Self, AuthError> {
        let client = jwks::http_client()?;

        match Self::try_fetch_key(&client, base_url).await {
            Ok(key) => return Ok(Self::new(key)),
            Err(err) => tracing::warn!(%err, "initial Keycloak key fetch failed, retrying"),
        }

        let deadline = sleep(timeout);
        tokio::pin!(deadline);

        let mut ticker = interval_at(Instant::now() + retry_interval, retry_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut deadline => return Err(AuthError::ConnectTimeout(timeout)),
                _ = ticker.tick() => match Self::try_fetch_key(&client, base_url).await {
                    Ok(key) => return Ok(Self::new(key)),
                    Err(err) => tracing::warn!(%err, "Keycloak key fetch attempt failed"),
                },
            }
        }
    }

    async fn try_fetch_key(
        client: &reqwest::Client,
        base_url: &str,
    ) -> Result<RsaPublicKey, AuthError> {
        let key_set = fetch_key_set(client, base_url).await?;
        let jwk = key_set
            .keys
            .first()
            .ok_or_else(|| AuthError::Decode("key set contains no keys".to_string()))?;
        let key = to_rsa_public_key(jwk)?;

        tracing::info!("connected to Keycloak, realm signing key loaded");
        Ok(key)
    }

    /// Check the RS256 signature of a compact-serialized token.
    pub fn verify(&self, token: &str) -> Result<(), AuthError> {
        verify_signature(token, &self.public_key)
    }
}

/// RSASSA-PKCS1-v1_5/SHA-256 check of `header.payload` against the third
/// segment. A wrong segment count fails here, before any decoding or
/// hashing. Claims are deliberately not inspected.
fn verify_signature(token: &str, public_key: &RsaPublicKey) -> Result<(), AuthError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return Err(AuthError::TokenFormat);
    }

    // The signed message is the first two segments exactly as received.
    let signing_input = format!("{}.{}", parts[0], parts[1]);
    let signature = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|_| AuthError::SignatureDecode)?;

    let digest = Sha256::digest(signing_input.as_bytes());
    public_key
        .verify(Pkcs1v15Sign::new::<Sha256>(), digest.as_slice(), &signature)
        .map_err(|_| AuthError::SignatureInvalid)
}
