// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! # Authentication Module
//!
//! Keycloak-backed authentication for the cronpad API.
//!
//! ## Auth Flow
//!
//! 1. At startup, [`AuthService::connect`] fetches the realm's JWKS from
//!    Keycloak (retrying until a configurable deadline) and keeps the first
//!    published key as an RSA public key for the life of the process.
//! 2. Clients send `Authorization: Bearer <token>` on every request.
//! 3. The [`middleware::require_auth`] gate checks the token's RS256
//!    signature before any handler runs; failures are answered with a JSON
//!    error envelope and never reach a handler.
//! 4. Handlers read the caller's identity from the already-verified token
//!    through the [`CurrentUser`] extractor.
//!
//! Claims such as expiry, issuer, and audience are not evaluated here;
//! signature validity alone decides whether a request passes the gate.

pub mod claims;
pub mod error;
pub mod jwks;
pub mod middleware;
pub mod service;

pub use claims::{AuthenticatedUser, CurrentUser};
pub use error::AuthError;
pub use service::AuthService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::OnceLock;

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use rsa::traits::PublicKeyParts;
    use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
    use sha2::{Digest, Sha256};

    static PRIVATE_KEY: OnceLock<RsaPrivateKey> = OnceLock::new();

    /// Shared 2048-bit test key; generated once per test binary.
    pub(crate) fn private_key() -> &'static RsaPrivateKey {
        PRIVATE_KEY.get_or_init(|| {
            RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("generate test key")
        })
    }

    pub(crate) fn public_key() -> RsaPublicKey {
        private_key().to_public_key()
    }

    /// JWKS document matching what Keycloak publishes for the test key.
    pub(crate) fn jwks_body() -> serde_json::Value {
        let public_key = public_key();
        serde_json::json!({
            "keys": [{
                "alg": "RS256",
                "kty": "RSA",
                "x5c": [],
                "n": URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be()),
                "e": URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be()),
                "kid": "test-key",
                "x5t": "test-thumbprint",
            }]
        })
    }

    /// Mint a compact-serialized RS256 token over the given claims.
    pub(crate) fn signed_token(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).expect("claims json"));
        let signing_input = format!("{header}.{payload}");

        let digest = Sha256::digest(signing_input.as_bytes());
        let signature = private_key()
            .sign(Pkcs1v15Sign::new::<Sha256>(), digest.as_slice())
            .expect("sign token");

        format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature))
    }
}
