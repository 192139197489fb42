// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! Cronpad Server - Time Tracking Backend
//!
//! REST backend for the cronpad time tracker. At startup the server fetches
//! the Keycloak realm's signing key set, converts the published key into an
//! RSA public key, and refuses to serve traffic until that succeeds. Every
//! `/v1` request is then gated by RS256 signature verification before it
//! reaches a handler.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Keycloak key bootstrap, token verification, request gate
//! - `store` - In-memory event/project storage

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
