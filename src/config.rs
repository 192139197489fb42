// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `KEYCLOAK_URL` | Base URL of the Keycloak instance | Required |
//! | `KEYCLOAK_CONNECT_TIMEOUT_SECS` | How long to keep retrying the startup key fetch | `60` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the Keycloak base URL.
///
/// The realm certificate endpoint is resolved relative to this URL; the
/// server cannot start without it.
pub const KEYCLOAK_URL_ENV: &str = "KEYCLOAK_URL";

/// Environment variable name for the startup key-fetch deadline, in seconds.
pub const KEYCLOAK_CONNECT_TIMEOUT_ENV: &str = "KEYCLOAK_CONNECT_TIMEOUT_SECS";

/// Default startup key-fetch deadline.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Default server bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default server bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log filter applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
