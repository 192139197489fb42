// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

use std::{env, net::SocketAddr, time::Duration};

use tracing_subscriber::EnvFilter;
use url::Url;

use cronpad_server::{
    api::router, auth::AuthService, config, state::AppState, store::InMemoryStore,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let keycloak_url =
        env::var(config::KEYCLOAK_URL_ENV).expect("KEYCLOAK_URL must be set");
    Url::parse(&keycloak_url).expect("KEYCLOAK_URL must be a valid URL");

    let connect_timeout_secs: u64 = env::var(config::KEYCLOAK_CONNECT_TIMEOUT_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(config::DEFAULT_CONNECT_TIMEOUT_SECS);

    // The signing key must be in hand before the router exists; request
    // tasks never see a half-initialized verifier.
    let auth = AuthService::connect(&keycloak_url, Duration::from_secs(connect_timeout_secs))
        .await
        .expect("could not obtain a signing key from Keycloak");

    let state = AppState::new(InMemoryStore::new(), auth);
    let app = router(state);

    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| config::DEFAULT_HOST.to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(config::DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, "cronpad server listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let json = env::var(config::LOG_FORMAT_ENV)
        .is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
