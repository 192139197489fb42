// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthService;
use crate::store::InMemoryStore;

/// Shared application state handed to every handler.
///
/// The auth service is resolved before the router is built, so request
/// tasks only ever observe a fully constructed verifier; no lock guards it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: InMemoryStore, auth: AuthService) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth: Arc::new(auth),
        }
    }
}
