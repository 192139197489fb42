// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::middleware::require_auth,
    models::{Event, EventPayload, Project, ProjectPayload},
    state::AppState,
};

use health::HealthResponse;

pub mod events;
pub mod health;
pub mod projects;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/events", post(events::create_event))
        .route(
            "/events/{event_id}",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/events/names/{tag_id}", get(events::used_event_names))
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        events::create_event,
        events::update_event,
        events::delete_event,
        events::used_event_names,
        projects::list_projects,
        projects::create_project,
        health::health
    ),
    components(schemas(Event, EventPayload, Project, ProjectPayload, HealthResponse)),
    tags(
        (name = "Events", description = "Tracked time entries"),
        (name = "Projects", description = "Project membership and listing"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{test_support, AuthService};
    use crate::store::InMemoryStore;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let state = AppState::new(
            InMemoryStore::new(),
            AuthService::new(test_support::public_key()),
        );
        let app = router(state);
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
