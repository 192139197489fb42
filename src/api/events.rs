// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};

use crate::{
    auth::CurrentUser,
    error::ApiError,
    models::{Event, EventPayload},
    state::AppState,
};

/// Window for the used-names lookup, matching the tracker UI's suggestions.
const USED_NAMES_WINDOW_DAYS: i64 = 14;

#[utoipa::path(
    post,
    path = "/v1/events",
    request_body = EventPayload,
    tag = "Events",
    responses((status = 201, body = Event))
)]
pub async fn create_event(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let mut store = state.store.write().await;
    let event = store.create_event(payload, &user.user_id)?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    put,
    path = "/v1/events/{event_id}",
    params(
        ("event_id" = String, Path, description = "Identifier of the event to update")
    ),
    request_body = EventPayload,
    tag = "Events",
    responses((status = 200, body = Event))
)]
pub async fn update_event(
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<Event>, ApiError> {
    let mut store = state.store.write().await;
    let event = store.update_event(&event_id, payload, &user.user_id)?;
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/v1/events/{event_id}",
    params(
        ("event_id" = String, Path, description = "Identifier of the event to delete")
    ),
    tag = "Events",
    responses((status = 204))
)]
pub async fn delete_event(
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete_event(&event_id, &user.user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/v1/events/names/{tag_id}",
    params(
        ("tag_id" = String, Path, description = "Tag to collect recent event names for")
    ),
    tag = "Events",
    responses((status = 200, body = [String]))
)]
pub async fn used_event_names(
    CurrentUser(user): CurrentUser,
    Path(tag_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let now = Utc::now();
    let from = now - Duration::days(USED_NAMES_WINDOW_DAYS);

    let store = state.store.read().await;
    Ok(Json(store.used_event_names(&user.user_id, &tag_id, from, now)))
}
