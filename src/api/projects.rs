// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::CurrentUser,
    error::ApiError,
    models::{Project, ProjectPayload},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/v1/projects",
    tag = "Projects",
    responses((status = 200, body = [Project]))
)]
pub async fn list_projects(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.active_projects_for_user(&user.user_id)))
}

#[utoipa::path(
    post,
    path = "/v1/projects",
    request_body = ProjectPayload,
    tag = "Projects",
    responses((status = 201, body = Project))
)]
pub async fn create_project(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::unprocessable("name can't be empty"));
    }

    let mut store = state.store.write().await;
    let project = store.insert_project(payload, true);
    Ok((StatusCode::CREATED, Json(project)))
}
