// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! In-memory event and project storage.
//!
//! Handlers pass through here with no business logic of their own; every
//! mutation is scoped to the calling user.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Event, EventPayload, Project, ProjectPayload};

#[derive(Default)]
pub struct InMemoryStore {
    events: HashMap<String, Event>,
    projects: HashMap<String, Project>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_event(&mut self, payload: EventPayload, user_id: &str) -> Result<Event, ApiError> {
        validate_event(&payload)?;

        let id = Uuid::new_v4().to_string();
        let event = Event {
            id: id.clone(),
            user_id: user_id.to_string(),
            name: payload.name,
            tag_id: payload.tag_id,
            project_id: payload.project_id,
            start: payload.start,
            end: payload.end,
        };
        self.events.insert(id, event.clone());
        Ok(event)
    }

    pub fn update_event(
        &mut self,
        event_id: &str,
        payload: EventPayload,
        user_id: &str,
    ) -> Result<Event, ApiError> {
        validate_event(&payload)?;

        match self.events.get_mut(event_id) {
            Some(event) if event.user_id == user_id => {
                event.name = payload.name;
                event.tag_id = payload.tag_id;
                event.project_id = payload.project_id;
                event.start = payload.start;
                event.end = payload.end;
                Ok(event.clone())
            }
            _ => Err(ApiError::not_found("Event not found")),
        }
    }

    pub fn delete_event(&mut self, event_id: &str, user_id: &str) -> Result<(), ApiError> {
        match self.events.get(event_id) {
            Some(event) if event.user_id == user_id => {
                self.events.remove(event_id);
                Ok(())
            }
            _ => Err(ApiError::not_found("Event not found")),
        }
    }

    /// Distinct event names for one user and tag whose start falls in the
    /// window, sorted for stable suggestion lists.
    pub fn used_event_names(
        &self,
        user_id: &str,
        tag_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<String> {
        let mut names: Vec<String> = self
            .events
            .values()
            .filter(|event| {
                event.user_id == user_id
                    && event.tag_id == tag_id
                    && event.start >= from
                    && event.start <= to
            })
            .map(|event| event.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn insert_project(&mut self, payload: ProjectPayload, active: bool) -> Project {
        let id = Uuid::new_v4().to_string();
        let project = Project {
            id: id.clone(),
            name: payload.name,
            description: payload.description,
            active,
            members: payload.members,
        };
        self.projects.insert(id, project.clone());
        project
    }

    pub fn active_projects_for_user(&self, user_id: &str) -> Vec<Project> {
        self.projects
            .values()
            .filter(|project| {
                project.active && project.members.iter().any(|member| member == user_id)
            })
            .cloned()
            .collect()
    }
}

fn validate_event(payload: &EventPayload) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::unprocessable("name can't be empty"));
    }
    if payload.tag_id.trim().is_empty() {
        return Err(ApiError::unprocessable("tag id can't be empty"));
    }
    if payload.start > payload.end {
        return Err(ApiError::unprocessable("start must be on or before end"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Duration;

    use super::*;

    fn payload(name: &str, tag_id: &str) -> EventPayload {
        let start = Utc::now();
        EventPayload {
            name: name.into(),
            tag_id: tag_id.into(),
            project_id: None,
            start,
            end: start + Duration::minutes(30),
        }
    }

    #[test]
    fn create_event_assigns_id_and_owner() {
        let mut store = InMemoryStore::new();
        let event = store
            .create_event(payload("standup", "tag-1"), "user-1")
            .unwrap();
        assert!(!event.id.is_empty());
        assert_eq!(event.user_id, "user-1");
    }

    #[test]
    fn validation_rejects_bad_payloads() {
        let mut store = InMemoryStore::new();

        let err = store
            .create_event(payload("  ", "tag-1"), "user-1")
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err = store
            .create_event(payload("standup", ""), "user-1")
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let mut inverted = payload("standup", "tag-1");
        inverted.end = inverted.start - Duration::minutes(1);
        let err = store.create_event(inverted, "user-1").unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn update_is_scoped_to_the_owner() {
        let mut store = InMemoryStore::new();
        let event = store
            .create_event(payload("standup", "tag-1"), "user-1")
            .unwrap();

        let err = store
            .update_event(&event.id, payload("retro", "tag-1"), "someone-else")
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let updated = store
            .update_event(&event.id, payload("retro", "tag-1"), "user-1")
            .unwrap();
        assert_eq!(updated.name, "retro");
        assert_eq!(updated.id, event.id);
    }

    #[test]
    fn delete_is_scoped_to_the_owner() {
        let mut store = InMemoryStore::new();
        let event = store
            .create_event(payload("standup", "tag-1"), "user-1")
            .unwrap();

        let err = store.delete_event(&event.id, "someone-else").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        store.delete_event(&event.id, "user-1").unwrap();
        let err = store.delete_event(&event.id, "user-1").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn used_names_dedup_and_respect_tag_owner_and_window() {
        let mut store = InMemoryStore::new();
        let now = Utc::now();

        store
            .create_event(payload("standup", "tag-1"), "user-1")
            .unwrap();
        store
            .create_event(payload("standup", "tag-1"), "user-1")
            .unwrap();
        store
            .create_event(payload("retro", "tag-1"), "user-1")
            .unwrap();
        store
            .create_event(payload("other tag", "tag-2"), "user-1")
            .unwrap();
        store
            .create_event(payload("other user", "tag-1"), "user-2")
            .unwrap();

        let mut stale = payload("long ago", "tag-1");
        stale.start = now - Duration::days(30);
        stale.end = stale.start + Duration::minutes(30);
        store.create_event(stale, "user-1").unwrap();

        let names =
            store.used_event_names("user-1", "tag-1", now - Duration::days(14), now + Duration::minutes(1));
        assert_eq!(names, vec!["retro".to_string(), "standup".to_string()]);
    }

    #[test]
    fn project_listing_filters_inactive_and_non_members() {
        let mut store = InMemoryStore::new();

        let visible = store.insert_project(
            ProjectPayload {
                name: "cronpad".into(),
                description: "time tracking".into(),
                members: vec!["user-1".into(), "user-2".into()],
            },
            true,
        );
        store.insert_project(
            ProjectPayload {
                name: "archived".into(),
                description: String::new(),
                members: vec!["user-1".into()],
            },
            false,
        );
        store.insert_project(
            ProjectPayload {
                name: "other team".into(),
                description: String::new(),
                members: vec!["user-3".into()],
            },
            true,
        );

        let projects = store.active_projects_for_user("user-1");
        assert_eq!(projects, vec![visible]);
    }
}
