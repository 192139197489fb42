// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Cronpad

//! # API Data Models
//!
//! Request and response data structures for the REST API. All types derive
//! `Serialize`, `Deserialize`, and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! ## Model Categories
//!
//! - **Events**: Tracked time entries, owned by the user who created them
//! - **Projects**: Named groupings of work that users are members of

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Event Models
// =============================================================================

/// A tracked time entry.
///
/// Events belong to the user who created them; the owner is taken from the
/// verified token and is not settable by clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Event {
    /// Unique identifier for this event.
    pub id: String,
    /// Owner of the event (token subject).
    pub user_id: String,
    /// Display name, also used for name suggestions.
    pub name: String,
    /// Tag the event is filed under.
    pub tag_id: String,
    /// Project the event belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// When the tracked period started.
    pub start: DateTime<Utc>,
    /// When the tracked period ended.
    pub end: DateTime<Utc>,
}

/// Request body for creating or updating an event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPayload {
    /// Display name for the event.
    pub name: String,
    /// Tag to file the event under.
    pub tag_id: String,
    /// Project the event belongs to, if any.
    #[serde(default)]
    pub project_id: Option<String>,
    /// When the tracked period started.
    pub start: DateTime<Utc>,
    /// When the tracked period ended.
    pub end: DateTime<Utc>,
}

// =============================================================================
// Project Models
// =============================================================================

/// A named grouping of work.
///
/// Users only see projects that are active and list them as a member.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the project is currently active.
    pub active: bool,
    /// User ids of the project members.
    pub members: Vec<String>,
}

/// Request body for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectPayload {
    /// Project name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// User ids of the project members.
    #[serde(default)]
    pub members: Vec<String>,
}
