// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::UserId;

/// Background colors a new note is randomly assigned one of.
pub const NOTE_COLORS: &[&str] = &[
    "#fff475", "#fbbc04", "#f28b82", "#ccff90", "#a7ffeb", "#cbf0f8", "#aecbfa", "#d7aefb",
    "#fdcfe8",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub owner: UserId,
    pub title: String,
    pub content: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}
