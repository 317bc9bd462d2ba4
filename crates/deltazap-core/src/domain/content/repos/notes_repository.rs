// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::content::models::{Note, NoteDraft};
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotesRepository: Send + Sync {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Note>>;

    /// Inserts a note unless `owner` already has `limit` notes, in which case
    /// `ContentError::NoteLimitReached` is returned and nothing is written.
    async fn insert(
        &self,
        owner: &UserId,
        draft: NoteDraft,
        limit: u32,
        now: DateTime<Utc>,
    ) -> Result<Note>;

    async fn update(
        &self,
        owner: &UserId,
        id: i64,
        draft: NoteDraft,
        now: DateTime<Utc>,
    ) -> Result<()>;

    async fn delete(&self, owner: &UserId, id: i64) -> Result<()>;
}
