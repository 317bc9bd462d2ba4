// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::content::models::StatusPost;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait StatusesRepository: Send + Sync {
    async fn insert(
        &self,
        owner: &UserId,
        content: String,
        now: DateTime<Utc>,
    ) -> Result<StatusPost>;
    async fn delete(&self, owner: &UserId, id: i64) -> Result<()>;

    /// Returns at most one post per user, the most recent one, if it was created within
    /// `window` before `now`.
    async fn get_statuses_for_roster(
        &self,
        user_ids: &[UserId],
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<StatusPost>>;
}
