// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::content::models::{Demand, DemandDraft, DemandStatus};
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DemandsRepository: Send + Sync {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Demand>>;
    async fn insert(
        &self,
        owner: &UserId,
        draft: DemandDraft,
        now: DateTime<Utc>,
    ) -> Result<Demand>;
    async fn update(
        &self,
        owner: &UserId,
        id: i64,
        draft: DemandDraft,
        now: DateTime<Utc>,
    ) -> Result<()>;
    async fn update_status(
        &self,
        owner: &UserId,
        id: i64,
        status: DemandStatus,
        now: DateTime<Utc>,
    ) -> Result<()>;
    async fn delete(&self, owner: &UserId, id: i64) -> Result<()>;
}
