// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::content::models::{Appointment, AppointmentDraft};
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AppointmentsRepository: Send + Sync {
    /// Returns the appointments of `owner` ordered by start time.
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Appointment>>;
    async fn insert(&self, owner: &UserId, draft: AppointmentDraft) -> Result<Appointment>;
    async fn update(&self, owner: &UserId, id: i64, draft: AppointmentDraft) -> Result<()>;
    async fn delete(&self, owner: &UserId, id: i64) -> Result<()>;
}
