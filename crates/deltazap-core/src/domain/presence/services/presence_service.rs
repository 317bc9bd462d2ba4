// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::Availability;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PresenceService: Send + Sync {
    /// Publishes an available presence. `availability` must not be `Unavailable`.
    async fn send_presence(&self, availability: Availability, status: Option<String>)
        -> Result<()>;
    async fn send_unavailable_presence(&self, status: Option<String>) -> Result<()>;
}
