// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::session::models::SessionMarkers;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionMarkersRepository: Send + Sync {
    async fn get(&self) -> Result<Option<SessionMarkers>>;
    async fn set(&self, markers: &SessionMarkers) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
