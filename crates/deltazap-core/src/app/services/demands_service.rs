// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynDemandsRepository, DynTimeProvider};
use crate::domain::content::models::{Demand, DemandDraft, DemandStatus};

#[derive(InjectDependencies)]
pub struct DemandsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    demands_repo: DynDemandsRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl DemandsService {
    pub async fn load_demands(&self) -> Result<Vec<Demand>> {
        let owner = self.ctx.connected_account()?;
        self.demands_repo.get_all(&owner).await
    }

    /// New demands start out as `DemandStatus::Pending`.
    pub async fn create_demand(&self, draft: DemandDraft) -> Result<Demand> {
        let owner = self.ctx.connected_account()?;
        self.demands_repo
            .insert(&owner, draft, self.time_provider.now())
            .await
    }

    pub async fn update_demand(&self, id: i64, draft: DemandDraft) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.demands_repo
            .update(&owner, id, draft, self.time_provider.now())
            .await
    }

    pub async fn set_demand_status(&self, id: i64, status: DemandStatus) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.demands_repo
            .update_status(&owner, id, status, self.time_provider.now())
            .await
    }

    pub async fn delete_demand(&self, id: i64) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.demands_repo.delete(&owner, id).await
    }
}
