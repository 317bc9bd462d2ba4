// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynStatusesRepository, DynTimeProvider};
use crate::domain::content::models::StatusPost;

#[derive(InjectDependencies)]
pub struct StatusesService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    statuses_repo: DynStatusesRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl StatusesService {
    pub async fn post_status(&self, content: impl Into<String>) -> Result<StatusPost> {
        let owner = self.ctx.connected_account()?;
        self.statuses_repo
            .insert(&owner, content.into(), self.time_provider.now())
            .await
    }

    pub async fn delete_status(&self, id: i64) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.statuses_repo.delete(&owner, id).await
    }

    /// The latest recent post of every contact in the roster and of our own account.
    pub async fn load_roster_statuses(&self) -> Result<Vec<StatusPost>> {
        let owner = self.ctx.connected_account()?;
        let mut user_ids = self
            .ctx
            .session
            .lock()
            .roster
            .items()
            .iter()
            .map(|item| item.user_id.clone())
            .collect::<Vec<_>>();
        user_ids.push(owner);

        self.statuses_repo
            .get_statuses_for_roster(
                &user_ids,
                self.time_provider.now(),
                self.ctx.config.status_window,
            )
            .await
    }
}
