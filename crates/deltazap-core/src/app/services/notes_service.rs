// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynNotesRepository, DynTimeProvider};
use crate::domain::content::models::{Note, NoteDraft};

#[derive(InjectDependencies)]
pub struct NotesService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    notes_repo: DynNotesRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl NotesService {
    pub async fn load_notes(&self) -> Result<Vec<Note>> {
        let owner = self.ctx.connected_account()?;
        self.notes_repo.get_all(&owner).await
    }

    /// Fails with `ContentError::NoteLimitReached` once the configured number of notes exists.
    pub async fn create_note(&self, draft: NoteDraft) -> Result<Note> {
        let owner = self.ctx.connected_account()?;
        self.notes_repo
            .insert(
                &owner,
                draft,
                self.ctx.config.max_notes_per_user,
                self.time_provider.now(),
            )
            .await
    }

    pub async fn update_note(&self, id: i64, draft: NoteDraft) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.notes_repo
            .update(&owner, id, draft, self.time_provider.now())
            .await
    }

    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.notes_repo.delete(&owner, id).await
    }
}
