// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynLibraryRepository, DynTimeProvider};
use crate::domain::content::models::{
    ContentError, InternalLink, InternalLinkDraft, SupportMaterial, SupportMaterialDraft,
};

/// Support materials and internal links are shared by all accounts. Reading them only requires a
/// session, changing them requires an admin session.
#[derive(InjectDependencies)]
pub struct LibraryService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    library_repo: DynLibraryRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl LibraryService {
    pub async fn load_support_materials(&self) -> Result<Vec<SupportMaterial>> {
        self.ctx.connected_account()?;
        self.library_repo.get_support_materials().await
    }

    pub async fn add_support_material(
        &self,
        draft: SupportMaterialDraft,
    ) -> Result<SupportMaterial> {
        self.ensure_admin()?;
        self.library_repo
            .insert_support_material(draft, self.time_provider.now())
            .await
    }

    pub async fn update_support_material(
        &self,
        id: i64,
        draft: SupportMaterialDraft,
    ) -> Result<()> {
        self.ensure_admin()?;
        self.library_repo.update_support_material(id, draft).await
    }

    pub async fn delete_support_material(&self, id: i64) -> Result<()> {
        self.ensure_admin()?;
        self.library_repo.delete_support_material(id).await
    }

    pub async fn load_internal_links(&self) -> Result<Vec<InternalLink>> {
        self.ctx.connected_account()?;
        self.library_repo.get_internal_links().await
    }

    pub async fn add_internal_link(&self, draft: InternalLinkDraft) -> Result<InternalLink> {
        self.ensure_admin()?;
        self.library_repo.insert_internal_link(draft).await
    }

    pub async fn update_internal_link(&self, id: i64, draft: InternalLinkDraft) -> Result<()> {
        self.ensure_admin()?;
        self.library_repo.update_internal_link(id, draft).await
    }

    pub async fn delete_internal_link(&self, id: i64) -> Result<()> {
        self.ensure_admin()?;
        self.library_repo.delete_internal_link(id).await
    }
}

impl LibraryService {
    fn ensure_admin(&self) -> Result<()> {
        self.ctx.connected_account()?;
        if !self.ctx.is_admin() {
            return Err(ContentError::AdminRequired.into());
        }
        Ok(())
    }
}
