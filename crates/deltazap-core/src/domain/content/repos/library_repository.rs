// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::content::models::{
    InternalLink, InternalLinkDraft, SupportMaterial, SupportMaterialDraft,
};

/// Global support materials and internal links.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait LibraryRepository: Send + Sync {
    async fn get_support_materials(&self) -> Result<Vec<SupportMaterial>>;
    async fn insert_support_material(
        &self,
        draft: SupportMaterialDraft,
        now: DateTime<Utc>,
    ) -> Result<SupportMaterial>;
    async fn update_support_material(&self, id: i64, draft: SupportMaterialDraft) -> Result<()>;
    async fn delete_support_material(&self, id: i64) -> Result<()>;

    async fn get_internal_links(&self) -> Result<Vec<InternalLink>>;
    async fn insert_internal_link(&self, draft: InternalLinkDraft) -> Result<InternalLink>;
    async fn update_internal_link(&self, id: i64, draft: InternalLinkDraft) -> Result<()>;
    async fn delete_internal_link(&self, id: i64) -> Result<()>;
}
