// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use deltazap_store::rusqlite::params;
use deltazap_store::Store;

use crate::domain::content::models::{
    ContentError, InternalLink, InternalLinkDraft, SupportMaterial, SupportMaterialDraft,
};
use crate::domain::content::repos::LibraryRepository as DomainLibraryRepository;
use crate::infra::store::{from_millis, to_millis};

pub struct LibraryRepository {
    store: Store,
}

impl LibraryRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainLibraryRepository for LibraryRepository {
    async fn get_support_materials(&self) -> Result<Vec<SupportMaterial>> {
        let materials = self
            .store
            .interact(|conn| {
                let mut statement = conn.prepare(
                    r#"SELECT "id", "title", "description", "url", "created_at"
                    FROM "support_materials" ORDER BY "created_at" DESC"#,
                )?;
                let materials = statement
                    .query_map([], |row| {
                        Ok(SupportMaterial {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get(2)?,
                            url: row.get(3)?,
                            created_at: from_millis(row.get(4)?),
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(materials)
            })
            .await?;
        Ok(materials)
    }

    async fn insert_support_material(
        &self,
        draft: SupportMaterialDraft,
        now: DateTime<Utc>,
    ) -> Result<SupportMaterial> {
        let material = self
            .store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT INTO "support_materials" ("title", "description", "url", "created_at")
                    VALUES (?, ?, ?, ?)"#,
                    params![draft.title, draft.description, draft.url, to_millis(&now)],
                )?;
                Ok(SupportMaterial {
                    id: conn.last_insert_rowid(),
                    title: draft.title,
                    description: draft.description,
                    url: draft.url,
                    created_at: now,
                })
            })
            .await?;
        Ok(material)
    }

    async fn update_support_material(&self, id: i64, draft: SupportMaterialDraft) -> Result<()> {
        let changed = self
            .store
            .interact(move |conn| {
                Ok(conn.execute(
                    r#"UPDATE "support_materials" SET "title" = ?, "description" = ?, "url" = ?
                    WHERE "id" = ?"#,
                    params![draft.title, draft.description, draft.url, id],
                )?)
            })
            .await?;
        ensure_changed(changed, "Support material", id)
    }

    async fn delete_support_material(&self, id: i64) -> Result<()> {
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"DELETE FROM "support_materials" WHERE "id" = ?"#,
                    params![id],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn get_internal_links(&self) -> Result<Vec<InternalLink>> {
        let links = self
            .store
            .interact(|conn| {
                let mut statement = conn.prepare(
                    r#"SELECT "id", "title", "url", "description"
                    FROM "internal_links" ORDER BY "title" ASC"#,
                )?;
                let links = statement
                    .query_map([], |row| {
                        Ok(InternalLink {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            url: row.get(2)?,
                            description: row.get(3)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(links)
            })
            .await?;
        Ok(links)
    }

    async fn insert_internal_link(&self, draft: InternalLinkDraft) -> Result<InternalLink> {
        let link = self
            .store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT INTO "internal_links" ("title", "url", "description")
                    VALUES (?, ?, ?)"#,
                    params![draft.title, draft.url, draft.description],
                )?;
                Ok(InternalLink {
                    id: conn.last_insert_rowid(),
                    title: draft.title,
                    url: draft.url,
                    description: draft.description,
                })
            })
            .await?;
        Ok(link)
    }

    async fn update_internal_link(&self, id: i64, draft: InternalLinkDraft) -> Result<()> {
        let changed = self
            .store
            .interact(move |conn| {
                Ok(conn.execute(
                    r#"UPDATE "internal_links" SET "title" = ?, "url" = ?, "description" = ?
                    WHERE "id" = ?"#,
                    params![draft.title, draft.url, draft.description, id],
                )?)
            })
            .await?;
        ensure_changed(changed, "Internal link", id)
    }

    async fn delete_internal_link(&self, id: i64) -> Result<()> {
        self.store
            .interact(move |conn| {
                conn.execute(r#"DELETE FROM "internal_links" WHERE "id" = ?"#, params![id])?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn ensure_changed(changed: usize, entity: &'static str, id: i64) -> Result<()> {
    if changed == 0 {
        return Err(ContentError::NotFound { entity, id }.into());
    }
    Ok(())
}
