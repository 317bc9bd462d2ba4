// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use deltazap_store::rusqlite::{params, Row};
use deltazap_store::Store;

use crate::domain::content::models::{ContentError, Demand, DemandDraft, DemandStatus};
use crate::domain::content::repos::DemandsRepository as DomainDemandsRepository;
use crate::domain::shared::models::UserId;
use crate::infra::store::{from_millis, parse_column, to_millis};

pub struct DemandsRepository {
    store: Store,
}

impl DemandsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainDemandsRepository for DemandsRepository {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Demand>> {
        let owner = owner.clone();
        let demands = self
            .store
            .interact(move |conn| {
                let mut statement = conn.prepare(
                    r#"SELECT "id", "title", "description", "status", "created_at", "updated_at"
                    FROM "demands" WHERE "user_id" = ? ORDER BY "created_at" DESC"#,
                )?;
                let demands = statement
                    .query_map(params![owner.to_string()], |row| demand_from_row(&owner, row))?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(demands)
            })
            .await?;
        Ok(demands)
    }

    async fn insert(
        &self,
        owner: &UserId,
        draft: DemandDraft,
        now: DateTime<Utc>,
    ) -> Result<Demand> {
        let owner = owner.clone();
        let demand = self
            .store
            .interact(move |conn| {
                let status = DemandStatus::default();
                conn.execute(
                    r#"INSERT INTO "demands"
                    ("user_id", "title", "description", "status", "created_at", "updated_at")
                    VALUES (?, ?, ?, ?, ?, ?)"#,
                    params![
                        owner.to_string(),
                        draft.title,
                        draft.description,
                        status.to_string(),
                        to_millis(&now),
                        to_millis(&now)
                    ],
                )?;

                Ok(Demand {
                    id: conn.last_insert_rowid(),
                    owner,
                    title: draft.title,
                    description: draft.description,
                    status,
                    created_at: now,
                    updated_at: now,
                })
            })
            .await?;
        Ok(demand)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: i64,
        draft: DemandDraft,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let owner = owner.to_string();
        let changed = self
            .store
            .interact(move |conn| {
                Ok(conn.execute(
                    r#"UPDATE "demands" SET "title" = ?, "description" = ?, "updated_at" = ?
                    WHERE "id" = ? AND "user_id" = ?"#,
                    params![draft.title, draft.description, to_millis(&now), id, owner],
                )?)
            })
            .await?;
        ensure_changed(changed, id)
    }

    async fn update_status(
        &self,
        owner: &UserId,
        id: i64,
        status: DemandStatus,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let owner = owner.to_string();
        let changed = self
            .store
            .interact(move |conn| {
                Ok(conn.execute(
                    r#"UPDATE "demands" SET "status" = ?, "updated_at" = ?
                    WHERE "id" = ? AND "user_id" = ?"#,
                    params![status.to_string(), to_millis(&now), id, owner],
                )?)
            })
            .await?;
        ensure_changed(changed, id)
    }

    async fn delete(&self, owner: &UserId, id: i64) -> Result<()> {
        let owner = owner.to_string();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"DELETE FROM "demands" WHERE "id" = ? AND "user_id" = ?"#,
                    params![id, owner],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn ensure_changed(changed: usize, id: i64) -> Result<()> {
    if changed == 0 {
        return Err(ContentError::NotFound {
            entity: "Demand",
            id,
        }
        .into());
    }
    Ok(())
}

fn demand_from_row(owner: &UserId, row: &Row) -> deltazap_store::rusqlite::Result<Demand> {
    Ok(Demand {
        id: row.get(0)?,
        owner: owner.clone(),
        title: row.get(1)?,
        description: row.get(2)?,
        status: parse_column(3, row.get(3)?)?,
        created_at: from_millis(row.get(4)?),
        updated_at: from_millis(row.get(5)?),
    })
}
