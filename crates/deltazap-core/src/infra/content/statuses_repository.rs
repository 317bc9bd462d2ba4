// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;

use deltazap_store::rusqlite::types::Value;
use deltazap_store::rusqlite::{params, params_from_iter};
use deltazap_store::Store;

use crate::domain::content::models::StatusPost;
use crate::domain::content::repos::StatusesRepository as DomainStatusesRepository;
use crate::domain::shared::models::UserId;
use crate::infra::store::{from_millis, parse_column, to_millis};

pub struct StatusesRepository {
    store: Store,
}

impl StatusesRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainStatusesRepository for StatusesRepository {
    async fn insert(
        &self,
        owner: &UserId,
        content: String,
        now: DateTime<Utc>,
    ) -> Result<StatusPost> {
        let owner = owner.clone();
        let post = self
            .store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT INTO "statuses" ("user_id", "content", "created_at") VALUES (?, ?, ?)"#,
                    params![owner.to_string(), content, to_millis(&now)],
                )?;
                Ok(StatusPost {
                    id: conn.last_insert_rowid(),
                    owner,
                    content,
                    created_at: now,
                })
            })
            .await?;
        Ok(post)
    }

    async fn delete(&self, owner: &UserId, id: i64) -> Result<()> {
        let owner = owner.to_string();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"DELETE FROM "statuses" WHERE "id" = ? AND "user_id" = ?"#,
                    params![id, owner],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn get_statuses_for_roster(
        &self,
        user_ids: &[UserId],
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<StatusPost>> {
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let placeholders = user_ids.iter().map(|_| "?").join(", ");
        let sql = format!(
            r#"SELECT "id", "user_id", "content", "created_at" FROM (
                SELECT "id", "user_id", "content", "created_at",
                    ROW_NUMBER() OVER (PARTITION BY "user_id" ORDER BY "created_at" DESC) AS "rank"
                FROM "statuses"
                WHERE "user_id" IN ({placeholders})
            )
            WHERE "rank" = 1 AND "created_at" >= ?
            ORDER BY "created_at" DESC"#
        );

        let mut values = user_ids
            .iter()
            .map(|id| Value::Text(id.to_string()))
            .collect::<Vec<_>>();
        values.push(Value::Integer(to_millis(&(now - window))));

        let posts = self
            .store
            .interact(move |conn| {
                let mut statement = conn.prepare(&sql)?;
                let posts = statement
                    .query_map(params_from_iter(values.iter()), |row| {
                        Ok(StatusPost {
                            id: row.get(0)?,
                            owner: parse_column(1, row.get(1)?)?,
                            content: row.get(2)?,
                            created_at: from_millis(row.get(3)?),
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(posts)
            })
            .await?;
        Ok(posts)
    }
}
