// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use deltazap_store::rusqlite::{params, Row, TransactionBehavior};
use deltazap_store::Store;

use crate::domain::content::models::{ContentError, Note, NoteDraft, NOTE_COLORS};
use crate::domain::content::repos::NotesRepository as DomainNotesRepository;
use crate::domain::shared::models::UserId;
use crate::infra::store::{from_millis, to_millis};

pub struct NotesRepository {
    store: Store,
}

impl NotesRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainNotesRepository for NotesRepository {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Note>> {
        let owner = owner.clone();
        let notes = self
            .store
            .interact(move |conn| {
                let mut statement = conn.prepare(
                    r#"SELECT "id", "title", "content", "color", "created_at", "updated_at"
                    FROM "notes" WHERE "user_id" = ? ORDER BY "updated_at" DESC"#,
                )?;
                let notes = statement
                    .query_map(params![owner.to_string()], |row| note_from_row(&owner, row))?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(notes)
            })
            .await?;
        Ok(notes)
    }

    async fn insert(
        &self,
        owner: &UserId,
        draft: NoteDraft,
        limit: u32,
        now: DateTime<Utc>,
    ) -> Result<Note> {
        let owner = owner.clone();
        let note = self
            .store
            .interact(move |conn| {
                // Immediate, so that concurrent inserts can't both pass the limit check.
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

                let count = tx.query_row(
                    r#"SELECT COUNT(*) FROM "notes" WHERE "user_id" = ?"#,
                    params![owner.to_string()],
                    |row| row.get::<_, u32>(0),
                )?;
                if count >= limit {
                    return Ok(Err(ContentError::NoteLimitReached { limit }));
                }

                let color = NOTE_COLORS
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or_default()
                    .to_string();

                tx.execute(
                    r#"INSERT INTO "notes"
                    ("user_id", "title", "content", "color", "created_at", "updated_at")
                    VALUES (?, ?, ?, ?, ?, ?)"#,
                    params![
                        owner.to_string(),
                        draft.title,
                        draft.content,
                        color,
                        to_millis(&now),
                        to_millis(&now)
                    ],
                )?;
                let id = tx.last_insert_rowid();
                tx.commit()?;

                Ok(Ok(Note {
                    id,
                    owner,
                    title: draft.title,
                    content: draft.content,
                    color,
                    created_at: now,
                    updated_at: now,
                }))
            })
            .await??;
        Ok(note)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: i64,
        draft: NoteDraft,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let owner = owner.to_string();
        let changed = self
            .store
            .interact(move |conn| {
                Ok(conn.execute(
                    r#"UPDATE "notes" SET "title" = ?, "content" = ?, "updated_at" = ?
                    WHERE "id" = ? AND "user_id" = ?"#,
                    params![draft.title, draft.content, to_millis(&now), id, owner],
                )?)
            })
            .await?;

        if changed == 0 {
            return Err(ContentError::NotFound { entity: "Note", id }.into());
        }
        Ok(())
    }

    async fn delete(&self, owner: &UserId, id: i64) -> Result<()> {
        let owner = owner.to_string();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"DELETE FROM "notes" WHERE "id" = ? AND "user_id" = ?"#,
                    params![id, owner],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn note_from_row(owner: &UserId, row: &Row) -> deltazap_store::rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        owner: owner.clone(),
        title: row.get(1)?,
        content: row.get(2)?,
        color: row.get(3)?,
        created_at: from_millis(row.get(4)?),
        updated_at: from_millis(row.get(5)?),
    })
}
