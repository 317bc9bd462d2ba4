// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use deltazap_store::rusqlite::{params, Row};
use deltazap_store::Store;

use crate::domain::content::models::{Appointment, AppointmentDraft, ContentError};
use crate::domain::content::repos::AppointmentsRepository as DomainAppointmentsRepository;
use crate::domain::shared::models::UserId;
use crate::infra::store::{from_millis, to_millis};

pub struct AppointmentsRepository {
    store: Store,
}

impl AppointmentsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainAppointmentsRepository for AppointmentsRepository {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Appointment>> {
        let owner = owner.clone();
        let appointments = self
            .store
            .interact(move |conn| {
                let mut statement = conn.prepare(
                    r#"SELECT "id", "title", "description", "starts_at", "ends_at", "location"
                    FROM "appointments" WHERE "user_id" = ? ORDER BY "starts_at" ASC"#,
                )?;
                let appointments = statement
                    .query_map(params![owner.to_string()], |row| {
                        appointment_from_row(&owner, row)
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(appointments)
            })
            .await?;
        Ok(appointments)
    }

    async fn insert(&self, owner: &UserId, draft: AppointmentDraft) -> Result<Appointment> {
        let owner = owner.clone();
        let appointment = self
            .store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT INTO "appointments"
                    ("user_id", "title", "description", "starts_at", "ends_at", "location")
                    VALUES (?, ?, ?, ?, ?, ?)"#,
                    params![
                        owner.to_string(),
                        draft.title,
                        draft.description,
                        to_millis(&draft.starts_at),
                        draft.ends_at.as_ref().map(to_millis),
                        draft.location
                    ],
                )?;

                Ok(Appointment {
                    id: conn.last_insert_rowid(),
                    owner,
                    title: draft.title,
                    description: draft.description,
                    starts_at: draft.starts_at,
                    ends_at: draft.ends_at,
                    location: draft.location,
                })
            })
            .await?;
        Ok(appointment)
    }

    async fn update(&self, owner: &UserId, id: i64, draft: AppointmentDraft) -> Result<()> {
        let owner = owner.to_string();
        let changed = self
            .store
            .interact(move |conn| {
                Ok(conn.execute(
                    r#"UPDATE "appointments"
                    SET "title" = ?, "description" = ?, "starts_at" = ?, "ends_at" = ?, "location" = ?
                    WHERE "id" = ? AND "user_id" = ?"#,
                    params![
                        draft.title,
                        draft.description,
                        to_millis(&draft.starts_at),
                        draft.ends_at.as_ref().map(to_millis),
                        draft.location,
                        id,
                        owner
                    ],
                )?)
            })
            .await?;

        if changed == 0 {
            return Err(ContentError::NotFound {
                entity: "Appointment",
                id,
            }
            .into());
        }
        Ok(())
    }

    async fn delete(&self, owner: &UserId, id: i64) -> Result<()> {
        let owner = owner.to_string();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"DELETE FROM "appointments" WHERE "id" = ? AND "user_id" = ?"#,
                    params![id, owner],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn appointment_from_row(owner: &UserId, row: &Row) -> deltazap_store::rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        owner: owner.clone(),
        title: row.get(1)?,
        description: row.get(2)?,
        starts_at: from_millis(row.get(3)?),
        ends_at: row.get::<_, Option<i64>>(4)?.map(from_millis),
        location: row.get(5)?,
    })
}
