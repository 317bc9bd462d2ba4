// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use deltazap_store::rusqlite::{params, OptionalExtension};
use deltazap_store::Store;

use crate::domain::session::models::SessionMarkers;
use crate::domain::session::repos::SessionMarkersRepository as DomainSessionMarkersRepository;
use crate::infra::store::parse_column;

pub struct SessionMarkersRepository {
    store: Store,
}

impl SessionMarkersRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainSessionMarkersRepository for SessionMarkersRepository {
    async fn get(&self) -> Result<Option<SessionMarkers>> {
        let markers = self
            .store
            .interact(|conn| {
                Ok(conn
                    .query_row(
                        r#"SELECT "user_id", "full_jid", "secret", "is_admin"
                        FROM "session_markers" WHERE "key" = 'current'"#,
                        [],
                        |row| {
                            Ok(SessionMarkers {
                                user_id: parse_column(0, row.get(0)?)?,
                                full_jid: parse_column(1, row.get(1)?)?,
                                secret: SecretString::new(row.get(2)?),
                                is_admin: row.get(3)?,
                            })
                        },
                    )
                    .optional()?)
            })
            .await?;
        Ok(markers)
    }

    async fn set(&self, markers: &SessionMarkers) -> Result<()> {
        let user_id = markers.user_id.to_string();
        let full_jid = markers.full_jid.to_string();
        let secret = markers.secret.expose_secret().clone();
        let is_admin = markers.is_admin;

        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT OR REPLACE INTO "session_markers"
                    ("key", "user_id", "full_jid", "secret", "is_admin")
                    VALUES ('current', ?, ?, ?, ?)"#,
                    params![user_id, full_jid, secret, is_admin],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.store
            .interact(|conn| {
                conn.execute(r#"DELETE FROM "session_markers""#, [])?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}
