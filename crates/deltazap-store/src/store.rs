// deltazap-core/deltazap-store
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::PathBuf;

use deadpool_sqlite::{Config, CreatePoolError, Hook, InteractError, Pool, PoolError, Runtime};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use tracing::{debug, error, info};

const SETTINGS_TABLE: &str = "__store_settings";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    CreatePool(#[from] CreatePoolError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("{0}")]
    Interact(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    JSON(#[from] serde_json::Error),
}

impl From<InteractError> for Error {
    fn from(value: InteractError) -> Self {
        Self::Interact(value.to_string())
    }
}

/// A schema migration. Migrations are applied in order, the version of the database is the
/// number of migrations applied so far.
pub type Migration = &'static str;

#[derive(Clone)]
pub struct Store {
    pool: Pool,
}

impl Store {
    /// Opens (or creates) the database at `path` and brings its schema up to date by running
    /// all `migrations` that haven't been applied yet.
    pub async fn open(path: impl Into<PathBuf>, migrations: &'static [Migration]) -> Result<Self, Error> {
        let path = path.into();
        info!("Opening database at {}…", path.display());

        let pool = Config::new(path)
            .builder(Runtime::Tokio1)
            .map_err(CreatePoolError::Config)?
            .post_create(Hook::sync_fn(|obj, _| {
                let Ok(mut conn) = obj.lock() else {
                    error!("Failed to configure DB connection. Lock was poisoned.");
                    return Ok(());
                };

                conn.trace(Some(|query| {
                    debug!("{}", query);
                }));

                if let Err(err) = conn.execute_batch(
                    r#"
                PRAGMA journal_mode = WAL;
                PRAGMA synchronous = normal;
                PRAGMA foreign_keys = ON;
                "#,
                ) {
                    error!("Failed to configure DB connection. {}", err);
                }

                Ok(())
            }))
            .build()
            .map_err(CreatePoolError::Build)?;

        let store = Store { pool };
        store
            .interact(move |conn| Self::migrate(conn, migrations))
            .await?;
        Ok(store)
    }

    /// Runs `f` with a pooled connection on a blocking thread.
    pub async fn interact<F, R>(&self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Connection) -> Result<R, Error> + Send + 'static,
        R: Send + 'static,
    {
        let obj = self.pool.get().await?;
        obj.interact(f).await?
    }

    /// Returns the number of migrations that were applied to the database.
    pub async fn version(&self) -> Result<u32, Error> {
        self.interact(|conn| Self::current_version(conn)).await
    }

    fn current_version(conn: &Connection) -> Result<u32, Error> {
        Ok(conn
            .query_row(
                &format!(
                    r#"SELECT "value" FROM "{}" WHERE "key" = 'version'"#,
                    SETTINGS_TABLE
                ),
                [],
                |row| row.get::<_, u32>(0),
            )
            .optional()?
            .unwrap_or(0))
    }

    fn migrate(conn: &mut Connection, migrations: &[Migration]) -> Result<(), Error> {
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{}" (
                "key" TEXT PRIMARY KEY,
                "value" BLOB NOT NULL
            )"#,
            SETTINGS_TABLE
        ))?;

        let current_version = Self::current_version(conn)? as usize;
        if current_version >= migrations.len() {
            return Ok(());
        }

        info!(
            "Migrating database from version {} to {}…",
            current_version,
            migrations.len()
        );

        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        for migration in &migrations[current_version..] {
            tx.execute_batch(migration)?;
        }
        tx.execute(
            &format!(
                r#"INSERT OR REPLACE INTO "{}" ("key", "value") VALUES ('version', ?)"#,
                SETTINGS_TABLE
            ),
            params![migrations.len() as u32],
        )?;
        tx.commit()?;

        Ok(())
    }
}
