// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tempfile::TempDir;

use deltazap_core::{open_store, Store};

mod chat_history_repository;
mod client;
mod content_repositories;
mod helpers;
mod notes_repository;
mod session_markers_repository;
mod statuses_repository;
mod xmpp_client;

/// Opens a fresh database in a temporary directory. The database is deleted once the returned
/// `TempDir` is dropped.
async fn store() -> Result<(Store, TempDir)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.sqlite3");
    println!("Opening DB at {:?}", path);
    let store = open_store(path).await?;
    Ok((store, dir))
}
