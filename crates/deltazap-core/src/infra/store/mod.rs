// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::PathBuf;

use deltazap_store::{Error, Store};

pub use migrations::MIGRATIONS;
pub(crate) use row_ext::{parse_column, parse_json_column};
pub(crate) use timestamp::{from_millis, to_millis};

mod migrations;
mod row_ext;
mod timestamp;

/// Opens the database at `path` with the schema of this crate.
pub async fn open_store(path: impl Into<PathBuf>) -> Result<Store, Error> {
    Store::open(path, MIGRATIONS).await
}
