// deltazap-core/deltazap-store
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use deadpool_sqlite::rusqlite;
pub use store::{Error, Migration, Store};

mod store;
