// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::error::Error;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use deltazap_store::rusqlite;
use deltazap_store::rusqlite::types::Type;

/// Parses a TEXT column into `T`, mapping parse failures to a rusqlite conversion error.
pub(crate) fn parse_column<T>(idx: usize, value: String) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    T::from_str(&value)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

/// Deserializes a JSON TEXT column.
pub(crate) fn parse_json_column<T: DeserializeOwned>(idx: usize, value: String) -> rusqlite::Result<T> {
    serde_json::from_str(&value)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}
