// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("You've reached the limit of {limit} notes. Delete a note to create a new one.")]
    NoteLimitReached { limit: u32 },
    #[error("This action requires administrator privileges.")]
    AdminRequired,
    #[error("{entity} with id {id} does not exist.")]
    NotFound { entity: &'static str, id: i64 },
}
