// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::shared::models::UserId;

/// Progress of a demand. Any transition is allowed. The labels are the ones stored in the
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
pub enum DemandStatus {
    #[default]
    #[strum(serialize = "Pendente")]
    Pending,
    #[strum(serialize = "Em andamento")]
    InProgress,
    #[strum(serialize = "Concluída")]
    Done,
    #[strum(serialize = "Cancelada")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Demand {
    pub id: i64,
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub status: DemandStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemandDraft {
    pub title: String,
    pub description: String,
}
