// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPost {
    pub id: i64,
    pub owner: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
