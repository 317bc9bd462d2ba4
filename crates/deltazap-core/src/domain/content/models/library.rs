// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct SupportMaterial {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportMaterialDraft {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalLink {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalLinkDraft {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}
