// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::FullJid;
use secrecy::SecretString;

use crate::domain::shared::models::UserId;

/// What is persisted of a session so that it can be restored on the next start.
#[derive(Debug, Clone)]
pub struct SessionMarkers {
    pub user_id: UserId,
    pub full_jid: FullJid,
    pub secret: SecretString,
    pub is_admin: bool,
}
