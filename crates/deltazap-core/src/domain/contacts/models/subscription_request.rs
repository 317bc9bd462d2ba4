// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// A pending inbound presence subscription request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRequest {
    pub user_id: UserId,
    pub name: Option<String>,
}
