// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{Roster, SubscriptionRequest};
use crate::domain::conversations::models::ConversationStore;
use crate::domain::session::models::SessionStatus;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPermission {
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// The state of the current session. Mutated only by the session service and the stanza
/// reducer.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub status: SessionStatus,
    pub account: Option<UserId>,
    pub is_admin: bool,
    pub roster: Roster,
    pub requests: Vec<SubscriptionRequest>,
    pub conversations: ConversationStore,
    pub notification_permission: NotificationPermission,
    /// Incremented for every connection attempt. Results carrying an older generation are
    /// discarded.
    pub generation: u64,
}

impl SessionData {
    /// Resets everything but the generation counter.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = SessionData {
            generation,
            ..Default::default()
        };
    }

    pub fn remove_request(&mut self, user_id: &UserId) -> bool {
        let count = self.requests.len();
        self.requests.retain(|request| &request.user_id != user_id);
        count != self.requests.len()
    }
}
