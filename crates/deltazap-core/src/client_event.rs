// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::session::models::SessionStatus;
use crate::domain::shared::models::{ChatId, MessageId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The session moved to another `SessionStatus`.
    SessionStatusChanged { status: SessionStatus },

    /// Contacts were added, removed or their subscription status changed.
    ContactListChanged,

    /// The presence of contacts changed.
    ContactChanged { ids: Vec<UserId> },

    /// A presence subscription request was either added or removed.
    PresenceSubRequestsChanged,

    /// Chats were added or reordered, or their unread counts changed.
    ChatListChanged,

    /// One or many messages were either received or sent.
    MessagesAppended {
        chat_id: ChatId,
        message_ids: Vec<MessageId>,
    },

    /// One or many messages were changed after they were appended (e.g. a reaction).
    MessagesUpdated {
        chat_id: ChatId,
        message_ids: Vec<MessageId>,
    },
}
