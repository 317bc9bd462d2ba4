// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use deltazap_xmpp::ConnectionError;

use crate::domain::contacts::models::Subscription;
use crate::domain::conversations::models::{ContentKind, ReplyRef};
use crate::domain::shared::models::{Availability, ChatId, MessageId, UserId};

/// Inbound protocol events after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Connection(ConnectionEvent),
    /// An entry of our roster was added, changed or removed.
    RosterPush(RosterPushItem),
    /// Live presence of a contact changed.
    Presence {
        from: UserId,
        availability: Availability,
        status: Option<String>,
    },
    /// Someone asked to see our presence.
    SubscriptionRequest {
        from: UserId,
        name: Option<String>,
    },
    ChatMessage {
        from: UserId,
        message: InboundMessage,
    },
    /// A message in a group chat. `nickname` is the resource part of the sender's address.
    GroupMessage {
        room: ChatId,
        nickname: Option<String>,
        message: InboundMessage,
    },
    /// The complete set of reactions of `sender` to a message. `sender` is a bare address in
    /// one-to-one chats and a nickname in group chats.
    Reaction {
        chat_id: ChatId,
        sender: String,
        message_id: MessageId,
        emojis: Vec<String>,
    },
    /// We were invited to join a group chat.
    GroupInvite {
        room: ChatId,
        from: UserId,
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterPushItem {
    pub user_id: UserId,
    pub name: Option<String>,
    pub subscription: Subscription,
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub id: MessageId,
    pub body: String,
    pub kind: ContentKind,
    pub filename: Option<String>,
    pub is_forwarded: bool,
    pub reply_to: Option<ReplyRef>,
    pub timestamp: DateTime<Utc>,
}
