// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::contacts::models::SubscriptionRequest;
use crate::domain::conversations::models::{
    AppendOutcome, Chat, ChatHeader, ChatKind, Message, Reactions,
};
use crate::domain::session::models::{NotificationPermission, SessionData, SessionStatus};
use crate::domain::shared::models::{
    ChatId, ConnectionEvent, InboundMessage, MessageId, ServerEvent, UserId,
};
use crate::ClientEvent;

/// Inputs of the reducer that don't come from the event itself.
#[derive(Debug, Clone)]
pub struct ReduceEnv {
    pub is_window_focused: bool,
    /// Creation time of chats that don't originate from a message.
    pub now: DateTime<Utc>,
}

/// Side effects requested by the reducer, executed after the session lock was released.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistChat(ChatHeader),
    PersistMessage {
        chat: ChatHeader,
        message: Message,
    },
    UpdateReactions {
        chat_id: ChatId,
        message_id: MessageId,
        reactions: Reactions,
    },
    EnterRoom {
        room: ChatId,
        nickname: String,
    },
    Notify {
        chat_id: ChatId,
        title: String,
        body: String,
    },
    ClearSessionMarkers,
    Dispatch(ClientEvent),
}

/// Applies `event` to `state`. This is the only place where inbound events mutate the session.
pub fn reduce(state: &mut SessionData, event: ServerEvent, env: &ReduceEnv) -> Vec<Effect> {
    match event {
        ServerEvent::Connection(event) => reduce_connection_event(state, event),
        ServerEvent::RosterPush(item) => {
            state.roster.apply_push(item);
            vec![Effect::Dispatch(ClientEvent::ContactListChanged)]
        }
        ServerEvent::Presence {
            from,
            availability,
            status,
        } => {
            if !state.roster.update_presence(&from, availability, status) {
                debug!("Ignoring presence from {from} who is not in our roster.");
                return vec![];
            }
            vec![Effect::Dispatch(ClientEvent::ContactChanged {
                ids: vec![from],
            })]
        }
        ServerEvent::SubscriptionRequest { from, name } => {
            if state.requests.iter().any(|r| r.user_id == from) {
                return vec![];
            }
            state.requests.push(SubscriptionRequest {
                user_id: from,
                name,
            });
            vec![Effect::Dispatch(ClientEvent::PresenceSubRequestsChanged)]
        }
        ServerEvent::ChatMessage { from, message } => {
            reduce_chat_message(state, from, message, env)
        }
        ServerEvent::GroupMessage {
            room,
            nickname,
            message,
        } => {
            let Some(nickname) = nickname else {
                warn!("Dropping group message {} without nickname.", message.id);
                return vec![];
            };
            reduce_group_message(state, room, nickname, message, env)
        }
        ServerEvent::Reaction {
            chat_id,
            sender,
            message_id,
            emojis,
        } => {
            // Rooms reflect our own reactions, which were applied when they were sent.
            let Some(reactions) = state
                .conversations
                .set_reactions(&chat_id, &message_id, &sender, emojis)
            else {
                return vec![];
            };
            vec![
                Effect::UpdateReactions {
                    chat_id: chat_id.clone(),
                    message_id: message_id.clone(),
                    reactions,
                },
                Effect::Dispatch(ClientEvent::MessagesUpdated {
                    chat_id,
                    message_ids: vec![message_id],
                }),
            ]
        }
        ServerEvent::GroupInvite { room, from, reason } => {
            reduce_group_invite(state, room, from, reason, env)
        }
    }
}

fn reduce_connection_event(state: &mut SessionData, event: ConnectionEvent) -> Vec<Effect> {
    match event {
        ConnectionEvent::Connected => vec![],
        ConnectionEvent::Disconnected { error } => {
            if !matches!(
                state.status,
                SessionStatus::Connected | SessionStatus::Connecting | SessionStatus::Restoring
            ) {
                return vec![];
            }

            let message = error
                .map(|err| err.to_string())
                .unwrap_or_else(|| "The connection was closed by the server.".to_string());
            info!("Session ended: {message}");

            state.status = SessionStatus::Failed { message };
            vec![
                Effect::ClearSessionMarkers,
                Effect::Dispatch(ClientEvent::SessionStatusChanged {
                    status: state.status.clone(),
                }),
            ]
        }
    }
}

fn reduce_chat_message(
    state: &mut SessionData,
    from: UserId,
    inbound: InboundMessage,
    env: &ReduceEnv,
) -> Vec<Effect> {
    let chat_id = ChatId::from(from.clone());
    let is_active = state.conversations.is_active(&chat_id) && env.is_window_focused;
    let contact_name = state
        .roster
        .get(&from)
        .and_then(|item| item.name.clone());

    let message = make_message(chat_id.clone(), from.to_string(), inbound, is_active);
    let timestamp = message.timestamp;

    let outcome = state
        .conversations
        .append_message(message.clone(), !is_active, || {
            let mut chat = Chat::new(chat_id.clone(), ChatKind::Individual, timestamp);
            chat.participants = vec![from.clone()];
            if let Some(name) = contact_name {
                chat.name = name;
            }
            chat
        });

    let notify = !is_active && state.notification_permission == NotificationPermission::Granted;
    appended_effects(state, outcome, chat_id, message, notify, |chat| {
        chat.name.clone()
    })
}

fn reduce_group_message(
    state: &mut SessionData,
    room: ChatId,
    nickname: String,
    inbound: InboundMessage,
    env: &ReduceEnv,
) -> Vec<Effect> {
    let is_own = state.account.as_ref().is_some_and(|account| {
        let own_nickname = state
            .conversations
            .get_chat_by_id(&room)
            .map(|chat| chat.own_nickname(account))
            .unwrap_or_else(|| account.username());
        own_nickname == nickname
    });
    let is_active = state.conversations.is_active(&room) && env.is_window_focused;

    let message = make_message(room.clone(), nickname.clone(), inbound, is_active || is_own);
    let timestamp = message.timestamp;

    let outcome = state
        .conversations
        .append_message(message.clone(), !is_active && !is_own, || {
            Chat::new(room.clone(), ChatKind::Group, timestamp)
        });

    let notify = !is_active
        && !is_own
        && state.notification_permission == NotificationPermission::Granted;
    appended_effects(state, outcome, room, message, notify, |chat| {
        format!("{} in {}", nickname, chat.name)
    })
}

/// Joins rooms we were invited to by one of our contacts.
fn reduce_group_invite(
    state: &mut SessionData,
    room: ChatId,
    from: UserId,
    reason: Option<String>,
    env: &ReduceEnv,
) -> Vec<Effect> {
    let Some(account) = state.account.clone() else {
        return vec![];
    };
    if state.roster.get(&from).is_none() {
        debug!("Ignoring invite to {room} from {from} who is not in our roster.");
        return vec![];
    }
    if state.conversations.get_chat_by_id(&room).is_some() {
        debug!("Ignoring invite to {room} which is part of our chats already.");
        return vec![];
    }

    info!(
        "{from} invited us to {room} ({}).",
        reason.as_deref().unwrap_or("no reason given")
    );

    let nickname = account.username().to_string();
    let mut chat = Chat::new(room.clone(), ChatKind::Group, env.now);
    chat.participants = vec![from];
    chat.nickname = Some(nickname.clone());
    let header = state.conversations.insert_chat(chat).header();

    vec![
        Effect::EnterRoom { room, nickname },
        Effect::PersistChat(header),
        Effect::Dispatch(ClientEvent::ChatListChanged),
    ]
}

fn make_message(chat_id: ChatId, sender: String, inbound: InboundMessage, is_read: bool) -> Message {
    Message {
        id: inbound.id,
        chat_id,
        sender,
        content: inbound.body,
        timestamp: inbound.timestamp,
        is_read,
        reactions: Default::default(),
        kind: inbound.kind,
        filename: inbound.filename,
        reply_to: inbound.reply_to,
        is_forwarded: inbound.is_forwarded,
    }
}

fn appended_effects(
    state: &SessionData,
    outcome: AppendOutcome,
    chat_id: ChatId,
    message: Message,
    notify: bool,
    title: impl FnOnce(&Chat) -> String,
) -> Vec<Effect> {
    if outcome == AppendOutcome::Duplicate {
        debug!("Ignoring message {} which was received before.", message.id);
        return vec![];
    }

    let Some(chat) = state.conversations.get_chat_by_id(&chat_id) else {
        return vec![];
    };

    let mut effects = vec![Effect::PersistMessage {
        chat: chat.header(),
        message: message.clone(),
    }];

    if notify {
        effects.push(Effect::Notify {
            chat_id: chat_id.clone(),
            title: title(chat),
            body: message.preview(),
        });
    }

    effects.push(Effect::Dispatch(ClientEvent::MessagesAppended {
        chat_id,
        message_ids: vec![message.id],
    }));
    effects.push(Effect::Dispatch(ClientEvent::ChatListChanged));
    effects
}
