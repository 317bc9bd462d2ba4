// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use tracing::warn;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynChatHistoryRepository, DynClientEventDispatcher, DynMessagingService,
    DynTimeProvider,
};
use crate::domain::conversations::models::{
    AppendOutcome, Chat, ChatKind, ContentKind, Message, ReplyRef,
};
use crate::domain::conversations::services::OutgoingMessage;
use crate::domain::shared::models::{ChatId, MessageId, UserId};
use crate::ClientEvent;

/// The result of sending a message. The message is part of its chat in all cases but
/// `TransportFailed`.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Delivered { id: MessageId },
    /// The message was sent but could not be written to the local history.
    PersistenceFailed { id: MessageId, message: String },
    /// The message could not be handed to the server.
    TransportFailed { message: String },
}

#[derive(InjectDependencies)]
pub struct MessagingService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    chat_history_repo: DynChatHistoryRepository,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    messaging_service: DynMessagingService,
    #[inject]
    time_provider: DynTimeProvider,
}

impl MessagingService {
    pub async fn send_message(
        &self,
        to: &ChatId,
        body: impl Into<String>,
        kind: ContentKind,
        filename: Option<String>,
    ) -> Result<SendOutcome> {
        self.send(
            to,
            OutgoingMessage {
                body: body.into(),
                kind,
                filename,
                is_forwarded: false,
                reply_to: None,
            },
        )
        .await
    }

    /// Sends a copy of the message `message_id` of chat `from` to `to`.
    pub async fn forward_message(
        &self,
        from: &ChatId,
        message_id: &MessageId,
        to: &ChatId,
    ) -> Result<SendOutcome> {
        let original = self.load_message(from, message_id)?;
        self.send(
            to,
            OutgoingMessage {
                body: original.content,
                kind: original.kind,
                filename: original.filename,
                is_forwarded: true,
                reply_to: None,
            },
        )
        .await
    }

    pub async fn reply_to_message(
        &self,
        chat_id: &ChatId,
        message_id: &MessageId,
        body: impl Into<String>,
    ) -> Result<SendOutcome> {
        let original = self.load_message(chat_id, message_id)?;
        let reply_to = ReplyRef {
            id: original.id.clone(),
            preview: Some(original.preview()),
            sender: Some(original.sender),
        };
        self.send(
            chat_id,
            OutgoingMessage {
                body: body.into(),
                kind: ContentKind::Text,
                filename: None,
                is_forwarded: false,
                reply_to: Some(reply_to),
            },
        )
        .await
    }

    /// Adds `emoji` to our reactions to the message. The stanza carries all of our reactions
    /// to it, as receivers replace the sender's previous set.
    pub async fn react_to_message(
        &self,
        chat_id: &ChatId,
        message_id: &MessageId,
        emoji: impl Into<String>,
    ) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        let emoji = emoji.into();

        let (chat_kind, sender, mut emojis) = {
            let session = self.ctx.session.lock();
            let (chat, message) = session
                .conversations
                .get_chat_by_id(chat_id)
                .and_then(|chat| Some((chat, chat.message(message_id)?)))
                .ok_or_else(|| {
                    format_err!("Unknown message {} in chat {}", message_id, chat_id)
                })?;
            let sender = chat.own_sender(&owner);
            let emojis = message.reactions_of(&sender);
            (chat.kind, sender, emojis)
        };

        if emojis.contains(&emoji) {
            return Ok(());
        }
        emojis.push(emoji);

        self.messaging_service
            .send_reaction(chat_id, chat_kind, message_id, emojis.clone())
            .await?;

        let reactions = self
            .ctx
            .session
            .lock()
            .conversations
            .set_reactions(chat_id, message_id, &sender, emojis);

        let Some(reactions) = reactions else {
            return Ok(());
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessagesUpdated {
                chat_id: chat_id.clone(),
                message_ids: vec![message_id.clone()],
            });

        self.chat_history_repo
            .update_reactions(&owner, chat_id, message_id, &reactions)
            .await
    }

    /// Opens the chat `chat_id`, resetting its unread counter.
    pub async fn mark_chat_as_read(&self, chat_id: &ChatId) {
        let had_unread_messages = {
            let mut session = self.ctx.session.lock();
            let had_unread_messages = session
                .conversations
                .get_chat_by_id(chat_id)
                .is_some_and(|chat| chat.unread_count > 0);
            session.conversations.mark_chat_as_read(chat_id);
            had_unread_messages
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        if !had_unread_messages {
            return;
        }
        let Ok(owner) = self.ctx.connected_account() else {
            return;
        };
        if let Err(err) = self
            .chat_history_repo
            .update_unread_count(&owner, chat_id, 0)
            .await
        {
            warn!("Failed to save unread count of {}. {}", chat_id, err);
        }
    }

    pub fn active_chat_id(&self) -> Option<ChatId> {
        self.ctx
            .session
            .lock()
            .conversations
            .active_chat_id()
            .cloned()
    }

    pub fn clear_active_chat(&self) {
        self.ctx.session.lock().conversations.clear_active_chat();
    }

    /// All chats, most recently updated first.
    pub fn chats(&self) -> Vec<Chat> {
        self.ctx.session.lock().conversations.chats().to_vec()
    }

    pub fn chat(&self, chat_id: &ChatId) -> Option<Chat> {
        self.ctx
            .session
            .lock()
            .conversations
            .get_chat_by_id(chat_id)
            .cloned()
    }
}

impl MessagingService {
    async fn send(&self, to: &ChatId, outgoing: OutgoingMessage) -> Result<SendOutcome> {
        let owner = self.ctx.connected_account()?;
        let chat_kind = self.chat_kind(to).unwrap_or(ChatKind::Individual);

        let id = match self
            .messaging_service
            .send_message(to, chat_kind, outgoing.clone())
            .await
        {
            Ok(id) => id,
            Err(err) => {
                warn!("Failed to send message to {}. {}", to, err);
                return Ok(SendOutcome::TransportFailed {
                    message: err.to_string(),
                });
            }
        };

        let now = self.time_provider.now();

        let header = {
            let mut session = self.ctx.session.lock();
            let contact_name = session
                .roster
                .get(&UserId::from(to.clone().into_inner()))
                .and_then(|item| item.name.clone());
            let sender = session
                .conversations
                .get_chat_by_id(to)
                .map(|chat| chat.own_sender(&owner))
                .unwrap_or_else(|| owner.to_string());

            let message = Message {
                id: id.clone(),
                chat_id: to.clone(),
                sender,
                content: outgoing.body,
                timestamp: now,
                is_read: true,
                reactions: Default::default(),
                kind: outgoing.kind,
                filename: outgoing.filename,
                reply_to: outgoing.reply_to,
                is_forwarded: outgoing.is_forwarded,
            };

            let outcome = session
                .conversations
                .append_message(message.clone(), false, || {
                    let mut chat = Chat::new(to.clone(), ChatKind::Individual, now);
                    chat.participants = vec![UserId::from(to.clone().into_inner())];
                    if let Some(name) = contact_name {
                        chat.name = name;
                    }
                    chat
                });

            if outcome == AppendOutcome::Duplicate {
                None
            } else {
                session
                    .conversations
                    .get_chat_by_id(to)
                    .map(|chat| (chat.header(), message))
            }
        };

        let Some((header, message)) = header else {
            return Ok(SendOutcome::Delivered { id });
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessagesAppended {
                chat_id: to.clone(),
                message_ids: vec![id.clone()],
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        let persisted = match self.chat_history_repo.upsert_chat(&owner, &header).await {
            Ok(()) => self.chat_history_repo.append_message(&owner, &message).await,
            Err(err) => Err(err),
        };

        match persisted {
            Ok(()) => Ok(SendOutcome::Delivered { id }),
            Err(err) => {
                warn!("Failed to save sent message {}. {}", id, err);
                Ok(SendOutcome::PersistenceFailed {
                    id,
                    message: err.to_string(),
                })
            }
        }
    }

    fn chat_kind(&self, chat_id: &ChatId) -> Option<ChatKind> {
        self.ctx
            .session
            .lock()
            .conversations
            .get_chat_by_id(chat_id)
            .map(|chat| chat.kind)
    }

    fn load_message(&self, chat_id: &ChatId, message_id: &MessageId) -> Result<Message> {
        self.ctx
            .session
            .lock()
            .conversations
            .get_chat_by_id(chat_id)
            .and_then(|chat| chat.message(message_id))
            .cloned()
            .ok_or_else(|| format_err!("Unknown message {} in chat {}", message_id, chat_id))
    }
}
