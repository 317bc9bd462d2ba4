// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::conversations::models::{Chat, Message, Reactions};
use crate::domain::shared::models::{ChatId, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// A message with the same id was already part of the chat.
    Duplicate,
}

/// In-memory collection of chats, sorted by recency (most recently updated first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationStore {
    chats: Vec<Chat>,
    active_chat: Option<ChatId>,
}

impl ConversationStore {
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn get_chat_by_id(&self, id: &ChatId) -> Option<&Chat> {
        self.chats.iter().find(|chat| &chat.id == id)
    }

    pub fn active_chat_id(&self) -> Option<&ChatId> {
        self.active_chat.as_ref()
    }

    pub fn is_active(&self, id: &ChatId) -> bool {
        self.active_chat.as_ref() == Some(id)
    }

    /// Makes `id` the open chat and resets its unread counter. The read flags of the
    /// individual messages are left untouched.
    pub fn mark_chat_as_read(&mut self, id: &ChatId) {
        self.active_chat = Some(id.clone());
        if let Some(chat) = self.chat_mut(id) {
            chat.unread_count = 0;
        }
    }

    pub fn clear_active_chat(&mut self) {
        self.active_chat = None;
    }

    /// Inserts `chat` unless a chat with the same id exists already. Returns the stored chat.
    pub fn insert_chat(&mut self, chat: Chat) -> &Chat {
        let id = chat.id.clone();
        if self.get_chat_by_id(&id).is_none() {
            self.chats.push(chat);
            self.sort();
        }
        let idx = self.index_of(&id).unwrap_or_default();
        &self.chats[idx]
    }

    /// Appends `message` to its chat. If the chat doesn't exist yet, it is created from
    /// `make_chat`.
    pub fn append_message(
        &mut self,
        message: Message,
        increment_unread: bool,
        make_chat: impl FnOnce() -> Chat,
    ) -> AppendOutcome {
        let idx = match self.index_of(&message.chat_id) {
            Some(idx) => idx,
            None => {
                self.chats.push(make_chat());
                self.chats.len() - 1
            }
        };

        let chat = &mut self.chats[idx];
        if !chat.push_message(message) {
            return AppendOutcome::Duplicate;
        }
        if increment_unread {
            chat.unread_count += 1;
        }

        self.sort();
        AppendOutcome::Appended
    }

    /// Replaces the reactions of `sender` on the given message. Returns the new reactions of the
    /// message or `None` if the message is unknown or its reactions didn't change.
    pub fn set_reactions(
        &mut self,
        chat_id: &ChatId,
        message_id: &MessageId,
        sender: &str,
        emojis: Vec<String>,
    ) -> Option<Reactions> {
        let message = self.chat_mut(chat_id)?.message_mut(message_id)?;
        if !message.set_reactions(sender, emojis) {
            return None;
        }
        Some(message.reactions.clone())
    }

    /// Replaces the content of the store with chats loaded from persisted history.
    pub fn seed(&mut self, chats: Vec<Chat>) {
        self.chats = chats;
        self.active_chat = None;
        self.sort();
    }

    pub fn clear(&mut self) {
        self.chats.clear();
        self.active_chat = None;
    }

    fn chat_mut(&mut self, id: &ChatId) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|chat| &chat.id == id)
    }

    fn index_of(&self, id: &ChatId) -> Option<usize> {
        self.chats.iter().position(|chat| &chat.id == id)
    }

    fn sort(&mut self) {
        // Stable, so chats with the same timestamp keep their relative order.
        self.chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    }
}
