// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conversations::models::{Chat, ChatHeader, Message, Reactions};
use crate::domain::shared::models::{ChatId, MessageId, UserId};

/// Durable log of the chats and messages of an account.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatHistoryRepository: Send + Sync {
    /// Inserts or updates the chat. `updated_at` never moves backwards.
    async fn upsert_chat(&self, owner: &UserId, chat: &ChatHeader) -> Result<()>;
    /// Appends `message`. Messages that were stored in the same chat before are ignored.
    async fn append_message(&self, owner: &UserId, message: &Message) -> Result<()>;
    async fn update_reactions(
        &self,
        owner: &UserId,
        chat_id: &ChatId,
        message_id: &MessageId,
        reactions: &Reactions,
    ) -> Result<()>;
    async fn update_unread_count(&self, owner: &UserId, chat_id: &ChatId, count: u32)
        -> Result<()>;
    /// Loads all chats with at most `limit` of their newest messages each, sorted ascending.
    async fn load_history(&self, owner: &UserId, limit: u32) -> Result<Vec<Chat>>;
}
