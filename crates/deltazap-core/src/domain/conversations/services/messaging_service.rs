// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conversations::models::{ChatKind, ContentKind, ReplyRef};
use crate::domain::shared::models::{ChatId, MessageId};

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub body: String,
    pub kind: ContentKind,
    pub filename: Option<String>,
    pub is_forwarded: bool,
    pub reply_to: Option<ReplyRef>,
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    /// Sends `message` and returns the id it went out with.
    async fn send_message(
        &self,
        to: &ChatId,
        chat_kind: ChatKind,
        message: OutgoingMessage,
    ) -> Result<MessageId>;

    async fn send_reaction(
        &self,
        to: &ChatId,
        chat_kind: ChatKind,
        message_id: &MessageId,
        emojis: Vec<String>,
    ) -> Result<()>;
}
