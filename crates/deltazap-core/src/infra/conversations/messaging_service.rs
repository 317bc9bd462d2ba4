// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::Jid;
use xmpp_parsers::message::MessageType;

use deltazap_xmpp::mods;
use deltazap_xmpp::stanza::message::{MessageMeta, Reply};

use crate::domain::conversations::models::ChatKind;
use crate::domain::conversations::services::{MessagingService, OutgoingMessage};
use crate::domain::shared::models::{ChatId, MessageId};
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl MessagingService for XMPPClient {
    async fn send_message(
        &self,
        to: &ChatId,
        chat_kind: ChatKind,
        message: OutgoingMessage,
    ) -> Result<MessageId> {
        let chat = self.client.get_mod::<mods::Chat>()?;

        // XEP-0461 addresses the author of the original message. In group chats that's the
        // occupant address, the nickname being its resource.
        let reply = message.reply_to.map(|reply| {
            let author = reply.sender.and_then(|sender| match chat_kind {
                ChatKind::Individual => sender.parse::<Jid>().ok(),
                ChatKind::Group => to.as_bare().with_resource_str(&sender).ok().map(Jid::Full),
            });
            Reply::new(reply.id.into_inner(), author)
        });

        let stanza = chat.send_message(
            Jid::Bare(to.as_bare().clone()),
            message.body,
            &message_type(chat_kind),
            MessageMeta {
                kind: message.kind.into(),
                filename: message.filename,
                forwarded: message.is_forwarded,
            },
            reply,
        )?;

        let Some(id) = stanza.id.clone() else {
            anyhow::bail!("Sent message is missing an id.");
        };
        Ok(MessageId::from(id))
    }

    async fn send_reaction(
        &self,
        to: &ChatId,
        chat_kind: ChatKind,
        message_id: &MessageId,
        emojis: Vec<String>,
    ) -> Result<()> {
        let chat = self.client.get_mod::<mods::Chat>()?;
        chat.react_to_message(
            message_id.as_str(),
            Jid::Bare(to.as_bare().clone()),
            emojis,
            &message_type(chat_kind),
        )
    }
}

fn message_type(chat_kind: ChatKind) -> MessageType {
    match chat_kind {
        ChatKind::Individual => MessageType::Chat,
        ChatKind::Group => MessageType::Groupchat,
    }
}
