// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::Utc;
use jid::Jid;
use xmpp_parsers::message::MessageType;

use deltazap_xmpp::stanza::Message;

use crate::domain::conversations::models::{ContentKind, ReplyRef};
use crate::domain::shared::models::{ChatId, InboundMessage, MessageId, ServerEvent, UserId};
use crate::infra::xmpp::event_parser::Context;

pub fn parse_message(message: &Message, ctx: &Context) -> Result<Option<ServerEvent>> {
    let Some(from) = message.from.clone() else {
        return Ok(None);
    };

    if let Some(reactions) = message.reactions() {
        let sender = match (&message.type_, &from) {
            (MessageType::Groupchat, Jid::Full(occupant)) => occupant.resource_str().to_string(),
            (MessageType::Groupchat, Jid::Bare(_)) => return Ok(None),
            (_, from) => from.to_bare().to_string(),
        };
        return Ok(Some(ServerEvent::Reaction {
            chat_id: ChatId::from(from),
            sender,
            message_id: MessageId::from(reactions.id),
            emojis: reactions.reactions,
        }));
    }

    if let Some(invite) = message.direct_invite() {
        return Ok(Some(ServerEvent::GroupInvite {
            room: ChatId::from(invite.jid),
            from: UserId::from(from),
            reason: invite.reason,
        }));
    }

    let Some(inbound) = inbound_message(message, ctx) else {
        return Ok(None);
    };

    let event = match message.type_ {
        MessageType::Groupchat => ServerEvent::GroupMessage {
            room: ChatId::from(from.clone()),
            nickname: match from {
                Jid::Full(full) => Some(full.resource_str().to_string()),
                Jid::Bare(_) => None,
            },
            message: inbound,
        },
        MessageType::Chat | MessageType::Normal => ServerEvent::ChatMessage {
            from: UserId::from(from),
            message: inbound,
        },
        MessageType::Headline | MessageType::Error => return Ok(None),
    };

    Ok(Some(event))
}

fn inbound_message(message: &Message, ctx: &Context) -> Option<InboundMessage> {
    let body = message.body()?.to_string();
    let meta = message.meta().unwrap_or_default();

    let id = message
        .id
        .clone()
        .map(MessageId::from)
        .unwrap_or_else(|| MessageId::from(ctx.id_provider.new_id()));

    let timestamp = message
        .delay()
        .map(|delay| delay.stamp.0.with_timezone(&Utc))
        .unwrap_or(ctx.now);

    Some(InboundMessage {
        id,
        body,
        kind: ContentKind::from(meta.kind),
        filename: meta.filename,
        is_forwarded: meta.forwarded,
        reply_to: message.reply().map(|reply| ReplyRef {
            id: MessageId::from(reply.id),
            sender: reply.to.map(|to| match (&message.type_, to) {
                (MessageType::Groupchat, Jid::Full(occupant)) => {
                    occupant.resource_str().to_string()
                }
                (_, to) => to.to_bare().to_string(),
            }),
            preview: None,
        }),
        timestamp,
    })
}
