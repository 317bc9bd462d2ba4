// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::mods::Module;
use crate::stanza::message::{MessageMeta, MessageType, Reactions, Reply};
use crate::stanza::Message;

#[derive(Default, Clone)]
pub struct Chat {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Message(Message),
}

impl Module for Chat {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn handle_message_stanza(&self, stanza: &Message) -> Result<()> {
        match stanza.type_ {
            MessageType::Chat | MessageType::Groupchat | MessageType::Normal => (),
            MessageType::Error | MessageType::Headline => return Ok(()),
        }

        // Chat states, receipts and similar payload-only messages carry nothing we display.
        if !stanza.has_content() {
            return Ok(());
        }

        self.ctx
            .schedule_event(ClientEvent::Chat(Event::Message(stanza.clone())));

        Ok(())
    }
}

impl Chat {
    /// Sends a message and returns the stanza that went out, so that callers can record it
    /// under the same id.
    pub fn send_message(
        &self,
        to: impl Into<Jid>,
        body: impl Into<String>,
        message_type: &MessageType,
        meta: MessageMeta,
        reply: Option<Reply>,
    ) -> Result<Message> {
        let stanza = Message::new()
            .set_type(message_type.clone())
            .set_id(self.ctx.generate_id())
            .set_from(self.ctx.full_jid())
            .set_to(to)
            .set_body(body)
            .set_meta(meta)
            .set_reply(reply);

        self.ctx.send_stanza(stanza.clone())?;
        Ok(stanza)
    }

    /// XEP-0444: Message Reactions
    /// https://xmpp.org/extensions/xep-0444.html
    pub fn react_to_message(
        &self,
        id: impl Into<String>,
        to: impl Into<Jid>,
        reactions: impl IntoIterator<Item = String>,
        message_type: &MessageType,
    ) -> Result<()> {
        let stanza = Message::new()
            .set_type(message_type.clone())
            .set_id(self.ctx.generate_id())
            .set_from(self.ctx.full_jid())
            .set_to(to)
            .set_message_reactions(Reactions {
                id: id.into(),
                reactions: reactions.into_iter().collect(),
            });
        self.ctx.send_stanza(stanza)
    }
}
