// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use xmpp_parsers::message::{Body, MessageType};

use crate::stanza::message::{Message, MessageMeta, Reactions, Reply};
use crate::stanza::muc::DirectInvite;

impl Message {
    pub fn set_to(mut self, to: impl Into<Jid>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn set_from(mut self, from: Option<impl Into<Jid>>) -> Self {
        self.from = from.map(Into::into);
        self
    }

    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_type(mut self, r#type: MessageType) -> Self {
        self.type_ = r#type;
        self
    }

    pub fn set_body(mut self, body: impl Into<String>) -> Self {
        self.bodies.insert(String::new(), Body(body.into()));
        self
    }

    pub fn set_meta(mut self, meta: MessageMeta) -> Self {
        self.payloads.push(meta.into());
        self
    }

    pub fn set_reply(mut self, reply: Option<Reply>) -> Self {
        if let Some(reply) = reply {
            self.payloads.push(reply.into());
        }
        self
    }

    pub fn set_message_reactions(mut self, reactions: Reactions) -> Self {
        self.payloads.push(reactions.into());
        self
    }

    pub fn set_direct_invite(mut self, invite: DirectInvite) -> Self {
        self.payloads.push(invite.into());
        self
    }
}
