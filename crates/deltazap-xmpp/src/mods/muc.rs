// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::{BareJid, Jid};
use xmpp_parsers::muc::Muc;
use xmpp_parsers::presence::{Presence, Type};

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::stanza::message::MessageType;
use crate::stanza::muc::DirectInvite;
use crate::stanza::Message;

/// XEP-0045: Multi-User Chat
#[derive(Default, Clone)]
pub struct MUC {
    ctx: ModuleContext,
}

impl Module for MUC {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }
}

impl MUC {
    /// https://xmpp.org/extensions/xep-0045.html#enter
    pub fn enter_room(&self, room: &BareJid, nickname: &str) -> Result<()> {
        let occupant = room.with_resource_str(nickname)?;
        let presence = Presence::new(Type::None)
            .with_to(Jid::Full(occupant))
            .with_payload(Muc::new());
        self.ctx.send_stanza(presence)
    }

    /// XEP-0249: Direct MUC Invitations
    /// https://xmpp.org/extensions/xep-0249.html
    pub fn send_direct_invite(
        &self,
        to: &BareJid,
        room: &BareJid,
        reason: Option<&str>,
    ) -> Result<()> {
        let mut invite = DirectInvite::new(room.clone());
        invite.reason = reason.map(ToString::to_string);

        let stanza = Message::new()
            .set_type(MessageType::Normal)
            .set_id(self.ctx.generate_id())
            .set_from(self.ctx.full_jid())
            .set_to(Jid::Bare(to.clone()))
            .set_direct_invite(invite);
        self.ctx.send_stanza(stanza)
    }
}
