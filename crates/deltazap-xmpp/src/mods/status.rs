// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use xmpp_parsers::presence;
use xmpp_parsers::presence::Presence;

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::Event as ClientEvent;

#[derive(Default, Clone)]
pub struct Status {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Every inbound presence, including subscription management presences. Consumers decide
    /// which of them affect live presence.
    Presence(Presence),
}

impl Module for Status {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context;
    }

    fn handle_presence_stanza(&self, stanza: &Presence) -> Result<()> {
        self.ctx
            .schedule_event(ClientEvent::Status(Event::Presence(stanza.clone())));
        Ok(())
    }
}

impl Status {
    /// XMPP: Instant Messaging and Presence
    /// https://xmpp.org/rfcs/rfc6121.html#presence
    pub fn send_presence(&self, show: Option<presence::Show>, status: Option<&str>) -> Result<()> {
        let mut presence = Presence::new(presence::Type::None);
        presence.show = show;
        if let Some(status) = status {
            presence.set_status("", status);
        }
        self.ctx.send_stanza(presence)?;
        Ok(())
    }

    pub fn send_unavailable_presence(&self, status: Option<&str>) -> Result<()> {
        let mut presence = Presence::new(presence::Type::Unavailable);
        if let Some(status) = status {
            presence.set_status("", status);
        }
        self.ctx.send_stanza(presence)?;
        Ok(())
    }
}
