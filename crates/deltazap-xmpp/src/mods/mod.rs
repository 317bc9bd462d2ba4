// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::Any;

use anyhow::Result;
use xmpp_parsers::iq::Iq;
use xmpp_parsers::presence::Presence;

pub use chat::Chat;
pub use muc::MUC;
pub use roster::Roster;
pub use status::Status;

use crate::client::ModuleContext;
use crate::stanza::Message;
use crate::util::XMPPElement;

pub mod chat;
pub mod muc;
pub mod roster;
pub mod status;

pub trait Module: Any + Send + Sync {
    fn register_with(&mut self, context: ModuleContext);

    fn handle_connect(&self) -> Result<()> {
        Ok(())
    }

    fn handle_element(&self, element: &XMPPElement) -> Result<()> {
        match element {
            XMPPElement::Presence(ref p) => self.handle_presence_stanza(p),
            XMPPElement::Message(ref m) => self.handle_message_stanza(m),
            XMPPElement::IQ(ref i) => self.handle_iq_stanza(i),
        }
    }

    fn handle_presence_stanza(&self, _stanza: &Presence) -> Result<()> {
        Ok(())
    }
    fn handle_message_stanza(&self, _stanza: &Message) -> Result<()> {
        Ok(())
    }
    fn handle_iq_stanza(&self, _stanza: &Iq) -> Result<()> {
        Ok(())
    }
}

pub trait AnyModule: Module {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Module> AnyModule for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
