// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::iq::Iq;
use xmpp_parsers::presence::Presence;

use crate::ns;
use crate::stanza::Message;

#[derive(Debug)]
pub enum XMPPElement {
    Presence(Presence),
    Message(Message),
    IQ(Iq),
}

impl XMPPElement {
    /// Returns `None` for elements that aren't stanzas (e.g. stream management nonzas).
    pub fn try_from_element(value: Element) -> anyhow::Result<Option<Self>> {
        if value.is("iq", ns::JABBER_CLIENT) {
            Ok(Some(Self::IQ(Iq::try_from(value)?)))
        } else if value.is("message", ns::JABBER_CLIENT) {
            Ok(Some(Self::Message(Message::try_from(value)?)))
        } else if value.is("presence", ns::JABBER_CLIENT) {
            Ok(Some(Self::Presence(Presence::try_from(value)?)))
        } else {
            Ok(None)
        }
    }
}
