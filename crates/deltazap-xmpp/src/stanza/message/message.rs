// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::{Deref, DerefMut};

use minidom::Element;
use tracing::error;
use xmpp_parsers::delay::Delay;
use xmpp_parsers::message::Message as RawMessage;
use xmpp_parsers::nick::Nick;

use crate::ns;
use crate::stanza::message::{MessageMeta, Reactions, Reply};
use crate::stanza::muc::DirectInvite;

#[derive(Debug, PartialEq, Clone)]
pub struct Message(RawMessage);

impl Default for Message {
    fn default() -> Self {
        Self(RawMessage {
            from: None,
            to: None,
            id: None,
            type_: Default::default(),
            bodies: Default::default(),
            subjects: Default::default(),
            thread: None,
            payloads: vec![],
        })
    }
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for Message {
    type Target = RawMessage;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Message {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Message {
    pub fn body(&self) -> Option<&str> {
        self.get_best_body(vec![])
            .as_ref()
            .map(|(_, body)| body.0.as_str())
    }

    pub fn meta(&self) -> Option<MessageMeta> {
        self.typed_payload("meta", ns::DELTAZAP_MESSAGE_META)
    }

    pub fn reply(&self) -> Option<Reply> {
        self.typed_payload("reply", ns::REPLY)
    }

    pub fn reactions(&self) -> Option<Reactions> {
        self.typed_payload("reactions", ns::REACTIONS)
    }

    pub fn direct_invite(&self) -> Option<DirectInvite> {
        self.typed_payload("x", ns::DIRECT_MUC_INVITATIONS)
    }

    pub fn nick(&self) -> Option<Nick> {
        self.typed_payload("nick", ns::NICK)
    }

    pub fn delay(&self) -> Option<Delay> {
        self.typed_payload("delay", ns::DELAY)
    }

    /// Messages without a body and without any of the payloads we understand are dropped
    /// by the chat module (e.g. bare chat state notifications).
    pub fn has_content(&self) -> bool {
        self.body().is_some()
            || self.payloads.iter().any(|p| {
                p.is("reactions", ns::REACTIONS) || p.is("x", ns::DIRECT_MUC_INVITATIONS)
            })
    }
}

impl Message {
    fn typed_payload<P: TryFrom<Element>>(&self, name: &str, ns: &str) -> Option<P> {
        let payload = self.payloads.iter().find(|p| p.is(name, ns))?;
        let Ok(payload) = P::try_from(payload.clone()) else {
            error!("Failed to parse message payload {}.", String::from(payload));
            return None;
        };
        Some(payload)
    }
}

impl From<Message> for Element {
    fn from(value: Message) -> Self {
        value.0.into()
    }
}

impl TryFrom<Element> for Message {
    type Error = anyhow::Error;

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        Ok(Message(RawMessage::try_from(value)?))
    }
}

impl From<Message> for RawMessage {
    fn from(value: Message) -> Self {
        value.0
    }
}

impl From<RawMessage> for Message {
    fn from(value: RawMessage) -> Self {
        Self(value)
    }
}
