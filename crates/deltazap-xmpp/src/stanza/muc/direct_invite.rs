// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use jid::BareJid;
use minidom::Element;
use xmpp_parsers::message::MessagePayload;

use crate::ns;
use crate::util::{ElementBuilderExt, ElementExt};

/// XEP-0249: Direct MUC Invitations
#[derive(Debug, PartialEq, Clone)]
pub struct DirectInvite {
    pub jid: BareJid,
    pub password: Option<String>,
    pub reason: Option<String>,
    pub r#continue: Option<bool>,
    pub thread: Option<String>,
}

impl DirectInvite {
    pub fn new(room: BareJid) -> Self {
        DirectInvite {
            jid: room,
            password: None,
            reason: None,
            r#continue: None,
            thread: None,
        }
    }
}

impl TryFrom<Element> for DirectInvite {
    type Error = anyhow::Error;

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        value.expect_is("x", ns::DIRECT_MUC_INVITATIONS)?;

        Ok(DirectInvite {
            jid: BareJid::from_str(value.attr_req("jid")?)?,
            password: value.attr("password").map(ToString::to_string),
            reason: value.attr("reason").map(ToString::to_string),
            r#continue: value.attr_bool("continue")?,
            thread: value.attr("thread").map(ToString::to_string),
        })
    }
}

impl From<DirectInvite> for Element {
    fn from(value: DirectInvite) -> Self {
        Element::builder("x", ns::DIRECT_MUC_INVITATIONS)
            .attr("jid", value.jid.to_string())
            .attr("password", value.password)
            .attr("reason", value.reason)
            .attr_bool_opt("continue", value.r#continue)
            .attr("thread", value.thread)
            .build()
    }
}

impl MessagePayload for DirectInvite {}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::bare;

    use super::*;

    #[test]
    fn test_deserialize_direct_invite() -> Result<()> {
        let xml = r#"<x xmlns='jabber:x:conference'
          continue='true'
          jid='team@conference.deltazap.chat'
          reason='Weekly sync'/>
        "#;

        let invite = DirectInvite::try_from(Element::from_str(xml)?)?;

        assert_eq!(
            invite,
            DirectInvite {
                jid: bare!("team@conference.deltazap.chat"),
                password: None,
                reason: Some("Weekly sync".to_string()),
                r#continue: Some(true),
                thread: None,
            }
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_minimal_direct_invite() -> Result<()> {
        let xml = "<x xmlns='jabber:x:conference' jid='team@conference.deltazap.chat'/>";
        let invite = DirectInvite::try_from(Element::from_str(xml)?)?;
        assert_eq!(invite, DirectInvite::new(bare!("team@conference.deltazap.chat")));
        Ok(())
    }
}
