// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::message::MessagePayload;

/// XEP-0444: Message Reactions
/// https://xmpp.org/extensions/xep-0444.html
#[derive(Debug, PartialEq, Clone)]
pub struct Reactions {
    pub id: String,
    pub reactions: Vec<String>,
}

impl TryFrom<Element> for Reactions {
    type Error = anyhow::Error;

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        let reactions = xmpp_parsers::reactions::Reactions::try_from(value)?;
        Ok(Reactions {
            id: reactions.id,
            reactions: reactions.reactions.into_iter().map(|r| r.emoji).collect(),
        })
    }
}

impl From<Reactions> for Element {
    fn from(value: Reactions) -> Self {
        xmpp_parsers::reactions::Reactions {
            id: value.id,
            reactions: value
                .reactions
                .into_iter()
                .map(|emoji| xmpp_parsers::reactions::Reaction { emoji })
                .collect(),
        }
        .into()
    }
}

impl MessagePayload for Reactions {}
