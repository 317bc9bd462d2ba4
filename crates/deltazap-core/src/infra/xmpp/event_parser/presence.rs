// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use xmpp_parsers::nick::Nick;
use xmpp_parsers::presence::{Presence, Type};

use deltazap_xmpp::ns;

use crate::domain::shared::models::{Availability, ServerEvent, UserId};

pub fn parse_presence(presence: &Presence) -> Result<Option<ServerEvent>> {
    let Some(from) = presence.from.clone() else {
        return Ok(None);
    };
    let from = UserId::from(from);

    match presence.type_ {
        Type::Subscribe => {
            let name = presence
                .payloads
                .iter()
                .find(|payload| payload.is("nick", ns::NICK))
                .cloned()
                .map(Nick::try_from)
                .transpose()?
                .map(|nick| nick.0);

            Ok(Some(ServerEvent::SubscriptionRequest { from, name }))
        }
        // These manage subscriptions, they don't say anything about the contact's availability.
        Type::Subscribed | Type::Unsubscribe | Type::Unsubscribed | Type::Probe | Type::Error => {
            Ok(None)
        }
        Type::None | Type::Unavailable => Ok(Some(ServerEvent::Presence {
            from,
            availability: Availability::from(presence),
            status: presence
                .statuses
                .first_key_value()
                .map(|(_, status)| status.clone()),
        })),
    }
}
