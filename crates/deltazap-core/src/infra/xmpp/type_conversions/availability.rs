// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::presence::{Presence, Show, Type};

use crate::domain::shared::models::Availability;

impl From<&Presence> for Availability {
    fn from(value: &Presence) -> Self {
        if value.type_ == Type::Unavailable {
            return Availability::Unavailable;
        }

        match value.show {
            Some(Show::Away) => Availability::Away,
            Some(Show::Chat) | None => Availability::Chat,
            Some(Show::Dnd) => Availability::Dnd,
            Some(Show::Xa) => Availability::Xa,
        }
    }
}

impl TryFrom<Availability> for Show {
    type Error = anyhow::Error;

    fn try_from(value: Availability) -> Result<Self, Self::Error> {
        Ok(match value {
            Availability::Chat => Show::Chat,
            Availability::Away => Show::Away,
            Availability::Dnd => Show::Dnd,
            Availability::Xa => Show::Xa,
            Availability::Unavailable => {
                anyhow::bail!("Unavailable is sent as a presence type, not as show value.")
            }
        })
    }
}
