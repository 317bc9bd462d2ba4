// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::shared::models::Availability;

/// The availability a user picks for themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
pub enum HumanStatus {
    #[default]
    Online,
    Busy,
    CoffeeBreak,
    Lunch,
    Invisible,
}

impl From<HumanStatus> for Availability {
    fn from(value: HumanStatus) -> Self {
        match value {
            HumanStatus::Online => Availability::Chat,
            HumanStatus::Busy => Availability::Dnd,
            HumanStatus::CoffeeBreak => Availability::Away,
            HumanStatus::Lunch => Availability::Xa,
            HumanStatus::Invisible => Availability::Unavailable,
        }
    }
}
