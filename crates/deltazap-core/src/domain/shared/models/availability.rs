// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

/// Live presence of a roster contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Availability {
    Chat,
    Away,
    Dnd,
    Xa,
    #[default]
    Unavailable,
}
