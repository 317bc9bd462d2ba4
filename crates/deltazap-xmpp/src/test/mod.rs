// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

pub use connected_client::{ClientTestAdditions, ConnectedClient};
pub use connector::{Connection, Connector};
pub use incrementing_id_provider::IncrementingIDProvider;

mod connector;

/// Parses an address in tests. Panics on malformed input.
#[macro_export]
macro_rules! jid {
    ($jid:expr) => {
        $jid.parse::<jid::Jid>().unwrap()
    };
}

#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

#[macro_export]
macro_rules! full {
    ($jid:expr) => {
        $jid.parse::<jid::FullJid>().unwrap()
    };
}

/// The accounts used throughout the tests. We're `test@deltazap.chat`.
pub trait BareJidTestAdditions {
    fn ours() -> BareJid;
    fn theirs() -> BareJid;
}

impl BareJidTestAdditions for BareJid {
    fn ours() -> BareJid {
        bare!("test@deltazap.chat")
    }

    fn theirs() -> BareJid {
        bare!("friend@deltazap.chat")
    }
}
