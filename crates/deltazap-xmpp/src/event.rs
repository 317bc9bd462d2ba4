// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::{client, mods};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Chat(mods::chat::Event),
    Client(client::Event),
    Roster(mods::roster::Event),
    Status(mods::status::Event),
}
