// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::{BareJid, Jid};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

/// Identifies a chat. For one-to-one chats this is the bare address of the peer, for group
/// chats the bare address of the room.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(BareJid);

impl ChatId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    pub fn as_bare(&self) -> &BareJid {
        &self.0
    }

    /// Local part of the address, used as the default display name of a chat.
    pub fn local_part(&self) -> &str {
        self.0.node_str().unwrap_or_else(|| self.0.domain_str())
    }
}

impl From<BareJid> for ChatId {
    fn from(value: BareJid) -> Self {
        ChatId(value)
    }
}

impl From<Jid> for ChatId {
    fn from(value: Jid) -> Self {
        ChatId(value.into_bare())
    }
}

impl From<UserId> for ChatId {
    fn from(value: UserId) -> Self {
        ChatId(value.into_inner())
    }
}

impl Debug for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChatId({})", self.0)
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChatId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChatId(s.parse::<BareJid>()?))
    }
}
