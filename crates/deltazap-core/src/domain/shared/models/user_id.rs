// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::{BareJid, FullJid, Jid};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Represents a unique XMPP user identifier without resource specification.
pub struct UserId(BareJid);

impl UserId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    pub fn as_bare(&self) -> &BareJid {
        &self.0
    }

    pub fn with_resource(&self, res: impl AsRef<str>) -> Result<FullJid, jid::Error> {
        self.0.with_resource_str(res.as_ref())
    }

    /// The local part of the address (the part before the `@`).
    pub fn username(&self) -> &str {
        self.0.node_str().unwrap_or_default()
    }

    pub fn domain(&self) -> &str {
        self.0.domain_str()
    }
}

impl From<BareJid> for UserId {
    fn from(value: BareJid) -> Self {
        UserId(value)
    }
}

impl From<FullJid> for UserId {
    fn from(value: FullJid) -> Self {
        UserId(value.into_bare())
    }
}

impl From<Jid> for UserId {
    fn from(value: Jid) -> Self {
        UserId(value.into_bare())
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(s.parse::<BareJid>()?))
    }
}
