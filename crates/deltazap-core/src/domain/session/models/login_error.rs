// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use jid::BareJid;
use thiserror::Error;

use deltazap_xmpp::ConnectionError;

use crate::domain::shared::models::UserId;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("'{address}' is not a valid address. Use the form user@domain.")]
    MalformedAddress { address: String },
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Parses a login address. The address must consist of a local part and a domain, a
/// resource is not allowed.
pub fn parse_login_address(address: &str) -> Result<UserId, LoginError> {
    let malformed = || LoginError::MalformedAddress {
        address: address.to_string(),
    };

    let trimmed = address.trim();
    let (node, domain) = trimmed.split_once('@').ok_or_else(malformed)?;
    if node.is_empty() || domain.is_empty() || domain.contains('/') {
        return Err(malformed());
    }

    let jid = BareJid::from_str(trimmed).map_err(|_| malformed())?;
    if jid.node_str().is_none() {
        return Err(malformed());
    }
    Ok(UserId::from(jid))
}
