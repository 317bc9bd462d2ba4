// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use minidom::Element;
use secrecy::SecretString;

use crate::util::PinnedFuture;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{msg}")]
    Generic { msg: String },
}

/// The host/port pair of the XMPP server as configured by the user. Connectors use it as is,
/// there is no SRV lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServerEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Display for ServerEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

pub type ConnectionEventHandler =
    Box<dyn Fn(ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        endpoint: &ServerEndpoint,
        jid: &FullJid,
        password: SecretString,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[derive(Debug)]
pub enum ConnectionEvent {
    Disconnected { error: Option<ConnectionError> },
    Stanza(Element),
    TimeoutTimer,
}

pub trait Connection: Send + Sync {
    fn send_stanza(&self, stanza: Element) -> Result<()>;
    fn disconnect(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_endpoint() {
        let endpoint = ServerEndpoint::new("chat.deltazap.com", 5222);
        assert_eq!(endpoint.to_string(), "chat.deltazap.com:5222");
    }
}
