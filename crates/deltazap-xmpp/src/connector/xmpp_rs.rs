// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::StreamExt;
use futures::SinkExt;
use jid::{FullJid, Jid};
use minidom::Element;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::{task, time};
use tokio_xmpp::{AsyncClient, AsyncConfig, AsyncServerConfig, Error, Event, Packet};
use tracing::{error, info};

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait, ServerEndpoint,
};

/// Native connector backed by `tokio-xmpp`. Connects to the configured host and port instead of
/// resolving the account's domain.
pub struct Connector {}

impl Connector {
    pub fn provider() -> ConnectorProvider {
        Box::new(|| Box::new(Connector {}))
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        endpoint: &ServerEndpoint,
        jid: &FullJid,
        password: SecretString,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        info!("Connecting {} to {}…", jid, endpoint);

        let mut client = AsyncClient::new_with_config(AsyncConfig {
            jid: Jid::Full(jid.clone()),
            password: password.expose_secret().clone(),
            server: endpoint.into(),
        });
        client.set_reconnect(false);

        while let Some(event) = client.next().await {
            match event {
                Event::Disconnected(Error::Auth(_)) => {
                    return Err(ConnectionError::InvalidCredentials);
                }
                Event::Disconnected(e) => {
                    return Err(ConnectionError::Generic { msg: e.to_string() });
                }
                Event::Online { .. } => break,
                Event::Stanza(stanza) => {
                    return Err(ConnectionError::Generic {
                        msg: format!("Received unexpected stanza {:?}", stanza),
                    });
                }
            }
        }

        Ok(Box::new(Connection::new(client, event_handler)))
    }
}

impl From<&ServerEndpoint> for AsyncServerConfig {
    fn from(value: &ServerEndpoint) -> Self {
        AsyncServerConfig::Manual {
            host: value.host.clone(),
            port: value.port,
        }
    }
}

pub struct Connection {
    sender: UnboundedSender<Packet>,
    read_handle: JoinHandle<()>,
    write_handle: JoinHandle<()>,
    timeout_handle: JoinHandle<()>,
}

impl Connection {
    fn new(client: AsyncClient, event_handler: ConnectionEventHandler) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (mut writer, mut reader) = client.split();
        let event_handler = Arc::new(event_handler);

        let read_handle = {
            let event_handler = event_handler.clone();

            task::spawn(async move {
                while let Some(event) = reader.next().await {
                    match event {
                        Event::Disconnected(err) => {
                            (event_handler)(ConnectionEvent::Disconnected {
                                error: Some(ConnectionError::Generic {
                                    msg: err.to_string(),
                                }),
                            })
                            .await;
                            break;
                        }
                        Event::Online { .. } => (),
                        // Stanzas are handled one after another so that they're processed in
                        // the order they arrived in.
                        Event::Stanza(stanza) => {
                            (event_handler)(ConnectionEvent::Stanza(stanza)).await
                        }
                    }
                }
            })
        };

        let write_handle = task::spawn(async move {
            while let Some(packet) = rx.recv().await {
                if let Err(err) = writer.send(packet).await {
                    error!("Cannot send stanza to server: {}", err);
                    break;
                }
            }
        });

        let timeout_handle = task::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(2));

            loop {
                interval.tick().await;
                (event_handler)(ConnectionEvent::TimeoutTimer).await;
            }
        });

        Connection {
            sender: tx,
            read_handle,
            write_handle,
            timeout_handle,
        }
    }
}

impl ConnectionTrait for Connection {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        self.sender.send(Packet::Stanza(stanza))?;
        Ok(())
    }

    fn disconnect(&self) {
        if let Err(err) = self.sender.send(Packet::StreamEnd) {
            error!("Failed to end stream: {}", err);
        }
        self.timeout_handle.abort();
        self.read_handle.abort();
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.timeout_handle.abort();
        self.read_handle.abort();
        self.write_handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_uses_endpoint() {
        let endpoint = ServerEndpoint::new("xmpp.deltazap.chat", 5223);

        let AsyncServerConfig::Manual { host, port } = AsyncServerConfig::from(&endpoint) else {
            panic!("Expected a manual server configuration");
        };
        assert_eq!(host, "xmpp.deltazap.chat");
        assert_eq!(port, 5223);
    }
}
