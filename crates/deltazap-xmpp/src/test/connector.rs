// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use minidom::Element;
use parking_lot::Mutex;
use secrecy::SecretString;

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait, ServerEndpoint,
};

/// Connects to an in-memory [Connection] instead of a server.
pub struct Connector {
    connection: Arc<Connection>,
}

impl Connector {
    pub fn provider(connection: Arc<Connection>) -> ConnectorProvider {
        Box::new(move || {
            Box::new(Connector {
                connection: connection.clone(),
            })
        })
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        endpoint: &ServerEndpoint,
        _jid: &FullJid,
        _password: SecretString,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        if let Some(error) = self.connection.inner.connect_error.lock().clone() {
            return Err(error);
        }
        *self.connection.inner.endpoint.lock() = Some(endpoint.clone());
        *self.connection.inner.event_handler.lock() = Some(Arc::new(event_handler));
        *self.connection.inner.is_connected.lock() = true;
        Ok(Box::new(self.connection.clone()))
    }
}

pub type SentStanzaHandler = dyn FnMut(&Element) -> Vec<Element> + Send;

#[derive(Default, Clone)]
pub struct Connection {
    inner: Arc<ConnectionInner>,
}

#[derive(Default)]
struct ConnectionInner {
    sent_stanzas: Mutex<Vec<Element>>,
    stanza_handler: Mutex<Option<Box<SentStanzaHandler>>>,
    event_handler: Mutex<Option<Arc<ConnectionEventHandler>>>,
    connect_error: Mutex<Option<ConnectionError>>,
    endpoint: Mutex<Option<ServerEndpoint>>,
    is_connected: Mutex<bool>,
}

impl Connection {
    /// The handler is called for each sent stanza and may return responses that are then
    /// delivered back to the client.
    pub fn set_stanza_handler<F>(&self, handler: F)
    where
        F: FnMut(&Element) -> Vec<Element> + Send + 'static,
    {
        *self.inner.stanza_handler.lock() = Some(Box::new(handler))
    }

    /// Makes subsequent connection attempts fail with `error`.
    pub fn set_connect_error(&self, error: Option<ConnectionError>) {
        *self.inner.connect_error.lock() = error
    }

    /// The endpoint of the last successful connection attempt.
    pub fn endpoint(&self) -> Option<ServerEndpoint> {
        self.inner.endpoint.lock().clone()
    }

    pub fn is_connected(&self) -> bool {
        *self.inner.is_connected.lock()
    }

    pub fn sent_stanzas(&self) -> Vec<Element> {
        self.inner.sent_stanzas.lock().clone()
    }

    pub fn sent_stanza_strings(&self) -> Vec<String> {
        self.inner
            .sent_stanzas
            .lock()
            .iter()
            .map(String::from)
            .collect()
    }

    pub fn reset(&self) {
        self.inner.sent_stanzas.lock().clear()
    }

    /// Delivers `stanza` to the client as if it had arrived from the server.
    pub async fn receive_stanza(&self, stanza: impl Into<Element>) {
        self.send_event(ConnectionEvent::Stanza(stanza.into()))
            .await
    }

    /// Simulates the server closing the stream.
    pub async fn close_with_error(&self, error: Option<ConnectionError>) {
        *self.inner.is_connected.lock() = false;
        self.send_event(ConnectionEvent::Disconnected { error })
            .await
    }

    pub async fn fire_timeout_timer(&self) {
        self.send_event(ConnectionEvent::TimeoutTimer).await
    }

    async fn send_event(&self, event: ConnectionEvent) {
        let handler = self.inner.event_handler.lock().clone();
        if let Some(handler) = handler {
            (handler)(event).await
        }
    }
}

impl ConnectionTrait for Arc<Connection> {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        let responses = if let Some(handler) = self.inner.stanza_handler.lock().as_mut() {
            (handler)(&stanza)
        } else {
            vec![]
        };

        self.inner.sent_stanzas.lock().push(stanza);

        if responses.is_empty() {
            return Ok(());
        }

        let conn = self.clone();
        tokio::spawn(async move {
            for response in responses {
                conn.receive_stanza(response).await;
            }
        });

        Ok(())
    }

    fn disconnect(&self) {
        *self.inner.is_connected.lock() = false;
    }
}
