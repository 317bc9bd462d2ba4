// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::Result;
use jid::FullJid;
use minidom::Element;
use secrecy::SecretString;
use tracing::{error, info};

use crate::client::builder::ClientBuilder;
use crate::client::module_context::ModuleContextInner;
use crate::client::{Event, ModuleLookup};
use crate::connector::{ConnectionError, ConnectionEvent, ServerEndpoint};
use crate::mods::AnyModule;
use crate::util::{PinnedFuture, XMPPElement};
use crate::Event as ClientEvent;

#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn connect(
        &self,
        endpoint: &ServerEndpoint,
        jid: &FullJid,
        password: SecretString,
    ) -> Result<(), ConnectionError> {
        self.inner.clone().connect(endpoint, jid, password).await
    }

    /// Closes the connection if there is one. Calling this while disconnected is a no-op.
    pub fn disconnect(&self) {
        self.inner.disconnect()
    }

    pub fn connected_jid(&self) -> Option<FullJid> {
        self.inner.context.jid.read().clone()
    }

    pub fn get_mod<M: AnyModule + Clone>(&self) -> Result<M> {
        self.inner.get_mod()
    }

    pub fn send_raw_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        self.inner.context.send_stanza(stanza.into())
    }
}

pub(super) struct ClientInner {
    pub context: Arc<ModuleContextInner>,
    pub mods: Arc<ModuleLookup>,
}

const TIMEOUT_SECONDS: i64 = 15;

impl ClientInner {
    async fn connect(
        self: Arc<Self>,
        endpoint: &ServerEndpoint,
        jid: &FullJid,
        password: SecretString,
    ) -> Result<(), ConnectionError> {
        self.disconnect();

        *self.context.jid.write() = Some(jid.clone());
        self.context.start_event_dispatch();

        let inner = Arc::downgrade(&self);

        let connection = (self.context.connector_provider)()
            .connect(
                endpoint,
                jid,
                password,
                Box::new(move |event| {
                    let inner = inner.clone();
                    Box::pin(async move {
                        if let Some(inner) = inner.upgrade() {
                            inner.handle_event(event).await
                        }
                    }) as PinnedFuture<_>
                }),
            )
            .await;

        let connection = match connection {
            Ok(connection) => connection,
            Err(err) => {
                self.context.jid.write().take();
                self.context.stop_event_dispatch();
                return Err(err);
            }
        };

        self.context.connection.write().replace(connection);
        info!("Connected as {}.", jid);

        for (_, m) in self.mods.iter() {
            if let Err(err) = m.read().handle_connect() {
                error!("Encountered error in module {}", err);
            }
        }

        self.context
            .schedule_event(ClientEvent::Client(Event::Connected));

        Ok(())
    }

    fn disconnect(&self) {
        self.context.disconnect()
    }

    fn get_mod<M: AnyModule + Clone>(&self) -> Result<M> {
        let Some(entry) = self.mods.get(&TypeId::of::<M>()) else {
            return Err(anyhow::format_err!("Could not find requested module."));
        };
        entry
            .read()
            .as_any()
            .downcast_ref::<M>()
            .cloned()
            .ok_or(anyhow::format_err!("Module has an unexpected type."))
    }

    async fn handle_event(self: Arc<Self>, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Disconnected { error } => {
                info!("Connection was closed. {:?}", error);
                self.context.connection.write().take();
                self.context.fail_pending_requests();
                self.context
                    .schedule_event(ClientEvent::Client(Event::Disconnected { error }))
            }
            ConnectionEvent::Stanza(stanza) => {
                Self::handle_stanza(&self.context, &self.mods, stanza)
            }
            ConnectionEvent::TimeoutTimer => self
                .context
                .purge_expired_requests(chrono::Duration::seconds(TIMEOUT_SECONDS)),
        }
    }

    fn handle_stanza(ctx: &ModuleContextInner, mods: &ModuleLookup, stanza: Element) {
        #[cfg(feature = "trace-stanzas")]
        tracing::debug!("(IN) {}", String::from(&stanza));

        let elem = match XMPPElement::try_from_element(stanza) {
            Ok(None) => return,
            Ok(Some(elem)) => elem,
            Err(err) => {
                error!("Failed to parse stanza. {}", err);
                return;
            }
        };

        if let XMPPElement::IQ(iq) = &elem {
            ctx.resolve_pending_request(iq);
        }

        for (_, m) in mods.iter() {
            if let Err(err) = m.read().handle_element(&elem) {
                error!("Encountered error in module {}", err);
            }
        }
    }
}

impl TryFrom<Arc<ModuleContextInner>> for Client {
    type Error = anyhow::Error;

    fn try_from(value: Arc<ModuleContextInner>) -> std::result::Result<Self, Self::Error> {
        let mods = value.mods.upgrade().ok_or(anyhow::format_err!(
            "Used module after client was released."
        ))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                context: value,
                mods,
            }),
        })
    }
}

