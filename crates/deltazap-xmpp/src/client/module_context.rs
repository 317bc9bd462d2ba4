// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, Weak};

use anyhow::Result;
use chrono::{DateTime, Utc};
use jid::{BareJid, FullJid};
use minidom::Element;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};
use xmpp_parsers::iq::{Iq, IqType};

use crate::client::builder::UndefinedConnector;
use crate::client::{ConnectorProvider, EventHandler, ModuleLookup};
use crate::connector::Connection;
use crate::deps::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
use crate::util::{PinnedFuture, RequestError};
use crate::{Client, Event};

type RequestResult = Result<Option<Element>, RequestError>;

#[derive(Clone)]
pub struct ModuleContext {
    pub(super) inner: Arc<ModuleContextInner>,
}

impl ModuleContext {
    /// Sends `iq` and waits for the matching result or error response.
    pub(crate) async fn send_iq(&self, iq: Iq) -> RequestResult {
        let (sender, receiver) = oneshot::channel();
        let request_id = iq.id.clone();

        self.inner.pending_requests.lock().push(PendingRequest {
            id: request_id.clone(),
            sender,
            timestamp: self.inner.time_provider.now(),
        });

        if let Err(err) = self.send_stanza(iq) {
            self.inner
                .pending_requests
                .lock()
                .retain(|request| request.id != request_id);
            return Err(RequestError::Generic {
                msg: err.to_string(),
            });
        }

        receiver.await.map_err(|_| RequestError::Disconnected)?
    }

    pub(crate) fn send_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        self.inner.send_stanza(stanza.into())
    }

    pub(crate) fn full_jid(&self) -> Option<FullJid> {
        self.inner.jid.read().clone()
    }

    pub(crate) fn bare_jid(&self) -> Option<BareJid> {
        self.full_jid().map(|jid| jid.into_bare())
    }

    pub(crate) fn generate_id(&self) -> String {
        self.inner.id_provider.new_id()
    }

    pub(crate) fn schedule_event(&self, event: Event) {
        self.inner.schedule_event(event)
    }
}

pub(super) struct ModuleContextInner {
    pub jid: RwLock<Option<FullJid>>,
    pub connector_provider: ConnectorProvider,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub event_sender: Mutex<Option<UnboundedSender<Event>>>,
    pub event_handler: EventHandler,
    pub mods: Weak<ModuleLookup>,
    pub pending_requests: Mutex<Vec<PendingRequest>>,
    pub id_provider: Box<dyn IDProvider>,
    pub time_provider: Box<dyn TimeProvider>,
}

pub(super) struct PendingRequest {
    pub id: String,
    pub sender: oneshot::Sender<RequestResult>,
    pub timestamp: DateTime<Utc>,
}

impl ModuleContextInner {
    pub(super) fn send_stanza(&self, stanza: Element) -> Result<()> {
        let Some(conn) = &*self.connection.read() else {
            return Err(anyhow::format_err!("Cannot send stanza while disconnected."));
        };
        #[cfg(feature = "trace-stanzas")]
        debug!("(OUT) {}", String::from(&stanza));
        conn.send_stanza(stanza)
    }

    /// Events are delivered to the event handler one after another in the order they were
    /// scheduled in.
    pub(super) fn start_event_dispatch(self: &Arc<Self>) {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Event>();
        *self.event_sender.lock() = Some(sender);

        let context = Arc::downgrade(self);
        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                let Some(context) = context.upgrade() else {
                    break;
                };
                let client = match Client::try_from(context.clone()) {
                    Ok(client) => client,
                    Err(err) => {
                        warn!("Dropping event {:?}. {}", event, err);
                        break;
                    }
                };
                let fut: PinnedFuture<()> = (context.event_handler)(client, event);
                fut.await;
            }
        });
    }

    pub(super) fn schedule_event(&self, event: Event) {
        let sender = self.event_sender.lock();
        let Some(sender) = sender.as_ref() else {
            debug!("Dropping event {:?} since the client is not connected.", event);
            return;
        };
        if sender.send(event).is_err() {
            warn!("Event dispatch has already stopped.");
        }
    }

    pub(super) fn stop_event_dispatch(&self) {
        self.event_sender.lock().take();
    }

    /// Resolves the pending request matching the id of `iq` if `iq` is a response.
    pub(super) fn resolve_pending_request(&self, iq: &Iq) {
        let result = match &iq.payload {
            IqType::Result(payload) => Ok(payload.clone()),
            IqType::Error(err) => Err(RequestError::XMPP { err: err.clone() }),
            IqType::Get(_) | IqType::Set(_) => return,
        };

        let request = {
            let mut pending_requests = self.pending_requests.lock();
            let Some(idx) = pending_requests
                .iter()
                .position(|request| request.id == iq.id)
            else {
                return;
            };
            pending_requests.remove(idx)
        };

        // The receiving end might have been dropped in the meantime.
        _ = request.sender.send(result);
    }

    pub(super) fn purge_expired_requests(&self, timeout: chrono::Duration) {
        let now = self.time_provider.now();
        let expired = {
            let mut pending_requests = self.pending_requests.lock();
            let (expired, pending): (Vec<_>, Vec<_>) = pending_requests
                .drain(..)
                .partition(|request| now - request.timestamp >= timeout);
            *pending_requests = pending;
            expired
        };

        for request in expired {
            _ = request.sender.send(Err(RequestError::TimedOut));
        }
    }

    pub(super) fn fail_pending_requests(&self) {
        let pending = std::mem::take(&mut *self.pending_requests.lock());
        for request in pending {
            _ = request.sender.send(Err(RequestError::Disconnected));
        }
    }

    pub(super) fn disconnect(&self) {
        if let Some(connection) = self.connection.write().take() {
            connection.disconnect()
        }
        self.fail_pending_requests();
        self.stop_event_dispatch();
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        ModuleContext {
            inner: Arc::new(ModuleContextInner {
                connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
                jid: RwLock::new(None),
                connection: Default::default(),
                event_sender: Default::default(),
                event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
                mods: Default::default(),
                pending_requests: Default::default(),
                id_provider: Box::new(UUIDProvider::new()),
                time_provider: Box::new(SystemTimeProvider::new()),
            }),
        }
    }
}
