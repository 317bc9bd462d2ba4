// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tracing::error;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::{Client, ClientDelegate, ClientEvent};

/// Forwards every event to the delegate right away, on the task that produced it.
pub struct ImmediateClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client_inner: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client_inner.set(client_inner).is_err() {
            error!("Tried to set client_inner on ImmediateClientEventDispatcher more than once.");
        }
    }
}

impl ClientEventDispatcherTrait for ImmediateClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };

        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(Client::from(client_inner), event);
    }
}
