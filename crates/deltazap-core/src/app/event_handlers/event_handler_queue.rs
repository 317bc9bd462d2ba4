// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::error;

use crate::app::event_handlers::{XMPPEvent, XMPPEventHandler};

/// Hands every event of the XMPP client to its handlers, one after another.
pub struct XMPPEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn XMPPEventHandler>>>,
}

impl XMPPEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn XMPPEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            error!("Tried to set handlers on XMPPEventHandlerQueue more than once.");
        }
    }

    pub async fn handle_event(&self, event: XMPPEvent) {
        let Some(handlers) = self.handlers.get() else {
            error!("Dropping event since no handlers were set in XMPPEventHandlerQueue.");
            return;
        };

        let mut event = event;
        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }
    }
}

impl Default for XMPPEventHandlerQueue {
    fn default() -> Self {
        Self::new()
    }
}
