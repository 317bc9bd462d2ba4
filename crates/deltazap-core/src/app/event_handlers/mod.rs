// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use deltazap_xmpp::Event as XMPPEvent;
pub use event_handler_queue::XMPPEventHandlerQueue;
pub use stanza_router::StanzaRouter;

use crate::ClientEvent;

mod event_handler_queue;
mod stanza_router;

#[async_trait]
pub trait XMPPEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    /// Returns the event if it should be passed on to the next handler.
    async fn handle_event(&self, event: XMPPEvent) -> Result<Option<XMPPEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
