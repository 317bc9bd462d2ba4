// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::collections::BTreeMap;

use parking_lot::RwLock;

pub use builder::ClientBuilder;
pub use client::Client;
pub(crate) use module_context::ModuleContext;

use crate::connector::{ConnectionError, Connector};
use crate::mods::AnyModule;
use crate::util::PinnedFuture;
use crate::Event as ClientEvent;

mod builder;
mod client;
mod module_context;

pub type EventHandler = Box<dyn Fn(Client, ClientEvent) -> PinnedFuture<()> + Send + Sync>;

pub(super) type ModuleLookup = BTreeMap<TypeId, RwLock<Box<dyn AnyModule>>>;

pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}
