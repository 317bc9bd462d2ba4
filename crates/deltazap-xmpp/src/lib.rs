// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder};
pub use connector::{Connection, ConnectionError, Connector, ServerEndpoint};
pub use deps::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
pub use event::Event;
pub use stanza::ns;
pub use util::{ElementExt, ParseError, RequestError};

pub mod client;
pub mod connector;
mod deps;
mod event;
pub mod mods;
pub mod stanza;
mod util;

#[cfg(any(test, feature = "test"))]
pub mod test;
