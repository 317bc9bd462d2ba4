// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event_parser::classify;
pub use xmpp_client::{XMPPClient, XMPPClientBuilder};

pub mod event_parser;
mod type_conversions;
mod xmpp_client;
