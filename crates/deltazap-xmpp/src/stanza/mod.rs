// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::presence;

pub use message::Message;

pub mod message;
pub mod muc;
pub mod ns;
