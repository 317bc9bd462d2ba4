// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::message::MessageType;

pub use message::Message;
pub use meta::{MessageMeta, PayloadKind};
pub use reactions::Reactions;
pub use reply::Reply;

mod builder;
mod message;
mod meta;
mod reactions;
mod reply;
