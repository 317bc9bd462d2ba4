// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::Availability;
pub use chat_id::ChatId;
pub use message_id::MessageId;
pub use server_event::{ConnectionEvent, InboundMessage, RosterPushItem, ServerEvent};
pub use user_id::UserId;

mod availability;
mod chat_id;
mod message_id;
mod server_event;
mod user_id;
