// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat::{Chat, ChatHeader, ChatKind};
pub use conversation_store::{AppendOutcome, ConversationStore};
pub use message::{ContentKind, Message, Reactions, ReplyRef};

mod chat;
mod conversation_store;
mod message;
