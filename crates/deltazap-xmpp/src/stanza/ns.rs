// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::ns::*;

/// RFC 6120: client namespace
pub const JABBER_CLIENT: &str = "jabber:client";

/// XEP-0444: Message Reactions
pub const REACTIONS: &str = "urn:xmpp:reactions:0";

/// XEP-0461: Message Replies
pub const REPLY: &str = "urn:xmpp:reply:0";

/// XEP-0249: Direct MUC Invitations
pub const DIRECT_MUC_INVITATIONS: &str = "jabber:x:conference";

/// Content kind, attachment name and forwarding flag attached to DeltaZap messages.
pub const DELTAZAP_MESSAGE_META: &str = "urn:deltazap:message:0";
