// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod contacts;
pub mod content;
pub mod conversations;
pub mod events;
pub mod general;
pub mod platform_dependencies;
pub mod presence;
pub mod session;
pub mod store;
pub mod xmpp;
