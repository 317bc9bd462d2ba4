// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::{IDProvider, UUIDProvider};
pub use time_provider::{SystemTimeProvider, TimeProvider};

mod id_provider;
mod time_provider;
