// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roster::{Roster, RosterItem, Subscription};
pub use subscription_request::SubscriptionRequest;

mod roster;
mod subscription_request;
