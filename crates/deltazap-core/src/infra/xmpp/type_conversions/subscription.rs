// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::roster::{Item, Subscription as XMPPSubscription};

use crate::domain::contacts::models::Subscription;
use crate::domain::shared::models::{RosterPushItem, UserId};

impl From<XMPPSubscription> for Subscription {
    fn from(value: XMPPSubscription) -> Self {
        match value {
            XMPPSubscription::None => Subscription::None,
            XMPPSubscription::From => Subscription::From,
            XMPPSubscription::To => Subscription::To,
            XMPPSubscription::Both => Subscription::Both,
            XMPPSubscription::Remove => Subscription::Remove,
        }
    }
}

impl From<Item> for RosterPushItem {
    fn from(value: Item) -> Self {
        RosterPushItem {
            user_id: UserId::from(value.jid),
            name: value.name,
            subscription: value.subscription.into(),
            groups: value.groups.into_iter().map(|group| group.0).collect(),
        }
    }
}
