// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

use crate::domain::shared::models::{Availability, RosterPushItem, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Subscription {
    Both,
    To,
    From,
    #[default]
    None,
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterItem {
    pub user_id: UserId,
    pub name: Option<String>,
    pub subscription: Subscription,
    pub groups: Vec<String>,
    pub availability: Availability,
    pub status: Option<String>,
}

impl RosterItem {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.user_id.username())
    }
}

impl From<RosterPushItem> for RosterItem {
    fn from(value: RosterPushItem) -> Self {
        RosterItem {
            user_id: value.user_id,
            name: value.name,
            subscription: value.subscription,
            groups: value.groups,
            availability: Availability::Unavailable,
            status: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    items: Vec<RosterItem>,
}

impl Roster {
    pub fn items(&self) -> &[RosterItem] {
        &self.items
    }

    pub fn get(&self, user_id: &UserId) -> Option<&RosterItem> {
        self.items.iter().find(|item| &item.user_id == user_id)
    }

    /// Applies a roster push. `remove` deletes the entry regardless of its live presence,
    /// everything else is merged into the existing entry keeping presence and status text.
    pub fn apply_push(&mut self, push: RosterPushItem) {
        if push.subscription == Subscription::Remove {
            self.items.retain(|item| item.user_id != push.user_id);
            return;
        }

        match self.items.iter_mut().find(|item| item.user_id == push.user_id) {
            Some(item) => {
                item.name = push.name;
                item.subscription = push.subscription;
                item.groups = push.groups;
            }
            None => self.items.push(push.into()),
        }
    }

    /// Replaces the roster with the result of a roster fetch. Presence that arrived before the
    /// fetch completed is kept.
    pub fn replace_all(&mut self, items: Vec<RosterPushItem>) {
        let previous = std::mem::take(&mut self.items);
        self.items = items
            .into_iter()
            .filter(|item| item.subscription != Subscription::Remove)
            .map(|push| {
                let mut item = RosterItem::from(push);
                if let Some(prev) = previous.iter().find(|p| p.user_id == item.user_id) {
                    item.availability = prev.availability;
                    item.status = prev.status.clone();
                }
                item
            })
            .collect();
    }

    /// Updates the live presence of a contact. Returns false for unknown contacts.
    pub fn update_presence(
        &mut self,
        user_id: &UserId,
        availability: Availability,
        status: Option<String>,
    ) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| &item.user_id == user_id) else {
            return false;
        };
        item.availability = availability;
        item.status = status;
        true
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }
}
