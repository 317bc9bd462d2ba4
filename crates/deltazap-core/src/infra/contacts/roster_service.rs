// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use deltazap_xmpp::mods;

use crate::domain::contacts::services::RosterService;
use crate::domain::shared::models::{RosterPushItem, UserId};
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl RosterService for XMPPClient {
    async fn load_roster(&self) -> Result<Vec<RosterPushItem>> {
        let roster = self.client.get_mod::<mods::Roster>()?;
        let query = roster.load_roster().await?;
        Ok(query.items.into_iter().map(Into::into).collect())
    }

    async fn add_contact(&self, user_id: &UserId, name: Option<String>) -> Result<()> {
        let roster = self.client.get_mod::<mods::Roster>()?;
        roster
            .add_contact(user_id.as_bare(), name.as_deref(), None)
            .await
    }

    async fn remove_contact(&self, user_id: &UserId) -> Result<()> {
        let roster = self.client.get_mod::<mods::Roster>()?;
        roster.remove_contact(user_id.as_bare()).await
    }

    async fn subscribe_to_presence(&self, user_id: &UserId) -> Result<()> {
        let roster = self.client.get_mod::<mods::Roster>()?;
        roster.subscribe_to_presence(user_id.as_bare())
    }

    async fn approve_presence_sub_request(&self, user_id: &UserId) -> Result<()> {
        let roster = self.client.get_mod::<mods::Roster>()?;
        roster.approve_presence_subscription_request(user_id.as_bare())
    }

    async fn deny_presence_sub_request(&self, user_id: &UserId) -> Result<()> {
        let roster = self.client.get_mod::<mods::Roster>()?;
        roster.deny_presence_subscription_request(user_id.as_bare())
    }
}
