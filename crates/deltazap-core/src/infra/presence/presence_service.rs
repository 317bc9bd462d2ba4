// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use xmpp_parsers::presence::Show;

use deltazap_xmpp::mods;

use crate::domain::presence::services::PresenceService;
use crate::domain::shared::models::Availability;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl PresenceService for XMPPClient {
    async fn send_presence(
        &self,
        availability: Availability,
        status: Option<String>,
    ) -> Result<()> {
        let status_mod = self.client.get_mod::<mods::Status>()?;
        status_mod.send_presence(Some(Show::try_from(availability)?), status.as_deref())
    }

    async fn send_unavailable_presence(&self, status: Option<String>) -> Result<()> {
        let status_mod = self.client.get_mod::<mods::Status>()?;
        status_mod.send_unavailable_presence(status.as_deref())
    }
}
