// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use deltazap_xmpp::mods;

use crate::domain::conversations::services::RoomService;
use crate::domain::shared::models::{ChatId, UserId};
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl RoomService for XMPPClient {
    async fn enter_room(&self, room: &ChatId, nickname: &str) -> Result<()> {
        let muc = self.client.get_mod::<mods::MUC>()?;
        muc.enter_room(room.as_bare(), nickname)
    }

    async fn invite_user(
        &self,
        room: &ChatId,
        user: &UserId,
        reason: Option<String>,
    ) -> Result<()> {
        let muc = self.client.get_mod::<mods::MUC>()?;
        muc.send_direct_invite(user.as_bare(), room.as_bare(), reason.as_deref())
    }
}
