// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::{ChatId, UserId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomService: Send + Sync {
    async fn enter_room(&self, room: &ChatId, nickname: &str) -> Result<()>;
    async fn invite_user(&self, room: &ChatId, user: &UserId, reason: Option<String>)
        -> Result<()>;
}
