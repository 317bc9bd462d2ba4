// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::{RosterPushItem, UserId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RosterService: Send + Sync {
    async fn load_roster(&self) -> Result<Vec<RosterPushItem>>;
    async fn add_contact(&self, user_id: &UserId, name: Option<String>) -> Result<()>;
    async fn remove_contact(&self, user_id: &UserId) -> Result<()>;

    async fn subscribe_to_presence(&self, user_id: &UserId) -> Result<()>;
    async fn approve_presence_sub_request(&self, user_id: &UserId) -> Result<()>;
    async fn deny_presence_sub_request(&self, user_id: &UserId) -> Result<()>;
}
