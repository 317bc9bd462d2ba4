// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::session::models::NotificationPermission;
use crate::domain::shared::models::ChatId;

/// Surfaces notifications for new messages. Implemented by the view layer.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationService: Send + Sync {
    async fn request_permission(&self) -> NotificationPermission;
    fn notify(&self, chat_id: &ChatId, title: &str, body: &str);
}
