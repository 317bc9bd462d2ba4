// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::session::models::NotificationPermission;
use crate::domain::session::services::{NotificationService, WindowFocusProvider};
use crate::domain::shared::models::ChatId;

/// Used when no view layer provides notifications. Permission is always denied.
#[derive(Default)]
pub struct HeadlessNotificationService {}

#[async_trait]
impl NotificationService for HeadlessNotificationService {
    async fn request_permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    fn notify(&self, _chat_id: &ChatId, _title: &str, _body: &str) {}
}

/// Used when no view layer tracks window focus. There is no window, so it never has focus.
#[derive(Default)]
pub struct HeadlessWindowFocusProvider {}

impl WindowFocusProvider for HeadlessWindowFocusProvider {
    fn is_window_focused(&self) -> bool {
        false
    }
}
