// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;
pub use notification_service::NotificationService;
pub use window_focus_provider::WindowFocusProvider;

mod connection_service;
mod notification_service;
mod window_focus_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::connection_service::MockConnectionService;
    pub use super::notification_service::MockNotificationService;
    pub use super::window_focus_provider::MockWindowFocusProvider;
}
