// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messaging_service::{MessagingService, OutgoingMessage};
pub use room_service::RoomService;

mod messaging_service;
mod room_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::messaging_service::MockMessagingService;
    pub use super::room_service::MockRoomService;
}
