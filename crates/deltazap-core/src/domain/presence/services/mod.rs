// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence_service::PresenceService;

mod presence_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::presence_service::MockPresenceService;
}
