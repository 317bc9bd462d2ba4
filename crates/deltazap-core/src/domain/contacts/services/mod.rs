// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roster_service::RosterService;

mod roster_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::roster_service::MockRosterService;
}
