// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_markers_repository::SessionMarkersRepository;

mod session_markers_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::session_markers_repository::MockSessionMarkersRepository;
}
