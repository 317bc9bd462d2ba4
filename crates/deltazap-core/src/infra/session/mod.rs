// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_markers_repository::SessionMarkersRepository;

mod connection_service;
mod session_markers_repository;
