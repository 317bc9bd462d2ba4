// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use appointments_repository::AppointmentsRepository;
pub use demands_repository::DemandsRepository;
pub use library_repository::LibraryRepository;
pub use notes_repository::NotesRepository;
pub use statuses_repository::StatusesRepository;

mod appointments_repository;
mod demands_repository;
mod library_repository;
mod notes_repository;
mod statuses_repository;
