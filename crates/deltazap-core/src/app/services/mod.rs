// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use appointments_service::AppointmentsService;
pub use contacts_service::ContactsService;
pub use conversations_service::ConversationsService;
pub use demands_service::DemandsService;
pub use library_service::LibraryService;
pub use messaging_service::{MessagingService, SendOutcome};
pub use notes_service::NotesService;
pub use presence_service::PresenceService;
pub use session_service::SessionService;
pub use statuses_service::StatusesService;

mod appointments_service;
mod contacts_service;
mod conversations_service;
mod demands_service;
mod library_service;
mod messaging_service;
mod notes_service;
mod presence_service;
mod session_service;
mod statuses_service;
