// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use deltazap_xmpp::{IDProvider, TimeProvider};

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::contacts::services::RosterService;
use crate::domain::content::repos::{
    AppointmentsRepository, DemandsRepository, LibraryRepository, NotesRepository,
    StatusesRepository,
};
use crate::domain::conversations::repos::ChatHistoryRepository;
use crate::domain::conversations::services::{MessagingService, RoomService};
use crate::domain::presence::services::PresenceService;
use crate::domain::session::repos::SessionMarkersRepository;
use crate::domain::session::services::{
    ConnectionService, NotificationService, WindowFocusProvider,
};

pub type DynAppContext = Arc<AppContext>;
pub type DynAppointmentsRepository = Arc<dyn AppointmentsRepository>;
pub type DynChatHistoryRepository = Arc<dyn ChatHistoryRepository>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynConnectionService = Arc<dyn ConnectionService>;
pub type DynDemandsRepository = Arc<dyn DemandsRepository>;
pub type DynIDProvider = Arc<dyn IDProvider>;
pub type DynLibraryRepository = Arc<dyn LibraryRepository>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynNotesRepository = Arc<dyn NotesRepository>;
pub type DynNotificationService = Arc<dyn NotificationService>;
pub type DynPresenceService = Arc<dyn PresenceService>;
pub type DynRoomService = Arc<dyn RoomService>;
pub type DynRosterService = Arc<dyn RosterService>;
pub type DynSessionMarkersRepository = Arc<dyn SessionMarkersRepository>;
pub type DynStatusesRepository = Arc<dyn StatusesRepository>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynWindowFocusProvider = Arc<dyn WindowFocusProvider>;

pub struct AppDependencies {
    pub appointments_repo: DynAppointmentsRepository,
    pub chat_history_repo: DynChatHistoryRepository,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connection_service: DynConnectionService,
    pub ctx: DynAppContext,
    pub demands_repo: DynDemandsRepository,
    pub id_provider: DynIDProvider,
    pub library_repo: DynLibraryRepository,
    pub messaging_service: DynMessagingService,
    pub notes_repo: DynNotesRepository,
    pub notification_service: DynNotificationService,
    pub presence_service: DynPresenceService,
    pub room_service: DynRoomService,
    pub roster_service: DynRosterService,
    pub session_markers_repo: DynSessionMarkersRepository,
    pub short_id_provider: DynIDProvider,
    pub statuses_repo: DynStatusesRepository,
    pub time_provider: DynTimeProvider,
    pub window_focus_provider: DynWindowFocusProvider,
}
