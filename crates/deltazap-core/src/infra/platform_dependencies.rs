// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use deltazap_store::Store;

use crate::app::deps::{
    AppContext, AppDependencies, DynClientEventDispatcher, DynIDProvider,
    DynNotificationService, DynTimeProvider, DynWindowFocusProvider,
};
use crate::infra::content::{
    AppointmentsRepository, DemandsRepository, LibraryRepository, NotesRepository,
    StatusesRepository,
};
use crate::infra::conversations::ChatHistoryRepository;
use crate::infra::session::SessionMarkersRepository;
use crate::infra::xmpp::XMPPClient;

/// Everything needed to assemble the `AppDependencies` of a live client.
pub struct PlatformDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: AppContext,
    pub id_provider: DynIDProvider,
    pub notification_service: DynNotificationService,
    pub short_id_provider: DynIDProvider,
    pub store: Store,
    pub time_provider: DynTimeProvider,
    pub window_focus_provider: DynWindowFocusProvider,
    pub xmpp: Arc<XMPPClient>,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        AppDependencies {
            appointments_repo: Arc::new(AppointmentsRepository::new(d.store.clone())),
            chat_history_repo: Arc::new(ChatHistoryRepository::new(d.store.clone())),
            client_event_dispatcher: d.client_event_dispatcher,
            connection_service: d.xmpp.clone(),
            ctx: Arc::new(d.ctx),
            demands_repo: Arc::new(DemandsRepository::new(d.store.clone())),
            id_provider: d.id_provider,
            library_repo: Arc::new(LibraryRepository::new(d.store.clone())),
            messaging_service: d.xmpp.clone(),
            notes_repo: Arc::new(NotesRepository::new(d.store.clone())),
            notification_service: d.notification_service,
            presence_service: d.xmpp.clone(),
            room_service: d.xmpp.clone(),
            roster_service: d.xmpp,
            session_markers_repo: Arc::new(SessionMarkersRepository::new(d.store.clone())),
            short_id_provider: d.short_id_provider,
            statuses_repo: Arc::new(StatusesRepository::new(d.store)),
            time_provider: d.time_provider,
            window_focus_provider: d.window_focus_provider,
        }
    }
}
