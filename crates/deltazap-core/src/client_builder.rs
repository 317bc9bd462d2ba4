// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use deltazap_store::Store;
use deltazap_xmpp::client::ConnectorProvider;
use deltazap_xmpp::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynIDProvider, DynNotificationService,
    DynTimeProvider, DynWindowFocusProvider,
};
use crate::app::event_handlers::{StanzaRouter, XMPPEventHandlerQueue};
use crate::app::services::{
    AppointmentsService, ContactsService, ConversationsService, DemandsService, LibraryService,
    MessagingService, NotesService, PresenceService, SessionService, StatusesService,
};
use crate::client::ClientInner;
use crate::domain::session::services::{NotificationService, WindowFocusProvider};
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::general::{
    HeadlessNotificationService, HeadlessWindowFocusProvider, NanoIDProvider,
};
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::infra::xmpp::{XMPPClient, XMPPClientBuilder};
use crate::{Client, ClientDelegate};

pub struct UndefinedStore;

pub struct ClientBuilder<S> {
    app_config: AppConfig,
    builder: XMPPClientBuilder,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    notification_service: DynNotificationService,
    short_id_provider: DynIDProvider,
    store: S,
    time_provider: DynTimeProvider,
    window_focus_provider: DynWindowFocusProvider,
}

impl ClientBuilder<UndefinedStore> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            builder: XMPPClient::builder(),
            delegate: None,
            id_provider: Arc::new(UUIDProvider::default()),
            notification_service: Arc::new(HeadlessNotificationService::default()),
            short_id_provider: Arc::new(NanoIDProvider::default()),
            store: UndefinedStore,
            time_provider: Arc::new(SystemTimeProvider::default()),
            window_focus_provider: Arc::new(HeadlessWindowFocusProvider::default()),
        }
    }

    pub fn set_store(self, store: Store) -> ClientBuilder<Store> {
        ClientBuilder {
            app_config: self.app_config,
            builder: self.builder,
            delegate: self.delegate,
            id_provider: self.id_provider,
            notification_service: self.notification_service,
            short_id_provider: self.short_id_provider,
            store,
            time_provider: self.time_provider,
            window_focus_provider: self.window_focus_provider,
        }
    }
}

impl<S> ClientBuilder<S> {
    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    /// Provides the resource part of the addresses we connect with.
    pub fn set_short_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.short_id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_notification_service<N: NotificationService + 'static>(
        mut self,
        notification_service: N,
    ) -> Self {
        self.notification_service = Arc::new(notification_service);
        self
    }

    pub fn set_window_focus_provider<W: WindowFocusProvider + 'static>(
        mut self,
        window_focus_provider: W,
    ) -> Self {
        self.window_focus_provider = Arc::new(window_focus_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<Store> {
    pub fn build(self) -> Client {
        let handler_queue = Arc::new(XMPPEventHandlerQueue::new());

        let xmpp_client = Arc::new(
            {
                let handler_queue = handler_queue.clone();
                self.builder
                    .set_id_provider(self.id_provider.clone())
                    .set_time_provider(self.time_provider.clone())
                    .set_event_handler(move |_, event| {
                        let handler_queue = handler_queue.clone();
                        async move { handler_queue.handle_event(event).await }
                    })
            }
            .build(),
        );

        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let dependencies: AppDependencies = PlatformDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            ctx: AppContext::new(self.app_config),
            id_provider: self.id_provider,
            notification_service: self.notification_service,
            short_id_provider: self.short_id_provider,
            store: self.store,
            time_provider: self.time_provider,
            window_focus_provider: self.window_focus_provider,
            xmpp: xmpp_client,
        }
        .into();

        handler_queue.set_handlers(vec![Box::new(StanzaRouter::from(&dependencies))]);

        let client_inner = Arc::new(ClientInner {
            appointments: AppointmentsService::from(&dependencies),
            contacts: ContactsService::from(&dependencies),
            conversations: ConversationsService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            demands: DemandsService::from(&dependencies),
            library: LibraryService::from(&dependencies),
            messaging: MessagingService::from(&dependencies),
            notes: NotesService::from(&dependencies),
            presence: PresenceService::from(&dependencies),
            statuses: StatusesService::from(&dependencies),
            session: SessionService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
