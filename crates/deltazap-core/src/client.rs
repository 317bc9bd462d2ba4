// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use secrecy::SecretString;

use crate::app::deps::DynAppContext;
use crate::client_builder::{ClientBuilder, UndefinedStore};
use crate::domain::session::models::{LoginError, SessionStatus};
use crate::domain::shared::models::UserId;
use crate::services::{
    AppointmentsService, ContactsService, ConversationsService, DemandsService, LibraryService,
    MessagingService, NotesService, PresenceService, SessionService, StatusesService,
};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

/// Receives every `ClientEvent`. This is where a view layer hooks in.
pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedStore> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub appointments: AppointmentsService,
    pub contacts: ContactsService,
    pub conversations: ConversationsService,
    pub(crate) ctx: DynAppContext,
    pub demands: DemandsService,
    pub library: LibraryService,
    pub messaging: MessagingService,
    pub notes: NotesService,
    pub presence: PresenceService,
    pub statuses: StatusesService,
    pub(crate) session: SessionService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn connect(&self, address: &str, secret: SecretString) -> Result<(), LoginError> {
        self.session.connect(address, secret).await
    }

    pub async fn disconnect(&self) {
        self.session.disconnect().await
    }

    /// Reconnects the account of the last session if it didn't end with a disconnect. Returns
    /// `false` if there was nothing to restore.
    pub async fn restore_session(&self) -> Result<bool, LoginError> {
        self.session.restore_session().await
    }

    pub fn session_status(&self) -> SessionStatus {
        self.session.status()
    }

    /// The account of the current session, even while it is still connecting.
    pub fn account(&self) -> Option<UserId> {
        self.session.account()
    }

    pub fn connected_user_id(&self) -> Option<UserId> {
        self.ctx.connected_account().ok()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }
}
