// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::anyhow;
use jid::FullJid;
use secrecy::SecretString;
use tracing::{info, instrument, warn};

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynChatHistoryRepository, DynClientEventDispatcher, DynConnectionService,
    DynIDProvider, DynNotificationService, DynPresenceService, DynRoomService, DynRosterService,
    DynSessionMarkersRepository,
};
use crate::domain::conversations::models::{Chat, ChatHeader, ChatKind, ConversationStore};
use crate::domain::session::models::{
    parse_login_address, LoginError, SessionMarkers, SessionStatus,
};
use crate::domain::shared::models::{Availability, ChatId, UserId};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct SessionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    chat_history_repo: DynChatHistoryRepository,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connection_service: DynConnectionService,
    #[inject]
    notification_service: DynNotificationService,
    #[inject]
    presence_service: DynPresenceService,
    #[inject]
    room_service: DynRoomService,
    #[inject]
    roster_service: DynRosterService,
    #[inject]
    session_markers_repo: DynSessionMarkersRepository,
    #[inject]
    short_id_provider: DynIDProvider,
}

impl SessionService {
    /// Ends any existing session and connects `address`.
    #[instrument(skip(self, secret))]
    pub async fn connect(&self, address: &str, secret: SecretString) -> Result<(), LoginError> {
        let user_id = parse_login_address(address)?;
        let full_jid = user_id
            .with_resource(self.short_id_provider.new_id())
            .map_err(|err| LoginError::Other(anyhow!(err)))?;

        self.teardown().await;
        let is_admin = self.ctx.is_admin_address(&user_id);
        let generation = self.begin_attempt(&user_id, SessionStatus::Connecting, is_admin);

        self.establish(user_id, full_jid, secret, is_admin, generation)
            .await
    }

    /// Re-establishes the session described by the persisted session markers. Returns `false`
    /// if there was no session to restore.
    pub async fn restore_session(&self) -> Result<bool, LoginError> {
        let markers = match self.session_markers_repo.get().await {
            Ok(Some(markers)) => markers,
            Ok(None) => return Ok(false),
            Err(err) => {
                warn!("Failed to read session markers. {}", err);
                return Ok(false);
            }
        };

        info!("Restoring session of {}…", markers.user_id);

        self.teardown().await;
        let is_admin = markers.is_admin || self.ctx.is_admin_address(&markers.user_id);
        let generation =
            self.begin_attempt(&markers.user_id, SessionStatus::Restoring, is_admin);

        self.establish(
            markers.user_id,
            markers.full_jid,
            markers.secret,
            is_admin,
            generation,
        )
        .await?;
        Ok(true)
    }

    /// Ends the session. Calling this without a session is a no-op apart from clearing the
    /// persisted session markers.
    pub async fn disconnect(&self) {
        let previous_status = {
            let mut session = self.ctx.session.lock();
            let status = session.status.clone();
            session.generation += 1;
            status
        };

        if previous_status.is_connected() {
            if let Err(err) = self.presence_service.send_unavailable_presence(None).await {
                warn!("Failed to send unavailable presence. {}", err);
            }
        }

        self.ctx.session.lock().reset();
        self.connection_service.disconnect().await;
        self.clear_markers().await;

        if previous_status != SessionStatus::Disconnected {
            info!("Session ended.");
            self.dispatch_status(SessionStatus::Disconnected);
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.ctx.status()
    }

    pub fn account(&self) -> Option<UserId> {
        self.ctx.account()
    }

    pub fn is_admin(&self) -> bool {
        self.ctx.is_admin()
    }
}

impl SessionService {
    async fn teardown(&self) {
        let has_session = {
            let mut session = self.ctx.session.lock();
            let has_session = session.status != SessionStatus::Disconnected;
            session.generation += 1;
            session.reset();
            has_session
        };
        if has_session {
            self.connection_service.disconnect().await;
        }
    }

    fn begin_attempt(&self, user_id: &UserId, status: SessionStatus, is_admin: bool) -> u64 {
        let generation = {
            let mut session = self.ctx.session.lock();
            session.generation += 1;
            session.status = status.clone();
            session.account = Some(user_id.clone());
            session.is_admin = is_admin;
            session.generation
        };
        self.dispatch_status(status);
        generation
    }

    async fn establish(
        &self,
        user_id: UserId,
        full_jid: FullJid,
        secret: SecretString,
        is_admin: bool,
        generation: u64,
    ) -> Result<(), LoginError> {
        info!("Connecting as {}…", full_jid);

        if let Err(err) = self
            .connection_service
            .connect(&self.ctx.config.server_endpoint, &full_jid, secret.clone())
            .await
        {
            self.fail(generation, err.to_string()).await;
            return Err(err.into());
        }

        // Contacts answer our initial presence right away, so their roster entries must exist
        // before it goes out (RFC 6121 § 2.2).
        let roster = self.roster_service.load_roster().await;
        {
            let mut session = self.ctx.session.lock();
            if session.generation != generation {
                info!("Discarding roster of superseded connection attempt.");
                return Ok(());
            }
            match roster {
                Ok(items) => session.roster.replace_all(items),
                Err(err) => warn!("Failed to load roster. {}", err),
            }
        }

        if let Err(err) = self
            .presence_service
            .send_presence(Availability::Chat, None)
            .await
        {
            warn!("Failed to send initial presence. {}", err);
        }

        let notification_permission = self.notification_service.request_permission().await;
        if !self.ctx.is_current_generation(generation) {
            info!("Discarding superseded connection attempt.");
            return Ok(());
        }

        let markers = SessionMarkers {
            user_id: user_id.clone(),
            full_jid,
            secret,
            is_admin,
        };
        if let Err(err) = self.session_markers_repo.set(&markers).await {
            warn!("Failed to save session markers. {}", err);
        }

        let history = self
            .chat_history_repo
            .load_history(&user_id, self.ctx.config.history_limit)
            .await;

        let rooms = {
            let mut session = self.ctx.session.lock();
            if session.generation != generation {
                info!("Discarding history of superseded connection attempt.");
                return Ok(());
            }

            session.notification_permission = notification_permission;

            match history {
                Ok(chats) => merge_history(&mut session.conversations, chats),
                Err(err) => warn!("Failed to load chat history. {}", err),
            }

            session.status = SessionStatus::Connected;
            group_rooms(&session.conversations, &user_id)
        };

        info!("Connected as {}.", user_id);

        for (room, nickname) in rooms {
            if let Err(err) = self.room_service.enter_room(&room, &nickname).await {
                warn!("Failed to enter room {}. {}", room, err);
            }
        }

        self.dispatch_status(SessionStatus::Connected);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactListChanged);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        Ok(())
    }

    async fn fail(&self, generation: u64, message: String) {
        let status = {
            let mut session = self.ctx.session.lock();
            if session.generation != generation {
                return;
            }
            session.status = SessionStatus::Failed { message };
            session.status.clone()
        };

        self.clear_markers().await;
        self.dispatch_status(status);
    }

    async fn clear_markers(&self) {
        if let Err(err) = self.session_markers_repo.clear().await {
            warn!("Failed to clear session markers. {}", err);
        }
    }

    fn dispatch_status(&self, status: SessionStatus) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionStatusChanged { status });
    }
}

/// Seeds `store` with `history` and re-appends chats and messages that arrived while the history
/// was being loaded.
fn merge_history(store: &mut ConversationStore, history: Vec<Chat>) {
    let live = std::mem::take(store);
    store.seed(history);

    for chat in live.chats() {
        if chat.messages.is_empty() {
            store.insert_chat(chat.clone());
            continue;
        }
        // The unread counter is rebuilt by appending.
        let header = ChatHeader {
            unread_count: 0,
            ..chat.header()
        };
        for message in &chat.messages {
            store.append_message(message.clone(), !message.is_read, || {
                Chat::from_history(header.clone(), vec![])
            });
        }
    }
}

/// The group chats of `store` along with the nickname `account` uses in each of them.
fn group_rooms(store: &ConversationStore, account: &UserId) -> Vec<(ChatId, String)> {
    store
        .chats()
        .iter()
        .filter(|chat| chat.kind == ChatKind::Group)
        .map(|chat| (chat.id.clone(), chat.own_nickname(account).to_string()))
        .collect()
}
