// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynChatHistoryRepository, DynClientEventDispatcher, DynIDProvider,
    DynNotificationService, DynRoomService, DynSessionMarkersRepository, DynTimeProvider,
    DynWindowFocusProvider,
};
use crate::app::event_handlers::{XMPPEvent, XMPPEventHandler};
use crate::domain::session::models::SessionStatus;
use crate::domain::session::reducer::{reduce, Effect, ReduceEnv};
use crate::domain::shared::models::{ServerEvent, UserId};
use crate::infra::xmpp::event_parser::{classify, Context};

/// Classifies inbound events, reduces them into the session state and executes the resulting
/// effects once the lock on the session is released.
#[derive(InjectDependencies)]
pub struct StanzaRouter {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    chat_history_repo: DynChatHistoryRepository,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    id_provider: DynIDProvider,
    #[inject]
    notification_service: DynNotificationService,
    #[inject]
    room_service: DynRoomService,
    #[inject]
    session_markers_repo: DynSessionMarkersRepository,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    window_focus_provider: DynWindowFocusProvider,
}

#[async_trait]
impl XMPPEventHandler for StanzaRouter {
    fn name(&self) -> &'static str {
        "stanza_router"
    }

    async fn handle_event(&self, event: XMPPEvent) -> Result<Option<XMPPEvent>> {
        let now = self.time_provider.now();
        let ctx = Context {
            now,
            id_provider: self.id_provider.as_ref(),
        };

        if let Some(server_event) = classify(&event, &ctx) {
            self.handle_server_event(server_event).await;
        }
        Ok(Some(event))
    }
}

impl StanzaRouter {
    pub async fn handle_server_event(&self, event: ServerEvent) {
        let env = ReduceEnv {
            is_window_focused: self.window_focus_provider.is_window_focused(),
            now: self.time_provider.now(),
        };

        let (effects, account) = {
            let mut session = self.ctx.session.lock();

            if !matches!(event, ServerEvent::Connection(_))
                && matches!(
                    session.status,
                    SessionStatus::Disconnected | SessionStatus::Failed { .. }
                )
            {
                debug!("Ignoring {:?} since there is no session.", event);
                return;
            }

            let effects = reduce(&mut session, event, &env);
            (effects, session.account.clone())
        };

        for effect in effects {
            self.execute(effect, account.as_ref()).await;
        }
    }

    async fn execute(&self, effect: Effect, account: Option<&UserId>) {
        match effect {
            Effect::PersistChat(chat) => {
                let Some(account) = account else {
                    return;
                };
                if let Err(err) = self.chat_history_repo.upsert_chat(account, &chat).await {
                    warn!("Failed to save chat {}. {}", chat.id, err);
                }
            }
            Effect::PersistMessage { chat, message } => {
                let Some(account) = account else {
                    return;
                };
                if let Err(err) = self.chat_history_repo.upsert_chat(account, &chat).await {
                    warn!("Failed to save chat {}. {}", chat.id, err);
                    return;
                }
                if let Err(err) = self
                    .chat_history_repo
                    .append_message(account, &message)
                    .await
                {
                    warn!("Failed to save message {}. {}", message.id, err);
                }
            }
            Effect::UpdateReactions {
                chat_id,
                message_id,
                reactions,
            } => {
                let Some(account) = account else {
                    return;
                };
                if let Err(err) = self
                    .chat_history_repo
                    .update_reactions(account, &chat_id, &message_id, &reactions)
                    .await
                {
                    warn!(
                        "Failed to save reactions of message {} in {}. {}",
                        message_id, chat_id, err
                    );
                }
            }
            Effect::EnterRoom { room, nickname } => {
                if let Err(err) = self.room_service.enter_room(&room, &nickname).await {
                    warn!("Failed to enter room {}. {}", room, err);
                }
            }
            Effect::Notify {
                chat_id,
                title,
                body,
            } => self.notification_service.notify(&chat_id, &title, &body),
            Effect::ClearSessionMarkers => {
                if let Err(err) = self.session_markers_repo.clear().await {
                    warn!("Failed to clear session markers. {}", err);
                }
            }
            Effect::Dispatch(event) => self.client_event_dispatcher.dispatch_event(event),
        }
    }
}
