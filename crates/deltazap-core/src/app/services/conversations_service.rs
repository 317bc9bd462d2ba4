// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{info, warn};

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynChatHistoryRepository, DynClientEventDispatcher, DynRoomService,
    DynTimeProvider,
};
use crate::domain::conversations::models::{Chat, ChatKind};
use crate::domain::shared::models::{ChatId, UserId};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ConversationsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    chat_history_repo: DynChatHistoryRepository,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    room_service: DynRoomService,
    #[inject]
    time_provider: DynTimeProvider,
}

impl ConversationsService {
    /// Joins the room `room` using our username as nickname, invites `participants` and adds
    /// the group chat to the chat list.
    pub async fn create_group(
        &self,
        room: &ChatId,
        name: impl Into<String>,
        participants: Vec<UserId>,
    ) -> Result<Chat> {
        let owner = self.ctx.connected_account()?;
        let nickname = owner.username().to_string();

        self.room_service.enter_room(room, &nickname).await?;
        info!("Entered room {} as {}.", room, nickname);

        for participant in &participants {
            self.room_service
                .invite_user(room, participant, None)
                .await?;
        }

        let mut chat = Chat::new(room.clone(), ChatKind::Group, self.time_provider.now());
        chat.name = name.into();
        chat.participants = participants;
        chat.nickname = Some(nickname);

        let chat = self
            .ctx
            .session
            .lock()
            .conversations
            .insert_chat(chat)
            .clone();

        if let Err(err) = self
            .chat_history_repo
            .upsert_chat(&owner, &chat.header())
            .await
        {
            warn!("Failed to save group {}. {}", room, err);
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatListChanged);

        Ok(chat)
    }
}
