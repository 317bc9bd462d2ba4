// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynRosterService};
use crate::domain::contacts::models::{RosterItem, SubscriptionRequest};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ContactsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    roster_service: DynRosterService,
}

impl ContactsService {
    /// Adds `user_id` to the roster and asks for their presence. The roster itself is updated
    /// once the server pushes the new entry.
    pub async fn add_contact(&self, user_id: &UserId, name: Option<String>) -> Result<()> {
        self.roster_service.add_contact(user_id, name).await?;
        self.roster_service.subscribe_to_presence(user_id).await?;
        Ok(())
    }

    pub async fn remove_contact(&self, user_id: &UserId) -> Result<()> {
        self.roster_service.remove_contact(user_id).await
    }

    /// Approves the subscription request of `user_id` and subscribes to their presence in turn.
    pub async fn accept_subscription(&self, user_id: &UserId) -> Result<()> {
        self.roster_service
            .approve_presence_sub_request(user_id)
            .await?;
        self.roster_service.subscribe_to_presence(user_id).await?;
        self.remove_request(user_id);
        Ok(())
    }

    pub async fn decline_subscription(&self, user_id: &UserId) -> Result<()> {
        self.roster_service.deny_presence_sub_request(user_id).await?;
        self.remove_request(user_id);
        Ok(())
    }

    pub fn roster(&self) -> Vec<RosterItem> {
        self.ctx.session.lock().roster.items().to_vec()
    }

    pub fn pending_requests(&self) -> Vec<SubscriptionRequest> {
        self.ctx.session.lock().requests.clone()
    }
}

impl ContactsService {
    fn remove_request(&self, user_id: &UserId) {
        if self.ctx.session.lock().remove_request(user_id) {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::PresenceSubRequestsChanged);
        }
    }
}
