// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::DynPresenceService;
use crate::domain::presence::models::HumanStatus;
use crate::domain::shared::models::Availability;

#[derive(InjectDependencies)]
pub struct PresenceService {
    #[inject]
    presence_service: DynPresenceService,
}

impl PresenceService {
    /// Publishes `status`. `Invisible` goes out as an unavailable presence.
    pub async fn send_presence(
        &self,
        status: HumanStatus,
        status_text: Option<String>,
    ) -> Result<()> {
        match Availability::from(status) {
            Availability::Unavailable => {
                self.presence_service
                    .send_unavailable_presence(status_text)
                    .await
            }
            availability => {
                self.presence_service
                    .send_presence(availability, status_text)
                    .await
            }
        }
    }

    pub async fn send_unavailable_presence(&self) -> Result<()> {
        self.presence_service.send_unavailable_presence(None).await
    }
}
