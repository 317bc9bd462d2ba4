// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use deltazap_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynAppointmentsRepository};
use crate::domain::content::models::{Appointment, AppointmentDraft};

#[derive(InjectDependencies)]
pub struct AppointmentsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    appointments_repo: DynAppointmentsRepository,
}

impl AppointmentsService {
    pub async fn load_appointments(&self) -> Result<Vec<Appointment>> {
        let owner = self.ctx.connected_account()?;
        self.appointments_repo.get_all(&owner).await
    }

    pub async fn create_appointment(&self, draft: AppointmentDraft) -> Result<Appointment> {
        let owner = self.ctx.connected_account()?;
        self.appointments_repo.insert(&owner, draft).await
    }

    pub async fn update_appointment(&self, id: i64, draft: AppointmentDraft) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.appointments_repo.update(&owner, id, draft).await
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<()> {
        let owner = self.ctx.connected_account()?;
        self.appointments_repo.delete(&owner, id).await
    }
}
