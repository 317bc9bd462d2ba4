// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use appointment::{Appointment, AppointmentDraft};
pub use demand::{Demand, DemandDraft, DemandStatus};
pub use errors::ContentError;
pub use library::{InternalLink, InternalLinkDraft, SupportMaterial, SupportMaterialDraft};
pub use note::{Note, NoteDraft, NOTE_COLORS};
pub use status_post::StatusPost;

mod appointment;
mod demand;
mod errors;
mod library;
mod note;
mod status_post;
