// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::app::services::SendOutcome;
pub use crate::domain::{
    contacts::models::{RosterItem, Subscription, SubscriptionRequest},
    content::models::{
        Appointment, AppointmentDraft, ContentError, Demand, DemandDraft, DemandStatus,
        InternalLink, InternalLinkDraft, Note, NoteDraft, StatusPost, SupportMaterial,
        SupportMaterialDraft,
    },
    conversations::models::{Chat, ChatKind, ContentKind, Message, ReplyRef},
    presence::models::HumanStatus,
    session::models::{LoginError, NotificationPermission, SessionStatus},
    shared::models::{Availability, ChatId, MessageId, UserId},
};
