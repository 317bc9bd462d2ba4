// deltazap-core/deltazap-cli
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::iter::once;

use deltazap_core::dtos::{
    Appointment, Availability, Chat, ChatKind, Demand, InternalLink, Message, Note, RosterItem,
    StatusPost, SubscriptionRequest, SupportMaterial,
};

pub trait StringExt {
    fn truncate_to(&self, new_len: usize) -> String;
}

impl StringExt for str {
    fn truncate_to(&self, new_len: usize) -> String {
        if self.chars().count() <= new_len {
            return self.to_string();
        }
        self.chars().take(new_len - 1).chain(once('…')).collect()
    }
}

pub struct ChatEnvelope<'a>(pub &'a Chat);

impl Display for ChatEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self.0.kind {
            ChatKind::Individual => "💬",
            ChatKind::Group => "👥",
        };
        let unread = if self.0.unread_count > 0 {
            format!("({})", self.0.unread_count)
        } else {
            String::new()
        };
        write!(
            f,
            "{} {:<30} {:>5} | {}",
            kind,
            self.0.name.truncate_to(30),
            unread,
            self.0
                .last_message()
                .map(|m| m.preview())
                .unwrap_or_default()
                .truncate_to(50)
        )
    }
}

pub struct MessageEnvelope<'a>(pub &'a Message);

impl Display for MessageEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = self.0;
        write!(
            f,
            "{} {}: ",
            message.timestamp.format("%d/%m %H:%M"),
            message.sender
        )?;
        if message.is_forwarded {
            write!(f, "[forwarded] ")?;
        }
        if let Some(reply) = &message.reply_to {
            write!(
                f,
                "[↪ {}] ",
                reply.preview.as_deref().unwrap_or("message").truncate_to(30)
            )?;
        }
        write!(f, "{}", message.preview())?;
        for (emoji, senders) in &message.reactions {
            write!(f, " {}{}", emoji, senders.len())?;
        }
        Ok(())
    }
}

pub struct RosterItemEnvelope<'a>(pub &'a RosterItem);

impl Display for RosterItemEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let indicator = match self.0.availability {
            Availability::Chat => "🟢",
            Availability::Away | Availability::Xa => "🟠",
            Availability::Dnd => "🔴",
            Availability::Unavailable => "⚪",
        };
        write!(
            f,
            "{} {:<25} | {:<35} | {:<5} | {}",
            indicator,
            self.0.display_name().truncate_to(25),
            self.0.user_id.to_string().truncate_to(35),
            self.0.subscription,
            self.0.status.as_deref().unwrap_or_default()
        )
    }
}

pub struct RequestEnvelope<'a>(pub &'a SubscriptionRequest);

impl Display for RequestEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0.name {
            Some(name) => write!(f, "{} <{}>", name, self.0.user_id),
            None => write!(f, "{}", self.0.user_id),
        }
    }
}

pub struct NoteEnvelope<'a>(pub &'a Note);

impl Display for NoteEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<4} {:<25} | {:<40} | {}",
            self.0.id,
            self.0.title.truncate_to(25),
            self.0.content.truncate_to(40),
            self.0.updated_at.format("%d/%m/%Y %H:%M")
        )
    }
}

pub struct AppointmentEnvelope<'a>(pub &'a Appointment);

impl Display for AppointmentEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<4} {} | {:<30} | {}",
            self.0.id,
            self.0.starts_at.format("%d/%m/%Y %H:%M"),
            self.0.title.truncate_to(30),
            self.0.location.as_deref().unwrap_or_default()
        )
    }
}

pub struct DemandEnvelope<'a>(pub &'a Demand);

impl Display for DemandEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<4} {:<14} | {:<30} | {}",
            self.0.id,
            self.0.status,
            self.0.title.truncate_to(30),
            self.0.description.truncate_to(40)
        )
    }
}

pub struct StatusEnvelope<'a>(pub &'a StatusPost);

impl Display for StatusEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<30} | {} | {}",
            self.0.owner.to_string().truncate_to(30),
            self.0.created_at.format("%d/%m %H:%M"),
            self.0.content
        )
    }
}

pub struct SupportMaterialEnvelope<'a>(pub &'a SupportMaterial);

impl Display for SupportMaterialEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "📚 #{:<4} {:<30} | {}",
            self.0.id,
            self.0.title.truncate_to(30),
            self.0.url
        )
    }
}

pub struct InternalLinkEnvelope<'a>(pub &'a InternalLink);

impl Display for InternalLinkEnvelope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "🔗 #{:<4} {:<30} | {}",
            self.0.id,
            self.0.title.truncate_to(30),
            self.0.url
        )
    }
}
