// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::shared::models::{ChatId, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    /// The content is the URL of an image.
    Image,
    /// The content is the URL of a document, see `Message::filename`.
    Document,
}

/// Emojis mapped to the senders who reacted with them.
pub type Reactions = BTreeMap<String, BTreeSet<String>>;

/// Reference to the message a reply was written for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRef {
    pub id: MessageId,
    pub sender: Option<String>,
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    /// Bare address of the sender in one-to-one chats, the sender's nickname in group chats.
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub reactions: Reactions,
    pub kind: ContentKind,
    pub filename: Option<String>,
    pub reply_to: Option<ReplyRef>,
    pub is_forwarded: bool,
}

impl Message {
    /// Replaces the reactions of `sender` with `emojis`, since every reaction stanza carries
    /// the sender's complete set. Returns false if nothing changed.
    pub fn set_reactions(
        &mut self,
        sender: &str,
        emojis: impl IntoIterator<Item = String>,
    ) -> bool {
        let previous = self.reactions.clone();
        for senders in self.reactions.values_mut() {
            senders.remove(sender);
        }
        for emoji in emojis {
            self.reactions
                .entry(emoji)
                .or_default()
                .insert(sender.to_string());
        }
        self.reactions.retain(|_, senders| !senders.is_empty());
        self.reactions != previous
    }

    pub fn reactions_of(&self, sender: &str) -> Vec<String> {
        self.reactions
            .iter()
            .filter(|(_, senders)| senders.contains(sender))
            .map(|(emoji, _)| emoji.clone())
            .collect()
    }

    /// A short single-line excerpt used in notifications and reply references.
    pub fn preview(&self) -> String {
        match self.kind {
            ContentKind::Text => {
                let line = self.content.lines().next().unwrap_or_default();
                if line.chars().count() > 80 {
                    format!("{}…", line.chars().take(80).collect::<String>())
                } else {
                    line.to_string()
                }
            }
            ContentKind::Image => "📷 Image".to_string(),
            ContentKind::Document => format!(
                "📄 {}",
                self.filename.as_deref().unwrap_or("Document")
            ),
        }
    }
}
