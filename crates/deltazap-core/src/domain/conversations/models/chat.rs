// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::conversations::models::Message;
use crate::domain::shared::models::{ChatId, MessageId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum ChatKind {
    Individual,
    Group,
}

/// Everything about a chat except its messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatHeader {
    pub id: ChatId,
    pub kind: ChatKind,
    pub name: String,
    pub avatar: Option<String>,
    pub participants: Vec<UserId>,
    /// Our own nickname in a group chat.
    pub nickname: Option<String>,
    pub unread_count: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: ChatId,
    pub kind: ChatKind,
    pub name: String,
    pub avatar: Option<String>,
    pub participants: Vec<UserId>,
    pub nickname: Option<String>,
    pub messages: Vec<Message>,
    pub unread_count: u32,
    pub updated_at: DateTime<Utc>,
    seen_ids: HashSet<MessageId>,
}

impl Chat {
    pub fn new(id: ChatId, kind: ChatKind, updated_at: DateTime<Utc>) -> Self {
        let name = id.local_part().to_string();
        Chat {
            id,
            kind,
            name,
            avatar: None,
            participants: vec![],
            nickname: None,
            messages: vec![],
            unread_count: 0,
            updated_at,
            seen_ids: Default::default(),
        }
    }

    /// Rebuilds a chat from persisted history. `messages` must be sorted ascending by time.
    pub fn from_history(header: ChatHeader, messages: Vec<Message>) -> Self {
        let seen_ids = messages.iter().map(|m| m.id.clone()).collect();
        Chat {
            id: header.id,
            kind: header.kind,
            name: header.name,
            avatar: header.avatar,
            participants: header.participants,
            nickname: header.nickname,
            messages,
            unread_count: header.unread_count,
            updated_at: header.updated_at,
            seen_ids,
        }
    }

    pub fn header(&self) -> ChatHeader {
        ChatHeader {
            id: self.id.clone(),
            kind: self.kind,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            participants: self.participants.clone(),
            nickname: self.nickname.clone(),
            unread_count: self.unread_count,
            updated_at: self.updated_at,
        }
    }

    /// The nickname we use in this group. Groups joined without a stored nickname use the
    /// username of `account`, same as the groups we create.
    pub fn own_nickname<'a>(&'a self, account: &'a UserId) -> &'a str {
        self.nickname
            .as_deref()
            .unwrap_or_else(|| account.username())
    }

    /// How `account` appears as sender of messages and reactions in this chat.
    pub fn own_sender(&self, account: &UserId) -> String {
        match self.kind {
            ChatKind::Individual => account.to_string(),
            ChatKind::Group => self.own_nickname(account).to_string(),
        }
    }

    pub fn message(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    pub fn message_mut(&mut self, id: &MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| &m.id == id)
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Appends `message` unless a message with the same id was seen before. Returns whether
    /// the message was appended.
    pub(super) fn push_message(&mut self, message: Message) -> bool {
        if !self.seen_ids.insert(message.id.clone()) {
            return false;
        }
        if message.timestamp > self.updated_at {
            self.updated_at = message.timestamp;
        }
        self.messages.push(message);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_own_sender() {
        let account: UserId = "ana@deltazap.chat".parse().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();

        let chat = Chat::new(
            "bruno@deltazap.chat".parse().unwrap(),
            ChatKind::Individual,
            now,
        );
        assert_eq!(chat.own_sender(&account), "ana@deltazap.chat");

        let mut group = Chat::new(
            "team@groups.deltazap.chat".parse().unwrap(),
            ChatKind::Group,
            now,
        );
        assert_eq!(group.own_sender(&account), "ana");

        group.nickname = Some("anita".to_string());
        assert_eq!(group.own_sender(&account), "anita");
    }

    #[test]
    fn test_unread_count_survives_history_round_trip() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let mut chat = Chat::new(
            "bruno@deltazap.chat".parse().unwrap(),
            ChatKind::Individual,
            now,
        );
        chat.unread_count = 3;

        let restored = Chat::from_history(chat.header(), vec![]);
        assert_eq!(restored.unread_count, 3);
    }
}
